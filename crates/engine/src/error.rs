//! The module contains the errors the engine can throw.
//!
//! `KeyNotFound` covers every lookup miss (group, member, expense);
//! `InvalidAmount` and `InvalidExpense` cover expense validation;
//! `MemberInUse` protects members that still appear in expenses.

use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("Member in use: {0}")]
    MemberInUse(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
}
