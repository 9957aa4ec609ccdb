//! Request and response types of the splitpot HTTP API.
//!
//! Monetary fields are `rust_decimal::Decimal` and serialize as JSON
//! strings at display precision ("50.00", never 50 or 50.0), so clients
//! see exactly the figures the engine rounded.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod health {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
    }
}

pub mod group {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupNew {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupView {
        pub id: Uuid,
        pub name: String,
        pub members: Vec<super::member::MemberView>,
        pub expenses: Vec<super::expense::ExpenseView>,
        pub created_at: DateTime<Utc>,
    }
}

pub mod member {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemberNew {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemberView {
        pub id: Uuid,
        pub name: String,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub description: String,
        pub amount: Decimal,
        pub payer_id: Uuid,
        pub participant_ids: Vec<Uuid>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: Uuid,
        pub description: String,
        pub amount: Decimal,
        pub payer_id: Uuid,
        pub participant_ids: Vec<Uuid>,
        pub created_at: DateTime<Utc>,
    }
}

pub mod balance {
    use super::*;

    /// One member's position: net positive means others owe them.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalanceView {
        pub member_id: Uuid,
        pub member_name: String,
        pub total_paid: Decimal,
        pub total_owed: Decimal,
        pub net_balance: Decimal,
    }
}

pub mod settlement {
    use super::*;

    /// A directed transfer: `from` (debtor) pays `to` (creditor).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SettlementView {
        pub from_member_id: Uuid,
        pub from_member_name: String,
        pub to_member_id: Uuid,
        pub to_member_name: String,
        pub amount: Decimal,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SettlementPlanView {
        pub group_id: Uuid,
        pub group_name: String,
        pub settlements: Vec<SettlementView>,
        pub transaction_count: usize,
    }
}
