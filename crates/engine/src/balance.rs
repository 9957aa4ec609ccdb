//! Balance aggregation: folds a group's expense list into one
//! (paid, owed, net) record per member.
//!
//! The fold accumulates shares at guard precision (see [`Money::share`])
//! and only rounds to display precision at the very end. Paid, owed and
//! net are each rounded independently, with net derived from the rounded
//! figures so the published numbers stay internally consistent
//! (paid = owed + net exactly, at display precision).

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    group::{Expense, Member},
    money::Money,
};

/// Derived per-member position. Recomputed from the expense list on every
/// request; never cached across mutations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub member_id: Uuid,
    pub member_name: String,
    pub total_paid: Money,
    pub total_owed: Money,
    pub net_balance: Money,
}

/// Computes one balance per member, in member-list order.
///
/// The payer is credited the full expense amount even when not a
/// participant. Payers and participants missing from the member list are
/// skipped silently: membership validation belongs to the caller, the
/// aggregator is total over whatever snapshot it receives.
pub fn compute_balances(members: &[Member], expenses: &[Expense]) -> Vec<Balance> {
    if members.is_empty() {
        return Vec::new();
    }

    let mut total_paid: HashMap<Uuid, Money> = members
        .iter()
        .map(|member| (member.id, Money::ZERO))
        .collect();
    let mut total_owed = total_paid.clone();

    for expense in expenses {
        if let Some(paid) = total_paid.get_mut(&expense.payer_id) {
            *paid += expense.amount;
        }

        let Some(share) = expense.amount.share(expense.participant_ids.len()) else {
            // Zero participants violates an upstream invariant; skip the
            // expense rather than divide by zero.
            continue;
        };
        for participant_id in &expense.participant_ids {
            if let Some(owed) = total_owed.get_mut(participant_id) {
                *owed += share;
            }
        }
    }

    members
        .iter()
        .map(|member| {
            let paid = total_paid[&member.id].round_display();
            let owed = total_owed[&member.id].round_display();
            Balance {
                member_id: member.id,
                member_name: member.name.clone(),
                total_paid: paid,
                total_owed: owed,
                net_balance: (paid - owed).round_display(),
            }
        })
        .collect()
}

/// Reduced view for the debt simplifier: member id to net balance.
pub fn net_balances(members: &[Member], expenses: &[Expense]) -> HashMap<Uuid, Money> {
    compute_balances(members, expenses)
        .into_iter()
        .map(|balance| (balance.member_id, balance.net_balance))
        .collect()
}
