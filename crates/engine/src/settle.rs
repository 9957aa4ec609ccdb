//! Debt simplification: turns a group's net balances into a short list of
//! point-to-point transfers.
//!
//! Deterministic greedy matching: repeatedly pair the creditor and the
//! debtor with the largest remaining amounts and transfer the smaller of
//! the two. Every iteration extinguishes at least one party (remaining
//! amounts at or below the tolerance are dropped), so the loop runs at
//! most creditors + debtors - 1 times. The plan is correct (it settles
//! every balance) but not guaranteed minimal; minimum transaction count
//! is an NP-hard partition problem.
//!
//! Ties on "largest remaining amount" go to the party whose member
//! appears earliest in the group's member list. Candidate vectors are
//! built in member-list order and the max scan only replaces on a
//! strictly greater amount, so the rule costs nothing extra.

use serde::Serialize;
use uuid::Uuid;

use crate::{
    balance,
    group::{Expense, Member},
    money::Money,
};

/// A single directed transfer: `from` (a debtor) pays `to` (a creditor).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub from_member_id: Uuid,
    pub from_member_name: String,
    pub to_member_id: Uuid,
    pub to_member_name: String,
    pub amount: Money,
}

/// The full ordered transfer list that zeroes out a group's balances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SettlementPlan {
    pub group_id: Uuid,
    pub group_name: String,
    pub settlements: Vec<Settlement>,
    pub transaction_count: usize,
}

/// Remaining amount of one party, keyed by position in the member list so
/// names can be resolved without another lookup.
struct Party {
    member_index: usize,
    remaining: Money,
}

/// Computes the settlement plan for a group snapshot.
///
/// Pure function of its input: balances are recomputed from the expense
/// list, classified against the ±0.01 tolerance, and matched greedily.
/// Empty member or expense lists produce an empty plan.
pub fn settlement_plan(
    group_id: Uuid,
    group_name: &str,
    members: &[Member],
    expenses: &[Expense],
) -> SettlementPlan {
    let mut settlements = Vec::new();

    if !members.is_empty() && !expenses.is_empty() {
        let nets = balance::net_balances(members, expenses);
        let tolerance = Money::tolerance();

        let mut creditors: Vec<Party> = Vec::new();
        let mut debtors: Vec<Party> = Vec::new();
        for (member_index, member) in members.iter().enumerate() {
            let Some(net) = nets.get(&member.id).copied() else {
                continue;
            };
            if net > tolerance {
                creditors.push(Party {
                    member_index,
                    remaining: net,
                });
            } else if net < -tolerance {
                debtors.push(Party {
                    member_index,
                    remaining: net.abs(),
                });
            }
        }

        while !creditors.is_empty() && !debtors.is_empty() {
            let creditor_index = index_of_max(&creditors);
            let debtor_index = index_of_max(&debtors);

            let transfer = creditors[creditor_index]
                .remaining
                .min(debtors[debtor_index].remaining)
                .round_display();

            if transfer > tolerance {
                let from = &members[debtors[debtor_index].member_index];
                let to = &members[creditors[creditor_index].member_index];
                settlements.push(Settlement {
                    from_member_id: from.id,
                    from_member_name: from.name.clone(),
                    to_member_id: to.id,
                    to_member_name: to.name.clone(),
                    amount: transfer,
                });
            }

            creditors[creditor_index].remaining -= transfer;
            debtors[debtor_index].remaining -= transfer;

            if creditors[creditor_index].remaining <= tolerance {
                creditors.remove(creditor_index);
            }
            if debtors[debtor_index].remaining <= tolerance {
                debtors.remove(debtor_index);
            }
        }
    }

    SettlementPlan {
        group_id,
        group_name: group_name.to_string(),
        transaction_count: settlements.len(),
        settlements,
    }
}

/// Index of the party with the largest remaining amount. Replaces only on
/// strictly greater, so the earliest party wins ties.
fn index_of_max(parties: &[Party]) -> usize {
    let mut best = 0;
    for (index, party) in parties.iter().enumerate().skip(1) {
        if party.remaining > parties[best].remaining {
            best = index;
        }
    }
    best
}
