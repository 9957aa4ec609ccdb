//! A `Group` holds the members and expenses of one shared pot. Balances
//! and settlements are derived from it on demand and never stored.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::money::Money;

/// A person taking part in a group. Identity is the id; the name is
/// informational only and never deduplicated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
}

impl Member {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}

/// A single recorded payment: the payer fronted `amount`, split equally
/// across the participants. The payer need not be a participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: Money,
    pub payer_id: Uuid,
    pub participant_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        description: String,
        amount: Money,
        payer_id: Uuid,
        participant_ids: Vec<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            amount,
            payer_id,
            participant_ids,
            created_at: Utc::now(),
        }
    }

    /// Whether the member appears as payer or participant.
    pub fn involves(&self, member_id: Uuid) -> bool {
        self.payer_id == member_id || self.participant_ids.contains(&member_id)
    }
}

/// Members and expenses of one pot.
#[derive(Clone, Debug, Serialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub members: Vec<Member>,
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
}

impl Group {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            members: Vec::new(),
            expenses: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn has_member(&self, member_id: Uuid) -> bool {
        self.members.iter().any(|member| member.id == member_id)
    }

    pub fn find_member(&self, member_id: Uuid) -> Option<&Member> {
        self.members.iter().find(|member| member.id == member_id)
    }

    pub fn find_expense(&self, expense_id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == expense_id)
    }

    /// Whether the member appears in any expense, as payer or participant.
    pub fn member_involved_in_expenses(&self, member_id: Uuid) -> bool {
        self.expenses
            .iter()
            .any(|expense| expense.involves(member_id))
    }

    /// Removes the member; returns `false` when the id is unknown.
    pub fn remove_member(&mut self, member_id: Uuid) -> bool {
        let before = self.members.len();
        self.members.retain(|member| member.id != member_id);
        self.members.len() != before
    }

    /// Removes the expense; returns `false` when the id is unknown.
    pub fn remove_expense(&mut self, expense_id: Uuid) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != expense_id);
        self.expenses.len() != before
    }
}
