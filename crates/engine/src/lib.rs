//! Shared-expense engine: groups of members and expenses, with derived
//! balances and settlement plans.
//!
//! The algorithmic core lives in [`balance`] and [`settle`] as pure
//! functions over immutable snapshots. [`Engine`] is the owning store the
//! service layer talks to; callers wanting concurrent access wrap it in
//! their own lock and thereby hand each computation a consistent
//! snapshot.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

pub use balance::Balance;
pub use error::EngineError;
pub use group::{Expense, Group, Member};
pub use money::Money;
pub use settle::{Settlement, SettlementPlan};

pub mod balance;
mod error;
mod group;
mod money;
pub mod settle;

type ResultEngine<T> = Result<T, EngineError>;

/// Owns every group. All operations are synchronous and total over
/// well-formed input; lookups miss with [`EngineError::KeyNotFound`].
#[derive(Debug, Default)]
pub struct Engine {
    groups: HashMap<Uuid, Group>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn group_ref(&self, group_id: Uuid) -> ResultEngine<&Group> {
        self.groups
            .get(&group_id)
            .ok_or_else(|| EngineError::KeyNotFound(group_id.to_string()))
    }

    fn group_mut(&mut self, group_id: Uuid) -> ResultEngine<&mut Group> {
        self.groups
            .get_mut(&group_id)
            .ok_or_else(|| EngineError::KeyNotFound(group_id.to_string()))
    }

    fn validated_name(name: &str) -> ResultEngine<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidName("name must not be empty".to_string()));
        }
        if name.len() > 100 {
            return Err(EngineError::InvalidName("name too long".to_string()));
        }
        Ok(name.to_string())
    }

    // === Groups ===

    pub fn new_group(&mut self, name: &str) -> ResultEngine<Group> {
        let group = Group::new(Self::validated_name(name)?);
        self.groups.insert(group.id, group.clone());
        Ok(group)
    }

    pub fn group(&self, group_id: Uuid) -> ResultEngine<&Group> {
        self.group_ref(group_id)
    }

    /// All groups, oldest first.
    pub fn groups(&self) -> Vec<&Group> {
        let mut groups: Vec<&Group> = self.groups.values().collect();
        groups.sort_by_key(|group| (group.created_at, group.id));
        groups
    }

    pub fn delete_group(&mut self, group_id: Uuid) -> ResultEngine<()> {
        self.groups
            .remove(&group_id)
            .map(|_| ())
            .ok_or_else(|| EngineError::KeyNotFound(group_id.to_string()))
    }

    // === Members ===

    pub fn add_member(&mut self, group_id: Uuid, name: &str) -> ResultEngine<Member> {
        let name = Self::validated_name(name)?;
        let group = self.group_mut(group_id)?;
        let member = Member::new(name);
        group.members.push(member.clone());
        Ok(member)
    }

    pub fn members(&self, group_id: Uuid) -> ResultEngine<&[Member]> {
        Ok(&self.group_ref(group_id)?.members)
    }

    pub fn member(&self, group_id: Uuid, member_id: Uuid) -> ResultEngine<&Member> {
        self.group_ref(group_id)?
            .find_member(member_id)
            .ok_or_else(|| EngineError::KeyNotFound(member_id.to_string()))
    }

    /// Removes a member. Members still appearing in expenses cannot be
    /// removed; their balances would silently vanish.
    pub fn remove_member(&mut self, group_id: Uuid, member_id: Uuid) -> ResultEngine<()> {
        let group = self.group_mut(group_id)?;
        if !group.has_member(member_id) {
            return Err(EngineError::KeyNotFound(member_id.to_string()));
        }
        if group.member_involved_in_expenses(member_id) {
            return Err(EngineError::MemberInUse(member_id.to_string()));
        }
        group.remove_member(member_id);
        Ok(())
    }

    // === Expenses ===

    /// Records an expense after validating the snapshot invariants the
    /// core relies on: positive amount at display precision, known payer,
    /// non-empty duplicate-free list of known participants.
    pub fn add_expense(
        &mut self,
        group_id: Uuid,
        description: &str,
        amount: Decimal,
        payer_id: Uuid,
        participant_ids: &[Uuid],
    ) -> ResultEngine<Expense> {
        let description = description.trim();
        if description.is_empty() {
            return Err(EngineError::InvalidExpense(
                "description must not be empty".to_string(),
            ));
        }
        let amount = Money::from_amount(amount)?;
        let group = self.group_mut(group_id)?;

        if !group.has_member(payer_id) {
            return Err(EngineError::InvalidExpense(format!(
                "payer {payer_id} is not a member of the group"
            )));
        }
        if participant_ids.is_empty() {
            return Err(EngineError::InvalidExpense(
                "at least one participant is required".to_string(),
            ));
        }
        for (index, participant_id) in participant_ids.iter().enumerate() {
            if !group.has_member(*participant_id) {
                return Err(EngineError::InvalidExpense(format!(
                    "participant {participant_id} is not a member of the group"
                )));
            }
            if participant_ids[..index].contains(participant_id) {
                return Err(EngineError::InvalidExpense(format!(
                    "duplicate participant {participant_id}"
                )));
            }
        }

        let expense = Expense::new(
            description.to_string(),
            amount,
            payer_id,
            participant_ids.to_vec(),
        );
        group.expenses.push(expense.clone());
        Ok(expense)
    }

    pub fn expenses(&self, group_id: Uuid) -> ResultEngine<&[Expense]> {
        Ok(&self.group_ref(group_id)?.expenses)
    }

    pub fn expense(&self, group_id: Uuid, expense_id: Uuid) -> ResultEngine<&Expense> {
        self.group_ref(group_id)?
            .find_expense(expense_id)
            .ok_or_else(|| EngineError::KeyNotFound(expense_id.to_string()))
    }

    pub fn delete_expense(&mut self, group_id: Uuid, expense_id: Uuid) -> ResultEngine<()> {
        let group = self.group_mut(group_id)?;
        if !group.remove_expense(expense_id) {
            return Err(EngineError::KeyNotFound(expense_id.to_string()));
        }
        Ok(())
    }

    // === Derived views ===

    /// Per-member balances, recomputed from the current expense list.
    pub fn balances(&self, group_id: Uuid) -> ResultEngine<Vec<Balance>> {
        let group = self.group_ref(group_id)?;
        Ok(balance::compute_balances(&group.members, &group.expenses))
    }

    /// Net balance per member id, the debt simplifier's input.
    pub fn net_balances(&self, group_id: Uuid) -> ResultEngine<HashMap<Uuid, Money>> {
        let group = self.group_ref(group_id)?;
        Ok(balance::net_balances(&group.members, &group.expenses))
    }

    /// Greedy settlement plan for the group's current snapshot.
    pub fn settlement_plan(&self, group_id: Uuid) -> ResultEngine<SettlementPlan> {
        let group = self.group_ref(group_id)?;
        Ok(settle::settlement_plan(
            group.id,
            &group.name,
            &group.members,
            &group.expenses,
        ))
    }
}
