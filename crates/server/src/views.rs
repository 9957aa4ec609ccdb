//! Conversions from engine types to API views.
//!
//! Monetary values cross the boundary display-rounded, so the wire always
//! carries exactly two decimals.

use api_types::{
    balance::BalanceView,
    expense::ExpenseView,
    group::GroupView,
    member::MemberView,
    settlement::{SettlementPlanView, SettlementView},
};
use engine::{Balance, Expense, Group, Member, SettlementPlan};

pub fn member(member: &Member) -> MemberView {
    MemberView {
        id: member.id,
        name: member.name.clone(),
    }
}

pub fn expense(expense: &Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        description: expense.description.clone(),
        amount: expense.amount.as_decimal(),
        payer_id: expense.payer_id,
        participant_ids: expense.participant_ids.clone(),
        created_at: expense.created_at,
    }
}

pub fn group(group: &Group) -> GroupView {
    GroupView {
        id: group.id,
        name: group.name.clone(),
        members: group.members.iter().map(member).collect(),
        expenses: group.expenses.iter().map(expense).collect(),
        created_at: group.created_at,
    }
}

pub fn balance(balance: &Balance) -> BalanceView {
    BalanceView {
        member_id: balance.member_id,
        member_name: balance.member_name.clone(),
        total_paid: balance.total_paid.as_decimal(),
        total_owed: balance.total_owed.as_decimal(),
        net_balance: balance.net_balance.as_decimal(),
    }
}

pub fn settlement_plan(plan: &SettlementPlan) -> SettlementPlanView {
    SettlementPlanView {
        group_id: plan.group_id,
        group_name: plan.group_name.clone(),
        settlements: plan
            .settlements
            .iter()
            .map(|settlement| SettlementView {
                from_member_id: settlement.from_member_id,
                from_member_name: settlement.from_member_name.clone(),
                to_member_id: settlement.to_member_id,
                to_member_name: settlement.to_member_name.clone(),
                amount: settlement.amount.as_decimal(),
            })
            .collect(),
        transaction_count: plan.transaction_count,
    }
}
