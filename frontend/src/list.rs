use std::rc::Rc;

use yew::Reducible;

use crate::models::Expense;

/// Hands out increasing tickets so only the newest fetch's result is shown.
#[derive(Debug, Default)]
pub struct RequestSequence(u64);

impl RequestSequence {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListState {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub error: Option<String>,
    /// Ticket of the fetch whose result will be accepted.
    current: u64,
}

pub enum ListAction {
    Started(u64),
    Loaded { ticket: u64, expenses: Vec<Expense> },
    Failed { ticket: u64, message: String },
}

impl ListState {
    pub fn apply(&self, action: ListAction) -> Self {
        match action {
            ListAction::Started(ticket) => Self {
                loading: true,
                error: None,
                current: ticket,
                ..self.clone()
            },
            ListAction::Loaded { ticket, .. } | ListAction::Failed { ticket, .. }
                if ticket != self.current =>
            {
                log::debug!("discarding stale response for request {ticket}");
                self.clone()
            }
            ListAction::Loaded { expenses, .. } => Self {
                expenses,
                loading: false,
                error: None,
                current: self.current,
            },
            ListAction::Failed { message, .. } => Self {
                loading: false,
                error: Some(message),
                ..self.clone()
            },
        }
    }
}

impl Reducible for ListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// `window.confirm`; answers no when there is no window.
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// The id to delete, if the user agrees to delete `expense`.
pub fn confirm_delete(confirm: &impl Confirm, expense: &Expense) -> Option<i64> {
    let message = if expense.name.is_empty() {
        "Are you sure you want to delete this expense?".to_string()
    } else {
        format!("Are you sure you want to delete \"{}\"?", expense.name)
    };

    confirm.confirm(&message).then_some(expense.id)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::PaymentMethod;

    fn expense(id: i64) -> Expense {
        Expense {
            id,
            household_id: None,
            user_id: None,
            category_id: None,
            category: None,
            name: "Taxi".to_string(),
            amount: Decimal::from(12),
            method: PaymentMethod::Cash,
            date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn tickets_increase() {
        let mut sequence = RequestSequence::default();

        let first = sequence.next();
        let second = sequence.next();

        assert!(second > first);
    }

    #[test]
    fn loaded_results_replace_the_list() {
        let state = ListState::default()
            .apply(ListAction::Started(1))
            .apply(ListAction::Loaded {
                ticket: 1,
                expenses: vec![expense(1), expense(2)],
            });

        assert!(!state.loading);
        assert_eq!(state.expenses.len(), 2);
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_one() {
        let state = ListState::default()
            .apply(ListAction::Started(1))
            .apply(ListAction::Started(2))
            .apply(ListAction::Loaded {
                ticket: 2,
                expenses: vec![expense(20)],
            })
            .apply(ListAction::Loaded {
                ticket: 1,
                expenses: vec![expense(10)],
            });

        assert_eq!(state.expenses, vec![expense(20)]);
    }

    #[test]
    fn stale_failure_is_ignored_while_newer_fetch_loads() {
        let state = ListState::default()
            .apply(ListAction::Started(1))
            .apply(ListAction::Started(2))
            .apply(ListAction::Failed {
                ticket: 1,
                message: "boom".to_string(),
            });

        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failure_keeps_previous_rows_and_reports_message() {
        let state = ListState::default()
            .apply(ListAction::Started(1))
            .apply(ListAction::Loaded {
                ticket: 1,
                expenses: vec![expense(1)],
            })
            .apply(ListAction::Started(2))
            .apply(ListAction::Failed {
                ticket: 2,
                message: "network error".to_string(),
            });

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("network error"));
        assert_eq!(state.expenses.len(), 1);
    }

    #[test]
    fn declined_confirmation_yields_no_delete() {
        let asked = Cell::new(0);
        let decline = |_: &str| {
            asked.set(asked.get() + 1);
            false
        };

        assert_eq!(confirm_delete(&decline, &expense(4)), None);
        assert_eq!(asked.get(), 1);
    }

    #[test]
    fn accepted_confirmation_yields_the_id() {
        let accept = |message: &str| message.contains("Taxi");

        assert_eq!(confirm_delete(&accept, &expense(4)), Some(4));
    }
}
