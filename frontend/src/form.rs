use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    error::FormErrors,
    models::{Expense, ExpensePayload, PaymentMethod},
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// What the user has typed so far. Every input is kept as its raw string value.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub category_id: String,
    pub name: String,
    pub amount: String,
    pub method: PaymentMethod,
    pub date: String,
}

impl ExpenseDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            category_id: String::new(),
            name: String::new(),
            amount: String::new(),
            method: PaymentMethod::Cash,
            date: today.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            category_id: expense
                .category_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            name: expense.name.clone(),
            amount: expense.amount.normalize().to_string(),
            method: expense.method,
            date: expense.date.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn for_initial(initial: Option<&Expense>, today: NaiveDate) -> Self {
        match initial {
            Some(expense) => Self::from_expense(expense),
            None => Self::new(today),
        }
    }

    /// Returns every problem found, keyed by the payload field it belongs to, so the form
    /// can show them the same way it shows server-side validation errors.
    pub fn to_payload(&self, household_id: Option<i64>) -> Result<ExpensePayload, FormErrors> {
        let mut errors = FormErrors::new();

        let category_id = match self.category_id.trim() {
            "" => {
                errors.add("category_id", "The category field is required.");
                None
            }
            raw => match raw.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("category_id", "The selected category is invalid.");
                    None
                }
            },
        };

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "The name field is required.");
        }

        let amount = match self.amount.trim() {
            "" => {
                errors.add("amount", "The amount field is required.");
                None
            }
            raw => match Decimal::from_str(raw) {
                Ok(amount) if amount.is_sign_negative() && !amount.is_zero() => {
                    errors.add("amount", "The amount must be at least 0.");
                    None
                }
                Ok(amount) => Some(amount),
                Err(_) => {
                    errors.add("amount", "The amount must be a number.");
                    None
                }
            },
        };

        let date = match NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.add("date", "The date is not a valid date.");
                None
            }
        };

        match (category_id, amount, date) {
            (Some(category_id), Some(amount), Some(date)) if errors.is_empty() => Ok(ExpensePayload {
                category_id,
                name: name.to_string(),
                amount,
                method: self.method,
                date,
                household_id,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn filled_draft() -> ExpenseDraft {
        ExpenseDraft {
            category_id: "3".to_string(),
            name: "  Groceries ".to_string(),
            amount: "42.10".to_string(),
            method: PaymentMethod::CreditCard,
            date: "2024-06-01".to_string(),
        }
    }

    fn expense() -> Expense {
        Expense {
            id: 11,
            household_id: Some(1),
            user_id: Some(2),
            category_id: Some(4),
            category: None,
            name: "Rent".to_string(),
            amount: Decimal::from_str("950.00").unwrap(),
            method: PaymentMethod::CreditCard,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn new_draft_defaults_to_cash_today() {
        let draft = ExpenseDraft::new(today());

        assert_eq!(draft.method, PaymentMethod::Cash);
        assert_eq!(draft.date, "2024-06-15");
        assert!(draft.amount.is_empty());
        assert!(draft.category_id.is_empty());
    }

    #[test]
    fn draft_is_seeded_from_initial_expense() {
        let draft = ExpenseDraft::for_initial(Some(&expense()), today());

        assert_eq!(draft.category_id, "4");
        assert_eq!(draft.name, "Rent");
        assert_eq!(draft.amount, "950");
        assert_eq!(draft.method, PaymentMethod::CreditCard);
        assert_eq!(draft.date, "2024-06-01");
    }

    #[test]
    fn seeded_draft_converts_back_to_the_same_values() {
        let original = expense();
        let payload = ExpenseDraft::from_expense(&original).to_payload(None).unwrap();

        assert_eq!(payload.category_id, 4);
        assert_eq!(payload.amount, original.amount);
        assert_eq!(payload.date, original.date);
    }

    #[test]
    fn coerces_fields_into_payload() {
        let payload = filled_draft().to_payload(Some(1)).unwrap();

        assert_eq!(
            payload,
            ExpensePayload {
                category_id: 3,
                name: "Groceries".to_string(),
                amount: Decimal::from_str("42.10").unwrap(),
                method: PaymentMethod::CreditCard,
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                household_id: Some(1),
            }
        );
    }

    #[test]
    fn blank_draft_reports_every_required_field() {
        let mut draft = ExpenseDraft::new(today());
        draft.date = String::new();

        let errors = draft.to_payload(None).unwrap_err();

        assert_eq!(errors.field("category_id").as_deref(), Some("The category field is required."));
        assert_eq!(errors.field("name").as_deref(), Some("The name field is required."));
        assert_eq!(errors.field("amount").as_deref(), Some("The amount field is required."));
        assert_eq!(errors.field("date").as_deref(), Some("The date is not a valid date."));
    }

    #[test]
    fn rejects_non_numeric_and_negative_amounts() {
        let mut draft = filled_draft();
        draft.amount = "ten".to_string();
        assert_eq!(
            draft.to_payload(None).unwrap_err().field("amount").as_deref(),
            Some("The amount must be a number.")
        );

        draft.amount = "-5".to_string();
        assert_eq!(
            draft.to_payload(None).unwrap_err().field("amount").as_deref(),
            Some("The amount must be at least 0.")
        );
    }

    #[test]
    fn zero_amount_is_allowed() {
        let mut draft = filled_draft();
        draft.amount = "0".to_string();

        assert_eq!(draft.to_payload(None).unwrap().amount, Decimal::ZERO);
    }
}
