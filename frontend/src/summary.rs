use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Expense, PaymentMethod};

/// Sums over the currently loaded expenses. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub total: Decimal,
    pub cash: Decimal,
    pub credit: Decimal,
}

impl Totals {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut totals = Totals::default();
        for expense in expenses {
            match expense.method {
                PaymentMethod::Cash => totals.cash += expense.amount,
                PaymentMethod::CreditCard => totals.credit += expense.amount,
            }
        }
        totals.total = totals.cash + totals.credit;
        totals
    }
}

fn format_with_commas(value: &str) -> String {
    let digits = value.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// US dollar formatting, e.g. `$1,234.50` or `-$3.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}${}.{}", sign, format_with_commas(whole), cents)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;

    use super::*;

    fn expense(id: i64, amount: &str, method: PaymentMethod) -> Expense {
        Expense {
            id,
            household_id: None,
            user_id: None,
            category_id: None,
            category: None,
            name: String::new(),
            amount: Decimal::from_str(amount).unwrap(),
            method,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn splits_totals_by_method() {
        let expenses = vec![
            expense(1, "10.10", PaymentMethod::Cash),
            expense(2, "0.20", PaymentMethod::CreditCard),
            expense(3, "5.05", PaymentMethod::Cash),
        ];

        let totals = Totals::from_expenses(&expenses);

        assert_eq!(totals.cash, Decimal::from_str("15.15").unwrap());
        assert_eq!(totals.credit, Decimal::from_str("0.20").unwrap());
        assert_eq!(totals.total, totals.cash + totals.credit);
        assert_eq!(totals.total, Decimal::from_str("15.35").unwrap());
    }

    #[test]
    fn empty_set_sums_to_zero() {
        assert_eq!(Totals::from_expenses(&[]), Totals::default());
    }

    #[test]
    fn formats_dollars() {
        assert_eq!(format_currency(Decimal::from_str("1234.5").unwrap()), "$1,234.50");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(format_currency(Decimal::from_str("999").unwrap()), "$999.00");
        assert_eq!(format_currency(Decimal::from_str("1000000.005").unwrap()), "$1,000,000.01");
        assert_eq!(format_currency(Decimal::from_str("-3").unwrap()), "-$3.00");
    }
}
