use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    CreditCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::CreditCard];

    /// Value used in `<select>` options and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CreditCard => "credit_card",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == value)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    #[serde(default)]
    pub household_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Free-text category used by records created before categories existed.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub name: String,
    pub amount: Decimal,
    #[serde(alias = "type")]
    pub method: PaymentMethod,
    #[serde(deserialize_with = "calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Accepts `2024-05-01` as well as full timestamps such as `2024-05-01T00:00:00.000000Z`.
fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let date_part = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpensePayload {
    pub category_id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub household_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// The `{ "data": ... }` envelope the resource endpoints wrap their results in.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub household_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Household {
    pub id: i64,
    pub name: String,
    /// Code other users enter to join this household.
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub household: Option<Household>,
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Whether a new user founds a household or joins an existing one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "household_action", rename_all = "lowercase")]
pub enum HouseholdChoice {
    Create { household_name: String },
    Join { household_code: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(flatten)]
    pub household: HouseholdChoice,
}
