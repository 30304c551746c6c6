use serde::Serialize;

use crate::{
    error::ApiError,
    modal::{SaveRequest, SaveTarget},
    models::{Envelope, Expense, ExpensePayload},
};

use super::{bearer, decode, is_success, read, ApiClient};

#[derive(Serialize)]
struct ExpenseQuery {
    month: u32,
    year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    household_id: Option<i64>,
}

pub fn expenses_path(month: u32, year: i32, household_id: Option<i64>) -> String {
    let query = ExpenseQuery {
        month,
        year,
        household_id,
    };
    // Plain integers always encode.
    let query = serde_urlencoded::to_string(&query).unwrap_or_default();
    format!("/expenses?{query}")
}

pub async fn get_expenses(
    client: &ApiClient,
    month: u32,
    year: i32,
    token: &str,
) -> Result<Vec<Expense>, ApiError> {
    let path = expenses_path(month, year, client.config().household_id());
    log::debug!("fetching {path}");
    let response = bearer(client.get(&path), token).send().await?;
    let (status, body) = read(response).await?;

    let envelope: Envelope<Vec<Expense>> = decode(status, &body, "Could not load expenses")?;
    Ok(envelope.data)
}

/// Any 2xx means the write happened. The echoed record is optional since servers
/// disagree on its shape.
fn saved_expense(status: u16, body: &str, default_message: &str) -> Result<Option<Expense>, ApiError> {
    if !is_success(status) {
        return Err(ApiError::from_response(status, body, default_message));
    }
    match serde_json::from_str::<Envelope<Expense>>(body) {
        Ok(envelope) => Ok(Some(envelope.data)),
        Err(e) => {
            log::warn!("saved, but could not read the returned expense: {e}");
            Ok(None)
        }
    }
}

pub async fn create_expense(
    client: &ApiClient,
    payload: &ExpensePayload,
    token: &str,
) -> Result<Option<Expense>, ApiError> {
    let response = bearer(client.post("/expenses"), token)
        .json(payload)?
        .send()
        .await?;
    let (status, body) = read(response).await?;

    let saved = saved_expense(status, &body, "Could not save the expense")?;
    match &saved {
        Some(expense) => log::info!("created expense {}", expense.id),
        None => log::info!("created expense"),
    }
    Ok(saved)
}

pub async fn update_expense(
    client: &ApiClient,
    id: i64,
    payload: &ExpensePayload,
    token: &str,
) -> Result<Option<Expense>, ApiError> {
    let response = bearer(client.put(&format!("/expenses/{id}")), token)
        .json(payload)?
        .send()
        .await?;
    let (status, body) = read(response).await?;

    let saved = saved_expense(status, &body, "Could not update the expense")?;
    log::info!("updated expense {id}");
    Ok(saved)
}

pub async fn save_expense(
    client: &ApiClient,
    request: &SaveRequest,
    token: &str,
) -> Result<Option<Expense>, ApiError> {
    match request.target {
        SaveTarget::Create => create_expense(client, &request.payload, token).await,
        SaveTarget::Update(id) => update_expense(client, id, &request.payload, token).await,
    }
}

/// `DELETE /expenses/:id`. The response body, if any, is ignored on success.
pub async fn delete_expense(client: &ApiClient, id: i64, token: &str) -> Result<(), ApiError> {
    let response = bearer(client.delete(&format!("/expenses/{id}")), token)
        .send()
        .await?;
    let (status, body) = read(response).await?;

    if !is_success(status) {
        return Err(ApiError::from_response(status, &body, "Could not delete the expense"));
    }
    log::info!("deleted expense {id}");
    Ok(())
}
