use crate::{
    error::ApiError,
    models::{AuthSession, Credentials, RegisterPayload},
};

use super::{decode, read, ApiClient};

const LOGIN_FAILED: &str = "Invalid credentials";
const REGISTRATION_FAILED: &str = "Registration failed";

/// `POST /login`. Any failure status is reported as [ApiError::Unauthorized].
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthSession, ApiError> {
    log::debug!("logging in as {email}");
    let response = client
        .post("/login")
        .json(&Credentials { email, password })?
        .send()
        .await?;
    let (status, body) = read(response).await?;

    login_result(status, &body)
}

fn login_result(status: u16, body: &str) -> Result<AuthSession, ApiError> {
    decode(status, body, LOGIN_FAILED).map_err(|e| match e {
        ApiError::Validation { message, .. } | ApiError::Server { message, .. } => {
            ApiError::Unauthorized(message)
        }
        other => other,
    })
}

/// `POST /register`, creating or joining a household.
pub async fn register(client: &ApiClient, payload: &RegisterPayload) -> Result<AuthSession, ApiError> {
    log::debug!("registering {}", payload.email);
    let response = client.post("/register").json(payload)?.send().await?;
    let (status, body) = read(response).await?;

    decode(status, &body, REGISTRATION_FAILED)
}
