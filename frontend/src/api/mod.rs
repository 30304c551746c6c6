mod auth;
mod categories;
mod expenses;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::{config::Config, error::ApiError};

pub use auth::{login, register};
pub use categories::{category_label, get_categories};
pub use expenses::{delete_expense, get_expenses, save_expense};

/// Base URL plus the request defaults every call shares.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url(), path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        prepare(Request::get(&self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        prepare(Request::post(&self.url(path)))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        prepare(Request::put(&self.url(path)))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        prepare(Request::delete(&self.url(path)))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_env()
    }
}

fn prepare(builder: RequestBuilder) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
}

fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// Reads the whole body so it can be classified whatever the status.
async fn read(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Parse a success body as `T`, or classify the failure.
fn decode<T: DeserializeOwned>(status: u16, body: &str, default_message: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::from_response(status, body, default_message));
    }

    serde_json::from_str(body).map_err(|e| {
        log::error!("could not decode response body: {e}");
        ApiError::Decode(e.to_string())
    })
}
