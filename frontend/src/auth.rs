use crate::storage::TokenStore;

/// Persist the token in `localStorage` when `remember` is set, else in `sessionStorage`.
pub fn save_auth(token: &str, remember: bool) {
    TokenStore::browser().save(token, remember);
}

pub fn get_token() -> Option<String> {
    TokenStore::browser().token()
}

pub fn is_logged_in() -> bool {
    get_token().is_some()
}

pub fn logout() {
    log::info!("logging out");
    TokenStore::browser().clear();
}
