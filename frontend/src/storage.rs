use crate::config::TOKEN_KEY;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

pub struct WebStorage(Option<web_sys::Storage>);

impl WebStorage {
    pub fn local() -> Self {
        Self(web_sys::window().and_then(|window| window.local_storage().ok().flatten()))
    }

    pub fn session() -> Self {
        Self(web_sys::window().and_then(|window| window.session_storage().ok().flatten()))
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            if storage.set_item(key, value).is_err() {
                log::warn!("could not write {key} to browser storage");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.0 {
            let _ = storage.remove_item(key);
        }
    }
}

pub struct TokenStore<S> {
    durable: S,
    session: S,
}

impl TokenStore<WebStorage> {
    pub fn browser() -> Self {
        Self::new(WebStorage::local(), WebStorage::session())
    }
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(durable: S, session: S) -> Self {
        Self { durable, session }
    }

    pub fn save(&self, token: &str, remember: bool) {
        if remember {
            self.durable.set(TOKEN_KEY, token);
        } else {
            self.session.set(TOKEN_KEY, token);
        }
    }

    /// Durable storage wins over the session; empty values count as no token.
    pub fn token(&self) -> Option<String> {
        self.durable
            .get(TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .or_else(|| self.session.get(TOKEN_KEY).filter(|token| !token.is_empty()))
    }

    pub fn clear(&self) {
        self.durable.remove(TOKEN_KEY);
        self.session.remove(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    fn memory_store() -> TokenStore<MemoryStore> {
        TokenStore::new(MemoryStore::default(), MemoryStore::default())
    }

    #[test]
    fn remember_writes_durable_storage() {
        let store = memory_store();

        store.save("abc", true);

        assert_eq!(store.durable.get(TOKEN_KEY).as_deref(), Some("abc"));
        assert_eq!(store.session.get(TOKEN_KEY), None);
        assert_eq!(store.token().as_deref(), Some("abc"));
    }

    #[test]
    fn forget_writes_session_storage() {
        let store = memory_store();

        store.save("abc", false);

        assert_eq!(store.durable.get(TOKEN_KEY), None);
        assert_eq!(store.token().as_deref(), Some("abc"));
    }

    #[test]
    fn durable_token_takes_precedence() {
        let store = memory_store();
        store.save("session-token", false);
        store.save("durable-token", true);

        assert_eq!(store.token().as_deref(), Some("durable-token"));
    }

    #[test]
    fn empty_durable_token_falls_through_to_session() {
        let store = memory_store();
        store.durable.set(TOKEN_KEY, "");
        store.save("session-token", false);

        assert_eq!(store.token().as_deref(), Some("session-token"));
    }

    #[test]
    fn clear_removes_both_locations() {
        let store = memory_store();
        store.save("one", true);
        store.save("two", false);

        store.clear();

        assert_eq!(store.token(), None);
    }
}
