use crate::error::LoginError;
use log::{info, warn};

const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Durable key/value settings. The browser build uses `localStorage`.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SettingsStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!("could not persist {}", key);
                }
            }
            None => warn!("localStorage unavailable, {} not persisted", key),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    /// Not persisted; every visit starts in light mode.
    pub dark_mode: bool,
}

impl SessionState {
    pub fn load(store: &impl SettingsStore) -> Self {
        SessionState {
            logged_in: store.get(LOGGED_IN_KEY).as_deref() == Some("true"),
            dark_mode: false,
        }
    }

    /// Mock sign-in: any non-empty pair of credentials is accepted.
    pub fn login(
        self,
        store: &impl SettingsStore,
        username: &str,
        password: &str,
    ) -> Result<Self, LoginError> {
        validate_credentials(username, password)?;
        info!("signed in as {}", username);
        Ok(self.with_login(store, true))
    }

    pub fn logout(self, store: &impl SettingsStore) -> Self {
        info!("signed out");
        self.with_login(store, false)
    }

    pub fn toggle_dark_mode(self) -> Self {
        SessionState {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    fn with_login(self, store: &impl SettingsStore, logged_in: bool) -> Self {
        store.set(LOGGED_IN_KEY, if logged_in { "true" } else { "false" });
        SessionState { logged_in, ..self }
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), LoginError> {
    if username.is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    Ok(())
}

/// Mirrors the dark-mode flag onto the document root's class list.
pub fn apply_theme(dark_mode: bool) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let result = if dark_mode {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if result.is_err() {
            warn!("could not update theme class");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl SettingsStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn fresh_store_starts_logged_out() {
        let store = MemoryStore::default();
        assert_eq!(SessionState::load(&store), SessionState::default());
    }

    #[test]
    fn login_flag_survives_reload() {
        let store = MemoryStore::default();
        let session = SessionState::load(&store).login(&store, "carlos", "hunter2").unwrap();
        assert!(session.logged_in);
        assert_eq!(store.get(LOGGED_IN_KEY).as_deref(), Some("true"));
        assert!(SessionState::load(&store).logged_in);

        session.logout(&store);
        assert_eq!(store.get(LOGGED_IN_KEY).as_deref(), Some("false"));
        assert!(!SessionState::load(&store).logged_in);
    }

    #[test]
    fn empty_credentials_are_rejected_without_writing() {
        let store = MemoryStore::default();
        let session = SessionState::load(&store);
        assert_eq!(session.login(&store, "", "pw"), Err(LoginError::MissingCredentials));
        assert_eq!(session.login(&store, "me", ""), Err(LoginError::MissingCredentials));
        assert_eq!(store.get(LOGGED_IN_KEY), None);
    }

    #[test]
    fn dark_mode_is_not_persisted() {
        let store = MemoryStore::default();
        let session = SessionState::load(&store).toggle_dark_mode();
        assert!(session.dark_mode);
        assert!(!SessionState::load(&store).dark_mode);
    }
}
