//! Persistence shim
//!
//! Whole-object JSON blobs under `sureCircle_`-prefixed keys in a key-value
//! store. The browser build backs this with `localStorage`; tests use
//! [`MemoryStore`]. There is no schema versioning.

use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::model::User;
use crate::notify::Notification;
use crate::validation::Form;

/// Prefix applied to every key
pub const KEY_PREFIX: &str = "sureCircle_";

/// Cached signed-in user
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Saved claim form fields
pub const CLAIM_DRAFT_KEY: &str = "claimDraft";

#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing store missing, full or refusing access
    #[error("Storage not available: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Typed JSON access over a [`KeyValueStore`]
pub struct Persistence<K> {
    store: K,
}

impl<K: KeyValueStore> Persistence<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    fn full_key(key: &str) -> String {
        format!("{}{}", KEY_PREFIX, key)
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(&Self::full_key(key), &json)
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.store.get(&Self::full_key(key))? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn clear(&self, key: &str) -> StoreResult<()> {
        self.store.remove(&Self::full_key(key))
    }

    /// Cached user, if any. Failures are logged and treated as absent.
    pub fn cached_user(&self) -> Option<User> {
        match self.load(CURRENT_USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to load cached user: {}", e);
                None
            }
        }
    }

    pub fn cache_user(&self, user: &User) -> StoreResult<()> {
        self.save(CURRENT_USER_KEY, user)
    }

    pub fn forget_user(&self) -> StoreResult<()> {
        self.clear(CURRENT_USER_KEY)
    }

    /// Save claim form fields as a flat name-to-value map
    pub fn save_claim_draft(&self, form: &Form) -> StoreResult<()> {
        self.save(CLAIM_DRAFT_KEY, &form.to_map())
    }

    pub fn claim_draft(&self) -> StoreResult<Option<BTreeMap<String, String>>> {
        self.load(CLAIM_DRAFT_KEY)
    }

    /// Drop the saved draft once its claim has been submitted
    pub fn clear_claim_draft(&self) -> StoreResult<()> {
        self.clear(CLAIM_DRAFT_KEY)
    }
}

/// Notification for a draft save attempt
pub fn draft_saved_notification(result: &StoreResult<()>) -> Notification {
    match result {
        Ok(()) => Notification::success("Draft Saved", "Your claim has been saved as a draft."),
        Err(e) => {
            tracing::warn!("Failed to save claim draft: {}", e);
            Notification::error("Save Failed", "Unable to save draft. Please try again.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::AppData;

    /// Store that refuses every operation, like a browser with storage disabled
    struct DisabledStore;

    impl KeyValueStore for DisabledStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }
        fn remove(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }
    }

    #[test]
    fn test_user_roundtrip_uses_prefixed_key() {
        let persistence = Persistence::new(MemoryStore::new());
        let user = AppData::seeded().users[0].clone();

        persistence.cache_user(&user).unwrap();

        let raw = persistence.store().get("sureCircle_currentUser").unwrap();
        assert!(raw.unwrap().contains("\"trustScore\":785"));
        assert_eq!(persistence.cached_user(), Some(user));
    }

    #[test]
    fn test_forget_user() {
        let persistence = Persistence::new(MemoryStore::new());
        persistence.cache_user(&AppData::seeded().users[1]).unwrap();
        persistence.forget_user().unwrap();

        assert!(persistence.cached_user().is_none());
        assert!(persistence.store().is_empty());
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let persistence = Persistence::new(MemoryStore::new());
        persistence
            .store()
            .set("sureCircle_currentUser", "{not json")
            .unwrap();

        assert!(matches!(
            persistence.load::<User>(CURRENT_USER_KEY),
            Err(StoreError::Serialization(_))
        ));
        assert!(persistence.cached_user().is_none());
    }

    #[test]
    fn test_claim_draft_roundtrip() {
        let persistence = Persistence::new(MemoryStore::new());
        let form = Form::new()
            .required("amount", "12000")
            .required("reason", "Screen damage");

        let result = persistence.save_claim_draft(&form);
        assert_eq!(draft_saved_notification(&result).title, "Draft Saved");

        let draft = persistence.claim_draft().unwrap().unwrap();
        assert_eq!(draft.get("reason").map(String::as_str), Some("Screen damage"));
    }

    #[test]
    fn test_submitted_claim_clears_draft() {
        let persistence = Persistence::new(MemoryStore::new());
        persistence.cache_user(&AppData::seeded().users[0]).unwrap();
        persistence
            .save_claim_draft(&Form::new().required("reason", "Cracked screen"))
            .unwrap();
        assert!(persistence.claim_draft().unwrap().is_some());

        persistence.clear_claim_draft().unwrap();

        assert!(persistence.claim_draft().unwrap().is_none());
        assert!(persistence.cached_user().is_some());
        assert_eq!(persistence.store().len(), 1);
    }

    #[test]
    fn test_unavailable_store() {
        let persistence = Persistence::new(DisabledStore);
        let form = Form::new().required("amount", "1");

        let result = persistence.save_claim_draft(&form);
        assert!(matches!(result, Err(StoreError::Unavailable(_))));

        let notification = draft_saved_notification(&result);
        assert_eq!(notification.title, "Save Failed");
        assert!(notification.is_error());
        assert!(persistence.cached_user().is_none());
    }
}
