//! `localStorage`-backed [`KeyValueStore`].

use web_sys::{Storage, Window};

use super::describe;
use crate::error::StoreError;
use crate::store::KeyValueStore;

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Fails when the browser denies storage access.
    pub fn open(window: &Window) -> Result<Self, StoreError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StoreError::Unavailable),
            Err(err) => Err(StoreError::Read(describe(&err))),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|err| StoreError::Read(describe(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(|err| StoreError::Write(describe(&err)))
    }
}
