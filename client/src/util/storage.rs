//! Browser `localStorage` binding for the session token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser builds keep the token and user pair in `localStorage`. Native
//! builds have no storage and report it unavailable, which the session
//! treats as signed out.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::{StoreError, TokenStore};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(unavailable)
}

fn unavailable() -> StoreError {
    StoreError::Unavailable("localStorage is not available".to_owned())
}

#[cfg(feature = "csr")]
fn js_error(op: &'static str, key: &str, err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::io(op, key, format!("{err:?}"))
}

impl TokenStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| js_error("read", key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| js_error("write", key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(unavailable())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(|e| js_error("remove", key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }
}
