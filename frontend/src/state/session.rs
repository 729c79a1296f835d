//! Persisted client session: the bearer token plus cached user and employee
//! snapshots, stored under fixed keys. Login and logout are the only writers.

use crate::api::{ApiError, Employee, LoginResponse, SessionUser};
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const EMPLOYEE_KEY: &str = "employee";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Only usable inside a browser.
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        crate::utils::storage::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        crate::utils::storage::local_storage()?
            .set_item(key, value)
            .map_err(|_| ApiError::unknown(format!("Failed to persist '{}'", key)))
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = crate::utils::storage::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
    pub employee: Option<Employee>,
}

#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    /// Browser storage on wasm, process memory everywhere else (host tests, SSR).
    pub fn for_target() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::browser()
        } else {
            Self::in_memory()
        }
    }

    pub fn token(&self) -> Option<String> {
        self.backend
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.backend.get(key)
    }

    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let user = self
            .backend
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<SessionUser>(&raw).ok())?;
        let employee = self
            .backend
            .get(EMPLOYEE_KEY)
            .and_then(|raw| serde_json::from_str::<Option<Employee>>(&raw).ok())
            .flatten();
        Some(Session {
            token,
            user,
            employee,
        })
    }

    pub(crate) fn persist(&self, response: &LoginResponse) -> Result<Session, ApiError> {
        let user = serde_json::to_string(&response.user)
            .map_err(|e| ApiError::unknown(format!("Failed to encode user: {}", e)))?;
        let employee = serde_json::to_string(&response.employee)
            .map_err(|e| ApiError::unknown(format!("Failed to encode employee: {}", e)))?;
        let written = self
            .backend
            .set(TOKEN_KEY, &response.token)
            .and_then(|_| self.backend.set(USER_KEY, &user))
            .and_then(|_| self.backend.set(EMPLOYEE_KEY, &employee));
        if let Err(err) = written {
            // Never leave half a session behind.
            self.clear();
            return Err(err);
        }
        Ok(Session {
            token: response.token.clone(),
            user: response.user.clone(),
            employee: response.employee.clone(),
        })
    }

    pub(crate) fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY, EMPLOYEE_KEY] {
            self.backend.remove(key);
        }
    }
}
