//! Shared application state for all routes. The store is the only mutable part.

use crate::error::AppError;
use crate::store::{Record, RecordStore};
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone)]
pub struct AppState {
    /// Writers hold the lock for their whole read-modify-write.
    pub store: Arc<RwLock<RecordStore>>,
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(seed: Vec<Record>) -> Self {
        Self {
            store: Arc::new(RwLock::new(RecordStore::new(seed))),
            loaded_at: Utc::now(),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, RecordStore>, AppError> {
        self.store
            .read()
            .map_err(|_| AppError::Internal("state lock".into()))
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, RecordStore>, AppError> {
        self.store
            .write()
            .map_err(|_| AppError::Internal("state lock".into()))
    }
}
