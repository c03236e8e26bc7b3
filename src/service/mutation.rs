//! Store mutations: append, remove-last and reset. Each runs under one write lock.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::{display_value, Record, ID_FIELD, NAME_FIELD};

pub struct MutationService;

impl MutationService {
    /// Append a record and return it with its derived id.
    pub fn add(state: &AppState, fields: Record) -> Result<Record, AppError> {
        let record = state.write()?.append(fields)?;
        tracing::info!(id = %field(&record, ID_FIELD), name = %field(&record, NAME_FIELD), "item added");
        Ok(record)
    }

    /// Remove the last record by position.
    pub fn delete_last(state: &AppState) -> Result<Record, AppError> {
        let record = state.write()?.remove_last()?;
        tracing::info!(id = %field(&record, ID_FIELD), name = %field(&record, NAME_FIELD), "last item deleted");
        Ok(record)
    }

    /// Restore the seed snapshot. Returns the restored record count.
    pub fn reset(state: &AppState) -> Result<usize, AppError> {
        let mut store = state.write()?;
        store.reset();
        tracing::info!(records = store.len(), "store reset to seed data");
        Ok(store.len())
    }

    pub fn added_message(record: &Record) -> String {
        format!(
            "Added country {} with ID {} to the list!",
            field(record, NAME_FIELD),
            field(record, ID_FIELD)
        )
    }

    pub fn deleted_message(record: &Record) -> String {
        format!("Deleted last country: {}!", field(record, NAME_FIELD))
    }

    pub fn reset_message(count: usize) -> String {
        format!("Data reset to initial state ({} items).", count)
    }
}

fn field(record: &Record, key: &str) -> String {
    record.get(key).map(display_value).unwrap_or_default()
}
