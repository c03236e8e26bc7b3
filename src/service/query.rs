//! Read operations over the shared store.

use crate::error::AppError;
use crate::service::RequestValidator;
use crate::state::AppState;
use crate::store::Record;

pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const RANGE_EMPTY: &str = "No items in the given range";
pub const NO_PROPERTIES: &str = "No properties found";

pub struct QueryService;

impl QueryService {
    /// Every record, in insertion order.
    pub fn list(state: &AppState) -> Result<Vec<Record>, AppError> {
        let store = state.read()?;
        tracing::debug!(count = store.len(), "list items");
        Ok(store.get_all().to_vec())
    }

    pub fn read(state: &AppState, id: &str) -> Result<Record, AppError> {
        let store = state.read()?;
        tracing::debug!(id = %id, "read item");
        store
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(ITEM_NOT_FOUND.into()))
    }

    /// Records between two raw path bounds, in either order. An unparseable bound matches nothing.
    pub fn range(state: &AppState, raw_low: &str, raw_high: &str) -> Result<Vec<Record>, AppError> {
        let bounds = (
            RequestValidator::range_bound(raw_low),
            RequestValidator::range_bound(raw_high),
        );
        tracing::debug!(low = %raw_low, high = %raw_high, parsed = ?bounds, "range query");
        let items = match bounds {
            (Some(low), Some(high)) => state.read()?.get_by_range(low, high),
            _ => Vec::new(),
        };
        if items.is_empty() {
            return Err(AppError::NotFound(RANGE_EMPTY.into()));
        }
        Ok(items)
    }

    pub fn properties(state: &AppState) -> Result<Vec<String>, AppError> {
        state
            .read()?
            .property_names()
            .ok_or_else(|| AppError::NotFound(NO_PROPERTIES.into()))
    }
}
