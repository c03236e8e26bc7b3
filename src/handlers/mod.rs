//! HTTP handlers for item queries, mutations and reset.

pub mod admin;
pub mod items;
pub use admin::*;
pub use items::*;
