//! Resolvers for item data attached to `show_item` hovers.
//!
//! Each `key=value` pair after the item count is handed to a
//! [DataComponentResolver]. Without one, any pair makes the hover invalid.

use super::TagContext;
use crate::markup::component::{DataComponentValue, Key};

/// Value text that marks a data component as removed.
pub const REMOVED_MARKER: &str = "!";

pub trait DataComponentResolver {
    /// Turns the value text of one pair into a data value. `None` rejects the tag.
    fn resolve(&self, key: &Key, value: &str, context: &TagContext<'_>) -> Option<DataComponentValue>;
}

/// Keeps value text as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDataResolver;

impl DataComponentResolver for RawDataResolver {
    fn resolve(&self, _key: &Key, value: &str, _context: &TagContext<'_>) -> Option<DataComponentValue> {
        if value == REMOVED_MARKER {
            return Some(DataComponentValue::Removed);
        }
        Some(DataComponentValue::Raw(value.to_string()))
    }
}

/// Parses value text as JSON and rejects anything that is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDataResolver;

impl DataComponentResolver for JsonDataResolver {
    fn resolve(&self, key: &Key, value: &str, _context: &TagContext<'_>) -> Option<DataComponentValue> {
        if value == REMOVED_MARKER {
            return Some(DataComponentValue::Removed);
        }
        match serde_json::from_str(value) {
            Ok(json) => Some(DataComponentValue::Json(json)),
            Err(err) => {
                log::debug!(target: "quickmm.resolver", "data component {} is not JSON: {}", key, err);
                None
            }
        }
    }
}
