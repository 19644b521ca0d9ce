//! Ledger Query Models

use serde_json::Value;

/// Page size used when listing account objects
pub const ACCOUNT_OBJECTS_PAGE_LIMIT: u32 = 400;

/// One page of `account_objects`
#[derive(Debug, Clone, Default)]
pub struct AccountObjectsPage {
    pub objects: Vec<Value>,
    /// Opaque resume token; `None` on the last page
    pub marker: Option<Value>,
}
