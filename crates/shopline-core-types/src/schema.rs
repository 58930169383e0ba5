//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_CUSTOMER_ID: &str = "customer_id";
pub const FIELD_PRODUCT_ID: &str = "product_id";
pub const FIELD_ORDER_ID: &str = "order_id";
pub const FIELD_LINE_ID: &str = "line_id";

// Collection sizes
pub const FIELD_ROWS: &str = "rows";
pub const FIELD_LINE_COUNT: &str = "line_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
