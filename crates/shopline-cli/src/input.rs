//! Parsing of operator input
//!
//! Numbers that fail to parse become `InvalidInput` errors so the shell can
//! report them like any other failure.

use shopline_core::{EntityId, ExError, ExErrorKind};

fn invalid(what: &str, raw: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("parse_input")
        .with_message(format!("'{}' is not a valid {}", raw.trim(), what))
}

/// Decode one raw input line, dropping its line terminator
pub fn decode_line(mut raw: Vec<u8>) -> Result<String, ExError> {
    while matches!(raw.last(), Some(b'\n' | b'\r')) {
        raw.pop();
    }
    String::from_utf8(raw).map_err(|e| {
        let lossy = String::from_utf8_lossy(e.as_bytes()).into_owned();
        invalid("text", &lossy)
    })
}

pub fn parse_id(raw: &str) -> Result<EntityId, ExError> {
    raw.trim().parse().map_err(|_| invalid("ID", raw))
}

pub fn parse_price(raw: &str) -> Result<f64, ExError> {
    raw.trim().parse().map_err(|_| invalid("price", raw))
}

pub fn parse_quantity(raw: &str) -> Result<i64, ExError> {
    raw.trim().parse().map_err(|_| invalid("quantity", raw))
}
