// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Invest Gate - Error Types

use wasm_bindgen::JsValue;

/// Errors raised while decoding input that crosses the gate boundary.
///
/// Navigation itself never fails: missing sessions or selections are handled
/// by substituting a fallback view. These variants only cover malformed
/// external data (page ids, JSON records, configuration).
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("unknown page identifier: {0:?}")]
    UnknownPage(String),

    #[error("failed to decode payload: {0}")]
    Decode(String),

    #[error("invalid fund record: {0}")]
    InvalidFund(String),

    #[error("invalid SIP plan: {0}")]
    InvalidSipPlan(String),

    #[error("invalid gate configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GateError {
    fn from(e: serde_json::Error) -> Self {
        GateError::Decode(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for GateError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        GateError::Decode(e.to_string())
    }
}

impl From<GateError> for JsValue {
    fn from(e: GateError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
