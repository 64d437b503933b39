//! Unified error handling for the page behaviours

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Unified error type for all page operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    /// An element the operation depends on is not in the document.
    #[error("Missing element: #{0}")]
    MissingElement(String),

    /// JavaScript interop error.
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// Reading a user-selected file failed.
    #[error("File read error: {0}")]
    FileRead(String),

    /// Invalid behaviour configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<JsValue> for WebError {
    fn from(js_val: JsValue) -> Self {
        let message = js_val
            .as_string()
            .unwrap_or_else(|| format!("{js_val:?}"));
        WebError::JavaScript(message)
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for WebError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        WebError::Config(err.to_string())
    }
}

/// Result type for page operations
pub type WebResult<T> = Result<T, WebError>;
