#![forbid(unsafe_code)]

use std::fmt;

use driftfield_core::{ConfigError, InputError};

/// Frontend construction and binding errors.
#[derive(Debug, Clone, PartialEq)]
pub enum WebError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The canvas has no usable 2D rendering context.
    ContextUnavailable,
    /// Registering a window listener failed.
    Listener(&'static str),
    /// Options rejected.
    Config(ConfigError),
    /// Replayed pointer event rejected.
    Input(InputError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global window available"),
            Self::ContextUnavailable => write!(f, "canvas 2d context unavailable"),
            Self::Listener(kind) => write!(f, "failed to register '{kind}' listener"),
            Self::Config(err) => write!(f, "invalid options: {err}"),
            Self::Input(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for WebError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<InputError> for WebError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WebError> for wasm_bindgen::JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
