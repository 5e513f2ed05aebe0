#![forbid(unsafe_code)]

//! Pointer input schema.
//!
//! The host translates DOM mouse/touch events into [`PointerInput`] in
//! viewport coordinates. Events also have a small, stable JSON form (a `kind`
//! tag plus coordinates) so input can be recorded and replayed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerInput {
    Move { x: f64, y: f64 },
    Down,
    Up,
    /// First touch point moved; also counts as a press.
    TouchMove { x: f64, y: f64 },
    TouchEnd,
}

impl PointerInput {
    pub fn to_json_string(&self) -> Result<String, InputError> {
        serde_json::to_string(self).map_err(|e| InputError::Json(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> Result<Self, InputError> {
        serde_json::from_str(s).map_err(|e| InputError::Json(e.to_string()))
    }
}

/// Current pointer position and pressed flag.
///
/// Starts at the origin, unpressed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub pressed: bool,
}

impl PointerState {
    #[inline]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the pointer. Non-finite coordinates are ignored.
    pub fn move_to(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.x = x;
            self.y = y;
        }
    }

    pub fn apply(&mut self, input: PointerInput) {
        match input {
            PointerInput::Move { x, y } => self.move_to(x, y),
            PointerInput::Down => self.pressed = true,
            PointerInput::Up | PointerInput::TouchEnd => self.pressed = false,
            PointerInput::TouchMove { x, y } => {
                self.move_to(x, y);
                self.pressed = true;
            }
        }
    }
}

/// Malformed pointer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Json(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "invalid pointer event: {msg}"),
        }
    }
}

impl std::error::Error for InputError {}
