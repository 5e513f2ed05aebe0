#![forbid(unsafe_code)]

//! Window events the frontend listens to, and their mapping onto
//! [`PointerInput`].

use driftfield_core::PointerInput;

/// A window-level DOM event the field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    MouseMove,
    MouseDown,
    MouseUp,
    TouchMove,
    TouchEnd,
    Resize,
}

impl WindowEvent {
    pub const ALL: [Self; 6] = [
        Self::MouseMove,
        Self::MouseDown,
        Self::MouseUp,
        Self::TouchMove,
        Self::TouchEnd,
        Self::Resize,
    ];

    /// DOM event type string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MouseMove => "mousemove",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::Resize => "resize",
        }
    }

    /// Touch moves call `preventDefault` to stop page scrolling, so they
    /// need a non-passive listener.
    pub const fn passive(self) -> bool {
        !matches!(self, Self::TouchMove)
    }

    /// Whether the handler needs the event's client coordinates.
    pub const fn needs_position(self) -> bool {
        matches!(self, Self::MouseMove | Self::TouchMove)
    }

    /// Pointer input for this event. `position` is the client position of
    /// the mouse or first touch, if the event carried one.
    ///
    /// `None` for resize, and for moves without a position.
    pub fn pointer_input(self, position: Option<(f64, f64)>) -> Option<PointerInput> {
        match self {
            Self::MouseMove => position.map(|(x, y)| PointerInput::Move { x, y }),
            Self::MouseDown => Some(PointerInput::Down),
            Self::MouseUp => Some(PointerInput::Up),
            Self::TouchMove => position.map(|(x, y)| PointerInput::TouchMove { x, y }),
            Self::TouchEnd => Some(PointerInput::TouchEnd),
            Self::Resize => None,
        }
    }
}
