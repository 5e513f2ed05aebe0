#![forbid(unsafe_code)]

//! Core: particle field state, per-frame step, and draw pass.
//!
//! The simulator is host-driven. It never schedules itself; the embedding
//! environment calls [`ParticleField::advance`] and [`ParticleField::render`]
//! once per display refresh (see [`FrameLoop`]) and pushes pointer and
//! viewport changes in between.

pub mod color;
pub mod field;
pub mod frame_loop;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod params;
pub mod particle;
pub mod rng;
pub mod surface;

#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};

pub use color::{ColorMode, Hsla, Paint, Rgba};
pub use field::{Lifecycle, ParticleField, RenderStats, RunState};
pub use frame_loop::{FrameLoop, FrameStats, LoopState};
pub use geometry::{Point, RectF, Viewport};
pub use input::{InputError, PointerInput, PointerState};
pub use params::{ConfigError, FieldParams};
pub use particle::Particle;
pub use rng::RandomSource;
pub use surface::{DrawCommand, DrawSurface, Fill, RecordingSurface, Stroke};
