#![forbid(unsafe_code)]

//! Tunable constants of the particle field.
//!
//! Defaults reproduce the portfolio backdrop. Hosts may override any subset
//! through a JSON object; omitted keys keep their defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Viewport;

/// Parameters controlling population, motion, and drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    /// Viewport area (px²) allotted to each particle.
    pub area_per_particle: f64,
    /// Hard cap on the population regardless of viewport area.
    pub max_particles: usize,
    /// Pointer attraction radius.
    pub interaction_radius: f64,
    /// Attraction strength while the pointer is up.
    pub strength_idle: f64,
    /// Attraction strength while the pointer is pressed.
    pub strength_pressed: f64,
    /// Life regained per unit of attraction force.
    pub life_boost: f64,
    /// Per-step velocity multiplier.
    pub damping: f64,
    /// Per-step downward acceleration.
    pub gravity: f64,
    /// Fraction of velocity kept (sign flipped) on a wall bounce.
    pub restitution: f64,
    /// Particles closer than this are linked by a line.
    pub connection_distance: f64,
    /// Line opacity at zero distance.
    pub connection_max_alpha: f64,
    /// Initial velocity is uniform in `[-initial_speed, initial_speed)` per axis.
    pub initial_speed: f64,
    /// Initial life is uniform in `[life_min, life_max)`.
    pub life_min: u32,
    pub life_max: u32,
    /// Cap for life, and the base of the life ratio.
    pub max_life: u32,
    /// Radius seed is uniform in `[size_min, size_max)`.
    pub size_min: f64,
    pub size_max: f64,
    /// Opacity of the trail overlay painted each frame.
    pub trail_alpha: f64,
    /// Glow halo blur radius around each particle.
    pub glow_blur: f64,
    /// Particle opacity at full life.
    pub particle_max_alpha: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            area_per_particle: 8000.0,
            max_particles: 150,
            interaction_radius: 150.0,
            strength_idle: 4.0,
            strength_pressed: 8.0,
            life_boost: 20.0,
            damping: 0.98,
            gravity: 0.02,
            restitution: 0.8,
            connection_distance: 100.0,
            connection_max_alpha: 0.3,
            initial_speed: 1.0,
            life_min: 100,
            life_max: 200,
            max_life: 200,
            size_min: 1.0,
            size_max: 4.0,
            trail_alpha: 0.1,
            glow_blur: 20.0,
            particle_max_alpha: 0.8,
        }
    }
}

impl FieldParams {
    /// Population for a viewport: `min(max_particles, floor(area / area_per_particle))`.
    pub fn particle_count(&self, viewport: Viewport) -> usize {
        let by_area = (viewport.area() / self.area_per_particle).floor();
        if by_area.is_finite() && by_area > 0.0 {
            (by_area as usize).min(self.max_particles)
        } else {
            0
        }
    }

    /// Attraction strength for the current pressed state.
    #[inline]
    pub fn strength(&self, pressed: bool) -> f64 {
        if pressed {
            self.strength_pressed
        } else {
            self.strength_idle
        }
    }

    /// Check that every value keeps the simulation total and bounded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("area_per_particle", self.area_per_particle)?;
        positive("interaction_radius", self.interaction_radius)?;
        positive("connection_distance", self.connection_distance)?;
        positive("max_life", f64::from(self.max_life))?;
        positive("life_min", f64::from(self.life_min))?;

        non_negative("strength_idle", self.strength_idle)?;
        non_negative("strength_pressed", self.strength_pressed)?;
        non_negative("life_boost", self.life_boost)?;
        non_negative("initial_speed", self.initial_speed)?;
        non_negative("size_min", self.size_min)?;
        non_negative("glow_blur", self.glow_blur)?;
        finite("gravity", self.gravity)?;

        unit("damping", self.damping)?;
        unit("restitution", self.restitution)?;
        unit("connection_max_alpha", self.connection_max_alpha)?;
        unit("trail_alpha", self.trail_alpha)?;
        unit("particle_max_alpha", self.particle_max_alpha)?;

        if self.life_max <= self.life_min {
            return Err(ConfigError::EmptyRange { field: "life" });
        }
        finite("size_max", self.size_max)?;
        if self.size_max <= self.size_min {
            return Err(ConfigError::EmptyRange { field: "size" });
        }
        // `life_max` is exclusive, so the largest initial life is `life_max - 1`.
        if self.life_max - 1 > self.max_life {
            return Err(ConfigError::LifeExceedsCap {
                life_max: self.life_max,
                max_life: self.max_life,
            });
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON object and validate the result.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let params: Self =
            serde_json::from_str(s).map_err(|e| ConfigError::Json(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Json(e.to_string()))
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

/// Invalid field parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value is NaN or infinite.
    NotFinite { field: &'static str },
    /// Value must be strictly positive.
    NotPositive { field: &'static str, value: f64 },
    /// Value must be zero or positive.
    Negative { field: &'static str, value: f64 },
    /// Value must lie in `[0, 1]`.
    OutOfUnitRange { field: &'static str, value: f64 },
    /// A `[min, max)` pair has `max <= min`.
    EmptyRange { field: &'static str },
    /// Initial life could exceed the life cap.
    LifeExceedsCap { life_max: u32, max_life: u32 },
    /// Options were not valid JSON for [`FieldParams`].
    Json(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field } => write!(f, "{field} must be finite"),
            Self::NotPositive { field, value } => {
                write!(f, "{field} must be positive (got {value})")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            Self::OutOfUnitRange { field, value } => {
                write!(f, "{field} must be within [0, 1] (got {value})")
            }
            Self::EmptyRange { field } => write!(f, "{field}_max must exceed {field}_min"),
            Self::LifeExceedsCap { life_max, max_life } => write!(
                f,
                "initial life up to {} exceeds max_life {max_life}",
                life_max.saturating_sub(1)
            ),
            Self::Json(msg) => write!(f, "invalid field options: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
