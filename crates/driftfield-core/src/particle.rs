#![forbid(unsafe_code)]

//! Fixed-layout particle record.

use crate::geometry::{Point, Viewport};
use crate::params::FieldParams;
use crate::rng::RandomSource;

/// One slot of the particle population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    /// Remaining life in steps, always within `[0, max_life]`.
    pub life: u32,
    pub max_life: u32,
    /// Radius at full life.
    pub size: f64,
    /// Hue seed in degrees, `[0, 360)`.
    pub hue: f64,
}

impl Particle {
    /// A zeroed slot, only useful as a target for [`Particle::reinitialize`].
    pub const EMPTY: Self = Self {
        position: Point::ORIGIN,
        velocity: Point::ORIGIN,
        life: 0,
        max_life: 0,
        size: 0.0,
        hue: 0.0,
    };

    /// A freshly drawn particle.
    pub fn spawn<R: RandomSource + ?Sized>(
        rng: &mut R,
        viewport: Viewport,
        params: &FieldParams,
    ) -> Self {
        let mut particle = Self::EMPTY;
        particle.reinitialize(rng, viewport, params);
        particle
    }

    /// Redraw every field in place. Used at construction and on expiry.
    pub fn reinitialize<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        viewport: Viewport,
        params: &FieldParams,
    ) {
        let speed = params.initial_speed;
        *self = Self {
            position: Point::new(
                rng.range_f64(0.0, viewport.width()),
                rng.range_f64(0.0, viewport.height()),
            ),
            velocity: Point::new(rng.range_f64(-speed, speed), rng.range_f64(-speed, speed)),
            life: rng.range_u32(params.life_min, params.life_max).min(params.max_life),
            max_life: params.max_life,
            size: rng.range_f64(params.size_min, params.size_max),
            hue: rng.range_f64(0.0, 360.0),
        };
    }

    /// Remaining life as a fraction of the cap, in `[0, 1]`.
    #[inline]
    pub fn life_ratio(&self) -> f64 {
        if self.max_life == 0 {
            0.0
        } else {
            f64::from(self.life) / f64::from(self.max_life)
        }
    }

    /// Drawn radius: shrinks linearly as the particle ages.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.size * self.life_ratio()
    }

    #[inline]
    pub const fn is_expired(&self) -> bool {
        self.life == 0
    }
}
