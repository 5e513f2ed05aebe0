#![forbid(unsafe_code)]

//! Particle field simulator.
//!
//! Owns a fixed-size particle population and one pointer state. The host
//! calls [`ParticleField::advance`] then [`ParticleField::render`] once per
//! frame; pointer and viewport changes arrive through setter-style hooks in
//! between.
//!
//! # Invariants
//!
//! - The population size only changes on [`reset`](ParticleField::reset) or
//!   [`resize`](ParticleField::resize), and then as a full replacement.
//! - Every particle keeps `0 <= life <= max_life` and a position inside the
//!   viewport after each step. Expired slots are reinitialised in place.
//! - `advance` and `render` are total: no errors, no panics on empty
//!   viewports or populations.

use rand::rngs::StdRng;

use crate::color::{ColorMode, Rgba};
use crate::geometry::{Point, Viewport};
use crate::input::{PointerInput, PointerState};
use crate::params::{ConfigError, FieldParams};
use crate::particle::Particle;
use crate::rng::{self, RandomSource};
use crate::surface::{DrawSurface, Fill, Stroke};

/// Overlay painted each frame instead of a clear; leaves a fading trail.
const TRAIL_COLOR: Rgba = Rgba::new(10, 10, 10, 1.0);
/// Base colour of the connective lines.
const LINK_COLOR: Rgba = Rgba::new(100, 200, 255, 0.1);
const LINK_WIDTH: f64 = 1.0;

/// Motion state. Rendering continues while paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

/// Terminal lifecycle flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifecycle {
    #[default]
    Active,
    Destroyed,
}

/// Counts from one draw pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub lines: usize,
    pub particles: usize,
}

/// Pointer pull on one particle for the current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    /// Normalized proximity in `(0, 1]`.
    pub force: f64,
    /// Velocity change to apply this step.
    pub accel: Point,
}

/// Discrete-time particle field.
#[derive(Debug, Clone)]
pub struct ParticleField<R = StdRng> {
    params: FieldParams,
    viewport: Viewport,
    particles: Vec<Particle>,
    pointer: PointerState,
    color_mode: ColorMode,
    run_state: RunState,
    lifecycle: Lifecycle,
    rng: R,
}

impl ParticleField<StdRng> {
    /// Field driven by a seeded [`StdRng`].
    pub fn seeded(
        viewport: Viewport,
        params: FieldParams,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::new(viewport, params, rng::seeded(seed))
    }
}

impl<R: RandomSource> ParticleField<R> {
    /// Validate `params` and populate the viewport.
    pub fn new(viewport: Viewport, params: FieldParams, rng: R) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut field = Self {
            params,
            viewport,
            particles: Vec::new(),
            pointer: PointerState::default(),
            color_mode: ColorMode::default(),
            run_state: RunState::default(),
            lifecycle: Lifecycle::default(),
            rng,
        };
        field.populate();
        Ok(field)
    }

    fn populate(&mut self) {
        let count = self.params.particle_count(self.viewport);
        let rng = &mut self.rng;
        let viewport = self.viewport;
        let params = &self.params;
        let particles = (0..count)
            .map(|_| Particle::spawn(rng, viewport, params))
            .collect();
        self.particles = particles;
        crate::info!(
            count,
            width = viewport.width(),
            height = viewport.height(),
            "particle population built"
        );
    }

    /// Logs and reports whether the field has been destroyed.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn rejects_call(&self, op: &'static str) -> bool {
        if self.lifecycle == Lifecycle::Destroyed {
            crate::warn!(op, "call on destroyed particle field ignored");
            return true;
        }
        false
    }

    // -----------------------------------------------------------------------
    // Frame steps
    // -----------------------------------------------------------------------

    /// One simulation step. No-op while paused or destroyed.
    pub fn advance(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed || self.run_state == RunState::Paused {
            return;
        }
        let Self {
            params,
            viewport,
            particles,
            pointer,
            rng,
            ..
        } = self;
        for particle in particles.iter_mut() {
            step_particle(particle, pointer, params, *viewport);
            if particle.is_expired() {
                particle.reinitialize(rng, *viewport, params);
            }
        }
    }

    /// Draw the current state. Runs while paused; does nothing once destroyed.
    ///
    /// `time_ms` is elapsed wall-clock time and only drives the palettes.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S, time_ms: f64) -> RenderStats {
        if self.lifecycle == Lifecycle::Destroyed {
            return RenderStats::default();
        }
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "field_render",
            particles = self.particles.len(),
            mode = self.color_mode.name()
        )
        .entered();

        surface.fill_rect(
            self.viewport.bounds(),
            TRAIL_COLOR.with_alpha(self.params.trail_alpha),
        );
        let lines = self.draw_connections(surface);
        let particles = self.draw_particles(surface, time_ms);
        RenderStats { lines, particles }
    }

    fn draw_connections<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> usize {
        let max_distance = self.params.connection_distance;
        let mut lines = 0;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance_to(b.position);
                if distance < max_distance {
                    let alpha =
                        (max_distance - distance) / max_distance * self.params.connection_max_alpha;
                    surface.stroke_line(
                        a.position,
                        b.position,
                        Stroke {
                            color: LINK_COLOR,
                            alpha,
                            width: LINK_WIDTH,
                        },
                    );
                    lines += 1;
                }
            }
        }
        lines
    }

    fn draw_particles<S: DrawSurface + ?Sized>(&self, surface: &mut S, time_ms: f64) -> usize {
        for particle in &self.particles {
            let ratio = particle.life_ratio();
            let color = self.color_mode.paint(
                particle.hue,
                time_ms,
                ratio * self.params.particle_max_alpha,
            );
            surface.fill_circle(
                particle.position,
                particle.radius(),
                Fill {
                    color: color.into(),
                    glow: self.params.glow_blur,
                },
            );
        }
        self.particles.len()
    }

    // -----------------------------------------------------------------------
    // Input and viewport hooks
    // -----------------------------------------------------------------------

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.rejects_call("on_pointer_move") {
            return;
        }
        self.pointer.move_to(x, y);
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        if self.rejects_call("set_pressed") {
            return;
        }
        self.pointer.pressed = pressed;
    }

    pub fn handle_input(&mut self, input: PointerInput) {
        if self.rejects_call("handle_input") {
            return;
        }
        self.pointer.apply(input);
    }

    /// Adopt a new viewport and rebuild the whole population.
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.rejects_call("resize") {
            return;
        }
        self.viewport = Viewport::new(width, height);
        crate::debug!(
            width = self.viewport.width(),
            height = self.viewport.height(),
            "particle field resized"
        );
        self.populate();
    }

    // -----------------------------------------------------------------------
    // Control surface
    // -----------------------------------------------------------------------

    /// Flip between running and paused. Returns `true` if now paused.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.rejects_call("toggle_pause") {
            self.run_state = match self.run_state {
                RunState::Running => RunState::Paused,
                RunState::Paused => RunState::Running,
            };
            crate::debug!(state = ?self.run_state, "particle field run state toggled");
        }
        self.is_paused()
    }

    /// Advance to the next palette. Returns its index (`0..=2`).
    pub fn change_color_mode(&mut self) -> u8 {
        if !self.rejects_call("change_color_mode") {
            self.color_mode = self.color_mode.next();
            crate::debug!(mode = self.color_mode.name(), "color mode changed");
        }
        self.color_mode.index()
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        if self.rejects_call("set_color_mode") {
            return;
        }
        self.color_mode = mode;
    }

    /// Replace the population with fresh particles for the current viewport.
    pub fn reset(&mut self) {
        if self.rejects_call("reset") {
            return;
        }
        self.populate();
    }

    /// Release the population. Terminal; later calls are ignored.
    pub fn destroy(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        self.lifecycle = Lifecycle::Destroyed;
        self.particles = Vec::new();
        crate::info!("particle field destroyed");
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Direct slot access for scenario setup. The population length is fixed.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub const fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub const fn run_state(&self) -> RunState {
        self.run_state
    }

    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }
}

/// Pointer attraction for `particle`, if it lies strictly inside the
/// interaction radius and not exactly on the pointer.
pub fn attraction(
    particle: &Particle,
    pointer: &PointerState,
    params: &FieldParams,
) -> Option<Attraction> {
    let dx = pointer.x - particle.position.x;
    let dy = pointer.y - particle.position.y;
    let distance = (dx * dx + dy * dy).sqrt();
    let radius = params.interaction_radius;
    if !(distance > 0.0 && distance < radius) {
        return None;
    }
    let force = (radius - distance) / radius;
    let angle = dy.atan2(dx);
    let magnitude = force * params.strength(pointer.pressed);
    Some(Attraction {
        force,
        accel: Point::new(angle.cos() * magnitude, angle.sin() * magnitude),
    })
}

/// One kinematic step for a single particle, without respawn.
///
/// Pointer pull, integration, damping and gravity, wall bounce, then ageing.
pub fn step_particle(
    particle: &mut Particle,
    pointer: &PointerState,
    params: &FieldParams,
    viewport: Viewport,
) {
    if let Some(pull) = attraction(particle, pointer, params) {
        particle.velocity.x += pull.accel.x;
        particle.velocity.y += pull.accel.y;
        let boost = (pull.force * params.life_boost).floor() as u32;
        particle.life = particle.life.saturating_add(boost).min(particle.max_life);
    }

    particle.position.x += particle.velocity.x;
    particle.position.y += particle.velocity.y;

    particle.velocity.x *= params.damping;
    particle.velocity.y *= params.damping;
    particle.velocity.y += params.gravity;

    bounce_axis(
        &mut particle.position.x,
        &mut particle.velocity.x,
        viewport.width(),
        params.restitution,
    );
    bounce_axis(
        &mut particle.position.y,
        &mut particle.velocity.y,
        viewport.height(),
        params.restitution,
    );

    particle.life = particle.life.saturating_sub(1);
}

#[inline]
fn bounce_axis(position: &mut f64, velocity: &mut f64, extent: f64, restitution: f64) {
    if *position < 0.0 || *position > extent {
        *velocity *= -restitution;
        *position = position.clamp(0.0, extent);
    } else if position.is_nan() {
        *position = 0.0;
        *velocity = 0.0;
    }
}
