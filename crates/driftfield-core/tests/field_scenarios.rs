//! End-to-end scenarios for the particle field and its frame loop.

use driftfield_core::field::{attraction, step_particle};
use driftfield_core::{
    ColorMode, FieldParams, FrameLoop, Particle, ParticleField, Point, PointerInput,
    PointerState, RecordingSurface, Viewport,
};
use pretty_assertions::assert_eq;

const EPS: f64 = 1e-9;

fn field(width: f64, height: f64, seed: u64) -> ParticleField {
    ParticleField::seeded(Viewport::new(width, height), FieldParams::default(), seed)
        .expect("default params")
}

fn resting(x: f64, y: f64) -> Particle {
    Particle {
        position: Point::new(x, y),
        velocity: Point::ORIGIN,
        life: 150,
        max_life: 200,
        size: 2.0,
        hue: 90.0,
    }
}

/// Park the pointer far outside the viewport so it exerts no pull.
fn park_pointer<R: driftfield_core::RandomSource>(field: &mut ParticleField<R>) {
    field.on_pointer_move(-1.0e6, -1.0e6);
}

#[test]
fn desktop_viewport_holds_sixty_particles() {
    let field = field(800.0, 600.0, 1);
    assert_eq!(field.particles().len(), 60);
    assert!(
        field
            .particles()
            .iter()
            .all(|p| (100..200).contains(&p.life) && p.max_life == 200)
    );
}

#[test]
fn large_viewport_is_capped() {
    assert_eq!(field(2560.0, 1440.0, 1).particles().len(), 150);
}

#[test]
fn right_wall_reflects_and_clamps() {
    let mut field = field(800.0, 600.0, 2);
    park_pointer(&mut field);
    field.particles_mut()[0] = Particle {
        velocity: Point::new(2.0, 0.0),
        ..resting(805.0, 300.0)
    };
    field.advance();
    let p = field.particles()[0];
    assert!(p.position.x <= 800.0, "x={}", p.position.x);
    assert!(p.velocity.x < 0.0, "vx={}", p.velocity.x);
    assert!((p.velocity.x + 2.0 * 0.98 * 0.8).abs() < EPS);
}

#[test]
fn pressed_pointer_pulls_harder() {
    let params = FieldParams::default();
    let particle = resting(300.0, 300.0);
    // Pointer 50 px away along (3, 4) / 5.
    let mut pointer = PointerState {
        x: 330.0,
        y: 340.0,
        pressed: true,
    };
    let pull = attraction(&particle, &pointer, &params).expect("inside radius");
    let force = (150.0 - 50.0) / 150.0;
    assert!((pull.force - force).abs() < EPS);
    assert!((pull.accel.x - force * 8.0 * 0.6).abs() < EPS);
    assert!((pull.accel.y - force * 8.0 * 0.8).abs() < EPS);

    pointer.pressed = false;
    let idle = attraction(&particle, &pointer, &params).expect("inside radius");
    assert!((idle.accel.x * 2.0 - pull.accel.x).abs() < EPS);
}

#[test]
fn pressed_pointer_step_through_field() {
    let mut field = field(800.0, 600.0, 3);
    field.particles_mut()[0] = resting(300.0, 300.0);
    field.handle_input(PointerInput::Move { x: 330.0, y: 340.0 });
    field.set_pressed(true);
    field.advance();

    // Pull of 16/3 along (0.6, 0.8), then damping, then gravity.
    let magnitude = (150.0 - 50.0) / 150.0 * 8.0;
    let p = field.particles()[0];
    assert!((p.position.x - (300.0 + magnitude * 0.6)).abs() < EPS);
    assert!((p.position.y - (300.0 + magnitude * 0.8)).abs() < EPS);
    assert!((p.velocity.x - magnitude * 0.6 * 0.98).abs() < EPS);
    assert!((p.velocity.y - (magnitude * 0.8 * 0.98 + 0.02)).abs() < EPS);
}

#[test]
fn static_pointer_keeps_motion_bounded() {
    let params = FieldParams::default();
    let viewport = Viewport::new(400.0, 400.0);
    let pointer = PointerState {
        x: 200.0,
        y: 200.0,
        pressed: true,
    };
    let mut p = resting(120.0, 260.0);
    p.life = u32::MAX / 2;
    p.max_life = u32::MAX;
    for _ in 0..5_000 {
        step_particle(&mut p, &pointer, &params, viewport);
        assert!(viewport.contains(p.position));
        assert!(p.velocity.x.is_finite() && p.velocity.y.is_finite());
    }
    // Terminal speed under damping: v = 0.98 (v + a), so |v| < 50 * a.
    let speed = p.velocity.distance_to(Point::ORIGIN);
    assert!(speed < 50.0 * 8.0 + 1.0, "speed={speed}");
}

#[test]
fn expiry_redraws_slot_in_place() {
    let mut field = field(800.0, 600.0, 4);
    park_pointer(&mut field);
    for slot in [0usize, 17, 59] {
        field.particles_mut()[slot].life = 1;
    }
    field.advance();
    assert_eq!(field.particles().len(), 60);
    for slot in [0usize, 17, 59] {
        let life = field.particles()[slot].life;
        assert!((100..200).contains(&life), "slot {slot} life={life}");
    }
}

#[test]
fn reset_replaces_population() {
    let mut field = field(800.0, 600.0, 5);
    let before = field.particles().to_vec();
    field.reset();
    assert_eq!(field.particles().len(), before.len());
    assert_ne!(field.particles(), &before[..]);
}

#[test]
fn controls_after_destroy_are_ignored() {
    let mut field = field(800.0, 600.0, 6);
    field.change_color_mode();
    field.destroy();
    field.change_color_mode();
    field.on_pointer_move(10.0, 10.0);
    assert_eq!(field.color_mode(), ColorMode::Spectrum);
    assert_eq!(field.pointer(), PointerState::default());
    assert!(field.particles().is_empty());
}

#[test]
fn frame_loop_stop_twice_then_resume() {
    let mut field = field(800.0, 600.0, 7);
    let mut surface = RecordingSurface::new();
    let mut frame_loop = FrameLoop::new();

    assert!(frame_loop.start());
    for t in 0..5 {
        frame_loop.tick(&mut field, &mut surface, f64::from(t) * 16.0);
    }
    assert!(frame_loop.stop());
    assert!(!frame_loop.stop());

    let frozen = field.particles().to_vec();
    assert_eq!(frame_loop.tick(&mut field, &mut surface, 100.0), None);
    assert_eq!(field.particles(), &frozen[..]);

    assert!(frame_loop.start());
    let stats = frame_loop
        .tick(&mut field, &mut surface, 116.0)
        .expect("running again");
    assert_eq!(stats.frame, 5);
    assert_eq!(stats.particles, frozen.len());
    // Resumed from the same population: one step away, not a rebuild.
    let moved = field
        .particles()
        .iter()
        .zip(&frozen)
        .filter(|(now, then)| now.hue == then.hue && now.size == then.size)
        .count();
    assert!(moved >= frozen.len() - 2, "only {moved} slots carried over");
}

#[test]
fn paused_field_still_renders() {
    let mut field = field(800.0, 600.0, 8);
    field.toggle_pause();
    let mut surface = RecordingSurface::new();
    let mut frame_loop = FrameLoop::new();
    frame_loop.start();
    let stats = frame_loop
        .tick(&mut field, &mut surface, 0.0)
        .expect("paused fields still draw");
    assert_eq!(stats.discs, 60);
    assert_eq!(surface.circle_count(), 60);
}

#[test]
fn zero_viewport_is_quiet() {
    let mut field = field(0.0, 0.0, 9);
    field.advance();
    let mut surface = RecordingSurface::new();
    let stats = field.render(&mut surface, 0.0);
    assert_eq!(stats.particles, 0);
    assert_eq!(stats.lines, 0);
    assert_eq!(surface.commands().len(), 1);
    field.resize(800.0, 600.0);
    assert_eq!(field.particles().len(), 60);
}
