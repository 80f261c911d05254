use bevy::math::DVec2;
use gravity_simulation::config::{Params, Physics};
use gravity_simulation::simulation::canvas::{Shape, ShapeBuffer};
use gravity_simulation::simulation::event::{Action, Event};
use gravity_simulation::simulation::physics::{IntegrationOrder, World};
use gravity_simulation::Simulation;

const BOUNDS: DVec2 = DVec2::new(1000.0, 1000.0);

/// Two equal bodies at rest, mirrored around x = 500
pub fn mirrored_pair(world: &mut World, mass: f64, half_gap: f64) {
    world
        .add_body(mass, DVec2::new(500.0 - half_gap, 500.0), DVec2::ZERO, false, false)
        .unwrap();
    world
        .add_body(mass, DVec2::new(500.0 + half_gap, 500.0), DVec2::ZERO, false, false)
        .unwrap();
}

/// Stationary sun in the middle plus a planet 100 below it
pub fn sun_and_planet() -> World {
    let mut world = World::new(Physics::default());
    world
        .add_body(100_000.0, DVec2::new(500.0, 500.0), DVec2::ZERO, true, false)
        .unwrap();
    world
        .add_body(200.0, DVec2::new(500.0, 600.0), DVec2::ZERO, false, false)
        .unwrap();
    world
}

// ==================================================================================
// Gravity
// ==================================================================================

#[test]
fn mirrored_bodies_accelerate_towards_each_other() {
    for order in [IntegrationOrder::Interleaved, IntegrationOrder::Batched] {
        let mut world = World::new(Physics {
            integration: order,
            ..Physics::default()
        });
        mirrored_pair(&mut world, 500.0, 150.0);

        world.step(BOUNDS);

        let left = world.bodies()[0];
        let right = world.bodies()[1];
        assert!(left.velocity.x > 0.0, "{:?}", order);
        assert!(right.velocity.x < 0.0, "{:?}", order);
        assert_eq!(left.velocity.y, 0.0);
        assert_eq!(right.velocity.y, 0.0);

        // |dv| = G * m / d^2
        let expected = 0.1 * 500.0 / (300.0 * 300.0);
        assert!((left.velocity.x - expected).abs() < 1e-12);
    }
}

#[test]
fn planet_falls_into_sun_then_stays_finite() {
    let mut world = sun_and_planet();
    let sun = world.bodies()[0];
    let contact = sun.radius() + world.bodies()[1].radius();

    let distance = |w: &World| w.bodies()[1].position.distance(sun.position);

    let mut last = distance(&world);
    let mut steps = 0;
    while last > contact {
        world.step(BOUNDS);
        let d = distance(&world);
        if d > contact {
            assert!(d < last, "distance grew from {} to {} at step {}", last, d, steps);
        }
        last = d;
        steps += 1;
        assert!(steps < 1_000, "planet never reached the sun");
    }

    for _ in 0..10_000 {
        world.step(BOUNDS);
        let planet = world.bodies()[1];
        assert!(planet.position.is_finite() && planet.velocity.is_finite());
        assert!(planet.position.y >= 0.0 && planet.position.y <= BOUNDS.y);
        assert_eq!(planet.position.x, 500.0);
    }

    assert_eq!(world.bodies()[0], sun);
}

#[test]
fn integration_order_changes_results() {
    let run = |order| {
        let mut world = World::new(Physics {
            integration: order,
            ..Physics::default()
        });
        mirrored_pair(&mut world, 5_000.0, 200.0);
        for _ in 0..20 {
            world.step(BOUNDS);
        }
        world.bodies()[1].position
    };

    assert_ne!(run(IntegrationOrder::Interleaved), run(IntegrationOrder::Batched));
}

// ==================================================================================
// Interaction
// ==================================================================================

#[test]
fn drag_to_spawn_launches_an_orbiting_planet() {
    let mut sim = Simulation::new(Params::default());
    sim.spawn_central_body();
    let mut canvas = ShapeBuffer::default();

    let origin = DVec2::new(500.0, 300.0);
    sim.frame(&mut canvas, origin, [Event::MouseDown { position: origin }]);

    let release = DVec2::new(650.0, 300.0);
    sim.frame(&mut canvas, release, [Event::MouseUp { position: release }]);

    let planet = sim.world().bodies()[1];
    assert_eq!(planet.velocity, DVec2::new(3.0, 0.0));

    for _ in 0..200 {
        sim.frame(&mut canvas, release, Vec::<Event>::new());
    }
    let planet = sim.world().bodies()[1];
    assert!(planet.position.is_finite());
    assert_ne!(planet.position, origin);
}

#[test]
fn particle_burst_and_vectors_are_drawn() {
    let mut sim = Simulation::new(Params::default());
    let mut canvas = ShapeBuffer::default();
    let cursor = DVec2::new(200.0, 200.0);

    sim.frame(
        &mut canvas,
        cursor,
        [
            Event::KeyDown(Action::SpawnParticles),
            Event::KeyDown(Action::ToggleVectors),
        ],
    );
    assert_eq!(sim.world().len(), 100);

    sim.frame(&mut canvas, cursor, Vec::<Event>::new());
    let frame = canvas.take_presented().unwrap();
    let circles = frame.iter().filter(|s| matches!(s, Shape::Circle { .. })).count();
    let lines = frame.iter().filter(|s| matches!(s, Shape::Line { .. })).count();
    assert_eq!((circles, lines), (100, 100));

    // particles drift together without pulling on each other
    for p in sim.world().bodies() {
        assert_eq!(p.velocity, DVec2::new(1.0, 1.0));
    }
}

#[test]
fn clear_leaves_an_empty_frame() {
    let mut sim = Simulation::new(Params::default());
    sim.spawn_central_body();
    let mut canvas = ShapeBuffer::default();

    sim.frame(&mut canvas, DVec2::ZERO, [Event::KeyDown(Action::Clear)]);
    sim.frame(&mut canvas, DVec2::ZERO, Vec::<Event>::new());

    assert!(sim.world().is_empty());
    assert_eq!(canvas.take_presented(), Some(vec![]));
}

#[test]
fn quit_stops_the_loop() {
    let mut sim = Simulation::new(Params::default());
    let mut canvas = ShapeBuffer::default();
    let mut frames = 0;

    while sim.is_running() {
        let events = if frames == 3 { vec![Event::Quit] } else { vec![] };
        sim.frame(&mut canvas, DVec2::ZERO, events);
        frames += 1;
    }

    assert_eq!(frames, 4);
}
