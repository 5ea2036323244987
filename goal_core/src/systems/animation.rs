use glam::{Quat, Vec3};
use hecs::World;

use crate::components::Ball;
use crate::curve::{lap_parameter, QuadraticBezier};
use crate::transform::rotate_point_about;

/// Move the ball to its point on `curve` for `elapsed_ms` and spin it.
/// Returns the lap parameter t in [0, 1).
pub fn advance_ball(
    world: &mut World,
    curve: &QuadraticBezier,
    elapsed_ms: f64,
    lap_ms: f64,
    spin: f32,
) -> f32 {
    let t = lap_parameter(elapsed_ms, lap_ms);
    let next = curve.point_at(t);
    // Y first, then X, both about world axes
    let step = Quat::from_rotation_x(spin) * Quat::from_rotation_y(spin);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.position = next;
        ball.orientation = (step * ball.orientation).normalize();
    }
    t
}

/// A lap ends once t passes `lap_end_t`, or a whole lap of time has gone by
/// (a late frame may wrap t straight past the threshold)
pub fn lap_complete(t: f32, elapsed_ms: f64, lap_ms: f64, lap_end_t: f32) -> bool {
    t > lap_end_t || elapsed_ms >= lap_ms
}

/// Rotate the ball about `anchor`, turning its spin with it
pub fn orbit_ball(ball: &mut Ball, anchor: Vec3, rotation: Quat) {
    ball.position = rotate_point_about(ball.position, anchor, rotation);
    ball.orientation = (rotation * ball.orientation).normalize();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Color, Material};

    fn setup() -> (World, QuadraticBezier) {
        let mut world = World::new();
        let start = Vec3::new(0.0, 0.0, 100.0);
        world.spawn((Ball::new(2.5, start, Material::phong(Color::WHITE)),));
        let curve = QuadraticBezier::new(
            start,
            Vec3::new(20.0, 20.0, 50.0),
            Vec3::new(5.0, 15.0, -120.0),
        );
        (world, curve)
    }

    fn ball(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball spawned");
        *ball
    }

    #[test]
    fn test_ball_follows_curve() {
        let (mut world, curve) = setup();
        let t = advance_ball(&mut world, &curve, 2500.0, 5000.0, 0.1);
        assert!((t - 0.5).abs() < 1e-6);
        assert!((ball(&world).position - curve.point_at(0.5)).length() < 1e-5);
    }

    #[test]
    fn test_ball_spins_each_tick() {
        let (mut world, curve) = setup();
        advance_ball(&mut world, &curve, 100.0, 5000.0, 0.1);
        let once = ball(&world).orientation;
        let y_then_x = Quat::from_rotation_x(0.1) * Quat::from_rotation_y(0.1);
        assert!(
            once.abs_diff_eq(y_then_x, 1e-6),
            "Spin is 0.1 rad about world Y, then world X"
        );
        let x_then_y = Quat::from_rotation_y(0.1) * Quat::from_rotation_x(0.1);
        assert!(!once.abs_diff_eq(x_then_y, 1e-4), "Spin order matters");
        advance_ball(&mut world, &curve, 200.0, 5000.0, 0.1);
        assert!(ball(&world).orientation.angle_between(once) > 0.1);
    }

    #[test]
    fn test_lap_complete() {
        assert!(!lap_complete(0.5, 2500.0, 5000.0, 0.99));
        assert!(lap_complete(0.995, 4975.0, 5000.0, 0.99));
        // Frame arrived after the wrap: t is small but the lap is over
        assert!(lap_complete(0.004, 5020.0, 5000.0, 0.99));
    }

    #[test]
    fn test_orbit_ball_about_anchor() {
        let mut ball = Ball::new(0.2, Vec3::new(0.0, 0.2, 1.0), Material::phong(Color::BLACK));
        let anchor = Vec3::new(0.0, 0.0, -1.0);
        let before = ball.position.distance(anchor);
        for _ in 0..90 {
            orbit_ball(&mut ball, anchor, Quat::from_rotation_y((-1.0f32).to_radians()));
        }
        assert!((ball.position.distance(anchor) - before).abs() < 1e-4);
        // -90 degrees about Y carries the +Z offset onto -X
        assert!((ball.position - Vec3::new(-2.0, 0.2, -1.0)).length() < 1e-3);
    }
}
