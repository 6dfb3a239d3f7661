//! Unit tests for ai-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActionId, ConstraintId};

    #[test]
    fn index_roundtrip() {
        let id = ConstraintId(4);
        assert_eq!(id.index(), 4);
        assert_eq!(ConstraintId::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_issue_order() {
        assert!(ActionId(0) < ActionId(1));
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(ActionId::default(), ActionId::INVALID);
        assert_eq!(ConstraintId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ActionId(7).to_string(), "ActionId(7)");
    }
}

#[cfg(test)]
mod math {
    use crate::{Sphere, Vector3};

    #[test]
    fn dot_and_magnitude() {
        let v = Vector3::new(3.0, 0.0, 4.0);
        assert_eq!(v.square_magnitude(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.dot(Vector3::new(1.0, 1.0, 1.0)), 7.0);
    }

    #[test]
    fn cross_is_right_handed() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(x.cross(x), Vector3::ZERO);
    }

    #[test]
    fn unit_of_zero_is_zero() {
        let u = Vector3::ZERO.unit();
        assert_eq!(u, Vector3::ZERO);
        assert!(u.is_finite());
    }

    #[test]
    fn unit_has_length_one() {
        let u = Vector3::new(0.0, 2.0, 0.0).unit();
        assert!((u.magnitude() - 1.0).abs() < 1e-6);
        assert_eq!(u, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(a + b, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(a - b, Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        let mut c = a;
        c -= b;
        c *= 3.0;
        assert_eq!(c, Vector3::new(0.0, 3.0, 6.0));
    }

    #[test]
    fn distance() {
        assert_eq!(Vector3::ZERO.distance(Vector3::new(0.0, 0.0, 10.0)), 10.0);
    }

    #[test]
    fn sphere_new() {
        let s = Sphere::new(Vector3::new(5.0, 0.0, 0.0), 1.0);
        assert_eq!(s.radius, 1.0);
    }
}

#[cfg(test)]
mod kinematic {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use crate::{Kinematic, Location, SteeringOutput, Vector3};

    #[test]
    fn steering_output_magnitude_combines_channels() {
        let s = SteeringOutput::new(Vector3::new(3.0, 0.0, 0.0), 4.0);
        assert_eq!(s.square_magnitude(), 25.0);
        assert_eq!(s.magnitude(), 5.0);
        let mut s = s;
        s.clear();
        assert_eq!(s, SteeringOutput::ZERO);
    }

    #[test]
    fn location_integrates_velocity() {
        let mut loc = Location::default();
        let steer = SteeringOutput::new(Vector3::new(2.0, 0.0, 0.0), 1.0);
        loc.integrate(&steer, 0.5);
        assert_eq!(loc.position, Vector3::new(1.0, 0.0, 0.0));
        assert!((loc.orientation - 0.5).abs() < 1e-6);
    }

    #[test]
    fn orientation_wraps_into_range() {
        let mut loc = Location::new(Vector3::ZERO, 0.1);
        loc.integrate(&SteeringOutput::new(Vector3::ZERO, -1.0), 1.0);
        assert!(loc.orientation >= 0.0 && loc.orientation < TAU, "got {}", loc.orientation);
        assert!((loc.orientation - (TAU - 0.9)).abs() < 1e-5);
    }

    #[test]
    fn orientation_from_velocity() {
        let mut loc = Location::default();
        loc.set_orientation_from_velocity(Vector3::new(1.0, 0.0, 0.0));
        assert!((loc.orientation - FRAC_PI_2).abs() < 1e-6);

        // Zero velocity leaves orientation alone.
        loc.set_orientation_from_velocity(Vector3::ZERO);
        assert!((loc.orientation - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn orientation_as_vector_faces_z_at_zero() {
        let v = Location::default().orientation_as_vector();
        assert!((v.z - 1.0).abs() < 1e-6);
        assert!(v.x.abs() < 1e-6);

        let back = Location::new(Vector3::ZERO, PI).orientation_as_vector();
        assert!((back.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn integrate_steering_uses_old_velocity_for_position() {
        let mut k = Kinematic::new(Vector3::ZERO, 0.0, Vector3::new(1.0, 0.0, 0.0), 0.0);
        let steer = SteeringOutput::new(Vector3::new(10.0, 0.0, 0.0), 2.0);
        k.integrate_steering(&steer, 1.0);
        assert_eq!(k.position, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(k.velocity, Vector3::new(11.0, 0.0, 0.0));
        assert_eq!(k.rotation, 2.0);
    }

    #[test]
    fn drag_damps_velocity_and_rotation() {
        let mut k = Kinematic::new(Vector3::ZERO, 0.0, Vector3::new(4.0, 0.0, 0.0), 4.0);
        k.integrate_with_drag(&SteeringOutput::ZERO, 0.5, 1.0);
        assert_eq!(k.velocity, Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(k.rotation, 1.0);
    }

    #[test]
    fn component_drag_is_per_axis() {
        let mut k = Kinematic::new(Vector3::ZERO, 0.0, Vector3::new(4.0, 4.0, 4.0), 4.0);
        let drag = SteeringOutput::new(Vector3::new(0.5, 1.0, 0.25), 0.5);
        k.integrate_with_drag_components(&SteeringOutput::ZERO, &drag, 1.0);
        assert_eq!(k.velocity, Vector3::new(2.0, 4.0, 1.0));
        assert_eq!(k.rotation, 2.0);
    }

    #[test]
    fn trim_max_speed_clips_only_when_faster() {
        let mut k = Kinematic::new(Vector3::ZERO, 0.0, Vector3::new(0.0, 0.0, 10.0), 0.0);
        k.trim_max_speed(5.0);
        assert!((k.velocity.magnitude() - 5.0).abs() < 1e-5);
        k.trim_max_speed(8.0);
        assert!((k.velocity.magnitude() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn from_location_is_stationary() {
        let k = Kinematic::from(Location::new(Vector3::new(1.0, 2.0, 3.0), 0.5));
        assert_eq!(k.velocity, Vector3::ZERO);
        assert_eq!(k.location(), Location::new(Vector3::new(1.0, 2.0, 3.0), 0.5));
    }
}

#[cfg(test)]
mod time {
    use crate::{Frame, FrameClock};

    #[test]
    fn frame_arithmetic() {
        let f = Frame(10);
        assert_eq!(f + 5, Frame(15));
        assert_eq!(f.offset(3), Frame(13));
        assert_eq!(Frame(15) - Frame(10), 5u64);
        assert_eq!(Frame(3).since(Frame(10)), 0);
    }

    #[test]
    fn frame_difference_saturates_at_zero() {
        assert_eq!(Frame(3) - Frame(10), 0);
        assert_eq!(Frame(3) - Frame(10), Frame(3).since(Frame(10)));
    }

    #[test]
    fn advance_counts_frames() {
        let mut clock = FrameClock::new();
        clock.advance(16);
        clock.advance(16);
        assert_eq!(clock.frame, Frame(2));
        assert_eq!(clock.last_frame_duration_ms, 16);
    }

    #[test]
    fn paused_clock_holds_frame_but_records_duration() {
        let mut clock = FrameClock::new();
        clock.advance(10);
        clock.paused = true;
        clock.advance(20);
        assert_eq!(clock.frame, Frame(1));
        assert_eq!(clock.last_frame_duration_ms, 20);
    }

    #[test]
    fn fps_from_running_average() {
        let mut clock = FrameClock::new();
        for _ in 0..50 {
            clock.advance(20);
        }
        assert!((clock.average_frame_duration_ms - 20.0).abs() < 1e-9);
        assert!((clock.fps - 50.0).abs() < 1e-3, "got {}", clock.fps);
        assert!((clock.last_frame_secs() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn display() {
        assert_eq!(Frame(3).to_string(), "F3");
    }
}

#[cfg(test)]
mod rng {
    use crate::AiRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AiRng::new(12345);
        let mut r2 = AiRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.random_real(1.0), r2.random_real(1.0));
        }
    }

    #[test]
    fn random_real_in_bounds() {
        let mut rng = AiRng::new(7);
        for _ in 0..1000 {
            let v = rng.random_real(3.0);
            assert!((0.0..3.0).contains(&v));
        }
    }

    #[test]
    fn binomial_is_symmetric_range() {
        let mut rng = AiRng::new(7);
        for _ in 0..1000 {
            let v = rng.random_binomial(2.0);
            assert!(v > -2.0 && v < 2.0);
        }
    }

    #[test]
    fn random_int_rejects_empty_range() {
        let mut rng = AiRng::new(1);
        assert!(rng.random_int(0).is_err());
        for _ in 0..100 {
            assert!(rng.random_int(6).unwrap() < 6);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = AiRng::new(99);
        let mut a = root.child(0);
        let mut b = root.child(1);
        assert_ne!(a.random_real(1.0), b.random_real(1.0));
    }

    #[test]
    fn zero_seed_still_produces_values() {
        let mut rng = AiRng::new(0);
        let v = rng.random_real(1.0);
        assert!((0.0..1.0).contains(&v));
        let _ = rng.random_boolean();
    }
}

#[cfg(test)]
mod config {
    use crate::AgentConfig;

    #[test]
    fn defaults_are_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_constraint_steps_rejected() {
        let cfg = AgentConfig { constraint_steps: 0, ..AgentConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_finite_acceleration_rejected() {
        let cfg = AgentConfig { max_acceleration: f32::NAN, ..AgentConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("max_acceleration"));
    }

    #[test]
    fn negative_margin_rejected() {
        let cfg = AgentConfig { avoid_margin: -1.0, ..AgentConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
