#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::error::VectorError;
    use crate::events::GameEvent;
    use crate::render::{draw_frame, Color, RenderSink};
    use crate::state::{BoidView, GameStateSnapshot, MissileView};
    use crate::types::{EntityId, Vector2};

    const EPS: f64 = 1e-9;

    // ---- Vector2 ----

    #[test]
    fn test_limited_caps_long_vectors() {
        let samples = [
            Vector2::new(3.0, 4.0),
            Vector2::new(-10.0, 0.5),
            Vector2::new(0.0, -7.25),
            Vector2::new(1e6, -1e6),
        ];
        for v in samples {
            for max in [0.5, 1.0, 2.5] {
                let limited = v.limited(max);
                assert!(
                    limited.norm() <= max + EPS,
                    "{v:?} limited to {max} has norm {}",
                    limited.norm()
                );
            }
        }
    }

    #[test]
    fn test_limited_leaves_short_vectors_alone() {
        let v = Vector2::new(0.3, -0.4);
        assert_eq!(v.limited(0.5), v);
        assert_eq!(v.limited(10.0), v);
        assert_eq!(Vector2::ZERO.limited(0.0), Vector2::ZERO);
    }

    #[test]
    fn test_with_magnitude() {
        let v = Vector2::new(-2.0, 7.0).with_magnitude(3.0);
        assert!((v.norm() - 3.0).abs() < EPS);
        // Direction is preserved
        assert!(v.x() < 0.0 && v.y() > 0.0);
    }

    #[test]
    fn test_zero_vector_normalizes_to_zero() {
        assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
        assert_eq!(Vector2::ZERO.with_magnitude(5.0), Vector2::ZERO);
    }

    #[test]
    fn test_divide_by_zero_is_rejected() {
        assert_eq!(
            Vector2::new(1.0, 2.0).divide(0.0),
            Err(VectorError::DivisionByZero)
        );
        assert_eq!(
            Vector2::new(1.0, 2.0).divide(2.0),
            Ok(Vector2::new(0.5, 1.0))
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(4.0, -6.0);
        assert_eq!(a + b, Vector2::new(5.0, -4.0));
        assert_eq!(b - a, Vector2::new(3.0, -8.0));
        assert_eq!(a * 3.0, Vector2::new(3.0, 6.0));
        assert!((a.distance_to(&b) - (9.0f64 + 64.0).sqrt()).abs() < EPS);
        assert!((Vector2::new(3.0, 4.0).norm() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_from_angle() {
        let right = Vector2::from_angle(0.0);
        assert!((right.x() - 1.0).abs() < EPS && right.y().abs() < EPS);

        let up = Vector2::from_angle(-std::f64::consts::FRAC_PI_2);
        assert!(up.x().abs() < EPS && (up.y() + 1.0).abs() < EPS);

        let v = Vector2::new(-3.0, 2.0);
        let back = Vector2::from_angle(v.angle()) * v.norm();
        assert!(back.distance_to(&v) < EPS);
    }

    #[test]
    fn test_random_in_2d_respects_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = Vector2::random_in_2d(&mut rng, -4.0, 4.0);
            assert!((-4.0..=4.0).contains(&v.x()));
            assert!((-4.0..=4.0).contains(&v.y()));
        }
    }

    #[test]
    fn test_random_in_2d_accepts_reversed_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            let v = Vector2::random_in_2d(&mut rng, 4.0, -4.0);
            assert!((-4.0..=4.0).contains(&v.x()));
            assert!((-4.0..=4.0).contains(&v.y()));
        }
    }

    #[test]
    fn test_vector_serializes_as_pair() {
        let json = serde_json::to_string(&Vector2::new(1.5, -2.0)).unwrap();
        assert_eq!(json, "[1.5,-2.0]");
    }

    // ---- Enums / wire shape ----

    #[test]
    fn test_behavior_flags() {
        assert!(Behavior::Aggressive.is_aggressive());
        assert!(!Behavior::Passive.is_aggressive());
        assert_eq!(Behavior::default(), Behavior::Passive);
    }

    #[test]
    fn test_phase_defaults_to_menu() {
        assert_eq!(GamePhase::default(), GamePhase::Menu);
        assert!(GamePhase::Victory.is_finished());
        assert!(GamePhase::GameOver.is_finished());
        assert!(!GamePhase::Playing.is_finished());
    }

    #[test]
    fn test_player_command_is_tagged() {
        let json = serde_json::to_string(&PlayerCommand::Thrust { on: true }).unwrap();
        assert_eq!(json, r#"{"type":"Thrust","on":true}"#);
        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
        assert_eq!(back, PlayerCommand::Fire);
    }

    #[test]
    fn test_game_event_is_tagged() {
        let event = GameEvent::ShipHit {
            boid: EntityId(9),
            lives: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"ShipHit""#), "got {json}");
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    // ---- Rendering ----

    #[derive(Default)]
    struct RecordingSink {
        polygons: Vec<(usize, Color)>,
        circles: Vec<(Vector2, f64, Color)>,
    }

    impl RenderSink for RecordingSink {
        fn draw_polygon(&mut self, points: &[Vector2], _line_width: f64, color: Color) {
            self.polygons.push((points.len(), color));
        }

        fn draw_circle(&mut self, center: Vector2, radius: f64, _line_width: f64, color: Color) {
            self.circles.push((center, radius, color));
        }
    }

    fn playing_snapshot() -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot {
            phase: GamePhase::Playing,
            ..Default::default()
        };
        snapshot.ship.position = Vector2::new(100.0, 100.0);
        snapshot.ship.angle = 0.0;
        snapshot.boids = vec![
            BoidView {
                id: EntityId(1),
                position: Vector2::new(10.0, 10.0),
                velocity: Vector2::new(0.0, 1.0),
                behavior: Behavior::Passive,
            },
            BoidView {
                id: EntityId(2),
                position: Vector2::new(50.0, 50.0),
                velocity: Vector2::new(1.0, 0.0),
                behavior: Behavior::Aggressive,
            },
        ];
        snapshot.missiles = vec![MissileView {
            id: EntityId(3),
            position: Vector2::new(200.0, 200.0),
        }];
        snapshot
    }

    #[test]
    fn test_draw_frame_primitives() {
        let mut sink = RecordingSink::default();
        draw_frame(&playing_snapshot(), &mut sink);

        // Two boid triangles and one ship diamond
        assert_eq!(
            sink.polygons,
            vec![(3, Color::White), (3, Color::Red), (4, Color::Purple)]
        );
        // Two heading dots, one turret dot, one missile dot
        assert_eq!(sink.circles.len(), 4);

        // Passive boid moving down: heading dot 8 units below it
        let (dot, _, color) = sink.circles[0];
        assert_eq!(color, Color::White);
        assert!(dot.distance_to(&Vector2::new(10.0, 18.0)) < EPS);

        // Turret 15 units along the ship heading
        let (turret, radius, _) = sink.circles[2];
        assert!(turret.distance_to(&Vector2::new(115.0, 100.0)) < EPS);
        assert_eq!(radius, 2.0);
    }

    #[test]
    fn test_heading_dot_follows_velocity_direction() {
        let mut snapshot = playing_snapshot();
        snapshot.boids = vec![BoidView {
            id: EntityId(1),
            position: Vector2::new(10.0, 10.0),
            velocity: Vector2::new(3.0, 4.0),
            behavior: Behavior::Passive,
        }];
        let mut sink = RecordingSink::default();
        draw_frame(&snapshot, &mut sink);

        // atan2(4, 3): 8 units along (0.6, 0.8), not along (0.8, 0.6)
        let (dot, radius, _) = sink.circles[0];
        assert!(
            dot.distance_to(&Vector2::new(14.8, 16.4)) < EPS,
            "heading dot at {:?}",
            dot
        );
        assert_eq!(radius, 1.0);
    }

    #[test]
    fn test_draw_frame_skips_non_playing_phases() {
        let mut snapshot = playing_snapshot();
        for phase in [GamePhase::Menu, GamePhase::Victory, GamePhase::GameOver] {
            snapshot.phase = phase;
            let mut sink = RecordingSink::default();
            draw_frame(&snapshot, &mut sink);
            assert!(sink.polygons.is_empty());
            assert!(sink.circles.is_empty());
        }
    }
}
