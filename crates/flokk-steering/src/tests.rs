#[cfg(test)]
mod tests {
    use flokk_core::enums::Behavior;
    use flokk_core::types::Vector2;

    use crate::context::{Agent, Neighbor, NeighborKind};
    use crate::{aggressive, compute_steering, passive};

    fn agent_at(x: f64, y: f64) -> Agent {
        Agent {
            position: Vector2::new(x, y),
            velocity: Vector2::ZERO,
        }
    }

    fn neighbor(kind: NeighborKind, x: f64, y: f64) -> Neighbor {
        Neighbor {
            kind,
            position: Vector2::new(x, y),
            velocity: Vector2::ZERO,
        }
    }

    fn assert_close(actual: Vector2, expected: Vector2) {
        assert!(
            actual.distance_to(&expected) < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_no_neighbors_no_force() {
        let agent = agent_at(100.0, 100.0);
        assert_eq!(compute_steering(Behavior::Passive, &agent, &[]), Vector2::ZERO);
        assert_eq!(
            compute_steering(Behavior::Aggressive, &agent, &[]),
            Vector2::ZERO
        );
    }

    // ---- Passive ----

    #[test]
    fn test_passive_separates_from_close_boid() {
        let agent = agent_at(100.0, 100.0);
        let others = [neighbor(NeighborKind::Boid, 80.0, 100.0)];
        // Separation pushes right at full force; the neighbour is at rest so
        // alignment adds nothing, and it is outside cohesion range.
        assert_close(passive::steer(&agent, &others), Vector2::new(0.8, 0.0));
    }

    #[test]
    fn test_passive_ship_avoidance_is_layered_on_separation() {
        let agent = agent_at(100.0, 100.0);
        let others = [neighbor(NeighborKind::Ship, 80.0, 100.0)];
        // 0.8 from separation plus the unclamped 5x ship term.
        assert_close(passive::steer(&agent, &others), Vector2::new(5.8, 0.0));
    }

    #[test]
    fn test_passive_ignores_distant_ship() {
        let agent = agent_at(100.0, 100.0);
        let others = [neighbor(NeighborKind::Ship, 141.0, 100.0)];
        assert_eq!(passive::steer(&agent, &others), Vector2::ZERO);
    }

    #[test]
    fn test_passive_cohesion_and_alignment() {
        let agent = agent_at(100.0, 100.0);
        let mut close = neighbor(NeighborKind::Boid, 105.0, 100.0);
        close.velocity = Vector2::new(0.0, 1.0);
        // Separation (-0.8, 0) and cohesion (+0.8, 0) cancel; alignment
        // steers towards the neighbour's heading.
        assert_close(passive::steer(&agent, &[close]), Vector2::new(0.0, 0.8));
    }

    #[test]
    fn test_passive_missiles_only_separate() {
        let agent = agent_at(100.0, 100.0);
        let mut missile = neighbor(NeighborKind::Missile, 105.0, 100.0);
        missile.velocity = Vector2::new(0.0, 5.0);
        // No cohesion pull and no alignment with the missile's heading.
        assert_close(passive::steer(&agent, &[missile]), Vector2::new(-0.8, 0.0));
    }

    #[test]
    fn test_passive_coincident_neighbor_stays_finite() {
        let agent = Agent {
            position: Vector2::new(100.0, 100.0),
            velocity: Vector2::new(0.5, 0.0),
        };
        let others = [
            neighbor(NeighborKind::Boid, 100.0, 100.0),
            neighbor(NeighborKind::Ship, 100.0, 100.0),
        ];
        let force = passive::steer(&agent, &others);
        assert!(force.x().is_finite() && force.y().is_finite(), "{force:?}");
    }

    // ---- Aggressive ----

    #[test]
    fn test_aggressive_charges_ship() {
        let agent = agent_at(100.0, 100.0);
        let others = [neighbor(NeighborKind::Ship, 300.0, 100.0)];
        // Desired 2x max speed, clamped to 1.5x max force.
        assert_close(aggressive::steer(&agent, &others), Vector2::new(1.2, 0.0));
    }

    #[test]
    fn test_aggressive_does_not_avoid_ship() {
        let agent = agent_at(100.0, 100.0);
        let others = [neighbor(NeighborKind::Ship, 110.0, 100.0)];
        assert_close(aggressive::steer(&agent, &others), Vector2::new(1.2, 0.0));
    }

    #[test]
    fn test_aggressive_short_range_separation() {
        let agent = agent_at(100.0, 100.0);
        let others = [
            neighbor(NeighborKind::Ship, 300.0, 100.0),
            neighbor(NeighborKind::Boid, 90.0, 100.0),
        ];
        assert_close(aggressive::steer(&agent, &others), Vector2::new(2.0, 0.0));

        // Same boid at 30 units is outside the halved radius.
        let others = [
            neighbor(NeighborKind::Ship, 300.0, 100.0),
            neighbor(NeighborKind::Boid, 70.0, 100.0),
        ];
        assert_close(aggressive::steer(&agent, &others), Vector2::new(1.2, 0.0));
    }

    #[test]
    fn test_aggressive_without_ship_flocks_passively() {
        let agent = Agent {
            position: Vector2::new(100.0, 100.0),
            velocity: Vector2::new(0.3, -0.2),
        };
        let mut a = neighbor(NeighborKind::Boid, 105.0, 98.0);
        a.velocity = Vector2::new(1.0, 0.0);
        let b = neighbor(NeighborKind::Boid, 130.0, 120.0);
        let others = [a, b];

        assert_close(
            compute_steering(Behavior::Aggressive, &agent, &others),
            compute_steering(Behavior::Passive, &agent, &others),
        );
    }

    #[test]
    fn test_aggressive_on_top_of_ship_is_finite() {
        let agent = agent_at(100.0, 100.0);
        let others = [neighbor(NeighborKind::Ship, 100.0, 100.0)];
        assert_eq!(aggressive::steer(&agent, &others), Vector2::ZERO);
    }
}
