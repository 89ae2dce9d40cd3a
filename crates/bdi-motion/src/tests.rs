//! Unit tests for bdi-motion.

#[cfg(test)]
mod helpers {
    use bdi_core::{LocationId, Vec2};
    use bdi_scene::{Scene, SceneBuilder};

    /// One 100×100 room with a start location and two targets at distance 4
    /// and 10 along the x axis.
    pub fn open_room() -> (Scene, LocationId, LocationId, LocationId) {
        let mut b = SceneBuilder::new();
        b.create_room("Hall", 0.0, 0.0, 100.0, 100.0).unwrap();
        let start = b.create_location("start", Vec2::new(10.0, 10.0), "Hall").unwrap();
        let near = b.create_location("near", Vec2::new(14.0, 10.0), "Hall").unwrap();
        let far = b.create_location("far", Vec2::new(20.0, 10.0), "Hall").unwrap();
        (b.build().unwrap(), start, near, far)
    }

    pub struct House {
        pub scene: Scene,
        pub door:  LocationId,
        pub sofa:  LocationId,
        pub tv:    LocationId,
        pub shed:  LocationId,
    }

    /// Hallway (0,0,10,10) next to Living Room (10,0,10,10), plus a shed
    /// with no door.
    pub fn house() -> House {
        let mut b = SceneBuilder::new();
        b.create_room("Hallway", 0.0, 0.0, 10.0, 10.0).unwrap();
        b.create_room("Living Room", 10.0, 0.0, 10.0, 10.0).unwrap();
        b.create_room("Shed", 50.0, 50.0, 5.0, 5.0).unwrap();
        let door = b.create_location("Door", Vec2::new(0.0, 5.0), "Hallway").unwrap();
        let sofa = b.create_location("Sofa", Vec2::new(5.0, 5.0), "Living Room").unwrap();
        let tv = b.create_location("TV", Vec2::new(8.0, 5.0), "Living Room").unwrap();
        let shed = b.create_location("Bench", Vec2::new(1.0, 1.0), "Shed").unwrap();
        b.connect("Hallway", "Living Room").unwrap();
        House { scene: b.build().unwrap(), door, sofa, tv, shed }
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use bdi_core::Vec2;
    use crate::{Motion, MotionError, MotionState};

    #[test]
    fn starts_idle_on_location() {
        let (scene, start, ..) = super::helpers::open_room();
        let m = Motion::at_location(&scene, start, 5.0).unwrap();
        assert_eq!(m.position(), Vec2::new(10.0, 10.0));
        assert_eq!(m.state(), MotionState::Idle);
        assert!(m.path().is_empty());
        assert_eq!(m.remaining_waypoints(), 0);
    }

    #[test]
    fn invalid_speed_rejected() {
        let (scene, start, ..) = super::helpers::open_room();
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Motion::at_location(&scene, start, speed),
                Err(MotionError::InvalidSpeed(_))
            ));
        }
    }

    #[test]
    fn position_outside_scene_rejected() {
        let (scene, ..) = super::helpers::open_room();
        assert!(matches!(
            Motion::at_position(&scene, Vec2::new(-5.0, 3.0), 1.0),
            Err(MotionError::NotInScene(_))
        ));
    }

    #[test]
    fn position_resolves_room() {
        let h = super::helpers::house();
        let m = Motion::at_position(&h.scene, Vec2::new(15.0, 2.0), 1.0).unwrap();
        assert_eq!(h.scene.room(m.current_room()).unwrap().name(), "Living Room");
    }
}

// ── Single-room stepping ──────────────────────────────────────────────────────

#[cfg(test)]
mod stepping {
    use bdi_core::Vec2;
    use crate::{Motion, MotionState};

    #[test]
    fn within_reach_arrives_in_one_update() {
        let (scene, start, near, _) = super::helpers::open_room();
        let mut m = Motion::at_location(&scene, start, 5.0).unwrap();
        m.move_to(&scene, near).unwrap();
        assert_eq!(m.state(), MotionState::Moving);
        assert_eq!(m.target(), Some(Vec2::new(14.0, 10.0)));

        assert!(m.update(&scene));
        assert_eq!(m.position(), Vec2::new(14.0, 10.0));
        assert!(!m.is_moving());
        assert_eq!(m.target(), None);
        assert_eq!(m.destination(), None);
    }

    #[test]
    fn two_updates_with_midpoint() {
        let (scene, start, _, far) = super::helpers::open_room();
        let mut m = Motion::at_location(&scene, start, 5.0).unwrap();
        m.move_to(&scene, far).unwrap();

        assert!(!m.update(&scene));
        assert_eq!(m.position(), Vec2::new(15.0, 10.0));
        assert!(m.is_moving());

        assert!(m.update(&scene));
        assert_eq!(m.position(), Vec2::new(20.0, 10.0));
    }

    #[test]
    fn idle_update_is_noop() {
        let (scene, start, ..) = super::helpers::open_room();
        let mut m = Motion::at_location(&scene, start, 5.0).unwrap();
        assert!(!m.update(&scene));
        assert_eq!(m.position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn move_to_current_spot_arrives_immediately() {
        let (scene, start, ..) = super::helpers::open_room();
        let mut m = Motion::at_location(&scene, start, 5.0).unwrap();
        m.move_to(&scene, start).unwrap();
        assert!(m.is_moving());
        assert!(m.update(&scene));
    }

    #[test]
    fn stop_keeps_position() {
        let (scene, start, _, far) = super::helpers::open_room();
        let mut m = Motion::at_location(&scene, start, 5.0).unwrap();
        m.move_to(&scene, far).unwrap();
        m.update(&scene);
        m.stop();
        assert!(!m.is_moving());
        assert_eq!(m.position(), Vec2::new(15.0, 10.0));
        assert!(!m.update(&scene));
    }

    #[test]
    fn new_move_replaces_old_journey() {
        let (scene, start, near, far) = super::helpers::open_room();
        let mut m = Motion::at_location(&scene, start, 5.0).unwrap();
        m.move_to(&scene, far).unwrap();
        m.move_to(&scene, near).unwrap();
        assert_eq!(m.destination(), Some(near));
        assert!(m.update(&scene));
        assert_eq!(m.position(), Vec2::new(14.0, 10.0));
    }
}

// ── Multi-room journeys ───────────────────────────────────────────────────────

#[cfg(test)]
mod journey {
    use bdi_core::Vec2;
    use crate::{Motion, MotionError};

    #[test]
    fn passes_through_hallway_centre_first() {
        let h = super::helpers::house();
        let mut m = Motion::at_location(&h.scene, h.door, 5.0).unwrap();
        m.move_to(&h.scene, h.sofa).unwrap();

        // Heads for the hallway centre (5,5), not the sofa (15,5).
        assert_eq!(m.target(), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(h.scene.path_names(m.path()), ["Hallway", "Living Room"]);

        // Door (0,5) → centre is exactly 5 units: waypoint reached.
        assert!(!m.update(&h.scene));
        assert_eq!(m.position(), Vec2::new(5.0, 5.0));
        assert_eq!(m.target(), Some(Vec2::new(15.0, 5.0)));
        assert_eq!(m.remaining_waypoints(), 1);

        assert!(!m.update(&h.scene));
        assert_eq!(m.position(), Vec2::new(10.0, 5.0));

        assert!(m.update(&h.scene));
        assert_eq!(m.position(), Vec2::new(15.0, 5.0));
        assert_eq!(h.scene.room(m.current_room()).unwrap().name(), "Living Room");
    }

    #[test]
    fn at_most_one_waypoint_per_tick() {
        let h = super::helpers::house();
        // Fast enough to cover the whole trip in one step.
        let mut m = Motion::at_location(&h.scene, h.door, 100.0).unwrap();
        m.move_to(&h.scene, h.sofa).unwrap();
        assert!(!m.update(&h.scene));
        assert_eq!(m.position(), Vec2::new(5.0, 5.0));
        assert!(m.update(&h.scene));
    }

    #[test]
    fn reissued_journey_keeps_its_waypoint() {
        let h = super::helpers::house();
        let mut m = Motion::at_location(&h.scene, h.door, 5.0).unwrap();

        let mut arrived_at = None;
        for tick in 0..10 {
            m.move_to(&h.scene, h.sofa).unwrap();
            if m.update(&h.scene) {
                arrived_at = Some(tick);
                break;
            }
        }
        assert_eq!(arrived_at, Some(2));
        assert_eq!(m.position(), Vec2::new(15.0, 5.0));
    }

    #[test]
    fn redirect_plans_from_room_underfoot() {
        let h = super::helpers::house();
        let mut m = Motion::at_location(&h.scene, h.door, 2.0).unwrap();
        m.move_to(&h.scene, h.sofa).unwrap();
        for _ in 0..6 {
            m.update(&h.scene);
        }
        // Past the doorway but the last waypoint reached was the hallway's.
        assert_eq!(m.position(), Vec2::new(11.0, 5.0));
        assert_eq!(h.scene.room(m.current_room()).unwrap().name(), "Hallway");

        m.move_to(&h.scene, h.tv).unwrap();
        assert_eq!(h.scene.room(m.current_room()).unwrap().name(), "Living Room");
        assert_eq!(h.scene.path_names(m.path()), ["Living Room"]);
        assert_eq!(m.target(), Some(Vec2::new(18.0, 5.0)));
    }

    #[test]
    fn unreachable_destination_stays_idle() {
        let h = super::helpers::house();
        let mut m = Motion::at_location(&h.scene, h.door, 5.0).unwrap();
        m.move_to(&h.scene, h.sofa).unwrap();
        m.move_to(&h.scene, h.shed).unwrap();
        assert!(!m.is_moving());
        assert_eq!(m.target(), None);
        assert!(m.path().is_empty());
        assert_eq!(m.position(), Vec2::new(0.0, 5.0));
    }

    #[test]
    fn unknown_destination_is_an_error() {
        let h = super::helpers::house();
        let mut m = Motion::at_location(&h.scene, h.door, 5.0).unwrap();
        let err = m.move_to(&h.scene, bdi_core::LocationId(77)).unwrap_err();
        assert!(matches!(err, MotionError::Scene(_)));
    }
}
