//! Unit tests for rn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LocationId, RoadId};

    #[test]
    fn index_roundtrip() {
        let id = LocationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LocationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(RoadId(0) < RoadId(1));
        assert!(LocationId(100) > LocationId(99));
    }

    #[test]
    fn display() {
        assert_eq!(RoadId(7).to_string(), "RoadId(7)");
        assert_eq!(LocationId(3).to_string(), "LocationId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Coordinate;

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(12.5, 3.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn finiteness() {
        assert!(Coordinate::new(1.0, 2.0).is_finite());
        assert!(!Coordinate::new(f64::INFINITY, 2.0).is_finite());
        assert!(!Coordinate::new(1.0, f64::NAN).is_finite());
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn reverse_is_involution() {
        for d in Direction::BOTH {
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().reverse(), d);
        }
    }

    #[test]
    fn indices_are_distinct() {
        assert_eq!(Direction::EndPointOne.index(), 0);
        assert_eq!(Direction::EndPointTwo.index(), 1);
    }
}

#[cfg(test)]
mod rules {
    use crate::{Coordinate, ErrorKind, NetworkRules};

    #[test]
    fn defaults_are_consistent() {
        assert!(NetworkRules::default().validate().is_ok());
    }

    #[test]
    fn identifier_format() {
        let rules = NetworkRules::default();
        assert!(rules.is_valid_identifier("R1"));
        assert!(rules.is_valid_identifier("E40"));
        assert!(!rules.is_valid_identifier("r1"), "must start uppercase");
        assert!(!rules.is_valid_identifier("RA"), "tail must be digits");
        assert!(!rules.is_valid_identifier("R"), "too short");
        assert!(!rules.is_valid_identifier("E403"), "too long");
        assert!(!rules.is_valid_identifier(""));
    }

    #[test]
    fn identifier_bounds_follow_rules() {
        let rules = NetworkRules { max_identifier_len: 5, ..NetworkRules::default() };
        assert!(rules.is_valid_identifier("E4031"));
    }

    #[test]
    fn address_format() {
        let rules = NetworkRules::default();
        assert!(rules.is_valid_address("Main street 12, Leuven"));
        assert!(!rules.is_valid_address("main street"));
        assert!(!rules.is_valid_address("A"));
        assert!(!rules.is_valid_address("Bad; address"));
    }

    #[test]
    fn end_point_bounds() {
        let rules = NetworkRules::default();
        assert!(rules.is_valid_end_point(Coordinate::new(0.0, 0.0)));
        assert!(rules.is_valid_end_point(Coordinate::new(70.0, 70.0)));
        assert!(!rules.is_valid_end_point(Coordinate::new(-1.0, 5.0)));
        assert!(!rules.is_valid_end_point(Coordinate::new(5.0, 70.5)));
    }

    #[test]
    fn speeds() {
        let rules = NetworkRules::default();
        assert!(rules.are_valid_speeds(19.5, 10.0));
        assert!(rules.are_valid_speeds(10.0, 10.0));
        assert!(!rules.are_valid_speeds(10.0, 12.0), "average above limit");
        assert!(!rules.are_valid_speeds(10.0, 0.0), "average must be positive");
        assert!(!rules.are_valid_speeds(f32::INFINITY, 5.0));
    }

    #[test]
    fn delays() {
        let rules = NetworkRules::default();
        assert!(rules.is_valid_delay(0.0));
        assert!(rules.is_valid_delay(12.0));
        assert!(rules.is_valid_delay(f32::INFINITY));
        assert!(!rules.is_valid_delay(-1.0));
        assert!(!rules.is_valid_delay(f32::NAN));
    }

    #[test]
    fn inconsistent_rules_rejected() {
        let rules = NetworkRules {
            min_identifier_len: 4,
            max_identifier_len: 3,
            ..NetworkRules::default()
        };
        let err = rules.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let rules = NetworkRules { default_speed_limit: -1.0, ..NetworkRules::default() };
        assert!(rules.validate().is_err());
    }
}

#[cfg(test)]
mod error {
    use crate::{Direction, ErrorKind, LocationId, NetworkError, RoadId};

    #[test]
    fn kinds() {
        assert_eq!(
            NetworkError::DisconnectedSegment { index: 1, at: LocationId(0) }.kind(),
            ErrorKind::Construction
        );
        assert_eq!(
            NetworkError::IllegalDirection { road: RoadId(0), direction: Direction::EndPointOne }
                .kind(),
            ErrorKind::Direction
        );
        assert_eq!(NetworkError::SegmentIndex { index: 3, len: 2 }.kind(), ErrorKind::Index);
        assert_eq!(NetworkError::RoadTerminated(RoadId(1)).kind(), ErrorKind::State);
        assert_eq!(NetworkError::LocationNotFound(LocationId(9)).kind(), ErrorKind::Lookup);
    }

    #[test]
    fn display() {
        let err = NetworkError::SegmentIndex { index: 3, len: 2 };
        assert_eq!(err.to_string(), "segment index 3 out of bounds for a route with 2 segments");
    }
}
