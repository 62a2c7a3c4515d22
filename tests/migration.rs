mod common;

use common::FlockBuilder;
use flock_lib::model::error::FlockError;
use flock_lib::model::flock::{Flock, FlockState};
use flock_lib::model::state::{Direction, Duck, Species};

#[test]
fn test_three_leg_migration() {
    let mut flock = FlockBuilder::new().with_members(3).build();

    flock.migrate(Direction::North, 10.0).unwrap();
    assert_position!(flock, 0.0, 10.0);
    assert_eq!(flock.total_distance(), 10.0);
    assert_eq!(flock.line_distance_from_start(), 10.0);

    flock.migrate(Direction::East, 5.0).unwrap();
    assert_position!(flock, 5.0, 10.0);
    assert_eq!(flock.total_distance(), 15.0);
    assert_eq!(flock.line_distance_from_start(), 11.18);

    flock.migrate(Direction::South, 10.0).unwrap();
    assert_position!(flock, 5.0, 0.0);
    assert_eq!(flock.total_distance(), 25.0);
    assert_eq!(flock.line_distance_from_start(), 5.0);
}

#[test]
fn test_fill_zero_on_fresh_flock() {
    let mut flock: Flock<Duck> = Flock::new();
    let err = flock.fill(0).unwrap_err();
    assert!(matches!(err, FlockError::InvalidArgument(_)));
    assert_eq!(flock.members().len(), 0);
    assert_eq!(flock.state(), FlockState::Empty);
}

#[test]
fn test_migrate_before_fill() {
    let mut flock = FlockBuilder::new().build();
    let err = flock.migrate(Direction::West, 1.0).unwrap_err();
    assert!(matches!(err, FlockError::IllegalState(_)));
    assert_position!(flock, 0.0, 0.0);
    assert_eq!(flock.total_distance(), 0.0);
}

#[test]
fn test_every_member_flies_and_turns() {
    let flock = FlockBuilder::new()
        .with_members(5)
        .with_species(Species::Goose)
        .with_leg(Direction::North, 35.0)
        .with_leg(Direction::West, 35.0)
        .build();

    assert_all_facing!(flock, Direction::West);
    for duck in flock.members() {
        assert_eq!(duck.flights, 2);
        assert_eq!(duck.distance_flown, 70.0);
        assert!((duck.hours_aloft - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_refill_appends_fresh_members() {
    let mut flock = FlockBuilder::new()
        .with_members(2)
        .with_leg(Direction::East, 3.0)
        .build();
    flock.fill(2).unwrap();

    assert_eq!(flock.len(), 4);
    let flights: Vec<u32> = flock.members().iter().map(|d| d.flights).collect();
    assert_eq!(flights, vec![1, 1, 0, 0]);
    // Flock-level state is untouched by the refill.
    assert_position!(flock, 3.0, 0.0);
}

#[test]
fn test_round_trip_returns_to_origin() {
    let flock = FlockBuilder::new()
        .with_members(1)
        .with_leg(Direction::North, 2.5)
        .with_leg(Direction::East, 2.5)
        .with_leg(Direction::South, 2.5)
        .with_leg(Direction::West, 2.5)
        .build();

    assert_position!(flock, 0.0, 0.0);
    assert_eq!(flock.line_distance_from_start(), 0.0);
    assert_eq!(flock.total_distance(), 10.0);
}

#[test]
fn test_roster_order_is_stable() {
    let mut flock = FlockBuilder::new().with_members(4).build();
    let before: Vec<_> = flock.members().iter().map(|d| d.identity.id).collect();
    flock.migrate(Direction::South, 1.0).unwrap();
    let after: Vec<_> = flock.members().iter().map(|d| d.identity.id).collect();
    assert_eq!(before, after);
}
