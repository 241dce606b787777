use sea_battle::{Coordinate, Orientation, Ship};

#[test]
fn test_hull_horizontal() {
    let ship = Ship::new(Coordinate::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.hull().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(2, 1), Coordinate::new(2, 2), Coordinate::new(2, 3)]
    );
}

#[test]
fn test_hull_vertical_and_is_hit_by() {
    let ship = Ship::new(Coordinate::new(0, 4), 2, Orientation::Vertical);
    let cells: Vec<_> = ship.hull().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 4), Coordinate::new(1, 4)]);
    assert!(ship.is_hit_by(Coordinate::new(1, 4)));
    assert!(!ship.is_hit_by(Coordinate::new(2, 4)));
    assert!(!ship.is_hit_by(Coordinate::new(0, 5)));
}

#[test]
fn test_new_ship_is_intact() {
    let ship = Ship::new(Coordinate::new(5, 5), 1, Orientation::Horizontal);
    assert_eq!(ship.remaining_hits(), 1);
    assert_eq!(ship.length(), 1);
    assert!(!ship.is_sunk());
}

#[test]
fn test_coordinate_equality_and_display() {
    assert_eq!(Coordinate::new(1, 2), Coordinate { row: 1, col: 2 });
    assert_ne!(Coordinate::new(1, 2), Coordinate::new(2, 1));
    assert_eq!(Coordinate::new(0, 5).to_string(), "1 6");
    assert_eq!(Coordinate::new(3, 3).neighborhood().count(), 9);
}
