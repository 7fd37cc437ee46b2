use battleship_solo::{Orientation, Ship, ShipType};

#[test]
fn test_horizontal_parts_in_anchor_order() {
    let ship = Ship::new(ShipType::new("Test", 4), Orientation::Horizontal, 2, 3);
    let coords: Vec<_> = ship.parts().iter().map(|p| (p.row(), p.col())).collect();
    assert_eq!(coords, vec![(2, 3), (2, 4), (2, 5), (2, 6)]);
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.kind().length(), 4);
}

#[test]
fn test_vertical_parts_in_anchor_order() {
    let ship = Ship::new(ShipType::new("Test", 3), Orientation::Vertical, 5, 1);
    let coords: Vec<_> = ship.parts().iter().map(|p| (p.row(), p.col())).collect();
    assert_eq!(coords, vec![(5, 1), (6, 1), (7, 1)]);
}

#[test]
fn test_floating_until_every_part_hit() {
    let mut ship = Ship::new(ShipType::new("Test", 3), Orientation::Vertical, 0, 0);
    assert!(ship.is_floating());
    ship.record_hit(0);
    ship.record_hit(1);
    assert!(ship.is_floating());
    ship.record_hit(2);
    assert!(!ship.is_floating());
    // sunk is permanent
    ship.record_hit(1);
    assert!(!ship.is_floating());
}

#[test]
fn test_record_hit_ignores_bad_index() {
    let mut ship = Ship::new(ShipType::new("Test", 2), Orientation::Horizontal, 0, 0);
    ship.record_hit(99);
    assert!(ship.is_floating());
    assert!(ship.parts().iter().all(|p| !p.is_hit()));
}
