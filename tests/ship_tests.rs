use naval_combat::{Orientation, Point, Ship};

fn pt(row: usize, col: usize) -> Point {
    Point::new(row, col).unwrap()
}

#[test]
fn cells_follow_orientation() {
    let ship = Ship::new(pt(0, 0), 4, Orientation::Vertical);
    let cells: Vec<_> = ship.cells().unwrap().collect();
    assert_eq!(cells, vec![pt(0, 0), pt(1, 0), pt(2, 0), pt(3, 0)]);
    for p in cells {
        assert!(ship.contains(p));
    }
    assert!(!ship.contains(pt(4, 0)));
    assert!(!ship.contains(pt(0, 1)));
}

#[test]
fn footprint_matches_cells() {
    let ship = Ship::new(pt(2, 1), 3, Orientation::Horizontal);
    let mask = ship.footprint().unwrap();
    assert_eq!(mask.count_ones(), 3);
    for c in 1..4 {
        assert!(mask.get(2, c).unwrap());
    }
    assert!(!mask.get(2, 4).unwrap());
}

#[test]
fn overhanging_ship_has_no_footprint() {
    let ship = Ship::new(pt(3, 7), 4, Orientation::Horizontal);
    assert!(!ship.fits());
    assert!(ship.cells().is_none());
    assert!(ship.footprint().is_none());
}

#[test]
fn new_ship_is_undamaged() {
    let ship = Ship::new(pt(5, 5), 2, Orientation::Vertical);
    assert_eq!(ship.hits(), 0);
    assert!(!ship.is_sunk());
    assert_eq!(ship.orientation().rotated(), Orientation::Horizontal);
}

#[test]
fn absurd_length_does_not_fit() {
    let ship = Ship::new(pt(0, 5), usize::MAX, Orientation::Horizontal);
    assert!(!ship.fits());
    assert!(ship.cells().is_none());
    assert!(ship.contains(pt(0, 9)));
    assert!(!ship.contains(pt(0, 4)));

    let tall = Ship::new(pt(3, 2), usize::MAX, Orientation::Vertical);
    assert!(!tall.fits());
    assert!(tall.contains(pt(9, 2)));
    assert!(!tall.contains(pt(2, 2)));
}
