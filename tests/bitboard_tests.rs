use naval_combat::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u128, 10>::try_new().is_ok());
    let err = BitBoard::<u64, 10>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());
    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
}

#[test]
fn test_dilate_in_middle_and_corner() {
    let centre = BitBoard::<u32, 5>::from_cells([(2, 2)]).unwrap();
    assert_eq!(centre.dilate().count_ones(), 9);

    let corner = BitBoard::<u32, 5>::from_cells([(0, 0)]).unwrap();
    let grown: Vec<_> = corner.dilate().iter_set_bits().collect();
    assert_eq!(grown, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_dilate_segment() {
    let bar = BitBoard::<u128, 10>::from_cells([(9, 7), (9, 8), (9, 9)]).unwrap();
    // rows 8..=9, cols 6..=9
    assert_eq!(bar.dilate().count_ones(), 8);
}

#[test]
fn test_and_or() {
    let a = BitBoard::<u16, 4>::from_cells([(0, 1), (3, 3)]).unwrap();
    let b = BitBoard::<u16, 4>::from_cells([(3, 3), (2, 0)]).unwrap();
    let both: Vec<_> = (a & b).iter_set_bits().collect();
    assert_eq!(both, vec![(3, 3)]);
    let mut all = a;
    all |= b;
    assert_eq!(all, a | b);
    assert_eq!(all.count_ones(), 3);
}
