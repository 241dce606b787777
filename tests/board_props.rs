use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{
    Board, BoardError, BoardGenerator, Coordinate, Orientation, Ship, ShotOutcome, BOARD_SIZE,
    TOTAL_SHIP_CELLS,
};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    BoardGenerator::default().generate(&mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shot_is_idempotent(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        let target = Coordinate::new(row, col);
        board.fire_at(target).unwrap();
        let rendered = board.to_string();
        let destroyed = board.destroyed_count();
        prop_assert_eq!(board.fire_at(target).unwrap_err(), BoardError::AlreadyTargeted);
        prop_assert_eq!(board.to_string(), rendered);
        prop_assert_eq!(board.destroyed_count(), destroyed);
    }

    #[test]
    fn off_board_rejected(seed in any::<u64>(), row in -20i32..20, col in -20i32..20) {
        prop_assume!(!(0..BOARD_SIZE).contains(&row) || !(0..BOARD_SIZE).contains(&col));
        let mut board = random_board(seed);
        prop_assert_eq!(board.fire_at(Coordinate::new(row, col)).unwrap_err(), BoardError::OutOfBounds);
    }

    #[test]
    fn off_board_placement_rejected(
        row in -20i32..20,
        col in -20i32..20,
        length in 1usize..4,
        vertical in any::<bool>()
    ) {
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let ship = Ship::new(Coordinate::new(row, col), length, orientation);
        let mut board = Board::new(BOARD_SIZE);
        prop_assume!(ship.hull().any(|cell| !board.contains(cell)));
        prop_assert_eq!(board.place_ship(ship).unwrap_err(), BoardError::OutOfBounds);
        prop_assert!(board.ships().is_empty());
        prop_assert!(!board.is_occupied(Coordinate::new(0, 0)));
    }

    #[test]
    fn generated_ships_never_touch(seed in any::<u64>()) {
        let board = random_board(seed);
        let ships = board.ships();
        prop_assert_eq!(ships.iter().map(|s| s.length()).sum::<usize>(), TOTAL_SHIP_CELLS);
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for cell in a.hull() {
                    let apart = b.hull().all(|other| {
                        (other.row - cell.row).abs() > 1 || (other.col - cell.col).abs() > 1
                    });
                    prop_assert!(apart, "{:?} touches {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn defeated_iff_all_sunk(seed in any::<u64>(), shots in 0usize..60) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut sunk = 0;
        for _ in 0..shots {
            let target = Coordinate::new(rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE));
            if let Ok(ShotOutcome::Sunk) = board.fire_at(target) {
                sunk += 1;
            }
            prop_assert_eq!(board.destroyed_count(), sunk);
            prop_assert_eq!(
                board.is_defeated(),
                board.ships().iter().all(|s| s.remaining_hits() == 0)
            );
        }
    }
}
