use battleship_solo::{
    populate_fleet, render_grid, FireResult, Grid, SquareContent, ViewMode, FLEET, GRID_COLS,
    GRID_ROWS, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn seeded_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new(GRID_ROWS, GRID_COLS);
    populate_fleet(&mut rng, &mut grid).unwrap();
    grid
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_occupies_exact_cell_count(seed in any::<u64>()) {
        let grid = seeded_grid(seed);
        prop_assert_eq!(grid.ships().len(), FLEET.len());
        let mut cells = 0;
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                if grid.square_content(r, c, ViewMode::Show).unwrap() == SquareContent::ShipHit {
                    cells += 1;
                }
            }
        }
        // distinct occupied cells summing to the fleet total rules out overlap
        prop_assert_eq!(cells, TOTAL_SHIP_CELLS);
    }

    #[test]
    fn hide_mode_reveals_nothing_before_any_shot(seed in any::<u64>()) {
        let grid = seeded_grid(seed);
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                prop_assert_eq!(
                    grid.square_content(r, c, ViewMode::Hide).unwrap(),
                    SquareContent::ClearWater
                );
            }
        }
    }

    #[test]
    fn second_shot_is_waste_and_changes_nothing(
        seed in any::<u64>(),
        row in 0..GRID_ROWS,
        col in 0..GRID_COLS,
    ) {
        let mut grid = seeded_grid(seed);
        let first = grid.fire_at_square(row, col).unwrap();
        prop_assert_ne!(first, FireResult::Waste);
        let fingerprint = render_grid(&grid, ViewMode::Hide);
        prop_assert_eq!(grid.fire_at_square(row, col).unwrap(), FireResult::Waste);
        prop_assert_eq!(render_grid(&grid, ViewMode::Hide), fingerprint);
    }

    #[test]
    fn full_board_sweep_sinks_the_fleet(seed in any::<u64>()) {
        let mut grid = seeded_grid(seed);
        let (mut hits, mut misses, mut sunk, mut wins) = (0usize, 0usize, 0usize, 0usize);
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                match grid.fire_at_square(r, c).unwrap() {
                    FireResult::Hit => hits += 1,
                    FireResult::Miss => misses += 1,
                    FireResult::Sunk => sunk += 1,
                    FireResult::Win => wins += 1,
                    FireResult::Waste => prop_assert!(false, "waste on a fresh square"),
                }
            }
        }
        prop_assert_eq!(hits + sunk + wins, TOTAL_SHIP_CELLS);
        prop_assert_eq!(misses, GRID_ROWS * GRID_COLS - TOTAL_SHIP_CELLS);
        // every kill but the last reports Sunk; the last reports Win
        prop_assert_eq!(sunk, FLEET.len() - 1);
        prop_assert_eq!(wins, 1);
        prop_assert!(!grid.contains_floating_ships());
    }
}
