//! Generation-update rule for Conway's Game of Life on a torus.
//!
//! Neighbor coordinates wrap modulo the grid dimensions, so edges connect to
//! opposite edges. A live cell survives with 2 or 3 live neighbors; a dead
//! cell is born with exactly 3.

use crate::engine::Grid;

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

/// Standard survival/birth rule (B3/S23).
///
/// - Alive: stays alive iff `live_neighbors` is 2 or 3.
/// - Dead: becomes alive iff `live_neighbors` is exactly 3.
#[inline]
pub fn transition(alive: bool, live_neighbors: u8) -> bool {
    if alive {
        live_neighbors == 2 || live_neighbors == 3
    } else {
        live_neighbors == 3
    }
}

/// Count live cells among the 8 wrap-around neighbors of (row, col).
///
/// Each offset wraps independently modulo `rows`/`columns`. For dimensions
/// of 1 or 2 several offsets land on the same cell (a 1x1 grid's cell is its
/// own neighbor under every offset); coincident cells are counted once per
/// offset, faithful to the modulo arithmetic.
pub fn count_live_neighbors(
    cells: &[bool],
    rows: usize,
    columns: usize,
    row: usize,
    col: usize,
) -> u8 {
    let mut count = 0;
    for dr in 0..3 {
        for dc in 0..3 {
            if dr == 1 && dc == 1 {
                continue; // the cell itself
            }
            let r = (row + dr + rows - 1) % rows;
            let c = (col + dc + columns - 1) % columns;
            if cells[r * columns + c] {
                count += 1;
            }
        }
    }
    count
}

/// Compute one row of the next generation.
///
/// Row offsets are resolved once per row so the inner loop only wraps the
/// column coordinate.
fn step_row(cells: &[bool], rows: usize, columns: usize, row: usize, out_row: &mut [bool]) {
    let row_prev = ((row + rows - 1) % rows) * columns;
    let row_curr = row * columns;
    let row_next = ((row + 1) % rows) * columns;

    for (col, out) in out_row.iter_mut().enumerate() {
        let col_prev = (col + columns - 1) % columns;
        let col_next = (col + 1) % columns;

        let live = u8::from(cells[row_prev + col_prev])
            + u8::from(cells[row_prev + col])
            + u8::from(cells[row_prev + col_next])
            + u8::from(cells[row_curr + col_prev])
            + u8::from(cells[row_curr + col_next])
            + u8::from(cells[row_next + col_prev])
            + u8::from(cells[row_next + col])
            + u8::from(cells[row_next + col_next]);

        *out = transition(cells[row_curr + col], live);
    }
}

/// Compute the next generation into a caller-owned buffer.
///
/// `out` must have length `grid.len()`. The input grid is only read.
pub fn next_generation_into(grid: &Grid, out: &mut [bool]) {
    debug_assert_eq!(out.len(), grid.len());

    let cells = grid.cells();
    let rows = grid.rows();
    let columns = grid.columns();

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native: rows are independent, compute them in parallel
        out.par_chunks_mut(columns)
            .enumerate()
            .for_each(|(row, out_row)| {
                step_row(cells, rows, columns, row, out_row);
            });
    }

    #[cfg(target_arch = "wasm32")]
    {
        // WASM: sequential row loop
        for (row, out_row) in out.chunks_mut(columns).enumerate() {
            step_row(cells, rows, columns, row, out_row);
        }
    }
}

/// Compute the next generation of `grid` under the toroidal Life rule.
///
/// Pure: the input is never mutated; a new grid of identical dimensions is
/// allocated and returned. Total for any valid grid, degenerate shapes
/// included.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut out = vec![false; grid.len()];
    next_generation_into(grid, &mut out);
    Grid::from_parts(grid.rows(), grid.columns(), out)
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..=16, 1usize..=16).prop_flat_map(|(rows, columns)| {
            proptest::collection::vec(any::<bool>(), rows * columns).prop_map(
                move |cells| {
                    let mut grid = Grid::new(rows, columns).unwrap();
                    for (i, alive) in cells.into_iter().enumerate() {
                        if alive {
                            grid.set(i / columns, i % columns, true).unwrap();
                        }
                    }
                    grid
                },
            )
        })
    }

    proptest! {
        #[test]
        fn next_generation_preserves_dimensions_and_input(grid in arb_grid()) {
            let before = grid.clone();
            let next = next_generation(&grid);

            prop_assert_eq!(next.rows(), grid.rows());
            prop_assert_eq!(next.columns(), grid.columns());
            prop_assert_eq!(grid, before);
        }

        #[test]
        fn row_path_always_matches_leaf_functions(grid in arb_grid()) {
            let next = next_generation(&grid);
            for row in 0..grid.rows() {
                for col in 0..grid.columns() {
                    let live = count_live_neighbors(
                        grid.cells(),
                        grid.rows(),
                        grid.columns(),
                        row,
                        col,
                    );
                    let expected = transition(grid.get(row, col).unwrap(), live);
                    prop_assert_eq!(next.get(row, col).unwrap(), expected);
                }
            }
        }
    }
}
