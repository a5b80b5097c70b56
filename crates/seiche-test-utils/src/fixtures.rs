//! Grid fixtures and assertion helpers.

use seiche_grid::Grid;

/// An `n x n` grid with every cell set to `value`.
///
/// Panics on invalid dimensions — fixtures are for tests, where a bad
/// size is a bug in the test itself.
pub fn uniform(n: u32, value: f32) -> Grid {
    Grid::filled(n, n, value).expect("test fixture dimensions are valid")
}

/// An `n x n` zero grid with a single cell set to `value`.
pub fn impulse(n: u32, row: u32, col: u32, value: f32) -> Grid {
    let mut g = Grid::square(n).expect("test fixture dimensions are valid");
    g.set(row, col, value);
    g
}

/// Assert two grids share a shape and agree cellwise within `tol`.
pub fn assert_all_close(a: &Grid, b: &Grid, tol: f32) {
    assert!(
        a.same_shape(b),
        "shape mismatch: {}x{} vs {}x{}",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols()
    );
    for (i, (&x, &y)) in a.as_slice().iter().zip(b.as_slice().iter()).enumerate() {
        assert!(
            (x - y).abs() <= tol,
            "cell {i} differs: {x} vs {y} (tol {tol})"
        );
    }
}
