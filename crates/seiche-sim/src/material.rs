//! The static per-cell material coefficient map.

use seiche_grid::{Grid, GridError};

/// A per-cell material coefficient map, fixed at construction.
///
/// Models a material interface through coefficient variation: the grid
/// is partitioned into three contiguous horizontal bands (top, middle,
/// bottom thirds by row) each holding one constant. The map is never
/// mutated during simulation — only scaled by the per-step modulation
/// factor when the force is assembled.
#[derive(Debug, Clone)]
pub struct MaterialMap {
    coefficients: Grid,
}

impl MaterialMap {
    /// Build an `n x n` map from three band coefficients.
    ///
    /// Rows `[0, n/3)` take `bands[0]`, rows `[n/3, 2n/3)` take
    /// `bands[1]`, and rows `[2n/3, n)` take `bands[2]` (integer
    /// division; for very small grids the earlier bands may be empty).
    pub fn banded(n: u32, bands: [f64; 3]) -> Result<Self, GridError> {
        let mut coefficients = Grid::square(n)?;
        for r in 0..n {
            let band = if r < n / 3 {
                bands[0]
            } else if r < 2 * n / 3 {
                bands[1]
            } else {
                bands[2]
            };
            for c in 0..n {
                coefficients.set(r, c, band as f32);
            }
        }
        Ok(Self { coefficients })
    }

    /// Build an `n x n` map with a single coefficient everywhere.
    pub fn uniform(n: u32, coefficient: f64) -> Result<Self, GridError> {
        Ok(Self {
            coefficients: Grid::filled(n, n, coefficient as f32)?,
        })
    }

    /// The underlying coefficient grid.
    pub fn grid(&self) -> &Grid {
        &self.coefficients
    }

    /// Flat row-major view of the coefficients.
    pub fn as_slice(&self) -> &[f32] {
        self.coefficients.as_slice()
    }
}
