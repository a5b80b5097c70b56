//! Spatial operators: the periodic discrete Laplacian and the
//! steering-biased radial kernel.
//!
//! Both operators read a frozen view of the field and produce their
//! result separately from it (a fresh grid, or a contribution list the
//! caller applies), so a single step's spatial loop is order-independent.

use crate::boundary::{resolve_axis, Boundary};
use crate::grid::Grid;
use seiche_core::Cell;
use smallvec::SmallVec;

/// Offset distance below which the steering-bias denominator is padded.
/// Keeps the center cell (distance zero) from dividing by zero.
const BIAS_EPSILON: f64 = 1e-5;

/// Collect the flat indices of the 4-connected neighbours of `(r, c)`
/// under the given boundary policy.
fn neighbours_flat(r: i32, c: i32, rows: i32, cols: i32, boundary: Boundary) -> SmallVec<[usize; 4]> {
    let offsets: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    let mut result = SmallVec::new();
    for (dr, dc) in offsets {
        let nr = resolve_axis(r + dr, rows, boundary);
        let nc = resolve_axis(c + dc, cols, boundary);
        if let (Some(nr), Some(nc)) = (nr, nc) {
            result.push(nr as usize * cols as usize + nc as usize);
        }
    }
    result
}

/// Discrete Laplacian with periodic (wraparound) boundaries.
///
/// For every cell: the sum of the four wraparound neighbours minus four
/// times the center value, divided by `dx²`. Column 0's west neighbour
/// is the last column; row 0's north neighbour is the last row. The
/// wraparound is a deliberate periodic-boundary choice — clamped or
/// reflective boundaries produce divergent results.
///
/// # Examples
///
/// ```
/// use seiche_grid::{laplacian, Grid};
///
/// // A spatially constant field has zero Laplacian everywhere.
/// let g = Grid::filled(5, 5, 3.0).unwrap();
/// let lap = laplacian(&g, 1.0);
/// assert!(lap.as_slice().iter().all(|&v| v == 0.0));
/// ```
pub fn laplacian(field: &Grid, dx: f64) -> Grid {
    let rows = field.rows() as i32;
    let cols = field.cols() as i32;
    let inv_dx2 = (1.0 / (dx * dx)) as f32;
    let prev = field.as_slice();

    let mut out = Grid::new(field.rows(), field.cols()).expect("source grid is non-empty");
    let buf = out.as_mut_slice();
    for r in 0..rows {
        for c in 0..cols {
            let i = r as usize * cols as usize + c as usize;
            // Wrap always yields exactly four neighbours.
            let sum: f32 = neighbours_flat(r, c, rows, cols, Boundary::Wrap)
                .iter()
                .map(|&ni| prev[ni])
                .sum();
            buf[i] = (sum - 4.0 * prev[i]) * inv_dx2;
        }
    }
    out
}

/// A unit (or zero) steering direction in `(row, col)` components.
///
/// Built from a heading angle with [`Steering::from_angle`]; the zero
/// vector ([`Steering::NONE`]) suppresses the kernel entirely because
/// the bias multiplies every contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Steering {
    /// Row component of the steering direction.
    pub row: f64,
    /// Column component of the steering direction.
    pub col: f64,
}

impl Steering {
    /// The zero steering vector: every kernel delta vanishes.
    pub const NONE: Steering = Steering { row: 0.0, col: 0.0 };

    /// Unit steering vector for a heading angle in radians:
    /// `(cos θ, sin θ)`.
    pub fn from_angle(angle: f64) -> Self {
        Self {
            row: angle.cos(),
            col: angle.sin(),
        }
    }
}

/// One cell's additive delta from a [`radial_kernel`] evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelContribution {
    /// The in-bounds cell receiving the delta.
    pub cell: Cell,
    /// The signed delta to add to the field at that cell.
    pub delta: f32,
}

/// Evaluate a direction-biased radial kernel around `center`.
///
/// Visits every cell of the `(2·radius + 1)²` square around `center`,
/// admits those with Euclidean offset distance strictly below `radius`,
/// and clamps to grid bounds (out-of-range cells are skipped, not
/// wrapped). Each admitted cell's delta is
///
/// ```text
/// strength * oscillation * (1 - dist/radius) * bias
/// bias = (Δrow·steering.row + Δcol·steering.col) / (dist + ε)
/// ```
///
/// The steering bias multiplies the whole term: a zero steering vector
/// produces zero delta at every cell, and the center cell's bias is
/// zero by the same dot product (the ε padding only guards the
/// division).
///
/// `oscillation` is the caller's time-varying term (the flow simulator
/// passes `sin(t/period)`); the kernel itself is time-free.
pub fn radial_kernel(
    center: Cell,
    radius: u32,
    steering: Steering,
    oscillation: f64,
    strength: f64,
    rows: u32,
    cols: u32,
) -> Vec<KernelContribution> {
    let r_max = radius as i32;
    let radius_f = f64::from(radius);

    let mut out = Vec::new();
    for dr in -r_max..=r_max {
        for dc in -r_max..=r_max {
            let target = center.offset(dr, dc);
            let (Some(row), Some(col)) = (
                resolve_axis(target.row, rows as i32, Boundary::Absorb),
                resolve_axis(target.col, cols as i32, Boundary::Absorb),
            ) else {
                continue;
            };
            let dist = f64::from(dr * dr + dc * dc).sqrt();
            if dist >= radius_f {
                continue;
            }
            let bias = (f64::from(dr) * steering.row + f64::from(dc) * steering.col)
                / (dist + BIAS_EPSILON);
            let delta = strength * oscillation * (1.0 - dist / radius_f) * bias;
            out.push(KernelContribution {
                cell: Cell::new(row, col),
                delta: delta as f32,
            });
        }
    }
    out
}
