//! Boundary (edge) policies for grid operators.

/// How an operator treats indices that fall outside the grid.
///
/// This is a property of the *operator*, not the grid: the same grid is
/// periodic under the Laplacian and clamped under localized kernels.
///
/// # Examples
///
/// ```
/// use seiche_grid::{resolve_axis, Boundary};
///
/// // Wrap: column -1 of a 5-wide grid is column 4 (torus).
/// assert_eq!(resolve_axis(-1, 5, Boundary::Wrap), Some(4));
///
/// // Absorb: out-of-range indices are simply skipped.
/// assert_eq!(resolve_axis(-1, 5, Boundary::Absorb), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Out-of-range index wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-range index is omitted (no contribution, no movement).
    Absorb,
}

/// Resolve a single axis value under the given boundary policy.
///
/// Returns `Some(resolved)` for an in-range or wrapped index, `None`
/// for an Absorb out-of-range index.
pub fn resolve_axis(val: i32, len: i32, boundary: Boundary) -> Option<i32> {
    if val >= 0 && val < len {
        return Some(val);
    }
    match boundary {
        Boundary::Absorb => None,
        Boundary::Wrap => Some(((val % len) + len) % len),
    }
}
