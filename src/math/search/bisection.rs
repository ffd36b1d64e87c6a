/// Finds the grid cell containing `query`.
///
/// Returns `Some(i)` with `grid[i] <= query < grid[i + 1]`, or `i = len - 2` when
/// `query` equals the last grid value. Both endpoints are accepted. Returns `None`
/// when `query` lies outside `[grid[0], grid[len - 1]]`, is NaN, or when the grid
/// has fewer than two points.
///
/// `grid` must be sorted in non-decreasing order. This is not checked here; use
/// `Spectrum::locate` for a validated grid.
pub fn bisec(grid: &[f32], query: f32) -> Option<usize> {
    if grid.len() < 2 {
        return None;
    }
    if !(query >= grid[0] && query <= grid[grid.len() - 1]) {
        return None;
    }

    let mut lo = 0;
    let mut hi = grid.len() - 1;
    while lo + 1 != hi {
        let mid = lo + (hi - lo) / 2;
        if query < grid[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some(lo)
}
