use nalgebra as na;
use ndarray::Array2;
use num_traits::Float;

/// Pairwise Euclidean distances, one row per left point, one column per
/// right point.
pub fn distance_matrix<F>(rows: &[na::Point2<F>], cols: &[na::Point2<F>]) -> Array2<F>
where
    F: na::RealField + Float,
{
    Array2::from_shape_fn((rows.len(), cols.len()), |(r, c)| {
        na::distance(&rows[r], &cols[c])
    })
}

/// Greedy minimum assignment: repeatedly takes the smallest distance left
/// over unused rows and unused columns until one side runs out. Ties go to
/// the first minimum in row-major scan order. Greedy, not an optimal
/// assignment: an early pairing can steal a column a later row was
/// closer to.
pub fn greedy_assignment<F>(dist: &Array2<F>) -> Vec<(usize, usize)>
where
    F: na::RealField + Float,
{
    let (nrows, ncols) = dist.dim();
    let mut row_used = vec![false; nrows];
    let mut col_used = vec![false; ncols];
    let mut pairs = Vec::with_capacity(nrows.min(ncols));

    for _ in 0..nrows.min(ncols) {
        let mut best: Option<(usize, usize, F)> = None;

        for r in 0..nrows {
            if row_used[r] {
                continue;
            }

            for c in 0..ncols {
                if col_used[c] {
                    continue;
                }

                let d = dist[(r, c)];
                if best.map_or(true, |(_, _, bd)| d < bd) {
                    best = Some((r, c, d));
                }
            }
        }

        if let Some((r, c, _)) = best {
            row_used[r] = true;
            col_used[c] = true;
            pairs.push((r, c));
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr2;

    fn pt(x: f32, y: f32) -> na::Point2<f32> {
        na::Point2::new(x, y)
    }

    #[test]
    fn distance_matrix_is_rows_by_cols() {
        let rows = [pt(0.0, 0.0), pt(10.0, 0.0)];
        let cols = [pt(3.0, 4.0), pt(10.0, 0.0), pt(0.0, 1.0)];
        let dist = distance_matrix(&rows, &cols);

        assert_eq!(dist.dim(), (2, 3));
        assert_abs_diff_eq!(dist[(0, 0)], 5.0);
        assert_abs_diff_eq!(dist[(0, 1)], 10.0);
        assert_abs_diff_eq!(dist[(0, 2)], 1.0);
        assert_abs_diff_eq!(dist[(1, 1)], 0.0);
    }

    #[test]
    fn picks_the_global_minimum_first() {
        let dist = arr2(&[[9.0f32, 2.0], [1.0, 9.0]]);
        assert_eq!(greedy_assignment(&dist), vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn ties_resolve_in_row_major_order() {
        let dist = arr2(&[[1.0f32, 1.0], [1.0, 1.0]]);
        assert_eq!(greedy_assignment(&dist), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn wide_matrix_leaves_columns_over() {
        let dist = arr2(&[[5.0f32, 1.0, 7.0]]);
        assert_eq!(greedy_assignment(&dist), vec![(0, 1)]);
    }

    #[test]
    fn tall_matrix_leaves_rows_over() {
        let dist = arr2(&[[5.0f32], [1.0], [7.0]]);
        assert_eq!(greedy_assignment(&dist), vec![(1, 0)]);
    }

    #[test]
    fn greedy_is_not_globally_optimal() {
        // Pairing (0,1)+(1,0) would cost 4 total; greedy grabs (0,0) first
        // and eats the 100.
        let dist = arr2(&[[1.0f32, 2.0], [2.0, 100.0]]);
        assert_eq!(greedy_assignment(&dist), vec![(0, 0), (1, 1)]);
    }
}
