use proptest::prelude::*;
use specfit::bisec;

fn sorted_grid() -> impl Strategy<Value = Vec<f32>> {
    (-1_000.0f32..1_000.0, prop::collection::vec(0.01f32..10.0, 1..64)).prop_map(|(start, steps)| {
        let mut grid = Vec::with_capacity(steps.len() + 1);
        grid.push(start);
        for step in steps {
            let next = grid[grid.len() - 1] + step;
            grid.push(next);
        }
        grid
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 512, .. ProptestConfig::default() })]

    #[test]
    fn in_range_queries_are_bracketed(grid in sorted_grid(), t in 0.0f32..=1.0) {
        let first = grid[0];
        let last = grid[grid.len() - 1];
        let query = (first + t * (last - first)).clamp(first, last);

        let i = bisec(&grid, query).expect("query lies inside the grid");
        prop_assert!(i <= grid.len() - 2);
        prop_assert!(grid[i] <= query);
        prop_assert!(query < grid[i + 1] || (query == grid[i + 1] && query == last));
    }

    #[test]
    fn out_of_range_queries_are_rejected(grid in sorted_grid(), gap in 0.001f32..100.0) {
        let first = grid[0];
        let last = grid[grid.len() - 1];
        prop_assert_eq!(bisec(&grid, first - gap - first.abs() * 1e-6), None);
        prop_assert_eq!(bisec(&grid, last + gap + last.abs() * 1e-6), None);
    }

    #[test]
    fn endpoints_map_to_first_and_last_cell(grid in sorted_grid()) {
        prop_assert_eq!(bisec(&grid, grid[0]), Some(0));
        prop_assert_eq!(bisec(&grid, grid[grid.len() - 1]), Some(grid.len() - 2));
    }

    #[test]
    fn grid_nodes_locate_to_themselves(grid in sorted_grid(), pick in any::<prop::sample::Index>()) {
        let j = pick.index(grid.len() - 1);
        prop_assert_eq!(bisec(&grid, grid[j]), Some(j));
    }
}
