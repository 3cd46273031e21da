//! Unit tests for bt-grid.

#[cfg(test)]
mod grid_tests {
    use bt_core::{Population, Style};

    use crate::{Census, Cell, Grid, GridError, Location};

    #[test]
    fn from_rows_parses_glyphs() {
        let grid = Grid::from_rows(&[
            "e....",
            ".n...",
            ".....",
            ".....",
            "....e",
        ])
        .unwrap();
        assert_eq!(grid.dim(), 5);
        assert_eq!(grid.len(), 25);
        assert_eq!(grid.style(Location::new(0, 0)), Style::Endline);
        assert_eq!(grid.style(Location::new(1, 1)), Style::Newline);
        assert_eq!(grid.style(Location::new(4, 4)), Style::Endline);
        assert_eq!(grid.style(Location::new(2, 2)), Style::Empty);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Grid::from_rows(&["e....", "...", ".....", ".....", "....."]).unwrap_err();
        assert_eq!(err, GridError::NotSquare { row: 1, width: 3, dim: 5 });
    }

    #[test]
    fn from_rows_rejects_unknown_glyph() {
        let err = Grid::from_rows(&["e....", "..x..", ".....", ".....", "....."]).unwrap_err();
        assert_eq!(err, GridError::UnknownGlyph { row: 1, col: 2, glyph: 'x' });
    }

    #[test]
    fn display_matches_rows() {
        let rows = ["en...", ".....", "..n..", ".....", "....e"];
        let grid = Grid::from_rows(&rows).unwrap();
        let expected: String = rows.iter().map(|r| format!("{r}\n")).collect();
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn neighbor_counts_are_clipped() {
        let grid = Grid::empty(5);
        assert_eq!(grid.neighbors(Location::new(0, 0)).count(), 3);
        assert_eq!(grid.neighbors(Location::new(4, 4)).count(), 3);
        assert_eq!(grid.neighbors(Location::new(0, 2)).count(), 5);
        assert_eq!(grid.neighbors(Location::new(2, 4)).count(), 5);
        assert_eq!(grid.neighbors(Location::new(2, 2)).count(), 8);
    }

    #[test]
    fn corner_never_wraps() {
        let grid = Grid::empty(5);
        let mut n: Vec<_> = grid.neighbors(Location::new(0, 0)).collect();
        n.sort();
        assert_eq!(n, [Location::new(0, 1), Location::new(1, 0), Location::new(1, 1)]);
        assert!(!n.contains(&Location::new(4, 4)));
    }

    #[test]
    fn checked_access() {
        let mut grid = Grid::empty(5);
        assert!(grid.get(Location::new(5, 0)).is_none());
        assert!(grid.get(Location::new(0, 5)).is_none());
        assert!(grid.get_mut(Location::new(0, 7)).is_none());
        assert_eq!(grid.style(Location::new(9, 9)), Style::Empty);
        assert_eq!(grid.get(Location::new(4, 4)), Some(&Cell::EMPTY));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let grid = Grid::empty(5);
        // (0, 7) would alias (1, 2) without the bounds check.
        let _cell = &grid[Location::new(0, 7)];
    }

    #[test]
    fn locations_are_row_major() {
        let grid = Grid::empty(5);
        let locs: Vec<_> = grid.locations().take(7).collect();
        assert_eq!(locs[4], Location::new(0, 4));
        assert_eq!(locs[5], Location::new(1, 0));
        assert_eq!(grid.index_of(Location::new(3, 2)), 17);
        assert_eq!(grid.location_of(17), Location::new(3, 2));
    }

    #[test]
    fn census_counts_styles() {
        let grid = Grid::from_rows(&["ee...", "nnn..", ".....", ".....", "....."]).unwrap();
        let census = grid.census();
        assert_eq!(census, Census { endline: 2, newline: 3, empty: 20 });
        assert_eq!(census.total(), 25);
        assert!(census.matches(&Population::new(5, 2, 3).unwrap()));
        assert!(!census.matches(&Population::new(5, 3, 2).unwrap()));
    }

    #[test]
    fn relocate_moves_style_and_flags_both_cells() {
        let mut grid = Grid::from_rows(&["n....", ".....", ".....", ".....", "....."]).unwrap();
        let from = Location::new(0, 0);
        let to = Location::new(3, 3);
        grid[from].happiness = 0.2;

        assert_eq!(grid.relocate(from, to), Style::Newline);
        assert_eq!(grid[from].style, Style::Empty);
        assert_eq!(grid[to].style, Style::Newline);
        assert!(grid[from].moved && grid[to].moved);
        assert_eq!(grid[to].happiness, 1.0);
        // The vacated cell does not keep the unhappy score it had.
        assert_eq!(grid[from].happiness, 1.0);

        grid.clear_moved();
        assert!(grid.cells().iter().all(|c| !c.moved));
    }
}

#[cfg(test)]
mod builder_tests {
    use bt_core::{Population, SimRng};

    use crate::{GridBuilder, GridError};

    #[test]
    fn places_exact_counts() {
        let pop = Population::new(15, 72, 108).unwrap();
        let grid = GridBuilder::new(15, pop).build(&mut SimRng::new(41)).unwrap();
        assert!(grid.census().matches(&pop));
    }

    #[test]
    fn same_seed_same_layout() {
        let pop = Population::new(10, 30, 40).unwrap();
        let a = GridBuilder::new(10, pop).build(&mut SimRng::new(7)).unwrap();
        let b = GridBuilder::new(10, pop).build(&mut SimRng::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let pop = Population::new(20, 150, 150).unwrap();
        let a = GridBuilder::new(20, pop).build(&mut SimRng::new(1)).unwrap();
        let b = GridBuilder::new(20, pop).build(&mut SimRng::new(2)).unwrap();
        assert_ne!(a, b, "300 agents on 400 cells should not land identically");
    }

    #[test]
    fn completely_full_grid() {
        let pop = Population::new(5, 10, 15).unwrap();
        assert_eq!(pop.vacancies, 0);
        let grid = GridBuilder::new(5, pop).build(&mut SimRng::new(3)).unwrap();
        assert_eq!(grid.census().empty, 0);
        assert_eq!(grid.census().endline, 10);
    }

    #[test]
    fn overfull_population_is_rejected() {
        let pop = bt_core::Population { endline: 20, newline: 10, vacancies: 0 };
        let err = GridBuilder::new(5, pop).build(&mut SimRng::new(0)).unwrap_err();
        assert_eq!(err, GridError::Overfull { agents: 30, dim: 5 });
    }

    #[test]
    fn fresh_cells_start_unmoved_and_happy() {
        let pop = Population::new(6, 10, 10).unwrap();
        let grid = GridBuilder::new(6, pop).build(&mut SimRng::new(5)).unwrap();
        assert!(grid.cells().iter().all(|c| !c.moved && c.happiness == 1.0));
    }
}

#[cfg(test)]
mod happiness_tests {
    use bt_core::{Population, SimRng};

    use crate::{
        Grid, GridBuilder, Location, Neighborhood, average_happiness, evaluate_all,
        unhappy_count,
    };

    #[test]
    fn isolated_agent_is_fully_happy() {
        let mut grid = Grid::from_rows(&[".....", ".....", "..e..", ".....", "....."]).unwrap();
        let n = Neighborhood::of(&grid, Location::new(2, 2));
        assert_eq!(n, Neighborhood { friends: 0, enemies: 0 });
        assert_eq!(n.happiness(), 1.0);

        assert_eq!(evaluate_all(&mut grid), 1);
        assert_eq!(grid[Location::new(2, 2)].happiness, 1.0);
    }

    #[test]
    fn friends_only_is_fully_happy() {
        let grid = Grid::from_rows(&["nnn..", "nnn..", "nnn..", ".....", "....."]).unwrap();
        let n = Neighborhood::of(&grid, Location::new(1, 1));
        assert_eq!(n, Neighborhood { friends: 8, enemies: 0 });
        assert_eq!(n.happiness(), 1.0);
    }

    #[test]
    fn outnumbered_agent() {
        // (1,1) has one endline friend at (2,2) and six newline enemies.
        let grid = Grid::from_rows(&["nnn..", "nen..", "n.e..", ".....", "....."]).unwrap();
        let n = Neighborhood::of(&grid, Location::new(1, 1));
        assert_eq!(n, Neighborhood { friends: 1, enemies: 6 });
        assert!((n.happiness() - 1.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn only_enemies_is_zero() {
        let grid = Grid::from_rows(&["en...", "nn...", ".....", ".....", "....."]).unwrap();
        assert_eq!(Neighborhood::of(&grid, Location::new(0, 0)).happiness(), 0.0);
    }

    #[test]
    fn empty_neighbors_are_ignored() {
        // Corner agent: one friend, one enemy, one empty → 0.5.
        let grid = Grid::from_rows(&["ee...", ".n...", ".....", ".....", "....."]).unwrap();
        let n = Neighborhood::of(&grid, Location::new(0, 0));
        assert_eq!(n, Neighborhood { friends: 1, enemies: 1 });
        assert_eq!(n.happiness(), 0.5);
    }

    #[test]
    fn corner_ignores_opposite_corner() {
        // An enemy at (4,4) must not affect the agent at (0,0).
        let mut grid = Grid::from_rows(&["e....", ".....", ".....", ".....", "....n"]).unwrap();
        evaluate_all(&mut grid);
        assert_eq!(grid[Location::new(0, 0)].happiness, 1.0);
        assert_eq!(grid[Location::new(4, 4)].happiness, 1.0);
    }

    #[test]
    fn empty_subject_has_no_tally() {
        let grid = Grid::from_rows(&["nnn..", "n.n..", "nnn..", ".....", "....."]).unwrap();
        assert_eq!(Neighborhood::of(&grid, Location::new(1, 1)), Neighborhood::default());
    }

    #[test]
    fn average_undefined_without_agents() {
        let grid = Grid::empty(5);
        assert_eq!(average_happiness(&grid), None);
    }

    #[test]
    fn average_over_occupied_cells_only() {
        let mut grid = Grid::from_rows(&["en...", ".....", ".....", ".....", "....e"]).unwrap();
        evaluate_all(&mut grid);
        // (0,0) and (0,1) are 0.0 each, (4,4) is 1.0.
        let avg = average_happiness(&grid).unwrap();
        assert!((avg - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(unhappy_count(&grid, 0.5), 2);
    }

    #[test]
    fn random_grid_happiness_in_bounds() {
        let pop = Population::new(20, 160, 160).unwrap();
        let mut grid = GridBuilder::new(20, pop).build(&mut SimRng::new(11)).unwrap();
        assert_eq!(evaluate_all(&mut grid), 320);
        for cell in grid.cells().iter().filter(|c| c.is_occupied()) {
            assert!((0.0..=1.0).contains(&cell.happiness));
        }
        let avg = average_happiness(&grid).unwrap();
        assert!((0.0..=1.0).contains(&avg));
    }

    #[test]
    fn evaluation_is_order_independent() {
        let pop = Population::new(12, 50, 60).unwrap();
        let mut grid = GridBuilder::new(12, pop).build(&mut SimRng::new(4)).unwrap();
        evaluate_all(&mut grid);
        for loc in grid.locations() {
            if grid[loc].is_occupied() {
                let expected = Neighborhood::of(&grid, loc).happiness();
                assert_eq!(grid[loc].happiness, expected, "at {loc}");
            }
        }
    }
}
