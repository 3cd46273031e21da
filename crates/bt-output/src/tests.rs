//! Tests for bt-output.

#[cfg(test)]
mod render_tests {
    use std::io;

    use bt_core::{Population, SimConfig};
    use bt_grid::Grid;
    use bt_sim::SimBuilder;

    use crate::{OutputError, RenderMode, TextRenderer, format_happiness};

    fn isolated_agent() -> (Grid, SimConfig) {
        let grid = Grid::from_rows(&[".....", ".....", "..e..", ".....", "....."]).unwrap();
        let config = SimConfig {
            dim:         5,
            preference:  0.5,
            population:  Population::new(5, 1, 0).unwrap(),
            cycle_limit: Some(1),
            seed:        41,
            fractions:   None,
        };
        (grid, config)
    }

    fn render(mode: RenderMode) -> String {
        let (grid, config) = isolated_agent();
        let mut renderer = TextRenderer::new(Vec::new(), &config, mode);
        let mut sim = SimBuilder::new(config).grid(grid).build().unwrap();
        sim.run(&mut renderer).unwrap();
        assert!(renderer.take_error().is_none());
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn happiness_formatting() {
        assert_eq!(format_happiness(Some(0.5)), "0.50");
        assert_eq!(format_happiness(Some(2.0 / 3.0)), "0.67");
        assert_eq!(format_happiness(None), "n/a");
    }

    #[test]
    fn scroll_mode_prints_grid_then_stats() {
        let text = render(RenderMode::Scroll);
        let expected_cycle_0 = "\
..... \n\
..... \n\
..e.. \n\
..... \n\
..... \n\
Cycle: 0\n\
Number of agent moves: 0\n\
Average happiness: 1.00\n\
Dimensions: 5, Preference Str: 0.50, Vacancy Percentage: 0.96, Newline Percentage: 0.00\n\
\n";
        assert!(text.starts_with(expected_cycle_0), "got:\n{text}");
        assert_eq!(text.matches("Cycle: ").count(), 2);
        assert!(text.contains("Cycle: 1\n"));
        assert!(!text.contains('\x1b'));
        assert!(!text.contains("Control-C"));
    }

    #[test]
    fn frame_mode_redraws_in_place() {
        let text = render(RenderMode::Frame);
        assert!(text.starts_with("\x1b[2J\x1b[1;1H..... \n"));
        assert_eq!(text.matches("\x1b[2J").count(), 2);
        assert_eq!(text.matches("Use Control-C to quit.\n").count(), 2);
    }

    #[test]
    fn parameters_line_shows_requested_fractions() {
        // 7x7 at 25 % / 40 % actually holds 13 vacancies and 14 of 36 newline.
        let config = SimConfig::from_fractions(7, 0.5, 0.25, 0.4)
            .unwrap()
            .with_cycle_limit(Some(1));
        let mut renderer = TextRenderer::new(Vec::new(), &config, RenderMode::Scroll);
        let mut sim = SimBuilder::new(config).build().unwrap();
        sim.run(&mut renderer).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let line = "Dimensions: 7, Preference Str: 0.50, Vacancy Percentage: 0.25, Newline Percentage: 0.40\n";
        assert_eq!(text.matches(line).count(), 2, "got:\n{text}");
    }

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_are_kept_not_raised() {
        let (grid, config) = isolated_agent();
        let mut renderer = TextRenderer::new(BrokenPipe, &config, RenderMode::Scroll);
        let mut sim = SimBuilder::new(config).grid(grid).build().unwrap();
        sim.run(&mut renderer).unwrap();
        assert!(sim.is_terminated());

        match renderer.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            None => panic!("expected a stored error"),
        }
        assert!(renderer.take_error().is_none());
    }
}

#[cfg(test)]
mod ansi_tests {
    use crate::ansi;

    #[test]
    fn cursor_is_one_based() {
        let mut out = Vec::new();
        ansi::set_cursor(&mut out, 0, 0).unwrap();
        ansi::set_cursor(&mut out, 4, 9).unwrap();
        assert_eq!(out, b"\x1b[1;1H\x1b[5;10H");
    }

    #[test]
    fn clear_sequence() {
        let mut out = Vec::new();
        ansi::clear(&mut out).unwrap();
        assert_eq!(out, b"\x1b[2J");
    }
}
