//! Unit tests for wsn-grid.
//!
//! All tests use small hand-built grids; coordinates are `(x, y)` with `y`
//! growing downward.

#[cfg(test)]
mod helpers {
    use wsn_core::Cell;

    use crate::{GridBuilder, GridModel};

    /// Build a grid from ASCII art.
    ///
    /// `#` wall, `E` exit, `S` sensor (radius 2), `.` open.  Rows are lines.
    pub fn parse(rows: &[&str]) -> GridModel {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let mut b = GridBuilder::new(width, height).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let c = Cell::new(x as i32, y as i32);
                match ch {
                    '#' => b.add_wall(c).unwrap(),
                    'E' => b.add_exit(c).unwrap(),
                    'S' => {
                        b.add_sensor(c, 2).unwrap();
                    }
                    _ => {}
                }
            }
        }
        b.build()
    }
}

// ── Builder & model queries ───────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use wsn_core::{Cell, MAX_SENSOR_RADIUS, SensorId};

    use crate::{CellKind, GridBuilder, GridError};

    #[test]
    fn empty_grid_rejected() {
        assert!(matches!(GridBuilder::new(0, 5), Err(GridError::EmptyGrid { .. })));
        assert!(matches!(GridBuilder::new(5, 0), Err(GridError::EmptyGrid { .. })));
    }

    #[test]
    fn features_are_queryable() {
        let mut b = GridBuilder::new(4, 3).unwrap();
        b.add_wall(Cell::new(1, 1)).unwrap();
        b.add_exit(Cell::new(3, 2)).unwrap();
        let s = b.add_sensor(Cell::new(0, 0), 2).unwrap();
        let g = b.build();

        assert_eq!(s, SensorId(0));
        assert!(g.is_wall(Cell::new(1, 1)));
        assert!(g.is_exit(Cell::new(3, 2)));
        assert!(g.is_sensor(Cell::new(0, 0)));
        assert_eq!(g.kind(Cell::new(2, 2)), CellKind::Open);
        assert_eq!(g.exits(), [Cell::new(3, 2)]);
        assert_eq!(g.walls(), [Cell::new(1, 1)]);
        assert_eq!(g.sensors().len(), 1);
    }

    #[test]
    fn sensor_ids_follow_placement_order() {
        let mut b = GridBuilder::new(5, 5).unwrap();
        let a = b.add_sensor(Cell::new(4, 4), 1).unwrap();
        let c = b.add_sensor(Cell::new(0, 0), 3).unwrap();
        let g = b.build();
        assert_eq!((a, c), (SensorId(0), SensorId(1)));
        assert_eq!(g.sensor(c).unwrap().cell, Cell::new(0, 0));
        assert_eq!(g.max_sensor_radius(), 3);
        assert!(g.sensor(SensorId(2)).is_none());
    }

    #[test]
    fn out_of_bounds_placement_rejected() {
        let mut b = GridBuilder::new(3, 3).unwrap();
        assert_eq!(b.add_wall(Cell::new(3, 0)), Err(GridError::OutOfBounds(Cell::new(3, 0))));
        assert_eq!(b.add_exit(Cell::new(0, -1)), Err(GridError::OutOfBounds(Cell::new(0, -1))));
    }

    #[test]
    fn double_occupancy_rejected() {
        let mut b = GridBuilder::new(3, 3).unwrap();
        b.add_wall(Cell::new(1, 1)).unwrap();
        let err = b.add_exit(Cell::new(1, 1)).unwrap_err();
        assert_eq!(err, GridError::Occupied { cell: Cell::new(1, 1), existing: "wall" });
        // Failed placement leaves the builder untouched.
        assert!(b.build().exits().is_empty());
    }

    #[test]
    fn oversized_radius_rejected() {
        let mut b = GridBuilder::new(3, 3).unwrap();
        let too_far = MAX_SENSOR_RADIUS + 1;
        assert_eq!(b.add_sensor(Cell::new(0, 0), too_far), Err(GridError::RadiusTooLarge(too_far)));
        b.add_sensor(Cell::new(0, 0), MAX_SENSOR_RADIUS).unwrap();
        assert_eq!(b.build().max_sensor_radius(), MAX_SENSOR_RADIUS);
    }

    #[test]
    fn out_of_bounds_queries_are_false() {
        let g = super::helpers::parse(&["#E", "S."]);
        for c in [Cell::new(-1, 0), Cell::new(2, 0), Cell::new(0, 2)] {
            assert!(!g.in_bounds(c));
            assert!(!g.is_wall(c));
            assert!(!g.is_exit(c));
            assert!(!g.is_sensor(c));
            assert!(!g.is_passable(c));
        }
    }

    #[test]
    fn passability() {
        let g = super::helpers::parse(&["#E", "S."]);
        assert!(!g.is_passable(Cell::new(0, 0)), "wall");
        assert!(g.is_passable(Cell::new(1, 0)), "exit");
        assert!(!g.is_passable(Cell::new(0, 1)), "sensor");
        assert!(g.is_passable(Cell::new(1, 1)), "open");
    }

    #[test]
    fn index_roundtrip() {
        let g = GridBuilder::new(7, 3).unwrap().build();
        for i in 0..g.area() {
            let c = g.cell_at(i);
            assert_eq!(g.index_of(c), Some(i));
        }
        assert_eq!(g.index_of(Cell::new(7, 0)), None);
    }
}

// ── Line rasterization ────────────────────────────────────────────────────────

#[cfg(test)]
mod line {
    use wsn_core::Cell;

    use crate::LineCells;

    fn cells(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
        LineCells::new(a.into(), b.into()).map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn single_cell() {
        assert_eq!(cells((3, 3), (3, 3)), [(3, 3)]);
    }

    #[test]
    fn horizontal_includes_both_endpoints() {
        assert_eq!(cells((0, 0), (2, 0)), [(0, 0), (1, 0), (2, 0)]);
        assert_eq!(cells((2, 0), (0, 0)), [(2, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn vertical() {
        assert_eq!(cells((1, 4), (1, 1)), [(1, 4), (1, 3), (1, 2), (1, 1)]);
    }

    #[test]
    fn diagonal_steps_both_axes() {
        assert_eq!(cells((0, 0), (2, 2)), [(0, 0), (1, 1), (2, 2)]);
        assert_eq!(cells((2, 0), (0, 2)), [(2, 0), (1, 1), (0, 2)]);
    }

    #[test]
    fn shallow_slope() {
        assert_eq!(cells((0, 0), (3, 1)), [(0, 0), (1, 0), (2, 1), (3, 1)]);
    }

    #[test]
    fn length_is_chebyshev_plus_one() {
        for (a, b) in [((0, 0), (5, 2)), ((4, 1), (0, 3)), ((2, 2), (1, 6))] {
            let n = LineCells::new(a.into(), b.into()).count();
            assert_eq!(n as u32, Cell::from(a).chebyshev(b.into()) + 1);
        }
    }

    #[test]
    fn consecutive_cells_touch() {
        let v: Vec<Cell> = LineCells::new(Cell::new(0, 0), Cell::new(7, 3)).collect();
        for w in v.windows(2) {
            assert_eq!(w[0].chebyshev(w[1]), 1);
        }
    }

    #[test]
    fn wall_on_line_blocks() {
        let g = super::helpers::parse(&["S#..", "....", "...."]);
        assert!(!g.line_is_clear(Cell::new(0, 0), Cell::new(2, 0)));
        assert!(g.line_is_clear(Cell::new(0, 0), Cell::new(0, 2)));
    }

    #[test]
    fn wall_endpoint_counts() {
        let g = super::helpers::parse(&[".#"]);
        assert!(!g.line_is_clear(Cell::new(0, 0), Cell::new(1, 0)));
    }
}

// ── Navigator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod navigator {
    use std::collections::VecDeque;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use wsn_core::Cell;

    use crate::{BfsNavigator, GridBuilder, GridModel, Navigator, NextStep};

    use super::helpers::parse;

    fn step(g: &GridModel, x: i32, y: i32) -> NextStep {
        BfsNavigator.next_step(g, Cell::new(x, y))
    }

    /// Reference BFS distance from `from` to the nearest exit.
    fn exit_distance(g: &GridModel, from: Cell) -> Option<u32> {
        let mut seen = vec![false; g.area()];
        let mut q = VecDeque::from([(from, 0u32)]);
        seen[g.index_of(from)?] = true;
        while let Some((c, d)) = q.pop_front() {
            if g.is_exit(c) {
                return Some(d);
            }
            for n in c.neighbours() {
                if let Some(i) = g.index_of(n) {
                    if g.is_passable(n) && !seen[i] {
                        seen[i] = true;
                        q.push_back((n, d + 1));
                    }
                }
            }
        }
        None
    }

    #[test]
    fn straight_corridor() {
        let g = parse(&["....E"]);
        assert_eq!(step(&g, 0, 0), NextStep::Move(Cell::new(1, 0)));
        assert_eq!(step(&g, 3, 0), NextStep::Move(Cell::new(4, 0)));
    }

    #[test]
    fn already_on_exit() {
        let g = parse(&["E.."]);
        assert_eq!(step(&g, 0, 0), NextStep::AtExit);
    }

    #[test]
    fn walled_in_has_no_path() {
        let g = parse(&[
            ".#..",
            "##.E",
        ]);
        assert_eq!(step(&g, 0, 0), NextStep::NoPath);
    }

    #[test]
    fn sensors_are_obstacles() {
        let g = parse(&[".SE"]);
        assert_eq!(step(&g, 0, 0), NextStep::NoPath);
    }

    #[test]
    fn no_exits_means_no_path() {
        let g = parse(&["...", "..."]);
        assert_eq!(step(&g, 1, 1), NextStep::NoPath);
    }

    #[test]
    fn out_of_bounds_start_has_no_path() {
        let g = parse(&["..E"]);
        assert_eq!(step(&g, 5, 5), NextStep::NoPath);
    }

    #[test]
    fn detour_around_wall() {
        let g = parse(&[
            "..#E",
            "..#.",
            "....",
        ]);
        // Shortest route from (1,0) goes down and around the wall.
        assert_eq!(step(&g, 1, 0), NextStep::Move(Cell::new(1, 1)));
    }

    #[test]
    fn nearest_exit_wins() {
        let g = parse(&["E....E."]);
        assert_eq!(step(&g, 4, 0), NextStep::Move(Cell::new(5, 0)));
        assert_eq!(step(&g, 2, 0), NextStep::Move(Cell::new(1, 0)));
    }

    #[test]
    fn ties_prefer_left_over_right() {
        let g = parse(&["E...E"]);
        assert_eq!(step(&g, 2, 0), NextStep::Move(Cell::new(1, 0)));
    }

    #[test]
    fn ties_prefer_up_over_down() {
        let g = parse(&[".E.", "...", "...", "...", ".E."]);
        assert_eq!(step(&g, 1, 2), NextStep::Move(Cell::new(1, 1)));
    }

    #[test]
    fn closer_exit_beats_expansion_order() {
        let g = parse(&[".E.", "...", "...", ".E."]);
        assert_eq!(step(&g, 1, 2), NextStep::Move(Cell::new(1, 3)));
    }

    #[test]
    fn right_expanded_before_up() {
        // Exits at equal distance 2 to the right and straight up.  The
        // right-hand branch is expanded first and reaches its exit first.
        let g = parse(&[
            "..E..",
            ".....",
            "....E",
        ]);
        assert_eq!(step(&g, 2, 2), NextStep::Move(Cell::new(3, 2)));
    }

    #[test]
    fn repeated_calls_agree() {
        let g = parse(&["..#.", "....", "E#.E"]);
        assert_eq!(step(&g, 2, 0), step(&g, 2, 0));
    }

    /// Random grids: every `Move` is adjacent, passable, and one step closer
    /// to an exit; `NoPath` happens exactly when no exit is reachable.
    #[test]
    fn random_grids_step_toward_exit() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let (w, h) = (rng.gen_range(1..12), rng.gen_range(1..12));
            let mut b = GridBuilder::new(w, h).unwrap();
            for y in 0..h as i32 {
                for x in 0..w as i32 {
                    let c = Cell::new(x, y);
                    match rng.gen_range(0..20) {
                        0..=4 => b.add_wall(c).unwrap(),
                        5 => b.add_exit(c).unwrap(),
                        6 => {
                            b.add_sensor(c, 2).unwrap();
                        }
                        _ => {}
                    }
                }
            }
            let g = b.build();
            for i in 0..g.area() {
                let from = g.cell_at(i);
                if !g.is_passable(from) {
                    continue;
                }
                match BfsNavigator.next_step(&g, from) {
                    NextStep::AtExit => assert!(g.is_exit(from)),
                    NextStep::NoPath => assert_eq!(exit_distance(&g, from), None),
                    NextStep::Move(to) => {
                        assert!(to.is_adjacent(from), "{from} -> {to}");
                        assert!(g.is_passable(to));
                        let before = exit_distance(&g, from).unwrap();
                        assert_eq!(exit_distance(&g, to), Some(before - 1));
                    }
                }
            }
        }
    }
}
