//! Unit tests for wsn-detect.

#[cfg(test)]
mod helpers {
    use wsn_core::{Cell, SensorId};
    use wsn_grid::{GridBuilder, GridModel};

    use crate::{DetectionHistory, DetectionSet};

    /// Grid with sensors (radius 2) at `sensors` and walls at `walls`.
    pub fn grid(w: u32, h: u32, sensors: &[(i32, i32)], walls: &[(i32, i32)]) -> GridModel {
        let mut b = GridBuilder::new(w, h).unwrap();
        for &s in sensors {
            b.add_sensor(s.into(), 2).unwrap();
        }
        for &c in walls {
            b.add_wall(Cell::from(c)).unwrap();
        }
        b.build()
    }

    pub fn set(ids: &[u32]) -> DetectionSet {
        ids.iter().map(|&i| SensorId(i)).collect()
    }

    /// A history whose tick `i` holds `sizes[i]` sensors.
    pub fn history(sizes: &[usize]) -> DetectionHistory {
        sizes
            .iter()
            .map(|&n| (0..n as u32).map(SensorId).collect())
            .collect()
    }
}

// ── Detector ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod detector {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use wsn_core::{Cell, MAX_SENSOR_RADIUS, SensorId};
    use wsn_grid::GridBuilder;

    use crate::{Detector, sees};

    use super::helpers::{grid, set};

    #[test]
    fn sensor_sees_within_radius() {
        let g = grid(5, 5, &[(2, 2)], &[]);
        let d = Detector::new(&g);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(d.detect(&g, Cell::new(x, y)), set(&[0]), "({x},{y})");
            }
        }
    }

    #[test]
    fn largest_radius_reaches_its_edge() {
        let mut b = GridBuilder::new(MAX_SENSOR_RADIUS + 2, 1).unwrap();
        b.add_sensor(Cell::new(0, 0), MAX_SENSOR_RADIUS).unwrap();
        let g = b.build();
        let d = Detector::new(&g);
        let edge = MAX_SENSOR_RADIUS as i32;
        assert_eq!(d.detect(&g, Cell::new(edge, 0)), set(&[0]));
        assert!(d.detect(&g, Cell::new(edge + 1, 0)).is_empty());
    }

    #[test]
    fn out_of_radius_not_detected() {
        let g = grid(7, 7, &[(0, 0)], &[]);
        let d = Detector::new(&g);
        assert!(d.detect(&g, Cell::new(3, 0)).is_empty());
        assert!(d.detect(&g, Cell::new(3, 3)).is_empty());
        assert_eq!(d.detect(&g, Cell::new(2, 2)), set(&[0]));
    }

    #[test]
    fn wall_on_line_blocks_detection() {
        let g = grid(5, 5, &[(0, 0)], &[(1, 0)]);
        let d = Detector::new(&g);
        assert!(d.detect(&g, Cell::new(2, 0)).is_empty());
        // Off the blocked row the line is clear.
        assert_eq!(d.detect(&g, Cell::new(0, 2)), set(&[0]));
    }

    #[test]
    fn wall_beyond_radius_is_irrelevant() {
        let g = grid(6, 1, &[(0, 0)], &[(4, 0)]);
        let d = Detector::new(&g);
        assert_eq!(d.detect(&g, Cell::new(2, 0)), set(&[0]));
    }

    #[test]
    fn all_seeing_sensors_returned() {
        let g = grid(6, 6, &[(0, 0), (2, 0), (5, 5), (1, 3)], &[]);
        let d = Detector::new(&g);
        assert_eq!(d.sensor_count(), 4);
        assert_eq!(d.detect(&g, Cell::new(1, 1)), set(&[0, 1, 3]));
    }

    #[test]
    fn per_sensor_radius_respected() {
        let mut b = GridBuilder::new(8, 1).unwrap();
        b.add_sensor(Cell::new(0, 0), 1).unwrap();
        b.add_sensor(Cell::new(7, 0), 4).unwrap();
        let g = b.build();
        let d = Detector::new(&g);
        assert_eq!(d.detect(&g, Cell::new(3, 0)), set(&[1]));
        assert_eq!(d.detect(&g, Cell::new(1, 0)), set(&[0]));
    }

    #[test]
    fn no_sensors_detects_nothing() {
        let g = grid(3, 3, &[], &[]);
        assert!(Detector::new(&g).detect(&g, Cell::new(1, 1)).is_empty());
    }

    #[test]
    fn detect_is_idempotent() {
        let g = grid(8, 8, &[(1, 1), (4, 4), (6, 2)], &[(3, 3), (5, 2)]);
        let d = Detector::new(&g);
        for x in 0..8 {
            let c = Cell::new(x, 3);
            assert_eq!(d.detect(&g, c), d.detect(&g, c));
        }
    }

    /// The R-tree lookup returns exactly what a linear scan would.
    #[test]
    fn matches_linear_scan_on_random_grids() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..100 {
            let (w, h) = (rng.gen_range(3..15), rng.gen_range(3..15));
            let mut b = GridBuilder::new(w, h).unwrap();
            for y in 0..h as i32 {
                for x in 0..w as i32 {
                    let c = Cell::new(x, y);
                    match rng.gen_range(0..10) {
                        0 | 1 => b.add_wall(c).unwrap(),
                        2 => {
                            b.add_sensor(c, rng.gen_range(0..4)).unwrap();
                        }
                        _ => {}
                    }
                }
            }
            let g = b.build();
            let d = Detector::new(&g);
            for i in 0..g.area() {
                let at = g.cell_at(i);
                let expected: Vec<SensorId> = g
                    .sensors()
                    .iter()
                    .filter(|s| sees(&g, s, at))
                    .map(|s| s.id)
                    .collect();
                let got: Vec<SensorId> = d.detect(&g, at).iter().collect();
                assert_eq!(got, expected, "at {at}");
                for s in g.sensors() {
                    if s.cell.chebyshev(at) > s.radius {
                        assert!(!got.contains(&s.id));
                    }
                }
            }
        }
    }
}

// ── DetectionSet & DetectionHistory ──────────────────────────────────────────

#[cfg(test)]
mod history {
    use wsn_core::SensorId;

    use crate::{DetectionHistory, DetectionSet};

    use super::helpers::{history, set};

    #[test]
    fn set_is_ordered_and_deduplicated() {
        let s: DetectionSet = [SensorId(4), SensorId(1), SensorId(4)].into_iter().collect();
        assert_eq!(s.len(), 2);
        assert_eq!(s.iter().collect::<Vec<_>>(), [SensorId(1), SensorId(4)]);
        assert_eq!(s.to_string(), "[1, 4]");
        assert!(s.contains(SensorId(1)));
    }

    #[test]
    fn empty_ticks_are_recorded() {
        let mut h = DetectionHistory::new();
        h.push(DetectionSet::new());
        h.push(set(&[0]));
        assert_eq!(h.len(), 2);
        assert!(h.get(0).unwrap().is_empty());
        assert_eq!(h.last(), Some(&set(&[0])));
    }

    #[test]
    fn qualifying_ticks_and_sizes() {
        let h = history(&[0, 3, 1, 4, 3, 2]);
        assert_eq!(h.qualifying_ticks(3).collect::<Vec<_>>(), [1, 3, 4]);
        assert_eq!(h.qualifying_count(3), 3);
        assert_eq!(h.qualifying_sizes(3), [3, 4, 3]);
        assert_eq!(h.qualifying_count(5), 0);
    }
}

// ── Freeze rules ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod rules {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{CountingRule, CspRule, DetectError, FreezeRule, Thresholds};

    use super::helpers::history;

    fn t(k: usize, c: usize) -> Thresholds {
        Thresholds::new(k, c).unwrap()
    }

    #[test]
    fn thresholds_reject_zero() {
        assert_eq!(Thresholds::new(0, 3), Err(DetectError::ZeroDetectionThreshold));
        assert_eq!(Thresholds::new(3, 0), Err(DetectError::ZeroGroupThreshold));
    }

    #[test]
    fn thresholds_from_config() {
        let th = Thresholds::from_config(&wsn_core::SimConfig::default()).unwrap();
        assert_eq!(th, t(3, 3));
    }

    #[test]
    fn empty_history_never_freezes() {
        let h = history(&[]);
        assert!(!CountingRule.evaluate(&h, t(1, 1)));
        assert!(!CspRule.evaluate(&h, t(1, 1)));
    }

    #[test]
    fn short_history_never_freezes() {
        // Two ticks cannot hold three groups.
        let h = history(&[5, 5]);
        assert!(!CountingRule.evaluate(&h, t(3, 3)));
        assert!(!CspRule.evaluate(&h, t(3, 3)));
    }

    #[test]
    fn two_qualifying_ticks_are_not_enough() {
        let h = history(&[3, 0, 4, 2, 2]);
        assert!(!CountingRule.evaluate(&h, t(3, 3)));
        assert!(!CspRule.evaluate(&h, t(3, 3)));
    }

    #[test]
    fn third_qualifying_tick_freezes() {
        let h = history(&[3, 0, 4, 2, 3]);
        assert!(CountingRule.evaluate(&h, t(3, 3)));
        assert!(CspRule.evaluate(&h, t(3, 3)));
    }

    #[test]
    fn order_and_contiguity_do_not_matter() {
        for sizes in [[3, 3, 3, 0, 0, 0], [0, 0, 0, 3, 3, 3], [3, 0, 3, 0, 3, 0], [0, 3, 0, 0, 3, 3]] {
            let h = history(&sizes);
            assert!(CountingRule.evaluate(&h, t(3, 3)), "{sizes:?}");
            assert!(CspRule.evaluate(&h, t(3, 3)), "{sizes:?}");
        }
    }

    #[test]
    fn single_group_single_detection() {
        let h = history(&[1]);
        assert!(CountingRule.evaluate(&h, t(1, 1)));
        assert_eq!(CspRule.assign(&h, t(1, 1)), Some(vec![0]));
    }

    #[test]
    fn csp_assignment_is_distinct_and_qualifying() {
        let h = history(&[0, 4, 1, 3, 3, 0, 5]);
        let picked = CspRule.assign(&h, t(3, 3)).unwrap();
        assert_eq!(picked.len(), 3);
        for w in picked.windows(2) {
            assert!(w[0] < w[1]);
        }
        for &i in &picked {
            assert!(h.get(i).unwrap().len() >= 3);
        }
    }

    #[test]
    fn counting_assignment_takes_earliest_ticks() {
        let h = history(&[0, 4, 1, 3, 3, 0, 5]);
        assert_eq!(CountingRule.assign(&h, t(3, 3)), Some(vec![1, 3, 4]));
    }

    #[test]
    fn evaluate_is_pure() {
        let h = history(&[3, 3, 0]);
        let th = t(3, 2);
        assert_eq!(CountingRule.evaluate(&h, th), CountingRule.evaluate(&h, th));
        assert_eq!(CspRule.assign(&h, th), CspRule.assign(&h, th));
    }

    /// Both formulations agree with the plain count on random histories.
    #[test]
    fn rules_agree_on_random_histories() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..2_000 {
            let len = rng.gen_range(0..12);
            let sizes: Vec<usize> = (0..len).map(|_| rng.gen_range(0..6)).collect();
            let th = t(rng.gen_range(1..5), rng.gen_range(1..5));
            let h = history(&sizes);
            let expected = h.len() >= th.c_groups
                && sizes.iter().filter(|&&n| n >= th.k_detection).count() >= th.c_groups;
            assert_eq!(CountingRule.evaluate(&h, th), expected, "{sizes:?} {th:?}");
            assert_eq!(CspRule.evaluate(&h, th), expected, "{sizes:?} {th:?}");
            assert_eq!(CountingRule.assign(&h, th).is_some(), expected);
        }
    }
}
