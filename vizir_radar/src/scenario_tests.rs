// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::{PI, TAU};

use kurbo::Point;

use crate::{
    CellValue, DEGENERATE_RADIUS, RadarGeometry, RadarSettings, ResultColumn, ResultRow,
    ResultSet,
};

const EPS: f64 = 1e-9;

fn assert_point_close(a: Point, b: Point) {
    assert!((a.x - b.x).abs() <= EPS, "x {a:?} != {b:?}");
    assert!((a.y - b.y).abs() <= EPS, "y {a:?} != {b:?}");
}

/// A mixed table: `k` numeric columns interleaved with `m` other columns, `n` rows.
fn mixed(k: usize, m: usize, n: usize) -> ResultSet {
    let mut columns = Vec::new();
    for i in 0..k.max(m) {
        if i < m {
            columns.push(if i % 2 == 0 {
                ResultColumn::textual(std::format!("t{i}"))
            } else {
                ResultColumn::other(std::format!("o{i}"))
            });
        }
        if i < k {
            columns.push(ResultColumn::numeric(std::format!("n{i}")));
        }
    }
    let rows: Vec<ResultRow> = (0..n)
        .map(|r| {
            columns
                .iter()
                .enumerate()
                .map(|(c, col)| match col.kind {
                    crate::ColumnKind::Numeric => CellValue::from(((r * 7 + c * 3) % 11) as f64),
                    crate::ColumnKind::Textual => CellValue::from(std::format!("row{r}")),
                    crate::ColumnKind::Other => CellValue::Null,
                })
                .collect()
        })
        .collect();
    ResultSet::new(columns, rows).unwrap()
}

#[test]
fn axis_count_ignores_non_numeric_columns() {
    for k in 1..6 {
        for m in 0..4 {
            let g = RadarGeometry::build(&mixed(k, m, 3), &RadarSettings::new()).unwrap();
            assert_eq!(g.axis_count(), k, "k={k} m={m}");
        }
    }
}

#[test]
fn axes_are_evenly_spaced_in_column_order() {
    let data = mixed(5, 3, 4);
    let g = RadarGeometry::build(&data, &RadarSettings::new()).unwrap();
    let step = TAU / 5.0;
    let mut last_index = None;
    for (i, axis) in g.axes.iter().enumerate() {
        assert!((axis.angle - i as f64 * step).abs() <= EPS);
        assert_eq!(axis.column, std::format!("n{i}"));
        assert!(last_index.is_none_or(|l| l < axis.column_index));
        last_index = Some(axis.column_index);
    }
}

#[test]
fn every_spoke_is_closed() {
    let g = RadarGeometry::build(&mixed(4, 2, 9), &RadarSettings::new()).unwrap();
    assert_eq!(g.spokes.len(), 9);
    for spoke in &g.spokes {
        assert_eq!(spoke.points.len(), g.axis_count() + 1);
        assert_point_close(spoke.points[0], *spoke.points.last().unwrap());
    }
    assert_eq!(g.frame.outline.len(), g.axis_count() + 1);
}

#[test]
fn radii_span_the_unit_interval() {
    let data = mixed(3, 1, 12);
    let g = RadarGeometry::build(&data, &RadarSettings::new()).unwrap();
    for (a, axis) in g.axes.iter().enumerate() {
        let (min, max) = axis.range.unwrap();
        assert!(max > min);
        for spoke in &g.spokes {
            let r = spoke.radii[a];
            assert!((0.0..=1.0).contains(&r));
            let v = spoke.raw_values[a].unwrap();
            if v == min {
                assert_eq!(r, 0.0);
            }
            if v == max {
                assert_eq!(r, 1.0);
            }
            assert_point_close(spoke.points[a], axis.point_at(r));
        }
    }
}

#[test]
fn no_numeric_columns_is_empty() {
    let data = ResultSet::new(
        vec![ResultColumn::textual("name"), ResultColumn::other("when")],
        vec![vec!["a".into(), CellValue::Null]],
    )
    .unwrap();
    assert!(RadarGeometry::build(&data, &RadarSettings::new()).is_none());
    assert!(RadarGeometry::build(&ResultSet::default(), &RadarSettings::new()).is_none());
}

#[test]
fn zero_rows_yield_frame_only() {
    let g = RadarGeometry::build(&mixed(3, 1, 0), &RadarSettings::new()).unwrap();
    assert_eq!(g.axis_count(), 3);
    assert!(g.spokes.is_empty());
    assert_eq!(g.frame.star.len(), 6);
    assert_eq!(g.frame.outline.len(), 4);
    assert!(g.axes.iter().all(|a| a.range.is_none()));
}

#[test]
fn constant_column_uses_degenerate_radius() {
    let data = ResultSet::new(
        vec![
            ResultColumn::textual("name"),
            ResultColumn::numeric("flat"),
            ResultColumn::numeric("slope"),
        ],
        vec![
            vec!["a".into(), 7.0.into(), 1.0.into()],
            vec!["b".into(), 7.0.into(), 2.0.into()],
            vec!["c".into(), 7.0.into(), 3.0.into()],
        ],
    )
    .unwrap();
    let g = RadarGeometry::build(&data, &RadarSettings::new()).unwrap();
    assert!(g.axes[0].is_degenerate());
    assert!(!g.axes[1].is_degenerate());
    for spoke in &g.spokes {
        assert_eq!(spoke.radii[0], DEGENERATE_RADIUS);
        assert!(spoke.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}

#[test]
fn extreme_spans_keep_radii_in_the_unit_interval() {
    let data = ResultSet::new(
        vec![ResultColumn::numeric("a")],
        vec![vec![(-1e308).into()], vec![0.0.into()], vec![1e308.into()]],
    )
    .unwrap();
    let g = RadarGeometry::build(&data, &RadarSettings::new()).unwrap();
    let radii: Vec<f64> = g.spokes.iter().map(|s| s.radii[0]).collect();
    assert_eq!(radii, vec![0.0, 0.5, 1.0]);
    for spoke in &g.spokes {
        assert!(spoke.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
    assert_point_close(g.spokes[2].points[0], Point::new(1.0, 0.0));
}

#[test]
fn single_row_is_fully_degenerate() {
    let data = ResultSet::new(
        vec![ResultColumn::numeric("a"), ResultColumn::numeric("b")],
        vec![vec![1.0.into(), 2.0.into()]],
    )
    .unwrap();
    let g = RadarGeometry::build(&data, &RadarSettings::new()).unwrap();
    assert_eq!(g.spokes[0].radii.as_slice(), &[DEGENERATE_RADIUS, DEGENERATE_RADIUS]);
}

#[test]
fn two_rows_two_axes() {
    let data = ResultSet::new(
        vec![
            ResultColumn::textual("Category"),
            ResultColumn::numeric("A"),
            ResultColumn::numeric("B"),
        ],
        vec![
            vec!["x".into(), 0.0.into(), 10.0.into()],
            vec!["y".into(), 10.0.into(), 0.0.into()],
        ],
    )
    .unwrap();
    let g = RadarGeometry::build(&data, &RadarSettings::new()).unwrap();

    assert_eq!(g.axis_count(), 2);
    assert_eq!(g.axes[0].angle, 0.0);
    assert!((g.axes[1].angle - PI).abs() <= EPS);
    assert_eq!(g.axes[0].range, Some((0.0, 10.0)));
    assert_eq!(g.axes[1].range, Some((0.0, 10.0)));

    let x = &g.spokes[0];
    assert_eq!(x.label, "x");
    assert_eq!(x.radii.as_slice(), &[0.0, 1.0]);
    assert_eq!(x.points.len(), 3);
    assert_point_close(x.points[0], Point::ORIGIN);
    assert_point_close(x.points[1], Point::new(-1.0, 0.0));
    assert_point_close(x.points[2], Point::ORIGIN);

    let y = &g.spokes[1];
    assert_eq!(y.label, "y");
    assert_eq!(y.radii.as_slice(), &[1.0, 0.0]);
    assert_eq!(y.points.len(), 3);
    assert_point_close(y.points[0], Point::new(1.0, 0.0));
    assert_point_close(y.points[1], Point::ORIGIN);
    assert_point_close(y.points[2], Point::new(1.0, 0.0));
}

#[test]
fn many_rows_are_not_capped() {
    let g = RadarGeometry::build(&mixed(3, 1, 500), &RadarSettings::new()).unwrap();
    assert_eq!(g.spokes.len(), 500);
}

#[test]
fn build_is_referentially_transparent() {
    let data = mixed(4, 2, 6);
    let settings = RadarSettings::new().with_legend(true);
    assert_eq!(
        RadarGeometry::build(&data, &settings),
        RadarGeometry::build(&data, &settings)
    );
}
