// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar geometry: axes, reference frame and per-row spokes in unit coordinates.
//!
//! Each numeric column becomes an axis. Axis `i` of `k` points at angle `i * 2π / k`, with angle
//! `0` pointing east and angles increasing counterclockwise (y up). Row values are normalized per
//! axis using that axis's own observed range, so a spoke's radius compares rows along one axis,
//! never magnitudes across axes.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{BezPath, Point};
use smallvec::SmallVec;

use crate::dataset::{ColumnKind, ResultSet};
use crate::legend::{LegendItem, LegendSpec, series_color};
use crate::settings::RadarSettings;

/// Radius assigned on an axis whose observed range is empty or a single value.
pub const DEGENERATE_RADIUS: f64 = 0.5;

/// One spoke direction, backed by a numeric column.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarAxis {
    /// Name of the backing column.
    pub column: String,
    /// Index of the backing column in the result set.
    pub column_index: usize,
    /// Angle in radians.
    pub angle: f64,
    /// Observed `(min, max)` over finite values, or `None` if there are none.
    pub range: Option<(f64, f64)>,
}

impl RadarAxis {
    /// Returns `true` if values on this axis cannot be normalized.
    pub fn is_degenerate(&self) -> bool {
        match self.range {
            Some((min, max)) => max <= min,
            None => true,
        }
    }

    /// Maps a raw value to a radius in `[0, 1]`.
    ///
    /// Degenerate axes map every row to [`DEGENERATE_RADIUS`]. Missing values map to `0`.
    pub fn normalize(&self, value: Option<f64>) -> f64 {
        let Some((min, max)) = self.range.filter(|_| !self.is_degenerate()) else {
            return DEGENERATE_RADIUS;
        };
        let Some(v) = value else {
            return 0.0;
        };
        let span = max - min;
        let t = if span.is_finite() {
            (v - min) / span
        } else {
            // Finite bounds more than `f64::MAX` apart; halving keeps the span finite.
            (0.5 * v - 0.5 * min) / (0.5 * max - 0.5 * min)
        };
        t.clamp(0.0, 1.0)
    }

    /// Point at `radius` along this axis.
    pub fn point_at(&self, radius: f64) -> Point {
        polar(radius, self.angle)
    }

    /// Unit-radius endpoint of this axis.
    pub fn endpoint(&self) -> Point {
        self.point_at(1.0)
    }
}

fn polar(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.cos(), radius * angle.sin())
}

/// The data-independent reference frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceFrame {
    /// Origin/endpoint pairs `[O, E0, O, E1, ...]`, one pair per axis.
    pub star: Vec<Point>,
    /// Closed polygon through every axis endpoint at radius 1.
    pub outline: Vec<Point>,
}

impl ReferenceFrame {
    fn new(axes: &[RadarAxis]) -> Self {
        let mut star = Vec::with_capacity(axes.len() * 2);
        let mut outline = Vec::with_capacity(axes.len() + 1);
        for axis in axes {
            let end = axis.endpoint();
            star.push(Point::ORIGIN);
            star.push(end);
            outline.push(end);
        }
        close(&mut outline);
        Self { star, outline }
    }

    /// Path of the spokes: one segment from the origin to each endpoint.
    pub fn star_path(&self) -> BezPath {
        let mut p = BezPath::new();
        for pair in self.star.chunks_exact(2) {
            p.move_to(pair[0]);
            p.line_to(pair[1]);
        }
        p
    }

    /// Path tracing the closed outline through the endpoints.
    pub fn outline_path(&self) -> BezPath {
        polyline(&self.outline)
    }
}

/// One row traced across all axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Spoke {
    /// Source row index.
    pub row: usize,
    /// Label from the title column.
    pub label: String,
    /// Polygon vertices in axis order, with the first vertex repeated at the end.
    pub points: Vec<Point>,
    /// Normalized radius per axis.
    pub radii: SmallVec<[f64; 8]>,
    /// Raw value per axis; `None` where the cell is not a finite number.
    pub raw_values: SmallVec<[Option<f64>; 8]>,
}

impl Spoke {
    /// The closed polygon as a path.
    pub fn path(&self) -> BezPath {
        polyline(&self.points)
    }
}

/// Radar chart geometry in unit coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarGeometry {
    /// Axes in column order.
    pub axes: Vec<RadarAxis>,
    /// Reference frame.
    pub frame: ReferenceFrame,
    /// One spoke per row, in row order.
    pub spokes: Vec<Spoke>,
    /// Legend declaration, present when enabled in the settings.
    pub legend: Option<LegendSpec>,
}

impl RadarGeometry {
    /// Builds radar geometry for a result set.
    ///
    /// Returns `None` when the result set has no numeric columns: there is nothing to plot and
    /// the caller should suppress the chart. Any number of rows is accepted, including zero.
    pub fn build(data: &ResultSet, settings: &RadarSettings) -> Option<Self> {
        let numeric: Vec<usize> = data.columns_of_kind(ColumnKind::Numeric).collect();
        if numeric.is_empty() {
            log::debug!(
                "radar: no numeric columns among {} columns, nothing to plot",
                data.columns().len()
            );
            return None;
        }

        let step = TAU / numeric.len() as f64;
        let axes: Vec<RadarAxis> = numeric
            .iter()
            .enumerate()
            .map(|(i, &col)| {
                let axis = RadarAxis {
                    column: data.columns()[col].name.clone(),
                    column_index: col,
                    angle: i as f64 * step,
                    range: observed_range(data, col),
                };
                if axis.is_degenerate() && data.row_count() > 0 {
                    log::debug!(
                        "radar: axis `{}` has range {:?}, using radius {DEGENERATE_RADIUS}",
                        axis.column,
                        axis.range
                    );
                }
                axis
            })
            .collect();

        let label_col = label_column(data, settings);
        let spokes: Vec<Spoke> = data
            .rows()
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let raw_values: SmallVec<[Option<f64>; 8]> = axes
                    .iter()
                    .map(|a| cells.get(a.column_index).and_then(|c| c.as_f64()))
                    .collect();
                let radii: SmallVec<[f64; 8]> = axes
                    .iter()
                    .zip(&raw_values)
                    .map(|(a, v)| a.normalize(*v))
                    .collect();
                let mut points: Vec<Point> = axes
                    .iter()
                    .zip(&radii)
                    .map(|(a, r)| a.point_at(*r))
                    .collect();
                close(&mut points);
                let label = match label_col {
                    Some(col) => cells.get(col).map(|c| c.label()).unwrap_or_default(),
                    None => (row + 1).to_string(),
                };
                Spoke {
                    row,
                    label,
                    points,
                    radii,
                    raw_values,
                }
            })
            .collect();

        let legend = settings.show_legend.then(|| {
            LegendSpec::new(
                spokes
                    .iter()
                    .map(|s| LegendItem {
                        label: s.label.clone(),
                        color: series_color(s.row),
                    })
                    .collect(),
            )
        });

        let frame = ReferenceFrame::new(&axes);
        log::trace!(
            "radar: built {} axes and {} spokes (legend: {})",
            axes.len(),
            spokes.len(),
            legend.is_some()
        );
        Some(Self {
            axes,
            frame,
            spokes,
            legend,
        })
    }

    /// Builds geometry from the first result of a multi-series visualization.
    ///
    /// Additional series are ignored; an empty slice yields `None`.
    pub fn build_from_series(series: &[ResultSet], settings: &RadarSettings) -> Option<Self> {
        Self::build(series.first()?, settings)
    }

    /// Number of axes.
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }
}

/// Resolves the column used for spoke labels.
///
/// `None` means no usable column exists and labels fall back to 1-based row ordinals.
fn label_column(data: &ResultSet, settings: &RadarSettings) -> Option<usize> {
    if let Some(name) = settings.title_column.as_deref() {
        if let Some(idx) = data.column_index(name) {
            return Some(idx);
        }
        log::warn!(
            "radar: title column `{name}` not found, falling back to the first text column"
        );
    }
    data.first_column_of_kind(ColumnKind::Textual)
}

/// Min/max over the finite numeric cells of a column.
fn observed_range(data: &ResultSet, col: usize) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in data.column_values(col).filter_map(|c| c.as_f64()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

fn close(points: &mut Vec<Point>) {
    if let Some(&first) = points.first() {
        points.push(first);
    }
}

fn polyline(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    for (i, &pt) in points.iter().enumerate() {
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p
}
