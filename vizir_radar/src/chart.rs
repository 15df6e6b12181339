// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar chart composition: maps unit geometry into a view and emits marks.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Circle, Point, Rect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::geometry::RadarGeometry;
use crate::legend::{FRAME_COLOR, series_color};
use crate::marks::{Mark, MarkId, MarkPayload, PathMark, TextAnchor, TextBaseline, TextMark};
use crate::measure::TextMeasurer;
use crate::z_order;

const FRAME_ID: u64 = 1;
const AXIS_LABEL_ID_BASE: u64 = 0x1000;
const SPOKE_ID_BASE: u64 = 0x10_0000;
const LEGEND_ID_BASE: u64 = 0x1_0000_0000;
// Spoke and legend ids stay in range below 2^32 - 2^20 rows. Point ids grow with rows × axes,
// so they take the top of the id space.
const POINT_ID_BASE: u64 = 0x1_0000_0000_0000;

/// Id of the dot at `vertex` on spoke `row`, or `None` once the id space is exhausted.
fn point_id(row: usize, axis_count: usize, vertex: usize) -> Option<MarkId> {
    (row as u64)
        .checked_mul(axis_count as u64)
        .and_then(|n| n.checked_add(vertex as u64))
        .and_then(|n| n.checked_add(POINT_ID_BASE))
        .map(MarkId::from_raw)
}

/// Maps unit radar coordinates (y up) into scene coordinates (y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarViewport {
    /// Scene position of the origin.
    pub center: Point,
    /// Scene length of radius 1.
    pub radius: f64,
}

impl PolarViewport {
    /// The largest viewport centered in `rect`, inset by `padding` on every side.
    pub fn fit(rect: Rect, padding: f64) -> Self {
        let half = 0.5 * rect.width().min(rect.height());
        Self {
            center: rect.center(),
            radius: (half - padding).max(0.0),
        }
    }

    /// The unit-to-scene transform.
    pub fn affine(&self) -> Affine {
        Affine::new([
            self.radius,
            0.0,
            0.0,
            -self.radius,
            self.center.x,
            self.center.y,
        ])
    }

    /// Maps a unit point into the scene.
    pub fn map(&self, p: Point) -> Point {
        self.affine() * p
    }

    /// Maps a unit path into the scene.
    pub fn map_path(&self, path: BezPath) -> BezPath {
        self.affine() * path
    }
}

/// Layout and styling for radar chart marks.
#[derive(Clone, Debug)]
pub struct RadarChartSpec {
    /// The full view rectangle, legend included.
    pub view: Rect,
    /// Inset between the plot area and the frame, leaving room for axis labels.
    pub padding: f64,
    /// Axis label font size.
    pub font_size: f64,
    /// Spoke stroke width.
    pub stroke_width: f64,
    /// Frame stroke width.
    pub frame_stroke_width: f64,
    /// Whether to draw a dot at every spoke vertex.
    pub show_points: bool,
    /// Vertex dot diameter.
    pub point_size: f64,
    /// Gap between the legend block and the plot area.
    pub legend_gap: f64,
}

impl RadarChartSpec {
    /// Creates a spec filling `view` with default styling.
    pub fn new(view: Rect) -> Self {
        Self {
            view,
            padding: 24.0,
            font_size: 10.0,
            stroke_width: 1.5,
            frame_stroke_width: 1.0,
            show_points: true,
            point_size: 4.0,
            legend_gap: 12.0,
        }
    }

    /// Sets the frame inset.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Sets the axis label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the spoke stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Enables or disables vertex dots.
    pub fn with_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    /// The plot rectangle: the view minus the space reserved for the legend.
    pub fn plot_rect(&self, geometry: &RadarGeometry, measurer: &impl TextMeasurer) -> Rect {
        let Some(legend) = geometry.legend.as_ref().filter(|l| !l.items.is_empty()) else {
            return self.view;
        };
        let (w, _) = legend.measure(measurer);
        let x0 = (self.view.x0 + legend.left + w + self.legend_gap).min(self.view.x1);
        Rect::new(x0, self.view.y0, self.view.x1, self.view.y1)
    }

    /// The viewport used to place the geometry.
    pub fn viewport(
        &self,
        geometry: &RadarGeometry,
        measurer: &impl TextMeasurer,
    ) -> PolarViewport {
        PolarViewport::fit(self.plot_rect(geometry, measurer), self.padding)
    }

    /// Generates all marks for `geometry`: frame, axis labels, spokes, vertex dots and legend.
    pub fn marks(&self, geometry: &RadarGeometry, measurer: &impl TextMeasurer) -> Vec<Mark> {
        let viewport = self.viewport(geometry, measurer);
        let mut out = Vec::new();

        let mut frame = geometry.frame.star_path();
        frame.extend(geometry.frame.outline_path());
        out.push(Mark::new(
            MarkId::from_raw(FRAME_ID),
            z_order::FRAME_LINES,
            MarkPayload::Path(PathMark {
                path: viewport.map_path(frame),
                fill: Color::TRANSPARENT.into(),
                stroke: FRAME_COLOR.into(),
                stroke_width: self.frame_stroke_width,
            }),
        ));

        let label_fill: Brush = css::BLACK.into();
        for (i, axis) in geometry.axes.iter().enumerate() {
            let end = viewport.map(axis.endpoint());
            out.push(Mark::new(
                MarkId::from_raw(AXIS_LABEL_ID_BASE + i as u64),
                z_order::AXIS_LABELS,
                MarkPayload::Text(TextMark {
                    pos: Point::new(end.x, end.y + 0.5 * self.font_size),
                    text: axis.column.clone(),
                    font_size: self.font_size,
                    anchor: TextAnchor::Middle,
                    baseline: TextBaseline::Hanging,
                    fill: label_fill.clone(),
                }),
            ));
        }

        let axis_count = geometry.axis_count();
        for spoke in &geometry.spokes {
            let color = series_color(spoke.row);
            out.push(Mark::new(
                MarkId::from_raw(SPOKE_ID_BASE + spoke.row as u64),
                z_order::SERIES_STROKE,
                MarkPayload::Path(PathMark {
                    path: viewport.map_path(spoke.path()),
                    fill: Color::TRANSPARENT.into(),
                    stroke: color.into(),
                    stroke_width: self.stroke_width,
                }),
            ));
            if !self.show_points {
                continue;
            }
            // The closing vertex repeats the first one.
            let vertices = &spoke.points[..spoke.points.len().saturating_sub(1)];
            for (i, &p) in vertices.iter().enumerate() {
                let Some(id) = point_id(spoke.row, axis_count, i) else {
                    log::warn!("radar: out of point mark ids at row {}, dropping dots", spoke.row);
                    break;
                };
                let dot = Circle::new(viewport.map(p), 0.5 * self.point_size);
                out.push(Mark::new(
                    id,
                    z_order::SERIES_POINTS,
                    MarkPayload::Path(PathMark {
                        path: dot.path_elements(0.1).collect(),
                        fill: color.into(),
                        stroke: Color::TRANSPARENT.into(),
                        stroke_width: 0.0,
                    }),
                ));
            }
        }

        if let Some(legend) = &geometry.legend {
            out.extend(legend.marks(LEGEND_ID_BASE, self.view, measurer));
        }

        out
    }
}
