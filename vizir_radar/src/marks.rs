// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative marks handed to a renderer.
//!
//! Marks are fully resolved: every geometry, paint and text value is a constant. Renderers should
//! paint in `(z_index, id)` order.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

/// Stable identity of a mark across redraws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Horizontal text alignment relative to the text position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position.
    #[default]
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position.
    End,
}

/// Vertical text alignment relative to the text position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Alphabetic baseline.
    #[default]
    Alphabetic,
    /// Vertical middle.
    Middle,
    /// Top of the em box.
    Hanging,
}

/// A filled and/or stroked path.
#[derive(Clone, Debug)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0.0` disables the stroke.
    pub stroke_width: f64,
}

/// A text label.
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Unshaped text.
    pub text: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Text paint.
    pub fill: Brush,
}

/// A filled rectangle.
#[derive(Clone, Debug)]
pub struct RectMark {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Mark geometry and paint.
#[derive(Clone, Debug)]
pub enum MarkPayload {
    /// A path.
    Path(PathMark),
    /// A text label.
    Text(TextMark),
    /// A rectangle.
    Rect(RectMark),
}

impl MarkPayload {
    /// Geometric bounds, if cheaply known.
    ///
    /// Text has no bounds without a measurer.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Rect(r) => Some(r.rect),
            Self::Text(_) => None,
        }
    }
}

/// A single renderable mark.
#[derive(Clone, Debug)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Paint order hint, e.g. [`SERIES_STROKE`](crate::SERIES_STROKE).
    pub z_index: i32,
    /// Geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark.
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            payload,
        }
    }

    /// Sort key for deterministic paint order.
    pub fn paint_order(&self) -> (i32, MarkId) {
        (self.z_index, self.id)
    }
}
