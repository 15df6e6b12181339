// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for radar chart marks.
//!
//! Renderers should sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Reference frame spokes and outline.
pub const FRAME_LINES: i32 = -50;

/// Row polygons.
pub const SERIES_STROKE: i32 = 10;
/// Vertex dots drawn above the polygons.
pub const SERIES_POINTS: i32 = 20;

/// Axis name labels at the frame endpoints.
pub const AXIS_LABELS: i32 = 40;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
