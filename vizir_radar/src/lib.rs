// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar (spider) chart building blocks for tabular query results.
//!
//! This crate turns a [`ResultSet`] into radial plot geometry:
//! - every numeric column becomes an **axis**, spaced evenly around a full turn,
//! - every row becomes a closed **spoke** polygon, normalized per axis to `[0, 1]`,
//! - a static **reference frame** marks the axis endpoints.
//!
//! The geometry lives in unit coordinates (y up). [`RadarChartSpec`] maps it into scene
//! coordinates and emits [`Mark`]s for a downstream renderer.
//!
//! ```
//! use vizir_radar::{RadarGeometry, RadarSettings, ResultColumn, ResultSet};
//!
//! let data = ResultSet::new(
//!     vec![
//!         ResultColumn::textual("Category"),
//!         ResultColumn::numeric("A"),
//!         ResultColumn::numeric("B"),
//!     ],
//!     vec![
//!         vec!["x".into(), 0.0.into(), 10.0.into()],
//!         vec!["y".into(), 10.0.into(), 0.0.into()],
//!     ],
//! )
//! .unwrap();
//!
//! let geometry = RadarGeometry::build(&data, &RadarSettings::default()).unwrap();
//! assert_eq!(geometry.axes.len(), 2);
//! assert_eq!(geometry.spokes[0].label, "x");
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod chart;
mod dataset;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod legend;
mod marks;
mod measure;
mod renderable;
#[cfg(test)]
mod scenario_tests;
mod settings;
mod z_order;

pub use chart::{PolarViewport, RadarChartSpec};
pub use dataset::{CellValue, ColumnKind, DatasetError, ResultColumn, ResultRow, ResultSet};
pub use geometry::{DEGENERATE_RADIUS, RadarAxis, RadarGeometry, ReferenceFrame, Spoke};
pub use legend::{FRAME_COLOR, LegendItem, LegendSpec, SERIES_PALETTE, series_color};
pub use marks::{Mark, MarkId, MarkPayload, PathMark, RectMark, TextAnchor, TextBaseline, TextMark};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use renderable::{MAX_ROWS, RenderError, check_renderable, placeholder_dataset};
pub use settings::{
    RadarSettings, SHOW_LEGEND_KEY, SettingValue, SettingsError, TITLE_COLUMN_KEY,
    VisualizationSettings, title_column_options,
};
pub use z_order::*;
