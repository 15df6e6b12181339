// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-side checks and preview data.
//!
//! The geometry builder accepts any input. Hosts use [`check_renderable`] before building to
//! reject results that would make an unreadable plot, and [`placeholder_dataset`] to preview the
//! chart before a query has run.

extern crate alloc;

use alloc::vec::Vec;

use crate::dataset::{ResultColumn, ResultSet};

/// Maximum number of rows a radar chart should show.
pub const MAX_ROWS: usize = 30;

/// Reasons a result cannot be shown as a radar chart.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A series has more rows than a radar chart can show legibly.
    #[error("too many rows to visualise: {rows} (max {max})")]
    TooManyRows {
        /// Row count of the offending series.
        rows: usize,
        /// The limit, [`MAX_ROWS`].
        max: usize,
    },
}

/// Checks every series against [`MAX_ROWS`].
pub fn check_renderable(series: &[ResultSet]) -> Result<(), RenderError> {
    if let Some(s) = series.iter().find(|s| s.row_count() > MAX_ROWS) {
        return Err(RenderError::TooManyRows {
            rows: s.row_count(),
            max: MAX_ROWS,
        });
    }
    Ok(())
}

/// Preview data: integer columns `x` and `y`, with rows `[i, i]` for `i` in `0..11`.
pub fn placeholder_dataset() -> ResultSet {
    let columns = alloc::vec![ResultColumn::integer("x"), ResultColumn::integer("y")];
    let rows = (0..11_i32)
        .map(|i| alloc::vec![i.into(), i.into()])
        .collect::<Vec<_>>();
    ResultSet::new(columns, rows).unwrap_or_default()
}
