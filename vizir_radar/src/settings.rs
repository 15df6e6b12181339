// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User-chosen radar settings.
//!
//! Settings are persisted by the host as a string-keyed map. [`RadarSettings::resolve`] reads
//! the radar keys out of that map and fills in defaults derived from the current result set, so
//! the geometry builder only ever sees explicit values.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::dataset::{ColumnKind, ResultSet};

/// Settings key naming the column whose values label each spoke.
pub const TITLE_COLUMN_KEY: &str = "radar.title_column";
/// Settings key toggling the legend.
pub const SHOW_LEGEND_KEY: &str = "radar.show_legend";

/// A persisted setting value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingValue {
    /// A string value (column names).
    Text(String),
    /// A toggle.
    Bool(bool),
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        Self::Text(v.into())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Persisted visualization settings, keyed by setting name.
pub type VisualizationSettings = HashMap<String, SettingValue>;

/// Errors returned when resolving [`RadarSettings`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A setting is present but holds the wrong kind of value.
    #[error("setting `{key}` must be a {expected}")]
    WrongType {
        /// The offending key.
        key: &'static str,
        /// Human-readable expected kind.
        expected: &'static str,
    },
}

/// Radar chart settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RadarSettings {
    /// Column whose per-row value labels each spoke.
    ///
    /// When `None`, or when no column has this name, the first textual column is used.
    pub title_column: Option<String>,
    /// Whether the output declares a legend.
    pub show_legend: bool,
}

impl RadarSettings {
    /// Creates settings with no title column and the legend hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title column.
    pub fn with_title_column(mut self, column: impl Into<String>) -> Self {
        self.title_column = Some(column.into());
        self
    }

    /// Clears the title column.
    pub fn without_title_column(mut self) -> Self {
        self.title_column = None;
        self
    }

    /// Shows or hides the legend.
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    /// Resolves persisted settings against a result set.
    ///
    /// Missing keys take their defaults: the title column defaults to the first `type/Text`
    /// column, and the legend defaults to hidden.
    pub fn resolve(
        settings: &VisualizationSettings,
        data: &ResultSet,
    ) -> Result<Self, SettingsError> {
        let title_column = match settings.get(TITLE_COLUMN_KEY) {
            Some(SettingValue::Text(name)) => Some(name.clone()),
            Some(SettingValue::Bool(_)) => {
                return Err(SettingsError::WrongType {
                    key: TITLE_COLUMN_KEY,
                    expected: "column name",
                });
            }
            None => default_title_column(data),
        };
        let show_legend = match settings.get(SHOW_LEGEND_KEY) {
            Some(SettingValue::Bool(b)) => *b,
            Some(SettingValue::Text(_)) => {
                return Err(SettingsError::WrongType {
                    key: SHOW_LEGEND_KEY,
                    expected: "boolean",
                });
            }
            None => false,
        };
        Ok(Self {
            title_column,
            show_legend,
        })
    }

    /// Writes these settings back into a persisted map.
    pub fn store(&self, settings: &mut VisualizationSettings) {
        match &self.title_column {
            Some(name) => {
                settings.insert(TITLE_COLUMN_KEY.to_string(), name.as_str().into());
            }
            None => {
                settings.remove(TITLE_COLUMN_KEY);
            }
        }
        settings.insert(SHOW_LEGEND_KEY.to_string(), self.show_legend.into());
    }
}

fn default_title_column(data: &ResultSet) -> Option<String> {
    let idx = data.first_column_of_kind(ColumnKind::Textual)?;
    Some(data.columns()[idx].name.clone())
}

/// Column names offered as title column choices.
pub fn title_column_options(data: &ResultSet) -> Vec<String> {
    data.columns().iter().map(|c| c.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::dataset::ResultColumn;

    fn data() -> ResultSet {
        ResultSet::new(
            vec![
                ResultColumn::integer("id"),
                ResultColumn::textual("name"),
                ResultColumn::textual("city"),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn defaults_pick_first_text_column_and_hide_legend() {
        let resolved = RadarSettings::resolve(&VisualizationSettings::new(), &data()).unwrap();
        assert_eq!(resolved.title_column.as_deref(), Some("name"));
        assert!(!resolved.show_legend);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let mut persisted = VisualizationSettings::new();
        persisted.insert(TITLE_COLUMN_KEY.into(), "city".into());
        persisted.insert(SHOW_LEGEND_KEY.into(), true.into());
        let resolved = RadarSettings::resolve(&persisted, &data()).unwrap();
        assert_eq!(
            resolved,
            RadarSettings::new().with_title_column("city").with_legend(true)
        );
    }

    #[test]
    fn wrong_types_are_reported() {
        let mut persisted = VisualizationSettings::new();
        persisted.insert(SHOW_LEGEND_KEY.into(), "yes".into());
        let err = RadarSettings::resolve(&persisted, &data()).unwrap_err();
        assert_eq!(
            err,
            SettingsError::WrongType {
                key: SHOW_LEGEND_KEY,
                expected: "boolean"
            }
        );
    }

    #[test]
    fn store_round_trips_through_resolve() {
        let settings = RadarSettings::new().with_title_column("city").with_legend(true);
        let mut persisted = VisualizationSettings::new();
        settings.store(&mut persisted);
        assert_eq!(RadarSettings::resolve(&persisted, &data()).unwrap(), settings);
    }

    #[test]
    fn options_list_every_column() {
        assert_eq!(title_column_options(&data()), vec!["id", "name", "city"]);
    }
}
