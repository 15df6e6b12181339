// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend declaration and mark generation.
//!
//! The radar legend is a vertical list of swatches, one per spoke, pinned near the left edge of
//! the view and centered vertically.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::marks::{Mark, MarkId, MarkPayload, RectMark, TextAnchor, TextBaseline, TextMark};
use crate::measure::TextMeasurer;
use crate::z_order;

/// Colors assigned to spokes, cycled by row index.
pub const SERIES_PALETTE: [Color; 9] = [
    Color::from_rgb8(0x54, 0x70, 0xc6),
    Color::from_rgb8(0x91, 0xcc, 0x75),
    Color::from_rgb8(0xfa, 0xc8, 0x58),
    Color::from_rgb8(0xee, 0x66, 0x66),
    Color::from_rgb8(0x73, 0xc0, 0xde),
    Color::from_rgb8(0x3b, 0xa2, 0x72),
    Color::from_rgb8(0xfc, 0x84, 0x52),
    Color::from_rgb8(0x9a, 0x60, 0xb4),
    Color::from_rgb8(0xea, 0x7c, 0xcc),
];

/// Color of the reference frame.
pub const FRAME_COLOR: Color = css::GRAY;

/// Returns the palette color for the spoke at `row`.
pub fn series_color(row: usize) -> Color {
    SERIES_PALETTE[row % SERIES_PALETTE.len()]
}

/// A legend row: a swatch plus a label.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// Spoke label.
    pub label: String,
    /// Swatch color, matching the spoke stroke.
    pub color: Color,
}

/// Declared legend block.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSpec {
    /// Offset from the left edge of the view.
    pub left: f64,
    /// Items in spoke order.
    pub items: Vec<LegendItem>,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Gap between items.
    pub item_gap: f64,
    /// Gap between swatch and label.
    pub label_dx: f64,
    /// Label font size.
    pub font_size: f64,
}

impl LegendSpec {
    /// A vertical legend, 10 units from the left edge and vertically centered.
    pub fn new(items: Vec<LegendItem>) -> Self {
        Self {
            left: 10.0,
            items,
            swatch_size: 10.0,
            item_gap: 6.0,
            label_dx: 6.0,
            font_size: 10.0,
        }
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    fn row_height(&self) -> f64 {
        self.swatch_size.max(self.font_size)
    }

    fn item_width(&self, item: &LegendItem, measurer: &impl TextMeasurer) -> f64 {
        let (w, _) = measurer.measure(&item.label, self.font_size);
        self.swatch_size + self.label_dx + w
    }

    /// Measures the legend block, excluding the `left` offset.
    pub fn measure(&self, measurer: &impl TextMeasurer) -> (f64, f64) {
        if self.items.is_empty() {
            return (0.0, 0.0);
        }
        let n = self.items.len() as f64;
        let w = self
            .items
            .iter()
            .map(|i| self.item_width(i, measurer))
            .fold(0.0_f64, f64::max);
        let h = n * self.row_height() + (n - 1.0) * self.item_gap;
        (w, h)
    }

    /// Generates swatch and label marks placed within `view`.
    ///
    /// Item `i` uses id `id_base + 2 * i` for its swatch and `id_base + 2 * i + 1` for its label.
    pub fn marks(&self, id_base: u64, view: Rect, measurer: &impl TextMeasurer) -> Vec<Mark> {
        let (_, height) = self.measure(measurer);
        let row_height = self.row_height();
        let text_fill: Brush = css::BLACK.into();

        let mut out = Vec::with_capacity(self.items.len() * 2);
        let x = view.x0 + self.left;
        let mut y = view.y0 + (view.height() - height) * 0.5;
        for (i, item) in self.items.iter().enumerate() {
            let swatch_y = y + (row_height - self.swatch_size) * 0.5;
            out.push(Mark::new(
                MarkId::from_raw(id_base + 2 * i as u64),
                z_order::LEGEND_SWATCHES,
                MarkPayload::Rect(RectMark {
                    rect: Rect::new(
                        x,
                        swatch_y,
                        x + self.swatch_size,
                        swatch_y + self.swatch_size,
                    ),
                    fill: Brush::Solid(item.color),
                }),
            ));
            out.push(Mark::new(
                MarkId::from_raw(id_base + 2 * i as u64 + 1),
                z_order::LEGEND_LABELS,
                MarkPayload::Text(TextMark {
                    pos: (x + self.swatch_size + self.label_dx, y + row_height * 0.5).into(),
                    text: item.label.clone(),
                    font_size: self.font_size,
                    anchor: TextAnchor::Start,
                    baseline: TextBaseline::Middle,
                    fill: text_fill.clone(),
                }),
            ));
            y += row_height + self.item_gap;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::Point;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    fn items() -> Vec<LegendItem> {
        vec![
            LegendItem {
                label: "A".into(),
                color: series_color(0),
            },
            LegendItem {
                label: "BBBB".into(),
                color: series_color(1),
            },
            LegendItem {
                label: "CC".into(),
                color: series_color(2),
            },
        ]
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(series_color(0), series_color(SERIES_PALETTE.len()));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn vertical_legend_is_centered_and_left_aligned() {
        let measurer = HeuristicTextMeasurer;
        let legend = LegendSpec::new(items());
        let (_, h) = legend.measure(&measurer);
        let view = Rect::new(0.0, 0.0, 200.0, 100.0);
        let marks = legend.marks(500, view, &measurer);
        assert_eq!(marks.len(), 6);

        let MarkPayload::Rect(first) = &marks[0].payload else {
            panic!("expected swatch rect");
        };
        assert_eq!(first.rect.x0, 10.0);
        assert!((first.rect.y0 - (100.0 - h) * 0.5).abs() < 1e-9);

        let MarkPayload::Rect(last) = &marks[4].payload else {
            panic!("expected swatch rect");
        };
        assert_eq!(last.rect.x0, 10.0);
        assert!((last.rect.y1 - (100.0 + h) * 0.5).abs() < 1e-9);
        assert_eq!(marks[5].id, MarkId::from_raw(505));
    }

    /// Every label is 30 units wide regardless of its text.
    struct FixedWidth;

    impl TextMeasurer for FixedWidth {
        fn measure(&self, _text: &str, font_size: f64) -> (f64, f64) {
            (30.0, font_size)
        }
    }

    #[test]
    fn measure_stacks_rows_and_takes_widest_label() {
        let legend = LegendSpec::new(items());
        // swatch 10 + label gap 6 + label 30; three rows of 10 with two gaps of 6
        assert_eq!(legend.measure(&FixedWidth), (46.0, 42.0));

        let marks = legend.marks(0, Rect::new(0.0, 0.0, 200.0, 142.0), &FixedWidth);
        let tops: Vec<f64> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Rect(r) => Some(r.rect.y0),
                _ => None,
            })
            .collect();
        assert_eq!(tops, vec![50.0, 66.0, 82.0]);
        let MarkPayload::Text(label) = &marks[1].payload else {
            panic!("expected label text");
        };
        assert_eq!(label.pos, Point::new(26.0, 55.0));
    }

    #[test]
    fn empty_legend_measures_zero() {
        let legend = LegendSpec::new(Vec::new());
        assert_eq!(legend.measure(&HeuristicTextMeasurer), (0.0, 0.0));
    }
}
