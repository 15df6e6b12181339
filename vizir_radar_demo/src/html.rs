// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-page HTML report wrapping the demo SVGs.

use crate::svg::escape_xml;

/// One demo in the report.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: String,
    /// Inline SVG, or `None` when the data is not plottable.
    pub(crate) svg: Option<String>,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{}</title>", escape_xml(title)));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:24px}section{margin-bottom:32px}\
         .empty{color:#888;font-style:italic}</style>",
    );
    out.push_str("</head><body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_xml(title)));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_xml(section.title)));
        out.push_str(&format!("<p>{}</p>\n", escape_xml(&section.description)));
        match &section.svg {
            Some(svg) => out.push_str(svg),
            None => out.push_str("<p class=\"empty\">Nothing to plot.</p>\n"),
        }
        out.push_str("</section>\n");
    }
    out.push_str("</body></html>\n");
    out
}
