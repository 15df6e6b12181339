// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar chart demos for `vizir_radar`.
//!
//! Writes `vizir_radar_demo.html`. Set `RUST_LOG=vizir_radar=debug` to see builder diagnostics.

mod html;
mod svg;

use kurbo::Rect;
use vizir_radar::{
    CellValue, HeuristicTextMeasurer, RadarChartSpec, RadarGeometry, RadarSettings, ResultColumn,
    ResultSet, SHOW_LEGEND_KEY, TITLE_COLUMN_KEY, VisualizationSettings, check_renderable,
    placeholder_dataset,
};

fn main() {
    env_logger::init();

    let sections = vec![
        placeholder_demo(),
        skills_demo(),
        flat_axis_demo(),
        unplottable_demo(),
        too_many_rows_demo(),
    ];

    let html = html::render_report("VizIR radar demo", &sections);
    std::fs::write("vizir_radar_demo.html", html).expect("write vizir_radar_demo.html");
    println!("wrote vizir_radar_demo.html");
}

/// Resolves persisted settings, checks the row limit, builds geometry and renders it.
fn render(data: &ResultSet, persisted: &VisualizationSettings) -> Result<Option<String>, String> {
    check_renderable(std::slice::from_ref(data)).map_err(|e| e.to_string())?;
    let settings = RadarSettings::resolve(persisted, data).map_err(|e| e.to_string())?;
    let Some(geometry) = RadarGeometry::build(data, &settings) else {
        return Ok(None);
    };
    let view = Rect::new(0.0, 0.0, 420.0, 300.0);
    let marks = RadarChartSpec::new(view).marks(&geometry, &HeuristicTextMeasurer);
    log::info!(
        "rendered {} axes, {} spokes into {} marks",
        geometry.axis_count(),
        geometry.spokes.len(),
        marks.len()
    );
    Ok(Some(svg::to_svg_string(view, &marks)))
}

fn section(
    title: &'static str,
    description: &str,
    data: &ResultSet,
    persisted: &VisualizationSettings,
) -> html::HtmlSection {
    match render(data, persisted) {
        Ok(svg) => html::HtmlSection {
            title,
            description: description.to_string(),
            svg,
        },
        Err(err) => {
            log::warn!("{title}: {err}");
            html::HtmlSection {
                title,
                description: format!("{description} ({err})"),
                svg: None,
            }
        }
    }
}

fn placeholder_demo() -> html::HtmlSection {
    section(
        "Placeholder",
        "Preview data shown before a query runs: two integer columns on the diagonal.",
        &placeholder_dataset(),
        &VisualizationSettings::new(),
    )
}

fn skills_demo() -> html::HtmlSection {
    let columns = vec![
        ResultColumn::textual("Team"),
        ResultColumn::integer("Rust"),
        ResultColumn::integer("SQL"),
        ResultColumn::numeric("Latency (ms)"),
        ResultColumn::integer("Reviews"),
        ResultColumn::other("Updated"),
        ResultColumn::numeric("Coverage"),
    ];
    let rows: Vec<Vec<CellValue>> = vec![
        team("Storage", [9, 6, 40], 12.5, Some(0.81)),
        team("Query", [7, 9, 55], 30.0, Some(0.74)),
        team("Frontend", [4, 5, 70], 80.0, Some(0.62)),
        team("Infra", [6, 3, 25], 45.0, None),
    ];
    let data = ResultSet::new(columns, rows).expect("rows match columns");

    let mut persisted = VisualizationSettings::new();
    persisted.insert(SHOW_LEGEND_KEY.into(), true.into());
    persisted.insert(TITLE_COLUMN_KEY.into(), "Team".into());
    section(
        "Teams",
        "Five numeric axes, one spoke per team, legend enabled. The date column is ignored and the missing coverage value sits at the origin.",
        &data,
        &persisted,
    )
}

fn team(
    name: &str,
    [rust, sql, reviews]: [i32; 3],
    latency: f64,
    coverage: Option<f64>,
) -> Vec<CellValue> {
    vec![
        name.into(),
        rust.into(),
        sql.into(),
        latency.into(),
        reviews.into(),
        CellValue::Null,
        coverage.into(),
    ]
}

fn flat_axis_demo() -> html::HtmlSection {
    let data = ResultSet::new(
        vec![
            ResultColumn::textual("Name"),
            ResultColumn::numeric("A"),
            ResultColumn::numeric("Flat"),
            ResultColumn::numeric("B"),
        ],
        vec![
            vec!["x".into(), 0.0.into(), 5.0.into(), 10.0.into()],
            vec!["y".into(), 10.0.into(), 5.0.into(), 0.0.into()],
        ],
    )
    .expect("rows match columns");
    section(
        "Degenerate axis",
        "Every row has the same value on `Flat`; those vertices sit at half radius.",
        &data,
        &VisualizationSettings::new(),
    )
}

fn unplottable_demo() -> html::HtmlSection {
    let data = ResultSet::new(
        vec![ResultColumn::textual("Name"), ResultColumn::other("When")],
        vec![vec!["x".into(), CellValue::Null]],
    )
    .expect("rows match columns");
    section(
        "No numeric columns",
        "Nothing to plot; the host suppresses the chart.",
        &data,
        &VisualizationSettings::new(),
    )
}

fn too_many_rows_demo() -> html::HtmlSection {
    let rows = (0..40_i32)
        .map(|i| vec![CellValue::from(i), CellValue::from(i * 2)])
        .collect();
    let data = ResultSet::new(vec![ResultColumn::integer("a"), ResultColumn::integer("b")], rows)
        .expect("rows match columns");
    section(
        "Too many rows",
        "The host rejects results above the row limit before building geometry.",
        &data,
        &VisualizationSettings::new(),
    )
}
