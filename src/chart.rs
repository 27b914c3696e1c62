//! Plotly bar chart of repositories by star count.

use crate::error::Result;
use crate::models::Repository;
use plotly::common::{Font, Marker, Title};
use plotly::layout::Axis;
use plotly::{Bar, Layout, Plot};
use std::path::Path;
use tracing::info;

pub const DEFAULT_OUTPUT_PATH: &str = "github_repository_charts.html";

const TITLE_FONT_SIZE: usize = 28;
const AXIS_TITLE_FONT_SIZE: usize = 20;
const BAR_COLOR: &str = "SteelBlue";
const BAR_OPACITY: f64 = 0.6;
const HOVER_TEMPLATE: &str = "%{hovertext}<br />%{y} Stars<extra></extra>";

/// X tick label size; denser charts get smaller labels
pub fn tick_font_size(count: usize) -> usize {
    match count {
        0..=20 => 14,
        21..=50 => 12,
        51..=100 => 10,
        _ => 8,
    }
}

/// Shape repositories into a bar chart
pub fn make_chart(repositories: &[Repository], title: &str) -> Plot {
    let links: Vec<String> = repositories
        .iter()
        .map(|r| {
            format!(
                "<a href='{}'>{}</a>",
                escape_html(&r.html_url),
                escape_html(&r.name)
            )
        })
        .collect();

    let stars: Vec<u64> = repositories.iter().map(|r| r.stars).collect();

    let hover_texts: Vec<String> = repositories
        .iter()
        .map(|r| {
            format!(
                "<b>{}</b><br />{}<br />{}",
                escape_html(&r.name),
                escape_html(&r.owner),
                escape_html(&r.description)
            )
        })
        .collect();

    let trace = Bar::new(links, stars)
        .hover_text_array(hover_texts)
        .hover_template(HOVER_TEMPLATE)
        .marker(Marker::new().color(BAR_COLOR).opacity(BAR_OPACITY));

    let layout = Layout::new()
        .title(Title::new(&escape_html(title)).font(Font::new().size(TITLE_FONT_SIZE)))
        .x_axis(
            Axis::new()
                .title(Title::new("Repositories").font(Font::new().size(AXIS_TITLE_FONT_SIZE)))
                .tick_font(Font::new().size(tick_font_size(repositories.len()))),
        )
        .y_axis(
            Axis::new().title(Title::new("Stars").font(Font::new().size(AXIS_TITLE_FONT_SIZE))),
        );

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Write the chart to `output` and optionally show it in the browser
pub fn render(repositories: &[Repository], title: &str, output: &Path, open: bool) -> Result<()> {
    let plot = make_chart(repositories, title);

    std::fs::write(output, plot.to_html())?;
    info!(path = %output.display(), bars = repositories.len(), "Wrote chart");

    if open {
        plot.show();
    }

    Ok(())
}

// Plotly renders labels and hover text as HTML
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
