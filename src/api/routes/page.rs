//! Dashboard Page
//!
//! - GET / - The single-page dashboard
//!
//! The page is a static template with the selector options and panel
//! containers filled in server-side. Its script fetches each panel's
//! figure from the chart routes and draws it with Plotly.

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::charts::ChartKind;

static DASHBOARD_TEMPLATE: &str = include_str!("../../../assets/dashboard.html");

/// GET /
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let dashboard = &state.config.dashboard;
    Html(render_dashboard(
        &dashboard.title,
        &dashboard.plotly_cdn,
        &state.dataset.countries(),
        &dashboard.default_country,
    ))
}

/// Fill the page template.
///
/// `selected` always ends up as the selected option, even when it has no
/// rows, so the first render asks for the same country the chart routes
/// default to.
pub fn render_dashboard(
    title: &str,
    plotly_cdn: &str,
    countries: &[&str],
    selected: &str,
) -> String {
    let mut options: String = countries
        .iter()
        .map(|country| option_tag(country, *country == selected))
        .collect();

    if !countries.contains(&selected) {
        options.push_str(&option_tag(selected, true));
    }

    let panels: String = ChartKind::all()
        .iter()
        .map(|k| format!("    <div id=\"{}\" class=\"chart\"></div>\n", k.panel_id()))
        .collect();

    let panel_ids: Vec<&str> = ChartKind::all().iter().map(|k| k.panel_id()).collect();
    // Panel ids are fixed ASCII identifiers
    let panel_ids = serde_json::to_string(&panel_ids).unwrap_or_else(|_| "[]".to_string());

    DASHBOARD_TEMPLATE
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{PLOTLY_CDN}}", &escape_html(plotly_cdn))
        .replace("{{OPTIONS}}", options.trim_end())
        .replace("{{PANELS}}", panels.trim_end())
        .replace("{{PANEL_IDS}}", &panel_ids)
}

fn option_tag(country: &str, selected: bool) -> String {
    let marker = if selected { " selected" } else { "" };
    format!(
        "        <option value=\"{0}\"{1}>{0}</option>\n",
        escape_html(country),
        marker
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
