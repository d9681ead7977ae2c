use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::query_param;
use crate::ipc::types::{AppState, Request};
use crate::render::render_rows;
use crate::roster::filter_roster;
use crate::stats::{aggregate, chart_series};

/// Counts always come from the full roster, never the filtered view.
fn handle_stats(state: &mut AppState, req: &Request) -> serde_json::Value {
    let stats = aggregate(state.roster.all());
    ok(
        &req.id,
        json!({
            "total": stats.total,
            "paidCount": stats.paid_count,
            "unpaidCount": stats.unpaid_count,
            "chart": chart_series(&stats),
        }),
    )
}

/// Row list for the current roster, filtered by the query. Rendering never
/// refetches; `students.list` is the refresh path.
fn handle_render(state: &mut AppState, req: &Request) -> serde_json::Value {
    let query = query_param(req);
    let filtered = filter_roster(state.roster.all(), &query);
    ok(&req.id, json!({ "rows": render_rows(&filtered) }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "stats.get" => Some(handle_stats(state, req)),
        "table.render" => Some(handle_render(state, req)),
        _ => None,
    }
}
