use serde_json::json;

use crate::ipc::error::{err, ok, store_err};
use crate::ipc::helpers::param_str;
use crate::ipc::types::{AppState, Request};
use crate::receipt::format_receipt;

/// Receipts always reflect backend truth, so the record is re-fetched rather
/// than read from the in-memory roster.
fn handle_generate(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(record_ref) = param_str(req, "recordRef") else {
        return err(&req.id, "bad_params", "missing params.recordRef", None);
    };
    let Some(store) = state.store.as_ref() else {
        return err(&req.id, "no_backend", "select a backend first", None);
    };

    let student = match store.fetch_one(&record_ref) {
        Ok(s) => s,
        Err(e) => return store_err(&req.id, &e),
    };

    ok(
        &req.id,
        json!({ "receipt": format_receipt(&state.tutor_name, &student) }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "receipt.generate" => Some(handle_generate(state, req)),
        _ => None,
    }
}
