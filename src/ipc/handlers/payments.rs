use serde_json::json;
use tracing::debug;

use crate::ipc::error::{err, ok, store_err};
use crate::ipc::helpers::{param_str, refresh_roster};
use crate::ipc::types::{AppState, Request};

/// Two states per record, Paid and Unpaid, flipped only by this explicit
/// operator action. The new value is the inverse of what the roster currently
/// shows; the reply is sent only after the store round-trip and a full reload.
fn handle_toggle(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(record_ref) = param_str(req, "recordRef") else {
        return err(&req.id, "bad_params", "missing params.recordRef", None);
    };

    let Some(current) = state.roster.find(&record_ref) else {
        return err(
            &req.id,
            "not_found",
            format!("no roster entry for record reference {record_ref}"),
            None,
        );
    };
    let new_value = !current.paid;

    let Some(store) = state.store.as_mut() else {
        return err(&req.id, "no_backend", "select a backend first", None);
    };
    if let Err(e) = store.set_paid(&record_ref, new_value) {
        return store_err(&req.id, &e);
    }
    if let Err(e) = refresh_roster(store.as_ref(), &mut state.roster) {
        return store_err(&req.id, &e);
    }

    debug!(record_ref = %record_ref, paid = new_value, "payment toggled");
    ok(
        &req.id,
        json!({
            "paid": new_value,
            "student": state.roster.find(&record_ref),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "payments.toggle" => Some(handle_toggle(state, req)),
        _ => None,
    }
}
