use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::param_str;
use crate::ipc::types::{AppState, Request};
use crate::reminder::compose;

/// A reminder is composed from the rendered roster, not a fresh fetch; the
/// row the operator clicked is the state they are reminding about.
fn handle_compose(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(record_ref) = param_str(req, "recordRef") else {
        return err(&req.id, "bad_params", "missing params.recordRef", None);
    };
    let Some(student) = state.roster.find(&record_ref) else {
        return err(
            &req.id,
            "not_found",
            format!("no roster entry for record reference {record_ref}"),
            None,
        );
    };

    match compose(&student.name, &student.phone, student.paid) {
        Ok(reminder) => ok(
            &req.id,
            json!({ "message": reminder.message, "url": reminder.url }),
        ),
        Err(e) => err(&req.id, "compose_failed", e.to_string(), None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "reminder.compose" => Some(handle_compose(state, req)),
        _ => None,
    }
}
