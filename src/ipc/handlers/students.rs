use serde_json::json;
use tracing::debug;

use crate::ipc::error::{err, ok, store_err};
use crate::ipc::helpers::{param_str, query_param, refresh_roster};
use crate::ipc::types::{AppState, Request};
use crate::roster::filter_roster;
use crate::store::NewStudent;

/// Reload from the store, then answer the (possibly filtered) roster. A
/// failed reload leaves the last-known roster in place.
fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(store) = state.store.as_ref() else {
        return err(&req.id, "no_backend", "select a backend first", None);
    };

    if let Err(e) = refresh_roster(store.as_ref(), &mut state.roster) {
        return store_err(&req.id, &e);
    }

    let query = query_param(req);
    let filtered = filter_roster(state.roster.all(), &query);
    debug!(total = state.roster.all().len(), shown = filtered.len(), "roster listed");
    ok(&req.id, json!({ "students": filtered }))
}

fn handle_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(id) = param_str(req, "id") else {
        return err(&req.id, "bad_params", "missing params.id", None);
    };
    let Some(name) = param_str(req, "name") else {
        return err(&req.id, "bad_params", "missing params.name", None);
    };
    let Some(phone) = param_str(req, "phone") else {
        return err(&req.id, "bad_params", "missing params.phone", None);
    };

    // Validation runs before any backend traffic.
    let new = NewStudent { id, name, phone };
    if let Err(e) = new.validate() {
        return store_err(&req.id, &e);
    }

    let Some(store) = state.store.as_mut() else {
        return err(&req.id, "no_backend", "select a backend first", None);
    };
    let created = match store.add(&new) {
        Ok(s) => s,
        Err(e) => return store_err(&req.id, &e),
    };

    // Mutations answer only after a full round-trip back through the store.
    if let Err(e) = refresh_roster(store.as_ref(), &mut state.roster) {
        return store_err(&req.id, &e);
    }

    ok(&req.id, json!({ "student": created }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_list(state, req)),
        "students.add" => Some(handle_add(state, req)),
        _ => None,
    }
}
