use serde_json::json;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::ipc::error::{err, ok, store_err};
use crate::ipc::helpers::{param_str, refresh_roster};
use crate::ipc::types::{AppState, Request};
use crate::store::{LocalStore, RemoteStore, StudentStore};

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "backend": state.backend_kind,
        }),
    )
}

/// Pick the persistence backend. Everything downstream of this call is
/// written once against the store trait; only construction differs.
fn handle_backend_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(kind) = param_str(req, "kind") else {
        return err(&req.id, "bad_params", "missing params.kind", None);
    };

    let store: Box<dyn StudentStore> = match kind.as_str() {
        "local" => {
            let Some(path) = param_str(req, "path") else {
                return err(&req.id, "bad_params", "missing params.path", None);
            };
            match LocalStore::open(&PathBuf::from(&path)) {
                Ok(s) => Box::new(s),
                Err(e) => return store_err(&req.id, &e),
            }
        }
        "remote" => {
            let Some(base_url) = param_str(req, "baseUrl") else {
                return err(&req.id, "bad_params", "missing params.baseUrl", None);
            };
            Box::new(RemoteStore::new(&base_url))
        }
        other => {
            return err(
                &req.id,
                "bad_params",
                format!("unknown backend kind: {other}"),
                None,
            )
        }
    };

    if let Some(tutor) = param_str(req, "tutorName").filter(|t| !t.is_empty()) {
        state.tutor_name = tutor;
    }

    // Prime the roster. A remote backend that is down stays selected so the
    // operator can retry, but starts from an empty roster.
    let primed = match refresh_roster(store.as_ref(), &mut state.roster) {
        Ok(()) => true,
        Err(e) => {
            warn!(backend = %kind, error = %e, "initial roster load failed");
            state.roster.replace(Vec::new());
            false
        }
    };

    info!(backend = %kind, primed, "backend selected");
    state.backend_kind = Some(kind.clone());
    state.store = Some(store);
    ok(
        &req.id,
        json!({
            "backend": kind,
            "primed": primed,
            "studentCount": state.roster.all().len(),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "backend.select" => Some(handle_backend_select(state, req)),
        _ => None,
    }
}
