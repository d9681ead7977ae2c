use crate::ipc::types::Request;
use crate::roster::Roster;
use crate::store::{StoreError, StudentStore};

/// Required string param, trimmed. `None` means the caller should answer
/// `bad_params` naming the key.
pub fn param_str(req: &Request, key: &str) -> Option<String> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
}

/// Optional query param; absent means "show everything".
pub fn query_param(req: &Request) -> String {
    req.params
        .get("query")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Full reload from the store into the in-memory roster. On failure the
/// roster keeps its last-known contents.
pub fn refresh_roster(store: &dyn StudentStore, roster: &mut Roster) -> Result<(), StoreError> {
    let records = store.list()?;
    roster.replace(records);
    Ok(())
}
