use serde::Deserialize;

use crate::receipt::DEFAULT_TUTOR_NAME;
use crate::roster::Roster;
use crate::store::StudentStore;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub store: Option<Box<dyn StudentStore>>,
    pub backend_kind: Option<String>,
    pub roster: Roster,
    pub tutor_name: String,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: None,
            backend_kind: None,
            roster: Roster::default(),
            tutor_name: DEFAULT_TUTOR_NAME.to_string(),
        }
    }
}
