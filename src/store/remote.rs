use serde_json::json;
use tracing::debug;

use crate::roster::StudentRecord;
use crate::store::{NewStudent, StoreError, StudentStore};

/// HTTP store speaking the tuition API: `GET/POST {base}/students`,
/// `PATCH {base}/students/{ref}/payment`, `GET {base}/students/{ref}`.
/// The backend owns record references and `datePaid`; the daemon treats the
/// remote date as an opaque display string.
pub struct RemoteStore {
    agent: ureq::Agent,
    base_url: String,
}

impl RemoteStore {
    pub fn new(base_url: &str) -> Self {
        RemoteStore {
            agent: ureq::AgentBuilder::new().build(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn students_url(&self) -> String {
        format!("{}/students", self.base_url)
    }

    fn student_url(&self, record_ref: &str) -> String {
        format!("{}/students/{}", self.base_url, record_ref)
    }

    /// A transport failure means the backend could not be reached; a status
    /// error is an explicit rejection whose body may carry a `message`.
    fn map_error(err: ureq::Error, not_found_as: Option<&str>) -> StoreError {
        match (err, not_found_as) {
            (ureq::Error::Status(404, _), Some(what)) => StoreError::NotFound(what.to_string()),
            (ureq::Error::Status(status, response), _) => {
                let message = response
                    .into_json::<serde_json::Value>()
                    .ok()
                    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                    .unwrap_or_else(|| format!("backend returned status {status}"));
                StoreError::BackendRejected(message)
            }
            (ureq::Error::Transport(transport), _) => {
                StoreError::BackendUnavailable(transport.to_string())
            }
        }
    }

    fn parse_record(response: ureq::Response) -> Result<StudentRecord, StoreError> {
        response
            .into_json::<StudentRecord>()
            .map_err(|e| StoreError::BackendUnavailable(format!("bad student payload: {e}")))
    }
}

impl StudentStore for RemoteStore {
    fn list(&self) -> Result<Vec<StudentRecord>, StoreError> {
        debug!(url = %self.students_url(), "fetching roster");
        let response = self
            .agent
            .get(&self.students_url())
            .call()
            .map_err(|e| Self::map_error(e, None))?;
        response
            .into_json::<Vec<StudentRecord>>()
            .map_err(|e| StoreError::BackendUnavailable(format!("bad roster payload: {e}")))
    }

    fn add(&mut self, new: &NewStudent) -> Result<StudentRecord, StoreError> {
        new.validate()?;
        let response = self
            .agent
            .post(&self.students_url())
            .send_json(json!({
                "id": new.id.trim(),
                "name": new.name.trim(),
                "phone": new.phone.trim(),
            }))
            .map_err(|e| Self::map_error(e, None))?;
        Self::parse_record(response)
    }

    fn set_paid(&mut self, record_ref: &str, new_value: bool) -> Result<(), StoreError> {
        let url = format!("{}/payment", self.student_url(record_ref));
        self.agent
            .patch(&url)
            .send_json(json!({ "paid": new_value }))
            .map_err(|e| Self::map_error(e, Some("student record to update")))?;
        Ok(())
    }

    fn fetch_one(&self, record_ref: &str) -> Result<StudentRecord, StoreError> {
        let response = self
            .agent
            .get(&self.student_url(record_ref))
            .call()
            .map_err(|e| Self::map_error(e, Some("student record for receipt")))?;
        Self::parse_record(response)
    }
}
