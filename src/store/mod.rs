mod local;
mod remote;

pub use local::LocalStore;
pub use remote::RemoteStore;

use thiserror::Error;

use crate::roster::StudentRecord;

/// Failure taxonomy shared by both store variants. Every variant of this enum
/// surfaces to the operator as one error reply on the triggering request.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("backend rejected request: {0}")]
    BackendRejected(String),
    #[error("validation rejected: {0}")]
    ValidationRejected(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Stable error code carried on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::BackendUnavailable(_) => "backend_unavailable",
            StoreError::BackendRejected(_) => "backend_rejected",
            StoreError::ValidationRejected(_) => "validation_rejected",
            StoreError::NotFound(_) => "not_found",
        }
    }
}

/// Fields the operator supplies when registering a student.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub phone: String,
}

impl NewStudent {
    /// Blank-field check, run before any backend traffic so a bad form never
    /// produces a network call or a file write.
    pub fn validate(&self) -> Result<(), StoreError> {
        for (field, value) in [
            ("id", &self.id),
            ("name", &self.name),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(StoreError::ValidationRejected(format!(
                    "{field} must not be blank"
                )));
            }
        }
        Ok(())
    }
}

/// Persistence boundary. Both implementations satisfy the same semantics so
/// everything above this trait is written once; which one is live is decided
/// at construction time by `backend.select`.
pub trait StudentStore {
    /// Full roster, insertion order. The caller keeps its last-known roster
    /// when this fails.
    fn list(&self) -> Result<Vec<StudentRecord>, StoreError>;

    /// Register a student. Validation happens first in both variants.
    fn add(&mut self, new: &NewStudent) -> Result<StudentRecord, StoreError>;

    /// Flip the paid flag for the record addressed by `record_ref`.
    fn set_paid(&mut self, record_ref: &str, new_value: bool) -> Result<(), StoreError>;

    /// Single record for the receipt path.
    fn fetch_one(&self, record_ref: &str) -> Result<StudentRecord, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected_with_field_name() {
        let blank_phone = NewStudent {
            id: "S1".into(),
            name: "Ann".into(),
            phone: "   ".into(),
        };
        let err = blank_phone.validate().expect_err("blank phone");
        assert_eq!(err.code(), "validation_rejected");
        assert!(err.to_string().contains("phone"));

        let ok = NewStudent {
            id: "S1".into(),
            name: "Ann".into(),
            phone: "123-456".into(),
        };
        assert!(ok.validate().is_ok());
    }
}
