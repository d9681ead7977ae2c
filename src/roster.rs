use serde::{Deserialize, Serialize};

/// One student as known to the tracker. `record_ref` is the backend-assigned
/// reference (a document key for the remote backend, a synthesized positional
/// index for the local file store) and is distinct from the operator-assigned
/// `id` shown in the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_paid: Option<String>,
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub record_ref: Option<String>,
}

/// In-memory roster, the single source of truth the UI renders from.
/// Every state change is a full replacement after a store round-trip;
/// there is no partial-update path.
#[derive(Debug, Default)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    pub fn replace(&mut self, records: Vec<StudentRecord>) {
        self.records = records;
    }

    pub fn all(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Look up a record by its backend reference, for dispatching a row
    /// action back onto the record it was rendered from.
    pub fn find(&self, record_ref: &str) -> Option<&StudentRecord> {
        self.records
            .iter()
            .find(|r| r.record_ref.as_deref() == Some(record_ref))
    }
}

/// Case-insensitive substring filter over `id` and `name`. An empty query
/// keeps the whole roster, order preserved.
pub fn filter_roster<'a>(records: &'a [StudentRecord], query: &str) -> Vec<&'a StudentRecord> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| r.id.to_lowercase().contains(&q) || r.name.to_lowercase().contains(&q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str) -> StudentRecord {
        StudentRecord {
            id: id.to_string(),
            name: name.to_string(),
            phone: "000".to_string(),
            paid: false,
            date_paid: None,
            record_ref: None,
        }
    }

    #[test]
    fn empty_query_keeps_full_roster_in_order() {
        let roster = vec![student("S1", "Ann"), student("S2", "Bob")];
        let out = filter_roster(&roster, "");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "S1");
        assert_eq!(out[1].id, "S2");
    }

    #[test]
    fn filter_matches_name_substring_case_insensitive() {
        let roster = vec![student("S1", "Ann"), student("S2", "Bob")];
        let out = filter_roster(&roster, "an");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "S1");
    }

    #[test]
    fn filter_matches_id_substring_case_insensitive() {
        let roster = vec![student("S1", "Ann"), student("X9", "Bob")];
        let out = filter_roster(&roster, "x9");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Bob");
    }

    #[test]
    fn filter_is_idempotent() {
        let roster = vec![student("S1", "Ann"), student("S2", "Bob"), student("S3", "Dan")];
        let once: Vec<StudentRecord> = filter_roster(&roster, "an")
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<StudentRecord> = filter_roster(&once, "an")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn find_resolves_by_record_ref_not_id() {
        let mut a = student("S1", "Ann");
        a.record_ref = Some("doc-1".to_string());
        let mut roster = Roster::default();
        roster.replace(vec![a]);
        assert!(roster.find("doc-1").is_some());
        assert!(roster.find("S1").is_none());
    }

    #[test]
    fn record_wire_shape_uses_underscore_id() {
        let mut a = student("S1", "Ann");
        a.record_ref = Some("doc-1".to_string());
        a.paid = true;
        a.date_paid = Some("2026-08-27".to_string());
        let v = serde_json::to_value(&a).expect("serialize");
        assert_eq!(v.get("_id").and_then(|v| v.as_str()), Some("doc-1"));
        assert_eq!(v.get("datePaid").and_then(|v| v.as_str()), Some("2026-08-27"));

        let back: StudentRecord =
            serde_json::from_value(serde_json::json!({ "id": "S2", "name": "Bob", "phone": "1" }))
                .expect("deserialize");
        assert!(!back.paid);
        assert!(back.record_ref.is_none());
    }
}
