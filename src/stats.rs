use serde::Serialize;
use serde_json::json;

use crate::roster::StudentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    pub total: usize,
    pub paid_count: usize,
    pub unpaid_count: usize,
}

/// Counts over the full roster, never the filtered view. Recomputed on every
/// render; rosters are small enough that caching would buy nothing.
pub fn aggregate(records: &[StudentRecord]) -> PaymentStats {
    let total = records.len();
    let paid_count = records.iter().filter(|r| r.paid).count();
    PaymentStats {
        total,
        paid_count,
        unpaid_count: total - paid_count,
    }
}

/// Paid/unpaid buckets for the dashboard pie chart.
pub fn chart_series(stats: &PaymentStats) -> serde_json::Value {
    json!({
        "labels": ["Paid", "Unpaid"],
        "data": [stats.paid_count, stats.unpaid_count],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, paid: bool) -> StudentRecord {
        StudentRecord {
            id: id.to_string(),
            name: id.to_string(),
            phone: "000".to_string(),
            paid,
            date_paid: None,
            record_ref: None,
        }
    }

    #[test]
    fn one_paid_one_unpaid() {
        let roster = vec![student("S1", true), student("S2", false)];
        let stats = aggregate(&roster);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.paid_count, 1);
        assert_eq!(stats.unpaid_count, 1);
    }

    #[test]
    fn counts_always_balance() {
        for paid_mask in 0u32..16 {
            let roster: Vec<StudentRecord> = (0..4)
                .map(|i| student(&format!("S{i}"), paid_mask & (1 << i) != 0))
                .collect();
            let stats = aggregate(&roster);
            assert_eq!(stats.paid_count + stats.unpaid_count, stats.total);
        }
    }

    #[test]
    fn empty_roster_is_all_zero() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.paid_count, 0);
        assert_eq!(stats.unpaid_count, 0);
    }

    #[test]
    fn chart_series_mirrors_counts() {
        let stats = aggregate(&[student("S1", true), student("S2", true), student("S3", false)]);
        let chart = chart_series(&stats);
        assert_eq!(chart["labels"], serde_json::json!(["Paid", "Unpaid"]));
        assert_eq!(chart["data"], serde_json::json!([2, 1]));
    }
}
