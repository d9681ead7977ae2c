use serde::Serialize;

use crate::roster::StudentRecord;

/// The three per-row affordances. Each binding names the IPC method the shell
/// should call and carries the record reference it was rendered from, so the
/// shell never dispatches through a stringified array index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowAction {
    pub action: &'static str,
    pub method: &'static str,
    pub record_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub record_ref: Option<String>,
    pub id: String,
    pub name: String,
    pub phone: String,
    pub paid: bool,
    pub status: &'static str,
    pub toggle_label: &'static str,
    pub actions: Vec<RowAction>,
}

/// Full, idempotent mapping from the filtered roster to the row list.
pub fn render_rows(filtered: &[&StudentRecord]) -> Vec<TableRow> {
    filtered
        .iter()
        .map(|s| {
            let bind = |action, method| RowAction {
                action,
                method,
                record_ref: s.record_ref.clone(),
            };
            TableRow {
                record_ref: s.record_ref.clone(),
                id: s.id.clone(),
                name: s.name.clone(),
                phone: s.phone.clone(),
                paid: s.paid,
                status: if s.paid { "Paid" } else { "Unpaid" },
                toggle_label: if s.paid { "Unpay" } else { "Pay" },
                actions: vec![
                    bind("togglePayment", "payments.toggle"),
                    bind("generateReceipt", "receipt.generate"),
                    bind("composeReminder", "reminder.compose"),
                ],
            }
        })
        .collect()
}
