use crate::roster::StudentRecord;

pub const DEFAULT_TUTOR_NAME: &str = "Mr SOLOMON";

/// Fixed-layout receipt text. The shell owns the print dialog; the daemon
/// only guarantees the content.
pub fn format_receipt(tutor_name: &str, student: &StudentRecord) -> String {
    let date_paid = student.date_paid.as_deref().unwrap_or("N/A");
    format!(
        "Payment Receipt\n\
         Tuition Tutor: {tutor_name}\n\
         Student ID: {id}\n\
         Name: {name}\n\
         Phone: {phone}\n\
         Date Paid: {date_paid}\n\
         Thank you for your payment!",
        id = student.id,
        name = student.name,
        phone = student.phone,
    )
}
