pub mod core;
pub mod payments;
pub mod receipts;
pub mod reminders;
pub mod students;
pub mod table;
