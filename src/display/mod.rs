//! Terminal output formatting

pub mod category;
pub mod summary;
pub mod transaction;

pub use category::format_category_list;
pub use summary::format_summary;
pub use transaction::{format_transaction_details, format_transaction_table};
