//! Reports derived from tracker state

pub mod spending;

pub use spending::{SpendingByCategory, SpendingReport};
