//! Entity definitions (database row mappings).

pub mod user;

pub use user::{UserCountRow, UserSummaryRow};
