//! Data models
//!
//! Mirrors of the backend DTOs. JSON field names are camelCase Portuguese,
//! as the backend emits them; all IDs are `i64`.

pub mod appointment;
pub mod clinic;
pub mod medical_record;
pub mod procedure;
pub mod rating;
pub mod request_ticket;
pub mod role;

// Re-exports
pub use appointment::*;
pub use clinic::*;
pub use medical_record::*;
pub use procedure::*;
pub use rating::*;
pub use request_ticket::*;
pub use role::*;
