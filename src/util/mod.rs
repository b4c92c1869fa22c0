//! Browser glue helpers with native stubs.

pub mod alert;
pub mod clock;
pub mod storage;
