pub mod job;
#[cfg(test)]
pub mod mock;
pub mod person;

pub use job::{JobStore, PgJobStore};
pub use person::{PersonStore, PgPersonStore};
