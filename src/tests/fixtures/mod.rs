// Shared test fixtures, compiled into the crate only for tests.

pub mod attendance;
pub mod time_entries;
pub mod shell;
