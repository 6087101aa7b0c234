// Library surface for integration tests and embedding callers.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod dispatch;
pub mod report;
pub mod util;
pub mod workout;
