pub mod timer;

pub use timer::{elapsed_ms, measure, timed, ScopedTimer};
