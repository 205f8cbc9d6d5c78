//! Output writing and status reporting

pub mod status;
pub mod writer;

pub use status::StatusReporter;
pub use writer::write_index;
