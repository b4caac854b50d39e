//! Live adapters for real external interactions.

pub mod clock;
pub mod dialog;
pub mod filesystem;
