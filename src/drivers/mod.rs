//! Concrete output drivers.
//!
//! Drivers are the emission end of the pipeline: they receive finished
//! entries and own all rendering and write-failure concerns. The logger
//! never looks back at a driver after handing an entry over.

pub mod json;
pub mod text;

pub use json::JsonDriver;
pub use text::TextDriver;
