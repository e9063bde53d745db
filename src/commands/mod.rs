//! REST Command Wrappers
//!
//! Frontend bindings to the student backend, organized by domain.

mod student;

pub use student::*;
