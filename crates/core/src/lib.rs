//! Domain crate for the railway fault dashboard.
//!
//! Holds the report data model, boundary validation, the list filter and
//! summary aggregation, and the view state shared by every frontend. The
//! crate performs no I/O; callers hand it decoded data.

pub mod error;
pub mod mock;
pub mod report;
pub mod reports;
pub mod types;
pub mod view;
