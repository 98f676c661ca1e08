//! Client side of the railway fault dashboard.
//!
//! Re-exports the fetch layer, view loaders and terminal renderer for
//! integration testing. The `raildash` binary lives in `main.rs`.

pub mod api;
pub mod cli;
pub mod config;
pub mod loader;
pub mod render;
