//! Mock backend for the railway fault dashboard.
//!
//! Serves a static report dataset over the same REST surface the dashboard
//! consumes (`/trainData`, `/trainData/{id}`). Exposes config, state, error
//! handling, routes and the router builder so integration tests and the
//! binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
