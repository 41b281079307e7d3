//! A single-endpoint greeting service.
//!
//! The interesting part lives in [`feature::hello`]; everything else is
//! infrastructure for running and observing the server.

pub mod feature;
pub mod infra;
pub mod server;
