//! HTTP route handlers for the relay server.

pub mod generate;
