//! HTTP surface and configuration for the prediction service binary

pub mod api;
pub mod config;
