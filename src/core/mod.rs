//! Configuration, request/response models and the shared upstream transport.

pub mod config;
pub mod http;
pub mod models;
