//! The hello feature.

pub mod hello_api;
pub mod hello_service;
