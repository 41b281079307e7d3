//! The features of the application.

pub mod hello;
