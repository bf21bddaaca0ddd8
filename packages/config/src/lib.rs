// ABOUTME: Configuration constants shared by the Worktrack binary and its tests
// ABOUTME: Names every environment variable the service reads

pub mod constants;

pub use constants::*;
