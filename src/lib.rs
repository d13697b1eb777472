//! BBQ Salt Calculator Library
//!
//! Kosher salt recommendations for ribs seasoned with a sodium-bearing
//! dry rub, and the web front end that serves them.

pub mod build_info;
pub mod config;
pub mod error;
pub mod models;
pub mod sodium;
pub mod web;
