//! HTTP request handlers

pub mod common;
pub mod weather;
