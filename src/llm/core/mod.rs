//! Core abstractions for the LLM layer

pub mod client;
pub mod config;
pub mod error;
