// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;

// Environment configuration
pub mod config;

// LLM client layer
pub mod llm;

// Tool handlers and dispatch
pub mod tools;
