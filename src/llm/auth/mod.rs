//! Google Cloud authentication

pub mod adc;

pub use adc::{AdcTokenSource, StaticToken, TokenSource};
