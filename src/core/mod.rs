//! Core types: response envelope, error taxonomy and input validation contract.

pub mod envelope;
pub mod error;
pub mod nullable;
pub mod validate;
