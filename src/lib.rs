//! MCP tool server for the Wildberries seller communications API: buyer
//! feedback, questions and return claims.

pub mod cli;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
