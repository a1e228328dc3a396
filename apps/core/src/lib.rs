//! Tarot reading interpretation core.
//!
//! Rule-based annual and seasonal readings (`reading`), an optional validated
//! LLM enhancement path (`enhancement`), and the caller-side reading archive.

pub mod database;
pub mod enhancement;
pub mod error;
pub mod fs_manager;
pub mod models;
pub mod reading;
pub mod telemetry;

#[cfg(test)]
mod tests;
