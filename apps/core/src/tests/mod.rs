//! Test Module
//!
//! Cross-module tests for the tarot core.
//!
//! ## Test Categories
//! - `reading_tests`: Generator properties and the two reference scenarios
//! - `service_tests`: Enhancement fallback states with mock providers
//! - `database_tests`: Reading archive CRUD

pub mod database_tests;
