//! # Enhancement Module
//!
//! Optional external generation of annual interpretations.
//!
//! ## Components
//! - `traits`: The `EnhancementProvider` seam
//! - `llm`: HTTP client for an LLM-backed reading endpoint

pub mod llm;
pub mod traits;

pub use llm::HttpEnhancementClient;
pub use traits::EnhancementProvider;
