use crate::error::AppError;
use crate::reading::service::AnnualReadingRequest;
use async_trait::async_trait;
use serde_json::Value;

/// Defines the public interface for an external interpretation enhancer.
///
/// This trait abstracts the collaborator that produces a richer (typically
/// LLM-written) annual interpretation, allowing different backends (HTTP API,
/// local model, test doubles) to be used interchangeably.
///
/// The returned payload is untrusted: callers must run it through
/// `reading::validator::accept` before use.
#[async_trait]
pub trait EnhancementProvider: Send + Sync + 'static {
    /// Requests an enhanced interpretation for the given spread and year.
    async fn enhance(&self, request: &AnnualReadingRequest) -> Result<Value, AppError>;
}
