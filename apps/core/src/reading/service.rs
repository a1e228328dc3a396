//! Reading Service - enhancement attempt with guaranteed local fallback.
//!
//! `resolve` always yields an interpretation that passes the validator:
//! either an accepted enhanced payload (`llm`) or a locally generated one
//! (`local` when enhancement is off, `llm-fallback-local` when it failed).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use super::annual::{AnnualInterpretation, AnnualReadingGenerator};
use super::card::Card;
use super::monthly_notes::Month;
use super::validator;
use crate::enhancement::{EnhancementProvider, HttpEnhancementClient};
use crate::error::AppError;
use crate::models::EnhancementConfig;

/// Where a resolved interpretation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingSource {
    Local,
    Llm,
    LlmFallbackLocal,
}

impl ReadingSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingSource::Local => "local",
            ReadingSource::Llm => "llm",
            ReadingSource::LlmFallbackLocal => "llm-fallback-local",
        }
    }
}

impl fmt::Display for ReadingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReadingSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(ReadingSource::Local),
            "llm" => Ok(ReadingSource::Llm),
            "llm-fallback-local" => Ok(ReadingSource::LlmFallbackLocal),
            other => Err(AppError::Validation(format!("Unknown reading source: {}", other))),
        }
    }
}

/// Theme card, twelve month cards and the target year
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualReadingRequest {
    pub theme_card: Card,
    pub month_cards: BTreeMap<u8, Card>,
    pub year: i32,
}

impl AnnualReadingRequest {
    pub fn new(theme_card: Card, month_cards: BTreeMap<u8, Card>, year: i32) -> Self {
        Self {
            theme_card,
            month_cards,
            year,
        }
    }

    /// Rejects spreads missing any of months 1..=12.
    pub fn ensure_complete(&self) -> Result<(), AppError> {
        let missing: Vec<u8> = Month::all()
            .map(|m| m.number())
            .filter(|m| !self.month_cards.contains_key(m))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "month cards missing for months {:?}",
                missing
            )))
        }
    }
}

/// A validated interpretation together with its origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedReading {
    pub interpretation: AnnualInterpretation,
    pub source: ReadingSource,
}

/// An enhancement provider together with the bound on each attempt
struct Enhancement {
    provider: Arc<dyn EnhancementProvider>,
    timeout: Duration,
}

/// Orchestrates the enhancement path and the local generator.
pub struct ReadingService {
    generator: AnnualReadingGenerator,
    enhancement: Option<Enhancement>,
}

impl ReadingService {
    /// Local generation only.
    pub fn local() -> Self {
        Self {
            generator: AnnualReadingGenerator::new(),
            enhancement: None,
        }
    }

    /// Attempts `enhancer` first, bounded by `enhancement_timeout`.
    pub fn with_enhancer(enhancer: Arc<dyn EnhancementProvider>, enhancement_timeout: Duration) -> Self {
        Self {
            generator: AnnualReadingGenerator::new(),
            enhancement: Some(Enhancement {
                provider: enhancer,
                timeout: enhancement_timeout,
            }),
        }
    }

    /// Builds the service from configuration, wiring the HTTP client when enabled.
    pub fn from_config(config: &EnhancementConfig) -> Result<Self, AppError> {
        if !config.enabled {
            info!("Enhancement disabled, using local interpretations only");
            return Ok(Self::local());
        }

        let client = HttpEnhancementClient::new(config)?;
        info!(endpoint = %client.endpoint(), timeout_secs = config.timeout_secs, "Enhancement enabled");
        Ok(Self::with_enhancer(Arc::new(client), config.timeout()))
    }

    pub fn enhancement_enabled(&self) -> bool {
        self.enhancement.is_some()
    }

    /// Resolves a reading for a complete spread.
    ///
    /// # Errors
    ///
    /// `AppError::Validation` if the spread is missing months. Enhancement
    /// failures never surface; they route to local generation.
    #[instrument(skip(self, request), fields(year = request.year, theme = %request.theme_card.name()))]
    pub async fn resolve(&self, request: &AnnualReadingRequest) -> Result<ResolvedReading, AppError> {
        request.ensure_complete()?;

        let Some(enhancement) = &self.enhancement else {
            return Ok(ResolvedReading {
                interpretation: self.generate_local(request),
                source: ReadingSource::Local,
            });
        };

        match Self::try_enhance(enhancement, request).await {
            Some(interpretation) => {
                info!("Using enhanced interpretation");
                Ok(ResolvedReading {
                    interpretation,
                    source: ReadingSource::Llm,
                })
            }
            None => Ok(ResolvedReading {
                interpretation: self.generate_local(request),
                source: ReadingSource::LlmFallbackLocal,
            }),
        }
    }

    async fn try_enhance(
        enhancement: &Enhancement,
        request: &AnnualReadingRequest,
    ) -> Option<AnnualInterpretation> {
        match timeout(enhancement.timeout, enhancement.provider.enhance(request)).await {
            Ok(Ok(payload)) => {
                let accepted = validator::accept(payload);
                if accepted.is_none() {
                    warn!("Enhanced interpretation failed validation, falling back to local generation");
                }
                accepted
            }
            Ok(Err(e)) => {
                warn!("Enhancement failed, falling back to local generation: {}", e);
                None
            }
            Err(_) => {
                warn!(
                    "Enhancement timed out after {:?}, falling back to local generation",
                    enhancement.timeout
                );
                None
            }
        }
    }

    fn generate_local(&self, request: &AnnualReadingRequest) -> AnnualInterpretation {
        let interpretation = self
            .generator
            .generate(&request.theme_card, &request.month_cards);

        if let Err(e) = validator::check_cardinality(&interpretation) {
            // Complete spreads always satisfy the bounds.
            warn!("Local interpretation outside expected bounds: {}", e);
        }
        debug!(highlights = ?interpretation.highlights, "Local interpretation ready");

        interpretation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_round_trip_strings() {
        for source in [ReadingSource::Local, ReadingSource::Llm, ReadingSource::LlmFallbackLocal] {
            assert_eq!(source.as_str().parse::<ReadingSource>().unwrap(), source);
            assert_eq!(
                serde_json::to_value(source).unwrap(),
                serde_json::Value::String(source.as_str().to_string())
            );
        }
        assert!("remote".parse::<ReadingSource>().is_err());
    }

    #[test]
    fn test_ensure_complete_lists_missing_months() {
        let mut months: BTreeMap<u8, Card> = (1..=12).map(|m| (m, Card::upright("The Star"))).collect();
        months.remove(&4);
        months.remove(&11);
        let request = AnnualReadingRequest::new(Card::upright("The Star"), months, 2026);

        match request.ensure_complete() {
            Err(AppError::Validation(msg)) => assert!(msg.contains("[4, 11]")),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_disabled_is_local() {
        let service = ReadingService::from_config(&EnhancementConfig::default()).unwrap();
        assert!(!service.enhancement_enabled());
    }

    #[test]
    fn test_from_config_enabled_wires_client() {
        let config = EnhancementConfig {
            enabled: true,
            endpoint: Some("http://127.0.0.1:9/annual".to_string()),
            ..EnhancementConfig::default()
        };
        let service = ReadingService::from_config(&config).unwrap();
        assert!(service.enhancement_enabled());
    }

    #[test]
    fn test_timeout_only_exists_with_enhancer() {
        assert!(ReadingService::local().enhancement.is_none());

        let config = EnhancementConfig {
            enabled: true,
            endpoint: Some("http://127.0.0.1:9/annual".to_string()),
            timeout_secs: 7,
            ..EnhancementConfig::default()
        };
        let service = ReadingService::from_config(&config).unwrap();
        let timeout = service.enhancement.as_ref().map(|e| e.timeout);
        assert_eq!(timeout, Some(Duration::from_secs(7)));
    }
}
