//! # Reading Module
//!
//! Rule-based tarot interpretation. Turns drawn cards into structured
//! narrative readings without any network access; the enhancement path
//! (`crate::enhancement`) is always validated against, and backed by, this module.
//!
//! ## Components
//! - `card`: Card model and name resolution into a tagged identity
//! - `templates`: Static interpretation templates
//! - `classifier`: Card to template lookup (total)
//! - `orientation`: Upright/reversed adjustments
//! - `monthly_notes`: Seasonal commentary per month
//! - `annual`: Annual reading generator
//! - `seasonal`: Seasonal reading generator
//! - `validator`: Shape and cardinality checks
//! - `service`: Enhancement attempt with local fallback

pub mod annual;
pub mod card;
pub mod classifier;
pub mod monthly_notes;
pub mod orientation;
pub mod seasonal;
pub mod service;
pub mod templates;
pub mod validator;

pub use annual::{AnnualInterpretation, AnnualReadingGenerator, MonthInterpretation};
pub use card::{Card, CardIdentity, MajorArcana, Orientation, Rank, Suit};
pub use classifier::{classify, classify_name};
pub use monthly_notes::{monthly_note, Month};
pub use seasonal::{Season, SeasonalInterpretation, SeasonalReadingGenerator};
pub use service::{AnnualReadingRequest, ReadingService, ReadingSource, ResolvedReading};
pub use templates::{CardTemplate, FocusArea};
pub use validator::{accept, check_cardinality, is_valid};
