//! Annual Reading Generator.
//!
//! Builds an [`AnnualInterpretation`] from a theme card and up to twelve month
//! cards. Structure is deterministic for a given input; only the cautionary
//! prefix on reversed advice depends on the injected RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::card::{Card, Orientation};
use super::classifier::classify;
use super::monthly_notes::{monthly_note, Month};
use super::orientation::{adjust_advice, derive_year_keywords};

const MAX_HIGHLIGHTS: usize = 3;
const MAX_LOWLIGHTS: usize = 2;
const DEFAULT_HIGHLIGHTS: [u8; 3] = [3, 6, 9];
const DEFAULT_LOWLIGHTS: [u8; 1] = [2];

const MONTH_KEYWORDS: usize = 2;
const MONTH_FOCUS_AREAS: usize = 2;

const UPRIGHT_ENERGY: &str = "整体能量积极顺畅，适合主动开拓、稳步推进。";
const REVERSED_ENERGY: &str = "整体能量存在阻滞，需要耐心调整节奏、稳中求进。";
const BALANCE_WARNING: &str = "注意平衡工作与生活，避免过度消耗身心。";
const DECISIVENESS_WARNING: &str = "面对重要抉择时保持果断，不要因犹豫而错失时机。";

/// Interpretation of a single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthInterpretation {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub advice: String,
    /// Present only when the month card is reversed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
    #[serde(default)]
    pub monthly_note: String,
}

/// Full annual reading.
///
/// Month entries and list fields decode leniently so that any payload passing
/// the shape check is usable; only `months` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualInterpretation {
    #[serde(default)]
    pub year_keywords: Vec<String>,
    #[serde(default)]
    pub year_overview: Vec<String>,
    #[serde(default)]
    pub year_warnings: Vec<String>,
    pub months: BTreeMap<u8, MonthInterpretation>,
    #[serde(default)]
    pub highlights: Vec<u8>,
    #[serde(default)]
    pub lowlights: Vec<u8>,
    #[serde(default)]
    pub action_list: Vec<String>,
}

impl AnnualInterpretation {
    pub fn month(&self, number: u8) -> Option<&MonthInterpretation> {
        self.months.get(&number)
    }
}

/// Interprets one month card. Shared by the annual and seasonal generators.
pub fn interpret_month<R: Rng + ?Sized>(month: Month, card: &Card, rng: &mut R) -> MonthInterpretation {
    let template = classify(card);
    let orientation = card.orientation();

    MonthInterpretation {
        keywords: template
            .month_keywords
            .iter()
            .take(MONTH_KEYWORDS)
            .map(|k| k.to_string())
            .collect(),
        focus_areas: template
            .focus_areas
            .iter()
            .take(MONTH_FOCUS_AREAS)
            .map(|area| area.label().to_string())
            .collect(),
        advice: adjust_advice(template.advice, orientation, rng),
        risk: orientation.is_reversed().then(|| template.risk.to_string()),
        monthly_note: monthly_note(month, orientation).to_string(),
    }
}

/// Sentence describing the overall energy of a card's orientation
pub(crate) fn energy_sentence(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Upright => UPRIGHT_ENERGY,
        Orientation::Reversed => REVERSED_ENERGY,
    }
}

/// The card's own keywords when supplied, otherwise its template's year keywords
pub(crate) fn leading_keywords(card: &Card, count: usize) -> Vec<String> {
    match card.keywords() {
        Some(keywords) if !keywords.is_empty() => keywords.iter().take(count).cloned().collect(),
        _ => classify(card)
            .year_keywords
            .iter()
            .take(count)
            .map(|k| k.to_string())
            .collect(),
    }
}

/// First-fit scan over months 1..=12: the first reversed months become
/// lowlights, the first upright months become highlights. Defaults apply when a
/// scan finds nothing, and a defaulted month never lands in both lists.
fn select_highlights(month_cards: &BTreeMap<u8, Card>) -> (Vec<u8>, Vec<u8>) {
    let scored: Vec<(u8, i8)> = Month::all()
        .filter_map(|month| {
            month_cards
                .get(&month.number())
                .map(|card| (month.number(), card.orientation().score()))
        })
        .collect();

    let mut lowlights: Vec<u8> = scored
        .iter()
        .filter(|(_, score)| *score < 0)
        .map(|(month, _)| *month)
        .take(MAX_LOWLIGHTS)
        .collect();
    if lowlights.is_empty() {
        lowlights = DEFAULT_LOWLIGHTS.to_vec();
    }

    let mut highlights: Vec<u8> = scored
        .iter()
        .filter(|(month, score)| *score > 0 && !lowlights.contains(month))
        .map(|(month, _)| *month)
        .take(MAX_HIGHLIGHTS)
        .collect();
    if highlights.is_empty() {
        highlights = DEFAULT_HIGHLIGHTS
            .iter()
            .copied()
            .filter(|month| !lowlights.contains(month))
            .collect();
    }

    (highlights, lowlights)
}

/// Rule-based annual reading generator
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnualReadingGenerator;

impl AnnualReadingGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate with thread-local entropy
    pub fn generate(&self, theme_card: &Card, month_cards: &BTreeMap<u8, Card>) -> AnnualInterpretation {
        self.generate_with_rng(theme_card, month_cards, &mut rand::thread_rng())
    }

    /// Generate with an injected RNG (pin it in tests for exact advice text).
    ///
    /// Months missing from `month_cards` are skipped and keys outside 1..=12 are
    /// ignored; completeness is the caller's responsibility.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        theme_card: &Card,
        month_cards: &BTreeMap<u8, Card>,
        rng: &mut R,
    ) -> AnnualInterpretation {
        let template = classify(theme_card);
        let orientation = theme_card.orientation();

        debug!(
            theme = %theme_card.name(),
            identity = ?theme_card.identity(),
            reversed = orientation.is_reversed(),
            months = month_cards.len(),
            "Generating annual reading"
        );

        let year_keywords = derive_year_keywords(template, orientation);

        let year_overview = vec![
            template.theme.to_string(),
            energy_sentence(orientation).to_string(),
            format!(
                "{}作为年度主题牌，提示你全年关注「{}」。",
                theme_card.name(),
                leading_keywords(theme_card, 2).join("、")
            ),
        ];

        let year_warnings = vec![
            template.warning.to_string(),
            BALANCE_WARNING.to_string(),
            DECISIVENESS_WARNING.to_string(),
        ];

        let months: BTreeMap<u8, MonthInterpretation> = Month::all()
            .filter_map(|month| {
                month_cards
                    .get(&month.number())
                    .map(|card| (month.number(), interpret_month(month, card, &mut *rng)))
            })
            .collect();

        let (highlights, lowlights) = select_highlights(month_cards);

        let best = highlights.first().copied().unwrap_or(DEFAULT_HIGHLIGHTS[0]);
        let worst = lowlights.first().copied().unwrap_or(DEFAULT_LOWLIGHTS[0]);
        let primary = template.year_keywords.first().copied().unwrap_or("成长");
        let action_list = vec![
            format!("把握{}月的积极能量，推进今年最重要的计划。", best),
            format!("在{}月放慢节奏，提前做好准备以应对挑战。", worst),
            format!("全年围绕「{}」展开行动，每个季度回顾并调整方向。", primary),
        ];

        debug!(?highlights, ?lowlights, "Annual reading generated");

        AnnualInterpretation {
            year_keywords,
            year_overview,
            year_warnings,
            months,
            highlights,
            lowlights,
            action_list,
        }
    }
}
