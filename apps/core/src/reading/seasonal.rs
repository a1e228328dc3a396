//! Seasonal readings: the annual pattern applied to a single season.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use super::annual::{energy_sentence, interpret_month, MonthInterpretation};
use super::card::{Card, Orientation};
use super::classifier::classify;
use super::monthly_notes::Month;
use super::orientation::REVERSED_MARKERS;

const UPRIGHT_SEASON_KEYWORDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Calendar months of the season in reading order (winter wraps the year end)
    pub fn months(&self) -> [u8; 3] {
        match self {
            Season::Spring => [3, 4, 5],
            Season::Summer => [6, 7, 8],
            Season::Autumn => [9, 10, 11],
            Season::Winter => [12, 1, 2],
        }
    }

    pub fn of_month(month: Month) -> Self {
        match month.number() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "春季",
            Season::Summer => "夏季",
            Season::Autumn => "秋季",
            Season::Winter => "冬季",
        }
    }

    fn character(&self) -> &'static str {
        match self {
            Season::Spring => "春季万物生发，适合播种新的想法与计划。",
            Season::Summer => "夏季能量充沛，适合全力投入与扩展。",
            Season::Autumn => "秋季是收获与整理的时节，适合总结与巩固。",
            Season::Winter => "冬季宜休养生息，适合沉淀与为来年蓄力。",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalInterpretation {
    pub season: Season,
    pub season_keywords: Vec<String>,
    pub overview: Vec<String>,
    pub months: BTreeMap<u8, MonthInterpretation>,
    pub focus_month: u8,
    pub action_list: Vec<String>,
}

fn season_keywords(card: &Card) -> Vec<String> {
    let template = classify(card);
    match card.orientation() {
        Orientation::Upright => template
            .year_keywords
            .iter()
            .take(UPRIGHT_SEASON_KEYWORDS)
            .map(|k| k.to_string())
            .collect(),
        Orientation::Reversed => REVERSED_MARKERS
            .iter()
            .chain(template.year_keywords.iter().take(1))
            .map(|k| k.to_string())
            .collect(),
    }
}

/// Rule-based seasonal reading generator
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalReadingGenerator;

impl SeasonalReadingGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        season: Season,
        theme_card: &Card,
        month_cards: &BTreeMap<u8, Card>,
    ) -> SeasonalInterpretation {
        self.generate_with_rng(season, theme_card, month_cards, &mut rand::thread_rng())
    }

    /// Cards keyed by months outside the season are ignored.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        season: Season,
        theme_card: &Card,
        month_cards: &BTreeMap<u8, Card>,
        rng: &mut R,
    ) -> SeasonalInterpretation {
        let template = classify(theme_card);
        let season_months = season.months();

        debug!(%season, theme = %theme_card.name(), "Generating seasonal reading");

        let mut months = BTreeMap::new();
        for number in season_months {
            if let (Some(card), Ok(month)) = (month_cards.get(&number), Month::new(number)) {
                months.insert(number, interpret_month(month, card, &mut *rng));
            }
        }

        let focus_month = season_months
            .into_iter()
            .find(|number| {
                month_cards
                    .get(number)
                    .is_some_and(|card| !card.is_reversed())
            })
            .unwrap_or(season_months[0]);

        let primary = template.year_keywords.first().copied().unwrap_or("成长");

        SeasonalInterpretation {
            season,
            season_keywords: season_keywords(theme_card),
            overview: vec![
                template.theme.to_string(),
                season.character().to_string(),
                energy_sentence(theme_card.orientation()).to_string(),
            ],
            months,
            focus_month,
            action_list: vec![
                format!("{}月是本季的发力点，集中精力推进关键事项。", focus_month),
                format!("本季围绕「{}」行动，季末做一次小结。", primary),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_year(reversed: &[u8]) -> BTreeMap<u8, Card> {
        (1..=12)
            .map(|m| {
                let orientation = Orientation::from_reversed(reversed.contains(&m));
                (m, Card::new("Four of Pentacles", orientation))
            })
            .collect()
    }

    #[test]
    fn test_season_months() {
        assert_eq!(Season::Winter.months(), [12, 1, 2]);
        assert_eq!(Season::of_month(Month::new(1).unwrap()), Season::Winter);
        assert_eq!(Season::of_month(Month::new(10).unwrap()), Season::Autumn);
    }

    #[test]
    fn test_only_season_months_interpreted() {
        let reading = SeasonalReadingGenerator::new().generate(
            Season::Winter,
            &Card::upright("The Hermit"),
            &full_year(&[]),
        );
        let keys: Vec<u8> = reading.months.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 12]);
        assert_eq!(reading.action_list.len(), 2);
        assert_eq!(reading.overview.len(), 3);
    }

    #[test]
    fn test_focus_month_is_first_upright() {
        let reading = SeasonalReadingGenerator::new().generate(
            Season::Spring,
            &Card::upright("The Empress"),
            &full_year(&[3]),
        );
        assert_eq!(reading.focus_month, 4);
    }

    #[test]
    fn test_focus_month_defaults_to_season_start() {
        let reading = SeasonalReadingGenerator::new().generate(
            Season::Summer,
            &Card::upright("The Sun"),
            &full_year(&[6, 7, 8]),
        );
        assert_eq!(reading.focus_month, 6);
    }

    #[test]
    fn test_reversed_theme_keywords() {
        let reading = SeasonalReadingGenerator::new().generate(
            Season::Autumn,
            &Card::reversed("The Chariot"),
            &full_year(&[]),
        );
        assert_eq!(reading.season_keywords, vec!["挑战", "调整", "前进"]);

        let upright = SeasonalReadingGenerator::new().generate(
            Season::Autumn,
            &Card::upright("The Chariot"),
            &full_year(&[]),
        );
        assert_eq!(upright.season_keywords, vec!["前进", "意志力", "胜利"]);
    }
}
