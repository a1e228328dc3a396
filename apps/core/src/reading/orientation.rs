//! Orientation adjustments.
//!
//! Reversed cards get caution-flavoured advice and the "挑战 / 调整" keyword
//! markers. The prefix choice is random; callers inject the RNG.

use rand::seq::SliceRandom;
use rand::Rng;

use super::card::Orientation;
use super::templates::CardTemplate;

/// Cautionary prefixes prepended to reversed advice
pub const CAUTION_PREFIXES: &[&str] = &["需要注意", "警惕", "避免过度", "当心"];

/// Keyword markers leading a reversed year
pub const REVERSED_MARKERS: [&str; 2] = ["挑战", "调整"];

const UPRIGHT_YEAR_KEYWORDS: usize = 5;
const REVERSED_TEMPLATE_KEYWORDS: usize = 2;

/// Applies orientation framing to a template advice sentence.
pub fn adjust_advice<R: Rng + ?Sized>(advice: &str, orientation: Orientation, rng: &mut R) -> String {
    match orientation {
        Orientation::Upright => advice.to_string(),
        Orientation::Reversed => {
            let prefix = CAUTION_PREFIXES
                .choose(rng)
                .copied()
                .unwrap_or(CAUTION_PREFIXES[0]);
            format!("{}：{}", prefix, advice)
        }
    }
}

/// True when the text carries one of the cautionary prefixes
pub fn is_cautionary(text: &str) -> bool {
    CAUTION_PREFIXES.iter().any(|prefix| text.starts_with(prefix))
}

/// Year-level keywords: the first five template keywords when upright, the two
/// reversal markers followed by only the first two template keywords when reversed.
pub fn derive_year_keywords(template: &CardTemplate, orientation: Orientation) -> Vec<String> {
    match orientation {
        Orientation::Upright => template
            .year_keywords
            .iter()
            .take(UPRIGHT_YEAR_KEYWORDS)
            .map(|k| k.to_string())
            .collect(),
        Orientation::Reversed => REVERSED_MARKERS
            .iter()
            .chain(template.year_keywords.iter().take(REVERSED_TEMPLATE_KEYWORDS))
            .map(|k| k.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::card::MajorArcana;
    use crate::reading::templates::major_template;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_upright_advice_unchanged() {
        let mut rng = StdRng::seed_from_u64(7);
        let advice = adjust_advice("保持耐心。", Orientation::Upright, &mut rng);
        assert_eq!(advice, "保持耐心。");
        assert!(!is_cautionary(&advice));
    }

    #[test]
    fn test_reversed_advice_is_cautionary() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let advice = adjust_advice("保持耐心。", Orientation::Reversed, &mut rng);
            assert!(is_cautionary(&advice), "advice: {}", advice);
            assert!(advice.ends_with("保持耐心。"));
        }
    }

    #[test]
    fn test_pinned_rng_gives_exact_prefix() {
        let mut rng = StepRng::new(0, 0);
        let advice = adjust_advice("保持耐心。", Orientation::Reversed, &mut rng);
        assert_eq!(advice, "需要注意：保持耐心。");
    }

    #[test]
    fn test_year_keywords_upright() {
        let template = major_template(MajorArcana::Fool);
        let keywords = derive_year_keywords(template, Orientation::Upright);
        assert_eq!(keywords, vec!["新开始", "冒险", "自由", "纯真", "可能性"]);
    }

    #[test]
    fn test_year_keywords_reversed_truncates_to_two() {
        let template = major_template(MajorArcana::Fool);
        let keywords = derive_year_keywords(template, Orientation::Reversed);
        assert_eq!(keywords, vec!["挑战", "调整", "新开始", "冒险"]);
    }
}
