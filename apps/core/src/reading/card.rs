//! Card model.
//!
//! A [`Card`] is resolved into a [`CardIdentity`] when it is constructed (or
//! deserialized), so downstream code matches on a closed set of variants instead
//! of inspecting the display name again.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Orientation of a drawn card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn from_reversed(is_reversed: bool) -> Self {
        if is_reversed {
            Orientation::Reversed
        } else {
            Orientation::Upright
        }
    }

    pub fn is_reversed(&self) -> bool {
        matches!(self, Orientation::Reversed)
    }

    /// +1 for upright, -1 for reversed
    pub fn score(&self) -> i8 {
        match self {
            Orientation::Upright => 1,
            Orientation::Reversed => -1,
        }
    }
}

/// The 22 major arcana, in deck order (discriminant = card number)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorArcana {
    Fool = 0,
    Magician,
    HighPriestess,
    Empress,
    Emperor,
    Hierophant,
    Lovers,
    Chariot,
    Strength,
    Hermit,
    WheelOfFortune,
    Justice,
    HangedMan,
    Death,
    Temperance,
    Devil,
    Tower,
    Star,
    Moon,
    Sun,
    Judgement,
    World,
}

impl MajorArcana {
    pub const COUNT: usize = 22;

    pub const ALL: [MajorArcana; Self::COUNT] = [
        MajorArcana::Fool,
        MajorArcana::Magician,
        MajorArcana::HighPriestess,
        MajorArcana::Empress,
        MajorArcana::Emperor,
        MajorArcana::Hierophant,
        MajorArcana::Lovers,
        MajorArcana::Chariot,
        MajorArcana::Strength,
        MajorArcana::Hermit,
        MajorArcana::WheelOfFortune,
        MajorArcana::Justice,
        MajorArcana::HangedMan,
        MajorArcana::Death,
        MajorArcana::Temperance,
        MajorArcana::Devil,
        MajorArcana::Tower,
        MajorArcana::Star,
        MajorArcana::Moon,
        MajorArcana::Sun,
        MajorArcana::Judgement,
        MajorArcana::World,
    ];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// English name without the leading article, e.g. "Fool"
    pub fn english_name(&self) -> &'static str {
        match self {
            MajorArcana::Fool => "Fool",
            MajorArcana::Magician => "Magician",
            MajorArcana::HighPriestess => "High Priestess",
            MajorArcana::Empress => "Empress",
            MajorArcana::Emperor => "Emperor",
            MajorArcana::Hierophant => "Hierophant",
            MajorArcana::Lovers => "Lovers",
            MajorArcana::Chariot => "Chariot",
            MajorArcana::Strength => "Strength",
            MajorArcana::Hermit => "Hermit",
            MajorArcana::WheelOfFortune => "Wheel of Fortune",
            MajorArcana::Justice => "Justice",
            MajorArcana::HangedMan => "Hanged Man",
            MajorArcana::Death => "Death",
            MajorArcana::Temperance => "Temperance",
            MajorArcana::Devil => "Devil",
            MajorArcana::Tower => "Tower",
            MajorArcana::Star => "Star",
            MajorArcana::Moon => "Moon",
            MajorArcana::Sun => "Sun",
            MajorArcana::Judgement => "Judgement",
            MajorArcana::World => "World",
        }
    }

    pub fn chinese_name(&self) -> &'static str {
        match self {
            MajorArcana::Fool => "愚者",
            MajorArcana::Magician => "魔术师",
            MajorArcana::HighPriestess => "女祭司",
            MajorArcana::Empress => "皇后",
            MajorArcana::Emperor => "皇帝",
            MajorArcana::Hierophant => "教皇",
            MajorArcana::Lovers => "恋人",
            MajorArcana::Chariot => "战车",
            MajorArcana::Strength => "力量",
            MajorArcana::Hermit => "隐士",
            MajorArcana::WheelOfFortune => "命运之轮",
            MajorArcana::Justice => "正义",
            MajorArcana::HangedMan => "倒吊人",
            MajorArcana::Death => "死神",
            MajorArcana::Temperance => "节制",
            MajorArcana::Devil => "恶魔",
            MajorArcana::Tower => "高塔",
            MajorArcana::Star => "星星",
            MajorArcana::Moon => "月亮",
            MajorArcana::Sun => "太阳",
            MajorArcana::Judgement => "审判",
            MajorArcana::World => "世界",
        }
    }

    /// Resolve a canonical key ("The Fool", "fool", "愚者") to a major arcana card
    fn from_canonical(key: &str) -> Option<Self> {
        let lowered = key.to_lowercase();
        let bare = lowered.strip_prefix("the ").unwrap_or(&lowered).trim();
        // "Judgment" is a common alternate spelling
        let bare = if bare == "judgment" { "judgement" } else { bare };

        Self::ALL.into_iter().find(|card| {
            card.english_name().eq_ignore_ascii_case(bare) || card.chinese_name() == bare
        })
    }
}

impl fmt::Display for MajorArcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MajorArcana::Strength | MajorArcana::Justice | MajorArcana::Death
            | MajorArcana::Temperance | MajorArcana::Judgement => write!(f, "{}", self.english_name()),
            _ => write!(f, "The {}", self.english_name()),
        }
    }
}

/// Minor arcana suit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    pub fn label(&self) -> &'static str {
        match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }

    pub fn chinese_name(&self) -> &'static str {
        match self {
            Suit::Wands => "权杖",
            Suit::Cups => "圣杯",
            Suit::Swords => "宝剑",
            Suit::Pentacles => "星币",
        }
    }

    /// Finds a suit mentioned anywhere in a raw card name
    fn find_in(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        Self::ALL.into_iter().find(|suit| {
            lowered.contains(&suit.label().to_lowercase()) || name.contains(suit.chinese_name())
        })
    }
}

/// Minor arcana rank. Informational only: templates are per suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Page,
    Knight,
    Queen,
    King,
}

impl Rank {
    fn parse(word: &str) -> Option<Self> {
        let rank = match word.to_lowercase().as_str() {
            "ace" | "1" => Rank::Ace,
            "two" | "2" => Rank::Two,
            "three" | "3" => Rank::Three,
            "four" | "4" => Rank::Four,
            "five" | "5" => Rank::Five,
            "six" | "6" => Rank::Six,
            "seven" | "7" => Rank::Seven,
            "eight" | "8" => Rank::Eight,
            "nine" | "9" => Rank::Nine,
            "ten" | "10" => Rank::Ten,
            "page" => Rank::Page,
            "knight" => Rank::Knight,
            "queen" => Rank::Queen,
            "king" => Rank::King,
            _ => return None,
        };
        Some(rank)
    }
}

/// Resolved identity of a card name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardIdentity {
    Major { card: MajorArcana },
    Minor { suit: Suit, rank: Option<Rank> },
    Unrecognized,
}

// Leading ordinal: "0.", "XXI.", "12:", "III、", "7 -", "4)"
static ORDINAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+|[IVXLCDMivxlcdm]+)\s*[.:、\-)]\s*")
        .expect("Invalid regex: ordinal prefix")
});

// Ordinal followed only by whitespace: "0 The Fool", "XIII Death"
static BARE_ORDINAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+|[IVXLCDMivxlcdm]+)\s+").expect("Invalid regex: bare ordinal prefix")
});

static TRAILING_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s.,;:!?。，；：！？]+$").expect("Invalid regex: trailing punctuation")
});

static RANK_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(ace|two|three|four|five|six|seven|eight|nine|ten|page|knight|queen|king|\d{1,2})\s+of\b")
        .expect("Invalid regex: rank word")
});

/// Strips ordinal prefixes and trailing punctuation: "0. The Fool." -> "The Fool"
pub fn canonical_key(name: &str) -> String {
    let stripped = ORDINAL_PREFIX.replace(name, "");
    let stripped = TRAILING_PUNCTUATION.replace(stripped.trim(), "");
    stripped.trim().to_string()
}

/// Drops a whitespace-separated ordinal from a canonical key: "XIII Death" -> "Death".
/// Only meaningful as a second attempt, since a leading word may itself be roman-like.
fn strip_bare_ordinal(key: &str) -> Option<&str> {
    BARE_ORDINAL_PREFIX
        .find(key)
        .map(|prefix| key[prefix.end()..].trim())
        .filter(|rest| !rest.is_empty())
}

impl CardIdentity {
    /// Resolve a raw display name. Total: unknown names map to `Unrecognized`.
    pub fn parse(name: &str) -> Self {
        let key = canonical_key(name);
        let major = MajorArcana::from_canonical(&key)
            .or_else(|| strip_bare_ordinal(&key).and_then(MajorArcana::from_canonical));
        if let Some(card) = major {
            return CardIdentity::Major { card };
        }

        if let Some(suit) = Suit::find_in(name) {
            let rank = RANK_WORD
                .captures(name)
                .and_then(|caps| caps.get(1))
                .and_then(|m| Rank::parse(m.as_str()));
            return CardIdentity::Minor { suit, rank };
        }

        CardIdentity::Unrecognized
    }
}

/// Wire form of a card as exchanged with the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRecord {
    name: String,
    #[serde(default)]
    is_reversed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    upright_meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reversed_meaning: Option<String>,
}

/// A drawn card. Immutable once drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CardRecord", into = "CardRecord")]
pub struct Card {
    name: String,
    orientation: Orientation,
    identity: CardIdentity,
    keywords: Option<Vec<String>>,
    upright_meaning: Option<String>,
    reversed_meaning: Option<String>,
}

impl Card {
    pub fn new(name: impl Into<String>, orientation: Orientation) -> Self {
        let name = name.into();
        let identity = CardIdentity::parse(&name);
        Self {
            name,
            orientation,
            identity,
            keywords: None,
            upright_meaning: None,
            reversed_meaning: None,
        }
    }

    pub fn upright(name: impl Into<String>) -> Self {
        Self::new(name, Orientation::Upright)
    }

    pub fn reversed(name: impl Into<String>) -> Self {
        Self::new(name, Orientation::Reversed)
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn with_meanings(mut self, upright: impl Into<String>, reversed: impl Into<String>) -> Self {
        self.upright_meaning = Some(upright.into());
        self.reversed_meaning = Some(reversed.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_reversed(&self) -> bool {
        self.orientation.is_reversed()
    }

    pub fn identity(&self) -> CardIdentity {
        self.identity
    }

    pub fn keywords(&self) -> Option<&[String]> {
        self.keywords.as_deref()
    }

    /// Meaning text matching the card's orientation, if supplied
    pub fn meaning(&self) -> Option<&str> {
        match self.orientation {
            Orientation::Upright => self.upright_meaning.as_deref(),
            Orientation::Reversed => self.reversed_meaning.as_deref(),
        }
    }
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        let mut card = Card::new(record.name, Orientation::from_reversed(record.is_reversed));
        card.keywords = record.keywords;
        card.upright_meaning = record.upright_meaning;
        card.reversed_meaning = record.reversed_meaning;
        card
    }
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        CardRecord {
            is_reversed: card.is_reversed(),
            name: card.name,
            keywords: card.keywords,
            upright_meaning: card.upright_meaning,
            reversed_meaning: card.reversed_meaning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_key_strips_ordinals() {
        assert_eq!(canonical_key("0. The Fool"), "The Fool");
        assert_eq!(canonical_key("XXI. The World"), "The World");
        assert_eq!(canonical_key("  I. The Magician!  "), "The Magician");
        assert_eq!(canonical_key("12: The Hanged Man."), "The Hanged Man");
        assert_eq!(canonical_key("The Star"), "The Star");

        assert_eq!(strip_bare_ordinal(&canonical_key("0 The Fool")), Some("The Fool"));
        assert_eq!(strip_bare_ordinal(&canonical_key(" XIII Death ")), Some("Death"));
        assert_eq!(strip_bare_ordinal("XXI The World"), Some("The World"));
        assert_eq!(strip_bare_ordinal("The Star"), None);
        assert_eq!(strip_bare_ordinal("13"), None);
    }

    #[test]
    fn test_space_separated_ordinals_resolve() {
        for (name, expected) in [
            ("0 The Fool", MajorArcana::Fool),
            ("XIII Death", MajorArcana::Death),
            ("13 Death", MajorArcana::Death),
            ("XXI The World", MajorArcana::World),
            ("  vii   the chariot!", MajorArcana::Chariot),
        ] {
            assert_eq!(CardIdentity::parse(name), CardIdentity::Major { card: expected }, "{}", name);
        }
        // A roman-like leading word is only dropped when the rest is a major card
        assert_eq!(CardIdentity::parse("Mix Death Cards"), CardIdentity::Unrecognized);
    }

    #[test]
    fn test_major_identity() {
        assert_eq!(
            CardIdentity::parse("0. The Fool"),
            CardIdentity::Major { card: MajorArcana::Fool }
        );
        assert_eq!(
            CardIdentity::parse("x. wheel of fortune"),
            CardIdentity::Major { card: MajorArcana::WheelOfFortune }
        );
        assert_eq!(
            CardIdentity::parse("Judgment"),
            CardIdentity::Major { card: MajorArcana::Judgement }
        );
        assert_eq!(
            CardIdentity::parse("XVII. 星星"),
            CardIdentity::Major { card: MajorArcana::Star }
        );
    }

    #[test]
    fn test_minor_identity() {
        assert_eq!(
            CardIdentity::parse("Three of Wands"),
            CardIdentity::Minor { suit: Suit::Wands, rank: Some(Rank::Three) }
        );
        assert_eq!(
            CardIdentity::parse("Knight of Cups"),
            CardIdentity::Minor { suit: Suit::Cups, rank: Some(Rank::Knight) }
        );
        assert_eq!(
            CardIdentity::parse("宝剑十"),
            CardIdentity::Minor { suit: Suit::Swords, rank: None }
        );
        assert_eq!(
            CardIdentity::parse("PENTACLES"),
            CardIdentity::Minor { suit: Suit::Pentacles, rank: None }
        );
    }

    #[test]
    fn test_unrecognized_identity() {
        assert_eq!(CardIdentity::parse(""), CardIdentity::Unrecognized);
        assert_eq!(CardIdentity::parse("   "), CardIdentity::Unrecognized);
        assert_eq!(CardIdentity::parse("The Joker"), CardIdentity::Unrecognized);
    }

    #[test]
    fn test_card_wire_format() {
        let json = serde_json::json!({
            "name": "VI. The Lovers",
            "isReversed": true,
            "keywords": ["选择", "结合"]
        });
        let card: Card = serde_json::from_value(json).unwrap();
        assert!(card.is_reversed());
        assert_eq!(card.identity(), CardIdentity::Major { card: MajorArcana::Lovers });
        assert_eq!(card.keywords().unwrap().len(), 2);

        let back = serde_json::to_value(&card).unwrap();
        assert_eq!(back["isReversed"], true);
        assert_eq!(back["name"], "VI. The Lovers");
        assert!(back.get("uprightMeaning").is_none());
    }

    #[test]
    fn test_meaning_follows_orientation() {
        let card = Card::reversed("The Sun").with_meanings("光明", "延迟");
        assert_eq!(card.meaning(), Some("延迟"));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(MajorArcana::Fool.to_string(), "The Fool");
        assert_eq!(MajorArcana::Strength.to_string(), "Strength");
        assert_eq!(MajorArcana::World.number(), 21);
    }
}
