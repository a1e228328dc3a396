//! Card Classification.
//!
//! Maps a card to its interpretation template. Total over every input: names
//! that resolve to neither a major arcana card nor a suit get the generic
//! fallback template.

use super::card::{Card, CardIdentity};
use super::templates::{fallback_template, major_template, suit_template, CardTemplate};

/// Template lookup for a resolved identity
pub fn template_for(identity: CardIdentity) -> &'static CardTemplate {
    match identity {
        CardIdentity::Major { card } => major_template(card),
        CardIdentity::Minor { suit, .. } => suit_template(suit),
        CardIdentity::Unrecognized => fallback_template(),
    }
}

/// Classify a drawn card
pub fn classify(card: &Card) -> &'static CardTemplate {
    template_for(card.identity())
}

/// Classify a raw display name such as "0. The Fool" or "Three of Wands"
pub fn classify_name(name: &str) -> &'static CardTemplate {
    template_for(CardIdentity::parse(name))
}
