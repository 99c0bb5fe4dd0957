use pokeproxy_data::MoveData;
use pokeproxy_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A non-volatile status condition.
///
/// A creature holds at most one status at a time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum StatusKind {
    /// Halves speed and sometimes prevents acting.
    #[string = "paralysis"]
    Paralysis,
    /// Halves physical attack and deals 1/16 of max HP at the end of every turn.
    #[string = "burn"]
    Burn,
    /// Deals 1/8 of max HP at the end of every turn.
    #[string = "poison"]
    Poison,
}

/// Keyword families matched against a move's effect text, in priority order.
const STATUS_KEYWORDS: [(&[&str], StatusKind); 3] = [
    (&["paraly", "paralys"], StatusKind::Paralysis),
    (&["burn"], StatusKind::Burn),
    (&["poison"], StatusKind::Poison),
];

/// Classifies the status a move may inflict from its effect text.
pub fn detect_status_from_move(move_data: &MoveData) -> Option<StatusKind> {
    let text = move_data.effect_text().to_lowercase();
    STATUS_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(_, status)| *status)
}

/// Rolls whether a move inflicts its status on a target.
///
/// Returns the target's status after the move: the new status if the roll succeeds, replacing
/// any previous status, or `current` otherwise. No random value is drawn unless the move has a
/// detectable status and a positive effect chance.
pub fn apply_status_chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    move_data: &MoveData,
    current: Option<StatusKind>,
) -> Option<StatusKind> {
    let Some(status) = detect_status_from_move(move_data) else {
        return current;
    };
    let chance = move_data.effect_chance.unwrap_or(0) as u64;
    if chance > 0 && rand_util::roll_percent(prng) <= chance {
        Some(status)
    } else {
        current
    }
}
