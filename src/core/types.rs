//! Strongly-typed wrappers for game concepts
//!
//! Newtypes keep player, card, and field identifiers from being mixed up.
//! All IDs are small dense integers assigned by the engine or loader.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense player index, assigned in seating order at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    pub const fn new(id: u32) -> Self {
        PlayerId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Index into the engine's player vector.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identity of a loaded card instance.
///
/// Distinct from the card's source id: two records sharing a source id get
/// different uids (the loader composes uid from load position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardUid(u32);

impl CardUid {
    pub const fn new(id: u32) -> Self {
        CardUid(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board field identifier, assigned sequentially at board construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldId(u32);

impl FieldId {
    pub const fn new(id: u32) -> Self {
        FieldId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three card categories / auxiliary resource tracks.
///
/// Card data encodes these as numeric categories 1..3; playing a card of a
/// category grants one point on the matching track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    Industry,
    Commerce,
    Culture,
}

impl Discipline {
    pub const ALL: [Discipline; 3] = [
        Discipline::Industry,
        Discipline::Commerce,
        Discipline::Culture,
    ];

    /// Map a card's numeric category (1..3) to a discipline.
    pub fn from_category(category: i64) -> Option<Self> {
        match category {
            1 => Some(Discipline::Industry),
            2 => Some(Discipline::Commerce),
            3 => Some(Discipline::Culture),
            _ => None,
        }
    }

    /// Index into per-player discipline arrays.
    pub fn index(&self) -> usize {
        match self {
            Discipline::Industry => 0,
            Discipline::Commerce => 1,
            Discipline::Culture => 2,
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Discipline::Industry => "industry",
            Discipline::Commerce => "commerce",
            Discipline::Culture => "culture",
        };
        write!(f, "{s}")
    }
}

/// One of the nine progress indicators (3 groups x 3 columns).
///
/// Card data references indicators by string key `_<group>_<column>`; the
/// set is fixed and closed, unknown keys are rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId {
    group: u8,
    column: u8,
}

impl IndicatorId {
    pub const COUNT: usize = 9;

    pub fn new(group: u8, column: u8) -> Option<Self> {
        if (1..=3).contains(&group) && (1..=3).contains(&column) {
            Some(IndicatorId { group, column })
        } else {
            None
        }
    }

    /// Parse the card-data key form, e.g. `_2_3`.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut parts = key.strip_prefix('_')?.split('_');
        let group: u8 = parts.next()?.parse().ok()?;
        let column: u8 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        IndicatorId::new(group, column)
    }

    /// Dense index in 0..9 for array-backed tracking.
    pub fn index(&self) -> usize {
        (self.group as usize - 1) * 3 + (self.column as usize - 1)
    }

    /// All nine indicators in key order (`_1_1`, `_1_2`, ... `_3_3`).
    pub fn all() -> impl Iterator<Item = IndicatorId> {
        (1..=3u8).flat_map(|group| (1..=3u8).map(move |column| IndicatorId { group, column }))
    }
}

impl fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}_{}", self.group, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_key_roundtrip() {
        for id in IndicatorId::all() {
            assert_eq!(IndicatorId::from_key(&id.to_string()), Some(id));
        }
        assert_eq!(IndicatorId::all().count(), IndicatorId::COUNT);
    }

    #[test]
    fn indicator_rejects_unknown_keys() {
        assert_eq!(IndicatorId::from_key("_0_1"), None);
        assert_eq!(IndicatorId::from_key("_4_1"), None);
        assert_eq!(IndicatorId::from_key("_1_4"), None);
        assert_eq!(IndicatorId::from_key("_1_1_1"), None);
        assert_eq!(IndicatorId::from_key("growth"), None);
        assert_eq!(IndicatorId::from_key(""), None);
    }

    #[test]
    fn indicator_indices_are_dense() {
        let indices: Vec<usize> = IndicatorId::all().map(|id| id.index()).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn discipline_category_mapping() {
        assert_eq!(Discipline::from_category(1), Some(Discipline::Industry));
        assert_eq!(Discipline::from_category(3), Some(Discipline::Culture));
        assert_eq!(Discipline::from_category(0), None);
        assert_eq!(Discipline::from_category(7), None);
    }
}
