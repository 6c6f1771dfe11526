//! The board: a fixed grid of typed fields with an occupation ladder
//!
//! Fields are partitioned into three types at construction and identified by
//! sequential ids, which also serve as the deterministic tie-break when
//! several fields qualify. Occupation levels only ever move up the ladder,
//! only by the occupying player, and stop at the ladder's top rung.

use crate::core::{FieldId, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three field types, matching the card board-effect flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Buildings,
    Investment,
    Social,
}

impl FieldType {
    pub const ALL: [FieldType; 3] = [FieldType::Buildings, FieldType::Investment, FieldType::Social];
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldType::Buildings => "buildings",
            FieldType::Investment => "investment",
            FieldType::Social => "social",
        };
        write!(f, "{s}")
    }
}

/// One board field. `occupation_level` is 0 iff unoccupied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub field_type: FieldType,
    pub occupant: Option<PlayerId>,
    pub occupation_level: u8,
}

/// Field counts and ladder height for board construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoardConfig {
    pub buildings: usize,
    pub investment: usize,
    pub social: usize,
    pub max_level: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            buildings: 16,
            investment: 16,
            social: 16,
            max_level: 4,
        }
    }
}

/// How a board-effect placement resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// An empty field was claimed at the ladder's first rung.
    Occupied(FieldId),
    /// An already-owned field advanced one rung, to `level`.
    Upgraded { field: FieldId, level: u8 },
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Occupied(id) => write!(f, "occupied field {id}"),
            Placement::Upgraded { field, level } => {
                write!(f, "upgraded field {field} to level {level}")
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    max_level: u8,
    fields: Vec<Field>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let mut fields = Vec::with_capacity(config.buildings + config.investment + config.social);
        let mut next_id = 0u32;
        let mut extend = |fields: &mut Vec<Field>, field_type: FieldType, count: usize| {
            for _ in 0..count {
                fields.push(Field {
                    id: FieldId::new(next_id),
                    field_type,
                    occupant: None,
                    occupation_level: 0,
                });
                next_id += 1;
            }
        };
        extend(&mut fields, FieldType::Buildings, config.buildings);
        extend(&mut fields, FieldType::Investment, config.investment);
        extend(&mut fields, FieldType::Social, config.social);
        Board {
            max_level: config.max_level,
            fields,
        }
    }

    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id.index())
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.get_mut(id.index())
    }

    /// First unoccupied field of the type, by ascending id.
    pub fn find_empty_field(&self, field_type: FieldType) -> Option<FieldId> {
        self.fields
            .iter()
            .find(|f| f.field_type == field_type && f.occupant.is_none())
            .map(|f| f.id)
    }

    /// All fields of the type occupied by the player, by ascending id.
    pub fn player_fields(&self, player: PlayerId, field_type: FieldType) -> Vec<FieldId> {
        self.fields
            .iter()
            .filter(|f| f.field_type == field_type && f.occupant == Some(player))
            .map(|f| f.id)
            .collect()
    }

    /// Claim an unowned field at level 1, or upgrade a field the player
    /// already owns. Fails on foreign fields and at the ladder's top.
    pub fn occupy_field(&mut self, id: FieldId, player: PlayerId) -> bool {
        let max_level = self.max_level;
        let Some(field) = self.field_mut(id) else {
            return false;
        };
        match field.occupant {
            None => {
                field.occupant = Some(player);
                field.occupation_level = 1;
                true
            }
            Some(owner) if owner == player => {
                if field.occupation_level < max_level {
                    field.occupation_level += 1;
                    true
                } else {
                    false
                }
            }
            Some(_) => false,
        }
    }

    /// Advance an owned field one rung. Fails unless the player occupies the
    /// field and it is below the top rung.
    pub fn upgrade_field(&mut self, id: FieldId, player: PlayerId) -> bool {
        let max_level = self.max_level;
        let Some(field) = self.field_mut(id) else {
            return false;
        };
        if field.occupant != Some(player) || field.occupation_level >= max_level {
            return false;
        }
        field.occupation_level += 1;
        true
    }

    /// Composite placement for a card's board effect.
    ///
    /// Order: with `prefer_upgrade`, upgrade an owned upgradeable field if one
    /// exists; otherwise claim the first empty field; otherwise fall back to
    /// upgrading an owned field. Returns None when no field is available.
    pub fn place_with_effect(
        &mut self,
        field_type: FieldType,
        player: PlayerId,
        prefer_upgrade: bool,
    ) -> Option<Placement> {
        if prefer_upgrade {
            if let Some(placement) = self.upgrade_any(field_type, player) {
                return Some(placement);
            }
        }
        if let Some(empty) = self.find_empty_field(field_type) {
            self.occupy_field(empty, player);
            return Some(Placement::Occupied(empty));
        }
        self.upgrade_any(field_type, player)
    }

    fn upgrade_any(&mut self, field_type: FieldType, player: PlayerId) -> Option<Placement> {
        let target = self
            .player_fields(player, field_type)
            .into_iter()
            .find(|&id| {
                self.field(id)
                    .map(|f| f.occupation_level < self.max_level)
                    .unwrap_or(false)
            })?;
        self.upgrade_field(target, player);
        let level = self.field(target).map(|f| f.occupation_level).unwrap_or(0);
        Some(Placement::Upgraded {
            field: target,
            level,
        })
    }

    /// Per-type occupancy counts, in `FieldType::ALL` order.
    pub fn summary(&self) -> [(FieldType, TypeSummary); 3] {
        FieldType::ALL.map(|field_type| {
            let mut summary = TypeSummary::default();
            for f in self.fields.iter().filter(|f| f.field_type == field_type) {
                summary.total += 1;
                if f.occupant.is_some() {
                    summary.occupied += 1;
                }
            }
            (field_type, summary)
        })
    }

    /// Sum of occupation levels over every field the player occupies.
    pub fn player_points(&self, player: PlayerId) -> u32 {
        self.fields
            .iter()
            .filter(|f| f.occupant == Some(player))
            .map(|f| f.occupation_level as u32)
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BoardConfig::default())
    }
}

/// Occupancy counts for one field type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSummary {
    pub total: usize,
    pub occupied: usize,
}
