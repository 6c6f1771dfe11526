//! Card source loader (JSON format)
//!
//! The card source is a single JSON array of records. Field values are messy
//! in practice: numbers arrive as numbers or numeric strings, the indicator
//! key as a string or a one-element array. The loader normalizes all of that
//! into typed [`Card`]s, assigns each record a uid distinct from its source
//! id, and reports anything it had to reject as a warning instead of
//! dropping it silently.

use crate::core::{Card, CardEffects, CardResults, CardUid, Discipline, IndicatorId, Requirements};
use crate::game::engine::{ERA_MAX, ERA_MIN};
use crate::Result;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loader output: typed cards plus non-fatal data problems.
#[derive(Debug, Clone)]
pub struct CardSet {
    pub cards: Vec<Card>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawCard {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    level: Value,
    #[serde(rename = "type", default)]
    category: Value,
    #[serde(default)]
    requirements: RawRequirements,
    #[serde(default)]
    results: RawResults,
    #[serde(default)]
    effects: RawEffects,
}

#[derive(Debug, Deserialize, Default)]
struct RawRequirements {
    #[serde(default)]
    price: Value,
    #[serde(default)]
    support: Value,
    #[serde(rename = "_1", default)]
    d1: Value,
    #[serde(rename = "_2", default)]
    d2: Value,
    #[serde(rename = "_3", default)]
    d3: Value,
}

#[derive(Debug, Deserialize, Default)]
struct RawResults {
    #[serde(default)]
    support: Value,
    #[serde(rename = "_1", default)]
    d1: Value,
    #[serde(rename = "_2", default)]
    d2: Value,
    #[serde(rename = "_3", default)]
    d3: Value,
}

#[derive(Debug, Deserialize, Default)]
struct RawEffects {
    #[serde(default)]
    buildings: Value,
    #[serde(default)]
    investment: Value,
    #[serde(default)]
    social: Value,
    #[serde(default)]
    incr: Value,
}

/// Tolerant numeric read: numbers pass through, numeric strings parse,
/// anything else falls back.
fn number(value: &Value, fallback: i64) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(fallback),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(|f| f as i64)
            .unwrap_or(fallback),
        _ => fallback,
    }
}

/// Board-effect flags are set when the value is 1 or "1".
fn flag(value: &Value) -> bool {
    number(value, 0) == 1
}

pub struct CardLoader;

impl CardLoader {
    /// Load a card source file.
    pub fn load_from_file(path: &Path) -> Result<CardSet> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a card source from its JSON text.
    pub fn parse(content: &str) -> Result<CardSet> {
        let raw: Vec<RawCard> = serde_json::from_str(content)?;
        let mut cards = Vec::with_capacity(raw.len());
        let mut warnings = Vec::new();
        for (idx, record) in raw.into_iter().enumerate() {
            cards.push(Self::convert(idx, record, &mut warnings));
        }
        Ok(CardSet { cards, warnings })
    }

    fn convert(idx: usize, raw: RawCard, warnings: &mut Vec<String>) -> Card {
        let source_id = raw
            .id
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("card-{idx}"));
        let level = number(&raw.level, 1).clamp(0, u8::MAX as i64) as u8;
        let level = if level == 0 { 1 } else { level };
        if !(ERA_MIN..=ERA_MAX).contains(&level) {
            warnings.push(format!(
                "card '{source_id}' (#{idx}): level {level} outside eras {ERA_MIN}..{ERA_MAX}; card will never enter a deck"
            ));
        }

        let kind = match &raw.category {
            Value::Null => None,
            value => {
                let category = number(value, 0);
                let kind = Discipline::from_category(category);
                if kind.is_none() && category != 0 {
                    warnings.push(format!(
                        "card '{source_id}' (#{idx}): unknown category {category}"
                    ));
                }
                kind
            }
        };

        let indicator = Self::indicator_key(&raw.effects.incr).and_then(|key| {
            let id = IndicatorId::from_key(&key);
            if id.is_none() {
                warnings.push(format!(
                    "card '{source_id}' (#{idx}): unknown indicator key '{key}' ignored"
                ));
            }
            id
        });

        Card {
            uid: CardUid::new(idx as u32),
            source_id,
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            level,
            kind,
            requirements: Requirements {
                price: number(&raw.requirements.price, 0),
                support: number(&raw.requirements.support, 0),
                disciplines: [
                    number(&raw.requirements.d1, 0),
                    number(&raw.requirements.d2, 0),
                    number(&raw.requirements.d3, 0),
                ],
            },
            results: CardResults {
                support: number(&raw.results.support, 0),
                disciplines: [
                    number(&raw.results.d1, 0),
                    number(&raw.results.d2, 0),
                    number(&raw.results.d3, 0),
                ],
            },
            effects: CardEffects {
                buildings: flag(&raw.effects.buildings),
                investment: flag(&raw.effects.investment),
                social: flag(&raw.effects.social),
                indicator,
            },
        }
    }

    /// The incr field is a string key or an array whose first element is one.
    fn indicator_key(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => items.first().and_then(|v| match v {
                Value::String(s) => Some(s.clone()),
                _ => None,
            }),
            _ => None,
        }
    }
}
