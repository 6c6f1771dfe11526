//! Bounded progress indicators
//!
//! Nine named counters, each capped at a maximum. Per indicator the board
//! also records, per player, how many raising events the player caused and
//! the cumulative amount they contributed; both feed scoring and are never
//! decremented. The game ends once three indicators sit at the cap.

use crate::core::{IndicatorId, PlayerId};

/// Default indicator cap.
pub const DEFAULT_MAX_INDICATOR: u8 = 6;

#[derive(Debug, Clone)]
struct Track {
    value: u8,
    /// Raising events per player (seat order).
    events: Vec<u32>,
    /// Cumulative contributed amount per player (seat order).
    amounts: Vec<u32>,
}

/// All nine indicator tracks for one game.
#[derive(Debug, Clone)]
pub struct IndicatorBoard {
    max: u8,
    tracks: Vec<Track>,
}

impl IndicatorBoard {
    pub fn new(max: u8, num_players: usize) -> Self {
        IndicatorBoard {
            max,
            tracks: (0..IndicatorId::COUNT)
                .map(|_| Track {
                    value: 0,
                    events: vec![0; num_players],
                    amounts: vec![0; num_players],
                })
                .collect(),
        }
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn value(&self, id: IndicatorId) -> u8 {
        self.tracks[id.index()].value
    }

    /// Raise an indicator for a player, clamped at the cap. Returns the
    /// applied amount; the event is recorded only when that is non-zero.
    pub fn raise(&mut self, id: IndicatorId, player: PlayerId, amount: u8) -> u8 {
        let max = self.max;
        let track = &mut self.tracks[id.index()];
        let allowed = amount.min(max.saturating_sub(track.value));
        if allowed > 0 {
            track.value += allowed;
            track.events[player.index()] += 1;
            track.amounts[player.index()] += allowed as u32;
        }
        allowed
    }

    /// How many indicators sit at or above the cap.
    pub fn at_max_count(&self) -> usize {
        self.tracks.iter().filter(|t| t.value >= self.max).count()
    }

    /// Indicators currently at the cap, in key order.
    pub fn reached(&self) -> Vec<IndicatorId> {
        IndicatorId::all()
            .filter(|id| self.value(*id) >= self.max)
            .collect()
    }

    pub fn events(&self, id: IndicatorId, player: PlayerId) -> u32 {
        self.tracks[id.index()].events[player.index()]
    }

    pub fn amount(&self, id: IndicatorId, player: PlayerId) -> u32 {
        self.tracks[id.index()].amounts[player.index()]
    }

    /// Sum of all amounts the player contributed across indicators; this is
    /// the player's indicator score.
    pub fn player_total(&self, player: PlayerId) -> u32 {
        self.tracks
            .iter()
            .map(|t| t.amounts[player.index()])
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_id() -> IndicatorId {
        IndicatorId::from_key("_2_1").unwrap()
    }

    #[test]
    fn raise_records_event_and_amount() {
        let mut board = IndicatorBoard::new(6, 2);
        let p = PlayerId::new(1);
        assert_eq!(board.raise(any_id(), p, 1), 1);
        assert_eq!(board.value(any_id()), 1);
        assert_eq!(board.events(any_id(), p), 1);
        assert_eq!(board.amount(any_id(), p), 1);
        assert_eq!(board.events(any_id(), PlayerId::new(0)), 0);
    }

    #[test]
    fn raise_clamps_at_max() {
        let mut board = IndicatorBoard::new(3, 1);
        let p = PlayerId::new(0);
        assert_eq!(board.raise(any_id(), p, 2), 2);
        assert_eq!(board.raise(any_id(), p, 2), 1);
        assert_eq!(board.value(any_id()), 3);
        // at the cap: nothing applied, nothing recorded
        assert_eq!(board.raise(any_id(), p, 1), 0);
        assert_eq!(board.events(any_id(), p), 2);
        assert_eq!(board.amount(any_id(), p), 3);
    }

    #[test]
    fn at_max_count_and_reached() {
        let mut board = IndicatorBoard::new(1, 1);
        let p = PlayerId::new(0);
        let ids: Vec<IndicatorId> = IndicatorId::all().take(3).collect();
        for id in &ids {
            board.raise(*id, p, 1);
        }
        assert_eq!(board.at_max_count(), 3);
        assert_eq!(board.reached(), ids);
    }

    #[test]
    fn player_total_sums_across_indicators() {
        let mut board = IndicatorBoard::new(6, 2);
        let p = PlayerId::new(0);
        for id in IndicatorId::all().take(4) {
            board.raise(id, p, 1);
        }
        assert_eq!(board.player_total(p), 4);
        assert_eq!(board.player_total(PlayerId::new(1)), 0);
    }
}
