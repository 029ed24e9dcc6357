//! Player colors and per-player data storage.
//!
//! ## PlayerColor
//!
//! The six canonical colors in their fixed seating order. A game with
//! `player_count` players seats the first `player_count` colors.
//!
//! ## PlayerMap
//!
//! A value for each seated color, looked up by `PlayerColor`. Win
//! detection keeps its per-player atom and cell counts in one.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can seat (one per canonical color).
pub const MAX_PLAYERS: usize = PlayerColor::ALL.len();

/// One of the six canonical player colors.
///
/// The declaration order is the seating order: `Red` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Cyan,
}

impl PlayerColor {
    /// All colors in canonical order.
    pub const ALL: [PlayerColor; 6] = [
        PlayerColor::Red,
        PlayerColor::Green,
        PlayerColor::Blue,
        PlayerColor::Yellow,
        PlayerColor::Purple,
        PlayerColor::Cyan,
    ];

    /// Seat index of this color (0-based, canonical order).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color seated at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Active roster for a game with `player_count` players.
    ///
    /// Counts above [`MAX_PLAYERS`] are clamped to the full palette.
    ///
    /// ```
    /// use chain_reaction::core::PlayerColor;
    ///
    /// let roster = PlayerColor::roster(3);
    /// assert_eq!(roster, &[PlayerColor::Red, PlayerColor::Green, PlayerColor::Blue]);
    /// ```
    #[must_use]
    pub fn roster(player_count: usize) -> &'static [PlayerColor] {
        &Self::ALL[..player_count.min(MAX_PLAYERS)]
    }

    /// Upper-case identifier (`"RED"`, `"GREEN"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "RED",
            PlayerColor::Green => "GREEN",
            PlayerColor::Blue => "BLUE",
            PlayerColor::Yellow => "YELLOW",
            PlayerColor::Purple => "PURPLE",
            PlayerColor::Cyan => "CYAN",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per seated color, kept in seat order.
///
/// Built for a fixed roster size. Colors past the roster are simply not
/// seated: `get` answers `None` for them and indexing panics.
///
/// ## Example
///
/// ```
/// use chain_reaction::core::{PlayerColor, PlayerMap};
///
/// let seats = PlayerMap::new(3, |color| color.name().len());
///
/// assert_eq!(seats[PlayerColor::Green], 5);
/// assert_eq!(seats.get(PlayerColor::Yellow), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Seat the first `player_count` colors, filling each seat from `init`.
    ///
    /// Panics if `player_count` exceeds [`MAX_PLAYERS`].
    pub fn new(player_count: usize, init: impl FnMut(PlayerColor) -> T) -> Self {
        assert!(
            player_count <= MAX_PLAYERS,
            "cannot seat {player_count} players, only {MAX_PLAYERS} colors exist"
        );
        Self {
            seats: PlayerColor::ALL[..player_count].iter().copied().map(init).collect(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn get(&self, color: PlayerColor) -> Option<&T> {
        self.seats.get(color.index())
    }

    pub fn get_mut(&mut self, color: PlayerColor) -> Option<&mut T> {
        self.seats.get_mut(color.index())
    }

    /// Seated colors with their values, first seat first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, &T)> {
        PlayerColor::ALL.into_iter().zip(&self.seats)
    }
}

impl<T> Index<PlayerColor> for PlayerMap<T> {
    type Output = T;

    fn index(&self, color: PlayerColor) -> &T {
        match self.get(color) {
            Some(value) => value,
            None => panic!("{color} is not seated ({} players)", self.seats.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let names: Vec<_> = PlayerColor::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["RED", "GREEN", "BLUE", "YELLOW", "PURPLE", "CYAN"]);

        for (i, color) in PlayerColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(PlayerColor::from_index(i), Some(*color));
        }
        assert_eq!(PlayerColor::from_index(6), None);
    }

    #[test]
    fn test_roster_prefix() {
        for count in MIN_PLAYERS..=MAX_PLAYERS {
            let roster = PlayerColor::roster(count);
            assert_eq!(roster.len(), count);
            assert_eq!(roster, &PlayerColor::ALL[..count]);
        }
        assert_eq!(PlayerColor::roster(9).len(), MAX_PLAYERS);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PlayerColor::Purple), "PURPLE");
    }

    #[test]
    fn test_player_map_seats_roster_prefix() {
        let map = PlayerMap::new(4, |c| c.index() * 10);

        assert_eq!(map.player_count(), 4);
        assert_eq!(map[PlayerColor::Yellow], 30);
        assert_eq!(map.get(PlayerColor::Cyan), None);
    }

    #[test]
    fn test_player_map_get_mut_unseated() {
        let mut map = PlayerMap::new(2, |_| 0u64);

        if let Some(n) = map.get_mut(PlayerColor::Green) {
            *n += 3;
        }
        assert!(map.get_mut(PlayerColor::Blue).is_none());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerColor::Red, &0), (PlayerColor::Green, &3)]);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PlayerColor::Yellow).unwrap();
        assert_eq!(json, "\"YELLOW\"");

        let map: PlayerMap<u32> = PlayerMap::new(2, |c| c.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let back: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[test]
    #[should_panic(expected = "cannot seat 7 players")]
    fn test_player_map_too_many_players() {
        let _ = PlayerMap::new(7, |_| 0);
    }

    #[test]
    #[should_panic(expected = "BLUE is not seated")]
    fn test_player_map_index_unseated() {
        let map = PlayerMap::new(2, |_| 0);
        let _blue: i32 = map[PlayerColor::Blue];
    }
}
