//! Display names for the two seats.
//!
//! The engine only knows [`Player`]; everything a person reads goes
//! through [`PlayerNames`].

use crate::games::markers::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A selectable character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Character {
    /// Name shown in turn banners.
    pub name: String,
}

/// The built-in character list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    characters: Vec<Character>,
}

const CLASSIC: [&str; 15] = [
    "Abaddon the Despoiler",
    "Ahriman",
    "Farseer Eldrad Ulthran",
    "Autarch Jain Zar",
    "Ghazghkull Thraka",
    "Fabius Bile",
    "Yvraine, Emissary of Ynnead",
    "Warboss",
    "Khârn the Betrayer",
    "Huron Blackheart",
    "Typhus",
    "Lucius the Eternal",
    "Trazyn the Infinite",
    "The Swarmlord",
    "Asdrubael Vect",
];

impl Roster {
    /// The classic fifteen characters.
    pub fn classic() -> Self {
        Self {
            characters: CLASSIC
                .iter()
                .map(|name| Character::new((*name).to_string()))
                .collect(),
        }
    }

    /// All characters in display order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Character at a 1-based menu number.
    #[instrument(skip(self))]
    pub fn pick(&self, number: usize) -> Option<&Character> {
        number
            .checked_sub(1)
            .and_then(|index| self.characters.get(index))
    }
}

impl Roster {
    /// Seats characters by menu number, falling back to `defaults` per seat.
    ///
    /// A character can only sit in one seat.
    ///
    /// # Errors
    ///
    /// [`RosterError::UnknownNumber`] for a number outside the menu and
    /// [`RosterError::AlreadyTaken`] when both seats end up with the same
    /// character.
    #[instrument(skip(self, defaults))]
    pub fn seat(
        &self,
        player_one: Option<usize>,
        player_two: Option<usize>,
        defaults: &PlayerNames,
    ) -> Result<PlayerNames, RosterError> {
        let one = self.seat_name(player_one, &defaults.player_one)?;
        let two = self.seat_name(player_two, &defaults.player_two)?;
        if (player_one.is_some() || player_two.is_some()) && one == two {
            return Err(RosterError::AlreadyTaken(one));
        }
        Ok(PlayerNames::new(one, two))
    }

    fn seat_name(&self, number: Option<usize>, fallback: &str) -> Result<String, RosterError> {
        match number {
            Some(n) => self
                .pick(n)
                .map(|c| c.name.clone())
                .ok_or(RosterError::UnknownNumber(n)),
            None => Ok(fallback.to_string()),
        }
    }
}

/// Error raised when seating characters.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RosterError {
    /// No character at this menu number.
    #[display("No character numbered {} in the roster", _0)]
    UnknownNumber(usize),
    /// The character already sits in the other seat.
    #[display("{} is already playing; pick a different character", _0)]
    AlreadyTaken(String),
}

impl std::error::Error for RosterError {}

impl Default for Roster {
    fn default() -> Self {
        Self::classic()
    }
}

/// Display names for [`Player::Player1`] and [`Player::Player2`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct PlayerNames {
    player_one: String,
    player_two: String,
}

impl PlayerNames {
    /// Name shown for `player`.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::Player1 => &self.player_one,
            Player::Player2 => &self.player_two,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new(
            Player::Player1.to_string(),
            Player::Player2.to_string(),
        )
    }
}
