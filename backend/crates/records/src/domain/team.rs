//! Team Entity

use docstore::Model;
use kernel::id::Id;
use serde::{Deserialize, Serialize};

pub type TeamId = Id<Team>;

/// Team with its roster
///
/// Players are only ever appended; the roster keeps insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    pub mascot: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
}

impl Team {
    /// Create a team with an empty roster
    pub fn new(name: String, mascot: String) -> Self {
        Self {
            name,
            mascot,
            players: Vec::new(),
        }
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }
}

impl Model for Team {
    const COLLECTION: &'static str = "teams";
}
