//! Team Service
//!
//! Appending a player is read-modify-save on the whole team document with
//! no concurrency check: two simultaneous appends to one team can lose one
//! of the players.

use docstore::{Collection, Document, DocumentStore, Filter};

use crate::application::{append_save_error, parse_id};
use crate::domain::team::{Player, Team, TeamId};
use crate::error::{RecordsError, RecordsResult};

pub struct TeamService<'a, S> {
    store: &'a S,
}

impl<'a, S> TeamService<'a, S>
where
    S: DocumentStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn teams(&self) -> Collection<'a, S, Team> {
        Collection::new(self.store)
    }

    async fn find_team(&self, id: &str) -> RecordsResult<Document<Team>> {
        let id: TeamId = parse_id(id).ok_or(RecordsError::InvalidTeamId)?;

        self.teams()
            .find_by_id(&id)
            .await?
            .ok_or(RecordsError::InvalidTeamId)
    }

    pub async fn list(&self) -> RecordsResult<Vec<Document<Team>>> {
        Ok(self.teams().find(&Filter::all()).await?)
    }

    pub async fn create(&self, team: Team) -> RecordsResult<Document<Team>> {
        let created = self.teams().create(&team).await?;

        tracing::info!(team_id = %created.id, name = %created.data.name, "Team created");

        Ok(created)
    }

    pub async fn delete(&self, id: &str) -> RecordsResult<Document<Team>> {
        let id: TeamId = parse_id(id).ok_or(RecordsError::InvalidTeamId)?;

        let deleted = self
            .teams()
            .find_by_id_and_delete(&id)
            .await?
            .ok_or(RecordsError::InvalidTeamId)?;

        tracing::info!(team_id = %deleted.id, "Team deleted");

        Ok(deleted)
    }

    /// Append `player` to the team's roster and return the new player.
    pub async fn add_player(&self, id: &str, player: Player) -> RecordsResult<Player> {
        let mut team = self.find_team(id).await?;

        team.data.add_player(player.clone());
        self.teams().save(&team).await.map_err(append_save_error)?;

        tracing::info!(
            team_id = %team.id,
            roster_size = team.data.players.len(),
            "Player assigned to team"
        );

        Ok(player)
    }

    pub async fn list_players(&self, id: &str) -> RecordsResult<Vec<Player>> {
        let team = self.find_team(id).await?;
        Ok(team.data.players)
    }
}
