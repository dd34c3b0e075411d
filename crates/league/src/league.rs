use serde::{Deserialize, Serialize};

use openleague_core::{
    CompetitionId, DomainError, Entity, LeagueId, MemberId, TeamId, identity_eq,
};
use openleague_fixtures::Competition;
use openleague_notify::{Notifier, NotifyError};
use openleague_roster::Team;

/// Aggregate root: a league of teams and their scheduled competitions.
///
/// The league owns the canonical team and competition records. Competitions
/// reference teams by id, so removing a team never invalidates a competition's
/// pair; the derived queries simply stop matching it. No query result is
/// cached — every call recomputes from the current collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    id: LeagueId,
    name: String,
    teams: Vec<Team>,
    competitions: Vec<Competition>,
}

impl League {
    /// Create a league with no teams and no competitions.
    pub fn new(id: LeagueId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            teams: Vec::new(),
            competitions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the teams, in insertion order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Read-only view of the schedule, in insertion order.
    pub fn competitions(&self) -> &[Competition] {
        &self.competitions
    }

    /// Append `team` unless an identity-equal team is already present.
    pub fn add_team(&mut self, team: Team) {
        if self.team(*team.id()).is_none() {
            self.teams.push(team);
        }
    }

    /// Remove the identity-equal team, returning it if present.
    ///
    /// Competitions referencing the removed team stay on the schedule; they
    /// resolve again if the team is re-added.
    pub fn remove_team(&mut self, team_id: TeamId) -> Option<Team> {
        let index = self.teams.iter().position(|team| *team.id() == team_id)?;
        Some(self.teams.remove(index))
    }

    /// Append a competition to the schedule.
    ///
    /// Unconditional: the same pairing may be scheduled any number of times.
    pub fn add_competition(&mut self, competition: Competition) {
        self.competitions.push(competition);
    }

    /// Team lookup by identity.
    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| *team.id() == team_id)
    }

    /// Mutable team lookup; the path for roster changes on teams the league owns.
    pub fn team_mut(&mut self, team_id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|team| *team.id() == team_id)
    }

    /// Competition lookup by identity.
    pub fn competition(&self, competition_id: CompetitionId) -> Option<&Competition> {
        self.competitions
            .iter()
            .find(|competition| *competition.id() == competition_id)
    }

    /// First team whose name matches `name` exactly, in insertion order.
    ///
    /// The match is case-sensitive.
    pub fn team_named(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.name() == name)
    }

    /// Every team whose current roster includes the member, in league order.
    pub fn teams_for_member(&self, member_id: MemberId) -> Vec<&Team> {
        self.teams
            .iter()
            .filter(|team| team.contains(member_id))
            .collect()
    }

    /// Every competition involving the team, in schedule order.
    pub fn competitions_for_team(&self, team_id: TeamId) -> Vec<&Competition> {
        self.competitions
            .iter()
            .filter(|competition| competition.involves(team_id))
            .collect()
    }

    /// Every competition involving any team the member plays on, in schedule
    /// order.
    ///
    /// A single pass over the schedule: a competition whose two slots are both
    /// in the member's team set still appears exactly once.
    pub fn competitions_for_member(&self, member_id: MemberId) -> Vec<&Competition> {
        let member_teams: Vec<TeamId> = self
            .teams_for_member(member_id)
            .into_iter()
            .map(|team| *team.id())
            .collect();

        self.competitions
            .iter()
            .filter(|competition| {
                competition
                    .teams_competing()
                    .iter()
                    .any(|slot| member_teams.contains(slot))
            })
            .collect()
    }

    /// Resolve a competition and its pair, then fan out to the participants.
    ///
    /// Fails with a resolution error when the competition or either competing
    /// team is not (or no longer) in the league.
    pub fn notify_competition<N: Notifier>(
        &self,
        competition_id: CompetitionId,
        notifier: &N,
        subject: &str,
        message: &str,
    ) -> Result<(), NotifyError> {
        let competition = self
            .competition(competition_id)
            .ok_or(DomainError::NotFound)?;
        let [first_id, second_id] = *competition.teams_competing();
        let first = self.team(first_id).ok_or(DomainError::NotFound)?;
        let second = self.team(second_id).ok_or(DomainError::NotFound)?;

        competition.notify(first, second, notifier, subject, message)
    }
}

impl Entity for League {
    type Id = LeagueId;

    fn id(&self) -> &LeagueId {
        &self.id
    }
}

identity_eq!(League);

impl core::fmt::Display for League {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {} teams, {} competitions",
            self.name,
            self.teams.len(),
            self.competitions.len()
        )
    }
}
