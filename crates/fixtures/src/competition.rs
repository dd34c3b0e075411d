use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use openleague_core::{CompetitionId, DomainError, DomainResult, Entity, TeamId, identity_eq};
use openleague_notify::{Notifier, NotifyError};
use openleague_roster::{Member, Team};

/// A scheduled matchup between two teams.
///
/// The pair is fixed at construction and referenced by id; the teams themselves
/// live with whoever owns them (usually a league). Slot order is preserved but
/// carries no meaning — there is no home/away distinction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    id: CompetitionId,
    teams: [TeamId; 2],
    location: String,
    scheduled_at: Option<DateTime<Utc>>,
}

impl Competition {
    /// Create a competition between exactly two teams.
    ///
    /// Any other team count is rejected.
    pub fn new(
        id: CompetitionId,
        teams: Vec<TeamId>,
        location: impl Into<String>,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        let teams: [TeamId; 2] = teams.try_into().map_err(|teams: Vec<TeamId>| {
            DomainError::validation(format!(
                "a competition requires exactly 2 teams, got {}",
                teams.len()
            ))
        })?;

        Ok(Self {
            id,
            teams,
            location: location.into(),
            scheduled_at,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        self.scheduled_at
    }

    /// The competing pair, in slot order.
    pub fn teams_competing(&self) -> &[TeamId; 2] {
        &self.teams
    }

    /// Whether the team occupies one of the two slots.
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.teams.contains(&team_id)
    }

    /// Union of both rosters, identity-deduplicated.
    ///
    /// Order is deterministic: the first slot's members in their roster order,
    /// then the second slot's members in theirs, skipping anyone already listed.
    /// A member playing on both competing teams appears exactly once.
    pub fn participants<'a>(
        &self,
        first: &'a Team,
        second: &'a Team,
    ) -> DomainResult<Vec<&'a Member>> {
        self.ensure_competing(first, second)?;

        let mut participants: Vec<&Member> = Vec::new();
        for member in first.members().iter().chain(second.members()) {
            if !participants.iter().any(|seen| seen.id() == member.id()) {
                participants.push(member);
            }
        }

        Ok(participants)
    }

    /// Fan out to every unique participant with an address.
    pub fn notify<N: Notifier>(
        &self,
        first: &Team,
        second: &Team,
        notifier: &N,
        subject: &str,
        message: &str,
    ) -> Result<(), NotifyError> {
        let recipients: Vec<String> = self
            .participants(first, second)?
            .into_iter()
            .filter_map(Member::contact_address)
            .map(str::to_string)
            .collect();

        notifier.send(&recipients, subject, message)
    }

    fn ensure_competing(&self, first: &Team, second: &Team) -> DomainResult<()> {
        if *first.id() != self.teams[0] || *second.id() != self.teams[1] {
            return Err(DomainError::invariant(
                "resolved teams do not match the competing pair",
            ));
        }
        Ok(())
    }
}

impl Entity for Competition {
    type Id = CompetitionId;

    fn id(&self) -> &CompetitionId {
        &self.id
    }
}

identity_eq!(Competition);

impl core::fmt::Display for Competition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.scheduled_at {
            Some(at) => write!(
                f,
                "Competition at {} on {} with {} teams",
                self.location,
                at.format("%Y-%m-%d %H:%M UTC"),
                self.teams.len()
            ),
            None => write!(
                f,
                "Competition at {} with {} teams",
                self.location,
                self.teams.len()
            ),
        }
    }
}
