use serde::{Deserialize, Serialize};

use openleague_core::{Entity, MemberId, TeamId, identity_eq};
use openleague_notify::{Notifier, NotifyError};

use crate::member::Member;

/// A team and its ordered roster.
///
/// Membership is identity-keyed: adding a member whose id is already on the
/// roster is a no-op, and removal matches by id alone. The team holds copies of
/// the immutable member records; it does not control a member's lifecycle, and
/// the same member may appear on any number of teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    members: Vec<Member>,
}

impl Team {
    /// Create a team with an empty roster.
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the roster, in insertion order.
    ///
    /// All mutation goes through [`Team::add_member`] and [`Team::remove_member`].
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Whether a member with this id is on the roster.
    pub fn contains(&self, member_id: MemberId) -> bool {
        self.members.iter().any(|member| *member.id() == member_id)
    }

    /// Append `member` unless an identity-equal member is already present.
    pub fn add_member(&mut self, member: Member) {
        if !self.contains(*member.id()) {
            self.members.push(member);
        }
    }

    /// Remove the identity-equal member, returning it if present.
    pub fn remove_member(&mut self, member_id: MemberId) -> Option<Member> {
        let index = self
            .members
            .iter()
            .position(|member| *member.id() == member_id)?;
        Some(self.members.remove(index))
    }

    /// First member whose name matches `name` exactly, in insertion order.
    ///
    /// The match is case-sensitive.
    pub fn member_named(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.name() == name)
    }

    /// Ordered contact addresses of the current roster.
    ///
    /// Members without an address are omitted. No deduplication happens here;
    /// a roster cannot hold the same member twice.
    pub fn recipients(&self) -> Vec<String> {
        self.members
            .iter()
            .filter_map(Member::contact_address)
            .map(str::to_string)
            .collect()
    }

    /// Fan out to every member with an address.
    pub fn notify<N: Notifier>(
        &self,
        notifier: &N,
        subject: &str,
        message: &str,
    ) -> Result<(), NotifyError> {
        notifier.send(&self.recipients(), subject, message)
    }
}

impl Entity for Team {
    type Id = TeamId;

    fn id(&self) -> &TeamId {
        &self.id
    }
}

identity_eq!(Team);

impl core::fmt::Display for Team {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {} members", self.name, self.members.len())
    }
}
