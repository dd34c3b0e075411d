use serde::{Deserialize, Serialize};

use openleague_core::{Entity, MemberId, identity_eq};
use openleague_notify::{Notifier, NotifyError};

/// A league participant.
///
/// Immutable after construction. Any number of teams may reference the same
/// member; comparison is by identity, so two records carrying the same id are
/// the same member regardless of their other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    contact_address: Option<String>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>, contact_address: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact_address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact address, if one is on file.
    ///
    /// An empty string counts as no address.
    pub fn contact_address(&self) -> Option<&str> {
        self.contact_address
            .as_deref()
            .filter(|address| !address.is_empty())
    }

    /// Notify just this member.
    ///
    /// Delegates at most one recipient; a member without an address yields an
    /// empty recipient list.
    pub fn notify<N: Notifier>(
        &self,
        notifier: &N,
        subject: &str,
        message: &str,
    ) -> Result<(), NotifyError> {
        let recipients: Vec<String> = self
            .contact_address()
            .into_iter()
            .map(str::to_string)
            .collect();
        notifier.send(&recipients, subject, message)
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> &MemberId {
        &self.id
    }
}

identity_eq!(Member);

impl core::fmt::Display for Member {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.contact_address() {
            Some(address) => write!(f, "{}<{}>", self.name, address),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openleague_notify::RecordingNotifier;
    use proptest::prelude::*;
    use std::hash::{DefaultHasher, Hash, Hasher};
    use uuid::Uuid;

    fn member_with_id(raw: u128) -> Member {
        Member::new(
            MemberId::from_uuid(Uuid::from_u128(raw)),
            "Fred",
            Some("fred.flintstone@example.com".to_string()),
        )
    }

    fn hash_of(member: &Member) -> u64 {
        let mut hasher = DefaultHasher::new();
        member.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn exposes_name_and_contact_address() {
        let member = member_with_id(1);
        assert_eq!(member.name(), "Fred");
        assert_eq!(
            member.contact_address(),
            Some("fred.flintstone@example.com")
        );
    }

    #[test]
    fn equality_is_based_on_id_alone() {
        let id = MemberId::from_uuid(Uuid::from_u128(1));
        let fred = Member::new(id, "Fred", Some("fred@example.com".to_string()));
        let impostor = Member::new(id, "Barney", None);
        let other = Member::new(
            MemberId::from_uuid(Uuid::from_u128(2)),
            "Fred",
            Some("fred@example.com".to_string()),
        );

        assert_eq!(fred, impostor);
        assert_ne!(fred, other);
    }

    #[test]
    fn hash_is_based_on_id_alone() {
        let id = MemberId::from_uuid(Uuid::from_u128(1));
        let fred = Member::new(id, "Fred", Some("fred@example.com".to_string()));
        let impostor = Member::new(id, "Barney", None);

        assert_eq!(hash_of(&fred), hash_of(&impostor));
    }

    #[test]
    fn empty_contact_address_counts_as_absent() {
        let member = Member::new(
            MemberId::from_uuid(Uuid::from_u128(3)),
            "Wilma",
            Some(String::new()),
        );
        assert_eq!(member.contact_address(), None);
    }

    #[test]
    fn display_includes_address_when_present() {
        let member = member_with_id(1);
        assert_eq!(
            member.to_string(),
            "Fred<fred.flintstone@example.com>"
        );

        let without = Member::new(MemberId::from_uuid(Uuid::from_u128(2)), "Barney", None);
        assert_eq!(without.to_string(), "Barney");
    }

    #[test]
    fn notify_delivers_to_the_single_address() {
        let member = member_with_id(1);
        let notifier = RecordingNotifier::new();

        member.notify(&notifier, "Foo", "Bar").unwrap();

        let delivery = notifier.last().unwrap();
        assert_eq!(
            delivery.recipients,
            vec!["fred.flintstone@example.com".to_string()]
        );
        assert_eq!(delivery.subject, "Foo");
        assert_eq!(delivery.message, "Bar");
    }

    #[test]
    fn notify_without_address_delivers_to_nobody() {
        let member = Member::new(MemberId::from_uuid(Uuid::from_u128(2)), "Barney", None);
        let notifier = RecordingNotifier::new();

        member.notify(&notifier, "Foo", "Bar").unwrap();

        assert!(notifier.last().unwrap().recipients.is_empty());
    }

    proptest! {
        #[test]
        fn equality_and_hash_follow_the_id(a in any::<u128>(), b in any::<u128>()) {
            let first = member_with_id(a);
            let second = Member::new(
                MemberId::from_uuid(Uuid::from_u128(b)),
                "someone else",
                None,
            );

            prop_assert_eq!(a == b, first == second);
            if a == b {
                prop_assert_eq!(hash_of(&first), hash_of(&second));
            }
        }
    }
}
