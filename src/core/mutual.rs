use crate::models::{InteractionRecord, LookupStatus};
use crate::services::store::ProfileStore;

/// Result of a mutual interest check against the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutualLikeOutcome {
    pub mutual: bool,
    pub lookup: LookupStatus,
}

/// Whether `email_a` and `email_b` have each liked (or super liked) the other
///
/// Any qualifying record counts regardless of how many others exist for the
/// pair or in which order they were written; `pass` records are ignored.
pub fn resolve_mutual_like<'a, I>(email_a: &str, email_b: &str, records: I) -> bool
where
    I: IntoIterator<Item = &'a InteractionRecord>,
{
    let mut a_likes_b = false;
    let mut b_likes_a = false;

    for record in records {
        if !record.kind.is_interest() {
            continue;
        }
        if record.actor_email == email_a && record.target_email == email_b {
            a_likes_b = true;
        }
        if record.actor_email == email_b && record.target_email == email_a {
            b_likes_a = true;
        }
        if a_likes_b && b_likes_a {
            break;
        }
    }

    a_likes_b && b_likes_a
}

/// Check mutual interest over every interaction in the store
///
/// A failed enumeration reads as "not mutual" and is flagged with
/// `LookupStatus::StorageUnavailable`.
pub async fn is_mutual_like<S>(email_a: &str, email_b: &str, store: &S) -> MutualLikeOutcome
where
    S: ProfileStore + ?Sized,
{
    match store.list_all_interactions().await {
        Ok(records) => MutualLikeOutcome {
            mutual: resolve_mutual_like(email_a, email_b, &records),
            lookup: LookupStatus::Complete,
        },
        Err(e) => {
            tracing::error!("Error checking mutual like between {} and {}: {}", email_a, email_b, e);
            MutualLikeOutcome {
                mutual: false,
                lookup: LookupStatus::StorageUnavailable,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InteractionKind;

    const ANA: &str = "ana@example.com";
    const BEN: &str = "ben@example.com";

    fn record(actor: &str, target: &str, kind: InteractionKind) -> InteractionRecord {
        InteractionRecord {
            actor_email: actor.to_string(),
            target_email: target.to_string(),
            kind,
            created_at: None,
        }
    }

    #[test]
    fn test_like_and_super_like_are_mutual() {
        let records = vec![
            record(ANA, BEN, InteractionKind::Like),
            record(BEN, ANA, InteractionKind::SuperLike),
        ];

        assert!(resolve_mutual_like(ANA, BEN, &records));
        assert!(resolve_mutual_like(BEN, ANA, &records));
    }

    #[test]
    fn test_one_direction_is_not_mutual() {
        let records = vec![
            record(ANA, BEN, InteractionKind::Like),
            record(ANA, BEN, InteractionKind::Like),
            record(ANA, BEN, InteractionKind::SuperLike),
        ];

        assert!(!resolve_mutual_like(ANA, BEN, &records));
        assert!(!resolve_mutual_like(BEN, ANA, &records));
    }

    #[test]
    fn test_pass_never_counts() {
        let records = vec![
            record(ANA, BEN, InteractionKind::Like),
            record(BEN, ANA, InteractionKind::Pass),
        ];

        assert!(!resolve_mutual_like(ANA, BEN, &records));
    }

    #[test]
    fn test_later_pass_does_not_revoke_like() {
        let records = vec![
            record(BEN, ANA, InteractionKind::Like),
            record(ANA, BEN, InteractionKind::Like),
            record(BEN, ANA, InteractionKind::Pass),
        ];

        assert!(resolve_mutual_like(ANA, BEN, &records));
    }

    #[test]
    fn test_unrelated_users_are_ignored() {
        let records = vec![
            record(ANA, "cleo@example.com", InteractionKind::Like),
            record("cleo@example.com", BEN, InteractionKind::Like),
        ];

        assert!(!resolve_mutual_like(ANA, BEN, &records));
    }

    #[test]
    fn test_empty_log() {
        assert!(!resolve_mutual_like(ANA, BEN, &Vec::<InteractionRecord>::new()));
    }
}
