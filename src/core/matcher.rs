use crate::models::{LookupStatus, MatchResult, ScoringWeights, UserProfile};
use crate::core::{
    distance::profile_distance,
    scoring::{common_interests, score_breakdown},
};
use crate::services::store::ProfileStore;

/// Candidates scoring below this are never returned
pub const MIN_COMPATIBILITY_SCORE: u8 = 50;

/// Result of a ranking query against the store
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<MatchResult>,
    /// Size of the candidate pool (the population minus the reference user)
    pub total_candidates: usize,
    pub lookup: LookupStatus,
}

impl MatchOutcome {
    fn unavailable() -> Self {
        Self {
            matches: Vec::new(),
            total_candidates: 0,
            lookup: LookupStatus::StorageUnavailable,
        }
    }
}

/// Ranks the user population against a reference profile
///
/// # Pipeline Stages
/// 1. Exclude the reference user (by email)
/// 2. Score every remaining candidate
/// 3. Drop candidates below `MIN_COMPATIBILITY_SCORE`
/// 4. Sort by score, highest first
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank an already enumerated population
    ///
    /// Equal scores keep their enumeration order.
    pub fn rank_candidates<I>(&self, reference: &UserProfile, users: I) -> Vec<MatchResult>
    where
        I: IntoIterator<Item = UserProfile>,
    {
        self.rank_pool(reference, users).0
    }

    /// Ranked matches plus the size of the candidate pool
    fn rank_pool<I>(&self, reference: &UserProfile, users: I) -> (Vec<MatchResult>, usize)
    where
        I: IntoIterator<Item = UserProfile>,
    {
        let mut pool = 0usize;

        let mut ranked: Vec<MatchResult> = users
            .into_iter()
            .filter(|candidate| candidate.email != reference.email)
            .inspect(|_| pool += 1)
            .filter_map(|candidate| {
                let distance_km = profile_distance(reference, &candidate);
                let score = score_breakdown(reference, &candidate, distance_km, &self.weights).total();

                if score >= MIN_COMPATIBILITY_SCORE {
                    Some(MatchResult {
                        common_interests: common_interests(reference, &candidate),
                        candidate,
                        score,
                        distance_km,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable, so ties stay in enumeration order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "Ranked {} of {} candidates for {}",
            ranked.len(),
            pool,
            reference.email
        );

        (ranked, pool)
    }

    /// Find matches for `reference` among every user in the store
    ///
    /// A failed enumeration yields an empty match list flagged with
    /// `LookupStatus::StorageUnavailable`; it is never returned as an error.
    pub async fn find_matches<S>(&self, reference: &UserProfile, store: &S) -> MatchOutcome
    where
        S: ProfileStore + ?Sized,
    {
        let users = match store.list_all_users().await {
            Ok(users) => users,
            Err(e) => {
                tracing::error!("Error finding matches for {}: {}", reference.email, e);
                return MatchOutcome::unavailable();
            }
        };

        let (matches, total_candidates) = self.rank_pool(reference, users);

        MatchOutcome {
            matches,
            total_candidates,
            lookup: LookupStatus::Complete,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
