use serde::Deserialize;

use crate::models::candidate::{ApplicationStatus, Candidate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    MatchScore,
    ChallengeScore,
    Name,
    AppliedAt,
}

/// Active filter selections, deserializable straight from a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateFilters {
    pub search: Option<String>,
    pub status: Option<ApplicationStatus>,
    #[serde(default)]
    pub sort: SortKey,
}

/// Pure projection of (collection, filters, sort key) to a displayed view.
/// Recomputed fully on every call; an empty result is a valid state. Ties
/// keep the input order (stable sort).
pub fn project(candidates: &[Candidate], filters: &CandidateFilters) -> Vec<Candidate> {
    let needle = filters
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut view: Vec<Candidate> = candidates
        .iter()
        .filter(|c| filters.status.map_or(true, |s| c.status == s))
        .filter(|c| needle.as_deref().map_or(true, |n| matches_search(c, n)))
        .cloned()
        .collect();

    match filters.sort {
        SortKey::MatchScore => view.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
        SortKey::ChallengeScore => {
            view.sort_by(|a, b| b.challenge_score.cmp(&a.challenge_score))
        }
        SortKey::Name => view.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::AppliedAt => view.sort_by(|a, b| b.applied_at.cmp(&a.applied_at)),
    }

    view
}

fn matches_search(candidate: &Candidate, needle: &str) -> bool {
    candidate.name.to_lowercase().contains(needle)
        || candidate.location.to_lowercase().contains(needle)
        || candidate
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_filter_returns_exactly_the_matching_candidates() {
        let candidates = fixtures::candidates();
        let filters = CandidateFilters {
            status: Some(ApplicationStatus::New),
            sort: SortKey::AppliedAt,
            ..Default::default()
        };

        let mut ids: Vec<i32> = project(&candidates, &filters).iter().map(|c| c.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![20, 22, 26, 29, 32]);
    }

    #[test]
    fn search_is_case_insensitive_over_name_location_and_skills() {
        let candidates = fixtures::candidates();

        let by_name = project(
            &candidates,
            &CandidateFilters {
                search: Some("aMiNa".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Amina Diallo");

        let by_skill = project(
            &candidates,
            &CandidateFilters {
                search: Some("kubernetes".to_string()),
                ..Default::default()
            },
        );
        assert!(!by_skill.is_empty());
        assert!(by_skill
            .iter()
            .all(|c| c.skills.iter().any(|s| s.eq_ignore_ascii_case("Kubernetes"))));
    }

    #[test]
    fn match_score_sort_is_descending() {
        let candidates = fixtures::candidates();
        let view = project(&candidates, &CandidateFilters::default());
        assert!(view
            .windows(2)
            .all(|w| w[0].match_score >= w[1].match_score));
    }

    #[test]
    fn an_empty_result_set_is_a_valid_state() {
        let candidates = fixtures::candidates();
        let view = project(
            &candidates,
            &CandidateFilters {
                search: Some("no such person".to_string()),
                ..Default::default()
            },
        );
        assert!(view.is_empty());
    }

    #[test]
    fn blank_search_input_is_ignored() {
        let candidates = fixtures::candidates();
        let view = project(
            &candidates,
            &CandidateFilters {
                search: Some("   ".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(view.len(), candidates.len());
    }
}
