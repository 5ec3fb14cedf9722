use crate::models::candidate::{Candidate, DiscProfile};
use crate::models::job::JobPosting;
use crate::models::mentor::Mentor;

/// Mentor compatibility: a complementary DISC pairing blended with shared
/// industry overlap. Axes pair red<->green and yellow<->blue, so a viewer
/// heavy on one axis scores mentors heavy on its complement.
pub fn mentor_match(viewer: &DiscProfile, viewer_industries: &[String], mentor: &Mentor) -> u8 {
    let disc = complementary_disc_score(viewer, &mentor.disc);
    let overlap = overlap_share(viewer_industries, &mentor.industries);

    // 70/30 blend, behavioral fit dominates
    let blended = 0.7 * disc + 0.3 * overlap;
    (blended * 100.0).round().clamp(0.0, 100.0) as u8
}

fn complementary_disc_score(a: &DiscProfile, b: &DiscProfile) -> f64 {
    let pairs = [
        (a.red, b.green),
        (a.green, b.red),
        (a.yellow, b.blue),
        (a.blue, b.yellow),
    ];
    let total: f64 = pairs
        .iter()
        .map(|(x, y)| {
            // reward matched intensity on complementary axes
            let x = *x as f64 / 100.0;
            let y = *y as f64 / 100.0;
            1.0 - (x - y).abs()
        })
        .sum();
    total / pairs.len() as f64
}

fn overlap_share(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    let shared = a
        .iter()
        .filter(|x| b.iter().any(|y| y.eq_ignore_ascii_case(x)))
        .count();
    shared as f64 / a.len() as f64
}

/// Role fit: required-skill coverage weighted above preferred-skill
/// coverage. Pure so it stays unit-testable away from any view code.
pub fn role_match(candidate: &Candidate, job: &JobPosting) -> u8 {
    let required = coverage(&job.required_skills, &candidate.skills);
    let preferred = coverage(&job.preferred_skills, &candidate.skills);

    let score = if job.preferred_skills.is_empty() {
        required
    } else {
        0.8 * required + 0.2 * preferred
    };
    (score * 100.0).round() as u8
}

fn coverage(wanted: &[String], have: &[String]) -> f64 {
    if wanted.is_empty() {
        return 1.0;
    }
    let hits = wanted
        .iter()
        .filter(|w| have.iter().any(|h| h.eq_ignore_ascii_case(w)))
        .count();
    hits as f64 / wanted.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;
    use pretty_assertions::assert_eq;

    fn disc(red: u8, yellow: u8, green: u8, blue: u8) -> DiscProfile {
        DiscProfile {
            red,
            yellow,
            green,
            blue,
        }
    }

    #[test]
    fn perfectly_complementary_profiles_score_highest() {
        let viewer = disc(80, 20, 10, 60);
        let mut mentor = fixtures::mentors().remove(0);
        mentor.disc = disc(10, 60, 80, 20);
        mentor.industries = vec!["Fintech".to_string()];

        let with_overlap = mentor_match(&viewer, &["Fintech".to_string()], &mentor);
        assert_eq!(with_overlap, 100);

        let without_overlap = mentor_match(&viewer, &["Gaming".to_string()], &mentor);
        assert!(without_overlap < with_overlap);
    }

    #[test]
    fn identical_industries_raise_the_blend_by_the_overlap_share() {
        let viewer = disc(50, 50, 50, 50);
        let mut mentor = fixtures::mentors().remove(0);
        mentor.disc = disc(50, 50, 50, 50);
        mentor.industries = vec!["SaaS".to_string(), "Fintech".to_string()];

        let full = mentor_match(&viewer, &["SaaS".to_string()], &mentor);
        let none = mentor_match(&viewer, &["Gaming".to_string()], &mentor);
        assert_eq!(full - none, 30);
    }

    #[test]
    fn role_match_weighs_required_skills_above_preferred() {
        let mut job = fixtures::jobs().remove(0);
        job.required_skills = vec!["Rust".to_string(), "SQL".to_string()];
        job.preferred_skills = vec!["Kubernetes".to_string()];

        let mut candidate = fixtures::candidates().remove(0);
        candidate.skills = vec!["Rust".to_string(), "SQL".to_string()];
        assert_eq!(role_match(&candidate, &job), 80);

        candidate.skills.push("Kubernetes".to_string());
        assert_eq!(role_match(&candidate, &job), 100);

        candidate.skills = vec!["Kubernetes".to_string()];
        assert_eq!(role_match(&candidate, &job), 20);
    }
}
