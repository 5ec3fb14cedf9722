//! Seed data standing in for the backend the real platform talks to. The
//! candidate set keeps the well-known pipeline shape used across the
//! dashboards (five fresh applications: ids 20, 22, 26, 29, 32).

use chrono::{DateTime, TimeZone, Utc};

use crate::models::assessment::{AssessmentReview, AssessmentScore};
use crate::models::candidate::{ApplicationStatus, Candidate, DiscProfile};
use crate::models::company::{CompanyProfile, CompanyRatings, OpenRole};
use crate::models::job::{
    Compensation, EmploymentType, JobPosting, PayPeriod, Tier, WorkArrangement,
};
use crate::models::mentor::Mentor;

fn day(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, month, day, 9, 0, 0).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: i32,
    name: &str,
    location: &str,
    match_score: u8,
    challenge_score: Option<u8>,
    disc: (u8, u8, u8, u8),
    skills: &[&str],
    strengths: &[&str],
    status: ApplicationStatus,
    applied_at: DateTime<Utc>,
) -> Candidate {
    let email = format!(
        "{}@example.com",
        name.to_lowercase().replace(' ', ".")
    );
    Candidate {
        id,
        name: name.to_string(),
        email,
        location: location.to_string(),
        match_score,
        challenge_score,
        disc: DiscProfile {
            red: disc.0,
            yellow: disc.1,
            green: disc.2,
            blue: disc.3,
        },
        skills: skills.iter().map(|s| s.to_string()).collect(),
        strengths: strengths.iter().map(|s| s.to_string()).collect(),
        status,
        applied_at,
    }
}

pub fn candidates() -> Vec<Candidate> {
    use ApplicationStatus::*;
    vec![
        candidate(
            20,
            "Amina Diallo",
            "Stockholm",
            92,
            Some(88),
            (35, 20, 25, 20),
            &["Rust", "PostgreSQL", "Kubernetes"],
            &["Systems thinking", "Ownership"],
            New,
            day(8, 21),
        ),
        candidate(
            21,
            "Jonas Berg",
            "Gothenburg",
            78,
            Some(71),
            (15, 40, 30, 15),
            &["TypeScript", "React", "Node.js"],
            &["Collaboration"],
            InProgress,
            day(8, 12),
        ),
        candidate(
            22,
            "Priya Raman",
            "Remote (CET)",
            85,
            None,
            (20, 25, 20, 35),
            &["Python", "Django", "PostgreSQL"],
            &["Attention to detail"],
            New,
            day(8, 20),
        ),
        candidate(
            23,
            "Tomas Eriksson",
            "Malmö",
            74,
            Some(69),
            (30, 30, 20, 20),
            &["Java", "Spring", "Kafka"],
            &["Pragmatism"],
            InterviewScheduled,
            day(8, 3),
        ),
        candidate(
            24,
            "Leila Haddad",
            "Copenhagen",
            58,
            Some(44),
            (10, 20, 45, 25),
            &["PHP", "Laravel"],
            &["Persistence"],
            Rejected,
            day(7, 28),
        ),
        candidate(
            25,
            "Mikael Nyström",
            "Stockholm",
            95,
            Some(97),
            (40, 15, 15, 30),
            &["Rust", "Go", "Kubernetes", "Terraform"],
            &["Delivery focus", "Mentoring"],
            Hired,
            day(6, 30),
        ),
        candidate(
            26,
            "Sofia Lindgren",
            "Uppsala",
            81,
            Some(76),
            (20, 35, 25, 20),
            &["C#", ".NET", "Azure"],
            &["Communication"],
            New,
            day(8, 24),
        ),
        candidate(
            27,
            "Daniel Okafor",
            "Oslo",
            88,
            Some(83),
            (25, 20, 25, 30),
            &["Go", "gRPC", "PostgreSQL"],
            &["Calm under pressure"],
            InterviewComplete,
            day(7, 15),
        ),
        candidate(
            28,
            "Emma Virtanen",
            "Helsinki",
            69,
            None,
            (15, 30, 35, 20),
            &["JavaScript", "Vue"],
            &["Curiosity"],
            InProgress,
            day(8, 10),
        ),
        candidate(
            29,
            "Karim Benali",
            "Remote (CET)",
            90,
            Some(85),
            (30, 25, 15, 30),
            &["Rust", "WebAssembly", "TypeScript"],
            &["Depth", "Writing"],
            New,
            day(8, 25),
        ),
        candidate(
            30,
            "Anna Kowalska",
            "Warsaw",
            77,
            Some(80),
            (20, 30, 30, 20),
            &["Python", "FastAPI", "Docker"],
            &["Reliability"],
            OfferDeclined,
            day(6, 18),
        ),
        candidate(
            31,
            "Lucas Meyer",
            "Berlin",
            83,
            Some(72),
            (35, 25, 20, 20),
            &["Java", "Kubernetes", "AWS"],
            &["Initiative"],
            InterviewScheduled,
            day(7, 30),
        ),
        candidate(
            32,
            "Ingrid Solberg",
            "Bergen",
            87,
            Some(91),
            (15, 20, 35, 30),
            &["Elixir", "Phoenix", "PostgreSQL"],
            &["Thoroughness"],
            New,
            day(8, 26),
        ),
        candidate(
            33,
            "Victor Hansen",
            "Aarhus",
            72,
            Some(66),
            (25, 35, 20, 20),
            &["Ruby", "Rails"],
            &["Product sense"],
            InterviewComplete,
            day(7, 8),
        ),
    ]
}

pub fn reviews() -> Vec<AssessmentReview> {
    candidates()
        .into_iter()
        .map(|c| {
            let base = c.challenge_score.unwrap_or(c.match_score);
            AssessmentReview::new(
                c.id,
                vec![
                    AssessmentScore {
                        category: "Problem solving".to_string(),
                        score: base,
                        rationale: "Challenge submission decomposed the task cleanly.".to_string(),
                        ai_generated: true,
                        admin_override: None,
                    },
                    AssessmentScore {
                        category: "Code quality".to_string(),
                        score: base.saturating_sub(5),
                        rationale: "Idiomatic structure, tests cover the main path.".to_string(),
                        ai_generated: true,
                        admin_override: None,
                    },
                    AssessmentScore {
                        category: "Communication".to_string(),
                        score: base.saturating_sub(8),
                        rationale: "Written walkthrough explains the trade-offs made.".to_string(),
                        ai_generated: true,
                        admin_override: None,
                    },
                ],
            )
        })
        .collect()
}

pub fn jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: 1,
            title: "Backend Engineer".to_string(),
            company: "Nordic Talent AB".to_string(),
            location: "Stockholm".to_string(),
            work_arrangement: WorkArrangement::Hybrid,
            employment_type: EmploymentType::FullTime,
            compensation: Compensation {
                min: 52_000,
                max: 68_000,
                currency: "SEK".to_string(),
                period: PayPeriod::Monthly,
            },
            benefits: vec![
                "Wellness allowance".to_string(),
                "30 days vacation".to_string(),
            ],
            description: "Own the matching and assessment services.".to_string(),
            responsibilities: "Design APIs, review code, run the hiring pipeline backend."
                .to_string(),
            requirements: "Several years of production backend experience.".to_string(),
            required_skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            preferred_skills: vec!["Kubernetes".to_string()],
            required_traits: vec!["Ownership".to_string()],
            preferred_traits: vec!["Mentoring".to_string()],
            tier: Tier::Premium,
            has_skills_challenge: true,
            application_deadline: Some(chrono::NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()),
            created_at: day(8, 1),
        },
        JobPosting {
            id: 2,
            title: "Frontend Developer".to_string(),
            company: "Nordic Talent AB".to_string(),
            location: "Remote".to_string(),
            work_arrangement: WorkArrangement::Remote,
            employment_type: EmploymentType::FullTime,
            compensation: Compensation {
                min: 45_000,
                max: 58_000,
                currency: "SEK".to_string(),
                period: PayPeriod::Monthly,
            },
            benefits: vec!["Home office budget".to_string()],
            description: "Build the employer dashboards.".to_string(),
            responsibilities: "Ship accessible UI for the review pipeline.".to_string(),
            requirements: "Strong TypeScript.".to_string(),
            required_skills: vec!["TypeScript".to_string(), "React".to_string()],
            preferred_skills: vec![],
            required_traits: vec!["Collaboration".to_string()],
            preferred_traits: vec![],
            tier: Tier::Basic,
            has_skills_challenge: false,
            application_deadline: None,
            created_at: day(8, 10),
        },
        JobPosting {
            id: 3,
            title: "Data Engineer".to_string(),
            company: "Nordic Talent AB".to_string(),
            location: "Gothenburg".to_string(),
            work_arrangement: WorkArrangement::Onsite,
            employment_type: EmploymentType::Contract,
            compensation: Compensation {
                min: 700,
                max: 950,
                currency: "SEK".to_string(),
                period: PayPeriod::Hourly,
            },
            benefits: vec![],
            description: "Pipeline work on candidate analytics.".to_string(),
            responsibilities: "Model and maintain the reporting datasets.".to_string(),
            requirements: "Comfortable owning ETL end to end.".to_string(),
            required_skills: vec!["Python".to_string(), "SQL".to_string()],
            preferred_skills: vec!["Airflow".to_string()],
            required_traits: vec![],
            preferred_traits: vec![],
            tier: Tier::Enterprise,
            has_skills_challenge: true,
            application_deadline: Some(chrono::NaiveDate::from_ymd_opt(2026, 9, 30).unwrap()),
            created_at: day(8, 18),
        },
    ]
}

pub fn mentors() -> Vec<Mentor> {
    vec![
        Mentor {
            id: 1,
            name: "Maria Lindqvist".to_string(),
            title: "Engineering Manager".to_string(),
            company: "Klarvik".to_string(),
            specialties: vec!["Career switching".to_string(), "Interviewing".to_string()],
            industries: vec!["Fintech".to_string(), "SaaS".to_string()],
            disc: DiscProfile {
                red: 20,
                yellow: 30,
                green: 35,
                blue: 15,
            },
            years_experience: 14,
            bio: "Built three platform teams from scratch.".to_string(),
        },
        Mentor {
            id: 2,
            name: "Henrik Dahl".to_string(),
            title: "Staff Engineer".to_string(),
            company: "Polarsoft".to_string(),
            specialties: vec!["Systems design".to_string(), "Rust".to_string()],
            industries: vec!["Infrastructure".to_string(), "SaaS".to_string()],
            disc: DiscProfile {
                red: 15,
                yellow: 20,
                green: 30,
                blue: 35,
            },
            years_experience: 17,
            bio: "Distributed storage, then developer tooling.".to_string(),
        },
        Mentor {
            id: 3,
            name: "Fatima Noor".to_string(),
            title: "Product Engineering Lead".to_string(),
            company: "Bright Hire".to_string(),
            specialties: vec!["Leadership".to_string(), "Product thinking".to_string()],
            industries: vec!["HR tech".to_string(), "Marketplaces".to_string()],
            disc: DiscProfile {
                red: 35,
                yellow: 30,
                green: 15,
                blue: 20,
            },
            years_experience: 12,
            bio: "Scaled hiring products across two marketplaces.".to_string(),
        },
    ]
}

pub fn company_profile() -> CompanyProfile {
    CompanyProfile {
        name: "Nordic Talent AB".to_string(),
        tagline: "Hiring that measures what matters".to_string(),
        about: "Recruitment platform pairing skills challenges with behavioral profiles."
            .to_string(),
        website: "https://nordictalent.example".to_string(),
        industry: "HR tech".to_string(),
        employee_count: 85,
        ratings: CompanyRatings {
            communication: 4.4,
            interview_process: 4.1,
            onboarding: 4.6,
            culture: 4.5,
            transparency: 4.2,
        },
        benefits: vec![
            "Wellness allowance".to_string(),
            "30 days vacation".to_string(),
            "Annual learning budget".to_string(),
        ],
        values: vec![
            "Candidates first".to_string(),
            "Evidence over gut feel".to_string(),
        ],
        open_roles: vec![
            OpenRole {
                job_id: 1,
                title: "Backend Engineer".to_string(),
                match_score: 92,
            },
            OpenRole {
                job_id: 2,
                title: "Frontend Developer".to_string(),
                match_score: 78,
            },
            OpenRole {
                job_id: 3,
                title: "Data Engineer".to_string(),
                match_score: 64,
            },
        ],
        logo_url: None,
        cover_url: None,
    }
}
