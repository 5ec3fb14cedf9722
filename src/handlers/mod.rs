pub mod admin;
pub mod candidates;
pub mod company;
pub mod interviews;
pub mod jobs;
pub mod mentors;
pub mod pricing;
