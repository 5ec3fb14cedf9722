pub mod assessment;
pub mod candidate;
pub mod company;
pub mod interview;
pub mod job;
pub mod mentor;
