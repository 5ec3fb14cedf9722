pub mod analytics;
pub mod calendar;
pub mod matching;
pub mod pricing;
pub mod projection;
pub mod review;
pub mod wizard;
