pub mod contest;
pub mod era;
pub mod performances;
pub mod rating_summary;
