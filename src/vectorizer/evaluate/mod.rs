pub mod similarity;
pub mod scoring;
