pub mod normalize;
pub mod ranker;
pub mod scoring;
pub mod stats;
pub mod weights;
