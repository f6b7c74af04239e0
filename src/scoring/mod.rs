pub mod aggregate;
pub mod format;
pub mod pipeline;
pub mod predictions;
pub mod quality;
pub mod recommendations;
pub mod safety;

pub use aggregate::Aggregator;
pub use format::FormatScorer;
pub use pipeline::AnalysisPipeline;
pub use predictions::PredictionScorer;
pub use quality::ContentQualityScorer;
pub use recommendations::build_recommendations;
pub use safety::SafetyScorer;
