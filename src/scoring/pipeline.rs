use tracing::debug;

use crate::config::EngineConfig;
use crate::rules::RuleTable;
use crate::scoring::{
    build_recommendations, Aggregator, ContentQualityScorer, FormatScorer, PredictionScorer,
    SafetyScorer,
};
use crate::{AnalysisResult, AnalyzeOptions};

/// Runs the five passes over one text, then derives recommendations.
#[derive(Debug, Clone)]
pub struct AnalysisPipeline<'a> {
    rules: &'a RuleTable,
    prediction_scorer: PredictionScorer,
    quality_scorer: ContentQualityScorer,
    safety_scorer: SafetyScorer,
    format_scorer: FormatScorer,
    aggregator: Aggregator,
}

impl<'a> AnalysisPipeline<'a> {
    pub fn new(rules: &'a RuleTable, config: &EngineConfig) -> Self {
        Self {
            rules,
            prediction_scorer: PredictionScorer::new(config.baselines.clone()),
            quality_scorer: ContentQualityScorer::new(),
            safety_scorer: SafetyScorer::new(),
            format_scorer: FormatScorer::new(config.format.clone()),
            aggregator: Aggregator::new(config.aggregate.clone()),
        }
    }

    pub fn run(&self, text: &str, options: &AnalyzeOptions) -> AnalysisResult {
        let mut result = AnalysisResult::new(text);

        self.prediction_scorer.score(text, self.rules, &mut result);
        self.quality_scorer.score(text, &mut result);
        self.safety_scorer.score(text, self.rules, &mut result);
        self.format_scorer.score(options.media_type, &mut result);
        self.aggregator.score(&mut result);

        result.recommendations = build_recommendations(&result, options);

        debug!(
            chars = result.char_count,
            media = %options.media_type,
            factors = result.factors.len(),
            warnings = result.warnings.len(),
            overall = result.scores.overall,
            "analyzed post"
        );

        result
    }
}
