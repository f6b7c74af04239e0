use crate::config::AggregateWeights;
use crate::AnalysisResult;

#[derive(Debug, Clone)]
pub struct Aggregator {
    weights: AggregateWeights,
}

impl Aggregator {
    pub fn new(weights: AggregateWeights) -> Self {
        Self { weights }
    }

    /// Reads predictions and sub-scores; `overall` is never set anywhere else.
    pub fn overall(&self, result: &AnalysisResult) -> i32 {
        let scores = &result.scores;
        let raw = result.predictions.mean() * self.weights.predictions
            + scores.content_quality as f64 * self.weights.content_quality
            + scores.format as f64 * self.weights.format
            + scores.safety as f64 * self.weights.safety;
        if raw.is_nan() {
            return 0;
        }
        (raw.round() as i32).clamp(0, 100)
    }

    pub fn score(&self, result: &mut AnalysisResult) {
        result.scores.overall = self.overall(result);
    }
}
