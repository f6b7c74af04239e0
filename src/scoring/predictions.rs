use crate::config::Baselines;
use crate::rules::{RuleCategory, RuleTable};
use crate::{AnalysisResult, Factor, Signal};

const MAX_PREDICTION: i32 = 100;

#[derive(Debug, Clone)]
pub struct PredictionScorer {
    baselines: Baselines,
}

impl PredictionScorer {
    pub fn new(baselines: Baselines) -> Self {
        Self { baselines }
    }

    pub fn category(signal: Signal) -> RuleCategory {
        match signal {
            Signal::Reply => RuleCategory::ReplyBoosters,
            Signal::Favorite => RuleCategory::FavoriteBoosters,
            Signal::Click => RuleCategory::ClickBoosters,
            Signal::Repost => RuleCategory::ShareBoosters,
            Signal::FollowAuthor => RuleCategory::FollowBoosters,
        }
    }

    pub fn score(&self, text: &str, rules: &RuleTable, result: &mut AnalysisResult) {
        let mut predictions = self.baselines.to_predictions();

        for signal in Signal::ALL {
            let mut score = predictions.get(signal);
            for rule in rules.rules(Self::category(signal)) {
                if rule.matches(text) {
                    score += rule.weight;
                    result
                        .factors
                        .push(Factor::new(rule.signal.as_str(), rule.weight, rule.reason.as_str()));
                }
            }
            predictions.set(signal, score.clamp(0, MAX_PREDICTION));
        }

        result.predictions = predictions;
    }
}
