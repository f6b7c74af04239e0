use crate::rules::{RuleCategory, RuleTable};
use crate::{AnalysisResult, Factor, Warning};

pub const MUTED_WARNING_TYPE: &str = "MutedKeywordFilter risk";

const BASE_SAFETY: i32 = 100;

#[derive(Debug, Clone, Default)]
pub struct SafetyScorer;

impl SafetyScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, text: &str, rules: &RuleTable, result: &mut AnalysisResult) {
        let mut safety = BASE_SAFETY;

        // Spam rules carry the "spam" signal, so both categories share one shape.
        for category in [RuleCategory::NegativeTriggers, RuleCategory::SpamIndicators] {
            for rule in rules.rules(category) {
                if rule.matches(text) {
                    safety += rule.weight;
                    result
                        .factors
                        .push(Factor::new(rule.signal.as_str(), rule.weight, rule.reason.as_str()));
                    result
                        .warnings
                        .push(Warning::new(rule.signal.as_str(), rule.reason.as_str()));
                }
            }
        }

        for rule in rules.rules(RuleCategory::MutedRisk) {
            if rule.matches(text) {
                result.warnings.push(
                    Warning::new(MUTED_WARNING_TYPE, rule.reason.as_str()).with_risk(rule.risk),
                );
            }
        }

        // Only decreases from the base, so no upper clamp.
        result.scores.safety = safety.max(0);
    }
}
