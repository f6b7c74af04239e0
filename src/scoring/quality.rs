use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::Rule;
use crate::{AnalysisResult, Factor};

pub const QUALITY_SIGNAL: &str = "content_quality";

const BASE_QUALITY: i32 = 60;
const HOOK_WINDOW_CHARS: usize = 120;

static HOOK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(new|breaking|huge|finally|just|introducing)\b").expect("hook pattern compiles")
});

static QUALITY_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    quality_rules().expect("content quality patterns compile")
});

fn quality_rules() -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::try_pattern(
            r"(?i)\b(new|update|launch|feature|announcing|introducing)\b",
            10,
            QUALITY_SIGNAL,
            "Informational content (launches, updates) holds attention",
        )?,
        Rule::try_pattern(
            r"\d+",
            8,
            QUALITY_SIGNAL,
            "Specific numbers add credibility",
        )?,
        Rule::check(
            opens_with_hook,
            8,
            QUALITY_SIGNAL,
            "Strong opening hook stops the scroll",
        ),
    ])
}

fn opens_with_hook(text: &str) -> bool {
    let head: String = text.chars().take(HOOK_WINDOW_CHARS).collect();
    HOOK_RE.is_match(&head)
}

#[derive(Debug, Clone, Default)]
pub struct ContentQualityScorer;

impl ContentQualityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, text: &str, result: &mut AnalysisResult) {
        let mut quality = BASE_QUALITY;
        for rule in QUALITY_RULES.iter() {
            if rule.matches(text) {
                quality += rule.weight;
                result
                    .factors
                    .push(Factor::new(QUALITY_SIGNAL, rule.weight, rule.reason.as_str()));
            }
        }
        result.scores.content_quality = quality.clamp(0, 100);
    }
}
