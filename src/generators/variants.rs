use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generators::split_sentences;
use crate::{char_count, AnalysisResult, AnalyzeOptions};

pub const PRIMARY_OPTIMIZED: &str = "Primary Optimized";
pub const CONVERSATION_STARTER: &str = "Conversation Starter";
pub const SHORT_AND_PUNCHY: &str = "Short & Punchy";
pub const THREAD_OPENER: &str = "Thread Opener";

const QUESTION_SUFFIX: &str = "\n\nThoughts?";
const REPLY_INVITATION: &str = "\n\nWhat's your take? Reply below 👇";
const TEASER_LINE: &str = "\n\nMore in the replies 👇";
const THREAD_MARKER: &str = "🧵 ";
const HOOK_GROWTH_CHARS: usize = 10;
const THREAD_OPENER_MIN_CHARS: usize = 150;
const REPLY_THRESHOLD: i32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(rename = "type")]
    pub variant_type: String,
    pub content: String,
    pub changes: Vec<String>,
    pub expected_impact: String,
}

impl Variant {
    fn new(variant_type: &str, content: String, changes: Vec<&str>, expected_impact: &str) -> Self {
        Self {
            variant_type: variant_type.to_string(),
            content,
            changes: changes.into_iter().map(str::to_string).collect(),
            expected_impact: expected_impact.to_string(),
        }
    }
}

pub fn generate_variants(
    text: &str,
    analysis: &AnalysisResult,
    options: &AnalyzeOptions,
) -> Vec<Variant> {
    let trimmed = text.trim();
    let sentences = split_sentences(text);
    let mut variants = vec![
        primary_optimized(text, analysis),
        Variant::new(
            CONVERSATION_STARTER,
            format!("{}{}", trimmed, REPLY_INVITATION),
            vec!["Added direct reply invitation"],
            "Higher P(reply) from an explicit invitation",
        ),
    ];

    if sentences.len() > 1 {
        variants.push(Variant::new(
            SHORT_AND_PUNCHY,
            format!("{}{}", sentences[0], TEASER_LINE),
            vec!["Cut to the opening sentence", "Added curiosity teaser"],
            "Faster read with a pull into the conversation",
        ));
    }

    if char_count(text) > THREAD_OPENER_MIN_CHARS {
        let opener = sentences.first().copied().unwrap_or(trimmed);
        let parts = sentences.len().max(1).div_ceil(2);
        variants.push(Variant::new(
            THREAD_OPENER,
            format!("{}{}\n\n(1/{})", THREAD_MARKER, opener, parts),
            vec!["Added thread marker", "Added part indicator"],
            "More dwell time spread across the thread",
        ));
    }

    debug!(
        count = variants.len(),
        media = %options.media_type,
        "generated variants"
    );
    variants
}

fn primary_optimized(text: &str, analysis: &AnalysisResult) -> Variant {
    let mut content = text.trim().to_string();
    let mut changes = Vec::new();

    if analysis.predictions.reply < REPLY_THRESHOLD && !text.contains('?') {
        content.push_str(QUESTION_SUFFIX);
        changes.push("Added question");
    }
    if char_count(&content) > char_count(text) + HOOK_GROWTH_CHARS {
        changes.push("Added engagement hook");
    }
    if changes.is_empty() {
        changes.push("Structure optimized");
    }

    Variant::new(
        PRIMARY_OPTIMIZED,
        content,
        changes,
        "Balanced lift across reply and favorite signals",
    )
}
