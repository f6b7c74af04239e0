use crate::{AnalysisResult, AnalyzeOptions, MediaType, Priority, Recommendation};

pub const ADD_QUESTION: &str = "Add a question";
pub const ADD_CALL_TO_ACTION: &str = "Add a soft call-to-action";
pub const ADD_SHAREABLE_VALUE: &str = "Add shareable value";
pub const CONSIDER_THREAD: &str = "Consider thread format";
pub const ADD_COMMUNITY_LANGUAGE: &str = "Add community language";

const REPLY_THRESHOLD: i32 = 50;
const CLICK_THRESHOLD: i32 = 40;
const REPOST_THRESHOLD: i32 = 40;
const FOLLOW_THRESHOLD: i32 = 40;
const THREAD_MIN_CHARS: usize = 250;

fn recommendation(
    priority: Priority,
    action: &str,
    benefit: &str,
    example: &str,
) -> Recommendation {
    Recommendation {
        priority,
        action: action.to_string(),
        benefit: benefit.to_string(),
        example: example.to_string(),
    }
}

/// Emitted in a fixed order: question, CTA, shareable value, thread, community.
pub fn build_recommendations(
    result: &AnalysisResult,
    options: &AnalyzeOptions,
) -> Vec<Recommendation> {
    let predictions = &result.predictions;
    let mut recommendations = Vec::new();

    if predictions.reply < REPLY_THRESHOLD && !result.text.contains('?') {
        recommendations.push(recommendation(
            Priority::High,
            ADD_QUESTION,
            "Replies are the most heavily weighted positive action; a question raises P(reply)",
            "End with: \"What's your experience with this?\"",
        ));
    }
    if predictions.click < CLICK_THRESHOLD {
        recommendations.push(recommendation(
            Priority::Medium,
            ADD_CALL_TO_ACTION,
            "A clear next step raises P(click) and P(profile_click)",
            "\"Check out the details below\"",
        ));
    }
    if predictions.repost < REPOST_THRESHOLD {
        recommendations.push(recommendation(
            Priority::Medium,
            ADD_SHAREABLE_VALUE,
            "Reposts carry the post to out-of-network audiences",
            "\"3 lessons we learned shipping this:\"",
        ));
    }
    if result.char_count > THREAD_MIN_CHARS && options.media_type != MediaType::Thread {
        recommendations.push(recommendation(
            Priority::Low,
            CONSIDER_THREAD,
            "Threads earn more dwell time and give each part its own chance to engage",
            "Split into 3-5 posts with a strong opener",
        ));
    }
    if predictions.follow_author < FOLLOW_THRESHOLD {
        recommendations.push(recommendation(
            Priority::Low,
            ADD_COMMUNITY_LANGUAGE,
            "Inclusive phrasing builds P(follow_author)",
            "\"We're building this together. Join us!\"",
        ));
    }

    recommendations
}
