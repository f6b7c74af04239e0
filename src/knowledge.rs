//! Reference notes on the ranking pipeline these heuristics approximate.
//! Nothing here feeds the scores.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PipelineStage {
    pub name: &'static str,
    pub component: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EngagementAction {
    pub name: &'static str,
    pub polarity: Polarity,
    pub description: &'static str,
}

pub static PIPELINE_STAGES: &[PipelineStage] = &[
    PipelineStage {
        name: "Candidate sourcing",
        component: "Thunder / Phoenix retrieval",
        description: "Collects recent posts from followed accounts and out-of-network posts retrieved by embedding similarity",
    },
    PipelineStage {
        name: "Hydration",
        component: "Home Mixer",
        description: "Attaches post text, media, author and engagement metadata to each candidate",
    },
    PipelineStage {
        name: "Pre-scoring filters",
        component: "Home Mixer",
        description: "Drops duplicates, muted keywords, blocked or muted authors and already-seen posts",
    },
    PipelineStage {
        name: "Engagement prediction",
        component: "Phoenix scorer",
        description: "A transformer predicts the probability of each engagement action for the viewer",
    },
    PipelineStage {
        name: "Weighted scoring",
        component: "Weighted scorer",
        description: "Combines action probabilities with positive and negative weights into one score",
    },
    PipelineStage {
        name: "Author diversity",
        component: "Author diversity scorer",
        description: "Decays scores of repeated authors within a feed",
    },
    PipelineStage {
        name: "Out-of-network adjustment",
        component: "OON scorer",
        description: "Scales out-of-network candidates relative to in-network ones",
    },
    PipelineStage {
        name: "Selection",
        component: "Home Mixer",
        description: "Sorts by final score, applies post-selection visibility filters and returns the feed",
    },
];

pub static ENGAGEMENT_ACTIONS: &[EngagementAction] = &[
    EngagementAction {
        name: "favorite",
        polarity: Polarity::Positive,
        description: "Viewer likes the post",
    },
    EngagementAction {
        name: "reply",
        polarity: Polarity::Positive,
        description: "Viewer replies to the post",
    },
    EngagementAction {
        name: "repost",
        polarity: Polarity::Positive,
        description: "Viewer reposts the post",
    },
    EngagementAction {
        name: "click",
        polarity: Polarity::Positive,
        description: "Viewer opens the conversation",
    },
    EngagementAction {
        name: "follow_author",
        polarity: Polarity::Positive,
        description: "Viewer follows the author from the post",
    },
    EngagementAction {
        name: "photo_expand",
        polarity: Polarity::Positive,
        description: "Viewer expands an attached image",
    },
    EngagementAction {
        name: "video_view",
        polarity: Polarity::Positive,
        description: "Viewer watches attached video past the quality threshold",
    },
    EngagementAction {
        name: "dwell",
        polarity: Polarity::Positive,
        description: "Viewer stays on the post",
    },
    EngagementAction {
        name: "not_interested",
        polarity: Polarity::Negative,
        description: "Viewer marks the post as not interesting",
    },
    EngagementAction {
        name: "mute",
        polarity: Polarity::Negative,
        description: "Viewer mutes the author or a keyword",
    },
    EngagementAction {
        name: "block",
        polarity: Polarity::Negative,
        description: "Viewer blocks the author",
    },
    EngagementAction {
        name: "report",
        polarity: Polarity::Negative,
        description: "Viewer reports the post",
    },
];

pub fn find_action(name: &str) -> Option<&'static EngagementAction> {
    ENGAGEMENT_ACTIONS
        .iter()
        .find(|action| action.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_signals_are_documented() {
        for signal in crate::Signal::ALL {
            let action = find_action(signal.label()).expect("signal has a reference entry");
            assert_eq!(action.polarity, Polarity::Positive);
        }
        assert_eq!(find_action("REPORT").map(|a| a.polarity), Some(Polarity::Negative));
    }

    #[test]
    fn pipeline_ends_with_selection() {
        assert_eq!(PIPELINE_STAGES.last().map(|stage| stage.name), Some("Selection"));
    }
}
