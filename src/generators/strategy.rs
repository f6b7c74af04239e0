use serde::{Deserialize, Serialize};

use crate::{AnalysisResult, AnalyzeOptions, MediaType};

const THREAD_MIN_CHARS: usize = 200;
const TRAFFIC_GOAL: &str = "traffic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostFormat {
    Single,
    Thread,
}

impl PostFormat {
    pub fn label(self) -> &'static str {
        match self {
            PostFormat::Single => "single",
            PostFormat::Thread => "thread",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkPlacement {
    ReplyLink,
    BioLink,
}

impl LinkPlacement {
    pub fn label(self) -> &'static str {
        match self {
            LinkPlacement::ReplyLink => "reply-link",
            LinkPlacement::BioLink => "bio-link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatChoice {
    pub choice: PostFormat,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkChoice {
    pub choice: LinkPlacement,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingWindow {
    pub window: String,
    pub hours: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpAction {
    pub action: String,
    pub timing: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub format: FormatChoice,
    pub link: Option<LinkChoice>,
    pub timing: Vec<TimingWindow>,
    pub follow_up: Vec<FollowUpAction>,
}

const TIMING_WINDOWS: [(&str, &str, &str); 3] = [
    (
        "Weekday morning",
        "8-10 AM local",
        "Commute scrolling gives early engagement velocity",
    ),
    (
        "Lunch break",
        "12-1 PM local",
        "Second daily activity peak",
    ),
    (
        "Evening",
        "7-9 PM local",
        "Longest sessions of the day, good for dwell time",
    ),
];

const FOLLOW_UP_ACTIONS: [(&str, &str, &str); 3] = [
    (
        "Reply to every comment",
        "First 30 minutes",
        "Author replies keep the conversation ranking while the post is fresh",
    ),
    (
        "Quote-post with added context",
        "2-4 hours after posting",
        "Reaches followers who missed the first wave",
    ),
    (
        "Share a follow-up insight or result",
        "24 hours after posting",
        "Turns the post into a series worth following",
    ),
];

pub fn generate_strategy(analysis: &AnalysisResult, options: &AnalyzeOptions) -> Strategy {
    let format = if analysis.char_count > THREAD_MIN_CHARS && options.media_type != MediaType::Thread
    {
        FormatChoice {
            choice: PostFormat::Thread,
            rationale: "Long content performs better split into a thread; each post earns its own dwell and replies".to_string(),
        }
    } else if options.media_type == MediaType::Video {
        FormatChoice {
            choice: PostFormat::Single,
            rationale: "Keep the video in a single post so P(video_view) and dwell time accrue to one candidate".to_string(),
        }
    } else {
        FormatChoice {
            choice: PostFormat::Single,
            rationale: "A concise single post keeps engagement velocity high in the first hour".to_string(),
        }
    };

    let link = if options.has_link {
        if options.goal_is(TRAFFIC_GOAL) {
            Some(LinkChoice {
                choice: LinkPlacement::ReplyLink,
                rationale: "Put the link in the first reply; external links in the main post reduce reach".to_string(),
            })
        } else {
            Some(LinkChoice {
                choice: LinkPlacement::BioLink,
                rationale: "Point to the link in your bio to keep the post link-free".to_string(),
            })
        }
    } else {
        None
    };

    Strategy {
        format,
        link,
        timing: TIMING_WINDOWS
            .iter()
            .map(|(window, hours, reason)| TimingWindow {
                window: window.to_string(),
                hours: hours.to_string(),
                reason: reason.to_string(),
            })
            .collect(),
        follow_up: FOLLOW_UP_ACTIONS
            .iter()
            .map(|(action, timing, reason)| FollowUpAction {
                action: action.to_string(),
                timing: timing.to_string(),
                reason: reason.to_string(),
            })
            .collect(),
    }
}
