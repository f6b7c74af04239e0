pub mod config;
pub mod generators;
pub mod knowledge;
pub mod rules;
pub mod scoring;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::config::EngineConfig;
use crate::rules::RULES;
use crate::scoring::AnalysisPipeline;

pub use crate::generators::{
    generate_strategy, generate_variants, FollowUpAction, FormatChoice, LinkChoice, LinkPlacement,
    PostFormat, Strategy, TimingWindow, Variant,
};

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\w+").expect("hashtag pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    #[default]
    None,
    Image,
    Video,
    Thread,
}

impl MediaType {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "none" | "text" | "" => Some(MediaType::None),
            "image" | "photo" | "pic" => Some(MediaType::Image),
            "video" | "vid" => Some(MediaType::Video),
            "thread" => Some(MediaType::Thread),
            _ => None,
        }
    }

    /// Strict parse for command-line input.
    pub fn parse(value: &str) -> Result<Self, String> {
        MediaType::from_str(value).ok_or_else(|| {
            format!(
                "unknown media type '{}' (expected none, image, video or thread)",
                value.trim()
            )
        })
    }

    /// Unrecognised labels fall back to `None`.
    pub fn from_str_lossy(value: &str) -> Self {
        MediaType::from_str(value).unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaType::None => "none",
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Thread => "thread",
        }
    }
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        MediaType::from_str_lossy(&value)
    }
}

impl From<MediaType> for String {
    fn from(value: MediaType) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeOptions {
    pub media_type: MediaType,
    /// Only read by the generators.
    pub goal: Option<String>,
    pub has_link: bool,
}

impl AnalyzeOptions {
    pub fn goal_is(&self, goal: &str) -> bool {
        self.goal
            .as_deref()
            .map(|value| value.trim().eq_ignore_ascii_case(goal))
            .unwrap_or(false)
    }
}

/// The positive engagement signals the engine estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Reply,
    Favorite,
    Click,
    Repost,
    FollowAuthor,
}

impl Signal {
    pub const ALL: [Signal; 5] = [
        Signal::Reply,
        Signal::Favorite,
        Signal::Click,
        Signal::Repost,
        Signal::FollowAuthor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Signal::Reply => "reply",
            Signal::Favorite => "favorite",
            Signal::Click => "click",
            Signal::Repost => "repost",
            Signal::FollowAuthor => "follow_author",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predictions {
    pub reply: i32,
    pub favorite: i32,
    pub click: i32,
    pub repost: i32,
    pub follow_author: i32,
}

impl Default for Predictions {
    fn default() -> Self {
        Self {
            reply: 30,
            favorite: 40,
            click: 25,
            repost: 20,
            follow_author: 25,
        }
    }
}

impl Predictions {
    pub fn get(&self, signal: Signal) -> i32 {
        match signal {
            Signal::Reply => self.reply,
            Signal::Favorite => self.favorite,
            Signal::Click => self.click,
            Signal::Repost => self.repost,
            Signal::FollowAuthor => self.follow_author,
        }
    }

    pub fn set(&mut self, signal: Signal, value: i32) {
        match signal {
            Signal::Reply => self.reply = value,
            Signal::Favorite => self.favorite = value,
            Signal::Click => self.click = value,
            Signal::Repost => self.repost = value,
            Signal::FollowAuthor => self.follow_author = value,
        }
    }

    pub fn values(&self) -> [i32; 5] {
        Signal::ALL.map(|signal| self.get(signal))
    }

    pub fn mean(&self) -> f64 {
        let values = self.values();
        values.iter().map(|value| *value as f64).sum::<f64>() / values.len() as f64
    }
}

/// Sub-scores. The defaults double as the fallbacks used by aggregation
/// when a pass has not written its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub content_quality: i32,
    pub format: i32,
    pub safety: i32,
    pub overall: i32,
}

impl Default for Scores {
    fn default() -> Self {
        Self {
            content_quality: 50,
            format: 50,
            safety: 100,
            overall: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub signal: String,
    pub impact: String,
    pub reason: String,
}

impl Factor {
    pub fn new(signal: impl Into<String>, weight: i32, reason: impl Into<String>) -> Self {
        Self {
            signal: signal.into(),
            impact: format!("{:+}", weight),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(rename = "type")]
    pub warning_type: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskLevel>,
}

impl Warning {
    pub fn new(warning_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            warning_type: warning_type.into(),
            message: message.into(),
            risk: None,
        }
    }

    pub fn with_risk(mut self, risk: Option<RiskLevel>) -> Self {
        self.risk = risk;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: String,
    pub benefit: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub text: String,
    pub char_count: usize,
    pub word_count: usize,
    pub predictions: Predictions,
    pub scores: Scores,
    pub factors: Vec<Factor>,
    pub warnings: Vec<Warning>,
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisResult {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            char_count: char_count(text),
            word_count: word_count(text),
            predictions: Predictions::default(),
            scores: Scores::default(),
            factors: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn warnings_of_type<'a>(&'a self, warning_type: &'a str) -> impl Iterator<Item = &'a Warning> {
        self.warnings
            .iter()
            .filter(move |warning| warning.warning_type == warning_type)
    }

    pub fn has_recommendation(&self, action: &str) -> bool {
        self.recommendations
            .iter()
            .any(|recommendation| recommendation.action == action)
    }
}

/// Analysis, rewrites and posting plan for one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationReport {
    pub analysis: AnalysisResult,
    pub variants: Vec<Variant>,
    pub strategy: Strategy,
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn hashtag_count(text: &str) -> usize {
    HASHTAG_RE.find_iter(text).count()
}

/// Uppercase letters over total length; 0 for empty text.
pub fn uppercase_ratio(text: &str) -> f64 {
    let total = char_count(text);
    if total == 0 {
        return 0.0;
    }
    let uppercase = text.chars().filter(|ch| ch.is_uppercase()).count();
    uppercase as f64 / total as f64
}

/// Highest occurrence count of any lowercased word.
pub fn max_word_repeats(text: &str) -> usize {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in text.split_whitespace() {
        let normalized = word
            .trim_matches(|ch: char| !ch.is_alphanumeric())
            .to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        *counts.entry(normalized).or_insert(0) += 1;
    }
    counts.values().copied().max().unwrap_or(0)
}

pub fn analyze(text: &str, options: &AnalyzeOptions) -> AnalysisResult {
    analyze_with_config(text, options, &EngineConfig::default())
}

pub fn analyze_with_config(
    text: &str,
    options: &AnalyzeOptions,
    config: &EngineConfig,
) -> AnalysisResult {
    let pipeline = AnalysisPipeline::new(&RULES, config);
    pipeline.run(text, options)
}

pub fn optimize(text: &str, options: &AnalyzeOptions) -> OptimizationReport {
    optimize_with_config(text, options, &EngineConfig::default())
}

pub fn optimize_with_config(
    text: &str,
    options: &AnalyzeOptions,
    config: &EngineConfig,
) -> OptimizationReport {
    let analysis = analyze_with_config(text, options, config);
    let variants = generate_variants(text, &analysis, options);
    let strategy = generate_strategy(&analysis, options);
    OptimizationReport {
        analysis,
        variants,
        strategy,
    }
}
