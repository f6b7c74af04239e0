use crate::rules::Rule;
use crate::{hashtag_count, max_word_repeats, uppercase_ratio, word_count, RiskLevel};

pub const SPAM_SIGNAL: &str = "spam";

const MAX_HASHTAGS: usize = 3;
const MAX_UPPERCASE_RATIO: f64 = 0.5;
const MAX_WORD_REPEATS: usize = 3;
const REPETITION_MIN_WORDS: usize = 10;

pub fn negative_triggers() -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::try_pattern(
            r"(?i)(\b(100|1000)x\b|guaranteed (returns?|profits?|gains?)|get rich|free money|double your)",
            -20,
            "report",
            "Scam-like financial promises get reported",
        )?,
        Rule::try_pattern(
            r"(?i)\b(buy now|limited time|act fast|act now|don't miss out|dm me to buy|order now)\b",
            -15,
            "not_interested",
            "Hard-sell language triggers \"not interested\"",
        )?,
        Rule::try_pattern(
            r"(?i)\b(like if|rt if|retweet if|follow for follow|f4f|like and retweet)\b",
            -12,
            "not_interested",
            "Engagement bait is demoted",
        )?,
        Rule::try_pattern(
            r"(?i)\b(idiots?|stupid|shut up|losers?|morons?)\b",
            -15,
            "block",
            "Hostile wording leads to blocks",
        )?,
    ])
}

/// Keywords users commonly mute. These only produce warnings.
pub fn muted_risk_patterns() -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::try_pattern(
            r"(?i)\b(crypto|nfts?|airdrop|memecoin|web3)\b",
            0,
            "mute",
            "Crypto terms are among the most muted keywords",
        )?
        .with_risk(RiskLevel::High),
        Rule::try_pattern(
            r"(?i)\b(giveaway|free gift|win a)\b",
            0,
            "mute",
            "Giveaway wording is frequently muted",
        )?
        .with_risk(RiskLevel::Medium),
        Rule::try_pattern(
            r"(?i)\b(politics|political|election|vote for)\b",
            0,
            "mute",
            "Political keywords are often muted",
        )?
        .with_risk(RiskLevel::Medium),
        Rule::try_pattern(
            r"(?i)\bspoilers?\b",
            0,
            "mute",
            "Spoiler keywords are muted by some readers",
        )?
        .with_risk(RiskLevel::Low),
    ])
}

pub fn spam_indicators() -> Vec<Rule> {
    vec![
        Rule::check(
            too_many_hashtags,
            -8,
            SPAM_SIGNAL,
            "More than 3 hashtags looks spammy",
        ),
        Rule::check(
            excessive_caps,
            -10,
            SPAM_SIGNAL,
            "Mostly uppercase text reads as shouting",
        ),
        Rule::check(
            repeated_words,
            -6,
            SPAM_SIGNAL,
            "Repeating the same word looks automated",
        ),
    ]
}

fn too_many_hashtags(text: &str) -> bool {
    hashtag_count(text) > MAX_HASHTAGS
}

fn excessive_caps(text: &str) -> bool {
    uppercase_ratio(text) > MAX_UPPERCASE_RATIO
}

fn repeated_words(text: &str) -> bool {
    word_count(text) > REPETITION_MIN_WORDS && max_word_repeats(text) > MAX_WORD_REPEATS
}
