pub mod boosters;
pub mod safety;

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::RiskLevel;

/// Built once per process; read-only afterwards.
pub static RULES: Lazy<RuleTable> =
    Lazy::new(|| RuleTable::builtin().expect("built-in rule patterns compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    ReplyBoosters,
    ClickBoosters,
    FavoriteBoosters,
    ShareBoosters,
    FollowBoosters,
    NegativeTriggers,
    MutedRisk,
    SpamIndicators,
}

impl RuleCategory {
    fn index(self) -> usize {
        self as usize
    }
}

pub type TextCheck = fn(&str) -> bool;

#[derive(Clone)]
pub enum Matcher {
    Pattern(Regex),
    Check(TextCheck),
}

impl Matcher {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Pattern(regex) => regex.is_match(text),
            Matcher::Check(check) => check(text),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Matcher::Check(_) => f.write_str("Check(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    matcher: Matcher,
    pub weight: i32,
    pub signal: String,
    pub reason: String,
    pub risk: Option<RiskLevel>,
}

impl Rule {
    pub fn try_pattern(
        pattern: &str,
        weight: i32,
        signal: &str,
        reason: &str,
    ) -> Result<Self, regex::Error> {
        Ok(Self::with_matcher(
            Matcher::Pattern(Regex::new(pattern)?),
            weight,
            signal,
            reason,
        ))
    }

    pub fn check(check: TextCheck, weight: i32, signal: &str, reason: &str) -> Self {
        Self::with_matcher(Matcher::Check(check), weight, signal, reason)
    }

    fn with_matcher(matcher: Matcher, weight: i32, signal: &str, reason: &str) -> Self {
        Self {
            matcher,
            weight,
            signal: signal.to_string(),
            reason: reason.to_string(),
            risk: None,
        }
    }

    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk = Some(risk);
        self
    }

    pub fn matches(&self, text: &str) -> bool {
        self.matcher.matches(text)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    categories: [Vec<Rule>; 8],
}

impl RuleTable {
    pub fn builtin() -> Result<Self, regex::Error> {
        let mut table = RuleTable::default();
        table.extend(RuleCategory::ReplyBoosters, boosters::reply_boosters()?);
        table.extend(RuleCategory::ClickBoosters, boosters::click_boosters()?);
        table.extend(RuleCategory::FavoriteBoosters, boosters::favorite_boosters()?);
        table.extend(RuleCategory::ShareBoosters, boosters::share_boosters()?);
        table.extend(RuleCategory::FollowBoosters, boosters::follow_boosters()?);
        table.extend(RuleCategory::NegativeTriggers, safety::negative_triggers()?);
        table.extend(RuleCategory::MutedRisk, safety::muted_risk_patterns()?);
        table.extend(RuleCategory::SpamIndicators, safety::spam_indicators());
        Ok(table)
    }

    /// Appends rules to a category; the scoring passes pick them up unchanged.
    pub fn extend(&mut self, category: RuleCategory, rules: impl IntoIterator<Item = Rule>) {
        self.categories[category.index()].extend(rules);
    }

    pub fn rules(&self, category: RuleCategory) -> &[Rule] {
        &self.categories[category.index()]
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
