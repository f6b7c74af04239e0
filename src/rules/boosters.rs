use crate::rules::Rule;
use crate::Signal;

pub fn reply_boosters() -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::try_pattern(
            r"\?",
            12,
            Signal::Reply.label(),
            "Questions invite replies, the strongest positive engagement signal",
        )?,
        Rule::try_pattern(
            r"(?i)\b(what do you think|what's your|what is your|what would you|let me know|tell me|share your|drop (a|your)|reply with|comment below)\b",
            15,
            Signal::Reply.label(),
            "Direct invitation to respond",
        )?,
        Rule::try_pattern(
            r"(?i)\b(hot take|unpopular opinion|controversial|agree or disagree)\b",
            10,
            Signal::Reply.label(),
            "Opinion framing sparks discussion",
        )?,
    ])
}

pub fn click_boosters() -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::try_pattern(
            r"(?i)\bcheck (it )?out\b",
            8,
            Signal::Click.label(),
            "Soft call-to-action drives clicks",
        )?,
        Rule::try_pattern(
            r"(?i)\b(link in|read more|learn more|full story|details below|see more)\b",
            10,
            Signal::Click.label(),
            "Points readers to more content",
        )?,
        Rule::try_pattern(
            r"(?i)(🧵|\bthread\b)",
            6,
            Signal::Click.label(),
            "Thread marker invites expanding the conversation",
        )?,
    ])
}

pub fn favorite_boosters() -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::try_pattern(
            r"(?i)\b(love|excited|amazing|grateful|proud|incredible|beautiful|thrilled)\b",
            8,
            Signal::Favorite.label(),
            "Positive emotion earns likes",
        )?,
        Rule::try_pattern(
            r"[\x{1F300}-\x{1FAFF}\x{2600}-\x{27BF}]",
            5,
            Signal::Favorite.label(),
            "Emoji add visual warmth",
        )?,
        Rule::try_pattern(
            r"(?i)\b(milestone|celebrate|celebrating|anniversary|congrats|congratulations|shipped)\b",
            7,
            Signal::Favorite.label(),
            "Milestones and wins are easy to like",
        )?,
    ])
}

pub fn share_boosters() -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::try_pattern(
            r"(?i)\b\d+\s+(tips|ways|things|lessons|reasons|steps|mistakes|ideas|tools)\b",
            12,
            Signal::Repost.label(),
            "Numbered lists are highly shareable",
        )?,
        Rule::try_pattern(
            r"(?i)\b(tips|guide|how to|lessons|framework|checklist|playbook|tutorial)\b",
            10,
            Signal::Repost.label(),
            "Educational value gets reposted",
        )?,
        Rule::try_pattern(
            r"(?i)\b(data|study|research|report|stats|statistics|survey)\b",
            8,
            Signal::Repost.label(),
            "Data and research add credibility worth sharing",
        )?,
    ])
}

pub fn follow_boosters() -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::try_pattern(
            r"(?i)\b(we|our|us)\b",
            6,
            Signal::FollowAuthor.label(),
            "Inclusive language builds community",
        )?,
        Rule::try_pattern(
            r"(?i)\b(gm|gn|fam|frens|community|wagmi|builders)\b",
            8,
            Signal::FollowAuthor.label(),
            "Community vocabulary signals belonging",
        )?,
        Rule::try_pattern(
            r"(?i)\b(follow (me )?for|stay tuned|more like this|join us)\b",
            10,
            Signal::FollowAuthor.label(),
            "Explicit reason to follow",
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired(rules: &[Rule], text: &str) -> Vec<i32> {
        rules
            .iter()
            .filter(|rule| rule.matches(text))
            .map(|rule| rule.weight)
            .collect()
    }

    #[test]
    fn thoughts_is_not_a_direct_invitation() {
        let rules = reply_boosters().unwrap();
        assert_eq!(fired(&rules, "Thoughts?"), vec![12]);
        assert_eq!(fired(&rules, "What do you think?"), vec![12, 15]);
    }

    #[test]
    fn hashtag_community_words_count() {
        let rules = follow_boosters().unwrap();
        assert_eq!(fired(&rules, "launch day #gm"), vec![8]);
        assert_eq!(fired(&rules, "our launch"), vec![6]);
    }

    #[test]
    fn numbered_list_and_education_stack() {
        let rules = share_boosters().unwrap();
        assert_eq!(fired(&rules, "5 tips for better sleep"), vec![12, 10]);
    }

    #[test]
    fn thread_emoji_counts_as_click_and_favorite() {
        assert_eq!(fired(&click_boosters().unwrap(), "🧵 a story"), vec![6]);
        assert_eq!(fired(&favorite_boosters().unwrap(), "🧵 a story"), vec![5]);
    }
}
