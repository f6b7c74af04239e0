pub mod strategy;
pub mod variants;

pub use strategy::{
    generate_strategy, FollowUpAction, FormatChoice, LinkChoice, LinkPlacement, PostFormat,
    Strategy, TimingWindow,
};
pub use variants::{generate_variants, Variant};

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Splits on `.`, `!` and `?`, keeping each sentence's trailing punctuation.
/// Segments with nothing but whitespace or punctuation are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_terminator(ch) {
            continue;
        }
        let mut end = idx + ch.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !is_terminator(next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }
        push_sentence(&mut sentences, &text[start..end]);
        start = end;
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, segment: &'a str) {
    let trimmed = segment.trim();
    if trimmed.chars().any(|ch| !is_terminator(ch)) {
        sentences.push(trimmed);
    }
}

#[cfg(test)]
mod tests {
    use super::split_sentences;

    #[test]
    fn keeps_terminators_and_drops_empty_segments() {
        assert_eq!(
            split_sentences("Big news! We shipped it... Thoughts?"),
            vec!["Big news!", "We shipped it...", "Thoughts?"]
        );
        assert_eq!(split_sentences("Hi. . there"), vec!["Hi.", "there"]);
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("?!").is_empty());
    }
}
