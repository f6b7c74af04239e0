use crate::config::FormatConfig;
use crate::{AnalysisResult, Factor, MediaType, Warning};

pub const LENGTH_WARNING_TYPE: &str = "length";

const BASE_FORMAT: i32 = 50;
const MAX_FORMAT: i32 = 100;
const IDEAL_LENGTH_BONUS: i32 = 10;
const SHORT_PENALTY: i32 = -5;

#[derive(Debug, Clone)]
pub struct FormatScorer {
    config: FormatConfig,
}

impl FormatScorer {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn media_bonus(media: MediaType) -> Option<(i32, &'static str, &'static str)> {
        match media {
            MediaType::Video => Some((20, "P(video_view)", "Video drives video views and dwell")),
            MediaType::Image => Some((15, "P(photo_expand)", "Images earn photo expands")),
            MediaType::Thread => Some((10, "P(dwell)", "Threads keep readers on the post longer")),
            MediaType::None => None,
        }
    }

    pub fn score(&self, media: MediaType, result: &mut AnalysisResult) {
        let mut format = BASE_FORMAT;
        let length = result.char_count;

        if (self.config.ideal_min_chars..=self.config.ideal_max_chars).contains(&length) {
            format += IDEAL_LENGTH_BONUS;
            result.factors.push(Factor::new(
                "P(dwell)",
                IDEAL_LENGTH_BONUS,
                format!(
                    "Length in the {}-{} character sweet spot",
                    self.config.ideal_min_chars, self.config.ideal_max_chars
                ),
            ));
        } else if length < self.config.short_chars {
            format += SHORT_PENALTY;
            result.warnings.push(Warning::new(
                LENGTH_WARNING_TYPE,
                "Very short posts may lack context",
            ));
        }

        if let Some((bonus, signal, reason)) = Self::media_bonus(media) {
            format += bonus;
            result.factors.push(Factor::new(signal, bonus, reason));
        }

        result.scores.format = format.min(MAX_FORMAT);
    }
}
