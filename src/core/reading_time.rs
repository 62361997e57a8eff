use crate::domain::model::ReadingEstimate;
use crate::utils::error::{Result, SiteError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::num::NonZeroU32;

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

const DEFAULT_WPM: NonZeroU32 = match NonZeroU32::new(DEFAULT_WORDS_PER_MINUTE) {
    Some(wpm) => wpm,
    None => panic!("default reading speed must be positive"),
};

// An unterminated tag at the end of the text is stripped to the end.
static MARKUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[^>]+(>|$)").expect("markup tag pattern is valid"));

/// Removes markup tags without inserting whitespace in their place.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    MARKUP_TAG.replace_all(text, "")
}

/// Counts whitespace-separated words after stripping markup.
///
/// Empty or whitespace-only text has zero words. A byte order mark
/// (U+FEFF) separates words like any other whitespace.
pub fn word_count(text: &str) -> usize {
    strip_markup(text)
        .split(|c: char| c.is_whitespace() || c == '\u{feff}')
        .filter(|word| !word.is_empty())
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTimeEstimator {
    words_per_minute: NonZeroU32,
}

impl ReadingTimeEstimator {
    pub fn new(words_per_minute: u32) -> Result<Self> {
        let words_per_minute = NonZeroU32::new(words_per_minute).ok_or_else(|| {
            SiteError::invalid_input(
                words_per_minute.to_string(),
                "words per minute must be positive",
            )
        })?;
        Ok(Self { words_per_minute })
    }

    pub fn words_per_minute(&self) -> u32 {
        self.words_per_minute.get()
    }

    pub fn estimate(&self, text: &str) -> ReadingEstimate {
        let words = word_count(text) as u64;
        let estimate = self.estimate_words(words);
        tracing::debug!(
            words,
            words_per_minute = self.words_per_minute(),
            "Estimated reading time: {}",
            estimate.text
        );
        estimate
    }

    /// Splits `words` into whole minutes and the seconds the remainder takes.
    ///
    /// `(rem * 60) / wpm` is the exact floor of `rem / (wpm / 60)`.
    pub fn estimate_words(&self, words: u64) -> ReadingEstimate {
        let wpm = u64::from(self.words_per_minute.get());
        let minutes = words / wpm;
        let seconds = (words % wpm) * 60 / wpm;

        ReadingEstimate {
            minutes,
            seconds,
            text: display_text(minutes, seconds),
        }
    }
}

impl Default for ReadingTimeEstimator {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WPM,
        }
    }
}

/// Estimates reading time at the default speed of 200 words per minute.
pub fn reading_time(text: &str) -> ReadingEstimate {
    ReadingTimeEstimator::default().estimate(text)
}

fn display_text(minutes: u64, seconds: u64) -> String {
    match (minutes, seconds) {
        (0, s) => format!("{} sec", s),
        (m, 0) => format!("{} min", m),
        (m, s) => format!("{} min {} sec", m, s),
    }
}
