//! Generation parameters: style and tone options and the per-call request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::{DEFAULT_NUM_IDEAS, DEFAULT_TEMPERATURE, MAX_NUM_IDEAS};

/// Rejected option values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptionError {
    #[error("count must be between 1 and {max}, got {0}", max = MAX_NUM_IDEAS)]
    CountOutOfRange(usize),

    #[error("temperature must be between 0.0 and 1.0, got {0}")]
    TemperatureOutOfRange(f32),

    #[error("unknown style '{0}' (expected one of: {styles})", styles = Style::names())]
    UnknownStyle(String),

    #[error("unknown tone '{0}' (expected one of: {tones})", tones = Tone::names())]
    UnknownTone(String),
}

/// Content format the ideas should target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    #[default]
    General,
    Listicle,
    HowTo,
    TwitterThread,
    VideoHook,
    NewsletterSubject,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::General,
        Style::Listicle,
        Style::HowTo,
        Style::TwitterThread,
        Style::VideoHook,
        Style::NewsletterSubject,
    ];

    /// Label used in prompts and listings.
    pub fn label(&self) -> &'static str {
        match self {
            Style::General => "General",
            Style::Listicle => "Listicle",
            Style::HowTo => "How-to",
            Style::TwitterThread => "Twitter thread",
            Style::VideoHook => "Video hook",
            Style::NewsletterSubject => "Newsletter subject",
        }
    }

    /// Short identifier accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Style::General => "general",
            Style::Listicle => "listicle",
            Style::HowTo => "how-to",
            Style::TwitterThread => "twitter-thread",
            Style::VideoHook => "video-hook",
            Style::NewsletterSubject => "newsletter-subject",
        }
    }

    fn names() -> String {
        Self::ALL.iter().map(Style::slug).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Style {
    type Err = OptionError;

    /// Accepts the slug or the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|style| normalize(style.slug()) == wanted || normalize(style.label()) == wanted)
            .ok_or_else(|| OptionError::UnknownStyle(s.to_string()))
    }
}

/// Voice the ideas should be written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Practical,
    Persuasive,
    Funny,
    Curious,
    Controversial,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Practical,
        Tone::Persuasive,
        Tone::Funny,
        Tone::Curious,
        Tone::Controversial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Practical => "Practical",
            Tone::Persuasive => "Persuasive",
            Tone::Funny => "Funny",
            Tone::Curious => "Curious",
            Tone::Controversial => "Controversial",
        }
    }

    fn names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.label().to_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|tone| normalize(tone.label()) == wanted)
            .ok_or_else(|| OptionError::UnknownTone(s.to_string()))
    }
}

/// Lowercase and drop separators so "How-to", "how to" and "HOWTO" compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// The knobs a user sets once and reuses across Generate and Generate More.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdeaOptions {
    pub count: usize,
    pub style: Style,
    pub tone: Tone,
    pub temperature: f32,
}

impl Default for IdeaOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_NUM_IDEAS,
            style: Style::default(),
            tone: Tone::default(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl IdeaOptions {
    pub fn validate(&self) -> Result<(), OptionError> {
        check_count(self.count)?;
        check_temperature(self.temperature)?;
        Ok(())
    }
}

pub fn check_count(count: usize) -> Result<usize, OptionError> {
    if (1..=MAX_NUM_IDEAS).contains(&count) {
        Ok(count)
    } else {
        Err(OptionError::CountOutOfRange(count))
    }
}

pub fn check_temperature(temperature: f32) -> Result<f32, OptionError> {
    if (0.0..=1.0).contains(&temperature) {
        Ok(temperature)
    } else {
        Err(OptionError::TemperatureOutOfRange(temperature))
    }
}

/// Everything that determines the prompt for one generation call.
///
/// `count >= 1` is the caller's responsibility; the generator does not check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub count: usize,
    pub style: Style,
    pub tone: Tone,
    pub temperature: f32,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, options: &IdeaOptions) -> Self {
        Self {
            topic: topic.into(),
            count: options.count,
            style: options.style,
            tone: options.tone,
            temperature: options.temperature,
        }
    }

    pub fn options(&self) -> IdeaOptions {
        IdeaOptions {
            count: self.count,
            style: self.style,
            tone: self.tone,
            temperature: self.temperature,
        }
    }
}
