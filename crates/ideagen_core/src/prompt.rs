//! Prompt templates for idea generation.

use crate::request::GenerationRequest;

/// System instruction sent with every call.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that returns a strictly \
parseable JSON array of short, actionable content-creation ideas (strings).";

/// Soft length guidance given to the model, in characters.
pub const IDEA_LENGTH_HINT: usize = 140;

fn header(req: &GenerationRequest) -> String {
    format!(
        "Topic: {}\nNumber of ideas: {}\nStyle: {}\nTone: {}\n",
        req.topic.trim(),
        req.count,
        req.style,
        req.tone
    )
}

/// First-attempt prompt.
pub fn primary_prompt(req: &GenerationRequest) -> String {
    format!(
        "{}Instructions: Return ONLY a JSON array of strings. Example: [\"Idea 1\", \"Idea 2\"]\n\
         Each idea should be concise (preferably < {} characters), actionable, and unique.",
        header(req),
        IDEA_LENGTH_HINT
    )
}

/// Second-attempt prompt used when the first reply came up short.
pub fn reinforced_prompt(req: &GenerationRequest) -> String {
    format!(
        "{}Return ONLY a JSON array of exactly {} ideas (strings). No numbering, no commentary.",
        header(req),
        req.count
    )
}
