use serde_json::{Value, json};

pub const CREATOR_NOTES_PROMPT: &str = "You summarize reel transcripts into clear creator notes. \
Return compact markdown with sections: Summary, Hooks, CTA Ideas.";

/// Low temperature keeps the note format stable between calls.
pub const SUMMARY_TEMPERATURE: f64 = 0.2;

/// Chat messages for summarizing `transcript`.
#[must_use]
pub fn build_messages(transcript: &str) -> Vec<Value> {
    vec![
        json!({ "role": "system", "content": CREATOR_NOTES_PROMPT }),
        json!({ "role": "user", "content": transcript }),
    ]
}
