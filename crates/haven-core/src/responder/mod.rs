//! Keyword Responder
//!
//! Deterministic offline responder standing in for a local language model.
//! Prompts are matched against a fixed keyword table; matched topics render
//! a numbered protocol, everything else gets a generic guidance template.
//! The same prompt always produces the same text.

mod knowledge;

use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

pub use knowledge::{match_topic, TopicEntry, TOPICS};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Name reported by [`Responder::status`]
pub const MODEL_NAME: &str = "gpt-oss-20b";

/// Starter questions surfaced by query UIs
pub const SUGGESTED_PROMPTS: &[&str] = &[
    "How do I treat severe bleeding?",
    "How to build emergency shelter?",
    "Water purification methods",
    "How to signal for rescue?",
];

const BASE_CONFIDENCE: f32 = 0.5;
const KEYWORD_BOOST: f32 = 0.3;
const MAX_CONFIDENCE: f32 = 0.95;
const FALLBACK_CONFIDENCE: f32 = 0.7;

const MEMORY_USAGE: &str = "14.2 GB";
const RESPONSE_TIME: &str = "~2.3s avg";

// ============================================================================
// TYPES
// ============================================================================

/// Tunable generation parameters
///
/// Carried for interface compatibility with model-backed deployments; the
/// keyword responder reads none of them when producing a reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponderConfig {
    /// Model identifier
    pub model_name: String,
    /// Maximum tokens per reply
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Frequency penalty
    pub frequency_penalty: f32,
    /// Presence penalty
    pub presence_penalty: f32,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            model_name: MODEL_NAME.to_string(),
            max_tokens: 2048,
            temperature: 0.7,
            top_p: 0.9,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

/// Partial update for [`ResponderConfig`]
///
/// Provided fields overwrite, omitted fields are retained.
#[derive(Debug, Clone, Default)]
pub struct ConfigPatch {
    /// New model identifier
    pub model_name: Option<String>,
    /// New token ceiling
    pub max_tokens: Option<u32>,
    /// New temperature
    pub temperature: Option<f32>,
    /// New nucleus cutoff
    pub top_p: Option<f32>,
    /// New frequency penalty
    pub frequency_penalty: Option<f32>,
    /// New presence penalty
    pub presence_penalty: Option<f32>,
}

impl ResponderConfig {
    /// Merge a patch into this config
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(model_name) = patch.model_name {
            self.model_name = model_name;
        }
        if let Some(max_tokens) = patch.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(temperature) = patch.temperature {
            self.temperature = temperature;
        }
        if let Some(top_p) = patch.top_p {
            self.top_p = top_p;
        }
        if let Some(frequency_penalty) = patch.frequency_penalty {
            self.frequency_penalty = frequency_penalty;
        }
        if let Some(presence_penalty) = patch.presence_penalty {
            self.presence_penalty = presence_penalty;
        }
    }
}

/// A produced response with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Formatted response text
    pub text: String,
    /// Heuristic confidence, 0.8 for a topic match and 0.7 otherwise
    pub confidence: f32,
    /// Wall-clock time spent producing the reply
    pub processing_time_ms: u64,
    /// Rough token estimate (text length over four)
    pub tokens_used: usize,
    /// Matched topic keyword, `None` when the fallback fired
    pub topic: Option<String>,
}

/// Snapshot of responder health for status displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStatus {
    /// Whether the responder is ready
    pub loaded: bool,
    /// Model identifier
    pub model_name: String,
    /// Canned memory figure for display
    pub memory_usage: String,
    /// Canned latency figure for display
    pub response_time: String,
}

// ============================================================================
// RESPONDER
// ============================================================================

/// Deterministic keyword-matched responder
///
/// `respond` is total over all text inputs and never fails. An optional
/// injected delay simulates model latency; the default is zero so tests
/// complete immediately.
pub struct Responder {
    config: Mutex<ResponderConfig>,
    delay: Duration,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// Create a responder with no artificial delay
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    /// Create a responder that sleeps for `delay` before each reply
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            config: Mutex::new(ResponderConfig::default()),
            delay,
        }
    }

    /// Produce a reply for `prompt`
    ///
    /// Matching is case-insensitive and first-match over the topic table;
    /// the reply text embeds the prompt verbatim when no topic matches.
    pub async fn respond(&self, prompt: &str) -> Reply {
        let start = Instant::now();

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let lowered = prompt.to_lowercase();
        let (text, confidence, topic) = match knowledge::match_topic(&lowered) {
            Some(entry) => (
                knowledge::format_protocol(entry),
                MAX_CONFIDENCE.min(BASE_CONFIDENCE + KEYWORD_BOOST),
                Some(entry.keyword.to_string()),
            ),
            None => (knowledge::format_fallback(prompt), FALLBACK_CONFIDENCE, None),
        };

        let tokens_used = text.len() / 4;

        Reply {
            text,
            confidence,
            processing_time_ms: start.elapsed().as_millis() as u64,
            tokens_used,
            topic,
        }
    }

    /// Report readiness and canned resource figures
    pub fn status(&self) -> ModelStatus {
        let config = self.lock_config();

        ModelStatus {
            loaded: true,
            model_name: config.model_name.clone(),
            memory_usage: MEMORY_USAGE.to_string(),
            response_time: RESPONSE_TIME.to_string(),
        }
    }

    /// Snapshot of the current config
    pub fn config(&self) -> ResponderConfig {
        self.lock_config().clone()
    }

    /// Merge a partial config update
    pub fn update_config(&self, patch: ConfigPatch) {
        self.lock_config().apply(patch);
    }

    // Config is plain data, so a poisoned lock is still usable
    fn lock_config(&self) -> std::sync::MutexGuard<'_, ResponderConfig> {
        self.config
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

// ============================================================================
// TESTS
// ============================================================================
