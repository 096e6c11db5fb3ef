//! Request and response envelopes exchanged with the voice platform

use super::SessionAttributes;
use crate::SkillError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const RESPONSE_VERSION: &str = "1.0";
const CARD_PREFIX: &str = "SessionSpeechlet - ";

/// One conversation turn as delivered by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRequest {
    pub session: Session,
    pub request: Request,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True on the first turn of a conversation
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Application,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SessionAttributes>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// The kind of turn, tagged by the platform's `type` field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Request {
    LaunchRequest {
        request_id: String,
    },
    IntentRequest {
        request_id: String,
        intent: Intent,
    },
    SessionEndedRequest {
        request_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

impl Request {
    #[must_use]
    pub fn request_id(&self) -> &str {
        match self {
            Request::LaunchRequest { request_id }
            | Request::IntentRequest { request_id, .. }
            | Request::SessionEndedRequest { request_id, .. } => request_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Intent {
    /// Value of the named slot, `None` when the slot is missing or unfilled
    #[must_use]
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        self.slots
            .get(slot)
            .and_then(|s| s.value.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Versioned response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub version: String,
    pub session_attributes: SessionAttributes,
    pub response: Speechlet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speechlet {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub reprompt: Reprompt,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl OutputSpeech {
    fn plain_text(text: &str) -> Self {
        Self {
            kind: "PlainText".to_string(),
            text: text.to_string(),
        }
    }
}

impl Speechlet {
    #[must_use]
    pub fn new(title: &str, output: &str, reprompt: &str, should_end_session: bool) -> Self {
        Self {
            output_speech: OutputSpeech::plain_text(output),
            card: Card {
                kind: "Simple".to_string(),
                title: format!("{CARD_PREFIX}{title}"),
                content: format!("{CARD_PREFIX}{output}"),
            },
            reprompt: Reprompt {
                output_speech: OutputSpeech::plain_text(reprompt),
            },
            should_end_session,
        }
    }
}

impl SkillResponse {
    #[must_use]
    pub fn new(session_attributes: SessionAttributes, response: Speechlet) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            session_attributes,
            response,
        }
    }

    /// Envelope spoken back when a turn fails; it always ends the session
    #[must_use]
    pub fn error(error: &SkillError) -> Self {
        Self::new(
            SessionAttributes::new(),
            Speechlet::new("Error", &error.user_message(), "", true),
        )
    }

    /// The text the platform will speak
    #[must_use]
    pub fn speech(&self) -> &str {
        &self.response.output_speech.text
    }
}
