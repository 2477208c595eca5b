//! The phrasing seam.
//!
//! The conversation engine never talks to a model directly. It is handed an
//! `Arc<dyn Phraser>` by the host process, which owns the client's lifecycle.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use tracing::{debug, info};
use uuid::Uuid;

use crate::converse::{self, Sampling};
use crate::error::PhrasingError;
use crate::prompt;
use crate::tone;

/// Produces a short reflect-and-ask utterance: one sentence mirroring
/// `user_text`, then a paraphrase of `next_question`.
#[async_trait]
pub trait Phraser: Send + Sync {
    async fn reflect_and_ask(
        &self,
        user_text: &str,
        next_question: &str,
    ) -> Result<String, PhrasingError>;
}

/// Phrases through a Bedrock chat model.
pub struct BedrockPhraser {
    client: Client,
    model_id: String,
    sampling: Sampling,
}

impl BedrockPhraser {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
            sampling: Sampling::default(),
        }
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl Phraser for BedrockPhraser {
    async fn reflect_and_ask(
        &self,
        user_text: &str,
        next_question: &str,
    ) -> Result<String, PhrasingError> {
        let request_id = Uuid::new_v4();
        info!(request_id = %request_id, model = %self.model_id, "phrasing request");

        let tone_hint = tone::pick_tone();
        let message = prompt::build_phrasing_prompt(user_text, next_question, &tone_hint);
        let reply =
            converse::converse_once(&self.client, &self.model_id, &message, self.sampling).await?;

        let utterance = prompt::clean_reply(&reply).ok_or(PhrasingError::EmptyResponse)?;
        debug!(request_id = %request_id, chars = utterance.len(), "phrasing reply received");
        Ok(utterance)
    }
}

/// Offline phrasing: a tone phrase followed by the literal question. Never
/// fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedPhraser;

#[async_trait]
impl Phraser for CannedPhraser {
    async fn reflect_and_ask(
        &self,
        _user_text: &str,
        next_question: &str,
    ) -> Result<String, PhrasingError> {
        Ok(tone::fallback_phrasing(next_question))
    }
}
