//! Single-turn Bedrock Converse invocation.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message,
};

use crate::error::PhrasingError;

/// Sampling settings for a converse call.
#[derive(Debug, Clone, Copy)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: i32,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            max_tokens: 200,
        }
    }
}

/// Send one user message and return the concatenated text of the reply.
pub async fn converse_once(
    client: &Client,
    model_id: &str,
    user_message: &str,
    sampling: Sampling,
) -> Result<String, PhrasingError> {
    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(user_message.to_string()))
        .build()
        .map_err(|e| PhrasingError::Invocation(e.to_string()))?;

    let inference = InferenceConfiguration::builder()
        .temperature(sampling.temperature)
        .max_tokens(sampling.max_tokens)
        .build();

    let response = client
        .converse()
        .model_id(model_id)
        .messages(message)
        .inference_config(inference)
        .send()
        .await
        .map_err(|e| PhrasingError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| PhrasingError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(response_text)
}
