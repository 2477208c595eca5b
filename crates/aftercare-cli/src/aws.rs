use std::sync::Arc;

use aftercare_bedrock::phrasing::{BedrockPhraser, CannedPhraser, Phraser};
use aws_sdk_bedrockruntime::config::Credentials;
use tracing::info;

use crate::config::{AftercareConfig, CredentialSource, PhrasingBackend};

/// Build an `SdkConfig` from a region and credential source.
pub async fn build_aws_config(region: &str, creds: &CredentialSource) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    match creds {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                session_token.clone(),
                None,
                "aftercare-config",
            ));
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
        CredentialSource::DefaultChain => {}
    }

    builder.load().await
}

/// Build the phraser the engine will use. The host owns it for the life of
/// the process.
pub async fn build_phraser(config: &AftercareConfig) -> Arc<dyn Phraser> {
    match &config.phrasing {
        PhrasingBackend::Canned => {
            info!("using canned phrasing");
            Arc::new(CannedPhraser)
        }
        PhrasingBackend::Bedrock { model_id } => {
            let sdk_config = build_aws_config(&config.region, &config.credentials).await;
            info!(model = %model_id, region = %config.region, "using bedrock phrasing");
            Arc::new(BedrockPhraser::new(&sdk_config, model_id.clone()))
        }
    }
}
