// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use aws_config::meta::region::RegionProviderChain;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_sdk_secretsmanager::Client;
use serde::Deserialize;

use crate::SessionError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Overrides applied on top of the ambient AWS configuration.
///
/// Every field is optional: an empty value keeps whatever the standard
/// discovery chain (environment, shared config files, instance metadata)
/// resolves.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecretsManagerSettings {
    pub region: Option<String>,
    /// Custom endpoint, e.g. a local Secrets Manager emulator
    pub endpoint_url: Option<String>,
    /// Named profile from the shared config files
    pub profile_name: Option<String>,
    /// Deadline for a whole `GetSecretValue` call, retries included
    pub operation_timeout_secs: Option<u64>,
    #[serde(skip)]
    pub credentials_provider: Option<SharedCredentialsProvider>,
}

impl SecretsManagerSettings {
    pub fn operation_timeout(&self) -> Option<Duration> {
        self.operation_timeout_secs.map(Duration::from_secs)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves ambient AWS configuration and creates a Secrets Manager client.
///
/// No request is sent to Secrets Manager. The returned client is cheap to
/// clone and should be reused across [`crate::mysql_config_from_secrets`]
/// calls.
#[tracing::instrument(level = "debug", skip_all)]
pub async fn load_secrets_manager_client(
    settings: &SecretsManagerSettings,
) -> Result<Client, SessionError> {
    let region_provider =
        RegionProviderChain::first_try(settings.region.clone().map(Region::new))
            .or_default_provider();

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);

    if let Some(endpoint_url) = &settings.endpoint_url {
        loader = loader.endpoint_url(endpoint_url.clone());
    }
    if let Some(profile_name) = &settings.profile_name {
        loader = loader.profile_name(profile_name.clone());
    }
    if let Some(operation_timeout) = settings.operation_timeout() {
        loader = loader.timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(operation_timeout)
                .build(),
        );
    }
    if let Some(credentials_provider) = &settings.credentials_provider {
        loader = loader.credentials_provider(credentials_provider.clone());
    }

    let sdk_config = loader.load().await;
    validate_sdk_config(&sdk_config)?;

    tracing::debug!(
        region = ?sdk_config.region(),
        endpoint_url = ?sdk_config.endpoint_url(),
        "Secrets Manager client configured"
    );

    Ok(Client::new(&sdk_config))
}

pub fn validate_sdk_config(sdk_config: &SdkConfig) -> Result<(), SessionError> {
    if sdk_config.region().is_none() {
        return Err(SessionError::MissingRegion);
    }
    if sdk_config.credentials_provider().is_none() {
        return Err(SessionError::MissingCredentialsProvider);
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
