// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use aws_config::{Region, SdkConfig};
use aws_credential_types::Credentials;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_mysql_config::{
    SecretsManagerSettings,
    SessionError,
    load_secrets_manager_client,
    validate_sdk_config,
};
use pretty_assertions::{assert_eq, assert_matches};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn static_credentials() -> SharedCredentialsProvider {
    SharedCredentialsProvider::new(Credentials::new(
        "AKIDEXAMPLE",
        "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
        None,
        None,
        "test",
    ))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_validate_missing_region() {
    let sdk_config = SdkConfig::builder()
        .credentials_provider(static_credentials())
        .build();

    assert_matches!(
        validate_sdk_config(&sdk_config),
        Err(SessionError::MissingRegion)
    );
}

#[test]
fn test_validate_missing_credentials_provider() {
    let sdk_config = SdkConfig::builder()
        .region(Region::new("eu-west-1"))
        .build();

    assert_matches!(
        validate_sdk_config(&sdk_config),
        Err(SessionError::MissingCredentialsProvider)
    );
}

#[test]
fn test_validate_complete_config() {
    let sdk_config = SdkConfig::builder()
        .region(Region::new("eu-west-1"))
        .credentials_provider(static_credentials())
        .build();

    assert_matches!(validate_sdk_config(&sdk_config), Ok(()));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_client_with_overrides() {
    let settings = SecretsManagerSettings {
        region: Some("eu-west-1".to_string()),
        endpoint_url: Some("http://localhost:4566".to_string()),
        profile_name: None,
        operation_timeout_secs: Some(5),
        credentials_provider: Some(static_credentials()),
    };

    let client = load_secrets_manager_client(&settings).await.unwrap();

    assert_eq!(
        Some(&Region::new("eu-west-1")),
        client.config().region()
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_settings_deserialize() {
    let settings: SecretsManagerSettings = serde_json::from_str(
        r#"{"region": "us-east-1", "operation_timeout_secs": 10}"#,
    )
    .unwrap();

    assert_eq!(Some("us-east-1"), settings.region.as_deref());
    assert_eq!(None, settings.endpoint_url);
    assert_eq!(None, settings.profile_name);
    assert_eq!(Some(Duration::from_secs(10)), settings.operation_timeout());
    assert!(settings.credentials_provider.is_none());
}

#[test]
fn test_settings_deserialize_empty() {
    let settings: SecretsManagerSettings = serde_json::from_str("{}").unwrap();

    assert_eq!(None, settings.region);
    assert_eq!(None, settings.operation_timeout());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
