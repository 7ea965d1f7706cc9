// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use aws_sdk_secretsmanager::Client;
use secrecy::SecretString;

use crate::SecretRequestError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Anything able to resolve a secret identifier into its string payload
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait DatabaseSecretSource: Send + Sync {
    async fn get_secret_string(&self, secret_id: &str) -> Result<SecretString, SecretRequestError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl DatabaseSecretSource for Client {
    #[tracing::instrument(level = "debug", skip_all, fields(%secret_id))]
    async fn get_secret_string(&self, secret_id: &str) -> Result<SecretString, SecretRequestError> {
        let response = self.get_secret_value().secret_id(secret_id).send().await?;

        match response.secret_string() {
            Some(secret_string) => Ok(SecretString::from(secret_string.to_string())),
            None => Err(SecretRequestError::NoSecretString {
                secret_id: secret_id.to_string(),
            }),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
