// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::ExposeSecret;

use crate::{
    AwsMySqlConfigError,
    DatabaseSecretRecord,
    DatabaseSecretSource,
    MySqlConfig,
    SecretsManagerSettings,
    Transport,
    join_host_port,
    load_secrets_manager_client,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Creates a Secrets Manager client from the ambient AWS configuration and
/// fetches `MySQL` credentials from the given secret
pub async fn load_mysql_config(
    settings: &SecretsManagerSettings,
    secret_id: &str,
) -> Result<MySqlConfig, AwsMySqlConfigError> {
    let client = load_secrets_manager_client(settings).await?;
    mysql_config_from_secrets(&client, secret_id).await
}

/// Fetches `MySQL` credentials from the given secret using an existing client.
///
/// Only transport, address, user and password are populated; all other
/// settings keep their defaults.
#[tracing::instrument(level = "debug", skip_all, fields(%secret_id))]
pub async fn mysql_config_from_secrets<S>(
    source: &S,
    secret_id: &str,
) -> Result<MySqlConfig, AwsMySqlConfigError>
where
    S: DatabaseSecretSource + ?Sized,
{
    let payload = source.get_secret_string(secret_id).await?;
    let record = DatabaseSecretRecord::from_json(payload.expose_secret())?;

    tracing::debug!(
        host = %record.host,
        port = record.port,
        user = %record.username,
        "Decoded database secret"
    );

    let mut config = MySqlConfig::new();
    config.net = Transport::Tcp;
    config.addr = join_host_port(&record.host, record.port);
    config.user = record.username;
    config.passwd = record.password;

    Ok(config)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
