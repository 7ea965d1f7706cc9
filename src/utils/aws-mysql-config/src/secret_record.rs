// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::SecretString;
use serde::Deserialize;

use crate::SecretDecodeError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Credentials decoded from the JSON payload of a database secret.
///
/// The payload layout matches the one AWS uses for RDS-managed secrets.
/// All four keys are required. Unknown keys such as `engine` or `dbname` are
/// ignored.
#[derive(Debug, Clone)]
pub struct DatabaseSecretRecord {
    pub username: String,
    pub password: SecretString,
    pub host: String,
    pub port: u16,
}

impl DatabaseSecretRecord {
    pub fn from_json(payload: &str) -> Result<Self, SecretDecodeError> {
        let raw: RawDatabaseSecret = serde_json::from_str(payload)?;

        if raw.host.is_empty() {
            return Err(SecretDecodeError::EmptyHost);
        }
        if raw.port == 0 {
            return Err(SecretDecodeError::ZeroPort);
        }

        Ok(Self {
            username: raw.username,
            password: SecretString::from(raw.password),
            host: raw.host,
            port: raw.port,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Deserialize)]
struct RawDatabaseSecret {
    username: String,
    password: String,
    host: String,
    port: u16,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
