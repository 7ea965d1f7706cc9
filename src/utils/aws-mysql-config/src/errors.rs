// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use aws_sdk_secretsmanager::error::SdkError;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum AwsMySqlConfigError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Request(#[from] SecretRequestError),

    #[error(transparent)]
    Decode(#[from] SecretDecodeError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Ambient AWS configuration could not be resolved
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("AWS region could not be resolved from the environment")]
    MissingRegion,

    #[error("AWS credentials provider could not be resolved from the environment")]
    MissingCredentialsProvider,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum SecretRequestError {
    #[error(transparent)]
    Service(Box<SdkError<GetSecretValueError>>),

    #[error("AWS secret {secret_id} has no string value")]
    NoSecretString { secret_id: String },
}

impl SecretRequestError {
    pub fn is_not_found(&self) -> bool {
        self.service_error()
            .is_some_and(GetSecretValueError::is_resource_not_found_exception)
    }

    pub fn is_access_denied(&self) -> bool {
        use aws_sdk_secretsmanager::error::ProvideErrorMetadata;

        self.service_error()
            .is_some_and(|e| e.code() == Some("AccessDeniedException"))
    }

    fn service_error(&self) -> Option<&GetSecretValueError> {
        match self {
            Self::Service(e) => e.as_service_error(),
            Self::NoSecretString { .. } => None,
        }
    }
}

impl From<SdkError<GetSecretValueError>> for SecretRequestError {
    fn from(value: SdkError<GetSecretValueError>) -> Self {
        Self::Service(Box::new(value))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum SecretDecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Database secret has an empty host")]
    EmptyHost,

    #[error("Database secret has a zero port")]
    ZeroPort,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
