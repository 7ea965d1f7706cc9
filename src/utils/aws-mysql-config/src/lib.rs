// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Shortcut functions that fetch `MySQL` credentials from an AWS Secrets
//! Manager secret and turn them into a [`MySqlConfig`].
//!
//! ```ignore
//! let mut cfg = aws_mysql_config::load_mysql_config(
//!     &SecretsManagerSettings::default(),
//!     "production/dbhost",
//! )
//! .await?;
//!
//! // Adjust the rest of the settings before connecting
//! cfg.db_name = "data".to_string();
//!
//! let pool = sqlx::MySqlPool::connect_lazy_with(cfg.connect_options()?);
//! ```

mod errors;
mod fetcher;
mod host_port;
mod mysql_config;
mod secret_record;
mod secret_source;
mod session;

pub use errors::*;
pub use fetcher::*;
pub use host_port::*;
pub use mysql_config::*;
pub use secret_record::*;
pub use secret_source::*;
pub use session::*;
