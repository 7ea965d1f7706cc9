// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};
use url::Url;

use crate::{InvalidAddressError, split_host_port};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_MYSQL_CHARSET: &str = "utf8mb4";
pub const DEFAULT_MYSQL_TIME_ZONE: &str = "+00:00";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Connection settings for a `MySQL` database.
///
/// Only transport, address and credentials are filled in from a secret.
/// Everything else keeps driver defaults and is meant to be adjusted by the
/// caller before connecting.
#[derive(Debug, Clone)]
pub struct MySqlConfig {
    pub net: Transport,
    /// `host:port` for [`Transport::Tcp`], socket path for [`Transport::Unix`]
    pub addr: String,
    pub user: String,
    pub passwd: SecretString,
    /// Empty means no default database is selected on connect
    pub db_name: String,
    pub charset: String,
    pub collation: Option<String>,
    /// Session `time_zone`, `None` keeps the server setting
    pub time_zone: Option<String>,
    pub tls_mode: TlsMode,
    pub tls_ca: Option<PathBuf>,
}

impl MySqlConfig {
    pub fn new() -> Self {
        Self {
            net: Transport::Tcp,
            addr: String::new(),
            user: String::new(),
            passwd: SecretString::from(String::new()),
            db_name: String::new(),
            charset: DEFAULT_MYSQL_CHARSET.to_string(),
            collation: None,
            time_zone: Some(DEFAULT_MYSQL_TIME_ZONE.to_string()),
            tls_mode: TlsMode::default(),
            tls_ca: None,
        }
    }

    pub fn connect_options(&self) -> Result<MySqlConnectOptions, InvalidAddressError> {
        let mut options = match self.net {
            Transport::Tcp => {
                let (host, port) = split_host_port(&self.addr)?;
                MySqlConnectOptions::new().host(host).port(port)
            }
            Transport::Unix => MySqlConnectOptions::new().socket(&self.addr),
        };

        options = options
            .username(&self.user)
            .charset(&self.charset)
            .timezone(self.time_zone.clone())
            .ssl_mode(self.tls_mode.into());

        let password = self.passwd.expose_secret();
        if !password.is_empty() {
            options = options.password(password);
        }
        if !self.db_name.is_empty() {
            options = options.database(&self.db_name);
        }
        if let Some(collation) = &self.collation {
            options = options.collation(collation);
        }
        if let Some(tls_ca) = &self.tls_ca {
            options = options.ssl_ca(tls_ca);
        }

        Ok(options)
    }

    /// Renders the settings as a `mysql://` URL understood by the driver.
    ///
    /// IPv6 hosts with a zone (`fe80::1%eth0`) have no URL form and are
    /// rejected; use [`Self::connect_options`] for them.
    pub fn connection_string(&self) -> Result<SecretString, InvalidAddressError> {
        let invalid = |reason: &'static str| InvalidAddressError {
            addr: self.addr.clone(),
            reason,
        };

        let mut url = match self.net {
            Transport::Tcp => {
                let (host, _) = split_host_port(&self.addr)?;
                if host.contains('%') {
                    return Err(invalid("zoned IPv6 host cannot be used in a URL"));
                }
                Url::parse(&format!("mysql://{}", self.addr))
                    .map_err(|_| invalid("address is not a valid URL authority"))?
            }
            Transport::Unix => {
                let mut url = Url::parse("mysql://localhost")
                    .map_err(|_| invalid("address is not a valid URL authority"))?;
                url.query_pairs_mut().append_pair("socket", &self.addr);
                url
            }
        };

        url.set_username(&self.user)
            .map_err(|()| invalid("URL cannot carry credentials"))?;

        let password = self.passwd.expose_secret();
        if !password.is_empty() {
            url.set_password(Some(password))
                .map_err(|()| invalid("URL cannot carry credentials"))?;
        }

        url.set_path(&self.db_name);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("ssl-mode", self.tls_mode.as_str());
            query.append_pair("charset", &self.charset);
            if let Some(collation) = &self.collation {
                query.append_pair("collation", collation);
            }
            if let Some(time_zone) = &self.time_zone {
                query.append_pair("timezone", time_zone);
            }
            if let Some(tls_ca) = &self.tls_ca {
                query.append_pair("ssl-ca", &tls_ca.to_string_lossy());
            }
        }

        Ok(SecretString::from(String::from(url)))
    }
}

impl Default for MySqlConfig {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Tcp,
    Unix,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Unix => "unix",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    Disabled,
    #[default]
    Preferred,
    Required,
    VerifyCa,
    VerifyIdentity,
}

impl TlsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Preferred => "preferred",
            Self::Required => "required",
            Self::VerifyCa => "verify_ca",
            Self::VerifyIdentity => "verify_identity",
        }
    }
}

impl From<TlsMode> for MySqlSslMode {
    fn from(value: TlsMode) -> Self {
        match value {
            TlsMode::Disabled => MySqlSslMode::Disabled,
            TlsMode::Preferred => MySqlSslMode::Preferred,
            TlsMode::Required => MySqlSslMode::Required,
            TlsMode::VerifyCa => MySqlSslMode::VerifyCa,
            TlsMode::VerifyIdentity => MySqlSslMode::VerifyIdentity,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
