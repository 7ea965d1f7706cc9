// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Combines host and port into a `host:port` address.
///
/// Hosts containing a colon (IPv6 literals, optionally with a zone) are
/// enclosed in square brackets: `("::1", 3306)` becomes `[::1]:3306`.
pub fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// Inverse of [`join_host_port`]
pub fn split_host_port(addr: &str) -> Result<(&str, u16), InvalidAddressError> {
    let invalid = |reason: &'static str| InvalidAddressError {
        addr: addr.to_string(),
        reason,
    };

    let (host, port) = if let Some(rest) = addr.strip_prefix('[') {
        let (host, rest) = rest
            .split_once(']')
            .ok_or_else(|| invalid("missing ']' in address"))?;
        let port = rest
            .strip_prefix(':')
            .ok_or_else(|| invalid("missing port in address"))?;
        (host, port)
    } else {
        let (host, port) = addr
            .rsplit_once(':')
            .ok_or_else(|| invalid("missing port in address"))?;
        if host.contains(':') {
            return Err(invalid("too many colons in address"));
        }
        (host, port)
    };

    let port = port
        .parse::<u16>()
        .map_err(|_| invalid("invalid port in address"))?;

    Ok((host, port))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
#[error("Address {addr}: {reason}")]
pub struct InvalidAddressError {
    pub addr: String,
    pub reason: &'static str,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
