// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use aws_mysql_config::{DatabaseSecretRecord, SecretDecodeError};
use pretty_assertions::{assert_eq, assert_matches};
use secrecy::ExposeSecret;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_decode_rds_managed_secret() {
    let record = DatabaseSecretRecord::from_json(
        r#"{
            "engine": "mysql",
            "host": "prod-db.cluster-abc.eu-west-1.rds.amazonaws.com",
            "username": "admin",
            "password": "s3cr3t",
            "dbname": "ignored",
            "port": 3306,
            "dbInstanceIdentifier": "prod-db"
        }"#,
    )
    .unwrap();

    assert_eq!("admin", record.username);
    assert_eq!("s3cr3t", record.password.expose_secret());
    assert_eq!(
        "prod-db.cluster-abc.eu-west-1.rds.amazonaws.com",
        record.host
    );
    assert_eq!(3306, record.port);
}

#[test]
fn test_decode_allows_empty_password() {
    let record = DatabaseSecretRecord::from_json(
        r#"{"username": "root", "password": "", "host": "localhost", "port": 3306}"#,
    )
    .unwrap();

    assert_eq!("", record.password.expose_secret());
}

#[test]
fn test_decode_malformed_payload() {
    for payload in [
        "not valid json",
        "",
        "[]",
        r#"{"username": "root", "password": "pw", "host": "localhost", "port": "3306"}"#,
        r#"{"username": 1, "password": "pw", "host": "localhost", "port": 3306}"#,
        r#"{"username": "root", "password": "pw", "host": "localhost", "port": -1}"#,
        r#"{"username": "root", "password": "pw", "host": "localhost", "port": 65536}"#,
    ] {
        assert_matches!(
            DatabaseSecretRecord::from_json(payload),
            Err(SecretDecodeError::Json(_)),
            "{payload}"
        );
    }
}

#[test]
fn test_decode_missing_fields() {
    for (payload, missing_field) in [
        (
            r#"{"password": "pw", "host": "localhost", "port": 3306}"#,
            "username",
        ),
        (
            r#"{"username": "root", "host": "localhost", "port": 3306}"#,
            "password",
        ),
        (
            r#"{"username": "root", "password": "pw", "port": 3306}"#,
            "host",
        ),
        (
            r#"{"username": "root", "password": "pw", "host": "localhost"}"#,
            "port",
        ),
    ] {
        let err = DatabaseSecretRecord::from_json(payload).unwrap_err();
        assert!(
            err.to_string()
                .contains(&format!("missing field `{missing_field}`")),
            "{err}"
        );
    }
}

#[test]
fn test_decode_rejects_zero_port() {
    assert_matches!(
        DatabaseSecretRecord::from_json(
            r#"{"username": "root", "password": "pw", "host": "localhost", "port": 0}"#,
        ),
        Err(SecretDecodeError::ZeroPort)
    );
}

#[test]
fn test_decode_rejects_empty_host() {
    assert_matches!(
        DatabaseSecretRecord::from_json(
            r#"{"username": "root", "password": "pw", "host": "", "port": 3306}"#,
        ),
        Err(SecretDecodeError::EmptyHost)
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
