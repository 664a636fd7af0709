use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Server
// =========================================================================

#[test]
#[serial]
fn given_port_below_1024_when_validate_then_error() {
    // Given
    let _fixture = setup_config_dir();
    let _port = EnvGuard::set("LB_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_port_1024_when_validate_then_ok() {
    // Given
    let _fixture = setup_config_dir();
    let _port = EnvGuard::set("LB_SERVER_PORT", "1024");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given - port 0 means OS auto-assign
    let _fixture = setup_config_dir();
    let _port = EnvGuard::set("PORT", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_unparseable_port_when_load_then_default_kept() {
    // Given
    let _fixture = setup_config_dir();
    let _port = EnvGuard::set("PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.server.port, crate::DEFAULT_PORT);
}
