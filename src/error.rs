// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `cec2mqtt` bridge.
//!
//! This module provides the error hierarchy for failures across the bridge:
//! value validation, startup configuration, and protocol communication.
//! The state-inference core itself never fails; everything here belongs to
//! the boundary around it.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A constrained value was rejected.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error in the process configuration, detected before any connection.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error occurred while talking to the broker or the bus adapter.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while serializing a state snapshot.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O error from the surrounding runtime (signal registration).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when constructing constrained value types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value does not fit the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },
}

/// Errors in the startup configuration surface.
///
/// All of these are fatal: the process exits before any broker or bus
/// connection is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The MQTT broker host is missing or empty.
    #[error("MQTT broker host is required")]
    MissingBrokerHost,

    /// The MQTT topic is missing or empty.
    #[error("MQTT topic is required")]
    MissingTopic,

    /// The broker port is outside the accepted range.
    #[error("port {0} is out of range [1025, 65535]")]
    PortOutOfRange(u16),

    /// TLS was requested but is not implemented.
    #[error("TLS support is not implemented")]
    TlsUnsupported,
}

/// Errors related to protocol communication (MQTT broker, CEC adapter).
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The MQTT client rejected an operation.
    #[cfg(feature = "mqtt")]
    #[error("MQTT error: {0}")]
    Mqtt(#[from] rumqttc::ClientError),

    /// Connection to the broker failed or was lost.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Connection attempt timed out.
    #[error("connection timed out after {0} s")]
    Timeout(u64),

    /// The CEC adapter could not be opened.
    #[error("CEC adapter unavailable: {0}")]
    BusUnavailable(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
