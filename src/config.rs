// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Process configuration surface.
//!
//! Validation runs before any broker or bus connection is attempted;
//! violations are fatal at startup.

use clap::Parser;

use crate::error::ConfigError;

/// Default MQTT broker port.
pub const DEFAULT_MQTT_PORT: u16 = 1883;

/// Lowest accepted broker port; the well-known range is rejected.
pub const MIN_MQTT_PORT: u16 = 1025;

/// Bridge configuration.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use cec2mqtt::config::BridgeConfig;
///
/// let config = BridgeConfig::parse_from([
///     "cec2mqtt",
///     "--host", "192.168.1.50",
///     "--topic", "media/tv/state",
/// ]);
///
/// assert_eq!(config.port, 1883);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "cec2mqtt", version, about)]
pub struct BridgeConfig {
    /// MQTT broker hostname or IP address.
    #[arg(long)]
    pub host: String,

    /// MQTT broker port.
    #[arg(long, default_value_t = DEFAULT_MQTT_PORT)]
    pub port: u16,

    /// Topic the TV state is published to.
    #[arg(long)]
    pub topic: String,

    /// MQTT username.
    #[arg(long, requires = "password")]
    pub username: Option<String>,

    /// MQTT password.
    #[arg(long, requires = "username")]
    pub password: Option<String>,

    /// CEC adapter port (e.g. "RPI"); autodetected when omitted.
    #[arg(long)]
    pub adapter: Option<String>,

    /// OSD name announced on the CEC bus.
    #[arg(long, default_value = "cec2mqtt")]
    pub device_name: String,

    /// Connect to the broker over TLS (not yet implemented).
    #[arg(long)]
    pub tls: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub debug: bool,
}

impl BridgeConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or topic is empty, the port is
    /// below the accepted range, or TLS is requested.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingBrokerHost);
        }
        if self.topic.trim().is_empty() {
            return Err(ConfigError::MissingTopic);
        }
        if self.port < MIN_MQTT_PORT {
            return Err(ConfigError::PortOutOfRange(self.port));
        }
        if self.tls {
            return Err(ConfigError::TlsUnsupported);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> BridgeConfig {
        let mut full = vec!["cec2mqtt"];
        full.extend_from_slice(args);
        BridgeConfig::parse_from(full)
    }

    #[test]
    fn minimal_configuration_is_valid() {
        let config = parse(&["--host", "broker.local", "--topic", "media/tv/state"]);
        assert_eq!(config.port, DEFAULT_MQTT_PORT);
        assert_eq!(config.device_name, "cec2mqtt");
        assert!(config.adapter.is_none());
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_required_flags_fail_to_parse() {
        let result = BridgeConfig::try_parse_from(["cec2mqtt", "--host", "broker.local"]);
        assert!(result.is_err());

        let result = BridgeConfig::try_parse_from(["cec2mqtt", "--topic", "media/tv/state"]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_host_is_rejected() {
        let config = parse(&["--host", "", "--topic", "media/tv/state"]);
        assert_eq!(config.validate(), Err(ConfigError::MissingBrokerHost));
    }

    #[test]
    fn empty_topic_is_rejected() {
        let config = parse(&["--host", "broker.local", "--topic", ""]);
        assert_eq!(config.validate(), Err(ConfigError::MissingTopic));
    }

    #[test]
    fn well_known_port_is_rejected() {
        let config = parse(&[
            "--host",
            "broker.local",
            "--topic",
            "media/tv/state",
            "--port",
            "80",
        ]);
        assert_eq!(config.validate(), Err(ConfigError::PortOutOfRange(80)));
    }

    #[test]
    fn port_range_boundaries() {
        let config = parse(&[
            "--host",
            "broker.local",
            "--topic",
            "media/tv/state",
            "--port",
            "1025",
        ]);
        assert!(config.validate().is_ok());

        let config = parse(&[
            "--host",
            "broker.local",
            "--topic",
            "media/tv/state",
            "--port",
            "65535",
        ]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn tls_is_recognized_but_rejected() {
        let config = parse(&["--host", "broker.local", "--topic", "media/tv/state", "--tls"]);
        assert_eq!(config.validate(), Err(ConfigError::TlsUnsupported));
    }

    #[test]
    fn username_requires_password() {
        let result = BridgeConfig::try_parse_from([
            "cec2mqtt",
            "--host",
            "broker.local",
            "--topic",
            "media/tv/state",
            "--username",
            "user",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn credentials_parse_together() {
        let config = parse(&[
            "--host",
            "broker.local",
            "--topic",
            "media/tv/state",
            "--username",
            "user",
            "--password",
            "secret",
        ]);
        assert_eq!(config.username.as_deref(), Some("user"));
        assert_eq!(config.password.as_deref(), Some("secret"));
    }
}
