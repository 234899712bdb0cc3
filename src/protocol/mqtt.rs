// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MQTT publisher.
//!
//! A publish-only broker connection. The bridge never subscribes to
//! anything; it pushes one retained message per detected state change.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};
use tokio::sync::oneshot;

use crate::error::ProtocolError;

/// Distinguishes client ids when several publishers share a process
/// (integration tests run them in parallel).
static CLIENT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Connection settings for the publisher.
#[derive(Debug, Clone)]
struct MqttPublisherConfig {
    host: String,
    port: u16,
    credentials: Option<(String, String)>,
    keep_alive: Duration,
    connection_timeout: Duration,
}

impl Default for MqttPublisherConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 1883,
            credentials: None,
            keep_alive: Duration::from_secs(30),
            connection_timeout: Duration::from_secs(10),
        }
    }
}

/// A connection to an MQTT broker for publishing retained state.
///
/// Cheaply cloneable (via `Arc`). A background task drives the rumqttc
/// event loop and mirrors the session state into a connected flag; once the
/// connection is observed lost, publish attempts fail instead of queueing
/// silently, so the caller sees broker loss as a publish failure.
///
/// # Examples
///
/// ```no_run
/// use cec2mqtt::protocol::MqttPublisher;
///
/// # async fn example() -> cec2mqtt::Result<()> {
/// let publisher = MqttPublisher::builder()
///     .host("192.168.1.50")
///     .port(1883)
///     .build()
///     .await?;
///
/// publisher
///     .publish_retained("media/tv/state", r#"{"power_state":"on","hdmi_input":1}"#)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MqttPublisher {
    inner: Arc<MqttPublisherInner>,
}

struct MqttPublisherInner {
    client: AsyncClient,
    config: MqttPublisherConfig,
    connected: AtomicBool,
}

impl MqttPublisher {
    /// Creates a new builder for configuring the publisher.
    #[must_use]
    pub fn builder() -> MqttPublisherBuilder {
        MqttPublisherBuilder::default()
    }

    /// Returns whether the broker connection is currently up.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.inner.connected.load(Ordering::Acquire)
    }

    /// Returns the broker host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.inner.config.host
    }

    /// Returns the broker port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.inner.config.port
    }

    /// Publishes a retained message at QoS at-least-once.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::ConnectionFailed` if the broker connection
    /// has been lost, or `ProtocolError::Mqtt` if the publish cannot be
    /// handed to the client.
    pub async fn publish_retained(
        &self,
        topic: &str,
        payload: impl Into<String>,
    ) -> Result<(), ProtocolError> {
        if !self.is_connected() {
            return Err(ProtocolError::ConnectionFailed(
                "MQTT broker connection lost".to_string(),
            ));
        }

        let payload = payload.into();
        tracing::debug!(topic = %topic, payload = %payload, "publishing retained message");

        self.inner
            .client
            .publish(topic, QoS::AtLeastOnce, true, payload)
            .await
            .map_err(ProtocolError::Mqtt)
    }

    /// Disconnects from the broker.
    ///
    /// # Errors
    ///
    /// Returns error if the disconnect operation fails.
    pub async fn disconnect(&self) -> Result<(), ProtocolError> {
        tracing::info!(host = %self.host(), port = %self.port(), "disconnecting from MQTT broker");

        self.inner
            .client
            .disconnect()
            .await
            .map_err(ProtocolError::Mqtt)?;

        self.inner.connected.store(false, Ordering::Release);
        Ok(())
    }
}

impl std::fmt::Debug for MqttPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MqttPublisher")
            .field("host", &self.host())
            .field("port", &self.port())
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// Builder for the MQTT publisher.
#[derive(Debug, Default)]
pub struct MqttPublisherBuilder {
    config: MqttPublisherConfig,
}

impl MqttPublisherBuilder {
    /// Sets the broker host name or address.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Sets the broker port (default 1883).
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Sets the username and password presented to the broker.
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.config.credentials = Some((username.into(), password.into()));
        self
    }

    /// Sets the keep-alive interval (default 30 seconds).
    #[must_use]
    pub fn keep_alive(mut self, duration: Duration) -> Self {
        self.config.keep_alive = duration;
        self
    }

    /// Sets how long to wait for the broker to accept the session
    /// (default 10 seconds).
    #[must_use]
    pub fn connection_timeout(mut self, duration: Duration) -> Self {
        self.config.connection_timeout = duration;
        self
    }

    /// Connects to the broker and returns the publisher.
    ///
    /// The publisher is only handed back once the broker has acknowledged
    /// the session.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::ConnectionFailed` if no host was configured
    /// or the connection dies during the handshake, and
    /// `ProtocolError::Timeout` if the broker does not acknowledge within
    /// the configured timeout.
    pub async fn build(self) -> Result<MqttPublisher, ProtocolError> {
        if self.config.host.is_empty() {
            return Err(ProtocolError::ConnectionFailed(
                "MQTT broker host is required".to_string(),
            ));
        }

        let sequence = CLIENT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        let client_id = format!("cec2mqtt_{}_{sequence}", std::process::id());

        let mut options = MqttOptions::new(&client_id, &self.config.host, self.config.port);
        options.set_keep_alive(self.config.keep_alive);
        options.set_clean_session(true);
        if let Some((ref username, ref password)) = self.config.credentials {
            options.set_credentials(username, password);
        }

        // Capacity 10 is generous; the bridge publishes one message per
        // state change.
        let (client, event_loop) = AsyncClient::new(options, 10);

        let timeout = self.config.connection_timeout;
        let publisher = MqttPublisher {
            inner: Arc::new(MqttPublisherInner {
                client,
                config: self.config,
                connected: AtomicBool::new(false),
            }),
        };

        // The event loop task reports the first ConnAck back; until then
        // the session is not usable.
        let (connack_tx, connack_rx) = oneshot::channel();
        tokio::spawn(drive_connection(event_loop, publisher.clone(), connack_tx));

        match tokio::time::timeout(timeout, connack_rx).await {
            Ok(Ok(())) => {
                tracing::info!(
                    host = %publisher.host(),
                    port = %publisher.port(),
                    "connected to MQTT broker"
                );
                Ok(publisher)
            }
            Ok(Err(_)) => Err(ProtocolError::ConnectionFailed(
                "MQTT event loop terminated before the broker accepted the session".to_string(),
            )),
            Err(_) => Err(ProtocolError::Timeout(timeout.as_secs())),
        }
    }
}

/// Drives the rumqttc event loop and mirrors the session state into the
/// publisher's connected flag.
async fn drive_connection(
    mut event_loop: EventLoop,
    publisher: MqttPublisher,
    connack_tx: oneshot::Sender<()>,
) {
    let mut connack_tx = Some(connack_tx);

    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                publisher.inner.connected.store(true, Ordering::Release);
                if let Some(tx) = connack_tx.take() {
                    let _ = tx.send(());
                }
            }
            Ok(Event::Incoming(Packet::PubAck(puback))) => {
                tracing::trace!(?puback, "publish acknowledged");
            }
            Ok(Event::Incoming(Packet::Disconnect)) => {
                tracing::info!("MQTT broker closed the connection");
                publisher.inner.connected.store(false, Ordering::Release);
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "MQTT connection lost");
                publisher.inner.connected.store(false, Ordering::Release);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = MqttPublisherBuilder::default().config;
        assert!(config.host.is_empty());
        assert_eq!(config.port, 1883);
        assert!(config.credentials.is_none());
        assert_eq!(config.keep_alive, Duration::from_secs(30));
        assert_eq!(config.connection_timeout, Duration::from_secs(10));
    }

    #[test]
    fn builder_overrides_every_setting() {
        let config = MqttPublisherBuilder::default()
            .host("broker.local")
            .port(8883)
            .credentials("bridge", "secret")
            .keep_alive(Duration::from_secs(45))
            .connection_timeout(Duration::from_secs(2))
            .config;

        assert_eq!(config.host, "broker.local");
        assert_eq!(config.port, 8883);
        assert_eq!(
            config.credentials,
            Some(("bridge".to_string(), "secret".to_string()))
        );
        assert_eq!(config.keep_alive, Duration::from_secs(45));
        assert_eq!(config.connection_timeout, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn build_without_host_is_rejected() {
        let err = MqttPublisherBuilder::default()
            .build()
            .await
            .expect_err("host is required");
        assert!(matches!(err, ProtocolError::ConnectionFailed(_)));
    }
}
