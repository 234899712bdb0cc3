// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `cec2mqtt` - Publish TV power and input state from the HDMI-CEC bus to MQTT.
//!
//! This crate observes traffic on an HDMI-CEC bus and republishes a derived,
//! deduplicated TV-state snapshot (power status + active HDMI input) to an
//! MQTT broker whenever the state genuinely changes. It is a passive bridge:
//! it never drives the bus.
//!
//! # How it works
//!
//! - [`bus::BusCommand`] models one command event as delivered by the bus
//!   driver ([`bus::CecBus`] with the `cec` feature).
//! - [`classifier::fold`] decides whether a command carries power-status or
//!   input-routing information and folds it into [`state::TvState`].
//! - [`state::StateTracker`] compares snapshots before and after the fold
//!   and emits a [`state::StateChange`] exactly when they differ.
//! - [`bridge::Bridge`] serializes each change and hands it to
//!   [`protocol::MqttPublisher`] as a retained message, so late subscribers
//!   immediately see the last-known state.
//!
//! # Quick Start
//!
//! ## Tracking state from command events
//!
//! ```
//! use cec2mqtt::bus::BusCommand;
//! use cec2mqtt::state::StateTracker;
//! use cec2mqtt::types::{LogicalAddress, Opcode, PowerStatus};
//!
//! let mut tracker = StateTracker::new();
//!
//! let report = BusCommand::new(
//!     LogicalAddress::Tv,
//!     LogicalAddress::Broadcast,
//!     Opcode::ReportPowerStatus,
//!     [0x00],
//! );
//!
//! let change = tracker.observe(&report).expect("first report changes state");
//! assert_eq!(change.current().power_status(), PowerStatus::On);
//!
//! // The bus is noisy; identical re-announcements are suppressed.
//! assert!(tracker.observe(&report).is_none());
//! ```
//!
//! ## Running the full bridge
//!
//! ```ignore
//! use cec2mqtt::{Bridge, MqttPublisher};
//! use cec2mqtt::bus::CecBus;
//!
//! #[tokio::main]
//! async fn main() -> cec2mqtt::Result<()> {
//!     let publisher = MqttPublisher::builder()
//!         .host("192.168.1.50")
//!         .build()
//!         .await?;
//!
//!     let (_bus, mut commands) = CecBus::open(None, "cec2mqtt")?;
//!
//!     let mut bridge = Bridge::new(publisher, "media/tv/state");
//!     bridge.run(&mut commands).await
//! }
//! ```

#[cfg(feature = "mqtt")]
pub mod bridge;
pub mod bus;
pub mod classifier;
pub mod config;
pub mod error;
pub mod protocol;
pub mod state;
pub mod types;

#[cfg(feature = "mqtt")]
pub use bridge::Bridge;
pub use bus::BusCommand;
pub use config::BridgeConfig;
pub use error::{ConfigError, Error, ProtocolError, Result, ValueError};
#[cfg(feature = "mqtt")]
pub use protocol::{MqttPublisher, MqttPublisherBuilder};
pub use state::{StateChange, StateTracker, TvState};
pub use types::{HdmiInput, LogicalAddress, Opcode, PowerStatus};
