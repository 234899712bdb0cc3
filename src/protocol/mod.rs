// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broker-side protocol implementation.
//!
//! The bridge's only outbound surface: a fire-and-forget MQTT publisher
//! with retained messages, so late subscribers immediately see the
//! last-known TV state.

#[cfg(feature = "mqtt")]
mod mqtt;

#[cfg(feature = "mqtt")]
pub use mqtt::{MqttPublisher, MqttPublisherBuilder};
