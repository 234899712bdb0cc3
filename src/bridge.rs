// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The observe-serialize-publish pipeline.

use tokio::sync::mpsc;

use crate::bus::BusCommand;
use crate::error::Result;
use crate::protocol::MqttPublisher;
use crate::state::{StateChange, StateTracker, TvState};

/// Connects the state tracker to the broker.
///
/// Every incoming command is folded into the tracked state; when (and only
/// when) the snapshot genuinely changes, the new state is serialized and
/// published retained under the configured topic.
///
/// Commands are handled to completion one at a time, so the tracked state
/// needs no locking.
#[derive(Debug)]
pub struct Bridge {
    tracker: StateTracker,
    publisher: MqttPublisher,
    topic: String,
}

impl Bridge {
    /// Creates a bridge publishing to the given topic.
    #[must_use]
    pub fn new(publisher: MqttPublisher, topic: impl Into<String>) -> Self {
        Self {
            tracker: StateTracker::new(),
            publisher,
            topic: topic.into(),
        }
    }

    /// Returns the topic state changes are published to.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the current state snapshot.
    #[must_use]
    pub fn state(&self) -> TvState {
        self.tracker.current()
    }

    /// Handles one command event, publishing if the state changed.
    ///
    /// # Errors
    ///
    /// Returns error if a detected change cannot be published. Publish
    /// failure is fatal by policy: the caller is expected to tear the
    /// process down and leave the restart to an external supervisor.
    pub async fn handle_command(&mut self, command: &BusCommand) -> Result<Option<StateChange>> {
        let Some(change) = self.tracker.observe(command) else {
            tracing::trace!(command = %command, "no state change");
            return Ok(None);
        };

        let payload = serde_json::to_string(change.current())?;
        self.publisher
            .publish_retained(&self.topic, payload)
            .await?;

        tracing::info!(
            previous = %change.previous(),
            current = %change.current(),
            topic = %self.topic,
            "tv state published"
        );

        Ok(Some(change))
    }

    /// Processes command events until the channel closes.
    ///
    /// The channel closes when the bus driver is dropped, which is how the
    /// shutdown path drains this loop.
    ///
    /// # Errors
    ///
    /// Returns the first publish failure.
    pub async fn run(&mut self, commands: &mut mpsc::UnboundedReceiver<BusCommand>) -> Result<()> {
        while let Some(command) = commands.recv().await {
            self.handle_command(&command).await?;
        }
        Ok(())
    }

    /// Shuts the bridge down, disconnecting from the broker.
    ///
    /// # Errors
    ///
    /// Returns error if the broker disconnect fails.
    pub async fn shutdown(self) -> Result<()> {
        self.publisher.disconnect().await?;
        Ok(())
    }
}
