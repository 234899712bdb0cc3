// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! libcec-backed bus driver.
//!
//! Opens a CEC adapter in a receive-only configuration and forwards every
//! decoded command event into a channel. libcec delivers callbacks serially
//! per connection, so channel order matches bus order.

use std::ffi::CString;

use cec_rs::{
    CecCommand, CecConnection, CecConnectionCfgBuilder, CecDeviceType, CecDeviceTypeVec,
    CecLogLevel, CecLogMessage,
};
use tokio::sync::mpsc;

use crate::bus::BusCommand;
use crate::error::{Error, ProtocolError};
use crate::types::{LogicalAddress, Opcode};

/// A connection to the CEC bus via libcec.
///
/// The bridge registers as a recording device and never activates itself
/// as a source, so it is invisible to normal input switching. Dropping the
/// bus closes the adapter and, by dropping the channel sender held by the
/// callbacks, ends the command stream.
///
/// # Examples
///
/// ```no_run
/// use cec2mqtt::bus::CecBus;
///
/// # fn example() -> cec2mqtt::Result<()> {
/// let (_bus, mut commands) = CecBus::open(Some("RPI"), "cec2mqtt")?;
/// while let Some(command) = commands.blocking_recv() {
///     println!("{command}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct CecBus {
    /// Held for the lifetime of the bus; closing happens on drop.
    _connection: CecConnection,
}

impl CecBus {
    /// Opens the CEC adapter and starts forwarding command events.
    ///
    /// # Arguments
    ///
    /// * `adapter` - The adapter port (e.g. `RPI`); autodetected when `None`
    /// * `device_name` - The OSD name announced on the bus
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::BusUnavailable` if no adapter can be opened.
    pub fn open(
        adapter: Option<&str>,
        device_name: &str,
    ) -> Result<(Self, mpsc::UnboundedReceiver<BusCommand>), Error> {
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let port = adapter
            .map(CString::new)
            .transpose()
            .map_err(|_| ProtocolError::BusUnavailable("invalid adapter port".to_string()))?;

        let mut cfg = CecConnectionCfgBuilder::default()
            .device_name(device_name.to_string())
            .device_types(CecDeviceTypeVec::new(CecDeviceType::RecordingDevice))
            .activate_source(false)
            .command_received_callback(Box::new(move |command: CecCommand| {
                match convert_command(&command) {
                    Some(bus_command) => {
                        tracing::trace!(command = %bus_command, "bus command received");
                        // The bridge may be shutting down; nothing to do then.
                        let _ = command_tx.send(bus_command);
                    }
                    None => {
                        tracing::trace!(
                            opcode = format_args!("{:#04x}", command.opcode as u32),
                            "dropped unmodeled bus command"
                        );
                    }
                }
            }))
            .log_message_callback(Box::new(relay_log_message));

        if let Some(port) = port {
            cfg = cfg.port(port);
        }

        let connection = cfg
            .build()
            .map_err(|e| ProtocolError::BusUnavailable(format!("invalid configuration: {e:?}")))?
            .open()
            .map_err(|e| ProtocolError::BusUnavailable(format!("{e:?}")))?;

        tracing::info!(adapter = adapter.unwrap_or("auto"), "CEC adapter opened");

        Ok((
            Self {
                _connection: connection,
            },
            command_rx,
        ))
    }
}

/// Converts a libcec command into the bridge's event model.
///
/// Commands with an unregistered initiator or an unmodeled opcode yield
/// `None`; neither can affect the tracked state.
fn convert_command(command: &CecCommand) -> Option<BusCommand> {
    let initiator = LogicalAddress::from_byte(u8::try_from(command.initiator as i32).ok()?)?;
    let destination = LogicalAddress::from_byte(u8::try_from(command.destination as i32).ok()?)?;
    let opcode = Opcode::from_byte(u8::try_from(command.opcode as u32).ok()?)?;

    Some(BusCommand::new(
        initiator,
        destination,
        opcode,
        command.parameters.0.as_slice(),
    ))
}

/// Relays libcec's own log stream to tracing. Diagnostics only.
fn relay_log_message(message: CecLogMessage) {
    match message.level {
        CecLogLevel::Error | CecLogLevel::Warning => {
            tracing::warn!(target: "libcec", "{}", message.message);
        }
        CecLogLevel::Notice => {
            tracing::debug!(target: "libcec", "{}", message.message);
        }
        _ => {
            tracing::trace!(target: "libcec", "{}", message.message);
        }
    }
}
