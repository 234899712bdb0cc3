// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One command event as observed on the bus.

use std::fmt;

use crate::types::{LogicalAddress, Opcode};

/// A single CEC command event.
///
/// Produced by the bus driver and never mutated. The parameter payload may
/// be shorter than the opcode nominally requires (truncated frames do
/// happen on real buses), so consumers read bytes through the bounds-safe
/// [`BusCommand::param`] accessor.
///
/// # Examples
///
/// ```
/// use cec2mqtt::bus::BusCommand;
/// use cec2mqtt::types::{LogicalAddress, Opcode};
///
/// let command = BusCommand::new(
///     LogicalAddress::Tv,
///     LogicalAddress::Broadcast,
///     Opcode::ReportPowerStatus,
///     [0x00],
/// );
///
/// assert!(command.is_from_tv());
/// assert_eq!(command.param(0), Some(0x00));
/// assert_eq!(command.param(1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusCommand {
    initiator: LogicalAddress,
    destination: LogicalAddress,
    opcode: Opcode,
    parameters: Vec<u8>,
}

impl BusCommand {
    /// Creates a command event.
    #[must_use]
    pub fn new(
        initiator: LogicalAddress,
        destination: LogicalAddress,
        opcode: Opcode,
        parameters: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            initiator,
            destination,
            opcode,
            parameters: parameters.into(),
        }
    }

    /// Returns the sending device's logical address.
    #[must_use]
    pub const fn initiator(&self) -> LogicalAddress {
        self.initiator
    }

    /// Returns the destination logical address.
    #[must_use]
    pub const fn destination(&self) -> LogicalAddress {
        self.destination
    }

    /// Returns the opcode.
    #[must_use]
    pub const fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Returns the raw parameter bytes.
    #[must_use]
    pub fn parameters(&self) -> &[u8] {
        &self.parameters
    }

    /// Returns the parameter byte at `index`, if the frame carries one.
    #[must_use]
    pub fn param(&self, index: usize) -> Option<u8> {
        self.parameters.get(index).copied()
    }

    /// Returns `true` if the TV sent this command.
    #[must_use]
    pub const fn is_from_tv(&self) -> bool {
        self.initiator.is_tv()
    }

    /// Returns `true` if this command was broadcast to all devices.
    #[must_use]
    pub const fn is_broadcast(&self) -> bool {
        self.destination.is_broadcast()
    }
}

impl fmt::Display for BusCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} {}",
            self.initiator, self.destination, self.opcode
        )?;
        if !self.parameters.is_empty() {
            write!(f, " [")?;
            for (i, byte) in self.parameters.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{byte:02x}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let command = BusCommand::new(
            LogicalAddress::Tv,
            LogicalAddress::Broadcast,
            Opcode::SetStreamPath,
            [0x30, 0x00],
        );

        assert_eq!(command.initiator(), LogicalAddress::Tv);
        assert_eq!(command.destination(), LogicalAddress::Broadcast);
        assert_eq!(command.opcode(), Opcode::SetStreamPath);
        assert_eq!(command.parameters(), &[0x30, 0x00]);
    }

    #[test]
    fn param_is_bounds_safe() {
        let command = BusCommand::new(
            LogicalAddress::Tv,
            LogicalAddress::Broadcast,
            Opcode::ReportPowerStatus,
            [],
        );

        assert_eq!(command.param(0), None);
        assert_eq!(command.param(7), None);
    }

    #[test]
    fn routing_helpers() {
        let from_tv = BusCommand::new(
            LogicalAddress::Tv,
            LogicalAddress::RecordingDevice1,
            Opcode::Standby,
            [],
        );
        assert!(from_tv.is_from_tv());
        assert!(!from_tv.is_broadcast());

        let broadcast = BusCommand::new(
            LogicalAddress::PlaybackDevice1,
            LogicalAddress::Broadcast,
            Opcode::ActiveSource,
            [0x40, 0x00],
        );
        assert!(!broadcast.is_from_tv());
        assert!(broadcast.is_broadcast());
    }

    #[test]
    fn display_formats_hex_parameters() {
        let command = BusCommand::new(
            LogicalAddress::Tv,
            LogicalAddress::Broadcast,
            Opcode::ReportPhysicalAddress,
            [0x10, 0x00, 0x01],
        );
        assert_eq!(
            command.to_string(),
            "TV -> Broadcast ReportPhysicalAddress [10 00 01]"
        );

        let bare = BusCommand::new(
            LogicalAddress::Tv,
            LogicalAddress::Broadcast,
            Opcode::Standby,
            [],
        );
        assert_eq!(bare.to_string(), "TV -> Broadcast Standby");
    }
}
