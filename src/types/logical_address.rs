// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CEC logical addresses.

use std::fmt;

/// A logical address on the CEC bus.
///
/// Logical addresses identify device roles, not physical devices: address 0
/// is always the TV and address 15 is the broadcast destination (the same
/// value doubles as "unregistered" when used as an initiator).
///
/// The bridge uses logical addresses for routing decisions only; they are
/// never stored in the tracked state.
///
/// # Examples
///
/// ```
/// use cec2mqtt::types::LogicalAddress;
///
/// assert_eq!(LogicalAddress::from_byte(0), Some(LogicalAddress::Tv));
/// assert!(LogicalAddress::Tv.is_tv());
/// assert!(LogicalAddress::Broadcast.is_broadcast());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LogicalAddress {
    /// The TV (address 0).
    Tv = 0,
    /// First recording device.
    RecordingDevice1 = 1,
    /// Second recording device.
    RecordingDevice2 = 2,
    /// First tuner.
    Tuner1 = 3,
    /// First playback device.
    PlaybackDevice1 = 4,
    /// Audio system / soundbar.
    AudioSystem = 5,
    /// Second tuner.
    Tuner2 = 6,
    /// Third tuner.
    Tuner3 = 7,
    /// Second playback device.
    PlaybackDevice2 = 8,
    /// Third recording device.
    RecordingDevice3 = 9,
    /// Fourth tuner.
    Tuner4 = 10,
    /// Third playback device.
    PlaybackDevice3 = 11,
    /// Reserved address 12.
    Reserved1 = 12,
    /// Reserved address 13.
    Reserved2 = 13,
    /// Free-use address.
    FreeUse = 14,
    /// Broadcast destination / unregistered initiator (address 15).
    Broadcast = 15,
}

impl LogicalAddress {
    /// Decodes a logical address from its 4-bit wire value.
    ///
    /// Returns `None` for values above 15.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            0 => Self::Tv,
            1 => Self::RecordingDevice1,
            2 => Self::RecordingDevice2,
            3 => Self::Tuner1,
            4 => Self::PlaybackDevice1,
            5 => Self::AudioSystem,
            6 => Self::Tuner2,
            7 => Self::Tuner3,
            8 => Self::PlaybackDevice2,
            9 => Self::RecordingDevice3,
            10 => Self::Tuner4,
            11 => Self::PlaybackDevice3,
            12 => Self::Reserved1,
            13 => Self::Reserved2,
            14 => Self::FreeUse,
            15 => Self::Broadcast,
            _ => return None,
        })
    }

    /// Returns the 4-bit wire value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns `true` if this is the TV address.
    #[must_use]
    pub const fn is_tv(&self) -> bool {
        matches!(self, Self::Tv)
    }

    /// Returns `true` if this is the broadcast address.
    #[must_use]
    pub const fn is_broadcast(&self) -> bool {
        matches!(self, Self::Broadcast)
    }

    /// Returns a human-readable label for log lines.
    ///
    /// Debug-only cosmetics; routing decisions go through [`Self::is_tv`]
    /// and [`Self::is_broadcast`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tv => "TV",
            Self::RecordingDevice1 => "Recorder 1",
            Self::RecordingDevice2 => "Recorder 2",
            Self::Tuner1 => "Tuner 1",
            Self::PlaybackDevice1 => "Playback 1",
            Self::AudioSystem => "Audio",
            Self::Tuner2 => "Tuner 2",
            Self::Tuner3 => "Tuner 3",
            Self::PlaybackDevice2 => "Playback 2",
            Self::RecordingDevice3 => "Recorder 3",
            Self::Tuner4 => "Tuner 4",
            Self::PlaybackDevice3 => "Playback 3",
            Self::Reserved1 => "Reserved 12",
            Self::Reserved2 => "Reserved 13",
            Self::FreeUse => "Free use",
            Self::Broadcast => "Broadcast",
        }
    }
}

impl fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_byte_covers_full_range() {
        for value in 0..=15 {
            let address = LogicalAddress::from_byte(value).unwrap();
            assert_eq!(address.value(), value);
        }
    }

    #[test]
    fn from_byte_rejects_out_of_range() {
        assert_eq!(LogicalAddress::from_byte(16), None);
        assert_eq!(LogicalAddress::from_byte(0xFF), None);
    }

    #[test]
    fn routing_helpers() {
        assert!(LogicalAddress::Tv.is_tv());
        assert!(!LogicalAddress::Tv.is_broadcast());
        assert!(LogicalAddress::Broadcast.is_broadcast());
        assert!(!LogicalAddress::PlaybackDevice1.is_tv());
        assert!(!LogicalAddress::PlaybackDevice1.is_broadcast());
    }

    #[test]
    fn display_labels() {
        assert_eq!(LogicalAddress::Tv.to_string(), "TV");
        assert_eq!(LogicalAddress::Broadcast.to_string(), "Broadcast");
        assert_eq!(LogicalAddress::AudioSystem.to_string(), "Audio");
    }
}
