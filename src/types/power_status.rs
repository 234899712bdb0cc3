// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power status as reported on the CEC bus.

use std::fmt;

/// Represents the power status of the TV.
///
/// The variants mirror the status codes a TV sends in a Report Power Status
/// command, plus [`PowerStatus::Unknown`] for the initial state before the
/// TV has reported anything.
///
/// # Examples
///
/// ```
/// use cec2mqtt::types::PowerStatus;
///
/// assert_eq!(PowerStatus::from_code(0x00), PowerStatus::On);
/// assert_eq!(PowerStatus::from_code(0x01), PowerStatus::Standby);
/// assert_eq!(PowerStatus::On.as_str(), "on");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PowerStatus {
    /// The TV is on.
    On,
    /// The TV is in standby.
    Standby,
    /// The TV is waking from standby.
    InTransitionStandbyToOn,
    /// The TV is going to standby.
    InTransitionOnToStandby,
    /// No power status has been observed yet.
    #[default]
    Unknown,
}

impl PowerStatus {
    /// Interprets a power-status code from a Report Power Status parameter.
    ///
    /// Codes outside the defined range map to [`PowerStatus::Unknown`].
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            0x00 => Self::On,
            0x01 => Self::Standby,
            0x02 => Self::InTransitionStandbyToOn,
            0x03 => Self::InTransitionOnToStandby,
            _ => Self::Unknown,
        }
    }

    /// Returns the status code as defined on the bus.
    ///
    /// [`PowerStatus::Unknown`] maps to 0x99, the code libcec uses for an
    /// unknown status.
    #[must_use]
    pub const fn as_code(&self) -> u8 {
        match self {
            Self::On => 0x00,
            Self::Standby => 0x01,
            Self::InTransitionStandbyToOn => 0x02,
            Self::InTransitionOnToStandby => 0x03,
            Self::Unknown => 0x99,
        }
    }

    /// Returns the human-readable label used in the published payload.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Standby => "standby",
            Self::InTransitionStandbyToOn => "in transition from standby to on",
            Self::InTransitionOnToStandby => "in transition from on to standby",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` if a status has been observed at all.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for PowerStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
