// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CEC opcodes.

use std::fmt;

/// The operation code of a CEC command.
///
/// Covers the opcodes a passive monitor commonly sees on a home-theater
/// bus. The discriminants are the wire byte values. Opcodes the bridge
/// does not model are dropped at the driver boundary; none of them can
/// affect the tracked state.
///
/// # Examples
///
/// ```
/// use cec2mqtt::types::Opcode;
///
/// assert_eq!(Opcode::from_byte(0x90), Some(Opcode::ReportPowerStatus));
/// assert_eq!(Opcode::ActiveSource.value(), 0x82);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Feature Abort (0x00).
    FeatureAbort = 0x00,
    /// Image View On (0x04).
    ImageViewOn = 0x04,
    /// Text View On (0x0D).
    TextViewOn = 0x0D,
    /// Standby (0x36).
    Standby = 0x36,
    /// User Control Pressed (0x44).
    UserControlPressed = 0x44,
    /// User Control Released (0x45).
    UserControlReleased = 0x45,
    /// Give OSD Name (0x46).
    GiveOsdName = 0x46,
    /// Set OSD Name (0x47).
    SetOsdName = 0x47,
    /// Routing Change (0x80).
    RoutingChange = 0x80,
    /// Routing Information (0x81).
    RoutingInformation = 0x81,
    /// Active Source (0x82).
    ActiveSource = 0x82,
    /// Give Physical Address (0x83).
    GivePhysicalAddress = 0x83,
    /// Report Physical Address (0x84).
    ReportPhysicalAddress = 0x84,
    /// Request Active Source (0x85).
    RequestActiveSource = 0x85,
    /// Set Stream Path (0x86).
    SetStreamPath = 0x86,
    /// Device Vendor ID (0x87).
    DeviceVendorId = 0x87,
    /// Vendor Command (0x89).
    VendorCommand = 0x89,
    /// Give Device Vendor ID (0x8C).
    GiveDeviceVendorId = 0x8C,
    /// Menu Request (0x8D).
    MenuRequest = 0x8D,
    /// Menu Status (0x8E).
    MenuStatus = 0x8E,
    /// Give Device Power Status (0x8F).
    GiveDevicePowerStatus = 0x8F,
    /// Report Power Status (0x90).
    ReportPowerStatus = 0x90,
    /// CEC Version (0x9E).
    CecVersion = 0x9E,
    /// Get CEC Version (0x9F).
    GetCecVersion = 0x9F,
    /// Vendor Command With ID (0xA0).
    VendorCommandWithId = 0xA0,
    /// Abort (0xFF).
    Abort = 0xFF,
}

impl Opcode {
    /// Decodes an opcode from its wire byte.
    ///
    /// Returns `None` for opcodes the bridge does not model.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            0x00 => Self::FeatureAbort,
            0x04 => Self::ImageViewOn,
            0x0D => Self::TextViewOn,
            0x36 => Self::Standby,
            0x44 => Self::UserControlPressed,
            0x45 => Self::UserControlReleased,
            0x46 => Self::GiveOsdName,
            0x47 => Self::SetOsdName,
            0x80 => Self::RoutingChange,
            0x81 => Self::RoutingInformation,
            0x82 => Self::ActiveSource,
            0x83 => Self::GivePhysicalAddress,
            0x84 => Self::ReportPhysicalAddress,
            0x85 => Self::RequestActiveSource,
            0x86 => Self::SetStreamPath,
            0x87 => Self::DeviceVendorId,
            0x89 => Self::VendorCommand,
            0x8C => Self::GiveDeviceVendorId,
            0x8D => Self::MenuRequest,
            0x8E => Self::MenuStatus,
            0x8F => Self::GiveDevicePowerStatus,
            0x90 => Self::ReportPowerStatus,
            0x9E => Self::CecVersion,
            0x9F => Self::GetCecVersion,
            0xA0 => Self::VendorCommandWithId,
            0xFF => Self::Abort,
            _ => return None,
        })
    }

    /// Returns the wire byte value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
