// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command classification.
//!
//! [`fold`] decides whether one bus command carries power-status or
//! input-routing information and, if so, how it updates the snapshot.
//! Pure and total: no I/O, no failure path, deterministic.

use crate::bus::BusCommand;
use crate::state::TvState;
use crate::types::{HdmiInput, Opcode, PowerStatus};

/// Folds one command event into the TV state.
///
/// Commands from the TV itself are authoritative about its status;
/// broadcasts from other devices only carry routing information. Anything
/// else is irrelevant to the tracked state and returns `current` unchanged.
///
/// A truncated frame (missing a required parameter byte) is treated as
/// "no change", never as an error.
#[must_use]
pub fn fold(current: TvState, command: &BusCommand) -> TvState {
    if command.is_from_tv() {
        fold_from_tv(current, command)
    } else if command.is_broadcast() {
        fold_broadcast(current, command)
    } else {
        current
    }
}

/// Applies a command sent by the TV.
fn fold_from_tv(current: TvState, command: &BusCommand) -> TvState {
    match command.opcode() {
        Opcode::ReportPowerStatus => match command.param(0) {
            Some(code) => current.with_power_status(PowerStatus::from_code(code)),
            None => current,
        },
        // Some TVs broadcast a vendor command instead of a standard Standby
        // when going down.
        Opcode::Standby | Opcode::VendorCommandWithId => {
            current.with_power_status(PowerStatus::Standby)
        }
        // Some TVs announce their physical address when waking up.
        Opcode::ReportPhysicalAddress => current.with_power_status(PowerStatus::On),
        Opcode::SetStreamPath => match command.param(0) {
            Some(byte) => current.with_hdmi_input(HdmiInput::from_routing_byte(byte)),
            None => current,
        },
        _ => current,
    }
}

/// Applies a broadcast from some other device.
fn fold_broadcast(current: TvState, command: &BusCommand) -> TvState {
    match command.opcode() {
        Opcode::ActiveSource => match command.param(0) {
            Some(byte) => current.with_hdmi_input(HdmiInput::from_routing_byte(byte)),
            None => current,
        },
        _ => current,
    }
}
