// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the HDMI-CEC bus and the tracked TV state.
//!
//! This module provides type-safe representations of the values carried in
//! CEC command events and folded into state. Constrained types validate
//! their ranges at construction time.
//!
//! # Types
//!
//! - [`LogicalAddress`] - Device role on the bus (TV, sources, broadcast)
//! - [`Opcode`] - Semantic type of a bus command
//! - [`PowerStatus`] - Power state as reported on the bus
//! - [`HdmiInput`] - Active HDMI input number (4-bit, 0 = unobserved)

mod hdmi_input;
mod logical_address;
mod opcode;
mod power_status;

pub use hdmi_input::HdmiInput;
pub use logical_address::LogicalAddress;
pub use opcode::Opcode;
pub use power_status::PowerStatus;
