// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The HDMI-CEC bus boundary.
//!
//! [`BusCommand`] models one command event as delivered by the bus driver.
//! With the `cec` feature enabled, [`CecBus`] opens a libcec adapter and
//! forwards incoming commands into a channel; without it, commands can be
//! fed from anywhere (tests construct them directly).

mod command;

#[cfg(feature = "cec")]
mod cec;

pub use command::BusCommand;

#[cfg(feature = "cec")]
pub use cec::CecBus;
