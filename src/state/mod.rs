// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! TV state tracking.
//!
//! [`TvState`] is the deduplicated snapshot the bridge maintains,
//! [`StateTracker`] folds bus commands into it and detects genuine changes,
//! and [`StateChange`] is the notification emitted exactly once per change.
//!
//! # Examples
//!
//! ```
//! use cec2mqtt::bus::BusCommand;
//! use cec2mqtt::state::StateTracker;
//! use cec2mqtt::types::{LogicalAddress, Opcode, PowerStatus};
//!
//! let mut tracker = StateTracker::new();
//!
//! let report = BusCommand::new(
//!     LogicalAddress::Tv,
//!     LogicalAddress::Broadcast,
//!     Opcode::ReportPowerStatus,
//!     [0x00],
//! );
//!
//! // First report changes the state...
//! let change = tracker.observe(&report).unwrap();
//! assert_eq!(change.current().power_status(), PowerStatus::On);
//!
//! // ...re-announcing the same state does not.
//! assert!(tracker.observe(&report).is_none());
//! ```

mod state_change;
mod tracker;
mod tv_state;

pub use state_change::StateChange;
pub use tracker::StateTracker;
pub use tv_state::TvState;
