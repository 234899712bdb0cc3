// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change notification.

use std::fmt;

use super::TvState;

/// A detected change in TV state.
///
/// Emitted exactly once per genuine change (structural inequality between
/// the previous and current snapshot), consumed by the serializer and
/// publisher, then discarded.
///
/// # Examples
///
/// ```
/// use cec2mqtt::state::{StateChange, TvState};
/// use cec2mqtt::types::PowerStatus;
///
/// let previous = TvState::new();
/// let current = previous.with_power_status(PowerStatus::On);
/// let change = StateChange::new(previous, current);
///
/// assert_eq!(change.current().power_status(), PowerStatus::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    previous: TvState,
    current: TvState,
}

impl StateChange {
    /// Creates a change notification.
    #[must_use]
    pub const fn new(previous: TvState, current: TvState) -> Self {
        Self { previous, current }
    }

    /// Returns the state before the change.
    #[must_use]
    pub const fn previous(&self) -> &TvState {
        &self.previous
    }

    /// Returns the state after the change.
    #[must_use]
    pub const fn current(&self) -> &TvState {
        &self.current
    }
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.previous, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HdmiInput, PowerStatus};

    #[test]
    fn accessors() {
        let previous = TvState::new();
        let current = previous.with_power_status(PowerStatus::Standby);
        let change = StateChange::new(previous, current);

        assert_eq!(*change.previous(), previous);
        assert_eq!(*change.current(), current);
    }

    #[test]
    fn display() {
        let previous = TvState::new().with_power_status(PowerStatus::On);
        let current = previous.with_hdmi_input(HdmiInput::from_routing_byte(0x30));
        let change = StateChange::new(previous, current);

        assert_eq!(change.to_string(), "on (hdmi none) -> on (hdmi 3)");
    }
}
