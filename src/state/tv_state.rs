// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The tracked TV state snapshot.

use std::fmt;

use crate::types::{HdmiInput, PowerStatus};

/// The derived state of the TV.
///
/// Always a fully-defined value: before the TV has reported anything the
/// fields hold their sentinels ([`PowerStatus::Unknown`] and input 0),
/// never an absent state. The snapshot is the bridge's entire memory; it is
/// owned by whoever runs the event loop and threaded through the tracker
/// explicitly.
///
/// Serializes to the published payload shape:
/// `{"power_state": "<label>", "hdmi_input": <int>}`.
///
/// # Examples
///
/// ```
/// use cec2mqtt::state::TvState;
/// use cec2mqtt::types::{HdmiInput, PowerStatus};
///
/// let state = TvState::new()
///     .with_power_status(PowerStatus::On)
///     .with_hdmi_input(HdmiInput::from_routing_byte(0x20));
///
/// assert_eq!(state.power_status(), PowerStatus::On);
/// assert_eq!(state.hdmi_input().value(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct TvState {
    /// Power status as last reported by the TV.
    #[serde(rename = "power_state")]
    power_status: PowerStatus,
    /// HDMI input the TV last routed to.
    hdmi_input: HdmiInput,
}

impl TvState {
    /// Creates the initial state with both fields at their sentinels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the power status.
    #[must_use]
    pub const fn power_status(&self) -> PowerStatus {
        self.power_status
    }

    /// Returns the HDMI input.
    #[must_use]
    pub const fn hdmi_input(&self) -> HdmiInput {
        self.hdmi_input
    }

    /// Returns a copy with the power status replaced.
    #[must_use]
    pub const fn with_power_status(mut self, status: PowerStatus) -> Self {
        self.power_status = status;
        self
    }

    /// Returns a copy with the HDMI input replaced.
    #[must_use]
    pub const fn with_hdmi_input(mut self, input: HdmiInput) -> Self {
        self.hdmi_input = input;
        self
    }
}

impl fmt::Display for TvState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (hdmi {})", self.power_status, self.hdmi_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_holds_sentinels() {
        let state = TvState::new();
        assert_eq!(state.power_status(), PowerStatus::Unknown);
        assert_eq!(state.hdmi_input(), HdmiInput::UNKNOWN);
    }

    #[test]
    fn with_power_status_leaves_input_alone() {
        let state = TvState::new()
            .with_hdmi_input(HdmiInput::from_routing_byte(0x30))
            .with_power_status(PowerStatus::Standby);
        assert_eq!(state.power_status(), PowerStatus::Standby);
        assert_eq!(state.hdmi_input().value(), 3);
    }

    #[test]
    fn structural_equality_covers_both_fields() {
        let base = TvState::new().with_power_status(PowerStatus::On);
        assert_eq!(base, TvState::new().with_power_status(PowerStatus::On));
        assert_ne!(base, base.with_power_status(PowerStatus::Standby));
        assert_ne!(base, base.with_hdmi_input(HdmiInput::from_routing_byte(0x10)));
    }

    #[test]
    fn serializes_to_published_payload_shape() {
        let state = TvState::new().with_power_status(PowerStatus::On);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"power_state":"on","hdmi_input":0}"#);
    }

    #[test]
    fn serializes_sentinel_state() {
        let json = serde_json::to_string(&TvState::new()).unwrap();
        assert_eq!(json, r#"{"power_state":"unknown","hdmi_input":0}"#);
    }

    #[test]
    fn display() {
        let state = TvState::new()
            .with_power_status(PowerStatus::On)
            .with_hdmi_input(HdmiInput::from_routing_byte(0x40));
        assert_eq!(state.to_string(), "on (hdmi 4)");
        assert_eq!(TvState::new().to_string(), "unknown (hdmi none)");
    }
}
