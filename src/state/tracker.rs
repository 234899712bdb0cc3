// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Change detection over the command stream.

use crate::bus::BusCommand;
use crate::classifier;

use super::{StateChange, TvState};

/// Folds bus commands into the current [`TvState`] and detects change.
///
/// Structural equality of the snapshot before and after the fold is the
/// sole gate for emitting a [`StateChange`]: the bus is noisy (most
/// commands touch neither tracked field, and devices re-announce unchanged
/// state periodically), so observers must never be notified about a
/// command that changed nothing.
///
/// The tracker owns the snapshot; it holds the bridge's entire memory.
#[derive(Debug, Clone, Default)]
pub struct StateTracker {
    current: TvState,
}

impl StateTracker {
    /// Creates a tracker starting from the sentinel state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker starting from a known state.
    #[must_use]
    pub const fn with_state(state: TvState) -> Self {
        Self { current: state }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn current(&self) -> TvState {
        self.current
    }

    /// Applies one command event and reports whether the state changed.
    ///
    /// Returns `Some(StateChange)` exactly when the folded snapshot differs
    /// from the previous one on either field; `None` otherwise. Total: no
    /// command can make this fail.
    pub fn observe(&mut self, command: &BusCommand) -> Option<StateChange> {
        let previous = self.current;
        let next = classifier::fold(previous, command);
        if next == previous {
            return None;
        }
        self.current = next;
        Some(StateChange::new(previous, next))
    }
}
