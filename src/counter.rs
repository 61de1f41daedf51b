// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Element count of a chain.
pub(crate) trait Counter: Default {
    fn inc(&mut self) -> usize;
    fn dec(&mut self) -> usize;
    fn count(&self) -> usize;
}

impl Counter for usize {
    /// Returns the new count.
    #[inline(always)]
    fn inc(&mut self) -> usize {
        *self += 1;
        *self
    }

    /// Returns the count before decrementing. Never goes below zero.
    #[inline(always)]
    fn dec(&mut self) -> usize {
        let prev = *self;
        debug_assert!(prev > 0, "decrementing an empty counter");
        *self = prev.saturating_sub(1);
        prev
    }

    #[inline(always)]
    fn count(&self) -> usize {
        *self
    }
}
