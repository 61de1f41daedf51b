// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// The error returned when inspecting the top of an empty
/// [`Stack`][Stack].
///
/// # Examples
///
/// ```rust
/// # use linkstack::{EmptyStack, Stack};
/// let stack: Stack<usize> = Stack::new();
/// assert_eq!(Err(EmptyStack), stack.head());
/// assert_eq!(
///     "attempt to call `head()` on empty stack",
///     EmptyStack.to_string()
/// );
/// ```
///
/// [Stack]: struct.Stack.html
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("attempt to call `head()` on empty stack")]
pub struct EmptyStack;
