// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};

use tracing::trace;

use crate::counter::Counter;
use crate::error::EmptyStack;
use crate::node::{Chain, Node};
use crate::types::Link;

/// A last-in-first-out stack of `A`, stored as a chain of boxed nodes.
///
/// A `Stack` can be moved but not cloned, so a chain always has exactly one
/// owner. To move a stack's contents out from behind a mutable reference,
/// leaving an empty stack in its place, use [`take()`][take].
///
/// # Examples
///
/// ```rust
/// # use linkstack::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(Ok(&2), stack.head());
/// assert_eq!(Some(2), stack.pop());
/// assert_eq!(Some(1), stack.pop());
/// assert_eq!(None, stack.pop());
/// assert!(stack.is_empty());
/// ```
///
/// [take]: #method.take
pub struct Stack<A> {
    size: usize,
    head: Link<A>,
}

impl<A> Stack<A> {
    /// Construct an empty stack. This doesn't allocate.
    pub fn new() -> Self {
        Stack {
            size: Default::default(),
            head: None,
        }
    }

    /// Test whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size.count() == 0
    }

    /// Get the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.size.count()
    }

    /// Get a reference to the element on top of the stack.
    ///
    /// Returns [`EmptyStack`][EmptyStack] if there's nothing on the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::{EmptyStack, Stack};
    /// let mut stack = Stack::new();
    /// assert_eq!(Err(EmptyStack), stack.head());
    /// stack.push("hello");
    /// assert_eq!(Ok(&"hello"), stack.head());
    /// ```
    ///
    /// [EmptyStack]: struct.EmptyStack.html
    pub fn head(&self) -> Result<&A, EmptyStack> {
        self.head
            .as_deref()
            .map(Node::value_as_ref)
            .ok_or(EmptyStack)
    }

    /// Push a value onto the stack, taking ownership of it.
    pub fn push(&mut self, value: A) {
        self.head = Some(Node::new(value, self.head.take()));
        let len = self.size.inc();
        trace!(len, "pushed onto stack");
    }

    /// Push a clone of `value` onto the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::Stack;
    /// let mut stack = Stack::new();
    /// let greeting = String::from("hello");
    /// stack.push_cloned(&greeting);
    /// assert_eq!(Ok(&greeting), stack.head());
    /// ```
    pub fn push_cloned(&mut self, value: &A)
    where
        A: Clone,
    {
        self.push(value.clone())
    }

    /// Construct a value of `A` from `args` and push it onto the stack.
    ///
    /// `args` can be anything `A` has a [`From`][From] implementation for,
    /// usually a tuple of constructor arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::Stack;
    /// #[derive(Debug, PartialEq)]
    /// struct Entry(i32, String);
    ///
    /// impl From<(i32, &str)> for Entry {
    ///     fn from((number, name): (i32, &str)) -> Self {
    ///         Entry(number, name.to_owned())
    ///     }
    /// }
    ///
    /// let mut stack = Stack::new();
    /// stack.push_emplace((12, "twelve"));
    /// assert_eq!(Ok(&Entry(12, "twelve".to_owned())), stack.head());
    /// ```
    ///
    /// [From]: https://doc.rust-lang.org/std/convert/trait.From.html
    pub fn push_emplace<V>(&mut self, args: V)
    where
        V: Into<A>,
    {
        self.push(args.into())
    }

    /// Remove the element on top of the stack and return it.
    ///
    /// Popping an empty stack does nothing and returns `None`.
    pub fn pop(&mut self) -> Option<A> {
        match self.head.take() {
            None => {
                trace!("pop on empty stack");
                None
            }
            Some(node) => {
                let (value, previous) = node.unlink();
                self.head = previous;
                self.size.dec();
                trace!(len = self.size.count(), "popped from stack");
                Some(value)
            }
        }
    }

    /// Move the contents of the stack into a new stack, leaving this one
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(31337);
    /// let moved = stack.take();
    /// assert!(stack.is_empty());
    /// assert_eq!(Ok(&31337), moved.head());
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<A> Default for Stack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Drop for Stack<A> {
    fn drop(&mut self) {
        // Unlink one node at a time so long chains don't drop recursively.
        let mut released = 0usize;
        let mut link = self.head.take();
        while let Some(node) = link {
            let (_, previous) = node.unlink();
            link = previous;
            released += 1;
        }
        if released > 0 {
            trace!(released, "released stack chain");
        }
    }
}

impl<A> Debug for Stack<A>
where
    A: Debug,
{
    /// Debug implementation for `Stack`, listing elements from the top down.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// stack.push(3);
    /// assert_eq!("[3, 2, 1]", format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_list().entries(Chain::new(&self.head)).finish()
    }
}
