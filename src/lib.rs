// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A last-in-first-out [`Stack`][Stack] backed by a singly linked chain of
//! heap allocated nodes.
//!
//! Every push allocates exactly one node, which becomes the new top of the
//! stack and owns the node beneath it. Every pop unlinks the top node,
//! promotes the one beneath it and releases its memory. All operations are
//! constant time.
//!
//! # Pushing
//!
//! There are three ways to put a value on the stack:
//!
//!   * [`Stack::push()`][Stack::push] moves a value onto the stack.
//!   * [`Stack::push_cloned()`][Stack::push_cloned] clones a value you only
//!     have a reference to. This is only available when `A` implements
//!     [`Clone`][Clone], which is checked at compile time.
//!   * [`Stack::push_emplace()`][Stack::push_emplace] builds the value from
//!     constructor arguments, through `A`'s [`From`][From] implementation.
//!
//! # Ownership
//!
//! A [`Stack`][Stack] exclusively owns its chain. It does not implement
//! [`Clone`][Clone], so there's never more than one stack referencing the
//! same nodes. Moving a stack moves the chain, and
//! [`Stack::take()`][Stack::take] moves it out from behind a mutable
//! reference, leaving an empty stack behind.
//!
//! Dropping a stack releases its nodes one by one from the top, so a very
//! long chain won't blow the call stack on its way out.
//!
//! # Errors
//!
//! Popping an empty stack is not an error: it does nothing and returns
//! `None`. The only fallible operation is
//! [`Stack::head()`][Stack::head], which returns
//! [`EmptyStack`][EmptyStack] when there's nothing to look at.
//!
//! # Thread Safety
//!
//! There is no internal locking. A stack is [`Send`][Send] and
//! [`Sync`][Sync] when `A` is, but mutating it needs `&mut`, so sharing one
//! between threads means wrapping it in your own mutex.
//!
//! # Example
//!
//! ```rust
//! # use linkstack::{EmptyStack, Stack};
//! let mut stack = Stack::new();
//! stack.push(123);
//! stack.push(456);
//! stack.push(3478);
//! assert_eq!(Ok(&3478), stack.head());
//!
//! stack.pop();
//! assert_eq!(Ok(&456), stack.head());
//! stack.pop();
//! assert_eq!(Ok(&123), stack.head());
//! stack.pop();
//!
//! assert_eq!(0, stack.len());
//! assert_eq!(Err(EmptyStack), stack.head());
//!
//! // Popping an empty stack is fine.
//! stack.pop();
//! assert!(stack.is_empty());
//! ```
//!
//! [Stack]: struct.Stack.html
//! [Stack::push]: struct.Stack.html#method.push
//! [Stack::push_cloned]: struct.Stack.html#method.push_cloned
//! [Stack::push_emplace]: struct.Stack.html#method.push_emplace
//! [Stack::head]: struct.Stack.html#method.head
//! [Stack::take]: struct.Stack.html#method.take
//! [EmptyStack]: struct.EmptyStack.html
//! [Clone]: https://doc.rust-lang.org/std/clone/trait.Clone.html
//! [From]: https://doc.rust-lang.org/std/convert/trait.From.html
//! [Send]: https://doc.rust-lang.org/std/marker/trait.Send.html
//! [Sync]: https://doc.rust-lang.org/std/marker/trait.Sync.html

#![forbid(rust_2018_idioms, unsafe_code)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod counter;
mod error;
mod node;
mod stack;
mod types;

pub use self::error::EmptyStack;
pub use self::stack::Stack;

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct DropTest<'a> {
        counter: &'a AtomicUsize,
    }

    impl<'a> DropTest<'a> {
        fn new(counter: &'a AtomicUsize) -> Self {
            counter.fetch_add(1, Ordering::Relaxed);
            DropTest { counter }
        }
    }

    impl<'a> Drop for DropTest<'a> {
        fn drop(&mut self) {
            self.counter.fetch_sub(1, Ordering::Relaxed);
        }
    }

    fn fill_drop(push_count: usize, pop_count: usize) {
        let counter = AtomicUsize::new(0);
        {
            let mut stack = Stack::new();
            for _ in 0..push_count {
                stack.push(DropTest::new(&counter));
            }
            assert_eq!(push_count, counter.load(Ordering::SeqCst));
            for _ in 0..pop_count {
                stack.pop();
            }
            let live = push_count.saturating_sub(pop_count);
            assert_eq!(live, stack.len());
            assert_eq!(live, counter.load(Ordering::SeqCst));
        }
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn dropping_full() {
        fill_drop(2048, 0);
    }

    #[test]
    fn dropping_partly_popped() {
        fill_drop(2048, 1024);
    }

    #[test]
    fn dropping_overpopped() {
        fill_drop(128, 256);
    }

    #[test]
    fn dropping_empty() {
        fill_drop(0, 0);
    }

    #[test]
    fn dropping_a_long_chain() {
        let mut stack = Stack::new();
        for i in 0..1_000_000usize {
            stack.push(i);
        }
        assert_eq!(1_000_000, stack.len());
        drop(stack);
    }

    #[test]
    fn popped_values_outlive_the_stack() {
        let counter = AtomicUsize::new(0);
        let mut stack = Stack::new();
        stack.push(DropTest::new(&counter));
        stack.push(DropTest::new(&counter));
        let popped = stack.pop();
        drop(stack);
        assert!(popped.is_some());
        assert_eq!(1, counter.load(Ordering::SeqCst));
        drop(popped);
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn take_does_not_duplicate_values() {
        let counter = AtomicUsize::new(0);
        let mut source = Stack::new();
        for _ in 0..16 {
            source.push(DropTest::new(&counter));
        }
        let target = source.take();
        assert_eq!(16, counter.load(Ordering::SeqCst));
        assert_eq!(0, source.len());
        assert_eq!(16, target.len());
        drop(target);
        assert_eq!(0, counter.load(Ordering::SeqCst));
        drop(source);
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }
}
