// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::types::Link;

/// One element of the chain.
///
/// A node owns its value and, through `previous`, every node beneath it.
/// There is no link back up, so a chain can never form a cycle.
pub(crate) struct Node<A> {
    value: A,
    previous: Link<A>,
}

impl<A> Node<A> {
    pub(crate) fn new(value: A, previous: Link<A>) -> Box<Self> {
        Box::new(Node { value, previous })
    }

    /// Take the node apart, releasing its allocation.
    pub(crate) fn unlink(self: Box<Self>) -> (A, Link<A>) {
        let Node { value, previous } = *self;
        (value, previous)
    }

    pub(crate) fn value_as_ref(&self) -> &A {
        &self.value
    }

    pub(crate) fn previous_as_ref(&self) -> Option<&Node<A>> {
        self.previous.as_deref()
    }
}

/// Walks a chain from the top down without taking ownership.
pub(crate) struct Chain<'a, A> {
    next: Option<&'a Node<A>>,
}

impl<'a, A> Chain<'a, A> {
    pub(crate) fn new(head: &'a Link<A>) -> Self {
        Chain {
            next: head.as_deref(),
        }
    }
}

impl<'a, A> Iterator for Chain<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.previous_as_ref();
            node.value_as_ref()
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unlink_hands_back_value_and_link() {
        let bottom = Node::new(1, None);
        let top = Node::new(2, Some(bottom));
        let (value, previous) = top.unlink();
        assert_eq!(2, value);
        let (value, previous) = previous.unwrap().unlink();
        assert_eq!(1, value);
        assert!(previous.is_none());
    }

    #[test]
    fn chain_walks_top_to_bottom() {
        let head = Some(Node::new(3, Some(Node::new(2, Some(Node::new(1, None))))));
        let values: Vec<_> = Chain::new(&head).copied().collect();
        assert_eq!(vec![3, 2, 1], values);
        assert_eq!(0, Chain::<usize>::new(&None).count());
    }
}
