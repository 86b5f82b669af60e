//! A doubly linked list with list-owned nodes.

use alloc::rc::{Rc, Weak};
use core::cell::{Ref, RefCell};
use core::fmt;
use core::marker::PhantomData;

use crate::error::Error;

type NodeRef<T> = Rc<RefCell<Node<T>>>;
type Link<T> = Option<NodeRef<T>>;

struct Node<T> {
    data: T,
    // this is Weak to avoid reference cycles;
    // the strong direction runs head to tail
    prev: Weak<RefCell<Node<T>>>,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(data: T) -> NodeRef<T> {
        Rc::new(RefCell::new(Node {
            data,
            prev: Weak::new(),
            next: None,
        }))
    }
}

// Takes the value out of a detached node.
fn into_data<T>(node: NodeRef<T>) -> T {
    match Rc::try_unwrap(node) {
        Ok(cell) => cell.into_inner().data,
        // a detached node holds the only strong reference
        Err(_) => unreachable!("detached node is still linked"),
    }
}

/// A doubly linked list.
///
/// The list exclusively owns its node chain: each node is kept alive by the
/// previous node's `next` link (or by the list's own head/tail handles at the
/// boundaries), and back links are weak. Removal detaches a node from the
/// chain and moves its value out to the caller.
///
/// The list is always in one of two structural states: empty (no head, no
/// tail, length 0) or populated (head and tail present, length >= 1). Every
/// operation leaves it in one of the two.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an element at the front of the list. O(1).
    pub fn push_front(&mut self, elem: T) {
        let node = Node::new(elem);
        match self.head.take() {
            Some(head) => {
                head.borrow_mut().prev = Rc::downgrade(&node);
                node.borrow_mut().next = Some(head);
            }
            // first node becomes both head and tail
            None => self.tail = Some(node.clone()),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends an element at the back of the list. O(1).
    pub fn push_back(&mut self, elem: T) {
        let node = Node::new(elem);
        match self.tail.take() {
            Some(tail) => {
                node.borrow_mut().prev = Rc::downgrade(&tail);
                tail.borrow_mut().next = Some(node.clone());
            }
            // first node becomes both head and tail
            None => self.head = Some(node.clone()),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Returns a read guard on the first element, or `EmptyCollection`.
    pub fn front(&self) -> Result<Ref<'_, T>, Error> {
        match self.head {
            Some(ref head) => Ok(Ref::map(head.borrow(), |node| &node.data)),
            None => Err(Error::EmptyCollection),
        }
    }

    /// Returns a read guard on the last element, or `EmptyCollection`.
    pub fn back(&self) -> Result<Ref<'_, T>, Error> {
        match self.tail {
            Some(ref tail) => Ok(Ref::map(tail.borrow(), |node| &node.data)),
            None => Err(Error::EmptyCollection),
        }
    }

    /// Removes and returns the first element, or `EmptyCollection`. O(1).
    pub fn pop_front(&mut self) -> Result<T, Error> {
        self.detach_first().ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the last element, or `EmptyCollection`. O(1).
    pub fn pop_back(&mut self) -> Result<T, Error> {
        self.detach_last().ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the element at `index`, or `InvalidArgument` when
    /// `index >= len`.
    ///
    /// Walks from the head when the index lies in the front half and from the
    /// tail otherwise, so the average walk is about a quarter of the list.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::InvalidArgument {
                index,
                len: self.len,
            });
        }

        let node = if index < self.len / 2 {
            // the list is populated and every step stays in bounds
            let mut cur = self.head.clone().unwrap();
            for _ in 0..index {
                let next = cur.borrow().next.clone().unwrap();
                cur = next;
            }
            cur
        } else {
            let mut cur = self.tail.clone().unwrap();
            for _ in index + 1..self.len {
                let prev = cur.borrow().prev.upgrade().unwrap();
                cur = prev;
            }
            cur
        };

        Ok(self.unlink(node))
    }

    /// Returns the index of the first occurrence of `elem`, if any. O(n).
    pub fn index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut cur = self.head.clone();
        let mut index = 0;
        while let Some(node) = cur {
            if node.borrow().data == *elem {
                return Some(index);
            }
            cur = node.borrow().next.clone();
            index += 1;
        }
        None
    }

    /// Returns true if `elem` occurs in the list. O(n).
    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(elem).is_some()
    }

    /// Drops every node by walking forward from the head. O(n).
    pub fn clear(&mut self) {
        // take each next before the node drops, so drops never recurse
        let mut cur = self.head.take();
        while let Some(node) = cur {
            cur = node.borrow_mut().next.take();
        }
        self.tail = None;
        self.len = 0;
    }

    /// Returns a forward iterator over clones of the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.clone(),
            remaining: self.len,
            _list: PhantomData,
        }
    }

    fn detach_first(&mut self) -> Option<T> {
        let head = self.head.take()?;
        match head.borrow_mut().next.take() {
            Some(next) => {
                next.borrow_mut().prev = Weak::new();
                self.head = Some(next);
            }
            // that was the only node
            None => self.tail = None,
        }
        self.len -= 1;
        Some(into_data(head))
    }

    fn detach_last(&mut self) -> Option<T> {
        let tail = self.tail.take()?;
        match tail.borrow().prev.upgrade() {
            Some(prev) => {
                prev.borrow_mut().next = None;
                self.tail = Some(prev);
            }
            // that was the only node
            None => self.head = None,
        }
        self.len -= 1;
        Some(into_data(tail))
    }

    // Splices a node out of the chain. Boundary nodes go through
    // detach_first/detach_last so head/tail updates live in one place.
    fn unlink(&mut self, node: NodeRef<T>) -> T {
        if node.borrow().prev.upgrade().is_none() {
            drop(node);
            // the caller located the node in this list
            return self.detach_first().unwrap();
        }
        if node.borrow().next.is_none() {
            drop(node);
            return self.detach_last().unwrap();
        }

        // interior node, both neighbors exist
        let prev = node.borrow().prev.upgrade().unwrap();
        let next = node.borrow_mut().next.take().unwrap();
        next.borrow_mut().prev = Rc::downgrade(&prev);
        prev.borrow_mut().next = Some(next);
        self.len -= 1;
        into_data(node)
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cur = self.head.clone();
        while let Some(node) = cur {
            let inner = node.borrow();
            list.entry(&inner.data);
            cur = inner.next.clone();
        }
        list.finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        let mut cur = self.head.clone();
        while let Some(node) = cur {
            let inner = node.borrow();
            write!(f, "{}", inner.data)?;
            if inner.next.is_some() {
                f.write_str(", ")?;
            } else {
                f.write_str(" ")?;
            }
            cur = inner.next.clone();
        }
        f.write_str("]")
    }
}

/// An iterator over the elements of a `LinkedList`.
///
/// This `struct` is created by [`LinkedList::iter()`]. See its
/// documentation for more. Elements come out as clones because the values
/// stay shared between the chain's cells while the iterator is alive.
pub struct Iter<'a, T: 'a> {
    next: Link<T>,
    remaining: usize,
    _list: PhantomData<&'a LinkedList<T>>,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.next.take()?;
        let inner = node.borrow();
        self.next = inner.next.clone();
        self.remaining -= 1;
        Some(inner.data.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: Clone> IntoIterator for &'a LinkedList<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
