// Persistent (immutable, structurally shared) singly linked list.
//
// Every "modification" returns a new list; existing lists are never changed.
// `prepend` and `tail` are O(1) and share nodes with the original.

use itertools::Itertools;
use std::fmt;
use std::rc::Rc;

struct Node<T> {
    elem: T,
    next: Link<T>,
}

type Link<T> = Option<Rc<Node<T>>>;

pub struct List<T> {
    head: Link<T>,
    len: usize,
}

impl<T> List<T> {
    pub fn empty() -> Self {
        List { head: None, len: 0 }
    }

    pub fn of<I: IntoIterator<Item = T>>(items: I) -> Self {
        items.into_iter().collect()
    }

    /// New list with `elem` in front; the receiver becomes its tail.
    pub fn prepend(&self, elem: T) -> Self {
        List {
            head: Some(Rc::new(Node {
                elem,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.elem)
    }

    pub fn tail(&self) -> Option<List<T>> {
        self.head.as_ref().map(|node| List {
            head: node.next.clone(),
            len: self.len - 1,
        })
    }

    /// Shares the remaining nodes with `self`.
    pub fn drop(&self, n: usize) -> List<T> {
        let mut link = self.head.as_ref();
        let mut skipped = 0;
        while skipped < n {
            match link {
                Some(node) => {
                    link = node.next.as_ref();
                    skipped += 1;
                }
                None => break,
            }
        }
        List {
            head: link.cloned(),
            len: self.len - skipped,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> List<U> {
        self.iter().map(f).collect()
    }

    pub fn filter<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> List<T>
    where
        T: Clone,
    {
        self.iter().filter(|x| predicate(*x)).cloned().collect()
    }

    pub fn flat_map<U, I, F>(&self, f: F) -> List<U>
    where
        F: FnMut(&T) -> I,
        I: IntoIterator<Item = U>,
    {
        self.iter().flat_map(f).collect()
    }

    pub fn reverse(&self) -> List<T>
    where
        T: Clone,
    {
        self.iter()
            .fold(List::empty(), |acc, elem| acc.prepend(elem.clone()))
    }

    /// True when both lists start with the very same node.
    pub fn shares_structure_with(&self, other: &List<T>) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::empty()
    }
}

// Unlink iteratively so long lists don't blow the stack.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(node) = link {
            match Rc::try_unwrap(node) {
                Ok(mut node) => link = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(List::empty(), |acc, elem| acc.prepend(elem))
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.elem
        })
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List({})", self.iter().join(", "))
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
