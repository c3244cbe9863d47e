//! Size query used by index checks.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// Anything with a constant-time element count.
///
/// Index checks only need the count, never the elements, so this is
/// implemented for the standard collections and for references to them.
pub trait Collection {
    /// Number of elements; valid indexes are `0..len`.
    fn len(&self) -> usize;

    /// Whether there are no valid indexes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Collection for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl Collection for str {
    fn len(&self) -> usize {
        str::len(self)
    }
}

impl Collection for String {
    fn len(&self) -> usize {
        String::len(self)
    }
}

impl<T> Collection for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Collection for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Collection for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> Collection for BinaryHeap<T> {
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<T, S> Collection for HashSet<T, S> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<T> Collection for BTreeSet<T> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    fn len(&self) -> usize {
        C::len(self)
    }
}

impl<C: Collection + ?Sized> Collection for Box<C> {
    fn len(&self) -> usize {
        C::len(self)
    }
}
