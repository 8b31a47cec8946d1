//! Recency List Module
//!
//! Arena-backed doubly linked list that keeps cache entries in recency order.

// == Node ==
/// A single entry in the recency list, linked to its neighbours by slot index.
#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    /// Slot of the next older entry
    prev: Option<usize>,
    /// Slot of the next newer entry
    next: Option<usize>,
}

// == Recency List ==
/// Tracks entries from least recently used to most recently used.
///
/// Nodes live in a contiguous arena and link to each other by slot index:
/// - Head = Least recently used
/// - Tail = Most recently used
///
/// Freed slots are recycled through a free list, so a slot index handed out by
/// [`RecencyList::push_back`] stays valid until that entry is removed. Every
/// operation addressed by slot is O(1).
#[derive(Debug, Clone)]
pub struct RecencyList<K, V> {
    /// Node storage; `None` marks a free slot
    slots: Vec<Option<Node<K, V>>>,
    /// Indices of free slots available for reuse
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Back ==
    /// Appends an entry as most recently used and returns its slot.
    pub fn push_back(&mut self, key: K, value: V) -> usize {
        let node = Node {
            key,
            value,
            prev: None,
            next: None,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.link_back(idx);
        self.len += 1;
        idx
    }

    // == Move To Back ==
    /// Marks the entry in `idx` as most recently used.
    ///
    /// Does nothing if the slot is free or already at the back.
    pub fn move_to_back(&mut self, idx: usize) {
        if self.tail == Some(idx) || self.node(idx).is_none() {
            return;
        }
        self.unlink(idx);
        self.link_back(idx);
    }

    // == Remove ==
    /// Removes the entry in `idx` and returns it.
    pub fn remove(&mut self, idx: usize) -> Option<(K, V)> {
        self.node(idx)?;
        self.unlink(idx);

        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        self.len -= 1;
        Some((node.key, node.value))
    }

    // == Pop Front ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_front(&mut self) -> Option<(K, V)> {
        let head = self.head?;
        self.remove(head)
    }

    // == Accessors ==
    /// Returns the key stored in `idx`.
    pub fn key(&self, idx: usize) -> Option<&K> {
        self.node(idx).map(|node| &node.key)
    }

    /// Returns the value stored in `idx`.
    pub fn value(&self, idx: usize) -> Option<&V> {
        self.node(idx).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored in `idx`.
    pub fn value_mut(&mut self, idx: usize) -> Option<&mut V> {
        self.node_mut(idx).map(|node| &mut node.value)
    }

    /// Returns the least recently used entry without removing it.
    pub fn front(&self) -> Option<(&K, &V)> {
        self.head
            .and_then(|idx| self.node(idx))
            .map(|node| (&node.key, &node.value))
    }

    // == Length ==
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Removes every entry and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Iterate ==
    /// Iterates entries from least to most recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // == Linking ==
    fn node(&self, idx: usize) -> Option<&Node<K, V>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<K, V>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    /// Detaches `idx` from its neighbours, leaving the node itself in place.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev.and_then(|p| self.node_mut(p)) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.node_mut(n)) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }
    }

    /// Attaches a detached `idx` after the current tail.
    fn link_back(&mut self, idx: usize) {
        let old_tail = self.tail;
        if let Some(node) = self.node_mut(idx) {
            node.prev = old_tail;
            node.next = None;
        }

        match old_tail.and_then(|t| self.node_mut(t)) {
            Some(tail_node) => tail_node.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }
}

// == Iterator ==
/// Borrowing iterator over a [`RecencyList`], oldest entry first.
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList<&'static str, i32>) -> Vec<&'static str> {
        list.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<&str, i32> = RecencyList::with_capacity(4);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
    }

    #[test]
    fn test_push_back_keeps_insertion_order() {
        let mut list = RecencyList::with_capacity(3);

        list.push_back("key1", 1);
        list.push_back("key2", 2);
        list.push_back("key3", 3);

        assert_eq!(list.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(list.front(), Some((&"key1", &1)));
        assert_eq!(keys(&list), vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_move_to_back() {
        let mut list = RecencyList::with_capacity(3);

        let a = list.push_back("a", 1);
        list.push_back("b", 2);
        list.push_back("c", 3);

        list.move_to_back(a);

        assert_eq!(list.len(), 3);
        assert_eq!(keys(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_to_back_middle_and_tail() {
        let mut list = RecencyList::with_capacity(3);

        list.push_back("a", 1);
        let b = list.push_back("b", 2);
        let c = list.push_back("c", 3);

        list.move_to_back(c);
        assert_eq!(keys(&list), vec!["a", "b", "c"]);

        list.move_to_back(b);
        assert_eq!(keys(&list), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_pop_front() {
        let mut list = RecencyList::with_capacity(3);

        list.push_back("key1", 1);
        list.push_back("key2", 2);
        list.push_back("key3", 3);

        assert_eq!(list.pop_front(), Some(("key1", 1)));
        assert_eq!(list.len(), 2);

        assert_eq!(list.pop_front(), Some(("key2", 2)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_pop_front_empty() {
        let mut list: RecencyList<&str, i32> = RecencyList::with_capacity(1);
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = RecencyList::with_capacity(3);

        list.push_back("key1", 1);
        let key2 = list.push_back("key2", 2);
        list.push_back("key3", 3);

        assert_eq!(list.remove(key2), Some(("key2", 2)));
        assert_eq!(list.len(), 2);
        assert_eq!(keys(&list), vec!["key1", "key3"]);

        // Removing the same slot twice is a no-op
        assert_eq!(list.remove(key2), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list = RecencyList::with_capacity(2);

        let a = list.push_back("a", 1);
        list.push_back("b", 2);
        list.remove(a);

        let c = list.push_back("c", 3);
        assert_eq!(c, a);
        assert_eq!(list.key(c), Some(&"c"));
        assert_eq!(keys(&list), vec!["b", "c"]);
    }

    #[test]
    fn test_value_mut() {
        let mut list = RecencyList::with_capacity(1);
        let a = list.push_back("a", 1);

        if let Some(value) = list.value_mut(a) {
            *value = 100;
        }

        assert_eq!(list.value(a), Some(&100));
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = RecencyList::with_capacity(3);

        let a = list.push_back("a", 1);
        let b = list.push_back("b", 2);
        let c = list.push_back("c", 3);

        // Touch a, then c, then b: oldest is now a
        list.move_to_back(a);
        list.move_to_back(c);
        list.move_to_back(b);

        assert_eq!(list.pop_front(), Some(("a", 1)));
        assert_eq!(list.pop_front(), Some(("c", 3)));
        assert_eq!(list.pop_front(), Some(("b", 2)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::with_capacity(2);
        list.push_back("a", 1);
        list.push_back("b", 2);

        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
        list.push_back("c", 3);
        assert_eq!(keys(&list), vec!["c"]);
    }
}
