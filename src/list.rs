extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::num::NonZeroUsize;

/// Slot index of the head sentinel (most recently used end).
const HEAD: usize = 0;
/// Slot index of the tail sentinel (least recently used end).
const TAIL: usize = 1;
/// Link value for "no neighbour". Only the sentinels' outer links use it.
const NIL: usize = usize::MAX;
/// Upper bound on slots reserved up front; larger lists grow on demand.
const MAX_PREALLOCATED_SLOTS: usize = 4096;

/// Handle to an occupied slot of a [`List`].
///
/// Handles stay valid until the entry they point at is removed. A handle
/// whose slot has since been reused refers to the new occupant, so callers
/// must drop handles when they remove entries (the LRU map does this).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntryId(usize);

/// A slot in the arena.
///
/// `val` is `None` for the two sentinels and for slots on the free list.
struct Slot<T> {
    val: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Slot<T> {
    fn sentinel(prev: usize, next: usize) -> Self {
        Slot {
            val: None,
            prev,
            next,
        }
    }
}

/// A doubly linked list with fixed capacity, stored in a `Vec` and linked by
/// index instead of by pointer.
///
/// Slots 0 and 1 are the head and tail sentinels, so linking and unlinking
/// never branch on the ends of the list. Removed slots go to a free list and
/// are reused by later insertions, so the arena never grows beyond
/// `cap + 2` slots.
///
/// # Examples
///
/// ```ignore
/// use core::num::NonZeroUsize;
///
/// let mut list = List::new(NonZeroUsize::new(3).unwrap());
/// let a = list.add(10).unwrap();
/// let _b = list.add(20).unwrap();
///
/// list.move_to_front(a);
/// assert_eq!(list.first(), Some(&10));
/// assert_eq!(list.remove_last(), Some(20));
/// ```
pub(crate) struct List<T> {
    /// Maximum number of items the list can hold.
    cap: NonZeroUsize,
    /// Current number of items in the list.
    len: usize,
    /// Sentinels followed by data slots.
    slots: Vec<Slot<T>>,
    /// Indices of vacated slots available for reuse.
    free: Vec<usize>,
}

impl<T> List<T> {
    /// Creates a new list that holds at most `cap` items.
    pub(crate) fn new(cap: NonZeroUsize) -> List<T> {
        let mut slots = Vec::with_capacity(cap.get().min(MAX_PREALLOCATED_SLOTS) + 2);
        slots.push(Slot::sentinel(NIL, TAIL));
        slots.push(Slot::sentinel(HEAD, NIL));
        List {
            cap,
            len: 0,
            slots,
            free: Vec::new(),
        }
    }

    /// Returns the maximum number of items the list can hold.
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    /// Returns the current number of items in the list.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list is at capacity.
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.cap.get()
    }

    fn is_occupied(&self, idx: usize) -> bool {
        idx > TAIL && self.slots.get(idx).is_some_and(|slot| slot.val.is_some())
    }

    /// Links `idx` right after the head sentinel.
    fn attach(&mut self, idx: usize) {
        let old_first = self.slots[HEAD].next;
        self.slots[idx].prev = HEAD;
        self.slots[idx].next = old_first;
        self.slots[HEAD].next = idx;
        self.slots[old_first].prev = idx;
    }

    /// Unlinks `idx` from its neighbours. The slot keeps its value.
    fn detach(&mut self, idx: usize) {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
        self.slots[idx].prev = NIL;
        self.slots[idx].next = NIL;
    }

    /// Adds a value to the front of the list.
    ///
    /// Returns the handle of the new entry, or `None` if the list is full.
    pub(crate) fn add(&mut self, v: T) -> Option<EntryId> {
        if self.is_full() {
            return None;
        }
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx].val = Some(v);
                idx
            }
            None => {
                self.slots.push(Slot {
                    val: Some(v),
                    prev: NIL,
                    next: NIL,
                });
                self.slots.len() - 1
            }
        };
        self.attach(idx);
        self.len += 1;
        Some(EntryId(idx))
    }

    /// Moves an entry to the front of the list.
    ///
    /// Does nothing for a stale handle or an entry that is already first.
    pub(crate) fn move_to_front(&mut self, id: EntryId) {
        if !self.is_occupied(id.0) || self.slots[HEAD].next == id.0 {
            return;
        }
        self.detach(id.0);
        self.attach(id.0);
    }

    /// Removes an entry and returns its value, recycling the slot.
    pub(crate) fn remove(&mut self, id: EntryId) -> Option<T> {
        if !self.is_occupied(id.0) {
            return None;
        }
        self.detach(id.0);
        let val = self.slots[id.0].val.take();
        self.free.push(id.0);
        self.len -= 1;
        val
    }

    /// Removes the last (least recently used) entry.
    pub(crate) fn remove_last(&mut self) -> Option<T> {
        let last = self.slots[TAIL].prev;
        if last == HEAD {
            return None;
        }
        self.remove(EntryId(last))
    }

    /// Replaces the value stored in an entry, returning the old one.
    ///
    /// The entry keeps its position. Returns `None` for a stale handle.
    pub(crate) fn update(&mut self, id: EntryId, v: T) -> Option<T> {
        if !self.is_occupied(id.0) {
            return None;
        }
        self.slots[id.0].val.as_mut().map(|cur| mem::replace(cur, v))
    }

    pub(crate) fn get(&self, id: EntryId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.val.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.val.as_mut())
    }

    /// Returns the first (most recently used) value.
    pub(crate) fn first(&self) -> Option<&T> {
        self.slots[self.slots[HEAD].next].val.as_ref()
    }

    /// Returns the last (least recently used) value.
    pub(crate) fn last(&self) -> Option<&T> {
        self.slots[self.slots[TAIL].prev].val.as_ref()
    }

    /// Clears the list, removing all entries.
    pub(crate) fn clear(&mut self) {
        self.slots.truncate(2);
        self.slots[HEAD].next = TAIL;
        self.slots[TAIL].prev = HEAD;
        self.free.clear();
        self.len = 0;
    }

    /// Iterates values from front to back.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.slots[HEAD].next,
            remaining: self.len,
        }
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("capacity", &self.cap)
            .field("length", &self.len)
            .field("free_slots", &self.free.len())
            .finish()
    }
}

/// Front-to-back iterator over a [`List`].
pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.cursor == TAIL || self.remaining == 0 {
            return None;
        }
        let slot = &self.list.slots[self.cursor];
        self.cursor = slot.next;
        self.remaining -= 1;
        slot.val.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
