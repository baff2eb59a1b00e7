use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Sentinel for absent links.
pub(crate) const NIL: usize = usize::MAX;

/// One arena slot: the canonical entry storage plus its recency links.
///
/// `prev`/`next` are atomics so the list can be spliced through a shared
/// reference. They are only ever touched while holding either the engine's
/// exclusive write guard or its recency mutex, so `Relaxed` ordering is
/// enough — the locks provide the synchronization edges.
#[derive(Debug)]
pub(crate) struct Slot {
    pub domain: Arc<str>,
    pub ip: Arc<str>,
    prev: AtomicUsize,
    next: AtomicUsize,
}

impl Slot {
    fn new(domain: Arc<str>, ip: Arc<str>) -> Self {
        Self {
            domain,
            ip,
            prev: AtomicUsize::new(NIL),
            next: AtomicUsize::new(NIL),
        }
    }
}

/// Recency-ordered doubly-linked list over an arena of slots.
///
/// Most-recently-used at the head, least-recently-used at the tail. Slots
/// are addressed by stable `usize` handles that survive splices, so the
/// index can hold a handle across any number of promotions. Freed handles
/// are recycled through a free list and the arena never grows beyond the
/// engine capacity.
#[derive(Debug)]
pub(crate) struct RecencyList {
    slots: Vec<Slot>,
    free: Vec<usize>,
    head: AtomicUsize,
    tail: AtomicUsize,
    len: usize,
}

impl RecencyList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: AtomicUsize::new(NIL),
            tail: AtomicUsize::new(NIL),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn ip(&self, idx: usize) -> Arc<str> {
        Arc::clone(&self.slots[idx].ip)
    }

    #[cfg(test)]
    pub fn domain(&self, idx: usize) -> &Arc<str> {
        &self.slots[idx].domain
    }

    pub fn set_ip(&mut self, idx: usize, ip: Arc<str>) {
        self.slots[idx].ip = ip;
    }

    /// Insert a new entry at the head, reusing a freed slot when one is
    /// available. Returns the entry's stable handle.
    pub fn push_front(&mut self, domain: Arc<str>, ip: Arc<str>) -> usize {
        let idx = match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx];
                slot.domain = domain;
                slot.ip = ip;
                idx
            }
            None => {
                self.slots.push(Slot::new(domain, ip));
                self.slots.len() - 1
            }
        };

        let old_head = *self.head.get_mut();
        *self.slots[idx].prev.get_mut() = NIL;
        *self.slots[idx].next.get_mut() = old_head;
        if old_head != NIL {
            *self.slots[old_head].prev.get_mut() = idx;
        } else {
            *self.tail.get_mut() = idx;
        }
        *self.head.get_mut() = idx;

        self.len += 1;
        idx
    }

    /// Unlink the least-recently-used entry and recycle its slot. Returns
    /// the freed handle and the evicted domain so the caller can drop the
    /// index entry in the same critical section.
    pub fn pop_back(&mut self) -> Option<(usize, Arc<str>)> {
        let tail = *self.tail.get_mut();
        if tail == NIL {
            return None;
        }

        let prev = *self.slots[tail].prev.get_mut();
        if prev != NIL {
            *self.slots[prev].next.get_mut() = NIL;
        } else {
            *self.head.get_mut() = NIL;
        }
        *self.tail.get_mut() = prev;

        self.free.push(tail);
        self.len -= 1;
        Some((tail, Arc::clone(&self.slots[tail].domain)))
    }

    /// Splice an existing entry to the head. No-op when it already is the
    /// head. Callable through a shared reference; the caller must hold the
    /// recency mutex or the exclusive guard.
    pub fn move_to_front(&self, idx: usize) {
        let head = self.head.load(Ordering::Relaxed);
        if head == idx {
            return;
        }

        let slot = &self.slots[idx];
        let prev = slot.prev.load(Ordering::Relaxed);
        let next = slot.next.load(Ordering::Relaxed);

        // idx is not the head, so a predecessor exists
        self.slots[prev].next.store(next, Ordering::Relaxed);
        if next != NIL {
            self.slots[next].prev.store(prev, Ordering::Relaxed);
        } else {
            self.tail.store(prev, Ordering::Relaxed);
        }

        slot.prev.store(NIL, Ordering::Relaxed);
        slot.next.store(head, Ordering::Relaxed);
        self.slots[head].prev.store(idx, Ordering::Relaxed);
        self.head.store(idx, Ordering::Relaxed);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
