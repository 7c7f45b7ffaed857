use crate::grid::CellIndex;

/// Fixed-capacity double-ended queue of cell indices over a ring buffer.
///
/// `head` is the next free slot when growing toward the front and `tail` the
/// next free slot when growing toward the back. An empty deque has the two
/// cursors adjacent (`tail` one slot behind `head`). Once the deque is full
/// they sit adjacent again, so the live count tells the two apart.
///
/// Pushing onto a full deque is a no-op, and popping or peeking an empty one
/// yields `0`. Callers size `C` so neither case comes up in normal use.
pub struct BoundedDeque<const C: usize> {
    buffer: [CellIndex; C],
    head: usize,
    tail: usize,
    len: usize,
}

impl<const C: usize> BoundedDeque<C> {
    pub fn new() -> Self {
        BoundedDeque { buffer: [0; C], head: 0, tail: C.saturating_sub(1), len: 0 }
    }

    /// Forget every element. The buffer contents are left in place.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = C.saturating_sub(1);
        self.len = 0;
    }

    pub fn capacity(&self) -> usize {
        C
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == C
    }

    pub fn push_front(&mut self, value: CellIndex) {
        if self.is_full() {
            return;
        }
        self.buffer[self.head] = value;
        self.head = Self::next(self.head);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: CellIndex) {
        if self.is_full() {
            return;
        }
        self.buffer[self.tail] = value;
        self.tail = Self::prev(self.tail);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> CellIndex {
        if self.is_empty() {
            return 0;
        }
        self.head = Self::prev(self.head);
        self.len -= 1;
        self.buffer[self.head]
    }

    pub fn pop_back(&mut self) -> CellIndex {
        if self.is_empty() {
            return 0;
        }
        self.tail = Self::next(self.tail);
        self.len -= 1;
        self.buffer[self.tail]
    }

    pub fn front(&self) -> CellIndex {
        if self.is_empty() {
            return 0;
        }
        self.buffer[Self::prev(self.head)]
    }

    pub fn back(&self) -> CellIndex {
        if self.is_empty() {
            return 0;
        }
        self.buffer[Self::next(self.tail)]
    }

    /// Elements from front to back.
    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        let head = self.head;
        (1..=self.len).map(move |i| self.buffer[(head + C - i) % C])
    }

    ///////////////////////////////////////////////////////////////////////////

    fn next(i: usize) -> usize {
        if i + 1 == C { 0 } else { i + 1 }
    }

    fn prev(i: usize) -> usize {
        if i == 0 { C - 1 } else { i - 1 }
    }
}
