/// Fixed-capacity FIFO. Pushing into a full buffer overwrites the oldest
/// slot and hands the evicted value back.
#[derive(Clone, Debug)]
pub(crate) struct RingBuffer<T> {
    buffer: Vec<T>,
    /// Index of the oldest element once the buffer has wrapped.
    head: usize,
    capacity: usize,
}

impl<T: Copy> RingBuffer<T> {
    /// Storage is allocated up front so the hot path never reallocates.
    #[must_use]
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn push(&mut self, value: T) -> Option<T> {
        if self.is_full() {
            let old = self.buffer[self.head];

            self.buffer[self.head] = value;

            self.head += 1;
            if self.head == self.capacity {
                self.head = 0;
            }

            Some(old)
        } else {
            self.buffer.push(value);

            None
        }
    }

    /// Most recently pushed value.
    #[inline]
    pub(crate) fn last(&self) -> Option<T> {
        if self.buffer.is_empty() {
            return None;
        }

        let idx = if self.head == 0 {
            self.buffer.len() - 1
        } else {
            self.head - 1
        };

        Some(self.buffer[idx])
    }

    /// Oldest to newest.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (newer, older) = self.buffer.split_at(self.head);
        older.iter().chain(newer.iter())
    }
}
