/// LIFO with a hard capacity. Once full, further pushes are refused; the
/// oldest entries are never evicted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedStack<T> {
    entries: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        BoundedStack {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns false, leaving the stack untouched, when it is already full.
    pub fn push(&mut self, entry: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
