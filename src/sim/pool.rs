// pool.rs - Fixed-capacity entity arena
//
// Records live in an arena and are addressed by handle. The active list holds
// handles in no particular order; removal is swap-and-pop. Released handles go
// on a free stack and their records (with any buffers they own) are reused by
// the next acquire, so a warm pool never allocates.

pub struct Pool<T> {
    records: Vec<T>,
    active: Vec<usize>,
    free: Vec<usize>,
    capacity: usize,
}

impl<T: Default> Pool<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            active: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Take a record from the free stack, or grow the arena.
    /// Returns None when the category is full.
    pub fn acquire(&mut self) -> Option<&mut T> {
        if self.is_full() { return None; }

        let handle = match self.free.pop() {
            Some(h) => h,
            None => {
                self.records.push(T::default());
                self.records.len() - 1
            }
        };
        self.active.push(handle);
        Some(&mut self.records[handle])
    }
}

impl<T> Pool<T> {
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.active.len() >= self.capacity
    }

    /// Records ever allocated (active + free)
    pub fn allocated(&self) -> usize {
        self.records.len()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Release the record at position `i` of the active list (swap-and-pop)
    pub fn release(&mut self, i: usize) {
        if i >= self.active.len() { return; }
        let handle = self.active.swap_remove(i);
        self.free.push(handle);
    }

    /// Release every record failing `keep`. Order of survivors is not preserved.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        let mut i = 0;
        while i < self.active.len() {
            if keep(&self.records[self.active[i]]) {
                i += 1;
            } else {
                self.release(i);
            }
        }
    }

    /// Return every active record to the free stack
    pub fn clear(&mut self) {
        self.free.extend(self.active.drain(..));
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.active.iter().map(|&h| &self.records[h])
    }

    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut T)) {
        for &h in &self.active {
            f(&mut self.records[h]);
        }
    }
}
