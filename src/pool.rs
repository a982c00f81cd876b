// T9 Search Object Pool
// Bounded free-list of scratch buffers shared by the encoder and matcher

use crate::bitset::MarkBits;
use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};

/// Number of scratch objects each shared pool keeps
pub const POOL_CAPACITY: usize = 4;

/// Scratch buffers for building keys and formatted syllables
pub(crate) static STRING_POOL: Pool<String> = Pool::new(POOL_CAPACITY);

/// Scratch bitmaps for match marks
pub(crate) static MARK_POOL: Pool<MarkBits> = Pool::new(POOL_CAPACITY);

/// Scratch objects that can be wiped before going back into a pool
pub trait Recycle {
    /// Reset to an empty state, keeping any allocation.
    fn recycle(&mut self);
}

impl Recycle for String {
    fn recycle(&mut self) {
        self.clear();
    }
}

impl Recycle for MarkBits {
    fn recycle(&mut self) {
        self.clear();
    }
}

/// Thread-safe pool of at most `capacity` boxed instances
///
/// Instances are handed out by value, so identity is the heap address of the
/// box: releasing a box and acquiring again returns that same allocation.
pub struct Pool<T> {
    slots: Mutex<Vec<Box<T>>>,
    capacity: usize,
}

impl<T> Pool<T> {
    /// Create an empty pool
    ///
    /// # Panics
    /// If `capacity` is zero
    pub const fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "The max pool size must be > 0");
        Self {
            slots: parking_lot::const_mutex(Vec::new()),
            capacity,
        }
    }

    /// Take an instance from the pool, `None` when the pool is empty
    pub fn acquire(&self) -> Option<Box<T>> {
        self.slots.lock().pop()
    }

    /// Return an instance to the pool
    ///
    /// # Returns
    /// Whether the instance was kept; a full pool drops it
    ///
    /// # Panics
    /// If the same instance is already in the pool
    pub fn release(&self, instance: Box<T>) -> bool {
        let mut slots = self.slots.lock();

        if std::mem::size_of::<T>() != 0 {
            let resident = slots
                .iter()
                .any(|pooled| std::ptr::eq::<T>(&**pooled, &*instance));
            assert!(!resident, "Already in the pool!");
        }

        if slots.len() < self.capacity {
            slots.push(instance);
            true
        } else {
            tracing::trace!(capacity = self.capacity, "pool full, dropping instance");
            false
        }
    }

    /// Number of instances currently pooled
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    /// Whether the pool holds no instances
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of pooled instances
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Recycle + Default> Pool<T> {
    /// Borrow a scratch instance, allocating when the pool is empty
    ///
    /// The instance is recycled and released when the guard drops.
    pub fn take(&self) -> Pooled<'_, T> {
        let value = self.acquire().unwrap_or_else(|| {
            tracing::trace!(capacity = self.capacity, "pool empty, allocating");
            Box::default()
        });

        Pooled {
            pool: self,
            value: Some(value),
        }
    }
}

/// Scratch instance borrowed from a [`Pool`]
pub struct Pooled<'a, T: Recycle> {
    pool: &'a Pool<T>,
    value: Option<Box<T>>,
}

impl<T: Recycle> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => unreachable!("pooled value taken before drop"),
        }
    }
}

impl<T: Recycle> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.value {
            Some(value) => value,
            None => unreachable!("pooled value taken before drop"),
        }
    }
}

impl<T: Recycle> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        if let Some(mut value) = self.value.take() {
            value.recycle();
            self.pool.release(value);
        }
    }
}
