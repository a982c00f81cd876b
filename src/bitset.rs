// T9 Search Mark Bits
// Growable bitmap of key positions taking part in a match

/// Per-character match marks for one partition of a T9 key
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkBits {
    words: Vec<u64>,
}

impl MarkBits {
    /// Creates an empty bitmap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `idx` is set.
    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        self.words
            .get(idx / 64)
            .is_some_and(|word| word & (1u64 << (idx % 64)) != 0)
    }

    /// Sets the bit at `idx`, growing the bitmap if needed.
    #[inline]
    pub fn set(&mut self, idx: usize) {
        let word_idx = idx / 64;
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }
        self.words[word_idx] |= 1u64 << (idx % 64);
    }

    /// Sets every bit in `from..to`.
    pub fn set_range(&mut self, from: usize, to: usize) {
        for idx in from..to {
            self.set(idx);
        }
    }

    /// Clears all bits, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.words.fill(0);
    }
}
