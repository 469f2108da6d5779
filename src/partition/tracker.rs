use super::*;

#[inline]
fn slot(c: u8) -> usize {
    debug_assert!(c.is_ascii_lowercase(), "{c:#04x} is not a lowercase letter");
    (c - FIRST_LETTER) as usize
}

/// Letter counts for a window of lowercase ASCII text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BalanceTracker {
    counts: [u32; ALPHABET_LEN],
}
impl BalanceTracker {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add(&mut self, c: u8) {
        self.counts[slot(c)] += 1;
    }
    /// Take one occurrence of `c` out of the window. Does nothing if `c` isn't in it.
    pub fn remove(&mut self, c: u8) {
        let count = &mut self.counts[slot(c)];
        *count = count.saturating_sub(1);
    }
    pub fn count(&self, c: u8) -> u32 {
        self.counts[slot(c)]
    }
    /// Number of distinct letters in the window.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&n| n != 0).count()
    }
    /// Total number of letters in the window.
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&n| n as usize).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }
    pub fn clear(&mut self) {
        self.counts = [0; ALPHABET_LEN];
    }
    /// Whether every letter present occurs the same number of times.
    ///
    /// Absent letters are ignored, so an empty window is balanced.
    pub fn is_balanced(&self) -> bool {
        let mut prev = None;
        for &n in &self.counts {
            if n == 0 {
                continue;
            }
            match prev {
                None => prev = Some(n),
                Some(p) if p != n => return false,
                Some(_) => {}
            }
        }
        true
    }
}
impl Extend<u8> for BalanceTracker {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for c in iter {
            self.add(c);
        }
    }
}
impl<'a> Extend<&'a u8> for BalanceTracker {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
impl FromIterator<u8> for BalanceTracker {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut tracker = Self::new();
        tracker.extend(iter);
        tracker
    }
}
