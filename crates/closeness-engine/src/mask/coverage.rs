use std::fmt;

use super::Surface;

const WORD_BITS: usize = u64::BITS as usize;

/// Boolean coverage bitmap, bit-packed per row.
///
/// Each row starts on a fresh `u64` word; bits past `width` in the last word of a
/// row are never set, so popcounts over whole words are exact.
#[derive(Clone, PartialEq, Eq)]
pub struct CoverageMask {
    width: u32,
    height: u32,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl CoverageMask {
    /// Allocates an all-uncovered `width × height` mask.
    pub fn new(width: u32, height: u32) -> Self {
        let words_per_row = (width as usize).div_ceil(WORD_BITS);
        Self {
            width,
            height,
            words_per_row,
            bits: vec![0; words_per_row * height as usize],
        }
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of covered pixels.
    pub fn covered_count(&self) -> u64 {
        self.bits.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Iterates covered pixels in row-major order.
    pub fn iter_covered(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter(move |&x| self.is_covered(x, y)).map(move |x| (x, y))
        })
    }

    /// Raw packed words, `words_per_row` per row.
    #[inline]
    pub(crate) fn words(&self) -> &[u64] {
        &self.bits
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<(usize, u64)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let x = x as usize;
        let word = y as usize * self.words_per_row + x / WORD_BITS;
        Some((word, 1u64 << (x % WORD_BITS)))
    }
}

impl Surface for CoverageMask {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn set_covered(&mut self, x: u32, y: u32) {
        if let Some((word, bit)) = self.index(x, y) {
            self.bits[word] |= bit;
        }
    }

    #[inline]
    fn is_covered(&self, x: u32, y: u32) -> bool {
        self.index(x, y).is_some_and(|(word, bit)| self.bits[word] & bit != 0)
    }

    fn clear(&mut self) {
        self.bits.fill(0);
    }

    fn fill_span(&mut self, y: u32, x_start: u32, x_end: u32) {
        let x_end = x_end.min(self.width) as usize;
        let x_start = x_start as usize;
        if y >= self.height || x_start >= x_end {
            return;
        }

        let row = y as usize * self.words_per_row;
        let first = x_start / WORD_BITS;
        let last = (x_end - 1) / WORD_BITS;

        for w in first..=last {
            let lo = if w == first { x_start % WORD_BITS } else { 0 };
            let hi = if w == last { (x_end - 1) % WORD_BITS + 1 } else { WORD_BITS };
            let run = hi - lo;
            let mask = if run == WORD_BITS { u64::MAX } else { ((1u64 << run) - 1) << lo };
            self.bits[row + w] |= mask;
        }
    }
}

/// Renders the mask as rows of `#` (covered) and `.` (uncovered).
impl fmt::Debug for CoverageMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CoverageMask {}x{} ({} covered)", self.width, self.height, self.covered_count())?;
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.is_covered(x, y) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mask_is_empty() {
        let mask = CoverageMask::new(10, 4);
        assert_eq!(mask.dimensions(), (10, 4));
        assert_eq!(mask.covered_count(), 0);
        assert!(mask.is_empty());
    }

    #[test]
    fn set_and_query() {
        let mut mask = CoverageMask::new(70, 3);
        mask.set_covered(0, 0);
        mask.set_covered(69, 2);
        mask.set_covered(64, 1);
        assert!(mask.is_covered(0, 0));
        assert!(mask.is_covered(69, 2));
        assert!(mask.is_covered(64, 1));
        assert!(!mask.is_covered(63, 1));
        assert_eq!(mask.covered_count(), 3);
    }

    #[test]
    fn setting_twice_counts_once() {
        let mut mask = CoverageMask::new(4, 4);
        mask.set_covered(1, 1);
        mask.set_covered(1, 1);
        assert_eq!(mask.covered_count(), 1);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut mask = CoverageMask::new(4, 4);
        mask.set_covered(4, 0);
        mask.set_covered(0, 4);
        mask.fill_span(9, 0, 4);
        assert!(mask.is_empty());
        assert!(!mask.is_covered(100, 100));
    }

    #[test]
    fn fill_span_within_one_word() {
        let mut mask = CoverageMask::new(32, 2);
        mask.fill_span(1, 3, 5);
        assert_eq!(mask.iter_covered().collect::<Vec<_>>(), vec![(3, 1), (4, 1)]);
    }

    #[test]
    fn fill_span_across_words_is_clamped_to_width() {
        let mut mask = CoverageMask::new(200, 1);
        mask.fill_span(0, 60, 1000);
        assert_eq!(mask.covered_count(), 140);
        assert!(!mask.is_covered(59, 0));
        assert!(mask.is_covered(60, 0));
        assert!(mask.is_covered(127, 0));
        assert!(mask.is_covered(128, 0));
        assert!(mask.is_covered(199, 0));
    }

    #[test]
    fn fill_span_full_word() {
        let mut mask = CoverageMask::new(128, 1);
        mask.fill_span(0, 64, 128);
        assert_eq!(mask.covered_count(), 64);
        assert!(!mask.is_covered(63, 0));
    }

    #[test]
    fn empty_span_is_noop() {
        let mut mask = CoverageMask::new(16, 1);
        mask.fill_span(0, 5, 5);
        mask.fill_span(0, 9, 3);
        assert!(mask.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut mask = CoverageMask::new(16, 16);
        for y in 0..16 {
            mask.fill_span(y, 0, 16);
        }
        assert_eq!(mask.covered_count(), 256);
        mask.clear();
        assert!(mask.is_empty());
    }

    #[test]
    fn debug_draws_rows() {
        let mut mask = CoverageMask::new(3, 2);
        mask.set_covered(1, 0);
        mask.set_covered(2, 1);
        assert_eq!(format!("{:?}", mask), "CoverageMask 3x2 (2 covered)\n.#.\n..#\n");
    }

    #[test]
    fn default_fill_span_matches_override() {
        struct Naive(CoverageMask);
        impl Surface for Naive {
            fn width(&self) -> u32 { self.0.width() }
            fn height(&self) -> u32 { self.0.height() }
            fn set_covered(&mut self, x: u32, y: u32) { self.0.set_covered(x, y) }
            fn is_covered(&self, x: u32, y: u32) -> bool { self.0.is_covered(x, y) }
            fn clear(&mut self) { self.0.clear() }
        }

        let mut naive = Naive(CoverageMask::new(150, 2));
        let mut packed = CoverageMask::new(150, 2);
        for (y, a, b) in [(0, 5, 70), (1, 63, 65), (1, 100, 400)] {
            naive.fill_span(y, a, b);
            packed.fill_span(y, a, b);
        }
        assert_eq!(naive.0, packed);
    }
}
