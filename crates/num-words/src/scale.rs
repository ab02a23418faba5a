//! Power-of-1000 scale words.
//!
//! A locale provides a short base table and a super scale word. The scale of
//! cluster `i` is `base[i % period]` followed by the super scale repeated
//! `i / period` times, so magnitudes have no fixed upper bound.

/// Scale lookup for one locale.
#[derive(Debug, Clone, Copy)]
pub struct ScaleTable {
    base: &'static [&'static str],
    super_scale: &'static str,
}

impl ScaleTable {
    /// `base[0]` must be the empty word for the units cluster.
    pub const fn new(base: &'static [&'static str], super_scale: &'static str) -> Self {
        Self { base, super_scale }
    }

    /// Number of clusters covered before the super scale repeats.
    pub fn period(&self) -> usize {
        self.base.len()
    }

    /// The repeating scale word.
    pub fn super_scale(&self) -> &'static str {
        self.super_scale
    }

    /// Base scale word for a cluster index, if it has one.
    pub fn base_word(&self, index: usize) -> Option<&'static str> {
        let word = self.base[index % self.period()];
        (!word.is_empty()).then_some(word)
    }

    /// True when `index` is the lowest cluster of its period.
    pub fn closes_period(&self, index: usize) -> bool {
        index % self.period() == 0
    }

    /// How many times the super scale follows the period containing `index`.
    pub fn super_repeat(&self, index: usize) -> usize {
        index / self.period()
    }

    /// Full scale name for a standalone cluster at `index`.
    pub fn name(&self, index: usize) -> String {
        let mut words: Vec<&str> = self.base_word(index).into_iter().collect();
        words.extend(std::iter::repeat_n(self.super_scale, self.super_repeat(index)));
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VI: ScaleTable = ScaleTable::new(&["", "nghìn", "triệu"], "tỷ");

    #[test]
    fn test_base_words() {
        assert_eq!(VI.period(), 3);
        assert_eq!(VI.base_word(0), None);
        assert_eq!(VI.base_word(1), Some("nghìn"));
        assert_eq!(VI.base_word(3), None);
        assert_eq!(VI.base_word(5), Some("triệu"));
    }

    #[test]
    fn test_derived_names() {
        assert_eq!(VI.name(0), "");
        assert_eq!(VI.name(3), "tỷ");
        assert_eq!(VI.name(4), "nghìn tỷ");
        assert_eq!(VI.name(5), "triệu tỷ");
        assert_eq!(VI.name(6), "tỷ tỷ");
        assert_eq!(VI.name(10), "nghìn tỷ tỷ tỷ");
    }

    #[test]
    fn test_period_boundaries() {
        assert!(VI.closes_period(0));
        assert!(!VI.closes_period(2));
        assert!(VI.closes_period(6));
        assert_eq!(VI.super_repeat(2), 0);
        assert_eq!(VI.super_repeat(7), 2);
    }
}
