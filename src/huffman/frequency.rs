use std::collections::HashMap;

/// Occurrence counts for every distinct byte in one input sequence.
///
/// Built once per compress call and discarded afterwards; nothing is cached
/// across calls.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<u8, u64>,
}

impl FrequencyTable {
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = HashMap::new();
        for byte in data.iter().copied() {
            *counts.entry(byte).or_insert(0u64) += 1;
        }
        Self { counts }
    }

    /// Number of distinct bytes observed.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, byte: u8) -> u64 {
        self.counts.get(&byte).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&b, &c)| (b, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_distinct_byte() {
        let table = FrequencyTable::from_bytes(b"This is a test!");
        assert_eq!(table.distinct(), 9);
        assert_eq!(table.count(b's'), 3);
        assert_eq!(table.count(b'i'), 2);
        assert_eq!(table.count(b't'), 2);
        assert_eq!(table.count(b' '), 3);
        assert_eq!(table.count(b'T'), 1);
        assert_eq!(table.count(b'h'), 1);
        assert_eq!(table.count(b'a'), 1);
        assert_eq!(table.count(b'e'), 1);
        assert_eq!(table.count(b'!'), 1);
        assert_eq!(table.count(b'z'), 0);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = FrequencyTable::from_bytes(&[]);
        assert!(table.is_empty());
        assert_eq!(table.distinct(), 0);
    }
}
