use crate::lang::Integer;

/// ## Line number to source position links
///
/// Lines register themselves as they execute. The first position
/// recorded for a line number wins and a full index quietly stops
/// growing; callers fall back to scanning the program text.

#[derive(Debug)]
pub struct LineIndex<const N: usize> {
    entries: [(Integer, usize); N],
    len: usize,
}

impl<const N: usize> Default for LineIndex<N> {
    fn default() -> Self {
        LineIndex {
            entries: [(0, 0); N],
            len: 0,
        }
    }
}

impl<const N: usize> LineIndex<N> {
    pub fn new() -> LineIndex<N> {
        LineIndex::default()
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= N
    }

    pub fn find(&self, line_number: Integer) -> Option<usize> {
        self.entries[..self.len]
            .iter()
            .find(|(number, _)| *number == line_number)
            .map(|(_, pos)| *pos)
    }

    /// Returns false when the line was already known or there is no room.
    pub fn insert(&mut self, line_number: Integer, pos: usize) -> bool {
        if self.is_full() || self.find(line_number).is_some() {
            return false;
        }
        self.entries[self.len] = (line_number, pos);
        self.len += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let mut index: LineIndex<4> = LineIndex::new();
        assert!(index.insert(10, 0));
        assert!(!index.insert(10, 42));
        assert_eq!(index.find(10), Some(0));
        assert_eq!(index.find(20), None);
    }

    #[test]
    fn test_full_index_drops_new_lines() {
        let mut index: LineIndex<2> = LineIndex::new();
        assert!(index.insert(10, 0));
        assert!(index.insert(20, 7));
        assert!(index.is_full());
        assert!(!index.insert(30, 14));
        assert_eq!(index.find(30), None);
        assert_eq!(index.find(20), Some(7));
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.find(10), None);
    }
}
