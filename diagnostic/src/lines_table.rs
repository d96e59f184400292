/// Offsets of line starts, built up while lexing.
///
/// Line and column numbers are 1-based; offsets past the last recorded line
/// resolve to the last line.
#[derive(Debug, Clone)]
pub struct LinesTable {
    offsets: Vec<usize>,
}

impl LinesTable {
    pub fn new() -> Self {
        LinesTable { offsets: vec![0] }
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn add_line(&mut self, start_offset: usize) {
        self.offsets.push(start_offset);
    }

    fn line_index(&self, offset: usize) -> usize {
        self.offsets
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    pub fn line(&self, offset: usize) -> usize {
        self.line_index(offset) + 1
    }

    pub fn column(&self, offset: usize) -> usize {
        let line_index = self.line_index(offset);
        offset - self.offsets[line_index] + 1
    }

    /// Start offset of a 1-based line number, if that line was recorded.
    pub fn offset(&self, line: usize) -> Option<usize> {
        self.offsets.get(line.wrapping_sub(1)).copied()
    }
}

impl Default for LinesTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from_text(s: &str) -> LinesTable {
        let mut t = LinesTable::new();
        for (i, b) in s.bytes().enumerate() {
            if b == b'\n' {
                t.add_line(i + 1);
            }
        }
        t
    }

    #[test]
    fn single_line() {
        let t = table_from_text("FD 100");
        assert_eq!(t.offsets(), &[0]);
        assert_eq!(t.line(0), 1);
        assert_eq!(t.line(5), 1);
        assert_eq!(t.column(3), 4);
        // past the end still resolves to line 1
        assert_eq!(t.line(50), 1);
    }

    #[test]
    fn multi_line_boundaries() {
        let t = table_from_text("FD 10\nBK 20\nPU");
        assert_eq!(t.offsets(), &[0, 6, 12]);

        assert_eq!(t.line(0), 1);
        assert_eq!(t.line(5), 1);
        assert_eq!(t.line(6), 2);
        assert_eq!(t.column(6), 1);
        assert_eq!(t.line(11), 2);
        assert_eq!(t.line(12), 3);
        assert_eq!(t.column(13), 2);
        assert_eq!(t.line(100), 3);
    }

    #[test]
    fn line_start_offsets() {
        let t = table_from_text("a\nbb\nccc\n");
        assert_eq!(t.offset(1), Some(0));
        assert_eq!(t.offset(2), Some(2));
        assert_eq!(t.offset(3), Some(5));
        assert_eq!(t.offset(4), Some(9));
        assert_eq!(t.offset(5), None);
        assert_eq!(t.offset(0), None);
    }
}
