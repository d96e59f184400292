/// Iterator adapter yielding `(byte_offset, char)` pairs, like
/// `str::char_indices` but over any character stream.
pub struct CharOffsets<I: Iterator<Item = char>> {
    chars: I,
    offset: usize,
}

impl<I: Iterator<Item = char>> CharOffsets<I> {
    pub fn new(chars: I) -> Self {
        Self { chars, offset: 0 }
    }
}

impl<I: Iterator<Item = char>> Iterator for CharOffsets<I> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.chars.next()?;
        let offset = self.offset;
        self.offset += ch.len_utf8();
        Some((offset, ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_advance_by_utf8_width() {
        let pairs: Vec<_> = CharOffsets::new("aé€b".chars()).collect();
        assert_eq!(pairs, vec![(0, 'a'), (1, 'é'), (3, '€'), (6, 'b')]);
    }
}
