/// Forward-only traversal over a slice with one extra token of lookahead.
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }

    /// Returns the index of the item [`peek`](Self::peek) would return.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn peek(&self) -> Option<&'a T> {
        self.items.get(self.position)
    }

    pub fn peek_next(&self) -> Option<&'a T> {
        self.items.get(self.position + 1)
    }

    /// Returns every item not yet consumed.
    pub fn remaining(&self) -> &'a [T] {
        self.items.get(self.position..).unwrap_or(&[])
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }
}
