use super::input::Span;

/// Captured quotation bodies, addressed by integer handle.
///
/// Handles are assigned from 0 in capture order and are never reused
/// until the store is cleared.
#[derive(Debug, Default, Clone)]
pub struct QuoteStore {
    quotes: Vec<Span>,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(&mut self, body: Span) -> i32 {
        let handle = self.quotes.len() as i32;
        self.quotes.push(body);
        handle
    }

    pub fn get(&self, handle: i32) -> Option<Span> {
        usize::try_from(handle)
            .ok()
            .and_then(|idx| self.quotes.get(idx))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn clear(&mut self) {
        self.quotes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles() {
        let mut store = QuoteStore::new();
        assert_eq!(store.capture(Span::new(2, 5)), 0);
        assert_eq!(store.capture(Span::new(10, 1)), 1);
        assert_eq!(store.len(), 2);

        assert_eq!(store.get(0), Some(Span::new(2, 5)));
        assert_eq!(store.get(1), Some(Span::new(10, 1)));
        assert_eq!(store.get(2), None);
        assert_eq!(store.get(-1), None);
    }
}
