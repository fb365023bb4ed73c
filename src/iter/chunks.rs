pub struct Chunks<T: Copy, I: Iterator<Item = T>> {
    source: I,
    size: usize,
}

impl<T: Copy, I: Iterator<Item = T>> Chunks<T, I> {
    pub fn new(source: I, size: usize) -> Chunks<T, I> {
        Self { source, size }
    }
}

impl<T: Copy, I: Iterator<Item = T>> Iterator for Chunks<T, I> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let mut buf = Vec::with_capacity(self.size);
        // Take up to `size` items; the final chunk may come up short.
        while buf.len() < self.size {
            match self.source.next() {
                Some(item) => buf.push(item),
                None => break,
            }
        }
        if buf.is_empty() {
            None
        } else {
            Some(buf)
        }
    }
}
