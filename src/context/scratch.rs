/// Reusable string buffers for assembling text while parsing.
///
/// Buffers keep their capacity between uses so that steady-state parsing
/// does not allocate per record.
#[derive(Debug, Default)]
pub struct ScratchBuffers {
    buffer: String,
    buffers: Vec<String>,
}

impl ScratchBuffers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The main buffer, cleared
    pub fn line(&mut self) -> &mut String {
        self.buffer.clear();
        &mut self.buffer
    }

    /// `count` cleared buffers from the pool, growing it if needed
    pub fn pool(&mut self, count: usize) -> &mut [String] {
        if self.buffers.len() < count {
            self.buffers.resize_with(count, String::new);
        }
        let pool = &mut self.buffers[..count];
        for buffer in pool.iter_mut() {
            buffer.clear();
        }
        pool
    }

    /// The main buffer plus `count` pool buffers, all cleared
    pub fn split(&mut self, count: usize) -> (&mut String, &mut [String]) {
        self.buffer.clear();
        if self.buffers.len() < count {
            self.buffers.resize_with(count, String::new);
        }
        let pool = &mut self.buffers[..count];
        for buffer in pool.iter_mut() {
            buffer.clear();
        }
        (&mut self.buffer, pool)
    }

    /// Number of buffers currently held by the pool
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.buffers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_cleared_and_keeps_capacity() {
        let mut scratch = ScratchBuffers::new();
        scratch.line().push_str("@SQ\tSN:chr1\tLN:100");
        let capacity = scratch.line().capacity();

        let line = scratch.line();
        assert!(line.is_empty());
        assert_eq!(line.capacity(), capacity);
    }

    #[test]
    fn test_pool_grows_only_when_needed() {
        let mut scratch = ScratchBuffers::new();
        scratch.pool(2)[0].push_str("chr1");
        assert_eq!(scratch.pool_size(), 2);

        let pool = scratch.pool(1);
        assert_eq!(pool.len(), 1);
        assert!(pool[0].is_empty());
        assert_eq!(scratch.pool_size(), 2);

        scratch.pool(4);
        assert_eq!(scratch.pool_size(), 4);
    }

    #[test]
    fn test_split_hands_out_disjoint_buffers() {
        let mut scratch = ScratchBuffers::new();
        let (line, pool) = scratch.split(2);
        line.push_str("line");
        pool[0].push_str("a");
        pool[1].push_str("b");
        assert_eq!(line, "line");
        assert_eq!(pool, ["a".to_string(), "b".to_string()]);
    }
}
