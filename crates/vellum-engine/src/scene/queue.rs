use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Order is the contract: renderers process commands strictly in emission
/// order, later commands drawing over earlier ones. Scissor commands toggle a
/// single clip rectangle that applies to everything after them until the next
/// scissor command.
///
/// Performance characteristics:
/// - `push()` is amortized O(1)
/// - `clear()` keeps the allocation, so a warmed queue does not allocate per frame
#[derive(Debug, Default)]
pub struct CommandQueue {
    items: Vec<DrawCmd>,
}

impl CommandQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns commands in emission (paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a command at the end of the stream.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Moves every command out in paint order, leaving the queue empty.
    #[inline]
    pub fn drain(&mut self) -> std::vec::Drain<'_, DrawCmd> {
        self.items.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::rgba;
    use crate::scene::TextAlign;

    #[test]
    fn push_preserves_emission_order() {
        let mut q = CommandQueue::new();
        q.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0), rgba(1, 1, 1, 1));
        q.push_text(0.0, 0.0, TextAlign::Left, "a", rgba(2, 2, 2, 2), 8.0);
        q.push_scissor_off();

        let kinds: Vec<_> = q.items().iter().map(DrawCmd::kind).collect();
        assert_eq!(kinds, ["rect", "text", "scissor"]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut q = CommandQueue::new();
        q.push_scissor_off();
        q.push_scissor_off();
        q.push_scissor_off();
        let cap = q.items.capacity();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.items.capacity(), cap);
    }

    #[test]
    fn drain_empties_queue() {
        let mut q = CommandQueue::new();
        q.push_scissor_off();
        q.push_scissor_off();
        assert_eq!(q.drain().count(), 2);
        assert_eq!(q.len(), 0);
    }
}
