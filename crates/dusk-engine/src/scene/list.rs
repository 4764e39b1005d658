use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Items are painted in the order they were pushed: later items always land
/// on top of earlier ones. Callers wanting a different stacking must push in
/// that order.
///
/// `clear()` keeps the allocation, so a list reused across frames stops
/// allocating once it has seen its largest frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
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

    /// Appends a draw command on top of everything recorded so far.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;

    #[test]
    fn push_preserves_call_order() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0));
        dl.push_solid_circle(Vec2::new(5.0, 5.0), 2.0, 16, Color::rgb(0.0, 1.0, 0.0));
        dl.push_solid_rect(Rect::new(2.0, 2.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 1.0));

        let kinds: Vec<_> = dl.items().iter().map(DrawCmd::kind).collect();
        assert_eq!(kinds, ["rect", "ellipse", "rect"]);
    }

    #[test]
    fn clear_empties_but_reuses() {
        let mut dl = DrawList::new();
        for _ in 0..32 {
            dl.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(1.0, 1.0, 1.0));
        }
        dl.clear();
        assert!(dl.is_empty());
        assert_eq!(dl.len(), 0);
    }
}
