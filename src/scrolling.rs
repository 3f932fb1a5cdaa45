//! List scrolling state
//!
//! Tracks the selected index and the window of items currently shown for a
//! vertically scrolled list. The selection is kept inside the window when it
//! moves.

/// Scroll and selection state for a list panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Currently selected index into the full item list
    pub selected_index: usize,
    /// Index of the first visible item
    pub offset: usize,
    /// Total number of items in the list
    pub total_items: usize,
    /// Number of items the panel can show at once
    pub visible_items: usize,
}

impl ScrollState {
    /// Create a state for `total_items` entries shown `visible_items` at a time
    pub fn new(total_items: usize, visible_items: usize) -> Self {
        Self {
            selected_index: 0,
            offset: 0,
            total_items,
            visible_items: visible_items.max(1),
        }
    }

    /// Move the selection up one entry, scrolling if it leaves the window
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            if self.selected_index < self.offset {
                self.offset = self.selected_index;
            }
        }
    }

    /// Move the selection down one entry, scrolling if it leaves the window
    pub fn move_down(&mut self) {
        if self.total_items > 0 && self.selected_index + 1 < self.total_items {
            self.selected_index += 1;
            if self.selected_index >= self.offset + self.visible_items {
                self.offset = self.selected_index + 1 - self.visible_items;
            }
        }
    }

    /// Jump up a full window
    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(self.visible_items);
        if self.selected_index < self.offset {
            self.offset = self.selected_index;
        }
    }

    /// Jump down a full window
    pub fn page_down(&mut self) {
        if self.total_items == 0 {
            return;
        }
        self.selected_index = (self.selected_index + self.visible_items).min(self.total_items - 1);
        if self.selected_index >= self.offset + self.visible_items {
            self.offset = self.selected_index + 1 - self.visible_items;
        }
    }

    /// Set the selection directly, clamped to the list, keeping it visible
    pub fn set_selected(&mut self, index: usize) {
        self.selected_index = if self.total_items == 0 {
            0
        } else {
            index.min(self.total_items - 1)
        };
        if self.selected_index < self.offset {
            self.offset = self.selected_index;
        } else if self.selected_index >= self.offset + self.visible_items {
            self.offset = self.selected_index + 1 - self.visible_items;
        }
    }

    /// Resize to a new item count, clamping selection and offset
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        let max_index = total_items.saturating_sub(1);
        if self.selected_index > max_index {
            self.selected_index = max_index;
        }
        if self.offset > self.selected_index {
            self.offset = self.selected_index;
        }
    }

    /// Half-open range of the indices currently visible
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.visible_items).min(self.total_items);
        (self.offset, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_stays_in_window() {
        let mut scroll = ScrollState::new(10, 3);
        for _ in 0..5 {
            scroll.move_down();
        }
        assert_eq!(scroll.selected_index, 5);
        let (start, end) = scroll.visible_range();
        assert!(start <= 5 && 5 < end);

        for _ in 0..10 {
            scroll.move_up();
        }
        assert_eq!(scroll.selected_index, 0);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_bounds() {
        let mut scroll = ScrollState::new(2, 5);
        scroll.move_up();
        assert_eq!(scroll.selected_index, 0);
        scroll.move_down();
        scroll.move_down();
        assert_eq!(scroll.selected_index, 1);

        let mut empty = ScrollState::new(0, 5);
        empty.move_down();
        empty.page_down();
        assert_eq!(empty.selected_index, 0);
    }

    #[test]
    fn test_set_total_clamps_selection() {
        let mut scroll = ScrollState::new(10, 4);
        scroll.set_selected(9);
        scroll.set_total(3);
        assert_eq!(scroll.selected_index, 2);
        let (start, end) = scroll.visible_range();
        assert!(start <= 2 && 2 < end);
    }
}
