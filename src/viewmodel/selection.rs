/// Cursor and scroll window over a list of `len` rows.
///
/// Unlike a wrapping menu the cursor clamps at both ends, and the window
/// follows it: moving above the window scrolls up to the cursor, moving
/// below scrolls down just far enough to keep it as the last visible row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    cursor: usize,
    offset: usize,
    height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            cursor: 0,
            offset: 0,
            height: 1,
        }
    }
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            height: height.max(1),
            ..Self::default()
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
    }

    /// Jump back to the first row
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    /// Move the cursor by `delta` rows, clamped into `[0, len-1]`
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
        self.scroll_to_cursor();
    }

    /// Move the cursor to `index`, clamped into the list
    pub fn move_to(&mut self, index: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = index.min(len - 1);
        self.scroll_to_cursor();
    }

    /// Clamp cursor and offset after the list or window changed
    pub fn normalize(&mut self, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        self.cursor = self.cursor.min(len - 1);
        let max_offset = len.saturating_sub(self.height);
        self.offset = self.offset.min(max_offset);
        self.scroll_to_cursor();
    }

    /// Visible index range, clipped to `len`
    pub fn visible_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        let end = (self.offset + self.height).min(len);
        start..end
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        if self.cursor >= self.offset + self.height {
            self.offset = self.cursor + 1 - self.height;
        }
    }
}
