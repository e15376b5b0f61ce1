#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ViewPort {
    pub height: u16,
    /// First visible screen column after tab and wide char expansion.
    pub horizontal_index: usize,
    pub selection_armed: bool,
    pub tab_width: usize,
    pub vertical_index: usize,
    pub width: u16,
}

impl Default for ViewPort {
    fn default() -> Self {
        Self {
            height: 0,
            horizontal_index: 0,
            selection_armed: true,
            tab_width: 4,
            vertical_index: 0,
            width: 0,
        }
    }
}

impl ViewPort {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            height,
            width,
            ..Default::default()
        }
    }

    /// Index of the last line that fits into the view port. A view port
    /// without height still shows the line at `vertical_index`.
    pub fn get_last_visible_index(&self) -> usize {
        self.vertical_index + usize::from(self.height.saturating_sub(1))
    }

    pub fn get_max_vertical_index(&self, line_count: usize) -> usize {
        line_count.saturating_sub(usize::from(self.height.max(1)))
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.vertical_index <= index && index <= self.get_last_visible_index()
    }
}
