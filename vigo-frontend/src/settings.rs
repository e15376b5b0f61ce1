use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Settings {
    /// Offset of the first cell reported by the terminal for pointer events.
    pub pointer_origin: u16,
    pub startup_path: Option<PathBuf>,
    pub tab_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pointer_origin: 0,
            startup_path: None,
            tab_width: 4,
        }
    }
}
