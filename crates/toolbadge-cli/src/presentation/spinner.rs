use crate::config::DEFAULT_SPINNER_FRAMES;

/// Frames of the pending progress affordance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    frames: Vec<String>,
}

impl Spinner {
    /// Falls back to the default frames when `frames` is empty
    pub fn new(frames: Vec<String>) -> Self {
        if frames.is_empty() {
            return Self::default();
        }
        Self { frames }
    }

    pub fn frame(&self, tick: usize) -> &str {
        &self.frames[tick % self.frames.len()]
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            frames: DEFAULT_SPINNER_FRAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
