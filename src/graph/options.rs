use serde::{Deserialize, Serialize};

/// Settings for [`FaceAdjacency`](super::FaceAdjacency).
///
/// Missing fields deserialize to their defaults, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjacencyOptions {
    /// Emit a self-loop for each seam edge. Off by default.
    pub self_loops: bool,
}

impl AdjacencyOptions {
    #[must_use]
    pub fn with_self_loops(mut self, self_loops: bool) -> Self {
        self.self_loops = self_loops;
        self
    }
}
