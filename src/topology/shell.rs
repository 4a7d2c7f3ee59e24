use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a shell in the topology store.
    pub struct ShellId;
}

/// A connected set of faces. The face order is the traversal order
/// reported to graph builders.
#[derive(Debug, Clone)]
pub struct ShellData {
    pub faces: Vec<FaceId>,
}

impl ShellData {
    #[must_use]
    pub fn new(faces: Vec<FaceId>) -> Self {
        Self { faces }
    }
}
