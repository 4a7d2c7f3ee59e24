use super::shell::ShellId;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the topology store.
    pub struct SolidId;
}

/// A bounded volume enclosed by one or more shells.
///
/// The outer shell is traversed first, then voids in insertion order.
#[derive(Debug, Clone)]
pub struct SolidData {
    pub outer_shell: ShellId,
    pub inner_shells: Vec<ShellId>,
}

impl SolidData {
    /// A solid bounded by a single shell.
    #[must_use]
    pub fn new(outer_shell: ShellId) -> Self {
        Self {
            outer_shell,
            inner_shells: Vec::new(),
        }
    }

    /// All shells, outer first.
    pub fn shells(&self) -> impl Iterator<Item = ShellId> + '_ {
        std::iter::once(self.outer_shell).chain(self.inner_shells.iter().copied())
    }
}
