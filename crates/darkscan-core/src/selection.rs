//! The file the picker currently holds.
//!
//! Reading a picked file's bytes takes time. [`FileSelection`] forgets
//! the previous file the moment a new pick starts, so an analysis
//! started during the read finds nothing selected instead of the old
//! file. A read that finishes after a newer pick began is dropped.

use crate::types::SelectedFile;

/// Identifies one pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickTicket(u64);

/// Picker contents, with pick generations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    file: Option<SelectedFile>,
    generation: u64,
}

impl FileSelection {
    /// An empty picker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The picker changed. Clears the held file until the new pick
    /// finishes.
    pub fn begin_pick(&mut self) -> PickTicket {
        self.generation += 1;
        self.file = None;
        PickTicket(self.generation)
    }

    /// Store the result of the pick identified by `ticket`.
    ///
    /// Returns `false` and keeps the selection unchanged if a newer
    /// pick has started since.
    pub fn finish_pick(&mut self, ticket: PickTicket, file: Option<SelectedFile>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.file = file;
        true
    }

    /// The file an analysis submitted now would send.
    #[must_use]
    pub const fn current(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }
}
