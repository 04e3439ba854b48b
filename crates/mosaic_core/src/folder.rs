//! Source folder references.

use serde::{Deserialize, Serialize};

/// A Drive folder to scan.
///
/// `name` is optional in configuration and filled in from the Drive API
/// when missing.
///
/// # Examples
///
/// ```
/// use mosaic_core::FolderRef;
///
/// let folder = FolderRef::new("1AbC").with_name("Holidays");
/// assert_eq!(folder.display_name(), "Holidays");
/// assert_eq!(FolderRef::new("1AbC").display_name(), "1AbC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderRef {
    /// Opaque Drive folder id
    pub id: String,
    /// Human readable folder name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FolderRef {
    /// Creates a folder reference without a name.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Returns the reference with `name` set.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True when the name still has to be looked up.
    pub fn needs_name(&self) -> bool {
        self.name.as_deref().is_none_or(|n| n.trim().is_empty())
    }

    /// The name if known, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
