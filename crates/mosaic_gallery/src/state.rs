//! Gallery state and its display projections.

use derive_getters::Getters;
use mosaic_core::{FolderRef, MediaItem, MediaKind};

/// Shown when the manifest cannot be fetched or parsed.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load media.json";

/// Shown when the manifest holds no items.
pub const EMPTY_MESSAGE: &str = "No media found. Ensure the Drive folder is public.";

/// Shown when the selected folder has no items.
pub const EMPTY_FOLDER_MESSAGE: &str = "No media in this folder.";

/// Load outcome of a gallery.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GalleryStatus {
    /// Manifest loaded with at least one item
    #[display("ready")]
    Ready,
    /// Manifest loaded but empty
    #[display("empty")]
    Empty,
    /// Manifest could not be loaded; holds the diagnostic
    #[display("load failed: {}", _0)]
    LoadFailed(String),
}

/// Everything the gallery displays.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GalleryState {
    /// Items in manifest order
    media: Vec<MediaItem>,
    /// Folder filter entries; empty disables filtering
    folders: Vec<FolderRef>,
    /// Selected folder id
    current_folder: Option<String>,
    /// Load outcome
    status: GalleryStatus,
}

/// What a card shows before it is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview<'a> {
    /// Still image
    Image {
        /// Image source
        src: &'a str,
    },
    /// Muted looping video with a poster frame
    Video {
        /// Player source
        src: &'a str,
        /// Poster image
        poster: &'a str,
    },
}

/// Display projection of one media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    /// The underlying item
    pub item: &'a MediaItem,
    /// Image or video
    pub kind: MediaKind,
    /// Caption / alt text
    pub label: &'a str,
    /// Grid preview
    pub preview: Preview<'a>,
    /// Download link
    pub download: &'a str,
}

/// A selectable folder in the folder filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderChip<'a> {
    /// Folder id
    pub id: &'a str,
    /// Folder name, or the id when unnamed
    pub label: &'a str,
    /// Whether this folder is selected
    pub active: bool,
}

impl GalleryState {
    /// Build the state for a loaded manifest.
    ///
    /// The first folder, if any, starts selected.
    pub fn new(media: Vec<MediaItem>, folders: Vec<FolderRef>) -> Self {
        let status = if media.is_empty() {
            GalleryStatus::Empty
        } else {
            GalleryStatus::Ready
        };
        let current_folder = folders.first().map(|f| f.id.clone());
        Self {
            media,
            folders,
            current_folder,
            status,
        }
    }

    /// State for a manifest that failed to load.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            media: Vec::new(),
            folders: Vec::new(),
            current_folder: None,
            status: GalleryStatus::LoadFailed(reason.into()),
        }
    }

    /// Select a folder from the folder list.
    ///
    /// Returns false, leaving the selection alone, for an unknown id.
    pub fn select_folder(&mut self, id: &str) -> bool {
        if self.folders.iter().any(|f| f.id == id) {
            self.current_folder = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Show every item regardless of folder.
    pub fn clear_selection(&mut self) {
        self.current_folder = None;
    }

    /// Items in the selected folder, or all items without a selection.
    pub fn visible_items(&self) -> Vec<&MediaItem> {
        match &self.current_folder {
            Some(id) => self.media.iter().filter(|m| m.folder_id() == id).collect(),
            None => self.media.iter().collect(),
        }
    }

    /// Cards for the visible items.
    pub fn cards(&self) -> Vec<Card<'_>> {
        self.visible_items().into_iter().map(card).collect()
    }

    /// Folder filter entries with the selection marked.
    pub fn folder_chips(&self) -> Vec<FolderChip<'_>> {
        self.folders
            .iter()
            .map(|f| FolderChip {
                id: &f.id,
                label: f.display_name(),
                active: self.current_folder.as_deref() == Some(f.id.as_str()),
            })
            .collect()
    }

    /// Status line to show instead of (or above) the grid, if any.
    pub fn status_message(&self) -> Option<&'static str> {
        match self.status {
            GalleryStatus::LoadFailed(_) => Some(LOAD_FAILED_MESSAGE),
            GalleryStatus::Empty => Some(EMPTY_MESSAGE),
            GalleryStatus::Ready if self.visible_items().is_empty() => Some(EMPTY_FOLDER_MESSAGE),
            GalleryStatus::Ready => None,
        }
    }
}

fn card(item: &MediaItem) -> Card<'_> {
    let kind = item.kind();
    let preview = match kind {
        MediaKind::Video => Preview::Video {
            src: item.url_view(),
            poster: item.thumb(),
        },
        MediaKind::Image => Preview::Image { src: item.thumb() },
    };
    Card {
        item,
        kind,
        label: item.name(),
        preview,
        download: item.url_dl(),
    }
}
