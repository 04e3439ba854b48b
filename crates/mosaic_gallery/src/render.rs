//! Plain-text rendering for terminals.

use crate::{GalleryState, Preview};
use std::io::Write;

/// Write the folder chips, the status line and one line per visible card.
///
/// ```text
/// Folders: [Alpha] *[Bravo]*
/// video  clip.mp4
///        view      https://drive.google.com/file/d/b1/preview?autoplay=1
///        download  https://drive.google.com/uc?export=download&id=b1
/// ```
pub fn render_text<W: Write>(state: &GalleryState, out: &mut W) -> std::io::Result<()> {
    let chips = state.folder_chips();
    if !chips.is_empty() {
        let line: Vec<String> = chips
            .iter()
            .map(|c| {
                if c.active {
                    format!("*[{}]*", c.label)
                } else {
                    format!("[{}]", c.label)
                }
            })
            .collect();
        writeln!(out, "Folders: {}", line.join(" "))?;
    }

    if let Some(message) = state.status_message() {
        writeln!(out, "{}", message)?;
        return Ok(());
    }

    for card in state.cards() {
        writeln!(out, "{:<6} {}", card.kind.to_string(), card.label)?;
        let view = match card.preview {
            Preview::Video { src, .. } => src,
            Preview::Image { .. } => card.item.url_view().as_str(),
        };
        writeln!(out, "{:<6} {:<9} {}", "", "view", view)?;
        writeln!(out, "{:<6} {:<9} {}", "", "download", card.download)?;
    }
    Ok(())
}
