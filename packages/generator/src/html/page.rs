//! Page assembly and output.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use super::card::card_view;
use super::tags::{body, div, head, html, script, style, title, Attrs};
use crate::error::Result;
use crate::types::ViewModel;

/// Render the complete HTML document for a view model.
pub fn render_page(view_model: &ViewModel) -> String {
    let cards: Vec<String> = view_model
        .cards
        .iter()
        .enumerate()
        .map(|(card_idx, card)| card_view(card_idx, card))
        .collect();

    let mut body_children = vec![div(&Attrs::new().with_class("container"), &cards)];
    if let Some(source) = &view_model.script {
        body_children.push(script(source));
    }

    html(
        &view_model.lang,
        &[
            head(&[title(&view_model.title), style(&view_model.stylesheet)]),
            body(&body_children),
        ],
    )
}

/// Write a rendered document to a file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames,
/// so an interrupted run never leaves a truncated page behind.
pub fn save_html(document: &str, output_file: &Path) -> Result<()> {
    if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = output_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index.html".to_string());
    let temp_file = output_file.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(document.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    fs::rename(&temp_file, output_file)?;

    tracing::info!(path = %output_file.display(), bytes = document.len(), "Saved page");
    Ok(())
}
