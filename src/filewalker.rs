//! Collects upload payloads from the filesystem.
//!
//! The CLI accepts explicit files as well as directories; directories are
//! walked with hidden entries filtered out, and every file is read into an
//! in-memory [`UploadItem`].

use crate::section::UploadItem;
use anyhow::{Context, Result};
use ignore::{DirEntry, WalkBuilder};
use log::{debug, warn};
use memmap2::MmapOptions;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Reads every input path into an upload item, preserving the order in
/// which paths were given. Unreadable files are skipped with a warning
/// unless `fail_fast` is set.
pub fn collect_items(paths: &[PathBuf], fail_fast: bool) -> Result<Vec<UploadItem>> {
    let mut items = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in walk_dir(path) {
                push_item(&mut items, entry.path(), fail_fast)?;
            }
        } else {
            push_item(&mut items, path, fail_fast)?;
        }
    }

    Ok(items)
}

/// Walks a directory, skipping hidden files and folders.
fn walk_dir(root: &Path) -> Vec<DirEntry> {
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .ignore(false)
        .filter_entry(|e| !is_hidden(e))
        .build();

    let mut entries = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                if entry.path().is_file() {
                    entries.push(entry);
                }
            }
            Err(err) => {
                warn!("Error walking path: {err}");
            }
        }
    }

    // Walk order is filesystem-dependent; sort for stable section order
    entries.sort_by(|a, b| a.path().cmp(b.path()));
    entries
}

/// True if the entry's file name starts with a dot.
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .path()
        .file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.starts_with('.'))
}

fn push_item(items: &mut Vec<UploadItem>, path: &Path, fail_fast: bool) -> Result<()> {
    match read_item(path) {
        Ok(item) => {
            items.push(item);
            Ok(())
        }
        Err(err) if fail_fast => Err(err),
        Err(err) => {
            warn!("Skipping {}: {err:#}", path.display());
            Ok(())
        }
    }
}

/// Reads a file into an upload item via a memory map.
fn read_item(path: &Path) -> Result<UploadItem> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file")
        .to_string();

    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat file: {}", path.display()))?
        .len();

    // Mapping a zero-length file is an error on most platforms
    let bytes = if len == 0 {
        Vec::new()
    } else {
        let mmap = unsafe {
            MmapOptions::new()
                .map(&file)
                .with_context(|| format!("Failed to mmap file: {}", path.display()))?
        };
        mmap.to_vec()
    };

    debug!("Collected {} ({} bytes)", path.display(), bytes.len());
    Ok(UploadItem::new(name, bytes))
}
