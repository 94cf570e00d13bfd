//! Startup font resolution over a prioritized list of candidate files.

use std::fs;
use std::path::PathBuf;

use crate::config::FontCandidate;
use crate::error::{MenuError, MenuResult};

/// Font bytes read from the first usable candidate.
#[derive(Debug, Clone)]
pub struct LoadedFont {
    pub path: PathBuf,
    pub family: String,
    pub bytes: Vec<u8>,
}

/// Reads candidates in order and returns the first non-empty file.
pub fn load_first_font(candidates: &[FontCandidate]) -> MenuResult<LoadedFont> {
    for candidate in candidates {
        match fs::read(&candidate.path) {
            Ok(bytes) if !bytes.is_empty() => {
                tracing::info!(
                    path = %candidate.path.display(),
                    family = %candidate.family,
                    "font loaded"
                );
                return Ok(LoadedFont {
                    path: candidate.path.clone(),
                    family: candidate.family.clone(),
                    bytes,
                });
            }
            Ok(_) => {
                tracing::debug!(path = %candidate.path.display(), "font file is empty, skipping");
            }
            Err(err) => {
                tracing::debug!(path = %candidate.path.display(), error = %err, "font unavailable");
            }
        }
    }

    Err(MenuError::NoUsableFont {
        tried: candidates.iter().map(|c| c.path.clone()).collect(),
    })
}
