//! Parameter document loading and the interactive edit loop.
//!
//! The document is decoded from the template set's values file. When the
//! edit step is enabled, editing happens on a private working copy in the
//! system temp directory so a broken edit session never clobbers the
//! original; the copy is removed on every exit path.

use crate::editor::EditorBridge;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use indexmap::IndexMap;
use log::{debug, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Key/value data rendered into template entries.
///
/// Values are arbitrary decoded structures; key order follows the values
/// file so template iteration over the document is stable.
pub type Document = IndexMap<String, serde_json::Value>;

/// States of the interactive edit loop.
enum EditState {
    Editing,
    Decoding,
    AwaitingAck(Error),
    Done(Document),
}

/// Decodes a parameter document, accepting JSON first and YAML as a
/// fallback. An empty file is an empty document.
pub fn decode_document(content: &str) -> Result<Document> {
    if content.trim().is_empty() {
        return Ok(Document::new());
    }
    if let Ok(doc) = serde_json::from_str(content) {
        return Ok(doc);
    }
    serde_yaml::from_str(content).map_err(|e| Error::DecodeError(e.to_string()))
}

/// Loads the document at `path`.
///
/// A missing file is not an error: the caller receives an empty document
/// and `found == false`. Only an unambiguous not-found condition is folded
/// into that path; every other probe failure is fatal.
pub fn load_document(path: &Path) -> Result<(Document, bool)> {
    match fs::read_to_string(path) {
        Ok(content) => Ok((decode_document(&content)?, true)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok((Document::new(), false)),
        Err(e) => Err(Error::IoError(e)),
    }
}

/// Creates the private working copy for an edit session, seeded with the
/// current values file content when one exists and empty otherwise.
fn create_working_copy(values_path: &Path) -> Result<NamedTempFile> {
    let suffix = match values_path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => ".yaml".to_string(),
    };
    let mut working = Builder::new().prefix("skel-values-").suffix(&suffix).tempfile()?;

    match fs::read(values_path) {
        Ok(content) => {
            working.write_all(&content)?;
            working.flush()?;
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::IoError(e)),
    }

    Ok(working)
}

/// Resolves the parameter document for a generation run.
///
/// Without the edit step this is a plain load, where a missing values file
/// yields an empty document. With the edit step enabled the user edits a
/// working copy until it decodes: editor failures are fatal, decode
/// failures loop back through an acknowledgment prompt. The loop has no
/// iteration cap; it ends only on a successful decode or a fatal error.
pub fn resolve_document(
    values_path: &Path,
    invoke_editor: bool,
    editor_cmd: &str,
    bridge: &dyn EditorBridge,
    prompter: &dyn Prompter,
) -> Result<Document> {
    if !invoke_editor {
        let (doc, found) = load_document(values_path)?;
        if !found {
            debug!(
                "No parameter document at {}, proceeding with an empty one",
                values_path.display()
            );
        }
        return Ok(doc);
    }

    // The temp file guard removes the copy on every exit path, including
    // the fatal ones; the explicit close below reports a failed removal.
    let working = create_working_copy(values_path)?;
    debug!("Editing working copy {}", working.path().display());

    let mut state = EditState::Editing;
    loop {
        state = match state {
            EditState::Editing => {
                bridge.edit(editor_cmd, working.path())?;
                EditState::Decoding
            }
            EditState::Decoding => match load_document(working.path()) {
                Ok((doc, _)) => EditState::Done(doc),
                Err(err @ Error::DecodeError(_)) => EditState::AwaitingAck(err),
                Err(err) => return Err(err),
            },
            EditState::AwaitingAck(err) => {
                prompter.acknowledge(&err.to_string())?;
                EditState::Editing
            }
            EditState::Done(doc) => {
                if let Err(err) = working.close() {
                    warn!("Failed to remove working copy: {}", err);
                }
                return Ok(doc);
            }
        };
    }
}
