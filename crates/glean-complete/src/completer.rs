//! Public façade over the identifier database.

use std::path::PathBuf;

use crate::database::IdentifierDatabase;
use crate::tags::extract_identifiers_from_tags_file;
use glean_unicode::UnicodeDecodeError;

/// Completion entry point: feed it identifiers per (filetype, filepath),
/// query it for ranked candidate texts.
#[derive(Default)]
pub struct IdentifierCompleter {
    identifier_database: IdentifierDatabase,
}

impl IdentifierCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a completer seeded with unscoped identifiers (empty filetype and
    /// filepath). Mostly a convenience for tests and benchmarks.
    pub fn with_identifiers(identifiers: Vec<String>) -> Result<Self, UnicodeDecodeError> {
        Self::with_identifiers_for_file(identifiers, "", "")
    }

    pub fn with_identifiers_for_file(
        identifiers: Vec<String>,
        filetype: &str,
        filepath: &str,
    ) -> Result<Self, UnicodeDecodeError> {
        let completer = Self::new();
        completer.add_identifiers_to_database(identifiers, filetype, filepath)?;
        Ok(completer)
    }

    pub fn add_identifiers_to_database(
        &self,
        new_identifiers: Vec<String>,
        filetype: &str,
        filepath: &str,
    ) -> Result<(), UnicodeDecodeError> {
        self.identifier_database
            .add_identifiers(new_identifiers, filetype, filepath)
    }

    /// Replace the identifiers stored for one file, e.g. after a buffer was
    /// re-parsed.
    pub fn clear_for_file_and_add_identifiers_to_database(
        &self,
        new_identifiers: Vec<String>,
        filetype: &str,
        filepath: &str,
    ) -> Result<(), UnicodeDecodeError> {
        self.identifier_database.clear_for_file(filetype, filepath);
        self.add_identifiers_to_database(new_identifiers, filetype, filepath)
    }

    /// Load identifiers from ctags-style tag files. Unreadable files are
    /// skipped.
    pub fn add_identifiers_to_database_from_tag_files(
        &self,
        absolute_paths_to_tag_files: &[PathBuf],
    ) -> Result<(), UnicodeDecodeError> {
        for path in absolute_paths_to_tag_files {
            tracing::debug!(
                target: "glean.tags",
                path = %path.display(),
                "loading tag file"
            );
            self.identifier_database
                .add_identifier_map(extract_identifiers_from_tags_file(path))?;
        }
        Ok(())
    }

    /// Query the unscoped identifiers. See
    /// [`candidates_for_query_and_type`](Self::candidates_for_query_and_type).
    pub fn candidates_for_query(
        &self,
        query: &str,
        max_candidates: usize,
    ) -> Result<Vec<String>, UnicodeDecodeError> {
        self.candidates_for_query_and_type(query, "", max_candidates)
    }

    /// The `max_candidates` best-matching identifier texts under `filetype`,
    /// best first. A `max_candidates` of 0 means no limit.
    pub fn candidates_for_query_and_type(
        &self,
        query: &str,
        filetype: &str,
        max_candidates: usize,
    ) -> Result<Vec<String>, UnicodeDecodeError> {
        let results =
            self.identifier_database
                .results_for_query(query, filetype, max_candidates)?;
        Ok(results.iter().map(|result| result.text().to_owned()).collect())
    }
}
