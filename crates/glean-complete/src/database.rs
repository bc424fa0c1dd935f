//! Identifier storage, partitioned by filetype and file.
//!
//! The database records which identifier came from which file and what files
//! have which filetypes, so one buffer can be re-parsed without disturbing
//! identifiers gathered elsewhere. All the candidate data lives in the
//! interning repository; the database only holds references.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::{Hash, Hasher};

use parking_lot::RwLock;

use crate::candidate::{candidate_repository, Candidate};
use crate::ranking::{partial_sort, MatchResult};
use glean_unicode::{UnicodeDecodeError, Word};

/// filepath -> identifiers
pub type FilepathToIdentifiers = BTreeMap<String, Vec<String>>;

/// filetype -> (filepath -> identifiers)
pub type FiletypeIdentifierMap = BTreeMap<String, FilepathToIdentifiers>;

/// Interned candidates are unique per text, so identity comparison doubles
/// as text comparison for deduplication.
#[derive(Clone, Copy)]
struct CandidateRef(&'static Candidate);

impl PartialEq for CandidateRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for CandidateRef {}

impl Hash for CandidateRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0, state)
    }
}

// filetype -> (filepath -> candidates)
type FiletypeCandidateMap = HashMap<String, HashMap<String, HashSet<CandidateRef>>>;

/// Thread-safe store of every identifier the completer has seen.
///
/// Additions and per-file clears take the write lock; queries take the read
/// lock for the duration of the scan, so they observe a consistent snapshot.
#[derive(Default)]
pub struct IdentifierDatabase {
    filetype_candidate_map: RwLock<FiletypeCandidateMap>,
}

impl IdentifierDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch of identifiers grouped by filetype and filepath.
    pub fn add_identifier_map(
        &self,
        filetype_identifier_map: FiletypeIdentifierMap,
    ) -> Result<(), UnicodeDecodeError> {
        for (filetype, paths_to_identifiers) in filetype_identifier_map {
            for (filepath, identifiers) in paths_to_identifiers {
                self.add_identifiers(identifiers, &filetype, &filepath)?;
            }
        }
        Ok(())
    }

    /// Add identifiers seen in one file.
    pub fn add_identifiers(
        &self,
        identifiers: Vec<String>,
        filetype: &str,
        filepath: &str,
    ) -> Result<(), UnicodeDecodeError> {
        let count = identifiers.len();
        let candidates = candidate_repository().get_elements(identifiers)?;

        let mut map = self.filetype_candidate_map.write();
        let bucket = map
            .entry(filetype.to_owned())
            .or_default()
            .entry(filepath.to_owned())
            .or_default();
        for candidate in candidates {
            bucket.insert(CandidateRef(candidate));
        }

        tracing::debug!(
            target: "glean.complete",
            filetype,
            filepath,
            count,
            "added identifiers"
        );
        Ok(())
    }

    /// Forget the identifiers stored for one (filetype, filepath) pair.
    pub fn clear_for_file(&self, filetype: &str, filepath: &str) {
        let mut map = self.filetype_candidate_map.write();
        if let Some(candidates) = map
            .get_mut(filetype)
            .and_then(|paths| paths.get_mut(filepath))
        {
            candidates.clear();
            tracing::debug!(target: "glean.complete", filetype, filepath, "cleared identifiers");
        }
    }

    /// Rank every stored candidate under `filetype` against `query` and
    /// return the `max_results` best (all of them when `max_results` is 0).
    pub fn results_for_query(
        &self,
        query: &str,
        filetype: &str,
        max_results: usize,
    ) -> Result<Vec<MatchResult>, UnicodeDecodeError> {
        let query = Word::new(query)?;
        let mut results = Vec::new();

        {
            let map = self.filetype_candidate_map.read();
            let Some(paths_to_candidates) = map.get(filetype) else {
                return Ok(results);
            };

            let mut seen = HashSet::new();
            for candidates in paths_to_candidates.values() {
                for &candidate_ref in candidates {
                    if !seen.insert(candidate_ref) {
                        continue;
                    }

                    let candidate = candidate_ref.0;
                    if candidate.is_empty() || !candidate.contains_bytes(&query) {
                        continue;
                    }

                    if let Some(result) = candidate.query_match_result(&query) {
                        results.push(result);
                    }
                }
            }
        }

        partial_sort(&mut results, max_results);
        tracing::trace!(
            target: "glean.complete",
            query = query.text(),
            filetype,
            results = results.len(),
            "ranked query"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.text()).collect()
    }

    #[test]
    fn identifiers_are_partitioned_by_filetype() {
        let database = IdentifierDatabase::new();
        database
            .add_identifiers(vec!["fooBar".into()], "c", "foo.c")
            .unwrap();
        database
            .add_identifiers(vec!["fooBaz".into()], "rust", "foo.rs")
            .unwrap();

        let results = database.results_for_query("foo", "c", 0).unwrap();
        assert_eq!(texts(&results), ["fooBar"]);
        assert!(database.results_for_query("foo", "python", 0).unwrap().is_empty());
    }

    #[test]
    fn duplicate_identifiers_collapse_across_files() {
        let database = IdentifierDatabase::new();
        database
            .add_identifiers(vec!["foobar".into(), "foobar".into()], "c", "a.c")
            .unwrap();
        database
            .add_identifiers(vec!["foobar".into()], "c", "b.c")
            .unwrap();

        let results = database.results_for_query("foo", "c", 0).unwrap();
        assert_eq!(texts(&results), ["foobar"]);
    }

    #[test]
    fn clearing_one_file_keeps_the_others() {
        let database = IdentifierDatabase::new();
        database
            .add_identifiers(vec!["fromA".into()], "c", "a.c")
            .unwrap();
        database
            .add_identifiers(vec!["fromB".into()], "c", "b.c")
            .unwrap();

        database.clear_for_file("c", "a.c");

        let results = database.results_for_query("from", "c", 0).unwrap();
        assert_eq!(texts(&results), ["fromB"]);

        // Clearing an unknown bucket is a no-op.
        database.clear_for_file("c", "missing.c");
        database.clear_for_file("rust", "a.rs");
    }

    #[test]
    fn grouped_additions_reach_every_bucket() {
        let mut map = FiletypeIdentifierMap::new();
        map.entry("c".into())
            .or_default()
            .insert("a.c".into(), vec!["alpha".into()]);
        map.entry("cpp".into())
            .or_default()
            .insert("b.cpp".into(), vec!["beta".into()]);

        let database = IdentifierDatabase::new();
        database.add_identifier_map(map).unwrap();

        assert_eq!(
            texts(&database.results_for_query("al", "c", 0).unwrap()),
            ["alpha"]
        );
        assert_eq!(
            texts(&database.results_for_query("be", "cpp", 0).unwrap()),
            ["beta"]
        );
    }

    #[test]
    fn empty_and_unmatched_candidates_are_filtered() {
        let database = IdentifierDatabase::new();
        database
            .add_identifiers(
                vec!["".into(), "zzz".into(), "fooq".into()],
                "c",
                "a.c",
            )
            .unwrap();

        let results = database.results_for_query("foo", "c", 0).unwrap();
        assert_eq!(texts(&results), ["fooq"]);
    }

    #[test]
    fn concurrent_adds_and_queries_do_not_interfere() {
        let database = std::sync::Arc::new(IdentifierDatabase::new());

        let writers: Vec<_> = (0..4)
            .map(|w| {
                let database = std::sync::Arc::clone(&database);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        database
                            .add_identifiers(
                                vec![format!("ident_{w}_{i}")],
                                "c",
                                &format!("file{w}.c"),
                            )
                            .unwrap();
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let database = std::sync::Arc::clone(&database);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let results = database.results_for_query("ident", "c", 10).unwrap();
                        assert!(results.len() <= 10);
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }

        let all = database.results_for_query("ident", "c", 0).unwrap();
        assert_eq!(all.len(), 200);
    }
}
