//! Identifier completion engine.
//!
//! Given a pool of identifiers harvested from source buffers and tag files,
//! and a short query typed by a user, this crate returns the best-matching
//! identifiers ranked by a fuzzy-match score tuned for source-code tokens.
//!
//! The pieces:
//!
//! - [`Candidate`]: an interned word with precomputed ranking features and
//!   the subsequence matcher.
//! - [`MatchResult`]: one positive match with its derived ranking features;
//!   its ordering is the ranking.
//! - [`IdentifierDatabase`]: filetype- and file-partitioned identifier
//!   storage with concurrent add/clear/query.
//! - [`IdentifierCompleter`]: a thin façade over the database that also loads
//!   identifiers from ctags-style tag files.
//! - [`filter_and_sort_candidates`]: one-shot ranking of an externally
//!   provided candidate list.

mod candidate;
mod completer;
mod database;
mod filter;
mod ranking;
mod tags;

pub use candidate::{candidate_repository, Candidate};
pub use completer::IdentifierCompleter;
pub use database::{FilepathToIdentifiers, FiletypeIdentifierMap, IdentifierDatabase};
pub use filter::filter_and_sort_candidates;
pub use glean_unicode::{UnicodeDecodeError, Word};
pub use ranking::MatchResult;
