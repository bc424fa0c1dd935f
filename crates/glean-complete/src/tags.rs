//! Identifier extraction from ctags-style tag files.
//!
//! Only the format Exuberant Ctags emits is supported; see
//! <http://ctags.sourceforge.net/FORMAT>. Each line contributes an
//! (identifier, path, language) triple; the language is mapped to a filetype
//! and lines with unknown languages are skipped. Unreadable files yield an
//! empty result rather than an error.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::database::FiletypeIdentifierMap;

// The first field is the identifier, the second the path to the file that
// has it (absolute or relative to the tag file), and the extension fields
// carry the language.
static TAG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^\t]+)\t([^\t]+)\t.*language:([^\t]+).*$")
        .expect("tag line pattern is valid")
});

/// Map a ctags language name (`ctags --list-languages`) to a filetype.
fn filetype_for_language(language: &str) -> Option<&'static str> {
    Some(match language {
        "Ant" => "ant",
        "Asm" => "asm",
        "Awk" => "awk",
        "Basic" => "basic",
        "C++" => "cpp",
        "C#" => "cs",
        "C" => "c",
        "COBOL" => "cobol",
        "DosBatch" => "dosbatch",
        "Eiffel" => "eiffel",
        "Elixir" => "elixir",
        "Erlang" => "erlang",
        "Fortran" => "fortran",
        "Go" => "go",
        "Haskell" => "haskell",
        "HTML" => "html",
        "Java" => "java",
        "JavaScript" => "javascript",
        "Lisp" => "lisp",
        "Lua" => "lua",
        "Make" => "make",
        "MatLab" => "matlab",
        "OCaml" => "ocaml",
        "Pascal" => "pascal",
        "Perl" => "perl",
        "PHP" => "php",
        "Python" => "python",
        "REXX" => "rexx",
        "Ruby" => "ruby",
        "Scheme" => "scheme",
        "Sh" => "sh",
        "SLang" => "slang",
        "SML" => "sml",
        "SQL" => "sql",
        "Tcl" => "tcl",
        "Tex" => "tex",
        "Vera" => "vera",
        "Verilog" => "verilog",
        "VHDL" => "vhdl",
        "Vim" => "vim",
        "YACC" => "yacc",
        _ => return None,
    })
}

/// Extract the identifiers from one tag file, grouped by filetype and by the
/// file they were tagged in.
pub(crate) fn extract_identifiers_from_tags_file(
    path_to_tag_file: &Path,
) -> FiletypeIdentifierMap {
    let contents = match std::fs::read(path_to_tag_file) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(contents) => contents,
            Err(error) => {
                tracing::warn!(
                    target: "glean.tags",
                    path = %path_to_tag_file.display(),
                    error = %error,
                    "tag file is not valid UTF-8; skipping"
                );
                return FiletypeIdentifierMap::new();
            }
        },
        Err(error) => {
            tracing::warn!(
                target: "glean.tags",
                path = %path_to_tag_file.display(),
                error = %error,
                "failed to read tag file; skipping"
            );
            return FiletypeIdentifierMap::new();
        }
    };

    let tag_file_directory = path_to_tag_file.parent().unwrap_or_else(|| Path::new(""));
    let mut filetype_identifier_map = FiletypeIdentifierMap::new();

    for line in contents.lines() {
        let Some(captures) = TAG_LINE.captures(line) else {
            continue;
        };
        let Some(filetype) = filetype_for_language(&captures[3]) else {
            continue;
        };

        let identifier = captures[1].to_owned();
        let filepath = resolve_tagged_path(&captures[2], tag_file_directory);

        filetype_identifier_map
            .entry(filetype.to_owned())
            .or_default()
            .entry(filepath)
            .or_default()
            .push(identifier);
    }

    filetype_identifier_map
}

/// Resolve a tagged path against the tag file's directory and normalize it
/// into a platform-preferred absolute form. Purely lexical, so it works for
/// files that no longer exist.
fn resolve_tagged_path(tagged: &str, tag_file_directory: &Path) -> String {
    let tagged = Path::new(tagged);
    let absolute = if tagged.is_absolute() {
        tagged.to_path_buf()
    } else {
        tag_file_directory.join(tagged)
    };
    let normalized = normalize_logical_path(&absolute);
    dunce::simplified(&normalized).to_string_lossy().into_owned()
}

/// Normalize `.` and `..` components without touching the filesystem.
fn normalize_logical_path(path: &Path) -> PathBuf {
    let mut prefix: Option<OsString> = None;
    let mut has_root = false;
    let mut stack: Vec<OsString> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix_component) => {
                prefix = Some(prefix_component.as_os_str().to_owned());
            }
            Component::RootDir => has_root = true,
            Component::CurDir => {}
            Component::ParentDir => {
                if let Some(last) = stack.last() {
                    if last != ".." {
                        stack.pop();
                        continue;
                    }
                }

                if !has_root {
                    stack.push(OsString::from(".."));
                }
            }
            Component::Normal(segment) => stack.push(segment.to_owned()),
        }
    }

    let mut out = PathBuf::new();
    match (prefix, has_root) {
        (Some(mut prefix), true) => {
            prefix.push(std::path::MAIN_SEPARATOR.to_string());
            out.push(prefix);
        }
        (Some(prefix), false) => out.push(prefix),
        (None, true) => out.push(std::path::MAIN_SEPARATOR.to_string()),
        (None, false) => {}
    }
    out.extend(stack);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_languages_map_to_filetypes() {
        assert_eq!(filetype_for_language("C++"), Some("cpp"));
        assert_eq!(filetype_for_language("C#"), Some("cs"));
        assert_eq!(filetype_for_language("Python"), Some("python"));
        assert_eq!(filetype_for_language("fakelang"), None);
        assert_eq!(filetype_for_language("c++"), None);
    }

    #[test]
    fn tag_line_grammar_captures_identifier_path_and_language() {
        let captures = TAG_LINE
            .captures("foosy\tfoo\t/^foosy$/;\"\tkind:f\tlanguage:C++\tfile:")
            .unwrap();
        assert_eq!(&captures[1], "foosy");
        assert_eq!(&captures[2], "foo");
        assert_eq!(&captures[3], "C++");

        // Comment headers and malformed lines do not match.
        assert!(TAG_LINE.captures("!_TAG_FILE_FORMAT\t2\t/extended format/").is_none());
        assert!(TAG_LINE.captures("no_language\tfoo\t/^x$/;\"\tkind:f").is_none());
        assert!(TAG_LINE.captures("").is_none());
    }

    #[test]
    #[cfg(not(windows))]
    fn logical_normalization_removes_dot_segments() {
        assert_eq!(
            normalize_logical_path(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(
            normalize_logical_path(Path::new("/a/../../b")),
            PathBuf::from("/b")
        );
    }

    #[test]
    #[cfg(not(windows))]
    fn relative_tagged_paths_resolve_against_the_tag_directory() {
        assert_eq!(
            resolve_tagged_path("foo", Path::new("/tags/dir")),
            "/tags/dir/foo"
        );
        assert_eq!(
            resolve_tagged_path("../foo", Path::new("/tags/dir")),
            "/tags/foo"
        );
        assert_eq!(resolve_tagged_path("/abs/foo", Path::new("/tags/dir")), "/abs/foo");
    }
}
