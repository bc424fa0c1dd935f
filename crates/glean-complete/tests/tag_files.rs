use std::io::Write;
use std::path::PathBuf;

use glean_complete::IdentifierCompleter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn write_tag_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const BASIC_TAGS: &str = "\
!_TAG_FILE_FORMAT\t2\t/extended format; --format=1 will not append ;\" to lines/
!_TAG_FILE_SORTED\t1\t/0=unsorted, 1=sorted, 2=foldcase/
foosy\tfoo\t/^foosy$/;\"\tkind:f\tlanguage:C++
fooaaa\tbar\t/^fooaaa$/;\"\tkind:f\tlanguage:C++
zoro\t/foo\t/^zoro$/;\"\tkind:f\tlanguage:Python
goo\t/foo/zoo\t/^goo$/;\"\tkind:f\tlanguage:C
no_language_field\tqux\t/^nope$/;\"\tkind:f
unknown_language\tqux\t/^nope$/;\"\tkind:f\tlanguage:fakelang
";

#[test]
fn tag_files_feed_the_database_end_to_end() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let tags = write_tag_file(&dir, "basic.tags", BASIC_TAGS);

    let completer = IdentifierCompleter::new();
    completer
        .add_identifiers_to_database_from_tag_files(&[tags])
        .unwrap();

    assert_eq!(
        completer.candidates_for_query_and_type("fo", "cpp", 0).unwrap(),
        ["foosy", "fooaaa"]
    );
    assert_eq!(
        completer.candidates_for_query_and_type("zo", "python", 0).unwrap(),
        ["zoro"]
    );
    assert_eq!(
        completer.candidates_for_query_and_type("go", "c", 0).unwrap(),
        ["goo"]
    );

    // Lines without a known language contribute nothing.
    assert!(completer
        .candidates_for_query_and_type("no", "cpp", 0)
        .unwrap()
        .is_empty());
    assert!(completer
        .candidates_for_query_and_type("unk", "fakelang", 0)
        .unwrap()
        .is_empty());
}

#[test]
fn identifiers_group_under_the_resolved_tagged_path() {
    let dir = tempfile::tempdir().unwrap();
    let tags = write_tag_file(
        &dir,
        "scoped.tags",
        "one\trel/a.c\t/^one$/;\"\tkind:f\tlanguage:C\n\
         two\trel/b.c\t/^two$/;\"\tkind:f\tlanguage:C\n",
    );

    let completer = IdentifierCompleter::new();
    completer
        .add_identifiers_to_database_from_tag_files(&[tags])
        .unwrap();

    // Both identifiers are visible under the filetype...
    let mut all = completer.candidates_for_query_and_type("", "c", 0).unwrap();
    all.sort();
    assert_eq!(all, ["one", "two"]);

    // ...and clearing one resolved path only drops that file's identifiers.
    let resolved_a = dir.path().join("rel").join("a.c");
    completer
        .clear_for_file_and_add_identifiers_to_database(
            vec![],
            "c",
            resolved_a.to_str().unwrap(),
        )
        .unwrap();

    assert_eq!(
        completer.candidates_for_query_and_type("", "c", 0).unwrap(),
        ["two"]
    );
}

#[test]
fn several_tag_files_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_tag_file(
        &dir,
        "first.tags",
        "alpha\ta.py\t/^alpha$/;\"\tkind:f\tlanguage:Python\n",
    );
    let second = write_tag_file(
        &dir,
        "second.tags",
        "beta\tb.py\t/^beta$/;\"\tkind:f\tlanguage:Python\n",
    );

    let completer = IdentifierCompleter::new();
    completer
        .add_identifiers_to_database_from_tag_files(&[first, second])
        .unwrap();

    let mut all = completer
        .candidates_for_query_and_type("", "python", 0)
        .unwrap();
    all.sort();
    assert_eq!(all, ["alpha", "beta"]);
}

#[test]
fn unreadable_tag_files_are_skipped() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.tags");
    let directory = dir.path().to_path_buf();

    let completer = IdentifierCompleter::new();
    completer
        .add_identifiers_to_database_from_tag_files(&[missing, directory])
        .unwrap();

    assert!(completer
        .candidates_for_query_and_type("", "cpp", 0)
        .unwrap()
        .is_empty());
}

#[test]
fn empty_tag_files_contribute_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write_tag_file(&dir, "empty.tags", "");

    let completer = IdentifierCompleter::new();
    completer
        .add_identifiers_to_database_from_tag_files(&[empty])
        .unwrap();

    assert!(completer
        .candidates_for_query_and_type("", "cpp", 0)
        .unwrap()
        .is_empty());
}
