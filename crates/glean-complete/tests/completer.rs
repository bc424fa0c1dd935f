use glean_complete::IdentifierCompleter;

fn candidates_for_query(identifiers: &[&str], query: &str) -> Vec<String> {
    let completer =
        IdentifierCompleter::with_identifiers(identifiers.iter().map(|s| s.to_string()).collect())
            .unwrap();
    completer.candidates_for_query(query, 0).unwrap()
}

#[test]
fn sort_on_empty_query() {
    assert_eq!(candidates_for_query(&["foo", "bar"], ""), ["bar", "foo"]);
}

#[test]
fn empty_candidates_are_ignored() {
    assert!(candidates_for_query(&[""], "").is_empty());
}

#[test]
fn candidates_shorter_than_the_query_are_ignored() {
    assert!(candidates_for_query(&["fo", "foo"], "fooo").is_empty());
}

#[test]
fn no_duplicates_returned() {
    assert_eq!(
        candidates_for_query(&["foobar", "foobar", "foobar"], "foo"),
        ["foobar"]
    );
}

#[test]
fn one_candidate() {
    assert_eq!(candidates_for_query(&["foobar"], "fbr"), ["foobar"]);
}

#[test]
fn many_candidates() {
    let mut results = candidates_for_query(&["foobar", "foobartest", "Foobartest"], "fbr");
    results.sort();
    assert_eq!(results, ["Foobartest", "foobar", "foobartest"]);
}

#[test]
fn smart_case_filtering() {
    assert_eq!(
        candidates_for_query(&["fooBar", "fooBaR"], "fBr"),
        ["fooBaR", "fooBar"]
    );
}

#[test]
fn first_char_same_as_query_wins() {
    assert_eq!(
        candidates_for_query(&["foobar", "afoobar"], "fbr"),
        ["foobar", "afoobar"]
    );
}

#[test]
fn complete_word_boundary_match_wins() {
    assert_eq!(
        candidates_for_query(&["FooBarQux", "FBaqux"], "fbq"),
        ["FooBarQux", "FBaqux"]
    );

    assert_eq!(
        candidates_for_query(
            &["CompleterTest", "CompleteMatchForWordBoundaryCharsWins"],
            "ct"
        ),
        ["CompleterTest", "CompleteMatchForWordBoundaryCharsWins"]
    );

    assert_eq!(
        candidates_for_query(&["FooBar", "FooBarRux"], "fbr"),
        ["FooBarRux", "FooBar"]
    );

    assert_eq!(
        candidates_for_query(&["foo-bar", "foo-bar-rux"], "fbr"),
        ["foo-bar-rux", "foo-bar"]
    );

    assert_eq!(
        candidates_for_query(&["foo.bar", "foo.bar.rux"], "fbr"),
        ["foo.bar.rux", "foo.bar"]
    );
}

#[test]
fn word_boundary_utilization_tie_break() {
    assert_eq!(
        candidates_for_query(&["aGaaFooBarQux", "aBaafbq"], "fbq"),
        ["aGaaFooBarQux", "aBaafbq"]
    );

    assert_eq!(
        candidates_for_query(&["aFooBarQux", "afbq"], "fbq"),
        ["aFooBarQux", "afbq"]
    );

    assert_eq!(
        candidates_for_query(&["acaaCaaFooGxx", "aCaafoog"], "caafoo"),
        ["acaaCaaFooGxx", "aCaafoog"]
    );

    assert_eq!(
        candidates_for_query(&["FooBarQux", "FooBarQuxZaa"], "fbq"),
        ["FooBarQux", "FooBarQuxZaa"]
    );

    assert_eq!(
        candidates_for_query(&["FooBar", "FooBarRux"], "fba"),
        ["FooBar", "FooBarRux"]
    );
}

#[test]
fn query_prefix_of_candidate_wins() {
    assert_eq!(
        candidates_for_query(&["foobar", "fbaroo"], "foo"),
        ["foobar", "fbaroo"]
    );
}

#[test]
fn lower_match_index_sum_wins() {
    assert_eq!(
        candidates_for_query(
            &[
                "ratio_of_word_boundary_chars_in_query_",
                "first_char_same_in_query_and_text_"
            ],
            "charinq"
        ),
        [
            "first_char_same_in_query_and_text_",
            "ratio_of_word_boundary_chars_in_query_"
        ]
    );

    assert_eq!(
        candidates_for_query(&["barfooq", "barquxfoo"], "foo"),
        ["barfooq", "barquxfoo"]
    );

    assert_eq!(
        candidates_for_query(&["xxxxxxabc", "xxabcxxxx"], "abc"),
        ["xxabcxxxx", "xxxxxxabc"]
    );

    assert_eq!(
        candidates_for_query(&["FooBarQux", "FaBarQux"], "fbq"),
        ["FaBarQux", "FooBarQux"]
    );
}

#[test]
fn shorter_candidate_wins() {
    assert_eq!(
        candidates_for_query(&["CompleterT", "CompleterTest"], "co"),
        ["CompleterT", "CompleterTest"]
    );

    assert_eq!(
        candidates_for_query(&["CompleterT", "CompleterTest"], "plet"),
        ["CompleterT", "CompleterTest"]
    );

    assert_eq!(
        candidates_for_query(&["font-family", "font-face"], "fo"),
        ["font-face", "font-family"]
    );
}

#[test]
fn lowercase_candidate_wins() {
    assert_eq!(
        candidates_for_query(&["foobar", "Foobar"], "foo"),
        ["foobar", "Foobar"]
    );

    assert_eq!(
        candidates_for_query(&["chatContentExtension", "ChatContentExtension"], "chatContent"),
        ["chatContentExtension", "ChatContentExtension"]
    );

    assert_eq!(
        candidates_for_query(&["fooBar", "FooBar"], "oba"),
        ["fooBar", "FooBar"]
    );

    assert_eq!(
        candidates_for_query(&["STDIN_FILENO", "stdin"], "std"),
        ["stdin", "STDIN_FILENO"]
    );
}

#[test]
fn punctuation_can_start_a_query() {
    assert_eq!(candidates_for_query(&["-zoo-foo"], "-z"), ["-zoo-foo"]);
}

#[test]
fn unicode_candidates_match_unicode_queries() {
    assert_eq!(
        candidates_for_query(&["uni\u{00A2}\u{00EA}d\u{20AC}"], "\u{00A2}"),
        ["uni\u{00A2}\u{00EA}d\u{20AC}"]
    );
}

#[test]
fn non_printable_candidates_are_searchable() {
    assert_eq!(
        candidates_for_query(&["\u{01}\u{1f}\u{7f}"], "\u{1f}"),
        ["\u{01}\u{1f}\u{7f}"]
    );
}

#[test]
fn oversize_identifiers_never_match() {
    let oversize = "o".repeat(81);
    assert!(candidates_for_query(&[oversize.as_str()], "o").is_empty());
}

#[test]
fn filetypes_partition_the_database() {
    let completer = IdentifierCompleter::with_identifiers_for_file(
        vec!["foobar".into(), "foobartest".into(), "Foobartest".into()],
        "c",
        "foo",
    )
    .unwrap();

    let mut results = completer
        .candidates_for_query_and_type("fbr", "c", 0)
        .unwrap();
    results.sort();
    assert_eq!(results, ["Foobartest", "foobar", "foobartest"]);

    assert!(completer
        .candidates_for_query_and_type("fbr", "python", 0)
        .unwrap()
        .is_empty());
}

#[test]
fn clearing_a_file_replaces_its_identifiers() {
    let completer = IdentifierCompleter::new();
    completer
        .add_identifiers_to_database(vec!["oldIdent".into()], "c", "a.c")
        .unwrap();
    completer
        .clear_for_file_and_add_identifiers_to_database(vec!["newIdent".into()], "c", "a.c")
        .unwrap();

    assert_eq!(
        completer.candidates_for_query_and_type("ident", "c", 0).unwrap(),
        ["newIdent"]
    );
}

#[test]
fn a_lot_of_candidates_rank_and_truncate() {
    // Candidates of the form [a-f]{5} counting up, inserted in reverse order.
    let mut identifiers = Vec::new();
    for i in 0..2048 {
        let mut identifier = String::new();
        let mut letter = i;
        for _ in 0..5 {
            identifier.insert(0, char::from(b'a' + (letter % 26) as u8));
            letter /= 26;
        }
        identifiers.insert(0, identifier);
    }

    let completer = IdentifierCompleter::with_identifiers(identifiers.clone()).unwrap();
    identifiers.reverse();

    assert_eq!(completer.candidates_for_query("aa", 0).unwrap(), identifiers);
    assert_eq!(
        completer.candidates_for_query("aa", 2).unwrap(),
        ["aaaaa", "aaaab"]
    );
}
