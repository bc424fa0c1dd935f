// @generated by `cargo run -p xtask -- gen-unicode-table`. Do not edit by hand.
//
// Unicode 14.0.0. One row per non-default scalar:
// (original, normal, folded_case, swapped_case, flags,
//  break_property, combining_class, indic_conjunct_break).
// Flags: 1 = letter, 2 = punctuation, 4 = uppercase.
// Sorted by `original` for binary search.

pub(super) type Row = (&'static str, &'static str, &'static str, &'static str, u8, u8, u8, u8);

#[rustfmt::skip]
pub(super) static CODE_POINTS: &[Row] = &[
    ("\u{0000}", "\u{0000}", "\u{0000}", "\u{0000}", 0, 3, 0, 0),
    ("\u{0001}", "\u{0001}", "\u{0001}", "\u{0001}", 0, 3, 0, 0),
    ("\u{0002}", "\u{0002}", "\u{0002}", "\u{0002}", 0, 3, 0, 0),
    ("\u{0003}", "\u{0003}", "\u{0003}", "\u{0003}", 0, 3, 0, 0),
    ("\u{0004}", "\u{0004}", "\u{0004}", "\u{0004}", 0, 3, 0, 0),
    ("\u{0005}", "\u{0005}", "\u{0005}", "\u{0005}", 0, 3, 0, 0),
    ("\u{0006}", "\u{0006}", "\u{0006}", "\u{0006}", 0, 3, 0, 0),
    ("\u{0007}", "\u{0007}", "\u{0007}", "\u{0007}", 0, 3, 0, 0),
    ("\u{0008}", "\u{0008}", "\u{0008}", "\u{0008}", 0, 3, 0, 0),
    ("\u{0009}", "\u{0009}", "\u{0009}", "\u{0009}", 0, 3, 0, 0),
    ("\u{000A}", "\u{000A}", "\u{000A}", "\u{000A}", 0, 2, 0, 0),
    ("\u{000B}", "\u{000B}", "\u{000B}", "\u{000B}", 0, 3, 0, 0),
    ("\u{000C}", "\u{000C}", "\u{000C}", "\u{000C}", 0, 3, 0, 0),
    ("\u{000D}", "\u{000D}", "\u{000D}", "\u{000D}", 0, 1, 0, 0),
    ("\u{000E}", "\u{000E}", "\u{000E}", "\u{000E}", 0, 3, 0, 0),
    ("\u{000F}", "\u{000F}", "\u{000F}", "\u{000F}", 0, 3, 0, 0),
    ("\u{0010}", "\u{0010}", "\u{0010}", "\u{0010}", 0, 3, 0, 0),
    ("\u{0011}", "\u{0011}", "\u{0011}", "\u{0011}", 0, 3, 0, 0),
    ("\u{0012}", "\u{0012}", "\u{0012}", "\u{0012}", 0, 3, 0, 0),
    ("\u{0013}", "\u{0013}", "\u{0013}", "\u{0013}", 0, 3, 0, 0),
    ("\u{0014}", "\u{0014}", "\u{0014}", "\u{0014}", 0, 3, 0, 0),
    ("\u{0015}", "\u{0015}", "\u{0015}", "\u{0015}", 0, 3, 0, 0),
    ("\u{0016}", "\u{0016}", "\u{0016}", "\u{0016}", 0, 3, 0, 0),
    ("\u{0017}", "\u{0017}", "\u{0017}", "\u{0017}", 0, 3, 0, 0),
    ("\u{0018}", "\u{0018}", "\u{0018}", "\u{0018}", 0, 3, 0, 0),
    ("\u{0019}", "\u{0019}", "\u{0019}", "\u{0019}", 0, 3, 0, 0),
    ("\u{001A}", "\u{001A}", "\u{001A}", "\u{001A}", 0, 3, 0, 0),
    ("\u{001B}", "\u{001B}", "\u{001B}", "\u{001B}", 0, 3, 0, 0),
    ("\u{001C}", "\u{001C}", "\u{001C}", "\u{001C}", 0, 3, 0, 0),
    ("\u{001D}", "\u{001D}", "\u{001D}", "\u{001D}", 0, 3, 0, 0),
    ("\u{001E}", "\u{001E}", "\u{001E}", "\u{001E}", 0, 3, 0, 0),
    ("\u{001F}", "\u{001F}", "\u{001F}", "\u{001F}", 0, 3, 0, 0),
    ("!", "!", "!", "!", 2, 0, 0, 0),
    ("\"", "\"", "\"", "\"", 2, 0, 0, 0),
    ("#", "#", "#", "#", 2, 0, 0, 0),
    ("%", "%", "%", "%", 2, 0, 0, 0),
    ("&", "&", "&", "&", 2, 0, 0, 0),
    ("'", "'", "'", "'", 2, 0, 0, 0),
    ("(", "(", "(", "(", 2, 0, 0, 0),
    (")", ")", ")", ")", 2, 0, 0, 0),
    ("*", "*", "*", "*", 2, 0, 0, 0),
    (",", ",", ",", ",", 2, 0, 0, 0),
    ("-", "-", "-", "-", 2, 0, 0, 0),
    (".", ".", ".", ".", 2, 0, 0, 0),
    ("/", "/", "/", "/", 2, 0, 0, 0),
    (":", ":", ":", ":", 2, 0, 0, 0),
    (";", ";", ";", ";", 2, 0, 0, 0),
    ("?", "?", "?", "?", 2, 0, 0, 0),
    ("@", "@", "@", "@", 2, 0, 0, 0),
    ("A", "A", "a", "a", 5, 0, 0, 0),
    ("B", "B", "b", "b", 5, 0, 0, 0),
    ("C", "C", "c", "c", 5, 0, 0, 0),
    ("D", "D", "d", "d", 5, 0, 0, 0),
    ("E", "E", "e", "e", 5, 0, 0, 0),
    ("F", "F", "f", "f", 5, 0, 0, 0),
    ("G", "G", "g", "g", 5, 0, 0, 0),
    ("H", "H", "h", "h", 5, 0, 0, 0),
    ("I", "I", "i", "i", 5, 0, 0, 0),
    ("J", "J", "j", "j", 5, 0, 0, 0),
    ("K", "K", "k", "k", 5, 0, 0, 0),
    ("L", "L", "l", "l", 5, 0, 0, 0),
    ("M", "M", "m", "m", 5, 0, 0, 0),
    ("N", "N", "n", "n", 5, 0, 0, 0),
    ("O", "O", "o", "o", 5, 0, 0, 0),
    ("P", "P", "p", "p", 5, 0, 0, 0),
    ("Q", "Q", "q", "q", 5, 0, 0, 0),
    ("R", "R", "r", "r", 5, 0, 0, 0),
    ("S", "S", "s", "s", 5, 0, 0, 0),
    ("T", "T", "t", "t", 5, 0, 0, 0),
    ("U", "U", "u", "u", 5, 0, 0, 0),
    ("V", "V", "v", "v", 5, 0, 0, 0),
    ("W", "W", "w", "w", 5, 0, 0, 0),
    ("X", "X", "x", "x", 5, 0, 0, 0),
    ("Y", "Y", "y", "y", 5, 0, 0, 0),
    ("Z", "Z", "z", "z", 5, 0, 0, 0),
    ("[", "[", "[", "[", 2, 0, 0, 0),
    ("\\", "\\", "\\", "\\", 2, 0, 0, 0),
    ("]", "]", "]", "]", 2, 0, 0, 0),
    ("_", "_", "_", "_", 2, 0, 0, 0),
    ("a", "a", "a", "A", 1, 0, 0, 0),
    ("b", "b", "b", "B", 1, 0, 0, 0),
    ("c", "c", "c", "C", 1, 0, 0, 0),
    ("d", "d", "d", "D", 1, 0, 0, 0),
    ("e", "e", "e", "E", 1, 0, 0, 0),
    ("f", "f", "f", "F", 1, 0, 0, 0),
    ("g", "g", "g", "G", 1, 0, 0, 0),
    ("h", "h", "h", "H", 1, 0, 0, 0),
    ("i", "i", "i", "I", 1, 0, 0, 0),
    ("j", "j", "j", "J", 1, 0, 0, 0),
    ("k", "k", "k", "K", 1, 0, 0, 0),
    ("l", "l", "l", "L", 1, 0, 0, 0),
    ("m", "m", "m", "M", 1, 0, 0, 0),
    ("n", "n", "n", "N", 1, 0, 0, 0),
    ("o", "o", "o", "O", 1, 0, 0, 0),
    ("p", "p", "p", "P", 1, 0, 0, 0),
    ("q", "q", "q", "Q", 1, 0, 0, 0),
    ("r", "r", "r", "R", 1, 0, 0, 0),
    ("s", "s", "s", "S", 1, 0, 0, 0),
    ("t", "t", "t", "T", 1, 0, 0, 0),
    ("u", "u", "u", "U", 1, 0, 0, 0),
    ("v", "v", "v", "V", 1, 0, 0, 0),
    ("w", "w", "w", "W", 1, 0, 0, 0),
    ("x", "x", "x", "X", 1, 0, 0, 0),
    ("y", "y", "y", "Y", 1, 0, 0, 0),
    ("z", "z", "z", "Z", 1, 0, 0, 0),
    ("{", "{", "{", "{", 2, 0, 0, 0),
    ("}", "}", "}", "}", 2, 0, 0, 0),
    ("\u{007F}", "\u{007F}", "\u{007F}", "\u{007F}", 0, 3, 0, 0),
    ("\u{0080}", "\u{0080}", "\u{0080}", "\u{0080}", 0, 3, 0, 0),
    ("\u{0081}", "\u{0081}", "\u{0081}", "\u{0081}", 0, 3, 0, 0),
    ("\u{0082}", "\u{0082}", "\u{0082}", "\u{0082}", 0, 3, 0, 0),
    ("\u{0083}", "\u{0083}", "\u{0083}", "\u{0083}", 0, 3, 0, 0),
    ("\u{0084}", "\u{0084}", "\u{0084}", "\u{0084}", 0, 3, 0, 0),
    ("\u{0085}", "\u{0085}", "\u{0085}", "\u{0085}", 0, 3, 0, 0),
    ("\u{0086}", "\u{0086}", "\u{0086}", "\u{0086}", 0, 3, 0, 0),
    ("\u{0087}", "\u{0087}", "\u{0087}", "\u{0087}", 0, 3, 0, 0),
    ("\u{0088}", "\u{0088}", "\u{0088}", "\u{0088}", 0, 3, 0, 0),
    ("\u{0089}", "\u{0089}", "\u{0089}", "\u{0089}", 0, 3, 0, 0),
    ("\u{008A}", "\u{008A}", "\u{008A}", "\u{008A}", 0, 3, 0, 0),
    ("\u{008B}", "\u{008B}", "\u{008B}", "\u{008B}", 0, 3, 0, 0),
    ("\u{008C}", "\u{008C}", "\u{008C}", "\u{008C}", 0, 3, 0, 0),
    ("\u{008D}", "\u{008D}", "\u{008D}", "\u{008D}", 0, 3, 0, 0),
    ("\u{008E}", "\u{008E}", "\u{008E}", "\u{008E}", 0, 3, 0, 0),
    ("\u{008F}", "\u{008F}", "\u{008F}", "\u{008F}", 0, 3, 0, 0),
    ("\u{0090}", "\u{0090}", "\u{0090}", "\u{0090}", 0, 3, 0, 0),
    ("\u{0091}", "\u{0091}", "\u{0091}", "\u{0091}", 0, 3, 0, 0),
    ("\u{0092}", "\u{0092}", "\u{0092}", "\u{0092}", 0, 3, 0, 0),
    ("\u{0093}", "\u{0093}", "\u{0093}", "\u{0093}", 0, 3, 0, 0),
    ("\u{0094}", "\u{0094}", "\u{0094}", "\u{0094}", 0, 3, 0, 0),
    ("\u{0095}", "\u{0095}", "\u{0095}", "\u{0095}", 0, 3, 0, 0),
    ("\u{0096}", "\u{0096}", "\u{0096}", "\u{0096}", 0, 3, 0, 0),
    ("\u{0097}", "\u{0097}", "\u{0097}", "\u{0097}", 0, 3, 0, 0),
    ("\u{0098}", "\u{0098}", "\u{0098}", "\u{0098}", 0, 3, 0, 0),
    ("\u{0099}", "\u{0099}", "\u{0099}", "\u{0099}", 0, 3, 0, 0),
    ("\u{009A}", "\u{009A}", "\u{009A}", "\u{009A}", 0, 3, 0, 0),
    ("\u{009B}", "\u{009B}", "\u{009B}", "\u{009B}", 0, 3, 0, 0),
    ("\u{009C}", "\u{009C}", "\u{009C}", "\u{009C}", 0, 3, 0, 0),
    ("\u{009D}", "\u{009D}", "\u{009D}", "\u{009D}", 0, 3, 0, 0),
    ("\u{009E}", "\u{009E}", "\u{009E}", "\u{009E}", 0, 3, 0, 0),
    ("\u{009F}", "\u{009F}", "\u{009F}", "\u{009F}", 0, 3, 0, 0),
    ("\u{00A1}", "\u{00A1}", "\u{00A1}", "\u{00A1}", 2, 0, 0, 0),
    ("\u{00A7}", "\u{00A7}", "\u{00A7}", "\u{00A7}", 2, 0, 0, 0),
    ("\u{00A9}", "\u{00A9}", "\u{00A9}", "\u{00A9}", 0, 18, 0, 0),
    ("\u{00AA}", "\u{00AA}", "\u{00AA}", "\u{00AA}", 1, 0, 0, 0),
    ("\u{00AB}", "\u{00AB}", "\u{00AB}", "\u{00AB}", 2, 0, 0, 0),
    ("\u{00AD}", "\u{00AD}", "\u{00AD}", "\u{00AD}", 0, 3, 0, 0),
    ("\u{00AE}", "\u{00AE}", "\u{00AE}", "\u{00AE}", 0, 18, 0, 0),
    ("\u{00B5}", "\u{00B5}", "\u{03BC}", "\u{039C}", 1, 0, 0, 0),
    ("\u{00B6}", "\u{00B6}", "\u{00B6}", "\u{00B6}", 2, 0, 0, 0),
    ("\u{00B7}", "\u{00B7}", "\u{00B7}", "\u{00B7}", 2, 0, 0, 0),
    ("\u{00BA}", "\u{00BA}", "\u{00BA}", "\u{00BA}", 1, 0, 0, 0),
    ("\u{00BB}", "\u{00BB}", "\u{00BB}", "\u{00BB}", 2, 0, 0, 0),
    ("\u{00BF}", "\u{00BF}", "\u{00BF}", "\u{00BF}", 2, 0, 0, 0),
    ("\u{00C0}", "A\u{0300}", "a\u{0300}", "a\u{0300}", 5, 0, 0, 0),
    ("\u{00C1}", "A\u{0301}", "a\u{0301}", "a\u{0301}", 5, 0, 0, 0),
    ("\u{00C2}", "A\u{0302}", "a\u{0302}", "a\u{0302}", 5, 0, 0, 0),
    ("\u{00C3}", "A\u{0303}", "a\u{0303}", "a\u{0303}", 5, 0, 0, 0),
    ("\u{00C4}", "A\u{0308}", "a\u{0308}", "a\u{0308}", 5, 0, 0, 0),
    ("\u{00C5}", "A\u{030A}", "a\u{030A}", "a\u{030A}", 5, 0, 0, 0),
    ("\u{00C6}", "\u{00C6}", "\u{00E6}", "\u{00E6}", 5, 0, 0, 0),
    ("\u{00C7}", "C\u{0327}", "c\u{0327}", "c\u{0327}", 5, 0, 0, 0),
    ("\u{00C8}", "E\u{0300}", "e\u{0300}", "e\u{0300}", 5, 0, 0, 0),
    ("\u{00C9}", "E\u{0301}", "e\u{0301}", "e\u{0301}", 5, 0, 0, 0),
    ("\u{00CA}", "E\u{0302}", "e\u{0302}", "e\u{0302}", 5, 0, 0, 0),
    ("\u{00CB}", "E\u{0308}", "e\u{0308}", "e\u{0308}", 5, 0, 0, 0),
    ("\u{00CC}", "I\u{0300}", "i\u{0300}", "i\u{0300}", 5, 0, 0, 0),
    ("\u{00CD}", "I\u{0301}", "i\u{0301}", "i\u{0301}", 5, 0, 0, 0),
    ("\u{00CE}", "I\u{0302}", "i\u{0302}", "i\u{0302}", 5, 0, 0, 0),
    ("\u{00CF}", "I\u{0308}", "i\u{0308}", "i\u{0308}", 5, 0, 0, 0),
    ("\u{00D0}", "\u{00D0}", "\u{00F0}", "\u{00F0}", 5, 0, 0, 0),
    ("\u{00D1}", "N\u{0303}", "n\u{0303}", "n\u{0303}", 5, 0, 0, 0),
    ("\u{00D2}", "O\u{0300}", "o\u{0300}", "o\u{0300}", 5, 0, 0, 0),
    ("\u{00D3}", "O\u{0301}", "o\u{0301}", "o\u{0301}", 5, 0, 0, 0),
    ("\u{00D4}", "O\u{0302}", "o\u{0302}", "o\u{0302}", 5, 0, 0, 0),
    ("\u{00D5}", "O\u{0303}", "o\u{0303}", "o\u{0303}", 5, 0, 0, 0),
    ("\u{00D6}", "O\u{0308}", "o\u{0308}", "o\u{0308}", 5, 0, 0, 0),
    ("\u{00D8}", "\u{00D8}", "\u{00F8}", "\u{00F8}", 5, 0, 0, 0),
    ("\u{00D9}", "U\u{0300}", "u\u{0300}", "u\u{0300}", 5, 0, 0, 0),
    ("\u{00DA}", "U\u{0301}", "u\u{0301}", "u\u{0301}", 5, 0, 0, 0),
    ("\u{00DB}", "U\u{0302}", "u\u{0302}", "u\u{0302}", 5, 0, 0, 0),
    ("\u{00DC}", "U\u{0308}", "u\u{0308}", "u\u{0308}", 5, 0, 0, 0),
    ("\u{00DD}", "Y\u{0301}", "y\u{0301}", "y\u{0301}", 5, 0, 0, 0),
    ("\u{00DE}", "\u{00DE}", "\u{00FE}", "\u{00FE}", 5, 0, 0, 0),
    ("\u{00DF}", "\u{00DF}", "ss", "SS", 1, 0, 0, 0),
    ("\u{00E0}", "a\u{0300}", "a\u{0300}", "A\u{0300}", 1, 0, 0, 0),
    ("\u{00E1}", "a\u{0301}", "a\u{0301}", "A\u{0301}", 1, 0, 0, 0),
    ("\u{00E2}", "a\u{0302}", "a\u{0302}", "A\u{0302}", 1, 0, 0, 0),
    ("\u{00E3}", "a\u{0303}", "a\u{0303}", "A\u{0303}", 1, 0, 0, 0),
    ("\u{00E4}", "a\u{0308}", "a\u{0308}", "A\u{0308}", 1, 0, 0, 0),
    ("\u{00E5}", "a\u{030A}", "a\u{030A}", "A\u{030A}", 1, 0, 0, 0),
    ("\u{00E6}", "\u{00E6}", "\u{00E6}", "\u{00C6}", 1, 0, 0, 0),
    ("\u{00E7}", "c\u{0327}", "c\u{0327}", "C\u{0327}", 1, 0, 0, 0),
    ("\u{00E8}", "e\u{0300}", "e\u{0300}", "E\u{0300}", 1, 0, 0, 0),
    ("\u{00E9}", "e\u{0301}", "e\u{0301}", "E\u{0301}", 1, 0, 0, 0),
    ("\u{00EA}", "e\u{0302}", "e\u{0302}", "E\u{0302}", 1, 0, 0, 0),
    ("\u{00EB}", "e\u{0308}", "e\u{0308}", "E\u{0308}", 1, 0, 0, 0),
    ("\u{00EC}", "i\u{0300}", "i\u{0300}", "I\u{0300}", 1, 0, 0, 0),
    ("\u{00ED}", "i\u{0301}", "i\u{0301}", "I\u{0301}", 1, 0, 0, 0),
    ("\u{00EE}", "i\u{0302}", "i\u{0302}", "I\u{0302}", 1, 0, 0, 0),
    ("\u{00EF}", "i\u{0308}", "i\u{0308}", "I\u{0308}", 1, 0, 0, 0),
    ("\u{00F0}", "\u{00F0}", "\u{00F0}", "\u{00D0}", 1, 0, 0, 0),
    ("\u{00F1}", "n\u{0303}", "n\u{0303}", "N\u{0303}", 1, 0, 0, 0),
    ("\u{00F2}", "o\u{0300}", "o\u{0300}", "O\u{0300}", 1, 0, 0, 0),
    ("\u{00F3}", "o\u{0301}", "o\u{0301}", "O\u{0301}", 1, 0, 0, 0),
    ("\u{00F4}", "o\u{0302}", "o\u{0302}", "O\u{0302}", 1, 0, 0, 0),
    ("\u{00F5}", "o\u{0303}", "o\u{0303}", "O\u{0303}", 1, 0, 0, 0),
    ("\u{00F6}", "o\u{0308}", "o\u{0308}", "O\u{0308}", 1, 0, 0, 0),
    ("\u{00F8}", "\u{00F8}", "\u{00F8}", "\u{00D8}", 1, 0, 0, 0),
    ("\u{00F9}", "u\u{0300}", "u\u{0300}", "U\u{0300}", 1, 0, 0, 0),
    ("\u{00FA}", "u\u{0301}", "u\u{0301}", "U\u{0301}", 1, 0, 0, 0),
    ("\u{00FB}", "u\u{0302}", "u\u{0302}", "U\u{0302}", 1, 0, 0, 0),
    ("\u{00FC}", "u\u{0308}", "u\u{0308}", "U\u{0308}", 1, 0, 0, 0),
    ("\u{00FD}", "y\u{0301}", "y\u{0301}", "Y\u{0301}", 1, 0, 0, 0),
    ("\u{00FE}", "\u{00FE}", "\u{00FE}", "\u{00DE}", 1, 0, 0, 0),
    ("\u{00FF}", "y\u{0308}", "y\u{0308}", "Y\u{0308}", 1, 0, 0, 0),
    ("\u{0100}", "A\u{0304}", "a\u{0304}", "a\u{0304}", 5, 0, 0, 0),
    ("\u{0101}", "a\u{0304}", "a\u{0304}", "A\u{0304}", 1, 0, 0, 0),
    ("\u{0102}", "A\u{0306}", "a\u{0306}", "a\u{0306}", 5, 0, 0, 0),
    ("\u{0103}", "a\u{0306}", "a\u{0306}", "A\u{0306}", 1, 0, 0, 0),
    ("\u{0104}", "A\u{0328}", "a\u{0328}", "a\u{0328}", 5, 0, 0, 0),
    ("\u{0105}", "a\u{0328}", "a\u{0328}", "A\u{0328}", 1, 0, 0, 0),
    ("\u{0106}", "C\u{0301}", "c\u{0301}", "c\u{0301}", 5, 0, 0, 0),
    ("\u{0107}", "c\u{0301}", "c\u{0301}", "C\u{0301}", 1, 0, 0, 0),
    ("\u{0108}", "C\u{0302}", "c\u{0302}", "c\u{0302}", 5, 0, 0, 0),
    ("\u{0109}", "c\u{0302}", "c\u{0302}", "C\u{0302}", 1, 0, 0, 0),
    ("\u{010A}", "C\u{0307}", "c\u{0307}", "c\u{0307}", 5, 0, 0, 0),
    ("\u{010B}", "c\u{0307}", "c\u{0307}", "C\u{0307}", 1, 0, 0, 0),
    ("\u{010C}", "C\u{030C}", "c\u{030C}", "c\u{030C}", 5, 0, 0, 0),
    ("\u{010D}", "c\u{030C}", "c\u{030C}", "C\u{030C}", 1, 0, 0, 0),
    ("\u{010E}", "D\u{030C}", "d\u{030C}", "d\u{030C}", 5, 0, 0, 0),
    ("\u{010F}", "d\u{030C}", "d\u{030C}", "D\u{030C}", 1, 0, 0, 0),
    ("\u{0110}", "\u{0110}", "\u{0111}", "\u{0111}", 5, 0, 0, 0),
    ("\u{0111}", "\u{0111}", "\u{0111}", "\u{0110}", 1, 0, 0, 0),
    ("\u{0112}", "E\u{0304}", "e\u{0304}", "e\u{0304}", 5, 0, 0, 0),
    ("\u{0113}", "e\u{0304}", "e\u{0304}", "E\u{0304}", 1, 0, 0, 0),
    ("\u{0114}", "E\u{0306}", "e\u{0306}", "e\u{0306}", 5, 0, 0, 0),
    ("\u{0115}", "e\u{0306}", "e\u{0306}", "E\u{0306}", 1, 0, 0, 0),
    ("\u{0116}", "E\u{0307}", "e\u{0307}", "e\u{0307}", 5, 0, 0, 0),
    ("\u{0117}", "e\u{0307}", "e\u{0307}", "E\u{0307}", 1, 0, 0, 0),
    ("\u{0118}", "E\u{0328}", "e\u{0328}", "e\u{0328}", 5, 0, 0, 0),
    ("\u{0119}", "e\u{0328}", "e\u{0328}", "E\u{0328}", 1, 0, 0, 0),
    ("\u{011A}", "E\u{030C}", "e\u{030C}", "e\u{030C}", 5, 0, 0, 0),
    ("\u{011B}", "e\u{030C}", "e\u{030C}", "E\u{030C}", 1, 0, 0, 0),
    ("\u{011C}", "G\u{0302}", "g\u{0302}", "g\u{0302}", 5, 0, 0, 0),
    ("\u{011D}", "g\u{0302}", "g\u{0302}", "G\u{0302}", 1, 0, 0, 0),
    ("\u{011E}", "G\u{0306}", "g\u{0306}", "g\u{0306}", 5, 0, 0, 0),
    ("\u{011F}", "g\u{0306}", "g\u{0306}", "G\u{0306}", 1, 0, 0, 0),
    ("\u{0120}", "G\u{0307}", "g\u{0307}", "g\u{0307}", 5, 0, 0, 0),
    ("\u{0121}", "g\u{0307}", "g\u{0307}", "G\u{0307}", 1, 0, 0, 0),
    ("\u{0122}", "G\u{0327}", "g\u{0327}", "g\u{0327}", 5, 0, 0, 0),
    ("\u{0123}", "g\u{0327}", "g\u{0327}", "G\u{0327}", 1, 0, 0, 0),
    ("\u{0124}", "H\u{0302}", "h\u{0302}", "h\u{0302}", 5, 0, 0, 0),
    ("\u{0125}", "h\u{0302}", "h\u{0302}", "H\u{0302}", 1, 0, 0, 0),
    ("\u{0126}", "\u{0126}", "\u{0127}", "\u{0127}", 5, 0, 0, 0),
    ("\u{0127}", "\u{0127}", "\u{0127}", "\u{0126}", 1, 0, 0, 0),
    ("\u{0128}", "I\u{0303}", "i\u{0303}", "i\u{0303}", 5, 0, 0, 0),
    ("\u{0129}", "i\u{0303}", "i\u{0303}", "I\u{0303}", 1, 0, 0, 0),
    ("\u{012A}", "I\u{0304}", "i\u{0304}", "i\u{0304}", 5, 0, 0, 0),
    ("\u{012B}", "i\u{0304}", "i\u{0304}", "I\u{0304}", 1, 0, 0, 0),
    ("\u{012C}", "I\u{0306}", "i\u{0306}", "i\u{0306}", 5, 0, 0, 0),
    ("\u{012D}", "i\u{0306}", "i\u{0306}", "I\u{0306}", 1, 0, 0, 0),
    ("\u{012E}", "I\u{0328}", "i\u{0328}", "i\u{0328}", 5, 0, 0, 0),
    ("\u{012F}", "i\u{0328}", "i\u{0328}", "I\u{0328}", 1, 0, 0, 0),
    ("\u{0130}", "I\u{0307}", "i\u{0307}", "i\u{0307}", 5, 0, 0, 0),
    ("\u{0131}", "\u{0131}", "\u{0131}", "I", 1, 0, 0, 0),
    ("\u{0132}", "\u{0132}", "\u{0133}", "\u{0133}", 5, 0, 0, 0),
    ("\u{0133}", "\u{0133}", "\u{0133}", "\u{0132}", 1, 0, 0, 0),
    ("\u{0134}", "J\u{0302}", "j\u{0302}", "j\u{0302}", 5, 0, 0, 0),
    ("\u{0135}", "j\u{0302}", "j\u{0302}", "J\u{0302}", 1, 0, 0, 0),
    ("\u{0136}", "K\u{0327}", "k\u{0327}", "k\u{0327}", 5, 0, 0, 0),
    ("\u{0137}", "k\u{0327}", "k\u{0327}", "K\u{0327}", 1, 0, 0, 0),
    ("\u{0138}", "\u{0138}", "\u{0138}", "\u{0138}", 1, 0, 0, 0),
    ("\u{0139}", "L\u{0301}", "l\u{0301}", "l\u{0301}", 5, 0, 0, 0),
    ("\u{013A}", "l\u{0301}", "l\u{0301}", "L\u{0301}", 1, 0, 0, 0),
    ("\u{013B}", "L\u{0327}", "l\u{0327}", "l\u{0327}", 5, 0, 0, 0),
    ("\u{013C}", "l\u{0327}", "l\u{0327}", "L\u{0327}", 1, 0, 0, 0),
    ("\u{013D}", "L\u{030C}", "l\u{030C}", "l\u{030C}", 5, 0, 0, 0),
    ("\u{013E}", "l\u{030C}", "l\u{030C}", "L\u{030C}", 1, 0, 0, 0),
    ("\u{013F}", "\u{013F}", "\u{0140}", "\u{0140}", 5, 0, 0, 0),
    ("\u{0140}", "\u{0140}", "\u{0140}", "\u{013F}", 1, 0, 0, 0),
    ("\u{0141}", "\u{0141}", "\u{0142}", "\u{0142}", 5, 0, 0, 0),
    ("\u{0142}", "\u{0142}", "\u{0142}", "\u{0141}", 1, 0, 0, 0),
    ("\u{0143}", "N\u{0301}", "n\u{0301}", "n\u{0301}", 5, 0, 0, 0),
    ("\u{0144}", "n\u{0301}", "n\u{0301}", "N\u{0301}", 1, 0, 0, 0),
    ("\u{0145}", "N\u{0327}", "n\u{0327}", "n\u{0327}", 5, 0, 0, 0),
    ("\u{0146}", "n\u{0327}", "n\u{0327}", "N\u{0327}", 1, 0, 0, 0),
    ("\u{0147}", "N\u{030C}", "n\u{030C}", "n\u{030C}", 5, 0, 0, 0),
    ("\u{0148}", "n\u{030C}", "n\u{030C}", "N\u{030C}", 1, 0, 0, 0),
    ("\u{0149}", "\u{0149}", "\u{02BC}n", "\u{02BC}N", 1, 0, 0, 0),
    ("\u{014A}", "\u{014A}", "\u{014B}", "\u{014B}", 5, 0, 0, 0),
    ("\u{014B}", "\u{014B}", "\u{014B}", "\u{014A}", 1, 0, 0, 0),
    ("\u{014C}", "O\u{0304}", "o\u{0304}", "o\u{0304}", 5, 0, 0, 0),
    ("\u{014D}", "o\u{0304}", "o\u{0304}", "O\u{0304}", 1, 0, 0, 0),
    ("\u{014E}", "O\u{0306}", "o\u{0306}", "o\u{0306}", 5, 0, 0, 0),
    ("\u{014F}", "o\u{0306}", "o\u{0306}", "O\u{0306}", 1, 0, 0, 0),
    ("\u{0150}", "O\u{030B}", "o\u{030B}", "o\u{030B}", 5, 0, 0, 0),
    ("\u{0151}", "o\u{030B}", "o\u{030B}", "O\u{030B}", 1, 0, 0, 0),
    ("\u{0152}", "\u{0152}", "\u{0153}", "\u{0153}", 5, 0, 0, 0),
    ("\u{0153}", "\u{0153}", "\u{0153}", "\u{0152}", 1, 0, 0, 0),
    ("\u{0154}", "R\u{0301}", "r\u{0301}", "r\u{0301}", 5, 0, 0, 0),
    ("\u{0155}", "r\u{0301}", "r\u{0301}", "R\u{0301}", 1, 0, 0, 0),
    ("\u{0156}", "R\u{0327}", "r\u{0327}", "r\u{0327}", 5, 0, 0, 0),
    ("\u{0157}", "r\u{0327}", "r\u{0327}", "R\u{0327}", 1, 0, 0, 0),
    ("\u{0158}", "R\u{030C}", "r\u{030C}", "r\u{030C}", 5, 0, 0, 0),
    ("\u{0159}", "r\u{030C}", "r\u{030C}", "R\u{030C}", 1, 0, 0, 0),
    ("\u{015A}", "S\u{0301}", "s\u{0301}", "s\u{0301}", 5, 0, 0, 0),
    ("\u{015B}", "s\u{0301}", "s\u{0301}", "S\u{0301}", 1, 0, 0, 0),
    ("\u{015C}", "S\u{0302}", "s\u{0302}", "s\u{0302}", 5, 0, 0, 0),
    ("\u{015D}", "s\u{0302}", "s\u{0302}", "S\u{0302}", 1, 0, 0, 0),
    ("\u{015E}", "S\u{0327}", "s\u{0327}", "s\u{0327}", 5, 0, 0, 0),
    ("\u{015F}", "s\u{0327}", "s\u{0327}", "S\u{0327}", 1, 0, 0, 0),
    ("\u{0160}", "S\u{030C}", "s\u{030C}", "s\u{030C}", 5, 0, 0, 0),
    ("\u{0161}", "s\u{030C}", "s\u{030C}", "S\u{030C}", 1, 0, 0, 0),
    ("\u{0162}", "T\u{0327}", "t\u{0327}", "t\u{0327}", 5, 0, 0, 0),
    ("\u{0163}", "t\u{0327}", "t\u{0327}", "T\u{0327}", 1, 0, 0, 0),
    ("\u{0164}", "T\u{030C}", "t\u{030C}", "t\u{030C}", 5, 0, 0, 0),
    ("\u{0165}", "t\u{030C}", "t\u{030C}", "T\u{030C}", 1, 0, 0, 0),
    ("\u{0166}", "\u{0166}", "\u{0167}", "\u{0167}", 5, 0, 0, 0),
    ("\u{0167}", "\u{0167}", "\u{0167}", "\u{0166}", 1, 0, 0, 0),
    ("\u{0168}", "U\u{0303}", "u\u{0303}", "u\u{0303}", 5, 0, 0, 0),
    ("\u{0169}", "u\u{0303}", "u\u{0303}", "U\u{0303}", 1, 0, 0, 0),
    ("\u{016A}", "U\u{0304}", "u\u{0304}", "u\u{0304}", 5, 0, 0, 0),
    ("\u{016B}", "u\u{0304}", "u\u{0304}", "U\u{0304}", 1, 0, 0, 0),
    ("\u{016C}", "U\u{0306}", "u\u{0306}", "u\u{0306}", 5, 0, 0, 0),
    ("\u{016D}", "u\u{0306}", "u\u{0306}", "U\u{0306}", 1, 0, 0, 0),
    ("\u{016E}", "U\u{030A}", "u\u{030A}", "u\u{030A}", 5, 0, 0, 0),
    ("\u{016F}", "u\u{030A}", "u\u{030A}", "U\u{030A}", 1, 0, 0, 0),
    ("\u{0170}", "U\u{030B}", "u\u{030B}", "u\u{030B}", 5, 0, 0, 0),
    ("\u{0171}", "u\u{030B}", "u\u{030B}", "U\u{030B}", 1, 0, 0, 0),
    ("\u{0172}", "U\u{0328}", "u\u{0328}", "u\u{0328}", 5, 0, 0, 0),
    ("\u{0173}", "u\u{0328}", "u\u{0328}", "U\u{0328}", 1, 0, 0, 0),
    ("\u{0174}", "W\u{0302}", "w\u{0302}", "w\u{0302}", 5, 0, 0, 0),
    ("\u{0175}", "w\u{0302}", "w\u{0302}", "W\u{0302}", 1, 0, 0, 0),
    ("\u{0176}", "Y\u{0302}", "y\u{0302}", "y\u{0302}", 5, 0, 0, 0),
    ("\u{0177}", "y\u{0302}", "y\u{0302}", "Y\u{0302}", 1, 0, 0, 0),
    ("\u{0178}", "Y\u{0308}", "y\u{0308}", "y\u{0308}", 5, 0, 0, 0),
    ("\u{0179}", "Z\u{0301}", "z\u{0301}", "z\u{0301}", 5, 0, 0, 0),
    ("\u{017A}", "z\u{0301}", "z\u{0301}", "Z\u{0301}", 1, 0, 0, 0),
    ("\u{017B}", "Z\u{0307}", "z\u{0307}", "z\u{0307}", 5, 0, 0, 0),
    ("\u{017C}", "z\u{0307}", "z\u{0307}", "Z\u{0307}", 1, 0, 0, 0),
    ("\u{017D}", "Z\u{030C}", "z\u{030C}", "z\u{030C}", 5, 0, 0, 0),
    ("\u{017E}", "z\u{030C}", "z\u{030C}", "Z\u{030C}", 1, 0, 0, 0),
    ("\u{017F}", "\u{017F}", "s", "S", 1, 0, 0, 0),
    ("\u{0180}", "\u{0180}", "\u{0180}", "\u{0243}", 1, 0, 0, 0),
    ("\u{0181}", "\u{0181}", "\u{0253}", "\u{0253}", 5, 0, 0, 0),
    ("\u{0182}", "\u{0182}", "\u{0183}", "\u{0183}", 5, 0, 0, 0),
    ("\u{0183}", "\u{0183}", "\u{0183}", "\u{0182}", 1, 0, 0, 0),
    ("\u{0184}", "\u{0184}", "\u{0185}", "\u{0185}", 5, 0, 0, 0),
    ("\u{0185}", "\u{0185}", "\u{0185}", "\u{0184}", 1, 0, 0, 0),
    ("\u{0186}", "\u{0186}", "\u{0254}", "\u{0254}", 5, 0, 0, 0),
    ("\u{0187}", "\u{0187}", "\u{0188}", "\u{0188}", 5, 0, 0, 0),
    ("\u{0188}", "\u{0188}", "\u{0188}", "\u{0187}", 1, 0, 0, 0),
    ("\u{0189}", "\u{0189}", "\u{0256}", "\u{0256}", 5, 0, 0, 0),
    ("\u{018A}", "\u{018A}", "\u{0257}", "\u{0257}", 5, 0, 0, 0),
    ("\u{018B}", "\u{018B}", "\u{018C}", "\u{018C}", 5, 0, 0, 0),
    ("\u{018C}", "\u{018C}", "\u{018C}", "\u{018B}", 1, 0, 0, 0),
    ("\u{018D}", "\u{018D}", "\u{018D}", "\u{018D}", 1, 0, 0, 0),
    ("\u{018E}", "\u{018E}", "\u{01DD}", "\u{01DD}", 5, 0, 0, 0),
    ("\u{018F}", "\u{018F}", "\u{0259}", "\u{0259}", 5, 0, 0, 0),
    ("\u{0190}", "\u{0190}", "\u{025B}", "\u{025B}", 5, 0, 0, 0),
    ("\u{0191}", "\u{0191}", "\u{0192}", "\u{0192}", 5, 0, 0, 0),
    ("\u{0192}", "\u{0192}", "\u{0192}", "\u{0191}", 1, 0, 0, 0),
    ("\u{0193}", "\u{0193}", "\u{0260}", "\u{0260}", 5, 0, 0, 0),
    ("\u{0194}", "\u{0194}", "\u{0263}", "\u{0263}", 5, 0, 0, 0),
    ("\u{0195}", "\u{0195}", "\u{0195}", "\u{01F6}", 1, 0, 0, 0),
    ("\u{0196}", "\u{0196}", "\u{0269}", "\u{0269}", 5, 0, 0, 0),
    ("\u{0197}", "\u{0197}", "\u{0268}", "\u{0268}", 5, 0, 0, 0),
    ("\u{0198}", "\u{0198}", "\u{0199}", "\u{0199}", 5, 0, 0, 0),
    ("\u{0199}", "\u{0199}", "\u{0199}", "\u{0198}", 1, 0, 0, 0),
    ("\u{019A}", "\u{019A}", "\u{019A}", "\u{023D}", 1, 0, 0, 0),
    ("\u{019B}", "\u{019B}", "\u{019B}", "\u{019B}", 1, 0, 0, 0),
    ("\u{019C}", "\u{019C}", "\u{026F}", "\u{026F}", 5, 0, 0, 0),
    ("\u{019D}", "\u{019D}", "\u{0272}", "\u{0272}", 5, 0, 0, 0),
    ("\u{019E}", "\u{019E}", "\u{019E}", "\u{0220}", 1, 0, 0, 0),
    ("\u{019F}", "\u{019F}", "\u{0275}", "\u{0275}", 5, 0, 0, 0),
    ("\u{01A0}", "O\u{031B}", "o\u{031B}", "o\u{031B}", 5, 0, 0, 0),
    ("\u{01A1}", "o\u{031B}", "o\u{031B}", "O\u{031B}", 1, 0, 0, 0),
    ("\u{01A2}", "\u{01A2}", "\u{01A3}", "\u{01A3}", 5, 0, 0, 0),
    ("\u{01A3}", "\u{01A3}", "\u{01A3}", "\u{01A2}", 1, 0, 0, 0),
    ("\u{01A4}", "\u{01A4}", "\u{01A5}", "\u{01A5}", 5, 0, 0, 0),
    ("\u{01A5}", "\u{01A5}", "\u{01A5}", "\u{01A4}", 1, 0, 0, 0),
    ("\u{01A6}", "\u{01A6}", "\u{0280}", "\u{0280}", 5, 0, 0, 0),
    ("\u{01A7}", "\u{01A7}", "\u{01A8}", "\u{01A8}", 5, 0, 0, 0),
    ("\u{01A8}", "\u{01A8}", "\u{01A8}", "\u{01A7}", 1, 0, 0, 0),
    ("\u{01A9}", "\u{01A9}", "\u{0283}", "\u{0283}", 5, 0, 0, 0),
    ("\u{01AA}", "\u{01AA}", "\u{01AA}", "\u{01AA}", 1, 0, 0, 0),
    ("\u{01AB}", "\u{01AB}", "\u{01AB}", "\u{01AB}", 1, 0, 0, 0),
    ("\u{01AC}", "\u{01AC}", "\u{01AD}", "\u{01AD}", 5, 0, 0, 0),
    ("\u{01AD}", "\u{01AD}", "\u{01AD}", "\u{01AC}", 1, 0, 0, 0),
    ("\u{01AE}", "\u{01AE}", "\u{0288}", "\u{0288}", 5, 0, 0, 0),
    ("\u{01AF}", "U\u{031B}", "u\u{031B}", "u\u{031B}", 5, 0, 0, 0),
    ("\u{01B0}", "u\u{031B}", "u\u{031B}", "U\u{031B}", 1, 0, 0, 0),
    ("\u{01B1}", "\u{01B1}", "\u{028A}", "\u{028A}", 5, 0, 0, 0),
    ("\u{01B2}", "\u{01B2}", "\u{028B}", "\u{028B}", 5, 0, 0, 0),
    ("\u{01B3}", "\u{01B3}", "\u{01B4}", "\u{01B4}", 5, 0, 0, 0),
    ("\u{01B4}", "\u{01B4}", "\u{01B4}", "\u{01B3}", 1, 0, 0, 0),
    ("\u{01B5}", "\u{01B5}", "\u{01B6}", "\u{01B6}", 5, 0, 0, 0),
    ("\u{01B6}", "\u{01B6}", "\u{01B6}", "\u{01B5}", 1, 0, 0, 0),
    ("\u{01B7}", "\u{01B7}", "\u{0292}", "\u{0292}", 5, 0, 0, 0),
    ("\u{01B8}", "\u{01B8}", "\u{01B9}", "\u{01B9}", 5, 0, 0, 0),
    ("\u{01B9}", "\u{01B9}", "\u{01B9}", "\u{01B8}", 1, 0, 0, 0),
    ("\u{01BA}", "\u{01BA}", "\u{01BA}", "\u{01BA}", 1, 0, 0, 0),
    ("\u{01BB}", "\u{01BB}", "\u{01BB}", "\u{01BB}", 1, 0, 0, 0),
    ("\u{01BC}", "\u{01BC}", "\u{01BD}", "\u{01BD}", 5, 0, 0, 0),
    ("\u{01BD}", "\u{01BD}", "\u{01BD}", "\u{01BC}", 1, 0, 0, 0),
    ("\u{01BE}", "\u{01BE}", "\u{01BE}", "\u{01BE}", 1, 0, 0, 0),
    ("\u{01BF}", "\u{01BF}", "\u{01BF}", "\u{01F7}", 1, 0, 0, 0),
    ("\u{01C0}", "\u{01C0}", "\u{01C0}", "\u{01C0}", 1, 0, 0, 0),
    ("\u{01C1}", "\u{01C1}", "\u{01C1}", "\u{01C1}", 1, 0, 0, 0),
    ("\u{01C2}", "\u{01C2}", "\u{01C2}", "\u{01C2}", 1, 0, 0, 0),
    ("\u{01C3}", "\u{01C3}", "\u{01C3}", "\u{01C3}", 1, 0, 0, 0),
    ("\u{01C4}", "\u{01C4}", "\u{01C6}", "\u{01C6}", 5, 0, 0, 0),
    ("\u{01C5}", "\u{01C5}", "\u{01C6}", "\u{01C6}", 5, 0, 0, 0),
    ("\u{01C6}", "\u{01C6}", "\u{01C6}", "\u{01C4}", 1, 0, 0, 0),
    ("\u{01C7}", "\u{01C7}", "\u{01C9}", "\u{01C9}", 5, 0, 0, 0),
    ("\u{01C8}", "\u{01C8}", "\u{01C9}", "\u{01C9}", 5, 0, 0, 0),
    ("\u{01C9}", "\u{01C9}", "\u{01C9}", "\u{01C7}", 1, 0, 0, 0),
    ("\u{01CA}", "\u{01CA}", "\u{01CC}", "\u{01CC}", 5, 0, 0, 0),
    ("\u{01CB}", "\u{01CB}", "\u{01CC}", "\u{01CC}", 5, 0, 0, 0),
    ("\u{01CC}", "\u{01CC}", "\u{01CC}", "\u{01CA}", 1, 0, 0, 0),
    ("\u{01CD}", "A\u{030C}", "a\u{030C}", "a\u{030C}", 5, 0, 0, 0),
    ("\u{01CE}", "a\u{030C}", "a\u{030C}", "A\u{030C}", 1, 0, 0, 0),
    ("\u{01CF}", "I\u{030C}", "i\u{030C}", "i\u{030C}", 5, 0, 0, 0),
    ("\u{01D0}", "i\u{030C}", "i\u{030C}", "I\u{030C}", 1, 0, 0, 0),
    ("\u{01D1}", "O\u{030C}", "o\u{030C}", "o\u{030C}", 5, 0, 0, 0),
    ("\u{01D2}", "o\u{030C}", "o\u{030C}", "O\u{030C}", 1, 0, 0, 0),
    ("\u{01D3}", "U\u{030C}", "u\u{030C}", "u\u{030C}", 5, 0, 0, 0),
    ("\u{01D4}", "u\u{030C}", "u\u{030C}", "U\u{030C}", 1, 0, 0, 0),
    ("\u{01D5}", "U\u{0308}\u{0304}", "u\u{0308}\u{0304}", "u\u{0308}\u{0304}", 5, 0, 0, 0),
    ("\u{01D6}", "u\u{0308}\u{0304}", "u\u{0308}\u{0304}", "U\u{0308}\u{0304}", 1, 0, 0, 0),
    ("\u{01D7}", "U\u{0308}\u{0301}", "u\u{0308}\u{0301}", "u\u{0308}\u{0301}", 5, 0, 0, 0),
    ("\u{01D8}", "u\u{0308}\u{0301}", "u\u{0308}\u{0301}", "U\u{0308}\u{0301}", 1, 0, 0, 0),
    ("\u{01D9}", "U\u{0308}\u{030C}", "u\u{0308}\u{030C}", "u\u{0308}\u{030C}", 5, 0, 0, 0),
    ("\u{01DA}", "u\u{0308}\u{030C}", "u\u{0308}\u{030C}", "U\u{0308}\u{030C}", 1, 0, 0, 0),
    ("\u{01DB}", "U\u{0308}\u{0300}", "u\u{0308}\u{0300}", "u\u{0308}\u{0300}", 5, 0, 0, 0),
    ("\u{01DC}", "u\u{0308}\u{0300}", "u\u{0308}\u{0300}", "U\u{0308}\u{0300}", 1, 0, 0, 0),
    ("\u{01DD}", "\u{01DD}", "\u{01DD}", "\u{018E}", 1, 0, 0, 0),
    ("\u{01DE}", "A\u{0308}\u{0304}", "a\u{0308}\u{0304}", "a\u{0308}\u{0304}", 5, 0, 0, 0),
    ("\u{01DF}", "a\u{0308}\u{0304}", "a\u{0308}\u{0304}", "A\u{0308}\u{0304}", 1, 0, 0, 0),
    ("\u{01E0}", "A\u{0307}\u{0304}", "a\u{0307}\u{0304}", "a\u{0307}\u{0304}", 5, 0, 0, 0),
    ("\u{01E1}", "a\u{0307}\u{0304}", "a\u{0307}\u{0304}", "A\u{0307}\u{0304}", 1, 0, 0, 0),
    ("\u{01E2}", "\u{00C6}\u{0304}", "\u{00E6}\u{0304}", "\u{00E6}\u{0304}", 5, 0, 0, 0),
    ("\u{01E3}", "\u{00E6}\u{0304}", "\u{00E6}\u{0304}", "\u{00C6}\u{0304}", 1, 0, 0, 0),
    ("\u{01E4}", "\u{01E4}", "\u{01E5}", "\u{01E5}", 5, 0, 0, 0),
    ("\u{01E5}", "\u{01E5}", "\u{01E5}", "\u{01E4}", 1, 0, 0, 0),
    ("\u{01E6}", "G\u{030C}", "g\u{030C}", "g\u{030C}", 5, 0, 0, 0),
    ("\u{01E7}", "g\u{030C}", "g\u{030C}", "G\u{030C}", 1, 0, 0, 0),
    ("\u{01E8}", "K\u{030C}", "k\u{030C}", "k\u{030C}", 5, 0, 0, 0),
    ("\u{01E9}", "k\u{030C}", "k\u{030C}", "K\u{030C}", 1, 0, 0, 0),
    ("\u{01EA}", "O\u{0328}", "o\u{0328}", "o\u{0328}", 5, 0, 0, 0),
    ("\u{01EB}", "o\u{0328}", "o\u{0328}", "O\u{0328}", 1, 0, 0, 0),
    ("\u{01EC}", "O\u{0328}\u{0304}", "o\u{0328}\u{0304}", "o\u{0328}\u{0304}", 5, 0, 0, 0),
    ("\u{01ED}", "o\u{0328}\u{0304}", "o\u{0328}\u{0304}", "O\u{0328}\u{0304}", 1, 0, 0, 0),
    ("\u{01EE}", "\u{01B7}\u{030C}", "\u{0292}\u{030C}", "\u{0292}\u{030C}", 5, 0, 0, 0),
    ("\u{01EF}", "\u{0292}\u{030C}", "\u{0292}\u{030C}", "\u{01B7}\u{030C}", 1, 0, 0, 0),
    ("\u{01F0}", "j\u{030C}", "j\u{030C}", "J\u{030C}", 1, 0, 0, 0),
    ("\u{01F1}", "\u{01F1}", "\u{01F3}", "\u{01F3}", 5, 0, 0, 0),
    ("\u{01F2}", "\u{01F2}", "\u{01F3}", "\u{01F3}", 5, 0, 0, 0),
    ("\u{01F3}", "\u{01F3}", "\u{01F3}", "\u{01F1}", 1, 0, 0, 0),
    ("\u{01F4}", "G\u{0301}", "g\u{0301}", "g\u{0301}", 5, 0, 0, 0),
    ("\u{01F5}", "g\u{0301}", "g\u{0301}", "G\u{0301}", 1, 0, 0, 0),
    ("\u{01F6}", "\u{01F6}", "\u{0195}", "\u{0195}", 5, 0, 0, 0),
    ("\u{01F7}", "\u{01F7}", "\u{01BF}", "\u{01BF}", 5, 0, 0, 0),
    ("\u{01F8}", "N\u{0300}", "n\u{0300}", "n\u{0300}", 5, 0, 0, 0),
    ("\u{01F9}", "n\u{0300}", "n\u{0300}", "N\u{0300}", 1, 0, 0, 0),
    ("\u{01FA}", "A\u{030A}\u{0301}", "a\u{030A}\u{0301}", "a\u{030A}\u{0301}", 5, 0, 0, 0),
    ("\u{01FB}", "a\u{030A}\u{0301}", "a\u{030A}\u{0301}", "A\u{030A}\u{0301}", 1, 0, 0, 0),
    ("\u{01FC}", "\u{00C6}\u{0301}", "\u{00E6}\u{0301}", "\u{00E6}\u{0301}", 5, 0, 0, 0),
    ("\u{01FD}", "\u{00E6}\u{0301}", "\u{00E6}\u{0301}", "\u{00C6}\u{0301}", 1, 0, 0, 0),
    ("\u{01FE}", "\u{00D8}\u{0301}", "\u{00F8}\u{0301}", "\u{00F8}\u{0301}", 5, 0, 0, 0),
    ("\u{01FF}", "\u{00F8}\u{0301}", "\u{00F8}\u{0301}", "\u{00D8}\u{0301}", 1, 0, 0, 0),
    ("\u{0200}", "A\u{030F}", "a\u{030F}", "a\u{030F}", 5, 0, 0, 0),
    ("\u{0201}", "a\u{030F}", "a\u{030F}", "A\u{030F}", 1, 0, 0, 0),
    ("\u{0202}", "A\u{0311}", "a\u{0311}", "a\u{0311}", 5, 0, 0, 0),
    ("\u{0203}", "a\u{0311}", "a\u{0311}", "A\u{0311}", 1, 0, 0, 0),
    ("\u{0204}", "E\u{030F}", "e\u{030F}", "e\u{030F}", 5, 0, 0, 0),
    ("\u{0205}", "e\u{030F}", "e\u{030F}", "E\u{030F}", 1, 0, 0, 0),
    ("\u{0206}", "E\u{0311}", "e\u{0311}", "e\u{0311}", 5, 0, 0, 0),
    ("\u{0207}", "e\u{0311}", "e\u{0311}", "E\u{0311}", 1, 0, 0, 0),
    ("\u{0208}", "I\u{030F}", "i\u{030F}", "i\u{030F}", 5, 0, 0, 0),
    ("\u{0209}", "i\u{030F}", "i\u{030F}", "I\u{030F}", 1, 0, 0, 0),
    ("\u{020A}", "I\u{0311}", "i\u{0311}", "i\u{0311}", 5, 0, 0, 0),
    ("\u{020B}", "i\u{0311}", "i\u{0311}", "I\u{0311}", 1, 0, 0, 0),
    ("\u{020C}", "O\u{030F}", "o\u{030F}", "o\u{030F}", 5, 0, 0, 0),
    ("\u{020D}", "o\u{030F}", "o\u{030F}", "O\u{030F}", 1, 0, 0, 0),
    ("\u{020E}", "O\u{0311}", "o\u{0311}", "o\u{0311}", 5, 0, 0, 0),
    ("\u{020F}", "o\u{0311}", "o\u{0311}", "O\u{0311}", 1, 0, 0, 0),
    ("\u{0210}", "R\u{030F}", "r\u{030F}", "r\u{030F}", 5, 0, 0, 0),
    ("\u{0211}", "r\u{030F}", "r\u{030F}", "R\u{030F}", 1, 0, 0, 0),
    ("\u{0212}", "R\u{0311}", "r\u{0311}", "r\u{0311}", 5, 0, 0, 0),
    ("\u{0213}", "r\u{0311}", "r\u{0311}", "R\u{0311}", 1, 0, 0, 0),
    ("\u{0214}", "U\u{030F}", "u\u{030F}", "u\u{030F}", 5, 0, 0, 0),
    ("\u{0215}", "u\u{030F}", "u\u{030F}", "U\u{030F}", 1, 0, 0, 0),
    ("\u{0216}", "U\u{0311}", "u\u{0311}", "u\u{0311}", 5, 0, 0, 0),
    ("\u{0217}", "u\u{0311}", "u\u{0311}", "U\u{0311}", 1, 0, 0, 0),
    ("\u{0218}", "S\u{0326}", "s\u{0326}", "s\u{0326}", 5, 0, 0, 0),
    ("\u{0219}", "s\u{0326}", "s\u{0326}", "S\u{0326}", 1, 0, 0, 0),
    ("\u{021A}", "T\u{0326}", "t\u{0326}", "t\u{0326}", 5, 0, 0, 0),
    ("\u{021B}", "t\u{0326}", "t\u{0326}", "T\u{0326}", 1, 0, 0, 0),
    ("\u{021C}", "\u{021C}", "\u{021D}", "\u{021D}", 5, 0, 0, 0),
    ("\u{021D}", "\u{021D}", "\u{021D}", "\u{021C}", 1, 0, 0, 0),
    ("\u{021E}", "H\u{030C}", "h\u{030C}", "h\u{030C}", 5, 0, 0, 0),
    ("\u{021F}", "h\u{030C}", "h\u{030C}", "H\u{030C}", 1, 0, 0, 0),
    ("\u{0220}", "\u{0220}", "\u{019E}", "\u{019E}", 5, 0, 0, 0),
    ("\u{0221}", "\u{0221}", "\u{0221}", "\u{0221}", 1, 0, 0, 0),
    ("\u{0222}", "\u{0222}", "\u{0223}", "\u{0223}", 5, 0, 0, 0),
    ("\u{0223}", "\u{0223}", "\u{0223}", "\u{0222}", 1, 0, 0, 0),
    ("\u{0224}", "\u{0224}", "\u{0225}", "\u{0225}", 5, 0, 0, 0),
    ("\u{0225}", "\u{0225}", "\u{0225}", "\u{0224}", 1, 0, 0, 0),
    ("\u{0226}", "A\u{0307}", "a\u{0307}", "a\u{0307}", 5, 0, 0, 0),
    ("\u{0227}", "a\u{0307}", "a\u{0307}", "A\u{0307}", 1, 0, 0, 0),
    ("\u{0228}", "E\u{0327}", "e\u{0327}", "e\u{0327}", 5, 0, 0, 0),
    ("\u{0229}", "e\u{0327}", "e\u{0327}", "E\u{0327}", 1, 0, 0, 0),
    ("\u{022A}", "O\u{0308}\u{0304}", "o\u{0308}\u{0304}", "o\u{0308}\u{0304}", 5, 0, 0, 0),
    ("\u{022B}", "o\u{0308}\u{0304}", "o\u{0308}\u{0304}", "O\u{0308}\u{0304}", 1, 0, 0, 0),
    ("\u{022C}", "O\u{0303}\u{0304}", "o\u{0303}\u{0304}", "o\u{0303}\u{0304}", 5, 0, 0, 0),
    ("\u{022D}", "o\u{0303}\u{0304}", "o\u{0303}\u{0304}", "O\u{0303}\u{0304}", 1, 0, 0, 0),
    ("\u{022E}", "O\u{0307}", "o\u{0307}", "o\u{0307}", 5, 0, 0, 0),
    ("\u{022F}", "o\u{0307}", "o\u{0307}", "O\u{0307}", 1, 0, 0, 0),
    ("\u{0230}", "O\u{0307}\u{0304}", "o\u{0307}\u{0304}", "o\u{0307}\u{0304}", 5, 0, 0, 0),
    ("\u{0231}", "o\u{0307}\u{0304}", "o\u{0307}\u{0304}", "O\u{0307}\u{0304}", 1, 0, 0, 0),
    ("\u{0232}", "Y\u{0304}", "y\u{0304}", "y\u{0304}", 5, 0, 0, 0),
    ("\u{0233}", "y\u{0304}", "y\u{0304}", "Y\u{0304}", 1, 0, 0, 0),
    ("\u{0234}", "\u{0234}", "\u{0234}", "\u{0234}", 1, 0, 0, 0),
    ("\u{0235}", "\u{0235}", "\u{0235}", "\u{0235}", 1, 0, 0, 0),
    ("\u{0236}", "\u{0236}", "\u{0236}", "\u{0236}", 1, 0, 0, 0),
    ("\u{0237}", "\u{0237}", "\u{0237}", "\u{0237}", 1, 0, 0, 0),
    ("\u{0238}", "\u{0238}", "\u{0238}", "\u{0238}", 1, 0, 0, 0),
    ("\u{0239}", "\u{0239}", "\u{0239}", "\u{0239}", 1, 0, 0, 0),
    ("\u{023A}", "\u{023A}", "\u{2C65}", "\u{2C65}", 5, 0, 0, 0),
    ("\u{023B}", "\u{023B}", "\u{023C}", "\u{023C}", 5, 0, 0, 0),
    ("\u{023C}", "\u{023C}", "\u{023C}", "\u{023B}", 1, 0, 0, 0),
    ("\u{023D}", "\u{023D}", "\u{019A}", "\u{019A}", 5, 0, 0, 0),
    ("\u{023E}", "\u{023E}", "\u{2C66}", "\u{2C66}", 5, 0, 0, 0),
    ("\u{023F}", "\u{023F}", "\u{023F}", "\u{2C7E}", 1, 0, 0, 0),
    ("\u{0240}", "\u{0240}", "\u{0240}", "\u{2C7F}", 1, 0, 0, 0),
    ("\u{0241}", "\u{0241}", "\u{0242}", "\u{0242}", 5, 0, 0, 0),
    ("\u{0242}", "\u{0242}", "\u{0242}", "\u{0241}", 1, 0, 0, 0),
    ("\u{0243}", "\u{0243}", "\u{0180}", "\u{0180}", 5, 0, 0, 0),
    ("\u{0244}", "\u{0244}", "\u{0289}", "\u{0289}", 5, 0, 0, 0),
    ("\u{0245}", "\u{0245}", "\u{028C}", "\u{028C}", 5, 0, 0, 0),
    ("\u{0246}", "\u{0246}", "\u{0247}", "\u{0247}", 5, 0, 0, 0),
    ("\u{0247}", "\u{0247}", "\u{0247}", "\u{0246}", 1, 0, 0, 0),
    ("\u{0248}", "\u{0248}", "\u{0249}", "\u{0249}", 5, 0, 0, 0),
    ("\u{0249}", "\u{0249}", "\u{0249}", "\u{0248}", 1, 0, 0, 0),
    ("\u{024A}", "\u{024A}", "\u{024B}", "\u{024B}", 5, 0, 0, 0),
    ("\u{024B}", "\u{024B}", "\u{024B}", "\u{024A}", 1, 0, 0, 0),
    ("\u{024C}", "\u{024C}", "\u{024D}", "\u{024D}", 5, 0, 0, 0),
    ("\u{024D}", "\u{024D}", "\u{024D}", "\u{024C}", 1, 0, 0, 0),
    ("\u{024E}", "\u{024E}", "\u{024F}", "\u{024F}", 5, 0, 0, 0),
    ("\u{024F}", "\u{024F}", "\u{024F}", "\u{024E}", 1, 0, 0, 0),
    ("\u{0250}", "\u{0250}", "\u{0250}", "\u{2C6F}", 1, 0, 0, 0),
    ("\u{0251}", "\u{0251}", "\u{0251}", "\u{2C6D}", 1, 0, 0, 0),
    ("\u{0252}", "\u{0252}", "\u{0252}", "\u{2C70}", 1, 0, 0, 0),
    ("\u{0253}", "\u{0253}", "\u{0253}", "\u{0181}", 1, 0, 0, 0),
    ("\u{0254}", "\u{0254}", "\u{0254}", "\u{0186}", 1, 0, 0, 0),
    ("\u{0255}", "\u{0255}", "\u{0255}", "\u{0255}", 1, 0, 0, 0),
    ("\u{0256}", "\u{0256}", "\u{0256}", "\u{0189}", 1, 0, 0, 0),
    ("\u{0257}", "\u{0257}", "\u{0257}", "\u{018A}", 1, 0, 0, 0),
    ("\u{0258}", "\u{0258}", "\u{0258}", "\u{0258}", 1, 0, 0, 0),
    ("\u{0259}", "\u{0259}", "\u{0259}", "\u{018F}", 1, 0, 0, 0),
    ("\u{025A}", "\u{025A}", "\u{025A}", "\u{025A}", 1, 0, 0, 0),
    ("\u{025B}", "\u{025B}", "\u{025B}", "\u{0190}", 1, 0, 0, 0),
    ("\u{025C}", "\u{025C}", "\u{025C}", "\u{A7AB}", 1, 0, 0, 0),
    ("\u{025D}", "\u{025D}", "\u{025D}", "\u{025D}", 1, 0, 0, 0),
    ("\u{025E}", "\u{025E}", "\u{025E}", "\u{025E}", 1, 0, 0, 0),
    ("\u{025F}", "\u{025F}", "\u{025F}", "\u{025F}", 1, 0, 0, 0),
    ("\u{0260}", "\u{0260}", "\u{0260}", "\u{0193}", 1, 0, 0, 0),
    ("\u{0261}", "\u{0261}", "\u{0261}", "\u{A7AC}", 1, 0, 0, 0),
    ("\u{0262}", "\u{0262}", "\u{0262}", "\u{0262}", 1, 0, 0, 0),
    ("\u{0263}", "\u{0263}", "\u{0263}", "\u{0194}", 1, 0, 0, 0),
    ("\u{0264}", "\u{0264}", "\u{0264}", "\u{0264}", 1, 0, 0, 0),
    ("\u{0265}", "\u{0265}", "\u{0265}", "\u{A78D}", 1, 0, 0, 0),
    ("\u{0266}", "\u{0266}", "\u{0266}", "\u{A7AA}", 1, 0, 0, 0),
    ("\u{0267}", "\u{0267}", "\u{0267}", "\u{0267}", 1, 0, 0, 0),
    ("\u{0268}", "\u{0268}", "\u{0268}", "\u{0197}", 1, 0, 0, 0),
    ("\u{0269}", "\u{0269}", "\u{0269}", "\u{0196}", 1, 0, 0, 0),
    ("\u{026A}", "\u{026A}", "\u{026A}", "\u{A7AE}", 1, 0, 0, 0),
    ("\u{026B}", "\u{026B}", "\u{026B}", "\u{2C62}", 1, 0, 0, 0),
    ("\u{026C}", "\u{026C}", "\u{026C}", "\u{A7AD}", 1, 0, 0, 0),
    ("\u{026D}", "\u{026D}", "\u{026D}", "\u{026D}", 1, 0, 0, 0),
    ("\u{026E}", "\u{026E}", "\u{026E}", "\u{026E}", 1, 0, 0, 0),
    ("\u{026F}", "\u{026F}", "\u{026F}", "\u{019C}", 1, 0, 0, 0),
    ("\u{0270}", "\u{0270}", "\u{0270}", "\u{0270}", 1, 0, 0, 0),
    ("\u{0271}", "\u{0271}", "\u{0271}", "\u{2C6E}", 1, 0, 0, 0),
    ("\u{0272}", "\u{0272}", "\u{0272}", "\u{019D}", 1, 0, 0, 0),
    ("\u{0273}", "\u{0273}", "\u{0273}", "\u{0273}", 1, 0, 0, 0),
    ("\u{0274}", "\u{0274}", "\u{0274}", "\u{0274}", 1, 0, 0, 0),
    ("\u{0275}", "\u{0275}", "\u{0275}", "\u{019F}", 1, 0, 0, 0),
    ("\u{0276}", "\u{0276}", "\u{0276}", "\u{0276}", 1, 0, 0, 0),
    ("\u{0277}", "\u{0277}", "\u{0277}", "\u{0277}", 1, 0, 0, 0),
    ("\u{0278}", "\u{0278}", "\u{0278}", "\u{0278}", 1, 0, 0, 0),
    ("\u{0279}", "\u{0279}", "\u{0279}", "\u{0279}", 1, 0, 0, 0),
    ("\u{027A}", "\u{027A}", "\u{027A}", "\u{027A}", 1, 0, 0, 0),
    ("\u{027B}", "\u{027B}", "\u{027B}", "\u{027B}", 1, 0, 0, 0),
    ("\u{027C}", "\u{027C}", "\u{027C}", "\u{027C}", 1, 0, 0, 0),
    ("\u{027D}", "\u{027D}", "\u{027D}", "\u{2C64}", 1, 0, 0, 0),
    ("\u{027E}", "\u{027E}", "\u{027E}", "\u{027E}", 1, 0, 0, 0),
    ("\u{027F}", "\u{027F}", "\u{027F}", "\u{027F}", 1, 0, 0, 0),
    ("\u{0280}", "\u{0280}", "\u{0280}", "\u{01A6}", 1, 0, 0, 0),
    ("\u{0281}", "\u{0281}", "\u{0281}", "\u{0281}", 1, 0, 0, 0),
    ("\u{0282}", "\u{0282}", "\u{0282}", "\u{A7C5}", 1, 0, 0, 0),
    ("\u{0283}", "\u{0283}", "\u{0283}", "\u{01A9}", 1, 0, 0, 0),
    ("\u{0284}", "\u{0284}", "\u{0284}", "\u{0284}", 1, 0, 0, 0),
    ("\u{0285}", "\u{0285}", "\u{0285}", "\u{0285}", 1, 0, 0, 0),
    ("\u{0286}", "\u{0286}", "\u{0286}", "\u{0286}", 1, 0, 0, 0),
    ("\u{0287}", "\u{0287}", "\u{0287}", "\u{A7B1}", 1, 0, 0, 0),
    ("\u{0288}", "\u{0288}", "\u{0288}", "\u{01AE}", 1, 0, 0, 0),
    ("\u{0289}", "\u{0289}", "\u{0289}", "\u{0244}", 1, 0, 0, 0),
    ("\u{028A}", "\u{028A}", "\u{028A}", "\u{01B1}", 1, 0, 0, 0),
    ("\u{028B}", "\u{028B}", "\u{028B}", "\u{01B2}", 1, 0, 0, 0),
    ("\u{028C}", "\u{028C}", "\u{028C}", "\u{0245}", 1, 0, 0, 0),
    ("\u{028D}", "\u{028D}", "\u{028D}", "\u{028D}", 1, 0, 0, 0),
    ("\u{028E}", "\u{028E}", "\u{028E}", "\u{028E}", 1, 0, 0, 0),
    ("\u{028F}", "\u{028F}", "\u{028F}", "\u{028F}", 1, 0, 0, 0),
    ("\u{0290}", "\u{0290}", "\u{0290}", "\u{0290}", 1, 0, 0, 0),
    ("\u{0291}", "\u{0291}", "\u{0291}", "\u{0291}", 1, 0, 0, 0),
    ("\u{0292}", "\u{0292}", "\u{0292}", "\u{01B7}", 1, 0, 0, 0),
    ("\u{0293}", "\u{0293}", "\u{0293}", "\u{0293}", 1, 0, 0, 0),
    ("\u{0294}", "\u{0294}", "\u{0294}", "\u{0294}", 1, 0, 0, 0),
    ("\u{0295}", "\u{0295}", "\u{0295}", "\u{0295}", 1, 0, 0, 0),
    ("\u{0296}", "\u{0296}", "\u{0296}", "\u{0296}", 1, 0, 0, 0),
    ("\u{0297}", "\u{0297}", "\u{0297}", "\u{0297}", 1, 0, 0, 0),
    ("\u{0298}", "\u{0298}", "\u{0298}", "\u{0298}", 1, 0, 0, 0),
    ("\u{0299}", "\u{0299}", "\u{0299}", "\u{0299}", 1, 0, 0, 0),
    ("\u{029A}", "\u{029A}", "\u{029A}", "\u{029A}", 1, 0, 0, 0),
    ("\u{029B}", "\u{029B}", "\u{029B}", "\u{029B}", 1, 0, 0, 0),
    ("\u{029C}", "\u{029C}", "\u{029C}", "\u{029C}", 1, 0, 0, 0),
    ("\u{029D}", "\u{029D}", "\u{029D}", "\u{A7B2}", 1, 0, 0, 0),
    ("\u{029E}", "\u{029E}", "\u{029E}", "\u{A7B0}", 1, 0, 0, 0),
    ("\u{029F}", "\u{029F}", "\u{029F}", "\u{029F}", 1, 0, 0, 0),
    ("\u{02A0}", "\u{02A0}", "\u{02A0}", "\u{02A0}", 1, 0, 0, 0),
    ("\u{02A1}", "\u{02A1}", "\u{02A1}", "\u{02A1}", 1, 0, 0, 0),
    ("\u{02A2}", "\u{02A2}", "\u{02A2}", "\u{02A2}", 1, 0, 0, 0),
    ("\u{02A3}", "\u{02A3}", "\u{02A3}", "\u{02A3}", 1, 0, 0, 0),
    ("\u{02A4}", "\u{02A4}", "\u{02A4}", "\u{02A4}", 1, 0, 0, 0),
    ("\u{02A5}", "\u{02A5}", "\u{02A5}", "\u{02A5}", 1, 0, 0, 0),
    ("\u{02A6}", "\u{02A6}", "\u{02A6}", "\u{02A6}", 1, 0, 0, 0),
    ("\u{02A7}", "\u{02A7}", "\u{02A7}", "\u{02A7}", 1, 0, 0, 0),
    ("\u{02A8}", "\u{02A8}", "\u{02A8}", "\u{02A8}", 1, 0, 0, 0),
    ("\u{02A9}", "\u{02A9}", "\u{02A9}", "\u{02A9}", 1, 0, 0, 0),
    ("\u{02AA}", "\u{02AA}", "\u{02AA}", "\u{02AA}", 1, 0, 0, 0),
    ("\u{02AB}", "\u{02AB}", "\u{02AB}", "\u{02AB}", 1, 0, 0, 0),
    ("\u{02AC}", "\u{02AC}", "\u{02AC}", "\u{02AC}", 1, 0, 0, 0),
    ("\u{02AD}", "\u{02AD}", "\u{02AD}", "\u{02AD}", 1, 0, 0, 0),
    ("\u{02AE}", "\u{02AE}", "\u{02AE}", "\u{02AE}", 1, 0, 0, 0),
    ("\u{02AF}", "\u{02AF}", "\u{02AF}", "\u{02AF}", 1, 0, 0, 0),
    ("\u{02B0}", "\u{02B0}", "\u{02B0}", "\u{02B0}", 1, 0, 0, 0),
    ("\u{02B1}", "\u{02B1}", "\u{02B1}", "\u{02B1}", 1, 0, 0, 0),
    ("\u{02B2}", "\u{02B2}", "\u{02B2}", "\u{02B2}", 1, 0, 0, 0),
    ("\u{02B3}", "\u{02B3}", "\u{02B3}", "\u{02B3}", 1, 0, 0, 0),
    ("\u{02B4}", "\u{02B4}", "\u{02B4}", "\u{02B4}", 1, 0, 0, 0),
    ("\u{02B5}", "\u{02B5}", "\u{02B5}", "\u{02B5}", 1, 0, 0, 0),
    ("\u{02B6}", "\u{02B6}", "\u{02B6}", "\u{02B6}", 1, 0, 0, 0),
    ("\u{02B7}", "\u{02B7}", "\u{02B7}", "\u{02B7}", 1, 0, 0, 0),
    ("\u{02B8}", "\u{02B8}", "\u{02B8}", "\u{02B8}", 1, 0, 0, 0),
    ("\u{02B9}", "\u{02B9}", "\u{02B9}", "\u{02B9}", 1, 0, 0, 0),
    ("\u{02BA}", "\u{02BA}", "\u{02BA}", "\u{02BA}", 1, 0, 0, 0),
    ("\u{02BB}", "\u{02BB}", "\u{02BB}", "\u{02BB}", 1, 0, 0, 0),
    ("\u{02BC}", "\u{02BC}", "\u{02BC}", "\u{02BC}", 1, 0, 0, 0),
    ("\u{02BD}", "\u{02BD}", "\u{02BD}", "\u{02BD}", 1, 0, 0, 0),
    ("\u{02BE}", "\u{02BE}", "\u{02BE}", "\u{02BE}", 1, 0, 0, 0),
    ("\u{02BF}", "\u{02BF}", "\u{02BF}", "\u{02BF}", 1, 0, 0, 0),
    ("\u{02C0}", "\u{02C0}", "\u{02C0}", "\u{02C0}", 1, 0, 0, 0),
    ("\u{02C1}", "\u{02C1}", "\u{02C1}", "\u{02C1}", 1, 0, 0, 0),
    ("\u{02C6}", "\u{02C6}", "\u{02C6}", "\u{02C6}", 1, 0, 0, 0),
    ("\u{02C7}", "\u{02C7}", "\u{02C7}", "\u{02C7}", 1, 0, 0, 0),
    ("\u{02C8}", "\u{02C8}", "\u{02C8}", "\u{02C8}", 1, 0, 0, 0),
    ("\u{02C9}", "\u{02C9}", "\u{02C9}", "\u{02C9}", 1, 0, 0, 0),
    ("\u{02CA}", "\u{02CA}", "\u{02CA}", "\u{02CA}", 1, 0, 0, 0),
    ("\u{02CB}", "\u{02CB}", "\u{02CB}", "\u{02CB}", 1, 0, 0, 0),
    ("\u{02CC}", "\u{02CC}", "\u{02CC}", "\u{02CC}", 1, 0, 0, 0),
    ("\u{02CD}", "\u{02CD}", "\u{02CD}", "\u{02CD}", 1, 0, 0, 0),
    ("\u{02CE}", "\u{02CE}", "\u{02CE}", "\u{02CE}", 1, 0, 0, 0),
    ("\u{02CF}", "\u{02CF}", "\u{02CF}", "\u{02CF}", 1, 0, 0, 0),
    ("\u{02D0}", "\u{02D0}", "\u{02D0}", "\u{02D0}", 1, 0, 0, 0),
    ("\u{02D1}", "\u{02D1}", "\u{02D1}", "\u{02D1}", 1, 0, 0, 0),
    ("\u{02E0}", "\u{02E0}", "\u{02E0}", "\u{02E0}", 1, 0, 0, 0),
    ("\u{02E1}", "\u{02E1}", "\u{02E1}", "\u{02E1}", 1, 0, 0, 0),
    ("\u{02E2}", "\u{02E2}", "\u{02E2}", "\u{02E2}", 1, 0, 0, 0),
    ("\u{02E3}", "\u{02E3}", "\u{02E3}", "\u{02E3}", 1, 0, 0, 0),
    ("\u{02E4}", "\u{02E4}", "\u{02E4}", "\u{02E4}", 1, 0, 0, 0),
    ("\u{02EC}", "\u{02EC}", "\u{02EC}", "\u{02EC}", 1, 0, 0, 0),
    ("\u{02EE}", "\u{02EE}", "\u{02EE}", "\u{02EE}", 1, 0, 0, 0),
    ("\u{0300}", "\u{0300}", "\u{0300}", "\u{0300}", 0, 4, 230, 2),
    ("\u{0301}", "\u{0301}", "\u{0301}", "\u{0301}", 0, 4, 230, 2),
    ("\u{0302}", "\u{0302}", "\u{0302}", "\u{0302}", 0, 4, 230, 2),
    ("\u{0303}", "\u{0303}", "\u{0303}", "\u{0303}", 0, 4, 230, 2),
    ("\u{0304}", "\u{0304}", "\u{0304}", "\u{0304}", 0, 4, 230, 2),
    ("\u{0305}", "\u{0305}", "\u{0305}", "\u{0305}", 0, 4, 230, 2),
    ("\u{0306}", "\u{0306}", "\u{0306}", "\u{0306}", 0, 4, 230, 2),
    ("\u{0307}", "\u{0307}", "\u{0307}", "\u{0307}", 0, 4, 230, 2),
    ("\u{0308}", "\u{0308}", "\u{0308}", "\u{0308}", 0, 4, 230, 2),
    ("\u{0309}", "\u{0309}", "\u{0309}", "\u{0309}", 0, 4, 230, 2),
    ("\u{030A}", "\u{030A}", "\u{030A}", "\u{030A}", 0, 4, 230, 2),
    ("\u{030B}", "\u{030B}", "\u{030B}", "\u{030B}", 0, 4, 230, 2),
    ("\u{030C}", "\u{030C}", "\u{030C}", "\u{030C}", 0, 4, 230, 2),
    ("\u{030D}", "\u{030D}", "\u{030D}", "\u{030D}", 0, 4, 230, 2),
    ("\u{030E}", "\u{030E}", "\u{030E}", "\u{030E}", 0, 4, 230, 2),
    ("\u{030F}", "\u{030F}", "\u{030F}", "\u{030F}", 0, 4, 230, 2),
    ("\u{0310}", "\u{0310}", "\u{0310}", "\u{0310}", 0, 4, 230, 2),
    ("\u{0311}", "\u{0311}", "\u{0311}", "\u{0311}", 0, 4, 230, 2),
    ("\u{0312}", "\u{0312}", "\u{0312}", "\u{0312}", 0, 4, 230, 2),
    ("\u{0313}", "\u{0313}", "\u{0313}", "\u{0313}", 0, 4, 230, 2),
    ("\u{0314}", "\u{0314}", "\u{0314}", "\u{0314}", 0, 4, 230, 2),
    ("\u{0315}", "\u{0315}", "\u{0315}", "\u{0315}", 0, 4, 232, 2),
    ("\u{0316}", "\u{0316}", "\u{0316}", "\u{0316}", 0, 4, 220, 2),
    ("\u{0317}", "\u{0317}", "\u{0317}", "\u{0317}", 0, 4, 220, 2),
    ("\u{0318}", "\u{0318}", "\u{0318}", "\u{0318}", 0, 4, 220, 2),
    ("\u{0319}", "\u{0319}", "\u{0319}", "\u{0319}", 0, 4, 220, 2),
    ("\u{031A}", "\u{031A}", "\u{031A}", "\u{031A}", 0, 4, 232, 2),
    ("\u{031B}", "\u{031B}", "\u{031B}", "\u{031B}", 0, 4, 216, 2),
    ("\u{031C}", "\u{031C}", "\u{031C}", "\u{031C}", 0, 4, 220, 2),
    ("\u{031D}", "\u{031D}", "\u{031D}", "\u{031D}", 0, 4, 220, 2),
    ("\u{031E}", "\u{031E}", "\u{031E}", "\u{031E}", 0, 4, 220, 2),
    ("\u{031F}", "\u{031F}", "\u{031F}", "\u{031F}", 0, 4, 220, 2),
    ("\u{0320}", "\u{0320}", "\u{0320}", "\u{0320}", 0, 4, 220, 2),
    ("\u{0321}", "\u{0321}", "\u{0321}", "\u{0321}", 0, 4, 202, 2),
    ("\u{0322}", "\u{0322}", "\u{0322}", "\u{0322}", 0, 4, 202, 2),
    ("\u{0323}", "\u{0323}", "\u{0323}", "\u{0323}", 0, 4, 220, 2),
    ("\u{0324}", "\u{0324}", "\u{0324}", "\u{0324}", 0, 4, 220, 2),
    ("\u{0325}", "\u{0325}", "\u{0325}", "\u{0325}", 0, 4, 220, 2),
    ("\u{0326}", "\u{0326}", "\u{0326}", "\u{0326}", 0, 4, 220, 2),
    ("\u{0327}", "\u{0327}", "\u{0327}", "\u{0327}", 0, 4, 202, 2),
    ("\u{0328}", "\u{0328}", "\u{0328}", "\u{0328}", 0, 4, 202, 2),
    ("\u{0329}", "\u{0329}", "\u{0329}", "\u{0329}", 0, 4, 220, 2),
    ("\u{032A}", "\u{032A}", "\u{032A}", "\u{032A}", 0, 4, 220, 2),
    ("\u{032B}", "\u{032B}", "\u{032B}", "\u{032B}", 0, 4, 220, 2),
    ("\u{032C}", "\u{032C}", "\u{032C}", "\u{032C}", 0, 4, 220, 2),
    ("\u{032D}", "\u{032D}", "\u{032D}", "\u{032D}", 0, 4, 220, 2),
    ("\u{032E}", "\u{032E}", "\u{032E}", "\u{032E}", 0, 4, 220, 2),
    ("\u{032F}", "\u{032F}", "\u{032F}", "\u{032F}", 0, 4, 220, 2),
    ("\u{0330}", "\u{0330}", "\u{0330}", "\u{0330}", 0, 4, 220, 2),
    ("\u{0331}", "\u{0331}", "\u{0331}", "\u{0331}", 0, 4, 220, 2),
    ("\u{0332}", "\u{0332}", "\u{0332}", "\u{0332}", 0, 4, 220, 2),
    ("\u{0333}", "\u{0333}", "\u{0333}", "\u{0333}", 0, 4, 220, 2),
    ("\u{0334}", "\u{0334}", "\u{0334}", "\u{0334}", 0, 4, 1, 2),
    ("\u{0335}", "\u{0335}", "\u{0335}", "\u{0335}", 0, 4, 1, 2),
    ("\u{0336}", "\u{0336}", "\u{0336}", "\u{0336}", 0, 4, 1, 2),
    ("\u{0337}", "\u{0337}", "\u{0337}", "\u{0337}", 0, 4, 1, 2),
    ("\u{0338}", "\u{0338}", "\u{0338}", "\u{0338}", 0, 4, 1, 2),
    ("\u{0339}", "\u{0339}", "\u{0339}", "\u{0339}", 0, 4, 220, 2),
    ("\u{033A}", "\u{033A}", "\u{033A}", "\u{033A}", 0, 4, 220, 2),
    ("\u{033B}", "\u{033B}", "\u{033B}", "\u{033B}", 0, 4, 220, 2),
    ("\u{033C}", "\u{033C}", "\u{033C}", "\u{033C}", 0, 4, 220, 2),
    ("\u{033D}", "\u{033D}", "\u{033D}", "\u{033D}", 0, 4, 230, 2),
    ("\u{033E}", "\u{033E}", "\u{033E}", "\u{033E}", 0, 4, 230, 2),
    ("\u{033F}", "\u{033F}", "\u{033F}", "\u{033F}", 0, 4, 230, 2),
    ("\u{0340}", "\u{0300}", "\u{0300}", "\u{0300}", 0, 4, 230, 2),
    ("\u{0341}", "\u{0301}", "\u{0301}", "\u{0301}", 0, 4, 230, 2),
    ("\u{0342}", "\u{0342}", "\u{0342}", "\u{0342}", 0, 4, 230, 2),
    ("\u{0343}", "\u{0313}", "\u{0313}", "\u{0313}", 0, 4, 230, 2),
    ("\u{0344}", "\u{0308}\u{0301}", "\u{0308}\u{0301}", "\u{0308}\u{0301}", 0, 4, 230, 2),
    ("\u{0345}", "\u{0345}", "\u{03B9}", "\u{0399}", 0, 4, 240, 2),
    ("\u{0346}", "\u{0346}", "\u{0346}", "\u{0346}", 0, 4, 230, 2),
    ("\u{0347}", "\u{0347}", "\u{0347}", "\u{0347}", 0, 4, 220, 2),
    ("\u{0348}", "\u{0348}", "\u{0348}", "\u{0348}", 0, 4, 220, 2),
    ("\u{0349}", "\u{0349}", "\u{0349}", "\u{0349}", 0, 4, 220, 2),
    ("\u{034A}", "\u{034A}", "\u{034A}", "\u{034A}", 0, 4, 230, 2),
    ("\u{034B}", "\u{034B}", "\u{034B}", "\u{034B}", 0, 4, 230, 2),
    ("\u{034C}", "\u{034C}", "\u{034C}", "\u{034C}", 0, 4, 230, 2),
    ("\u{034D}", "\u{034D}", "\u{034D}", "\u{034D}", 0, 4, 220, 2),
    ("\u{034E}", "\u{034E}", "\u{034E}", "\u{034E}", 0, 4, 220, 2),
    ("\u{034F}", "\u{034F}", "\u{034F}", "\u{034F}", 0, 4, 0, 0),
    ("\u{0350}", "\u{0350}", "\u{0350}", "\u{0350}", 0, 4, 230, 2),
    ("\u{0351}", "\u{0351}", "\u{0351}", "\u{0351}", 0, 4, 230, 2),
    ("\u{0352}", "\u{0352}", "\u{0352}", "\u{0352}", 0, 4, 230, 2),
    ("\u{0353}", "\u{0353}", "\u{0353}", "\u{0353}", 0, 4, 220, 2),
    ("\u{0354}", "\u{0354}", "\u{0354}", "\u{0354}", 0, 4, 220, 2),
    ("\u{0355}", "\u{0355}", "\u{0355}", "\u{0355}", 0, 4, 220, 2),
    ("\u{0356}", "\u{0356}", "\u{0356}", "\u{0356}", 0, 4, 220, 2),
    ("\u{0357}", "\u{0357}", "\u{0357}", "\u{0357}", 0, 4, 230, 2),
    ("\u{0358}", "\u{0358}", "\u{0358}", "\u{0358}", 0, 4, 232, 2),
    ("\u{0359}", "\u{0359}", "\u{0359}", "\u{0359}", 0, 4, 220, 2),
    ("\u{035A}", "\u{035A}", "\u{035A}", "\u{035A}", 0, 4, 220, 2),
    ("\u{035B}", "\u{035B}", "\u{035B}", "\u{035B}", 0, 4, 230, 2),
    ("\u{035C}", "\u{035C}", "\u{035C}", "\u{035C}", 0, 4, 233, 2),
    ("\u{035D}", "\u{035D}", "\u{035D}", "\u{035D}", 0, 4, 234, 2),
    ("\u{035E}", "\u{035E}", "\u{035E}", "\u{035E}", 0, 4, 234, 2),
    ("\u{035F}", "\u{035F}", "\u{035F}", "\u{035F}", 0, 4, 233, 2),
    ("\u{0360}", "\u{0360}", "\u{0360}", "\u{0360}", 0, 4, 234, 2),
    ("\u{0361}", "\u{0361}", "\u{0361}", "\u{0361}", 0, 4, 234, 2),
    ("\u{0362}", "\u{0362}", "\u{0362}", "\u{0362}", 0, 4, 233, 2),
    ("\u{0363}", "\u{0363}", "\u{0363}", "\u{0363}", 0, 4, 230, 2),
    ("\u{0364}", "\u{0364}", "\u{0364}", "\u{0364}", 0, 4, 230, 2),
    ("\u{0365}", "\u{0365}", "\u{0365}", "\u{0365}", 0, 4, 230, 2),
    ("\u{0366}", "\u{0366}", "\u{0366}", "\u{0366}", 0, 4, 230, 2),
    ("\u{0367}", "\u{0367}", "\u{0367}", "\u{0367}", 0, 4, 230, 2),
    ("\u{0368}", "\u{0368}", "\u{0368}", "\u{0368}", 0, 4, 230, 2),
    ("\u{0369}", "\u{0369}", "\u{0369}", "\u{0369}", 0, 4, 230, 2),
    ("\u{036A}", "\u{036A}", "\u{036A}", "\u{036A}", 0, 4, 230, 2),
    ("\u{036B}", "\u{036B}", "\u{036B}", "\u{036B}", 0, 4, 230, 2),
    ("\u{036C}", "\u{036C}", "\u{036C}", "\u{036C}", 0, 4, 230, 2),
    ("\u{036D}", "\u{036D}", "\u{036D}", "\u{036D}", 0, 4, 230, 2),
    ("\u{036E}", "\u{036E}", "\u{036E}", "\u{036E}", 0, 4, 230, 2),
    ("\u{036F}", "\u{036F}", "\u{036F}", "\u{036F}", 0, 4, 230, 2),
    ("\u{0370}", "\u{0370}", "\u{0371}", "\u{0371}", 5, 0, 0, 0),
    ("\u{0371}", "\u{0371}", "\u{0371}", "\u{0370}", 1, 0, 0, 0),
    ("\u{0372}", "\u{0372}", "\u{0373}", "\u{0373}", 5, 0, 0, 0),
    ("\u{0373}", "\u{0373}", "\u{0373}", "\u{0372}", 1, 0, 0, 0),
    ("\u{0374}", "\u{02B9}", "\u{02B9}", "\u{02B9}", 1, 0, 0, 0),
    ("\u{0376}", "\u{0376}", "\u{0377}", "\u{0377}", 5, 0, 0, 0),
    ("\u{0377}", "\u{0377}", "\u{0377}", "\u{0376}", 1, 0, 0, 0),
    ("\u{037A}", "\u{037A}", "\u{037A}", "\u{037A}", 1, 0, 0, 0),
    ("\u{037B}", "\u{037B}", "\u{037B}", "\u{03FD}", 1, 0, 0, 0),
    ("\u{037C}", "\u{037C}", "\u{037C}", "\u{03FE}", 1, 0, 0, 0),
    ("\u{037D}", "\u{037D}", "\u{037D}", "\u{03FF}", 1, 0, 0, 0),
    ("\u{037E}", ";", ";", ";", 2, 0, 0, 0),
    ("\u{037F}", "\u{037F}", "\u{03F3}", "\u{03F3}", 5, 0, 0, 0),
    ("\u{0385}", "\u{00A8}\u{0301}", "\u{00A8}\u{0301}", "\u{00A8}\u{0301}", 0, 0, 0, 0),
    ("\u{0386}", "\u{0391}\u{0301}", "\u{03B1}\u{0301}", "\u{03B1}\u{0301}", 5, 0, 0, 0),
    ("\u{0387}", "\u{00B7}", "\u{00B7}", "\u{00B7}", 2, 0, 0, 0),
    ("\u{0388}", "\u{0395}\u{0301}", "\u{03B5}\u{0301}", "\u{03B5}\u{0301}", 5, 0, 0, 0),
    ("\u{0389}", "\u{0397}\u{0301}", "\u{03B7}\u{0301}", "\u{03B7}\u{0301}", 5, 0, 0, 0),
    ("\u{038A}", "\u{0399}\u{0301}", "\u{03B9}\u{0301}", "\u{03B9}\u{0301}", 5, 0, 0, 0),
    ("\u{038C}", "\u{039F}\u{0301}", "\u{03BF}\u{0301}", "\u{03BF}\u{0301}", 5, 0, 0, 0),
    ("\u{038E}", "\u{03A5}\u{0301}", "\u{03C5}\u{0301}", "\u{03C5}\u{0301}", 5, 0, 0, 0),
    ("\u{038F}", "\u{03A9}\u{0301}", "\u{03C9}\u{0301}", "\u{03C9}\u{0301}", 5, 0, 0, 0),
    ("\u{0390}", "\u{03B9}\u{0308}\u{0301}", "\u{03B9}\u{0308}\u{0301}", "\u{0399}\u{0308}\u{0301}", 1, 0, 0, 0),
    ("\u{0391}", "\u{0391}", "\u{03B1}", "\u{03B1}", 5, 0, 0, 0),
    ("\u{0392}", "\u{0392}", "\u{03B2}", "\u{03B2}", 5, 0, 0, 0),
    ("\u{0393}", "\u{0393}", "\u{03B3}", "\u{03B3}", 5, 0, 0, 0),
    ("\u{0394}", "\u{0394}", "\u{03B4}", "\u{03B4}", 5, 0, 0, 0),
    ("\u{0395}", "\u{0395}", "\u{03B5}", "\u{03B5}", 5, 0, 0, 0),
    ("\u{0396}", "\u{0396}", "\u{03B6}", "\u{03B6}", 5, 0, 0, 0),
    ("\u{0397}", "\u{0397}", "\u{03B7}", "\u{03B7}", 5, 0, 0, 0),
    ("\u{0398}", "\u{0398}", "\u{03B8}", "\u{03B8}", 5, 0, 0, 0),
    ("\u{0399}", "\u{0399}", "\u{03B9}", "\u{03B9}", 5, 0, 0, 0),
    ("\u{039A}", "\u{039A}", "\u{03BA}", "\u{03BA}", 5, 0, 0, 0),
    ("\u{039B}", "\u{039B}", "\u{03BB}", "\u{03BB}", 5, 0, 0, 0),
    ("\u{039C}", "\u{039C}", "\u{03BC}", "\u{03BC}", 5, 0, 0, 0),
    ("\u{039D}", "\u{039D}", "\u{03BD}", "\u{03BD}", 5, 0, 0, 0),
    ("\u{039E}", "\u{039E}", "\u{03BE}", "\u{03BE}", 5, 0, 0, 0),
    ("\u{039F}", "\u{039F}", "\u{03BF}", "\u{03BF}", 5, 0, 0, 0),
    ("\u{03A0}", "\u{03A0}", "\u{03C0}", "\u{03C0}", 5, 0, 0, 0),
    ("\u{03A1}", "\u{03A1}", "\u{03C1}", "\u{03C1}", 5, 0, 0, 0),
    ("\u{03A3}", "\u{03A3}", "\u{03C3}", "\u{03C3}", 5, 0, 0, 0),
    ("\u{03A4}", "\u{03A4}", "\u{03C4}", "\u{03C4}", 5, 0, 0, 0),
    ("\u{03A5}", "\u{03A5}", "\u{03C5}", "\u{03C5}", 5, 0, 0, 0),
    ("\u{03A6}", "\u{03A6}", "\u{03C6}", "\u{03C6}", 5, 0, 0, 0),
    ("\u{03A7}", "\u{03A7}", "\u{03C7}", "\u{03C7}", 5, 0, 0, 0),
    ("\u{03A8}", "\u{03A8}", "\u{03C8}", "\u{03C8}", 5, 0, 0, 0),
    ("\u{03A9}", "\u{03A9}", "\u{03C9}", "\u{03C9}", 5, 0, 0, 0),
    ("\u{03AA}", "\u{0399}\u{0308}", "\u{03B9}\u{0308}", "\u{03B9}\u{0308}", 5, 0, 0, 0),
    ("\u{03AB}", "\u{03A5}\u{0308}", "\u{03C5}\u{0308}", "\u{03C5}\u{0308}", 5, 0, 0, 0),
    ("\u{03AC}", "\u{03B1}\u{0301}", "\u{03B1}\u{0301}", "\u{0391}\u{0301}", 1, 0, 0, 0),
    ("\u{03AD}", "\u{03B5}\u{0301}", "\u{03B5}\u{0301}", "\u{0395}\u{0301}", 1, 0, 0, 0),
    ("\u{03AE}", "\u{03B7}\u{0301}", "\u{03B7}\u{0301}", "\u{0397}\u{0301}", 1, 0, 0, 0),
    ("\u{03AF}", "\u{03B9}\u{0301}", "\u{03B9}\u{0301}", "\u{0399}\u{0301}", 1, 0, 0, 0),
    ("\u{03B0}", "\u{03C5}\u{0308}\u{0301}", "\u{03C5}\u{0308}\u{0301}", "\u{03A5}\u{0308}\u{0301}", 1, 0, 0, 0),
    ("\u{03B1}", "\u{03B1}", "\u{03B1}", "\u{0391}", 1, 0, 0, 0),
    ("\u{03B2}", "\u{03B2}", "\u{03B2}", "\u{0392}", 1, 0, 0, 0),
    ("\u{03B3}", "\u{03B3}", "\u{03B3}", "\u{0393}", 1, 0, 0, 0),
    ("\u{03B4}", "\u{03B4}", "\u{03B4}", "\u{0394}", 1, 0, 0, 0),
    ("\u{03B5}", "\u{03B5}", "\u{03B5}", "\u{0395}", 1, 0, 0, 0),
    ("\u{03B6}", "\u{03B6}", "\u{03B6}", "\u{0396}", 1, 0, 0, 0),
    ("\u{03B7}", "\u{03B7}", "\u{03B7}", "\u{0397}", 1, 0, 0, 0),
    ("\u{03B8}", "\u{03B8}", "\u{03B8}", "\u{0398}", 1, 0, 0, 0),
    ("\u{03B9}", "\u{03B9}", "\u{03B9}", "\u{0399}", 1, 0, 0, 0),
    ("\u{03BA}", "\u{03BA}", "\u{03BA}", "\u{039A}", 1, 0, 0, 0),
    ("\u{03BB}", "\u{03BB}", "\u{03BB}", "\u{039B}", 1, 0, 0, 0),
    ("\u{03BC}", "\u{03BC}", "\u{03BC}", "\u{039C}", 1, 0, 0, 0),
    ("\u{03BD}", "\u{03BD}", "\u{03BD}", "\u{039D}", 1, 0, 0, 0),
    ("\u{03BE}", "\u{03BE}", "\u{03BE}", "\u{039E}", 1, 0, 0, 0),
    ("\u{03BF}", "\u{03BF}", "\u{03BF}", "\u{039F}", 1, 0, 0, 0),
    ("\u{03C0}", "\u{03C0}", "\u{03C0}", "\u{03A0}", 1, 0, 0, 0),
    ("\u{03C1}", "\u{03C1}", "\u{03C1}", "\u{03A1}", 1, 0, 0, 0),
    ("\u{03C2}", "\u{03C2}", "\u{03C3}", "\u{03A3}", 1, 0, 0, 0),
    ("\u{03C3}", "\u{03C3}", "\u{03C3}", "\u{03A3}", 1, 0, 0, 0),
    ("\u{03C4}", "\u{03C4}", "\u{03C4}", "\u{03A4}", 1, 0, 0, 0),
    ("\u{03C5}", "\u{03C5}", "\u{03C5}", "\u{03A5}", 1, 0, 0, 0),
    ("\u{03C6}", "\u{03C6}", "\u{03C6}", "\u{03A6}", 1, 0, 0, 0),
    ("\u{03C7}", "\u{03C7}", "\u{03C7}", "\u{03A7}", 1, 0, 0, 0),
    ("\u{03C8}", "\u{03C8}", "\u{03C8}", "\u{03A8}", 1, 0, 0, 0),
    ("\u{03C9}", "\u{03C9}", "\u{03C9}", "\u{03A9}", 1, 0, 0, 0),
    ("\u{03CA}", "\u{03B9}\u{0308}", "\u{03B9}\u{0308}", "\u{0399}\u{0308}", 1, 0, 0, 0),
    ("\u{03CB}", "\u{03C5}\u{0308}", "\u{03C5}\u{0308}", "\u{03A5}\u{0308}", 1, 0, 0, 0),
    ("\u{03CC}", "\u{03BF}\u{0301}", "\u{03BF}\u{0301}", "\u{039F}\u{0301}", 1, 0, 0, 0),
    ("\u{03CD}", "\u{03C5}\u{0301}", "\u{03C5}\u{0301}", "\u{03A5}\u{0301}", 1, 0, 0, 0),
    ("\u{03CE}", "\u{03C9}\u{0301}", "\u{03C9}\u{0301}", "\u{03A9}\u{0301}", 1, 0, 0, 0),
    ("\u{03CF}", "\u{03CF}", "\u{03D7}", "\u{03D7}", 5, 0, 0, 0),
    ("\u{03D0}", "\u{03D0}", "\u{03B2}", "\u{0392}", 1, 0, 0, 0),
    ("\u{03D1}", "\u{03D1}", "\u{03B8}", "\u{0398}", 1, 0, 0, 0),
    ("\u{03D2}", "\u{03D2}", "\u{03D2}", "\u{03D2}", 1, 0, 0, 0),
    ("\u{03D3}", "\u{03D2}\u{0301}", "\u{03D2}\u{0301}", "\u{03D2}\u{0301}", 1, 0, 0, 0),
    ("\u{03D4}", "\u{03D2}\u{0308}", "\u{03D2}\u{0308}", "\u{03D2}\u{0308}", 1, 0, 0, 0),
    ("\u{03D5}", "\u{03D5}", "\u{03C6}", "\u{03A6}", 1, 0, 0, 0),
    ("\u{03D6}", "\u{03D6}", "\u{03C0}", "\u{03A0}", 1, 0, 0, 0),
    ("\u{03D7}", "\u{03D7}", "\u{03D7}", "\u{03CF}", 1, 0, 0, 0),
    ("\u{03D8}", "\u{03D8}", "\u{03D9}", "\u{03D9}", 5, 0, 0, 0),
    ("\u{03D9}", "\u{03D9}", "\u{03D9}", "\u{03D8}", 1, 0, 0, 0),
    ("\u{03DA}", "\u{03DA}", "\u{03DB}", "\u{03DB}", 5, 0, 0, 0),
    ("\u{03DB}", "\u{03DB}", "\u{03DB}", "\u{03DA}", 1, 0, 0, 0),
    ("\u{03DC}", "\u{03DC}", "\u{03DD}", "\u{03DD}", 5, 0, 0, 0),
    ("\u{03DD}", "\u{03DD}", "\u{03DD}", "\u{03DC}", 1, 0, 0, 0),
    ("\u{03DE}", "\u{03DE}", "\u{03DF}", "\u{03DF}", 5, 0, 0, 0),
    ("\u{03DF}", "\u{03DF}", "\u{03DF}", "\u{03DE}", 1, 0, 0, 0),
    ("\u{03E0}", "\u{03E0}", "\u{03E1}", "\u{03E1}", 5, 0, 0, 0),
    ("\u{03E1}", "\u{03E1}", "\u{03E1}", "\u{03E0}", 1, 0, 0, 0),
    ("\u{03E2}", "\u{03E2}", "\u{03E3}", "\u{03E3}", 5, 0, 0, 0),
    ("\u{03E3}", "\u{03E3}", "\u{03E3}", "\u{03E2}", 1, 0, 0, 0),
    ("\u{03E4}", "\u{03E4}", "\u{03E5}", "\u{03E5}", 5, 0, 0, 0),
    ("\u{03E5}", "\u{03E5}", "\u{03E5}", "\u{03E4}", 1, 0, 0, 0),
    ("\u{03E6}", "\u{03E6}", "\u{03E7}", "\u{03E7}", 5, 0, 0, 0),
    ("\u{03E7}", "\u{03E7}", "\u{03E7}", "\u{03E6}", 1, 0, 0, 0),
    ("\u{03E8}", "\u{03E8}", "\u{03E9}", "\u{03E9}", 5, 0, 0, 0),
    ("\u{03E9}", "\u{03E9}", "\u{03E9}", "\u{03E8}", 1, 0, 0, 0),
    ("\u{03EA}", "\u{03EA}", "\u{03EB}", "\u{03EB}", 5, 0, 0, 0),
    ("\u{03EB}", "\u{03EB}", "\u{03EB}", "\u{03EA}", 1, 0, 0, 0),
    ("\u{03EC}", "\u{03EC}", "\u{03ED}", "\u{03ED}", 5, 0, 0, 0),
    ("\u{03ED}", "\u{03ED}", "\u{03ED}", "\u{03EC}", 1, 0, 0, 0),
    ("\u{03EE}", "\u{03EE}", "\u{03EF}", "\u{03EF}", 5, 0, 0, 0),
    ("\u{03EF}", "\u{03EF}", "\u{03EF}", "\u{03EE}", 1, 0, 0, 0),
    ("\u{03F0}", "\u{03F0}", "\u{03BA}", "\u{039A}", 1, 0, 0, 0),
    ("\u{03F1}", "\u{03F1}", "\u{03C1}", "\u{03A1}", 1, 0, 0, 0),
    ("\u{03F2}", "\u{03F2}", "\u{03F2}", "\u{03F9}", 1, 0, 0, 0),
    ("\u{03F3}", "\u{03F3}", "\u{03F3}", "\u{037F}", 1, 0, 0, 0),
    ("\u{03F4}", "\u{03F4}", "\u{03B8}", "\u{03B8}", 5, 0, 0, 0),
    ("\u{03F5}", "\u{03F5}", "\u{03B5}", "\u{0395}", 1, 0, 0, 0),
    ("\u{03F7}", "\u{03F7}", "\u{03F8}", "\u{03F8}", 5, 0, 0, 0),
    ("\u{03F8}", "\u{03F8}", "\u{03F8}", "\u{03F7}", 1, 0, 0, 0),
    ("\u{03F9}", "\u{03F9}", "\u{03F2}", "\u{03F2}", 5, 0, 0, 0),
    ("\u{03FA}", "\u{03FA}", "\u{03FB}", "\u{03FB}", 5, 0, 0, 0),
    ("\u{03FB}", "\u{03FB}", "\u{03FB}", "\u{03FA}", 1, 0, 0, 0),
    ("\u{03FC}", "\u{03FC}", "\u{03FC}", "\u{03FC}", 1, 0, 0, 0),
    ("\u{03FD}", "\u{03FD}", "\u{037B}", "\u{037B}", 5, 0, 0, 0),
    ("\u{03FE}", "\u{03FE}", "\u{037C}", "\u{037C}", 5, 0, 0, 0),
    ("\u{03FF}", "\u{03FF}", "\u{037D}", "\u{037D}", 5, 0, 0, 0),
    ("\u{0400}", "\u{0415}\u{0300}", "\u{0435}\u{0300}", "\u{0435}\u{0300}", 5, 0, 0, 0),
    ("\u{0401}", "\u{0415}\u{0308}", "\u{0435}\u{0308}", "\u{0435}\u{0308}", 5, 0, 0, 0),
    ("\u{0402}", "\u{0402}", "\u{0452}", "\u{0452}", 5, 0, 0, 0),
    ("\u{0403}", "\u{0413}\u{0301}", "\u{0433}\u{0301}", "\u{0433}\u{0301}", 5, 0, 0, 0),
    ("\u{0404}", "\u{0404}", "\u{0454}", "\u{0454}", 5, 0, 0, 0),
    ("\u{0405}", "\u{0405}", "\u{0455}", "\u{0455}", 5, 0, 0, 0),
    ("\u{0406}", "\u{0406}", "\u{0456}", "\u{0456}", 5, 0, 0, 0),
    ("\u{0407}", "\u{0406}\u{0308}", "\u{0456}\u{0308}", "\u{0456}\u{0308}", 5, 0, 0, 0),
    ("\u{0408}", "\u{0408}", "\u{0458}", "\u{0458}", 5, 0, 0, 0),
    ("\u{0409}", "\u{0409}", "\u{0459}", "\u{0459}", 5, 0, 0, 0),
    ("\u{040A}", "\u{040A}", "\u{045A}", "\u{045A}", 5, 0, 0, 0),
    ("\u{040B}", "\u{040B}", "\u{045B}", "\u{045B}", 5, 0, 0, 0),
    ("\u{040C}", "\u{041A}\u{0301}", "\u{043A}\u{0301}", "\u{043A}\u{0301}", 5, 0, 0, 0),
    ("\u{040D}", "\u{0418}\u{0300}", "\u{0438}\u{0300}", "\u{0438}\u{0300}", 5, 0, 0, 0),
    ("\u{040E}", "\u{0423}\u{0306}", "\u{0443}\u{0306}", "\u{0443}\u{0306}", 5, 0, 0, 0),
    ("\u{040F}", "\u{040F}", "\u{045F}", "\u{045F}", 5, 0, 0, 0),
    ("\u{0410}", "\u{0410}", "\u{0430}", "\u{0430}", 5, 0, 0, 0),
    ("\u{0411}", "\u{0411}", "\u{0431}", "\u{0431}", 5, 0, 0, 0),
    ("\u{0412}", "\u{0412}", "\u{0432}", "\u{0432}", 5, 0, 0, 0),
    ("\u{0413}", "\u{0413}", "\u{0433}", "\u{0433}", 5, 0, 0, 0),
    ("\u{0414}", "\u{0414}", "\u{0434}", "\u{0434}", 5, 0, 0, 0),
    ("\u{0415}", "\u{0415}", "\u{0435}", "\u{0435}", 5, 0, 0, 0),
    ("\u{0416}", "\u{0416}", "\u{0436}", "\u{0436}", 5, 0, 0, 0),
    ("\u{0417}", "\u{0417}", "\u{0437}", "\u{0437}", 5, 0, 0, 0),
    ("\u{0418}", "\u{0418}", "\u{0438}", "\u{0438}", 5, 0, 0, 0),
    ("\u{0419}", "\u{0418}\u{0306}", "\u{0438}\u{0306}", "\u{0438}\u{0306}", 5, 0, 0, 0),
    ("\u{041A}", "\u{041A}", "\u{043A}", "\u{043A}", 5, 0, 0, 0),
    ("\u{041B}", "\u{041B}", "\u{043B}", "\u{043B}", 5, 0, 0, 0),
    ("\u{041C}", "\u{041C}", "\u{043C}", "\u{043C}", 5, 0, 0, 0),
    ("\u{041D}", "\u{041D}", "\u{043D}", "\u{043D}", 5, 0, 0, 0),
    ("\u{041E}", "\u{041E}", "\u{043E}", "\u{043E}", 5, 0, 0, 0),
    ("\u{041F}", "\u{041F}", "\u{043F}", "\u{043F}", 5, 0, 0, 0),
    ("\u{0420}", "\u{0420}", "\u{0440}", "\u{0440}", 5, 0, 0, 0),
    ("\u{0421}", "\u{0421}", "\u{0441}", "\u{0441}", 5, 0, 0, 0),
    ("\u{0422}", "\u{0422}", "\u{0442}", "\u{0442}", 5, 0, 0, 0),
    ("\u{0423}", "\u{0423}", "\u{0443}", "\u{0443}", 5, 0, 0, 0),
    ("\u{0424}", "\u{0424}", "\u{0444}", "\u{0444}", 5, 0, 0, 0),
    ("\u{0425}", "\u{0425}", "\u{0445}", "\u{0445}", 5, 0, 0, 0),
    ("\u{0426}", "\u{0426}", "\u{0446}", "\u{0446}", 5, 0, 0, 0),
    ("\u{0427}", "\u{0427}", "\u{0447}", "\u{0447}", 5, 0, 0, 0),
    ("\u{0428}", "\u{0428}", "\u{0448}", "\u{0448}", 5, 0, 0, 0),
    ("\u{0429}", "\u{0429}", "\u{0449}", "\u{0449}", 5, 0, 0, 0),
    ("\u{042A}", "\u{042A}", "\u{044A}", "\u{044A}", 5, 0, 0, 0),
    ("\u{042B}", "\u{042B}", "\u{044B}", "\u{044B}", 5, 0, 0, 0),
    ("\u{042C}", "\u{042C}", "\u{044C}", "\u{044C}", 5, 0, 0, 0),
    ("\u{042D}", "\u{042D}", "\u{044D}", "\u{044D}", 5, 0, 0, 0),
    ("\u{042E}", "\u{042E}", "\u{044E}", "\u{044E}", 5, 0, 0, 0),
    ("\u{042F}", "\u{042F}", "\u{044F}", "\u{044F}", 5, 0, 0, 0),
    ("\u{0430}", "\u{0430}", "\u{0430}", "\u{0410}", 1, 0, 0, 0),
    ("\u{0431}", "\u{0431}", "\u{0431}", "\u{0411}", 1, 0, 0, 0),
    ("\u{0432}", "\u{0432}", "\u{0432}", "\u{0412}", 1, 0, 0, 0),
    ("\u{0433}", "\u{0433}", "\u{0433}", "\u{0413}", 1, 0, 0, 0),
    ("\u{0434}", "\u{0434}", "\u{0434}", "\u{0414}", 1, 0, 0, 0),
    ("\u{0435}", "\u{0435}", "\u{0435}", "\u{0415}", 1, 0, 0, 0),
    ("\u{0436}", "\u{0436}", "\u{0436}", "\u{0416}", 1, 0, 0, 0),
    ("\u{0437}", "\u{0437}", "\u{0437}", "\u{0417}", 1, 0, 0, 0),
    ("\u{0438}", "\u{0438}", "\u{0438}", "\u{0418}", 1, 0, 0, 0),
    ("\u{0439}", "\u{0438}\u{0306}", "\u{0438}\u{0306}", "\u{0418}\u{0306}", 1, 0, 0, 0),
    ("\u{043A}", "\u{043A}", "\u{043A}", "\u{041A}", 1, 0, 0, 0),
    ("\u{043B}", "\u{043B}", "\u{043B}", "\u{041B}", 1, 0, 0, 0),
    ("\u{043C}", "\u{043C}", "\u{043C}", "\u{041C}", 1, 0, 0, 0),
    ("\u{043D}", "\u{043D}", "\u{043D}", "\u{041D}", 1, 0, 0, 0),
    ("\u{043E}", "\u{043E}", "\u{043E}", "\u{041E}", 1, 0, 0, 0),
    ("\u{043F}", "\u{043F}", "\u{043F}", "\u{041F}", 1, 0, 0, 0),
    ("\u{0440}", "\u{0440}", "\u{0440}", "\u{0420}", 1, 0, 0, 0),
    ("\u{0441}", "\u{0441}", "\u{0441}", "\u{0421}", 1, 0, 0, 0),
    ("\u{0442}", "\u{0442}", "\u{0442}", "\u{0422}", 1, 0, 0, 0),
    ("\u{0443}", "\u{0443}", "\u{0443}", "\u{0423}", 1, 0, 0, 0),
    ("\u{0444}", "\u{0444}", "\u{0444}", "\u{0424}", 1, 0, 0, 0),
    ("\u{0445}", "\u{0445}", "\u{0445}", "\u{0425}", 1, 0, 0, 0),
    ("\u{0446}", "\u{0446}", "\u{0446}", "\u{0426}", 1, 0, 0, 0),
    ("\u{0447}", "\u{0447}", "\u{0447}", "\u{0427}", 1, 0, 0, 0),
    ("\u{0448}", "\u{0448}", "\u{0448}", "\u{0428}", 1, 0, 0, 0),
    ("\u{0449}", "\u{0449}", "\u{0449}", "\u{0429}", 1, 0, 0, 0),
    ("\u{044A}", "\u{044A}", "\u{044A}", "\u{042A}", 1, 0, 0, 0),
    ("\u{044B}", "\u{044B}", "\u{044B}", "\u{042B}", 1, 0, 0, 0),
    ("\u{044C}", "\u{044C}", "\u{044C}", "\u{042C}", 1, 0, 0, 0),
    ("\u{044D}", "\u{044D}", "\u{044D}", "\u{042D}", 1, 0, 0, 0),
    ("\u{044E}", "\u{044E}", "\u{044E}", "\u{042E}", 1, 0, 0, 0),
    ("\u{044F}", "\u{044F}", "\u{044F}", "\u{042F}", 1, 0, 0, 0),
    ("\u{0450}", "\u{0435}\u{0300}", "\u{0435}\u{0300}", "\u{0415}\u{0300}", 1, 0, 0, 0),
    ("\u{0451}", "\u{0435}\u{0308}", "\u{0435}\u{0308}", "\u{0415}\u{0308}", 1, 0, 0, 0),
    ("\u{0452}", "\u{0452}", "\u{0452}", "\u{0402}", 1, 0, 0, 0),
    ("\u{0453}", "\u{0433}\u{0301}", "\u{0433}\u{0301}", "\u{0413}\u{0301}", 1, 0, 0, 0),
    ("\u{0454}", "\u{0454}", "\u{0454}", "\u{0404}", 1, 0, 0, 0),
    ("\u{0455}", "\u{0455}", "\u{0455}", "\u{0405}", 1, 0, 0, 0),
    ("\u{0456}", "\u{0456}", "\u{0456}", "\u{0406}", 1, 0, 0, 0),
    ("\u{0457}", "\u{0456}\u{0308}", "\u{0456}\u{0308}", "\u{0406}\u{0308}", 1, 0, 0, 0),
    ("\u{0458}", "\u{0458}", "\u{0458}", "\u{0408}", 1, 0, 0, 0),
    ("\u{0459}", "\u{0459}", "\u{0459}", "\u{0409}", 1, 0, 0, 0),
    ("\u{045A}", "\u{045A}", "\u{045A}", "\u{040A}", 1, 0, 0, 0),
    ("\u{045B}", "\u{045B}", "\u{045B}", "\u{040B}", 1, 0, 0, 0),
    ("\u{045C}", "\u{043A}\u{0301}", "\u{043A}\u{0301}", "\u{041A}\u{0301}", 1, 0, 0, 0),
    ("\u{045D}", "\u{0438}\u{0300}", "\u{0438}\u{0300}", "\u{0418}\u{0300}", 1, 0, 0, 0),
    ("\u{045E}", "\u{0443}\u{0306}", "\u{0443}\u{0306}", "\u{0423}\u{0306}", 1, 0, 0, 0),
    ("\u{045F}", "\u{045F}", "\u{045F}", "\u{040F}", 1, 0, 0, 0),
    ("\u{0460}", "\u{0460}", "\u{0461}", "\u{0461}", 5, 0, 0, 0),
    ("\u{0461}", "\u{0461}", "\u{0461}", "\u{0460}", 1, 0, 0, 0),
    ("\u{0462}", "\u{0462}", "\u{0463}", "\u{0463}", 5, 0, 0, 0),
    ("\u{0463}", "\u{0463}", "\u{0463}", "\u{0462}", 1, 0, 0, 0),
    ("\u{0464}", "\u{0464}", "\u{0465}", "\u{0465}", 5, 0, 0, 0),
    ("\u{0465}", "\u{0465}", "\u{0465}", "\u{0464}", 1, 0, 0, 0),
    ("\u{0466}", "\u{0466}", "\u{0467}", "\u{0467}", 5, 0, 0, 0),
    ("\u{0467}", "\u{0467}", "\u{0467}", "\u{0466}", 1, 0, 0, 0),
    ("\u{0468}", "\u{0468}", "\u{0469}", "\u{0469}", 5, 0, 0, 0),
    ("\u{0469}", "\u{0469}", "\u{0469}", "\u{0468}", 1, 0, 0, 0),
    ("\u{046A}", "\u{046A}", "\u{046B}", "\u{046B}", 5, 0, 0, 0),
    ("\u{046B}", "\u{046B}", "\u{046B}", "\u{046A}", 1, 0, 0, 0),
    ("\u{046C}", "\u{046C}", "\u{046D}", "\u{046D}", 5, 0, 0, 0),
    ("\u{046D}", "\u{046D}", "\u{046D}", "\u{046C}", 1, 0, 0, 0),
    ("\u{046E}", "\u{046E}", "\u{046F}", "\u{046F}", 5, 0, 0, 0),
    ("\u{046F}", "\u{046F}", "\u{046F}", "\u{046E}", 1, 0, 0, 0),
    ("\u{0470}", "\u{0470}", "\u{0471}", "\u{0471}", 5, 0, 0, 0),
    ("\u{0471}", "\u{0471}", "\u{0471}", "\u{0470}", 1, 0, 0, 0),
    ("\u{0472}", "\u{0472}", "\u{0473}", "\u{0473}", 5, 0, 0, 0),
    ("\u{0473}", "\u{0473}", "\u{0473}", "\u{0472}", 1, 0, 0, 0),
    ("\u{0474}", "\u{0474}", "\u{0475}", "\u{0475}", 5, 0, 0, 0),
    ("\u{0475}", "\u{0475}", "\u{0475}", "\u{0474}", 1, 0, 0, 0),
    ("\u{0476}", "\u{0474}\u{030F}", "\u{0475}\u{030F}", "\u{0475}\u{030F}", 5, 0, 0, 0),
    ("\u{0477}", "\u{0475}\u{030F}", "\u{0475}\u{030F}", "\u{0474}\u{030F}", 1, 0, 0, 0),
    ("\u{0478}", "\u{0478}", "\u{0479}", "\u{0479}", 5, 0, 0, 0),
    ("\u{0479}", "\u{0479}", "\u{0479}", "\u{0478}", 1, 0, 0, 0),
    ("\u{047A}", "\u{047A}", "\u{047B}", "\u{047B}", 5, 0, 0, 0),
    ("\u{047B}", "\u{047B}", "\u{047B}", "\u{047A}", 1, 0, 0, 0),
    ("\u{047C}", "\u{047C}", "\u{047D}", "\u{047D}", 5, 0, 0, 0),
    ("\u{047D}", "\u{047D}", "\u{047D}", "\u{047C}", 1, 0, 0, 0),
    ("\u{047E}", "\u{047E}", "\u{047F}", "\u{047F}", 5, 0, 0, 0),
    ("\u{047F}", "\u{047F}", "\u{047F}", "\u{047E}", 1, 0, 0, 0),
    ("\u{0480}", "\u{0480}", "\u{0481}", "\u{0481}", 5, 0, 0, 0),
    ("\u{0481}", "\u{0481}", "\u{0481}", "\u{0480}", 1, 0, 0, 0),
    ("\u{0483}", "\u{0483}", "\u{0483}", "\u{0483}", 0, 4, 230, 2),
    ("\u{0484}", "\u{0484}", "\u{0484}", "\u{0484}", 0, 4, 230, 2),
    ("\u{0485}", "\u{0485}", "\u{0485}", "\u{0485}", 0, 4, 230, 2),
    ("\u{0486}", "\u{0486}", "\u{0486}", "\u{0486}", 0, 4, 230, 2),
    ("\u{0487}", "\u{0487}", "\u{0487}", "\u{0487}", 0, 4, 230, 2),
    ("\u{0488}", "\u{0488}", "\u{0488}", "\u{0488}", 0, 4, 0, 0),
    ("\u{0489}", "\u{0489}", "\u{0489}", "\u{0489}", 0, 4, 0, 0),
    ("\u{048A}", "\u{048A}", "\u{048B}", "\u{048B}", 5, 0, 0, 0),
    ("\u{048B}", "\u{048B}", "\u{048B}", "\u{048A}", 1, 0, 0, 0),
    ("\u{048C}", "\u{048C}", "\u{048D}", "\u{048D}", 5, 0, 0, 0),
    ("\u{048D}", "\u{048D}", "\u{048D}", "\u{048C}", 1, 0, 0, 0),
    ("\u{048E}", "\u{048E}", "\u{048F}", "\u{048F}", 5, 0, 0, 0),
    ("\u{048F}", "\u{048F}", "\u{048F}", "\u{048E}", 1, 0, 0, 0),
    ("\u{0490}", "\u{0490}", "\u{0491}", "\u{0491}", 5, 0, 0, 0),
    ("\u{0491}", "\u{0491}", "\u{0491}", "\u{0490}", 1, 0, 0, 0),
    ("\u{0492}", "\u{0492}", "\u{0493}", "\u{0493}", 5, 0, 0, 0),
    ("\u{0493}", "\u{0493}", "\u{0493}", "\u{0492}", 1, 0, 0, 0),
    ("\u{0494}", "\u{0494}", "\u{0495}", "\u{0495}", 5, 0, 0, 0),
    ("\u{0495}", "\u{0495}", "\u{0495}", "\u{0494}", 1, 0, 0, 0),
    ("\u{0496}", "\u{0496}", "\u{0497}", "\u{0497}", 5, 0, 0, 0),
    ("\u{0497}", "\u{0497}", "\u{0497}", "\u{0496}", 1, 0, 0, 0),
    ("\u{0498}", "\u{0498}", "\u{0499}", "\u{0499}", 5, 0, 0, 0),
    ("\u{0499}", "\u{0499}", "\u{0499}", "\u{0498}", 1, 0, 0, 0),
    ("\u{049A}", "\u{049A}", "\u{049B}", "\u{049B}", 5, 0, 0, 0),
    ("\u{049B}", "\u{049B}", "\u{049B}", "\u{049A}", 1, 0, 0, 0),
    ("\u{049C}", "\u{049C}", "\u{049D}", "\u{049D}", 5, 0, 0, 0),
    ("\u{049D}", "\u{049D}", "\u{049D}", "\u{049C}", 1, 0, 0, 0),
    ("\u{049E}", "\u{049E}", "\u{049F}", "\u{049F}", 5, 0, 0, 0),
    ("\u{049F}", "\u{049F}", "\u{049F}", "\u{049E}", 1, 0, 0, 0),
    ("\u{04A0}", "\u{04A0}", "\u{04A1}", "\u{04A1}", 5, 0, 0, 0),
    ("\u{04A1}", "\u{04A1}", "\u{04A1}", "\u{04A0}", 1, 0, 0, 0),
    ("\u{04A2}", "\u{04A2}", "\u{04A3}", "\u{04A3}", 5, 0, 0, 0),
    ("\u{04A3}", "\u{04A3}", "\u{04A3}", "\u{04A2}", 1, 0, 0, 0),
    ("\u{04A4}", "\u{04A4}", "\u{04A5}", "\u{04A5}", 5, 0, 0, 0),
    ("\u{04A5}", "\u{04A5}", "\u{04A5}", "\u{04A4}", 1, 0, 0, 0),
    ("\u{04A6}", "\u{04A6}", "\u{04A7}", "\u{04A7}", 5, 0, 0, 0),
    ("\u{04A7}", "\u{04A7}", "\u{04A7}", "\u{04A6}", 1, 0, 0, 0),
    ("\u{04A8}", "\u{04A8}", "\u{04A9}", "\u{04A9}", 5, 0, 0, 0),
    ("\u{04A9}", "\u{04A9}", "\u{04A9}", "\u{04A8}", 1, 0, 0, 0),
    ("\u{04AA}", "\u{04AA}", "\u{04AB}", "\u{04AB}", 5, 0, 0, 0),
    ("\u{04AB}", "\u{04AB}", "\u{04AB}", "\u{04AA}", 1, 0, 0, 0),
    ("\u{04AC}", "\u{04AC}", "\u{04AD}", "\u{04AD}", 5, 0, 0, 0),
    ("\u{04AD}", "\u{04AD}", "\u{04AD}", "\u{04AC}", 1, 0, 0, 0),
    ("\u{04AE}", "\u{04AE}", "\u{04AF}", "\u{04AF}", 5, 0, 0, 0),
    ("\u{04AF}", "\u{04AF}", "\u{04AF}", "\u{04AE}", 1, 0, 0, 0),
    ("\u{04B0}", "\u{04B0}", "\u{04B1}", "\u{04B1}", 5, 0, 0, 0),
    ("\u{04B1}", "\u{04B1}", "\u{04B1}", "\u{04B0}", 1, 0, 0, 0),
    ("\u{04B2}", "\u{04B2}", "\u{04B3}", "\u{04B3}", 5, 0, 0, 0),
    ("\u{04B3}", "\u{04B3}", "\u{04B3}", "\u{04B2}", 1, 0, 0, 0),
    ("\u{04B4}", "\u{04B4}", "\u{04B5}", "\u{04B5}", 5, 0, 0, 0),
    ("\u{04B5}", "\u{04B5}", "\u{04B5}", "\u{04B4}", 1, 0, 0, 0),
    ("\u{04B6}", "\u{04B6}", "\u{04B7}", "\u{04B7}", 5, 0, 0, 0),
    ("\u{04B7}", "\u{04B7}", "\u{04B7}", "\u{04B6}", 1, 0, 0, 0),
    ("\u{04B8}", "\u{04B8}", "\u{04B9}", "\u{04B9}", 5, 0, 0, 0),
    ("\u{04B9}", "\u{04B9}", "\u{04B9}", "\u{04B8}", 1, 0, 0, 0),
    ("\u{04BA}", "\u{04BA}", "\u{04BB}", "\u{04BB}", 5, 0, 0, 0),
    ("\u{04BB}", "\u{04BB}", "\u{04BB}", "\u{04BA}", 1, 0, 0, 0),
    ("\u{04BC}", "\u{04BC}", "\u{04BD}", "\u{04BD}", 5, 0, 0, 0),
    ("\u{04BD}", "\u{04BD}", "\u{04BD}", "\u{04BC}", 1, 0, 0, 0),
    ("\u{04BE}", "\u{04BE}", "\u{04BF}", "\u{04BF}", 5, 0, 0, 0),
    ("\u{04BF}", "\u{04BF}", "\u{04BF}", "\u{04BE}", 1, 0, 0, 0),
    ("\u{04C0}", "\u{04C0}", "\u{04CF}", "\u{04CF}", 5, 0, 0, 0),
    ("\u{04C1}", "\u{0416}\u{0306}", "\u{0436}\u{0306}", "\u{0436}\u{0306}", 5, 0, 0, 0),
    ("\u{04C2}", "\u{0436}\u{0306}", "\u{0436}\u{0306}", "\u{0416}\u{0306}", 1, 0, 0, 0),
    ("\u{04C3}", "\u{04C3}", "\u{04C4}", "\u{04C4}", 5, 0, 0, 0),
    ("\u{04C4}", "\u{04C4}", "\u{04C4}", "\u{04C3}", 1, 0, 0, 0),
    ("\u{04C5}", "\u{04C5}", "\u{04C6}", "\u{04C6}", 5, 0, 0, 0),
    ("\u{04C6}", "\u{04C6}", "\u{04C6}", "\u{04C5}", 1, 0, 0, 0),
    ("\u{04C7}", "\u{04C7}", "\u{04C8}", "\u{04C8}", 5, 0, 0, 0),
    ("\u{04C8}", "\u{04C8}", "\u{04C8}", "\u{04C7}", 1, 0, 0, 0),
    ("\u{04C9}", "\u{04C9}", "\u{04CA}", "\u{04CA}", 5, 0, 0, 0),
    ("\u{04CA}", "\u{04CA}", "\u{04CA}", "\u{04C9}", 1, 0, 0, 0),
    ("\u{04CB}", "\u{04CB}", "\u{04CC}", "\u{04CC}", 5, 0, 0, 0),
    ("\u{04CC}", "\u{04CC}", "\u{04CC}", "\u{04CB}", 1, 0, 0, 0),
    ("\u{04CD}", "\u{04CD}", "\u{04CE}", "\u{04CE}", 5, 0, 0, 0),
    ("\u{04CE}", "\u{04CE}", "\u{04CE}", "\u{04CD}", 1, 0, 0, 0),
    ("\u{04CF}", "\u{04CF}", "\u{04CF}", "\u{04C0}", 1, 0, 0, 0),
    ("\u{04D0}", "\u{0410}\u{0306}", "\u{0430}\u{0306}", "\u{0430}\u{0306}", 5, 0, 0, 0),
    ("\u{04D1}", "\u{0430}\u{0306}", "\u{0430}\u{0306}", "\u{0410}\u{0306}", 1, 0, 0, 0),
    ("\u{04D2}", "\u{0410}\u{0308}", "\u{0430}\u{0308}", "\u{0430}\u{0308}", 5, 0, 0, 0),
    ("\u{04D3}", "\u{0430}\u{0308}", "\u{0430}\u{0308}", "\u{0410}\u{0308}", 1, 0, 0, 0),
    ("\u{04D4}", "\u{04D4}", "\u{04D5}", "\u{04D5}", 5, 0, 0, 0),
    ("\u{04D5}", "\u{04D5}", "\u{04D5}", "\u{04D4}", 1, 0, 0, 0),
    ("\u{04D6}", "\u{0415}\u{0306}", "\u{0435}\u{0306}", "\u{0435}\u{0306}", 5, 0, 0, 0),
    ("\u{04D7}", "\u{0435}\u{0306}", "\u{0435}\u{0306}", "\u{0415}\u{0306}", 1, 0, 0, 0),
    ("\u{04D8}", "\u{04D8}", "\u{04D9}", "\u{04D9}", 5, 0, 0, 0),
    ("\u{04D9}", "\u{04D9}", "\u{04D9}", "\u{04D8}", 1, 0, 0, 0),
    ("\u{04DA}", "\u{04D8}\u{0308}", "\u{04D9}\u{0308}", "\u{04D9}\u{0308}", 5, 0, 0, 0),
    ("\u{04DB}", "\u{04D9}\u{0308}", "\u{04D9}\u{0308}", "\u{04D8}\u{0308}", 1, 0, 0, 0),
    ("\u{04DC}", "\u{0416}\u{0308}", "\u{0436}\u{0308}", "\u{0436}\u{0308}", 5, 0, 0, 0),
    ("\u{04DD}", "\u{0436}\u{0308}", "\u{0436}\u{0308}", "\u{0416}\u{0308}", 1, 0, 0, 0),
    ("\u{04DE}", "\u{0417}\u{0308}", "\u{0437}\u{0308}", "\u{0437}\u{0308}", 5, 0, 0, 0),
    ("\u{04DF}", "\u{0437}\u{0308}", "\u{0437}\u{0308}", "\u{0417}\u{0308}", 1, 0, 0, 0),
    ("\u{04E0}", "\u{04E0}", "\u{04E1}", "\u{04E1}", 5, 0, 0, 0),
    ("\u{04E1}", "\u{04E1}", "\u{04E1}", "\u{04E0}", 1, 0, 0, 0),
    ("\u{04E2}", "\u{0418}\u{0304}", "\u{0438}\u{0304}", "\u{0438}\u{0304}", 5, 0, 0, 0),
    ("\u{04E3}", "\u{0438}\u{0304}", "\u{0438}\u{0304}", "\u{0418}\u{0304}", 1, 0, 0, 0),
    ("\u{04E4}", "\u{0418}\u{0308}", "\u{0438}\u{0308}", "\u{0438}\u{0308}", 5, 0, 0, 0),
    ("\u{04E5}", "\u{0438}\u{0308}", "\u{0438}\u{0308}", "\u{0418}\u{0308}", 1, 0, 0, 0),
    ("\u{04E6}", "\u{041E}\u{0308}", "\u{043E}\u{0308}", "\u{043E}\u{0308}", 5, 0, 0, 0),
    ("\u{04E7}", "\u{043E}\u{0308}", "\u{043E}\u{0308}", "\u{041E}\u{0308}", 1, 0, 0, 0),
    ("\u{04E8}", "\u{04E8}", "\u{04E9}", "\u{04E9}", 5, 0, 0, 0),
    ("\u{04E9}", "\u{04E9}", "\u{04E9}", "\u{04E8}", 1, 0, 0, 0),
    ("\u{04EA}", "\u{04E8}\u{0308}", "\u{04E9}\u{0308}", "\u{04E9}\u{0308}", 5, 0, 0, 0),
    ("\u{04EB}", "\u{04E9}\u{0308}", "\u{04E9}\u{0308}", "\u{04E8}\u{0308}", 1, 0, 0, 0),
    ("\u{04EC}", "\u{042D}\u{0308}", "\u{044D}\u{0308}", "\u{044D}\u{0308}", 5, 0, 0, 0),
    ("\u{04ED}", "\u{044D}\u{0308}", "\u{044D}\u{0308}", "\u{042D}\u{0308}", 1, 0, 0, 0),
    ("\u{04EE}", "\u{0423}\u{0304}", "\u{0443}\u{0304}", "\u{0443}\u{0304}", 5, 0, 0, 0),
    ("\u{04EF}", "\u{0443}\u{0304}", "\u{0443}\u{0304}", "\u{0423}\u{0304}", 1, 0, 0, 0),
    ("\u{04F0}", "\u{0423}\u{0308}", "\u{0443}\u{0308}", "\u{0443}\u{0308}", 5, 0, 0, 0),
    ("\u{04F1}", "\u{0443}\u{0308}", "\u{0443}\u{0308}", "\u{0423}\u{0308}", 1, 0, 0, 0),
    ("\u{04F2}", "\u{0423}\u{030B}", "\u{0443}\u{030B}", "\u{0443}\u{030B}", 5, 0, 0, 0),
    ("\u{04F3}", "\u{0443}\u{030B}", "\u{0443}\u{030B}", "\u{0423}\u{030B}", 1, 0, 0, 0),
    ("\u{04F4}", "\u{0427}\u{0308}", "\u{0447}\u{0308}", "\u{0447}\u{0308}", 5, 0, 0, 0),
    ("\u{04F5}", "\u{0447}\u{0308}", "\u{0447}\u{0308}", "\u{0427}\u{0308}", 1, 0, 0, 0),
    ("\u{04F6}", "\u{04F6}", "\u{04F7}", "\u{04F7}", 5, 0, 0, 0),
    ("\u{04F7}", "\u{04F7}", "\u{04F7}", "\u{04F6}", 1, 0, 0, 0),
    ("\u{04F8}", "\u{042B}\u{0308}", "\u{044B}\u{0308}", "\u{044B}\u{0308}", 5, 0, 0, 0),
    ("\u{04F9}", "\u{044B}\u{0308}", "\u{044B}\u{0308}", "\u{042B}\u{0308}", 1, 0, 0, 0),
    ("\u{04FA}", "\u{04FA}", "\u{04FB}", "\u{04FB}", 5, 0, 0, 0),
    ("\u{04FB}", "\u{04FB}", "\u{04FB}", "\u{04FA}", 1, 0, 0, 0),
    ("\u{04FC}", "\u{04FC}", "\u{04FD}", "\u{04FD}", 5, 0, 0, 0),
    ("\u{04FD}", "\u{04FD}", "\u{04FD}", "\u{04FC}", 1, 0, 0, 0),
    ("\u{04FE}", "\u{04FE}", "\u{04FF}", "\u{04FF}", 5, 0, 0, 0),
    ("\u{04FF}", "\u{04FF}", "\u{04FF}", "\u{04FE}", 1, 0, 0, 0),
    ("\u{0600}", "\u{0600}", "\u{0600}", "\u{0600}", 0, 7, 0, 0),
    ("\u{0601}", "\u{0601}", "\u{0601}", "\u{0601}", 0, 7, 0, 0),
    ("\u{0602}", "\u{0602}", "\u{0602}", "\u{0602}", 0, 7, 0, 0),
    ("\u{0603}", "\u{0603}", "\u{0603}", "\u{0603}", 0, 7, 0, 0),
    ("\u{0604}", "\u{0604}", "\u{0604}", "\u{0604}", 0, 7, 0, 0),
    ("\u{0605}", "\u{0605}", "\u{0605}", "\u{0605}", 0, 7, 0, 0),
    ("\u{0609}", "\u{0609}", "\u{0609}", "\u{0609}", 2, 0, 0, 0),
    ("\u{060A}", "\u{060A}", "\u{060A}", "\u{060A}", 2, 0, 0, 0),
    ("\u{060C}", "\u{060C}", "\u{060C}", "\u{060C}", 2, 0, 0, 0),
    ("\u{060D}", "\u{060D}", "\u{060D}", "\u{060D}", 2, 0, 0, 0),
    ("\u{0610}", "\u{0610}", "\u{0610}", "\u{0610}", 0, 4, 230, 2),
    ("\u{0611}", "\u{0611}", "\u{0611}", "\u{0611}", 0, 4, 230, 2),
    ("\u{0612}", "\u{0612}", "\u{0612}", "\u{0612}", 0, 4, 230, 2),
    ("\u{0613}", "\u{0613}", "\u{0613}", "\u{0613}", 0, 4, 230, 2),
    ("\u{0614}", "\u{0614}", "\u{0614}", "\u{0614}", 0, 4, 230, 2),
    ("\u{0615}", "\u{0615}", "\u{0615}", "\u{0615}", 0, 4, 230, 2),
    ("\u{0616}", "\u{0616}", "\u{0616}", "\u{0616}", 0, 4, 230, 2),
    ("\u{0617}", "\u{0617}", "\u{0617}", "\u{0617}", 0, 4, 230, 2),
    ("\u{0618}", "\u{0618}", "\u{0618}", "\u{0618}", 0, 4, 30, 2),
    ("\u{0619}", "\u{0619}", "\u{0619}", "\u{0619}", 0, 4, 31, 2),
    ("\u{061A}", "\u{061A}", "\u{061A}", "\u{061A}", 0, 4, 32, 2),
    ("\u{061B}", "\u{061B}", "\u{061B}", "\u{061B}", 2, 0, 0, 0),
    ("\u{061C}", "\u{061C}", "\u{061C}", "\u{061C}", 0, 3, 0, 0),
    ("\u{061D}", "\u{061D}", "\u{061D}", "\u{061D}", 2, 0, 0, 0),
    ("\u{061E}", "\u{061E}", "\u{061E}", "\u{061E}", 2, 0, 0, 0),
    ("\u{061F}", "\u{061F}", "\u{061F}", "\u{061F}", 2, 0, 0, 0),
    ("\u{0620}", "\u{0620}", "\u{0620}", "\u{0620}", 1, 0, 0, 0),
    ("\u{0621}", "\u{0621}", "\u{0621}", "\u{0621}", 1, 0, 0, 0),
    ("\u{0622}", "\u{0627}\u{0653}", "\u{0627}\u{0653}", "\u{0627}\u{0653}", 1, 0, 0, 0),
    ("\u{0623}", "\u{0627}\u{0654}", "\u{0627}\u{0654}", "\u{0627}\u{0654}", 1, 0, 0, 0),
    ("\u{0624}", "\u{0648}\u{0654}", "\u{0648}\u{0654}", "\u{0648}\u{0654}", 1, 0, 0, 0),
    ("\u{0625}", "\u{0627}\u{0655}", "\u{0627}\u{0655}", "\u{0627}\u{0655}", 1, 0, 0, 0),
    ("\u{0626}", "\u{064A}\u{0654}", "\u{064A}\u{0654}", "\u{064A}\u{0654}", 1, 0, 0, 0),
    ("\u{0627}", "\u{0627}", "\u{0627}", "\u{0627}", 1, 0, 0, 0),
    ("\u{0628}", "\u{0628}", "\u{0628}", "\u{0628}", 1, 0, 0, 0),
    ("\u{0629}", "\u{0629}", "\u{0629}", "\u{0629}", 1, 0, 0, 0),
    ("\u{062A}", "\u{062A}", "\u{062A}", "\u{062A}", 1, 0, 0, 0),
    ("\u{062B}", "\u{062B}", "\u{062B}", "\u{062B}", 1, 0, 0, 0),
    ("\u{062C}", "\u{062C}", "\u{062C}", "\u{062C}", 1, 0, 0, 0),
    ("\u{062D}", "\u{062D}", "\u{062D}", "\u{062D}", 1, 0, 0, 0),
    ("\u{062E}", "\u{062E}", "\u{062E}", "\u{062E}", 1, 0, 0, 0),
    ("\u{062F}", "\u{062F}", "\u{062F}", "\u{062F}", 1, 0, 0, 0),
    ("\u{0630}", "\u{0630}", "\u{0630}", "\u{0630}", 1, 0, 0, 0),
    ("\u{0631}", "\u{0631}", "\u{0631}", "\u{0631}", 1, 0, 0, 0),
    ("\u{0632}", "\u{0632}", "\u{0632}", "\u{0632}", 1, 0, 0, 0),
    ("\u{0633}", "\u{0633}", "\u{0633}", "\u{0633}", 1, 0, 0, 0),
    ("\u{0634}", "\u{0634}", "\u{0634}", "\u{0634}", 1, 0, 0, 0),
    ("\u{0635}", "\u{0635}", "\u{0635}", "\u{0635}", 1, 0, 0, 0),
    ("\u{0636}", "\u{0636}", "\u{0636}", "\u{0636}", 1, 0, 0, 0),
    ("\u{0637}", "\u{0637}", "\u{0637}", "\u{0637}", 1, 0, 0, 0),
    ("\u{0638}", "\u{0638}", "\u{0638}", "\u{0638}", 1, 0, 0, 0),
    ("\u{0639}", "\u{0639}", "\u{0639}", "\u{0639}", 1, 0, 0, 0),
    ("\u{063A}", "\u{063A}", "\u{063A}", "\u{063A}", 1, 0, 0, 0),
    ("\u{063B}", "\u{063B}", "\u{063B}", "\u{063B}", 1, 0, 0, 0),
    ("\u{063C}", "\u{063C}", "\u{063C}", "\u{063C}", 1, 0, 0, 0),
    ("\u{063D}", "\u{063D}", "\u{063D}", "\u{063D}", 1, 0, 0, 0),
    ("\u{063E}", "\u{063E}", "\u{063E}", "\u{063E}", 1, 0, 0, 0),
    ("\u{063F}", "\u{063F}", "\u{063F}", "\u{063F}", 1, 0, 0, 0),
    ("\u{0640}", "\u{0640}", "\u{0640}", "\u{0640}", 1, 0, 0, 0),
    ("\u{0641}", "\u{0641}", "\u{0641}", "\u{0641}", 1, 0, 0, 0),
    ("\u{0642}", "\u{0642}", "\u{0642}", "\u{0642}", 1, 0, 0, 0),
    ("\u{0643}", "\u{0643}", "\u{0643}", "\u{0643}", 1, 0, 0, 0),
    ("\u{0644}", "\u{0644}", "\u{0644}", "\u{0644}", 1, 0, 0, 0),
    ("\u{0645}", "\u{0645}", "\u{0645}", "\u{0645}", 1, 0, 0, 0),
    ("\u{0646}", "\u{0646}", "\u{0646}", "\u{0646}", 1, 0, 0, 0),
    ("\u{0647}", "\u{0647}", "\u{0647}", "\u{0647}", 1, 0, 0, 0),
    ("\u{0648}", "\u{0648}", "\u{0648}", "\u{0648}", 1, 0, 0, 0),
    ("\u{0649}", "\u{0649}", "\u{0649}", "\u{0649}", 1, 0, 0, 0),
    ("\u{064A}", "\u{064A}", "\u{064A}", "\u{064A}", 1, 0, 0, 0),
    ("\u{064B}", "\u{064B}", "\u{064B}", "\u{064B}", 0, 4, 27, 2),
    ("\u{064C}", "\u{064C}", "\u{064C}", "\u{064C}", 0, 4, 28, 2),
    ("\u{064D}", "\u{064D}", "\u{064D}", "\u{064D}", 0, 4, 29, 2),
    ("\u{064E}", "\u{064E}", "\u{064E}", "\u{064E}", 0, 4, 30, 2),
    ("\u{064F}", "\u{064F}", "\u{064F}", "\u{064F}", 0, 4, 31, 2),
    ("\u{0650}", "\u{0650}", "\u{0650}", "\u{0650}", 0, 4, 32, 2),
    ("\u{0651}", "\u{0651}", "\u{0651}", "\u{0651}", 0, 4, 33, 2),
    ("\u{0652}", "\u{0652}", "\u{0652}", "\u{0652}", 0, 4, 34, 2),
    ("\u{0653}", "\u{0653}", "\u{0653}", "\u{0653}", 0, 4, 230, 2),
    ("\u{0654}", "\u{0654}", "\u{0654}", "\u{0654}", 0, 4, 230, 2),
    ("\u{0655}", "\u{0655}", "\u{0655}", "\u{0655}", 0, 4, 220, 2),
    ("\u{0656}", "\u{0656}", "\u{0656}", "\u{0656}", 0, 4, 220, 2),
    ("\u{0657}", "\u{0657}", "\u{0657}", "\u{0657}", 0, 4, 230, 2),
    ("\u{0658}", "\u{0658}", "\u{0658}", "\u{0658}", 0, 4, 230, 2),
    ("\u{0659}", "\u{0659}", "\u{0659}", "\u{0659}", 0, 4, 230, 2),
    ("\u{065A}", "\u{065A}", "\u{065A}", "\u{065A}", 0, 4, 230, 2),
    ("\u{065B}", "\u{065B}", "\u{065B}", "\u{065B}", 0, 4, 230, 2),
    ("\u{065C}", "\u{065C}", "\u{065C}", "\u{065C}", 0, 4, 220, 2),
    ("\u{065D}", "\u{065D}", "\u{065D}", "\u{065D}", 0, 4, 230, 2),
    ("\u{065E}", "\u{065E}", "\u{065E}", "\u{065E}", 0, 4, 230, 2),
    ("\u{065F}", "\u{065F}", "\u{065F}", "\u{065F}", 0, 4, 220, 2),
    ("\u{066A}", "\u{066A}", "\u{066A}", "\u{066A}", 2, 0, 0, 0),
    ("\u{066B}", "\u{066B}", "\u{066B}", "\u{066B}", 2, 0, 0, 0),
    ("\u{066C}", "\u{066C}", "\u{066C}", "\u{066C}", 2, 0, 0, 0),
    ("\u{066D}", "\u{066D}", "\u{066D}", "\u{066D}", 2, 0, 0, 0),
    ("\u{066E}", "\u{066E}", "\u{066E}", "\u{066E}", 1, 0, 0, 0),
    ("\u{066F}", "\u{066F}", "\u{066F}", "\u{066F}", 1, 0, 0, 0),
    ("\u{0670}", "\u{0670}", "\u{0670}", "\u{0670}", 0, 4, 35, 2),
    ("\u{0671}", "\u{0671}", "\u{0671}", "\u{0671}", 1, 0, 0, 0),
    ("\u{0672}", "\u{0672}", "\u{0672}", "\u{0672}", 1, 0, 0, 0),
    ("\u{0673}", "\u{0673}", "\u{0673}", "\u{0673}", 1, 0, 0, 0),
    ("\u{0674}", "\u{0674}", "\u{0674}", "\u{0674}", 1, 0, 0, 0),
    ("\u{0675}", "\u{0675}", "\u{0675}", "\u{0675}", 1, 0, 0, 0),
    ("\u{0676}", "\u{0676}", "\u{0676}", "\u{0676}", 1, 0, 0, 0),
    ("\u{0677}", "\u{0677}", "\u{0677}", "\u{0677}", 1, 0, 0, 0),
    ("\u{0678}", "\u{0678}", "\u{0678}", "\u{0678}", 1, 0, 0, 0),
    ("\u{0679}", "\u{0679}", "\u{0679}", "\u{0679}", 1, 0, 0, 0),
    ("\u{067A}", "\u{067A}", "\u{067A}", "\u{067A}", 1, 0, 0, 0),
    ("\u{067B}", "\u{067B}", "\u{067B}", "\u{067B}", 1, 0, 0, 0),
    ("\u{067C}", "\u{067C}", "\u{067C}", "\u{067C}", 1, 0, 0, 0),
    ("\u{067D}", "\u{067D}", "\u{067D}", "\u{067D}", 1, 0, 0, 0),
    ("\u{067E}", "\u{067E}", "\u{067E}", "\u{067E}", 1, 0, 0, 0),
    ("\u{067F}", "\u{067F}", "\u{067F}", "\u{067F}", 1, 0, 0, 0),
    ("\u{0680}", "\u{0680}", "\u{0680}", "\u{0680}", 1, 0, 0, 0),
    ("\u{0681}", "\u{0681}", "\u{0681}", "\u{0681}", 1, 0, 0, 0),
    ("\u{0682}", "\u{0682}", "\u{0682}", "\u{0682}", 1, 0, 0, 0),
    ("\u{0683}", "\u{0683}", "\u{0683}", "\u{0683}", 1, 0, 0, 0),
    ("\u{0684}", "\u{0684}", "\u{0684}", "\u{0684}", 1, 0, 0, 0),
    ("\u{0685}", "\u{0685}", "\u{0685}", "\u{0685}", 1, 0, 0, 0),
    ("\u{0686}", "\u{0686}", "\u{0686}", "\u{0686}", 1, 0, 0, 0),
    ("\u{0687}", "\u{0687}", "\u{0687}", "\u{0687}", 1, 0, 0, 0),
    ("\u{0688}", "\u{0688}", "\u{0688}", "\u{0688}", 1, 0, 0, 0),
    ("\u{0689}", "\u{0689}", "\u{0689}", "\u{0689}", 1, 0, 0, 0),
    ("\u{068A}", "\u{068A}", "\u{068A}", "\u{068A}", 1, 0, 0, 0),
    ("\u{068B}", "\u{068B}", "\u{068B}", "\u{068B}", 1, 0, 0, 0),
    ("\u{068C}", "\u{068C}", "\u{068C}", "\u{068C}", 1, 0, 0, 0),
    ("\u{068D}", "\u{068D}", "\u{068D}", "\u{068D}", 1, 0, 0, 0),
    ("\u{068E}", "\u{068E}", "\u{068E}", "\u{068E}", 1, 0, 0, 0),
    ("\u{068F}", "\u{068F}", "\u{068F}", "\u{068F}", 1, 0, 0, 0),
    ("\u{0690}", "\u{0690}", "\u{0690}", "\u{0690}", 1, 0, 0, 0),
    ("\u{0691}", "\u{0691}", "\u{0691}", "\u{0691}", 1, 0, 0, 0),
    ("\u{0692}", "\u{0692}", "\u{0692}", "\u{0692}", 1, 0, 0, 0),
    ("\u{0693}", "\u{0693}", "\u{0693}", "\u{0693}", 1, 0, 0, 0),
    ("\u{0694}", "\u{0694}", "\u{0694}", "\u{0694}", 1, 0, 0, 0),
    ("\u{0695}", "\u{0695}", "\u{0695}", "\u{0695}", 1, 0, 0, 0),
    ("\u{0696}", "\u{0696}", "\u{0696}", "\u{0696}", 1, 0, 0, 0),
    ("\u{0697}", "\u{0697}", "\u{0697}", "\u{0697}", 1, 0, 0, 0),
    ("\u{0698}", "\u{0698}", "\u{0698}", "\u{0698}", 1, 0, 0, 0),
    ("\u{0699}", "\u{0699}", "\u{0699}", "\u{0699}", 1, 0, 0, 0),
    ("\u{069A}", "\u{069A}", "\u{069A}", "\u{069A}", 1, 0, 0, 0),
    ("\u{069B}", "\u{069B}", "\u{069B}", "\u{069B}", 1, 0, 0, 0),
    ("\u{069C}", "\u{069C}", "\u{069C}", "\u{069C}", 1, 0, 0, 0),
    ("\u{069D}", "\u{069D}", "\u{069D}", "\u{069D}", 1, 0, 0, 0),
    ("\u{069E}", "\u{069E}", "\u{069E}", "\u{069E}", 1, 0, 0, 0),
    ("\u{069F}", "\u{069F}", "\u{069F}", "\u{069F}", 1, 0, 0, 0),
    ("\u{06A0}", "\u{06A0}", "\u{06A0}", "\u{06A0}", 1, 0, 0, 0),
    ("\u{06A1}", "\u{06A1}", "\u{06A1}", "\u{06A1}", 1, 0, 0, 0),
    ("\u{06A2}", "\u{06A2}", "\u{06A2}", "\u{06A2}", 1, 0, 0, 0),
    ("\u{06A3}", "\u{06A3}", "\u{06A3}", "\u{06A3}", 1, 0, 0, 0),
    ("\u{06A4}", "\u{06A4}", "\u{06A4}", "\u{06A4}", 1, 0, 0, 0),
    ("\u{06A5}", "\u{06A5}", "\u{06A5}", "\u{06A5}", 1, 0, 0, 0),
    ("\u{06A6}", "\u{06A6}", "\u{06A6}", "\u{06A6}", 1, 0, 0, 0),
    ("\u{06A7}", "\u{06A7}", "\u{06A7}", "\u{06A7}", 1, 0, 0, 0),
    ("\u{06A8}", "\u{06A8}", "\u{06A8}", "\u{06A8}", 1, 0, 0, 0),
    ("\u{06A9}", "\u{06A9}", "\u{06A9}", "\u{06A9}", 1, 0, 0, 0),
    ("\u{06AA}", "\u{06AA}", "\u{06AA}", "\u{06AA}", 1, 0, 0, 0),
    ("\u{06AB}", "\u{06AB}", "\u{06AB}", "\u{06AB}", 1, 0, 0, 0),
    ("\u{06AC}", "\u{06AC}", "\u{06AC}", "\u{06AC}", 1, 0, 0, 0),
    ("\u{06AD}", "\u{06AD}", "\u{06AD}", "\u{06AD}", 1, 0, 0, 0),
    ("\u{06AE}", "\u{06AE}", "\u{06AE}", "\u{06AE}", 1, 0, 0, 0),
    ("\u{06AF}", "\u{06AF}", "\u{06AF}", "\u{06AF}", 1, 0, 0, 0),
    ("\u{06B0}", "\u{06B0}", "\u{06B0}", "\u{06B0}", 1, 0, 0, 0),
    ("\u{06B1}", "\u{06B1}", "\u{06B1}", "\u{06B1}", 1, 0, 0, 0),
    ("\u{06B2}", "\u{06B2}", "\u{06B2}", "\u{06B2}", 1, 0, 0, 0),
    ("\u{06B3}", "\u{06B3}", "\u{06B3}", "\u{06B3}", 1, 0, 0, 0),
    ("\u{06B4}", "\u{06B4}", "\u{06B4}", "\u{06B4}", 1, 0, 0, 0),
    ("\u{06B5}", "\u{06B5}", "\u{06B5}", "\u{06B5}", 1, 0, 0, 0),
    ("\u{06B6}", "\u{06B6}", "\u{06B6}", "\u{06B6}", 1, 0, 0, 0),
    ("\u{06B7}", "\u{06B7}", "\u{06B7}", "\u{06B7}", 1, 0, 0, 0),
    ("\u{06B8}", "\u{06B8}", "\u{06B8}", "\u{06B8}", 1, 0, 0, 0),
    ("\u{06B9}", "\u{06B9}", "\u{06B9}", "\u{06B9}", 1, 0, 0, 0),
    ("\u{06BA}", "\u{06BA}", "\u{06BA}", "\u{06BA}", 1, 0, 0, 0),
    ("\u{06BB}", "\u{06BB}", "\u{06BB}", "\u{06BB}", 1, 0, 0, 0),
    ("\u{06BC}", "\u{06BC}", "\u{06BC}", "\u{06BC}", 1, 0, 0, 0),
    ("\u{06BD}", "\u{06BD}", "\u{06BD}", "\u{06BD}", 1, 0, 0, 0),
    ("\u{06BE}", "\u{06BE}", "\u{06BE}", "\u{06BE}", 1, 0, 0, 0),
    ("\u{06BF}", "\u{06BF}", "\u{06BF}", "\u{06BF}", 1, 0, 0, 0),
    ("\u{06C0}", "\u{06D5}\u{0654}", "\u{06D5}\u{0654}", "\u{06D5}\u{0654}", 1, 0, 0, 0),
    ("\u{06C1}", "\u{06C1}", "\u{06C1}", "\u{06C1}", 1, 0, 0, 0),
    ("\u{06C2}", "\u{06C1}\u{0654}", "\u{06C1}\u{0654}", "\u{06C1}\u{0654}", 1, 0, 0, 0),
    ("\u{06C3}", "\u{06C3}", "\u{06C3}", "\u{06C3}", 1, 0, 0, 0),
    ("\u{06C4}", "\u{06C4}", "\u{06C4}", "\u{06C4}", 1, 0, 0, 0),
    ("\u{06C5}", "\u{06C5}", "\u{06C5}", "\u{06C5}", 1, 0, 0, 0),
    ("\u{06C6}", "\u{06C6}", "\u{06C6}", "\u{06C6}", 1, 0, 0, 0),
    ("\u{06C7}", "\u{06C7}", "\u{06C7}", "\u{06C7}", 1, 0, 0, 0),
    ("\u{06C8}", "\u{06C8}", "\u{06C8}", "\u{06C8}", 1, 0, 0, 0),
    ("\u{06C9}", "\u{06C9}", "\u{06C9}", "\u{06C9}", 1, 0, 0, 0),
    ("\u{06CA}", "\u{06CA}", "\u{06CA}", "\u{06CA}", 1, 0, 0, 0),
    ("\u{06CB}", "\u{06CB}", "\u{06CB}", "\u{06CB}", 1, 0, 0, 0),
    ("\u{06CC}", "\u{06CC}", "\u{06CC}", "\u{06CC}", 1, 0, 0, 0),
    ("\u{06CD}", "\u{06CD}", "\u{06CD}", "\u{06CD}", 1, 0, 0, 0),
    ("\u{06CE}", "\u{06CE}", "\u{06CE}", "\u{06CE}", 1, 0, 0, 0),
    ("\u{06CF}", "\u{06CF}", "\u{06CF}", "\u{06CF}", 1, 0, 0, 0),
    ("\u{06D0}", "\u{06D0}", "\u{06D0}", "\u{06D0}", 1, 0, 0, 0),
    ("\u{06D1}", "\u{06D1}", "\u{06D1}", "\u{06D1}", 1, 0, 0, 0),
    ("\u{06D2}", "\u{06D2}", "\u{06D2}", "\u{06D2}", 1, 0, 0, 0),
    ("\u{06D3}", "\u{06D2}\u{0654}", "\u{06D2}\u{0654}", "\u{06D2}\u{0654}", 1, 0, 0, 0),
    ("\u{06D4}", "\u{06D4}", "\u{06D4}", "\u{06D4}", 2, 0, 0, 0),
    ("\u{06D5}", "\u{06D5}", "\u{06D5}", "\u{06D5}", 1, 0, 0, 0),
    ("\u{06D6}", "\u{06D6}", "\u{06D6}", "\u{06D6}", 0, 4, 230, 2),
    ("\u{06D7}", "\u{06D7}", "\u{06D7}", "\u{06D7}", 0, 4, 230, 2),
    ("\u{06D8}", "\u{06D8}", "\u{06D8}", "\u{06D8}", 0, 4, 230, 2),
    ("\u{06D9}", "\u{06D9}", "\u{06D9}", "\u{06D9}", 0, 4, 230, 2),
    ("\u{06DA}", "\u{06DA}", "\u{06DA}", "\u{06DA}", 0, 4, 230, 2),
    ("\u{06DB}", "\u{06DB}", "\u{06DB}", "\u{06DB}", 0, 4, 230, 2),
    ("\u{06DC}", "\u{06DC}", "\u{06DC}", "\u{06DC}", 0, 4, 230, 2),
    ("\u{06DD}", "\u{06DD}", "\u{06DD}", "\u{06DD}", 0, 7, 0, 0),
    ("\u{06DF}", "\u{06DF}", "\u{06DF}", "\u{06DF}", 0, 4, 230, 2),
    ("\u{06E0}", "\u{06E0}", "\u{06E0}", "\u{06E0}", 0, 4, 230, 2),
    ("\u{06E1}", "\u{06E1}", "\u{06E1}", "\u{06E1}", 0, 4, 230, 2),
    ("\u{06E2}", "\u{06E2}", "\u{06E2}", "\u{06E2}", 0, 4, 230, 2),
    ("\u{06E3}", "\u{06E3}", "\u{06E3}", "\u{06E3}", 0, 4, 220, 2),
    ("\u{06E4}", "\u{06E4}", "\u{06E4}", "\u{06E4}", 0, 4, 230, 2),
    ("\u{06E5}", "\u{06E5}", "\u{06E5}", "\u{06E5}", 1, 0, 0, 0),
    ("\u{06E6}", "\u{06E6}", "\u{06E6}", "\u{06E6}", 1, 0, 0, 0),
    ("\u{06E7}", "\u{06E7}", "\u{06E7}", "\u{06E7}", 0, 4, 230, 2),
    ("\u{06E8}", "\u{06E8}", "\u{06E8}", "\u{06E8}", 0, 4, 230, 2),
    ("\u{06EA}", "\u{06EA}", "\u{06EA}", "\u{06EA}", 0, 4, 220, 2),
    ("\u{06EB}", "\u{06EB}", "\u{06EB}", "\u{06EB}", 0, 4, 230, 2),
    ("\u{06EC}", "\u{06EC}", "\u{06EC}", "\u{06EC}", 0, 4, 230, 2),
    ("\u{06ED}", "\u{06ED}", "\u{06ED}", "\u{06ED}", 0, 4, 220, 2),
    ("\u{06EE}", "\u{06EE}", "\u{06EE}", "\u{06EE}", 1, 0, 0, 0),
    ("\u{06EF}", "\u{06EF}", "\u{06EF}", "\u{06EF}", 1, 0, 0, 0),
    ("\u{06FA}", "\u{06FA}", "\u{06FA}", "\u{06FA}", 1, 0, 0, 0),
    ("\u{06FB}", "\u{06FB}", "\u{06FB}", "\u{06FB}", 1, 0, 0, 0),
    ("\u{06FC}", "\u{06FC}", "\u{06FC}", "\u{06FC}", 1, 0, 0, 0),
    ("\u{06FF}", "\u{06FF}", "\u{06FF}", "\u{06FF}", 1, 0, 0, 0),
    ("\u{0900}", "\u{0900}", "\u{0900}", "\u{0900}", 0, 4, 0, 0),
    ("\u{0901}", "\u{0901}", "\u{0901}", "\u{0901}", 0, 4, 0, 0),
    ("\u{0902}", "\u{0902}", "\u{0902}", "\u{0902}", 0, 4, 0, 0),
    ("\u{0903}", "\u{0903}", "\u{0903}", "\u{0903}", 0, 8, 0, 0),
    ("\u{0904}", "\u{0904}", "\u{0904}", "\u{0904}", 1, 0, 0, 0),
    ("\u{0905}", "\u{0905}", "\u{0905}", "\u{0905}", 1, 0, 0, 0),
    ("\u{0906}", "\u{0906}", "\u{0906}", "\u{0906}", 1, 0, 0, 0),
    ("\u{0907}", "\u{0907}", "\u{0907}", "\u{0907}", 1, 0, 0, 0),
    ("\u{0908}", "\u{0908}", "\u{0908}", "\u{0908}", 1, 0, 0, 0),
    ("\u{0909}", "\u{0909}", "\u{0909}", "\u{0909}", 1, 0, 0, 0),
    ("\u{090A}", "\u{090A}", "\u{090A}", "\u{090A}", 1, 0, 0, 0),
    ("\u{090B}", "\u{090B}", "\u{090B}", "\u{090B}", 1, 0, 0, 0),
    ("\u{090C}", "\u{090C}", "\u{090C}", "\u{090C}", 1, 0, 0, 0),
    ("\u{090D}", "\u{090D}", "\u{090D}", "\u{090D}", 1, 0, 0, 0),
    ("\u{090E}", "\u{090E}", "\u{090E}", "\u{090E}", 1, 0, 0, 0),
    ("\u{090F}", "\u{090F}", "\u{090F}", "\u{090F}", 1, 0, 0, 0),
    ("\u{0910}", "\u{0910}", "\u{0910}", "\u{0910}", 1, 0, 0, 0),
    ("\u{0911}", "\u{0911}", "\u{0911}", "\u{0911}", 1, 0, 0, 0),
    ("\u{0912}", "\u{0912}", "\u{0912}", "\u{0912}", 1, 0, 0, 0),
    ("\u{0913}", "\u{0913}", "\u{0913}", "\u{0913}", 1, 0, 0, 0),
    ("\u{0914}", "\u{0914}", "\u{0914}", "\u{0914}", 1, 0, 0, 0),
    ("\u{0915}", "\u{0915}", "\u{0915}", "\u{0915}", 1, 0, 0, 1),
    ("\u{0916}", "\u{0916}", "\u{0916}", "\u{0916}", 1, 0, 0, 1),
    ("\u{0917}", "\u{0917}", "\u{0917}", "\u{0917}", 1, 0, 0, 1),
    ("\u{0918}", "\u{0918}", "\u{0918}", "\u{0918}", 1, 0, 0, 1),
    ("\u{0919}", "\u{0919}", "\u{0919}", "\u{0919}", 1, 0, 0, 1),
    ("\u{091A}", "\u{091A}", "\u{091A}", "\u{091A}", 1, 0, 0, 1),
    ("\u{091B}", "\u{091B}", "\u{091B}", "\u{091B}", 1, 0, 0, 1),
    ("\u{091C}", "\u{091C}", "\u{091C}", "\u{091C}", 1, 0, 0, 1),
    ("\u{091D}", "\u{091D}", "\u{091D}", "\u{091D}", 1, 0, 0, 1),
    ("\u{091E}", "\u{091E}", "\u{091E}", "\u{091E}", 1, 0, 0, 1),
    ("\u{091F}", "\u{091F}", "\u{091F}", "\u{091F}", 1, 0, 0, 1),
    ("\u{0920}", "\u{0920}", "\u{0920}", "\u{0920}", 1, 0, 0, 1),
    ("\u{0921}", "\u{0921}", "\u{0921}", "\u{0921}", 1, 0, 0, 1),
    ("\u{0922}", "\u{0922}", "\u{0922}", "\u{0922}", 1, 0, 0, 1),
    ("\u{0923}", "\u{0923}", "\u{0923}", "\u{0923}", 1, 0, 0, 1),
    ("\u{0924}", "\u{0924}", "\u{0924}", "\u{0924}", 1, 0, 0, 1),
    ("\u{0925}", "\u{0925}", "\u{0925}", "\u{0925}", 1, 0, 0, 1),
    ("\u{0926}", "\u{0926}", "\u{0926}", "\u{0926}", 1, 0, 0, 1),
    ("\u{0927}", "\u{0927}", "\u{0927}", "\u{0927}", 1, 0, 0, 1),
    ("\u{0928}", "\u{0928}", "\u{0928}", "\u{0928}", 1, 0, 0, 1),
    ("\u{0929}", "\u{0928}\u{093C}", "\u{0928}\u{093C}", "\u{0928}\u{093C}", 1, 0, 0, 1),
    ("\u{092A}", "\u{092A}", "\u{092A}", "\u{092A}", 1, 0, 0, 1),
    ("\u{092B}", "\u{092B}", "\u{092B}", "\u{092B}", 1, 0, 0, 1),
    ("\u{092C}", "\u{092C}", "\u{092C}", "\u{092C}", 1, 0, 0, 1),
    ("\u{092D}", "\u{092D}", "\u{092D}", "\u{092D}", 1, 0, 0, 1),
    ("\u{092E}", "\u{092E}", "\u{092E}", "\u{092E}", 1, 0, 0, 1),
    ("\u{092F}", "\u{092F}", "\u{092F}", "\u{092F}", 1, 0, 0, 1),
    ("\u{0930}", "\u{0930}", "\u{0930}", "\u{0930}", 1, 0, 0, 1),
    ("\u{0931}", "\u{0930}\u{093C}", "\u{0930}\u{093C}", "\u{0930}\u{093C}", 1, 0, 0, 1),
    ("\u{0932}", "\u{0932}", "\u{0932}", "\u{0932}", 1, 0, 0, 1),
    ("\u{0933}", "\u{0933}", "\u{0933}", "\u{0933}", 1, 0, 0, 1),
    ("\u{0934}", "\u{0933}\u{093C}", "\u{0933}\u{093C}", "\u{0933}\u{093C}", 1, 0, 0, 1),
    ("\u{0935}", "\u{0935}", "\u{0935}", "\u{0935}", 1, 0, 0, 1),
    ("\u{0936}", "\u{0936}", "\u{0936}", "\u{0936}", 1, 0, 0, 1),
    ("\u{0937}", "\u{0937}", "\u{0937}", "\u{0937}", 1, 0, 0, 1),
    ("\u{0938}", "\u{0938}", "\u{0938}", "\u{0938}", 1, 0, 0, 1),
    ("\u{0939}", "\u{0939}", "\u{0939}", "\u{0939}", 1, 0, 0, 1),
    ("\u{093A}", "\u{093A}", "\u{093A}", "\u{093A}", 0, 4, 0, 0),
    ("\u{093B}", "\u{093B}", "\u{093B}", "\u{093B}", 0, 8, 0, 0),
    ("\u{093C}", "\u{093C}", "\u{093C}", "\u{093C}", 0, 4, 7, 2),
    ("\u{093D}", "\u{093D}", "\u{093D}", "\u{093D}", 1, 0, 0, 0),
    ("\u{093E}", "\u{093E}", "\u{093E}", "\u{093E}", 0, 8, 0, 0),
    ("\u{093F}", "\u{093F}", "\u{093F}", "\u{093F}", 0, 8, 0, 0),
    ("\u{0940}", "\u{0940}", "\u{0940}", "\u{0940}", 0, 8, 0, 0),
    ("\u{0941}", "\u{0941}", "\u{0941}", "\u{0941}", 0, 4, 0, 0),
    ("\u{0942}", "\u{0942}", "\u{0942}", "\u{0942}", 0, 4, 0, 0),
    ("\u{0943}", "\u{0943}", "\u{0943}", "\u{0943}", 0, 4, 0, 0),
    ("\u{0944}", "\u{0944}", "\u{0944}", "\u{0944}", 0, 4, 0, 0),
    ("\u{0945}", "\u{0945}", "\u{0945}", "\u{0945}", 0, 4, 0, 0),
    ("\u{0946}", "\u{0946}", "\u{0946}", "\u{0946}", 0, 4, 0, 0),
    ("\u{0947}", "\u{0947}", "\u{0947}", "\u{0947}", 0, 4, 0, 0),
    ("\u{0948}", "\u{0948}", "\u{0948}", "\u{0948}", 0, 4, 0, 0),
    ("\u{0949}", "\u{0949}", "\u{0949}", "\u{0949}", 0, 8, 0, 0),
    ("\u{094A}", "\u{094A}", "\u{094A}", "\u{094A}", 0, 8, 0, 0),
    ("\u{094B}", "\u{094B}", "\u{094B}", "\u{094B}", 0, 8, 0, 0),
    ("\u{094C}", "\u{094C}", "\u{094C}", "\u{094C}", 0, 8, 0, 0),
    ("\u{094D}", "\u{094D}", "\u{094D}", "\u{094D}", 0, 4, 9, 3),
    ("\u{094E}", "\u{094E}", "\u{094E}", "\u{094E}", 0, 8, 0, 0),
    ("\u{094F}", "\u{094F}", "\u{094F}", "\u{094F}", 0, 8, 0, 0),
    ("\u{0950}", "\u{0950}", "\u{0950}", "\u{0950}", 1, 0, 0, 0),
    ("\u{0951}", "\u{0951}", "\u{0951}", "\u{0951}", 0, 4, 230, 2),
    ("\u{0952}", "\u{0952}", "\u{0952}", "\u{0952}", 0, 4, 220, 2),
    ("\u{0953}", "\u{0953}", "\u{0953}", "\u{0953}", 0, 4, 230, 2),
    ("\u{0954}", "\u{0954}", "\u{0954}", "\u{0954}", 0, 4, 230, 2),
    ("\u{0955}", "\u{0955}", "\u{0955}", "\u{0955}", 0, 4, 0, 0),
    ("\u{0956}", "\u{0956}", "\u{0956}", "\u{0956}", 0, 4, 0, 0),
    ("\u{0957}", "\u{0957}", "\u{0957}", "\u{0957}", 0, 4, 0, 0),
    ("\u{0958}", "\u{0915}\u{093C}", "\u{0915}\u{093C}", "\u{0915}\u{093C}", 1, 0, 0, 1),
    ("\u{0959}", "\u{0916}\u{093C}", "\u{0916}\u{093C}", "\u{0916}\u{093C}", 1, 0, 0, 1),
    ("\u{095A}", "\u{0917}\u{093C}", "\u{0917}\u{093C}", "\u{0917}\u{093C}", 1, 0, 0, 1),
    ("\u{095B}", "\u{091C}\u{093C}", "\u{091C}\u{093C}", "\u{091C}\u{093C}", 1, 0, 0, 1),
    ("\u{095C}", "\u{0921}\u{093C}", "\u{0921}\u{093C}", "\u{0921}\u{093C}", 1, 0, 0, 1),
    ("\u{095D}", "\u{0922}\u{093C}", "\u{0922}\u{093C}", "\u{0922}\u{093C}", 1, 0, 0, 1),
    ("\u{095E}", "\u{092B}\u{093C}", "\u{092B}\u{093C}", "\u{092B}\u{093C}", 1, 0, 0, 1),
    ("\u{095F}", "\u{092F}\u{093C}", "\u{092F}\u{093C}", "\u{092F}\u{093C}", 1, 0, 0, 1),
    ("\u{0960}", "\u{0960}", "\u{0960}", "\u{0960}", 1, 0, 0, 0),
    ("\u{0961}", "\u{0961}", "\u{0961}", "\u{0961}", 1, 0, 0, 0),
    ("\u{0962}", "\u{0962}", "\u{0962}", "\u{0962}", 0, 4, 0, 0),
    ("\u{0963}", "\u{0963}", "\u{0963}", "\u{0963}", 0, 4, 0, 0),
    ("\u{0964}", "\u{0964}", "\u{0964}", "\u{0964}", 2, 0, 0, 0),
    ("\u{0965}", "\u{0965}", "\u{0965}", "\u{0965}", 2, 0, 0, 0),
    ("\u{0970}", "\u{0970}", "\u{0970}", "\u{0970}", 2, 0, 0, 0),
    ("\u{0971}", "\u{0971}", "\u{0971}", "\u{0971}", 1, 0, 0, 0),
    ("\u{0972}", "\u{0972}", "\u{0972}", "\u{0972}", 1, 0, 0, 0),
    ("\u{0973}", "\u{0973}", "\u{0973}", "\u{0973}", 1, 0, 0, 0),
    ("\u{0974}", "\u{0974}", "\u{0974}", "\u{0974}", 1, 0, 0, 0),
    ("\u{0975}", "\u{0975}", "\u{0975}", "\u{0975}", 1, 0, 0, 0),
    ("\u{0976}", "\u{0976}", "\u{0976}", "\u{0976}", 1, 0, 0, 0),
    ("\u{0977}", "\u{0977}", "\u{0977}", "\u{0977}", 1, 0, 0, 0),
    ("\u{0978}", "\u{0978}", "\u{0978}", "\u{0978}", 1, 0, 0, 0),
    ("\u{0979}", "\u{0979}", "\u{0979}", "\u{0979}", 1, 0, 0, 0),
    ("\u{097A}", "\u{097A}", "\u{097A}", "\u{097A}", 1, 0, 0, 0),
    ("\u{097B}", "\u{097B}", "\u{097B}", "\u{097B}", 1, 0, 0, 0),
    ("\u{097C}", "\u{097C}", "\u{097C}", "\u{097C}", 1, 0, 0, 0),
    ("\u{097D}", "\u{097D}", "\u{097D}", "\u{097D}", 1, 0, 0, 0),
    ("\u{097E}", "\u{097E}", "\u{097E}", "\u{097E}", 1, 0, 0, 0),
    ("\u{097F}", "\u{097F}", "\u{097F}", "\u{097F}", 1, 0, 0, 0),
    ("\u{1100}", "\u{1100}", "\u{1100}", "\u{1100}", 1, 9, 0, 0),
    ("\u{1101}", "\u{1101}", "\u{1101}", "\u{1101}", 1, 9, 0, 0),
    ("\u{1102}", "\u{1102}", "\u{1102}", "\u{1102}", 1, 9, 0, 0),
    ("\u{1103}", "\u{1103}", "\u{1103}", "\u{1103}", 1, 9, 0, 0),
    ("\u{1104}", "\u{1104}", "\u{1104}", "\u{1104}", 1, 9, 0, 0),
    ("\u{1105}", "\u{1105}", "\u{1105}", "\u{1105}", 1, 9, 0, 0),
    ("\u{1106}", "\u{1106}", "\u{1106}", "\u{1106}", 1, 9, 0, 0),
    ("\u{1107}", "\u{1107}", "\u{1107}", "\u{1107}", 1, 9, 0, 0),
    ("\u{1108}", "\u{1108}", "\u{1108}", "\u{1108}", 1, 9, 0, 0),
    ("\u{1109}", "\u{1109}", "\u{1109}", "\u{1109}", 1, 9, 0, 0),
    ("\u{110A}", "\u{110A}", "\u{110A}", "\u{110A}", 1, 9, 0, 0),
    ("\u{110B}", "\u{110B}", "\u{110B}", "\u{110B}", 1, 9, 0, 0),
    ("\u{110C}", "\u{110C}", "\u{110C}", "\u{110C}", 1, 9, 0, 0),
    ("\u{110D}", "\u{110D}", "\u{110D}", "\u{110D}", 1, 9, 0, 0),
    ("\u{110E}", "\u{110E}", "\u{110E}", "\u{110E}", 1, 9, 0, 0),
    ("\u{110F}", "\u{110F}", "\u{110F}", "\u{110F}", 1, 9, 0, 0),
    ("\u{1110}", "\u{1110}", "\u{1110}", "\u{1110}", 1, 9, 0, 0),
    ("\u{1111}", "\u{1111}", "\u{1111}", "\u{1111}", 1, 9, 0, 0),
    ("\u{1112}", "\u{1112}", "\u{1112}", "\u{1112}", 1, 9, 0, 0),
    ("\u{1113}", "\u{1113}", "\u{1113}", "\u{1113}", 1, 9, 0, 0),
    ("\u{1114}", "\u{1114}", "\u{1114}", "\u{1114}", 1, 9, 0, 0),
    ("\u{1115}", "\u{1115}", "\u{1115}", "\u{1115}", 1, 9, 0, 0),
    ("\u{1116}", "\u{1116}", "\u{1116}", "\u{1116}", 1, 9, 0, 0),
    ("\u{1117}", "\u{1117}", "\u{1117}", "\u{1117}", 1, 9, 0, 0),
    ("\u{1118}", "\u{1118}", "\u{1118}", "\u{1118}", 1, 9, 0, 0),
    ("\u{1119}", "\u{1119}", "\u{1119}", "\u{1119}", 1, 9, 0, 0),
    ("\u{111A}", "\u{111A}", "\u{111A}", "\u{111A}", 1, 9, 0, 0),
    ("\u{111B}", "\u{111B}", "\u{111B}", "\u{111B}", 1, 9, 0, 0),
    ("\u{111C}", "\u{111C}", "\u{111C}", "\u{111C}", 1, 9, 0, 0),
    ("\u{111D}", "\u{111D}", "\u{111D}", "\u{111D}", 1, 9, 0, 0),
    ("\u{111E}", "\u{111E}", "\u{111E}", "\u{111E}", 1, 9, 0, 0),
    ("\u{111F}", "\u{111F}", "\u{111F}", "\u{111F}", 1, 9, 0, 0),
    ("\u{1120}", "\u{1120}", "\u{1120}", "\u{1120}", 1, 9, 0, 0),
    ("\u{1121}", "\u{1121}", "\u{1121}", "\u{1121}", 1, 9, 0, 0),
    ("\u{1122}", "\u{1122}", "\u{1122}", "\u{1122}", 1, 9, 0, 0),
    ("\u{1123}", "\u{1123}", "\u{1123}", "\u{1123}", 1, 9, 0, 0),
    ("\u{1124}", "\u{1124}", "\u{1124}", "\u{1124}", 1, 9, 0, 0),
    ("\u{1125}", "\u{1125}", "\u{1125}", "\u{1125}", 1, 9, 0, 0),
    ("\u{1126}", "\u{1126}", "\u{1126}", "\u{1126}", 1, 9, 0, 0),
    ("\u{1127}", "\u{1127}", "\u{1127}", "\u{1127}", 1, 9, 0, 0),
    ("\u{1128}", "\u{1128}", "\u{1128}", "\u{1128}", 1, 9, 0, 0),
    ("\u{1129}", "\u{1129}", "\u{1129}", "\u{1129}", 1, 9, 0, 0),
    ("\u{112A}", "\u{112A}", "\u{112A}", "\u{112A}", 1, 9, 0, 0),
    ("\u{112B}", "\u{112B}", "\u{112B}", "\u{112B}", 1, 9, 0, 0),
    ("\u{112C}", "\u{112C}", "\u{112C}", "\u{112C}", 1, 9, 0, 0),
    ("\u{112D}", "\u{112D}", "\u{112D}", "\u{112D}", 1, 9, 0, 0),
    ("\u{112E}", "\u{112E}", "\u{112E}", "\u{112E}", 1, 9, 0, 0),
    ("\u{112F}", "\u{112F}", "\u{112F}", "\u{112F}", 1, 9, 0, 0),
    ("\u{1130}", "\u{1130}", "\u{1130}", "\u{1130}", 1, 9, 0, 0),
    ("\u{1131}", "\u{1131}", "\u{1131}", "\u{1131}", 1, 9, 0, 0),
    ("\u{1132}", "\u{1132}", "\u{1132}", "\u{1132}", 1, 9, 0, 0),
    ("\u{1133}", "\u{1133}", "\u{1133}", "\u{1133}", 1, 9, 0, 0),
    ("\u{1134}", "\u{1134}", "\u{1134}", "\u{1134}", 1, 9, 0, 0),
    ("\u{1135}", "\u{1135}", "\u{1135}", "\u{1135}", 1, 9, 0, 0),
    ("\u{1136}", "\u{1136}", "\u{1136}", "\u{1136}", 1, 9, 0, 0),
    ("\u{1137}", "\u{1137}", "\u{1137}", "\u{1137}", 1, 9, 0, 0),
    ("\u{1138}", "\u{1138}", "\u{1138}", "\u{1138}", 1, 9, 0, 0),
    ("\u{1139}", "\u{1139}", "\u{1139}", "\u{1139}", 1, 9, 0, 0),
    ("\u{113A}", "\u{113A}", "\u{113A}", "\u{113A}", 1, 9, 0, 0),
    ("\u{113B}", "\u{113B}", "\u{113B}", "\u{113B}", 1, 9, 0, 0),
    ("\u{113C}", "\u{113C}", "\u{113C}", "\u{113C}", 1, 9, 0, 0),
    ("\u{113D}", "\u{113D}", "\u{113D}", "\u{113D}", 1, 9, 0, 0),
    ("\u{113E}", "\u{113E}", "\u{113E}", "\u{113E}", 1, 9, 0, 0),
    ("\u{113F}", "\u{113F}", "\u{113F}", "\u{113F}", 1, 9, 0, 0),
    ("\u{1140}", "\u{1140}", "\u{1140}", "\u{1140}", 1, 9, 0, 0),
    ("\u{1141}", "\u{1141}", "\u{1141}", "\u{1141}", 1, 9, 0, 0),
    ("\u{1142}", "\u{1142}", "\u{1142}", "\u{1142}", 1, 9, 0, 0),
    ("\u{1143}", "\u{1143}", "\u{1143}", "\u{1143}", 1, 9, 0, 0),
    ("\u{1144}", "\u{1144}", "\u{1144}", "\u{1144}", 1, 9, 0, 0),
    ("\u{1145}", "\u{1145}", "\u{1145}", "\u{1145}", 1, 9, 0, 0),
    ("\u{1146}", "\u{1146}", "\u{1146}", "\u{1146}", 1, 9, 0, 0),
    ("\u{1147}", "\u{1147}", "\u{1147}", "\u{1147}", 1, 9, 0, 0),
    ("\u{1148}", "\u{1148}", "\u{1148}", "\u{1148}", 1, 9, 0, 0),
    ("\u{1149}", "\u{1149}", "\u{1149}", "\u{1149}", 1, 9, 0, 0),
    ("\u{114A}", "\u{114A}", "\u{114A}", "\u{114A}", 1, 9, 0, 0),
    ("\u{114B}", "\u{114B}", "\u{114B}", "\u{114B}", 1, 9, 0, 0),
    ("\u{114C}", "\u{114C}", "\u{114C}", "\u{114C}", 1, 9, 0, 0),
    ("\u{114D}", "\u{114D}", "\u{114D}", "\u{114D}", 1, 9, 0, 0),
    ("\u{114E}", "\u{114E}", "\u{114E}", "\u{114E}", 1, 9, 0, 0),
    ("\u{114F}", "\u{114F}", "\u{114F}", "\u{114F}", 1, 9, 0, 0),
    ("\u{1150}", "\u{1150}", "\u{1150}", "\u{1150}", 1, 9, 0, 0),
    ("\u{1151}", "\u{1151}", "\u{1151}", "\u{1151}", 1, 9, 0, 0),
    ("\u{1152}", "\u{1152}", "\u{1152}", "\u{1152}", 1, 9, 0, 0),
    ("\u{1153}", "\u{1153}", "\u{1153}", "\u{1153}", 1, 9, 0, 0),
    ("\u{1154}", "\u{1154}", "\u{1154}", "\u{1154}", 1, 9, 0, 0),
    ("\u{1155}", "\u{1155}", "\u{1155}", "\u{1155}", 1, 9, 0, 0),
    ("\u{1156}", "\u{1156}", "\u{1156}", "\u{1156}", 1, 9, 0, 0),
    ("\u{1157}", "\u{1157}", "\u{1157}", "\u{1157}", 1, 9, 0, 0),
    ("\u{1158}", "\u{1158}", "\u{1158}", "\u{1158}", 1, 9, 0, 0),
    ("\u{1159}", "\u{1159}", "\u{1159}", "\u{1159}", 1, 9, 0, 0),
    ("\u{115A}", "\u{115A}", "\u{115A}", "\u{115A}", 1, 9, 0, 0),
    ("\u{115B}", "\u{115B}", "\u{115B}", "\u{115B}", 1, 9, 0, 0),
    ("\u{115C}", "\u{115C}", "\u{115C}", "\u{115C}", 1, 9, 0, 0),
    ("\u{115D}", "\u{115D}", "\u{115D}", "\u{115D}", 1, 9, 0, 0),
    ("\u{115E}", "\u{115E}", "\u{115E}", "\u{115E}", 1, 9, 0, 0),
    ("\u{115F}", "\u{115F}", "\u{115F}", "\u{115F}", 1, 9, 0, 0),
    ("\u{1160}", "\u{1160}", "\u{1160}", "\u{1160}", 1, 10, 0, 0),
    ("\u{1161}", "\u{1161}", "\u{1161}", "\u{1161}", 1, 10, 0, 0),
    ("\u{1162}", "\u{1162}", "\u{1162}", "\u{1162}", 1, 10, 0, 0),
    ("\u{1163}", "\u{1163}", "\u{1163}", "\u{1163}", 1, 10, 0, 0),
    ("\u{1164}", "\u{1164}", "\u{1164}", "\u{1164}", 1, 10, 0, 0),
    ("\u{1165}", "\u{1165}", "\u{1165}", "\u{1165}", 1, 10, 0, 0),
    ("\u{1166}", "\u{1166}", "\u{1166}", "\u{1166}", 1, 10, 0, 0),
    ("\u{1167}", "\u{1167}", "\u{1167}", "\u{1167}", 1, 10, 0, 0),
    ("\u{1168}", "\u{1168}", "\u{1168}", "\u{1168}", 1, 10, 0, 0),
    ("\u{1169}", "\u{1169}", "\u{1169}", "\u{1169}", 1, 10, 0, 0),
    ("\u{116A}", "\u{116A}", "\u{116A}", "\u{116A}", 1, 10, 0, 0),
    ("\u{116B}", "\u{116B}", "\u{116B}", "\u{116B}", 1, 10, 0, 0),
    ("\u{116C}", "\u{116C}", "\u{116C}", "\u{116C}", 1, 10, 0, 0),
    ("\u{116D}", "\u{116D}", "\u{116D}", "\u{116D}", 1, 10, 0, 0),
    ("\u{116E}", "\u{116E}", "\u{116E}", "\u{116E}", 1, 10, 0, 0),
    ("\u{116F}", "\u{116F}", "\u{116F}", "\u{116F}", 1, 10, 0, 0),
    ("\u{1170}", "\u{1170}", "\u{1170}", "\u{1170}", 1, 10, 0, 0),
    ("\u{1171}", "\u{1171}", "\u{1171}", "\u{1171}", 1, 10, 0, 0),
    ("\u{1172}", "\u{1172}", "\u{1172}", "\u{1172}", 1, 10, 0, 0),
    ("\u{1173}", "\u{1173}", "\u{1173}", "\u{1173}", 1, 10, 0, 0),
    ("\u{1174}", "\u{1174}", "\u{1174}", "\u{1174}", 1, 10, 0, 0),
    ("\u{1175}", "\u{1175}", "\u{1175}", "\u{1175}", 1, 10, 0, 0),
    ("\u{1176}", "\u{1176}", "\u{1176}", "\u{1176}", 1, 10, 0, 0),
    ("\u{1177}", "\u{1177}", "\u{1177}", "\u{1177}", 1, 10, 0, 0),
    ("\u{1178}", "\u{1178}", "\u{1178}", "\u{1178}", 1, 10, 0, 0),
    ("\u{1179}", "\u{1179}", "\u{1179}", "\u{1179}", 1, 10, 0, 0),
    ("\u{117A}", "\u{117A}", "\u{117A}", "\u{117A}", 1, 10, 0, 0),
    ("\u{117B}", "\u{117B}", "\u{117B}", "\u{117B}", 1, 10, 0, 0),
    ("\u{117C}", "\u{117C}", "\u{117C}", "\u{117C}", 1, 10, 0, 0),
    ("\u{117D}", "\u{117D}", "\u{117D}", "\u{117D}", 1, 10, 0, 0),
    ("\u{117E}", "\u{117E}", "\u{117E}", "\u{117E}", 1, 10, 0, 0),
    ("\u{117F}", "\u{117F}", "\u{117F}", "\u{117F}", 1, 10, 0, 0),
    ("\u{1180}", "\u{1180}", "\u{1180}", "\u{1180}", 1, 10, 0, 0),
    ("\u{1181}", "\u{1181}", "\u{1181}", "\u{1181}", 1, 10, 0, 0),
    ("\u{1182}", "\u{1182}", "\u{1182}", "\u{1182}", 1, 10, 0, 0),
    ("\u{1183}", "\u{1183}", "\u{1183}", "\u{1183}", 1, 10, 0, 0),
    ("\u{1184}", "\u{1184}", "\u{1184}", "\u{1184}", 1, 10, 0, 0),
    ("\u{1185}", "\u{1185}", "\u{1185}", "\u{1185}", 1, 10, 0, 0),
    ("\u{1186}", "\u{1186}", "\u{1186}", "\u{1186}", 1, 10, 0, 0),
    ("\u{1187}", "\u{1187}", "\u{1187}", "\u{1187}", 1, 10, 0, 0),
    ("\u{1188}", "\u{1188}", "\u{1188}", "\u{1188}", 1, 10, 0, 0),
    ("\u{1189}", "\u{1189}", "\u{1189}", "\u{1189}", 1, 10, 0, 0),
    ("\u{118A}", "\u{118A}", "\u{118A}", "\u{118A}", 1, 10, 0, 0),
    ("\u{118B}", "\u{118B}", "\u{118B}", "\u{118B}", 1, 10, 0, 0),
    ("\u{118C}", "\u{118C}", "\u{118C}", "\u{118C}", 1, 10, 0, 0),
    ("\u{118D}", "\u{118D}", "\u{118D}", "\u{118D}", 1, 10, 0, 0),
    ("\u{118E}", "\u{118E}", "\u{118E}", "\u{118E}", 1, 10, 0, 0),
    ("\u{118F}", "\u{118F}", "\u{118F}", "\u{118F}", 1, 10, 0, 0),
    ("\u{1190}", "\u{1190}", "\u{1190}", "\u{1190}", 1, 10, 0, 0),
    ("\u{1191}", "\u{1191}", "\u{1191}", "\u{1191}", 1, 10, 0, 0),
    ("\u{1192}", "\u{1192}", "\u{1192}", "\u{1192}", 1, 10, 0, 0),
    ("\u{1193}", "\u{1193}", "\u{1193}", "\u{1193}", 1, 10, 0, 0),
    ("\u{1194}", "\u{1194}", "\u{1194}", "\u{1194}", 1, 10, 0, 0),
    ("\u{1195}", "\u{1195}", "\u{1195}", "\u{1195}", 1, 10, 0, 0),
    ("\u{1196}", "\u{1196}", "\u{1196}", "\u{1196}", 1, 10, 0, 0),
    ("\u{1197}", "\u{1197}", "\u{1197}", "\u{1197}", 1, 10, 0, 0),
    ("\u{1198}", "\u{1198}", "\u{1198}", "\u{1198}", 1, 10, 0, 0),
    ("\u{1199}", "\u{1199}", "\u{1199}", "\u{1199}", 1, 10, 0, 0),
    ("\u{119A}", "\u{119A}", "\u{119A}", "\u{119A}", 1, 10, 0, 0),
    ("\u{119B}", "\u{119B}", "\u{119B}", "\u{119B}", 1, 10, 0, 0),
    ("\u{119C}", "\u{119C}", "\u{119C}", "\u{119C}", 1, 10, 0, 0),
    ("\u{119D}", "\u{119D}", "\u{119D}", "\u{119D}", 1, 10, 0, 0),
    ("\u{119E}", "\u{119E}", "\u{119E}", "\u{119E}", 1, 10, 0, 0),
    ("\u{119F}", "\u{119F}", "\u{119F}", "\u{119F}", 1, 10, 0, 0),
    ("\u{11A0}", "\u{11A0}", "\u{11A0}", "\u{11A0}", 1, 10, 0, 0),
    ("\u{11A1}", "\u{11A1}", "\u{11A1}", "\u{11A1}", 1, 10, 0, 0),
    ("\u{11A2}", "\u{11A2}", "\u{11A2}", "\u{11A2}", 1, 10, 0, 0),
    ("\u{11A3}", "\u{11A3}", "\u{11A3}", "\u{11A3}", 1, 10, 0, 0),
    ("\u{11A4}", "\u{11A4}", "\u{11A4}", "\u{11A4}", 1, 10, 0, 0),
    ("\u{11A5}", "\u{11A5}", "\u{11A5}", "\u{11A5}", 1, 10, 0, 0),
    ("\u{11A6}", "\u{11A6}", "\u{11A6}", "\u{11A6}", 1, 10, 0, 0),
    ("\u{11A7}", "\u{11A7}", "\u{11A7}", "\u{11A7}", 1, 10, 0, 0),
    ("\u{11A8}", "\u{11A8}", "\u{11A8}", "\u{11A8}", 1, 11, 0, 0),
    ("\u{11A9}", "\u{11A9}", "\u{11A9}", "\u{11A9}", 1, 11, 0, 0),
    ("\u{11AA}", "\u{11AA}", "\u{11AA}", "\u{11AA}", 1, 11, 0, 0),
    ("\u{11AB}", "\u{11AB}", "\u{11AB}", "\u{11AB}", 1, 11, 0, 0),
    ("\u{11AC}", "\u{11AC}", "\u{11AC}", "\u{11AC}", 1, 11, 0, 0),
    ("\u{11AD}", "\u{11AD}", "\u{11AD}", "\u{11AD}", 1, 11, 0, 0),
    ("\u{11AE}", "\u{11AE}", "\u{11AE}", "\u{11AE}", 1, 11, 0, 0),
    ("\u{11AF}", "\u{11AF}", "\u{11AF}", "\u{11AF}", 1, 11, 0, 0),
    ("\u{11B0}", "\u{11B0}", "\u{11B0}", "\u{11B0}", 1, 11, 0, 0),
    ("\u{11B1}", "\u{11B1}", "\u{11B1}", "\u{11B1}", 1, 11, 0, 0),
    ("\u{11B2}", "\u{11B2}", "\u{11B2}", "\u{11B2}", 1, 11, 0, 0),
    ("\u{11B3}", "\u{11B3}", "\u{11B3}", "\u{11B3}", 1, 11, 0, 0),
    ("\u{11B4}", "\u{11B4}", "\u{11B4}", "\u{11B4}", 1, 11, 0, 0),
    ("\u{11B5}", "\u{11B5}", "\u{11B5}", "\u{11B5}", 1, 11, 0, 0),
    ("\u{11B6}", "\u{11B6}", "\u{11B6}", "\u{11B6}", 1, 11, 0, 0),
    ("\u{11B7}", "\u{11B7}", "\u{11B7}", "\u{11B7}", 1, 11, 0, 0),
    ("\u{11B8}", "\u{11B8}", "\u{11B8}", "\u{11B8}", 1, 11, 0, 0),
    ("\u{11B9}", "\u{11B9}", "\u{11B9}", "\u{11B9}", 1, 11, 0, 0),
    ("\u{11BA}", "\u{11BA}", "\u{11BA}", "\u{11BA}", 1, 11, 0, 0),
    ("\u{11BB}", "\u{11BB}", "\u{11BB}", "\u{11BB}", 1, 11, 0, 0),
    ("\u{11BC}", "\u{11BC}", "\u{11BC}", "\u{11BC}", 1, 11, 0, 0),
    ("\u{11BD}", "\u{11BD}", "\u{11BD}", "\u{11BD}", 1, 11, 0, 0),
    ("\u{11BE}", "\u{11BE}", "\u{11BE}", "\u{11BE}", 1, 11, 0, 0),
    ("\u{11BF}", "\u{11BF}", "\u{11BF}", "\u{11BF}", 1, 11, 0, 0),
    ("\u{11C0}", "\u{11C0}", "\u{11C0}", "\u{11C0}", 1, 11, 0, 0),
    ("\u{11C1}", "\u{11C1}", "\u{11C1}", "\u{11C1}", 1, 11, 0, 0),
    ("\u{11C2}", "\u{11C2}", "\u{11C2}", "\u{11C2}", 1, 11, 0, 0),
    ("\u{11C3}", "\u{11C3}", "\u{11C3}", "\u{11C3}", 1, 11, 0, 0),
    ("\u{11C4}", "\u{11C4}", "\u{11C4}", "\u{11C4}", 1, 11, 0, 0),
    ("\u{11C5}", "\u{11C5}", "\u{11C5}", "\u{11C5}", 1, 11, 0, 0),
    ("\u{11C6}", "\u{11C6}", "\u{11C6}", "\u{11C6}", 1, 11, 0, 0),
    ("\u{11C7}", "\u{11C7}", "\u{11C7}", "\u{11C7}", 1, 11, 0, 0),
    ("\u{11C8}", "\u{11C8}", "\u{11C8}", "\u{11C8}", 1, 11, 0, 0),
    ("\u{11C9}", "\u{11C9}", "\u{11C9}", "\u{11C9}", 1, 11, 0, 0),
    ("\u{11CA}", "\u{11CA}", "\u{11CA}", "\u{11CA}", 1, 11, 0, 0),
    ("\u{11CB}", "\u{11CB}", "\u{11CB}", "\u{11CB}", 1, 11, 0, 0),
    ("\u{11CC}", "\u{11CC}", "\u{11CC}", "\u{11CC}", 1, 11, 0, 0),
    ("\u{11CD}", "\u{11CD}", "\u{11CD}", "\u{11CD}", 1, 11, 0, 0),
    ("\u{11CE}", "\u{11CE}", "\u{11CE}", "\u{11CE}", 1, 11, 0, 0),
    ("\u{11CF}", "\u{11CF}", "\u{11CF}", "\u{11CF}", 1, 11, 0, 0),
    ("\u{11D0}", "\u{11D0}", "\u{11D0}", "\u{11D0}", 1, 11, 0, 0),
    ("\u{11D1}", "\u{11D1}", "\u{11D1}", "\u{11D1}", 1, 11, 0, 0),
    ("\u{11D2}", "\u{11D2}", "\u{11D2}", "\u{11D2}", 1, 11, 0, 0),
    ("\u{11D3}", "\u{11D3}", "\u{11D3}", "\u{11D3}", 1, 11, 0, 0),
    ("\u{11D4}", "\u{11D4}", "\u{11D4}", "\u{11D4}", 1, 11, 0, 0),
    ("\u{11D5}", "\u{11D5}", "\u{11D5}", "\u{11D5}", 1, 11, 0, 0),
    ("\u{11D6}", "\u{11D6}", "\u{11D6}", "\u{11D6}", 1, 11, 0, 0),
    ("\u{11D7}", "\u{11D7}", "\u{11D7}", "\u{11D7}", 1, 11, 0, 0),
    ("\u{11D8}", "\u{11D8}", "\u{11D8}", "\u{11D8}", 1, 11, 0, 0),
    ("\u{11D9}", "\u{11D9}", "\u{11D9}", "\u{11D9}", 1, 11, 0, 0),
    ("\u{11DA}", "\u{11DA}", "\u{11DA}", "\u{11DA}", 1, 11, 0, 0),
    ("\u{11DB}", "\u{11DB}", "\u{11DB}", "\u{11DB}", 1, 11, 0, 0),
    ("\u{11DC}", "\u{11DC}", "\u{11DC}", "\u{11DC}", 1, 11, 0, 0),
    ("\u{11DD}", "\u{11DD}", "\u{11DD}", "\u{11DD}", 1, 11, 0, 0),
    ("\u{11DE}", "\u{11DE}", "\u{11DE}", "\u{11DE}", 1, 11, 0, 0),
    ("\u{11DF}", "\u{11DF}", "\u{11DF}", "\u{11DF}", 1, 11, 0, 0),
    ("\u{11E0}", "\u{11E0}", "\u{11E0}", "\u{11E0}", 1, 11, 0, 0),
    ("\u{11E1}", "\u{11E1}", "\u{11E1}", "\u{11E1}", 1, 11, 0, 0),
    ("\u{11E2}", "\u{11E2}", "\u{11E2}", "\u{11E2}", 1, 11, 0, 0),
    ("\u{11E3}", "\u{11E3}", "\u{11E3}", "\u{11E3}", 1, 11, 0, 0),
    ("\u{11E4}", "\u{11E4}", "\u{11E4}", "\u{11E4}", 1, 11, 0, 0),
    ("\u{11E5}", "\u{11E5}", "\u{11E5}", "\u{11E5}", 1, 11, 0, 0),
    ("\u{11E6}", "\u{11E6}", "\u{11E6}", "\u{11E6}", 1, 11, 0, 0),
    ("\u{11E7}", "\u{11E7}", "\u{11E7}", "\u{11E7}", 1, 11, 0, 0),
    ("\u{11E8}", "\u{11E8}", "\u{11E8}", "\u{11E8}", 1, 11, 0, 0),
    ("\u{11E9}", "\u{11E9}", "\u{11E9}", "\u{11E9}", 1, 11, 0, 0),
    ("\u{11EA}", "\u{11EA}", "\u{11EA}", "\u{11EA}", 1, 11, 0, 0),
    ("\u{11EB}", "\u{11EB}", "\u{11EB}", "\u{11EB}", 1, 11, 0, 0),
    ("\u{11EC}", "\u{11EC}", "\u{11EC}", "\u{11EC}", 1, 11, 0, 0),
    ("\u{11ED}", "\u{11ED}", "\u{11ED}", "\u{11ED}", 1, 11, 0, 0),
    ("\u{11EE}", "\u{11EE}", "\u{11EE}", "\u{11EE}", 1, 11, 0, 0),
    ("\u{11EF}", "\u{11EF}", "\u{11EF}", "\u{11EF}", 1, 11, 0, 0),
    ("\u{11F0}", "\u{11F0}", "\u{11F0}", "\u{11F0}", 1, 11, 0, 0),
    ("\u{11F1}", "\u{11F1}", "\u{11F1}", "\u{11F1}", 1, 11, 0, 0),
    ("\u{11F2}", "\u{11F2}", "\u{11F2}", "\u{11F2}", 1, 11, 0, 0),
    ("\u{11F3}", "\u{11F3}", "\u{11F3}", "\u{11F3}", 1, 11, 0, 0),
    ("\u{11F4}", "\u{11F4}", "\u{11F4}", "\u{11F4}", 1, 11, 0, 0),
    ("\u{11F5}", "\u{11F5}", "\u{11F5}", "\u{11F5}", 1, 11, 0, 0),
    ("\u{11F6}", "\u{11F6}", "\u{11F6}", "\u{11F6}", 1, 11, 0, 0),
    ("\u{11F7}", "\u{11F7}", "\u{11F7}", "\u{11F7}", 1, 11, 0, 0),
    ("\u{11F8}", "\u{11F8}", "\u{11F8}", "\u{11F8}", 1, 11, 0, 0),
    ("\u{11F9}", "\u{11F9}", "\u{11F9}", "\u{11F9}", 1, 11, 0, 0),
    ("\u{11FA}", "\u{11FA}", "\u{11FA}", "\u{11FA}", 1, 11, 0, 0),
    ("\u{11FB}", "\u{11FB}", "\u{11FB}", "\u{11FB}", 1, 11, 0, 0),
    ("\u{11FC}", "\u{11FC}", "\u{11FC}", "\u{11FC}", 1, 11, 0, 0),
    ("\u{11FD}", "\u{11FD}", "\u{11FD}", "\u{11FD}", 1, 11, 0, 0),
    ("\u{11FE}", "\u{11FE}", "\u{11FE}", "\u{11FE}", 1, 11, 0, 0),
    ("\u{11FF}", "\u{11FF}", "\u{11FF}", "\u{11FF}", 1, 11, 0, 0),
    ("\u{1E00}", "A\u{0325}", "a\u{0325}", "a\u{0325}", 5, 0, 0, 0),
    ("\u{1E01}", "a\u{0325}", "a\u{0325}", "A\u{0325}", 1, 0, 0, 0),
    ("\u{1E02}", "B\u{0307}", "b\u{0307}", "b\u{0307}", 5, 0, 0, 0),
    ("\u{1E03}", "b\u{0307}", "b\u{0307}", "B\u{0307}", 1, 0, 0, 0),
    ("\u{1E04}", "B\u{0323}", "b\u{0323}", "b\u{0323}", 5, 0, 0, 0),
    ("\u{1E05}", "b\u{0323}", "b\u{0323}", "B\u{0323}", 1, 0, 0, 0),
    ("\u{1E06}", "B\u{0331}", "b\u{0331}", "b\u{0331}", 5, 0, 0, 0),
    ("\u{1E07}", "b\u{0331}", "b\u{0331}", "B\u{0331}", 1, 0, 0, 0),
    ("\u{1E08}", "C\u{0327}\u{0301}", "c\u{0327}\u{0301}", "c\u{0327}\u{0301}", 5, 0, 0, 0),
    ("\u{1E09}", "c\u{0327}\u{0301}", "c\u{0327}\u{0301}", "C\u{0327}\u{0301}", 1, 0, 0, 0),
    ("\u{1E0A}", "D\u{0307}", "d\u{0307}", "d\u{0307}", 5, 0, 0, 0),
    ("\u{1E0B}", "d\u{0307}", "d\u{0307}", "D\u{0307}", 1, 0, 0, 0),
    ("\u{1E0C}", "D\u{0323}", "d\u{0323}", "d\u{0323}", 5, 0, 0, 0),
    ("\u{1E0D}", "d\u{0323}", "d\u{0323}", "D\u{0323}", 1, 0, 0, 0),
    ("\u{1E0E}", "D\u{0331}", "d\u{0331}", "d\u{0331}", 5, 0, 0, 0),
    ("\u{1E0F}", "d\u{0331}", "d\u{0331}", "D\u{0331}", 1, 0, 0, 0),
    ("\u{1E10}", "D\u{0327}", "d\u{0327}", "d\u{0327}", 5, 0, 0, 0),
    ("\u{1E11}", "d\u{0327}", "d\u{0327}", "D\u{0327}", 1, 0, 0, 0),
    ("\u{1E12}", "D\u{032D}", "d\u{032D}", "d\u{032D}", 5, 0, 0, 0),
    ("\u{1E13}", "d\u{032D}", "d\u{032D}", "D\u{032D}", 1, 0, 0, 0),
    ("\u{1E14}", "E\u{0304}\u{0300}", "e\u{0304}\u{0300}", "e\u{0304}\u{0300}", 5, 0, 0, 0),
    ("\u{1E15}", "e\u{0304}\u{0300}", "e\u{0304}\u{0300}", "E\u{0304}\u{0300}", 1, 0, 0, 0),
    ("\u{1E16}", "E\u{0304}\u{0301}", "e\u{0304}\u{0301}", "e\u{0304}\u{0301}", 5, 0, 0, 0),
    ("\u{1E17}", "e\u{0304}\u{0301}", "e\u{0304}\u{0301}", "E\u{0304}\u{0301}", 1, 0, 0, 0),
    ("\u{1E18}", "E\u{032D}", "e\u{032D}", "e\u{032D}", 5, 0, 0, 0),
    ("\u{1E19}", "e\u{032D}", "e\u{032D}", "E\u{032D}", 1, 0, 0, 0),
    ("\u{1E1A}", "E\u{0330}", "e\u{0330}", "e\u{0330}", 5, 0, 0, 0),
    ("\u{1E1B}", "e\u{0330}", "e\u{0330}", "E\u{0330}", 1, 0, 0, 0),
    ("\u{1E1C}", "E\u{0327}\u{0306}", "e\u{0327}\u{0306}", "e\u{0327}\u{0306}", 5, 0, 0, 0),
    ("\u{1E1D}", "e\u{0327}\u{0306}", "e\u{0327}\u{0306}", "E\u{0327}\u{0306}", 1, 0, 0, 0),
    ("\u{1E1E}", "F\u{0307}", "f\u{0307}", "f\u{0307}", 5, 0, 0, 0),
    ("\u{1E1F}", "f\u{0307}", "f\u{0307}", "F\u{0307}", 1, 0, 0, 0),
    ("\u{1E20}", "G\u{0304}", "g\u{0304}", "g\u{0304}", 5, 0, 0, 0),
    ("\u{1E21}", "g\u{0304}", "g\u{0304}", "G\u{0304}", 1, 0, 0, 0),
    ("\u{1E22}", "H\u{0307}", "h\u{0307}", "h\u{0307}", 5, 0, 0, 0),
    ("\u{1E23}", "h\u{0307}", "h\u{0307}", "H\u{0307}", 1, 0, 0, 0),
    ("\u{1E24}", "H\u{0323}", "h\u{0323}", "h\u{0323}", 5, 0, 0, 0),
    ("\u{1E25}", "h\u{0323}", "h\u{0323}", "H\u{0323}", 1, 0, 0, 0),
    ("\u{1E26}", "H\u{0308}", "h\u{0308}", "h\u{0308}", 5, 0, 0, 0),
    ("\u{1E27}", "h\u{0308}", "h\u{0308}", "H\u{0308}", 1, 0, 0, 0),
    ("\u{1E28}", "H\u{0327}", "h\u{0327}", "h\u{0327}", 5, 0, 0, 0),
    ("\u{1E29}", "h\u{0327}", "h\u{0327}", "H\u{0327}", 1, 0, 0, 0),
    ("\u{1E2A}", "H\u{032E}", "h\u{032E}", "h\u{032E}", 5, 0, 0, 0),
    ("\u{1E2B}", "h\u{032E}", "h\u{032E}", "H\u{032E}", 1, 0, 0, 0),
    ("\u{1E2C}", "I\u{0330}", "i\u{0330}", "i\u{0330}", 5, 0, 0, 0),
    ("\u{1E2D}", "i\u{0330}", "i\u{0330}", "I\u{0330}", 1, 0, 0, 0),
    ("\u{1E2E}", "I\u{0308}\u{0301}", "i\u{0308}\u{0301}", "i\u{0308}\u{0301}", 5, 0, 0, 0),
    ("\u{1E2F}", "i\u{0308}\u{0301}", "i\u{0308}\u{0301}", "I\u{0308}\u{0301}", 1, 0, 0, 0),
    ("\u{1E30}", "K\u{0301}", "k\u{0301}", "k\u{0301}", 5, 0, 0, 0),
    ("\u{1E31}", "k\u{0301}", "k\u{0301}", "K\u{0301}", 1, 0, 0, 0),
    ("\u{1E32}", "K\u{0323}", "k\u{0323}", "k\u{0323}", 5, 0, 0, 0),
    ("\u{1E33}", "k\u{0323}", "k\u{0323}", "K\u{0323}", 1, 0, 0, 0),
    ("\u{1E34}", "K\u{0331}", "k\u{0331}", "k\u{0331}", 5, 0, 0, 0),
    ("\u{1E35}", "k\u{0331}", "k\u{0331}", "K\u{0331}", 1, 0, 0, 0),
    ("\u{1E36}", "L\u{0323}", "l\u{0323}", "l\u{0323}", 5, 0, 0, 0),
    ("\u{1E37}", "l\u{0323}", "l\u{0323}", "L\u{0323}", 1, 0, 0, 0),
    ("\u{1E38}", "L\u{0323}\u{0304}", "l\u{0323}\u{0304}", "l\u{0323}\u{0304}", 5, 0, 0, 0),
    ("\u{1E39}", "l\u{0323}\u{0304}", "l\u{0323}\u{0304}", "L\u{0323}\u{0304}", 1, 0, 0, 0),
    ("\u{1E3A}", "L\u{0331}", "l\u{0331}", "l\u{0331}", 5, 0, 0, 0),
    ("\u{1E3B}", "l\u{0331}", "l\u{0331}", "L\u{0331}", 1, 0, 0, 0),
    ("\u{1E3C}", "L\u{032D}", "l\u{032D}", "l\u{032D}", 5, 0, 0, 0),
    ("\u{1E3D}", "l\u{032D}", "l\u{032D}", "L\u{032D}", 1, 0, 0, 0),
    ("\u{1E3E}", "M\u{0301}", "m\u{0301}", "m\u{0301}", 5, 0, 0, 0),
    ("\u{1E3F}", "m\u{0301}", "m\u{0301}", "M\u{0301}", 1, 0, 0, 0),
    ("\u{1E40}", "M\u{0307}", "m\u{0307}", "m\u{0307}", 5, 0, 0, 0),
    ("\u{1E41}", "m\u{0307}", "m\u{0307}", "M\u{0307}", 1, 0, 0, 0),
    ("\u{1E42}", "M\u{0323}", "m\u{0323}", "m\u{0323}", 5, 0, 0, 0),
    ("\u{1E43}", "m\u{0323}", "m\u{0323}", "M\u{0323}", 1, 0, 0, 0),
    ("\u{1E44}", "N\u{0307}", "n\u{0307}", "n\u{0307}", 5, 0, 0, 0),
    ("\u{1E45}", "n\u{0307}", "n\u{0307}", "N\u{0307}", 1, 0, 0, 0),
    ("\u{1E46}", "N\u{0323}", "n\u{0323}", "n\u{0323}", 5, 0, 0, 0),
    ("\u{1E47}", "n\u{0323}", "n\u{0323}", "N\u{0323}", 1, 0, 0, 0),
    ("\u{1E48}", "N\u{0331}", "n\u{0331}", "n\u{0331}", 5, 0, 0, 0),
    ("\u{1E49}", "n\u{0331}", "n\u{0331}", "N\u{0331}", 1, 0, 0, 0),
    ("\u{1E4A}", "N\u{032D}", "n\u{032D}", "n\u{032D}", 5, 0, 0, 0),
    ("\u{1E4B}", "n\u{032D}", "n\u{032D}", "N\u{032D}", 1, 0, 0, 0),
    ("\u{1E4C}", "O\u{0303}\u{0301}", "o\u{0303}\u{0301}", "o\u{0303}\u{0301}", 5, 0, 0, 0),
    ("\u{1E4D}", "o\u{0303}\u{0301}", "o\u{0303}\u{0301}", "O\u{0303}\u{0301}", 1, 0, 0, 0),
    ("\u{1E4E}", "O\u{0303}\u{0308}", "o\u{0303}\u{0308}", "o\u{0303}\u{0308}", 5, 0, 0, 0),
    ("\u{1E4F}", "o\u{0303}\u{0308}", "o\u{0303}\u{0308}", "O\u{0303}\u{0308}", 1, 0, 0, 0),
    ("\u{1E50}", "O\u{0304}\u{0300}", "o\u{0304}\u{0300}", "o\u{0304}\u{0300}", 5, 0, 0, 0),
    ("\u{1E51}", "o\u{0304}\u{0300}", "o\u{0304}\u{0300}", "O\u{0304}\u{0300}", 1, 0, 0, 0),
    ("\u{1E52}", "O\u{0304}\u{0301}", "o\u{0304}\u{0301}", "o\u{0304}\u{0301}", 5, 0, 0, 0),
    ("\u{1E53}", "o\u{0304}\u{0301}", "o\u{0304}\u{0301}", "O\u{0304}\u{0301}", 1, 0, 0, 0),
    ("\u{1E54}", "P\u{0301}", "p\u{0301}", "p\u{0301}", 5, 0, 0, 0),
    ("\u{1E55}", "p\u{0301}", "p\u{0301}", "P\u{0301}", 1, 0, 0, 0),
    ("\u{1E56}", "P\u{0307}", "p\u{0307}", "p\u{0307}", 5, 0, 0, 0),
    ("\u{1E57}", "p\u{0307}", "p\u{0307}", "P\u{0307}", 1, 0, 0, 0),
    ("\u{1E58}", "R\u{0307}", "r\u{0307}", "r\u{0307}", 5, 0, 0, 0),
    ("\u{1E59}", "r\u{0307}", "r\u{0307}", "R\u{0307}", 1, 0, 0, 0),
    ("\u{1E5A}", "R\u{0323}", "r\u{0323}", "r\u{0323}", 5, 0, 0, 0),
    ("\u{1E5B}", "r\u{0323}", "r\u{0323}", "R\u{0323}", 1, 0, 0, 0),
    ("\u{1E5C}", "R\u{0323}\u{0304}", "r\u{0323}\u{0304}", "r\u{0323}\u{0304}", 5, 0, 0, 0),
    ("\u{1E5D}", "r\u{0323}\u{0304}", "r\u{0323}\u{0304}", "R\u{0323}\u{0304}", 1, 0, 0, 0),
    ("\u{1E5E}", "R\u{0331}", "r\u{0331}", "r\u{0331}", 5, 0, 0, 0),
    ("\u{1E5F}", "r\u{0331}", "r\u{0331}", "R\u{0331}", 1, 0, 0, 0),
    ("\u{1E60}", "S\u{0307}", "s\u{0307}", "s\u{0307}", 5, 0, 0, 0),
    ("\u{1E61}", "s\u{0307}", "s\u{0307}", "S\u{0307}", 1, 0, 0, 0),
    ("\u{1E62}", "S\u{0323}", "s\u{0323}", "s\u{0323}", 5, 0, 0, 0),
    ("\u{1E63}", "s\u{0323}", "s\u{0323}", "S\u{0323}", 1, 0, 0, 0),
    ("\u{1E64}", "S\u{0301}\u{0307}", "s\u{0301}\u{0307}", "s\u{0301}\u{0307}", 5, 0, 0, 0),
    ("\u{1E65}", "s\u{0301}\u{0307}", "s\u{0301}\u{0307}", "S\u{0301}\u{0307}", 1, 0, 0, 0),
    ("\u{1E66}", "S\u{030C}\u{0307}", "s\u{030C}\u{0307}", "s\u{030C}\u{0307}", 5, 0, 0, 0),
    ("\u{1E67}", "s\u{030C}\u{0307}", "s\u{030C}\u{0307}", "S\u{030C}\u{0307}", 1, 0, 0, 0),
    ("\u{1E68}", "S\u{0323}\u{0307}", "s\u{0323}\u{0307}", "s\u{0323}\u{0307}", 5, 0, 0, 0),
    ("\u{1E69}", "s\u{0323}\u{0307}", "s\u{0323}\u{0307}", "S\u{0323}\u{0307}", 1, 0, 0, 0),
    ("\u{1E6A}", "T\u{0307}", "t\u{0307}", "t\u{0307}", 5, 0, 0, 0),
    ("\u{1E6B}", "t\u{0307}", "t\u{0307}", "T\u{0307}", 1, 0, 0, 0),
    ("\u{1E6C}", "T\u{0323}", "t\u{0323}", "t\u{0323}", 5, 0, 0, 0),
    ("\u{1E6D}", "t\u{0323}", "t\u{0323}", "T\u{0323}", 1, 0, 0, 0),
    ("\u{1E6E}", "T\u{0331}", "t\u{0331}", "t\u{0331}", 5, 0, 0, 0),
    ("\u{1E6F}", "t\u{0331}", "t\u{0331}", "T\u{0331}", 1, 0, 0, 0),
    ("\u{1E70}", "T\u{032D}", "t\u{032D}", "t\u{032D}", 5, 0, 0, 0),
    ("\u{1E71}", "t\u{032D}", "t\u{032D}", "T\u{032D}", 1, 0, 0, 0),
    ("\u{1E72}", "U\u{0324}", "u\u{0324}", "u\u{0324}", 5, 0, 0, 0),
    ("\u{1E73}", "u\u{0324}", "u\u{0324}", "U\u{0324}", 1, 0, 0, 0),
    ("\u{1E74}", "U\u{0330}", "u\u{0330}", "u\u{0330}", 5, 0, 0, 0),
    ("\u{1E75}", "u\u{0330}", "u\u{0330}", "U\u{0330}", 1, 0, 0, 0),
    ("\u{1E76}", "U\u{032D}", "u\u{032D}", "u\u{032D}", 5, 0, 0, 0),
    ("\u{1E77}", "u\u{032D}", "u\u{032D}", "U\u{032D}", 1, 0, 0, 0),
    ("\u{1E78}", "U\u{0303}\u{0301}", "u\u{0303}\u{0301}", "u\u{0303}\u{0301}", 5, 0, 0, 0),
    ("\u{1E79}", "u\u{0303}\u{0301}", "u\u{0303}\u{0301}", "U\u{0303}\u{0301}", 1, 0, 0, 0),
    ("\u{1E7A}", "U\u{0304}\u{0308}", "u\u{0304}\u{0308}", "u\u{0304}\u{0308}", 5, 0, 0, 0),
    ("\u{1E7B}", "u\u{0304}\u{0308}", "u\u{0304}\u{0308}", "U\u{0304}\u{0308}", 1, 0, 0, 0),
    ("\u{1E7C}", "V\u{0303}", "v\u{0303}", "v\u{0303}", 5, 0, 0, 0),
    ("\u{1E7D}", "v\u{0303}", "v\u{0303}", "V\u{0303}", 1, 0, 0, 0),
    ("\u{1E7E}", "V\u{0323}", "v\u{0323}", "v\u{0323}", 5, 0, 0, 0),
    ("\u{1E7F}", "v\u{0323}", "v\u{0323}", "V\u{0323}", 1, 0, 0, 0),
    ("\u{1E80}", "W\u{0300}", "w\u{0300}", "w\u{0300}", 5, 0, 0, 0),
    ("\u{1E81}", "w\u{0300}", "w\u{0300}", "W\u{0300}", 1, 0, 0, 0),
    ("\u{1E82}", "W\u{0301}", "w\u{0301}", "w\u{0301}", 5, 0, 0, 0),
    ("\u{1E83}", "w\u{0301}", "w\u{0301}", "W\u{0301}", 1, 0, 0, 0),
    ("\u{1E84}", "W\u{0308}", "w\u{0308}", "w\u{0308}", 5, 0, 0, 0),
    ("\u{1E85}", "w\u{0308}", "w\u{0308}", "W\u{0308}", 1, 0, 0, 0),
    ("\u{1E86}", "W\u{0307}", "w\u{0307}", "w\u{0307}", 5, 0, 0, 0),
    ("\u{1E87}", "w\u{0307}", "w\u{0307}", "W\u{0307}", 1, 0, 0, 0),
    ("\u{1E88}", "W\u{0323}", "w\u{0323}", "w\u{0323}", 5, 0, 0, 0),
    ("\u{1E89}", "w\u{0323}", "w\u{0323}", "W\u{0323}", 1, 0, 0, 0),
    ("\u{1E8A}", "X\u{0307}", "x\u{0307}", "x\u{0307}", 5, 0, 0, 0),
    ("\u{1E8B}", "x\u{0307}", "x\u{0307}", "X\u{0307}", 1, 0, 0, 0),
    ("\u{1E8C}", "X\u{0308}", "x\u{0308}", "x\u{0308}", 5, 0, 0, 0),
    ("\u{1E8D}", "x\u{0308}", "x\u{0308}", "X\u{0308}", 1, 0, 0, 0),
    ("\u{1E8E}", "Y\u{0307}", "y\u{0307}", "y\u{0307}", 5, 0, 0, 0),
    ("\u{1E8F}", "y\u{0307}", "y\u{0307}", "Y\u{0307}", 1, 0, 0, 0),
    ("\u{1E90}", "Z\u{0302}", "z\u{0302}", "z\u{0302}", 5, 0, 0, 0),
    ("\u{1E91}", "z\u{0302}", "z\u{0302}", "Z\u{0302}", 1, 0, 0, 0),
    ("\u{1E92}", "Z\u{0323}", "z\u{0323}", "z\u{0323}", 5, 0, 0, 0),
    ("\u{1E93}", "z\u{0323}", "z\u{0323}", "Z\u{0323}", 1, 0, 0, 0),
    ("\u{1E94}", "Z\u{0331}", "z\u{0331}", "z\u{0331}", 5, 0, 0, 0),
    ("\u{1E95}", "z\u{0331}", "z\u{0331}", "Z\u{0331}", 1, 0, 0, 0),
    ("\u{1E96}", "h\u{0331}", "h\u{0331}", "H\u{0331}", 1, 0, 0, 0),
    ("\u{1E97}", "t\u{0308}", "t\u{0308}", "T\u{0308}", 1, 0, 0, 0),
    ("\u{1E98}", "w\u{030A}", "w\u{030A}", "W\u{030A}", 1, 0, 0, 0),
    ("\u{1E99}", "y\u{030A}", "y\u{030A}", "Y\u{030A}", 1, 0, 0, 0),
    ("\u{1E9A}", "\u{1E9A}", "a\u{02BE}", "A\u{02BE}", 1, 0, 0, 0),
    ("\u{1E9B}", "\u{017F}\u{0307}", "s\u{0307}", "S\u{0307}", 1, 0, 0, 0),
    ("\u{1E9C}", "\u{1E9C}", "\u{1E9C}", "\u{1E9C}", 1, 0, 0, 0),
    ("\u{1E9D}", "\u{1E9D}", "\u{1E9D}", "\u{1E9D}", 1, 0, 0, 0),
    ("\u{1E9E}", "\u{1E9E}", "ss", "\u{00DF}", 5, 0, 0, 0),
    ("\u{1E9F}", "\u{1E9F}", "\u{1E9F}", "\u{1E9F}", 1, 0, 0, 0),
    ("\u{1EA0}", "A\u{0323}", "a\u{0323}", "a\u{0323}", 5, 0, 0, 0),
    ("\u{1EA1}", "a\u{0323}", "a\u{0323}", "A\u{0323}", 1, 0, 0, 0),
    ("\u{1EA2}", "A\u{0309}", "a\u{0309}", "a\u{0309}", 5, 0, 0, 0),
    ("\u{1EA3}", "a\u{0309}", "a\u{0309}", "A\u{0309}", 1, 0, 0, 0),
    ("\u{1EA4}", "A\u{0302}\u{0301}", "a\u{0302}\u{0301}", "a\u{0302}\u{0301}", 5, 0, 0, 0),
    ("\u{1EA5}", "a\u{0302}\u{0301}", "a\u{0302}\u{0301}", "A\u{0302}\u{0301}", 1, 0, 0, 0),
    ("\u{1EA6}", "A\u{0302}\u{0300}", "a\u{0302}\u{0300}", "a\u{0302}\u{0300}", 5, 0, 0, 0),
    ("\u{1EA7}", "a\u{0302}\u{0300}", "a\u{0302}\u{0300}", "A\u{0302}\u{0300}", 1, 0, 0, 0),
    ("\u{1EA8}", "A\u{0302}\u{0309}", "a\u{0302}\u{0309}", "a\u{0302}\u{0309}", 5, 0, 0, 0),
    ("\u{1EA9}", "a\u{0302}\u{0309}", "a\u{0302}\u{0309}", "A\u{0302}\u{0309}", 1, 0, 0, 0),
    ("\u{1EAA}", "A\u{0302}\u{0303}", "a\u{0302}\u{0303}", "a\u{0302}\u{0303}", 5, 0, 0, 0),
    ("\u{1EAB}", "a\u{0302}\u{0303}", "a\u{0302}\u{0303}", "A\u{0302}\u{0303}", 1, 0, 0, 0),
    ("\u{1EAC}", "A\u{0323}\u{0302}", "a\u{0323}\u{0302}", "a\u{0323}\u{0302}", 5, 0, 0, 0),
    ("\u{1EAD}", "a\u{0323}\u{0302}", "a\u{0323}\u{0302}", "A\u{0323}\u{0302}", 1, 0, 0, 0),
    ("\u{1EAE}", "A\u{0306}\u{0301}", "a\u{0306}\u{0301}", "a\u{0306}\u{0301}", 5, 0, 0, 0),
    ("\u{1EAF}", "a\u{0306}\u{0301}", "a\u{0306}\u{0301}", "A\u{0306}\u{0301}", 1, 0, 0, 0),
    ("\u{1EB0}", "A\u{0306}\u{0300}", "a\u{0306}\u{0300}", "a\u{0306}\u{0300}", 5, 0, 0, 0),
    ("\u{1EB1}", "a\u{0306}\u{0300}", "a\u{0306}\u{0300}", "A\u{0306}\u{0300}", 1, 0, 0, 0),
    ("\u{1EB2}", "A\u{0306}\u{0309}", "a\u{0306}\u{0309}", "a\u{0306}\u{0309}", 5, 0, 0, 0),
    ("\u{1EB3}", "a\u{0306}\u{0309}", "a\u{0306}\u{0309}", "A\u{0306}\u{0309}", 1, 0, 0, 0),
    ("\u{1EB4}", "A\u{0306}\u{0303}", "a\u{0306}\u{0303}", "a\u{0306}\u{0303}", 5, 0, 0, 0),
    ("\u{1EB5}", "a\u{0306}\u{0303}", "a\u{0306}\u{0303}", "A\u{0306}\u{0303}", 1, 0, 0, 0),
    ("\u{1EB6}", "A\u{0323}\u{0306}", "a\u{0323}\u{0306}", "a\u{0323}\u{0306}", 5, 0, 0, 0),
    ("\u{1EB7}", "a\u{0323}\u{0306}", "a\u{0323}\u{0306}", "A\u{0323}\u{0306}", 1, 0, 0, 0),
    ("\u{1EB8}", "E\u{0323}", "e\u{0323}", "e\u{0323}", 5, 0, 0, 0),
    ("\u{1EB9}", "e\u{0323}", "e\u{0323}", "E\u{0323}", 1, 0, 0, 0),
    ("\u{1EBA}", "E\u{0309}", "e\u{0309}", "e\u{0309}", 5, 0, 0, 0),
    ("\u{1EBB}", "e\u{0309}", "e\u{0309}", "E\u{0309}", 1, 0, 0, 0),
    ("\u{1EBC}", "E\u{0303}", "e\u{0303}", "e\u{0303}", 5, 0, 0, 0),
    ("\u{1EBD}", "e\u{0303}", "e\u{0303}", "E\u{0303}", 1, 0, 0, 0),
    ("\u{1EBE}", "E\u{0302}\u{0301}", "e\u{0302}\u{0301}", "e\u{0302}\u{0301}", 5, 0, 0, 0),
    ("\u{1EBF}", "e\u{0302}\u{0301}", "e\u{0302}\u{0301}", "E\u{0302}\u{0301}", 1, 0, 0, 0),
    ("\u{1EC0}", "E\u{0302}\u{0300}", "e\u{0302}\u{0300}", "e\u{0302}\u{0300}", 5, 0, 0, 0),
    ("\u{1EC1}", "e\u{0302}\u{0300}", "e\u{0302}\u{0300}", "E\u{0302}\u{0300}", 1, 0, 0, 0),
    ("\u{1EC2}", "E\u{0302}\u{0309}", "e\u{0302}\u{0309}", "e\u{0302}\u{0309}", 5, 0, 0, 0),
    ("\u{1EC3}", "e\u{0302}\u{0309}", "e\u{0302}\u{0309}", "E\u{0302}\u{0309}", 1, 0, 0, 0),
    ("\u{1EC4}", "E\u{0302}\u{0303}", "e\u{0302}\u{0303}", "e\u{0302}\u{0303}", 5, 0, 0, 0),
    ("\u{1EC5}", "e\u{0302}\u{0303}", "e\u{0302}\u{0303}", "E\u{0302}\u{0303}", 1, 0, 0, 0),
    ("\u{1EC6}", "E\u{0323}\u{0302}", "e\u{0323}\u{0302}", "e\u{0323}\u{0302}", 5, 0, 0, 0),
    ("\u{1EC7}", "e\u{0323}\u{0302}", "e\u{0323}\u{0302}", "E\u{0323}\u{0302}", 1, 0, 0, 0),
    ("\u{1EC8}", "I\u{0309}", "i\u{0309}", "i\u{0309}", 5, 0, 0, 0),
    ("\u{1EC9}", "i\u{0309}", "i\u{0309}", "I\u{0309}", 1, 0, 0, 0),
    ("\u{1ECA}", "I\u{0323}", "i\u{0323}", "i\u{0323}", 5, 0, 0, 0),
    ("\u{1ECB}", "i\u{0323}", "i\u{0323}", "I\u{0323}", 1, 0, 0, 0),
    ("\u{1ECC}", "O\u{0323}", "o\u{0323}", "o\u{0323}", 5, 0, 0, 0),
    ("\u{1ECD}", "o\u{0323}", "o\u{0323}", "O\u{0323}", 1, 0, 0, 0),
    ("\u{1ECE}", "O\u{0309}", "o\u{0309}", "o\u{0309}", 5, 0, 0, 0),
    ("\u{1ECF}", "o\u{0309}", "o\u{0309}", "O\u{0309}", 1, 0, 0, 0),
    ("\u{1ED0}", "O\u{0302}\u{0301}", "o\u{0302}\u{0301}", "o\u{0302}\u{0301}", 5, 0, 0, 0),
    ("\u{1ED1}", "o\u{0302}\u{0301}", "o\u{0302}\u{0301}", "O\u{0302}\u{0301}", 1, 0, 0, 0),
    ("\u{1ED2}", "O\u{0302}\u{0300}", "o\u{0302}\u{0300}", "o\u{0302}\u{0300}", 5, 0, 0, 0),
    ("\u{1ED3}", "o\u{0302}\u{0300}", "o\u{0302}\u{0300}", "O\u{0302}\u{0300}", 1, 0, 0, 0),
    ("\u{1ED4}", "O\u{0302}\u{0309}", "o\u{0302}\u{0309}", "o\u{0302}\u{0309}", 5, 0, 0, 0),
    ("\u{1ED5}", "o\u{0302}\u{0309}", "o\u{0302}\u{0309}", "O\u{0302}\u{0309}", 1, 0, 0, 0),
    ("\u{1ED6}", "O\u{0302}\u{0303}", "o\u{0302}\u{0303}", "o\u{0302}\u{0303}", 5, 0, 0, 0),
    ("\u{1ED7}", "o\u{0302}\u{0303}", "o\u{0302}\u{0303}", "O\u{0302}\u{0303}", 1, 0, 0, 0),
    ("\u{1ED8}", "O\u{0323}\u{0302}", "o\u{0323}\u{0302}", "o\u{0323}\u{0302}", 5, 0, 0, 0),
    ("\u{1ED9}", "o\u{0323}\u{0302}", "o\u{0323}\u{0302}", "O\u{0323}\u{0302}", 1, 0, 0, 0),
    ("\u{1EDA}", "O\u{031B}\u{0301}", "o\u{031B}\u{0301}", "o\u{031B}\u{0301}", 5, 0, 0, 0),
    ("\u{1EDB}", "o\u{031B}\u{0301}", "o\u{031B}\u{0301}", "O\u{031B}\u{0301}", 1, 0, 0, 0),
    ("\u{1EDC}", "O\u{031B}\u{0300}", "o\u{031B}\u{0300}", "o\u{031B}\u{0300}", 5, 0, 0, 0),
    ("\u{1EDD}", "o\u{031B}\u{0300}", "o\u{031B}\u{0300}", "O\u{031B}\u{0300}", 1, 0, 0, 0),
    ("\u{1EDE}", "O\u{031B}\u{0309}", "o\u{031B}\u{0309}", "o\u{031B}\u{0309}", 5, 0, 0, 0),
    ("\u{1EDF}", "o\u{031B}\u{0309}", "o\u{031B}\u{0309}", "O\u{031B}\u{0309}", 1, 0, 0, 0),
    ("\u{1EE0}", "O\u{031B}\u{0303}", "o\u{031B}\u{0303}", "o\u{031B}\u{0303}", 5, 0, 0, 0),
    ("\u{1EE1}", "o\u{031B}\u{0303}", "o\u{031B}\u{0303}", "O\u{031B}\u{0303}", 1, 0, 0, 0),
    ("\u{1EE2}", "O\u{031B}\u{0323}", "o\u{031B}\u{0323}", "o\u{031B}\u{0323}", 5, 0, 0, 0),
    ("\u{1EE3}", "o\u{031B}\u{0323}", "o\u{031B}\u{0323}", "O\u{031B}\u{0323}", 1, 0, 0, 0),
    ("\u{1EE4}", "U\u{0323}", "u\u{0323}", "u\u{0323}", 5, 0, 0, 0),
    ("\u{1EE5}", "u\u{0323}", "u\u{0323}", "U\u{0323}", 1, 0, 0, 0),
    ("\u{1EE6}", "U\u{0309}", "u\u{0309}", "u\u{0309}", 5, 0, 0, 0),
    ("\u{1EE7}", "u\u{0309}", "u\u{0309}", "U\u{0309}", 1, 0, 0, 0),
    ("\u{1EE8}", "U\u{031B}\u{0301}", "u\u{031B}\u{0301}", "u\u{031B}\u{0301}", 5, 0, 0, 0),
    ("\u{1EE9}", "u\u{031B}\u{0301}", "u\u{031B}\u{0301}", "U\u{031B}\u{0301}", 1, 0, 0, 0),
    ("\u{1EEA}", "U\u{031B}\u{0300}", "u\u{031B}\u{0300}", "u\u{031B}\u{0300}", 5, 0, 0, 0),
    ("\u{1EEB}", "u\u{031B}\u{0300}", "u\u{031B}\u{0300}", "U\u{031B}\u{0300}", 1, 0, 0, 0),
    ("\u{1EEC}", "U\u{031B}\u{0309}", "u\u{031B}\u{0309}", "u\u{031B}\u{0309}", 5, 0, 0, 0),
    ("\u{1EED}", "u\u{031B}\u{0309}", "u\u{031B}\u{0309}", "U\u{031B}\u{0309}", 1, 0, 0, 0),
    ("\u{1EEE}", "U\u{031B}\u{0303}", "u\u{031B}\u{0303}", "u\u{031B}\u{0303}", 5, 0, 0, 0),
    ("\u{1EEF}", "u\u{031B}\u{0303}", "u\u{031B}\u{0303}", "U\u{031B}\u{0303}", 1, 0, 0, 0),
    ("\u{1EF0}", "U\u{031B}\u{0323}", "u\u{031B}\u{0323}", "u\u{031B}\u{0323}", 5, 0, 0, 0),
    ("\u{1EF1}", "u\u{031B}\u{0323}", "u\u{031B}\u{0323}", "U\u{031B}\u{0323}", 1, 0, 0, 0),
    ("\u{1EF2}", "Y\u{0300}", "y\u{0300}", "y\u{0300}", 5, 0, 0, 0),
    ("\u{1EF3}", "y\u{0300}", "y\u{0300}", "Y\u{0300}", 1, 0, 0, 0),
    ("\u{1EF4}", "Y\u{0323}", "y\u{0323}", "y\u{0323}", 5, 0, 0, 0),
    ("\u{1EF5}", "y\u{0323}", "y\u{0323}", "Y\u{0323}", 1, 0, 0, 0),
    ("\u{1EF6}", "Y\u{0309}", "y\u{0309}", "y\u{0309}", 5, 0, 0, 0),
    ("\u{1EF7}", "y\u{0309}", "y\u{0309}", "Y\u{0309}", 1, 0, 0, 0),
    ("\u{1EF8}", "Y\u{0303}", "y\u{0303}", "y\u{0303}", 5, 0, 0, 0),
    ("\u{1EF9}", "y\u{0303}", "y\u{0303}", "Y\u{0303}", 1, 0, 0, 0),
    ("\u{1EFA}", "\u{1EFA}", "\u{1EFB}", "\u{1EFB}", 5, 0, 0, 0),
    ("\u{1EFB}", "\u{1EFB}", "\u{1EFB}", "\u{1EFA}", 1, 0, 0, 0),
    ("\u{1EFC}", "\u{1EFC}", "\u{1EFD}", "\u{1EFD}", 5, 0, 0, 0),
    ("\u{1EFD}", "\u{1EFD}", "\u{1EFD}", "\u{1EFC}", 1, 0, 0, 0),
    ("\u{1EFE}", "\u{1EFE}", "\u{1EFF}", "\u{1EFF}", 5, 0, 0, 0),
    ("\u{1EFF}", "\u{1EFF}", "\u{1EFF}", "\u{1EFE}", 1, 0, 0, 0),
    ("\u{2000}", "\u{2002}", "\u{2002}", "\u{2002}", 0, 0, 0, 0),
    ("\u{2001}", "\u{2003}", "\u{2003}", "\u{2003}", 0, 0, 0, 0),
    ("\u{200B}", "\u{200B}", "\u{200B}", "\u{200B}", 0, 3, 0, 0),
    ("\u{200C}", "\u{200C}", "\u{200C}", "\u{200C}", 0, 4, 0, 0),
    ("\u{200D}", "\u{200D}", "\u{200D}", "\u{200D}", 0, 5, 0, 2),
    ("\u{200E}", "\u{200E}", "\u{200E}", "\u{200E}", 0, 3, 0, 0),
    ("\u{200F}", "\u{200F}", "\u{200F}", "\u{200F}", 0, 3, 0, 0),
    ("\u{2010}", "\u{2010}", "\u{2010}", "\u{2010}", 2, 0, 0, 0),
    ("\u{2011}", "\u{2011}", "\u{2011}", "\u{2011}", 2, 0, 0, 0),
    ("\u{2012}", "\u{2012}", "\u{2012}", "\u{2012}", 2, 0, 0, 0),
    ("\u{2013}", "\u{2013}", "\u{2013}", "\u{2013}", 2, 0, 0, 0),
    ("\u{2014}", "\u{2014}", "\u{2014}", "\u{2014}", 2, 0, 0, 0),
    ("\u{2015}", "\u{2015}", "\u{2015}", "\u{2015}", 2, 0, 0, 0),
    ("\u{2016}", "\u{2016}", "\u{2016}", "\u{2016}", 2, 0, 0, 0),
    ("\u{2017}", "\u{2017}", "\u{2017}", "\u{2017}", 2, 0, 0, 0),
    ("\u{2018}", "\u{2018}", "\u{2018}", "\u{2018}", 2, 0, 0, 0),
    ("\u{2019}", "\u{2019}", "\u{2019}", "\u{2019}", 2, 0, 0, 0),
    ("\u{201A}", "\u{201A}", "\u{201A}", "\u{201A}", 2, 0, 0, 0),
    ("\u{201B}", "\u{201B}", "\u{201B}", "\u{201B}", 2, 0, 0, 0),
    ("\u{201C}", "\u{201C}", "\u{201C}", "\u{201C}", 2, 0, 0, 0),
    ("\u{201D}", "\u{201D}", "\u{201D}", "\u{201D}", 2, 0, 0, 0),
    ("\u{201E}", "\u{201E}", "\u{201E}", "\u{201E}", 2, 0, 0, 0),
    ("\u{201F}", "\u{201F}", "\u{201F}", "\u{201F}", 2, 0, 0, 0),
    ("\u{2020}", "\u{2020}", "\u{2020}", "\u{2020}", 2, 0, 0, 0),
    ("\u{2021}", "\u{2021}", "\u{2021}", "\u{2021}", 2, 0, 0, 0),
    ("\u{2022}", "\u{2022}", "\u{2022}", "\u{2022}", 2, 0, 0, 0),
    ("\u{2023}", "\u{2023}", "\u{2023}", "\u{2023}", 2, 0, 0, 0),
    ("\u{2024}", "\u{2024}", "\u{2024}", "\u{2024}", 2, 0, 0, 0),
    ("\u{2025}", "\u{2025}", "\u{2025}", "\u{2025}", 2, 0, 0, 0),
    ("\u{2026}", "\u{2026}", "\u{2026}", "\u{2026}", 2, 0, 0, 0),
    ("\u{2027}", "\u{2027}", "\u{2027}", "\u{2027}", 2, 0, 0, 0),
    ("\u{2028}", "\u{2028}", "\u{2028}", "\u{2028}", 0, 3, 0, 0),
    ("\u{2029}", "\u{2029}", "\u{2029}", "\u{2029}", 0, 3, 0, 0),
    ("\u{202A}", "\u{202A}", "\u{202A}", "\u{202A}", 0, 3, 0, 0),
    ("\u{202B}", "\u{202B}", "\u{202B}", "\u{202B}", 0, 3, 0, 0),
    ("\u{202C}", "\u{202C}", "\u{202C}", "\u{202C}", 0, 3, 0, 0),
    ("\u{202D}", "\u{202D}", "\u{202D}", "\u{202D}", 0, 3, 0, 0),
    ("\u{202E}", "\u{202E}", "\u{202E}", "\u{202E}", 0, 3, 0, 0),
    ("\u{2030}", "\u{2030}", "\u{2030}", "\u{2030}", 2, 0, 0, 0),
    ("\u{2031}", "\u{2031}", "\u{2031}", "\u{2031}", 2, 0, 0, 0),
    ("\u{2032}", "\u{2032}", "\u{2032}", "\u{2032}", 2, 0, 0, 0),
    ("\u{2033}", "\u{2033}", "\u{2033}", "\u{2033}", 2, 0, 0, 0),
    ("\u{2034}", "\u{2034}", "\u{2034}", "\u{2034}", 2, 0, 0, 0),
    ("\u{2035}", "\u{2035}", "\u{2035}", "\u{2035}", 2, 0, 0, 0),
    ("\u{2036}", "\u{2036}", "\u{2036}", "\u{2036}", 2, 0, 0, 0),
    ("\u{2037}", "\u{2037}", "\u{2037}", "\u{2037}", 2, 0, 0, 0),
    ("\u{2038}", "\u{2038}", "\u{2038}", "\u{2038}", 2, 0, 0, 0),
    ("\u{2039}", "\u{2039}", "\u{2039}", "\u{2039}", 2, 0, 0, 0),
    ("\u{203A}", "\u{203A}", "\u{203A}", "\u{203A}", 2, 0, 0, 0),
    ("\u{203B}", "\u{203B}", "\u{203B}", "\u{203B}", 2, 0, 0, 0),
    ("\u{203C}", "\u{203C}", "\u{203C}", "\u{203C}", 2, 18, 0, 0),
    ("\u{203D}", "\u{203D}", "\u{203D}", "\u{203D}", 2, 0, 0, 0),
    ("\u{203E}", "\u{203E}", "\u{203E}", "\u{203E}", 2, 0, 0, 0),
    ("\u{203F}", "\u{203F}", "\u{203F}", "\u{203F}", 2, 0, 0, 0),
    ("\u{2040}", "\u{2040}", "\u{2040}", "\u{2040}", 2, 0, 0, 0),
    ("\u{2041}", "\u{2041}", "\u{2041}", "\u{2041}", 2, 0, 0, 0),
    ("\u{2042}", "\u{2042}", "\u{2042}", "\u{2042}", 2, 0, 0, 0),
    ("\u{2043}", "\u{2043}", "\u{2043}", "\u{2043}", 2, 0, 0, 0),
    ("\u{2045}", "\u{2045}", "\u{2045}", "\u{2045}", 2, 0, 0, 0),
    ("\u{2046}", "\u{2046}", "\u{2046}", "\u{2046}", 2, 0, 0, 0),
    ("\u{2047}", "\u{2047}", "\u{2047}", "\u{2047}", 2, 0, 0, 0),
    ("\u{2048}", "\u{2048}", "\u{2048}", "\u{2048}", 2, 0, 0, 0),
    ("\u{2049}", "\u{2049}", "\u{2049}", "\u{2049}", 2, 18, 0, 0),
    ("\u{204A}", "\u{204A}", "\u{204A}", "\u{204A}", 2, 0, 0, 0),
    ("\u{204B}", "\u{204B}", "\u{204B}", "\u{204B}", 2, 0, 0, 0),
    ("\u{204C}", "\u{204C}", "\u{204C}", "\u{204C}", 2, 0, 0, 0),
    ("\u{204D}", "\u{204D}", "\u{204D}", "\u{204D}", 2, 0, 0, 0),
    ("\u{204E}", "\u{204E}", "\u{204E}", "\u{204E}", 2, 0, 0, 0),
    ("\u{204F}", "\u{204F}", "\u{204F}", "\u{204F}", 2, 0, 0, 0),
    ("\u{2050}", "\u{2050}", "\u{2050}", "\u{2050}", 2, 0, 0, 0),
    ("\u{2051}", "\u{2051}", "\u{2051}", "\u{2051}", 2, 0, 0, 0),
    ("\u{2053}", "\u{2053}", "\u{2053}", "\u{2053}", 2, 0, 0, 0),
    ("\u{2054}", "\u{2054}", "\u{2054}", "\u{2054}", 2, 0, 0, 0),
    ("\u{2055}", "\u{2055}", "\u{2055}", "\u{2055}", 2, 0, 0, 0),
    ("\u{2056}", "\u{2056}", "\u{2056}", "\u{2056}", 2, 0, 0, 0),
    ("\u{2057}", "\u{2057}", "\u{2057}", "\u{2057}", 2, 0, 0, 0),
    ("\u{2058}", "\u{2058}", "\u{2058}", "\u{2058}", 2, 0, 0, 0),
    ("\u{2059}", "\u{2059}", "\u{2059}", "\u{2059}", 2, 0, 0, 0),
    ("\u{205A}", "\u{205A}", "\u{205A}", "\u{205A}", 2, 0, 0, 0),
    ("\u{205B}", "\u{205B}", "\u{205B}", "\u{205B}", 2, 0, 0, 0),
    ("\u{205C}", "\u{205C}", "\u{205C}", "\u{205C}", 2, 0, 0, 0),
    ("\u{205D}", "\u{205D}", "\u{205D}", "\u{205D}", 2, 0, 0, 0),
    ("\u{205E}", "\u{205E}", "\u{205E}", "\u{205E}", 2, 0, 0, 0),
    ("\u{2060}", "\u{2060}", "\u{2060}", "\u{2060}", 0, 3, 0, 0),
    ("\u{2061}", "\u{2061}", "\u{2061}", "\u{2061}", 0, 3, 0, 0),
    ("\u{2062}", "\u{2062}", "\u{2062}", "\u{2062}", 0, 3, 0, 0),
    ("\u{2063}", "\u{2063}", "\u{2063}", "\u{2063}", 0, 3, 0, 0),
    ("\u{2064}", "\u{2064}", "\u{2064}", "\u{2064}", 0, 3, 0, 0),
    ("\u{2066}", "\u{2066}", "\u{2066}", "\u{2066}", 0, 3, 0, 0),
    ("\u{2067}", "\u{2067}", "\u{2067}", "\u{2067}", 0, 3, 0, 0),
    ("\u{2068}", "\u{2068}", "\u{2068}", "\u{2068}", 0, 3, 0, 0),
    ("\u{2069}", "\u{2069}", "\u{2069}", "\u{2069}", 0, 3, 0, 0),
    ("\u{206A}", "\u{206A}", "\u{206A}", "\u{206A}", 0, 3, 0, 0),
    ("\u{206B}", "\u{206B}", "\u{206B}", "\u{206B}", 0, 3, 0, 0),
    ("\u{206C}", "\u{206C}", "\u{206C}", "\u{206C}", 0, 3, 0, 0),
    ("\u{206D}", "\u{206D}", "\u{206D}", "\u{206D}", 0, 3, 0, 0),
    ("\u{206E}", "\u{206E}", "\u{206E}", "\u{206E}", 0, 3, 0, 0),
    ("\u{206F}", "\u{206F}", "\u{206F}", "\u{206F}", 0, 3, 0, 0),
    ("\u{20D0}", "\u{20D0}", "\u{20D0}", "\u{20D0}", 0, 4, 230, 2),
    ("\u{20D1}", "\u{20D1}", "\u{20D1}", "\u{20D1}", 0, 4, 230, 2),
    ("\u{20D2}", "\u{20D2}", "\u{20D2}", "\u{20D2}", 0, 4, 1, 2),
    ("\u{20D3}", "\u{20D3}", "\u{20D3}", "\u{20D3}", 0, 4, 1, 2),
    ("\u{20D4}", "\u{20D4}", "\u{20D4}", "\u{20D4}", 0, 4, 230, 2),
    ("\u{20D5}", "\u{20D5}", "\u{20D5}", "\u{20D5}", 0, 4, 230, 2),
    ("\u{20D6}", "\u{20D6}", "\u{20D6}", "\u{20D6}", 0, 4, 230, 2),
    ("\u{20D7}", "\u{20D7}", "\u{20D7}", "\u{20D7}", 0, 4, 230, 2),
    ("\u{20D8}", "\u{20D8}", "\u{20D8}", "\u{20D8}", 0, 4, 1, 2),
    ("\u{20D9}", "\u{20D9}", "\u{20D9}", "\u{20D9}", 0, 4, 1, 2),
    ("\u{20DA}", "\u{20DA}", "\u{20DA}", "\u{20DA}", 0, 4, 1, 2),
    ("\u{20DB}", "\u{20DB}", "\u{20DB}", "\u{20DB}", 0, 4, 230, 2),
    ("\u{20DC}", "\u{20DC}", "\u{20DC}", "\u{20DC}", 0, 4, 230, 2),
    ("\u{20DD}", "\u{20DD}", "\u{20DD}", "\u{20DD}", 0, 4, 0, 0),
    ("\u{20DE}", "\u{20DE}", "\u{20DE}", "\u{20DE}", 0, 4, 0, 0),
    ("\u{20DF}", "\u{20DF}", "\u{20DF}", "\u{20DF}", 0, 4, 0, 0),
    ("\u{20E0}", "\u{20E0}", "\u{20E0}", "\u{20E0}", 0, 4, 0, 0),
    ("\u{20E1}", "\u{20E1}", "\u{20E1}", "\u{20E1}", 0, 4, 230, 2),
    ("\u{20E2}", "\u{20E2}", "\u{20E2}", "\u{20E2}", 0, 4, 0, 0),
    ("\u{20E3}", "\u{20E3}", "\u{20E3}", "\u{20E3}", 0, 4, 0, 0),
    ("\u{20E4}", "\u{20E4}", "\u{20E4}", "\u{20E4}", 0, 4, 0, 0),
    ("\u{20E5}", "\u{20E5}", "\u{20E5}", "\u{20E5}", 0, 4, 1, 2),
    ("\u{20E6}", "\u{20E6}", "\u{20E6}", "\u{20E6}", 0, 4, 1, 2),
    ("\u{20E7}", "\u{20E7}", "\u{20E7}", "\u{20E7}", 0, 4, 230, 2),
    ("\u{20E8}", "\u{20E8}", "\u{20E8}", "\u{20E8}", 0, 4, 220, 2),
    ("\u{20E9}", "\u{20E9}", "\u{20E9}", "\u{20E9}", 0, 4, 230, 2),
    ("\u{20EA}", "\u{20EA}", "\u{20EA}", "\u{20EA}", 0, 4, 1, 2),
    ("\u{20EB}", "\u{20EB}", "\u{20EB}", "\u{20EB}", 0, 4, 1, 2),
    ("\u{20EC}", "\u{20EC}", "\u{20EC}", "\u{20EC}", 0, 4, 220, 2),
    ("\u{20ED}", "\u{20ED}", "\u{20ED}", "\u{20ED}", 0, 4, 220, 2),
    ("\u{20EE}", "\u{20EE}", "\u{20EE}", "\u{20EE}", 0, 4, 220, 2),
    ("\u{20EF}", "\u{20EF}", "\u{20EF}", "\u{20EF}", 0, 4, 220, 2),
    ("\u{20F0}", "\u{20F0}", "\u{20F0}", "\u{20F0}", 0, 4, 230, 2),
    ("\u{2102}", "\u{2102}", "\u{2102}", "\u{2102}", 1, 0, 0, 0),
    ("\u{2107}", "\u{2107}", "\u{2107}", "\u{2107}", 1, 0, 0, 0),
    ("\u{210A}", "\u{210A}", "\u{210A}", "\u{210A}", 1, 0, 0, 0),
    ("\u{210B}", "\u{210B}", "\u{210B}", "\u{210B}", 1, 0, 0, 0),
    ("\u{210C}", "\u{210C}", "\u{210C}", "\u{210C}", 1, 0, 0, 0),
    ("\u{210D}", "\u{210D}", "\u{210D}", "\u{210D}", 1, 0, 0, 0),
    ("\u{210E}", "\u{210E}", "\u{210E}", "\u{210E}", 1, 0, 0, 0),
    ("\u{210F}", "\u{210F}", "\u{210F}", "\u{210F}", 1, 0, 0, 0),
    ("\u{2110}", "\u{2110}", "\u{2110}", "\u{2110}", 1, 0, 0, 0),
    ("\u{2111}", "\u{2111}", "\u{2111}", "\u{2111}", 1, 0, 0, 0),
    ("\u{2112}", "\u{2112}", "\u{2112}", "\u{2112}", 1, 0, 0, 0),
    ("\u{2113}", "\u{2113}", "\u{2113}", "\u{2113}", 1, 0, 0, 0),
    ("\u{2115}", "\u{2115}", "\u{2115}", "\u{2115}", 1, 0, 0, 0),
    ("\u{2119}", "\u{2119}", "\u{2119}", "\u{2119}", 1, 0, 0, 0),
    ("\u{211A}", "\u{211A}", "\u{211A}", "\u{211A}", 1, 0, 0, 0),
    ("\u{211B}", "\u{211B}", "\u{211B}", "\u{211B}", 1, 0, 0, 0),
    ("\u{211C}", "\u{211C}", "\u{211C}", "\u{211C}", 1, 0, 0, 0),
    ("\u{211D}", "\u{211D}", "\u{211D}", "\u{211D}", 1, 0, 0, 0),
    ("\u{2122}", "\u{2122}", "\u{2122}", "\u{2122}", 0, 18, 0, 0),
    ("\u{2124}", "\u{2124}", "\u{2124}", "\u{2124}", 1, 0, 0, 0),
    ("\u{2126}", "\u{03A9}", "\u{03C9}", "\u{03C9}", 5, 0, 0, 0),
    ("\u{2128}", "\u{2128}", "\u{2128}", "\u{2128}", 1, 0, 0, 0),
    ("\u{212A}", "K", "k", "k", 5, 0, 0, 0),
    ("\u{212B}", "A\u{030A}", "a\u{030A}", "a\u{030A}", 5, 0, 0, 0),
    ("\u{212C}", "\u{212C}", "\u{212C}", "\u{212C}", 1, 0, 0, 0),
    ("\u{212D}", "\u{212D}", "\u{212D}", "\u{212D}", 1, 0, 0, 0),
    ("\u{212F}", "\u{212F}", "\u{212F}", "\u{212F}", 1, 0, 0, 0),
    ("\u{2130}", "\u{2130}", "\u{2130}", "\u{2130}", 1, 0, 0, 0),
    ("\u{2131}", "\u{2131}", "\u{2131}", "\u{2131}", 1, 0, 0, 0),
    ("\u{2132}", "\u{2132}", "\u{214E}", "\u{214E}", 5, 0, 0, 0),
    ("\u{2133}", "\u{2133}", "\u{2133}", "\u{2133}", 1, 0, 0, 0),
    ("\u{2134}", "\u{2134}", "\u{2134}", "\u{2134}", 1, 0, 0, 0),
    ("\u{2135}", "\u{2135}", "\u{2135}", "\u{2135}", 1, 0, 0, 0),
    ("\u{2136}", "\u{2136}", "\u{2136}", "\u{2136}", 1, 0, 0, 0),
    ("\u{2137}", "\u{2137}", "\u{2137}", "\u{2137}", 1, 0, 0, 0),
    ("\u{2138}", "\u{2138}", "\u{2138}", "\u{2138}", 1, 0, 0, 0),
    ("\u{2139}", "\u{2139}", "\u{2139}", "\u{2139}", 1, 0, 0, 0),
    ("\u{213C}", "\u{213C}", "\u{213C}", "\u{213C}", 1, 0, 0, 0),
    ("\u{213D}", "\u{213D}", "\u{213D}", "\u{213D}", 1, 0, 0, 0),
    ("\u{213E}", "\u{213E}", "\u{213E}", "\u{213E}", 1, 0, 0, 0),
    ("\u{213F}", "\u{213F}", "\u{213F}", "\u{213F}", 1, 0, 0, 0),
    ("\u{2145}", "\u{2145}", "\u{2145}", "\u{2145}", 1, 0, 0, 0),
    ("\u{2146}", "\u{2146}", "\u{2146}", "\u{2146}", 1, 0, 0, 0),
    ("\u{2147}", "\u{2147}", "\u{2147}", "\u{2147}", 1, 0, 0, 0),
    ("\u{2148}", "\u{2148}", "\u{2148}", "\u{2148}", 1, 0, 0, 0),
    ("\u{2149}", "\u{2149}", "\u{2149}", "\u{2149}", 1, 0, 0, 0),
    ("\u{214E}", "\u{214E}", "\u{214E}", "\u{2132}", 1, 0, 0, 0),
    ("\u{2600}", "\u{2600}", "\u{2600}", "\u{2600}", 0, 18, 0, 0),
    ("\u{2601}", "\u{2601}", "\u{2601}", "\u{2601}", 0, 18, 0, 0),
    ("\u{2602}", "\u{2602}", "\u{2602}", "\u{2602}", 0, 18, 0, 0),
    ("\u{2603}", "\u{2603}", "\u{2603}", "\u{2603}", 0, 18, 0, 0),
    ("\u{2604}", "\u{2604}", "\u{2604}", "\u{2604}", 0, 18, 0, 0),
    ("\u{2605}", "\u{2605}", "\u{2605}", "\u{2605}", 0, 18, 0, 0),
    ("\u{2606}", "\u{2606}", "\u{2606}", "\u{2606}", 0, 18, 0, 0),
    ("\u{2607}", "\u{2607}", "\u{2607}", "\u{2607}", 0, 18, 0, 0),
    ("\u{2608}", "\u{2608}", "\u{2608}", "\u{2608}", 0, 18, 0, 0),
    ("\u{2609}", "\u{2609}", "\u{2609}", "\u{2609}", 0, 18, 0, 0),
    ("\u{260A}", "\u{260A}", "\u{260A}", "\u{260A}", 0, 18, 0, 0),
    ("\u{260B}", "\u{260B}", "\u{260B}", "\u{260B}", 0, 18, 0, 0),
    ("\u{260C}", "\u{260C}", "\u{260C}", "\u{260C}", 0, 18, 0, 0),
    ("\u{260D}", "\u{260D}", "\u{260D}", "\u{260D}", 0, 18, 0, 0),
    ("\u{260E}", "\u{260E}", "\u{260E}", "\u{260E}", 0, 18, 0, 0),
    ("\u{260F}", "\u{260F}", "\u{260F}", "\u{260F}", 0, 18, 0, 0),
    ("\u{2610}", "\u{2610}", "\u{2610}", "\u{2610}", 0, 18, 0, 0),
    ("\u{2611}", "\u{2611}", "\u{2611}", "\u{2611}", 0, 18, 0, 0),
    ("\u{2612}", "\u{2612}", "\u{2612}", "\u{2612}", 0, 18, 0, 0),
    ("\u{2613}", "\u{2613}", "\u{2613}", "\u{2613}", 0, 18, 0, 0),
    ("\u{2614}", "\u{2614}", "\u{2614}", "\u{2614}", 0, 18, 0, 0),
    ("\u{2615}", "\u{2615}", "\u{2615}", "\u{2615}", 0, 18, 0, 0),
    ("\u{2616}", "\u{2616}", "\u{2616}", "\u{2616}", 0, 18, 0, 0),
    ("\u{2617}", "\u{2617}", "\u{2617}", "\u{2617}", 0, 18, 0, 0),
    ("\u{2618}", "\u{2618}", "\u{2618}", "\u{2618}", 0, 18, 0, 0),
    ("\u{2619}", "\u{2619}", "\u{2619}", "\u{2619}", 0, 18, 0, 0),
    ("\u{261A}", "\u{261A}", "\u{261A}", "\u{261A}", 0, 18, 0, 0),
    ("\u{261B}", "\u{261B}", "\u{261B}", "\u{261B}", 0, 18, 0, 0),
    ("\u{261C}", "\u{261C}", "\u{261C}", "\u{261C}", 0, 18, 0, 0),
    ("\u{261D}", "\u{261D}", "\u{261D}", "\u{261D}", 0, 18, 0, 0),
    ("\u{261E}", "\u{261E}", "\u{261E}", "\u{261E}", 0, 18, 0, 0),
    ("\u{261F}", "\u{261F}", "\u{261F}", "\u{261F}", 0, 18, 0, 0),
    ("\u{2620}", "\u{2620}", "\u{2620}", "\u{2620}", 0, 18, 0, 0),
    ("\u{2621}", "\u{2621}", "\u{2621}", "\u{2621}", 0, 18, 0, 0),
    ("\u{2622}", "\u{2622}", "\u{2622}", "\u{2622}", 0, 18, 0, 0),
    ("\u{2623}", "\u{2623}", "\u{2623}", "\u{2623}", 0, 18, 0, 0),
    ("\u{2624}", "\u{2624}", "\u{2624}", "\u{2624}", 0, 18, 0, 0),
    ("\u{2625}", "\u{2625}", "\u{2625}", "\u{2625}", 0, 18, 0, 0),
    ("\u{2626}", "\u{2626}", "\u{2626}", "\u{2626}", 0, 18, 0, 0),
    ("\u{2627}", "\u{2627}", "\u{2627}", "\u{2627}", 0, 18, 0, 0),
    ("\u{2628}", "\u{2628}", "\u{2628}", "\u{2628}", 0, 18, 0, 0),
    ("\u{2629}", "\u{2629}", "\u{2629}", "\u{2629}", 0, 18, 0, 0),
    ("\u{262A}", "\u{262A}", "\u{262A}", "\u{262A}", 0, 18, 0, 0),
    ("\u{262B}", "\u{262B}", "\u{262B}", "\u{262B}", 0, 18, 0, 0),
    ("\u{262C}", "\u{262C}", "\u{262C}", "\u{262C}", 0, 18, 0, 0),
    ("\u{262D}", "\u{262D}", "\u{262D}", "\u{262D}", 0, 18, 0, 0),
    ("\u{262E}", "\u{262E}", "\u{262E}", "\u{262E}", 0, 18, 0, 0),
    ("\u{262F}", "\u{262F}", "\u{262F}", "\u{262F}", 0, 18, 0, 0),
    ("\u{2630}", "\u{2630}", "\u{2630}", "\u{2630}", 0, 18, 0, 0),
    ("\u{2631}", "\u{2631}", "\u{2631}", "\u{2631}", 0, 18, 0, 0),
    ("\u{2632}", "\u{2632}", "\u{2632}", "\u{2632}", 0, 18, 0, 0),
    ("\u{2633}", "\u{2633}", "\u{2633}", "\u{2633}", 0, 18, 0, 0),
    ("\u{2634}", "\u{2634}", "\u{2634}", "\u{2634}", 0, 18, 0, 0),
    ("\u{2635}", "\u{2635}", "\u{2635}", "\u{2635}", 0, 18, 0, 0),
    ("\u{2636}", "\u{2636}", "\u{2636}", "\u{2636}", 0, 18, 0, 0),
    ("\u{2637}", "\u{2637}", "\u{2637}", "\u{2637}", 0, 18, 0, 0),
    ("\u{2638}", "\u{2638}", "\u{2638}", "\u{2638}", 0, 18, 0, 0),
    ("\u{2639}", "\u{2639}", "\u{2639}", "\u{2639}", 0, 18, 0, 0),
    ("\u{263A}", "\u{263A}", "\u{263A}", "\u{263A}", 0, 18, 0, 0),
    ("\u{263B}", "\u{263B}", "\u{263B}", "\u{263B}", 0, 18, 0, 0),
    ("\u{263C}", "\u{263C}", "\u{263C}", "\u{263C}", 0, 18, 0, 0),
    ("\u{263D}", "\u{263D}", "\u{263D}", "\u{263D}", 0, 18, 0, 0),
    ("\u{263E}", "\u{263E}", "\u{263E}", "\u{263E}", 0, 18, 0, 0),
    ("\u{263F}", "\u{263F}", "\u{263F}", "\u{263F}", 0, 18, 0, 0),
    ("\u{2640}", "\u{2640}", "\u{2640}", "\u{2640}", 0, 18, 0, 0),
    ("\u{2641}", "\u{2641}", "\u{2641}", "\u{2641}", 0, 18, 0, 0),
    ("\u{2642}", "\u{2642}", "\u{2642}", "\u{2642}", 0, 18, 0, 0),
    ("\u{2643}", "\u{2643}", "\u{2643}", "\u{2643}", 0, 18, 0, 0),
    ("\u{2644}", "\u{2644}", "\u{2644}", "\u{2644}", 0, 18, 0, 0),
    ("\u{2645}", "\u{2645}", "\u{2645}", "\u{2645}", 0, 18, 0, 0),
    ("\u{2646}", "\u{2646}", "\u{2646}", "\u{2646}", 0, 18, 0, 0),
    ("\u{2647}", "\u{2647}", "\u{2647}", "\u{2647}", 0, 18, 0, 0),
    ("\u{2648}", "\u{2648}", "\u{2648}", "\u{2648}", 0, 18, 0, 0),
    ("\u{2649}", "\u{2649}", "\u{2649}", "\u{2649}", 0, 18, 0, 0),
    ("\u{264A}", "\u{264A}", "\u{264A}", "\u{264A}", 0, 18, 0, 0),
    ("\u{264B}", "\u{264B}", "\u{264B}", "\u{264B}", 0, 18, 0, 0),
    ("\u{264C}", "\u{264C}", "\u{264C}", "\u{264C}", 0, 18, 0, 0),
    ("\u{264D}", "\u{264D}", "\u{264D}", "\u{264D}", 0, 18, 0, 0),
    ("\u{264E}", "\u{264E}", "\u{264E}", "\u{264E}", 0, 18, 0, 0),
    ("\u{264F}", "\u{264F}", "\u{264F}", "\u{264F}", 0, 18, 0, 0),
    ("\u{2650}", "\u{2650}", "\u{2650}", "\u{2650}", 0, 18, 0, 0),
    ("\u{2651}", "\u{2651}", "\u{2651}", "\u{2651}", 0, 18, 0, 0),
    ("\u{2652}", "\u{2652}", "\u{2652}", "\u{2652}", 0, 18, 0, 0),
    ("\u{2653}", "\u{2653}", "\u{2653}", "\u{2653}", 0, 18, 0, 0),
    ("\u{2654}", "\u{2654}", "\u{2654}", "\u{2654}", 0, 18, 0, 0),
    ("\u{2655}", "\u{2655}", "\u{2655}", "\u{2655}", 0, 18, 0, 0),
    ("\u{2656}", "\u{2656}", "\u{2656}", "\u{2656}", 0, 18, 0, 0),
    ("\u{2657}", "\u{2657}", "\u{2657}", "\u{2657}", 0, 18, 0, 0),
    ("\u{2658}", "\u{2658}", "\u{2658}", "\u{2658}", 0, 18, 0, 0),
    ("\u{2659}", "\u{2659}", "\u{2659}", "\u{2659}", 0, 18, 0, 0),
    ("\u{265A}", "\u{265A}", "\u{265A}", "\u{265A}", 0, 18, 0, 0),
    ("\u{265B}", "\u{265B}", "\u{265B}", "\u{265B}", 0, 18, 0, 0),
    ("\u{265C}", "\u{265C}", "\u{265C}", "\u{265C}", 0, 18, 0, 0),
    ("\u{265D}", "\u{265D}", "\u{265D}", "\u{265D}", 0, 18, 0, 0),
    ("\u{265E}", "\u{265E}", "\u{265E}", "\u{265E}", 0, 18, 0, 0),
    ("\u{265F}", "\u{265F}", "\u{265F}", "\u{265F}", 0, 18, 0, 0),
    ("\u{2660}", "\u{2660}", "\u{2660}", "\u{2660}", 0, 18, 0, 0),
    ("\u{2661}", "\u{2661}", "\u{2661}", "\u{2661}", 0, 18, 0, 0),
    ("\u{2662}", "\u{2662}", "\u{2662}", "\u{2662}", 0, 18, 0, 0),
    ("\u{2663}", "\u{2663}", "\u{2663}", "\u{2663}", 0, 18, 0, 0),
    ("\u{2664}", "\u{2664}", "\u{2664}", "\u{2664}", 0, 18, 0, 0),
    ("\u{2665}", "\u{2665}", "\u{2665}", "\u{2665}", 0, 18, 0, 0),
    ("\u{2666}", "\u{2666}", "\u{2666}", "\u{2666}", 0, 18, 0, 0),
    ("\u{2667}", "\u{2667}", "\u{2667}", "\u{2667}", 0, 18, 0, 0),
    ("\u{2668}", "\u{2668}", "\u{2668}", "\u{2668}", 0, 18, 0, 0),
    ("\u{2669}", "\u{2669}", "\u{2669}", "\u{2669}", 0, 18, 0, 0),
    ("\u{266A}", "\u{266A}", "\u{266A}", "\u{266A}", 0, 18, 0, 0),
    ("\u{266B}", "\u{266B}", "\u{266B}", "\u{266B}", 0, 18, 0, 0),
    ("\u{266C}", "\u{266C}", "\u{266C}", "\u{266C}", 0, 18, 0, 0),
    ("\u{266D}", "\u{266D}", "\u{266D}", "\u{266D}", 0, 18, 0, 0),
    ("\u{266E}", "\u{266E}", "\u{266E}", "\u{266E}", 0, 18, 0, 0),
    ("\u{266F}", "\u{266F}", "\u{266F}", "\u{266F}", 0, 18, 0, 0),
    ("\u{2670}", "\u{2670}", "\u{2670}", "\u{2670}", 0, 18, 0, 0),
    ("\u{2671}", "\u{2671}", "\u{2671}", "\u{2671}", 0, 18, 0, 0),
    ("\u{2672}", "\u{2672}", "\u{2672}", "\u{2672}", 0, 18, 0, 0),
    ("\u{2673}", "\u{2673}", "\u{2673}", "\u{2673}", 0, 18, 0, 0),
    ("\u{2674}", "\u{2674}", "\u{2674}", "\u{2674}", 0, 18, 0, 0),
    ("\u{2675}", "\u{2675}", "\u{2675}", "\u{2675}", 0, 18, 0, 0),
    ("\u{2676}", "\u{2676}", "\u{2676}", "\u{2676}", 0, 18, 0, 0),
    ("\u{2677}", "\u{2677}", "\u{2677}", "\u{2677}", 0, 18, 0, 0),
    ("\u{2678}", "\u{2678}", "\u{2678}", "\u{2678}", 0, 18, 0, 0),
    ("\u{2679}", "\u{2679}", "\u{2679}", "\u{2679}", 0, 18, 0, 0),
    ("\u{267A}", "\u{267A}", "\u{267A}", "\u{267A}", 0, 18, 0, 0),
    ("\u{267B}", "\u{267B}", "\u{267B}", "\u{267B}", 0, 18, 0, 0),
    ("\u{267C}", "\u{267C}", "\u{267C}", "\u{267C}", 0, 18, 0, 0),
    ("\u{267D}", "\u{267D}", "\u{267D}", "\u{267D}", 0, 18, 0, 0),
    ("\u{267E}", "\u{267E}", "\u{267E}", "\u{267E}", 0, 18, 0, 0),
    ("\u{267F}", "\u{267F}", "\u{267F}", "\u{267F}", 0, 18, 0, 0),
    ("\u{2680}", "\u{2680}", "\u{2680}", "\u{2680}", 0, 18, 0, 0),
    ("\u{2681}", "\u{2681}", "\u{2681}", "\u{2681}", 0, 18, 0, 0),
    ("\u{2682}", "\u{2682}", "\u{2682}", "\u{2682}", 0, 18, 0, 0),
    ("\u{2683}", "\u{2683}", "\u{2683}", "\u{2683}", 0, 18, 0, 0),
    ("\u{2684}", "\u{2684}", "\u{2684}", "\u{2684}", 0, 18, 0, 0),
    ("\u{2685}", "\u{2685}", "\u{2685}", "\u{2685}", 0, 18, 0, 0),
    ("\u{2686}", "\u{2686}", "\u{2686}", "\u{2686}", 0, 18, 0, 0),
    ("\u{2687}", "\u{2687}", "\u{2687}", "\u{2687}", 0, 18, 0, 0),
    ("\u{2688}", "\u{2688}", "\u{2688}", "\u{2688}", 0, 18, 0, 0),
    ("\u{2689}", "\u{2689}", "\u{2689}", "\u{2689}", 0, 18, 0, 0),
    ("\u{268A}", "\u{268A}", "\u{268A}", "\u{268A}", 0, 18, 0, 0),
    ("\u{268B}", "\u{268B}", "\u{268B}", "\u{268B}", 0, 18, 0, 0),
    ("\u{268C}", "\u{268C}", "\u{268C}", "\u{268C}", 0, 18, 0, 0),
    ("\u{268D}", "\u{268D}", "\u{268D}", "\u{268D}", 0, 18, 0, 0),
    ("\u{268E}", "\u{268E}", "\u{268E}", "\u{268E}", 0, 18, 0, 0),
    ("\u{268F}", "\u{268F}", "\u{268F}", "\u{268F}", 0, 18, 0, 0),
    ("\u{2690}", "\u{2690}", "\u{2690}", "\u{2690}", 0, 18, 0, 0),
    ("\u{2691}", "\u{2691}", "\u{2691}", "\u{2691}", 0, 18, 0, 0),
    ("\u{2692}", "\u{2692}", "\u{2692}", "\u{2692}", 0, 18, 0, 0),
    ("\u{2693}", "\u{2693}", "\u{2693}", "\u{2693}", 0, 18, 0, 0),
    ("\u{2694}", "\u{2694}", "\u{2694}", "\u{2694}", 0, 18, 0, 0),
    ("\u{2695}", "\u{2695}", "\u{2695}", "\u{2695}", 0, 18, 0, 0),
    ("\u{2696}", "\u{2696}", "\u{2696}", "\u{2696}", 0, 18, 0, 0),
    ("\u{2697}", "\u{2697}", "\u{2697}", "\u{2697}", 0, 18, 0, 0),
    ("\u{2698}", "\u{2698}", "\u{2698}", "\u{2698}", 0, 18, 0, 0),
    ("\u{2699}", "\u{2699}", "\u{2699}", "\u{2699}", 0, 18, 0, 0),
    ("\u{269A}", "\u{269A}", "\u{269A}", "\u{269A}", 0, 18, 0, 0),
    ("\u{269B}", "\u{269B}", "\u{269B}", "\u{269B}", 0, 18, 0, 0),
    ("\u{269C}", "\u{269C}", "\u{269C}", "\u{269C}", 0, 18, 0, 0),
    ("\u{269D}", "\u{269D}", "\u{269D}", "\u{269D}", 0, 18, 0, 0),
    ("\u{269E}", "\u{269E}", "\u{269E}", "\u{269E}", 0, 18, 0, 0),
    ("\u{269F}", "\u{269F}", "\u{269F}", "\u{269F}", 0, 18, 0, 0),
    ("\u{26A0}", "\u{26A0}", "\u{26A0}", "\u{26A0}", 0, 18, 0, 0),
    ("\u{26A1}", "\u{26A1}", "\u{26A1}", "\u{26A1}", 0, 18, 0, 0),
    ("\u{26A2}", "\u{26A2}", "\u{26A2}", "\u{26A2}", 0, 18, 0, 0),
    ("\u{26A3}", "\u{26A3}", "\u{26A3}", "\u{26A3}", 0, 18, 0, 0),
    ("\u{26A4}", "\u{26A4}", "\u{26A4}", "\u{26A4}", 0, 18, 0, 0),
    ("\u{26A5}", "\u{26A5}", "\u{26A5}", "\u{26A5}", 0, 18, 0, 0),
    ("\u{26A6}", "\u{26A6}", "\u{26A6}", "\u{26A6}", 0, 18, 0, 0),
    ("\u{26A7}", "\u{26A7}", "\u{26A7}", "\u{26A7}", 0, 18, 0, 0),
    ("\u{26A8}", "\u{26A8}", "\u{26A8}", "\u{26A8}", 0, 18, 0, 0),
    ("\u{26A9}", "\u{26A9}", "\u{26A9}", "\u{26A9}", 0, 18, 0, 0),
    ("\u{26AA}", "\u{26AA}", "\u{26AA}", "\u{26AA}", 0, 18, 0, 0),
    ("\u{26AB}", "\u{26AB}", "\u{26AB}", "\u{26AB}", 0, 18, 0, 0),
    ("\u{26AC}", "\u{26AC}", "\u{26AC}", "\u{26AC}", 0, 18, 0, 0),
    ("\u{26AD}", "\u{26AD}", "\u{26AD}", "\u{26AD}", 0, 18, 0, 0),
    ("\u{26AE}", "\u{26AE}", "\u{26AE}", "\u{26AE}", 0, 18, 0, 0),
    ("\u{26AF}", "\u{26AF}", "\u{26AF}", "\u{26AF}", 0, 18, 0, 0),
    ("\u{26B0}", "\u{26B0}", "\u{26B0}", "\u{26B0}", 0, 18, 0, 0),
    ("\u{26B1}", "\u{26B1}", "\u{26B1}", "\u{26B1}", 0, 18, 0, 0),
    ("\u{26B2}", "\u{26B2}", "\u{26B2}", "\u{26B2}", 0, 18, 0, 0),
    ("\u{26B3}", "\u{26B3}", "\u{26B3}", "\u{26B3}", 0, 18, 0, 0),
    ("\u{26B4}", "\u{26B4}", "\u{26B4}", "\u{26B4}", 0, 18, 0, 0),
    ("\u{26B5}", "\u{26B5}", "\u{26B5}", "\u{26B5}", 0, 18, 0, 0),
    ("\u{26B6}", "\u{26B6}", "\u{26B6}", "\u{26B6}", 0, 18, 0, 0),
    ("\u{26B7}", "\u{26B7}", "\u{26B7}", "\u{26B7}", 0, 18, 0, 0),
    ("\u{26B8}", "\u{26B8}", "\u{26B8}", "\u{26B8}", 0, 18, 0, 0),
    ("\u{26B9}", "\u{26B9}", "\u{26B9}", "\u{26B9}", 0, 18, 0, 0),
    ("\u{26BA}", "\u{26BA}", "\u{26BA}", "\u{26BA}", 0, 18, 0, 0),
    ("\u{26BB}", "\u{26BB}", "\u{26BB}", "\u{26BB}", 0, 18, 0, 0),
    ("\u{26BC}", "\u{26BC}", "\u{26BC}", "\u{26BC}", 0, 18, 0, 0),
    ("\u{26BD}", "\u{26BD}", "\u{26BD}", "\u{26BD}", 0, 18, 0, 0),
    ("\u{26BE}", "\u{26BE}", "\u{26BE}", "\u{26BE}", 0, 18, 0, 0),
    ("\u{26BF}", "\u{26BF}", "\u{26BF}", "\u{26BF}", 0, 18, 0, 0),
    ("\u{26C0}", "\u{26C0}", "\u{26C0}", "\u{26C0}", 0, 18, 0, 0),
    ("\u{26C1}", "\u{26C1}", "\u{26C1}", "\u{26C1}", 0, 18, 0, 0),
    ("\u{26C2}", "\u{26C2}", "\u{26C2}", "\u{26C2}", 0, 18, 0, 0),
    ("\u{26C3}", "\u{26C3}", "\u{26C3}", "\u{26C3}", 0, 18, 0, 0),
    ("\u{26C4}", "\u{26C4}", "\u{26C4}", "\u{26C4}", 0, 18, 0, 0),
    ("\u{26C5}", "\u{26C5}", "\u{26C5}", "\u{26C5}", 0, 18, 0, 0),
    ("\u{26C6}", "\u{26C6}", "\u{26C6}", "\u{26C6}", 0, 18, 0, 0),
    ("\u{26C7}", "\u{26C7}", "\u{26C7}", "\u{26C7}", 0, 18, 0, 0),
    ("\u{26C8}", "\u{26C8}", "\u{26C8}", "\u{26C8}", 0, 18, 0, 0),
    ("\u{26C9}", "\u{26C9}", "\u{26C9}", "\u{26C9}", 0, 18, 0, 0),
    ("\u{26CA}", "\u{26CA}", "\u{26CA}", "\u{26CA}", 0, 18, 0, 0),
    ("\u{26CB}", "\u{26CB}", "\u{26CB}", "\u{26CB}", 0, 18, 0, 0),
    ("\u{26CC}", "\u{26CC}", "\u{26CC}", "\u{26CC}", 0, 18, 0, 0),
    ("\u{26CD}", "\u{26CD}", "\u{26CD}", "\u{26CD}", 0, 18, 0, 0),
    ("\u{26CE}", "\u{26CE}", "\u{26CE}", "\u{26CE}", 0, 18, 0, 0),
    ("\u{26CF}", "\u{26CF}", "\u{26CF}", "\u{26CF}", 0, 18, 0, 0),
    ("\u{26D0}", "\u{26D0}", "\u{26D0}", "\u{26D0}", 0, 18, 0, 0),
    ("\u{26D1}", "\u{26D1}", "\u{26D1}", "\u{26D1}", 0, 18, 0, 0),
    ("\u{26D2}", "\u{26D2}", "\u{26D2}", "\u{26D2}", 0, 18, 0, 0),
    ("\u{26D3}", "\u{26D3}", "\u{26D3}", "\u{26D3}", 0, 18, 0, 0),
    ("\u{26D4}", "\u{26D4}", "\u{26D4}", "\u{26D4}", 0, 18, 0, 0),
    ("\u{26D5}", "\u{26D5}", "\u{26D5}", "\u{26D5}", 0, 18, 0, 0),
    ("\u{26D6}", "\u{26D6}", "\u{26D6}", "\u{26D6}", 0, 18, 0, 0),
    ("\u{26D7}", "\u{26D7}", "\u{26D7}", "\u{26D7}", 0, 18, 0, 0),
    ("\u{26D8}", "\u{26D8}", "\u{26D8}", "\u{26D8}", 0, 18, 0, 0),
    ("\u{26D9}", "\u{26D9}", "\u{26D9}", "\u{26D9}", 0, 18, 0, 0),
    ("\u{26DA}", "\u{26DA}", "\u{26DA}", "\u{26DA}", 0, 18, 0, 0),
    ("\u{26DB}", "\u{26DB}", "\u{26DB}", "\u{26DB}", 0, 18, 0, 0),
    ("\u{26DC}", "\u{26DC}", "\u{26DC}", "\u{26DC}", 0, 18, 0, 0),
    ("\u{26DD}", "\u{26DD}", "\u{26DD}", "\u{26DD}", 0, 18, 0, 0),
    ("\u{26DE}", "\u{26DE}", "\u{26DE}", "\u{26DE}", 0, 18, 0, 0),
    ("\u{26DF}", "\u{26DF}", "\u{26DF}", "\u{26DF}", 0, 18, 0, 0),
    ("\u{26E0}", "\u{26E0}", "\u{26E0}", "\u{26E0}", 0, 18, 0, 0),
    ("\u{26E1}", "\u{26E1}", "\u{26E1}", "\u{26E1}", 0, 18, 0, 0),
    ("\u{26E2}", "\u{26E2}", "\u{26E2}", "\u{26E2}", 0, 18, 0, 0),
    ("\u{26E3}", "\u{26E3}", "\u{26E3}", "\u{26E3}", 0, 18, 0, 0),
    ("\u{26E4}", "\u{26E4}", "\u{26E4}", "\u{26E4}", 0, 18, 0, 0),
    ("\u{26E5}", "\u{26E5}", "\u{26E5}", "\u{26E5}", 0, 18, 0, 0),
    ("\u{26E6}", "\u{26E6}", "\u{26E6}", "\u{26E6}", 0, 18, 0, 0),
    ("\u{26E7}", "\u{26E7}", "\u{26E7}", "\u{26E7}", 0, 18, 0, 0),
    ("\u{26E8}", "\u{26E8}", "\u{26E8}", "\u{26E8}", 0, 18, 0, 0),
    ("\u{26E9}", "\u{26E9}", "\u{26E9}", "\u{26E9}", 0, 18, 0, 0),
    ("\u{26EA}", "\u{26EA}", "\u{26EA}", "\u{26EA}", 0, 18, 0, 0),
    ("\u{26EB}", "\u{26EB}", "\u{26EB}", "\u{26EB}", 0, 18, 0, 0),
    ("\u{26EC}", "\u{26EC}", "\u{26EC}", "\u{26EC}", 0, 18, 0, 0),
    ("\u{26ED}", "\u{26ED}", "\u{26ED}", "\u{26ED}", 0, 18, 0, 0),
    ("\u{26EE}", "\u{26EE}", "\u{26EE}", "\u{26EE}", 0, 18, 0, 0),
    ("\u{26EF}", "\u{26EF}", "\u{26EF}", "\u{26EF}", 0, 18, 0, 0),
    ("\u{26F0}", "\u{26F0}", "\u{26F0}", "\u{26F0}", 0, 18, 0, 0),
    ("\u{26F1}", "\u{26F1}", "\u{26F1}", "\u{26F1}", 0, 18, 0, 0),
    ("\u{26F2}", "\u{26F2}", "\u{26F2}", "\u{26F2}", 0, 18, 0, 0),
    ("\u{26F3}", "\u{26F3}", "\u{26F3}", "\u{26F3}", 0, 18, 0, 0),
    ("\u{26F4}", "\u{26F4}", "\u{26F4}", "\u{26F4}", 0, 18, 0, 0),
    ("\u{26F5}", "\u{26F5}", "\u{26F5}", "\u{26F5}", 0, 18, 0, 0),
    ("\u{26F6}", "\u{26F6}", "\u{26F6}", "\u{26F6}", 0, 18, 0, 0),
    ("\u{26F7}", "\u{26F7}", "\u{26F7}", "\u{26F7}", 0, 18, 0, 0),
    ("\u{26F8}", "\u{26F8}", "\u{26F8}", "\u{26F8}", 0, 18, 0, 0),
    ("\u{26F9}", "\u{26F9}", "\u{26F9}", "\u{26F9}", 0, 18, 0, 0),
    ("\u{26FA}", "\u{26FA}", "\u{26FA}", "\u{26FA}", 0, 18, 0, 0),
    ("\u{26FB}", "\u{26FB}", "\u{26FB}", "\u{26FB}", 0, 18, 0, 0),
    ("\u{26FC}", "\u{26FC}", "\u{26FC}", "\u{26FC}", 0, 18, 0, 0),
    ("\u{26FD}", "\u{26FD}", "\u{26FD}", "\u{26FD}", 0, 18, 0, 0),
    ("\u{26FE}", "\u{26FE}", "\u{26FE}", "\u{26FE}", 0, 18, 0, 0),
    ("\u{26FF}", "\u{26FF}", "\u{26FF}", "\u{26FF}", 0, 18, 0, 0),
    ("\u{2700}", "\u{2700}", "\u{2700}", "\u{2700}", 0, 18, 0, 0),
    ("\u{2701}", "\u{2701}", "\u{2701}", "\u{2701}", 0, 18, 0, 0),
    ("\u{2702}", "\u{2702}", "\u{2702}", "\u{2702}", 0, 18, 0, 0),
    ("\u{2703}", "\u{2703}", "\u{2703}", "\u{2703}", 0, 18, 0, 0),
    ("\u{2704}", "\u{2704}", "\u{2704}", "\u{2704}", 0, 18, 0, 0),
    ("\u{2705}", "\u{2705}", "\u{2705}", "\u{2705}", 0, 18, 0, 0),
    ("\u{2706}", "\u{2706}", "\u{2706}", "\u{2706}", 0, 18, 0, 0),
    ("\u{2707}", "\u{2707}", "\u{2707}", "\u{2707}", 0, 18, 0, 0),
    ("\u{2708}", "\u{2708}", "\u{2708}", "\u{2708}", 0, 18, 0, 0),
    ("\u{2709}", "\u{2709}", "\u{2709}", "\u{2709}", 0, 18, 0, 0),
    ("\u{270A}", "\u{270A}", "\u{270A}", "\u{270A}", 0, 18, 0, 0),
    ("\u{270B}", "\u{270B}", "\u{270B}", "\u{270B}", 0, 18, 0, 0),
    ("\u{270C}", "\u{270C}", "\u{270C}", "\u{270C}", 0, 18, 0, 0),
    ("\u{270D}", "\u{270D}", "\u{270D}", "\u{270D}", 0, 18, 0, 0),
    ("\u{270E}", "\u{270E}", "\u{270E}", "\u{270E}", 0, 18, 0, 0),
    ("\u{270F}", "\u{270F}", "\u{270F}", "\u{270F}", 0, 18, 0, 0),
    ("\u{2710}", "\u{2710}", "\u{2710}", "\u{2710}", 0, 18, 0, 0),
    ("\u{2711}", "\u{2711}", "\u{2711}", "\u{2711}", 0, 18, 0, 0),
    ("\u{2712}", "\u{2712}", "\u{2712}", "\u{2712}", 0, 18, 0, 0),
    ("\u{2713}", "\u{2713}", "\u{2713}", "\u{2713}", 0, 18, 0, 0),
    ("\u{2714}", "\u{2714}", "\u{2714}", "\u{2714}", 0, 18, 0, 0),
    ("\u{2715}", "\u{2715}", "\u{2715}", "\u{2715}", 0, 18, 0, 0),
    ("\u{2716}", "\u{2716}", "\u{2716}", "\u{2716}", 0, 18, 0, 0),
    ("\u{2717}", "\u{2717}", "\u{2717}", "\u{2717}", 0, 18, 0, 0),
    ("\u{2718}", "\u{2718}", "\u{2718}", "\u{2718}", 0, 18, 0, 0),
    ("\u{2719}", "\u{2719}", "\u{2719}", "\u{2719}", 0, 18, 0, 0),
    ("\u{271A}", "\u{271A}", "\u{271A}", "\u{271A}", 0, 18, 0, 0),
    ("\u{271B}", "\u{271B}", "\u{271B}", "\u{271B}", 0, 18, 0, 0),
    ("\u{271C}", "\u{271C}", "\u{271C}", "\u{271C}", 0, 18, 0, 0),
    ("\u{271D}", "\u{271D}", "\u{271D}", "\u{271D}", 0, 18, 0, 0),
    ("\u{271E}", "\u{271E}", "\u{271E}", "\u{271E}", 0, 18, 0, 0),
    ("\u{271F}", "\u{271F}", "\u{271F}", "\u{271F}", 0, 18, 0, 0),
    ("\u{2720}", "\u{2720}", "\u{2720}", "\u{2720}", 0, 18, 0, 0),
    ("\u{2721}", "\u{2721}", "\u{2721}", "\u{2721}", 0, 18, 0, 0),
    ("\u{2722}", "\u{2722}", "\u{2722}", "\u{2722}", 0, 18, 0, 0),
    ("\u{2723}", "\u{2723}", "\u{2723}", "\u{2723}", 0, 18, 0, 0),
    ("\u{2724}", "\u{2724}", "\u{2724}", "\u{2724}", 0, 18, 0, 0),
    ("\u{2725}", "\u{2725}", "\u{2725}", "\u{2725}", 0, 18, 0, 0),
    ("\u{2726}", "\u{2726}", "\u{2726}", "\u{2726}", 0, 18, 0, 0),
    ("\u{2727}", "\u{2727}", "\u{2727}", "\u{2727}", 0, 18, 0, 0),
    ("\u{2728}", "\u{2728}", "\u{2728}", "\u{2728}", 0, 18, 0, 0),
    ("\u{2729}", "\u{2729}", "\u{2729}", "\u{2729}", 0, 18, 0, 0),
    ("\u{272A}", "\u{272A}", "\u{272A}", "\u{272A}", 0, 18, 0, 0),
    ("\u{272B}", "\u{272B}", "\u{272B}", "\u{272B}", 0, 18, 0, 0),
    ("\u{272C}", "\u{272C}", "\u{272C}", "\u{272C}", 0, 18, 0, 0),
    ("\u{272D}", "\u{272D}", "\u{272D}", "\u{272D}", 0, 18, 0, 0),
    ("\u{272E}", "\u{272E}", "\u{272E}", "\u{272E}", 0, 18, 0, 0),
    ("\u{272F}", "\u{272F}", "\u{272F}", "\u{272F}", 0, 18, 0, 0),
    ("\u{2730}", "\u{2730}", "\u{2730}", "\u{2730}", 0, 18, 0, 0),
    ("\u{2731}", "\u{2731}", "\u{2731}", "\u{2731}", 0, 18, 0, 0),
    ("\u{2732}", "\u{2732}", "\u{2732}", "\u{2732}", 0, 18, 0, 0),
    ("\u{2733}", "\u{2733}", "\u{2733}", "\u{2733}", 0, 18, 0, 0),
    ("\u{2734}", "\u{2734}", "\u{2734}", "\u{2734}", 0, 18, 0, 0),
    ("\u{2735}", "\u{2735}", "\u{2735}", "\u{2735}", 0, 18, 0, 0),
    ("\u{2736}", "\u{2736}", "\u{2736}", "\u{2736}", 0, 18, 0, 0),
    ("\u{2737}", "\u{2737}", "\u{2737}", "\u{2737}", 0, 18, 0, 0),
    ("\u{2738}", "\u{2738}", "\u{2738}", "\u{2738}", 0, 18, 0, 0),
    ("\u{2739}", "\u{2739}", "\u{2739}", "\u{2739}", 0, 18, 0, 0),
    ("\u{273A}", "\u{273A}", "\u{273A}", "\u{273A}", 0, 18, 0, 0),
    ("\u{273B}", "\u{273B}", "\u{273B}", "\u{273B}", 0, 18, 0, 0),
    ("\u{273C}", "\u{273C}", "\u{273C}", "\u{273C}", 0, 18, 0, 0),
    ("\u{273D}", "\u{273D}", "\u{273D}", "\u{273D}", 0, 18, 0, 0),
    ("\u{273E}", "\u{273E}", "\u{273E}", "\u{273E}", 0, 18, 0, 0),
    ("\u{273F}", "\u{273F}", "\u{273F}", "\u{273F}", 0, 18, 0, 0),
    ("\u{2740}", "\u{2740}", "\u{2740}", "\u{2740}", 0, 18, 0, 0),
    ("\u{2741}", "\u{2741}", "\u{2741}", "\u{2741}", 0, 18, 0, 0),
    ("\u{2742}", "\u{2742}", "\u{2742}", "\u{2742}", 0, 18, 0, 0),
    ("\u{2743}", "\u{2743}", "\u{2743}", "\u{2743}", 0, 18, 0, 0),
    ("\u{2744}", "\u{2744}", "\u{2744}", "\u{2744}", 0, 18, 0, 0),
    ("\u{2745}", "\u{2745}", "\u{2745}", "\u{2745}", 0, 18, 0, 0),
    ("\u{2746}", "\u{2746}", "\u{2746}", "\u{2746}", 0, 18, 0, 0),
    ("\u{2747}", "\u{2747}", "\u{2747}", "\u{2747}", 0, 18, 0, 0),
    ("\u{2748}", "\u{2748}", "\u{2748}", "\u{2748}", 0, 18, 0, 0),
    ("\u{2749}", "\u{2749}", "\u{2749}", "\u{2749}", 0, 18, 0, 0),
    ("\u{274A}", "\u{274A}", "\u{274A}", "\u{274A}", 0, 18, 0, 0),
    ("\u{274B}", "\u{274B}", "\u{274B}", "\u{274B}", 0, 18, 0, 0),
    ("\u{274C}", "\u{274C}", "\u{274C}", "\u{274C}", 0, 18, 0, 0),
    ("\u{274D}", "\u{274D}", "\u{274D}", "\u{274D}", 0, 18, 0, 0),
    ("\u{274E}", "\u{274E}", "\u{274E}", "\u{274E}", 0, 18, 0, 0),
    ("\u{274F}", "\u{274F}", "\u{274F}", "\u{274F}", 0, 18, 0, 0),
    ("\u{2750}", "\u{2750}", "\u{2750}", "\u{2750}", 0, 18, 0, 0),
    ("\u{2751}", "\u{2751}", "\u{2751}", "\u{2751}", 0, 18, 0, 0),
    ("\u{2752}", "\u{2752}", "\u{2752}", "\u{2752}", 0, 18, 0, 0),
    ("\u{2753}", "\u{2753}", "\u{2753}", "\u{2753}", 0, 18, 0, 0),
    ("\u{2754}", "\u{2754}", "\u{2754}", "\u{2754}", 0, 18, 0, 0),
    ("\u{2755}", "\u{2755}", "\u{2755}", "\u{2755}", 0, 18, 0, 0),
    ("\u{2756}", "\u{2756}", "\u{2756}", "\u{2756}", 0, 18, 0, 0),
    ("\u{2757}", "\u{2757}", "\u{2757}", "\u{2757}", 0, 18, 0, 0),
    ("\u{2758}", "\u{2758}", "\u{2758}", "\u{2758}", 0, 18, 0, 0),
    ("\u{2759}", "\u{2759}", "\u{2759}", "\u{2759}", 0, 18, 0, 0),
    ("\u{275A}", "\u{275A}", "\u{275A}", "\u{275A}", 0, 18, 0, 0),
    ("\u{275B}", "\u{275B}", "\u{275B}", "\u{275B}", 0, 18, 0, 0),
    ("\u{275C}", "\u{275C}", "\u{275C}", "\u{275C}", 0, 18, 0, 0),
    ("\u{275D}", "\u{275D}", "\u{275D}", "\u{275D}", 0, 18, 0, 0),
    ("\u{275E}", "\u{275E}", "\u{275E}", "\u{275E}", 0, 18, 0, 0),
    ("\u{275F}", "\u{275F}", "\u{275F}", "\u{275F}", 0, 18, 0, 0),
    ("\u{2760}", "\u{2760}", "\u{2760}", "\u{2760}", 0, 18, 0, 0),
    ("\u{2761}", "\u{2761}", "\u{2761}", "\u{2761}", 0, 18, 0, 0),
    ("\u{2762}", "\u{2762}", "\u{2762}", "\u{2762}", 0, 18, 0, 0),
    ("\u{2763}", "\u{2763}", "\u{2763}", "\u{2763}", 0, 18, 0, 0),
    ("\u{2764}", "\u{2764}", "\u{2764}", "\u{2764}", 0, 18, 0, 0),
    ("\u{2765}", "\u{2765}", "\u{2765}", "\u{2765}", 0, 18, 0, 0),
    ("\u{2766}", "\u{2766}", "\u{2766}", "\u{2766}", 0, 18, 0, 0),
    ("\u{2767}", "\u{2767}", "\u{2767}", "\u{2767}", 0, 18, 0, 0),
    ("\u{2768}", "\u{2768}", "\u{2768}", "\u{2768}", 2, 18, 0, 0),
    ("\u{2769}", "\u{2769}", "\u{2769}", "\u{2769}", 2, 18, 0, 0),
    ("\u{276A}", "\u{276A}", "\u{276A}", "\u{276A}", 2, 18, 0, 0),
    ("\u{276B}", "\u{276B}", "\u{276B}", "\u{276B}", 2, 18, 0, 0),
    ("\u{276C}", "\u{276C}", "\u{276C}", "\u{276C}", 2, 18, 0, 0),
    ("\u{276D}", "\u{276D}", "\u{276D}", "\u{276D}", 2, 18, 0, 0),
    ("\u{276E}", "\u{276E}", "\u{276E}", "\u{276E}", 2, 18, 0, 0),
    ("\u{276F}", "\u{276F}", "\u{276F}", "\u{276F}", 2, 18, 0, 0),
    ("\u{2770}", "\u{2770}", "\u{2770}", "\u{2770}", 2, 18, 0, 0),
    ("\u{2771}", "\u{2771}", "\u{2771}", "\u{2771}", 2, 18, 0, 0),
    ("\u{2772}", "\u{2772}", "\u{2772}", "\u{2772}", 2, 18, 0, 0),
    ("\u{2773}", "\u{2773}", "\u{2773}", "\u{2773}", 2, 18, 0, 0),
    ("\u{2774}", "\u{2774}", "\u{2774}", "\u{2774}", 2, 18, 0, 0),
    ("\u{2775}", "\u{2775}", "\u{2775}", "\u{2775}", 2, 18, 0, 0),
    ("\u{2776}", "\u{2776}", "\u{2776}", "\u{2776}", 0, 18, 0, 0),
    ("\u{2777}", "\u{2777}", "\u{2777}", "\u{2777}", 0, 18, 0, 0),
    ("\u{2778}", "\u{2778}", "\u{2778}", "\u{2778}", 0, 18, 0, 0),
    ("\u{2779}", "\u{2779}", "\u{2779}", "\u{2779}", 0, 18, 0, 0),
    ("\u{277A}", "\u{277A}", "\u{277A}", "\u{277A}", 0, 18, 0, 0),
    ("\u{277B}", "\u{277B}", "\u{277B}", "\u{277B}", 0, 18, 0, 0),
    ("\u{277C}", "\u{277C}", "\u{277C}", "\u{277C}", 0, 18, 0, 0),
    ("\u{277D}", "\u{277D}", "\u{277D}", "\u{277D}", 0, 18, 0, 0),
    ("\u{277E}", "\u{277E}", "\u{277E}", "\u{277E}", 0, 18, 0, 0),
    ("\u{277F}", "\u{277F}", "\u{277F}", "\u{277F}", 0, 18, 0, 0),
    ("\u{2780}", "\u{2780}", "\u{2780}", "\u{2780}", 0, 18, 0, 0),
    ("\u{2781}", "\u{2781}", "\u{2781}", "\u{2781}", 0, 18, 0, 0),
    ("\u{2782}", "\u{2782}", "\u{2782}", "\u{2782}", 0, 18, 0, 0),
    ("\u{2783}", "\u{2783}", "\u{2783}", "\u{2783}", 0, 18, 0, 0),
    ("\u{2784}", "\u{2784}", "\u{2784}", "\u{2784}", 0, 18, 0, 0),
    ("\u{2785}", "\u{2785}", "\u{2785}", "\u{2785}", 0, 18, 0, 0),
    ("\u{2786}", "\u{2786}", "\u{2786}", "\u{2786}", 0, 18, 0, 0),
    ("\u{2787}", "\u{2787}", "\u{2787}", "\u{2787}", 0, 18, 0, 0),
    ("\u{2788}", "\u{2788}", "\u{2788}", "\u{2788}", 0, 18, 0, 0),
    ("\u{2789}", "\u{2789}", "\u{2789}", "\u{2789}", 0, 18, 0, 0),
    ("\u{278A}", "\u{278A}", "\u{278A}", "\u{278A}", 0, 18, 0, 0),
    ("\u{278B}", "\u{278B}", "\u{278B}", "\u{278B}", 0, 18, 0, 0),
    ("\u{278C}", "\u{278C}", "\u{278C}", "\u{278C}", 0, 18, 0, 0),
    ("\u{278D}", "\u{278D}", "\u{278D}", "\u{278D}", 0, 18, 0, 0),
    ("\u{278E}", "\u{278E}", "\u{278E}", "\u{278E}", 0, 18, 0, 0),
    ("\u{278F}", "\u{278F}", "\u{278F}", "\u{278F}", 0, 18, 0, 0),
    ("\u{2790}", "\u{2790}", "\u{2790}", "\u{2790}", 0, 18, 0, 0),
    ("\u{2791}", "\u{2791}", "\u{2791}", "\u{2791}", 0, 18, 0, 0),
    ("\u{2792}", "\u{2792}", "\u{2792}", "\u{2792}", 0, 18, 0, 0),
    ("\u{2793}", "\u{2793}", "\u{2793}", "\u{2793}", 0, 18, 0, 0),
    ("\u{2794}", "\u{2794}", "\u{2794}", "\u{2794}", 0, 18, 0, 0),
    ("\u{2795}", "\u{2795}", "\u{2795}", "\u{2795}", 0, 18, 0, 0),
    ("\u{2796}", "\u{2796}", "\u{2796}", "\u{2796}", 0, 18, 0, 0),
    ("\u{2797}", "\u{2797}", "\u{2797}", "\u{2797}", 0, 18, 0, 0),
    ("\u{2798}", "\u{2798}", "\u{2798}", "\u{2798}", 0, 18, 0, 0),
    ("\u{2799}", "\u{2799}", "\u{2799}", "\u{2799}", 0, 18, 0, 0),
    ("\u{279A}", "\u{279A}", "\u{279A}", "\u{279A}", 0, 18, 0, 0),
    ("\u{279B}", "\u{279B}", "\u{279B}", "\u{279B}", 0, 18, 0, 0),
    ("\u{279C}", "\u{279C}", "\u{279C}", "\u{279C}", 0, 18, 0, 0),
    ("\u{279D}", "\u{279D}", "\u{279D}", "\u{279D}", 0, 18, 0, 0),
    ("\u{279E}", "\u{279E}", "\u{279E}", "\u{279E}", 0, 18, 0, 0),
    ("\u{279F}", "\u{279F}", "\u{279F}", "\u{279F}", 0, 18, 0, 0),
    ("\u{27A0}", "\u{27A0}", "\u{27A0}", "\u{27A0}", 0, 18, 0, 0),
    ("\u{27A1}", "\u{27A1}", "\u{27A1}", "\u{27A1}", 0, 18, 0, 0),
    ("\u{27A2}", "\u{27A2}", "\u{27A2}", "\u{27A2}", 0, 18, 0, 0),
    ("\u{27A3}", "\u{27A3}", "\u{27A3}", "\u{27A3}", 0, 18, 0, 0),
    ("\u{27A4}", "\u{27A4}", "\u{27A4}", "\u{27A4}", 0, 18, 0, 0),
    ("\u{27A5}", "\u{27A5}", "\u{27A5}", "\u{27A5}", 0, 18, 0, 0),
    ("\u{27A6}", "\u{27A6}", "\u{27A6}", "\u{27A6}", 0, 18, 0, 0),
    ("\u{27A7}", "\u{27A7}", "\u{27A7}", "\u{27A7}", 0, 18, 0, 0),
    ("\u{27A8}", "\u{27A8}", "\u{27A8}", "\u{27A8}", 0, 18, 0, 0),
    ("\u{27A9}", "\u{27A9}", "\u{27A9}", "\u{27A9}", 0, 18, 0, 0),
    ("\u{27AA}", "\u{27AA}", "\u{27AA}", "\u{27AA}", 0, 18, 0, 0),
    ("\u{27AB}", "\u{27AB}", "\u{27AB}", "\u{27AB}", 0, 18, 0, 0),
    ("\u{27AC}", "\u{27AC}", "\u{27AC}", "\u{27AC}", 0, 18, 0, 0),
    ("\u{27AD}", "\u{27AD}", "\u{27AD}", "\u{27AD}", 0, 18, 0, 0),
    ("\u{27AE}", "\u{27AE}", "\u{27AE}", "\u{27AE}", 0, 18, 0, 0),
    ("\u{27AF}", "\u{27AF}", "\u{27AF}", "\u{27AF}", 0, 18, 0, 0),
    ("\u{27B0}", "\u{27B0}", "\u{27B0}", "\u{27B0}", 0, 18, 0, 0),
    ("\u{27B1}", "\u{27B1}", "\u{27B1}", "\u{27B1}", 0, 18, 0, 0),
    ("\u{27B2}", "\u{27B2}", "\u{27B2}", "\u{27B2}", 0, 18, 0, 0),
    ("\u{27B3}", "\u{27B3}", "\u{27B3}", "\u{27B3}", 0, 18, 0, 0),
    ("\u{27B4}", "\u{27B4}", "\u{27B4}", "\u{27B4}", 0, 18, 0, 0),
    ("\u{27B5}", "\u{27B5}", "\u{27B5}", "\u{27B5}", 0, 18, 0, 0),
    ("\u{27B6}", "\u{27B6}", "\u{27B6}", "\u{27B6}", 0, 18, 0, 0),
    ("\u{27B7}", "\u{27B7}", "\u{27B7}", "\u{27B7}", 0, 18, 0, 0),
    ("\u{27B8}", "\u{27B8}", "\u{27B8}", "\u{27B8}", 0, 18, 0, 0),
    ("\u{27B9}", "\u{27B9}", "\u{27B9}", "\u{27B9}", 0, 18, 0, 0),
    ("\u{27BA}", "\u{27BA}", "\u{27BA}", "\u{27BA}", 0, 18, 0, 0),
    ("\u{27BB}", "\u{27BB}", "\u{27BB}", "\u{27BB}", 0, 18, 0, 0),
    ("\u{27BC}", "\u{27BC}", "\u{27BC}", "\u{27BC}", 0, 18, 0, 0),
    ("\u{27BD}", "\u{27BD}", "\u{27BD}", "\u{27BD}", 0, 18, 0, 0),
    ("\u{27BE}", "\u{27BE}", "\u{27BE}", "\u{27BE}", 0, 18, 0, 0),
    ("\u{27BF}", "\u{27BF}", "\u{27BF}", "\u{27BF}", 0, 18, 0, 0),
    ("\u{FE00}", "\u{FE00}", "\u{FE00}", "\u{FE00}", 0, 4, 0, 0),
    ("\u{FE01}", "\u{FE01}", "\u{FE01}", "\u{FE01}", 0, 4, 0, 0),
    ("\u{FE02}", "\u{FE02}", "\u{FE02}", "\u{FE02}", 0, 4, 0, 0),
    ("\u{FE03}", "\u{FE03}", "\u{FE03}", "\u{FE03}", 0, 4, 0, 0),
    ("\u{FE04}", "\u{FE04}", "\u{FE04}", "\u{FE04}", 0, 4, 0, 0),
    ("\u{FE05}", "\u{FE05}", "\u{FE05}", "\u{FE05}", 0, 4, 0, 0),
    ("\u{FE06}", "\u{FE06}", "\u{FE06}", "\u{FE06}", 0, 4, 0, 0),
    ("\u{FE07}", "\u{FE07}", "\u{FE07}", "\u{FE07}", 0, 4, 0, 0),
    ("\u{FE08}", "\u{FE08}", "\u{FE08}", "\u{FE08}", 0, 4, 0, 0),
    ("\u{FE09}", "\u{FE09}", "\u{FE09}", "\u{FE09}", 0, 4, 0, 0),
    ("\u{FE0A}", "\u{FE0A}", "\u{FE0A}", "\u{FE0A}", 0, 4, 0, 0),
    ("\u{FE0B}", "\u{FE0B}", "\u{FE0B}", "\u{FE0B}", 0, 4, 0, 0),
    ("\u{FE0C}", "\u{FE0C}", "\u{FE0C}", "\u{FE0C}", 0, 4, 0, 0),
    ("\u{FE0D}", "\u{FE0D}", "\u{FE0D}", "\u{FE0D}", 0, 4, 0, 0),
    ("\u{FE0E}", "\u{FE0E}", "\u{FE0E}", "\u{FE0E}", 0, 4, 0, 0),
    ("\u{FE0F}", "\u{FE0F}", "\u{FE0F}", "\u{FE0F}", 0, 4, 0, 0),
    ("\u{FEFF}", "\u{FEFF}", "\u{FEFF}", "\u{FEFF}", 0, 3, 0, 0),
    ("\u{FF01}", "\u{FF01}", "\u{FF01}", "\u{FF01}", 2, 0, 0, 0),
    ("\u{FF02}", "\u{FF02}", "\u{FF02}", "\u{FF02}", 2, 0, 0, 0),
    ("\u{FF03}", "\u{FF03}", "\u{FF03}", "\u{FF03}", 2, 0, 0, 0),
    ("\u{FF05}", "\u{FF05}", "\u{FF05}", "\u{FF05}", 2, 0, 0, 0),
    ("\u{FF06}", "\u{FF06}", "\u{FF06}", "\u{FF06}", 2, 0, 0, 0),
    ("\u{FF07}", "\u{FF07}", "\u{FF07}", "\u{FF07}", 2, 0, 0, 0),
    ("\u{FF08}", "\u{FF08}", "\u{FF08}", "\u{FF08}", 2, 0, 0, 0),
    ("\u{FF09}", "\u{FF09}", "\u{FF09}", "\u{FF09}", 2, 0, 0, 0),
    ("\u{FF0A}", "\u{FF0A}", "\u{FF0A}", "\u{FF0A}", 2, 0, 0, 0),
    ("\u{FF0C}", "\u{FF0C}", "\u{FF0C}", "\u{FF0C}", 2, 0, 0, 0),
    ("\u{FF0D}", "\u{FF0D}", "\u{FF0D}", "\u{FF0D}", 2, 0, 0, 0),
    ("\u{FF0E}", "\u{FF0E}", "\u{FF0E}", "\u{FF0E}", 2, 0, 0, 0),
    ("\u{FF0F}", "\u{FF0F}", "\u{FF0F}", "\u{FF0F}", 2, 0, 0, 0),
    ("\u{FF1A}", "\u{FF1A}", "\u{FF1A}", "\u{FF1A}", 2, 0, 0, 0),
    ("\u{FF1B}", "\u{FF1B}", "\u{FF1B}", "\u{FF1B}", 2, 0, 0, 0),
    ("\u{FF1F}", "\u{FF1F}", "\u{FF1F}", "\u{FF1F}", 2, 0, 0, 0),
    ("\u{FF20}", "\u{FF20}", "\u{FF20}", "\u{FF20}", 2, 0, 0, 0),
    ("\u{FF21}", "\u{FF21}", "\u{FF41}", "\u{FF41}", 5, 0, 0, 0),
    ("\u{FF22}", "\u{FF22}", "\u{FF42}", "\u{FF42}", 5, 0, 0, 0),
    ("\u{FF23}", "\u{FF23}", "\u{FF43}", "\u{FF43}", 5, 0, 0, 0),
    ("\u{FF24}", "\u{FF24}", "\u{FF44}", "\u{FF44}", 5, 0, 0, 0),
    ("\u{FF25}", "\u{FF25}", "\u{FF45}", "\u{FF45}", 5, 0, 0, 0),
    ("\u{FF26}", "\u{FF26}", "\u{FF46}", "\u{FF46}", 5, 0, 0, 0),
    ("\u{FF27}", "\u{FF27}", "\u{FF47}", "\u{FF47}", 5, 0, 0, 0),
    ("\u{FF28}", "\u{FF28}", "\u{FF48}", "\u{FF48}", 5, 0, 0, 0),
    ("\u{FF29}", "\u{FF29}", "\u{FF49}", "\u{FF49}", 5, 0, 0, 0),
    ("\u{FF2A}", "\u{FF2A}", "\u{FF4A}", "\u{FF4A}", 5, 0, 0, 0),
    ("\u{FF2B}", "\u{FF2B}", "\u{FF4B}", "\u{FF4B}", 5, 0, 0, 0),
    ("\u{FF2C}", "\u{FF2C}", "\u{FF4C}", "\u{FF4C}", 5, 0, 0, 0),
    ("\u{FF2D}", "\u{FF2D}", "\u{FF4D}", "\u{FF4D}", 5, 0, 0, 0),
    ("\u{FF2E}", "\u{FF2E}", "\u{FF4E}", "\u{FF4E}", 5, 0, 0, 0),
    ("\u{FF2F}", "\u{FF2F}", "\u{FF4F}", "\u{FF4F}", 5, 0, 0, 0),
    ("\u{FF30}", "\u{FF30}", "\u{FF50}", "\u{FF50}", 5, 0, 0, 0),
    ("\u{FF31}", "\u{FF31}", "\u{FF51}", "\u{FF51}", 5, 0, 0, 0),
    ("\u{FF32}", "\u{FF32}", "\u{FF52}", "\u{FF52}", 5, 0, 0, 0),
    ("\u{FF33}", "\u{FF33}", "\u{FF53}", "\u{FF53}", 5, 0, 0, 0),
    ("\u{FF34}", "\u{FF34}", "\u{FF54}", "\u{FF54}", 5, 0, 0, 0),
    ("\u{FF35}", "\u{FF35}", "\u{FF55}", "\u{FF55}", 5, 0, 0, 0),
    ("\u{FF36}", "\u{FF36}", "\u{FF56}", "\u{FF56}", 5, 0, 0, 0),
    ("\u{FF37}", "\u{FF37}", "\u{FF57}", "\u{FF57}", 5, 0, 0, 0),
    ("\u{FF38}", "\u{FF38}", "\u{FF58}", "\u{FF58}", 5, 0, 0, 0),
    ("\u{FF39}", "\u{FF39}", "\u{FF59}", "\u{FF59}", 5, 0, 0, 0),
    ("\u{FF3A}", "\u{FF3A}", "\u{FF5A}", "\u{FF5A}", 5, 0, 0, 0),
    ("\u{FF3B}", "\u{FF3B}", "\u{FF3B}", "\u{FF3B}", 2, 0, 0, 0),
    ("\u{FF3C}", "\u{FF3C}", "\u{FF3C}", "\u{FF3C}", 2, 0, 0, 0),
    ("\u{FF3D}", "\u{FF3D}", "\u{FF3D}", "\u{FF3D}", 2, 0, 0, 0),
    ("\u{FF3F}", "\u{FF3F}", "\u{FF3F}", "\u{FF3F}", 2, 0, 0, 0),
    ("\u{FF41}", "\u{FF41}", "\u{FF41}", "\u{FF21}", 1, 0, 0, 0),
    ("\u{FF42}", "\u{FF42}", "\u{FF42}", "\u{FF22}", 1, 0, 0, 0),
    ("\u{FF43}", "\u{FF43}", "\u{FF43}", "\u{FF23}", 1, 0, 0, 0),
    ("\u{FF44}", "\u{FF44}", "\u{FF44}", "\u{FF24}", 1, 0, 0, 0),
    ("\u{FF45}", "\u{FF45}", "\u{FF45}", "\u{FF25}", 1, 0, 0, 0),
    ("\u{FF46}", "\u{FF46}", "\u{FF46}", "\u{FF26}", 1, 0, 0, 0),
    ("\u{FF47}", "\u{FF47}", "\u{FF47}", "\u{FF27}", 1, 0, 0, 0),
    ("\u{FF48}", "\u{FF48}", "\u{FF48}", "\u{FF28}", 1, 0, 0, 0),
    ("\u{FF49}", "\u{FF49}", "\u{FF49}", "\u{FF29}", 1, 0, 0, 0),
    ("\u{FF4A}", "\u{FF4A}", "\u{FF4A}", "\u{FF2A}", 1, 0, 0, 0),
    ("\u{FF4B}", "\u{FF4B}", "\u{FF4B}", "\u{FF2B}", 1, 0, 0, 0),
    ("\u{FF4C}", "\u{FF4C}", "\u{FF4C}", "\u{FF2C}", 1, 0, 0, 0),
    ("\u{FF4D}", "\u{FF4D}", "\u{FF4D}", "\u{FF2D}", 1, 0, 0, 0),
    ("\u{FF4E}", "\u{FF4E}", "\u{FF4E}", "\u{FF2E}", 1, 0, 0, 0),
    ("\u{FF4F}", "\u{FF4F}", "\u{FF4F}", "\u{FF2F}", 1, 0, 0, 0),
    ("\u{FF50}", "\u{FF50}", "\u{FF50}", "\u{FF30}", 1, 0, 0, 0),
    ("\u{FF51}", "\u{FF51}", "\u{FF51}", "\u{FF31}", 1, 0, 0, 0),
    ("\u{FF52}", "\u{FF52}", "\u{FF52}", "\u{FF32}", 1, 0, 0, 0),
    ("\u{FF53}", "\u{FF53}", "\u{FF53}", "\u{FF33}", 1, 0, 0, 0),
    ("\u{FF54}", "\u{FF54}", "\u{FF54}", "\u{FF34}", 1, 0, 0, 0),
    ("\u{FF55}", "\u{FF55}", "\u{FF55}", "\u{FF35}", 1, 0, 0, 0),
    ("\u{FF56}", "\u{FF56}", "\u{FF56}", "\u{FF36}", 1, 0, 0, 0),
    ("\u{FF57}", "\u{FF57}", "\u{FF57}", "\u{FF37}", 1, 0, 0, 0),
    ("\u{FF58}", "\u{FF58}", "\u{FF58}", "\u{FF38}", 1, 0, 0, 0),
    ("\u{FF59}", "\u{FF59}", "\u{FF59}", "\u{FF39}", 1, 0, 0, 0),
    ("\u{FF5A}", "\u{FF5A}", "\u{FF5A}", "\u{FF3A}", 1, 0, 0, 0),
    ("\u{FF5B}", "\u{FF5B}", "\u{FF5B}", "\u{FF5B}", 2, 0, 0, 0),
    ("\u{FF5D}", "\u{FF5D}", "\u{FF5D}", "\u{FF5D}", 2, 0, 0, 0),
    ("\u{FF5F}", "\u{FF5F}", "\u{FF5F}", "\u{FF5F}", 2, 0, 0, 0),
    ("\u{FF60}", "\u{FF60}", "\u{FF60}", "\u{FF60}", 2, 0, 0, 0),
    ("\u{FF61}", "\u{FF61}", "\u{FF61}", "\u{FF61}", 2, 0, 0, 0),
    ("\u{FF62}", "\u{FF62}", "\u{FF62}", "\u{FF62}", 2, 0, 0, 0),
    ("\u{FF63}", "\u{FF63}", "\u{FF63}", "\u{FF63}", 2, 0, 0, 0),
    ("\u{FF64}", "\u{FF64}", "\u{FF64}", "\u{FF64}", 2, 0, 0, 0),
    ("\u{FF65}", "\u{FF65}", "\u{FF65}", "\u{FF65}", 2, 0, 0, 0),
    ("\u{FF66}", "\u{FF66}", "\u{FF66}", "\u{FF66}", 1, 0, 0, 0),
    ("\u{FF67}", "\u{FF67}", "\u{FF67}", "\u{FF67}", 1, 0, 0, 0),
    ("\u{FF68}", "\u{FF68}", "\u{FF68}", "\u{FF68}", 1, 0, 0, 0),
    ("\u{FF69}", "\u{FF69}", "\u{FF69}", "\u{FF69}", 1, 0, 0, 0),
    ("\u{FF6A}", "\u{FF6A}", "\u{FF6A}", "\u{FF6A}", 1, 0, 0, 0),
    ("\u{FF6B}", "\u{FF6B}", "\u{FF6B}", "\u{FF6B}", 1, 0, 0, 0),
    ("\u{FF6C}", "\u{FF6C}", "\u{FF6C}", "\u{FF6C}", 1, 0, 0, 0),
    ("\u{FF6D}", "\u{FF6D}", "\u{FF6D}", "\u{FF6D}", 1, 0, 0, 0),
    ("\u{FF6E}", "\u{FF6E}", "\u{FF6E}", "\u{FF6E}", 1, 0, 0, 0),
    ("\u{FF6F}", "\u{FF6F}", "\u{FF6F}", "\u{FF6F}", 1, 0, 0, 0),
    ("\u{FF70}", "\u{FF70}", "\u{FF70}", "\u{FF70}", 1, 0, 0, 0),
    ("\u{FF71}", "\u{FF71}", "\u{FF71}", "\u{FF71}", 1, 0, 0, 0),
    ("\u{FF72}", "\u{FF72}", "\u{FF72}", "\u{FF72}", 1, 0, 0, 0),
    ("\u{FF73}", "\u{FF73}", "\u{FF73}", "\u{FF73}", 1, 0, 0, 0),
    ("\u{FF74}", "\u{FF74}", "\u{FF74}", "\u{FF74}", 1, 0, 0, 0),
    ("\u{FF75}", "\u{FF75}", "\u{FF75}", "\u{FF75}", 1, 0, 0, 0),
    ("\u{FF76}", "\u{FF76}", "\u{FF76}", "\u{FF76}", 1, 0, 0, 0),
    ("\u{FF77}", "\u{FF77}", "\u{FF77}", "\u{FF77}", 1, 0, 0, 0),
    ("\u{FF78}", "\u{FF78}", "\u{FF78}", "\u{FF78}", 1, 0, 0, 0),
    ("\u{FF79}", "\u{FF79}", "\u{FF79}", "\u{FF79}", 1, 0, 0, 0),
    ("\u{FF7A}", "\u{FF7A}", "\u{FF7A}", "\u{FF7A}", 1, 0, 0, 0),
    ("\u{FF7B}", "\u{FF7B}", "\u{FF7B}", "\u{FF7B}", 1, 0, 0, 0),
    ("\u{FF7C}", "\u{FF7C}", "\u{FF7C}", "\u{FF7C}", 1, 0, 0, 0),
    ("\u{FF7D}", "\u{FF7D}", "\u{FF7D}", "\u{FF7D}", 1, 0, 0, 0),
    ("\u{FF7E}", "\u{FF7E}", "\u{FF7E}", "\u{FF7E}", 1, 0, 0, 0),
    ("\u{FF7F}", "\u{FF7F}", "\u{FF7F}", "\u{FF7F}", 1, 0, 0, 0),
    ("\u{FF80}", "\u{FF80}", "\u{FF80}", "\u{FF80}", 1, 0, 0, 0),
    ("\u{FF81}", "\u{FF81}", "\u{FF81}", "\u{FF81}", 1, 0, 0, 0),
    ("\u{FF82}", "\u{FF82}", "\u{FF82}", "\u{FF82}", 1, 0, 0, 0),
    ("\u{FF83}", "\u{FF83}", "\u{FF83}", "\u{FF83}", 1, 0, 0, 0),
    ("\u{FF84}", "\u{FF84}", "\u{FF84}", "\u{FF84}", 1, 0, 0, 0),
    ("\u{FF85}", "\u{FF85}", "\u{FF85}", "\u{FF85}", 1, 0, 0, 0),
    ("\u{FF86}", "\u{FF86}", "\u{FF86}", "\u{FF86}", 1, 0, 0, 0),
    ("\u{FF87}", "\u{FF87}", "\u{FF87}", "\u{FF87}", 1, 0, 0, 0),
    ("\u{FF88}", "\u{FF88}", "\u{FF88}", "\u{FF88}", 1, 0, 0, 0),
    ("\u{FF89}", "\u{FF89}", "\u{FF89}", "\u{FF89}", 1, 0, 0, 0),
    ("\u{FF8A}", "\u{FF8A}", "\u{FF8A}", "\u{FF8A}", 1, 0, 0, 0),
    ("\u{FF8B}", "\u{FF8B}", "\u{FF8B}", "\u{FF8B}", 1, 0, 0, 0),
    ("\u{FF8C}", "\u{FF8C}", "\u{FF8C}", "\u{FF8C}", 1, 0, 0, 0),
    ("\u{FF8D}", "\u{FF8D}", "\u{FF8D}", "\u{FF8D}", 1, 0, 0, 0),
    ("\u{FF8E}", "\u{FF8E}", "\u{FF8E}", "\u{FF8E}", 1, 0, 0, 0),
    ("\u{FF8F}", "\u{FF8F}", "\u{FF8F}", "\u{FF8F}", 1, 0, 0, 0),
    ("\u{FF90}", "\u{FF90}", "\u{FF90}", "\u{FF90}", 1, 0, 0, 0),
    ("\u{FF91}", "\u{FF91}", "\u{FF91}", "\u{FF91}", 1, 0, 0, 0),
    ("\u{FF92}", "\u{FF92}", "\u{FF92}", "\u{FF92}", 1, 0, 0, 0),
    ("\u{FF93}", "\u{FF93}", "\u{FF93}", "\u{FF93}", 1, 0, 0, 0),
    ("\u{FF94}", "\u{FF94}", "\u{FF94}", "\u{FF94}", 1, 0, 0, 0),
    ("\u{FF95}", "\u{FF95}", "\u{FF95}", "\u{FF95}", 1, 0, 0, 0),
    ("\u{FF96}", "\u{FF96}", "\u{FF96}", "\u{FF96}", 1, 0, 0, 0),
    ("\u{FF97}", "\u{FF97}", "\u{FF97}", "\u{FF97}", 1, 0, 0, 0),
    ("\u{FF98}", "\u{FF98}", "\u{FF98}", "\u{FF98}", 1, 0, 0, 0),
    ("\u{FF99}", "\u{FF99}", "\u{FF99}", "\u{FF99}", 1, 0, 0, 0),
    ("\u{FF9A}", "\u{FF9A}", "\u{FF9A}", "\u{FF9A}", 1, 0, 0, 0),
    ("\u{FF9B}", "\u{FF9B}", "\u{FF9B}", "\u{FF9B}", 1, 0, 0, 0),
    ("\u{FF9C}", "\u{FF9C}", "\u{FF9C}", "\u{FF9C}", 1, 0, 0, 0),
    ("\u{FF9D}", "\u{FF9D}", "\u{FF9D}", "\u{FF9D}", 1, 0, 0, 0),
    ("\u{FF9E}", "\u{FF9E}", "\u{FF9E}", "\u{FF9E}", 1, 0, 0, 0),
    ("\u{FF9F}", "\u{FF9F}", "\u{FF9F}", "\u{FF9F}", 1, 0, 0, 0),
    ("\u{FFA0}", "\u{FFA0}", "\u{FFA0}", "\u{FFA0}", 1, 0, 0, 0),
    ("\u{FFA1}", "\u{FFA1}", "\u{FFA1}", "\u{FFA1}", 1, 0, 0, 0),
    ("\u{FFA2}", "\u{FFA2}", "\u{FFA2}", "\u{FFA2}", 1, 0, 0, 0),
    ("\u{FFA3}", "\u{FFA3}", "\u{FFA3}", "\u{FFA3}", 1, 0, 0, 0),
    ("\u{FFA4}", "\u{FFA4}", "\u{FFA4}", "\u{FFA4}", 1, 0, 0, 0),
    ("\u{FFA5}", "\u{FFA5}", "\u{FFA5}", "\u{FFA5}", 1, 0, 0, 0),
    ("\u{FFA6}", "\u{FFA6}", "\u{FFA6}", "\u{FFA6}", 1, 0, 0, 0),
    ("\u{FFA7}", "\u{FFA7}", "\u{FFA7}", "\u{FFA7}", 1, 0, 0, 0),
    ("\u{FFA8}", "\u{FFA8}", "\u{FFA8}", "\u{FFA8}", 1, 0, 0, 0),
    ("\u{FFA9}", "\u{FFA9}", "\u{FFA9}", "\u{FFA9}", 1, 0, 0, 0),
    ("\u{FFAA}", "\u{FFAA}", "\u{FFAA}", "\u{FFAA}", 1, 0, 0, 0),
    ("\u{FFAB}", "\u{FFAB}", "\u{FFAB}", "\u{FFAB}", 1, 0, 0, 0),
    ("\u{FFAC}", "\u{FFAC}", "\u{FFAC}", "\u{FFAC}", 1, 0, 0, 0),
    ("\u{FFAD}", "\u{FFAD}", "\u{FFAD}", "\u{FFAD}", 1, 0, 0, 0),
    ("\u{FFAE}", "\u{FFAE}", "\u{FFAE}", "\u{FFAE}", 1, 0, 0, 0),
    ("\u{FFAF}", "\u{FFAF}", "\u{FFAF}", "\u{FFAF}", 1, 0, 0, 0),
    ("\u{FFB0}", "\u{FFB0}", "\u{FFB0}", "\u{FFB0}", 1, 0, 0, 0),
    ("\u{FFB1}", "\u{FFB1}", "\u{FFB1}", "\u{FFB1}", 1, 0, 0, 0),
    ("\u{FFB2}", "\u{FFB2}", "\u{FFB2}", "\u{FFB2}", 1, 0, 0, 0),
    ("\u{FFB3}", "\u{FFB3}", "\u{FFB3}", "\u{FFB3}", 1, 0, 0, 0),
    ("\u{FFB4}", "\u{FFB4}", "\u{FFB4}", "\u{FFB4}", 1, 0, 0, 0),
    ("\u{FFB5}", "\u{FFB5}", "\u{FFB5}", "\u{FFB5}", 1, 0, 0, 0),
    ("\u{FFB6}", "\u{FFB6}", "\u{FFB6}", "\u{FFB6}", 1, 0, 0, 0),
    ("\u{FFB7}", "\u{FFB7}", "\u{FFB7}", "\u{FFB7}", 1, 0, 0, 0),
    ("\u{FFB8}", "\u{FFB8}", "\u{FFB8}", "\u{FFB8}", 1, 0, 0, 0),
    ("\u{FFB9}", "\u{FFB9}", "\u{FFB9}", "\u{FFB9}", 1, 0, 0, 0),
    ("\u{FFBA}", "\u{FFBA}", "\u{FFBA}", "\u{FFBA}", 1, 0, 0, 0),
    ("\u{FFBB}", "\u{FFBB}", "\u{FFBB}", "\u{FFBB}", 1, 0, 0, 0),
    ("\u{FFBC}", "\u{FFBC}", "\u{FFBC}", "\u{FFBC}", 1, 0, 0, 0),
    ("\u{FFBD}", "\u{FFBD}", "\u{FFBD}", "\u{FFBD}", 1, 0, 0, 0),
    ("\u{FFBE}", "\u{FFBE}", "\u{FFBE}", "\u{FFBE}", 1, 0, 0, 0),
    ("\u{FFC2}", "\u{FFC2}", "\u{FFC2}", "\u{FFC2}", 1, 0, 0, 0),
    ("\u{FFC3}", "\u{FFC3}", "\u{FFC3}", "\u{FFC3}", 1, 0, 0, 0),
    ("\u{FFC4}", "\u{FFC4}", "\u{FFC4}", "\u{FFC4}", 1, 0, 0, 0),
    ("\u{FFC5}", "\u{FFC5}", "\u{FFC5}", "\u{FFC5}", 1, 0, 0, 0),
    ("\u{FFC6}", "\u{FFC6}", "\u{FFC6}", "\u{FFC6}", 1, 0, 0, 0),
    ("\u{FFC7}", "\u{FFC7}", "\u{FFC7}", "\u{FFC7}", 1, 0, 0, 0),
    ("\u{FFCA}", "\u{FFCA}", "\u{FFCA}", "\u{FFCA}", 1, 0, 0, 0),
    ("\u{FFCB}", "\u{FFCB}", "\u{FFCB}", "\u{FFCB}", 1, 0, 0, 0),
    ("\u{FFCC}", "\u{FFCC}", "\u{FFCC}", "\u{FFCC}", 1, 0, 0, 0),
    ("\u{FFCD}", "\u{FFCD}", "\u{FFCD}", "\u{FFCD}", 1, 0, 0, 0),
    ("\u{FFCE}", "\u{FFCE}", "\u{FFCE}", "\u{FFCE}", 1, 0, 0, 0),
    ("\u{FFCF}", "\u{FFCF}", "\u{FFCF}", "\u{FFCF}", 1, 0, 0, 0),
    ("\u{FFD2}", "\u{FFD2}", "\u{FFD2}", "\u{FFD2}", 1, 0, 0, 0),
    ("\u{FFD3}", "\u{FFD3}", "\u{FFD3}", "\u{FFD3}", 1, 0, 0, 0),
    ("\u{FFD4}", "\u{FFD4}", "\u{FFD4}", "\u{FFD4}", 1, 0, 0, 0),
    ("\u{FFD5}", "\u{FFD5}", "\u{FFD5}", "\u{FFD5}", 1, 0, 0, 0),
    ("\u{FFD6}", "\u{FFD6}", "\u{FFD6}", "\u{FFD6}", 1, 0, 0, 0),
    ("\u{FFD7}", "\u{FFD7}", "\u{FFD7}", "\u{FFD7}", 1, 0, 0, 0),
    ("\u{FFDA}", "\u{FFDA}", "\u{FFDA}", "\u{FFDA}", 1, 0, 0, 0),
    ("\u{FFDB}", "\u{FFDB}", "\u{FFDB}", "\u{FFDB}", 1, 0, 0, 0),
    ("\u{FFDC}", "\u{FFDC}", "\u{FFDC}", "\u{FFDC}", 1, 0, 0, 0),
    ("\u{1F1E6}", "\u{1F1E6}", "\u{1F1E6}", "\u{1F1E6}", 0, 6, 0, 0),
    ("\u{1F1E7}", "\u{1F1E7}", "\u{1F1E7}", "\u{1F1E7}", 0, 6, 0, 0),
    ("\u{1F1E8}", "\u{1F1E8}", "\u{1F1E8}", "\u{1F1E8}", 0, 6, 0, 0),
    ("\u{1F1E9}", "\u{1F1E9}", "\u{1F1E9}", "\u{1F1E9}", 0, 6, 0, 0),
    ("\u{1F1EA}", "\u{1F1EA}", "\u{1F1EA}", "\u{1F1EA}", 0, 6, 0, 0),
    ("\u{1F1EB}", "\u{1F1EB}", "\u{1F1EB}", "\u{1F1EB}", 0, 6, 0, 0),
    ("\u{1F1EC}", "\u{1F1EC}", "\u{1F1EC}", "\u{1F1EC}", 0, 6, 0, 0),
    ("\u{1F1ED}", "\u{1F1ED}", "\u{1F1ED}", "\u{1F1ED}", 0, 6, 0, 0),
    ("\u{1F1EE}", "\u{1F1EE}", "\u{1F1EE}", "\u{1F1EE}", 0, 6, 0, 0),
    ("\u{1F1EF}", "\u{1F1EF}", "\u{1F1EF}", "\u{1F1EF}", 0, 6, 0, 0),
    ("\u{1F1F0}", "\u{1F1F0}", "\u{1F1F0}", "\u{1F1F0}", 0, 6, 0, 0),
    ("\u{1F1F1}", "\u{1F1F1}", "\u{1F1F1}", "\u{1F1F1}", 0, 6, 0, 0),
    ("\u{1F1F2}", "\u{1F1F2}", "\u{1F1F2}", "\u{1F1F2}", 0, 6, 0, 0),
    ("\u{1F1F3}", "\u{1F1F3}", "\u{1F1F3}", "\u{1F1F3}", 0, 6, 0, 0),
    ("\u{1F1F4}", "\u{1F1F4}", "\u{1F1F4}", "\u{1F1F4}", 0, 6, 0, 0),
    ("\u{1F1F5}", "\u{1F1F5}", "\u{1F1F5}", "\u{1F1F5}", 0, 6, 0, 0),
    ("\u{1F1F6}", "\u{1F1F6}", "\u{1F1F6}", "\u{1F1F6}", 0, 6, 0, 0),
    ("\u{1F1F7}", "\u{1F1F7}", "\u{1F1F7}", "\u{1F1F7}", 0, 6, 0, 0),
    ("\u{1F1F8}", "\u{1F1F8}", "\u{1F1F8}", "\u{1F1F8}", 0, 6, 0, 0),
    ("\u{1F1F9}", "\u{1F1F9}", "\u{1F1F9}", "\u{1F1F9}", 0, 6, 0, 0),
    ("\u{1F1FA}", "\u{1F1FA}", "\u{1F1FA}", "\u{1F1FA}", 0, 6, 0, 0),
    ("\u{1F1FB}", "\u{1F1FB}", "\u{1F1FB}", "\u{1F1FB}", 0, 6, 0, 0),
    ("\u{1F1FC}", "\u{1F1FC}", "\u{1F1FC}", "\u{1F1FC}", 0, 6, 0, 0),
    ("\u{1F1FD}", "\u{1F1FD}", "\u{1F1FD}", "\u{1F1FD}", 0, 6, 0, 0),
    ("\u{1F1FE}", "\u{1F1FE}", "\u{1F1FE}", "\u{1F1FE}", 0, 6, 0, 0),
    ("\u{1F1FF}", "\u{1F1FF}", "\u{1F1FF}", "\u{1F1FF}", 0, 6, 0, 0),
    ("\u{1F300}", "\u{1F300}", "\u{1F300}", "\u{1F300}", 0, 18, 0, 0),
    ("\u{1F301}", "\u{1F301}", "\u{1F301}", "\u{1F301}", 0, 18, 0, 0),
    ("\u{1F302}", "\u{1F302}", "\u{1F302}", "\u{1F302}", 0, 18, 0, 0),
    ("\u{1F303}", "\u{1F303}", "\u{1F303}", "\u{1F303}", 0, 18, 0, 0),
    ("\u{1F304}", "\u{1F304}", "\u{1F304}", "\u{1F304}", 0, 18, 0, 0),
    ("\u{1F305}", "\u{1F305}", "\u{1F305}", "\u{1F305}", 0, 18, 0, 0),
    ("\u{1F306}", "\u{1F306}", "\u{1F306}", "\u{1F306}", 0, 18, 0, 0),
    ("\u{1F307}", "\u{1F307}", "\u{1F307}", "\u{1F307}", 0, 18, 0, 0),
    ("\u{1F308}", "\u{1F308}", "\u{1F308}", "\u{1F308}", 0, 18, 0, 0),
    ("\u{1F309}", "\u{1F309}", "\u{1F309}", "\u{1F309}", 0, 18, 0, 0),
    ("\u{1F30A}", "\u{1F30A}", "\u{1F30A}", "\u{1F30A}", 0, 18, 0, 0),
    ("\u{1F30B}", "\u{1F30B}", "\u{1F30B}", "\u{1F30B}", 0, 18, 0, 0),
    ("\u{1F30C}", "\u{1F30C}", "\u{1F30C}", "\u{1F30C}", 0, 18, 0, 0),
    ("\u{1F30D}", "\u{1F30D}", "\u{1F30D}", "\u{1F30D}", 0, 18, 0, 0),
    ("\u{1F30E}", "\u{1F30E}", "\u{1F30E}", "\u{1F30E}", 0, 18, 0, 0),
    ("\u{1F30F}", "\u{1F30F}", "\u{1F30F}", "\u{1F30F}", 0, 18, 0, 0),
    ("\u{1F310}", "\u{1F310}", "\u{1F310}", "\u{1F310}", 0, 18, 0, 0),
    ("\u{1F311}", "\u{1F311}", "\u{1F311}", "\u{1F311}", 0, 18, 0, 0),
    ("\u{1F312}", "\u{1F312}", "\u{1F312}", "\u{1F312}", 0, 18, 0, 0),
    ("\u{1F313}", "\u{1F313}", "\u{1F313}", "\u{1F313}", 0, 18, 0, 0),
    ("\u{1F314}", "\u{1F314}", "\u{1F314}", "\u{1F314}", 0, 18, 0, 0),
    ("\u{1F315}", "\u{1F315}", "\u{1F315}", "\u{1F315}", 0, 18, 0, 0),
    ("\u{1F316}", "\u{1F316}", "\u{1F316}", "\u{1F316}", 0, 18, 0, 0),
    ("\u{1F317}", "\u{1F317}", "\u{1F317}", "\u{1F317}", 0, 18, 0, 0),
    ("\u{1F318}", "\u{1F318}", "\u{1F318}", "\u{1F318}", 0, 18, 0, 0),
    ("\u{1F319}", "\u{1F319}", "\u{1F319}", "\u{1F319}", 0, 18, 0, 0),
    ("\u{1F31A}", "\u{1F31A}", "\u{1F31A}", "\u{1F31A}", 0, 18, 0, 0),
    ("\u{1F31B}", "\u{1F31B}", "\u{1F31B}", "\u{1F31B}", 0, 18, 0, 0),
    ("\u{1F31C}", "\u{1F31C}", "\u{1F31C}", "\u{1F31C}", 0, 18, 0, 0),
    ("\u{1F31D}", "\u{1F31D}", "\u{1F31D}", "\u{1F31D}", 0, 18, 0, 0),
    ("\u{1F31E}", "\u{1F31E}", "\u{1F31E}", "\u{1F31E}", 0, 18, 0, 0),
    ("\u{1F31F}", "\u{1F31F}", "\u{1F31F}", "\u{1F31F}", 0, 18, 0, 0),
    ("\u{1F320}", "\u{1F320}", "\u{1F320}", "\u{1F320}", 0, 18, 0, 0),
    ("\u{1F321}", "\u{1F321}", "\u{1F321}", "\u{1F321}", 0, 18, 0, 0),
    ("\u{1F322}", "\u{1F322}", "\u{1F322}", "\u{1F322}", 0, 18, 0, 0),
    ("\u{1F323}", "\u{1F323}", "\u{1F323}", "\u{1F323}", 0, 18, 0, 0),
    ("\u{1F324}", "\u{1F324}", "\u{1F324}", "\u{1F324}", 0, 18, 0, 0),
    ("\u{1F325}", "\u{1F325}", "\u{1F325}", "\u{1F325}", 0, 18, 0, 0),
    ("\u{1F326}", "\u{1F326}", "\u{1F326}", "\u{1F326}", 0, 18, 0, 0),
    ("\u{1F327}", "\u{1F327}", "\u{1F327}", "\u{1F327}", 0, 18, 0, 0),
    ("\u{1F328}", "\u{1F328}", "\u{1F328}", "\u{1F328}", 0, 18, 0, 0),
    ("\u{1F329}", "\u{1F329}", "\u{1F329}", "\u{1F329}", 0, 18, 0, 0),
    ("\u{1F32A}", "\u{1F32A}", "\u{1F32A}", "\u{1F32A}", 0, 18, 0, 0),
    ("\u{1F32B}", "\u{1F32B}", "\u{1F32B}", "\u{1F32B}", 0, 18, 0, 0),
    ("\u{1F32C}", "\u{1F32C}", "\u{1F32C}", "\u{1F32C}", 0, 18, 0, 0),
    ("\u{1F32D}", "\u{1F32D}", "\u{1F32D}", "\u{1F32D}", 0, 18, 0, 0),
    ("\u{1F32E}", "\u{1F32E}", "\u{1F32E}", "\u{1F32E}", 0, 18, 0, 0),
    ("\u{1F32F}", "\u{1F32F}", "\u{1F32F}", "\u{1F32F}", 0, 18, 0, 0),
    ("\u{1F330}", "\u{1F330}", "\u{1F330}", "\u{1F330}", 0, 18, 0, 0),
    ("\u{1F331}", "\u{1F331}", "\u{1F331}", "\u{1F331}", 0, 18, 0, 0),
    ("\u{1F332}", "\u{1F332}", "\u{1F332}", "\u{1F332}", 0, 18, 0, 0),
    ("\u{1F333}", "\u{1F333}", "\u{1F333}", "\u{1F333}", 0, 18, 0, 0),
    ("\u{1F334}", "\u{1F334}", "\u{1F334}", "\u{1F334}", 0, 18, 0, 0),
    ("\u{1F335}", "\u{1F335}", "\u{1F335}", "\u{1F335}", 0, 18, 0, 0),
    ("\u{1F336}", "\u{1F336}", "\u{1F336}", "\u{1F336}", 0, 18, 0, 0),
    ("\u{1F337}", "\u{1F337}", "\u{1F337}", "\u{1F337}", 0, 18, 0, 0),
    ("\u{1F338}", "\u{1F338}", "\u{1F338}", "\u{1F338}", 0, 18, 0, 0),
    ("\u{1F339}", "\u{1F339}", "\u{1F339}", "\u{1F339}", 0, 18, 0, 0),
    ("\u{1F33A}", "\u{1F33A}", "\u{1F33A}", "\u{1F33A}", 0, 18, 0, 0),
    ("\u{1F33B}", "\u{1F33B}", "\u{1F33B}", "\u{1F33B}", 0, 18, 0, 0),
    ("\u{1F33C}", "\u{1F33C}", "\u{1F33C}", "\u{1F33C}", 0, 18, 0, 0),
    ("\u{1F33D}", "\u{1F33D}", "\u{1F33D}", "\u{1F33D}", 0, 18, 0, 0),
    ("\u{1F33E}", "\u{1F33E}", "\u{1F33E}", "\u{1F33E}", 0, 18, 0, 0),
    ("\u{1F33F}", "\u{1F33F}", "\u{1F33F}", "\u{1F33F}", 0, 18, 0, 0),
    ("\u{1F340}", "\u{1F340}", "\u{1F340}", "\u{1F340}", 0, 18, 0, 0),
    ("\u{1F341}", "\u{1F341}", "\u{1F341}", "\u{1F341}", 0, 18, 0, 0),
    ("\u{1F342}", "\u{1F342}", "\u{1F342}", "\u{1F342}", 0, 18, 0, 0),
    ("\u{1F343}", "\u{1F343}", "\u{1F343}", "\u{1F343}", 0, 18, 0, 0),
    ("\u{1F344}", "\u{1F344}", "\u{1F344}", "\u{1F344}", 0, 18, 0, 0),
    ("\u{1F345}", "\u{1F345}", "\u{1F345}", "\u{1F345}", 0, 18, 0, 0),
    ("\u{1F346}", "\u{1F346}", "\u{1F346}", "\u{1F346}", 0, 18, 0, 0),
    ("\u{1F347}", "\u{1F347}", "\u{1F347}", "\u{1F347}", 0, 18, 0, 0),
    ("\u{1F348}", "\u{1F348}", "\u{1F348}", "\u{1F348}", 0, 18, 0, 0),
    ("\u{1F349}", "\u{1F349}", "\u{1F349}", "\u{1F349}", 0, 18, 0, 0),
    ("\u{1F34A}", "\u{1F34A}", "\u{1F34A}", "\u{1F34A}", 0, 18, 0, 0),
    ("\u{1F34B}", "\u{1F34B}", "\u{1F34B}", "\u{1F34B}", 0, 18, 0, 0),
    ("\u{1F34C}", "\u{1F34C}", "\u{1F34C}", "\u{1F34C}", 0, 18, 0, 0),
    ("\u{1F34D}", "\u{1F34D}", "\u{1F34D}", "\u{1F34D}", 0, 18, 0, 0),
    ("\u{1F34E}", "\u{1F34E}", "\u{1F34E}", "\u{1F34E}", 0, 18, 0, 0),
    ("\u{1F34F}", "\u{1F34F}", "\u{1F34F}", "\u{1F34F}", 0, 18, 0, 0),
    ("\u{1F350}", "\u{1F350}", "\u{1F350}", "\u{1F350}", 0, 18, 0, 0),
    ("\u{1F351}", "\u{1F351}", "\u{1F351}", "\u{1F351}", 0, 18, 0, 0),
    ("\u{1F352}", "\u{1F352}", "\u{1F352}", "\u{1F352}", 0, 18, 0, 0),
    ("\u{1F353}", "\u{1F353}", "\u{1F353}", "\u{1F353}", 0, 18, 0, 0),
    ("\u{1F354}", "\u{1F354}", "\u{1F354}", "\u{1F354}", 0, 18, 0, 0),
    ("\u{1F355}", "\u{1F355}", "\u{1F355}", "\u{1F355}", 0, 18, 0, 0),
    ("\u{1F356}", "\u{1F356}", "\u{1F356}", "\u{1F356}", 0, 18, 0, 0),
    ("\u{1F357}", "\u{1F357}", "\u{1F357}", "\u{1F357}", 0, 18, 0, 0),
    ("\u{1F358}", "\u{1F358}", "\u{1F358}", "\u{1F358}", 0, 18, 0, 0),
    ("\u{1F359}", "\u{1F359}", "\u{1F359}", "\u{1F359}", 0, 18, 0, 0),
    ("\u{1F35A}", "\u{1F35A}", "\u{1F35A}", "\u{1F35A}", 0, 18, 0, 0),
    ("\u{1F35B}", "\u{1F35B}", "\u{1F35B}", "\u{1F35B}", 0, 18, 0, 0),
    ("\u{1F35C}", "\u{1F35C}", "\u{1F35C}", "\u{1F35C}", 0, 18, 0, 0),
    ("\u{1F35D}", "\u{1F35D}", "\u{1F35D}", "\u{1F35D}", 0, 18, 0, 0),
    ("\u{1F35E}", "\u{1F35E}", "\u{1F35E}", "\u{1F35E}", 0, 18, 0, 0),
    ("\u{1F35F}", "\u{1F35F}", "\u{1F35F}", "\u{1F35F}", 0, 18, 0, 0),
    ("\u{1F360}", "\u{1F360}", "\u{1F360}", "\u{1F360}", 0, 18, 0, 0),
    ("\u{1F361}", "\u{1F361}", "\u{1F361}", "\u{1F361}", 0, 18, 0, 0),
    ("\u{1F362}", "\u{1F362}", "\u{1F362}", "\u{1F362}", 0, 18, 0, 0),
    ("\u{1F363}", "\u{1F363}", "\u{1F363}", "\u{1F363}", 0, 18, 0, 0),
    ("\u{1F364}", "\u{1F364}", "\u{1F364}", "\u{1F364}", 0, 18, 0, 0),
    ("\u{1F365}", "\u{1F365}", "\u{1F365}", "\u{1F365}", 0, 18, 0, 0),
    ("\u{1F366}", "\u{1F366}", "\u{1F366}", "\u{1F366}", 0, 18, 0, 0),
    ("\u{1F367}", "\u{1F367}", "\u{1F367}", "\u{1F367}", 0, 18, 0, 0),
    ("\u{1F368}", "\u{1F368}", "\u{1F368}", "\u{1F368}", 0, 18, 0, 0),
    ("\u{1F369}", "\u{1F369}", "\u{1F369}", "\u{1F369}", 0, 18, 0, 0),
    ("\u{1F36A}", "\u{1F36A}", "\u{1F36A}", "\u{1F36A}", 0, 18, 0, 0),
    ("\u{1F36B}", "\u{1F36B}", "\u{1F36B}", "\u{1F36B}", 0, 18, 0, 0),
    ("\u{1F36C}", "\u{1F36C}", "\u{1F36C}", "\u{1F36C}", 0, 18, 0, 0),
    ("\u{1F36D}", "\u{1F36D}", "\u{1F36D}", "\u{1F36D}", 0, 18, 0, 0),
    ("\u{1F36E}", "\u{1F36E}", "\u{1F36E}", "\u{1F36E}", 0, 18, 0, 0),
    ("\u{1F36F}", "\u{1F36F}", "\u{1F36F}", "\u{1F36F}", 0, 18, 0, 0),
    ("\u{1F370}", "\u{1F370}", "\u{1F370}", "\u{1F370}", 0, 18, 0, 0),
    ("\u{1F371}", "\u{1F371}", "\u{1F371}", "\u{1F371}", 0, 18, 0, 0),
    ("\u{1F372}", "\u{1F372}", "\u{1F372}", "\u{1F372}", 0, 18, 0, 0),
    ("\u{1F373}", "\u{1F373}", "\u{1F373}", "\u{1F373}", 0, 18, 0, 0),
    ("\u{1F374}", "\u{1F374}", "\u{1F374}", "\u{1F374}", 0, 18, 0, 0),
    ("\u{1F375}", "\u{1F375}", "\u{1F375}", "\u{1F375}", 0, 18, 0, 0),
    ("\u{1F376}", "\u{1F376}", "\u{1F376}", "\u{1F376}", 0, 18, 0, 0),
    ("\u{1F377}", "\u{1F377}", "\u{1F377}", "\u{1F377}", 0, 18, 0, 0),
    ("\u{1F378}", "\u{1F378}", "\u{1F378}", "\u{1F378}", 0, 18, 0, 0),
    ("\u{1F379}", "\u{1F379}", "\u{1F379}", "\u{1F379}", 0, 18, 0, 0),
    ("\u{1F37A}", "\u{1F37A}", "\u{1F37A}", "\u{1F37A}", 0, 18, 0, 0),
    ("\u{1F37B}", "\u{1F37B}", "\u{1F37B}", "\u{1F37B}", 0, 18, 0, 0),
    ("\u{1F37C}", "\u{1F37C}", "\u{1F37C}", "\u{1F37C}", 0, 18, 0, 0),
    ("\u{1F37D}", "\u{1F37D}", "\u{1F37D}", "\u{1F37D}", 0, 18, 0, 0),
    ("\u{1F37E}", "\u{1F37E}", "\u{1F37E}", "\u{1F37E}", 0, 18, 0, 0),
    ("\u{1F37F}", "\u{1F37F}", "\u{1F37F}", "\u{1F37F}", 0, 18, 0, 0),
    ("\u{1F380}", "\u{1F380}", "\u{1F380}", "\u{1F380}", 0, 18, 0, 0),
    ("\u{1F381}", "\u{1F381}", "\u{1F381}", "\u{1F381}", 0, 18, 0, 0),
    ("\u{1F382}", "\u{1F382}", "\u{1F382}", "\u{1F382}", 0, 18, 0, 0),
    ("\u{1F383}", "\u{1F383}", "\u{1F383}", "\u{1F383}", 0, 18, 0, 0),
    ("\u{1F384}", "\u{1F384}", "\u{1F384}", "\u{1F384}", 0, 18, 0, 0),
    ("\u{1F385}", "\u{1F385}", "\u{1F385}", "\u{1F385}", 0, 18, 0, 0),
    ("\u{1F386}", "\u{1F386}", "\u{1F386}", "\u{1F386}", 0, 18, 0, 0),
    ("\u{1F387}", "\u{1F387}", "\u{1F387}", "\u{1F387}", 0, 18, 0, 0),
    ("\u{1F388}", "\u{1F388}", "\u{1F388}", "\u{1F388}", 0, 18, 0, 0),
    ("\u{1F389}", "\u{1F389}", "\u{1F389}", "\u{1F389}", 0, 18, 0, 0),
    ("\u{1F38A}", "\u{1F38A}", "\u{1F38A}", "\u{1F38A}", 0, 18, 0, 0),
    ("\u{1F38B}", "\u{1F38B}", "\u{1F38B}", "\u{1F38B}", 0, 18, 0, 0),
    ("\u{1F38C}", "\u{1F38C}", "\u{1F38C}", "\u{1F38C}", 0, 18, 0, 0),
    ("\u{1F38D}", "\u{1F38D}", "\u{1F38D}", "\u{1F38D}", 0, 18, 0, 0),
    ("\u{1F38E}", "\u{1F38E}", "\u{1F38E}", "\u{1F38E}", 0, 18, 0, 0),
    ("\u{1F38F}", "\u{1F38F}", "\u{1F38F}", "\u{1F38F}", 0, 18, 0, 0),
    ("\u{1F390}", "\u{1F390}", "\u{1F390}", "\u{1F390}", 0, 18, 0, 0),
    ("\u{1F391}", "\u{1F391}", "\u{1F391}", "\u{1F391}", 0, 18, 0, 0),
    ("\u{1F392}", "\u{1F392}", "\u{1F392}", "\u{1F392}", 0, 18, 0, 0),
    ("\u{1F393}", "\u{1F393}", "\u{1F393}", "\u{1F393}", 0, 18, 0, 0),
    ("\u{1F394}", "\u{1F394}", "\u{1F394}", "\u{1F394}", 0, 18, 0, 0),
    ("\u{1F395}", "\u{1F395}", "\u{1F395}", "\u{1F395}", 0, 18, 0, 0),
    ("\u{1F396}", "\u{1F396}", "\u{1F396}", "\u{1F396}", 0, 18, 0, 0),
    ("\u{1F397}", "\u{1F397}", "\u{1F397}", "\u{1F397}", 0, 18, 0, 0),
    ("\u{1F398}", "\u{1F398}", "\u{1F398}", "\u{1F398}", 0, 18, 0, 0),
    ("\u{1F399}", "\u{1F399}", "\u{1F399}", "\u{1F399}", 0, 18, 0, 0),
    ("\u{1F39A}", "\u{1F39A}", "\u{1F39A}", "\u{1F39A}", 0, 18, 0, 0),
    ("\u{1F39B}", "\u{1F39B}", "\u{1F39B}", "\u{1F39B}", 0, 18, 0, 0),
    ("\u{1F39C}", "\u{1F39C}", "\u{1F39C}", "\u{1F39C}", 0, 18, 0, 0),
    ("\u{1F39D}", "\u{1F39D}", "\u{1F39D}", "\u{1F39D}", 0, 18, 0, 0),
    ("\u{1F39E}", "\u{1F39E}", "\u{1F39E}", "\u{1F39E}", 0, 18, 0, 0),
    ("\u{1F39F}", "\u{1F39F}", "\u{1F39F}", "\u{1F39F}", 0, 18, 0, 0),
    ("\u{1F3A0}", "\u{1F3A0}", "\u{1F3A0}", "\u{1F3A0}", 0, 18, 0, 0),
    ("\u{1F3A1}", "\u{1F3A1}", "\u{1F3A1}", "\u{1F3A1}", 0, 18, 0, 0),
    ("\u{1F3A2}", "\u{1F3A2}", "\u{1F3A2}", "\u{1F3A2}", 0, 18, 0, 0),
    ("\u{1F3A3}", "\u{1F3A3}", "\u{1F3A3}", "\u{1F3A3}", 0, 18, 0, 0),
    ("\u{1F3A4}", "\u{1F3A4}", "\u{1F3A4}", "\u{1F3A4}", 0, 18, 0, 0),
    ("\u{1F3A5}", "\u{1F3A5}", "\u{1F3A5}", "\u{1F3A5}", 0, 18, 0, 0),
    ("\u{1F3A6}", "\u{1F3A6}", "\u{1F3A6}", "\u{1F3A6}", 0, 18, 0, 0),
    ("\u{1F3A7}", "\u{1F3A7}", "\u{1F3A7}", "\u{1F3A7}", 0, 18, 0, 0),
    ("\u{1F3A8}", "\u{1F3A8}", "\u{1F3A8}", "\u{1F3A8}", 0, 18, 0, 0),
    ("\u{1F3A9}", "\u{1F3A9}", "\u{1F3A9}", "\u{1F3A9}", 0, 18, 0, 0),
    ("\u{1F3AA}", "\u{1F3AA}", "\u{1F3AA}", "\u{1F3AA}", 0, 18, 0, 0),
    ("\u{1F3AB}", "\u{1F3AB}", "\u{1F3AB}", "\u{1F3AB}", 0, 18, 0, 0),
    ("\u{1F3AC}", "\u{1F3AC}", "\u{1F3AC}", "\u{1F3AC}", 0, 18, 0, 0),
    ("\u{1F3AD}", "\u{1F3AD}", "\u{1F3AD}", "\u{1F3AD}", 0, 18, 0, 0),
    ("\u{1F3AE}", "\u{1F3AE}", "\u{1F3AE}", "\u{1F3AE}", 0, 18, 0, 0),
    ("\u{1F3AF}", "\u{1F3AF}", "\u{1F3AF}", "\u{1F3AF}", 0, 18, 0, 0),
    ("\u{1F3B0}", "\u{1F3B0}", "\u{1F3B0}", "\u{1F3B0}", 0, 18, 0, 0),
    ("\u{1F3B1}", "\u{1F3B1}", "\u{1F3B1}", "\u{1F3B1}", 0, 18, 0, 0),
    ("\u{1F3B2}", "\u{1F3B2}", "\u{1F3B2}", "\u{1F3B2}", 0, 18, 0, 0),
    ("\u{1F3B3}", "\u{1F3B3}", "\u{1F3B3}", "\u{1F3B3}", 0, 18, 0, 0),
    ("\u{1F3B4}", "\u{1F3B4}", "\u{1F3B4}", "\u{1F3B4}", 0, 18, 0, 0),
    ("\u{1F3B5}", "\u{1F3B5}", "\u{1F3B5}", "\u{1F3B5}", 0, 18, 0, 0),
    ("\u{1F3B6}", "\u{1F3B6}", "\u{1F3B6}", "\u{1F3B6}", 0, 18, 0, 0),
    ("\u{1F3B7}", "\u{1F3B7}", "\u{1F3B7}", "\u{1F3B7}", 0, 18, 0, 0),
    ("\u{1F3B8}", "\u{1F3B8}", "\u{1F3B8}", "\u{1F3B8}", 0, 18, 0, 0),
    ("\u{1F3B9}", "\u{1F3B9}", "\u{1F3B9}", "\u{1F3B9}", 0, 18, 0, 0),
    ("\u{1F3BA}", "\u{1F3BA}", "\u{1F3BA}", "\u{1F3BA}", 0, 18, 0, 0),
    ("\u{1F3BB}", "\u{1F3BB}", "\u{1F3BB}", "\u{1F3BB}", 0, 18, 0, 0),
    ("\u{1F3BC}", "\u{1F3BC}", "\u{1F3BC}", "\u{1F3BC}", 0, 18, 0, 0),
    ("\u{1F3BD}", "\u{1F3BD}", "\u{1F3BD}", "\u{1F3BD}", 0, 18, 0, 0),
    ("\u{1F3BE}", "\u{1F3BE}", "\u{1F3BE}", "\u{1F3BE}", 0, 18, 0, 0),
    ("\u{1F3BF}", "\u{1F3BF}", "\u{1F3BF}", "\u{1F3BF}", 0, 18, 0, 0),
    ("\u{1F3C0}", "\u{1F3C0}", "\u{1F3C0}", "\u{1F3C0}", 0, 18, 0, 0),
    ("\u{1F3C1}", "\u{1F3C1}", "\u{1F3C1}", "\u{1F3C1}", 0, 18, 0, 0),
    ("\u{1F3C2}", "\u{1F3C2}", "\u{1F3C2}", "\u{1F3C2}", 0, 18, 0, 0),
    ("\u{1F3C3}", "\u{1F3C3}", "\u{1F3C3}", "\u{1F3C3}", 0, 18, 0, 0),
    ("\u{1F3C4}", "\u{1F3C4}", "\u{1F3C4}", "\u{1F3C4}", 0, 18, 0, 0),
    ("\u{1F3C5}", "\u{1F3C5}", "\u{1F3C5}", "\u{1F3C5}", 0, 18, 0, 0),
    ("\u{1F3C6}", "\u{1F3C6}", "\u{1F3C6}", "\u{1F3C6}", 0, 18, 0, 0),
    ("\u{1F3C7}", "\u{1F3C7}", "\u{1F3C7}", "\u{1F3C7}", 0, 18, 0, 0),
    ("\u{1F3C8}", "\u{1F3C8}", "\u{1F3C8}", "\u{1F3C8}", 0, 18, 0, 0),
    ("\u{1F3C9}", "\u{1F3C9}", "\u{1F3C9}", "\u{1F3C9}", 0, 18, 0, 0),
    ("\u{1F3CA}", "\u{1F3CA}", "\u{1F3CA}", "\u{1F3CA}", 0, 18, 0, 0),
    ("\u{1F3CB}", "\u{1F3CB}", "\u{1F3CB}", "\u{1F3CB}", 0, 18, 0, 0),
    ("\u{1F3CC}", "\u{1F3CC}", "\u{1F3CC}", "\u{1F3CC}", 0, 18, 0, 0),
    ("\u{1F3CD}", "\u{1F3CD}", "\u{1F3CD}", "\u{1F3CD}", 0, 18, 0, 0),
    ("\u{1F3CE}", "\u{1F3CE}", "\u{1F3CE}", "\u{1F3CE}", 0, 18, 0, 0),
    ("\u{1F3CF}", "\u{1F3CF}", "\u{1F3CF}", "\u{1F3CF}", 0, 18, 0, 0),
    ("\u{1F3D0}", "\u{1F3D0}", "\u{1F3D0}", "\u{1F3D0}", 0, 18, 0, 0),
    ("\u{1F3D1}", "\u{1F3D1}", "\u{1F3D1}", "\u{1F3D1}", 0, 18, 0, 0),
    ("\u{1F3D2}", "\u{1F3D2}", "\u{1F3D2}", "\u{1F3D2}", 0, 18, 0, 0),
    ("\u{1F3D3}", "\u{1F3D3}", "\u{1F3D3}", "\u{1F3D3}", 0, 18, 0, 0),
    ("\u{1F3D4}", "\u{1F3D4}", "\u{1F3D4}", "\u{1F3D4}", 0, 18, 0, 0),
    ("\u{1F3D5}", "\u{1F3D5}", "\u{1F3D5}", "\u{1F3D5}", 0, 18, 0, 0),
    ("\u{1F3D6}", "\u{1F3D6}", "\u{1F3D6}", "\u{1F3D6}", 0, 18, 0, 0),
    ("\u{1F3D7}", "\u{1F3D7}", "\u{1F3D7}", "\u{1F3D7}", 0, 18, 0, 0),
    ("\u{1F3D8}", "\u{1F3D8}", "\u{1F3D8}", "\u{1F3D8}", 0, 18, 0, 0),
    ("\u{1F3D9}", "\u{1F3D9}", "\u{1F3D9}", "\u{1F3D9}", 0, 18, 0, 0),
    ("\u{1F3DA}", "\u{1F3DA}", "\u{1F3DA}", "\u{1F3DA}", 0, 18, 0, 0),
    ("\u{1F3DB}", "\u{1F3DB}", "\u{1F3DB}", "\u{1F3DB}", 0, 18, 0, 0),
    ("\u{1F3DC}", "\u{1F3DC}", "\u{1F3DC}", "\u{1F3DC}", 0, 18, 0, 0),
    ("\u{1F3DD}", "\u{1F3DD}", "\u{1F3DD}", "\u{1F3DD}", 0, 18, 0, 0),
    ("\u{1F3DE}", "\u{1F3DE}", "\u{1F3DE}", "\u{1F3DE}", 0, 18, 0, 0),
    ("\u{1F3DF}", "\u{1F3DF}", "\u{1F3DF}", "\u{1F3DF}", 0, 18, 0, 0),
    ("\u{1F3E0}", "\u{1F3E0}", "\u{1F3E0}", "\u{1F3E0}", 0, 18, 0, 0),
    ("\u{1F3E1}", "\u{1F3E1}", "\u{1F3E1}", "\u{1F3E1}", 0, 18, 0, 0),
    ("\u{1F3E2}", "\u{1F3E2}", "\u{1F3E2}", "\u{1F3E2}", 0, 18, 0, 0),
    ("\u{1F3E3}", "\u{1F3E3}", "\u{1F3E3}", "\u{1F3E3}", 0, 18, 0, 0),
    ("\u{1F3E4}", "\u{1F3E4}", "\u{1F3E4}", "\u{1F3E4}", 0, 18, 0, 0),
    ("\u{1F3E5}", "\u{1F3E5}", "\u{1F3E5}", "\u{1F3E5}", 0, 18, 0, 0),
    ("\u{1F3E6}", "\u{1F3E6}", "\u{1F3E6}", "\u{1F3E6}", 0, 18, 0, 0),
    ("\u{1F3E7}", "\u{1F3E7}", "\u{1F3E7}", "\u{1F3E7}", 0, 18, 0, 0),
    ("\u{1F3E8}", "\u{1F3E8}", "\u{1F3E8}", "\u{1F3E8}", 0, 18, 0, 0),
    ("\u{1F3E9}", "\u{1F3E9}", "\u{1F3E9}", "\u{1F3E9}", 0, 18, 0, 0),
    ("\u{1F3EA}", "\u{1F3EA}", "\u{1F3EA}", "\u{1F3EA}", 0, 18, 0, 0),
    ("\u{1F3EB}", "\u{1F3EB}", "\u{1F3EB}", "\u{1F3EB}", 0, 18, 0, 0),
    ("\u{1F3EC}", "\u{1F3EC}", "\u{1F3EC}", "\u{1F3EC}", 0, 18, 0, 0),
    ("\u{1F3ED}", "\u{1F3ED}", "\u{1F3ED}", "\u{1F3ED}", 0, 18, 0, 0),
    ("\u{1F3EE}", "\u{1F3EE}", "\u{1F3EE}", "\u{1F3EE}", 0, 18, 0, 0),
    ("\u{1F3EF}", "\u{1F3EF}", "\u{1F3EF}", "\u{1F3EF}", 0, 18, 0, 0),
    ("\u{1F3F0}", "\u{1F3F0}", "\u{1F3F0}", "\u{1F3F0}", 0, 18, 0, 0),
    ("\u{1F3F1}", "\u{1F3F1}", "\u{1F3F1}", "\u{1F3F1}", 0, 18, 0, 0),
    ("\u{1F3F2}", "\u{1F3F2}", "\u{1F3F2}", "\u{1F3F2}", 0, 18, 0, 0),
    ("\u{1F3F3}", "\u{1F3F3}", "\u{1F3F3}", "\u{1F3F3}", 0, 18, 0, 0),
    ("\u{1F3F4}", "\u{1F3F4}", "\u{1F3F4}", "\u{1F3F4}", 0, 18, 0, 0),
    ("\u{1F3F5}", "\u{1F3F5}", "\u{1F3F5}", "\u{1F3F5}", 0, 18, 0, 0),
    ("\u{1F3F6}", "\u{1F3F6}", "\u{1F3F6}", "\u{1F3F6}", 0, 18, 0, 0),
    ("\u{1F3F7}", "\u{1F3F7}", "\u{1F3F7}", "\u{1F3F7}", 0, 18, 0, 0),
    ("\u{1F3F8}", "\u{1F3F8}", "\u{1F3F8}", "\u{1F3F8}", 0, 18, 0, 0),
    ("\u{1F3F9}", "\u{1F3F9}", "\u{1F3F9}", "\u{1F3F9}", 0, 18, 0, 0),
    ("\u{1F3FA}", "\u{1F3FA}", "\u{1F3FA}", "\u{1F3FA}", 0, 18, 0, 0),
    ("\u{1F3FB}", "\u{1F3FB}", "\u{1F3FB}", "\u{1F3FB}", 0, 4, 0, 0),
    ("\u{1F3FC}", "\u{1F3FC}", "\u{1F3FC}", "\u{1F3FC}", 0, 4, 0, 0),
    ("\u{1F3FD}", "\u{1F3FD}", "\u{1F3FD}", "\u{1F3FD}", 0, 4, 0, 0),
    ("\u{1F3FE}", "\u{1F3FE}", "\u{1F3FE}", "\u{1F3FE}", 0, 4, 0, 0),
    ("\u{1F3FF}", "\u{1F3FF}", "\u{1F3FF}", "\u{1F3FF}", 0, 4, 0, 0),
    ("\u{1F400}", "\u{1F400}", "\u{1F400}", "\u{1F400}", 0, 18, 0, 0),
    ("\u{1F401}", "\u{1F401}", "\u{1F401}", "\u{1F401}", 0, 18, 0, 0),
    ("\u{1F402}", "\u{1F402}", "\u{1F402}", "\u{1F402}", 0, 18, 0, 0),
    ("\u{1F403}", "\u{1F403}", "\u{1F403}", "\u{1F403}", 0, 18, 0, 0),
    ("\u{1F404}", "\u{1F404}", "\u{1F404}", "\u{1F404}", 0, 18, 0, 0),
    ("\u{1F405}", "\u{1F405}", "\u{1F405}", "\u{1F405}", 0, 18, 0, 0),
    ("\u{1F406}", "\u{1F406}", "\u{1F406}", "\u{1F406}", 0, 18, 0, 0),
    ("\u{1F407}", "\u{1F407}", "\u{1F407}", "\u{1F407}", 0, 18, 0, 0),
    ("\u{1F408}", "\u{1F408}", "\u{1F408}", "\u{1F408}", 0, 18, 0, 0),
    ("\u{1F409}", "\u{1F409}", "\u{1F409}", "\u{1F409}", 0, 18, 0, 0),
    ("\u{1F40A}", "\u{1F40A}", "\u{1F40A}", "\u{1F40A}", 0, 18, 0, 0),
    ("\u{1F40B}", "\u{1F40B}", "\u{1F40B}", "\u{1F40B}", 0, 18, 0, 0),
    ("\u{1F40C}", "\u{1F40C}", "\u{1F40C}", "\u{1F40C}", 0, 18, 0, 0),
    ("\u{1F40D}", "\u{1F40D}", "\u{1F40D}", "\u{1F40D}", 0, 18, 0, 0),
    ("\u{1F40E}", "\u{1F40E}", "\u{1F40E}", "\u{1F40E}", 0, 18, 0, 0),
    ("\u{1F40F}", "\u{1F40F}", "\u{1F40F}", "\u{1F40F}", 0, 18, 0, 0),
    ("\u{1F410}", "\u{1F410}", "\u{1F410}", "\u{1F410}", 0, 18, 0, 0),
    ("\u{1F411}", "\u{1F411}", "\u{1F411}", "\u{1F411}", 0, 18, 0, 0),
    ("\u{1F412}", "\u{1F412}", "\u{1F412}", "\u{1F412}", 0, 18, 0, 0),
    ("\u{1F413}", "\u{1F413}", "\u{1F413}", "\u{1F413}", 0, 18, 0, 0),
    ("\u{1F414}", "\u{1F414}", "\u{1F414}", "\u{1F414}", 0, 18, 0, 0),
    ("\u{1F415}", "\u{1F415}", "\u{1F415}", "\u{1F415}", 0, 18, 0, 0),
    ("\u{1F416}", "\u{1F416}", "\u{1F416}", "\u{1F416}", 0, 18, 0, 0),
    ("\u{1F417}", "\u{1F417}", "\u{1F417}", "\u{1F417}", 0, 18, 0, 0),
    ("\u{1F418}", "\u{1F418}", "\u{1F418}", "\u{1F418}", 0, 18, 0, 0),
    ("\u{1F419}", "\u{1F419}", "\u{1F419}", "\u{1F419}", 0, 18, 0, 0),
    ("\u{1F41A}", "\u{1F41A}", "\u{1F41A}", "\u{1F41A}", 0, 18, 0, 0),
    ("\u{1F41B}", "\u{1F41B}", "\u{1F41B}", "\u{1F41B}", 0, 18, 0, 0),
    ("\u{1F41C}", "\u{1F41C}", "\u{1F41C}", "\u{1F41C}", 0, 18, 0, 0),
    ("\u{1F41D}", "\u{1F41D}", "\u{1F41D}", "\u{1F41D}", 0, 18, 0, 0),
    ("\u{1F41E}", "\u{1F41E}", "\u{1F41E}", "\u{1F41E}", 0, 18, 0, 0),
    ("\u{1F41F}", "\u{1F41F}", "\u{1F41F}", "\u{1F41F}", 0, 18, 0, 0),
    ("\u{1F420}", "\u{1F420}", "\u{1F420}", "\u{1F420}", 0, 18, 0, 0),
    ("\u{1F421}", "\u{1F421}", "\u{1F421}", "\u{1F421}", 0, 18, 0, 0),
    ("\u{1F422}", "\u{1F422}", "\u{1F422}", "\u{1F422}", 0, 18, 0, 0),
    ("\u{1F423}", "\u{1F423}", "\u{1F423}", "\u{1F423}", 0, 18, 0, 0),
    ("\u{1F424}", "\u{1F424}", "\u{1F424}", "\u{1F424}", 0, 18, 0, 0),
    ("\u{1F425}", "\u{1F425}", "\u{1F425}", "\u{1F425}", 0, 18, 0, 0),
    ("\u{1F426}", "\u{1F426}", "\u{1F426}", "\u{1F426}", 0, 18, 0, 0),
    ("\u{1F427}", "\u{1F427}", "\u{1F427}", "\u{1F427}", 0, 18, 0, 0),
    ("\u{1F428}", "\u{1F428}", "\u{1F428}", "\u{1F428}", 0, 18, 0, 0),
    ("\u{1F429}", "\u{1F429}", "\u{1F429}", "\u{1F429}", 0, 18, 0, 0),
    ("\u{1F42A}", "\u{1F42A}", "\u{1F42A}", "\u{1F42A}", 0, 18, 0, 0),
    ("\u{1F42B}", "\u{1F42B}", "\u{1F42B}", "\u{1F42B}", 0, 18, 0, 0),
    ("\u{1F42C}", "\u{1F42C}", "\u{1F42C}", "\u{1F42C}", 0, 18, 0, 0),
    ("\u{1F42D}", "\u{1F42D}", "\u{1F42D}", "\u{1F42D}", 0, 18, 0, 0),
    ("\u{1F42E}", "\u{1F42E}", "\u{1F42E}", "\u{1F42E}", 0, 18, 0, 0),
    ("\u{1F42F}", "\u{1F42F}", "\u{1F42F}", "\u{1F42F}", 0, 18, 0, 0),
    ("\u{1F430}", "\u{1F430}", "\u{1F430}", "\u{1F430}", 0, 18, 0, 0),
    ("\u{1F431}", "\u{1F431}", "\u{1F431}", "\u{1F431}", 0, 18, 0, 0),
    ("\u{1F432}", "\u{1F432}", "\u{1F432}", "\u{1F432}", 0, 18, 0, 0),
    ("\u{1F433}", "\u{1F433}", "\u{1F433}", "\u{1F433}", 0, 18, 0, 0),
    ("\u{1F434}", "\u{1F434}", "\u{1F434}", "\u{1F434}", 0, 18, 0, 0),
    ("\u{1F435}", "\u{1F435}", "\u{1F435}", "\u{1F435}", 0, 18, 0, 0),
    ("\u{1F436}", "\u{1F436}", "\u{1F436}", "\u{1F436}", 0, 18, 0, 0),
    ("\u{1F437}", "\u{1F437}", "\u{1F437}", "\u{1F437}", 0, 18, 0, 0),
    ("\u{1F438}", "\u{1F438}", "\u{1F438}", "\u{1F438}", 0, 18, 0, 0),
    ("\u{1F439}", "\u{1F439}", "\u{1F439}", "\u{1F439}", 0, 18, 0, 0),
    ("\u{1F43A}", "\u{1F43A}", "\u{1F43A}", "\u{1F43A}", 0, 18, 0, 0),
    ("\u{1F43B}", "\u{1F43B}", "\u{1F43B}", "\u{1F43B}", 0, 18, 0, 0),
    ("\u{1F43C}", "\u{1F43C}", "\u{1F43C}", "\u{1F43C}", 0, 18, 0, 0),
    ("\u{1F43D}", "\u{1F43D}", "\u{1F43D}", "\u{1F43D}", 0, 18, 0, 0),
    ("\u{1F43E}", "\u{1F43E}", "\u{1F43E}", "\u{1F43E}", 0, 18, 0, 0),
    ("\u{1F43F}", "\u{1F43F}", "\u{1F43F}", "\u{1F43F}", 0, 18, 0, 0),
    ("\u{1F440}", "\u{1F440}", "\u{1F440}", "\u{1F440}", 0, 18, 0, 0),
    ("\u{1F441}", "\u{1F441}", "\u{1F441}", "\u{1F441}", 0, 18, 0, 0),
    ("\u{1F442}", "\u{1F442}", "\u{1F442}", "\u{1F442}", 0, 18, 0, 0),
    ("\u{1F443}", "\u{1F443}", "\u{1F443}", "\u{1F443}", 0, 18, 0, 0),
    ("\u{1F444}", "\u{1F444}", "\u{1F444}", "\u{1F444}", 0, 18, 0, 0),
    ("\u{1F445}", "\u{1F445}", "\u{1F445}", "\u{1F445}", 0, 18, 0, 0),
    ("\u{1F446}", "\u{1F446}", "\u{1F446}", "\u{1F446}", 0, 18, 0, 0),
    ("\u{1F447}", "\u{1F447}", "\u{1F447}", "\u{1F447}", 0, 18, 0, 0),
    ("\u{1F448}", "\u{1F448}", "\u{1F448}", "\u{1F448}", 0, 18, 0, 0),
    ("\u{1F449}", "\u{1F449}", "\u{1F449}", "\u{1F449}", 0, 18, 0, 0),
    ("\u{1F44A}", "\u{1F44A}", "\u{1F44A}", "\u{1F44A}", 0, 18, 0, 0),
    ("\u{1F44B}", "\u{1F44B}", "\u{1F44B}", "\u{1F44B}", 0, 18, 0, 0),
    ("\u{1F44C}", "\u{1F44C}", "\u{1F44C}", "\u{1F44C}", 0, 18, 0, 0),
    ("\u{1F44D}", "\u{1F44D}", "\u{1F44D}", "\u{1F44D}", 0, 18, 0, 0),
    ("\u{1F44E}", "\u{1F44E}", "\u{1F44E}", "\u{1F44E}", 0, 18, 0, 0),
    ("\u{1F44F}", "\u{1F44F}", "\u{1F44F}", "\u{1F44F}", 0, 18, 0, 0),
    ("\u{1F450}", "\u{1F450}", "\u{1F450}", "\u{1F450}", 0, 18, 0, 0),
    ("\u{1F451}", "\u{1F451}", "\u{1F451}", "\u{1F451}", 0, 18, 0, 0),
    ("\u{1F452}", "\u{1F452}", "\u{1F452}", "\u{1F452}", 0, 18, 0, 0),
    ("\u{1F453}", "\u{1F453}", "\u{1F453}", "\u{1F453}", 0, 18, 0, 0),
    ("\u{1F454}", "\u{1F454}", "\u{1F454}", "\u{1F454}", 0, 18, 0, 0),
    ("\u{1F455}", "\u{1F455}", "\u{1F455}", "\u{1F455}", 0, 18, 0, 0),
    ("\u{1F456}", "\u{1F456}", "\u{1F456}", "\u{1F456}", 0, 18, 0, 0),
    ("\u{1F457}", "\u{1F457}", "\u{1F457}", "\u{1F457}", 0, 18, 0, 0),
    ("\u{1F458}", "\u{1F458}", "\u{1F458}", "\u{1F458}", 0, 18, 0, 0),
    ("\u{1F459}", "\u{1F459}", "\u{1F459}", "\u{1F459}", 0, 18, 0, 0),
    ("\u{1F45A}", "\u{1F45A}", "\u{1F45A}", "\u{1F45A}", 0, 18, 0, 0),
    ("\u{1F45B}", "\u{1F45B}", "\u{1F45B}", "\u{1F45B}", 0, 18, 0, 0),
    ("\u{1F45C}", "\u{1F45C}", "\u{1F45C}", "\u{1F45C}", 0, 18, 0, 0),
    ("\u{1F45D}", "\u{1F45D}", "\u{1F45D}", "\u{1F45D}", 0, 18, 0, 0),
    ("\u{1F45E}", "\u{1F45E}", "\u{1F45E}", "\u{1F45E}", 0, 18, 0, 0),
    ("\u{1F45F}", "\u{1F45F}", "\u{1F45F}", "\u{1F45F}", 0, 18, 0, 0),
    ("\u{1F460}", "\u{1F460}", "\u{1F460}", "\u{1F460}", 0, 18, 0, 0),
    ("\u{1F461}", "\u{1F461}", "\u{1F461}", "\u{1F461}", 0, 18, 0, 0),
    ("\u{1F462}", "\u{1F462}", "\u{1F462}", "\u{1F462}", 0, 18, 0, 0),
    ("\u{1F463}", "\u{1F463}", "\u{1F463}", "\u{1F463}", 0, 18, 0, 0),
    ("\u{1F464}", "\u{1F464}", "\u{1F464}", "\u{1F464}", 0, 18, 0, 0),
    ("\u{1F465}", "\u{1F465}", "\u{1F465}", "\u{1F465}", 0, 18, 0, 0),
    ("\u{1F466}", "\u{1F466}", "\u{1F466}", "\u{1F466}", 0, 18, 0, 0),
    ("\u{1F467}", "\u{1F467}", "\u{1F467}", "\u{1F467}", 0, 18, 0, 0),
    ("\u{1F468}", "\u{1F468}", "\u{1F468}", "\u{1F468}", 0, 18, 0, 0),
    ("\u{1F469}", "\u{1F469}", "\u{1F469}", "\u{1F469}", 0, 18, 0, 0),
    ("\u{1F46A}", "\u{1F46A}", "\u{1F46A}", "\u{1F46A}", 0, 18, 0, 0),
    ("\u{1F46B}", "\u{1F46B}", "\u{1F46B}", "\u{1F46B}", 0, 18, 0, 0),
    ("\u{1F46C}", "\u{1F46C}", "\u{1F46C}", "\u{1F46C}", 0, 18, 0, 0),
    ("\u{1F46D}", "\u{1F46D}", "\u{1F46D}", "\u{1F46D}", 0, 18, 0, 0),
    ("\u{1F46E}", "\u{1F46E}", "\u{1F46E}", "\u{1F46E}", 0, 18, 0, 0),
    ("\u{1F46F}", "\u{1F46F}", "\u{1F46F}", "\u{1F46F}", 0, 18, 0, 0),
    ("\u{1F470}", "\u{1F470}", "\u{1F470}", "\u{1F470}", 0, 18, 0, 0),
    ("\u{1F471}", "\u{1F471}", "\u{1F471}", "\u{1F471}", 0, 18, 0, 0),
    ("\u{1F472}", "\u{1F472}", "\u{1F472}", "\u{1F472}", 0, 18, 0, 0),
    ("\u{1F473}", "\u{1F473}", "\u{1F473}", "\u{1F473}", 0, 18, 0, 0),
    ("\u{1F474}", "\u{1F474}", "\u{1F474}", "\u{1F474}", 0, 18, 0, 0),
    ("\u{1F475}", "\u{1F475}", "\u{1F475}", "\u{1F475}", 0, 18, 0, 0),
    ("\u{1F476}", "\u{1F476}", "\u{1F476}", "\u{1F476}", 0, 18, 0, 0),
    ("\u{1F477}", "\u{1F477}", "\u{1F477}", "\u{1F477}", 0, 18, 0, 0),
    ("\u{1F478}", "\u{1F478}", "\u{1F478}", "\u{1F478}", 0, 18, 0, 0),
    ("\u{1F479}", "\u{1F479}", "\u{1F479}", "\u{1F479}", 0, 18, 0, 0),
    ("\u{1F47A}", "\u{1F47A}", "\u{1F47A}", "\u{1F47A}", 0, 18, 0, 0),
    ("\u{1F47B}", "\u{1F47B}", "\u{1F47B}", "\u{1F47B}", 0, 18, 0, 0),
    ("\u{1F47C}", "\u{1F47C}", "\u{1F47C}", "\u{1F47C}", 0, 18, 0, 0),
    ("\u{1F47D}", "\u{1F47D}", "\u{1F47D}", "\u{1F47D}", 0, 18, 0, 0),
    ("\u{1F47E}", "\u{1F47E}", "\u{1F47E}", "\u{1F47E}", 0, 18, 0, 0),
    ("\u{1F47F}", "\u{1F47F}", "\u{1F47F}", "\u{1F47F}", 0, 18, 0, 0),
    ("\u{1F480}", "\u{1F480}", "\u{1F480}", "\u{1F480}", 0, 18, 0, 0),
    ("\u{1F481}", "\u{1F481}", "\u{1F481}", "\u{1F481}", 0, 18, 0, 0),
    ("\u{1F482}", "\u{1F482}", "\u{1F482}", "\u{1F482}", 0, 18, 0, 0),
    ("\u{1F483}", "\u{1F483}", "\u{1F483}", "\u{1F483}", 0, 18, 0, 0),
    ("\u{1F484}", "\u{1F484}", "\u{1F484}", "\u{1F484}", 0, 18, 0, 0),
    ("\u{1F485}", "\u{1F485}", "\u{1F485}", "\u{1F485}", 0, 18, 0, 0),
    ("\u{1F486}", "\u{1F486}", "\u{1F486}", "\u{1F486}", 0, 18, 0, 0),
    ("\u{1F487}", "\u{1F487}", "\u{1F487}", "\u{1F487}", 0, 18, 0, 0),
    ("\u{1F488}", "\u{1F488}", "\u{1F488}", "\u{1F488}", 0, 18, 0, 0),
    ("\u{1F489}", "\u{1F489}", "\u{1F489}", "\u{1F489}", 0, 18, 0, 0),
    ("\u{1F48A}", "\u{1F48A}", "\u{1F48A}", "\u{1F48A}", 0, 18, 0, 0),
    ("\u{1F48B}", "\u{1F48B}", "\u{1F48B}", "\u{1F48B}", 0, 18, 0, 0),
    ("\u{1F48C}", "\u{1F48C}", "\u{1F48C}", "\u{1F48C}", 0, 18, 0, 0),
    ("\u{1F48D}", "\u{1F48D}", "\u{1F48D}", "\u{1F48D}", 0, 18, 0, 0),
    ("\u{1F48E}", "\u{1F48E}", "\u{1F48E}", "\u{1F48E}", 0, 18, 0, 0),
    ("\u{1F48F}", "\u{1F48F}", "\u{1F48F}", "\u{1F48F}", 0, 18, 0, 0),
    ("\u{1F490}", "\u{1F490}", "\u{1F490}", "\u{1F490}", 0, 18, 0, 0),
    ("\u{1F491}", "\u{1F491}", "\u{1F491}", "\u{1F491}", 0, 18, 0, 0),
    ("\u{1F492}", "\u{1F492}", "\u{1F492}", "\u{1F492}", 0, 18, 0, 0),
    ("\u{1F493}", "\u{1F493}", "\u{1F493}", "\u{1F493}", 0, 18, 0, 0),
    ("\u{1F494}", "\u{1F494}", "\u{1F494}", "\u{1F494}", 0, 18, 0, 0),
    ("\u{1F495}", "\u{1F495}", "\u{1F495}", "\u{1F495}", 0, 18, 0, 0),
    ("\u{1F496}", "\u{1F496}", "\u{1F496}", "\u{1F496}", 0, 18, 0, 0),
    ("\u{1F497}", "\u{1F497}", "\u{1F497}", "\u{1F497}", 0, 18, 0, 0),
    ("\u{1F498}", "\u{1F498}", "\u{1F498}", "\u{1F498}", 0, 18, 0, 0),
    ("\u{1F499}", "\u{1F499}", "\u{1F499}", "\u{1F499}", 0, 18, 0, 0),
    ("\u{1F49A}", "\u{1F49A}", "\u{1F49A}", "\u{1F49A}", 0, 18, 0, 0),
    ("\u{1F49B}", "\u{1F49B}", "\u{1F49B}", "\u{1F49B}", 0, 18, 0, 0),
    ("\u{1F49C}", "\u{1F49C}", "\u{1F49C}", "\u{1F49C}", 0, 18, 0, 0),
    ("\u{1F49D}", "\u{1F49D}", "\u{1F49D}", "\u{1F49D}", 0, 18, 0, 0),
    ("\u{1F49E}", "\u{1F49E}", "\u{1F49E}", "\u{1F49E}", 0, 18, 0, 0),
    ("\u{1F49F}", "\u{1F49F}", "\u{1F49F}", "\u{1F49F}", 0, 18, 0, 0),
    ("\u{1F4A0}", "\u{1F4A0}", "\u{1F4A0}", "\u{1F4A0}", 0, 18, 0, 0),
    ("\u{1F4A1}", "\u{1F4A1}", "\u{1F4A1}", "\u{1F4A1}", 0, 18, 0, 0),
    ("\u{1F4A2}", "\u{1F4A2}", "\u{1F4A2}", "\u{1F4A2}", 0, 18, 0, 0),
    ("\u{1F4A3}", "\u{1F4A3}", "\u{1F4A3}", "\u{1F4A3}", 0, 18, 0, 0),
    ("\u{1F4A4}", "\u{1F4A4}", "\u{1F4A4}", "\u{1F4A4}", 0, 18, 0, 0),
    ("\u{1F4A5}", "\u{1F4A5}", "\u{1F4A5}", "\u{1F4A5}", 0, 18, 0, 0),
    ("\u{1F4A6}", "\u{1F4A6}", "\u{1F4A6}", "\u{1F4A6}", 0, 18, 0, 0),
    ("\u{1F4A7}", "\u{1F4A7}", "\u{1F4A7}", "\u{1F4A7}", 0, 18, 0, 0),
    ("\u{1F4A8}", "\u{1F4A8}", "\u{1F4A8}", "\u{1F4A8}", 0, 18, 0, 0),
    ("\u{1F4A9}", "\u{1F4A9}", "\u{1F4A9}", "\u{1F4A9}", 0, 18, 0, 0),
    ("\u{1F4AA}", "\u{1F4AA}", "\u{1F4AA}", "\u{1F4AA}", 0, 18, 0, 0),
    ("\u{1F4AB}", "\u{1F4AB}", "\u{1F4AB}", "\u{1F4AB}", 0, 18, 0, 0),
    ("\u{1F4AC}", "\u{1F4AC}", "\u{1F4AC}", "\u{1F4AC}", 0, 18, 0, 0),
    ("\u{1F4AD}", "\u{1F4AD}", "\u{1F4AD}", "\u{1F4AD}", 0, 18, 0, 0),
    ("\u{1F4AE}", "\u{1F4AE}", "\u{1F4AE}", "\u{1F4AE}", 0, 18, 0, 0),
    ("\u{1F4AF}", "\u{1F4AF}", "\u{1F4AF}", "\u{1F4AF}", 0, 18, 0, 0),
    ("\u{1F4B0}", "\u{1F4B0}", "\u{1F4B0}", "\u{1F4B0}", 0, 18, 0, 0),
    ("\u{1F4B1}", "\u{1F4B1}", "\u{1F4B1}", "\u{1F4B1}", 0, 18, 0, 0),
    ("\u{1F4B2}", "\u{1F4B2}", "\u{1F4B2}", "\u{1F4B2}", 0, 18, 0, 0),
    ("\u{1F4B3}", "\u{1F4B3}", "\u{1F4B3}", "\u{1F4B3}", 0, 18, 0, 0),
    ("\u{1F4B4}", "\u{1F4B4}", "\u{1F4B4}", "\u{1F4B4}", 0, 18, 0, 0),
    ("\u{1F4B5}", "\u{1F4B5}", "\u{1F4B5}", "\u{1F4B5}", 0, 18, 0, 0),
    ("\u{1F4B6}", "\u{1F4B6}", "\u{1F4B6}", "\u{1F4B6}", 0, 18, 0, 0),
    ("\u{1F4B7}", "\u{1F4B7}", "\u{1F4B7}", "\u{1F4B7}", 0, 18, 0, 0),
    ("\u{1F4B8}", "\u{1F4B8}", "\u{1F4B8}", "\u{1F4B8}", 0, 18, 0, 0),
    ("\u{1F4B9}", "\u{1F4B9}", "\u{1F4B9}", "\u{1F4B9}", 0, 18, 0, 0),
    ("\u{1F4BA}", "\u{1F4BA}", "\u{1F4BA}", "\u{1F4BA}", 0, 18, 0, 0),
    ("\u{1F4BB}", "\u{1F4BB}", "\u{1F4BB}", "\u{1F4BB}", 0, 18, 0, 0),
    ("\u{1F4BC}", "\u{1F4BC}", "\u{1F4BC}", "\u{1F4BC}", 0, 18, 0, 0),
    ("\u{1F4BD}", "\u{1F4BD}", "\u{1F4BD}", "\u{1F4BD}", 0, 18, 0, 0),
    ("\u{1F4BE}", "\u{1F4BE}", "\u{1F4BE}", "\u{1F4BE}", 0, 18, 0, 0),
    ("\u{1F4BF}", "\u{1F4BF}", "\u{1F4BF}", "\u{1F4BF}", 0, 18, 0, 0),
    ("\u{1F4C0}", "\u{1F4C0}", "\u{1F4C0}", "\u{1F4C0}", 0, 18, 0, 0),
    ("\u{1F4C1}", "\u{1F4C1}", "\u{1F4C1}", "\u{1F4C1}", 0, 18, 0, 0),
    ("\u{1F4C2}", "\u{1F4C2}", "\u{1F4C2}", "\u{1F4C2}", 0, 18, 0, 0),
    ("\u{1F4C3}", "\u{1F4C3}", "\u{1F4C3}", "\u{1F4C3}", 0, 18, 0, 0),
    ("\u{1F4C4}", "\u{1F4C4}", "\u{1F4C4}", "\u{1F4C4}", 0, 18, 0, 0),
    ("\u{1F4C5}", "\u{1F4C5}", "\u{1F4C5}", "\u{1F4C5}", 0, 18, 0, 0),
    ("\u{1F4C6}", "\u{1F4C6}", "\u{1F4C6}", "\u{1F4C6}", 0, 18, 0, 0),
    ("\u{1F4C7}", "\u{1F4C7}", "\u{1F4C7}", "\u{1F4C7}", 0, 18, 0, 0),
    ("\u{1F4C8}", "\u{1F4C8}", "\u{1F4C8}", "\u{1F4C8}", 0, 18, 0, 0),
    ("\u{1F4C9}", "\u{1F4C9}", "\u{1F4C9}", "\u{1F4C9}", 0, 18, 0, 0),
    ("\u{1F4CA}", "\u{1F4CA}", "\u{1F4CA}", "\u{1F4CA}", 0, 18, 0, 0),
    ("\u{1F4CB}", "\u{1F4CB}", "\u{1F4CB}", "\u{1F4CB}", 0, 18, 0, 0),
    ("\u{1F4CC}", "\u{1F4CC}", "\u{1F4CC}", "\u{1F4CC}", 0, 18, 0, 0),
    ("\u{1F4CD}", "\u{1F4CD}", "\u{1F4CD}", "\u{1F4CD}", 0, 18, 0, 0),
    ("\u{1F4CE}", "\u{1F4CE}", "\u{1F4CE}", "\u{1F4CE}", 0, 18, 0, 0),
    ("\u{1F4CF}", "\u{1F4CF}", "\u{1F4CF}", "\u{1F4CF}", 0, 18, 0, 0),
    ("\u{1F4D0}", "\u{1F4D0}", "\u{1F4D0}", "\u{1F4D0}", 0, 18, 0, 0),
    ("\u{1F4D1}", "\u{1F4D1}", "\u{1F4D1}", "\u{1F4D1}", 0, 18, 0, 0),
    ("\u{1F4D2}", "\u{1F4D2}", "\u{1F4D2}", "\u{1F4D2}", 0, 18, 0, 0),
    ("\u{1F4D3}", "\u{1F4D3}", "\u{1F4D3}", "\u{1F4D3}", 0, 18, 0, 0),
    ("\u{1F4D4}", "\u{1F4D4}", "\u{1F4D4}", "\u{1F4D4}", 0, 18, 0, 0),
    ("\u{1F4D5}", "\u{1F4D5}", "\u{1F4D5}", "\u{1F4D5}", 0, 18, 0, 0),
    ("\u{1F4D6}", "\u{1F4D6}", "\u{1F4D6}", "\u{1F4D6}", 0, 18, 0, 0),
    ("\u{1F4D7}", "\u{1F4D7}", "\u{1F4D7}", "\u{1F4D7}", 0, 18, 0, 0),
    ("\u{1F4D8}", "\u{1F4D8}", "\u{1F4D8}", "\u{1F4D8}", 0, 18, 0, 0),
    ("\u{1F4D9}", "\u{1F4D9}", "\u{1F4D9}", "\u{1F4D9}", 0, 18, 0, 0),
    ("\u{1F4DA}", "\u{1F4DA}", "\u{1F4DA}", "\u{1F4DA}", 0, 18, 0, 0),
    ("\u{1F4DB}", "\u{1F4DB}", "\u{1F4DB}", "\u{1F4DB}", 0, 18, 0, 0),
    ("\u{1F4DC}", "\u{1F4DC}", "\u{1F4DC}", "\u{1F4DC}", 0, 18, 0, 0),
    ("\u{1F4DD}", "\u{1F4DD}", "\u{1F4DD}", "\u{1F4DD}", 0, 18, 0, 0),
    ("\u{1F4DE}", "\u{1F4DE}", "\u{1F4DE}", "\u{1F4DE}", 0, 18, 0, 0),
    ("\u{1F4DF}", "\u{1F4DF}", "\u{1F4DF}", "\u{1F4DF}", 0, 18, 0, 0),
    ("\u{1F4E0}", "\u{1F4E0}", "\u{1F4E0}", "\u{1F4E0}", 0, 18, 0, 0),
    ("\u{1F4E1}", "\u{1F4E1}", "\u{1F4E1}", "\u{1F4E1}", 0, 18, 0, 0),
    ("\u{1F4E2}", "\u{1F4E2}", "\u{1F4E2}", "\u{1F4E2}", 0, 18, 0, 0),
    ("\u{1F4E3}", "\u{1F4E3}", "\u{1F4E3}", "\u{1F4E3}", 0, 18, 0, 0),
    ("\u{1F4E4}", "\u{1F4E4}", "\u{1F4E4}", "\u{1F4E4}", 0, 18, 0, 0),
    ("\u{1F4E5}", "\u{1F4E5}", "\u{1F4E5}", "\u{1F4E5}", 0, 18, 0, 0),
    ("\u{1F4E6}", "\u{1F4E6}", "\u{1F4E6}", "\u{1F4E6}", 0, 18, 0, 0),
    ("\u{1F4E7}", "\u{1F4E7}", "\u{1F4E7}", "\u{1F4E7}", 0, 18, 0, 0),
    ("\u{1F4E8}", "\u{1F4E8}", "\u{1F4E8}", "\u{1F4E8}", 0, 18, 0, 0),
    ("\u{1F4E9}", "\u{1F4E9}", "\u{1F4E9}", "\u{1F4E9}", 0, 18, 0, 0),
    ("\u{1F4EA}", "\u{1F4EA}", "\u{1F4EA}", "\u{1F4EA}", 0, 18, 0, 0),
    ("\u{1F4EB}", "\u{1F4EB}", "\u{1F4EB}", "\u{1F4EB}", 0, 18, 0, 0),
    ("\u{1F4EC}", "\u{1F4EC}", "\u{1F4EC}", "\u{1F4EC}", 0, 18, 0, 0),
    ("\u{1F4ED}", "\u{1F4ED}", "\u{1F4ED}", "\u{1F4ED}", 0, 18, 0, 0),
    ("\u{1F4EE}", "\u{1F4EE}", "\u{1F4EE}", "\u{1F4EE}", 0, 18, 0, 0),
    ("\u{1F4EF}", "\u{1F4EF}", "\u{1F4EF}", "\u{1F4EF}", 0, 18, 0, 0),
    ("\u{1F4F0}", "\u{1F4F0}", "\u{1F4F0}", "\u{1F4F0}", 0, 18, 0, 0),
    ("\u{1F4F1}", "\u{1F4F1}", "\u{1F4F1}", "\u{1F4F1}", 0, 18, 0, 0),
    ("\u{1F4F2}", "\u{1F4F2}", "\u{1F4F2}", "\u{1F4F2}", 0, 18, 0, 0),
    ("\u{1F4F3}", "\u{1F4F3}", "\u{1F4F3}", "\u{1F4F3}", 0, 18, 0, 0),
    ("\u{1F4F4}", "\u{1F4F4}", "\u{1F4F4}", "\u{1F4F4}", 0, 18, 0, 0),
    ("\u{1F4F5}", "\u{1F4F5}", "\u{1F4F5}", "\u{1F4F5}", 0, 18, 0, 0),
    ("\u{1F4F6}", "\u{1F4F6}", "\u{1F4F6}", "\u{1F4F6}", 0, 18, 0, 0),
    ("\u{1F4F7}", "\u{1F4F7}", "\u{1F4F7}", "\u{1F4F7}", 0, 18, 0, 0),
    ("\u{1F4F8}", "\u{1F4F8}", "\u{1F4F8}", "\u{1F4F8}", 0, 18, 0, 0),
    ("\u{1F4F9}", "\u{1F4F9}", "\u{1F4F9}", "\u{1F4F9}", 0, 18, 0, 0),
    ("\u{1F4FA}", "\u{1F4FA}", "\u{1F4FA}", "\u{1F4FA}", 0, 18, 0, 0),
    ("\u{1F4FB}", "\u{1F4FB}", "\u{1F4FB}", "\u{1F4FB}", 0, 18, 0, 0),
    ("\u{1F4FC}", "\u{1F4FC}", "\u{1F4FC}", "\u{1F4FC}", 0, 18, 0, 0),
    ("\u{1F4FD}", "\u{1F4FD}", "\u{1F4FD}", "\u{1F4FD}", 0, 18, 0, 0),
    ("\u{1F4FE}", "\u{1F4FE}", "\u{1F4FE}", "\u{1F4FE}", 0, 18, 0, 0),
    ("\u{1F4FF}", "\u{1F4FF}", "\u{1F4FF}", "\u{1F4FF}", 0, 18, 0, 0),
    ("\u{1F500}", "\u{1F500}", "\u{1F500}", "\u{1F500}", 0, 18, 0, 0),
    ("\u{1F501}", "\u{1F501}", "\u{1F501}", "\u{1F501}", 0, 18, 0, 0),
    ("\u{1F502}", "\u{1F502}", "\u{1F502}", "\u{1F502}", 0, 18, 0, 0),
    ("\u{1F503}", "\u{1F503}", "\u{1F503}", "\u{1F503}", 0, 18, 0, 0),
    ("\u{1F504}", "\u{1F504}", "\u{1F504}", "\u{1F504}", 0, 18, 0, 0),
    ("\u{1F505}", "\u{1F505}", "\u{1F505}", "\u{1F505}", 0, 18, 0, 0),
    ("\u{1F506}", "\u{1F506}", "\u{1F506}", "\u{1F506}", 0, 18, 0, 0),
    ("\u{1F507}", "\u{1F507}", "\u{1F507}", "\u{1F507}", 0, 18, 0, 0),
    ("\u{1F508}", "\u{1F508}", "\u{1F508}", "\u{1F508}", 0, 18, 0, 0),
    ("\u{1F509}", "\u{1F509}", "\u{1F509}", "\u{1F509}", 0, 18, 0, 0),
    ("\u{1F50A}", "\u{1F50A}", "\u{1F50A}", "\u{1F50A}", 0, 18, 0, 0),
    ("\u{1F50B}", "\u{1F50B}", "\u{1F50B}", "\u{1F50B}", 0, 18, 0, 0),
    ("\u{1F50C}", "\u{1F50C}", "\u{1F50C}", "\u{1F50C}", 0, 18, 0, 0),
    ("\u{1F50D}", "\u{1F50D}", "\u{1F50D}", "\u{1F50D}", 0, 18, 0, 0),
    ("\u{1F50E}", "\u{1F50E}", "\u{1F50E}", "\u{1F50E}", 0, 18, 0, 0),
    ("\u{1F50F}", "\u{1F50F}", "\u{1F50F}", "\u{1F50F}", 0, 18, 0, 0),
    ("\u{1F510}", "\u{1F510}", "\u{1F510}", "\u{1F510}", 0, 18, 0, 0),
    ("\u{1F511}", "\u{1F511}", "\u{1F511}", "\u{1F511}", 0, 18, 0, 0),
    ("\u{1F512}", "\u{1F512}", "\u{1F512}", "\u{1F512}", 0, 18, 0, 0),
    ("\u{1F513}", "\u{1F513}", "\u{1F513}", "\u{1F513}", 0, 18, 0, 0),
    ("\u{1F514}", "\u{1F514}", "\u{1F514}", "\u{1F514}", 0, 18, 0, 0),
    ("\u{1F515}", "\u{1F515}", "\u{1F515}", "\u{1F515}", 0, 18, 0, 0),
    ("\u{1F516}", "\u{1F516}", "\u{1F516}", "\u{1F516}", 0, 18, 0, 0),
    ("\u{1F517}", "\u{1F517}", "\u{1F517}", "\u{1F517}", 0, 18, 0, 0),
    ("\u{1F518}", "\u{1F518}", "\u{1F518}", "\u{1F518}", 0, 18, 0, 0),
    ("\u{1F519}", "\u{1F519}", "\u{1F519}", "\u{1F519}", 0, 18, 0, 0),
    ("\u{1F51A}", "\u{1F51A}", "\u{1F51A}", "\u{1F51A}", 0, 18, 0, 0),
    ("\u{1F51B}", "\u{1F51B}", "\u{1F51B}", "\u{1F51B}", 0, 18, 0, 0),
    ("\u{1F51C}", "\u{1F51C}", "\u{1F51C}", "\u{1F51C}", 0, 18, 0, 0),
    ("\u{1F51D}", "\u{1F51D}", "\u{1F51D}", "\u{1F51D}", 0, 18, 0, 0),
    ("\u{1F51E}", "\u{1F51E}", "\u{1F51E}", "\u{1F51E}", 0, 18, 0, 0),
    ("\u{1F51F}", "\u{1F51F}", "\u{1F51F}", "\u{1F51F}", 0, 18, 0, 0),
    ("\u{1F520}", "\u{1F520}", "\u{1F520}", "\u{1F520}", 0, 18, 0, 0),
    ("\u{1F521}", "\u{1F521}", "\u{1F521}", "\u{1F521}", 0, 18, 0, 0),
    ("\u{1F522}", "\u{1F522}", "\u{1F522}", "\u{1F522}", 0, 18, 0, 0),
    ("\u{1F523}", "\u{1F523}", "\u{1F523}", "\u{1F523}", 0, 18, 0, 0),
    ("\u{1F524}", "\u{1F524}", "\u{1F524}", "\u{1F524}", 0, 18, 0, 0),
    ("\u{1F525}", "\u{1F525}", "\u{1F525}", "\u{1F525}", 0, 18, 0, 0),
    ("\u{1F526}", "\u{1F526}", "\u{1F526}", "\u{1F526}", 0, 18, 0, 0),
    ("\u{1F527}", "\u{1F527}", "\u{1F527}", "\u{1F527}", 0, 18, 0, 0),
    ("\u{1F528}", "\u{1F528}", "\u{1F528}", "\u{1F528}", 0, 18, 0, 0),
    ("\u{1F529}", "\u{1F529}", "\u{1F529}", "\u{1F529}", 0, 18, 0, 0),
    ("\u{1F52A}", "\u{1F52A}", "\u{1F52A}", "\u{1F52A}", 0, 18, 0, 0),
    ("\u{1F52B}", "\u{1F52B}", "\u{1F52B}", "\u{1F52B}", 0, 18, 0, 0),
    ("\u{1F52C}", "\u{1F52C}", "\u{1F52C}", "\u{1F52C}", 0, 18, 0, 0),
    ("\u{1F52D}", "\u{1F52D}", "\u{1F52D}", "\u{1F52D}", 0, 18, 0, 0),
    ("\u{1F52E}", "\u{1F52E}", "\u{1F52E}", "\u{1F52E}", 0, 18, 0, 0),
    ("\u{1F52F}", "\u{1F52F}", "\u{1F52F}", "\u{1F52F}", 0, 18, 0, 0),
    ("\u{1F530}", "\u{1F530}", "\u{1F530}", "\u{1F530}", 0, 18, 0, 0),
    ("\u{1F531}", "\u{1F531}", "\u{1F531}", "\u{1F531}", 0, 18, 0, 0),
    ("\u{1F532}", "\u{1F532}", "\u{1F532}", "\u{1F532}", 0, 18, 0, 0),
    ("\u{1F533}", "\u{1F533}", "\u{1F533}", "\u{1F533}", 0, 18, 0, 0),
    ("\u{1F534}", "\u{1F534}", "\u{1F534}", "\u{1F534}", 0, 18, 0, 0),
    ("\u{1F535}", "\u{1F535}", "\u{1F535}", "\u{1F535}", 0, 18, 0, 0),
    ("\u{1F536}", "\u{1F536}", "\u{1F536}", "\u{1F536}", 0, 18, 0, 0),
    ("\u{1F537}", "\u{1F537}", "\u{1F537}", "\u{1F537}", 0, 18, 0, 0),
    ("\u{1F538}", "\u{1F538}", "\u{1F538}", "\u{1F538}", 0, 18, 0, 0),
    ("\u{1F539}", "\u{1F539}", "\u{1F539}", "\u{1F539}", 0, 18, 0, 0),
    ("\u{1F53A}", "\u{1F53A}", "\u{1F53A}", "\u{1F53A}", 0, 18, 0, 0),
    ("\u{1F53B}", "\u{1F53B}", "\u{1F53B}", "\u{1F53B}", 0, 18, 0, 0),
    ("\u{1F53C}", "\u{1F53C}", "\u{1F53C}", "\u{1F53C}", 0, 18, 0, 0),
    ("\u{1F53D}", "\u{1F53D}", "\u{1F53D}", "\u{1F53D}", 0, 18, 0, 0),
    ("\u{1F53E}", "\u{1F53E}", "\u{1F53E}", "\u{1F53E}", 0, 18, 0, 0),
    ("\u{1F53F}", "\u{1F53F}", "\u{1F53F}", "\u{1F53F}", 0, 18, 0, 0),
    ("\u{1F540}", "\u{1F540}", "\u{1F540}", "\u{1F540}", 0, 18, 0, 0),
    ("\u{1F541}", "\u{1F541}", "\u{1F541}", "\u{1F541}", 0, 18, 0, 0),
    ("\u{1F542}", "\u{1F542}", "\u{1F542}", "\u{1F542}", 0, 18, 0, 0),
    ("\u{1F543}", "\u{1F543}", "\u{1F543}", "\u{1F543}", 0, 18, 0, 0),
    ("\u{1F544}", "\u{1F544}", "\u{1F544}", "\u{1F544}", 0, 18, 0, 0),
    ("\u{1F545}", "\u{1F545}", "\u{1F545}", "\u{1F545}", 0, 18, 0, 0),
    ("\u{1F546}", "\u{1F546}", "\u{1F546}", "\u{1F546}", 0, 18, 0, 0),
    ("\u{1F547}", "\u{1F547}", "\u{1F547}", "\u{1F547}", 0, 18, 0, 0),
    ("\u{1F548}", "\u{1F548}", "\u{1F548}", "\u{1F548}", 0, 18, 0, 0),
    ("\u{1F549}", "\u{1F549}", "\u{1F549}", "\u{1F549}", 0, 18, 0, 0),
    ("\u{1F54A}", "\u{1F54A}", "\u{1F54A}", "\u{1F54A}", 0, 18, 0, 0),
    ("\u{1F54B}", "\u{1F54B}", "\u{1F54B}", "\u{1F54B}", 0, 18, 0, 0),
    ("\u{1F54C}", "\u{1F54C}", "\u{1F54C}", "\u{1F54C}", 0, 18, 0, 0),
    ("\u{1F54D}", "\u{1F54D}", "\u{1F54D}", "\u{1F54D}", 0, 18, 0, 0),
    ("\u{1F54E}", "\u{1F54E}", "\u{1F54E}", "\u{1F54E}", 0, 18, 0, 0),
    ("\u{1F54F}", "\u{1F54F}", "\u{1F54F}", "\u{1F54F}", 0, 18, 0, 0),
    ("\u{1F550}", "\u{1F550}", "\u{1F550}", "\u{1F550}", 0, 18, 0, 0),
    ("\u{1F551}", "\u{1F551}", "\u{1F551}", "\u{1F551}", 0, 18, 0, 0),
    ("\u{1F552}", "\u{1F552}", "\u{1F552}", "\u{1F552}", 0, 18, 0, 0),
    ("\u{1F553}", "\u{1F553}", "\u{1F553}", "\u{1F553}", 0, 18, 0, 0),
    ("\u{1F554}", "\u{1F554}", "\u{1F554}", "\u{1F554}", 0, 18, 0, 0),
    ("\u{1F555}", "\u{1F555}", "\u{1F555}", "\u{1F555}", 0, 18, 0, 0),
    ("\u{1F556}", "\u{1F556}", "\u{1F556}", "\u{1F556}", 0, 18, 0, 0),
    ("\u{1F557}", "\u{1F557}", "\u{1F557}", "\u{1F557}", 0, 18, 0, 0),
    ("\u{1F558}", "\u{1F558}", "\u{1F558}", "\u{1F558}", 0, 18, 0, 0),
    ("\u{1F559}", "\u{1F559}", "\u{1F559}", "\u{1F559}", 0, 18, 0, 0),
    ("\u{1F55A}", "\u{1F55A}", "\u{1F55A}", "\u{1F55A}", 0, 18, 0, 0),
    ("\u{1F55B}", "\u{1F55B}", "\u{1F55B}", "\u{1F55B}", 0, 18, 0, 0),
    ("\u{1F55C}", "\u{1F55C}", "\u{1F55C}", "\u{1F55C}", 0, 18, 0, 0),
    ("\u{1F55D}", "\u{1F55D}", "\u{1F55D}", "\u{1F55D}", 0, 18, 0, 0),
    ("\u{1F55E}", "\u{1F55E}", "\u{1F55E}", "\u{1F55E}", 0, 18, 0, 0),
    ("\u{1F55F}", "\u{1F55F}", "\u{1F55F}", "\u{1F55F}", 0, 18, 0, 0),
    ("\u{1F560}", "\u{1F560}", "\u{1F560}", "\u{1F560}", 0, 18, 0, 0),
    ("\u{1F561}", "\u{1F561}", "\u{1F561}", "\u{1F561}", 0, 18, 0, 0),
    ("\u{1F562}", "\u{1F562}", "\u{1F562}", "\u{1F562}", 0, 18, 0, 0),
    ("\u{1F563}", "\u{1F563}", "\u{1F563}", "\u{1F563}", 0, 18, 0, 0),
    ("\u{1F564}", "\u{1F564}", "\u{1F564}", "\u{1F564}", 0, 18, 0, 0),
    ("\u{1F565}", "\u{1F565}", "\u{1F565}", "\u{1F565}", 0, 18, 0, 0),
    ("\u{1F566}", "\u{1F566}", "\u{1F566}", "\u{1F566}", 0, 18, 0, 0),
    ("\u{1F567}", "\u{1F567}", "\u{1F567}", "\u{1F567}", 0, 18, 0, 0),
    ("\u{1F568}", "\u{1F568}", "\u{1F568}", "\u{1F568}", 0, 18, 0, 0),
    ("\u{1F569}", "\u{1F569}", "\u{1F569}", "\u{1F569}", 0, 18, 0, 0),
    ("\u{1F56A}", "\u{1F56A}", "\u{1F56A}", "\u{1F56A}", 0, 18, 0, 0),
    ("\u{1F56B}", "\u{1F56B}", "\u{1F56B}", "\u{1F56B}", 0, 18, 0, 0),
    ("\u{1F56C}", "\u{1F56C}", "\u{1F56C}", "\u{1F56C}", 0, 18, 0, 0),
    ("\u{1F56D}", "\u{1F56D}", "\u{1F56D}", "\u{1F56D}", 0, 18, 0, 0),
    ("\u{1F56E}", "\u{1F56E}", "\u{1F56E}", "\u{1F56E}", 0, 18, 0, 0),
    ("\u{1F56F}", "\u{1F56F}", "\u{1F56F}", "\u{1F56F}", 0, 18, 0, 0),
    ("\u{1F570}", "\u{1F570}", "\u{1F570}", "\u{1F570}", 0, 18, 0, 0),
    ("\u{1F571}", "\u{1F571}", "\u{1F571}", "\u{1F571}", 0, 18, 0, 0),
    ("\u{1F572}", "\u{1F572}", "\u{1F572}", "\u{1F572}", 0, 18, 0, 0),
    ("\u{1F573}", "\u{1F573}", "\u{1F573}", "\u{1F573}", 0, 18, 0, 0),
    ("\u{1F574}", "\u{1F574}", "\u{1F574}", "\u{1F574}", 0, 18, 0, 0),
    ("\u{1F575}", "\u{1F575}", "\u{1F575}", "\u{1F575}", 0, 18, 0, 0),
    ("\u{1F576}", "\u{1F576}", "\u{1F576}", "\u{1F576}", 0, 18, 0, 0),
    ("\u{1F577}", "\u{1F577}", "\u{1F577}", "\u{1F577}", 0, 18, 0, 0),
    ("\u{1F578}", "\u{1F578}", "\u{1F578}", "\u{1F578}", 0, 18, 0, 0),
    ("\u{1F579}", "\u{1F579}", "\u{1F579}", "\u{1F579}", 0, 18, 0, 0),
    ("\u{1F57A}", "\u{1F57A}", "\u{1F57A}", "\u{1F57A}", 0, 18, 0, 0),
    ("\u{1F57B}", "\u{1F57B}", "\u{1F57B}", "\u{1F57B}", 0, 18, 0, 0),
    ("\u{1F57C}", "\u{1F57C}", "\u{1F57C}", "\u{1F57C}", 0, 18, 0, 0),
    ("\u{1F57D}", "\u{1F57D}", "\u{1F57D}", "\u{1F57D}", 0, 18, 0, 0),
    ("\u{1F57E}", "\u{1F57E}", "\u{1F57E}", "\u{1F57E}", 0, 18, 0, 0),
    ("\u{1F57F}", "\u{1F57F}", "\u{1F57F}", "\u{1F57F}", 0, 18, 0, 0),
    ("\u{1F580}", "\u{1F580}", "\u{1F580}", "\u{1F580}", 0, 18, 0, 0),
    ("\u{1F581}", "\u{1F581}", "\u{1F581}", "\u{1F581}", 0, 18, 0, 0),
    ("\u{1F582}", "\u{1F582}", "\u{1F582}", "\u{1F582}", 0, 18, 0, 0),
    ("\u{1F583}", "\u{1F583}", "\u{1F583}", "\u{1F583}", 0, 18, 0, 0),
    ("\u{1F584}", "\u{1F584}", "\u{1F584}", "\u{1F584}", 0, 18, 0, 0),
    ("\u{1F585}", "\u{1F585}", "\u{1F585}", "\u{1F585}", 0, 18, 0, 0),
    ("\u{1F586}", "\u{1F586}", "\u{1F586}", "\u{1F586}", 0, 18, 0, 0),
    ("\u{1F587}", "\u{1F587}", "\u{1F587}", "\u{1F587}", 0, 18, 0, 0),
    ("\u{1F588}", "\u{1F588}", "\u{1F588}", "\u{1F588}", 0, 18, 0, 0),
    ("\u{1F589}", "\u{1F589}", "\u{1F589}", "\u{1F589}", 0, 18, 0, 0),
    ("\u{1F58A}", "\u{1F58A}", "\u{1F58A}", "\u{1F58A}", 0, 18, 0, 0),
    ("\u{1F58B}", "\u{1F58B}", "\u{1F58B}", "\u{1F58B}", 0, 18, 0, 0),
    ("\u{1F58C}", "\u{1F58C}", "\u{1F58C}", "\u{1F58C}", 0, 18, 0, 0),
    ("\u{1F58D}", "\u{1F58D}", "\u{1F58D}", "\u{1F58D}", 0, 18, 0, 0),
    ("\u{1F58E}", "\u{1F58E}", "\u{1F58E}", "\u{1F58E}", 0, 18, 0, 0),
    ("\u{1F58F}", "\u{1F58F}", "\u{1F58F}", "\u{1F58F}", 0, 18, 0, 0),
    ("\u{1F590}", "\u{1F590}", "\u{1F590}", "\u{1F590}", 0, 18, 0, 0),
    ("\u{1F591}", "\u{1F591}", "\u{1F591}", "\u{1F591}", 0, 18, 0, 0),
    ("\u{1F592}", "\u{1F592}", "\u{1F592}", "\u{1F592}", 0, 18, 0, 0),
    ("\u{1F593}", "\u{1F593}", "\u{1F593}", "\u{1F593}", 0, 18, 0, 0),
    ("\u{1F594}", "\u{1F594}", "\u{1F594}", "\u{1F594}", 0, 18, 0, 0),
    ("\u{1F595}", "\u{1F595}", "\u{1F595}", "\u{1F595}", 0, 18, 0, 0),
    ("\u{1F596}", "\u{1F596}", "\u{1F596}", "\u{1F596}", 0, 18, 0, 0),
    ("\u{1F597}", "\u{1F597}", "\u{1F597}", "\u{1F597}", 0, 18, 0, 0),
    ("\u{1F598}", "\u{1F598}", "\u{1F598}", "\u{1F598}", 0, 18, 0, 0),
    ("\u{1F599}", "\u{1F599}", "\u{1F599}", "\u{1F599}", 0, 18, 0, 0),
    ("\u{1F59A}", "\u{1F59A}", "\u{1F59A}", "\u{1F59A}", 0, 18, 0, 0),
    ("\u{1F59B}", "\u{1F59B}", "\u{1F59B}", "\u{1F59B}", 0, 18, 0, 0),
    ("\u{1F59C}", "\u{1F59C}", "\u{1F59C}", "\u{1F59C}", 0, 18, 0, 0),
    ("\u{1F59D}", "\u{1F59D}", "\u{1F59D}", "\u{1F59D}", 0, 18, 0, 0),
    ("\u{1F59E}", "\u{1F59E}", "\u{1F59E}", "\u{1F59E}", 0, 18, 0, 0),
    ("\u{1F59F}", "\u{1F59F}", "\u{1F59F}", "\u{1F59F}", 0, 18, 0, 0),
    ("\u{1F5A0}", "\u{1F5A0}", "\u{1F5A0}", "\u{1F5A0}", 0, 18, 0, 0),
    ("\u{1F5A1}", "\u{1F5A1}", "\u{1F5A1}", "\u{1F5A1}", 0, 18, 0, 0),
    ("\u{1F5A2}", "\u{1F5A2}", "\u{1F5A2}", "\u{1F5A2}", 0, 18, 0, 0),
    ("\u{1F5A3}", "\u{1F5A3}", "\u{1F5A3}", "\u{1F5A3}", 0, 18, 0, 0),
    ("\u{1F5A4}", "\u{1F5A4}", "\u{1F5A4}", "\u{1F5A4}", 0, 18, 0, 0),
    ("\u{1F5A5}", "\u{1F5A5}", "\u{1F5A5}", "\u{1F5A5}", 0, 18, 0, 0),
    ("\u{1F5A6}", "\u{1F5A6}", "\u{1F5A6}", "\u{1F5A6}", 0, 18, 0, 0),
    ("\u{1F5A7}", "\u{1F5A7}", "\u{1F5A7}", "\u{1F5A7}", 0, 18, 0, 0),
    ("\u{1F5A8}", "\u{1F5A8}", "\u{1F5A8}", "\u{1F5A8}", 0, 18, 0, 0),
    ("\u{1F5A9}", "\u{1F5A9}", "\u{1F5A9}", "\u{1F5A9}", 0, 18, 0, 0),
    ("\u{1F5AA}", "\u{1F5AA}", "\u{1F5AA}", "\u{1F5AA}", 0, 18, 0, 0),
    ("\u{1F5AB}", "\u{1F5AB}", "\u{1F5AB}", "\u{1F5AB}", 0, 18, 0, 0),
    ("\u{1F5AC}", "\u{1F5AC}", "\u{1F5AC}", "\u{1F5AC}", 0, 18, 0, 0),
    ("\u{1F5AD}", "\u{1F5AD}", "\u{1F5AD}", "\u{1F5AD}", 0, 18, 0, 0),
    ("\u{1F5AE}", "\u{1F5AE}", "\u{1F5AE}", "\u{1F5AE}", 0, 18, 0, 0),
    ("\u{1F5AF}", "\u{1F5AF}", "\u{1F5AF}", "\u{1F5AF}", 0, 18, 0, 0),
    ("\u{1F5B0}", "\u{1F5B0}", "\u{1F5B0}", "\u{1F5B0}", 0, 18, 0, 0),
    ("\u{1F5B1}", "\u{1F5B1}", "\u{1F5B1}", "\u{1F5B1}", 0, 18, 0, 0),
    ("\u{1F5B2}", "\u{1F5B2}", "\u{1F5B2}", "\u{1F5B2}", 0, 18, 0, 0),
    ("\u{1F5B3}", "\u{1F5B3}", "\u{1F5B3}", "\u{1F5B3}", 0, 18, 0, 0),
    ("\u{1F5B4}", "\u{1F5B4}", "\u{1F5B4}", "\u{1F5B4}", 0, 18, 0, 0),
    ("\u{1F5B5}", "\u{1F5B5}", "\u{1F5B5}", "\u{1F5B5}", 0, 18, 0, 0),
    ("\u{1F5B6}", "\u{1F5B6}", "\u{1F5B6}", "\u{1F5B6}", 0, 18, 0, 0),
    ("\u{1F5B7}", "\u{1F5B7}", "\u{1F5B7}", "\u{1F5B7}", 0, 18, 0, 0),
    ("\u{1F5B8}", "\u{1F5B8}", "\u{1F5B8}", "\u{1F5B8}", 0, 18, 0, 0),
    ("\u{1F5B9}", "\u{1F5B9}", "\u{1F5B9}", "\u{1F5B9}", 0, 18, 0, 0),
    ("\u{1F5BA}", "\u{1F5BA}", "\u{1F5BA}", "\u{1F5BA}", 0, 18, 0, 0),
    ("\u{1F5BB}", "\u{1F5BB}", "\u{1F5BB}", "\u{1F5BB}", 0, 18, 0, 0),
    ("\u{1F5BC}", "\u{1F5BC}", "\u{1F5BC}", "\u{1F5BC}", 0, 18, 0, 0),
    ("\u{1F5BD}", "\u{1F5BD}", "\u{1F5BD}", "\u{1F5BD}", 0, 18, 0, 0),
    ("\u{1F5BE}", "\u{1F5BE}", "\u{1F5BE}", "\u{1F5BE}", 0, 18, 0, 0),
    ("\u{1F5BF}", "\u{1F5BF}", "\u{1F5BF}", "\u{1F5BF}", 0, 18, 0, 0),
    ("\u{1F5C0}", "\u{1F5C0}", "\u{1F5C0}", "\u{1F5C0}", 0, 18, 0, 0),
    ("\u{1F5C1}", "\u{1F5C1}", "\u{1F5C1}", "\u{1F5C1}", 0, 18, 0, 0),
    ("\u{1F5C2}", "\u{1F5C2}", "\u{1F5C2}", "\u{1F5C2}", 0, 18, 0, 0),
    ("\u{1F5C3}", "\u{1F5C3}", "\u{1F5C3}", "\u{1F5C3}", 0, 18, 0, 0),
    ("\u{1F5C4}", "\u{1F5C4}", "\u{1F5C4}", "\u{1F5C4}", 0, 18, 0, 0),
    ("\u{1F5C5}", "\u{1F5C5}", "\u{1F5C5}", "\u{1F5C5}", 0, 18, 0, 0),
    ("\u{1F5C6}", "\u{1F5C6}", "\u{1F5C6}", "\u{1F5C6}", 0, 18, 0, 0),
    ("\u{1F5C7}", "\u{1F5C7}", "\u{1F5C7}", "\u{1F5C7}", 0, 18, 0, 0),
    ("\u{1F5C8}", "\u{1F5C8}", "\u{1F5C8}", "\u{1F5C8}", 0, 18, 0, 0),
    ("\u{1F5C9}", "\u{1F5C9}", "\u{1F5C9}", "\u{1F5C9}", 0, 18, 0, 0),
    ("\u{1F5CA}", "\u{1F5CA}", "\u{1F5CA}", "\u{1F5CA}", 0, 18, 0, 0),
    ("\u{1F5CB}", "\u{1F5CB}", "\u{1F5CB}", "\u{1F5CB}", 0, 18, 0, 0),
    ("\u{1F5CC}", "\u{1F5CC}", "\u{1F5CC}", "\u{1F5CC}", 0, 18, 0, 0),
    ("\u{1F5CD}", "\u{1F5CD}", "\u{1F5CD}", "\u{1F5CD}", 0, 18, 0, 0),
    ("\u{1F5CE}", "\u{1F5CE}", "\u{1F5CE}", "\u{1F5CE}", 0, 18, 0, 0),
    ("\u{1F5CF}", "\u{1F5CF}", "\u{1F5CF}", "\u{1F5CF}", 0, 18, 0, 0),
    ("\u{1F5D0}", "\u{1F5D0}", "\u{1F5D0}", "\u{1F5D0}", 0, 18, 0, 0),
    ("\u{1F5D1}", "\u{1F5D1}", "\u{1F5D1}", "\u{1F5D1}", 0, 18, 0, 0),
    ("\u{1F5D2}", "\u{1F5D2}", "\u{1F5D2}", "\u{1F5D2}", 0, 18, 0, 0),
    ("\u{1F5D3}", "\u{1F5D3}", "\u{1F5D3}", "\u{1F5D3}", 0, 18, 0, 0),
    ("\u{1F5D4}", "\u{1F5D4}", "\u{1F5D4}", "\u{1F5D4}", 0, 18, 0, 0),
    ("\u{1F5D5}", "\u{1F5D5}", "\u{1F5D5}", "\u{1F5D5}", 0, 18, 0, 0),
    ("\u{1F5D6}", "\u{1F5D6}", "\u{1F5D6}", "\u{1F5D6}", 0, 18, 0, 0),
    ("\u{1F5D7}", "\u{1F5D7}", "\u{1F5D7}", "\u{1F5D7}", 0, 18, 0, 0),
    ("\u{1F5D8}", "\u{1F5D8}", "\u{1F5D8}", "\u{1F5D8}", 0, 18, 0, 0),
    ("\u{1F5D9}", "\u{1F5D9}", "\u{1F5D9}", "\u{1F5D9}", 0, 18, 0, 0),
    ("\u{1F5DA}", "\u{1F5DA}", "\u{1F5DA}", "\u{1F5DA}", 0, 18, 0, 0),
    ("\u{1F5DB}", "\u{1F5DB}", "\u{1F5DB}", "\u{1F5DB}", 0, 18, 0, 0),
    ("\u{1F5DC}", "\u{1F5DC}", "\u{1F5DC}", "\u{1F5DC}", 0, 18, 0, 0),
    ("\u{1F5DD}", "\u{1F5DD}", "\u{1F5DD}", "\u{1F5DD}", 0, 18, 0, 0),
    ("\u{1F5DE}", "\u{1F5DE}", "\u{1F5DE}", "\u{1F5DE}", 0, 18, 0, 0),
    ("\u{1F5DF}", "\u{1F5DF}", "\u{1F5DF}", "\u{1F5DF}", 0, 18, 0, 0),
    ("\u{1F5E0}", "\u{1F5E0}", "\u{1F5E0}", "\u{1F5E0}", 0, 18, 0, 0),
    ("\u{1F5E1}", "\u{1F5E1}", "\u{1F5E1}", "\u{1F5E1}", 0, 18, 0, 0),
    ("\u{1F5E2}", "\u{1F5E2}", "\u{1F5E2}", "\u{1F5E2}", 0, 18, 0, 0),
    ("\u{1F5E3}", "\u{1F5E3}", "\u{1F5E3}", "\u{1F5E3}", 0, 18, 0, 0),
    ("\u{1F5E4}", "\u{1F5E4}", "\u{1F5E4}", "\u{1F5E4}", 0, 18, 0, 0),
    ("\u{1F5E5}", "\u{1F5E5}", "\u{1F5E5}", "\u{1F5E5}", 0, 18, 0, 0),
    ("\u{1F5E6}", "\u{1F5E6}", "\u{1F5E6}", "\u{1F5E6}", 0, 18, 0, 0),
    ("\u{1F5E7}", "\u{1F5E7}", "\u{1F5E7}", "\u{1F5E7}", 0, 18, 0, 0),
    ("\u{1F5E8}", "\u{1F5E8}", "\u{1F5E8}", "\u{1F5E8}", 0, 18, 0, 0),
    ("\u{1F5E9}", "\u{1F5E9}", "\u{1F5E9}", "\u{1F5E9}", 0, 18, 0, 0),
    ("\u{1F5EA}", "\u{1F5EA}", "\u{1F5EA}", "\u{1F5EA}", 0, 18, 0, 0),
    ("\u{1F5EB}", "\u{1F5EB}", "\u{1F5EB}", "\u{1F5EB}", 0, 18, 0, 0),
    ("\u{1F5EC}", "\u{1F5EC}", "\u{1F5EC}", "\u{1F5EC}", 0, 18, 0, 0),
    ("\u{1F5ED}", "\u{1F5ED}", "\u{1F5ED}", "\u{1F5ED}", 0, 18, 0, 0),
    ("\u{1F5EE}", "\u{1F5EE}", "\u{1F5EE}", "\u{1F5EE}", 0, 18, 0, 0),
    ("\u{1F5EF}", "\u{1F5EF}", "\u{1F5EF}", "\u{1F5EF}", 0, 18, 0, 0),
    ("\u{1F5F0}", "\u{1F5F0}", "\u{1F5F0}", "\u{1F5F0}", 0, 18, 0, 0),
    ("\u{1F5F1}", "\u{1F5F1}", "\u{1F5F1}", "\u{1F5F1}", 0, 18, 0, 0),
    ("\u{1F5F2}", "\u{1F5F2}", "\u{1F5F2}", "\u{1F5F2}", 0, 18, 0, 0),
    ("\u{1F5F3}", "\u{1F5F3}", "\u{1F5F3}", "\u{1F5F3}", 0, 18, 0, 0),
    ("\u{1F5F4}", "\u{1F5F4}", "\u{1F5F4}", "\u{1F5F4}", 0, 18, 0, 0),
    ("\u{1F5F5}", "\u{1F5F5}", "\u{1F5F5}", "\u{1F5F5}", 0, 18, 0, 0),
    ("\u{1F5F6}", "\u{1F5F6}", "\u{1F5F6}", "\u{1F5F6}", 0, 18, 0, 0),
    ("\u{1F5F7}", "\u{1F5F7}", "\u{1F5F7}", "\u{1F5F7}", 0, 18, 0, 0),
    ("\u{1F5F8}", "\u{1F5F8}", "\u{1F5F8}", "\u{1F5F8}", 0, 18, 0, 0),
    ("\u{1F5F9}", "\u{1F5F9}", "\u{1F5F9}", "\u{1F5F9}", 0, 18, 0, 0),
    ("\u{1F5FA}", "\u{1F5FA}", "\u{1F5FA}", "\u{1F5FA}", 0, 18, 0, 0),
    ("\u{1F5FB}", "\u{1F5FB}", "\u{1F5FB}", "\u{1F5FB}", 0, 18, 0, 0),
    ("\u{1F5FC}", "\u{1F5FC}", "\u{1F5FC}", "\u{1F5FC}", 0, 18, 0, 0),
    ("\u{1F5FD}", "\u{1F5FD}", "\u{1F5FD}", "\u{1F5FD}", 0, 18, 0, 0),
    ("\u{1F5FE}", "\u{1F5FE}", "\u{1F5FE}", "\u{1F5FE}", 0, 18, 0, 0),
    ("\u{1F5FF}", "\u{1F5FF}", "\u{1F5FF}", "\u{1F5FF}", 0, 18, 0, 0),
    ("\u{1F600}", "\u{1F600}", "\u{1F600}", "\u{1F600}", 0, 18, 0, 0),
    ("\u{1F601}", "\u{1F601}", "\u{1F601}", "\u{1F601}", 0, 18, 0, 0),
    ("\u{1F602}", "\u{1F602}", "\u{1F602}", "\u{1F602}", 0, 18, 0, 0),
    ("\u{1F603}", "\u{1F603}", "\u{1F603}", "\u{1F603}", 0, 18, 0, 0),
    ("\u{1F604}", "\u{1F604}", "\u{1F604}", "\u{1F604}", 0, 18, 0, 0),
    ("\u{1F605}", "\u{1F605}", "\u{1F605}", "\u{1F605}", 0, 18, 0, 0),
    ("\u{1F606}", "\u{1F606}", "\u{1F606}", "\u{1F606}", 0, 18, 0, 0),
    ("\u{1F607}", "\u{1F607}", "\u{1F607}", "\u{1F607}", 0, 18, 0, 0),
    ("\u{1F608}", "\u{1F608}", "\u{1F608}", "\u{1F608}", 0, 18, 0, 0),
    ("\u{1F609}", "\u{1F609}", "\u{1F609}", "\u{1F609}", 0, 18, 0, 0),
    ("\u{1F60A}", "\u{1F60A}", "\u{1F60A}", "\u{1F60A}", 0, 18, 0, 0),
    ("\u{1F60B}", "\u{1F60B}", "\u{1F60B}", "\u{1F60B}", 0, 18, 0, 0),
    ("\u{1F60C}", "\u{1F60C}", "\u{1F60C}", "\u{1F60C}", 0, 18, 0, 0),
    ("\u{1F60D}", "\u{1F60D}", "\u{1F60D}", "\u{1F60D}", 0, 18, 0, 0),
    ("\u{1F60E}", "\u{1F60E}", "\u{1F60E}", "\u{1F60E}", 0, 18, 0, 0),
    ("\u{1F60F}", "\u{1F60F}", "\u{1F60F}", "\u{1F60F}", 0, 18, 0, 0),
    ("\u{1F610}", "\u{1F610}", "\u{1F610}", "\u{1F610}", 0, 18, 0, 0),
    ("\u{1F611}", "\u{1F611}", "\u{1F611}", "\u{1F611}", 0, 18, 0, 0),
    ("\u{1F612}", "\u{1F612}", "\u{1F612}", "\u{1F612}", 0, 18, 0, 0),
    ("\u{1F613}", "\u{1F613}", "\u{1F613}", "\u{1F613}", 0, 18, 0, 0),
    ("\u{1F614}", "\u{1F614}", "\u{1F614}", "\u{1F614}", 0, 18, 0, 0),
    ("\u{1F615}", "\u{1F615}", "\u{1F615}", "\u{1F615}", 0, 18, 0, 0),
    ("\u{1F616}", "\u{1F616}", "\u{1F616}", "\u{1F616}", 0, 18, 0, 0),
    ("\u{1F617}", "\u{1F617}", "\u{1F617}", "\u{1F617}", 0, 18, 0, 0),
    ("\u{1F618}", "\u{1F618}", "\u{1F618}", "\u{1F618}", 0, 18, 0, 0),
    ("\u{1F619}", "\u{1F619}", "\u{1F619}", "\u{1F619}", 0, 18, 0, 0),
    ("\u{1F61A}", "\u{1F61A}", "\u{1F61A}", "\u{1F61A}", 0, 18, 0, 0),
    ("\u{1F61B}", "\u{1F61B}", "\u{1F61B}", "\u{1F61B}", 0, 18, 0, 0),
    ("\u{1F61C}", "\u{1F61C}", "\u{1F61C}", "\u{1F61C}", 0, 18, 0, 0),
    ("\u{1F61D}", "\u{1F61D}", "\u{1F61D}", "\u{1F61D}", 0, 18, 0, 0),
    ("\u{1F61E}", "\u{1F61E}", "\u{1F61E}", "\u{1F61E}", 0, 18, 0, 0),
    ("\u{1F61F}", "\u{1F61F}", "\u{1F61F}", "\u{1F61F}", 0, 18, 0, 0),
    ("\u{1F620}", "\u{1F620}", "\u{1F620}", "\u{1F620}", 0, 18, 0, 0),
    ("\u{1F621}", "\u{1F621}", "\u{1F621}", "\u{1F621}", 0, 18, 0, 0),
    ("\u{1F622}", "\u{1F622}", "\u{1F622}", "\u{1F622}", 0, 18, 0, 0),
    ("\u{1F623}", "\u{1F623}", "\u{1F623}", "\u{1F623}", 0, 18, 0, 0),
    ("\u{1F624}", "\u{1F624}", "\u{1F624}", "\u{1F624}", 0, 18, 0, 0),
    ("\u{1F625}", "\u{1F625}", "\u{1F625}", "\u{1F625}", 0, 18, 0, 0),
    ("\u{1F626}", "\u{1F626}", "\u{1F626}", "\u{1F626}", 0, 18, 0, 0),
    ("\u{1F627}", "\u{1F627}", "\u{1F627}", "\u{1F627}", 0, 18, 0, 0),
    ("\u{1F628}", "\u{1F628}", "\u{1F628}", "\u{1F628}", 0, 18, 0, 0),
    ("\u{1F629}", "\u{1F629}", "\u{1F629}", "\u{1F629}", 0, 18, 0, 0),
    ("\u{1F62A}", "\u{1F62A}", "\u{1F62A}", "\u{1F62A}", 0, 18, 0, 0),
    ("\u{1F62B}", "\u{1F62B}", "\u{1F62B}", "\u{1F62B}", 0, 18, 0, 0),
    ("\u{1F62C}", "\u{1F62C}", "\u{1F62C}", "\u{1F62C}", 0, 18, 0, 0),
    ("\u{1F62D}", "\u{1F62D}", "\u{1F62D}", "\u{1F62D}", 0, 18, 0, 0),
    ("\u{1F62E}", "\u{1F62E}", "\u{1F62E}", "\u{1F62E}", 0, 18, 0, 0),
    ("\u{1F62F}", "\u{1F62F}", "\u{1F62F}", "\u{1F62F}", 0, 18, 0, 0),
    ("\u{1F630}", "\u{1F630}", "\u{1F630}", "\u{1F630}", 0, 18, 0, 0),
    ("\u{1F631}", "\u{1F631}", "\u{1F631}", "\u{1F631}", 0, 18, 0, 0),
    ("\u{1F632}", "\u{1F632}", "\u{1F632}", "\u{1F632}", 0, 18, 0, 0),
    ("\u{1F633}", "\u{1F633}", "\u{1F633}", "\u{1F633}", 0, 18, 0, 0),
    ("\u{1F634}", "\u{1F634}", "\u{1F634}", "\u{1F634}", 0, 18, 0, 0),
    ("\u{1F635}", "\u{1F635}", "\u{1F635}", "\u{1F635}", 0, 18, 0, 0),
    ("\u{1F636}", "\u{1F636}", "\u{1F636}", "\u{1F636}", 0, 18, 0, 0),
    ("\u{1F637}", "\u{1F637}", "\u{1F637}", "\u{1F637}", 0, 18, 0, 0),
    ("\u{1F638}", "\u{1F638}", "\u{1F638}", "\u{1F638}", 0, 18, 0, 0),
    ("\u{1F639}", "\u{1F639}", "\u{1F639}", "\u{1F639}", 0, 18, 0, 0),
    ("\u{1F63A}", "\u{1F63A}", "\u{1F63A}", "\u{1F63A}", 0, 18, 0, 0),
    ("\u{1F63B}", "\u{1F63B}", "\u{1F63B}", "\u{1F63B}", 0, 18, 0, 0),
    ("\u{1F63C}", "\u{1F63C}", "\u{1F63C}", "\u{1F63C}", 0, 18, 0, 0),
    ("\u{1F63D}", "\u{1F63D}", "\u{1F63D}", "\u{1F63D}", 0, 18, 0, 0),
    ("\u{1F63E}", "\u{1F63E}", "\u{1F63E}", "\u{1F63E}", 0, 18, 0, 0),
    ("\u{1F63F}", "\u{1F63F}", "\u{1F63F}", "\u{1F63F}", 0, 18, 0, 0),
    ("\u{1F640}", "\u{1F640}", "\u{1F640}", "\u{1F640}", 0, 18, 0, 0),
    ("\u{1F641}", "\u{1F641}", "\u{1F641}", "\u{1F641}", 0, 18, 0, 0),
    ("\u{1F642}", "\u{1F642}", "\u{1F642}", "\u{1F642}", 0, 18, 0, 0),
    ("\u{1F643}", "\u{1F643}", "\u{1F643}", "\u{1F643}", 0, 18, 0, 0),
    ("\u{1F644}", "\u{1F644}", "\u{1F644}", "\u{1F644}", 0, 18, 0, 0),
    ("\u{1F645}", "\u{1F645}", "\u{1F645}", "\u{1F645}", 0, 18, 0, 0),
    ("\u{1F646}", "\u{1F646}", "\u{1F646}", "\u{1F646}", 0, 18, 0, 0),
    ("\u{1F647}", "\u{1F647}", "\u{1F647}", "\u{1F647}", 0, 18, 0, 0),
    ("\u{1F648}", "\u{1F648}", "\u{1F648}", "\u{1F648}", 0, 18, 0, 0),
    ("\u{1F649}", "\u{1F649}", "\u{1F649}", "\u{1F649}", 0, 18, 0, 0),
    ("\u{1F64A}", "\u{1F64A}", "\u{1F64A}", "\u{1F64A}", 0, 18, 0, 0),
    ("\u{1F64B}", "\u{1F64B}", "\u{1F64B}", "\u{1F64B}", 0, 18, 0, 0),
    ("\u{1F64C}", "\u{1F64C}", "\u{1F64C}", "\u{1F64C}", 0, 18, 0, 0),
    ("\u{1F64D}", "\u{1F64D}", "\u{1F64D}", "\u{1F64D}", 0, 18, 0, 0),
    ("\u{1F64E}", "\u{1F64E}", "\u{1F64E}", "\u{1F64E}", 0, 18, 0, 0),
    ("\u{1F64F}", "\u{1F64F}", "\u{1F64F}", "\u{1F64F}", 0, 18, 0, 0),
    ("\u{1F650}", "\u{1F650}", "\u{1F650}", "\u{1F650}", 0, 18, 0, 0),
    ("\u{1F651}", "\u{1F651}", "\u{1F651}", "\u{1F651}", 0, 18, 0, 0),
    ("\u{1F652}", "\u{1F652}", "\u{1F652}", "\u{1F652}", 0, 18, 0, 0),
    ("\u{1F653}", "\u{1F653}", "\u{1F653}", "\u{1F653}", 0, 18, 0, 0),
    ("\u{1F654}", "\u{1F654}", "\u{1F654}", "\u{1F654}", 0, 18, 0, 0),
    ("\u{1F655}", "\u{1F655}", "\u{1F655}", "\u{1F655}", 0, 18, 0, 0),
    ("\u{1F656}", "\u{1F656}", "\u{1F656}", "\u{1F656}", 0, 18, 0, 0),
    ("\u{1F657}", "\u{1F657}", "\u{1F657}", "\u{1F657}", 0, 18, 0, 0),
    ("\u{1F658}", "\u{1F658}", "\u{1F658}", "\u{1F658}", 0, 18, 0, 0),
    ("\u{1F659}", "\u{1F659}", "\u{1F659}", "\u{1F659}", 0, 18, 0, 0),
    ("\u{1F65A}", "\u{1F65A}", "\u{1F65A}", "\u{1F65A}", 0, 18, 0, 0),
    ("\u{1F65B}", "\u{1F65B}", "\u{1F65B}", "\u{1F65B}", 0, 18, 0, 0),
    ("\u{1F65C}", "\u{1F65C}", "\u{1F65C}", "\u{1F65C}", 0, 18, 0, 0),
    ("\u{1F65D}", "\u{1F65D}", "\u{1F65D}", "\u{1F65D}", 0, 18, 0, 0),
    ("\u{1F65E}", "\u{1F65E}", "\u{1F65E}", "\u{1F65E}", 0, 18, 0, 0),
    ("\u{1F65F}", "\u{1F65F}", "\u{1F65F}", "\u{1F65F}", 0, 18, 0, 0),
    ("\u{1F660}", "\u{1F660}", "\u{1F660}", "\u{1F660}", 0, 18, 0, 0),
    ("\u{1F661}", "\u{1F661}", "\u{1F661}", "\u{1F661}", 0, 18, 0, 0),
    ("\u{1F662}", "\u{1F662}", "\u{1F662}", "\u{1F662}", 0, 18, 0, 0),
    ("\u{1F663}", "\u{1F663}", "\u{1F663}", "\u{1F663}", 0, 18, 0, 0),
    ("\u{1F664}", "\u{1F664}", "\u{1F664}", "\u{1F664}", 0, 18, 0, 0),
    ("\u{1F665}", "\u{1F665}", "\u{1F665}", "\u{1F665}", 0, 18, 0, 0),
    ("\u{1F666}", "\u{1F666}", "\u{1F666}", "\u{1F666}", 0, 18, 0, 0),
    ("\u{1F667}", "\u{1F667}", "\u{1F667}", "\u{1F667}", 0, 18, 0, 0),
    ("\u{1F668}", "\u{1F668}", "\u{1F668}", "\u{1F668}", 0, 18, 0, 0),
    ("\u{1F669}", "\u{1F669}", "\u{1F669}", "\u{1F669}", 0, 18, 0, 0),
    ("\u{1F66A}", "\u{1F66A}", "\u{1F66A}", "\u{1F66A}", 0, 18, 0, 0),
    ("\u{1F66B}", "\u{1F66B}", "\u{1F66B}", "\u{1F66B}", 0, 18, 0, 0),
    ("\u{1F66C}", "\u{1F66C}", "\u{1F66C}", "\u{1F66C}", 0, 18, 0, 0),
    ("\u{1F66D}", "\u{1F66D}", "\u{1F66D}", "\u{1F66D}", 0, 18, 0, 0),
    ("\u{1F66E}", "\u{1F66E}", "\u{1F66E}", "\u{1F66E}", 0, 18, 0, 0),
    ("\u{1F66F}", "\u{1F66F}", "\u{1F66F}", "\u{1F66F}", 0, 18, 0, 0),
    ("\u{1F670}", "\u{1F670}", "\u{1F670}", "\u{1F670}", 0, 18, 0, 0),
    ("\u{1F671}", "\u{1F671}", "\u{1F671}", "\u{1F671}", 0, 18, 0, 0),
    ("\u{1F672}", "\u{1F672}", "\u{1F672}", "\u{1F672}", 0, 18, 0, 0),
    ("\u{1F673}", "\u{1F673}", "\u{1F673}", "\u{1F673}", 0, 18, 0, 0),
    ("\u{1F674}", "\u{1F674}", "\u{1F674}", "\u{1F674}", 0, 18, 0, 0),
    ("\u{1F675}", "\u{1F675}", "\u{1F675}", "\u{1F675}", 0, 18, 0, 0),
    ("\u{1F676}", "\u{1F676}", "\u{1F676}", "\u{1F676}", 0, 18, 0, 0),
    ("\u{1F677}", "\u{1F677}", "\u{1F677}", "\u{1F677}", 0, 18, 0, 0),
    ("\u{1F678}", "\u{1F678}", "\u{1F678}", "\u{1F678}", 0, 18, 0, 0),
    ("\u{1F679}", "\u{1F679}", "\u{1F679}", "\u{1F679}", 0, 18, 0, 0),
    ("\u{1F67A}", "\u{1F67A}", "\u{1F67A}", "\u{1F67A}", 0, 18, 0, 0),
    ("\u{1F67B}", "\u{1F67B}", "\u{1F67B}", "\u{1F67B}", 0, 18, 0, 0),
    ("\u{1F67C}", "\u{1F67C}", "\u{1F67C}", "\u{1F67C}", 0, 18, 0, 0),
    ("\u{1F67D}", "\u{1F67D}", "\u{1F67D}", "\u{1F67D}", 0, 18, 0, 0),
    ("\u{1F67E}", "\u{1F67E}", "\u{1F67E}", "\u{1F67E}", 0, 18, 0, 0),
    ("\u{1F67F}", "\u{1F67F}", "\u{1F67F}", "\u{1F67F}", 0, 18, 0, 0),
    ("\u{1F680}", "\u{1F680}", "\u{1F680}", "\u{1F680}", 0, 18, 0, 0),
    ("\u{1F681}", "\u{1F681}", "\u{1F681}", "\u{1F681}", 0, 18, 0, 0),
    ("\u{1F682}", "\u{1F682}", "\u{1F682}", "\u{1F682}", 0, 18, 0, 0),
    ("\u{1F683}", "\u{1F683}", "\u{1F683}", "\u{1F683}", 0, 18, 0, 0),
    ("\u{1F684}", "\u{1F684}", "\u{1F684}", "\u{1F684}", 0, 18, 0, 0),
    ("\u{1F685}", "\u{1F685}", "\u{1F685}", "\u{1F685}", 0, 18, 0, 0),
    ("\u{1F686}", "\u{1F686}", "\u{1F686}", "\u{1F686}", 0, 18, 0, 0),
    ("\u{1F687}", "\u{1F687}", "\u{1F687}", "\u{1F687}", 0, 18, 0, 0),
    ("\u{1F688}", "\u{1F688}", "\u{1F688}", "\u{1F688}", 0, 18, 0, 0),
    ("\u{1F689}", "\u{1F689}", "\u{1F689}", "\u{1F689}", 0, 18, 0, 0),
    ("\u{1F68A}", "\u{1F68A}", "\u{1F68A}", "\u{1F68A}", 0, 18, 0, 0),
    ("\u{1F68B}", "\u{1F68B}", "\u{1F68B}", "\u{1F68B}", 0, 18, 0, 0),
    ("\u{1F68C}", "\u{1F68C}", "\u{1F68C}", "\u{1F68C}", 0, 18, 0, 0),
    ("\u{1F68D}", "\u{1F68D}", "\u{1F68D}", "\u{1F68D}", 0, 18, 0, 0),
    ("\u{1F68E}", "\u{1F68E}", "\u{1F68E}", "\u{1F68E}", 0, 18, 0, 0),
    ("\u{1F68F}", "\u{1F68F}", "\u{1F68F}", "\u{1F68F}", 0, 18, 0, 0),
    ("\u{1F690}", "\u{1F690}", "\u{1F690}", "\u{1F690}", 0, 18, 0, 0),
    ("\u{1F691}", "\u{1F691}", "\u{1F691}", "\u{1F691}", 0, 18, 0, 0),
    ("\u{1F692}", "\u{1F692}", "\u{1F692}", "\u{1F692}", 0, 18, 0, 0),
    ("\u{1F693}", "\u{1F693}", "\u{1F693}", "\u{1F693}", 0, 18, 0, 0),
    ("\u{1F694}", "\u{1F694}", "\u{1F694}", "\u{1F694}", 0, 18, 0, 0),
    ("\u{1F695}", "\u{1F695}", "\u{1F695}", "\u{1F695}", 0, 18, 0, 0),
    ("\u{1F696}", "\u{1F696}", "\u{1F696}", "\u{1F696}", 0, 18, 0, 0),
    ("\u{1F697}", "\u{1F697}", "\u{1F697}", "\u{1F697}", 0, 18, 0, 0),
    ("\u{1F698}", "\u{1F698}", "\u{1F698}", "\u{1F698}", 0, 18, 0, 0),
    ("\u{1F699}", "\u{1F699}", "\u{1F699}", "\u{1F699}", 0, 18, 0, 0),
    ("\u{1F69A}", "\u{1F69A}", "\u{1F69A}", "\u{1F69A}", 0, 18, 0, 0),
    ("\u{1F69B}", "\u{1F69B}", "\u{1F69B}", "\u{1F69B}", 0, 18, 0, 0),
    ("\u{1F69C}", "\u{1F69C}", "\u{1F69C}", "\u{1F69C}", 0, 18, 0, 0),
    ("\u{1F69D}", "\u{1F69D}", "\u{1F69D}", "\u{1F69D}", 0, 18, 0, 0),
    ("\u{1F69E}", "\u{1F69E}", "\u{1F69E}", "\u{1F69E}", 0, 18, 0, 0),
    ("\u{1F69F}", "\u{1F69F}", "\u{1F69F}", "\u{1F69F}", 0, 18, 0, 0),
    ("\u{1F6A0}", "\u{1F6A0}", "\u{1F6A0}", "\u{1F6A0}", 0, 18, 0, 0),
    ("\u{1F6A1}", "\u{1F6A1}", "\u{1F6A1}", "\u{1F6A1}", 0, 18, 0, 0),
    ("\u{1F6A2}", "\u{1F6A2}", "\u{1F6A2}", "\u{1F6A2}", 0, 18, 0, 0),
    ("\u{1F6A3}", "\u{1F6A3}", "\u{1F6A3}", "\u{1F6A3}", 0, 18, 0, 0),
    ("\u{1F6A4}", "\u{1F6A4}", "\u{1F6A4}", "\u{1F6A4}", 0, 18, 0, 0),
    ("\u{1F6A5}", "\u{1F6A5}", "\u{1F6A5}", "\u{1F6A5}", 0, 18, 0, 0),
    ("\u{1F6A6}", "\u{1F6A6}", "\u{1F6A6}", "\u{1F6A6}", 0, 18, 0, 0),
    ("\u{1F6A7}", "\u{1F6A7}", "\u{1F6A7}", "\u{1F6A7}", 0, 18, 0, 0),
    ("\u{1F6A8}", "\u{1F6A8}", "\u{1F6A8}", "\u{1F6A8}", 0, 18, 0, 0),
    ("\u{1F6A9}", "\u{1F6A9}", "\u{1F6A9}", "\u{1F6A9}", 0, 18, 0, 0),
    ("\u{1F6AA}", "\u{1F6AA}", "\u{1F6AA}", "\u{1F6AA}", 0, 18, 0, 0),
    ("\u{1F6AB}", "\u{1F6AB}", "\u{1F6AB}", "\u{1F6AB}", 0, 18, 0, 0),
    ("\u{1F6AC}", "\u{1F6AC}", "\u{1F6AC}", "\u{1F6AC}", 0, 18, 0, 0),
    ("\u{1F6AD}", "\u{1F6AD}", "\u{1F6AD}", "\u{1F6AD}", 0, 18, 0, 0),
    ("\u{1F6AE}", "\u{1F6AE}", "\u{1F6AE}", "\u{1F6AE}", 0, 18, 0, 0),
    ("\u{1F6AF}", "\u{1F6AF}", "\u{1F6AF}", "\u{1F6AF}", 0, 18, 0, 0),
    ("\u{1F6B0}", "\u{1F6B0}", "\u{1F6B0}", "\u{1F6B0}", 0, 18, 0, 0),
    ("\u{1F6B1}", "\u{1F6B1}", "\u{1F6B1}", "\u{1F6B1}", 0, 18, 0, 0),
    ("\u{1F6B2}", "\u{1F6B2}", "\u{1F6B2}", "\u{1F6B2}", 0, 18, 0, 0),
    ("\u{1F6B3}", "\u{1F6B3}", "\u{1F6B3}", "\u{1F6B3}", 0, 18, 0, 0),
    ("\u{1F6B4}", "\u{1F6B4}", "\u{1F6B4}", "\u{1F6B4}", 0, 18, 0, 0),
    ("\u{1F6B5}", "\u{1F6B5}", "\u{1F6B5}", "\u{1F6B5}", 0, 18, 0, 0),
    ("\u{1F6B6}", "\u{1F6B6}", "\u{1F6B6}", "\u{1F6B6}", 0, 18, 0, 0),
    ("\u{1F6B7}", "\u{1F6B7}", "\u{1F6B7}", "\u{1F6B7}", 0, 18, 0, 0),
    ("\u{1F6B8}", "\u{1F6B8}", "\u{1F6B8}", "\u{1F6B8}", 0, 18, 0, 0),
    ("\u{1F6B9}", "\u{1F6B9}", "\u{1F6B9}", "\u{1F6B9}", 0, 18, 0, 0),
    ("\u{1F6BA}", "\u{1F6BA}", "\u{1F6BA}", "\u{1F6BA}", 0, 18, 0, 0),
    ("\u{1F6BB}", "\u{1F6BB}", "\u{1F6BB}", "\u{1F6BB}", 0, 18, 0, 0),
    ("\u{1F6BC}", "\u{1F6BC}", "\u{1F6BC}", "\u{1F6BC}", 0, 18, 0, 0),
    ("\u{1F6BD}", "\u{1F6BD}", "\u{1F6BD}", "\u{1F6BD}", 0, 18, 0, 0),
    ("\u{1F6BE}", "\u{1F6BE}", "\u{1F6BE}", "\u{1F6BE}", 0, 18, 0, 0),
    ("\u{1F6BF}", "\u{1F6BF}", "\u{1F6BF}", "\u{1F6BF}", 0, 18, 0, 0),
    ("\u{1F6C0}", "\u{1F6C0}", "\u{1F6C0}", "\u{1F6C0}", 0, 18, 0, 0),
    ("\u{1F6C1}", "\u{1F6C1}", "\u{1F6C1}", "\u{1F6C1}", 0, 18, 0, 0),
    ("\u{1F6C2}", "\u{1F6C2}", "\u{1F6C2}", "\u{1F6C2}", 0, 18, 0, 0),
    ("\u{1F6C3}", "\u{1F6C3}", "\u{1F6C3}", "\u{1F6C3}", 0, 18, 0, 0),
    ("\u{1F6C4}", "\u{1F6C4}", "\u{1F6C4}", "\u{1F6C4}", 0, 18, 0, 0),
    ("\u{1F6C5}", "\u{1F6C5}", "\u{1F6C5}", "\u{1F6C5}", 0, 18, 0, 0),
    ("\u{1F6C6}", "\u{1F6C6}", "\u{1F6C6}", "\u{1F6C6}", 0, 18, 0, 0),
    ("\u{1F6C7}", "\u{1F6C7}", "\u{1F6C7}", "\u{1F6C7}", 0, 18, 0, 0),
    ("\u{1F6C8}", "\u{1F6C8}", "\u{1F6C8}", "\u{1F6C8}", 0, 18, 0, 0),
    ("\u{1F6C9}", "\u{1F6C9}", "\u{1F6C9}", "\u{1F6C9}", 0, 18, 0, 0),
    ("\u{1F6CA}", "\u{1F6CA}", "\u{1F6CA}", "\u{1F6CA}", 0, 18, 0, 0),
    ("\u{1F6CB}", "\u{1F6CB}", "\u{1F6CB}", "\u{1F6CB}", 0, 18, 0, 0),
    ("\u{1F6CC}", "\u{1F6CC}", "\u{1F6CC}", "\u{1F6CC}", 0, 18, 0, 0),
    ("\u{1F6CD}", "\u{1F6CD}", "\u{1F6CD}", "\u{1F6CD}", 0, 18, 0, 0),
    ("\u{1F6CE}", "\u{1F6CE}", "\u{1F6CE}", "\u{1F6CE}", 0, 18, 0, 0),
    ("\u{1F6CF}", "\u{1F6CF}", "\u{1F6CF}", "\u{1F6CF}", 0, 18, 0, 0),
    ("\u{1F6D0}", "\u{1F6D0}", "\u{1F6D0}", "\u{1F6D0}", 0, 18, 0, 0),
    ("\u{1F6D1}", "\u{1F6D1}", "\u{1F6D1}", "\u{1F6D1}", 0, 18, 0, 0),
    ("\u{1F6D2}", "\u{1F6D2}", "\u{1F6D2}", "\u{1F6D2}", 0, 18, 0, 0),
    ("\u{1F6D3}", "\u{1F6D3}", "\u{1F6D3}", "\u{1F6D3}", 0, 18, 0, 0),
    ("\u{1F6D4}", "\u{1F6D4}", "\u{1F6D4}", "\u{1F6D4}", 0, 18, 0, 0),
    ("\u{1F6D5}", "\u{1F6D5}", "\u{1F6D5}", "\u{1F6D5}", 0, 18, 0, 0),
    ("\u{1F6D6}", "\u{1F6D6}", "\u{1F6D6}", "\u{1F6D6}", 0, 18, 0, 0),
    ("\u{1F6D7}", "\u{1F6D7}", "\u{1F6D7}", "\u{1F6D7}", 0, 18, 0, 0),
    ("\u{1F6D8}", "\u{1F6D8}", "\u{1F6D8}", "\u{1F6D8}", 0, 18, 0, 0),
    ("\u{1F6D9}", "\u{1F6D9}", "\u{1F6D9}", "\u{1F6D9}", 0, 18, 0, 0),
    ("\u{1F6DA}", "\u{1F6DA}", "\u{1F6DA}", "\u{1F6DA}", 0, 18, 0, 0),
    ("\u{1F6DB}", "\u{1F6DB}", "\u{1F6DB}", "\u{1F6DB}", 0, 18, 0, 0),
    ("\u{1F6DC}", "\u{1F6DC}", "\u{1F6DC}", "\u{1F6DC}", 0, 18, 0, 0),
    ("\u{1F6DD}", "\u{1F6DD}", "\u{1F6DD}", "\u{1F6DD}", 0, 18, 0, 0),
    ("\u{1F6DE}", "\u{1F6DE}", "\u{1F6DE}", "\u{1F6DE}", 0, 18, 0, 0),
    ("\u{1F6DF}", "\u{1F6DF}", "\u{1F6DF}", "\u{1F6DF}", 0, 18, 0, 0),
    ("\u{1F6E0}", "\u{1F6E0}", "\u{1F6E0}", "\u{1F6E0}", 0, 18, 0, 0),
    ("\u{1F6E1}", "\u{1F6E1}", "\u{1F6E1}", "\u{1F6E1}", 0, 18, 0, 0),
    ("\u{1F6E2}", "\u{1F6E2}", "\u{1F6E2}", "\u{1F6E2}", 0, 18, 0, 0),
    ("\u{1F6E3}", "\u{1F6E3}", "\u{1F6E3}", "\u{1F6E3}", 0, 18, 0, 0),
    ("\u{1F6E4}", "\u{1F6E4}", "\u{1F6E4}", "\u{1F6E4}", 0, 18, 0, 0),
    ("\u{1F6E5}", "\u{1F6E5}", "\u{1F6E5}", "\u{1F6E5}", 0, 18, 0, 0),
    ("\u{1F6E6}", "\u{1F6E6}", "\u{1F6E6}", "\u{1F6E6}", 0, 18, 0, 0),
    ("\u{1F6E7}", "\u{1F6E7}", "\u{1F6E7}", "\u{1F6E7}", 0, 18, 0, 0),
    ("\u{1F6E8}", "\u{1F6E8}", "\u{1F6E8}", "\u{1F6E8}", 0, 18, 0, 0),
    ("\u{1F6E9}", "\u{1F6E9}", "\u{1F6E9}", "\u{1F6E9}", 0, 18, 0, 0),
    ("\u{1F6EA}", "\u{1F6EA}", "\u{1F6EA}", "\u{1F6EA}", 0, 18, 0, 0),
    ("\u{1F6EB}", "\u{1F6EB}", "\u{1F6EB}", "\u{1F6EB}", 0, 18, 0, 0),
    ("\u{1F6EC}", "\u{1F6EC}", "\u{1F6EC}", "\u{1F6EC}", 0, 18, 0, 0),
    ("\u{1F6ED}", "\u{1F6ED}", "\u{1F6ED}", "\u{1F6ED}", 0, 18, 0, 0),
    ("\u{1F6EE}", "\u{1F6EE}", "\u{1F6EE}", "\u{1F6EE}", 0, 18, 0, 0),
    ("\u{1F6EF}", "\u{1F6EF}", "\u{1F6EF}", "\u{1F6EF}", 0, 18, 0, 0),
    ("\u{1F6F0}", "\u{1F6F0}", "\u{1F6F0}", "\u{1F6F0}", 0, 18, 0, 0),
    ("\u{1F6F1}", "\u{1F6F1}", "\u{1F6F1}", "\u{1F6F1}", 0, 18, 0, 0),
    ("\u{1F6F2}", "\u{1F6F2}", "\u{1F6F2}", "\u{1F6F2}", 0, 18, 0, 0),
    ("\u{1F6F3}", "\u{1F6F3}", "\u{1F6F3}", "\u{1F6F3}", 0, 18, 0, 0),
    ("\u{1F6F4}", "\u{1F6F4}", "\u{1F6F4}", "\u{1F6F4}", 0, 18, 0, 0),
    ("\u{1F6F5}", "\u{1F6F5}", "\u{1F6F5}", "\u{1F6F5}", 0, 18, 0, 0),
    ("\u{1F6F6}", "\u{1F6F6}", "\u{1F6F6}", "\u{1F6F6}", 0, 18, 0, 0),
    ("\u{1F6F7}", "\u{1F6F7}", "\u{1F6F7}", "\u{1F6F7}", 0, 18, 0, 0),
    ("\u{1F6F8}", "\u{1F6F8}", "\u{1F6F8}", "\u{1F6F8}", 0, 18, 0, 0),
    ("\u{1F6F9}", "\u{1F6F9}", "\u{1F6F9}", "\u{1F6F9}", 0, 18, 0, 0),
    ("\u{1F6FA}", "\u{1F6FA}", "\u{1F6FA}", "\u{1F6FA}", 0, 18, 0, 0),
    ("\u{1F6FB}", "\u{1F6FB}", "\u{1F6FB}", "\u{1F6FB}", 0, 18, 0, 0),
    ("\u{1F6FC}", "\u{1F6FC}", "\u{1F6FC}", "\u{1F6FC}", 0, 18, 0, 0),
    ("\u{1F6FD}", "\u{1F6FD}", "\u{1F6FD}", "\u{1F6FD}", 0, 18, 0, 0),
    ("\u{1F6FE}", "\u{1F6FE}", "\u{1F6FE}", "\u{1F6FE}", 0, 18, 0, 0),
    ("\u{1F6FF}", "\u{1F6FF}", "\u{1F6FF}", "\u{1F6FF}", 0, 18, 0, 0),
    ("\u{1F900}", "\u{1F900}", "\u{1F900}", "\u{1F900}", 0, 18, 0, 0),
    ("\u{1F901}", "\u{1F901}", "\u{1F901}", "\u{1F901}", 0, 18, 0, 0),
    ("\u{1F902}", "\u{1F902}", "\u{1F902}", "\u{1F902}", 0, 18, 0, 0),
    ("\u{1F903}", "\u{1F903}", "\u{1F903}", "\u{1F903}", 0, 18, 0, 0),
    ("\u{1F904}", "\u{1F904}", "\u{1F904}", "\u{1F904}", 0, 18, 0, 0),
    ("\u{1F905}", "\u{1F905}", "\u{1F905}", "\u{1F905}", 0, 18, 0, 0),
    ("\u{1F906}", "\u{1F906}", "\u{1F906}", "\u{1F906}", 0, 18, 0, 0),
    ("\u{1F907}", "\u{1F907}", "\u{1F907}", "\u{1F907}", 0, 18, 0, 0),
    ("\u{1F908}", "\u{1F908}", "\u{1F908}", "\u{1F908}", 0, 18, 0, 0),
    ("\u{1F909}", "\u{1F909}", "\u{1F909}", "\u{1F909}", 0, 18, 0, 0),
    ("\u{1F90A}", "\u{1F90A}", "\u{1F90A}", "\u{1F90A}", 0, 18, 0, 0),
    ("\u{1F90B}", "\u{1F90B}", "\u{1F90B}", "\u{1F90B}", 0, 18, 0, 0),
    ("\u{1F90C}", "\u{1F90C}", "\u{1F90C}", "\u{1F90C}", 0, 18, 0, 0),
    ("\u{1F90D}", "\u{1F90D}", "\u{1F90D}", "\u{1F90D}", 0, 18, 0, 0),
    ("\u{1F90E}", "\u{1F90E}", "\u{1F90E}", "\u{1F90E}", 0, 18, 0, 0),
    ("\u{1F90F}", "\u{1F90F}", "\u{1F90F}", "\u{1F90F}", 0, 18, 0, 0),
    ("\u{1F910}", "\u{1F910}", "\u{1F910}", "\u{1F910}", 0, 18, 0, 0),
    ("\u{1F911}", "\u{1F911}", "\u{1F911}", "\u{1F911}", 0, 18, 0, 0),
    ("\u{1F912}", "\u{1F912}", "\u{1F912}", "\u{1F912}", 0, 18, 0, 0),
    ("\u{1F913}", "\u{1F913}", "\u{1F913}", "\u{1F913}", 0, 18, 0, 0),
    ("\u{1F914}", "\u{1F914}", "\u{1F914}", "\u{1F914}", 0, 18, 0, 0),
    ("\u{1F915}", "\u{1F915}", "\u{1F915}", "\u{1F915}", 0, 18, 0, 0),
    ("\u{1F916}", "\u{1F916}", "\u{1F916}", "\u{1F916}", 0, 18, 0, 0),
    ("\u{1F917}", "\u{1F917}", "\u{1F917}", "\u{1F917}", 0, 18, 0, 0),
    ("\u{1F918}", "\u{1F918}", "\u{1F918}", "\u{1F918}", 0, 18, 0, 0),
    ("\u{1F919}", "\u{1F919}", "\u{1F919}", "\u{1F919}", 0, 18, 0, 0),
    ("\u{1F91A}", "\u{1F91A}", "\u{1F91A}", "\u{1F91A}", 0, 18, 0, 0),
    ("\u{1F91B}", "\u{1F91B}", "\u{1F91B}", "\u{1F91B}", 0, 18, 0, 0),
    ("\u{1F91C}", "\u{1F91C}", "\u{1F91C}", "\u{1F91C}", 0, 18, 0, 0),
    ("\u{1F91D}", "\u{1F91D}", "\u{1F91D}", "\u{1F91D}", 0, 18, 0, 0),
    ("\u{1F91E}", "\u{1F91E}", "\u{1F91E}", "\u{1F91E}", 0, 18, 0, 0),
    ("\u{1F91F}", "\u{1F91F}", "\u{1F91F}", "\u{1F91F}", 0, 18, 0, 0),
    ("\u{1F920}", "\u{1F920}", "\u{1F920}", "\u{1F920}", 0, 18, 0, 0),
    ("\u{1F921}", "\u{1F921}", "\u{1F921}", "\u{1F921}", 0, 18, 0, 0),
    ("\u{1F922}", "\u{1F922}", "\u{1F922}", "\u{1F922}", 0, 18, 0, 0),
    ("\u{1F923}", "\u{1F923}", "\u{1F923}", "\u{1F923}", 0, 18, 0, 0),
    ("\u{1F924}", "\u{1F924}", "\u{1F924}", "\u{1F924}", 0, 18, 0, 0),
    ("\u{1F925}", "\u{1F925}", "\u{1F925}", "\u{1F925}", 0, 18, 0, 0),
    ("\u{1F926}", "\u{1F926}", "\u{1F926}", "\u{1F926}", 0, 18, 0, 0),
    ("\u{1F927}", "\u{1F927}", "\u{1F927}", "\u{1F927}", 0, 18, 0, 0),
    ("\u{1F928}", "\u{1F928}", "\u{1F928}", "\u{1F928}", 0, 18, 0, 0),
    ("\u{1F929}", "\u{1F929}", "\u{1F929}", "\u{1F929}", 0, 18, 0, 0),
    ("\u{1F92A}", "\u{1F92A}", "\u{1F92A}", "\u{1F92A}", 0, 18, 0, 0),
    ("\u{1F92B}", "\u{1F92B}", "\u{1F92B}", "\u{1F92B}", 0, 18, 0, 0),
    ("\u{1F92C}", "\u{1F92C}", "\u{1F92C}", "\u{1F92C}", 0, 18, 0, 0),
    ("\u{1F92D}", "\u{1F92D}", "\u{1F92D}", "\u{1F92D}", 0, 18, 0, 0),
    ("\u{1F92E}", "\u{1F92E}", "\u{1F92E}", "\u{1F92E}", 0, 18, 0, 0),
    ("\u{1F92F}", "\u{1F92F}", "\u{1F92F}", "\u{1F92F}", 0, 18, 0, 0),
    ("\u{1F930}", "\u{1F930}", "\u{1F930}", "\u{1F930}", 0, 18, 0, 0),
    ("\u{1F931}", "\u{1F931}", "\u{1F931}", "\u{1F931}", 0, 18, 0, 0),
    ("\u{1F932}", "\u{1F932}", "\u{1F932}", "\u{1F932}", 0, 18, 0, 0),
    ("\u{1F933}", "\u{1F933}", "\u{1F933}", "\u{1F933}", 0, 18, 0, 0),
    ("\u{1F934}", "\u{1F934}", "\u{1F934}", "\u{1F934}", 0, 18, 0, 0),
    ("\u{1F935}", "\u{1F935}", "\u{1F935}", "\u{1F935}", 0, 18, 0, 0),
    ("\u{1F936}", "\u{1F936}", "\u{1F936}", "\u{1F936}", 0, 18, 0, 0),
    ("\u{1F937}", "\u{1F937}", "\u{1F937}", "\u{1F937}", 0, 18, 0, 0),
    ("\u{1F938}", "\u{1F938}", "\u{1F938}", "\u{1F938}", 0, 18, 0, 0),
    ("\u{1F939}", "\u{1F939}", "\u{1F939}", "\u{1F939}", 0, 18, 0, 0),
    ("\u{1F93A}", "\u{1F93A}", "\u{1F93A}", "\u{1F93A}", 0, 18, 0, 0),
    ("\u{1F93B}", "\u{1F93B}", "\u{1F93B}", "\u{1F93B}", 0, 18, 0, 0),
    ("\u{1F93C}", "\u{1F93C}", "\u{1F93C}", "\u{1F93C}", 0, 18, 0, 0),
    ("\u{1F93D}", "\u{1F93D}", "\u{1F93D}", "\u{1F93D}", 0, 18, 0, 0),
    ("\u{1F93E}", "\u{1F93E}", "\u{1F93E}", "\u{1F93E}", 0, 18, 0, 0),
    ("\u{1F93F}", "\u{1F93F}", "\u{1F93F}", "\u{1F93F}", 0, 18, 0, 0),
    ("\u{1F940}", "\u{1F940}", "\u{1F940}", "\u{1F940}", 0, 18, 0, 0),
    ("\u{1F941}", "\u{1F941}", "\u{1F941}", "\u{1F941}", 0, 18, 0, 0),
    ("\u{1F942}", "\u{1F942}", "\u{1F942}", "\u{1F942}", 0, 18, 0, 0),
    ("\u{1F943}", "\u{1F943}", "\u{1F943}", "\u{1F943}", 0, 18, 0, 0),
    ("\u{1F944}", "\u{1F944}", "\u{1F944}", "\u{1F944}", 0, 18, 0, 0),
    ("\u{1F945}", "\u{1F945}", "\u{1F945}", "\u{1F945}", 0, 18, 0, 0),
    ("\u{1F946}", "\u{1F946}", "\u{1F946}", "\u{1F946}", 0, 18, 0, 0),
    ("\u{1F947}", "\u{1F947}", "\u{1F947}", "\u{1F947}", 0, 18, 0, 0),
    ("\u{1F948}", "\u{1F948}", "\u{1F948}", "\u{1F948}", 0, 18, 0, 0),
    ("\u{1F949}", "\u{1F949}", "\u{1F949}", "\u{1F949}", 0, 18, 0, 0),
    ("\u{1F94A}", "\u{1F94A}", "\u{1F94A}", "\u{1F94A}", 0, 18, 0, 0),
    ("\u{1F94B}", "\u{1F94B}", "\u{1F94B}", "\u{1F94B}", 0, 18, 0, 0),
    ("\u{1F94C}", "\u{1F94C}", "\u{1F94C}", "\u{1F94C}", 0, 18, 0, 0),
    ("\u{1F94D}", "\u{1F94D}", "\u{1F94D}", "\u{1F94D}", 0, 18, 0, 0),
    ("\u{1F94E}", "\u{1F94E}", "\u{1F94E}", "\u{1F94E}", 0, 18, 0, 0),
    ("\u{1F94F}", "\u{1F94F}", "\u{1F94F}", "\u{1F94F}", 0, 18, 0, 0),
    ("\u{1F950}", "\u{1F950}", "\u{1F950}", "\u{1F950}", 0, 18, 0, 0),
    ("\u{1F951}", "\u{1F951}", "\u{1F951}", "\u{1F951}", 0, 18, 0, 0),
    ("\u{1F952}", "\u{1F952}", "\u{1F952}", "\u{1F952}", 0, 18, 0, 0),
    ("\u{1F953}", "\u{1F953}", "\u{1F953}", "\u{1F953}", 0, 18, 0, 0),
    ("\u{1F954}", "\u{1F954}", "\u{1F954}", "\u{1F954}", 0, 18, 0, 0),
    ("\u{1F955}", "\u{1F955}", "\u{1F955}", "\u{1F955}", 0, 18, 0, 0),
    ("\u{1F956}", "\u{1F956}", "\u{1F956}", "\u{1F956}", 0, 18, 0, 0),
    ("\u{1F957}", "\u{1F957}", "\u{1F957}", "\u{1F957}", 0, 18, 0, 0),
    ("\u{1F958}", "\u{1F958}", "\u{1F958}", "\u{1F958}", 0, 18, 0, 0),
    ("\u{1F959}", "\u{1F959}", "\u{1F959}", "\u{1F959}", 0, 18, 0, 0),
    ("\u{1F95A}", "\u{1F95A}", "\u{1F95A}", "\u{1F95A}", 0, 18, 0, 0),
    ("\u{1F95B}", "\u{1F95B}", "\u{1F95B}", "\u{1F95B}", 0, 18, 0, 0),
    ("\u{1F95C}", "\u{1F95C}", "\u{1F95C}", "\u{1F95C}", 0, 18, 0, 0),
    ("\u{1F95D}", "\u{1F95D}", "\u{1F95D}", "\u{1F95D}", 0, 18, 0, 0),
    ("\u{1F95E}", "\u{1F95E}", "\u{1F95E}", "\u{1F95E}", 0, 18, 0, 0),
    ("\u{1F95F}", "\u{1F95F}", "\u{1F95F}", "\u{1F95F}", 0, 18, 0, 0),
    ("\u{1F960}", "\u{1F960}", "\u{1F960}", "\u{1F960}", 0, 18, 0, 0),
    ("\u{1F961}", "\u{1F961}", "\u{1F961}", "\u{1F961}", 0, 18, 0, 0),
    ("\u{1F962}", "\u{1F962}", "\u{1F962}", "\u{1F962}", 0, 18, 0, 0),
    ("\u{1F963}", "\u{1F963}", "\u{1F963}", "\u{1F963}", 0, 18, 0, 0),
    ("\u{1F964}", "\u{1F964}", "\u{1F964}", "\u{1F964}", 0, 18, 0, 0),
    ("\u{1F965}", "\u{1F965}", "\u{1F965}", "\u{1F965}", 0, 18, 0, 0),
    ("\u{1F966}", "\u{1F966}", "\u{1F966}", "\u{1F966}", 0, 18, 0, 0),
    ("\u{1F967}", "\u{1F967}", "\u{1F967}", "\u{1F967}", 0, 18, 0, 0),
    ("\u{1F968}", "\u{1F968}", "\u{1F968}", "\u{1F968}", 0, 18, 0, 0),
    ("\u{1F969}", "\u{1F969}", "\u{1F969}", "\u{1F969}", 0, 18, 0, 0),
    ("\u{1F96A}", "\u{1F96A}", "\u{1F96A}", "\u{1F96A}", 0, 18, 0, 0),
    ("\u{1F96B}", "\u{1F96B}", "\u{1F96B}", "\u{1F96B}", 0, 18, 0, 0),
    ("\u{1F96C}", "\u{1F96C}", "\u{1F96C}", "\u{1F96C}", 0, 18, 0, 0),
    ("\u{1F96D}", "\u{1F96D}", "\u{1F96D}", "\u{1F96D}", 0, 18, 0, 0),
    ("\u{1F96E}", "\u{1F96E}", "\u{1F96E}", "\u{1F96E}", 0, 18, 0, 0),
    ("\u{1F96F}", "\u{1F96F}", "\u{1F96F}", "\u{1F96F}", 0, 18, 0, 0),
    ("\u{1F970}", "\u{1F970}", "\u{1F970}", "\u{1F970}", 0, 18, 0, 0),
    ("\u{1F971}", "\u{1F971}", "\u{1F971}", "\u{1F971}", 0, 18, 0, 0),
    ("\u{1F972}", "\u{1F972}", "\u{1F972}", "\u{1F972}", 0, 18, 0, 0),
    ("\u{1F973}", "\u{1F973}", "\u{1F973}", "\u{1F973}", 0, 18, 0, 0),
    ("\u{1F974}", "\u{1F974}", "\u{1F974}", "\u{1F974}", 0, 18, 0, 0),
    ("\u{1F975}", "\u{1F975}", "\u{1F975}", "\u{1F975}", 0, 18, 0, 0),
    ("\u{1F976}", "\u{1F976}", "\u{1F976}", "\u{1F976}", 0, 18, 0, 0),
    ("\u{1F977}", "\u{1F977}", "\u{1F977}", "\u{1F977}", 0, 18, 0, 0),
    ("\u{1F978}", "\u{1F978}", "\u{1F978}", "\u{1F978}", 0, 18, 0, 0),
    ("\u{1F979}", "\u{1F979}", "\u{1F979}", "\u{1F979}", 0, 18, 0, 0),
    ("\u{1F97A}", "\u{1F97A}", "\u{1F97A}", "\u{1F97A}", 0, 18, 0, 0),
    ("\u{1F97B}", "\u{1F97B}", "\u{1F97B}", "\u{1F97B}", 0, 18, 0, 0),
    ("\u{1F97C}", "\u{1F97C}", "\u{1F97C}", "\u{1F97C}", 0, 18, 0, 0),
    ("\u{1F97D}", "\u{1F97D}", "\u{1F97D}", "\u{1F97D}", 0, 18, 0, 0),
    ("\u{1F97E}", "\u{1F97E}", "\u{1F97E}", "\u{1F97E}", 0, 18, 0, 0),
    ("\u{1F97F}", "\u{1F97F}", "\u{1F97F}", "\u{1F97F}", 0, 18, 0, 0),
    ("\u{1F980}", "\u{1F980}", "\u{1F980}", "\u{1F980}", 0, 18, 0, 0),
    ("\u{1F981}", "\u{1F981}", "\u{1F981}", "\u{1F981}", 0, 18, 0, 0),
    ("\u{1F982}", "\u{1F982}", "\u{1F982}", "\u{1F982}", 0, 18, 0, 0),
    ("\u{1F983}", "\u{1F983}", "\u{1F983}", "\u{1F983}", 0, 18, 0, 0),
    ("\u{1F984}", "\u{1F984}", "\u{1F984}", "\u{1F984}", 0, 18, 0, 0),
    ("\u{1F985}", "\u{1F985}", "\u{1F985}", "\u{1F985}", 0, 18, 0, 0),
    ("\u{1F986}", "\u{1F986}", "\u{1F986}", "\u{1F986}", 0, 18, 0, 0),
    ("\u{1F987}", "\u{1F987}", "\u{1F987}", "\u{1F987}", 0, 18, 0, 0),
    ("\u{1F988}", "\u{1F988}", "\u{1F988}", "\u{1F988}", 0, 18, 0, 0),
    ("\u{1F989}", "\u{1F989}", "\u{1F989}", "\u{1F989}", 0, 18, 0, 0),
    ("\u{1F98A}", "\u{1F98A}", "\u{1F98A}", "\u{1F98A}", 0, 18, 0, 0),
    ("\u{1F98B}", "\u{1F98B}", "\u{1F98B}", "\u{1F98B}", 0, 18, 0, 0),
    ("\u{1F98C}", "\u{1F98C}", "\u{1F98C}", "\u{1F98C}", 0, 18, 0, 0),
    ("\u{1F98D}", "\u{1F98D}", "\u{1F98D}", "\u{1F98D}", 0, 18, 0, 0),
    ("\u{1F98E}", "\u{1F98E}", "\u{1F98E}", "\u{1F98E}", 0, 18, 0, 0),
    ("\u{1F98F}", "\u{1F98F}", "\u{1F98F}", "\u{1F98F}", 0, 18, 0, 0),
    ("\u{1F990}", "\u{1F990}", "\u{1F990}", "\u{1F990}", 0, 18, 0, 0),
    ("\u{1F991}", "\u{1F991}", "\u{1F991}", "\u{1F991}", 0, 18, 0, 0),
    ("\u{1F992}", "\u{1F992}", "\u{1F992}", "\u{1F992}", 0, 18, 0, 0),
    ("\u{1F993}", "\u{1F993}", "\u{1F993}", "\u{1F993}", 0, 18, 0, 0),
    ("\u{1F994}", "\u{1F994}", "\u{1F994}", "\u{1F994}", 0, 18, 0, 0),
    ("\u{1F995}", "\u{1F995}", "\u{1F995}", "\u{1F995}", 0, 18, 0, 0),
    ("\u{1F996}", "\u{1F996}", "\u{1F996}", "\u{1F996}", 0, 18, 0, 0),
    ("\u{1F997}", "\u{1F997}", "\u{1F997}", "\u{1F997}", 0, 18, 0, 0),
    ("\u{1F998}", "\u{1F998}", "\u{1F998}", "\u{1F998}", 0, 18, 0, 0),
    ("\u{1F999}", "\u{1F999}", "\u{1F999}", "\u{1F999}", 0, 18, 0, 0),
    ("\u{1F99A}", "\u{1F99A}", "\u{1F99A}", "\u{1F99A}", 0, 18, 0, 0),
    ("\u{1F99B}", "\u{1F99B}", "\u{1F99B}", "\u{1F99B}", 0, 18, 0, 0),
    ("\u{1F99C}", "\u{1F99C}", "\u{1F99C}", "\u{1F99C}", 0, 18, 0, 0),
    ("\u{1F99D}", "\u{1F99D}", "\u{1F99D}", "\u{1F99D}", 0, 18, 0, 0),
    ("\u{1F99E}", "\u{1F99E}", "\u{1F99E}", "\u{1F99E}", 0, 18, 0, 0),
    ("\u{1F99F}", "\u{1F99F}", "\u{1F99F}", "\u{1F99F}", 0, 18, 0, 0),
    ("\u{1F9A0}", "\u{1F9A0}", "\u{1F9A0}", "\u{1F9A0}", 0, 18, 0, 0),
    ("\u{1F9A1}", "\u{1F9A1}", "\u{1F9A1}", "\u{1F9A1}", 0, 18, 0, 0),
    ("\u{1F9A2}", "\u{1F9A2}", "\u{1F9A2}", "\u{1F9A2}", 0, 18, 0, 0),
    ("\u{1F9A3}", "\u{1F9A3}", "\u{1F9A3}", "\u{1F9A3}", 0, 18, 0, 0),
    ("\u{1F9A4}", "\u{1F9A4}", "\u{1F9A4}", "\u{1F9A4}", 0, 18, 0, 0),
    ("\u{1F9A5}", "\u{1F9A5}", "\u{1F9A5}", "\u{1F9A5}", 0, 18, 0, 0),
    ("\u{1F9A6}", "\u{1F9A6}", "\u{1F9A6}", "\u{1F9A6}", 0, 18, 0, 0),
    ("\u{1F9A7}", "\u{1F9A7}", "\u{1F9A7}", "\u{1F9A7}", 0, 18, 0, 0),
    ("\u{1F9A8}", "\u{1F9A8}", "\u{1F9A8}", "\u{1F9A8}", 0, 18, 0, 0),
    ("\u{1F9A9}", "\u{1F9A9}", "\u{1F9A9}", "\u{1F9A9}", 0, 18, 0, 0),
    ("\u{1F9AA}", "\u{1F9AA}", "\u{1F9AA}", "\u{1F9AA}", 0, 18, 0, 0),
    ("\u{1F9AB}", "\u{1F9AB}", "\u{1F9AB}", "\u{1F9AB}", 0, 18, 0, 0),
    ("\u{1F9AC}", "\u{1F9AC}", "\u{1F9AC}", "\u{1F9AC}", 0, 18, 0, 0),
    ("\u{1F9AD}", "\u{1F9AD}", "\u{1F9AD}", "\u{1F9AD}", 0, 18, 0, 0),
    ("\u{1F9AE}", "\u{1F9AE}", "\u{1F9AE}", "\u{1F9AE}", 0, 18, 0, 0),
    ("\u{1F9AF}", "\u{1F9AF}", "\u{1F9AF}", "\u{1F9AF}", 0, 18, 0, 0),
    ("\u{1F9B0}", "\u{1F9B0}", "\u{1F9B0}", "\u{1F9B0}", 0, 18, 0, 0),
    ("\u{1F9B1}", "\u{1F9B1}", "\u{1F9B1}", "\u{1F9B1}", 0, 18, 0, 0),
    ("\u{1F9B2}", "\u{1F9B2}", "\u{1F9B2}", "\u{1F9B2}", 0, 18, 0, 0),
    ("\u{1F9B3}", "\u{1F9B3}", "\u{1F9B3}", "\u{1F9B3}", 0, 18, 0, 0),
    ("\u{1F9B4}", "\u{1F9B4}", "\u{1F9B4}", "\u{1F9B4}", 0, 18, 0, 0),
    ("\u{1F9B5}", "\u{1F9B5}", "\u{1F9B5}", "\u{1F9B5}", 0, 18, 0, 0),
    ("\u{1F9B6}", "\u{1F9B6}", "\u{1F9B6}", "\u{1F9B6}", 0, 18, 0, 0),
    ("\u{1F9B7}", "\u{1F9B7}", "\u{1F9B7}", "\u{1F9B7}", 0, 18, 0, 0),
    ("\u{1F9B8}", "\u{1F9B8}", "\u{1F9B8}", "\u{1F9B8}", 0, 18, 0, 0),
    ("\u{1F9B9}", "\u{1F9B9}", "\u{1F9B9}", "\u{1F9B9}", 0, 18, 0, 0),
    ("\u{1F9BA}", "\u{1F9BA}", "\u{1F9BA}", "\u{1F9BA}", 0, 18, 0, 0),
    ("\u{1F9BB}", "\u{1F9BB}", "\u{1F9BB}", "\u{1F9BB}", 0, 18, 0, 0),
    ("\u{1F9BC}", "\u{1F9BC}", "\u{1F9BC}", "\u{1F9BC}", 0, 18, 0, 0),
    ("\u{1F9BD}", "\u{1F9BD}", "\u{1F9BD}", "\u{1F9BD}", 0, 18, 0, 0),
    ("\u{1F9BE}", "\u{1F9BE}", "\u{1F9BE}", "\u{1F9BE}", 0, 18, 0, 0),
    ("\u{1F9BF}", "\u{1F9BF}", "\u{1F9BF}", "\u{1F9BF}", 0, 18, 0, 0),
    ("\u{1F9C0}", "\u{1F9C0}", "\u{1F9C0}", "\u{1F9C0}", 0, 18, 0, 0),
    ("\u{1F9C1}", "\u{1F9C1}", "\u{1F9C1}", "\u{1F9C1}", 0, 18, 0, 0),
    ("\u{1F9C2}", "\u{1F9C2}", "\u{1F9C2}", "\u{1F9C2}", 0, 18, 0, 0),
    ("\u{1F9C3}", "\u{1F9C3}", "\u{1F9C3}", "\u{1F9C3}", 0, 18, 0, 0),
    ("\u{1F9C4}", "\u{1F9C4}", "\u{1F9C4}", "\u{1F9C4}", 0, 18, 0, 0),
    ("\u{1F9C5}", "\u{1F9C5}", "\u{1F9C5}", "\u{1F9C5}", 0, 18, 0, 0),
    ("\u{1F9C6}", "\u{1F9C6}", "\u{1F9C6}", "\u{1F9C6}", 0, 18, 0, 0),
    ("\u{1F9C7}", "\u{1F9C7}", "\u{1F9C7}", "\u{1F9C7}", 0, 18, 0, 0),
    ("\u{1F9C8}", "\u{1F9C8}", "\u{1F9C8}", "\u{1F9C8}", 0, 18, 0, 0),
    ("\u{1F9C9}", "\u{1F9C9}", "\u{1F9C9}", "\u{1F9C9}", 0, 18, 0, 0),
    ("\u{1F9CA}", "\u{1F9CA}", "\u{1F9CA}", "\u{1F9CA}", 0, 18, 0, 0),
    ("\u{1F9CB}", "\u{1F9CB}", "\u{1F9CB}", "\u{1F9CB}", 0, 18, 0, 0),
    ("\u{1F9CC}", "\u{1F9CC}", "\u{1F9CC}", "\u{1F9CC}", 0, 18, 0, 0),
    ("\u{1F9CD}", "\u{1F9CD}", "\u{1F9CD}", "\u{1F9CD}", 0, 18, 0, 0),
    ("\u{1F9CE}", "\u{1F9CE}", "\u{1F9CE}", "\u{1F9CE}", 0, 18, 0, 0),
    ("\u{1F9CF}", "\u{1F9CF}", "\u{1F9CF}", "\u{1F9CF}", 0, 18, 0, 0),
    ("\u{1F9D0}", "\u{1F9D0}", "\u{1F9D0}", "\u{1F9D0}", 0, 18, 0, 0),
    ("\u{1F9D1}", "\u{1F9D1}", "\u{1F9D1}", "\u{1F9D1}", 0, 18, 0, 0),
    ("\u{1F9D2}", "\u{1F9D2}", "\u{1F9D2}", "\u{1F9D2}", 0, 18, 0, 0),
    ("\u{1F9D3}", "\u{1F9D3}", "\u{1F9D3}", "\u{1F9D3}", 0, 18, 0, 0),
    ("\u{1F9D4}", "\u{1F9D4}", "\u{1F9D4}", "\u{1F9D4}", 0, 18, 0, 0),
    ("\u{1F9D5}", "\u{1F9D5}", "\u{1F9D5}", "\u{1F9D5}", 0, 18, 0, 0),
    ("\u{1F9D6}", "\u{1F9D6}", "\u{1F9D6}", "\u{1F9D6}", 0, 18, 0, 0),
    ("\u{1F9D7}", "\u{1F9D7}", "\u{1F9D7}", "\u{1F9D7}", 0, 18, 0, 0),
    ("\u{1F9D8}", "\u{1F9D8}", "\u{1F9D8}", "\u{1F9D8}", 0, 18, 0, 0),
    ("\u{1F9D9}", "\u{1F9D9}", "\u{1F9D9}", "\u{1F9D9}", 0, 18, 0, 0),
    ("\u{1F9DA}", "\u{1F9DA}", "\u{1F9DA}", "\u{1F9DA}", 0, 18, 0, 0),
    ("\u{1F9DB}", "\u{1F9DB}", "\u{1F9DB}", "\u{1F9DB}", 0, 18, 0, 0),
    ("\u{1F9DC}", "\u{1F9DC}", "\u{1F9DC}", "\u{1F9DC}", 0, 18, 0, 0),
    ("\u{1F9DD}", "\u{1F9DD}", "\u{1F9DD}", "\u{1F9DD}", 0, 18, 0, 0),
    ("\u{1F9DE}", "\u{1F9DE}", "\u{1F9DE}", "\u{1F9DE}", 0, 18, 0, 0),
    ("\u{1F9DF}", "\u{1F9DF}", "\u{1F9DF}", "\u{1F9DF}", 0, 18, 0, 0),
    ("\u{1F9E0}", "\u{1F9E0}", "\u{1F9E0}", "\u{1F9E0}", 0, 18, 0, 0),
    ("\u{1F9E1}", "\u{1F9E1}", "\u{1F9E1}", "\u{1F9E1}", 0, 18, 0, 0),
    ("\u{1F9E2}", "\u{1F9E2}", "\u{1F9E2}", "\u{1F9E2}", 0, 18, 0, 0),
    ("\u{1F9E3}", "\u{1F9E3}", "\u{1F9E3}", "\u{1F9E3}", 0, 18, 0, 0),
    ("\u{1F9E4}", "\u{1F9E4}", "\u{1F9E4}", "\u{1F9E4}", 0, 18, 0, 0),
    ("\u{1F9E5}", "\u{1F9E5}", "\u{1F9E5}", "\u{1F9E5}", 0, 18, 0, 0),
    ("\u{1F9E6}", "\u{1F9E6}", "\u{1F9E6}", "\u{1F9E6}", 0, 18, 0, 0),
    ("\u{1F9E7}", "\u{1F9E7}", "\u{1F9E7}", "\u{1F9E7}", 0, 18, 0, 0),
    ("\u{1F9E8}", "\u{1F9E8}", "\u{1F9E8}", "\u{1F9E8}", 0, 18, 0, 0),
    ("\u{1F9E9}", "\u{1F9E9}", "\u{1F9E9}", "\u{1F9E9}", 0, 18, 0, 0),
    ("\u{1F9EA}", "\u{1F9EA}", "\u{1F9EA}", "\u{1F9EA}", 0, 18, 0, 0),
    ("\u{1F9EB}", "\u{1F9EB}", "\u{1F9EB}", "\u{1F9EB}", 0, 18, 0, 0),
    ("\u{1F9EC}", "\u{1F9EC}", "\u{1F9EC}", "\u{1F9EC}", 0, 18, 0, 0),
    ("\u{1F9ED}", "\u{1F9ED}", "\u{1F9ED}", "\u{1F9ED}", 0, 18, 0, 0),
    ("\u{1F9EE}", "\u{1F9EE}", "\u{1F9EE}", "\u{1F9EE}", 0, 18, 0, 0),
    ("\u{1F9EF}", "\u{1F9EF}", "\u{1F9EF}", "\u{1F9EF}", 0, 18, 0, 0),
    ("\u{1F9F0}", "\u{1F9F0}", "\u{1F9F0}", "\u{1F9F0}", 0, 18, 0, 0),
    ("\u{1F9F1}", "\u{1F9F1}", "\u{1F9F1}", "\u{1F9F1}", 0, 18, 0, 0),
    ("\u{1F9F2}", "\u{1F9F2}", "\u{1F9F2}", "\u{1F9F2}", 0, 18, 0, 0),
    ("\u{1F9F3}", "\u{1F9F3}", "\u{1F9F3}", "\u{1F9F3}", 0, 18, 0, 0),
    ("\u{1F9F4}", "\u{1F9F4}", "\u{1F9F4}", "\u{1F9F4}", 0, 18, 0, 0),
    ("\u{1F9F5}", "\u{1F9F5}", "\u{1F9F5}", "\u{1F9F5}", 0, 18, 0, 0),
    ("\u{1F9F6}", "\u{1F9F6}", "\u{1F9F6}", "\u{1F9F6}", 0, 18, 0, 0),
    ("\u{1F9F7}", "\u{1F9F7}", "\u{1F9F7}", "\u{1F9F7}", 0, 18, 0, 0),
    ("\u{1F9F8}", "\u{1F9F8}", "\u{1F9F8}", "\u{1F9F8}", 0, 18, 0, 0),
    ("\u{1F9F9}", "\u{1F9F9}", "\u{1F9F9}", "\u{1F9F9}", 0, 18, 0, 0),
    ("\u{1F9FA}", "\u{1F9FA}", "\u{1F9FA}", "\u{1F9FA}", 0, 18, 0, 0),
    ("\u{1F9FB}", "\u{1F9FB}", "\u{1F9FB}", "\u{1F9FB}", 0, 18, 0, 0),
    ("\u{1F9FC}", "\u{1F9FC}", "\u{1F9FC}", "\u{1F9FC}", 0, 18, 0, 0),
    ("\u{1F9FD}", "\u{1F9FD}", "\u{1F9FD}", "\u{1F9FD}", 0, 18, 0, 0),
    ("\u{1F9FE}", "\u{1F9FE}", "\u{1F9FE}", "\u{1F9FE}", 0, 18, 0, 0),
    ("\u{1F9FF}", "\u{1F9FF}", "\u{1F9FF}", "\u{1F9FF}", 0, 18, 0, 0),
];
