//! Workspace maintenance tasks.
//!
//! `gen-unicode-table` regenerates the embedded Unicode table in
//! `glean-unicode` from a Unicode Character Database checkout:
//!
//! ```text
//! cargo run -p xtask -- gen-unicode-table --ucd /path/to/ucd \
//!     [--out crates/glean-unicode/src/table/generated.rs]
//! ```
//!
//! The UCD directory must contain `UnicodeData.txt`, `CaseFolding.txt`,
//! `DerivedCoreProperties.txt`, `auxiliary/GraphemeBreakProperty.txt`, and
//! `emoji/emoji-data.txt`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

mod unicode_table;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(task) = args.next() else {
        bail!("usage: cargo run -p xtask -- gen-unicode-table --ucd <dir> [--out <file>]");
    };

    match task.as_str() {
        "gen-unicode-table" => {
            let mut ucd: Option<PathBuf> = None;
            let mut out = PathBuf::from("crates/glean-unicode/src/table/generated.rs");

            while let Some(flag) = args.next() {
                match flag.as_str() {
                    "--ucd" => {
                        ucd = Some(PathBuf::from(
                            args.next().context("--ucd needs a directory")?,
                        ));
                    }
                    "--out" => {
                        out = PathBuf::from(args.next().context("--out needs a file")?);
                    }
                    other => bail!("unknown flag `{other}`"),
                }
            }

            let ucd = ucd.context("--ucd <dir> is required")?;
            gen_unicode_table(&ucd, &out)
        }
        other => bail!("unknown task `{other}`"),
    }
}

fn gen_unicode_table(ucd: &Path, out: &Path) -> Result<()> {
    let data = unicode_table::UcdData::load(ucd)?;
    let mut rows = Vec::new();

    for (start, end) in unicode_table::BLOCKS {
        for cp in *start..=*end {
            let Some(scalar) = char::from_u32(cp) else {
                continue;
            };
            if let Some(row) = data.row(scalar) {
                rows.push((cp, row));
            }
        }
    }
    rows.sort_by_key(|(cp, _)| *cp);

    let mut output = String::new();
    writeln!(
        output,
        "// @generated by `cargo run -p xtask -- gen-unicode-table`. Do not edit by hand."
    )?;
    writeln!(output, "//")?;
    writeln!(
        output,
        "// Unicode {}. One row per non-default scalar:",
        data.version
    )?;
    writeln!(output, "// (original, normal, folded_case, swapped_case, flags,")?;
    writeln!(output, "//  break_property, combining_class, indic_conjunct_break).")?;
    writeln!(output, "// Flags: 1 = letter, 2 = punctuation, 4 = uppercase.")?;
    writeln!(output, "// Sorted by `original` for binary search.")?;
    writeln!(output)?;
    writeln!(
        output,
        "pub(super) type Row = (&'static str, &'static str, &'static str, &'static str, u8, u8, u8, u8);"
    )?;
    writeln!(output)?;
    writeln!(output, "#[rustfmt::skip]")?;
    writeln!(output, "pub(super) static CODE_POINTS: &[Row] = &[")?;
    for (_, row) in &rows {
        writeln!(output, "    {row}")?;
    }
    writeln!(output, "];")?;

    std::fs::write(out, output)
        .with_context(|| format!("failed to write {}", out.display()))?;
    eprintln!("wrote {} rows to {}", rows.len(), out.display());
    Ok(())
}
