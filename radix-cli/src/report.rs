use std::io::{self, BufRead, Write};

use radix_core::Trie;

use crate::config::Output;

/// Where prefixes come from: the command line, or one per input line.
#[derive(Debug, PartialEq, Eq)]
pub enum PrefixSource<'a> {
    Args(&'a [String]),
    Lines,
}

impl<'a> PrefixSource<'a> {
    pub fn from_args(prefixes: &'a [String]) -> Self {
        if prefixes.is_empty() {
            Self::Lines
        } else {
            Self::Args(prefixes)
        }
    }
}

/// One output line for `prefix`: the completions, or `<no match>`.
pub fn completion_line<S: AsRef<str>>(
    trie: &Trie<'_, S>,
    prefix: &str,
    output: &Output,
) -> String {
    let Some(mut words) = trie.complete_words(prefix) else {
        return format!("{prefix}: <no match>");
    };
    if output.sorted {
        words.sort_unstable();
    }
    if output.limit > 0 {
        words.truncate(output.limit);
    }
    format!("{prefix}: {}", words.join(" "))
}

/// Writes one completion line per prefix. `input` is only read for
/// [`PrefixSource::Lines`], until EOF.
pub fn write_completions<S, W, R>(
    out: &mut W,
    trie: &Trie<'_, S>,
    source: PrefixSource<'_>,
    input: R,
    output: &Output,
) -> io::Result<()>
where
    S: AsRef<str>,
    W: Write,
    R: BufRead,
{
    match source {
        PrefixSource::Args(prefixes) => {
            for prefix in prefixes {
                writeln!(out, "{}", completion_line(trie, prefix, output))?;
            }
        }
        PrefixSource::Lines => {
            for line in input.lines() {
                let line = line?;
                writeln!(out, "{}", completion_line(trie, line.trim(), output))?;
                out.flush()?;
            }
        }
    }
    Ok(())
}
