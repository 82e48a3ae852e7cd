//! Interactive tag selection

use std::io::{BufRead, Write};

use crate::catalog::filter_and_sort;
use crate::install::error::InstallError;
use crate::version::types::RawTag;

/// Tag picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Whatever the mirror marks as its latest release
    Latest,
    Tag(String),
}

impl Selection {
    /// Tag name to request from the release source
    pub fn as_tag(&self) -> &str {
        match self {
            Selection::Latest => "latest",
            Selection::Tag(tag) => tag,
        }
    }
}

/// List filtered tags newest first and read a numbered choice.
///
/// `0` (or an empty line) selects the latest release. Invalid input reprompts;
/// end of input aborts.
pub fn select_tag_interactive<R: BufRead, W: Write>(
    tags: &[RawTag],
    filter: Option<&str>,
    mut input: R,
    mut output: W,
) -> Result<Selection, InstallError> {
    let filtered = filter_and_sort(tags, filter);
    if filtered.is_empty() {
        return Err(InstallError::NoMatchingTags);
    }

    writeln!(output, "\n--- Available Tags ---")?;
    writeln!(output, "0) latest (Recommended)")?;
    for (i, tag) in filtered.iter().enumerate() {
        writeln!(output, "{}) {}", i + 1, tag.tag_name)?;
    }
    writeln!(output, "----------------------")?;

    let mut line = String::new();
    loop {
        write!(output, "Enter the number of the tag to install [0]: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(InstallError::SelectionAborted);
        }

        let choice = line.trim();
        let choice = if choice.is_empty() { "0" } else { choice };
        match choice.parse::<usize>() {
            Ok(0) => return Ok(Selection::Latest),
            Ok(n) if n <= filtered.len() => {
                return Ok(Selection::Tag(filtered[n - 1].tag_name.clone()));
            }
            _ => writeln!(output, "Invalid choice. Try again.")?,
        }
    }
}
