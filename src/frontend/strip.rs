use crate::scanner;
use anyhow::Context;
use derive_more::Constructor;
use log::debug;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct Outcome {
    pub bytes_in: usize,
    pub bytes_out: usize,
}

pub fn strip(source: &str) -> String {
    scanner::strip_line_comments(source)
}

/// Rewrites the file at `path` in place with its line comments removed.
/// The whole file is read before anything is written; a failed write is
/// not rolled back.
pub fn strip_path(path: &Path) -> anyhow::Result<Outcome> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let stripped = scanner::strip_line_comments(&source);

    std::fs::write(path, &stripped)
        .with_context(|| format!("could not write {}", path.display()))?;

    let outcome = Outcome::new(source.len(), stripped.len());
    debug!(
        "{}: {} bytes in, {} bytes out",
        path.display(),
        outcome.bytes_in,
        outcome.bytes_out
    );

    Ok(outcome)
}
