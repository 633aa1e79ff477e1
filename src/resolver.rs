//! Resolution of input paths into spec-run requests.
//!
//! A directory runs the whole suite. A file runs only the spec group named by
//! its first `describe` declaration, e.g.
//!
//! ```text
//! describe "Cart", ->                # CoffeeScript
//! describe("Cart", function() {      // JavaScript
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// Matches the bare-keyword and call forms of a spec group declaration
static DESCRIBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*describe\s*\(?\s*(?:"([^"]+)"|'([^']+)')"#).expect("describe pattern is valid")
});

/// One run of the harness, optionally restricted to a single spec group
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecRequest {
    /// Spec group name; `None` runs everything
    pub filter: Option<String>,
}

impl SpecRequest {
    /// Request the full, unfiltered suite
    pub fn all() -> Self {
        Self { filter: None }
    }

    /// Request a single spec group
    pub fn filtered(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
        }
    }
}

/// Lazily yielded lines of a file
pub type Lines<'a> = Box<dyn Iterator<Item = io::Result<String>> + 'a>;

/// Filesystem access needed for resolution
pub trait FileReader {
    /// Whether the path denotes a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Open the file and yield its lines in order
    fn lines<'a>(&'a self, path: &Path) -> io::Result<Lines<'a>>;
}

/// Reads from the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileReader;

impl FileReader for FsFileReader {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn lines<'a>(&'a self, path: &Path) -> io::Result<Lines<'a>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file).lines()))
    }
}

/// Extract the name of the first spec group declared in `lines`.
/// Stops consuming at the first match.
pub fn extract_description<I>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().find_map(|line| {
        DESCRIBE_RE
            .captures(&line)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string())
    })
}

/// Turn input paths into requests, one per path, in input order.
pub fn resolve<R, P>(reader: &R, paths: &[P]) -> Vec<SpecRequest>
where
    R: FileReader + ?Sized,
    P: AsRef<Path>,
{
    paths
        .iter()
        .map(|path| resolve_path(reader, path.as_ref()))
        .collect()
}

fn resolve_path<R: FileReader + ?Sized>(reader: &R, path: &Path) -> SpecRequest {
    if reader.is_dir(path) {
        debug!(path = %path.display(), "directory resolves to the full suite");
        return SpecRequest::all();
    }

    let lines = match reader.lines(path) {
        Ok(lines) => lines,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read spec file, running the full suite");
            return SpecRequest::all();
        }
    };

    // A read error mid-file ends the scan
    match extract_description(lines.map_while(Result::ok)) {
        Some(description) => {
            debug!(path = %path.display(), %description, "resolved spec filter");
            SpecRequest::filtered(description)
        }
        None => {
            warn!(path = %path.display(), "no describe block found, running the full suite");
            SpecRequest::all()
        }
    }
}
