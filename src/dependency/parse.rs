//! Parsing of `mvn dependency:list` output
//!
//! Maven interleaves the resolved artifacts with banners, download progress and
//! reactor summaries. Only lines shaped like
//! `[INFO]    group:artifact:type:version:scope` are kept; everything else is
//! dropped without complaint.

use std::collections::BTreeSet;

use super::Dependency;

/// Scopes accepted in the fifth field. Matched as prefixes so that suffixes
/// such as ` -- module foo [auto]` still qualify.
const SCOPES: [&str; 6] = ["compile", "provided", "runtime", "test", "system", "import"];

/// Parse every dependency line in `output`
pub fn parse_dependency_list(output: &str) -> BTreeSet<Dependency> {
    output.lines().filter_map(parse_dependency_line).collect()
}

/// Parse a single output line, returning `None` for anything that is not a
/// dependency entry
pub fn parse_dependency_line(line: &str) -> Option<Dependency> {
    let candidate = match line.split_once(' ') {
        Some((_, rest)) => rest,
        None => line,
    }
    .trim();

    let fields: Vec<&str> = candidate.split(':').collect();
    let [group, artifact, kind, version, scope] = fields.as_slice() else {
        return None;
    };

    if !SCOPES.iter().any(|s| scope.starts_with(s)) {
        return None;
    }

    Some(Dependency::new(*group, *artifact, *kind, *version))
}
