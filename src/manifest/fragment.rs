//! `<dependency>` fragment encoding
//!
//! Each record is emitted as a six-line block indented with tabs to match the
//! lock manifest's existing layout:
//!
//! ```text
//! \t\t\t<dependency>
//! \t\t\t\t<groupId>…</groupId>
//! \t\t\t\t<artifactId>…</artifactId>
//! \t\t\t\t<type>…</type>
//! \t\t\t\t<version>…</version>
//! \t\t\t</dependency>
//! ```

use crate::dependency::Dependency;

const OUTER_INDENT: &str = "\t\t\t";
const INNER_INDENT: &str = "\t\t\t\t";

/// Serialize a sequence of dependencies, preserving their order
pub fn to_fragments(dependencies: &[Dependency]) -> String {
    let mut out = String::new();
    for dependency in dependencies {
        push_fragment(&mut out, dependency);
    }
    out
}

fn push_fragment(out: &mut String, dependency: &Dependency) {
    out.push_str(OUTER_INDENT);
    out.push_str("<dependency>\n");
    push_element(out, "groupId", dependency.group_id());
    push_element(out, "artifactId", dependency.artifact_id());
    push_element(out, "type", dependency.kind());
    push_element(out, "version", dependency.version());
    out.push_str(OUTER_INDENT);
    out.push_str("</dependency>\n");
}

fn push_element(out: &mut String, tag: &str, value: &str) {
    out.push_str(INNER_INDENT);
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(&escape(value));
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[derive(Default)]
struct PartialDependency {
    group_id: Option<String>,
    artifact_id: Option<String>,
    kind: Option<String>,
    version: Option<String>,
}

impl PartialDependency {
    fn finish(self) -> Option<Dependency> {
        Some(Dependency::new(
            self.group_id?,
            self.artifact_id?,
            self.kind.unwrap_or_else(|| "jar".to_string()),
            self.version?,
        ))
    }
}

/// Read dependency fragments back out of a managed body
///
/// Works line by line on `<tag>value</tag>` children. Children other than the
/// four managed ones (e.g. `<scope>`) are ignored, a missing `<type>` means
/// `jar`, and a block lacking groupId, artifactId or version is skipped.
pub fn parse_fragments(body: &str) -> Vec<Dependency> {
    let mut dependencies = Vec::new();
    let mut current: Option<PartialDependency> = None;

    for line in body.lines() {
        let line = line.trim();
        if line == "<dependency>" {
            current = Some(PartialDependency::default());
            continue;
        }
        if line == "</dependency>" {
            if let Some(dependency) = current.take().and_then(PartialDependency::finish) {
                dependencies.push(dependency);
            }
            continue;
        }

        let Some(partial) = current.as_mut() else {
            continue;
        };
        let Some((tag, value)) = split_element(line) else {
            continue;
        };
        let value = Some(unescape(value));
        match tag {
            "groupId" => partial.group_id = value,
            "artifactId" => partial.artifact_id = value,
            "type" => partial.kind = value,
            "version" => partial.version = value,
            _ => {}
        }
    }

    dependencies
}

fn split_element(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('<')?;
    let (tag, rest) = rest.split_once('>')?;
    let value = rest.strip_suffix('>')?.strip_suffix(tag)?.strip_suffix("</")?;
    Some((tag, value))
}
