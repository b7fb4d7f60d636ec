//! Lock manifest rewriting
//!
//! The lock manifest is a POM whose `<dependencies>` region is owned by
//! deplock. Everything up to and including the `<dependencies>` line (the
//! header) and everything from the `</dependencies>` line on (the footer) is
//! captured when the manifest is opened and written back untouched; only the
//! managed body in between is regenerated.
//!
//! Opening a manifest also snapshots its bytes into a uniquely named sibling
//! file. [`ManifestRewriter::modified`] and [`ManifestRewriter::restore`] work
//! against that snapshot, and the snapshot is deleted when the rewriter is
//! dropped.
//!
//! A manifest reached through a symlink is rewritten at its target; the link
//! itself is never replaced.

pub mod fragment;


use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::dependency::Dependency;
use crate::error::{self, Result};

/// File name of the lock manifest inside its directory
pub const LOCK_MANIFEST: &str = "pom.xml";

const OPEN_MARKER: &str = "<dependencies>";
const CLOSE_MARKER: &str = "</dependencies>";

/// A manifest split at its marker lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Sections {
    /// Lines up to and including the opening marker
    pub header: String,
    /// Lines strictly between the markers
    pub body: String,
    /// The closing marker line and everything after it
    pub footer: String,
}

enum Region {
    Header,
    Body,
    Footer,
}

/// Split manifest content at its `<dependencies>` / `</dependencies>` lines
///
/// Line endings are kept so that header and footer round-trip byte for byte.
pub(crate) fn split_sections(path: &Path, content: &str) -> Result<Sections> {
    let malformed = |reason: &str| error::manifest_malformed(path.display().to_string(), reason);

    let mut sections = Sections {
        header: String::new(),
        body: String::new(),
        footer: String::new(),
    };
    let mut region = Region::Header;

    for line in content.split_inclusive('\n') {
        let marker = line.trim();
        match region {
            Region::Header => {
                if marker == CLOSE_MARKER {
                    return Err(malformed("</dependencies> appears before <dependencies>"));
                }
                sections.header.push_str(line);
                if marker == OPEN_MARKER {
                    region = Region::Body;
                }
            }
            Region::Body => {
                if marker == OPEN_MARKER {
                    return Err(malformed("more than one <dependencies> line"));
                }
                if marker == CLOSE_MARKER {
                    sections.footer.push_str(line);
                    region = Region::Footer;
                } else {
                    sections.body.push_str(line);
                }
            }
            Region::Footer => {
                if marker == OPEN_MARKER {
                    return Err(malformed("more than one <dependencies> line"));
                }
                sections.footer.push_str(line);
            }
        }
    }

    match region {
        Region::Header => Err(malformed("missing <dependencies> line")),
        Region::Body => Err(malformed("missing </dependencies> line")),
        Region::Footer => Ok(sections),
    }
}

/// Owner of one lock manifest and its snapshot
#[derive(Debug)]
pub struct ManifestRewriter {
    /// Path of the manifest as given
    path: PathBuf,

    /// File actually read and replaced, with symlinks resolved
    target: PathBuf,

    /// Preserved region before the managed body
    header: String,

    /// Preserved region after the managed body
    footer: String,

    /// Managed body as it was when the manifest was opened
    original_body: String,

    /// Copy of the manifest taken at open time, removed on drop
    snapshot: NamedTempFile,
}

impl ManifestRewriter {
    /// Open the lock manifest (`pom.xml`) in `dir`
    pub fn open(dir: &Path) -> Result<Self> {
        Self::open_file(&dir.join(LOCK_MANIFEST))
    }

    /// Open a manifest at an explicit path
    pub fn open_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(error::manifest_not_found(path.display().to_string()));
        }

        let target = fs::canonicalize(path).map_err(|e| error::file_read_failed(path, e))?;
        let bytes = fs::read(&target).map_err(|e| error::file_read_failed(&target, e))?;
        let content = std::str::from_utf8(&bytes).map_err(|_| {
            error::manifest_malformed(path.display().to_string(), "not valid UTF-8")
        })?;
        let sections = split_sections(path, content)?;

        let mut snapshot = sibling_temp_file(path, "snapshot")?;
        let snapshot_path = snapshot.path().to_path_buf();
        snapshot
            .write_all(&bytes)
            .and_then(|()| snapshot.flush())
            .map_err(|e| error::file_write_failed(&snapshot_path, e))?;

        tracing::debug!(
            manifest = %path.display(),
            target = %target.display(),
            snapshot = %snapshot.path().display(),
            "opened lock manifest"
        );

        Ok(Self {
            path: path.to_path_buf(),
            target,
            header: sections.header,
            footer: sections.footer,
            original_body: sections.body,
            snapshot,
        })
    }

    /// Path of the manifest
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the snapshot side file
    #[allow(dead_code)] // Used by tests
    pub fn snapshot_path(&self) -> &Path {
        self.snapshot.path()
    }

    /// Dependencies listed in the managed body when the manifest was opened
    pub fn managed_dependencies(&self) -> Vec<Dependency> {
        fragment::parse_fragments(&self.original_body)
    }

    /// Replace the managed body with `dependencies`, in the given order
    pub fn write(&self, dependencies: &[Dependency]) -> Result<()> {
        let body = fragment::to_fragments(dependencies);
        let mut content =
            String::with_capacity(self.header.len() + body.len() + self.footer.len());
        content.push_str(&self.header);
        content.push_str(&body);
        content.push_str(&self.footer);

        self.replace_contents(content.as_bytes())?;
        tracing::debug!(
            manifest = %self.path.display(),
            count = dependencies.len(),
            "wrote managed dependencies"
        );
        Ok(())
    }

    /// Empty the managed body
    pub fn reset(&self) -> Result<()> {
        self.write(&[])
    }

    /// Whether the manifest on disk differs from the snapshot
    pub fn modified(&self) -> Result<bool> {
        let current =
            fs::read(&self.target).map_err(|e| error::file_read_failed(&self.target, e))?;
        let original = self.snapshot_contents()?;
        Ok(current != original)
    }

    /// Put the snapshot content back in place of the manifest
    pub fn restore(&self) -> Result<()> {
        let original = self.snapshot_contents()?;
        self.replace_contents(&original)?;
        tracing::debug!(manifest = %self.path.display(), "restored lock manifest");
        Ok(())
    }

    /// Delete the snapshot now, reporting failure instead of ignoring it
    pub fn close(self) -> Result<()> {
        let snapshot_path = self.snapshot.path().to_path_buf();
        self.snapshot
            .close()
            .map_err(|e| error::file_write_failed(&snapshot_path, e))
    }

    fn snapshot_contents(&self) -> Result<Vec<u8>> {
        fs::read(self.snapshot.path()).map_err(|e| error::file_read_failed(self.snapshot.path(), e))
    }

    /// Write `content` to a temp file next to the target and rename it over
    /// the target, so readers see either the old or the new file.
    fn replace_contents(&self, content: &[u8]) -> Result<()> {
        let write_failed = |e: std::io::Error| error::file_write_failed(&self.target, e);

        let mut staged = sibling_temp_file(&self.target, "tmp")?;
        staged.write_all(content).map_err(write_failed)?;
        staged.as_file().sync_all().map_err(write_failed)?;

        if let Ok(metadata) = fs::metadata(&self.target) {
            staged
                .as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_failed)?;
        }

        staged
            .persist(&self.target)
            .map_err(|e| error::file_write_failed(&self.target, e.error))?;
        Ok(())
    }
}

/// Create `.<manifest-name>.<random>.<suffix>` in the manifest's directory
fn sibling_temp_file(path: &Path, suffix: &str) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or(LOCK_MANIFEST);

    tempfile::Builder::new()
        .prefix(&format!(".{name}."))
        .suffix(&format!(".{suffix}"))
        .tempfile_in(dir)
        .map_err(|e| error::file_write_failed(dir, e))
}
