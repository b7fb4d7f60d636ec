//! Test fixtures shared by unit tests.
//!
//! Provides scratch projects with a lock manifest and a stand-in `mvn`
//! script that prints canned `dependency:list` output.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_project, dependency_list_output, FakeMaven};
//!
//! #[test]
//! fn my_test() {
//!     let (temp, manifest) = create_project("");
//!     let maven = FakeMaven::new(
//!         temp.path(),
//!         &dependency_list_output(&["org.a:a:jar:1:compile"]),
//!         &dependency_list_output(&[]),
//!     );
//! }
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::manifest::LOCK_MANIFEST;

/// Lines before the managed body of the fixture manifest
pub const MANIFEST_HEADER: &str = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<project xmlns=\"http://maven.apache.org/POM/4.0.0\">
\t<modelVersion>4.0.0</modelVersion>
\t<groupId>io.joynr</groupId>
\t<artifactId>dependency-lock</artifactId>
\t<dependencyManagement>
\t\t<dependencies>
";

/// Lines after the managed body of the fixture manifest
pub const MANIFEST_FOOTER: &str = "\
\t\t</dependencies>
\t</dependencyManagement>
</project>
";

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a project directory whose `pom.xml` has `body` as managed body.
///
/// # Panics
///
/// Panics if the directory or manifest cannot be created.
#[must_use]
pub fn create_project(body: &str) -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let manifest = temp.path().join(LOCK_MANIFEST);
    std::fs::write(&manifest, format!("{MANIFEST_HEADER}{body}{MANIFEST_FOOTER}"))
        .expect("Failed to write manifest");
    (temp, manifest)
}

/// Render `entries` the way `mvn dependency:list` prints them, banner included
#[must_use]
pub fn dependency_list_output(entries: &[&str]) -> String {
    let mut out = String::from(
        "[INFO] Scanning for projects...\n\
         [INFO] \n\
         [INFO] --- maven-dependency-plugin:3.6.0:list (default-cli) @ dependency-lock ---\n\
         [INFO] \n\
         [INFO] The following files have been resolved:\n",
    );
    for entry in entries {
        out.push_str("[INFO]    ");
        out.push_str(entry);
        out.push('\n');
    }
    out.push_str(
        "[INFO] \n\
         [INFO] BUILD SUCCESS\n",
    );
    out
}

/// A shell script standing in for `mvn`
///
/// `-v` succeeds unless built with [`FakeMaven::broken`]. Listing calls print
/// the direct output when `-DexcludeTransitive=true` is present and the full
/// output otherwise, and are appended to a call log.
#[cfg(unix)]
pub struct FakeMaven {
    path: PathBuf,
    log: PathBuf,
}

#[cfg(unix)]
impl FakeMaven {
    /// Fake that succeeds with the given listings
    pub fn new(dir: &Path, all: &str, direct: &str) -> Self {
        Self::write(dir, 0, all, direct, "exit 0")
    }

    /// Fake whose listings exit 1 with `stderr`
    pub fn failing(dir: &Path, stderr: &str) -> Self {
        Self::write(
            dir,
            0,
            "[INFO] Scanning for projects...",
            "[INFO] Scanning for projects...",
            &format!("echo '[ERROR] {stderr}' >&2\nexit 1"),
        )
    }

    /// Fake whose `-v` probe fails
    pub fn broken(dir: &Path) -> Self {
        Self::write(dir, 1, "", "", "exit 1")
    }

    fn write(dir: &Path, probe_code: i32, all: &str, direct: &str, tail: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let bin = dir.join(".fake-maven");
        std::fs::create_dir_all(&bin).expect("Failed to create fake maven directory");
        let path = bin.join("mvn");
        let log = bin.join("calls.log");

        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"-v\" ]; then\n\
             \x20 echo 'Apache Maven 3.9.6 (fake)'\n\
             \x20 exit {probe_code}\n\
             fi\n\
             echo \"$*\" >> '{log}'\n\
             case \"$*\" in\n\
             \x20 *-DexcludeTransitive=true*)\n\
             cat <<'DEPLOCK_EOF'\n\
             {direct}\n\
             DEPLOCK_EOF\n\
             \x20   ;;\n\
             \x20 *)\n\
             cat <<'DEPLOCK_EOF'\n\
             {all}\n\
             DEPLOCK_EOF\n\
             \x20   ;;\n\
             esac\n\
             {tail}\n",
            log = log.display(),
        );
        std::fs::write(&path, script).expect("Failed to write fake maven");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake maven executable");

        Self { path, log }
    }

    /// Path of the script as a string, for `Settings::maven`
    pub fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    /// Arguments of every listing call so far
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project() {
        let (temp, manifest) = create_project("");
        assert!(manifest.starts_with(temp.path()));
        let content = std::fs::read_to_string(manifest).expect("manifest readable");
        assert!(content.contains("<dependencies>"));
        assert!(content.contains("</dependencies>"));
    }

    #[test]
    fn test_dependency_list_output_parses() {
        let output = dependency_list_output(&["org.a:a:jar:1:compile", "org.b:b:pom:2:import"]);
        assert_eq!(crate::dependency::parse_dependency_list(&output).len(), 2);
    }
}
