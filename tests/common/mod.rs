//! Common test utilities for deplock integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory of the lock manifest inside every test project
pub const LOCK_DIR: &str = "dependency-lock";

pub const LOCK_HEADER: &str = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<project xmlns=\"http://maven.apache.org/POM/4.0.0\">
\t<modelVersion>4.0.0</modelVersion>
\t<groupId>io.joynr</groupId>
\t<artifactId>dependency-lock</artifactId>
\t<dependencyManagement>
\t\t<dependencies>
";

pub const LOCK_FOOTER: &str = "\
\t\t</dependencies>
\t</dependencyManagement>
</project>
";

/// A Maven project with a lock manifest under [`LOCK_DIR`]
pub struct TestProject {
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestProject {
    /// Create a project whose lock manifest has `body` as managed body
    pub fn new(body: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let project = Self { temp, path };
        project.write_file(
            "pom.xml",
            "<project><groupId>io.joynr</groupId><artifactId>root</artifactId></project>\n",
        );
        project.write_file(
            &format!("{LOCK_DIR}/pom.xml"),
            &format!("{LOCK_HEADER}{body}{LOCK_FOOTER}"),
        );
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Path of the lock manifest
    pub fn lock_manifest(&self) -> PathBuf {
        self.path.join(LOCK_DIR).join("pom.xml")
    }

    /// Raw bytes of the lock manifest
    pub fn lock_bytes(&self) -> Vec<u8> {
        std::fs::read(self.lock_manifest()).expect("Failed to read lock manifest")
    }

    /// Contents of the lock manifest
    pub fn lock_contents(&self) -> String {
        std::fs::read_to_string(self.lock_manifest()).expect("Failed to read lock manifest")
    }

    /// Files in the lock directory other than the manifest
    pub fn lock_dir_leftovers(&self) -> Vec<String> {
        std::fs::read_dir(self.path.join(LOCK_DIR))
            .expect("Failed to read lock directory")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name != "pom.xml")
            .collect()
    }
}

/// Render a managed body the way deplock writes it
pub fn lock_body(entries: &[(&str, &str, &str, &str)]) -> String {
    entries
        .iter()
        .map(|(group, artifact, kind, version)| {
            format!(
                "\t\t\t<dependency>\n\
                 \t\t\t\t<groupId>{group}</groupId>\n\
                 \t\t\t\t<artifactId>{artifact}</artifactId>\n\
                 \t\t\t\t<type>{kind}</type>\n\
                 \t\t\t\t<version>{version}</version>\n\
                 \t\t\t</dependency>\n"
            )
        })
        .collect()
}

/// Render `entries` the way `mvn dependency:list` prints them
pub fn dependency_list_output(entries: &[&str]) -> String {
    let mut out = String::from(
        "[INFO] Scanning for projects...\n\
         [INFO] \n\
         [INFO] --- maven-dependency-plugin:3.6.0:list (default-cli) @ root ---\n\
         [INFO] \n\
         [INFO] The following files have been resolved:\n",
    );
    for entry in entries {
        out.push_str("[INFO]    ");
        out.push_str(entry);
        out.push('\n');
    }
    out.push_str("[INFO] BUILD SUCCESS\n");
    out
}

/// A shell script standing in for `mvn`
///
/// Listing calls are appended to `calls.log` next to the script.
#[cfg(unix)]
pub struct FakeMaven {
    pub path: PathBuf,
    log: PathBuf,
}

#[cfg(unix)]
impl FakeMaven {
    /// Fake printing `output` for every listing
    pub fn new(dir: &Path, output: &str) -> Self {
        Self::write(dir, output, "exit 0")
    }

    /// Fake whose listings exit 1 with `message` on stderr
    pub fn failing(dir: &Path, message: &str) -> Self {
        Self::write(
            dir,
            "[INFO] Scanning for projects...",
            &format!("echo '[ERROR] {message}' >&2\nexit 1"),
        )
    }

    fn write(dir: &Path, output: &str, tail: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let bin = dir.join("fake-maven");
        std::fs::create_dir_all(&bin).expect("Failed to create fake maven directory");
        let path = bin.join("mvn");
        let log = bin.join("calls.log");

        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"-v\" ]; then\n\
             \x20 echo 'Apache Maven 3.9.6 (fake)'\n\
             \x20 exit 0\n\
             fi\n\
             echo \"$*\" >> '{log}'\n\
             cat <<'DEPLOCK_EOF'\n\
             {output}\n\
             DEPLOCK_EOF\n\
             {tail}\n",
            log = log.display(),
        );
        std::fs::write(&path, script).expect("Failed to write fake maven");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake maven executable");

        Self { path, log }
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

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn deplock_cmd() -> Command {
    let mut cmd = Command::cargo_bin("deplock").expect("Failed to find deplock binary");
    cmd.env_remove("DEPLOCK_PROJECT_DIR")
        .env_remove("DEPLOCK_MVN")
        .env_remove("RUST_LOG");
    cmd
}

/// deplock command pointed at `project` with its lock directory
pub fn deplock_cmd_for_project(project: &TestProject) -> Command {
    let mut cmd = deplock_cmd();
    cmd.arg("-p").arg(&project.path).args(["-l", LOCK_DIR]);
    cmd
}
