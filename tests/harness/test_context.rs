//! Shared testing harness for `suitegen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty work directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment whose work directory is an existing project.
    pub(crate) fn with_project(project_name: &str, company_name: &str) -> Self {
        let ctx = Self::new();
        ctx.write_project_config(project_name, company_name);
        fs::create_dir_all(ctx.suitescripts_root()).expect("Failed to create SuiteScripts root");
        ctx
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn suitescripts_root(&self) -> PathBuf {
        self.work_dir.join("src/FileCabinet/SuiteScripts")
    }

    pub(crate) fn objects_root(&self) -> PathBuf {
        self.work_dir.join("src/Objects")
    }

    /// Build a command for invoking the compiled `suitegen` binary in the work directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `suitegen` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("suitegen").expect("Failed to locate suitegen binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env("USERPROFILE", self.home())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write the project preference file into the work directory.
    pub(crate) fn write_project_config(&self, project_name: &str, company_name: &str) {
        let content = format!(
            r#"{{
  "projectName": "{project_name}",
  "companyName": "{company_name}",
  "userName": "jdoe",
  "userEmail": "jdoe@x.com"
}}"#
        );
        fs::write(self.work_dir.join(".tool-config"), content)
            .expect("Failed to write project config");
    }

    /// Create a folder under the SuiteScripts root.
    pub(crate) fn create_folder(&self, relative: &str) {
        fs::create_dir_all(self.suitescripts_root().join(relative))
            .expect("Failed to create SuiteScripts folder");
    }

    pub(crate) fn read_file(&self, path: impl AsRef<Path>) -> String {
        let path = path.as_ref();
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }
}
