//! Helpers for running the `keep2bear` binary against a scratch workspace.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory with a Takeout tree and an output root.
pub struct Workspace {
    _dir: TempDir,
    pub root: PathBuf,
    pub takeout: PathBuf,
    pub keep: PathBuf,
    pub out: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().to_path_buf();
        let takeout = root.join("Takeout");
        let keep = takeout.join("Keep");
        std::fs::create_dir_all(&keep).expect("create Keep dir");
        Self {
            root: root.clone(),
            takeout,
            keep,
            out: root.join("bear"),
            _dir: dir,
        }
    }

    /// Write a note record into `Takeout/Keep/`.
    pub fn note(&self, name: &str, json: &str) -> PathBuf {
        let path = self.keep.join(name);
        std::fs::write(&path, json).expect("write note");
        path
    }

    /// Write an attachment file into `Takeout/Keep/`.
    pub fn attachment(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.keep.join(name);
        std::fs::write(&path, bytes).expect("write attachment");
        path
    }

    pub fn bundle(&self, name: &str) -> PathBuf {
        self.out.join(format!("{name}.textbundle"))
    }

    pub fn bundle_text(&self, name: &str) -> String {
        std::fs::read_to_string(self.bundle(name).join("text.txt")).expect("read text.txt")
    }
}

pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run the binary inside the workspace root with a clean environment.
pub fn run_keep2bear<I, S>(workspace: &Workspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::cargo_bin("keep2bear")
        .expect("binary built")
        .current_dir(&workspace.root)
        .env_remove("RUST_LOG")
        .env_remove("KEEP2BEAR_INPUT")
        .env_remove("KEEP2BEAR_OUTPUT")
        .env_remove("KEEP2BEAR_CONFIG")
        .env_remove("KEEP2BEAR_LOG_FILE")
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run keep2bear: {e}"));

    CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// `-i <takeout> -o <out>` plus extra args.
pub fn convert_args(workspace: &Workspace, extra: &[&str]) -> Vec<String> {
    let mut args = vec![
        "-i".to_string(),
        workspace.takeout.display().to_string(),
        "-o".to_string(),
        workspace.out.display().to_string(),
    ];
    args.extend(extra.iter().map(|s| (*s).to_string()));
    args
}
