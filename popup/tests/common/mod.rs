use assert_cmd::Command;
use assert_cmd::assert::Assert;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct PopupTestHelper<'a> {
    pub work_dir: TempDir,
    name: &'a str,
    counter: AtomicUsize,
}

impl<'a> PopupTestHelper<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
            name,
            counter: AtomicUsize::new(0),
        }
    }

    pub fn run_command(&self, args: &[&str]) -> Assert {
        let mut cmd = Command::cargo_bin("popup").unwrap();
        cmd.current_dir(self.work_dir.path())
            .env(
                "POPUP_RUN_ID",
                format!(
                    "{}-{}",
                    self.name,
                    self.counter.fetch_add(1, Ordering::Relaxed)
                ),
            )
            .env("POPUP_OUTPUT_PROGRESS", "plain")
            .env_remove("POPUP_FALLBACK")
            .env_remove("POPUP_SETTINGS")
            .env("NO_COLOR", "1")
            .args(args)
            .assert()
    }

    /// Write a settings file into the working dir, returning its path.
    pub fn write_settings(&self, body: &str) -> String {
        let settings = self.work_dir.child("popup.yaml");
        settings.write_str(body).unwrap();
        settings.path().display().to_string()
    }

    pub fn clean_work_dir(self) {
        self.work_dir.close().unwrap();
    }
}
