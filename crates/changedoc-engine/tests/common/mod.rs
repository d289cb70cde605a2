#![allow(dead_code)]

use async_trait::async_trait;
use changedoc_core::errors::Result;
use changedoc_engine::advisory::{Advisory, AdvisoryRequest};
use std::path::Path;
use std::process::Command;
use std::sync::Mutex;

/// Advisory double that replies with fixed text and records every request
pub struct ScriptedAdvisory {
    reply: String,
    pub seen: Mutex<Vec<AdvisoryRequest>>,
}

impl ScriptedAdvisory {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last(&self) -> AdvisoryRequest {
        self.seen.lock().unwrap().last().cloned().expect("no advisory call")
    }
}

#[async_trait]
impl Advisory for ScriptedAdvisory {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate(&self, request: &AdvisoryRequest) -> Result<String> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }
}

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run git in `dir` with a throwaway identity
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args([
            "-c",
            "user.name=ChangeDoc Tests",
            "-c",
            "user.email=tests@changedoc.invalid",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .output()
        .expect("run git");
    assert!(
        status.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&status.stderr)
    );
}

/// Create a repository in `dir` with one commit per `(path, content)` batch
pub fn init_repo(dir: &Path, commits: &[&[(&str, &str)]]) {
    git(dir, &["init", "--quiet"]);
    for (i, files) in commits.iter().enumerate() {
        for (path, content) in files.iter() {
            std::fs::write(dir.join(path), content).expect("write fixture");
            git(dir, &["add", path]);
        }
        git(dir, &["commit", "--quiet", "-m", &format!("commit {i}")]);
    }
}
