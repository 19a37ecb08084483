use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let hash = git_short_hash(&manifest_dir).unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=INKBOARD_GIT_HASH={hash}");

    if let Some(git_dir) = git_dir_for(&manifest_dir) {
        for tracked in ["HEAD", "refs", "packed-refs"] {
            let path = git_dir.join(tracked);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

fn git_short_hash(repo: &Path) -> Option<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

/// `.git` is a directory in a normal checkout and a `gitdir:` pointer file in
/// worktrees and submodules; relative pointers resolve against its parent.
fn git_dir_for(repo: &Path) -> Option<PathBuf> {
    if let Some(from_env) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(from_env));
    }

    let dot_git = repo.join(".git");
    if dot_git.is_dir() {
        return Some(dot_git);
    }

    let pointer = fs::read_to_string(&dot_git).ok()?;
    let target = PathBuf::from(pointer.strip_prefix("gitdir:")?.trim());
    let base = dot_git.parent().unwrap_or(repo);
    Some(base.join(target))
}
