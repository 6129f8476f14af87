use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=STROKEBOARD_GIT_HASH={hash}");

    if let Some(git_dir) = resolve_git_dir() {
        watch(&git_dir.join("HEAD"));
        watch(&git_dir.join("refs"));
        watch(&git_dir.join("packed-refs"));
    }
}

fn resolve_git_dir() -> Option<PathBuf> {
    if let Some(from_env) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(from_env));
    }

    let dot_git = PathBuf::from(".git");
    if dot_git.is_dir() {
        return Some(dot_git);
    }

    // Worktrees and submodules store a `gitdir:` pointer instead of a directory.
    let contents = fs::read_to_string(&dot_git).ok()?;
    let rest = contents.strip_prefix("gitdir:")?;
    let mut resolved = PathBuf::from(rest.trim());
    if resolved.is_relative() {
        if let Some(parent) = dot_git.parent() {
            resolved = parent.join(resolved);
        }
    }
    Some(resolved)
}

fn watch(path: &Path) {
    if let Some(display) = path.to_str().filter(|_| path.exists()) {
        println!("cargo:rerun-if-changed={display}");
    }
}
