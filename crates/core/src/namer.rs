use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameDecision {
    KeepCurrent,
    Rename(PathBuf),
}

pub fn candidate_name(prefix: Option<&str>, base: &str, seq: usize, extension: &str) -> String {
    let prefixed = match prefix {
        Some(p) => format!("{}-", p),
        None => String::new(),
    };

    if seq == 0 {
        format!("{}{}{}", prefixed, base, extension)
    } else {
        format!("{}{}-{:03}{}", prefixed, base, seq, extension)
    }
}

pub fn resolve_target(
    current_path: &Path,
    prefix: Option<&str>,
    base: &str,
    extension: &str,
    exists: impl Fn(&Path) -> bool,
) -> Result<NameDecision> {
    let parent = current_path
        .parent()
        .context("親ディレクトリを取得できませんでした")?;

    let mut seq = 0usize;
    loop {
        let candidate = parent.join(candidate_name(prefix, base, seq, extension));
        if candidate == current_path {
            return Ok(NameDecision::KeepCurrent);
        }
        if !exists(&candidate) {
            return Ok(NameDecision::Rename(candidate));
        }
        seq += 1;
    }
}
