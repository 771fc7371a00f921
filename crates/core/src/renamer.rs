use crate::config::{validate_format, RenameOptions};
use crate::namer::{resolve_target, NameDecision};
use crate::timestamp::{resolve_timestamp, TimestampSource};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RenameStats {
    pub scanned_entries: usize,
    pub regular_files: usize,
    pub skipped_non_regular: usize,
    pub renamed: usize,
    pub kept: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FileOutcome {
    Kept {
        path: PathBuf,
        source: TimestampSource,
    },
    Renamed {
        from: PathBuf,
        to: PathBuf,
        source: TimestampSource,
    },
    Failed {
        path: PathBuf,
        error: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameReport {
    pub directory: PathBuf,
    pub format: String,
    pub prefix: Option<String>,
    pub outcomes: Vec<FileOutcome>,
    pub stats: RenameStats,
}

pub fn run_rename(options: &RenameOptions) -> Result<RenameReport> {
    validate_format(&options.format)
        .with_context(|| format!("日時フォーマットが不正です: {}", options.format))?;

    if !options.directory.is_dir() {
        anyhow::bail!("フォルダが存在しません: {}", options.directory.display());
    }

    let mut stats = RenameStats::default();
    let files = collect_regular_files(&options.directory, &mut stats)?;

    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        outcomes.push(process_file(&path, options, &mut stats));
    }

    Ok(RenameReport {
        directory: options.directory.clone(),
        format: options.format.clone(),
        prefix: options.prefix.clone(),
        outcomes,
        stats,
    })
}

fn process_file(path: &Path, options: &RenameOptions, stats: &mut RenameStats) -> FileOutcome {
    match try_rename(path, options, stats) {
        Ok(outcome) => outcome,
        Err(err) => {
            stats.failed += 1;
            FileOutcome::Failed {
                path: path.to_path_buf(),
                error: format!("{:#}", err),
            }
        }
    }
}

fn try_rename(path: &Path, options: &RenameOptions, stats: &mut RenameStats) -> Result<FileOutcome> {
    let resolved = resolve_timestamp(path)?;
    let base = resolved.date.format(&options.format).to_string();
    let extension = path
        .extension()
        .map(|v| format!(".{}", v.to_string_lossy()))
        .unwrap_or_default();

    let decision = resolve_target(path, options.prefix.as_deref(), &base, &extension, |p| {
        p.exists()
    })?;

    match decision {
        NameDecision::KeepCurrent => {
            stats.kept += 1;
            Ok(FileOutcome::Kept {
                path: path.to_path_buf(),
                source: resolved.source,
            })
        }
        NameDecision::Rename(target) => {
            fs::rename(path, &target).with_context(|| {
                format!(
                    "リネームに失敗しました: {} -> {}",
                    path.display(),
                    target.display()
                )
            })?;
            stats.renamed += 1;
            Ok(FileOutcome::Renamed {
                from: path.to_path_buf(),
                to: target,
                source: resolved.source,
            })
        }
    }
}

fn collect_regular_files(root: &Path, stats: &mut RenameStats) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in
        fs::read_dir(root).with_context(|| format!("フォルダを読めませんでした: {}", root.display()))?
    {
        let entry = entry.with_context(|| format!("エントリ読み取り失敗: {}", root.display()))?;
        stats.scanned_entries += 1;

        // file_type()はシンボリックリンクを辿らないので通常ファイルのみ残る
        let file_type = entry.file_type().with_context(|| {
            format!(
                "エントリ種別を取得できませんでした: {}",
                entry.path().display()
            )
        })?;
        if !file_type.is_file() {
            stats.skipped_non_regular += 1;
            continue;
        }

        stats.regular_files += 1;
        out.push(entry.path());
    }
    out.sort();
    Ok(out)
}
