use crate::exif_reader::read_exif_datetime;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimestampSource {
    Exif,
    StatusChanged,
    Created,
    Modified,
}

#[derive(Debug, Clone, Copy)]
pub struct ResolvedTimestamp {
    pub date: DateTime<Local>,
    pub source: TimestampSource,
}

pub fn resolve_timestamp(path: &Path) -> Result<ResolvedTimestamp> {
    if let Some(date) = read_exif_datetime(path) {
        return Ok(ResolvedTimestamp {
            date,
            source: TimestampSource::Exif,
        });
    }

    let meta = fs::metadata(path)
        .with_context(|| format!("ファイル情報を取得できませんでした: {}", path.display()))?;
    filesystem_timestamp(&meta, path)
}

#[cfg(unix)]
fn filesystem_timestamp(meta: &fs::Metadata, path: &Path) -> Result<ResolvedTimestamp> {
    use std::os::unix::fs::MetadataExt;

    if let Some(date) = DateTime::from_timestamp(meta.ctime(), meta.ctime_nsec() as u32) {
        return Ok(ResolvedTimestamp {
            date: date.with_timezone(&Local),
            source: TimestampSource::StatusChanged,
        });
    }

    birth_or_modified(meta, path)
}

#[cfg(not(unix))]
fn filesystem_timestamp(meta: &fs::Metadata, path: &Path) -> Result<ResolvedTimestamp> {
    birth_or_modified(meta, path)
}

fn birth_or_modified(meta: &fs::Metadata, path: &Path) -> Result<ResolvedTimestamp> {
    if let Ok(created) = meta.created() {
        return Ok(ResolvedTimestamp {
            date: DateTime::from(created),
            source: TimestampSource::Created,
        });
    }

    let modified = meta
        .modified()
        .with_context(|| format!("更新日時を取得できませんでした: {}", path.display()))?;
    Ok(ResolvedTimestamp {
        date: DateTime::from(modified),
        source: TimestampSource::Modified,
    })
}
