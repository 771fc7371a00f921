mod config;
mod exif_reader;
mod namer;
mod renamer;
mod timestamp;

pub use config::{validate_format, FormatError, RenameOptions};
pub use namer::{candidate_name, resolve_target, NameDecision};
pub use renamer::{run_rename, FileOutcome, RenameReport, RenameStats};
pub use timestamp::{resolve_timestamp, ResolvedTimestamp, TimestampSource};

pub const DEFAULT_FORMAT: &str = "%Y-%m-%d-%H.%M.%S";
