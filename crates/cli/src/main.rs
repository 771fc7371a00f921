use anyhow::Result;
use clap::{Parser, ValueEnum};
use fdate_renamer_core::{run_rename, FileOutcome, RenameOptions, RenameReport, DEFAULT_FORMAT};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fdate-renamer-cli")]
#[command(about = "撮影日時をもとに写真ファイル名を一括リネームします")]
struct Cli {
    #[arg(short, long)]
    directory: PathBuf,
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    format: String,
    #[arg(short, long)]
    custom: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = RenameOptions {
        directory: cli.directory,
        format: cli.format,
        prefix: cli.custom,
    };

    let report = run_rename(&options)?;

    match cli.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            print_table(&report);
        }
    }

    Ok(())
}

fn print_table(report: &RenameReport) {
    for outcome in &report.outcomes {
        match outcome {
            FileOutcome::Kept { path, source } => {
                println!("変更なし: {} ({:?})", path.display(), source);
            }
            FileOutcome::Renamed { from, to, source } => {
                println!(
                    "リネーム: {} -> {} ({:?})",
                    from.display(),
                    to.display(),
                    source
                );
            }
            FileOutcome::Failed { path, error } => {
                println!("失敗: {}: {}", path.display(), error);
            }
        }
    }

    println!(
        "\n集計: scanned={} regular={} skipped={} renamed={} kept={} failed={}",
        report.stats.scanned_entries,
        report.stats.regular_files,
        report.stats.skipped_non_regular,
        report.stats.renamed,
        report.stats.kept,
        report.stats.failed
    );
}
