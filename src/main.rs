use clap::Parser;
use dragtable::core::config::{self, CliOverrides};
use dragtable::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dragtable", about = "Reorder table rows by dragging them")]
struct Args {
    /// Config file (default: ~/.dragtable/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory printed tables are written to
    #[arg(long)]
    print_dir: Option<PathBuf>,

    /// Command run on each printed file, e.g. "lp"
    #[arg(long)]
    print_command: Option<String>,

    /// Log file path
    #[arg(long, default_value = "dragtable.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The TUI owns the terminal, so logs only ever go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("dragtable: {e}; using defaults");
            log::warn!("Falling back to default config: {}", e);
            config::TableConfig::default()
        }
    };
    let cli = CliOverrides {
        print_dir: args.print_dir,
        print_command: args.print_command,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "dragtable starting with {} rows, printing to {}",
        resolved.rows.len(),
        resolved.print_dir.display()
    );

    tui::run(resolved)
}
