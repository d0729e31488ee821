mod config;
mod project_path;
mod report;
mod wordlist;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use config::Config;
use project_path::ProjectPath;
use radix_core::{PrefixPolicy, Trie};
use report::PrefixSource;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordlist::WordList;

/// Prefix completion over a word list.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Word list, one word per line, inserted in file order
    words: PathBuf,

    /// Prefixes to complete, read from stdin when none are given
    prefixes: Vec<String>,

    #[arg(short, long, default_value = "radix.toml")]
    config_name: String,

    /// Overrides the configured prefix policy (preserve or drop)
    #[arg(short, long)]
    policy: Option<PrefixPolicy>,

    /// Print the trie outline before completing
    #[arg(long)]
    dump: bool,

    #[arg(short, long)]
    debug: bool,

    /// Write logs to this file instead of stderr, the cache directory when
    /// no path is given. The path must be attached: `--log-file=PATH`
    #[arg(long, num_args = 0..=1, require_equals = true)]
    log_file: Option<Option<PathBuf>>,
}

fn prepare_logs(
    is_debug: bool,
    log_file: Option<&Option<PathBuf>>,
) -> color_eyre::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if is_debug { "debug" } else { "warn" }));

    let Some(log_file) = log_file else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .with(filter)
            .init();
        return Ok(None);
    };

    let (directory, file_name) = match log_file {
        Some(path) => (
            path.parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(|parent| parent.to_path_buf())
                .unwrap_or(std::env::current_dir()?),
            path.file_name()
                .map(|name| name.to_os_string())
                .unwrap_or(ProjectPath::log_name().into()),
        ),
        None => (
            ProjectPath::cache_dir().unwrap_or(std::env::current_dir()?),
            ProjectPath::log_name().into(),
        ),
    };
    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .compact()
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();
    Ok(Some(guard))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let _guard = prepare_logs(args.debug, args.log_file.as_ref())?;

    let config = Config::load(&args.config_name)?;
    let options = match args.policy {
        Some(policy) => config.trie.with_prefix_policy(policy),
        None => config.trie,
    };

    let list = WordList::try_read_from_path(&args.words)?;
    let trie = Trie::build_with(list.words(), options)?;
    info!(
        path = %args.words.display(),
        words = list.words().len(),
        leaves = trie.len(),
        nodes = trie.node_count(),
        "word list loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.dump {
        write!(out, "{}", trie.dump())?;
    }

    let source = PrefixSource::from_args(&args.prefixes);
    report::write_completions(
        &mut out,
        &trie,
        source,
        std::io::stdin().lock(),
        &config.output,
    )?;
    Ok(())
}
