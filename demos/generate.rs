//! cargo run --example=generate --release -- 4 4 --charset numeric

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use log::{info, warn};

use wordgen::*;

/// ファイル出力のフラッシュ間隔 (受理語数)。
const FLUSH_INTERVAL: u64 = 100_000;

#[derive(Debug, Parser)]
#[command(about = "Generate a wordlist from a charset, a length range and an optional pattern")]
struct Cli {
    /// Minimum word length.
    min: usize,

    /// Maximum word length.
    max: usize,

    /// Predefined charset: numeric, alpha, alpha-upper, alpha-mixed,
    /// alphanum, alphanum-upper, alphanum-mixed.
    #[arg(
        short,
        long,
        conflicts_with = "string",
        required_unless_present = "string"
    )]
    charset: Option<String>,

    /// Custom charset string (deduplicated and sorted by code point).
    #[arg(short, long)]
    string: Option<String>,

    /// Positional pattern: @ = lowercase, , = digit, % = uppercase,
    /// ^ = any charset char, anything else = literal.
    #[arg(short, long)]
    pattern: Option<String>,

    /// Output file. Words go to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let source = match (&cli.charset, &cli.string) {
        (Some(name), None) => CharsetSource::Preset(name.clone()),
        (None, Some(s)) => CharsetSource::Custom(s.clone()),
        _ => unreachable!("clap enforces exactly one charset source"),
    };

    // 設定の検証は全て生成開始前に済ませる。
    let charset = source.resolve()?;
    let range = LengthRange::new(cli.min, cli.max)?;
    let pattern = cli.pattern.as_deref().map(Pattern::parse);

    let wordlist = Wordlist::new(charset, range, pattern);
    if wordlist.range() != range {
        warn!(
            "pattern length is outside {}..={}; adjusting both bounds to {} for this run",
            range.min(),
            range.max(),
            wordlist.range().min()
        );
    }

    info!("charset: {}", wordlist.charset().display());
    info!(
        "min length: {}, max length: {}",
        wordlist.range().min(),
        wordlist.range().max()
    );
    if let Some(pattern) = wordlist.pattern() {
        info!("pattern: {pattern}");
    }
    if let Some(path) = &cli.output {
        info!("output: {}", path.display());
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst))
            .context("failed to install the interrupt handler")?;
    }

    let mut sink: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not open {} for writing", path.display()))?;
            Box::new(io::BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    let mut stats = RunStats::start();
    for word in wordlist.words() {
        // 割り込みは単語の書き出しの合間にのみ観測する。
        if interrupted.load(Ordering::SeqCst) {
            warn!("interrupted; stopping early");
            break;
        }

        writeln!(sink, "{word}").context("failed to write to the output")?;
        stats.record();

        // ファイル出力の進み具合が見えるよう、定期的にフラッシュする。
        if stats.count() % FLUSH_INTERVAL == 0 {
            sink.flush().context("failed to flush the output")?;
        }
    }
    sink.flush().context("failed to flush the output")?;

    info!("total words generated: {}", stats.count());
    info!("total duration: {:?}", stats.elapsed());

    Ok(())
}
