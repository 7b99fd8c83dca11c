//! cargo run --example=count --release -- 1 3 --charset alpha

use clap::Parser;

use wordgen::*;

#[derive(Debug, Parser)]
#[command(about = "Count the words a configuration would generate, without writing them")]
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
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let source = match (&cli.charset, &cli.string) {
        (Some(name), None) => CharsetSource::Preset(name.clone()),
        (None, Some(s)) => CharsetSource::Custom(s.clone()),
        _ => unreachable!("clap enforces exactly one charset source"),
    };

    let charset = source.resolve()?;
    let range = LengthRange::new(cli.min, cli.max)?;
    let wordlist = Wordlist::new(charset, range, cli.pattern.as_deref().map(Pattern::parse));

    let mut stats = RunStats::start();
    for _ in wordlist.words() {
        stats.record();
    }

    println!("count: {}", stats.count());
    println!("elapsed: {:?}", stats.elapsed());

    Ok(())
}
