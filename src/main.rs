use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{info, LevelFilter};
use wordfreq::generate::TextGenerator;
use wordfreq::io::file::read_string_from_file;
use wordfreq::{AnalyzerBuilder, Boundary, Punctuation};

#[derive(Parser, Debug)]
#[command(author, version, about = "Parallel word frequency counter", long_about = None)]
struct Cli {
    /// Text file to analyze
    input: Option<PathBuf>,

    /// Analyze a generated text of at most N words instead of a file
    #[arg(long, value_name = "N", conflicts_with = "input")]
    generate: Option<usize>,

    /// Seed for --generate
    #[arg(long, value_name = "SEED", requires = "generate")]
    seed: Option<u64>,

    /// Characters per chunk
    #[arg(long, value_name = "CHARS", default_value_t = 100)]
    chunk_size: usize,

    /// Counting threads (defaults to available parallelism)
    #[arg(long, value_name = "N")]
    threads: Option<usize>,

    /// Characters stripped before splitting into words
    #[arg(long, value_name = "CHARS")]
    punctuation: Option<String>,

    /// End chunks on whitespace so no word is split between chunks
    #[arg(long)]
    whitespace_boundaries: bool,

    /// Print only the N most frequent words
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Print the frequency of WORD (repeat flag)
    #[arg(long = "lookup", value_name = "WORD")]
    lookups: Vec<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let text = match (&cli.input, cli.generate) {
        (Some(path), _) => read_string_from_file(path)
            .with_context(|| format!("unable to read {}", path.display()))?,
        (None, Some(words)) => {
            let generator = match cli.seed {
                Some(seed) => TextGenerator::from_seed(seed),
                None => TextGenerator::from_entropy(),
            };
            let text = generator.generate(words).context("unable to generate text")?;
            println!("{text}\n");
            text
        }
        (None, None) => bail!("either an input file or --generate is required"),
    };

    let mut builder = AnalyzerBuilder::new()
        .chunk_size(cli.chunk_size)
        .boundary(if cli.whitespace_boundaries {
            Boundary::Whitespace
        } else {
            Boundary::Exact
        });
    if let Some(threads) = cli.threads {
        builder = builder.threads(threads);
    }
    if let Some(chars) = &cli.punctuation {
        builder = builder.punctuation(Punctuation::from(chars.as_str()));
    }

    let analyzer = builder.build().context("invalid configuration")?;
    info!(
        "counting with {} threads, chunk size {}",
        analyzer.threads(),
        analyzer.chunk_size()
    );
    let analysis = analyzer.analyze(&text).context("word counting failed")?;

    let ranked = analysis.ranked();
    let shown = match cli.top {
        Some(n) => ranked.top(n),
        None => ranked.as_slice(),
    };
    for word in shown {
        println!("{}: {}", word.content, word.count);
    }

    for word in &cli.lookups {
        println!("lookup {}: {}", word, analysis.lookup(&word.to_lowercase()));
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = if quiet > 0 {
        match quiet {
            1 => LevelFilter::Warn,
            _ => LevelFilter::Error,
        }
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}
