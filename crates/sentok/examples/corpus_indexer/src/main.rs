use clap::Parser;
use sentok::vocab::io::{load_vocab_from_path, save_vocab_to_path};
use sentok::vocab::{BuildResults, CorpusIndex};
use sentok::{ScanConfig, SentenceConfig, VocabBuilderOptions, group_sentences};
use tracing_subscriber::filter::LevelFilter;

/// Segment, tokenize and index a text corpus.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input (X) document.
    #[arg(long)]
    pub input: String,

    /// Optional path to the target (Y) document.
    #[arg(long)]
    pub targets: Option<String>,

    /// Split digit runs into single digits.
    #[arg(long, default_value = "false")]
    pub split_digits: bool,

    /// Lowercase non-special tokens.
    #[arg(long, default_value = "false")]
    pub lowercase: bool,

    /// Fixed row width; derived from the longest sentence when unset.
    #[arg(long)]
    pub seq_len: Option<usize>,

    /// Don't write the start marker.
    #[arg(long, default_value = "false")]
    pub no_prepend: bool,

    /// Don't write the stop marker.
    #[arg(long, default_value = "false")]
    pub no_append: bool,

    /// Titles that don't end a sentence.
    #[arg(long, value_delimiter = ',')]
    pub titles: Option<Vec<String>>,

    /// Additional special tokens.
    #[arg(long, value_delimiter = ',')]
    pub special: Vec<String>,

    /// Seed vocabulary file.
    #[arg(long)]
    pub vocab_in: Option<String>,

    /// Where to write the built vocabulary.
    #[arg(long)]
    pub vocab_out: Option<String>,

    /// Enable verbose output.
    #[arg(long, default_value = "false")]
    pub verbose: bool,
}

fn read_sentences(
    path: &str,
    sentences: &SentenceConfig,
) -> anyhow::Result<Vec<String>> {
    let document = std::fs::read_to_string(path)?;
    Ok(group_sentences(&document, sentences))
}

fn log_corpus(
    corpus: &CorpusIndex<u32>,
    verbose: bool,
) {
    log::info!(
        "corpus {}: {} sentences, longest {} tokens, seq_len {}",
        corpus.side,
        corpus.tokens.len(),
        corpus.max_len,
        corpus.seq_len
    );
    if verbose && let Some(ids) = &corpus.ids {
        for row in ids.rows().into_iter().take(4) {
            log::debug!("{row}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        })
        .init();
    log::debug!("{args:#?}");

    type T = u32;

    let mut sentences = SentenceConfig::default();
    if let Some(titles) = &args.titles {
        sentences = sentences.with_titles(titles);
    }

    let mut scan = ScanConfig::default()
        .with_split_digits(args.split_digits)
        .with_lowercase(args.lowercase);
    for special in &args.special {
        scan.add_special(special);
    }

    let mut options = VocabBuilderOptions::default()
        .with_scan_config(scan)
        .with_x_strings(read_sentences(&args.input, &sentences)?)
        .with_x_seq_len(args.seq_len)
        .with_y_seq_len(args.seq_len)
        .with_prepend(!args.no_prepend)
        .with_append(!args.no_append);

    if let Some(path) = &args.targets {
        options = options.with_y_strings(read_sentences(path, &sentences)?);
    }

    if let Some(path) = &args.vocab_in {
        let vocab = load_vocab_from_path::<T, _>(path)?;
        log::info!("loaded {} words from {path:?}", vocab.len());
        options = options.with_vocab(&vocab);
    }

    let t0 = std::time::Instant::now();
    let BuildResults::<T> { indexer, x, y } = options.init().build()?;
    log::info!(
        "built vocabulary of {} words in {:?}",
        indexer.vocab().len(),
        t0.elapsed()
    );

    for corpus in [&x, &y].into_iter().flatten() {
        log_corpus(corpus, args.verbose);
    }

    if let Some(path) = &args.vocab_out {
        save_vocab_to_path(indexer.vocab(), path)?;
        log::info!("wrote vocabulary to {path:?}");
    }

    Ok(())
}
