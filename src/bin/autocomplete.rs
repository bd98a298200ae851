use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use prefix_avl::{dict, Config, PrefixTree};

#[derive(Parser)]
#[command(name = "autocomplete")]
#[command(about = "Frequency-ranked prefix completion over a word list")]
#[command(version)]
struct Cli {
    /// Word list with one `word<TAB>frequency` entry per line.
    #[arg(long)]
    dict: PathBuf,

    /// Maximum number of completions per prefix.
    #[arg(long, default_value_t = Config::DEFAULT_MAX_COMPLETIONS)]
    limit: usize,

    /// Print `word:frequency` instead of just the word.
    #[arg(long)]
    show_frequency: bool,

    /// Prefixes to complete. Read from stdin, one per line, if omitted.
    prefixes: Vec<String>,
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(buf, "{}{}", level, record.args())
        })
        .init();
}

fn answer(
    tree: &PrefixTree,
    prefix: &str,
    show_frequency: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    write!(out, "{prefix}")?;
    for (word, frequency) in tree.completions_with_frequency(prefix) {
        if show_frequency {
            write!(out, "\t{word}:{frequency}")?;
        } else {
            write!(out, "\t{word}")?;
        }
    }
    writeln!(out)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = PrefixTree::with_config(Config {
        max_completions: cli.limit,
    });
    dict::load_file(&cli.dict, &mut tree)?;
    log::debug!("tree height {}", tree.height());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.prefixes.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            answer(&tree, line.trim_end_matches('\r'), cli.show_frequency, &mut out)?;
            out.flush()?;
        }
    } else {
        for prefix in &cli.prefixes {
            answer(&tree, prefix, cli.show_frequency, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
