//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Ad-hoc timing of index build and a handful of queries on *your* machine.
//! - Loads the dictionary once, then runs each query several times and reports the median.
//! - Optionally times the linear word-list scan for the same queries, for comparison.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:       `cargo run --bin bench_local --release -- -d words.txt`
//! - Multiple repeats:      `cargo run --bin bench_local --release -- -d words.txt -r 5`
//! - Compare linear scan:   `cargo run --bin bench_local --release -- -d words.txt --linear`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparable numbers.
//! - One warm-up run per query is done (not included in timing).

use std::hint::black_box;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use anagram_dict::{search_with_wildcards, AnagramError, AnagramIndex, WordStore};

/// Local benchmark runner: load the dictionary once, time several queries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    #[arg(short, long)]
    dictionary: String,

    /// Number of repeats per query (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Also time the linear scan over the word list
    #[arg(long)]
    linear: bool,
}

/// Queries covering every supported wildcard count.
const QUERIES: &[&str] = &["listen", "stare", "a*t", "l*st*n", "**ing", "s***e", "****"];

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

/// Run `f` once to warm up, then `repeats` timed times; returns (median seconds, last result size).
fn time_query<F: FnMut() -> usize>(repeats: usize, mut f: F) -> (f64, usize) {
    let _warmup = black_box(f());
    let mut times = Vec::with_capacity(repeats);
    let mut last = 0;
    for _ in 0..repeats {
        let t = Instant::now();
        last = black_box(f());
        times.push(t.elapsed().as_secs_f64());
    }
    (median(times), last)
}

fn main() -> ExitCode {
    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.display_detailed());
            ExitCode::FAILURE
        }
    }
}

/// Load once, then time every query in [`QUERIES`].
fn run(cli: &Cli) -> Result<(), AnagramError> {
    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let store = WordStore::load_nonempty(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let t_index = Instant::now();
    let index = AnagramIndex::from_store(&store);
    let index_secs = t_index.elapsed().as_secs_f64();
    eprintln!(
        "Loaded {} words in {load_secs:.3}s; indexed into {} slots in {index_secs:.3}s",
        store.len(),
        index.slot_count()
    );

    eprintln!("\n{:<10} | {:>12} | {:>9} | {:>12}", "query", "indexed (s)", "# matches", "linear (s)");
    eprintln!("{:-<10}-+-{:-<12}-+-{:-<9}-+-{:-<12}", "", "", "", "");

    for &query in QUERIES {
        let (indexed, found) = time_query(cli.num_repeats, || {
            search_with_wildcards(&index, black_box(query)).map_or(0, |m| m.len())
        });
        let linear = if cli.linear {
            let (secs, _) = time_query(cli.num_repeats, || store.search_anagrams(black_box(query)).len());
            format!("{secs:.6}")
        } else {
            "—".to_string()
        };
        eprintln!("{query:<10} | {indexed:>12.6} | {found:>9} | {linear:>12}");
    }

    Ok(())
}
