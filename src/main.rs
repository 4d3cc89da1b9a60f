use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use anagram_dict::errors::AnagramError;
use anagram_dict::{search_with_wildcards, validate_query, AnagramIndex, WordStore};

/// Anagram finder: list every dictionary word that rearranges the query letters.
///
/// Use '*' (up to four times) for a letter you don't know.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// Queries to solve (e.g., "listen" or "a**le"); read from stdin when omitted
    queries: Vec<String>,

    /// Path to the dictionary file (one word per line)
    #[arg(short, long)]
    dictionary: String,

    /// Scan the whole word list instead of using the hashed index
    #[arg(long)]
    linear: bool,

    /// Print matches in lookup order instead of sorting them
    #[arg(long)]
    unsorted: bool,
}

/// Entry point of the anagram CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("ANAGRAM_DEBUG").is_ok();
    anagram_dict::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(anagram_err) = e.downcast_ref::<AnagramError>() {
            eprintln!("Error: {}", anagram_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the dictionary and build the index.
/// 3. Answer each query (from the command line, or stdin line by line).
/// 4. Print matches on stdout and timings on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let store = WordStore::load_nonempty(&cli.dictionary)?;
    let index = AnagramIndex::from_store(&store);
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!(
        "Loaded {} words into {} slots in {:.3}s.",
        index.len(),
        index.slot_count(),
        load_secs
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.queries.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let query = line.trim();
            if query.is_empty() {
                continue;
            }
            // A bad query is reported but does not end the session; a failed write does.
            match solve(&cli, &store, &index, query) {
                Ok(matches) => print_matches(&mut out, &matches)?,
                Err(e) => eprintln!("Error: {}", e.display_detailed()),
            }
        }
    } else {
        for query in &cli.queries {
            let matches = solve(&cli, &store, &index, query)?;
            print_matches(&mut out, &matches)?;
        }
    }

    Ok(())
}

/// Solve one query, returning its matches in print order.
fn solve<'a>(
    cli: &Cli,
    store: &'a WordStore,
    index: &AnagramIndex<'a>,
    query: &str,
) -> Result<Vec<&'a str>, AnagramError> {
    validate_query(query)?;

    let t_solve = Instant::now();
    let mut matches = if cli.linear {
        store.search_anagrams(query)
    } else {
        search_with_wildcards(index, query)?
    };
    let solve_secs = t_solve.elapsed().as_secs_f64();

    if !cli.unsorted {
        matches.sort_unstable();
    }

    eprintln!("'{query}': {} matches in {solve_secs:.3}s", matches.len());
    Ok(matches)
}

/// Write one match per line.
///
/// A closed reader (e.g. piped into `head`) is not an error; any other write
/// failure is, so results are never lost silently.
fn print_matches(out: &mut impl Write, matches: &[&str]) -> io::Result<()> {
    let written = matches
        .iter()
        .try_for_each(|word| writeln!(out, "{word}"))
        .and_then(|()| out.flush());
    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
