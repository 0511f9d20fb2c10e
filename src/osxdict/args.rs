use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};

use osxdict::catalog::DictionaryCatalog;
use osxdict::plan::{OutputFormat, QueryPlan};

const USAGE: &str = "osxdict [-a | -A | -d name [-d name]...] [-j] <word> ...
       osxdict -l [-A]";

#[derive(Parser, Debug)]
#[command(name = "osxdict")]
#[command(about = "Look up words in the dictionaries installed on this Mac", long_about = None)]
#[command(override_usage = USAGE)]
pub struct Cli {
    /// List the selected dictionaries instead of looking up words
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Emit a JSON array instead of plain text
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Select the dictionaries currently active in Dictionary.app
    #[arg(short = 'a', long = "active", action = ArgAction::Count)]
    pub active: u8,

    /// Select every installed dictionary
    #[arg(short = 'A', long = "all", action = ArgAction::Count)]
    pub all: u8,

    /// Select a dictionary by short name (repeatable)
    #[arg(short = 'd', long = "dictionary", value_name = "NAME")]
    pub dictionaries: Vec<String>,

    /// Words to look up
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,
}

/// Parses `argv` into a query plan.
///
/// Help requests and malformed options both come back as a plan with
/// `show_help` set; the caller prints usage and exits 0 either way. The
/// environment fallback for an empty dictionary list happens upstream,
/// not here.
pub fn parse<I, T>(argv: I, catalog: &DictionaryCatalog) -> QueryPlan
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match Cli::command().try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(_) => {
            return QueryPlan {
                show_help: true,
                ..QueryPlan::default()
            }
        }
    };
    // The grammar and the dispatch are the same derive declaration; a
    // failure here is a bug, not user input.
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    let dictionaries = if cli.active > 0 || cli.all > 0 || !cli.dictionaries.is_empty() {
        selected_dictionaries(&matches, catalog)
    } else {
        Vec::new()
    };

    QueryPlan {
        show_help: false,
        show_list: cli.list,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        },
        dictionaries,
        words: cli.words,
    }
}

pub fn print_usage() -> std::io::Result<()> {
    Cli::command().print_help()
}

enum Selection {
    Active,
    All,
    Named(String),
}

// -a, -A and -d all append to the same list; merge them back into
// command-line order via their argv indices.
fn selected_dictionaries(matches: &ArgMatches, catalog: &DictionaryCatalog) -> Vec<String> {
    let mut picks: Vec<(usize, Selection)> = Vec::new();
    // Count-action flags always carry a default value of 0, and clap
    // assigns indices to defaults too; only consult flags the user typed.
    if matches.value_source("active") == Some(ValueSource::CommandLine) {
        if let Some(indices) = matches.indices_of("active") {
            picks.extend(indices.map(|idx| (idx, Selection::Active)));
        }
    }
    if matches.value_source("all") == Some(ValueSource::CommandLine) {
        if let Some(indices) = matches.indices_of("all") {
            picks.extend(indices.map(|idx| (idx, Selection::All)));
        }
    }
    if let (Some(indices), Some(values)) = (
        matches.indices_of("dictionaries"),
        matches.get_many::<String>("dictionaries"),
    ) {
        picks.extend(
            indices
                .zip(values.cloned())
                .map(|(idx, name)| (idx, Selection::Named(name))),
        );
    }
    picks.sort_by_key(|&(idx, _)| idx);

    let mut names = Vec::new();
    for (_, pick) in picks {
        match pick {
            Selection::Active => names.extend(catalog.active().iter().cloned()),
            Selection::All => names.extend(catalog.available_names()),
            Selection::Named(name) => names.push(name),
        }
    }
    names
}
