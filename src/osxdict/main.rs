use std::io;
use std::process;

use colored::Colorize;

use osxdict::catalog::DictionaryCatalog;
use osxdict::commands::{list, lookup};
use osxdict::envvar;
use osxdict::error::Result;
use osxdict::render;
use osxdict::service;

mod args;

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn run() -> Result<i32> {
    let catalog = DictionaryCatalog::new(service::host());
    let mut plan = args::parse(std::env::args_os(), &catalog);

    // No -a/-A/-d on the command line: fall back to OSX_DICTIONARY.
    if plan.dictionaries.is_empty() && !plan.show_help {
        let raw = std::env::var_os(envvar::ENV_VAR).map(|v| v.to_string_lossy().into_owned());
        plan.dictionaries = envvar::resolve(raw.as_deref(), &catalog);
    }

    if plan.show_help
        || plan.dictionaries.is_empty()
        || (plan.words.is_empty() && !plan.show_list)
    {
        args::print_usage()?;
        return Ok(0);
    }

    for name in plan.normalize(&catalog) {
        eprintln!("{}", format!("warning: no such dictionary: {}", name).yellow());
    }
    if plan.dictionaries.is_empty() {
        return Ok(1);
    }

    let stdout = io::stdout();
    let mut renderer = render::for_format(plan.format, stdout.lock());
    if plan.show_list {
        list::run(&catalog, &plan, renderer.as_mut())?;
    } else {
        lookup::run(&catalog, &plan, renderer.as_mut())?;
    }
    Ok(0)
}
