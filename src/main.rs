// Copyright 2025-present Folio contributors
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;
use folio::{
    dataset, filter_books, find_by_id, page, remaining_count, Catalog, DatasetError, Pager,
    QueryFilter, Theme, View,
};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), DatasetError> {
    match cli.command {
        Commands::List {
            data,
            author,
            genre,
            title,
            page,
            all,
        } => {
            let catalog = dataset::load(&data)?;
            let filter = build_filter(title, author, genre);
            run_list(&catalog, &filter, page, all);
        }
        Commands::Show { data, id } => {
            let catalog = dataset::load(&data)?;
            run_show(&catalog, &id);
        }
        Commands::Authors { data } => {
            let catalog = dataset::load(&data)?;
            print_registry(&catalog.authors);
        }
        Commands::Genres { data } => {
            let catalog = dataset::load(&data)?;
            print_registry(&catalog.genres);
        }
        Commands::Browse { data } => {
            let catalog = dataset::load(&data)?;
            run_browse(&catalog, &data)?;
        }
    }
    Ok(())
}

/// Map CLI filter options onto a [`QueryFilter`]. The literal "any" is
/// accepted wherever the original dropdowns offered it.
fn build_filter(title: Option<String>, author: Option<String>, genre: Option<String>) -> QueryFilter {
    let not_any = |v: Option<String>| v.filter(|s| s != "any");
    QueryFilter {
        title: title.unwrap_or_default(),
        author_id: not_any(author),
        genre_id: not_any(genre),
    }
}

fn run_list(catalog: &Catalog, filter: &QueryFilter, page_number: usize, all: bool) {
    let view = View::auto(Theme::detect());
    let matches = filter_books(catalog, filter);
    if matches.is_empty() {
        println!("{}", view.no_results());
        return;
    }

    if all {
        for book in &matches {
            println!("{}", view.preview_line(book, catalog));
        }
        return;
    }

    let offset = page_number.saturating_mul(catalog.page_size);
    let window = page(&matches, offset, catalog.page_size);
    if window.is_empty() {
        println!(
            "Page {} is past the end ({} matches, {} per page).",
            page_number,
            matches.len(),
            catalog.page_size
        );
        return;
    }
    for book in window {
        println!("{}", view.preview_line(book, catalog));
    }
    println!("{}", view.show_more_label(remaining_count(&matches, offset, catalog.page_size)));
}

fn run_show(catalog: &Catalog, id: &str) {
    let view = View::auto(Theme::detect());
    match find_by_id(catalog, id) {
        Some(book) => println!("{}", view.detail(book, catalog)),
        None => println!("No book with id '{}'.", id),
    }
}

fn print_registry(registry: &std::collections::HashMap<String, String>) {
    let mut entries: Vec<(&String, &String)> = registry.iter().collect();
    entries.sort();
    for (id, name) in entries {
        println!("{}  {}", id, name);
    }
}

/// Interactive session: one loop iteration per UI event, mirroring the
/// original page's handlers. Filter edits reset the pager, `more`
/// advances it, `open` pulls up a detail view.
fn run_browse(catalog: &Catalog, data: &Path) -> Result<(), DatasetError> {
    let mut view = View::auto(Theme::detect());
    let mut filter = QueryFilter::any();
    let mut pager = Pager::new(catalog.page_size);

    println!(
        "Browsing {} ({} books, {} per page). Type 'help' for commands.",
        data.display(),
        catalog.len(),
        catalog.page_size
    );
    render_window(catalog, &filter, &pager, &view);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_browse_help(),
            "title" => {
                filter.title = arg.to_string();
                pager.reset();
                render_window(catalog, &filter, &pager, &view);
            }
            "author" => {
                filter.author_id = some_unless_any(arg);
                pager.reset();
                render_window(catalog, &filter, &pager, &view);
            }
            "genre" => {
                filter.genre_id = some_unless_any(arg);
                pager.reset();
                render_window(catalog, &filter, &pager, &view);
            }
            "clear" => {
                filter = QueryFilter::any();
                pager.reset();
                render_window(catalog, &filter, &pager, &view);
            }
            "more" => {
                let matches = filter_books(catalog, &filter);
                if pager.is_exhausted(matches.len()) {
                    println!("{}", view.show_more_label(0));
                } else {
                    pager.advance();
                    render_window(catalog, &filter, &pager, &view);
                }
            }
            "open" => match find_by_id(catalog, arg) {
                Some(book) => println!("{}", view.detail(book, catalog)),
                None => println!("No book with id '{}'.", arg),
            },
            "theme" => match Theme::parse(arg) {
                Some(theme) => {
                    view.theme = theme;
                    println!("Theme set to {}.", arg);
                }
                None => println!("Unknown theme '{}' (expected 'day' or 'night').", arg),
            },
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }
    Ok(())
}

/// Print the current page window plus the show-more label.
fn render_window(catalog: &Catalog, filter: &QueryFilter, pager: &Pager, view: &View) {
    let matches = filter_books(catalog, filter);
    if matches.is_empty() {
        println!("{}", view.no_results());
        return;
    }
    for book in page(&matches, pager.offset(), pager.page_size()) {
        println!("{}", view.preview_line(book, catalog));
    }
    println!(
        "{}",
        view.show_more_label(remaining_count(&matches, pager.offset(), pager.page_size()))
    );
}

fn some_unless_any(arg: &str) -> Option<String> {
    if arg.is_empty() || arg == "any" {
        None
    } else {
        Some(arg.to_string())
    }
}

fn print_browse_help() {
    println!("Commands:");
    println!("  title <substring>   filter by title substring (empty clears)");
    println!("  author <id|any>     filter by author id");
    println!("  genre <id|any>      filter by genre id");
    println!("  clear               drop all filters");
    println!("  more                show the next page of matches");
    println!("  open <id>           show the detail view for a book");
    println!("  theme <day|night>   switch color scheme");
    println!("  quit                leave the session");
}
