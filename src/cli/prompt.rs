//! Console prompts.

use crate::core::resolver::{Menu, Selection, SelectionPrompt, MORE_OPTION};
use crate::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Read one trimmed line after printing `prompt`. `None` on end of input.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Ask for a directory path.
pub fn read_directory(prompt: &str) -> Result<PathBuf> {
    let line = read_line(prompt)?.unwrap_or_default();
    Ok(PathBuf::from(line))
}

/// Interactive [`SelectionPrompt`] on stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        Self
    }

    fn print_menu(menu: &Menu) {
        println!();
        println!("{}", "Search Results:".bold());
        for entry in &menu.entries {
            println!(
                "{}. {} ({}) - {}",
                entry.number,
                entry.title.bold(),
                entry.date.as_deref().unwrap_or("Unknown date"),
                entry.overview.as_deref().unwrap_or("No overview available").dimmed()
            );
        }
        if menu.more_available {
            println!("{}. Show more results", MORE_OPTION);
        }
    }
}

impl SelectionPrompt for ConsolePrompt {
    fn choose(&mut self, menu: &Menu) -> Result<Selection> {
        Self::print_menu(menu);

        let last = if menu.more_available {
            MORE_OPTION
        } else {
            menu.entries.len()
        };
        let text = format!(
            "Select a {} (1-{}, Enter to skip): ",
            menu.kind, last
        );

        match read_line(&text)? {
            Some(line) => Ok(menu.parse_input(&line)),
            None => Ok(Selection::Skip),
        }
    }

    fn rejected(&mut self, _menu: &Menu, selection: Selection) {
        match selection {
            Selection::Invalid => println!("{}", "Invalid input. Please enter a number.".yellow()),
            _ => println!("{}", "Invalid selection. Please try again.".yellow()),
        }
    }
}
