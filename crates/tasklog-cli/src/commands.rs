use crate::args::Cli;
use crate::record::TaskRecord;
use crate::types::ColorMode;
use crate::views::recap::PlayRecap;
use crate::views::task::{TaskDisplayOpts, format_task_lines};
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fs::File;
use std::io::{BufRead, BufReader, stdin};

pub fn run(cli: Cli) -> Result<()> {
    let enable_color = match cli.color {
        ColorMode::Auto => std::io::stdout().is_terminal(),
        ColorMode::Always => true,
        ColorMode::Never => false,
    };

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(stdin())),
    };

    let opts = TaskDisplayOpts {
        enable_color,
        verbose: cli.verbose,
    };
    let mut recap = PlayRecap::default();
    let mut current_task: Option<String> = None;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: TaskRecord = serde_json::from_str(&line)
            .with_context(|| format!("malformed task record on line {}", number + 1))?;

        // A timestamped header whenever the stream moves to a new task.
        if record.task.is_some() && record.task != current_task {
            let header = format!(
                "[{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.task.as_deref().unwrap_or_default()
            );
            if enable_color {
                println!("{}", header.bright_black());
            } else {
                println!("{}", header);
            }
            current_task = record.task.clone();
        }

        for formatted in format_task_lines(&record, &opts) {
            println!("{}", formatted);
        }
        recap.add(&record);
    }

    if !cli.no_recap && !recap.is_empty() {
        println!();
        for formatted in recap.format_lines(enable_color) {
            println!("{}", formatted);
        }
    }

    Ok(())
}
