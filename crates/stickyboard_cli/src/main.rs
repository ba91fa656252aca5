//! StickyBoard command-line front end.
//!
//! # Responsibility
//! - Map subcommands onto `BoardService` use-cases over a SQLite store.
//! - Keep output line-oriented so it can be scripted.

mod cli;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use cli::{Args, Command};
use log::info;
use std::io::{Read, Write};
use stickyboard_core::{
    init_logging, open_store, parse_viewport, BoardConfig, BoardService, Clipboard,
    ClipboardError, KeyValueStore, LogLevel, NoteSize, PaletteColor, TextScale,
};

/// Clipboard over the process streams: paste reads stdin, copy writes
/// stdout.
struct StdioClipboard;

impl Clipboard for StdioClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| ClipboardError::Io(err.to_string()))?;
        if text.trim().is_empty() {
            return Err(ClipboardError::Empty);
        }
        Ok(text)
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}").map_err(|err| ClipboardError::Io(err.to_string()))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = match args.log_level.as_deref() {
            Some(level) => LogLevel::parse(level).map_err(|err| anyhow!("{err}"))?,
            None => LogLevel::default_for_build(),
        };
        init_logging(level, log_dir)
            .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;
    }

    let viewport = parse_viewport(&args.viewport)
        .ok_or_else(|| anyhow!("invalid viewport `{}`; expected WIDTHxHEIGHT", args.viewport))?;
    let store = open_store(&args.db)
        .with_context(|| format!("failed to open store `{}`", args.db.display()))?;
    let mut service = BoardService::open(store, BoardConfig::with_viewport(viewport))?;
    info!("event=cli_command module=cli status=start");

    run(&mut service, args.command)
}

fn run<S: KeyValueStore>(service: &mut BoardService<S>, command: Command) -> Result<()> {
    match command {
        Command::Boards => {
            for board in service.boards() {
                let marker = if board.id == service.active_board_id() {
                    '*'
                } else {
                    ' '
                };
                println!("{marker} {}\t{}\t{} tasks", board.id, board.name, board.tasks.len());
            }
        }
        Command::AddBoard => println!("{}", service.add_board()?),
        Command::RenameBoard { board_id, name } => {
            report(service.rename_board(&board_id, &name)?, "board", &board_id)?
        }
        Command::DeleteBoard { board_id } => {
            if !service.delete_board(&board_id)? {
                bail!("board `{board_id}` not deleted (unknown id or last board)");
            }
        }
        Command::Switch { board_id } => {
            if !service.state().contains(&board_id) {
                bail!("board `{board_id}` not found");
            }
            service.switch_board(&board_id)?;
        }
        Command::Tasks => {
            for task in service.sorted_tasks() {
                let size = NoteSize::nearest(task.width);
                println!(
                    "{}\t[{}]\t{}\t({:.0},{:.0})\t{}\t{}\t{:?}",
                    task.id,
                    if task.completed { 'x' } else { ' ' },
                    size.label,
                    task.left(),
                    task.top(),
                    task.background(),
                    task.text,
                    TextScale::for_width(task.width),
                );
            }
        }
        Command::Add { text, size } => {
            let size = NoteSize::from_label(&size)
                .ok_or_else(|| anyhow!("unknown size `{size}`; expected XS|S|M|L|XL"))?;
            println!("{}", service.add_task(&text, size)?);
        }
        Command::Edit { task_id, text } => {
            report(service.edit_task_text(&task_id, &text)?, "task", &task_id)?
        }
        Command::Toggle { task_id } => {
            report(service.toggle_completed(&task_id)?, "task", &task_id)?
        }
        Command::Color { task_id, color } => {
            let value = PaletteColor::from_name(&color).map_or(color.as_str(), |entry| entry.value);
            report(service.set_color(&task_id, value)?, "task", &task_id)?
        }
        Command::Move { task_id, dx, dy } => {
            report(service.move_task(&task_id, dx, dy)?, "task", &task_id)?
        }
        Command::Resize { task_id, width } => {
            report(service.resize_task(&task_id, width)?, "task", &task_id)?
        }
        Command::Delete { task_id } => report(service.delete_task(&task_id)?, "task", &task_id)?,
        Command::Copy { task_id } => {
            report(service.copy_task(&mut StdioClipboard, &task_id)?, "task", &task_id)?
        }
        Command::Paste => match service.paste_task(&mut StdioClipboard)? {
            Some(task_id) => println!("{task_id}"),
            None => bail!("clipboard does not hold a task"),
        },
    }
    Ok(())
}

fn report(found: bool, kind: &str, id: &str) -> Result<()> {
    if !found {
        bail!("{kind} `{id}` not found");
    }
    Ok(())
}
