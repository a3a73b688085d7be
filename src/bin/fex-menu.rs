//! Menu front end: single-character choices, then prompted arguments.
//!
//! Thin adapter only — every choice maps onto the same library calls the
//! shell front end (`fex`) uses.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use fex::console::{self, ColorMode, Console};
use fex::{ops, FexError, Session};

#[derive(Parser, Debug)]
#[command(name = "fex-menu")]
#[command(about = "Menu-driven file explorer")]
#[command(version)]
struct Args {
    /// Directory to start in
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();
    let session = match Session::at(&args.path) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("fex-menu: {err}: {}", args.path.display());
            process::exit(1);
        }
    };
    let mut console = Console::new(args.color);
    if let Err(err) = run(session, &mut console) {
        eprintln!("fex-menu: {err}");
        process::exit(1);
    }
}

fn run(mut session: Session, console: &mut Console) -> io::Result<()> {
    print_menu(console)?;
    loop {
        let prompt = format!("[{}] choice> ", session.cwd().display());
        let Some(choice) = console::read_line(&prompt)? else {
            break;
        };
        match choice.as_str() {
            "q" => break,
            "h" | "" => print_menu(console)?,
            other => {
                if !dispatch(other, &mut session, console)? {
                    break;
                }
            }
        }
    }
    console.line("Goodbye")?;
    Ok(())
}

/// Handle one menu choice. Returns `false` when stdin ran out mid-prompt.
fn dispatch(choice: &str, session: &mut Session, console: &mut Console) -> io::Result<bool> {
    let outcome: Result<(), FexError> = match choice {
        "l" => match ops::list_dir(session.cwd()) {
            Ok(entries) => {
                for entry in &entries {
                    console.entry(entry)?;
                }
                Ok(())
            }
            Err(err) => Err(err),
        },
        "c" => {
            let Some(path) = console::read_line("Directory: ")? else {
                return Ok(false);
            };
            session.change_dir(&path)
        }
        "v" => {
            let Some(file) = console::read_line("File: ")? else {
                return Ok(false);
            };
            match ops::read_file(&session.resolve(&file)) {
                Ok(bytes) => {
                    io::stdout().write_all(&bytes)?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        "n" => {
            let Some(dir) = console::read_line("New directory: ")? else {
                return Ok(false);
            };
            match ops::make_dir(&session.resolve(&dir)) {
                Ok(()) => {
                    console.line("Directory created")?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        "t" => {
            let Some(file) = console::read_line("File: ")? else {
                return Ok(false);
            };
            match ops::touch(&session.resolve(&file)) {
                Ok(()) => {
                    console.line("Touched")?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        "y" => {
            let Some(src) = console::read_line("Copy from: ")? else {
                return Ok(false);
            };
            let Some(dst) = console::read_line("Copy to: ")? else {
                return Ok(false);
            };
            match ops::copy_path(&session.resolve(&src), &session.resolve(&dst)) {
                Ok(()) => {
                    console.line("Copied")?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        "m" => {
            let Some(src) = console::read_line("Move from: ")? else {
                return Ok(false);
            };
            let Some(dst) = console::read_line("Move to: ")? else {
                return Ok(false);
            };
            match ops::move_path(&session.resolve(&src), &session.resolve(&dst)) {
                Ok(()) => {
                    console.line("Moved")?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        "d" => {
            let Some(path) = console::read_line("Remove: ")? else {
                return Ok(false);
            };
            match ops::remove_path(&session.resolve(&path)) {
                Ok(()) => {
                    console.line("Removed")?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        "D" => {
            let Some(path) = console::read_line("Remove tree (irreversible): ")? else {
                return Ok(false);
            };
            match fex::remove_tree(&session.resolve(&path)) {
                Ok(result) => {
                    console.delete_report(&result)?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        "s" => {
            let Some(pattern) = console::read_line("Name contains: ")? else {
                return Ok(false);
            };
            match fex::search()
                .root(session.cwd().to_path_buf())
                .matching(pattern)
                .run()
            {
                Ok(result) => {
                    console.search_report(&result)?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        "i" => {
            let Some(path) = console::read_line("Path: ")? else {
                return Ok(false);
            };
            match ops::stat_path(&session.resolve(&path)) {
                Ok(info) => {
                    console.info(&info)?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        "x" => {
            let Some(mode) = console::read_line("Octal mode (e.g. 755): ")? else {
                return Ok(false);
            };
            let Some(path) = console::read_line("Path: ")? else {
                return Ok(false);
            };
            match ops::set_mode(&session.resolve(&path), &mode) {
                Ok(()) => {
                    console.line("Permissions updated")?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        _ => {
            console.line("Unknown choice. Press 'h' for the menu.")?;
            Ok(())
        }
    };

    if let Err(err) = outcome {
        console.error(&err)?;
    }
    Ok(true)
}

fn print_menu(console: &mut Console) -> io::Result<()> {
    console.line("fex-menu:")?;
    console.line("  l  list current directory")?;
    console.line("  c  change directory")?;
    console.line("  v  view a file")?;
    console.line("  n  new directory")?;
    console.line("  t  create empty file")?;
    console.line("  y  copy")?;
    console.line("  m  move/rename")?;
    console.line("  d  remove file or empty directory")?;
    console.line("  D  remove a directory tree, children first")?;
    console.line("  s  search filenames")?;
    console.line("  i  show file info")?;
    console.line("  x  change permissions")?;
    console.line("  h  show this menu")?;
    console.line("  q  quit")
}
