//! Shell front end: word-tokenized commands at a `cwd $` prompt.
//!
//! Thin adapter only — every command maps onto one library call. The menu
//! front end (`fex-menu`) drives the exact same calls.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use fex::console::{self, ColorMode, Console};
use fex::{ops, FexError, Session};

#[derive(Parser, Debug)]
#[command(name = "fex")]
#[command(about = "Interactive file explorer shell")]
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
            eprintln!("fex: {err}: {}", args.path.display());
            process::exit(1);
        }
    };
    let mut console = Console::new(args.color);
    if let Err(err) = run(session, &mut console) {
        eprintln!("fex: {err}");
        process::exit(1);
    }
}

fn run(mut session: Session, console: &mut Console) -> io::Result<()> {
    console.line("fex - type 'help' for commands")?;
    loop {
        let prompt = format!("{} $ ", session.cwd().display());
        let Some(line) = console::read_line(&prompt)? else {
            break;
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&cmd) = tokens.first() else {
            continue;
        };
        if matches!(cmd, "exit" | "quit") {
            break;
        }
        dispatch(cmd, &tokens[1..], &mut session, console)?;
    }
    console.line("Goodbye")?;
    Ok(())
}

fn dispatch(
    cmd: &str,
    args: &[&str],
    session: &mut Session,
    console: &mut Console,
) -> io::Result<()> {
    let outcome: Result<(), FexError> = match (cmd, args) {
        ("help", _) => {
            print_help(console)?;
            Ok(())
        }
        ("ls", rest) => {
            let target = match rest.first() {
                Some(arg) => session.resolve(arg),
                None => session.cwd().to_path_buf(),
            };
            match ops::list_dir(&target) {
                Ok(entries) => {
                    for entry in &entries {
                        console.entry(entry)?;
                    }
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        ("cd", [path]) => session.change_dir(path),
        ("cd", _) => {
            usage(console, "cd <path>")?;
            Ok(())
        }
        ("pwd", _) => {
            console.line(&session.cwd().display().to_string())?;
            Ok(())
        }
        ("cat" | "view", [file]) => match ops::read_file(&session.resolve(file)) {
            Ok(bytes) => {
                io::stdout().write_all(&bytes)?;
                Ok(())
            }
            Err(err) => Err(err),
        },
        ("cat" | "view", _) => {
            usage(console, "cat <file>")?;
            Ok(())
        }
        ("rm", ["-r", path]) => match fex::remove_tree(&session.resolve(path)) {
            Ok(result) => {
                console.delete_report(&result)?;
                Ok(())
            }
            Err(err) => Err(err),
        },
        ("rm", [path]) => match ops::remove_path(&session.resolve(path)) {
            Ok(()) => {
                console.line("Removed")?;
                Ok(())
            }
            Err(err) => Err(err),
        },
        ("rm", _) => {
            usage(console, "rm [-r] <path>")?;
            Ok(())
        }
        ("mkdir", [dir]) => match ops::make_dir(&session.resolve(dir)) {
            Ok(()) => {
                console.line("Directory created")?;
                Ok(())
            }
            Err(err) => Err(err),
        },
        ("mkdir", _) => {
            usage(console, "mkdir <dir>")?;
            Ok(())
        }
        ("touch", [file]) => match ops::touch(&session.resolve(file)) {
            Ok(()) => {
                console.line("Touched")?;
                Ok(())
            }
            Err(err) => Err(err),
        },
        ("touch", _) => {
            usage(console, "touch <file>")?;
            Ok(())
        }
        ("cp", [src, dst]) => {
            match ops::copy_path(&session.resolve(src), &session.resolve(dst)) {
                Ok(()) => {
                    console.line("Copied")?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        ("cp", _) => {
            usage(console, "cp <src> <dst>")?;
            Ok(())
        }
        ("mv", [src, dst]) => {
            match ops::move_path(&session.resolve(src), &session.resolve(dst)) {
                Ok(()) => {
                    console.line("Moved")?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        ("mv", _) => {
            usage(console, "mv <src> <dst>")?;
            Ok(())
        }
        ("search", rest) => {
            let (fold, pattern) = match rest {
                ["-i", pattern] => (true, *pattern),
                [pattern] => (false, *pattern),
                _ => {
                    usage(console, "search [-i] <pattern>")?;
                    return Ok(());
                }
            };
            match fex::search()
                .root(session.cwd().to_path_buf())
                .matching(pattern)
                .case_insensitive(fold)
                .run()
            {
                Ok(result) => {
                    console.search_report(&result)?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        ("info", [path]) => match ops::stat_path(&session.resolve(path)) {
            Ok(info) => {
                console.info(&info)?;
                Ok(())
            }
            Err(err) => Err(err),
        },
        ("info", _) => {
            usage(console, "info <path>")?;
            Ok(())
        }
        ("chmod", [mode, path]) => match ops::set_mode(&session.resolve(path), mode) {
            Ok(()) => {
                console.line("Permissions updated")?;
                Ok(())
            }
            Err(err) => Err(err),
        },
        ("chmod", _) => {
            usage(console, "chmod <octal> <path>")?;
            Ok(())
        }
        _ => {
            console.line("Unknown command. Type 'help'.")?;
            Ok(())
        }
    };

    if let Err(err) = outcome {
        console.error(&err)?;
    }
    Ok(())
}

fn usage(console: &mut Console, text: &str) -> io::Result<()> {
    console.line(&format!("Usage: {text}"))
}

fn print_help(console: &mut Console) -> io::Result<()> {
    console.line("Commands:")?;
    console.line("  ls [path]                List files in directory")?;
    console.line("  cd <path>                Change directory")?;
    console.line("  pwd                      Print current directory")?;
    console.line("  cat <file>               Print file contents (view is an alias)")?;
    console.line("  rm <file|dir>            Remove file or empty directory")?;
    console.line("  rm -r <dir>              Remove a directory tree, children first")?;
    console.line("  mkdir <dir>              Create directory")?;
    console.line("  touch <file>             Create empty file or update timestamp")?;
    console.line("  cp <src> <dst>           Copy file (or directory recursively)")?;
    console.line("  mv <src> <dst>           Move/rename")?;
    console.line("  search [-i] <pattern>    Search filenames under current directory")?;
    console.line("  info <path>              Show file info (size, perms, type)")?;
    console.line("  chmod <mode> <path>      Change permission (octal, e.g. 755)")?;
    console.line("  help                     Show this help")?;
    console.line("  exit                     Exit program")
}
