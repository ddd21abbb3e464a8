use crate::frontend::strip;
use ansi_term::Color::Green;
use std::path::PathBuf;
use structopt::StructOpt;

#[cfg(windows)]
pub fn terminal_init() {
    ansi_term::enable_ansi_support().expect("Could enable terminal ANSI support");
}

#[cfg(not(windows))]
pub fn terminal_init() {}

#[derive(StructOpt, Debug)]
#[structopt(name = "decomment")]
pub struct CommandRoot {
    // Optional so that the missing-argument case prints our usage line on
    // stdout instead of the parser's report on stderr.
    #[structopt(name = "file", parse(from_os_str))]
    file: Option<PathBuf>,
}

pub fn root(cmd: CommandRoot) -> ! {
    let file = match cmd.file {
        Some(file) => file,
        None => usage(),
    };

    match strip::strip_path(&file) {
        Ok(_) => {
            println!(
                "{} removed comments from {}",
                Green.paint("Successfully"),
                file.display()
            );
            std::process::exit(0);
        }
        Err(err) => {
            // The exact `Error: <description>` form is part of the external
            // contract, so this line stays uncolored.
            println!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn usage() -> ! {
    println!("Usage: decomment <file>");
    std::process::exit(1);
}
