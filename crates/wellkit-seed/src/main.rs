use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use wellkit_seed::{BASE_SURVEY, QUESTIONS, seed_sql};

fn main() {
    let mut output: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-o" | "--out" => match args.next() {
                Some(value) => output = Some(PathBuf::from(value)),
                None => {
                    eprintln!("-o expects a path");
                    print_usage();
                    process::exit(2);
                }
            },
            _ => {
                eprintln!("unexpected argument: {}", arg);
                print_usage();
                process::exit(2);
            }
        }
    }

    let sql = match seed_sql(&BASE_SURVEY, &QUESTIONS) {
        Ok(sql) => sql,
        Err(err) => {
            eprintln!("error: failed to serialize scoring config: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = write_output(output.as_deref(), &sql) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn write_output(path: Option<&std::path::Path>, sql: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, sql)?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{}", sql),
    }
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: wellkit-seed [-o OUT]");
}
