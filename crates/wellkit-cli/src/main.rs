use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use wellkit_markdown::{convert, convert_sanitized};
use wellkit_renderer::{PageMeta, Renderer};

const DEFAULT_ACCENT: &str = "#6366f1";

struct Options {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    meta: PageMeta,
    accent: String,
    sanitized: bool,
    body_only: bool,
}

fn main() {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut meta = PageMeta::new("Guide");
    let mut accent = DEFAULT_ACCENT.to_string();
    let mut sanitized = false;
    let mut body_only = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--sanitized" => sanitized = true,
            "--body-only" => body_only = true,
            "--title" => meta.title = expect_value(&mut args, "--title"),
            "--subtitle" => meta.subtitle = expect_value(&mut args, "--subtitle"),
            "--badge" => meta.badge = expect_value(&mut args, "--badge"),
            "--product" => meta.product = expect_value(&mut args, "--product"),
            "--doc-version" => meta.version = expect_value(&mut args, "--doc-version"),
            "--accent" => accent = expect_value(&mut args, "--accent"),
            "-o" | "--out" => output = Some(PathBuf::from(expect_value(&mut args, "-o"))),
            _ => {
                if input.is_none() {
                    input = Some(PathBuf::from(arg));
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    let options = Options {
        input,
        output,
        meta,
        accent,
        sanitized,
        body_only,
    };

    if let Err(err) = run(&options) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(options: &Options) -> io::Result<()> {
    let source = match &options.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| io::Error::new(err.kind(), format!("{}: {}", path.display(), err)))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let body = if options.sanitized {
        convert_sanitized(&source)
    } else {
        convert(&source)
    };

    let html = if options.body_only {
        body
    } else {
        Renderer::new(options.accent.clone()).page(&options.meta, &body)
    };

    match &options.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, &html)?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    match args.next() {
        Some(value) => value,
        None => {
            eprintln!("{} expects a value", flag);
            print_usage();
            process::exit(2);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Usage: wellkit-cli [--title T] [--subtitle S] [--badge B] [--product P] \
[--doc-version V] [--accent #rrggbb] [--sanitized] [--body-only] [-o OUT] [input.md]"
    );
}
