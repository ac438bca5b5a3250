//! An example to percent-encode the CLI argument.

use urlsplit::quote::Quoter;

const USAGE: &str = "\
USAGE:
    quote [FLAGS] [OPTIONS] [--] INPUT

FLAGS:
    -h, --help          Prints this help
    -p, --plus          Write spaces as `+`

OPTIONS:
    -s, --safe <SAFE>   Extra bytes not to encode (default: `/`)

ARGS:
    <INPUT>             String to encode
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// CLI options.
#[derive(Debug, Clone)]
struct CliOpt {
    /// Input.
    input: String,
    /// Extra safe bytes.
    safe: String,
    /// Whether to write spaces as `+`.
    plus: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut input = None;
        let mut safe = None;
        let mut plus = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--plus" | "-p" => plus = true,
                "--safe" | "-s" => match args.next() {
                    Some(v) => safe = Some(v),
                    None => die("--safe requires a value"),
                },
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if input.replace(arg).is_some() {
                        die("INPUT can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if input.replace(arg).is_some() {
                die("INPUT can be specified at most once");
            }
        }

        let input = input.unwrap_or_else(|| die("INPUT should be specified"));
        let safe = safe.unwrap_or_else(|| "/".to_owned());
        Self { input, safe, plus }
    }
}

fn main() {
    let opt = CliOpt::parse();
    let quoter = Quoter::new(opt.safe.as_bytes()).space_as_plus(opt.plus);
    match quoter.quote(&opt.input) {
        Ok(encoded) => println!("{}", encoded),
        Err(e) => die(format_args!("Failed to encode {:?}: {}", opt.input, e)),
    }
}
