//! An example to split a URL from the CLI argument.

use urlsplit::{parse, split, SplitOptions};

const USAGE: &str = "\
USAGE:
    split [FLAGS] [OPTIONS] [--] URL

FLAGS:
    -h, --help              Prints this help
    -p, --params            Also extract path parameters
        --no-fragments      Do not recognize fragments
        --keep-controls     Do not remove embedded tab, CR, and LF

OPTIONS:
    -s, --scheme <SCHEME>   Default scheme

ARGS:
    <URL>                   URL to split
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
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// URL.
    url: String,
    /// Default scheme.
    default_scheme: Option<String>,
    /// Whether to extract parameters.
    params: bool,
    /// Whether to recognize fragments.
    no_fragments: bool,
    /// Whether to keep embedded control bytes.
    keep_controls: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut opt = Self::default();
        let mut url = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--params" | "-p" => opt.params = true,
                "--no-fragments" => opt.no_fragments = true,
                "--keep-controls" => opt.keep_controls = true,
                "--scheme" | "-s" => match args.next() {
                    Some(scheme) => opt.default_scheme = Some(scheme),
                    None => die("--scheme requires a value"),
                },
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                unknown if unknown.starts_with('-') => {
                    die(format_args!("Unknown option: {}", unknown))
                }
                _ => {
                    if url.replace(arg).is_some() {
                        die("URL can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if url.replace(arg).is_some() {
                die("URL can be specified at most once");
            }
        }

        opt.url = url.unwrap_or_else(|| die("URL should be specified"));
        opt
    }

    fn split_options(&self) -> SplitOptions<'_> {
        let mut options = SplitOptions::new()
            .allow_fragments(!self.no_fragments)
            .strip_embedded_control_bytes(!self.keep_controls);
        if let Some(scheme) = &self.default_scheme {
            options = options.default_scheme(scheme.as_bytes());
        }
        options
    }
}

fn show(name: &str, present: bool, value: &[u8]) {
    if present {
        println!("{:>9}: {:?}", name, String::from_utf8_lossy(value));
    } else {
        println!("{:>9}: (absent)", name);
    }
}

fn main() {
    let opt = CliOpt::parse();
    let options = opt.split_options();

    if opt.params {
        let p = parse(&opt.url, &options);
        show("scheme", !p.scheme().is_empty(), p.scheme());
        show("netloc", p.spans().netloc.is_some(), p.netloc());
        show("path", true, p.path());
        show("params", p.has_params(), p.params());
        show("query", p.spans().query.is_some(), p.query());
        show("fragment", p.spans().fragment.is_some(), p.fragment());
    } else {
        let s = split(&opt.url, &options);
        show("scheme", !s.scheme().is_empty(), s.scheme());
        show("netloc", s.has_netloc(), s.netloc());
        show("path", true, s.path());
        show("query", s.has_query(), s.query());
        show("fragment", s.has_fragment(), s.fragment());
        if let Some(netloc) = s.netloc_components() {
            show("host", true, netloc.host());
            if let Some(port) = netloc.port_number() {
                println!("{:>9}: {}", "port", port);
            }
        }
    }
}
