use std::fs;
use std::io::Cursor;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser as _, Subcommand};
use log::{LevelFilter, info};
use thiserror::Error;

use ennel::parser::lexer::{self, TokenizerConfig};
use ennel::span::{self, Location};
use ennel::{LexError, ParseError, Parser, SyntaxTree};

#[derive(clap::Parser)]
#[command(name = "ennel")]
#[command(about = "Tokenizer and syntax tree builder for the Ennel language", version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one syntax tree from every source file, in order
    Parse {
        /// Source files
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Report a failing file and continue with the next one
        #[arg(long)]
        keep_going: bool,

        /// Print the accumulated tree
        #[arg(long)]
        show_tree: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Print every token of a source file
    Tokens {
        /// Source file
        input: String,

        #[command(flatten)]
        limits: LimitArgs,
    },
}

#[derive(Args)]
struct LimitArgs {
    /// Reject words, strings and numbers longer than N bytes
    #[arg(long, value_name = "N", conflicts_with = "legacy_limits")]
    max_token_len: Option<usize>,

    /// Use the historical limits (256-byte words and strings, 64-digit numbers)
    #[arg(long)]
    legacy_limits: bool,
}

impl LimitArgs {
    fn config(&self) -> TokenizerConfig {
        match (self.max_token_len, self.legacy_limits) {
            (Some(limit), _) => TokenizerConfig::uniform(limit),
            (None, true) => TokenizerConfig::legacy(),
            (None, false) => TokenizerConfig::default(),
        }
    }
}

#[derive(Error, Debug)]
enum DriverError {
    #[error("no such file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("{path}:{location}: {source}")]
    Parse {
        path: String,
        location: Location,
        source: ParseError,
    },

    #[error("{path}:{location}: {source}")]
    Lex {
        path: String,
        location: Location,
        source: LexError,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            inputs,
            keep_going,
            show_tree,
            limits,
        } => run_parse(&inputs, keep_going, show_tree, limits.config()),
        Commands::Tokens { input, limits } => run_tokens(&input, limits.config()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(failed) => {
            info!("{} file(s) failed", failed);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Returns the number of files that failed.
fn run_parse(
    inputs: &[String],
    keep_going: bool,
    show_tree: bool,
    config: TokenizerConfig,
) -> Result<(), usize> {
    let mut parser = Parser::with_config(config);
    let mut failed = 0;

    for path in inputs {
        info!("parsing {}", path);
        if let Err(e) = build_file(&mut parser, path) {
            eprintln!("error: {}", e);
            failed += 1;
            if !keep_going {
                break;
            }
        }
    }

    if show_tree {
        if let Some(root) = parser.root() {
            print!("{}", root);
        }
    } else {
        for decl in parser.declarations() {
            println!("{}", summarize(decl));
        }
    }

    if failed == 0 { Ok(()) } else { Err(failed) }
}

fn build_file(parser: &mut Parser, path: &str) -> Result<(), DriverError> {
    let source = read_source(path)?;
    parser
        .build(Cursor::new(source.as_slice()))
        .map_err(|e| DriverError::Parse {
            path: path.to_string(),
            location: span::locate(&source, e.offset().unwrap_or(0)),
            source: e,
        })
}

fn run_tokens(path: &str, config: TokenizerConfig) -> Result<(), usize> {
    let result = read_source(path).and_then(|source| {
        let tokens = lexer::tokenize_with(&source, config).map_err(|e| DriverError::Lex {
            path: path.to_string(),
            location: span::locate(&source, e.offset().unwrap_or(0)),
            source: e,
        })?;
        for spanned in tokens {
            let location = span::locate(&source, spanned.span.start);
            println!("{:>8}  {}", location.to_string(), spanned.token);
        }
        Ok(())
    });

    result.map_err(|e| {
        eprintln!("error: {}", e);
        1
    })
}

fn read_source(path: &str) -> Result<Vec<u8>, DriverError> {
    fs::read(path).map_err(|source| DriverError::Open {
        path: path.to_string(),
        source,
    })
}

/// `var name : type = value` with the value written back as source.
fn summarize(decl: &SyntaxTree) -> String {
    let mut out = decl.token.lexeme();
    for (i, child) in decl.children().enumerate() {
        let separator = match i {
            0 => " ",
            1 => " : ",
            _ => " = ",
        };
        out.push_str(separator);
        out.push_str(&child.expression_source());
    }
    out
}
