use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use minilang::{
    compile_file, compile_source, display_error,
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse_source,
    CompileOutput,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "minilang")]
#[command(about = "Compiler from MiniLang to postfix desk calculator code", long_about = None)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize the input file and print tokens
    Lex {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Parse the input file and print the AST
    Parse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Compile the input file to postfix code
    Compile {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Print the symbol table after compiling
        #[arg(short, long)]
        symbols: bool,
    },
    /// Type a program line by line, save it and compile it
    Repl {
        /// File name to save to, without extension
        #[arg(short, long, value_name = "NAME")]
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Lex { file } => lex_file(&file)?,
        Commands::Parse { file } => parse_file(&file)?,
        Commands::Compile {
            file,
            output,
            symbols,
        } => compile_to_output(&file, output.as_deref(), symbols)?,
        Commands::Repl { name } => repl(name)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file '{}'", path.display()))
}

fn report(error: &Error, source: &str, path: &Path) -> anyhow::Error {
    display_error(error, source, &path.to_string_lossy());
    anyhow::anyhow!("{}", error)
}

fn lex_file(path: &Path) -> Result<()> {
    let input = read_source(path)?;
    let mut lexer = Lexer::new(input.as_str());
    let mut count = 0;

    loop {
        let token = lexer.next_token().map_err(|err| report(&err, &input, path))?;
        println!("{}", token);
        count += 1;

        if token.kind == TokenKind::EOF {
            break;
        }
    }

    println!("\nTotal tokens: {}", count);

    Ok(())
}

fn parse_file(path: &Path) -> Result<()> {
    let input = read_source(path)?;
    let program = parse_source(input.as_str()).map_err(|err| report(&err, &input, path))?;

    println!("{}", pretty_print(program.to_string()));

    Ok(())
}

fn compile_to_output(path: &Path, output: Option<&Path>, symbols: bool) -> Result<()> {
    let input = read_source(path)?;
    let compiled = compile_source(input.as_str()).map_err(|err| report(&err, &input, path))?;

    match output {
        Some(output_path) => {
            fs::write(output_path, format!("{}\n", compiled.generated_code)).with_context(
                || format!("failed to write code to '{}'", output_path.display()),
            )?;
            println!("Generated code written to: {}", output_path.display());
        }
        None => println!("{}", compiled.generated_code),
    }

    if symbols {
        println!("{}", compiled.session.symbol_table);
    }

    Ok(())
}

fn repl(name: Option<String>) -> Result<()> {
    println!("MiniLang");
    println!("Type one statement per line, then `save` on its own line to compile.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut lines: Vec<String> = vec![];

    loop {
        print!("{} | ", lines.len() + 1);
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read line")? == 0 {
            bail!("input ended before `save`");
        }

        let line = line.trim_end_matches(&['\r', '\n'][..]);
        if line == "save" {
            break;
        }

        lines.push(line.to_string());
    }

    let name = match name {
        Some(name) => name,
        None => {
            print!("File name (without extension): ");
            io::stdout().flush().context("failed to flush stdout")?;

            let mut answer = String::new();
            input
                .read_line(&mut answer)
                .context("failed to read file name")?;
            answer.trim().to_string()
        }
    };
    let name = if name.is_empty() {
        String::from("output")
    } else {
        name
    };

    let path = PathBuf::from(format!("{}.txt", name));
    let source = lines.join("\n");
    fs::write(&path, &source)
        .with_context(|| format!("failed to write file '{}'", path.display()))?;
    info!(path = %path.display(), lines = lines.len(), "program saved");
    println!("Saved to {}", path.display());

    let compiled: CompileOutput = match compile_file(&path) {
        Ok(compiled) => compiled,
        Err(err) => {
            if let Some(error) = err.downcast_ref::<Error>() {
                return Err(report(error, &source, &path));
            }
            return Err(err);
        }
    };

    debug!(code = %compiled.generated_code, "repl program compiled");
    println!("{}", compiled.generated_code);
    println!("{}", compiled.session.symbol_table);

    Ok(())
}

/// Indents a bracketed AST rendering, one node per line.
fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent = 0;

    for c in string.chars() {
        match c {
            '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            }
            ']' => {
                indent -= 1;
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            }
            _ => result.push(c),
        }
    }

    result
}
