use clap::{Args, Parser, Subcommand};
use classicrypt::cli::{
    list_ciphers, random_text, read_text, run_cipher, show_table, CipherOptions, RandomOptions,
};
use classicrypt::{CipherKind, Direction};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("CLASSICRYPT_VERSION");
const BUILD: &str = env!("CLASSICRYPT_BUILD");
const PROFILE: &str = env!("CLASSICRYPT_PROFILE");
const GIT_HASH: &str = env!("CLASSICRYPT_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "classicrypt")]
#[command(author, about = "Classical substitution ciphers", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text with a cipher
    #[command(alias = "e")]
    Encode(CipherArgs),

    /// Decode text with a cipher
    #[command(alias = "d")]
    Decode(CipherArgs),

    /// Print the Vigenère tabula recta
    #[command(alias = "t")]
    Table {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a random string
    #[command(alias = "r")]
    Random {
        /// Number of characters
        length: usize,

        /// Include digits
        #[arg(long)]
        numbers: bool,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List supported ciphers
    #[command(alias = "l")]
    List,
}

#[derive(Args)]
struct CipherArgs {
    /// Cipher: caesar, atbash, vigenere, alberti or playfair
    #[arg(value_parser = parse_cipher)]
    cipher: CipherKind,

    /// Text to transform (or use --input)
    text: Option<String>,

    /// Read the text from a file
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Shift for caesar
    #[arg(long, allow_negative_numbers = true)]
    shift: Option<i64>,

    /// Secret for vigenere and playfair
    #[arg(long)]
    secret: Option<String>,

    /// Initial inner disk position for alberti
    #[arg(long, allow_negative_numbers = true)]
    position: Option<i64>,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

fn parse_cipher(s: &str) -> Result<CipherKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_transform(args: CipherArgs, direction: Direction) -> classicrypt::Result<String> {
    let text = read_text(args.text, args.input.as_deref())?;
    let options = CipherOptions {
        cipher: args.cipher,
        shift: args.shift,
        secret: args.secret,
        position: args.position,
    };
    run_cipher(&text, direction, &options)?.render(args.json)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    if cli.version {
        println!("classicrypt {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encode(args) => run_transform(args, Direction::Encode),
        Commands::Decode(args) => run_transform(args, Direction::Decode),
        Commands::Table { json } => show_table(json),
        Commands::Random {
            length,
            numbers,
            seed,
        } => {
            let options = RandomOptions {
                length,
                numbers,
                seed,
            };
            Ok(format!("{}\n", random_text(&options)))
        }
        Commands::List => Ok(list_ciphers()),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
