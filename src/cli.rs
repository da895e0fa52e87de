//! Command-line interface implementation

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::colour::to_hex;
use crate::decoder::{decode_stream, DecodeResult};
use crate::models::{ConfigLookup, GlobalColour, SkinConfiguration, ValueKind};
use crate::resolver::SkinResolver;
use crate::store::MemoryTextureStore;

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Maniaskin - Inspect and query legacy skin configuration
#[derive(Parser)]
#[command(name = "maniaskin")]
#[command(about = "Inspect and query legacy skin.ini configuration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a skin.ini and print the configuration as JSON
    Decode {
        /// Input skin.ini file
        input: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Resolve one configuration entry from a skin.ini
    Get {
        /// Input skin.ini file
        input: PathBuf,

        /// Entry key, matched exactly
        key: String,

        /// Expected value kind: float, bool, version, colour, colours, text
        #[arg(long, default_value = "text")]
        kind: ValueKind,
    },
    /// Resolve a named colour (or the combo colour sequence) from a skin.ini
    Colour {
        /// Input skin.ini file
        input: PathBuf,

        /// Custom colour name, matched exactly
        name: Option<String>,

        /// Resolve the combo colour sequence instead of a named colour
        #[arg(long)]
        combo: bool,
    },
    /// Resolve a texture name against a directory of assets
    Texture {
        /// Directory holding the skin's image files
        dir: PathBuf,

        /// Requested texture name (paths and Gameplay/taiko/ are normalized)
        name: String,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { input, pretty } => run_decode(&input, pretty),
        Commands::Get { input, key, kind } => run_get(&input, &key, kind),
        Commands::Colour { input, name, combo } => run_colour(&input, name.as_deref(), combo),
        Commands::Texture { dir, name } => run_texture(&dir, &name),
    }
}

/// Decode the input file, printing warnings to stderr.
fn decode_file(input: &Path) -> Result<DecodeResult, ExitCode> {
    let file = match File::open(input) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("Error: Cannot open input file '{}': {}", input.display(), error);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };

    let result = decode_stream(file);
    for warning in &result.warnings {
        eprintln!("Warning: line {}: {}", warning.line, warning.message);
    }
    Ok(result)
}

fn run_decode(input: &Path, pretty: bool) -> ExitCode {
    let result = match decode_file(input) {
        Ok(result) => result,
        Err(code) => return code,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&result.configuration)
    } else {
        serde_json::to_string(&result.configuration)
    };
    match json {
        Ok(json) => {
            println!("{json}");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_get(input: &Path, key: &str, kind: ValueKind) -> ExitCode {
    let result = match decode_file(input) {
        Ok(result) => result,
        Err(code) => return code,
    };

    let resolver = SkinResolver::from_decoded(result);
    match resolver.resolve_config(&ConfigLookup::Entry(key.to_string()), kind) {
        Some(value) => {
            println!("{value}");
            ExitCode::from(EXIT_SUCCESS)
        }
        None => {
            eprintln!("Error: no {kind} value for '{key}'");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_colour(input: &Path, name: Option<&str>, combo: bool) -> ExitCode {
    let result = match decode_file(input) {
        Ok(result) => result,
        Err(code) => return code,
    };
    let resolver = SkinResolver::from_decoded(result);

    if combo {
        let lookup = ConfigLookup::Colour(GlobalColour::ComboColours);
        return match resolver.config_colours(&lookup) {
            Some(colours) => {
                for colour in &colours {
                    println!("{}", to_hex(colour));
                }
                ExitCode::from(EXIT_SUCCESS)
            }
            None => {
                eprintln!("Error: no combo colours declared");
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    let Some(name) = name else {
        eprintln!("Error: specify a colour name or --combo");
        return ExitCode::from(EXIT_INVALID_ARGS);
    };
    match resolver.config_colour(&ConfigLookup::CustomColour(name.to_string())) {
        Some(colour) => {
            println!("{}", to_hex(&colour));
            ExitCode::from(EXIT_SUCCESS)
        }
        None => {
            eprintln!("Error: colour '{name}' not found");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_texture(dir: &Path, name: &str) -> ExitCode {
    let store = match store_from_directory(dir) {
        Ok(store) => store,
        Err(error) => {
            eprintln!("Error: Cannot read directory '{}': {}", dir.display(), error);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let resolver =
        SkinResolver::new(SkinConfiguration::default()).with_texture_store(store);
    match resolver.resolve_texture(name) {
        Some(texture) => {
            println!("{} (scale {})", texture.name, texture.scale_adjust);
            ExitCode::from(EXIT_SUCCESS)
        }
        None => {
            eprintln!("Error: texture '{name}' not found");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Build a texture store from a directory listing, keyed by file stem.
fn store_from_directory(dir: &Path) -> std::io::Result<MemoryTextureStore> {
    let mut store = MemoryTextureStore::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(stem) = entry.path().file_stem().and_then(|stem| stem.to_str()) {
            store.insert(stem);
        }
    }
    Ok(store)
}
