use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use rune_cli::commands::convert_ops::Direction;
use rune_cli::commands::{config_ops, convert_ops, snapshot_ops, verify_ops};
use rune_engine::{Orthography, Script};

#[derive(Parser)]
#[command(
    name = "runetool",
    version = rune_engine::version(),
    about = "Old Turkic rune transliteration tool"
)]
struct Cli {
    /// Custom rune table TOML (replaces the built-in table)
    #[arg(long, global = true)]
    table: Option<String>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON-lines traces into this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Latin or Cyrillic text to runes
    ToRunic {
        /// Source orthography
        #[arg(long, default_value = "latin")]
        script: Orthography,
        /// Text to convert (reads stdin line by line when omitted)
        text: Option<String>,
    },
    /// Convert runes to Latin or Cyrillic
    FromRunic {
        /// Target orthography
        #[arg(long, default_value = "latin")]
        script: Orthography,
        /// Runic text (reads stdin line by line when omitted)
        text: Option<String>,
    },
    /// Show how text splits into graphemes
    Tokens {
        #[arg(long, default_value = "latin")]
        script: Orthography,
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the graphemes of a script in table order
    Alphabet {
        #[arg(long, default_value = "latin")]
        script: Script,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the default rune table as TOML
    TableExport,
    /// Validate a custom rune table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Convert inputs from a file and record the results to JSONL
    Snapshot {
        /// Path to the input file (one text per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
        #[arg(long, default_value = "latin")]
        script: Orthography,
    },
    /// Compare current output against a saved snapshot
    DiffSnapshot {
        /// Path to the input file (one text per line)
        input_file: String,
        /// Path to the baseline JSONL snapshot file
        baseline_file: String,
        #[arg(long, default_value = "latin")]
        script: Orthography,
    },
    /// Verify a Turnstile token once (secret from TURNSTILE_SECRET_KEY)
    Verify {
        token: String,
        /// Client IP forwarded as `remoteip`
        #[arg(long)]
        remote_ip: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        if !rune_engine::trace_init::enabled() {
            eprintln!("warning: --trace-dir ignored, built without the `trace` feature");
        }
        rune_engine::trace_init::init_tracing(Path::new(dir));
    }
    config_ops::load_overrides(cli.table.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::ToRunic { script, text } => {
            convert_ops::convert_cmd(Direction::ToRunic, script, text.as_deref())
        }
        Command::FromRunic { script, text } => {
            convert_ops::convert_cmd(Direction::FromRunic, script, text.as_deref())
        }
        Command::Tokens { script, text, json } => convert_ops::tokens_cmd(script, &text, json),
        Command::Alphabet { script, json } => convert_ops::alphabet_cmd(script, json),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Snapshot {
            input_file,
            output_file,
            script,
        } => snapshot_ops::snapshot_cmd(&input_file, &output_file, script),
        Command::DiffSnapshot {
            input_file,
            baseline_file,
            script,
        } => {
            if !snapshot_ops::diff_snapshot_cmd(&input_file, &baseline_file, script) {
                process::exit(1);
            }
        }
        Command::Verify { token, remote_ip } => {
            if !verify_ops::verify_cmd(&token, remote_ip.as_deref()) {
                process::exit(1);
            }
        }
    }
}
