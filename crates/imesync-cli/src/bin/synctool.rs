use std::path::PathBuf;

use clap::{Parser, Subcommand};

use imesync_cli::commands::{attrs_ops, config_ops, replay_ops};

#[derive(Parser)]
#[command(name = "synctool", about = "imesync adapter replay and inspection tool")]
struct Cli {
    /// Write JSON-lines adapter traces into this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a JSONL script of input-method operations
    Replay {
        /// Path to the script file (one JSON operation per line)
        script_file: String,
        /// Input type of the initially focused field
        #[arg(long, default_value = "text")]
        input_type: String,
        /// Custom settings TOML (optional)
        #[arg(long)]
        settings: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the editor attributes derived for an input type ("all" for every type)
    Attrs {
        /// Input type name, e.g. text, textarea, number
        input_type: String,
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Some(dir) = &cli.trace_dir {
        imesync_engine::init_tracing(dir);
    }

    match cli.command {
        Command::Replay {
            script_file,
            input_type,
            settings,
            json,
        } => replay_ops::replay_cmd(&script_file, &input_type, settings.as_deref(), json),
        Command::Attrs { input_type, json } => attrs_ops::attrs_cmd(&input_type, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_dir_after_subcommand() {
        let cli =
            Cli::try_parse_from(["synctool", "attrs", "text", "--trace-dir", "logs"]).unwrap();
        assert_eq!(cli.trace_dir, Some(PathBuf::from("logs")));
        assert!(matches!(cli.command, Command::Attrs { json: false, .. }));
    }

    #[test]
    fn test_trace_dir_is_optional() {
        let cli = Cli::try_parse_from(["synctool", "settings-export"]).unwrap();
        assert!(cli.trace_dir.is_none());
    }
}
