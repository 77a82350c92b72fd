use std::path::Path;
use std::process;

use imesync_core::editor::{EditorAttributes, TextInputType};
use imesync_session::{AdapterConfig, ImeState};

use super::config_ops::load_settings;
use crate::replay::{replay, Transcript};
use crate::script::read_script;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn replay_cmd(script_file: &str, input_type: &str, settings: Option<&str>, json: bool) {
    let ops = die!(
        read_script(Path::new(script_file)),
        "Error reading {script_file}: {}"
    );
    let input_type = die!(
        TextInputType::from_name(input_type).ok_or(input_type),
        "Error: unknown input type {}"
    );
    let config = match settings {
        Some(file) => AdapterConfig::from_settings(&die!(load_settings(file), "Error: {}")),
        None => AdapterConfig::default(),
    };

    let transcript = replay(&ops, EditorAttributes::for_input_type(input_type), config);

    if json {
        let out = die!(
            serde_json::to_string_pretty(&transcript),
            "Error serializing transcript: {}"
        );
        println!("{out}");
    } else {
        print_transcript(&transcript);
    }
}

fn format_state(state: &ImeState) -> String {
    let comp = if state.composition_start < 0 {
        "none".to_string()
    } else {
        format!("({}, {})", state.composition_start, state.composition_end)
    };
    format!(
        "{:?} sel=({}, {}) comp={comp}",
        state.text, state.selection_start, state.selection_end
    )
}

fn print_transcript(t: &Transcript) {
    for (i, step) in t.steps.iter().enumerate() {
        let op = serde_json::to_string(&step.op).unwrap_or_default();
        match step.returned {
            Some(r) => println!("#{:>3} {op} -> {r}", i + 1),
            None => println!("#{:>3} {op}", i + 1),
        }
        for call in &step.calls {
            println!("       {call}");
        }
        println!("       = {}", format_state(&step.state));
    }
    println!();
    println!("final: {}", format_state(&t.final_state));
    if t.batch_depth > 0 {
        println!("warning: {} batch edit(s) left open", t.batch_depth);
    }
}
