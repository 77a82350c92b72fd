use std::fs;
use std::process;

use imesync_core::settings::{self, Settings};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(load_settings(file), "Error: {}");
    println!(
        "OK: sync.normalize_nbsp={}, sync.dedup_notifications={}, batch.depth_warning={}, keys.synthesize_tab_on_next={}, keys.forward_printable_release={}",
        s.sync.normalize_nbsp,
        s.sync.dedup_notifications,
        s.batch.depth_warning,
        s.keys.synthesize_tab_on_next,
        s.keys.forward_printable_release,
    );
}

/// Read and validate a settings file.
pub fn load_settings(file: &str) -> Result<Settings, String> {
    let content = fs::read_to_string(file).map_err(|e| format!("reading {file}: {e}"))?;
    settings::parse_settings_toml(&content).map_err(|e| e.to_string())
}
