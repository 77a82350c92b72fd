use std::process;

use imesync_core::editor::{EditorAttributes, TextInputType};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Print the editor attributes for one input type, or for every type when
/// `input_type` is `"all"`.
pub fn attrs_cmd(input_type: &str, json: bool) {
    let types: Vec<TextInputType> = if input_type.eq_ignore_ascii_case("all") {
        TextInputType::ALL.to_vec()
    } else {
        vec![die!(
            TextInputType::from_name(input_type).ok_or(input_type),
            "Error: unknown input type {}"
        )]
    };

    for t in types {
        let attrs = EditorAttributes::for_input_type(t);
        if json {
            let out = die!(serde_json::to_string(&attrs), "Error serializing attributes: {}");
            println!("{out}");
        } else {
            println!("{}", describe(&attrs));
        }
    }
}

pub fn describe(attrs: &EditorAttributes) -> String {
    let mut flags = Vec::new();
    if attrs.auto_correct {
        flags.push("auto_correct");
    }
    if attrs.multi_line {
        flags.push("multi_line");
    }
    if attrs.cap_sentences {
        flags.push("cap_sentences");
    }
    if attrs.no_fullscreen {
        flags.push("no_fullscreen");
    }
    if attrs.no_extract_ui {
        flags.push("no_extract_ui");
    }
    format!(
        "{:<16} input_type={:#010x} ime_options={:#010x} action={:?} single_line={} flags=[{}]",
        attrs.input_type.name(),
        attrs.input_type_bits(),
        attrs.ime_options_bits(),
        attrs.ime_action,
        attrs.single_line,
        flags.join(",")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_textarea() {
        let line = describe(&EditorAttributes::for_input_type(TextInputType::TextArea));
        assert!(line.starts_with("textarea "));
        assert!(line.contains("single_line=false"));
        assert!(line.contains("multi_line"));
    }

    #[test]
    fn test_describe_number() {
        let line = describe(&EditorAttributes::for_input_type(TextInputType::Number));
        assert!(line.contains("action=Next"));
        assert!(!line.contains("auto_correct"));
    }
}
