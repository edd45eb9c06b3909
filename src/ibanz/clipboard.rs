use crate::error::{IbanzError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard programs to try, in order, as (program, args).
#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[];

/// Copies text to the system clipboard using the first clipboard program
/// that can be started.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    if CANDIDATES.is_empty() {
        return Err(IbanzError::Api(
            "Clipboard not supported on this platform".to_string(),
        ));
    }

    let mut last_err = None;
    for (program, args) in CANDIDATES {
        match Command::new(program).args(*args).stdin(Stdio::piped()).spawn() {
            Ok(child) => return feed(child, program, text),
            Err(e) => {
                log::debug!("Clipboard program {} unavailable: {}", program, e);
                last_err = Some(e);
            }
        }
    }

    let names: Vec<&str> = CANDIDATES.iter().map(|(p, _)| *p).collect();
    Err(IbanzError::Api(format!(
        "No clipboard program found ({}). Install one of: {}",
        last_err.map(|e| e.to_string()).unwrap_or_default(),
        names.join(", ")
    )))
}

fn feed(mut child: std::process::Child, program: &str, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| IbanzError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| IbanzError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(IbanzError::Api(format!("{} exited with error", program)))
    }
}

/// The confirmation shown after a copy, e.g. "IBAN copied!".
pub fn copied_message(label: &str) -> String {
    format!("{} copied!", label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copied_message() {
        assert_eq!(copied_message("IBAN"), "IBAN copied!");
        assert_eq!(copied_message("Name"), "Name copied!");
    }
}
