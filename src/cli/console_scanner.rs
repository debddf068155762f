use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::cli::context::read_line;
use crate::platform::{ScanCompletion, ScanError, ScanResult, ScannedCode, Scanner};

/// Stands in for a camera: the "decoded" text comes from a file when one was
/// queued, otherwise from lines pasted at the prompt.
pub struct ConsoleScanner {
    next_file: Rc<RefCell<Option<PathBuf>>>,
    presented: bool,
}

impl ConsoleScanner {
    pub fn new(next_file: Rc<RefCell<Option<PathBuf>>>) -> Self {
        Self {
            next_file,
            presented: false,
        }
    }
}

impl Scanner for ConsoleScanner {
    fn present(&mut self, completion: ScanCompletion) {
        self.presented = true;
        tracing::debug!("scanner presented");

        let file = self.next_file.borrow_mut().take();
        let result = match file {
            Some(path) => read_payload_file(&path),
            None => read_pasted_payload(),
        };
        completion(result);
    }

    fn dismiss(&mut self) {
        if self.presented {
            tracing::debug!("scanner dismissed");
        }
        self.presented = false;
    }
}

/// A decoder never reports the final line break an editor adds to a file.
pub fn read_payload_file(path: &Path) -> ScanResult {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ScanError::BadInput(format!("{}: {}", path.display(), e)))?;
    let text = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(&text);
    Ok(ScannedCode::qr(text))
}

fn read_pasted_payload() -> ScanResult {
    println!("Paste the decoded code text, then an empty line:");
    let mut lines = Vec::new();
    while let Some(line) = read_line("") {
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }

    if lines.is_empty() {
        return Err(ScanError::BadOutput);
    }
    Ok(ScannedCode::qr(lines.join("\n")))
}
