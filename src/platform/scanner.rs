use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeType {
    Qr,
}

/// Text decoded from a code, exactly as the decoder produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedCode {
    pub string: String,
    pub code_type: CodeType,
}

impl ScannedCode {
    pub fn qr(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
            code_type: CodeType::Qr,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("the scanner could not read its input: {0}")]
    BadInput(String),

    #[error("the scanner produced no usable output")]
    BadOutput,

    #[error("the scanner failed to start: {0}")]
    InitError(String),

    #[error("permission to use the camera was denied")]
    PermissionDenied,
}

pub type ScanResult = Result<ScannedCode, ScanError>;

pub type ScanCompletion = Box<dyn FnOnce(ScanResult)>;

/// Presents a scanning UI and reports exactly one outcome.
pub trait Scanner {
    /// Start scanning. `completion` runs once, possibly before this returns.
    fn present(&mut self, completion: ScanCompletion);

    /// Close the scanning UI. Safe to call when nothing is presented.
    fn dismiss(&mut self);
}
