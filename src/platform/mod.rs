//! Capabilities the screen borrows from its host: a code scanner and a local
//! notification center. Both answer through one-shot completions.

pub mod scanner;
pub mod notifications;

pub use scanner::{CodeType, ScanCompletion, ScanError, ScanResult, ScannedCode, Scanner};
pub use notifications::{AuthorizationCompletion, NotificationCenter, NotificationError, StatusCompletion};
