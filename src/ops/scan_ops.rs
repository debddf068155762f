use crate::model::Prospect;
use crate::platform::ScanResult;
use crate::store::ProspectStore;

/// Split decoded text into `(name, email)`. The payload must contain exactly
/// one `'\n'`; anything else yields None. Fields are taken verbatim.
pub fn parse_payload(text: &str) -> Option<(String, String)> {
    let details: Vec<&str> = text.split('\n').collect();
    match details.as_slice() {
        [name, email] => Some((name.to_string(), email.to_string())),
        _ => None,
    }
}

/// Apply a finished scan to the store. Returns the prospect that was added,
/// if any. Malformed payloads are dropped and failures are only logged.
pub fn apply_scan(store: &mut ProspectStore, result: ScanResult) -> Option<Prospect> {
    match result {
        Ok(code) => {
            tracing::debug!(code_type = ?code.code_type, "scan finished");
            let (name, email) = match parse_payload(&code.string) {
                Some(fields) => fields,
                None => {
                    tracing::debug!(
                        lines = code.string.split('\n').count(),
                        "scan payload is not a name/email pair, discarded"
                    );
                    return None;
                }
            };

            let mut person = Prospect::create();
            person.name = name;
            person.email_address = email;
            store.add(person.clone());
            Some(person)
        }
        Err(e) => {
            tracing::error!("Scanning failed: {}", e);
            None
        }
    }
}
