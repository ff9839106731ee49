//! Flag-based document verification.
//!
//! Credential verification happens upstream; by the time a subject reaches
//! the engine each entry of its `documents` collection carries a `verified`
//! flag. `FlagDocumentVerifier` only reads that flag.

use tracing::debug;

use eligibility_contracts::subject::Subject;
use eligibility_core::traits::DocumentVerifier;

/// Accepts a subject when any verified document has an allowed type.
/// Type names compare case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagDocumentVerifier;

impl DocumentVerifier for FlagDocumentVerifier {
    fn has_verified_document(&self, subject: &Subject, allowed_types: &[String]) -> bool {
        let found = subject.documents().iter().any(|doc| {
            doc.verified
                && allowed_types
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(&doc.document_type))
        });

        debug!(allowed = ?allowed_types, found, "document proof check");
        found
    }
}
