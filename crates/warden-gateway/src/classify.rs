//! Success/failure classification of free-text console replies.
//!
//! The RCON protocol returns unstructured human-readable text with no status
//! code, so the only available signal is the shape of the text itself. The
//! classifier exists to give the presentation layer a binary styling hint; it
//! is expected to be wrong occasionally in both directions.

/// Binary classification of a console reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure,
}

/// Pluggable classification seam. Swap the suffix heuristic for a structured
/// check if the remote protocol ever grows one, without touching the gateway.
pub trait ResponseClassifier: Send + Sync {
    fn classify(&self, raw_response: &str, strict_entity_check: bool) -> Verdict;
}

/// Suffix marker the server appends when it echoes back a rejected command.
const ERROR_MARKER_SUFFIX: &str = "[HERE]";
/// Suffix of "no entity was found"-style replies; only meaningful for
/// operations that target a specific named player or entity.
const NOT_FOUND_SUFFIX: &str = "was found";

/// Default heuristic classifier.
///
/// Known limitation: a legitimately successful reply that happens to end in
/// "was found" is misclassified as a failure when the strict check is on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixClassifier;

impl ResponseClassifier for SuffixClassifier {
    fn classify(&self, raw_response: &str, strict_entity_check: bool) -> Verdict {
        if raw_response.ends_with(ERROR_MARKER_SUFFIX) {
            return Verdict::Failure;
        }
        if strict_entity_check && raw_response.ends_with(NOT_FOUND_SUFFIX) {
            return Verdict::Failure;
        }
        Verdict::Success
    }
}
