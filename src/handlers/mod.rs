/// Validation of inbound send-mail requests: the ordered rule table,
/// the recipient address grammar, and the sender-verification
/// capability with its cache.
pub mod validation;
