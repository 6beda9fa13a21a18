/// Ordered validation rules for send-mail requests.
///
/// One tagged variant per rule, a central message table, and fail-fast
/// evaluation: the first violated rule decides the returned error. The
/// deterministic rules (presence, length, recipient format) run in
/// [`rules::precheck`]; sender reachability and custom-domain binding
/// run in [`rules::validate`] through an injected [`sender::SenderVerifier`].
pub mod rules;

/// Recipient address grammar for the format rule.
///
/// Accepts dot-atom local parts and dotted domains with an alphabetic
/// TLD; rejects consecutive dots, empty labels, and bare domains.
///
/// # Example
/// ```
/// use send_api::handlers::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("adedotxn.dev@gmail.com"));
/// assert!(!is_valid_email("harof.dev@gmil..com"));
/// ```
pub mod syntax;

/// The [`sender::SenderVerifier`] capability and its MongoDB-backed
/// production implementation.
pub mod sender;

/// Redis read-through cache for verifier answers.
pub mod cache;
