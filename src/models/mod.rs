/// # Health Status Response
///
/// Operational status of the service with a timestamp, used by the
/// health check endpoints.
pub mod health;

/// # Send-Mail Request Models
///
/// The lenient wire shape of an inbound send-mail request and the
/// normalized form an accepted request is reduced to.
pub mod send_mail;
