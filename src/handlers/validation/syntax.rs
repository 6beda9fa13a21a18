/// Checks a recipient address against the send API's delivery contract.
///
/// The accepted grammar is a dot-atom local part and a dotted domain
/// ending in an alphabetic top-level label. This is stricter than RFC
/// 5322: quoted-string locals and domain literals are not deliverable
/// through the platform and are rejected outright.
///
/// # Examples
/// ```
/// use send_api::handlers::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("adedotxn.dev@gmail.com"));
/// assert!(!is_valid_email("harof.dev@gmil..com"));
/// assert!(!is_valid_email("harof.dev@com"));
/// assert!(!is_valid_email("harof.dev@.com"));
/// ```
///
/// # Arguments
/// * `email` - A string slice containing the address to check
///
/// # Returns
/// `true` if the address is acceptable as a recipient, `false` otherwise
pub fn is_valid_email(email: &str) -> bool {
    // Overall and local-part length ceilings (RFC 5321)
    if email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.len() > 64 {
        return false;
    }

    is_valid_local_part(local) && is_valid_domain_part(domain)
}

/// Dot-atom local part: dot-separated runs of atom characters, no empty
/// runs (leading/trailing/consecutive dots).
fn is_valid_local_part(local: &str) -> bool {
    let parts: Vec<&str> = local.split('.').collect();
    if parts.iter().any(|part| part.is_empty()) {
        return false;
    }

    parts
        .iter()
        .all(|part| part.chars().all(is_atom_char))
}

fn is_atom_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c)
}

/// Dotted domain with at least one label before an alphabetic TLD of
/// two or more characters. Labels follow RFC 1035 hyphen rules.
fn is_valid_domain_part(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    // A bare label ("@com") has no local-domain separator structure
    if labels.len() < 2 {
        return false;
    }

    if !labels.iter().all(|label| is_valid_label(label)) {
        return false;
    }

    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_standard_addresses() {
        assert!(is_valid_email("adedotxn.dev@gmail.com"));
        assert!(is_valid_email("simple@example.com"));
        assert!(is_valid_email("very.common@example.com"));
        assert!(is_valid_email("x@example.com"));
        assert!(is_valid_email("user+tag@sub.example.co"));
        assert!(is_valid_email("user_name@example.io"));
    }

    #[test]
    fn valid_special_chars_in_local_part() {
        assert!(is_valid_email("!#$%&'*+-/=?^_`{|}~@example.com"));
        assert!(is_valid_email("o'brien@example.com"));
    }

    #[test]
    fn valid_numeric_and_hyphenated_domains() {
        assert!(is_valid_email("user@123.com"));
        assert!(is_valid_email("user@sub-domain.example.com"));
        assert!(is_valid_email("user@a-b-c.example.com"));
    }

    #[test]
    fn invalid_consecutive_dots() {
        assert!(!is_valid_email("harof.dev@gmil..com"));
        assert!(!is_valid_email("user..name@example.com"));
        assert!(!is_valid_email("user@example..com"));
    }

    #[test]
    fn invalid_missing_tld() {
        assert!(!is_valid_email("harof.dev@com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.123"));
    }

    #[test]
    fn invalid_empty_labels() {
        assert!(!is_valid_email("harof.dev@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@.example.com"));
    }

    #[test]
    fn invalid_separator_structure() {
        assert!(!is_valid_email("missing.example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example@com"));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn invalid_dot_placement_in_local_part() {
        assert!(!is_valid_email(".leading@example.com"));
        assert!(!is_valid_email("trailing.@example.com"));
    }

    #[test]
    fn invalid_hyphen_placement() {
        assert!(!is_valid_email("user@-subdomain.example.com"));
        assert!(!is_valid_email("user@subdomain-.example.com"));
    }

    #[test]
    fn invalid_whitespace() {
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example .com"));
        assert!(!is_valid_email("   "));
    }

    #[test]
    fn invalid_quoted_and_literal_forms() {
        // Deliverable recipients never use these RFC 5322 forms
        assert!(!is_valid_email("\"user name\"@example.com"));
        assert!(!is_valid_email("user@[192.168.0.1]"));
        assert!(!is_valid_email("user@[IPv6:2001:db8::1]"));
    }

    #[test]
    fn length_boundaries() {
        let local_64 = "a".repeat(64);
        assert!(is_valid_email(&format!("{}@example.com", local_64)));

        let local_65 = "a".repeat(65);
        assert!(!is_valid_email(&format!("{}@example.com", local_65)));

        let label_63 = "b".repeat(63);
        assert!(is_valid_email(&format!("user@{}.com", label_63)));

        let label_64 = "b".repeat(64);
        assert!(!is_valid_email(&format!("user@{}.com", label_64)));

        let local = "a".repeat(64);
        let domain = format!("{}.{}", "b".repeat(186), "com");
        assert!(local.len() + 1 + domain.len() > 254);
        assert!(!is_valid_email(&format!("{}@{}", local, domain)));
    }

    #[test]
    fn case_handling() {
        assert!(is_valid_email("USER@EXAMPLE.COM"));
        assert!(is_valid_email("User@Example.Com"));
    }
}
