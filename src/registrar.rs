//! Registrar deep links.
//!
//! Links only point a browser at the registrar's search page; no request is made here.

/// Registrar used when none is configured
pub const DEFAULT_REGISTRAR: &str = "godaddy.com";

/// Split an FQDN into the label before the first dot and the rest.
pub fn split_fqdn(fqdn: &str) -> Option<(&str, &str)> {
    fqdn.split_once('.')
}

/// Build the registrar search URL for a candidate FQDN.
///
/// `registrar` is a bare host such as `godaddy.com`. Returns `None` for input without a dot.
pub fn registrar_link(registrar: &str, fqdn: &str) -> Option<String> {
    let (label, tld) = split_fqdn(fqdn)?;
    Some(format!(
        "https://{}/domainsearch/find?&tld=.{}&domainToCheck={}",
        registrar, tld, label
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registrar_link() {
        assert_eq!(
            registrar_link(DEFAULT_REGISTRAR, "google.com").unwrap(),
            "https://godaddy.com/domainsearch/find?&tld=.com&domainToCheck=google"
        );
    }

    #[test]
    fn test_link_suffix_shape() {
        let url = registrar_link("example-registrar.test", "g.oogle").unwrap();
        assert!(url.starts_with("https://example-registrar.test/"));
        assert!(url.ends_with("/domainsearch/find?&tld=.oogle&domainToCheck=g"));
    }

    #[test]
    fn test_no_dot() {
        assert!(registrar_link(DEFAULT_REGISTRAR, "google").is_none());
    }

    #[test]
    fn test_split_on_first_dot() {
        assert_eq!(split_fqdn("com.com"), Some(("com", "com")));
        assert_eq!(split_fqdn("a.b.c"), Some(("a", "b.c")));
    }
}
