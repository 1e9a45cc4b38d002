//! Tests for probe request construction.
//!
//! The identity override is the compatibility-sensitive part of the
//! transport: an IP-literal probe must present `translate.googleapis.com`
//! as both HTTP `Host` and TLS SNI (expressed as a resolve pin on the
//! logical URL), while a hostname probe must not override anything.

use std::net::Ipv4Addr;

use ggc::core::check::client::{is_ip_literal, probe_target, RequestError};

#[test]
fn test_ip_literal_detection() {
    assert!(is_ip_literal("142.250.4.90"));
    assert!(is_ip_literal("108.177.97.100"));
    assert!(!is_ip_literal("translate.amz.wang"));
    assert!(!is_ip_literal("mirror-1.example.com"));
    // IPv6 contains colons, so it is treated as a hostname.
    assert!(!is_ip_literal("2001:db8::1"));
}

#[test]
fn test_ip_literal_target_pins_logical_identity() {
    let target = probe_target("142.250.4.90").unwrap();

    assert_eq!(
        target.url,
        "https://translate.googleapis.com/translate_a/element.js"
    );
    assert_eq!(target.resolve, Some(Ipv4Addr::new(142, 250, 4, 90)));
}

#[test]
fn test_hostname_target_has_no_override() {
    let target = probe_target("translate.amz.wang").unwrap();

    assert_eq!(
        target.url,
        "https://translate.amz.wang/translate_a/element.js"
    );
    assert_eq!(target.resolve, None);
}

#[test]
fn test_malformed_ip_literal_is_a_transport_error() {
    // Matches the digits-and-dots pattern but is not a valid IPv4 address.
    let err = probe_target("1.2.3.4.5").unwrap_err();
    assert!(matches!(err, RequestError::Transport(_)));
}
