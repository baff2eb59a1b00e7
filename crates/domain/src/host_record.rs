use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Static name-to-address mapping, as it appears in configuration.
///
/// Records feed the demo upstream resolver so the binary can exercise the
/// cache without a real resolution backend. The cache engine itself treats
/// both fields as opaque strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostRecord {
    /// Domain name (e.g., "nas.home.lan")
    pub name: String,

    /// IP address (IPv4 or IPv6)
    /// Examples: "192.168.1.100", "2001:db8::1"
    pub ip: String,
}

impl HostRecord {
    pub fn new(name: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
        }
    }

    /// Validate that the record can serve as a resolution answer.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("host record name cannot be empty".to_string());
        }
        if self.ip.parse::<IpAddr>().is_err() {
            return Err(format!("'{}' is not a valid IP address", self.ip));
        }
        Ok(())
    }
}
