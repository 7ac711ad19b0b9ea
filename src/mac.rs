//! MAC address value type.
//!
//! Every hardware address entering or leaving macgate goes through
//! [`MacAddress`]: six colon-separated lowercase hex octet pairs
//! (`aa:bb:cc:dd:ee:ff`). Malformed input is rejected at the boundary,
//! never silently coerced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AccessError;

/// A validated, normalized hardware address.
///
/// Parsing accepts six hex octet pairs in any case, separated by `:` or
/// `-`, or twelve bare hex digits; the stored form is always the
/// canonical lowercase colon form.
///
/// # Examples
/// ```
/// use macgate::mac::MacAddress;
///
/// let mac: MacAddress = "AA-BB-CC-DD-EE-FF".parse().unwrap();
/// assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
/// assert!("aa:bb:cc".parse::<MacAddress>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress(String);

impl MacAddress {
    /// The canonical lowercase colon form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_hex_pair(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

impl FromStr for MacAddress {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let octets: Vec<&str> = if trimmed.contains(':') || trimmed.contains('-') {
            trimmed.split(['-', ':']).collect()
        } else if trimmed.len() == 12 && trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
            trimmed
                .as_bytes()
                .chunks(2)
                // chunks of a pure-ASCII string are valid UTF-8
                .map(|pair| std::str::from_utf8(pair).unwrap_or(""))
                .collect()
        } else {
            return Err(AccessError::InvalidMac(s.to_string()));
        };

        if octets.len() != 6 || !octets.iter().all(|o| is_hex_pair(o)) {
            return Err(AccessError::InvalidMac(s.to_string()));
        }

        Ok(Self(octets.join(":").to_ascii_lowercase()))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MacAddress {
    type Error = AccessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        let mac: MacAddress = "aa:bb:cc:dd:ee:ff".parse().unwrap();
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_parse_uppercase_normalized() {
        let mac: MacAddress = "AA:BB:CC:DD:EE:FF".parse().unwrap();
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_parse_dash_separated() {
        let mac: MacAddress = "00-11-22-33-44-55".parse().unwrap();
        assert_eq!(mac.as_str(), "00:11:22:33:44:55");
    }

    #[test]
    fn test_parse_mixed_case_and_separators() {
        let mac: MacAddress = "Aa:bB-Cc:Dd-Ee:Ff".parse().unwrap();
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_parse_bare_hex() {
        let mac: MacAddress = "001122334455".parse().unwrap();
        assert_eq!(mac.as_str(), "00:11:22:33:44:55");
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        let mac: MacAddress = "  aa:bb:cc:dd:ee:ff\n".parse().unwrap();
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in [
            "",
            "aa:bb:cc:dd:ee",
            "aa:bb:cc:dd:ee:ff:00",
            "gg:bb:cc:dd:ee:ff",
            "aaa:bb:cc:dd:ee:f",
            "aa.bb.cc.dd.ee.ff",
            "not a mac",
            "192.168.1.50",
            "00112233445",
            "0011223344556",
        ] {
            assert!(bad.parse::<MacAddress>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_rejects_injection_attempts() {
        assert!("aa:bb:cc:dd:ee:ff; rm -rf /".parse::<MacAddress>().is_err());
        assert!("$(whoami)".parse::<MacAddress>().is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        let mac: MacAddress = "AA:BB:CC:DD:EE:FF".parse().unwrap();
        assert_eq!(mac.to_string(), mac.as_str());
    }

    #[test]
    fn test_serde_round_trip() {
        let mac: MacAddress = "aa:bb:cc:dd:ee:ff".parse().unwrap();
        let yaml = serde_yaml::to_string(&mac).unwrap();
        let parsed: MacAddress = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(mac, parsed);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        let result: Result<MacAddress, _> = serde_yaml::from_str("\"nope\"");
        assert!(result.is_err());
    }
}
