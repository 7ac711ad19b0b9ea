//! ISC-style DHCP lease file parsing.
//!
//! A lease file is an append-style log: renewals add new blocks for the
//! same IP rather than rewriting old ones, so the same address can appear
//! many times with different states. The parser keeps file order and does
//! not deduplicate; callers that want "the current binding" apply the
//! last-active-wins rule at lookup time.

use crate::mac::MacAddress;

/// Binding state of a lease block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// The lease is currently bound to the client.
    Active,
    /// Any other state (free, expired, abandoned, ...).
    Other,
}

impl BindingState {
    fn from_keyword(s: &str) -> Self {
        if s == "active" {
            Self::Active
        } else {
            Self::Other
        }
    }
}

/// One parsed lease block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseRecord {
    pub ip: String,
    pub mac: MacAddress,
    pub binding_state: BindingState,
}

/// Parse a lease file blob into records, in file order.
///
/// Blocks are delimited by the `lease ` marker; the IP is the text before
/// the first `{` on the header line. Within a block, `hardware ethernet`
/// and `binding state` lines contribute the MAC and state (third
/// whitespace token, trailing `;` stripped). A block missing either piece,
/// or carrying an unparseable MAC, contributes nothing; malformed text is
/// never an error.
pub fn parse_leases(text: &str) -> Vec<LeaseRecord> {
    let mut records = Vec::new();

    for block in text.split("lease ").skip(1) {
        let header = match block.lines().next() {
            Some(line) => line,
            None => continue,
        };
        let ip = header.split('{').next().unwrap_or("").trim();
        if ip.is_empty() {
            continue;
        }

        let mut mac: Option<MacAddress> = None;
        let mut state: Option<BindingState> = None;

        for line in block.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with("hardware ethernet") {
                mac = trimmed
                    .split_whitespace()
                    .nth(2)
                    .and_then(|tok| tok.trim_end_matches(';').parse().ok());
            } else if trimmed.starts_with("binding state") {
                state = trimmed
                    .split_whitespace()
                    .nth(2)
                    .map(|tok| BindingState::from_keyword(tok.trim_end_matches(';')));
            }
        }

        if let (Some(mac), Some(binding_state)) = (mac, state) {
            records.push(LeaseRecord {
                ip: ip.to_string(),
                mac,
                binding_state,
            });
        }
    }

    records
}

/// The MAC of the last active lease block for `ip`, in file order.
///
/// Last wins because renewals append: the most recent block for an IP is
/// the one the DHCP server currently honors.
pub fn find_active_mac<'a>(records: &'a [LeaseRecord], ip: &str) -> Option<&'a MacAddress> {
    records
        .iter()
        .rev()
        .find(|r| r.ip == ip && r.binding_state == BindingState::Active)
        .map(|r| &r.mac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_active_block() {
        let blob = "lease 10.0.0.5 {\n  hardware ethernet 00:11:22:33:44:55;\n  binding state active;\n}";
        let records = parse_leases(blob);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ip, "10.0.0.5");
        assert_eq!(records[0].mac.as_str(), "00:11:22:33:44:55");
        assert_eq!(records[0].binding_state, BindingState::Active);
    }

    #[test]
    fn test_block_missing_binding_state_is_dropped() {
        let blob = "lease 10.0.0.5 {\n  hardware ethernet 00:11:22:33:44:55;\n}";
        assert!(parse_leases(blob).is_empty());
    }

    #[test]
    fn test_block_missing_mac_is_dropped() {
        let blob = "lease 10.0.0.5 {\n  binding state active;\n}";
        assert!(parse_leases(blob).is_empty());
    }

    #[test]
    fn test_non_active_state_is_recorded_as_other() {
        let blob = "lease 10.0.0.5 {\n  hardware ethernet 00:11:22:33:44:55;\n  binding state free;\n}";
        let records = parse_leases(blob);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].binding_state, BindingState::Other);
    }

    #[test]
    fn test_unparseable_mac_drops_block() {
        let blob = "lease 10.0.0.5 {\n  hardware ethernet zz:11:22:33:44:55;\n  binding state active;\n}";
        assert!(parse_leases(blob).is_empty());
    }

    #[test]
    fn test_file_order_preserved_for_renewal_history() {
        let blob = "\
lease 10.0.0.5 {
  hardware ethernet 00:11:22:33:44:55;
  binding state active;
}
lease 10.0.0.6 {
  hardware ethernet aa:aa:aa:aa:aa:aa;
  binding state free;
}
lease 10.0.0.5 {
  hardware ethernet 66:77:88:99:aa:bb;
  binding state active;
}
";
        let records = parse_leases(blob);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].mac.as_str(), "00:11:22:33:44:55");
        assert_eq!(records[2].mac.as_str(), "66:77:88:99:aa:bb");
    }

    #[test]
    fn test_find_active_mac_last_active_wins() {
        let blob = "\
lease 10.0.0.5 {
  hardware ethernet 00:11:22:33:44:55;
  binding state active;
}
lease 10.0.0.5 {
  hardware ethernet 66:77:88:99:aa:bb;
  binding state active;
}
";
        let records = parse_leases(blob);
        let mac = find_active_mac(&records, "10.0.0.5").unwrap();
        assert_eq!(mac.as_str(), "66:77:88:99:aa:bb");
    }

    #[test]
    fn test_find_active_mac_skips_non_active_tail() {
        // Latest block released the lease; the earlier active one still wins.
        let blob = "\
lease 10.0.0.5 {
  hardware ethernet 00:11:22:33:44:55;
  binding state active;
}
lease 10.0.0.5 {
  hardware ethernet 66:77:88:99:aa:bb;
  binding state free;
}
";
        let records = parse_leases(blob);
        let mac = find_active_mac(&records, "10.0.0.5").unwrap();
        assert_eq!(mac.as_str(), "00:11:22:33:44:55");
    }

    #[test]
    fn test_find_active_mac_unknown_ip() {
        let records = parse_leases("lease 10.0.0.5 {\n  hardware ethernet 00:11:22:33:44:55;\n  binding state active;\n}");
        assert!(find_active_mac(&records, "10.0.0.99").is_none());
    }

    #[test]
    fn test_malformed_text_never_panics() {
        for garbage in [
            "",
            "lease ",
            "lease {\n}",
            "lease 10.0.0.5",
            "hardware ethernet 00:11:22:33:44:55;",
            "lease 10.0.0.5 {\n  hardware ethernet\n  binding state\n}",
            "{{{{}}}} lease lease lease",
        ] {
            let _ = parse_leases(garbage);
        }
    }

    #[test]
    fn test_mac_normalized_to_lowercase() {
        let blob = "lease 10.0.0.5 {\n  hardware ethernet AA:BB:CC:DD:EE:FF;\n  binding state active;\n}";
        let records = parse_leases(blob);
        assert_eq!(records[0].mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }
}
