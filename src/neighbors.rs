//! Neighbor (ARP) table parsing.
//!
//! Parses the `(<ip>) at <mac>` display format that `arp -an` emits.
//! Matching is pattern-based rather than positional: column layout varies
//! between platforms, but the parenthesized IP and the 17-character
//! colon-hex MAC do not. Entries are ephemeral by nature; the table is
//! re-read on every query.

use crate::mac::MacAddress;

/// One currently-observed IP-to-MAC mapping on the local link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborEntry {
    pub ip: String,
    pub mac: MacAddress,
    pub interface: String,
}

/// Parse neighbor-table output into entries; non-matching lines are
/// ignored. MAC matching is case-insensitive, always normalized to
/// lowercase.
pub fn parse_neighbors(text: &str) -> Vec<NeighborEntry> {
    text.lines().filter_map(parse_line).collect()
}

/// Match one line of the form `? (192.168.1.50) at aa:bb:cc:dd:ee:ff [ether] on br-lan`.
///
/// The interface is the last whitespace-delimited token. Lines with an
/// unresolved neighbor (`at <incomplete>`) carry no MAC and are skipped.
fn parse_line(line: &str) -> Option<NeighborEntry> {
    let open = line.find('(')?;
    let close = open + line[open..].find(')')?;
    let ip = line[open + 1..close].trim();
    if ip.is_empty() || !ip.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }

    let rest = line[close + 1..].trim_start();
    let mac_token = rest.strip_prefix("at ")?.split_whitespace().next()?;
    if mac_token.len() != 17 {
        return None;
    }
    let mac: MacAddress = mac_token.parse().ok()?;

    let interface = line.split_whitespace().last()?;

    Some(NeighborEntry {
        ip: ip.to_string(),
        mac,
        interface: interface.to_string(),
    })
}
