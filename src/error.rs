//! Error types for macgate.

use thiserror::Error;

/// External collaborators that access-control operations depend on.
///
/// Used to attribute an [`AccessError::ExternalTool`] failure to the
/// collaborator that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    /// The OS neighbor (ARP) table command.
    NeighborTable,
    /// The DHCP lease file.
    LeaseFile,
    /// The firewall whitelist tool.
    Whitelist,
}

impl std::fmt::Display for Collaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Collaborator::NeighborTable => "neighbor table",
            Collaborator::LeaseFile => "lease file",
            Collaborator::Whitelist => "whitelist tool",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum AccessError {
    /// Input does not match the six-octet colon-hex MAC grammar.
    /// Rejected before any external call is made.
    #[error("Invalid MAC address format: {0}")]
    InvalidMac(String),

    /// No resolution strategy produced a MAC for the client IP.
    /// Not fatal by itself; the caller decides the fallback policy.
    #[error("Could not determine a MAC address for IP {ip}")]
    MacResolution { ip: String },

    /// A collaborator could not be invoked, timed out, or exited with
    /// failure. Always surfaced for mutating operations.
    #[error("{tool} error: {reason}")]
    ExternalTool { tool: Collaborator, reason: String },
}

impl AccessError {
    /// Build an [`AccessError::ExternalTool`] from any error-ish reason.
    pub fn external(tool: Collaborator, reason: impl std::fmt::Display) -> Self {
        Self::ExternalTool {
            tool,
            reason: reason.to_string(),
        }
    }
}
