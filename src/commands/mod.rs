//! CLI command implementations.

pub mod grant;
pub mod leases;
pub mod neighbors;
pub mod resolve;
pub mod revoke;
pub mod status;
pub mod whitelist;
