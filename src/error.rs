use thiserror::Error;

use crate::net::AddressFamily;

/// Everything that can be wrong with a CIDR argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed CIDR '{input}', expected <address>/<prefix length>")]
    MalformedCidr { input: String },
    #[error("'{address}' is not a valid {family} address")]
    InvalidAddress {
        family: AddressFamily,
        address: String,
    },
    #[error("prefix length /{prefix} is out of range for {family} (0-{max})")]
    PrefixOutOfRange {
        family: AddressFamily,
        prefix: String,
        max: u8,
    },
}
