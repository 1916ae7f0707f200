use num::BigUint;

use crate::error::ParseError;
use crate::net::{self, AddressFamily, GenNet, IpInfo, IpParse};

/// Address family requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FamilyHint {
    V4,
    V6,
    #[default]
    Unspecified,
}

impl FamilyHint {
    /// No explicit family means IPv6, not IPv4.
    pub fn resolve(self) -> AddressFamily {
        match self {
            FamilyHint::V4 => AddressFamily::V4,
            FamilyHint::V6 | FamilyHint::Unspecified => AddressFamily::V6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    pub version: u8,
    pub network_cidr: String,
    pub network_address: String,
    /// All host bits set; the broadcast address on IPv4.
    pub last_address: String,
    pub first_usable: Option<String>,
    pub last_usable: Option<String>,
    pub total_addresses: BigUint,
}

impl<Ip: IpInfo> From<&GenNet<Ip>> for SubnetReport {
    fn from(network: &GenNet<Ip>) -> Self {
        let (host_from, host_until) = network.host();
        SubnetReport {
            version: Ip::FAMILY.version(),
            network_cidr: network.to_string(),
            network_address: network.network_address().to_string(),
            last_address: network.broadcast_address().to_string(),
            first_usable: Some(host_from.to_string()),
            last_usable: Some(host_until.to_string()),
            total_addresses: network.total_addresses(),
        }
    }
}

impl SubnetReport {
    pub fn family(&self) -> AddressFamily {
        if self.version == 4 {
            AddressFamily::V4
        } else {
            AddressFamily::V6
        }
    }
}

pub fn parse_cidr<Ip: IpInfo>(input: &str) -> Result<GenNet<Ip>, ParseError> {
    GenNet::<Ip>::parse(input)
}

pub fn compute(input: &str, hint: FamilyHint) -> Result<SubnetReport, ParseError> {
    let family = hint.resolve();
    log::debug!(
        "computing {input} as {family} ({} bit, hint {hint:?})",
        family.bit_width()
    );

    let report = match family {
        AddressFamily::V4 => SubnetReport::from(&parse_cidr::<net::V4>(input)?),
        AddressFamily::V6 => SubnetReport::from(&parse_cidr::<net::V6>(input)?),
    };

    log::info!("{input} -> {}", report.network_cidr);
    Ok(report)
}
