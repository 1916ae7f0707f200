use lazy_static::lazy_static;
use num::{BigUint, One, PrimInt, Unsigned};
use regex::Regex;
use std::{
    fmt::{self, Debug, Display},
    net::{Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

use crate::error::ParseError;

pub trait IpByteTypeHelper {
    const MAX: Self;
    const BITS: u8;
    const ONE: Self;
    const ZERO: Self;
}

impl IpByteTypeHelper for u32 {
    const MAX: u32 = u32::MAX;
    const BITS: u8 = u32::BITS as u8;
    const ONE: u32 = 1u32;
    const ZERO: u32 = 0u32;
}

impl IpByteTypeHelper for u128 {
    const MAX: u128 = u128::MAX;
    const BITS: u8 = u128::BITS as u8;
    const ONE: u128 = 1u128;
    const ZERO: u128 = 0u128;
}

/// Unsigned integer wide enough to hold every bit of one address family.
pub trait IpByteType: IpByteTypeHelper + PrimInt + Unsigned + Debug {}
impl<T> IpByteType for T where T: IpByteTypeHelper + PrimInt + Unsigned + Debug {}

pub trait IpTrait<Bits: IpByteType> {
    fn from_bits(bits: Bits) -> Self;
    fn bits(&self) -> Bits;
}

impl IpTrait<u32> for Ipv4Addr {
    fn from_bits(bits: u32) -> Self {
        Ipv4Addr::from(bits)
    }

    fn bits(&self) -> u32 {
        u32::from(*self)
    }
}

impl IpTrait<u128> for Ipv6Addr {
    fn from_bits(bits: u128) -> Self {
        Ipv6Addr::from(bits)
    }

    fn bits(&self) -> u128 {
        u128::from(*self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    pub fn bit_width(self) -> u8 {
        match self {
            AddressFamily::V4 => 32,
            AddressFamily::V6 => 128,
        }
    }

    pub fn version(self) -> u8 {
        match self {
            AddressFamily::V4 => 4,
            AddressFamily::V6 => 6,
        }
    }
}

impl Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IPv{}", self.version())
    }
}

/// Ties an address family to its bit carrier and its `std::net` address type.
pub trait IpInfo {
    type Bits: IpByteType;
    type IpType: IpTrait<Self::Bits> + FromStr + Display + Debug + Copy + Clone;
    const FAMILY: AddressFamily;
    /// Whether the all-ones host address is held back from the usable range.
    const RESERVES_BROADCAST: bool;
}

#[derive(Debug)]
pub struct V4 {}
impl IpInfo for V4 {
    type IpType = Ipv4Addr;
    type Bits = u32;
    const FAMILY: AddressFamily = AddressFamily::V4;
    const RESERVES_BROADCAST: bool = true;
}

#[derive(Debug)]
pub struct V6 {}
impl IpInfo for V6 {
    type IpType = Ipv6Addr;
    type Bits = u128;
    const FAMILY: AddressFamily = AddressFamily::V6;
    // no broadcast in IPv6
    const RESERVES_BROADCAST: bool = false;
}

/// Mask with `cidr` leading one bits. `cidr` must not exceed the family width.
pub fn sn_from_cidr_gen_bits<Ip: IpInfo>(cidr: u8) -> Ip::Bits {
    // shifting by the full width overflows
    if cidr == 0 {
        Ip::Bits::ZERO
    } else {
        Ip::Bits::MAX << usize::from(Ip::Bits::BITS - cidr)
    }
}

pub fn na_from_ip_and_cidr_gen<Ip: IpInfo>(ip: &Ip::IpType, cidr: u8) -> Ip::IpType {
    Ip::IpType::from_bits(ip.bits() & sn_from_cidr_gen_bits::<Ip>(cidr))
}

pub fn bc_from_ip_and_cidr_gen<Ip: IpInfo>(ip: &Ip::IpType, cidr: u8) -> Ip::IpType {
    let host_mask = !sn_from_cidr_gen_bits::<Ip>(cidr);
    Ip::IpType::from_bits(ip.bits() | host_mask)
}

/// A CIDR block of one address family, normalized to its network address.
#[derive(Debug)]
pub struct GenNet<Ip: IpInfo> {
    na: Ip::IpType,
    bc: Ip::IpType,
    host_from: Ip::IpType,
    host_until: Ip::IpType,
    cidr: u8,
}

pub type NetV4 = GenNet<V4>;
pub type NetV6 = GenNet<V6>;

impl<Ip: IpInfo> GenNet<Ip> {
    pub fn new(ip: Ip::IpType, cidr: u8) -> Result<Self, ParseError> {
        if cidr > Ip::Bits::BITS {
            return Err(ParseError::PrefixOutOfRange {
                family: Ip::FAMILY,
                prefix: cidr.to_string(),
                max: Ip::Bits::BITS,
            });
        }

        let na = na_from_ip_and_cidr_gen::<Ip>(&ip, cidr);
        let bc = bc_from_ip_and_cidr_gen::<Ip>(&na, cidr);

        // /31 and /127 have no room to reserve both ends, /32 and /128 hold one address
        let (from, until) = match Ip::Bits::BITS - cidr {
            0 => (na.bits(), na.bits()),
            1 => (na.bits(), bc.bits()),
            _ if Ip::RESERVES_BROADCAST => {
                (na.bits() + Ip::Bits::ONE, bc.bits() - Ip::Bits::ONE)
            }
            _ => (na.bits() + Ip::Bits::ONE, bc.bits()),
        };

        log::trace!("{ip}/{cidr} -> na={na} bc={bc} hosts={from:?}..={until:?}");

        Ok(GenNet {
            na,
            bc,
            host_from: Ip::IpType::from_bits(from),
            host_until: Ip::IpType::from_bits(until),
            cidr,
        })
    }

    pub fn network_address(&self) -> Ip::IpType {
        self.na
    }

    /// Last address of the block. For IPv4 this is the broadcast address.
    pub fn broadcast_address(&self) -> Ip::IpType {
        self.bc
    }

    pub fn host(&self) -> (Ip::IpType, Ip::IpType) {
        (self.host_from, self.host_until)
    }

    pub fn cidr(&self) -> u8 {
        self.cidr
    }

    /// Exact `2^(width - cidr)`; `/0` on IPv6 does not fit in `u128`.
    pub fn total_addresses(&self) -> BigUint {
        BigUint::one() << usize::from(Ip::Bits::BITS - self.cidr)
    }
}

impl<Ip: IpInfo> Display for GenNet<Ip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.na, self.cidr)
    }
}

pub trait IpParse: Sized {
    fn parse(text: &str) -> Result<Self, ParseError>;
}

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^(?P<ip>[^/]*)/(?P<cidr>[0-9]+)$").expect("Invalid CIDR regex");
}

impl<Ip: IpInfo> IpParse for GenNet<Ip> {
    fn parse(text: &str) -> Result<Self, ParseError> {
        let caps = CIDR_RE
            .captures(text)
            .ok_or_else(|| ParseError::MalformedCidr {
                input: text.to_owned(),
            })?;
        let (ip, cidr) = (&caps["ip"], &caps["cidr"]);

        let addr = ip
            .parse::<Ip::IpType>()
            .map_err(|_| ParseError::InvalidAddress {
                family: Ip::FAMILY,
                address: ip.to_owned(),
            })?;

        // only digits got here, so a failed u8 parse means the value is too big
        let cidr = cidr
            .parse::<u8>()
            .map_err(|_| ParseError::PrefixOutOfRange {
                family: Ip::FAMILY,
                prefix: cidr.to_owned(),
                max: Ip::Bits::BITS,
            })?;

        GenNet::new(addr, cidr)
    }
}
