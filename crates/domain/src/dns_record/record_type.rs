use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Record types a zone can carry through the management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    SRV,
    NAPTR,
    DS,
    SSHFP,
    DNSKEY,
    TLSA,
    SVCB,
    HTTPS,
    CAA,
    ANAME,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::SOA => "SOA",
            RecordType::PTR => "PTR",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::SRV => "SRV",
            RecordType::NAPTR => "NAPTR",
            RecordType::DS => "DS",
            RecordType::SSHFP => "SSHFP",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::TLSA => "TLSA",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
            RecordType::CAA => "CAA",
            RecordType::ANAME => "ANAME",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::DNSKEY => 48,
            RecordType::TLSA => 52,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::CAA => 257,
            RecordType::ANAME => 32769,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        Self::all().iter().copied().find(|rt| rt.to_u16() == code)
    }

    pub fn all() -> &'static [RecordType] {
        use RecordType::*;
        &[
            A, AAAA, NS, CNAME, SOA, PTR, MX, TXT, SRV, NAPTR, DS, SSHFP, DNSKEY, TLSA, SVCB,
            HTTPS, CAA, ANAME,
        ]
    }

    /// Types whose content follows the service-binding parameter grammar.
    pub fn is_svcb_family(&self) -> bool {
        matches!(self, RecordType::SVCB | RecordType::HTTPS)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|rt| rt.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::InvalidRecordType(s.to_string()))
    }
}
