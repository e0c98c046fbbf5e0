//! IP address, CIDR, range and port checks.

use std::net::{IpAddr, Ipv4Addr};

use super::rules::{impl_rule_name_traits, Comparator, Rule, RuleSet};
use crate::validator::{string_value, ValidateRequest, ValidateResponse, Validator};

/// A network notation the value must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NetworkType {
    /// `192.168.0.1`
    Ipv4,
    /// `192.168.0.1/24`
    Ipv4WithCidr,
    /// `192.168.0.1/255.255.255.0`
    Ipv4WithNetmask,
    /// `192.168.0.1-192.168.0.100`
    Ipv4Range,
    /// An IPv4 address in `10/8`, `172.16/12` or `192.168/16`.
    Rfc1918,
    /// `8080`
    #[cfg_attr(feature = "serde", serde(rename = "tcpudp_port"))]
    TcpUdpPort,
    /// `1-65535`
    #[cfg_attr(feature = "serde", serde(rename = "tcpudp_port_range"))]
    TcpUdpPortRange,
}

type Failure = (&'static str, String);

fn parse_ipv4(text: &str, raw: &str) -> Result<Ipv4Addr, Failure> {
    match text.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => Ok(ip),
        Ok(IpAddr::V6(_)) => Err(("IP address is not IPV4", format!("invalid value: {raw}"))),
        Err(_) => Err(("Failed to parse IPV4 address", format!("invalid value: {raw}"))),
    }
}

fn is_netmask(mask: Ipv4Addr) -> bool {
    let bits = u32::from(mask);
    bits != 0 && bits.leading_ones() + bits.trailing_zeros() == 32
}

fn parse_port(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

fn port_in_range(port: i64) -> bool {
    (1..=65535).contains(&port)
}

impl NetworkType {
    fn check(self, text: &str, raw: &str) -> Result<(), Failure> {
        match self {
            NetworkType::Ipv4 => parse_ipv4(text, raw).map(drop),
            NetworkType::Ipv4WithCidr => {
                let parsed = text.split_once('/').and_then(|(ip, prefix)| {
                    let bits = (!prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()))
                        .then(|| prefix.parse::<u8>().ok())
                        .flatten()?;
                    Some((ip.parse::<IpAddr>().ok()?, bits))
                });
                match parsed {
                    Some((IpAddr::V4(_), bits)) if bits <= 32 => Ok(()),
                    Some((IpAddr::V6(_), bits)) if bits <= 128 => {
                        Err(("IP address is not IPV4", format!("invalid value: {raw}")))
                    }
                    _ => Err((
                        "Failed to parse IPV4 address with CIDR",
                        format!("invalid value: {raw}"),
                    )),
                }
            }
            NetworkType::Ipv4WithNetmask => {
                let parts: Vec<&str> = text.split('/').collect();
                let [ip, mask] = parts[..] else {
                    return Err((
                        "Failed to parse IPV4 address with Netmask",
                        format!("invalid value: {raw}"),
                    ));
                };
                parse_ipv4(ip, raw)?;
                match mask.parse::<Ipv4Addr>() {
                    Ok(mask) if is_netmask(mask) => Ok(()),
                    _ => Err(("Failed to parse Netmask", format!("invalid value: {raw}"))),
                }
            }
            NetworkType::Ipv4Range => {
                let parts: Vec<&str> = text.split('-').collect();
                let [first, second] = parts[..] else {
                    return Err(("Invalid IPV4 range", format!("invalid value: {raw}")));
                };
                let Ok(first) = first.parse::<Ipv4Addr>() else {
                    return Err((
                        "Failed to parse IPV4 address",
                        format!("the first part of the range is not a valid IPV4 address: {raw}"),
                    ));
                };
                let Ok(second) = second.parse::<Ipv4Addr>() else {
                    return Err((
                        "Failed to parse IPV4 address",
                        format!("the second part of the range is not a valid IPV4 address: {raw}"),
                    ));
                };
                if u32::from(first) >= u32::from(second) {
                    return Err((
                        "Invalid IPV4 range",
                        format!("the first part of the range is not less than the second part: {raw}"),
                    ));
                }
                Ok(())
            }
            NetworkType::Rfc1918 => {
                let ip = parse_ipv4(text, raw)?;
                if ip.is_private() {
                    Ok(())
                } else {
                    Err(("IP address is not RFC1918", format!("invalid value: {raw}")))
                }
            }
            NetworkType::TcpUdpPort => {
                let Some(port) = parse_port(text) else {
                    return Err((
                        "Invalid TCP/UDP port",
                        format!("the value is not a valid TCP/UDP port: {raw}"),
                    ));
                };
                if !port_in_range(port) {
                    return Err((
                        "Invalid TCP/UDP port",
                        format!("the port must be between 1 and 65535: {raw}"),
                    ));
                }
                Ok(())
            }
            NetworkType::TcpUdpPortRange => {
                let parts: Vec<&str> = text.split('-').collect();
                let [start, end] = parts[..] else {
                    return Err((
                        "Invalid TCP/UDP port range",
                        "the value must be in the format of `1-65535`".to_string(),
                    ));
                };
                let Some(start) = parse_port(start) else {
                    return Err((
                        "Invalid TCP/UDP port",
                        format!("the first part of the range is not a valid TCP/UDP port: {raw}"),
                    ));
                };
                let Some(end) = parse_port(end) else {
                    return Err((
                        "Invalid TCP/UDP port",
                        format!("the second part of the range is not a valid TCP/UDP port: {raw}"),
                    ));
                };
                if !port_in_range(start) || !port_in_range(end) {
                    return Err((
                        "Invalid TCP/UDP port",
                        format!("the port must be between 1 and 65535: {raw}"),
                    ));
                }
                if start >= end {
                    return Err((
                        "Invalid TCP/UDP port range",
                        format!("the first part of the range is not less than the second part: {raw}"),
                    ));
                }
                Ok(())
            }
        }
    }

    fn example(self) -> &'static str {
        match self {
            NetworkType::Ipv4 => "192.168.0.1",
            NetworkType::Ipv4WithCidr => "192.168.0.1/24",
            NetworkType::Ipv4WithNetmask => "192.168.0.1/255.255.255.0",
            NetworkType::Ipv4Range => "192.168.0.1-192.168.0.100",
            NetworkType::Rfc1918 => "10.0.0.1",
            NetworkType::TcpUdpPort => "8080",
            NetworkType::TcpUdpPortRange => "1-65535",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NetworkType::Ipv4 => "a valid IPV4 address",
            NetworkType::Ipv4WithCidr => "a valid IPV4 address with CIDR",
            NetworkType::Ipv4WithNetmask => "a valid IPV4 address with Netmask",
            NetworkType::Ipv4Range => "a valid IPV4 address range",
            NetworkType::Rfc1918 => "a valid RFC1918 IPV4 address",
            NetworkType::TcpUdpPort => "a valid TCP/UDP port",
            NetworkType::TcpUdpPortRange => "a valid TCP/UDP port range",
        }
    }
}

impl Validator for NetworkType {
    fn description(&self) -> String {
        format!("{} (Ex: {})", self.label(), self.example())
    }

    fn markdown_description(&self) -> String {
        format!("{} (Ex: `{}`)", self.label(), self.example())
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        let Some(text) = string_value(req, resp) else {
            return;
        };
        if let Err((summary, detail)) = self.check(text, &req.value.to_string()) {
            resp.diagnostics
                .add_attribute_error(req.path.clone(), summary, detail);
        }
    }
}

impl Rule for NetworkType {
    const FAMILY: &'static str = "network";
    const ALL: &'static [Self] = &[
        NetworkType::Ipv4,
        NetworkType::Ipv4WithCidr,
        NetworkType::Ipv4WithNetmask,
        NetworkType::Ipv4Range,
        NetworkType::Rfc1918,
        NetworkType::TcpUdpPort,
        NetworkType::TcpUdpPortRange,
    ];

    fn name(&self) -> &'static str {
        match self {
            NetworkType::Ipv4 => "ipv4",
            NetworkType::Ipv4WithCidr => "ipv4_with_cidr",
            NetworkType::Ipv4WithNetmask => "ipv4_with_netmask",
            NetworkType::Ipv4Range => "ipv4_range",
            NetworkType::Rfc1918 => "rfc1918",
            NetworkType::TcpUdpPort => "tcpudp_port",
            NetworkType::TcpUdpPortRange => "tcpudp_port_range",
        }
    }
}

impl_rule_name_traits!(NetworkType);

/// Apply several [`NetworkType`] checks joined by a [`Comparator`].
///
/// ```rust
/// use attr_validators::prelude::*;
/// use attr_validators::string::{Comparator, IsNetwork, NetworkType};
///
/// let v = IsNetwork::new([NetworkType::Ipv4WithCidr, NetworkType::Ipv4Range], Comparator::Any);
/// let ok = Value::string("10.0.0.0/8");
/// assert!(v.check(&ValidateRequest::new(&ok)).is_success());
///
/// let bad = Value::string("10.0.0.0");
/// assert!(v.check(&ValidateRequest::new(&bad)).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsNetwork {
    rules: RuleSet<NetworkType>,
}

impl IsNetwork {
    /// Combine `rules` with `comparator`.
    pub fn new(rules: impl IntoIterator<Item = NetworkType>, comparator: Comparator) -> Self {
        Self {
            rules: RuleSet::new(rules, comparator),
        }
    }

    /// Build from rule names such as `ipv4_with_cidr`.
    pub fn from_names<I, S>(names: I, comparator: Comparator) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rules: RuleSet::from_names(names, comparator),
        }
    }

    /// The configured rules.
    pub fn rules(&self) -> &RuleSet<NetworkType> {
        &self.rules
    }

    fn header(&self) -> &'static str {
        match (self.rules.len(), self.rules.comparator()) {
            (0, _) => "",
            (1, _) => "The value must be ",
            (_, Comparator::Any) => "The value must be at least one of the following :\n",
            (_, Comparator::All) => "The value must be all of the following :\n",
        }
    }
}

impl Validator for IsNetwork {
    fn description(&self) -> String {
        format!("{}{}", self.header(), self.rules.descriptions(false).join(", "))
    }

    fn markdown_description(&self) -> String {
        let rules = self.rules.descriptions(true);
        let body = if rules.len() > 1 {
            rules
                .iter()
                .map(|rule| format!("  - {rule}"))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            rules.concat()
        };
        format!("{}{}", self.header(), body)
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        self.rules.validate(req, resp);
    }
}

/// Any IPv4 or IPv6 literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsIp;

impl Validator for IsIp {
    fn description(&self) -> String {
        "must be a valid IP address".to_string()
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        let Some(text) = string_value(req, resp) else {
            return;
        };
        if text.parse::<IpAddr>().is_err() {
            resp.diagnostics.add_attribute_error(
                req.path.clone(),
                "Failed to parse IP address",
                format!("invalid value: {}", req.value),
            );
        }
    }
}
