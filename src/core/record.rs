use std::net::Ipv6Addr;

/// Type-specific payload of a DNS record. Each variant carries only the
/// fields that are valid for its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A { content: String },
    Aaaa { content: String },
    Cname { content: String },
    Mx { content: String, priority: u16 },
    Txt { content: String },
}

impl RecordData {
    pub fn type_name(&self) -> &'static str {
        match self {
            RecordData::A { .. } => "A",
            RecordData::Aaaa { .. } => "AAAA",
            RecordData::Cname { .. } => "CNAME",
            RecordData::Mx { .. } => "MX",
            RecordData::Txt { .. } => "TXT",
        }
    }

    pub fn content(&self) -> &str {
        match self {
            RecordData::A { content }
            | RecordData::Aaaa { content }
            | RecordData::Cname { content }
            | RecordData::Mx { content, .. }
            | RecordData::Txt { content } => content,
        }
    }

    pub fn priority(&self) -> Option<u16> {
        match self {
            RecordData::Mx { priority, .. } => Some(*priority),
            _ => None,
        }
    }
}

/// A DNS record as tracked in a local zone file. Local records never carry
/// a remote id; `proxied` is always false when parsed from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub ttl: u32,
    pub proxied: bool,
    pub data: RecordData,
}

/// A DNS record as returned by the provider. The type stays a raw string so
/// records of unsupported types survive long enough to be reported during
/// fetch or deleted during sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRecord {
    pub id: String,
    pub rtype: String,
    pub name: String,
    pub content: String,
    pub priority: Option<u16>,
    pub ttl: u32,
    pub proxied: bool,
}

impl RemoteRecord {
    /// Converts to a typed local record. Returns `None` when the type is not
    /// one of the five supported ones, when an MX record has no priority, or
    /// when AAAA content is not a parseable IPv6 address. AAAA content is
    /// normalized to the fully-exploded lowercase form.
    pub fn to_record(&self) -> Option<Record> {
        let data = match self.rtype.as_str() {
            "A" => RecordData::A {
                content: self.content.clone(),
            },
            "AAAA" => RecordData::Aaaa {
                content: explode(self.content.parse().ok()?),
            },
            "CNAME" => RecordData::Cname {
                content: self.content.clone(),
            },
            "MX" => RecordData::Mx {
                content: self.content.clone(),
                priority: self.priority?,
            },
            "TXT" => RecordData::Txt {
                content: self.content.clone(),
            },
            _ => return None,
        };
        Some(Record {
            name: self.name.clone(),
            ttl: self.ttl,
            proxied: self.proxied,
            data,
        })
    }
}

/// A hosted DNS zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// Renders an IPv6 address as eight 4-hex-digit groups joined by colons.
pub fn explode(addr: Ipv6Addr) -> String {
    addr.segments()
        .iter()
        .map(|segment| format!("{segment:04x}"))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(rtype: &str, content: &str) -> RemoteRecord {
        RemoteRecord {
            id: "r1".to_string(),
            rtype: rtype.to_string(),
            name: "www.example.com".to_string(),
            content: content.to_string(),
            priority: None,
            ttl: 300,
            proxied: false,
        }
    }

    #[test]
    fn converts_a_record() {
        let record = remote("A", "1.2.3.4").to_record().unwrap();
        assert_eq!(record.data.type_name(), "A");
        assert_eq!(record.data.content(), "1.2.3.4");
        assert_eq!(record.ttl, 300);
        assert!(!record.proxied);
    }

    #[test]
    fn aaaa_content_is_exploded_on_conversion() {
        let record = remote("AAAA", "2001:db8::1").to_record().unwrap();
        assert_eq!(
            record.data.content(),
            "2001:0db8:0000:0000:0000:0000:0000:0001"
        );
    }

    #[test]
    fn aaaa_with_invalid_address_does_not_convert() {
        assert!(remote("AAAA", "not-an-address").to_record().is_none());
    }

    #[test]
    fn mx_requires_priority() {
        let mut mx = remote("MX", "mail.example.com");
        assert!(mx.to_record().is_none());

        mx.priority = Some(10);
        let record = mx.to_record().unwrap();
        assert_eq!(record.data.priority(), Some(10));
    }

    #[test]
    fn unsupported_type_does_not_convert() {
        assert!(
            remote("SRV", "0 5 5060 sip.example.com")
                .to_record()
                .is_none()
        );
        assert!(remote("NS", "ns1.example.com").to_record().is_none());
    }

    #[test]
    fn explode_pads_every_group() {
        assert_eq!(
            explode("::1".parse().unwrap()),
            "0000:0000:0000:0000:0000:0000:0000:0001"
        );
        assert_eq!(
            explode("fe80::a:b".parse().unwrap()),
            "fe80:0000:0000:0000:0000:0000:000a:000b"
        );
    }
}
