//! Local/remote record diffing.

use crate::core::record::{Record, RecordData, RemoteRecord};
use std::net::IpAddr;

/// The operations needed to make the remote record set equal to the local
/// one. Creations and deletions are independent and unordered.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Plan {
    pub creates: Vec<Record>,
    pub deletes: Vec<RemoteRecord>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.creates.is_empty() && self.deletes.is_empty()
    }
}

/// Greedy one-pass matching: each local record consumes the first remote
/// record it matches. Unmatched local records are queued for creation,
/// unconsumed remote records for deletion. With duplicate records this pairs
/// in encounter order rather than optimally; accepted.
pub fn diff(local: Vec<Record>, remote: Vec<RemoteRecord>) -> Plan {
    let mut consumed = vec![false; remote.len()];
    let mut creates = Vec::new();

    for record in local {
        let matched = remote
            .iter()
            .enumerate()
            .find(|(i, candidate)| !consumed[*i] && matches(&record, candidate));
        match matched {
            Some((i, _)) => consumed[i] = true,
            None => creates.push(record),
        }
    }

    let deletes = remote
        .into_iter()
        .zip(consumed)
        .filter_map(|(record, used)| (!used).then_some(record))
        .collect();

    Plan { creates, deletes }
}

/// Type-aware record equality used to decide "already in sync". AAAA content
/// compares as parsed addresses so textual variants of one address are
/// equal; MX compares content and priority; other types compare content as
/// strings.
pub fn matches(local: &Record, remote: &RemoteRecord) -> bool {
    if local.data.type_name() != remote.rtype
        || local.name != remote.name
        || local.ttl != remote.ttl
        || local.proxied != remote.proxied
    {
        return false;
    }
    match &local.data {
        RecordData::Aaaa { content } => ip_equal(content, &remote.content),
        RecordData::Mx { content, priority } => {
            *content == remote.content && Some(*priority) == remote.priority
        }
        RecordData::A { content }
        | RecordData::Cname { content }
        | RecordData::Txt { content } => *content == remote.content,
    }
}

fn ip_equal(a: &str, b: &str) -> bool {
    match (a.parse::<IpAddr>(), b.parse::<IpAddr>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
