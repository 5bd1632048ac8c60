//! Compact zone-file line encoding.
//!
//! One record per line: a single-character type sigil, the record name, then
//! colon-separated type-specific fields, then an optional trailing TTL.
//! Lines that are blank or start with `#` are skipped.

use crate::core::record::{Record, RecordData, RemoteRecord};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LineError {
    #[error("unknown record sigil '{0}'")]
    UnknownSigil(char),
    #[error("missing {0} field")]
    MissingField(&'static str),
    #[error("invalid integer in {field} field: {value}")]
    InvalidInteger { field: &'static str, value: String },
    #[error("TXT content must start with '\"'")]
    MissingQuote,
    #[error("TXT content missing closing '\"'")]
    UnterminatedQuote,
    #[error("invalid AAAA address: {0}")]
    InvalidAddress(String),
}

/// A malformed line, with its 1-based position in the file.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct ZoneFileError {
    pub line: usize,
    #[source]
    pub source: LineError,
}

/// Parses a whole zone file. Any malformed line aborts the parse.
pub fn parse_zone_file(input: &str) -> Result<Vec<Record>, ZoneFileError> {
    let mut records = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let record = decode_line(line).map_err(|source| ZoneFileError {
            line: index + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Decodes one non-blank, non-comment line into a record.
pub fn decode_line(line: &str) -> Result<Record, LineError> {
    let mut chars = line.chars();
    let sigil = chars.next().ok_or(LineError::MissingField("sigil"))?;
    let mut fields = chars.as_str().split(':');
    // split always yields at least one item
    let name = fields.next().unwrap_or_default().to_string();

    let data = match sigil {
        '+' => RecordData::A {
            content: next_field(&mut fields, "content")?.to_string(),
        },
        '6' => RecordData::Aaaa {
            content: regroup_aaaa(next_field(&mut fields, "content")?)?,
        },
        'C' => RecordData::Cname {
            content: next_field(&mut fields, "content")?.to_string(),
        },
        '@' => {
            let content = next_field(&mut fields, "content")?.to_string();
            let priority = parse_int(next_field(&mut fields, "priority")?, "priority")?;
            RecordData::Mx { content, priority }
        }
        'T' => RecordData::Txt {
            content: quoted_content(&mut fields)?,
        },
        other => return Err(LineError::UnknownSigil(other)),
    };

    // Anything left after the type-specific fields is the TTL; absence
    // means 1, the provider's "automatic" sentinel.
    let ttl = match fields.next() {
        Some(field) => parse_int(field, "ttl")?,
        None => 1,
    };

    Ok(Record {
        name,
        ttl,
        proxied: false,
        data,
    })
}

/// Renders the record line for a typed record. TTL 1 is omitted.
pub fn encode_line(record: &Record) -> String {
    let mut line = format!(
        "{}{}{}",
        sigil(&record.data),
        record.name,
        encode_fields(&record.data)
    );
    if record.ttl != 1 {
        line.push(':');
        line.push_str(&record.ttl.to_string());
    }
    line
}

/// Renders the fetch-output block for a remote record: an id comment, a
/// `# Proxied` marker (with the record line itself commented out) when the
/// record is proxied, then the record line. Returns `None` when the record
/// cannot be expressed in the local encoding.
pub fn encode_remote(remote: &RemoteRecord) -> Option<String> {
    let record = remote.to_record()?;
    let mut out = format!("# Record ID: {}\n", remote.id);
    if remote.proxied {
        out.push_str("# Proxied\n#");
    }
    out.push_str(&encode_line(&record));
    Some(out)
}

fn sigil(data: &RecordData) -> char {
    match data {
        RecordData::A { .. } => '+',
        RecordData::Aaaa { .. } => '6',
        RecordData::Cname { .. } => 'C',
        RecordData::Mx { .. } => '@',
        RecordData::Txt { .. } => 'T',
    }
}

fn encode_fields(data: &RecordData) -> String {
    match data {
        RecordData::A { content } | RecordData::Cname { content } => format!(":{content}"),
        // AAAA content is the exploded form, so stripping colons recovers
        // the 32-hex-digit encoding.
        RecordData::Aaaa { content } => format!(":{}", content.replace(':', "")),
        RecordData::Mx { content, priority } => format!(":{content}:{priority}"),
        RecordData::Txt { content } => format!(":\"{content}\""),
    }
}

fn next_field<'a, I>(fields: &mut I, name: &'static str) -> Result<&'a str, LineError>
where
    I: Iterator<Item = &'a str>,
{
    fields.next().ok_or(LineError::MissingField(name))
}

fn parse_int<T: std::str::FromStr>(value: &str, field: &'static str) -> Result<T, LineError> {
    value.parse().map_err(|_| LineError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

/// Regroups the 32-hex-digit AAAA content into the canonical expanded IPv6
/// text form (8 groups of 4 digits joined by colons).
fn regroup_aaaa(content: &str) -> Result<String, LineError> {
    if content.len() != 32 || !content.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(LineError::InvalidAddress(content.to_string()));
    }
    Ok((0..32)
        .step_by(4)
        .map(|i| &content[i..i + 4])
        .collect::<Vec<_>>()
        .join(":"))
}

/// Consumes colon-split fragments of a quoted TXT value, rejoining them
/// until one ends with the closing quote, then strips both quotes.
fn quoted_content<'a, I>(fields: &mut I) -> Result<String, LineError>
where
    I: Iterator<Item = &'a str>,
{
    let first = fields.next().ok_or(LineError::MissingField("content"))?;
    if !first.starts_with('"') {
        return Err(LineError::MissingQuote);
    }
    let mut content = first.to_string();
    while content.len() < 2 || !content.ends_with('"') {
        match fields.next() {
            Some(fragment) => {
                content.push(':');
                content.push_str(fragment);
            }
            None => return Err(LineError::UnterminatedQuote),
        }
    }
    Ok(content[1..content.len() - 1].to_string())
}
