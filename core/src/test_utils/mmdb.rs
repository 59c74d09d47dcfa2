//! Builds tiny MaxMind DB files for tests.
//!
//! Only what the reader needs is emitted: an IPv4 search tree with 32-bit
//! records holding a single network, the 16-byte separator, one data record
//! and the metadata map.

use std::net::Ipv4Addr;

const METADATA_MARKER: &[u8] = b"\xab\xcd\xefMaxMind.com";
const SEPARATOR_LEN: u32 = 16;

const TYPE_STRING: u8 = 2;
const TYPE_DOUBLE: u8 = 3;
const TYPE_UINT16: u8 = 5;
const TYPE_UINT32: u8 = 6;
const TYPE_MAP: u8 = 7;
const TYPE_UINT64: u8 = 9;
const TYPE_ARRAY: u8 = 11;

/// A value in the MaxMind DB data section.
pub enum Value {
    Str(&'static str),
    Double(f64),
    U16(u16),
    U32(u32),
    U64(u64),
    Map(Vec<(&'static str, Value)>),
    Array(Vec<Value>),
}

impl Value {
    fn encode(&self, out: &mut Vec<u8>) {
        match self {
            Value::Str(s) => {
                control(out, TYPE_STRING, s.len());
                out.extend_from_slice(s.as_bytes());
            }
            Value::Double(v) => {
                control(out, TYPE_DOUBLE, 8);
                out.extend_from_slice(&v.to_be_bytes());
            }
            Value::U16(v) => {
                control(out, TYPE_UINT16, 2);
                out.extend_from_slice(&v.to_be_bytes());
            }
            Value::U32(v) => {
                control(out, TYPE_UINT32, 4);
                out.extend_from_slice(&v.to_be_bytes());
            }
            Value::U64(v) => {
                control(out, TYPE_UINT64, 8);
                out.extend_from_slice(&v.to_be_bytes());
            }
            Value::Map(entries) => {
                control(out, TYPE_MAP, entries.len());
                for (key, value) in entries {
                    Value::Str(*key).encode(out);
                    value.encode(out);
                }
            }
            Value::Array(items) => {
                control(out, TYPE_ARRAY, items.len());
                for item in items {
                    item.encode(out);
                }
            }
        }
    }
}

fn control(out: &mut Vec<u8>, type_num: u8, size: usize) {
    assert!(size < 29 + 256, "value too large for the test encoder");
    let size_bits = if size < 29 { size as u8 } else { 29 };

    if type_num > TYPE_MAP {
        out.push(size_bits);
        out.push(type_num - TYPE_MAP);
    } else {
        out.push((type_num << 5) | size_bits);
    }
    if size >= 29 {
        out.push((size - 29) as u8);
    }
}

/// An IPv4 database where `network/prefix_len` maps to `record` and every
/// other address has no data.
pub fn single_network(network: Ipv4Addr, prefix_len: u8, record: &Value) -> Vec<u8> {
    assert!((1..=32).contains(&prefix_len));
    let node_count = u32::from(prefix_len);
    let empty = node_count;
    let data_pointer = node_count + SEPARATOR_LEN;
    let bits = u32::from(network);

    let mut db = Vec::new();
    for depth in 0..node_count {
        let next = if depth + 1 < node_count { depth + 1 } else { data_pointer };
        let (left, right) = if (bits >> (31 - depth)) & 1 == 0 {
            (next, empty)
        } else {
            (empty, next)
        };
        db.extend_from_slice(&left.to_be_bytes());
        db.extend_from_slice(&right.to_be_bytes());
    }
    db.extend_from_slice(&[0; SEPARATOR_LEN as usize]);
    record.encode(&mut db);

    db.extend_from_slice(METADATA_MARKER);
    metadata(node_count).encode(&mut db);
    db
}

fn metadata(node_count: u32) -> Value {
    Value::Map(vec![
        ("binary_format_major_version", Value::U16(2)),
        ("binary_format_minor_version", Value::U16(0)),
        ("build_epoch", Value::U64(1_700_000_000)),
        ("database_type", Value::Str("GeoIP2-City")),
        ("description", Value::Map(vec![("en", Value::Str("ipmapper test city database"))])),
        ("ip_version", Value::U16(4)),
        ("languages", Value::Array(vec![Value::Str("en")])),
        ("node_count", Value::U32(node_count)),
        ("record_size", Value::U16(32)),
    ])
}

/// City record for 81.2.69.0/24, laid out the way GeoLite2-City stores it.
pub fn london() -> Value {
    Value::Map(vec![
        (
            "city",
            Value::Map(vec![
                ("geoname_id", Value::U32(2643743)),
                (
                    "names",
                    Value::Map(vec![("de", Value::Str("London")), ("en", Value::Str("London"))]),
                ),
            ]),
        ),
        (
            "continent",
            Value::Map(vec![
                ("code", Value::Str("EU")),
                ("names", Value::Map(vec![("en", Value::Str("Europe"))])),
            ]),
        ),
        (
            "country",
            Value::Map(vec![
                ("iso_code", Value::Str("GB")),
                ("names", Value::Map(vec![("en", Value::Str("United Kingdom"))])),
            ]),
        ),
        (
            "location",
            Value::Map(vec![
                ("accuracy_radius", Value::U16(100)),
                ("latitude", Value::Double(51.5142)),
                ("longitude", Value::Double(-0.0931)),
                ("time_zone", Value::Str("Europe/London")),
            ]),
        ),
        (
            "subdivisions",
            Value::Array(vec![Value::Map(vec![("iso_code", Value::Str("ENG"))])]),
        ),
    ])
}

/// Country-level record with no `location` block.
pub fn country_only() -> Value {
    Value::Map(vec![(
        "country",
        Value::Map(vec![("iso_code", Value::Str("GB"))]),
    )])
}
