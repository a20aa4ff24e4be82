//! `format`: a fixed table of named string formats. An unrecognized name is a no-op; a recognized
//! name that the instance (when a string) fails is a rejection. Collapses the teacher's
//! `*Validator` struct-per-format family into one dispatch, since this engine has no
//! compile-once/validate-many phase to amortize.
use crate::{error::Result, output::OutputUnit, tree::Node};
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::{net::IpAddr, str::FromStr};
use url::Url;

lazy_static::lazy_static! {
    static ref DATE_RE: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
    static ref TIME_RE: Regex = Regex::new(
        r"^([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9])(\.[0-9]{6})?(([Zz])|([+\-]([01][0-9]|2[0-3]):[0-5][0-9]))$",
    ).unwrap();
    static ref URI_REFERENCE_RE: Regex = Regex::new(r"^(\w+:(/?/?))?[^#\\\s]*(#[^\\\s]*)?$").unwrap();
    static ref JSON_POINTER_RE: Regex = Regex::new(r"^(/(([^/~])|(~[01]))*)*$").unwrap();
    static ref RELATIVE_JSON_POINTER_RE: Regex =
        Regex::new(r"^(?:0|[1-9][0-9]*)(?:#|(?:/(?:[^~/]|~0|~1)*)*)$").unwrap();
}

fn is_valid_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() && DATE_RE.is_match(s)
}

fn is_valid_hostname(s: &str) -> bool {
    !(s.ends_with('-')
        || s.starts_with('-')
        || s.is_empty()
        || s.chars().count() > 255
        || s.chars().any(|c| !(c.is_alphanumeric() || c == '-' || c == '.'))
        || s.split('.').any(|part| part.chars().count() > 63))
}

fn is_valid_ipv4(s: &str) -> bool {
    if s.starts_with('0') {
        return false;
    }
    matches!(IpAddr::from_str(s), Ok(addr) if addr.is_ipv4())
}

fn is_valid_ipv6(s: &str) -> bool {
    matches!(IpAddr::from_str(s), Ok(addr) if addr.is_ipv6())
}

fn matches_format(format: &str, s: &str) -> bool {
    match format {
        "date" => is_valid_date(s),
        "date-time" => DateTime::parse_from_rfc3339(s).is_ok(),
        "time" => TIME_RE.is_match(s),
        "email" => s.contains('@'),
        "hostname" => is_valid_hostname(s),
        "ipv4" => is_valid_ipv4(s),
        "ipv6" => is_valid_ipv6(s),
        "uri" => Url::from_str(s).is_ok(),
        "uri-reference" => URI_REFERENCE_RE.is_match(s),
        "uuid" => uuid::Uuid::parse_str(s).is_ok(),
        "regex" => Regex::new(s).is_ok(),
        "json-pointer" => JSON_POINTER_RE.is_match(s),
        "relative-json-pointer" => RELATIVE_JSON_POINTER_RE.is_match(s),
        _ => true,
    }
}

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let format = match value.as_str() {
        Some(format) => format,
        None => return Ok(true),
    };
    match instance.as_str() {
        Some(s) => Ok(matches_format(format, s)),
        None => Ok(true),
    }
}
