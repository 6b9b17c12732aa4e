//! Record-name templates.
//!
//! A template like `"{{subdomain}}.{{domain}}"` is parsed once at registry
//! load time into a list of literal and placeholder segments, so rendering a
//! record name is a plain concatenation and an unknown placeholder is caught
//! before any request is served.

// Standard library
use std::fmt;
use std::str::FromStr;

// 3rd party crates
use serde::de::{self, Deserializer};
use serde::Deserialize;

// Current module imports
use super::errors::TemplateError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Subdomain,
    Domain,
}

/// A parsed record-name template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    segments: Vec<Segment>,
    raw: String,
}

impl NameTemplate {
    /// Substitutes the subdomain key and base domain into the template.
    pub fn render(&self, subdomain: &str, domain: &str) -> String {
        let mut out = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Subdomain => out.push_str(subdomain),
                Segment::Domain => out.push_str(domain),
            }
        }
        out
    }

    /// The template text as written in the registry document.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for NameTemplate {
    type Err = TemplateError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut rest: &str = raw;

        while let Some(open) = rest.find(OPEN) {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after_open = &rest[open + OPEN.len()..];
            let close = after_open
                .find(CLOSE)
                .ok_or(TemplateError::Unterminated)?;
            let name = &after_open[..close];
            segments.push(match name {
                "subdomain" => Segment::Subdomain,
                "domain" => Segment::Domain,
                other => return Err(TemplateError::UnknownPlaceholder(other.to_string())),
            });
            rest = &after_open[close + CLOSE.len()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(NameTemplate {
            segments,
            raw: raw.to_string(),
        })
    }
}

impl fmt::Display for NameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for NameTemplate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
