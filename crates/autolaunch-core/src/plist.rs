//! Minimal property-list (XML 1.0) writer.
//!
//! Only the value types a LaunchAgent descriptor needs are modelled. Values
//! are escaped on output, so callers can pass arbitrary strings.

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const DOCTYPE: &str = "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n";
const INDENT: &str = "    ";

/// A property-list value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlistValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Array(Vec<PlistValue>),
    /// Keys keep insertion order.
    Dict(Vec<(String, PlistValue)>),
}

impl From<&str> for PlistValue {
    fn from(s: &str) -> Self {
        PlistValue::String(s.to_string())
    }
}

impl From<String> for PlistValue {
    fn from(s: String) -> Self {
        PlistValue::String(s)
    }
}

impl From<bool> for PlistValue {
    fn from(b: bool) -> Self {
        PlistValue::Boolean(b)
    }
}

impl From<i64> for PlistValue {
    fn from(n: i64) -> Self {
        PlistValue::Integer(n)
    }
}

impl PlistValue {
    fn write_xml(&self, out: &mut String, depth: usize) {
        let pad = INDENT.repeat(depth);
        match self {
            PlistValue::String(s) => {
                out.push_str(&format!("{}<string>{}</string>\n", pad, escape_xml(s)));
            }
            PlistValue::Integer(n) => {
                out.push_str(&format!("{}<integer>{}</integer>\n", pad, n));
            }
            PlistValue::Boolean(b) => {
                out.push_str(&format!("{}<{}/>\n", pad, if *b { "true" } else { "false" }));
            }
            PlistValue::Array(items) if items.is_empty() => {
                out.push_str(&format!("{}<array/>\n", pad));
            }
            PlistValue::Array(items) => {
                out.push_str(&format!("{}<array>\n", pad));
                for item in items {
                    item.write_xml(out, depth + 1);
                }
                out.push_str(&format!("{}</array>\n", pad));
            }
            PlistValue::Dict(entries) => write_dict(entries, out, depth),
        }
    }
}

fn write_dict(entries: &[(String, PlistValue)], out: &mut String, depth: usize) {
    let pad = INDENT.repeat(depth);
    if entries.is_empty() {
        out.push_str(&format!("{}<dict/>\n", pad));
        return;
    }

    out.push_str(&format!("{}<dict>\n", pad));
    for (key, value) in entries {
        out.push_str(&format!("{}{}<key>{}</key>\n", pad, INDENT, escape_xml(key)));
        value.write_xml(out, depth + 1);
    }
    out.push_str(&format!("{}</dict>\n", pad));
}

/// A property-list document whose root is a dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlistDocument {
    entries: Vec<(String, PlistValue)>,
}

impl PlistDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key. A key that is already present is replaced in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PlistValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Top-level keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Serialize to XML property-list text.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        out.push_str(XML_HEADER);
        out.push_str(DOCTYPE);
        out.push_str("<plist version=\"1.0\">\n");
        write_dict(&self.entries, &mut out, 0);
        out.push_str("</plist>\n");
        out
    }
}

/// Escape special characters for XML.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
