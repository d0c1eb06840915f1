use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use tracing::debug;

use crate::error::{FlagError, Result};
use crate::hex::parse_hex_u64;

/// Extension of the per-type table files inside the storage directory.
pub const TABLE_EXT: &str = "yml";

/// Named flag values for one type, in document order.
///
/// Neither labels nor values are required to be unique, and values are not
/// checked to be powers of two.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagTable {
    entries: Vec<(String, u64)>,
}

impl FlagTable {
    pub fn from_entries(entries: Vec<(String, u64)>) -> Self {
        Self { entries }
    }

    /// Load `<base_dir>/<type_name>.yml`.
    ///
    /// Surrounding whitespace in `type_name` is ignored. The document must be
    /// a mapping of labels to hex scalars; a single bad scalar fails the whole
    /// load.
    pub fn load(type_name: &str, base_dir: &Path) -> Result<Self> {
        let type_name = type_name.trim();
        if type_name.is_empty() {
            return Err(FlagError::Argument("type name must not be empty".into()));
        }
        if type_name.contains(|c: char| c == '/' || c == '\\') {
            let msg = format!("invalid type name: {type_name:?}");
            return Err(FlagError::Argument(msg));
        }

        let path = base_dir.join(format!("{type_name}.{TABLE_EXT}"));
        let bytes = match std::fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FlagError::NotFound(path));
            }
            Err(e) => return Err(e.into()),
        };

        let parse_err = |e: String| FlagError::Parse(format!("{}: {e}", path.display()));
        let text = String::from_utf8(bytes)
            .map_err(|e| parse_err(format!("invalid UTF-8: {e}")))?;
        let table = Self::parse(&text).map_err(parse_err)?;
        debug!(path = %path.display(), entries = table.len(), "loaded flag table");
        Ok(table)
    }

    /// Parse a table document. The error is a bare description without the
    /// file path.
    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        if is_blank_document(text) {
            return Ok(Self::default());
        }
        let raw: RawTable = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
        let mut entries = Vec::with_capacity(raw.0.len());
        for (label, scalar) in raw.0 {
            let value = parse_hex_u64(&scalar).map_err(|e| format!("key `{label}`: {e}"))?;
            entries.push((label, value));
        }
        Ok(Self { entries })
    }

    /// First label whose value equals `value`, in document order.
    pub fn resolve_name(&self, value: u64) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(label, _)| label.as_str())
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_blank_document(text: &str) -> bool {
    text.lines().all(|l| {
        let t = l.trim();
        t.is_empty() || t.starts_with('#')
    })
}

/// Top-level mapping read as raw scalar text, keeping document order and
/// duplicate keys.
struct RawTable(Vec<(String, String)>);

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = RawTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of flag names to hex values")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<RawTable, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((k, v)) = map.next_entry::<String, String>()? {
                    out.push((k, v));
                }
                Ok(RawTable(out))
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}
