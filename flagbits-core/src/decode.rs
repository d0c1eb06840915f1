use std::fmt;

use crate::table::FlagTable;

pub const BITS: u8 = 64;

const SEPARATOR: &str = " | ";

/// Outcome for one bit position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitResult {
    pub index: u8,
    pub is_set: bool,
    /// `1 << index`, whether or not the bit is set.
    pub value: u64,
    /// Only present for set bits that resolved against a table.
    pub name: Option<String>,
}

impl BitResult {
    /// The resolved name, or the value as `0x`-prefixed uppercase hex.
    pub fn display_entry(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("0x{:X}", self.value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeReport {
    value: u64,
    bits: Vec<BitResult>,
}

impl DecodeReport {
    pub fn value(&self) -> u64 {
        self.value
    }

    /// All 64 positions, ascending.
    pub fn bits(&self) -> &[BitResult] {
        &self.bits
    }

    pub fn set_bits(&self) -> impl Iterator<Item = &BitResult> {
        self.bits.iter().filter(|b| b.is_set)
    }

    /// Set bits' display entries joined by `" | "`; empty when no bit is set.
    pub fn summary(&self) -> String {
        self.set_bits()
            .map(BitResult::display_entry)
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

/// Renders the per-bit lines, a blank line and the summary.
impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.set_bits() {
            match &bit.name {
                Some(name) => writeln!(f, "bit {}: [{}] 0x{:X}", bit.index, name, bit.value)?,
                None => writeln!(f, "bit {}: 0x{:X}", bit.index, bit.value)?,
            }
        }
        writeln!(f)?;
        writeln!(f, "{}", self.summary())
    }
}

/// Split `value` into its bits, naming set bits from `table` when given.
pub fn decode(value: u64, table: Option<&FlagTable>) -> DecodeReport {
    let bits = (0..BITS)
        .map(|index| {
            let scalar = 1u64 << index;
            let is_set = (value >> index) & 1 == 1;
            let name = if is_set {
                table
                    .and_then(|t| t.resolve_name(scalar))
                    .map(str::to_owned)
            } else {
                None
            };
            BitResult {
                index,
                is_set,
                value: scalar,
                name,
            }
        })
        .collect();
    DecodeReport { value, bits }
}
