/// Parse a hexadecimal `u64`, with or without a `0x`/`0X` prefix.
///
/// The error is a bare description; callers decide whether it is an
/// argument or a table problem.
pub fn parse_hex_u64(text: &str) -> std::result::Result<u64, String> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    // from_str_radix tolerates a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("invalid hex: {text:?}"));
    }
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid hex {text:?}: {e}"))
}
