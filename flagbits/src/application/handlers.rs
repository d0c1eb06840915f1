use flagbits_core::hex::parse_hex_u64;
use flagbits_core::{FlagError, FlagTable, Result, decode, list_types};

use super::env::{ensure_storage_dir, open_in_file_browser, storage_dir};

pub fn handle_decode(value: Option<String>, type_name: Option<String>) -> Result<()> {
    let value = value.ok_or_else(|| FlagError::Argument("Required hex var argument".into()))?;
    let value = parse_hex_u64(&value).map_err(FlagError::Argument)?;

    let table = match type_name {
        Some(t) => Some(FlagTable::load(&t, &storage_dir()?)?),
        None => None,
    };
    let report = decode(value, table.as_ref());
    print!("{report}");
    Ok(())
}

pub fn handle_types() -> Result<()> {
    let dir = ensure_storage_dir()?;
    for name in list_types(&dir)? {
        println!("{name}");
    }
    Ok(())
}

pub fn handle_show() -> Result<()> {
    let dir = ensure_storage_dir()?;
    open_in_file_browser(&dir)
}
