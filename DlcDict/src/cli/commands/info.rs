//! CLI command for showing a dictionary's layout

use std::fs;
use std::path::Path;

use crate::formats::dictionary::inspect_dictionary_bytes;

/// Print the located phrase table without decoding phrases
pub fn execute(path: &Path, json: bool) -> anyhow::Result<()> {
    let data = fs::read(path)?;
    let layout = inspect_dictionary_bytes(&data)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    println!("Dictionary: {}", path.display());
    println!();
    println!("  Dictionary size:   {}", layout.dict_size);
    println!("  STAB offset:       {:#x}", layout.signature_offset);
    println!("  Size recurs at:    {:#x}", layout.size_field_offset);
    println!("  Begin offset:      {:#x}", layout.begin_offset);
    println!("  Phrase count:      {} ({} records)", layout.count, layout.record_count());

    Ok(())
}
