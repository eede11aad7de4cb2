//
//  powertoys-client
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Machine-readable output for `--json` and for piping to `jq`.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`write_json`] | Pretty-printed JSON to stdout |
//! | [`write_json_to`] | Pretty-printed JSON to any writer |

use serde::Serialize;
use std::io::Write;

/// Writes a value as pretty-printed JSON to stdout.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    write_json_to(&mut std::io::stdout().lock(), value)
}

/// Writes a value as pretty-printed JSON to a writer, followed by a newline.
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
