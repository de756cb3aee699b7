// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Functions to emit the resolved query string.

use std::io::Write;

use crate::error::{Error, Result};

/// Write the query line to `sink`.
///
/// The line has the exact form `Query string: <value>`, followed by a newline.
/// The value is not inspected or escaped in any way.
///
/// # Parameters
/// - `sink`: destination for the line. `main` passes stdout; tests pass a byte
///   buffer.
/// - `query`: the resolved query string.
pub fn write_query_line<W: Write>(sink: &mut W, query: &str) -> Result<()> {
    writeln!(sink, "Query string: {}", query).map_err(|source| Box::new(Error::Write { source }))
}
