//! The `runenv read` command.

use std::io::Write;

use crate::cli::args::ReadArgs;
use crate::env::ReadEnv;
use crate::error::Result;
use crate::value::ValueReader;

use super::dispatcher::Command;

/// Prints a decoded variable, optionally parsed as JSON.
pub struct ReadCommand<E> {
    reader: ValueReader<E>,
    args: ReadArgs,
}

impl<E: ReadEnv> ReadCommand<E> {
    /// Create a new read command.
    pub fn new(reader: ValueReader<E>, args: ReadArgs) -> Self {
        Self { reader, args }
    }
}

impl<E: ReadEnv> Command for ReadCommand<E> {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let name = self.args.name.as_str();
        if self.args.json {
            let value: serde_json::Value = if self.args.required {
                self.reader.must_read_json(name)?
            } else {
                self.reader
                    .optional_read_json(name)?
                    .unwrap_or(serde_json::Value::Null)
            };
            let json = serde_json::to_string_pretty(&value).map_err(anyhow::Error::from)?;
            writeln!(out, "{json}")?;
        } else {
            let value = if self.args.required {
                self.reader.must_read(name)?
            } else {
                self.reader.optional_read(name)?
            };
            writeln!(out, "{value}")?;
        }
        Ok(())
    }
}
