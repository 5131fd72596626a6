//! The `runenv version` command.

use std::io::Write;

use crate::env::ReadEnv;
use crate::environment::Classifier;
use crate::error::Result;

use super::dispatcher::Command;

/// Prints the resolved version, or an empty line when local.
pub struct VersionCommand<E> {
    classifier: Classifier<E>,
}

impl<E: ReadEnv> VersionCommand<E> {
    /// Create a new version command.
    pub fn new(classifier: Classifier<E>) -> Self {
        Self { classifier }
    }
}

impl<E: ReadEnv> Command for VersionCommand<E> {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.classifier.version()?)?;
        Ok(())
    }
}
