//! The `runenv service-name` command.

use std::io::Write;

use crate::env::ReadEnv;
use crate::environment::Classifier;
use crate::error::Result;

use super::dispatcher::Command;

/// Prints the resolved service name.
pub struct ServiceNameCommand<E> {
    classifier: Classifier<E>,
}

impl<E: ReadEnv> ServiceNameCommand<E> {
    /// Create a new service-name command.
    pub fn new(classifier: Classifier<E>) -> Self {
        Self { classifier }
    }
}

impl<E: ReadEnv> Command for ServiceNameCommand<E> {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.classifier.service_name()?)?;
        Ok(())
    }
}
