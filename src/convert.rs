//! Conversion pipeline: tokenize -> extract -> render
//!
//! Each call works on its own input and intermediate values; only the flag
//! registry is shared, and it is immutable.

use tracing::debug;

use crate::codegen::{CodeGenerator, RenderOptions};
use crate::command::tokenize;
use crate::errors::{ConvertError, Result};
use crate::request::extract;
use crate::typegen::TypeConverter;

/// Converts curl commands to Go source
#[derive(Default)]
pub struct Converter {
    generator: CodeGenerator,
}

impl Converter {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            generator: CodeGenerator::new(options),
        }
    }

    /// Use a custom JSON body type converter
    pub fn with_type_converter(options: RenderOptions, converter: Box<dyn TypeConverter>) -> Self {
        Self {
            generator: CodeGenerator::with_converter(options, converter),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        self.generator.options()
    }

    /// Convert one curl command to Go source
    pub fn convert(&self, command: &str) -> Result<String> {
        let parsed = tokenize(command);
        if parsed.is_empty() {
            return Err(ConvertError::EmptyInput);
        }
        let request = extract(&parsed)?;
        let code = self.generator.render(&request);
        debug!(bytes = code.len(), "Conversion finished");
        Ok(code)
    }
}

/// Convert with default options
pub fn convert(command: &str) -> Result<String> {
    Converter::default().convert(command)
}
