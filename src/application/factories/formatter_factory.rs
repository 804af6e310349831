use crate::adapters::outbound::formatters::{JsonFormatter, PlainTextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::BuildOrderFormatter;

/// Factory for creating aggregate formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use build_order::application::dto::OutputFormat;
    /// use build_order::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// assert!(formatter.format(&[]).is_ok());
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn BuildOrderFormatter> {
        match format {
            OutputFormat::Text => Box::new(PlainTextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Writing resolved lists...",
            OutputFormat::Json => "📝 Writing resolved lists with JSON aggregate...",
        }
    }
}
