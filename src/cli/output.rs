pub use railgraph_core::format::OutputFormat;

/// Parse output format from string
///
/// `OutputFormat` lives in the core crate, so clap goes through its
/// `FromStr` instead of a `ValueEnum` impl.
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
