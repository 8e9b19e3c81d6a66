//! Format output dispatch helpers

/// Dispatch output by format. The json branch yields the `Result`; the
/// human and records branches print and succeed.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&doc)?; Ok::<(), FrontierError>(()) },
///     human => { print_table(); },
///     records => { print_records(); }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
