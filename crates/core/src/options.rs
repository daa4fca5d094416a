/// Caller-facing switches of a `generate` invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
    /// Draw the 1-based output page index on each emitted page.
    pub add_page_numbers: bool,
    /// Include pages without stroke content as blank pages instead of
    /// skipping them.
    pub all_pages: bool,
    /// Export the annotations alone even when the archive carries a
    /// background document.
    pub annotations_only: bool,
}
