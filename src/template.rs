//! Template sources
//!
//! A template whose text contains the output marker produces a file; the
//! text following the marker on that line is itself a template for the
//! output path, e.g.
//!
//! ```text
//! // @rustf.generated: src/models/{{snakeCase table.name}}.rs
//! ```
//!
//! Templates without the marker are partials, available to the others
//! through `{{> name}}`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Template name, also the partial name
    pub name: String,
    pub source: String,
    /// Output path template, `None` for partials
    pub output: Option<String>,
}

impl Template {
    pub fn parse(
        name: impl Into<String>,
        source: impl Into<String>,
        marker: &str,
    ) -> Self {
        let source = source.into();
        let output = find_output(&source, marker);
        Self {
            name: name.into(),
            source,
            output,
        }
    }

    pub fn is_partial(&self) -> bool {
        self.output.is_none()
    }
}

/// Text after the last `marker` on the first line containing it
fn find_output(source: &str, marker: &str) -> Option<String> {
    if marker.is_empty() {
        return None;
    }
    source
        .lines()
        .find_map(|line| line.rfind(marker).map(|idx| &line[idx + marker.len()..]))
        .map(str::trim)
        .filter(|output| !output.is_empty())
        .map(str::to_string)
}
