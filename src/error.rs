//! Error types for reading structural descriptions

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed JSON or a field of the wrong type
    #[error("invalid description at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("missing required field: processName")]
    MissingProcessName,

    #[error("invalid processName: '{name}'. Expected one of: {}", .expected.join(", "))]
    InvalidProcessName {
        name: String,
        expected: Vec<String>,
        suggestion: Option<String>,
    },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json appends " at line X column Y" to its own message
        let message = err.to_string();
        let message = match message.rfind(" at line ") {
            Some(pos) => message[..pos].to_string(),
            None => message,
        };
        ParseError::Json {
            line: err.line(),
            column: err.column(),
            message,
        }
    }
}

impl ParseError {
    /// Location of the error in `source`
    pub fn span(&self, source: &str) -> Span {
        match self {
            ParseError::Json { line, column, .. } => {
                let start = line_column_offset(source, *line, *column);
                start..(start + 1).min(source.len()).max(start)
            }
            ParseError::MissingProcessName => 0..source.len().min(1),
            ParseError::InvalidProcessName { name, .. } => {
                let key = source.find("\"processName\"").unwrap_or(0);
                let quoted = format!("\"{}\"", name);
                match source[key..].find(&quoted) {
                    Some(pos) => (key + pos)..(key + pos + quoted.len()),
                    None => key..key,
                }
            }
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span(source);
        let label_message = match self {
            ParseError::Json { message, .. } => message.clone(),
            ParseError::MissingProcessName => "this description has no processName".to_string(),
            ParseError::InvalidProcessName { name, .. } => format!("unknown process '{}'", name),
        };

        let mut report = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(label_message)
                    .with_color(Color::Red),
            );
        if let ParseError::InvalidProcessName {
            suggestion: Some(suggestion),
            ..
        } = self
        {
            report = report.with_help(format!("did you mean '{}'?", suggestion));
        }

        let mut buf = Vec::new();
        if report
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .is_err()
        {
            return self.to_string();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Byte offset of a 1-based line and column
fn line_column_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_strips_location_suffix() {
        let err: ParseError = serde_json::from_str::<serde_json::Value>("{\n  \"a\": ,\n}")
            .map_err(ParseError::from)
            .expect_err("malformed json");
        let ParseError::Json { line, message, .. } = &err else {
            panic!("expected json error, got {:?}", err);
        };
        assert_eq!(*line, 2);
        assert!(!message.contains(" at line "));
    }

    #[test]
    fn test_line_column_offset() {
        let source = "ab\ncde\nf";
        assert_eq!(line_column_offset(source, 1, 1), 0);
        assert_eq!(line_column_offset(source, 2, 2), 4);
        assert_eq!(line_column_offset(source, 3, 1), 7);
        assert_eq!(line_column_offset(source, 9, 9), source.len());
    }

    #[test]
    fn test_invalid_process_span_points_at_value() {
        let source = r#"{"processName": "Stranded"}"#;
        let err = ParseError::InvalidProcessName {
            name: "Stranded".to_string(),
            expected: vec!["Stranding".to_string()],
            suggestion: Some("Stranding".to_string()),
        };
        let span = err.span(source);
        assert_eq!(&source[span], "\"Stranded\"");
    }

    #[test]
    fn test_format_includes_help() {
        let source = r#"{"processName": "Stranded"}"#;
        let err = ParseError::InvalidProcessName {
            name: "Stranded".to_string(),
            expected: vec!["Stranding".to_string()],
            suggestion: Some("Stranding".to_string()),
        };
        let report = err.format(source, "cable.json");
        assert!(report.contains("invalid processName"));
        assert!(report.contains("did you mean 'Stranding'?"));
    }

    #[test]
    fn test_missing_process_message() {
        assert_eq!(
            ParseError::MissingProcessName.to_string(),
            "missing required field: processName"
        );
    }
}
