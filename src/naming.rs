//! Output filename generation.
//!
//! The base argument doubles as a counter seed: a numeric base produces
//! plain incrementing numbers (`17.aac`, `18.aac`, ...), anything else
//! becomes a `{base}_{n}` prefix scheme starting at 1.

use std::path::{Path, PathBuf};

/// How output filenames are derived from the row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingScheme {
    /// Numeric base: row `idx` (0-based) becomes `{start + idx}.{ext}`.
    Numbered {
        /// The first file's number.
        start: i64,
    },
    /// Textual base: row `idx` becomes `{base}_{idx + 1}.{ext}`.
    Prefixed {
        /// The filename prefix.
        base: String,
    },
}

impl NamingScheme {
    /// Interprets the base argument: an integer seeds numbering, anything
    /// else becomes a prefix.
    #[must_use]
    pub fn from_base(base: &str) -> Self {
        match base.trim().parse::<i64>() {
            Ok(start) => Self::Numbered { start },
            Err(_) => Self::Prefixed {
                base: base.trim().to_string(),
            },
        }
    }

    /// The filename for the given 0-based row index.
    #[must_use]
    pub fn filename(&self, index: usize, extension: &str) -> String {
        match self {
            Self::Numbered { start } => {
                let n = start + i64::try_from(index).unwrap_or(i64::MAX);
                format!("{n}.{extension}")
            }
            Self::Prefixed { base } => format!("{base}_{}.{extension}", index + 1),
        }
    }

    /// The full destination path for the given row index.
    #[must_use]
    pub fn path(&self, output_dir: &Path, index: usize, extension: &str) -> PathBuf {
        output_dir.join(self.filename(index, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_base_increments_from_start() {
        let scheme = NamingScheme::from_base("17");
        assert_eq!(scheme.filename(0, "aac"), "17.aac");
        assert_eq!(scheme.filename(1, "aac"), "18.aac");
        assert_eq!(scheme.filename(2, "aac"), "19.aac");
    }

    #[test]
    fn test_textual_base_uses_one_based_suffix() {
        let scheme = NamingScheme::from_base("show");
        assert_eq!(scheme.filename(0, "aac"), "show_1.aac");
        assert_eq!(scheme.filename(1, "aac"), "show_2.aac");
    }

    #[test]
    fn test_base_is_trimmed_before_interpretation() {
        assert_eq!(
            NamingScheme::from_base(" 5 "),
            NamingScheme::Numbered { start: 5 }
        );
        assert_eq!(
            NamingScheme::from_base("  ep "),
            NamingScheme::Prefixed {
                base: "ep".to_string()
            }
        );
    }

    #[test]
    fn test_negative_number_still_counts_as_numeric() {
        let scheme = NamingScheme::from_base("-2");
        assert_eq!(scheme.filename(0, "aac"), "-2.aac");
        assert_eq!(scheme.filename(3, "aac"), "1.aac");
    }

    #[test]
    fn test_mixed_text_is_a_prefix() {
        let scheme = NamingScheme::from_base("12b");
        assert_eq!(scheme.filename(0, "aac"), "12b_1.aac");
    }

    #[test]
    fn test_custom_extension() {
        let scheme = NamingScheme::from_base("1");
        assert_eq!(scheme.filename(0, "mp3"), "1.mp3");
    }

    #[test]
    fn test_path_joins_output_dir() {
        let scheme = NamingScheme::from_base("track");
        let path = scheme.path(Path::new("/out"), 0, "aac");
        assert_eq!(path, PathBuf::from("/out/track_1.aac"));
    }
}
