//! Article text shown in the main view.

use crate::error::AppError;
use std::path::Path;

const SAMPLE_TEXT: &str = "\
A Portrait of Western Switzerland

Lake Geneva curls around the southern edge of the region like a crescent moon. \
Vineyards climb the terraced slopes above it in narrow steps, held in place by \
stone walls that are older than most of the villages below.

Mornings here start slowly. Fog lies on the water until the sun clears the \
ridge, and the first trains from Lausanne run half empty along the shore.

In the old towns the streets are steep and the stairs are steeper. Markets \
open on Wednesdays and Saturdays, and by noon the cheese stalls are sold out.

Further north the Jura rises in long wooded folds. Watchmakers worked these \
valleys through the winters for two hundred years, and some workshops still do.";

/// Title plus body paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Article {
    /// Built-in article used when no file is configured.
    pub fn sample() -> Self {
        // SAMPLE_TEXT has a title and body; parse cannot fail on it.
        Self::parse(SAMPLE_TEXT).unwrap_or_else(|_| Self {
            title: String::new(),
            paragraphs: Vec::new(),
        })
    }

    /// Parse plain text: the first non-empty line is the title, the rest is
    /// split into paragraphs on blank lines. Lines inside a paragraph are
    /// joined with single spaces.
    ///
    /// # Errors
    /// Returns [`AppError::EmptyArticle`] when `text` has no non-whitespace content.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let mut lines = text.lines().map(str::trim).skip_while(|line| line.is_empty());
        let Some(title) = lines.next() else {
            return Err(AppError::EmptyArticle("no title line".to_string()));
        };

        let mut paragraphs = Vec::new();
        let mut current = String::new();
        for line in lines {
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
                continue;
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line);
        }
        if !current.is_empty() {
            paragraphs.push(current);
        }

        Ok(Self {
            title: title.to_string(),
            paragraphs,
        })
    }

    /// Read and parse a UTF-8 text file.
    ///
    /// # Errors
    /// Returns [`AppError::Io`] if the file cannot be read, or
    /// [`AppError::EmptyArticle`] if it holds no text.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text).map_err(|_| AppError::EmptyArticle(path.display().to_string()))
    }

    pub fn word_count(&self) -> usize {
        std::iter::once(self.title.as_str())
            .chain(self.paragraphs.iter().map(String::as_str))
            .map(|text| text.split_whitespace().count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sample_has_title_and_body() {
        let article = Article::sample();
        assert_eq!(article.title, "A Portrait of Western Switzerland");
        assert_eq!(article.paragraphs.len(), 4);
        assert!(article.paragraphs[0].starts_with("Lake Geneva curls"));
    }

    #[test]
    fn parse_skips_leading_blank_lines_and_joins_wrapped_lines() {
        let article = Article::parse("\n\n  Title  \n\nfirst line\nsecond line\n\n\n\nnext\n")
            .expect("parse");
        assert_eq!(article.title, "Title");
        assert_eq!(
            article.paragraphs,
            vec!["first line second line".to_string(), "next".to_string()]
        );
        assert_eq!(article.word_count(), 6);
    }

    #[test]
    fn parse_rejects_blank_text() {
        assert!(matches!(
            Article::parse(" \n\t\n"),
            Err(AppError::EmptyArticle(_))
        ));
    }

    #[test]
    fn load_reads_file_and_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("article.txt");
        std::fs::write(&path, "Heading\n\nBody text.").expect("write article");
        let article = Article::load(&path).expect("load");
        assert_eq!(article.title, "Heading");
        assert_eq!(article.paragraphs, vec!["Body text.".to_string()]);

        let missing = dir.path().join("missing.txt");
        assert!(matches!(Article::load(&missing), Err(AppError::Io(_))));
    }
}
