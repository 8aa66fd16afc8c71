//! Knowledge base assembly from labeled document texts

use std::fmt;

use crate::config::SourceDocument;
use crate::error::{Error, Result};

use super::extractor::PdfExtractor;

/// Labeled concatenation of every source document's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    text: String,
    has_content: bool,
}

impl KnowledgeBase {
    /// Concatenate `(label, text)` pairs in order.
    ///
    /// Each section is a bold `**label**:` heading followed by its text;
    /// sections are separated by a blank line. Texts are not filtered, so an
    /// empty text still yields its heading.
    pub fn assemble<L, T>(sections: &[(L, T)]) -> Self
    where
        L: AsRef<str>,
        T: AsRef<str>,
    {
        let body = sections
            .iter()
            .map(|(label, text)| format!("**{}**:\n{}\n", label.as_ref(), text.as_ref()))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            text: format!("\n{}", body),
            has_content: sections.iter().any(|(_, text)| !text.as_ref().is_empty()),
        }
    }

    /// Extract every source and assemble them, failing when none produced text
    pub fn load(sources: &[SourceDocument]) -> Result<Self> {
        Self::load_with(&PdfExtractor::new(), sources)
    }

    /// [`KnowledgeBase::load`] with a specific extractor
    pub fn load_with(extractor: &PdfExtractor, sources: &[SourceDocument]) -> Result<Self> {
        let sections: Vec<(&str, String)> = sources
            .iter()
            .map(|source| {
                let text = extractor.extract_text(&source.path);
                tracing::info!(
                    "Loaded '{}' from {} ({} chars)",
                    source.label,
                    source.path.display(),
                    text.len()
                );
                (source.label.as_str(), text)
            })
            .collect();

        let knowledge_base = Self::assemble(&sections);
        if !knowledge_base.has_content() {
            let paths = sources
                .iter()
                .map(|s| s.path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::error!("Knowledge base documents are missing or empty. Application cannot proceed.");
            return Err(Error::EmptyKnowledgeBase(format!(
                "no text could be extracted from [{}]; ensure the documents are available in the static folder",
                paths
            )));
        }

        Ok(knowledge_base)
    }

    /// Whether at least one section has a non-empty body
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingestion::fixtures::write_pdf;

    #[test]
    fn single_section_layout() {
        let kb = KnowledgeBase::assemble(&[("Robotics Society Information", "We build robots.")]);
        assert_eq!(
            kb.as_str(),
            "\n**Robotics Society Information**:\nWe build robots.\n"
        );
        assert!(kb.has_content());
    }

    #[test]
    fn sections_are_separated_by_blank_lines() {
        let kb = KnowledgeBase::assemble(&[
            ("Robotics Society Information", "About us"),
            ("RoboWeek", "Events"),
        ]);
        assert_eq!(
            kb.as_str(),
            "\n**Robotics Society Information**:\nAbout us\n\n**RoboWeek**:\nEvents\n"
        );
    }

    #[test]
    fn empty_sections_keep_their_heading() {
        let kb = KnowledgeBase::assemble(&[("Empty", ""), ("Full", "text")]);
        assert!(kb.as_str().contains("**Empty**:\n\n"));
        assert!(kb.has_content());
    }

    #[test]
    fn all_empty_has_no_content() {
        let kb = KnowledgeBase::assemble(&[("A", ""), ("B", "")]);
        assert!(!kb.has_content());
    }

    #[test]
    fn load_fails_when_every_document_is_missing() {
        let sources = vec![
            SourceDocument::new("Robotics Society Information", "/missing/robosoc.pdf"),
            SourceDocument::new("RoboWeek", "/missing/roboweek.pdf"),
        ];
        let err = KnowledgeBase::load(&sources).unwrap_err();
        assert!(matches!(err, Error::EmptyKnowledgeBase(_)));
    }

    #[test]
    fn load_fails_when_every_document_is_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "blank.pdf", &[None, None]);
        let err = KnowledgeBase::load(&[SourceDocument::new("Blank", path)]).unwrap_err();
        assert!(matches!(err, Error::EmptyKnowledgeBase(_)));
    }

    #[test]
    fn load_succeeds_with_one_readable_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "robosoc.pdf", &[Some("RoboWeek happens every March")]);

        let sources = vec![
            SourceDocument::new("Robotics Society Information", path.clone()),
            SourceDocument::new("Missing Brochure", dir.path().join("missing.pdf")),
        ];
        let kb = KnowledgeBase::load(&sources).unwrap();

        let extracted = PdfExtractor::new().extract_text(&path);
        assert!(!extracted.is_empty());
        assert!(kb
            .as_str()
            .contains(&format!("**Robotics Society Information**:\n{}\n", extracted)));
        assert!(kb.as_str().contains("**Missing Brochure**:\n\n"));
    }
}
