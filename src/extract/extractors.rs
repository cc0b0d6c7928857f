use regex::Regex;
use tracing::{debug, warn};

/// Finds `label: value` lines in free text.
///
/// Labels match case-insensitively anywhere in a line, the colon may be
/// followed by whitespace, and the captured value runs to the end of the
/// line and is trimmed.
#[derive(Debug, Clone)]
pub struct LabeledLineExtractor {
    labels: Vec<String>,
    regex: Option<Regex>,
}

impl LabeledLineExtractor {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let labels: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        let alternation = labels
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(?i)(?:{alternation}):\s*([^\n]+)");

        let regex = match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                warn!("Invalid label pattern {}: {}", pattern, err);
                None
            }
        };

        Self { labels, regex }
    }

    /// Value of the first labeled line, if any.
    pub fn first(&self, text: &str) -> Option<String> {
        let value = self
            .regex
            .as_ref()?
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|value| !value.is_empty());

        if value.is_none() {
            debug!("No line labeled {:?} found", self.labels);
        }
        value
    }

    /// Values of every labeled line, in order, skipping empty ones.
    pub fn all(&self, text: &str) -> Vec<String> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };

        let values: Vec<String> = regex
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();

        if values.is_empty() {
            debug!("No lines labeled {:?} found", self.labels);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match() {
        let extractor = LabeledLineExtractor::new(&["title", "título"]);

        let text = "Intro\nTitle:   Push Pull Legs  \nTitle: second";
        assert_eq!(extractor.first(text), Some("Push Pull Legs".to_string()));
    }

    #[test]
    fn test_case_insensitive_unicode_label() {
        let extractor = LabeledLineExtractor::new(&["título"]);
        assert_eq!(
            extractor.first("TÍTULO: Força Total"),
            Some("Força Total".to_string())
        );
    }

    #[test]
    fn test_no_match() {
        let extractor = LabeledLineExtractor::new(&["description"]);
        assert_eq!(extractor.first("nothing labeled here"), None);
        assert!(extractor.all("nothing labeled here").is_empty());
    }

    #[test]
    fn test_all_matches_in_order() {
        let extractor = LabeledLineExtractor::new(&["dica", "tip", "dicas"]);
        let text = "dica: Beba água\nTip: Durma bem\nDicas: Alongue-se\r\n";
        assert_eq!(
            extractor.all(text),
            vec!["Beba água", "Durma bem", "Alongue-se"]
        );
    }

    #[test]
    fn test_labels_are_escaped() {
        let extractor = LabeledLineExtractor::new(&["a.b"]);
        assert_eq!(extractor.first("axb: no"), None);
        assert_eq!(extractor.first("a.b: yes"), Some("yes".to_string()));
    }
}
