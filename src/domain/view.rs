//! Declarative view of a dictionary entry. Built by the render controller,
//! painted by a `RenderSurface` adapter.

use crate::domain::{DictionaryEntry, Source};

/// Label of the speech control. Surfaces offer it under the same name.
pub const SPEAK_LABEL: &str = "Speak word";

/// Inline run of text. `bold` comes from `**...**` markers in service text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

/// One line of rendered output, tagged with its role so surfaces can style it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Callout,
    Body,
    Example,
    SectionTitle,
    Toggle,
    Audio,
    Source,
}

impl Line {
    fn plain(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            spans: vec![Span {
                text: text.into(),
                bold: false,
            }],
        }
    }

    fn styled(kind: LineKind, text: &str) -> Self {
        Self {
            kind,
            spans: parse_spans(text),
        }
    }

    /// Concatenated span text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Titled section inside the collapsible details block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub items: Vec<String>,
}

/// Collapsible secondary block. Collapsed by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Details {
    pub expanded: bool,
    pub sections: Vec<DetailSection>,
}

/// Render tree for a `Result` state, in fixed display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub heading: String,
    pub compliment: Option<String>,
    /// Definition split at newlines.
    pub definition: Vec<String>,
    pub first_example: Option<String>,
    pub details: Details,
    pub sources: Vec<Source>,
    /// Text to speak when the audio control is used. `None` hides the control.
    pub audio: Option<String>,
}

impl EntryView {
    pub fn from_entry(entry: &DictionaryEntry, expanded: bool, audio_available: bool) -> Self {
        let mut sections = Vec::new();
        push_single(&mut sections, "Pronunciation", &entry.pronunciation);
        push_single(&mut sections, "Part of speech", &entry.part_of_speech);
        push_list(&mut sections, "Synonyms", &entry.synonyms);
        push_list(&mut sections, "Antonyms", &entry.antonyms);
        push_single(&mut sections, "Etymology", &entry.etymology);
        push_list(
            &mut sections,
            "More examples",
            entry.example_sentences.get(1..).unwrap_or_default(),
        );

        Self {
            heading: entry.word.clone(),
            compliment: entry.compliment.clone().filter(|c| !c.trim().is_empty()),
            definition: entry.definition.lines().map(str::to_string).collect(),
            first_example: entry.example_sentences.first().cloned(),
            details: Details { expanded, sections },
            sources: entry.sources.clone(),
            audio: audio_available.then(|| entry.word.clone()),
        }
    }

    /// Flatten to lines, honoring the collapse state of the details block.
    pub fn visible_lines(&self) -> Vec<Line> {
        let mut lines = vec![Line::plain(LineKind::Heading, &self.heading)];
        if self.audio.is_some() {
            lines.push(Line::plain(LineKind::Audio, format!("♪ {}", SPEAK_LABEL)));
        }
        if let Some(c) = &self.compliment {
            lines.push(Line::styled(LineKind::Callout, c));
        }
        for d in &self.definition {
            lines.push(Line::styled(LineKind::Body, d));
        }
        if let Some(ex) = &self.first_example {
            lines.push(Line::styled(LineKind::Example, ex));
        }

        if !self.details.sections.is_empty() {
            let marker = if self.details.expanded { "▾" } else { "▸" };
            lines.push(Line::plain(LineKind::Toggle, format!("{marker} Details")));
            if self.details.expanded {
                for section in &self.details.sections {
                    lines.push(Line::plain(LineKind::SectionTitle, section.title));
                    for item in &section.items {
                        lines.push(Line::styled(LineKind::Body, item));
                    }
                }
            }
        }

        if !self.sources.is_empty() {
            lines.push(Line::plain(LineKind::SectionTitle, "Sources"));
            for s in &self.sources {
                let label = match &s.title {
                    Some(t) => format!("{t} <{}>", s.uri),
                    None => s.uri.clone(),
                };
                lines.push(Line::plain(LineKind::Source, label));
            }
        }
        lines
    }
}

fn push_single(sections: &mut Vec<DetailSection>, title: &'static str, value: &Option<String>) {
    if let Some(v) = value.as_ref().filter(|v| !v.trim().is_empty()) {
        sections.push(DetailSection {
            title,
            items: vec![v.clone()],
        });
    }
}

fn push_list(sections: &mut Vec<DetailSection>, title: &'static str, values: &[String]) {
    if !values.is_empty() {
        sections.push(DetailSection {
            title,
            items: values.to_vec(),
        });
    }
}

/// Split `**bold**` markers into spans. Unbalanced markers are kept as text.
fn parse_spans(text: &str) -> Vec<Span> {
    let parts: Vec<&str> = text.split("**").collect();
    if parts.len() % 2 == 0 {
        return vec![Span {
            text: text.to_string(),
            bold: false,
        }];
    }
    parts
        .into_iter()
        .enumerate()
        .filter(|(_, p)| !p.is_empty())
        .map(|(i, p)| Span {
            text: p.to_string(),
            bold: i % 2 == 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> DictionaryEntry {
        DictionaryEntry {
            word: "Resilience".into(),
            compliment: Some("Great pick!".into()),
            pronunciation: Some("/rɪˈzɪl.jəns/".into()),
            part_of_speech: Some("noun".into()),
            definition: "The capacity to recover.\nAlso: elasticity.".into(),
            synonyms: vec!["toughness".into()],
            antonyms: vec![],
            etymology: None,
            example_sentences: vec!["First.".into(), "Second.".into()],
            sources: vec![],
        }
    }

    fn texts(view: &EntryView) -> Vec<String> {
        view.visible_lines().iter().map(Line::text).collect()
    }

    #[test]
    fn test_fixed_order_collapsed() {
        let view = EntryView::from_entry(&entry(), false, false);
        assert_eq!(
            texts(&view),
            vec![
                "Resilience",
                "Great pick!",
                "The capacity to recover.",
                "Also: elasticity.",
                "First.",
                "▸ Details",
            ]
        );
    }

    #[test]
    fn test_expanded_shows_sections_and_omits_empty() {
        let view = EntryView::from_entry(&entry(), true, false);
        let lines = texts(&view);
        assert!(lines.contains(&"Second.".to_string()));
        assert!(lines.contains(&"toughness".to_string()));
        assert!(!lines.contains(&"Antonyms".to_string()));
        assert!(!lines.contains(&"Etymology".to_string()));
    }

    #[test]
    fn test_audio_control_hidden_without_capability() {
        let without = EntryView::from_entry(&entry(), false, false);
        assert!(without.audio.is_none());
        let with = EntryView::from_entry(&entry(), false, true);
        assert_eq!(with.audio.as_deref(), Some("Resilience"));
        let audio = &with.visible_lines()[1];
        assert_eq!(audio.kind, LineKind::Audio);
        assert!(audio.text().ends_with(SPEAK_LABEL));
    }

    #[test]
    fn test_bold_spans() {
        let spans = parse_spans("**Definition**: lasting a short time.");
        assert_eq!(spans.len(), 2);
        assert!(spans[0].bold);
        assert_eq!(spans[0].text, "Definition");
        assert_eq!(spans[1].text, ": lasting a short time.");
        assert!(!spans[1].bold);

        let unbalanced = parse_spans("a ** b");
        assert_eq!(unbalanced.len(), 1);
        assert_eq!(unbalanced[0].text, "a ** b");
    }
}
