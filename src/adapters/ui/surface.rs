//! Implements RenderSurface for a terminal. Crossterm styling, indicatif spinner.

use crate::adapters::ui::banner::PAPER_GOLD;
use crate::adapters::ui::progress;
use crate::domain::{EntryView, Line, LineKind};
use crate::ports::RenderSurface;
use crossterm::style::{Color, StyledContent, Stylize};
use indicatif::ProgressBar;
use std::io::{Write, stdout};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

const GOLD: Color = Color::Rgb {
    r: PAPER_GOLD.0,
    g: PAPER_GOLD.1,
    b: PAPER_GOLD.2,
};

/// Terminal surface. Write failures are ignored: rendering never fails the state machine.
pub struct TerminalSurface {
    out: Box<dyn Write + Send>,
    spinner_enabled: bool,
    spinner: Option<ProgressBar>,
    word_of_day_visible: Arc<AtomicBool>,
}

impl TerminalSurface {
    /// Surface on stdout with a loading spinner.
    pub fn stdout() -> Self {
        Self {
            out: Box::new(stdout()),
            spinner_enabled: true,
            spinner: None,
            word_of_day_visible: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Surface on an arbitrary writer, without spinner.
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out,
            spinner_enabled: false,
            spinner: None,
            word_of_day_visible: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Shared flag the input adapter reads to decide whether to offer the word of the day.
    pub fn word_of_day_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.word_of_day_visible)
    }

    fn stop_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    fn write_line(&mut self, line: &Line) {
        let indent = match line.kind {
            LineKind::Heading | LineKind::Toggle => "",
            LineKind::SectionTitle => "  ",
            _ => "    ",
        };
        let _ = write!(self.out, "{}", indent);
        for span in &line.spans {
            let styled = style_for(line.kind, span.text.as_str());
            let styled = if span.bold { styled.bold() } else { styled };
            let _ = write!(self.out, "{}", styled);
        }
        let _ = writeln!(self.out);
    }
}

fn style_for(kind: LineKind, text: &str) -> StyledContent<&str> {
    match kind {
        LineKind::Heading => text.with(GOLD).bold().underlined(),
        LineKind::Callout => text.green().italic(),
        LineKind::Body => text.stylize(),
        LineKind::Example => text.italic(),
        LineKind::SectionTitle => text.cyan().bold(),
        LineKind::Toggle => text.dark_grey(),
        LineKind::Audio => text.dark_grey(),
        LineKind::Source => text.blue().underlined(),
    }
}

impl RenderSurface for TerminalSurface {
    fn show_idle(&mut self) {
        self.stop_spinner();
    }

    fn show_loading(&mut self, word: &str) {
        self.stop_spinner();
        if self.spinner_enabled {
            self.spinner = Some(progress::spinner(format!("Looking up \"{}\"…", word)));
        } else {
            let _ = writeln!(self.out, "Looking up \"{}\"…", word);
        }
    }

    fn show_result(&mut self, view: &EntryView) {
        self.stop_spinner();
        let _ = writeln!(self.out);
        for line in view.visible_lines() {
            self.write_line(&line);
        }
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }

    fn show_error(&mut self, message: &str) {
        self.stop_spinner();
        let _ = writeln!(self.out, "{}", message.red().bold());
        let _ = self.out.flush();
    }

    fn show_history(&mut self, words: &[String]) {
        if words.is_empty() {
            return;
        }
        let _ = writeln!(
            self.out,
            "{} {}",
            "Recent:".dark_grey(),
            words.join(" · ").dark_grey()
        );
        let _ = self.out.flush();
    }

    fn set_word_of_day_visible(&mut self, visible: bool) {
        self.word_of_day_visible.store(visible, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DictionaryEntry;
    use std::sync::Mutex;

    /// Writer that appends into a shared buffer.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_result_prints_visible_lines_only() {
        let buf = SharedBuf::default();
        let mut surface = TerminalSurface::with_writer(Box::new(buf.clone()));
        let entry = DictionaryEntry {
            word: "zenith".into(),
            definition: "The highest point.".into(),
            example_sentences: vec!["First example.".into(), "Hidden example.".into()],
            ..Default::default()
        };

        surface.show_result(&EntryView::from_entry(&entry, false, false));
        let out = buf.text();
        assert!(out.contains("zenith"));
        assert!(out.contains("The highest point."));
        assert!(out.contains("First example."));
        assert!(!out.contains("Hidden example."));

        surface.show_result(&EntryView::from_entry(&entry, true, false));
        assert!(buf.text().contains("Hidden example."));
    }

    #[test]
    fn test_error_and_history_and_flag() {
        let buf = SharedBuf::default();
        let mut surface = TerminalSurface::with_writer(Box::new(buf.clone()));
        let flag = surface.word_of_day_flag();

        surface.show_loading("word");
        surface.set_word_of_day_visible(false);
        assert!(!flag.load(Ordering::SeqCst));

        surface.show_error("Something went wrong.");
        surface.show_history(&["alpha".to_string(), "beta".to_string()]);
        surface.set_word_of_day_visible(true);
        assert!(flag.load(Ordering::SeqCst));

        let out = buf.text();
        assert!(out.contains("Looking up \"word\""));
        assert!(out.contains("Something went wrong."));
        assert!(out.contains("alpha · beta"));
    }
}
