//! Console output of a pipeline run.

use std::fmt::Display;
use std::io::{self, Write};

use log::error;

use crate::pipeline::{Analysis, Pipeline};
use crate::stem::Stemmer;
use crate::tag::{TaggedToken, Tagger};

/// Printed between two stages.
pub const DIVIDER: &str = "---------------------------------------------------------------------";

pub const URL_PROMPT: &str = "Please enter your website URL: ";

pub const INVALID_URL: &str = "You must supply a valid URL!";

pub const PARSING_HEADER: &str = "Input and Output/HTML Parsing";
pub const PRE_PROCESSING_HEADER: &str = "Pre Processing:";
pub const TAGGING_HEADER: &str = "POS Tagging/Removing Stop Words:";
pub const KEYWORDS_HEADER: &str = "Selecting Keywords:";
pub const STEMMING_HEADER: &str = "Word Stemming:";

/// How a reported run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every stage ran and was written.
    Completed,
    /// The page could not be fetched, no stage ran.
    FetchFailed,
}

impl Outcome {
    /// The process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed => 0,
            Outcome::FetchFailed => 1,
        }
    }
}

/// Writes the stages of an [`Analysis`] section by section.
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Analyze the page at `url` with the `pipeline` and write the result.
    ///
    /// If the page can't be fetched only the failure is written.
    pub async fn analyze<TTagger: Tagger, TStemmer: Stemmer>(
        &mut self,
        pipeline: &Pipeline<TTagger, TStemmer>,
        url: &str,
    ) -> io::Result<Outcome> {
        match pipeline.analyze(url).await {
            Ok(analysis) => {
                self.write_analysis(&analysis)?;
                Ok(Outcome::Completed)
            }
            Err(err) => {
                error!("failed to fetch {:?}: {}", url, err);
                self.write_failure(&err)?;
                Ok(Outcome::FetchFailed)
            }
        }
    }

    /// Write the whole analysis, each section introduced by its header.
    pub fn write_analysis(&mut self, analysis: &Analysis) -> io::Result<()> {
        self.write_text(&analysis.text)?;
        self.write_tokens(&analysis.tokens)?;
        self.write_tagged(&analysis.tagged)?;
        self.write_keywords(&analysis.keywords)?;
        self.write_stems(&analysis.tokens, &analysis.stems)?;
        self.out.flush()
    }

    pub fn write_text(&mut self, txt: &str) -> io::Result<()> {
        writeln!(self.out, "{}", PARSING_HEADER)?;
        writeln!(self.out, "{}", txt)
    }

    pub fn write_tokens(&mut self, tokens: &[String]) -> io::Result<()> {
        self.section(PRE_PROCESSING_HEADER)?;
        writeln!(self.out, "{}", list(tokens.iter().map(|t| quoted(t))))
    }

    pub fn write_tagged(&mut self, tagged: &[TaggedToken]) -> io::Result<()> {
        self.section(TAGGING_HEADER)?;
        writeln!(self.out, "{}", list(tagged.iter().map(pair)))
    }

    pub fn write_keywords(&mut self, keywords: &[(TaggedToken, usize)]) -> io::Result<()> {
        self.section(KEYWORDS_HEADER)?;
        for (token, count) in keywords {
            writeln!(self.out, "({}, {})", pair(token), count)?;
        }
        Ok(())
    }

    pub fn write_stems(&mut self, tokens: &[String], stems: &[String]) -> io::Result<()> {
        self.section(STEMMING_HEADER)?;
        for (word, stem) in tokens.iter().zip(stems) {
            writeln!(self.out, "Original word: {} || Stemmed word: {}", word, stem)?;
        }
        Ok(())
    }

    /// Report a failed fetch, no stage after the parsing header follows.
    pub fn write_failure<E: Display>(&mut self, err: E) -> io::Result<()> {
        writeln!(self.out, "{}", PARSING_HEADER)?;
        writeln!(self.out, "{}", err)?;
        writeln!(self.out, "{}", INVALID_URL)?;
        self.out.flush()
    }

    fn section(&mut self, header: &str) -> io::Result<()> {
        writeln!(self.out, "{}", DIVIDER)?;
        writeln!(self.out, "{}", header)
    }
}

fn quoted(s: &str) -> String {
    format!("'{}'", s)
}

fn pair(token: &TaggedToken) -> String {
    format!("({}, {})", quoted(&token.word), quoted(token.tag.as_str()))
}

fn list<I: Iterator<Item = String>>(items: I) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;
    use crate::tag::PosTag;

    fn written<F: FnOnce(&mut Report<Vec<u8>>) -> io::Result<()>>(f: F) -> String {
        let mut report = Report::new(Vec::new());
        f(&mut report).unwrap();
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn divider_width() {
        assert_eq!(DIVIDER.len(), 69);
        assert!(DIVIDER.chars().all(|c| c == '-'));
    }

    #[test]
    fn tokens_section() {
        let tokens = vec!["The".to_string(), "cat".to_string()];
        assert_eq!(
            written(|r| r.write_tokens(&tokens)),
            format!("{}\nPre Processing:\n['The', 'cat']\n", DIVIDER)
        );
    }

    #[test]
    fn keywords_section() {
        let keywords = vec![
            (TaggedToken::new("cat", PosTag::NN), 2),
            (TaggedToken::new("my", PosTag::PRPS), 1),
        ];
        assert_eq!(
            written(|r| r.write_keywords(&keywords)),
            format!(
                "{}\nSelecting Keywords:\n(('cat', 'NN'), 2)\n(('my', 'PRP$'), 1)\n",
                DIVIDER
            )
        );
    }

    #[test]
    fn failure() {
        assert_eq!(
            written(|r| r.write_failure("Request failed")),
            "Input and Output/HTML Parsing\nRequest failed\nYou must supply a valid URL!\n"
        );
    }

    #[test]
    fn full_report() {
        let analysis = Pipeline::default().run("Dogs bark.");
        let out = written(|r| r.write_analysis(&analysis));
        let expected = format!(
            "Input and Output/HTML Parsing\nDogs bark.\n\
             {d}\nPre Processing:\n['Dogs', 'bark']\n\
             {d}\nPOS Tagging/Removing Stop Words:\n[('Dogs', 'NNPS'), ('bark', 'NN')]\n\
             {d}\nSelecting Keywords:\n(('Dogs', 'NNPS'), 1)\n(('bark', 'NN'), 1)\n\
             {d}\nWord Stemming:\nOriginal word: Dogs || Stemmed word: dog\n\
             Original word: bark || Stemmed word: bark\n",
            d = DIVIDER
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_analysis() {
        let out = written(|r| r.write_analysis(&Pipeline::default().run("")));
        assert!(out.contains("Pre Processing:\n[]\n"));
        assert!(out.contains("POS Tagging/Removing Stop Words:\n[]\n"));
        assert!(out.ends_with("Word Stemming:\n"));
    }
}
