use std::time::Duration;

use log::{debug, info};
#[cfg(feature = "serde0")]
use serde::{Deserialize, Serialize};

use crate::acquire::Acquirer;
use crate::clean;
use crate::error::PagelexError;
use crate::keywords::{select_keywords, DEFAULT_KEYWORDS};
use crate::stem::{LancasterStemmer, Stemmer};
use crate::stopwords::StopWords;
use crate::tag::{RuleTagger, TaggedToken, Tagger};
use crate::text;

/// Everything one run of the pipeline produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
pub struct Analysis {
    /// The plain text of the page.
    pub text: String,
    /// All word tokens of the text.
    pub tokens: Vec<String>,
    /// The tokens without stop words, tagged.
    pub tagged: Vec<TaggedToken>,
    /// The most frequent tagged tokens.
    pub keywords: Vec<(TaggedToken, usize)>,
    /// The stem of every token in `tokens`.
    pub stems: Vec<String>,
}

/// Runs the text through tokenizer, stop word filter, tagger, keyword
/// selection and stemmer.
///
/// The reference data is owned by the pipeline and never changes.
#[derive(Debug, Clone)]
pub struct Pipeline<TTagger: Tagger = RuleTagger, TStemmer: Stemmer = LancasterStemmer> {
    stopwords: StopWords,
    tagger: TTagger,
    stemmer: TStemmer,
    config: Config,
}

impl Pipeline {
    /// Convenience method for creating a new [`PipelineBuilder`]
    #[inline]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::builder().build()
    }
}

impl<TTagger: Tagger, TStemmer: Stemmer> Pipeline<TTagger, TStemmer> {
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    pub fn tokenize(&self, txt: &str) -> Vec<String> {
        text::tokenize(txt)
    }

    /// Drop the stop words from the `tokens`, then tag what is left.
    ///
    /// Tags are assigned in the context of the filtered tokens.
    pub fn filter_and_tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let filtered = self.stopwords.filter(tokens);
        debug!(
            "removed {} stop words from {} tokens",
            tokens.len() - filtered.len(),
            tokens.len()
        );
        self.tagger.tag(&filtered)
    }

    /// The configured number of most frequent tagged tokens.
    pub fn select_keywords(&self, tagged: &[TaggedToken]) -> Vec<(TaggedToken, usize)> {
        select_keywords(tagged, self.config.max_keywords)
    }

    pub fn stem(&self, tokens: &[String]) -> Vec<String> {
        self.stemmer.stem_all(tokens)
    }

    /// Run all stages over the plain text.
    pub fn run(&self, txt: &str) -> Analysis {
        let tokens = self.tokenize(txt);
        info!("tokenized text into {} tokens", tokens.len());

        let tagged = self.filter_and_tag(&tokens);
        let keywords = self.select_keywords(&tagged);
        let stems = self.stem(&tokens);

        Analysis {
            text: txt.to_string(),
            tokens,
            tagged,
            keywords,
            stems,
        }
    }

    /// Fetch the page at `url`, strip its markup and run all stages over
    /// the text.
    pub async fn analyze(&self, url: &str) -> Result<Analysis, PagelexError> {
        let doc = Acquirer::new(&self.config)?.fetch(url).await?;
        let txt = clean::strip(&doc.markup);
        debug!("extracted {} bytes of text from {}", txt.len(), doc.url);
        Ok(self.run(&txt))
    }
}

#[derive(Debug, Default)]
pub struct PipelineBuilder {
    stopwords: Option<StopWords>,
    config: Option<Config>,
}

impl PipelineBuilder {
    pub fn stopwords(mut self, stopwords: StopWords) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Pipeline {
        self.build_with(RuleTagger::default(), LancasterStemmer::default())
    }

    /// Build the pipeline with a custom tagger and stemmer.
    pub fn build_with<TTagger: Tagger, TStemmer: Stemmer>(
        self,
        tagger: TTagger,
        stemmer: TStemmer,
    ) -> Pipeline<TTagger, TStemmer> {
        Pipeline {
            stopwords: self.stopwords.unwrap_or_default(),
            tagger,
            stemmer,
            config: self.config.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of keywords to select.
    max_keywords: usize,
    /// The user-agent used for requests.
    browser_user_agent: String,
    /// Timeout for requests, the client's default if not set.
    request_timeout: Option<Duration>,
    /// Whether to accept only 2XX responses or failures as well.
    http_success_only: bool,
}

impl Config {
    /// Default number of selected keywords.
    pub const DEFAULT_MAX_KEYWORDS: usize = DEFAULT_KEYWORDS;

    /// Default user agent for `pagelex`.
    pub const DEFAULT_USER_AGENT: &'static str = concat!("pagelex/", env!("CARGO_PKG_VERSION"));

    /// Convenience method to create a [`ConfigBuilder`]
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn max_keywords(&self) -> usize {
        self.max_keywords
    }

    pub fn browser_user_agent(&self) -> &str {
        &self.browser_user_agent
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    pub fn http_success_only(&self) -> bool {
        self.http_success_only
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    /// Number of keywords to select.
    max_keywords: Option<usize>,
    /// The user-agent used for requests.
    browser_user_agent: Option<String>,
    /// Timeout for requests.
    request_timeout: Option<Duration>,
    /// Whether to accept only 2XX responses or failures as well.
    http_success_only: Option<bool>,
}

impl ConfigBuilder {
    pub fn max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = Some(max_keywords);
        self
    }

    pub fn browser_user_agent<T: ToString>(mut self, browser_user_agent: T) -> Self {
        self.browser_user_agent = Some(browser_user_agent.to_string());
        self
    }

    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = Some(request_timeout);
        self
    }

    pub fn http_success_only(mut self, http_success_only: bool) -> Self {
        self.http_success_only = Some(http_success_only);
        self
    }

    pub fn build(self) -> Config {
        Config {
            max_keywords: self.max_keywords.unwrap_or(Config::DEFAULT_MAX_KEYWORDS),
            browser_user_agent: self
                .browser_user_agent
                .unwrap_or_else(|| Config::DEFAULT_USER_AGENT.to_string()),
            request_timeout: self.request_timeout,
            http_success_only: self.http_success_only.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::PosTag;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.max_keywords(), 5);
        assert!(config.browser_user_agent().starts_with("pagelex/"));
        assert_eq!(config.request_timeout(), None);
        assert!(!config.http_success_only());
    }

    #[test]
    fn configured_keyword_count() {
        let pipeline = Pipeline::builder()
            .config(Config::builder().max_keywords(1).build())
            .build();
        let analysis = pipeline.run("apple apple pear");
        assert_eq!(
            analysis.keywords,
            vec![(TaggedToken::new("apple", PosTag::NN), 2)]
        );
    }

    #[test]
    fn synthetic_stopwords() {
        let pipeline = Pipeline::builder()
            .stopwords(StopWords::from_words(&["cat"]))
            .build();
        let tagged = pipeline.filter_and_tag(&pipeline.tokenize("the cat sat"));
        let words: Vec<_> = tagged.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["the", "sat"]);
    }

    #[test]
    fn tags_in_filtered_context() {
        let pipeline = Pipeline::default();
        let tokens = pipeline.tokenize("the run");

        // next to the determiner "run" would be a noun
        let unfiltered = RuleTagger::new().tag(&tokens);
        assert_eq!(unfiltered[1], TaggedToken::new("run", PosTag::NN));

        assert_eq!(
            pipeline.filter_and_tag(&tokens),
            vec![TaggedToken::new("run", PosTag::VB)]
        );
    }

    #[test]
    fn branches_see_all_tokens() {
        let analysis = Pipeline::default().run("the cats were running");
        assert_eq!(analysis.tokens.len(), 4);
        assert_eq!(analysis.stems.len(), 4);
        assert_eq!(analysis.tagged.len(), 2);
        assert_eq!(analysis.stems, vec!["the", "cat", "wer", "run"]);
    }

    #[cfg(feature = "serde0")]
    #[test]
    fn serialize_analysis() {
        let analysis = Pipeline::default().run("cats");
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["tagged"][0]["word"], "cats");
        assert_eq!(json["stems"][0], "cat");
    }
}
