pub use acquire::{Acquirer, RawDocument};
pub use error::PagelexError;
pub use keywords::select_keywords;
pub use pipeline::{Analysis, Config, ConfigBuilder, Pipeline, PipelineBuilder};
pub use stem::{LancasterStemmer, Stemmer};
pub use stopwords::StopWords;
pub use tag::{PosTag, RuleTagger, TaggedToken, Tagger};

pub mod acquire;
pub mod clean;
mod error;
pub mod keywords;
pub mod pipeline;
pub mod report;
pub mod stem;
pub mod stopwords;
pub mod tag;
pub mod text;

/// Rexported to implement custom cleaners.
pub use select;
