//! Part-of-speech tagging with Penn Treebank labels.
//!
//! [`RuleTagger`] combines a closed-class lexicon, suffix heuristics and a
//! contextual pass over the previous tag.

use std::fmt;

use fnv::FnvHashMap;
use lazy_static::lazy_static;
#[cfg(feature = "serde0")]
use serde::{Deserialize, Serialize};

/// Penn Treebank part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
pub enum PosTag {
    /// Coordinating conjunction
    CC,
    /// Cardinal number
    CD,
    /// Determiner
    DT,
    /// Existential there
    EX,
    /// Foreign word
    FW,
    /// Preposition or subordinating conjunction
    IN,
    /// Adjective
    JJ,
    /// Adjective, comparative
    JJR,
    /// Adjective, superlative
    JJS,
    /// Modal
    MD,
    /// Noun, singular or mass
    NN,
    /// Noun, plural
    NNS,
    /// Proper noun, singular
    NNP,
    /// Proper noun, plural
    NNPS,
    /// Predeterminer
    PDT,
    /// Possessive ending
    POS,
    /// Personal pronoun
    PRP,
    /// Possessive pronoun
    PRPS,
    /// Adverb
    RB,
    /// Adverb, comparative
    RBR,
    /// Adverb, superlative
    RBS,
    /// Particle
    RP,
    /// to
    TO,
    /// Interjection
    UH,
    /// Verb, base form
    VB,
    /// Verb, past tense
    VBD,
    /// Verb, gerund or present participle
    VBG,
    /// Verb, past participle
    VBN,
    /// Verb, non-3rd person singular present
    VBP,
    /// Verb, 3rd person singular present
    VBZ,
    /// Wh-determiner
    WDT,
    /// Wh-pronoun
    WP,
    /// Wh-adverb
    WRB,
}

impl PosTag {
    /// The Treebank label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::CC => "CC",
            PosTag::CD => "CD",
            PosTag::DT => "DT",
            PosTag::EX => "EX",
            PosTag::FW => "FW",
            PosTag::IN => "IN",
            PosTag::JJ => "JJ",
            PosTag::JJR => "JJR",
            PosTag::JJS => "JJS",
            PosTag::MD => "MD",
            PosTag::NN => "NN",
            PosTag::NNS => "NNS",
            PosTag::NNP => "NNP",
            PosTag::NNPS => "NNPS",
            PosTag::PDT => "PDT",
            PosTag::POS => "POS",
            PosTag::PRP => "PRP",
            PosTag::PRPS => "PRP$",
            PosTag::RB => "RB",
            PosTag::RBR => "RBR",
            PosTag::RBS => "RBS",
            PosTag::RP => "RP",
            PosTag::TO => "TO",
            PosTag::UH => "UH",
            PosTag::VB => "VB",
            PosTag::VBD => "VBD",
            PosTag::VBG => "VBG",
            PosTag::VBN => "VBN",
            PosTag::VBP => "VBP",
            PosTag::VBZ => "VBZ",
            PosTag::WDT => "WDT",
            PosTag::WP => "WP",
            PosTag::WRB => "WRB",
        }
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::VB | PosTag::VBD | PosTag::VBG | PosTag::VBN | PosTag::VBP | PosTag::VBZ
        )
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::NNPS)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A word together with its part-of-speech.
///
/// Two tagged tokens are only equal if both the word and the tag match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
pub struct TaggedToken {
    pub word: String,
    pub tag: PosTag,
}

impl TaggedToken {
    pub fn new<T: ToString>(word: T, tag: PosTag) -> Self {
        Self {
            word: word.to_string(),
            tag,
        }
    }
}

/// Assigns a part-of-speech to every token of a sequence.
pub trait Tagger {
    /// Tag the `tokens`, the result has the same length and order.
    ///
    /// A token's tag may depend on its neighbours in `tokens`.
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}

macro_rules! lexicon {
    ($($tag:ident => [$($word:expr),* $(,)?],)*) => {{
        let mut map = FnvHashMap::default();
        $(
            $(
                map.insert($word, PosTag::$tag);
            )*
        )*
        map
    }};
}

lazy_static! {
    /// Closed-class words and frequent irregular forms, lowercase.
    static ref LEXICON: FnvHashMap<&'static str, PosTag> = lexicon! {
        CC => ["and", "but", "or", "nor", "yet", "plus", "either", "neither"],
        DT => ["the", "a", "an", "this", "that", "these", "those", "each", "every",
            "some", "any", "no", "another", "both", "all"],
        EX => ["there"],
        IN => ["of", "in", "on", "at", "by", "for", "with", "about", "against",
            "between", "into", "through", "during", "before", "after", "above",
            "below", "from", "up", "down", "out", "off", "over", "under", "if",
            "because", "as", "until", "while", "than", "since", "although",
            "though", "upon", "within", "without", "among", "across", "behind",
            "beyond", "near", "via", "per", "whether"],
        JJ => ["new", "good", "great", "big", "small", "old", "high", "low",
            "long", "little", "own", "other", "same", "few", "first", "last",
            "next", "such", "free", "important", "public", "able", "open"],
        JJR => ["more", "less", "better", "worse", "bigger", "smaller", "larger",
            "higher", "lower", "older", "newer"],
        JJS => ["most", "least", "best", "worst", "biggest", "largest", "highest"],
        MD => ["can", "could", "will", "would", "shall", "should", "may", "might",
            "must", "cannot", "wont", "cant"],
        PRP => ["i", "me", "you", "he", "him", "she", "it", "we", "us", "they",
            "them", "myself", "yourself", "himself", "herself", "itself",
            "ourselves", "themselves"],
        PRPS => ["my", "your", "his", "her", "its", "our", "their"],
        RB => ["not", "very", "too", "so", "just", "only", "also", "now", "then",
            "here", "again", "once", "always", "never", "often", "still", "even",
            "already", "soon", "almost", "ever", "back", "away", "however", "fast",
            "well", "together", "instead", "perhaps", "dont", "doesnt", "didnt",
            "isnt", "wasnt", "arent", "werent"],
        TO => ["to"],
        UH => ["oh", "yes", "hello", "hi", "ok", "okay", "wow", "please"],
        VB => ["be", "go", "get", "make", "take", "see", "know",
            "use", "find", "give", "tell", "work", "call", "try", "need", "keep",
            "let", "begin", "help", "show", "run"],
        VBD => ["was", "were", "did", "had", "said", "went", "got", "made",
            "took", "saw", "knew", "gave", "told", "found", "thought", "came",
            "became", "began", "kept", "left", "felt", "brought", "ran", "sat",
            "stood", "wrote", "spoke", "ate", "drove", "chose", "held", "met",
            "paid", "sent", "built", "lost", "won", "bought", "caught", "taught"],
        VBG => ["being", "having", "doing", "going", "nothing"],
        VBN => ["been", "done", "gone", "known", "seen", "taken", "given",
            "written", "spoken", "eaten", "driven", "chosen", "begun", "shown",
            "grown", "drawn", "broken", "forgotten"],
        VBP => ["am", "are", "do", "have"],
        VBZ => ["is", "has", "does", "says", "goes", "gets", "makes"],
        WDT => ["which", "whatever"],
        WP => ["who", "whom", "what", "whoever", "whose"],
        WRB => ["when", "where", "why", "how", "whenever", "wherever"],
    };
}

/// Adjective suffixes, checked after the verb and adverb suffixes.
const ADJECTIVE_SUFFIXES: [&str; 11] = [
    "ous", "ful", "able", "ible", "ive", "less", "ical", "ic", "ish", "ary", "al",
];

/// Noun suffixes that would otherwise look like a plural or adjective.
const NOUN_SUFFIXES: [&str; 8] = [
    "ness", "ment", "tion", "sion", "ity", "ism", "ship", "ance",
];

/// Deterministic rule based tagger.
#[derive(Debug, Clone, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        RuleTagger
    }

    /// The tag of `word` without looking at its neighbours.
    pub fn lexical_tag(&self, word: &str) -> PosTag {
        let lower = word.to_lowercase();
        if let Some(tag) = LEXICON.get(lower.as_str()) {
            return *tag;
        }
        if word.chars().all(|c| c.is_numeric()) {
            return PosTag::CD;
        }
        if word.chars().next().map(char::is_uppercase).unwrap_or_default() {
            return if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
                PosTag::NNPS
            } else {
                PosTag::NNP
            };
        }
        if !word.chars().any(|c| c.is_ascii_alphabetic()) {
            return if word.chars().any(char::is_numeric) {
                PosTag::CD
            } else {
                PosTag::FW
            };
        }
        suffix_tag(&lower)
    }

    /// Adjust `tag` given the tag of the previous token.
    fn contextual_tag(&self, prev: Option<(&str, PosTag)>, word: &str, tag: PosTag) -> PosTag {
        let (prev_word, prev_tag) = match prev {
            Some(prev) => prev,
            None => return tag,
        };
        match prev_tag {
            PosTag::MD | PosTag::TO if tag.is_verb() || tag == PosTag::NN => {
                if tag == PosTag::NN && !looks_like_base_verb(word) {
                    tag
                } else {
                    PosTag::VB
                }
            }
            PosTag::DT | PosTag::PRPS | PosTag::JJ | PosTag::IN
                if matches!(tag, PosTag::VB | PosTag::VBP) =>
            {
                PosTag::NN
            }
            PosTag::VBZ | PosTag::VBD | PosTag::VBP | PosTag::VB
                if tag == PosTag::VBD && is_auxiliary(prev_word) =>
            {
                PosTag::VBN
            }
            PosTag::PRP | PosTag::NNS if tag == PosTag::VB => PosTag::VBP,
            _ => tag,
        }
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for word in tokens {
            let lexical = self.lexical_tag(word);
            let tag = {
                let prev = tagged.last().map(|t| (t.word.as_str(), t.tag));
                self.contextual_tag(prev, word, lexical)
            };
            tagged.push(TaggedToken::new(word, tag));
        }
        tagged
    }
}

fn suffix_tag(lower: &str) -> PosTag {
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::NN;
    }
    if lower.len() > 4 && lower.ends_with("ing") {
        return PosTag::VBG;
    }
    if lower.len() > 3 && lower.ends_with("ed") {
        return PosTag::VBD;
    }
    if lower.len() > 3 && lower.ends_with("ly") {
        return PosTag::RB;
    }
    if lower.len() > 3 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::JJ;
    }
    if lower.len() > 4 && lower.ends_with("est") {
        return PosTag::JJS;
    }
    if lower.len() > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return PosTag::NNS;
    }
    PosTag::NN
}

fn looks_like_base_verb(word: &str) -> bool {
    let lower = word.to_lowercase();
    !NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

fn is_auxiliary(word: &str) -> bool {
    matches!(
        word.to_lowercase().as_str(),
        "has" | "have" | "had" | "having" | "is" | "are" | "was" | "were" | "be" | "been"
            | "being" | "am" | "get" | "got"
    )
}
