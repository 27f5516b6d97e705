//! Lancaster (Paice/Husk) stemmer.
//!
//! Rules are written as `<reversed ending>[*]<remove count><append>[>|.]`,
//! e.g. `"sei3y>"` turns a trailing `ies` into `y` and continues. A `*`
//! restricts the rule to words no other rule has touched yet, `.` stops the
//! stemming after the rule was applied.

use fnv::FnvHashMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::PagelexError;

/// Reduces a word to an approximate root form.
pub trait Stemmer {
    fn stem(&self, word: &str) -> String;

    /// Stem every token independently, length and order are kept.
    fn stem_all(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|token| self.stem(token)).collect()
    }
}

/// The standard Lancaster rule table.
pub const DEFAULT_RULES: [&str; 115] = [
    "ai*2.", "a*1.", "bb1.", "city3s.", "ci2>", "cn1t>", "dd1.", "dei3y>", "deec2ss.", "dee1.",
    "de2>", "dooh4>", "e1>", "feil1v.", "fi2>", "gni3>", "gai3y.", "ga2>", "gg1.", "ht*2.",
    "hsiug5ct.", "hsi3>", "i*1.", "i1y>", "ji1d.", "juf1s.", "ju1d.", "jo1d.", "jeh1r.",
    "jrev1t.", "jsim2t.", "jn1d.", "j1s.", "lbaifi6.", "lbai4y.", "lba3>", "lbi3.", "lib2l>",
    "lc1.", "lufi4y.", "luf3>", "lu2.", "lai3>", "lau3>", "la2>", "ll1.", "mui3.", "mu*2.",
    "msi3>", "mm1.", "nois4j>", "noix4ct.", "noi3>", "nai3>", "na2>", "nee0.", "ne2>", "nn1.",
    "pihs4>", "pp1.", "re2>", "rae0.", "ra2.", "ro2>", "ru2>", "rr1.", "rt1>", "rei3y>",
    "sei3y>", "sis2.", "si2>", "ssen4>", "ss0.", "suo3>", "su*2.", "s*1>", "s0.", "tacilp4y.",
    "ta2>", "tnem4>", "tne3>", "tna3>", "tpir2b.", "tpro2b.", "tcud1.", "tpmus2.", "tpec2iv.",
    "tulo2v.", "tsis0.", "tsi3>", "tt1.", "uqi3.", "ugo1.", "vis3j>", "vie0.", "vi2>", "ylb1>",
    "yli3y>", "ylp0.", "yl2>", "ygo1.", "yhp1.", "ymo1.", "ypo1.", "yti3>", "yte3>", "ytl2.",
    "yrtsi5.", "yra3>", "yro3>", "yfi3.", "ycn2t>", "yca3>", "zi2>", "zy1s.",
];

lazy_static! {
    static ref RE_RULE: Regex = Regex::new(r"^([a-z]+)(\*?)(\d)([a-z]*)([>.]?)$").unwrap();
}

const VOWELS: &str = "aeiouy";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    /// The ending the word must have, in reading order.
    ending: Vec<char>,
    intact_only: bool,
    remove: usize,
    append: String,
    proceed: bool,
}

impl Rule {
    fn parse(rule: &str) -> Result<Self, PagelexError> {
        let caps = RE_RULE
            .captures(rule)
            .ok_or_else(|| PagelexError::InvalidStemmingRule {
                rule: rule.to_string(),
            })?;
        Ok(Rule {
            ending: caps[1].chars().rev().collect(),
            intact_only: !caps[2].is_empty(),
            remove: caps[3].parse().map_err(|_| PagelexError::InvalidStemmingRule {
                rule: rule.to_string(),
            })?,
            append: caps[4].to_string(),
            proceed: &caps[5] == ">",
        })
    }

    /// The last letter of the ending, rules are grouped by it.
    fn key(&self) -> char {
        self.ending[self.ending.len() - 1]
    }
}

#[derive(Debug, Clone)]
pub struct LancasterStemmer {
    rules: FnvHashMap<char, Vec<Rule>>,
}

impl Default for LancasterStemmer {
    fn default() -> Self {
        lazy_static! {
            static ref DEFAULT: LancasterStemmer =
                LancasterStemmer::with_rules(&DEFAULT_RULES).unwrap();
        }
        DEFAULT.clone()
    }
}

impl LancasterStemmer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stemmer with a custom rule table.
    ///
    /// Rules sharing the same last letter are tried in the given order.
    pub fn with_rules(rules: &[&str]) -> Result<Self, PagelexError> {
        let mut table: FnvHashMap<char, Vec<Rule>> = FnvHashMap::default();
        for rule in rules {
            let rule = Rule::parse(rule)?;
            table.entry(rule.key()).or_default().push(rule);
        }
        Ok(Self { rules: table })
    }

    fn stem_chars(&self, mut word: Vec<char>) -> Vec<char> {
        let intact = word.clone();
        loop {
            let last = match last_letter(&word) {
                Some(last) => last,
                None => return word,
            };
            let rules = match self.rules.get(&last) {
                Some(rules) => rules,
                None => return word,
            };

            let applied = rules.iter().find(|rule| {
                word.ends_with(&rule.ending)
                    && (!rule.intact_only || word == intact)
                    && is_acceptable(&word, rule.remove)
            });

            match applied {
                Some(rule) => {
                    word.truncate(word.len() - rule.remove);
                    word.extend(rule.append.chars());
                    if !rule.proceed {
                        return word;
                    }
                }
                None => return word,
            }
        }
    }
}

impl Stemmer for LancasterStemmer {
    fn stem(&self, word: &str) -> String {
        let lower: Vec<char> = word.to_lowercase().chars().collect();
        self.stem_chars(lower).into_iter().collect()
    }
}

/// The last char of the leading run of letters.
fn last_letter(word: &[char]) -> Option<char> {
    word.iter().take_while(|c| c.is_alphabetic()).last().copied()
}

/// Whether removing `remove` chars leaves an acceptable stem.
fn is_acceptable(word: &[char], remove: usize) -> bool {
    if word.len() < remove {
        return false;
    }
    let left = word.len() - remove;
    match word.first() {
        Some(c) if VOWELS.contains(*c) => left >= 2,
        Some(_) => left >= 3 && (VOWELS.contains(word[1]) || VOWELS.contains(word[2])),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        LancasterStemmer::new().stem(word)
    }

    #[test]
    fn parses_default_rules() {
        let stemmer = LancasterStemmer::new();
        let total: usize = stemmer.rules.values().map(Vec::len).sum();
        assert_eq!(total, DEFAULT_RULES.len());
        assert_eq!(
            Rule::parse("sei3y>").unwrap(),
            Rule {
                ending: vec!['i', 'e', 's'],
                intact_only: false,
                remove: 3,
                append: "y".to_string(),
                proceed: true,
            }
        );
    }

    #[test]
    fn rejects_invalid_rules() {
        assert!(LancasterStemmer::with_rules(&["abc"]).is_err());
        assert!(LancasterStemmer::with_rules(&["Sei3y>"]).is_err());
        assert!(LancasterStemmer::with_rules(&["s*1>", "s1x!"]).is_err());
    }

    #[test]
    fn known_stems() {
        assert_eq!(stem("maximum"), "maxim");
        assert_eq!(stem("presumably"), "presum");
        assert_eq!(stem("owed"), "ow");
        assert_eq!(stem("saying"), "say");
        assert_eq!(stem("cement"), "cem");
        assert_eq!(stem("meant"), "meant");
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("happiness"), "happy");
        assert_eq!(stem("cats"), "cat");
    }

    #[test]
    fn lowercases_and_respects_minimum_length() {
        assert_eq!(stem("The"), "the");
        assert_eq!(stem("ran"), "ran");
        assert_eq!(stem("a"), "a");
        assert_eq!(stem(""), "");
    }

    #[test]
    fn non_letters_stop_stemming() {
        assert_eq!(stem("2018"), "2018");
    }

    #[test]
    fn custom_rules() {
        let stemmer = LancasterStemmer::with_rules(&["gni3."]).unwrap();
        assert_eq!(stemmer.stem("walking"), "walk");
        assert_eq!(stemmer.stem("walked"), "walked");
    }

    #[test]
    fn stem_all_keeps_length() {
        let stemmer = LancasterStemmer::new();
        let tokens: Vec<String> = ["The", "cat", "sat", "The", "cat", "ran", "fast"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            stemmer.stem_all(&tokens),
            vec!["the", "cat", "sat", "the", "cat", "ran", "fast"]
        );
        assert!(stemmer.stem_all(&[]).is_empty());
    }
}
