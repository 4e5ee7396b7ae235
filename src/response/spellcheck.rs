use serde_json::Value;

use crate::response::namedlist::{lenient_u64, named_list_pairs};

/// A spelling alternative for one misspelled term.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestedWord {
    pub word: String,
    /// Corpus frequency, present with `spellcheck.extendedResults`.
    pub freq: Option<u64>,
}

/// Suggestions for a single query term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestion {
    pub term: String,
    pub num_found: u64,
    pub start_offset: u64,
    pub end_offset: u64,
    /// Frequency of the original term, present with extended results.
    pub original_frequency: Option<u64>,
    pub words: Vec<SuggestedWord>,
}

/// A whole-query respelling with its hit count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collation {
    pub query: String,
    pub hits: u64,
    /// Original term to corrected term, present with
    /// `spellcheck.collateExtendedResults`.
    pub corrections: Vec<(String, String)>,
}

/// The `spellcheck` section of a select response.
///
/// Suggestions arrive as a NamedList keyed by misspelled term; `collations`
/// and `correctlySpelled` live inside that list on Solr < 5 and as siblings
/// of it on Solr >= 5. Both layouts are accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpellcheckResult {
    pub suggestions: Vec<Suggestion>,
    pub correctly_spelled: Option<bool>,
    pub collations: Vec<Collation>,
}

impl SpellcheckResult {
    pub fn parse(value: &Value) -> Self {
        let mut result = Self::default();
        for (key, entry) in named_list_pairs(&value["suggestions"]) {
            match key.as_str() {
                "correctlySpelled" => result.correctly_spelled = entry.as_bool(),
                "collation" => result.collations.push(parse_collation(&entry)),
                _ => result.suggestions.push(parse_suggestion(key, &entry)),
            }
        }
        if let Some(spelled) = value["correctlySpelled"].as_bool() {
            result.correctly_spelled = Some(spelled);
        }
        for (key, entry) in named_list_pairs(&value["collations"]) {
            if key == "collation" {
                result.collations.push(parse_collation(&entry));
            }
        }
        result
    }

    pub fn suggestion(&self, term: &str) -> Option<&Suggestion> {
        self.suggestions.iter().find(|s| s.term == term)
    }

    /// The best collation, the first one Solr returned.
    pub fn collation(&self) -> Option<&Collation> {
        self.collations.first()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
            && self.collations.is_empty()
            && self.correctly_spelled.is_none()
    }
}

fn parse_suggestion(term: String, entry: &Value) -> Suggestion {
    let words = entry["suggestion"]
        .as_array()
        .map(|words| {
            words
                .iter()
                .filter_map(|word| match word {
                    // Plain form: just the replacement word.
                    Value::String(s) => Some(SuggestedWord {
                        word: s.clone(),
                        freq: None,
                    }),
                    // Extended form: word plus frequency.
                    Value::Object(map) => Some(SuggestedWord {
                        word: map.get("word")?.as_str()?.to_string(),
                        freq: map.get("freq").and_then(lenient_u64),
                    }),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();
    Suggestion {
        term,
        num_found: entry["numFound"].as_u64().unwrap_or(0),
        start_offset: entry["startOffset"].as_u64().unwrap_or(0),
        end_offset: entry["endOffset"].as_u64().unwrap_or(0),
        original_frequency: entry["origFreq"].as_u64(),
        words,
    }
}

fn parse_collation(entry: &Value) -> Collation {
    // Without collateExtendedResults the collation is a bare string.
    if let Some(query) = entry.as_str() {
        return Collation {
            query: query.to_string(),
            ..Default::default()
        };
    }
    let corrections = named_list_pairs(&entry["misspellingsAndCorrections"])
        .into_iter()
        .filter_map(|(original, corrected)| {
            Some((original, corrected.as_str()?.to_string()))
        })
        .collect();
    Collation {
        query: entry["collationQuery"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        hits: entry["hits"].as_u64().unwrap_or(0),
        corrections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_suggestions_with_extended_results() {
        let value = json!({
            "suggestions": [
                "delll",
                {
                    "numFound": 1,
                    "startOffset": 0,
                    "endOffset": 5,
                    "origFreq": 0,
                    "suggestion": [{"word": "dell", "freq": 12}]
                }
            ]
        });
        let result = SpellcheckResult::parse(&value);
        let sugg = result.suggestion("delll").unwrap();
        assert_eq!(sugg.num_found, 1);
        assert_eq!(sugg.end_offset, 5);
        assert_eq!(sugg.original_frequency, Some(0));
        assert_eq!(sugg.words[0].word, "dell");
        assert_eq!(sugg.words[0].freq, Some(12));
    }

    #[test]
    fn test_plain_word_suggestions() {
        let value = json!({
            "suggestions": [
                "ipood",
                {"numFound": 1, "startOffset": 0, "endOffset": 5, "suggestion": ["ipod"]}
            ]
        });
        let result = SpellcheckResult::parse(&value);
        let words = &result.suggestion("ipood").unwrap().words;
        assert_eq!(words[0].word, "ipod");
        assert_eq!(words[0].freq, None);
    }

    #[test]
    fn test_legacy_layout_collation_inside_suggestions() {
        let value = json!({
            "suggestions": [
                "delll",
                {"numFound": 1, "startOffset": 0, "endOffset": 5, "suggestion": ["dell"]},
                "correctlySpelled",
                false,
                "collation",
                "dell ultrasharp"
            ]
        });
        let result = SpellcheckResult::parse(&value);
        assert_eq!(result.correctly_spelled, Some(false));
        assert_eq!(result.collation().unwrap().query, "dell ultrasharp");
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_modern_layout_with_extended_collations() {
        let value = json!({
            "suggestions": ["delll", {"numFound": 1, "startOffset": 0, "endOffset": 5, "suggestion": ["dell"]}],
            "correctlySpelled": false,
            "collations": [
                "collation",
                {
                    "collationQuery": "dell ultrasharp",
                    "hits": 7,
                    "misspellingsAndCorrections": ["delll", "dell"]
                }
            ]
        });
        let result = SpellcheckResult::parse(&value);
        let collation = result.collation().unwrap();
        assert_eq!(collation.query, "dell ultrasharp");
        assert_eq!(collation.hits, 7);
        assert_eq!(
            collation.corrections,
            vec![("delll".to_string(), "dell".to_string())]
        );
    }

    #[test]
    fn test_absent_section_is_empty() {
        assert!(SpellcheckResult::parse(&json!(null)).is_empty());
    }
}
