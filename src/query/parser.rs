use crate::analysis::stopword::StopWordSet;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, ErrorKind, Result};
use crate::query::types::{Query, QueryWord};

/// Classifies a single token.
///
/// A leading `-` marks the word negative and is stripped before the checks.
/// The remainder must be non-empty, must not start with another `-`, and
/// must not contain control bytes. The stop check runs last, so `-stopword`
/// parses fine and is discarded downstream.
pub fn parse_query_word(stop_words: &StopWordSet, text: &str) -> Result<QueryWord> {
    let (data, is_minus) = match text.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (text, false),
    };
    if data.is_empty() || data.starts_with('-') || !is_valid_word(data) {
        return Err(Error::new(
            ErrorKind::MalformedTerm,
            format!("query word {:?} is empty after '-', doubles '-', or contains control bytes", text),
        ));
    }
    Ok(QueryWord {
        data: data.to_string(),
        is_minus,
        is_stop: stop_words.contains(data),
    })
}

/// Parses a raw query into sorted, deduplicated plus/minus word lists.
///
/// Stop tokens are dropped regardless of polarity. An empty raw string is
/// an error; a query of nothing but stop words parses to an empty `Query`.
pub fn parse_query(stop_words: &StopWordSet, text: &str) -> Result<Query> {
    if text.is_empty() {
        return Err(Error::new(ErrorKind::EmptyQuery, "query string is empty"));
    }
    let mut query = Query::default();
    for word in split_into_words(text) {
        let query_word = parse_query_word(stop_words, word)?;
        if query_word.is_stop {
            continue;
        }
        if query_word.is_minus {
            query.minus_words.push(query_word.data);
        } else {
            query.plus_words.push(query_word.data);
        }
    }
    query.plus_words.sort_unstable();
    query.plus_words.dedup();
    query.minus_words.sort_unstable();
    query.minus_words.dedup();
    Ok(query)
}
