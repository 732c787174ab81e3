//! History filtering and keyword highlighting
//!
//! Substring-filters a loaded history and wraps keyword matches in visual
//! markers for display. Keywords are always literal text; no pattern
//! syntax is ever interpreted, so no escaping hazards exist.

use jobscope_core::domain::log::LogEntry;

/// Filters entries whose message contains `text`, case-insensitively.
///
/// Empty or whitespace-only filter text returns the input unchanged; a
/// blank filter means "show everything", not "match nothing".
pub fn filter_entries(entries: &[LogEntry], text: &str) -> Vec<LogEntry> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| entry.message.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Wraps every case-insensitive occurrence of each query keyword in the
/// given marker pair.
///
/// The query is split on whitespace into keywords; empty tokens are
/// dropped. Keywords are applied sequentially in token order, each pass
/// doing literal, non-overlapping left-to-right replacement over the result
/// of the previous pass. Overlapping keywords can therefore produce nested
/// or adjacent markers, which is acceptable cosmetic behavior. An empty
/// query returns the message unchanged.
pub fn highlight(message: &str, query: &str, open_mark: &str, close_mark: &str) -> String {
    let keywords: Vec<&str> = query.split_whitespace().collect();
    if keywords.is_empty() {
        return message.to_string();
    }

    let mut marked = message.to_string();
    for keyword in keywords {
        marked = wrap_occurrences(&marked, keyword, open_mark, close_mark);
    }
    marked
}

/// One replacement pass: wraps each case-insensitive occurrence of
/// `keyword` in `text` with the marker pair.
fn wrap_occurrences(text: &str, keyword: &str, open_mark: &str, close_mark: &str) -> String {
    let ranges = find_case_insensitive(text, keyword);
    if ranges.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + ranges.len() * (open_mark.len() + close_mark.len()));
    let mut cursor = 0;
    for (start, end) in ranges {
        out.push_str(&text[cursor..start]);
        out.push_str(open_mark);
        out.push_str(&text[start..end]);
        out.push_str(close_mark);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Finds non-overlapping, left-to-right byte ranges of `needle` in
/// `haystack`, ignoring case.
///
/// Matching happens on the lowercased text, with byte offsets mapped back
/// to the original. Lowercasing can change a character's byte length, so
/// a lowered-offset-to-original-offset table is kept; matches that would
/// end mid-character in the original are skipped.
fn find_case_insensitive(haystack: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle_lower = needle.to_lowercase();
    if needle_lower.is_empty() {
        return Vec::new();
    }

    let mut lowered = String::with_capacity(haystack.len());
    // offsets[i] = original byte offset that produced lowered byte i
    let mut offsets = Vec::with_capacity(haystack.len() + 1);
    for (original_idx, ch) in haystack.char_indices() {
        for lower_ch in ch.to_lowercase() {
            lowered.push(lower_ch);
            offsets.resize(lowered.len(), original_idx);
        }
    }
    offsets.push(haystack.len());

    let mut ranges = Vec::new();
    let mut pos = 0;
    while let Some(found) = lowered[pos..].find(&needle_lower) {
        let start = pos + found;
        let end = start + needle_lower.len();
        let original_start = offsets[start];
        let original_end = offsets[end.min(lowered.len())];

        // reject matches that split a multi-byte lowering in the original
        if original_end > original_start
            && haystack.is_char_boundary(original_start)
            && haystack.is_char_boundary(original_end)
            && (end == lowered.len() || offsets[end] != offsets[end - 1])
        {
            ranges.push((original_start, original_end));
            pos = end;
        } else {
            // step over the whole character; a byte bump could land
            // mid-character and make the next slice panic
            pos = start + lowered[start..].chars().next().map_or(1, char::len_utf8);
        }
    }
    ranges
}
