//! Small text-scanning helpers shared by the heuristics

/// Identifier character as C (and the `\b` word boundary) sees it
pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Byte offsets where `word` occurs without an identifier character right before it
pub(crate) fn word_starts<'a>(text: &'a str, word: &'a str) -> impl Iterator<Item = usize> + 'a {
    text.match_indices(word).filter_map(move |(idx, _)| {
        let glued = text[..idx].chars().next_back().is_some_and(is_ident_char);
        (!glued).then_some(idx)
    })
}

/// First offset at or after `pos` that is not whitespace (or `text.len()`)
pub(crate) fn skip_whitespace(text: &str, pos: usize) -> usize {
    text[pos..]
        .find(|c: char| !c.is_whitespace())
        .map_or(text.len(), |off| pos + off)
}
