use regex_syntax::{hir::literal::Extractor, parse};

/// Reduce a token pattern to the exact, finite set of literals it matches.
///
/// Returns `None` when the pattern is not a plain alternation of literals
/// (character classes, repetition, look-around the `regex_syntax` parser
/// rejects, ...). Such patterns must go through a real regex engine; the
/// rest can be matched with a single Aho-Corasick automaton.
///
/// Anchors and word boundaries extract as empty exact literals, so any
/// pattern with a look assertion is also rejected. So are non-ASCII
/// literals: the automaton only folds ASCII case.
///
/// Literals are lowercased; callers match them ASCII case-insensitively.
pub(crate) fn exact_literals(pattern: &str) -> Option<Vec<String>> {
    let hir = parse(pattern).ok()?;
    if !hir.properties().look_set().is_empty() {
        return None;
    }

    let mut extractor = Extractor::new();
    extractor.kind(regex_syntax::hir::literal::ExtractKind::Prefix);

    let seq = extractor.extract(&hir);
    if !seq.is_exact() {
        return None;
    }

    let mut literals = Vec::new();
    for lit in seq.literals()? {
        let s = std::str::from_utf8(lit.as_bytes()).ok()?;
        if s.is_empty() || !s.is_ascii() {
            return None;
        }
        literals.push(s.to_lowercase());
    }
    if literals.is_empty() {
        return None;
    }
    Some(literals)
}
