/// Derives a column name from an identifier.
///
/// The identifier is walked one character at a time: every uppercase
/// character past position zero gets an underscore inserted before it, and
/// everything is lowercased. `UserName` becomes `user_name` and `ID` becomes
/// `i_d` -- the rule is strictly per-character, with no acronym grouping, so
/// existing consumers see stable output. A different spelling is declared
/// with `#[column("...")]`.
pub(crate) fn column_name(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);

    for (position, ch) in identifier.chars().enumerate() {
        if position > 0 && ch.is_uppercase() {
            out.push('_');
        }
        out.extend(ch.to_lowercase());
    }

    out
}

/// Default table name for an entity: the snake-cased type name, pluralized.
pub(crate) fn table_name(type_name: &str) -> String {
    pluralizer::pluralize(&column_name(type_name), 2, false)
}
