//! Exact-or-abbreviated flag matching.

fn single_char(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some() && chars.next().is_none()
}

/// Whether `token` denotes the registered option `name`.
///
/// When either side is a single character the match is first-character
/// identity, which lets `v` (from `-v`) satisfy `version` without an alias
/// table. Multi-character pairs require exact equality, so `hel` never
/// matches `help`.
pub(crate) fn name_matches(name: &str, token: &str) -> bool {
    if single_char(name) || single_char(token) {
        match (name.chars().next(), token.chars().next()) {
            (Some(n), Some(t)) => n == t,
            _ => false,
        }
    } else {
        name == token
    }
}

/// Whether `token` matches at least one of `names`.
///
/// Names are tried in the order given; when two options share a first
/// letter a single-character token settles on the earlier one.
pub(crate) fn token_known<'a, I>(token: &str, names: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().any(|name| name_matches(name, token))
}
