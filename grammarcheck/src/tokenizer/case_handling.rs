use smol_str::SmolStr;

#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Case-insensitive comparison against an already lowercased word.
#[inline(always)]
pub fn eq_lower(s: &str, lowered: &str) -> bool {
    lower_case(s) == lowered
}

/// Lowercased first character, if any.
#[inline(always)]
pub fn lower_first_char(s: &str) -> Option<char> {
    s.chars().next().and_then(|c| c.to_lowercase().next())
}
