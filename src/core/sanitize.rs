// src/core/sanitize.rs

/// Characters that can't appear in a file name on at least one platform.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Replace every run of whitespace with a single `_`, and each reserved
/// file-name character with its own `_`. Everything else is kept as-is,
/// leading/trailing runs included.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_ws = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !last_ws { out.push('_'); last_ws = true; }
        } else if RESERVED.contains(&ch) || ch.is_control() {
            out.push('_'); last_ws = false;
        } else { out.push(ch); last_ws = false; }
    }
    out
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_runs_collapse_to_one_underscore() {
        assert_eq!(slugify("Coffee Shops"), "Coffee_Shops");
        assert_eq!(slugify("pizza \t\n near  me"), "pizza_near_me");
    }

    #[test]
    fn edges_and_punctuation_are_kept() {
        assert_eq!(slugify(" Joe's Diner "), "_Joe's_Diner_");
        assert_eq!(slugify("Café"), "Café");
    }

    #[test]
    fn path_and_reserved_chars_become_underscores() {
        assert_eq!(slugify("Bars/Pubs"), "Bars_Pubs");
        assert_eq!(slugify("a\\b:c*d?e\"f<g>h|i"), "a_b_c_d_e_f_g_h_i");
        assert_eq!(slugify("Bars / Pubs"), "Bars___Pubs");
    }
}
