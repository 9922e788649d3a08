// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Client file stem for a hero id: `dwarf_magi` → `dwarfmagi`.
pub fn strip_underscores(id: &str) -> String {
    id.chars().filter(|&c| c != '_').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(normalize_ws("  Keeper \n of\tthe   Forest "), "Keeper of the Forest");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn underscores_removed() {
        assert_eq!(strip_underscores("corrupted_disciple"), "corrupteddisciple");
        assert_eq!(strip_underscores("krixi"), "krixi");
    }
}
