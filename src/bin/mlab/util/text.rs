/// Greedy word wrap; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let cut = byte_offset(word, width);
            lines.push(word[..cut].to_string());
            word = &word[cut..];
        }

        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    match max_len {
        0 => String::new(),
        n => format!("{}…", &s[..byte_offset(s, n - 1)]),
    }
}

/// `C×2 O×1` style rendering of a composition.
pub fn composition(types: &[(String, usize)]) -> String {
    types
        .iter()
        .map(|(name, count)| format!("{name}×{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_short_text() {
        assert_eq!(wrap("format ok", 20), vec!["format ok"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("in configuration 3, counts differ", 18),
            vec!["in configuration", "3, counts differ"]
        );
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn wrap_empty_text() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("diamond", 7), "diamond");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("amorphous carbon", 9), "amorphou…");
        assert_eq!(truncate("Å³ volume", 3), "Å³…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn composition_lists_types_in_order() {
        let types = vec![("Bi".to_string(), 16), ("O".to_string(), 24)];
        assert_eq!(composition(&types), "Bi×16 O×24");
    }
}
