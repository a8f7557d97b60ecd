use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string. Unicode-aware so CJK and emoji captions
/// keep the chrome aligned.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit a string into `width` display columns, ending with ".." when cut.
pub(crate) fn truncate_display(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width < 3 {
        return s
            .chars()
            .next()
            .filter(|c| UnicodeWidthChar::width(*c).unwrap_or(0) <= width)
            .map(String::from)
            .unwrap_or_default();
    }

    let budget = width - 2;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("..");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_display("budget.fol", 20), "budget.fol");
        assert_eq!(truncate_display("", 4), "");
    }

    #[test]
    fn long_strings_get_an_ellipsis() {
        assert_eq!(truncate_display("a-rather-long-name.fol", 10), "a-rather..");
    }

    #[test]
    fn tiny_widths_degrade_to_one_char() {
        assert_eq!(truncate_display("abc", 1), "a");
        assert_eq!(truncate_display("abc", 0), "");
    }

    #[test]
    fn width_is_unicode_aware() {
        assert_eq!(display_width("表計算"), 6);
        assert_eq!(truncate_display("表計算シート", 7), "表計..");
    }
}
