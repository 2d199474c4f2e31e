/// Splits `input` on `separator` where it appears outside quoted strings,
/// comments and `<...>` brackets. Parts are trimmed and empty parts dropped.
///
/// This is how several header values sharing one header line are separated,
/// e.g. `Accept: application/sdp;level=1, text/html`.
pub fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut escaped = false;
    let mut angle_depth = 0usize;
    let mut paren_depth = 0usize;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes || paren_depth > 0 => escaped = true,
            '"' if paren_depth == 0 => in_quotes = !in_quotes,
            '<' if !in_quotes && paren_depth == 0 => angle_depth += 1,
            '>' if !in_quotes && paren_depth == 0 => angle_depth = angle_depth.saturating_sub(1),
            '(' if !in_quotes => paren_depth += 1,
            ')' if !in_quotes => paren_depth = paren_depth.saturating_sub(1),
            c if c == separator && !in_quotes && angle_depth == 0 && paren_depth == 0 => {
                parts.push(input[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(input[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_top_level("gzip, identity ,*", ','), ["gzip", "identity", "*"]);
    }

    #[test]
    fn test_split_respects_quotes_and_brackets() {
        let parts = split_top_level(
            "<http://wwww.example.com/alice/photo.jpg>;purpose=icon, <http://x/a,b>;purpose=info",
            ',',
        );
        assert_eq!(parts.len(), 2);

        let parts = split_top_level(
            r#"307 isi.edu "Session parameter 'foo', not understood", 301 isi.edu "Escaped \" , comma""#,
            ',',
        );
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], r#"307 isi.edu "Session parameter 'foo', not understood""#);
    }

    #[test]
    fn test_split_respects_comments() {
        assert_eq!(split_top_level("120 (I'm in a meeting, sorry)", ',').len(), 1);
    }

    #[test]
    fn test_split_drops_empty_parts() {
        assert_eq!(split_top_level(" , a,, ", ','), ["a"]);
        assert!(split_top_level("", ',').is_empty());
    }
}
