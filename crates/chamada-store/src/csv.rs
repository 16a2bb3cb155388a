//! Minimal RFC-4180 codec. Fields are quoted only when they contain a
//! comma, quote or line break; lines end in CRLF to match what the original
//! files on disk look like, and the parser accepts bare LF as well.

pub(crate) fn encode_line(fields: &[&str]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        if field.contains(['"', ',', '\r', '\n']) {
            line.push('"');
            for c in field.chars() {
                if c == '"' {
                    line.push('"');
                }
                line.push(c);
            }
            line.push('"');
        } else {
            line.push_str(field);
        }
    }
    line.push_str("\r\n");
    line
}

pub(crate) fn parse(content: &str) -> Vec<Vec<String>> {
    fn flush(
        records: &mut Vec<Vec<String>>,
        fields: &mut Vec<String>,
        field: &mut String,
        saw_any: &mut bool,
    ) {
        if *saw_any || !fields.is_empty() {
            fields.push(std::mem::take(field));
            records.push(std::mem::take(fields));
        }
        *saw_any = false;
    }

    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut saw_any = false;
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' => {
                in_quotes = true;
                saw_any = true;
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                saw_any = true;
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                flush(&mut records, &mut fields, &mut field, &mut saw_any);
            }
            '\n' => flush(&mut records, &mut fields, &mut field, &mut saw_any),
            other => {
                field.push(other);
                saw_any = true;
            }
        }
    }
    flush(&mut records, &mut fields, &mut field, &mut saw_any);
    records
}

#[cfg(test)]
mod tests {
    use super::{encode_line, parse};

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(encode_line(&["a", "b", "c"]), "a,b,c\r\n");
    }

    #[test]
    fn quoting_round_trips_commas_and_quotes() {
        let line = encode_line(&["jantar, com \"pizza\"", "2024-02-01"]);
        let parsed = parse(&line);
        assert_eq!(
            parsed,
            vec![vec![
                "jantar, com \"pizza\"".to_string(),
                "2024-02-01".to_string()
            ]]
        );
    }

    #[test]
    fn parse_accepts_lf_and_crlf_and_skips_blank_lines() {
        let parsed = parse("a,b\r\nc,d\n\ne,f");
        assert_eq!(
            parsed,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
                vec!["e".to_string(), "f".to_string()],
            ]
        );
    }

    #[test]
    fn quoted_field_may_contain_line_breaks() {
        let line = encode_line(&["linha\nquebrada", "x"]);
        let parsed = parse(&line);
        assert_eq!(
            parsed,
            vec![vec!["linha\nquebrada".to_string(), "x".to_string()]]
        );
    }

    #[test]
    fn empty_trailing_field_is_kept() {
        assert_eq!(
            parse("a,\r\n"),
            vec![vec!["a".to_string(), String::new()]]
        );
    }
}
