use super::language::CommentSyntax;

/// Counts lines that hold code, skipping blank and comment-only lines.
pub fn count_code_lines(content: &[u8], syntax: &CommentSyntax) -> u64 {
    let mut in_block = false;
    let mut code = 0;

    for line in content.split(|&b| b == b'\n') {
        if line_has_code(line, syntax, &mut in_block) {
            code += 1;
        }
    }

    code
}

/// Literals end at the line break; `in_block` carries an open block comment
/// over to the next line.
fn line_has_code(line: &[u8], syntax: &CommentSyntax, in_block: &mut bool) -> bool {
    let mut has_code = false;
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < line.len() {
        let rest = &line[i..];

        if *in_block {
            match syntax.block {
                Some((_, end)) if rest.starts_with(end.as_bytes()) => {
                    *in_block = false;
                    i += end.len();
                }
                Some(_) => i += 1,
                None => *in_block = false,
            }
            continue;
        }

        let byte = line[i];
        if let Some(open) = quote {
            if byte == b'\\' {
                i += 2;
                continue;
            }
            if byte == open {
                quote = None;
            }
            i += 1;
            continue;
        }

        if byte.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        if syntax
            .line
            .iter()
            .any(|marker| rest.starts_with(marker.as_bytes()))
        {
            return has_code;
        }

        if let Some((start, _)) = syntax.block {
            if rest.starts_with(start.as_bytes()) {
                *in_block = true;
                i += start.len();
                continue;
            }
        }

        has_code = true;
        if syntax.quotes.contains(&byte) {
            quote = Some(byte);
        }
        i += 1;
    }

    has_code
}
