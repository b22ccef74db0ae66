//! Forgiving markup tokenizer.
//!
//! Splits editor output into text, start-tag and end-tag tokens. Anything
//! that does not form a tag (a stray `<`, an unterminated tag at end of
//! input) is passed through as literal text; comments, doctypes and
//! processing instructions are skipped. Tokenizing never fails.

use html_escape::decode_html_entities;

use crate::utils::RAW_TEXT_TAGS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Character data with entities already decoded
    Text(String),
    StartTag {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
}

pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
    /// Set after a `<script>`/`<style>` start tag: the next token is its raw content
    raw_text_tag: Option<String>,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            raw_text_tag: None,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Consume raw content up to (not including) `</tag`, case-insensitively.
    fn raw_text(&mut self, tag: &str) -> Option<Token> {
        let rest = self.rest();
        let end = find_raw_text_end(rest, tag).unwrap_or(rest.len());
        self.position += end;
        (end > 0).then(|| Token::Text(rest[..end].to_string()))
    }

    /// Consume a run of character data up to the next `<`.
    fn text(&mut self) -> Token {
        let rest = self.rest();
        let end = rest.find('<').unwrap_or(rest.len());
        self.position += end;
        Token::Text(decode_html_entities(&rest[..end]).into_owned())
    }

    /// Skip past `terminator`, or to end of input if it never appears.
    fn skip_past(&mut self, from: usize, terminator: &str) {
        let rest = &self.input[self.position + from..];
        self.position += match rest.find(terminator) {
            Some(index) => from + index + terminator.len(),
            None => from + rest.len(),
        };
    }

    /// Consume a literal `<` that does not open markup.
    fn stray_angle_bracket(&mut self) -> Token {
        self.position += 1;
        Token::Text("<".to_string())
    }

    fn end_tag(&mut self) -> Token {
        let rest = self.rest();
        let Some(close) = rest.find('>') else {
            // Unterminated end tag at end of input: keep it as text
            self.position = self.input.len();
            return Token::Text(decode_html_entities(rest).into_owned());
        };
        let name = tag_name(&rest[2..close]);
        self.position += close + 1;
        Token::EndTag { name }
    }

    fn start_tag(&mut self) -> Token {
        let rest = self.rest();
        let Some(close) = find_tag_end(rest) else {
            self.position = self.input.len();
            return Token::Text(decode_html_entities(rest).into_owned());
        };
        let body = &rest[1..close];
        self.position += close + 1;

        let name = tag_name(body);
        let trimmed = body.trim_end();
        let self_closing = trimmed.ends_with('/');
        let attributes = parse_attributes(&body[name.len()..]);

        if !self_closing && RAW_TEXT_TAGS.contains(&name.as_str()) {
            self.raw_text_tag = Some(name.clone());
        }

        Token::StartTag {
            name,
            attributes,
            self_closing,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(tag) = self.raw_text_tag.take()
            && let Some(token) = self.raw_text(&tag)
        {
            return Some(token);
        }

        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return None;
            }
            if !rest.starts_with('<') {
                return Some(self.text());
            }

            let bytes = rest.as_bytes();
            let next = bytes.get(1).copied();
            if rest.starts_with("<!--") {
                self.skip_past(4, "-->");
                continue;
            }
            match next {
                Some(b'!' | b'?') => {
                    self.skip_past(2, ">");
                    continue;
                }
                Some(b'/') if bytes.get(2).is_some_and(u8::is_ascii_alphabetic) => {
                    return Some(self.end_tag());
                }
                Some(c) if c.is_ascii_alphabetic() => return Some(self.start_tag()),
                _ => return Some(self.stray_angle_bracket()),
            }
        }
    }
}

/// Byte offset of the first `</tag` in `haystack`, ignoring ASCII case.
fn find_raw_text_end(haystack: &str, tag: &str) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let mut from = 0;
    while let Some(offset) = haystack[from..].find("</") {
        let start = from + offset;
        let name = bytes.get(start + 2..start + 2 + tag.len());
        if name.is_some_and(|name| name.eq_ignore_ascii_case(tag.as_bytes())) {
            return Some(start);
        }
        from = start + 2;
    }
    None
}

/// Lower-cased tag name at the start of a tag body.
fn tag_name(body: &str) -> String {
    body.chars()
        .take_while(|c| !c.is_whitespace() && *c != '/' && *c != '>')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Find the `>` closing a tag that starts at `s[0] == '<'`, being quote-aware.
fn find_tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (index, &b) in s.as_bytes().iter().enumerate().skip(1) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(index),
            None => {}
        }
    }
    None
}

/// Parse `name="value" name='value' name=value name` sequences.
///
/// Names are lower-cased and values entity-decoded. Duplicates are kept in
/// source order; the tree builder keeps the first.
fn parse_attributes(source: &str) -> Vec<(String, String)> {
    let mut attributes = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() || c == '/' {
            chars.next();
            continue;
        }

        let mut end = start;
        while let Some(&(index, c)) = chars.peek() {
            if c.is_whitespace() || c == '=' || c == '/' {
                break;
            }
            end = index + c.len_utf8();
            chars.next();
        }
        let name = source[start..end].to_ascii_lowercase();
        if name.is_empty() {
            // A lone '=' with no name before it
            chars.next();
            continue;
        }

        while chars.peek().is_some_and(|(_, c)| c.is_whitespace()) {
            chars.next();
        }
        if chars.peek().is_none_or(|(_, c)| *c != '=') {
            attributes.push((name, String::new()));
            continue;
        }
        chars.next();
        while chars.peek().is_some_and(|(_, c)| c.is_whitespace()) {
            chars.next();
        }

        let value = match chars.peek().copied() {
            Some((index, quote @ ('"' | '\''))) => {
                chars.next();
                let value_start = index + 1;
                let mut value_end = source.len();
                for (i, c) in chars.by_ref() {
                    if c == quote {
                        value_end = i;
                        break;
                    }
                }
                &source[value_start..value_end.max(value_start)]
            }
            Some((index, _)) => {
                let mut value_end = source.len();
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_whitespace() {
                        value_end = i;
                        break;
                    }
                    chars.next();
                }
                &source[index..value_end]
            }
            None => "",
        };
        attributes.push((name, decode_html_entities(value).into_owned()));
    }

    attributes
}
