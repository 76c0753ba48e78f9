use super::*;
use crate::value::parse_number;

/// Encodes a tree in the line-based text format.
///
/// Line 1 holds one type tag per attribute. Every following line is one node in
/// pre-order: a leaf is written as its label, an internal node as
/// `<attribute>-<value>` and is followed by its whole left subtree, then its whole
/// right subtree.
pub(super) fn encode(attribute_types: &[AttributeType], root: &Node) -> String {
    let mut out: String = attribute_types.iter().map(|t| t.tag()).collect();
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        out.push('\n');
        match node {
            Node::Leaf { label } => out.push_str(&encode_scalar(label)),
            Node::Internal {
                condition,
                left,
                right,
            } => {
                out.push_str(&condition.attribute.to_string());
                out.push('-');
                out.push_str(&encode_scalar(&condition.value));
                pending.push(&**right);
                pending.push(&**left);
            }
        }
    }
    out
}

/// Writes one value so that it reads back as the same value.
///
/// `\`, `-`, line feed and carriage return are escaped, which keeps the first bare
/// `-` of a line reserved for separating the attribute index from the value.
/// Tokens that would otherwise read back as numbers, are empty, or start with `'`
/// get a leading `'`.
fn encode_scalar(value: &Value) -> String {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::Token(token) => token.clone(),
    };

    let mut out = String::with_capacity(text.len() + 1);
    if let Value::Token(token) = value {
        if token.is_empty() || token.starts_with('\'') || parse_number(token).is_some() {
            out.push('\'');
        }
    }
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '-' => out.push_str("\\-"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

/// Decodes the output of [`encode`].
///
/// A single trailing newline and `\r\n` line endings are accepted. Anything else
/// that does not describe exactly one complete tree is rejected.
pub(super) fn decode(text: &str) -> Result<(Vec<AttributeType>, Node), ModelError> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(i, line)| (i + 1, line));

    let (_, tags) = lines
        .next()
        .ok_or_else(|| ModelError::parse(1, "empty input"))?;
    let attribute_types = tags
        .chars()
        .map(|tag| {
            AttributeType::from_tag(tag)
                .ok_or_else(|| ModelError::parse(1, format!("unknown attribute type tag '{}'", tag)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // internal nodes still waiting for a child, with their left subtree once it is done
    let mut open: Vec<(SplitCondition, Option<Node>)> = Vec::new();
    let mut root = None;
    let mut last_line = 1;

    for (line_no, line) in lines {
        last_line = line_no;
        if root.is_some() {
            return Err(ModelError::parse(line_no, "unexpected token after a complete tree"));
        }

        let mut node = match decode_token(line, line_no, attribute_types.len())? {
            Token::Condition(condition) => {
                open.push((condition, None));
                continue;
            }
            Token::Leaf(label) => Node::new_leaf(label),
        };

        // a finished subtree fills the nearest open slot, possibly completing its parent
        loop {
            match open.pop() {
                None => {
                    root = Some(node);
                    break;
                }
                Some((condition, None)) => {
                    open.push((condition, Some(node)));
                    break;
                }
                Some((condition, Some(left))) => {
                    node = Node::new_internal(condition, left, node);
                }
            }
        }
    }

    let root = root.ok_or_else(|| match open.len() {
        0 => ModelError::parse(last_line, "missing root node"),
        n => ModelError::parse(
            last_line,
            format!("truncated tree, {} internal node(s) left incomplete", n),
        ),
    })?;
    Ok((attribute_types, root))
}

enum Token {
    Condition(SplitCondition),
    Leaf(Value),
}

fn decode_token(line: &str, line_no: usize, n_features: usize) -> Result<Token, ModelError> {
    if line.is_empty() {
        return Err(ModelError::parse(line_no, "empty node token"));
    }

    let Some(separator) = find_separator(line) else {
        return Ok(Token::Leaf(decode_scalar(line, line_no)?));
    };

    let index = &line[..separator];
    let attribute: usize = index
        .parse()
        .map_err(|_| ModelError::parse(line_no, format!("invalid attribute index '{}'", index)))?;
    if attribute >= n_features {
        return Err(ModelError::parse(
            line_no,
            format!(
                "attribute index {} out of range for {} attribute(s)",
                attribute, n_features
            ),
        ));
    }

    let value = decode_scalar(&line[separator + 1..], line_no)?;
    Ok(Token::Condition(SplitCondition::new(attribute, value)))
}

/// Byte offset of the first unescaped `-`.
fn find_separator(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, ch) in line.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '-' => return Some(i),
            _ => {}
        }
    }
    None
}

fn decode_scalar(raw: &str, line_no: usize) -> Result<Value, ModelError> {
    let mut text = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            text.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => text.push('\\'),
            Some('-') => text.push('-'),
            Some('n') => text.push('\n'),
            Some('r') => text.push('\r'),
            Some(other) => {
                return Err(ModelError::parse(
                    line_no,
                    format!("invalid escape sequence '\\{}'", other),
                ));
            }
            None => return Err(ModelError::parse(line_no, "dangling escape character")),
        }
    }

    if let Some(token) = text.strip_prefix('\'') {
        return Ok(Value::Token(token.to_string()));
    }
    Ok(match parse_number(&text) {
        Some(number) => Value::Number(number),
        None => Value::Token(text),
    })
}
