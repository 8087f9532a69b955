use cssparser::{ParseError, Parser, ParserInput, ToCss, Token};
use thiserror::Error;

use crate::model::CssRule;

#[derive(Debug, Error)]
pub enum StylesheetParseError {
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("malformed stylesheet at line {line}, column {column}")]
    Syntax { line: u32, column: u32 },
    #[error("no rules found")]
    Empty,
}

type Parsed<'i, T> = Result<T, ParseError<'i, ()>>;

/// At-rules whose block holds rules rather than declarations.
const GROUPING_AT_RULES: [&str; 8] = [
    "media",
    "supports",
    "container",
    "layer",
    "document",
    "scope",
    "keyframes",
    "-webkit-keyframes",
];

/// Split CSS source text into its top-level rules.
///
/// Style rules carry their selector and a `cssText` serialized the way
/// browsers do (`a { color: red; }`), so rule text scanned from a file
/// matches rule text read from a live stylesheet. At-rules (`@media`,
/// `@import`, ...) carry no selector; grouping at-rules serialize their
/// nested rules the same way.
///
/// Comments are dropped. As in a browser, blocks left open at end of input
/// are closed there.
pub fn parse_stylesheet(data: &[u8]) -> Result<Vec<CssRule>, StylesheetParseError> {
    let text = std::str::from_utf8(data)?;
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let rules = rule_list(&mut parser).map_err(|e| StylesheetParseError::Syntax {
        line: e.location.line + 1,
        column: e.location.column,
    })?;

    if rules.is_empty() {
        return Err(StylesheetParseError::Empty);
    }
    Ok(rules)
}

fn rule_list<'i>(input: &mut Parser<'i, '_>) -> Parsed<'i, Vec<CssRule>> {
    let mut rules = Vec::new();
    let mut prelude = String::new();
    loop {
        let token = match input.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::CurlyBracketBlock => {
                let prelude = std::mem::take(&mut prelude);
                let prelude = prelude.trim();
                // A block with no prelude is skipped along with its contents.
                if !prelude.is_empty() {
                    rules.push(block_rule(prelude, input)?);
                }
            }
            Token::Semicolon => {
                let statement = std::mem::take(&mut prelude);
                let statement = statement.trim();
                if statement.starts_with('@') {
                    rules.push(CssRule::new(None, format!("{statement};")));
                }
            }
            // Stray closing brace at top level.
            Token::CloseCurlyBracket => prelude.clear(),
            other => write_token(&other, input, &mut prelude)?,
        }
    }
    Ok(rules)
}

/// The rule whose `{` block was just consumed.
fn block_rule<'i>(prelude: &str, input: &mut Parser<'i, '_>) -> Parsed<'i, CssRule> {
    let Some(at_rule) = prelude.strip_prefix('@') else {
        let body = input.parse_nested_block(declarations)?;
        return Ok(CssRule::new(Some(prelude), braced(prelude, &body)));
    };

    let name = at_rule
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or("");
    let body = if GROUPING_AT_RULES
        .iter()
        .any(|group| name.eq_ignore_ascii_case(group))
    {
        let nested = input.parse_nested_block(rule_list)?;
        nested
            .into_iter()
            .map(|rule| rule.css_text)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        input.parse_nested_block(declarations)?
    };
    Ok(CssRule::new(None, braced(prelude, &body)))
}

fn declarations<'i>(input: &mut Parser<'i, '_>) -> Parsed<'i, String> {
    let mut out = Vec::new();
    let mut current = String::new();
    loop {
        let token = match input.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::Semicolon => push_declaration(&mut out, &std::mem::take(&mut current)),
            // Nested style rule.
            Token::CurlyBracketBlock => {
                let selector = std::mem::take(&mut current);
                let body = input.parse_nested_block(declarations)?;
                out.push(braced(selector.trim(), &body));
            }
            other => write_token(&other, input, &mut current)?,
        }
    }
    push_declaration(&mut out, &current);
    Ok(out.join(" "))
}

fn push_declaration(out: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    match text.split_once(':') {
        Some((name, value)) => out.push(format!("{}: {};", name.trim(), value.trim())),
        None => out.push(format!("{text};")),
    }
}

fn braced(prelude: &str, body: &str) -> String {
    if body.is_empty() {
        format!("{prelude} {{ }}")
    } else {
        format!("{prelude} {{ {body} }}")
    }
}

/// Append `token` to `out`, descending into the block it opens, if any.
/// Whitespace runs collapse to one space.
fn write_token<'i>(
    token: &Token<'i>,
    input: &mut Parser<'i, '_>,
    out: &mut String,
) -> Parsed<'i, ()> {
    match token {
        Token::WhiteSpace(_) => {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
        }
        Token::Comment(_) => {}
        Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
            let close = if matches!(token, Token::SquareBracketBlock) {
                ']'
            } else {
                ')'
            };
            let inner = input.parse_nested_block(serialize_block)?;
            out.push_str(&token.to_css_string());
            out.push_str(&inner);
            out.push(close);
        }
        Token::CurlyBracketBlock => {
            let inner = input.parse_nested_block(serialize_block)?;
            out.push_str(&braced("", &inner)[1..]);
        }
        _ => out.push_str(&token.to_css_string()),
    }
    Ok(())
}

fn serialize_block<'i>(input: &mut Parser<'i, '_>) -> Parsed<'i, String> {
    let mut out = String::new();
    loop {
        let token = match input.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        write_token(&token, input, &mut out)?;
    }
    Ok(out.trim().to_owned())
}
