//! Line splitting and chained switch expansion.

use super::token::TokenKind;

/// Split a raw input line into whitespace-delimited tokens.
///
/// There is no quoting: `echo "a b"` yields `["echo", "\"a", "b\""]`.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Replace every chained short switch with one simple switch per character.
///
/// `["-abc", "x"]` becomes `["-a", "-b", "-c", "x"]`. Tokens of any other
/// shape are left untouched and keep their relative order. Applying this to
/// its own output changes nothing.
pub fn expand_chained_switches(tokens: Vec<String>) -> Vec<String> {
    if !tokens
        .iter()
        .any(|t| TokenKind::classify(t) == TokenKind::ChainedSwitch)
    {
        return tokens;
    }

    let mut expanded = Vec::with_capacity(tokens.len() * 2);
    for token in tokens {
        if TokenKind::classify(&token) == TokenKind::ChainedSwitch {
            expanded.extend(token.chars().skip(1).map(|c| format!("-{}", c)));
        } else {
            expanded.push(token);
        }
    }
    expanded
}
