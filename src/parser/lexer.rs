use itertools::{Itertools, PeekingNext};

use super::{CompileErrorType, Result};

#[derive(PartialEq, Debug)]
pub enum Token {
    Equals,
    Or,
    Nonterminal(String),
    Terminal(String),
}

// Quoted text becomes a terminal token. The opening quote has been peeked
// but not consumed yet.
pub fn lex_terminal(line: &mut impl PeekingNext<Item = char>) -> Result<Token> {
    line.next(); // Consume open quote
    let token_text = line.peeking_take_while(|&c| c != '"').collect();

    if line.next() != Some('"') {
        return Err(CompileErrorType::UnmatchedQuote);
    }

    Ok(Token::Terminal(token_text))
}

// A bare name becomes a nonterminal token, ending at whitespace or at any
// character that starts another token
pub fn lex_nonterminal(line: &mut impl PeekingNext<Item = char>) -> Token {
    let token_text = line
        .peeking_take_while(|&c| !c.is_whitespace() && c != '=' && c != '|' && c != '"')
        .collect();

    Token::Nonterminal(token_text)
}

pub fn lex_line(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    let mut line_chars = line.chars().peekable();

    while let Some(&c) = line_chars.peek() {
        if c == '=' {
            line_chars.next();
            tokens.push(Token::Equals);
        } else if c == '|' {
            line_chars.next();
            tokens.push(Token::Or);
        } else if c == '"' {
            tokens.push(lex_terminal(&mut line_chars)?);
        } else if c.is_whitespace() {
            line_chars.next();
        } else {
            tokens.push(lex_nonterminal(&mut line_chars));
        }
    }

    return Ok(tokens);
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    #[test]
    fn lex_normal_terminal() {
        let lines = vec![
            "\"book\" that flight",
            "\"does\"",
            "\"north\"\"south\"\"west\"",
        ];
        // (result from the function, rest of the iterator)
        let answers = vec![
            (Token::Terminal("book".to_string()), " that flight"),
            (Token::Terminal("does".to_string()), ""),
            (Token::Terminal("north".to_string()), "\"south\"\"west\""),
        ];

        for (line, (answer_token, answer_rest)) in zip(lines, answers) {
            let mut chars = line.chars().peekable();
            assert_eq!(lex_terminal(&mut chars).unwrap(), answer_token);
            assert_eq!(chars.collect::<String>(), answer_rest);
        }
    }

    #[test]
    fn lex_unmatched_terminal() {
        let lines = vec!["\"welcome", "\"book that flight"];

        for line in lines {
            let mut chars = line.chars().peekable();

            assert_eq!(lex_terminal(&mut chars).unwrap_err(), CompileErrorType::UnmatchedQuote);
        }
    }

    #[test]
    fn lex_normal_nonterminal() {
        let lines = vec![
            "noun phrase",
            "aux",
            "np=det",
            "vp|np",
        ];
        // (result from the function, rest of the iterator)
        let answers = vec![
            (Token::Nonterminal("noun".to_string()), " phrase"),
            (Token::Nonterminal("aux".to_string()), ""),
            (Token::Nonterminal("np".to_string()), "=det"),
            (Token::Nonterminal("vp".to_string()), "|np"),
        ];

        for (line, (answer_token, answer_rest)) in zip(lines, answers) {
            let mut chars = line.chars().peekable();
            assert_eq!(lex_nonterminal(&mut chars), answer_token);
            assert_eq!(chars.collect::<String>(), answer_rest);
        }
    }

    #[test]
    fn lex_normal_line() {
        let lines = vec![
            "s = np vp | aux np vp",
            "det = \"that\" | \"\"",
        ];
        let answers = vec![
            vec![
                Token::Nonterminal("s".to_string()),
                Token::Equals,
                Token::Nonterminal("np".to_string()),
                Token::Nonterminal("vp".to_string()),
                Token::Or,
                Token::Nonterminal("aux".to_string()),
                Token::Nonterminal("np".to_string()),
                Token::Nonterminal("vp".to_string()),
            ],
            vec![
                Token::Nonterminal("det".to_string()),
                Token::Equals,
                Token::Terminal("that".to_string()),
                Token::Or,
                Token::Terminal("".to_string()),
            ],
        ];

        for (line, answer) in zip(lines, answers) {
            assert_eq!(lex_line(line).unwrap(), answer)
        }
    }
}
