/// Atomic unit of the layout DSL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Maximal run of non-space, non-paren characters.
    Word(String),
    /// A single `(`.
    Open,
    /// A single `)`.
    Close,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word(text.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    Paren,
    Word,
}

fn classify(ch: char) -> CharClass {
    match ch {
        ' ' | '\t' | '\n' => CharClass::Space,
        '(' | ')' => CharClass::Paren,
        _ => CharClass::Word,
    }
}

/// Split DSL text into an ordered token sequence.
///
/// Whitespace separates words and is discarded. Parens are always their
/// own token and split any adjacent word. End of input flushes an
/// in-progress word. Words are unbounded; numeric literals of any length
/// survive intact.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for ch in input.chars() {
        match classify(ch) {
            CharClass::Word => word.push(ch),
            CharClass::Space | CharClass::Paren => {
                if !word.is_empty() {
                    tokens.push(Token::Word(std::mem::take(&mut word)));
                }
                if ch == '(' {
                    tokens.push(Token::Open);
                } else if ch == ')' {
                    tokens.push(Token::Close);
                }
            }
        }
    }

    if !word.is_empty() {
        tokens.push(Token::Word(word));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_whitespace() {
        let tokens = tokenize("h c\t...\nmax 3");
        assert_eq!(
            tokens,
            vec![
                Token::word("h"),
                Token::word("c"),
                Token::word("..."),
                Token::word("max"),
                Token::word("3"),
            ]
        );
    }

    #[test]
    fn parens_split_adjacent_words() {
        let tokens = tokenize("h(v c)c");
        assert_eq!(
            tokens,
            vec![
                Token::word("h"),
                Token::Open,
                Token::word("v"),
                Token::word("c"),
                Token::Close,
                Token::word("c"),
            ]
        );
    }

    #[test]
    fn end_of_input_flushes_word() {
        assert_eq!(tokenize("..."), vec![Token::word("...")]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ").is_empty());
    }

    #[test]
    fn long_words_are_not_truncated() {
        let tokens = tokenize("w: 123456789.5");
        assert_eq!(tokens[1], Token::word("123456789.5"));
    }
}
