// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for the zone file line tokenizer.

#[cfg(test)]
mod tests {
    use crate::errors::ZoneFileError;
    use crate::zonefile::lexer::{Lexer, Token};

    fn tokenize(line: &str) -> Vec<Token> {
        let mut lexer = Lexer::default();
        let mut tokens = Vec::new();
        lexer.tokenize_line(line, 1, &mut tokens).unwrap();
        tokens
    }

    #[test]
    fn test_splits_on_whitespace() {
        let tokens = tokenize("www  3600\tIN A 192.0.2.1");
        assert_eq!(
            tokens,
            vec![
                Token::bare("www"),
                Token::bare("3600"),
                Token::bare("IN"),
                Token::bare("A"),
                Token::bare("192.0.2.1"),
            ]
        );
    }

    #[test]
    fn test_drops_comments() {
        let tokens = tokenize("mail IN A 192.0.2.3 ; mail server");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3], Token::bare("192.0.2.3"));
    }

    #[test]
    fn test_comment_only_line_is_empty() {
        assert!(tokenize("; nothing here").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_quoted_string_keeps_spaces_and_semicolons() {
        let tokens = tokenize(r#"_dmarc IN TXT "v=DMARC1; p=none""#);
        assert_eq!(tokens[3], Token::quoted("v=DMARC1; p=none"));
    }

    #[test]
    fn test_quoted_string_unescapes_quotes_and_backslashes() {
        let tokens = tokenize(r#"@ TXT "say \"hi\" \\ \065""#);
        assert_eq!(tokens[2], Token::quoted(r#"say "hi" \ \065"#));
    }

    #[test]
    fn test_empty_quoted_string() {
        let tokens = tokenize(r#"@ TXT """#);
        assert_eq!(tokens[2], Token::quoted(""));
    }

    #[test]
    fn test_unterminated_quote_is_an_error() {
        let mut lexer = Lexer::default();
        let mut tokens = Vec::new();
        let err = lexer
            .tokenize_line(r#"@ TXT "open"#, 7, &mut tokens)
            .unwrap_err();
        assert!(matches!(err, ZoneFileError::Syntax { line: 7, .. }));
    }

    #[test]
    fn test_parentheses_span_lines() {
        let mut lexer = Lexer::default();
        let mut tokens = Vec::new();

        lexer
            .tokenize_line("@ IN SOA ns1 admin ( 1 ; serial", 1, &mut tokens)
            .unwrap();
        assert!(lexer.in_group());

        lexer
            .tokenize_line("  3600 600 86400 300 )", 2, &mut tokens)
            .unwrap();
        assert!(!lexer.in_group());

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["@", "IN", "SOA", "ns1", "admin", "1", "3600", "600", "86400", "300"]
        );
    }

    #[test]
    fn test_unbalanced_close_paren_is_an_error() {
        let mut lexer = Lexer::default();
        let mut tokens = Vec::new();
        let err = lexer.tokenize_line("@ A 1.2.3.4 )", 3, &mut tokens).unwrap_err();
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_parenthesis_adjacent_to_token() {
        let tokens = tokenize("@ SOA a b (1 2 3 4 5)");
        assert_eq!(tokens.len(), 9);
        assert_eq!(tokens[4], Token::bare("1"));
        assert_eq!(tokens[8], Token::bare("5"));
    }
}
