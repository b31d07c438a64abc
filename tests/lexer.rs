#[cfg(test)]
mod lexer_tests {
    use monkey_interpreter as monkey;

    use monkey::lexer::*;
    use monkey::token::*;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let tokens: Vec<_> = Lexer::new(source).collect();

        assert_eq!(
            tokens.len(),
            expected.len(),
            "token count mismatch: {:?}",
            tokens
        );

        for (actual, (expected_type, expected_literal)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.token_type, *expected_type);
            assert_eq!(actual.literal, *expected_literal);
        }
    }

    #[test]
    fn test_lexer_01_symbols() {
        assert_token_sequence(
            "=+(){},;",
            &[
                (TokenType::ASSIGN, "="),
                (TokenType::PLUS, "+"),
                (TokenType::LPAREN, "("),
                (TokenType::RPAREN, ")"),
                (TokenType::LBRACE, "{"),
                (TokenType::RBRACE, "}"),
                (TokenType::COMMA, ","),
                (TokenType::SEMICOLON, ";"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_lexer_02_program() {
        let source = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
\treturn true;
} else {
\treturn false;
}

10 == 10;
10 != 9;
";

        assert_token_sequence(
            source,
            &[
                (TokenType::LET, "let"),
                (TokenType::IDENT, "five"),
                (TokenType::ASSIGN, "="),
                (TokenType::INT, "5"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::LET, "let"),
                (TokenType::IDENT, "ten"),
                (TokenType::ASSIGN, "="),
                (TokenType::INT, "10"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::LET, "let"),
                (TokenType::IDENT, "add"),
                (TokenType::ASSIGN, "="),
                (TokenType::FUNCTION, "fn"),
                (TokenType::LPAREN, "("),
                (TokenType::IDENT, "x"),
                (TokenType::COMMA, ","),
                (TokenType::IDENT, "y"),
                (TokenType::RPAREN, ")"),
                (TokenType::LBRACE, "{"),
                (TokenType::IDENT, "x"),
                (TokenType::PLUS, "+"),
                (TokenType::IDENT, "y"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::RBRACE, "}"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::LET, "let"),
                (TokenType::IDENT, "result"),
                (TokenType::ASSIGN, "="),
                (TokenType::IDENT, "add"),
                (TokenType::LPAREN, "("),
                (TokenType::IDENT, "five"),
                (TokenType::COMMA, ","),
                (TokenType::IDENT, "ten"),
                (TokenType::RPAREN, ")"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::BANG, "!"),
                (TokenType::MINUS, "-"),
                (TokenType::SLASH, "/"),
                (TokenType::ASTERISK, "*"),
                (TokenType::INT, "5"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::INT, "5"),
                (TokenType::LT, "<"),
                (TokenType::INT, "10"),
                (TokenType::GT, ">"),
                (TokenType::INT, "5"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::IF, "if"),
                (TokenType::LPAREN, "("),
                (TokenType::INT, "5"),
                (TokenType::LT, "<"),
                (TokenType::INT, "10"),
                (TokenType::RPAREN, ")"),
                (TokenType::LBRACE, "{"),
                (TokenType::RETURN, "return"),
                (TokenType::TRUE, "true"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::RBRACE, "}"),
                (TokenType::ELSE, "else"),
                (TokenType::LBRACE, "{"),
                (TokenType::RETURN, "return"),
                (TokenType::FALSE, "false"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::RBRACE, "}"),
                (TokenType::INT, "10"),
                (TokenType::EQ, "=="),
                (TokenType::INT, "10"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::INT, "10"),
                (TokenType::NOT_EQ, "!="),
                (TokenType::INT, "9"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_two_character_operators() {
        assert_token_sequence(
            "<= >= == != \\",
            &[
                (TokenType::LT_EQ, "<="),
                (TokenType::GT_EQ, ">="),
                (TokenType::EQ, "=="),
                (TokenType::NOT_EQ, "!="),
                (TokenType::BACKSLASH, "\\"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_identifiers_stop_at_digits() {
        assert_token_sequence(
            "foo_bar x1",
            &[
                (TokenType::IDENT, "foo_bar"),
                (TokenType::IDENT, "x"),
                (TokenType::INT, "1"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_identifiers_accept_unicode_letters() {
        assert_token_sequence(
            "let café = 1; naïve_λ2",
            &[
                (TokenType::LET, "let"),
                (TokenType::IDENT, "café"),
                (TokenType::ASSIGN, "="),
                (TokenType::INT, "1"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::IDENT, "naïve_λ"),
                (TokenType::INT, "2"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_illegal_characters_become_tokens() {
        assert_token_sequence(
            "1 @ €;",
            &[
                (TokenType::INT, "1"),
                (TokenType::ILLEGAL, "@"),
                (TokenType::ILLEGAL, "€"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_eof_repeats_after_end() {
        let mut lexer = Lexer::new("x");

        assert_eq!(lexer.next_token(), Token::new(TokenType::IDENT, "x"));

        for _ in 0..3 {
            assert_eq!(lexer.next_token().token_type, TokenType::EOF);
        }
    }

    #[test]
    fn test_iterator_yields_single_eof() {
        let tokens: Vec<_> = Lexer::new("   \n\t").collect();

        assert_eq!(tokens, vec![Token::eof()]);
    }

    #[test]
    fn test_lookup_ident() {
        assert_eq!(lookup_ident("fn"), TokenType::FUNCTION);
        assert_eq!(lookup_ident("return"), TokenType::RETURN);
        assert_eq!(lookup_ident("returns"), TokenType::IDENT);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenType::LT_EQ, "<=").to_string(), "LT_EQ <=");
        assert_eq!(TokenType::LT_EQ.to_string(), "<=");
        assert_eq!(TokenType::IDENT.to_string(), "IDENT");
    }
}
