#[cfg(test)]
mod parser_tests {
    use monkey_interpreter as monkey;

    use monkey::ast::*;
    use monkey::error::ParseError;
    use monkey::lexer::Lexer;
    use monkey::parser::Parser;
    use monkey::token::TokenType;

    fn parse_ok(source: &str) -> Program {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();

        assert!(
            parser.errors().is_empty(),
            "unexpected parse errors for {:?}: {:?}",
            source,
            parser.errors()
        );

        program
    }

    fn single_expression(source: &str) -> Expression {
        let program = parse_ok(source);

        assert_eq!(program.statements.len(), 1, "{:?}", program.statements);

        match program.statements.into_iter().next() {
            Some(Statement::Expression(expr)) => expr,
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    fn ident(name: &str) -> Expression {
        Expression::Identifier(Identifier::new(name))
    }

    #[test]
    fn test_let_statements() {
        let cases: &[(&str, &str, Expression)] = &[
            ("let x = 5;", "x", Expression::IntegerLiteral(5)),
            ("let y = true;", "y", Expression::BooleanLiteral(true)),
            ("let foobar = y;", "foobar", ident("y")),
        ];

        for (source, expected_name, expected_value) in cases {
            let program = parse_ok(source);

            assert_eq!(program.statements.len(), 1);
            assert_eq!(program.statements[0].token_literal(), "let");
            assert_eq!(
                program.statements[0],
                Statement::Let {
                    name: Identifier::new(*expected_name),
                    value: expected_value.clone(),
                }
            );
        }
    }

    #[test]
    fn test_return_statements() {
        let cases: &[(&str, Option<Expression>)] = &[
            ("return 5;", Some(Expression::IntegerLiteral(5))),
            ("return true;", Some(Expression::BooleanLiteral(true))),
            ("return;", None),
            ("return", None),
        ];

        for (source, expected) in cases {
            let program = parse_ok(source);

            assert_eq!(program.statements.len(), 1);
            assert_eq!(program.statements[0].token_literal(), "return");
            assert_eq!(
                program.statements[0],
                Statement::Return {
                    value: expected.clone()
                }
            );
        }
    }

    #[test]
    fn test_program_string() {
        let program = Program {
            statements: vec![Statement::Let {
                name: Identifier::new("myVar"),
                value: ident("anotherVar"),
            }],
        };

        assert_eq!(program.to_string(), "let myVar = anotherVar;");
    }

    #[test]
    fn test_literal_expressions() {
        assert_eq!(single_expression("foobar;"), ident("foobar"));
        assert_eq!(single_expression("5;"), Expression::IntegerLiteral(5));
        assert_eq!(single_expression("true;"), Expression::BooleanLiteral(true));
        assert_eq!(
            single_expression("false;"),
            Expression::BooleanLiteral(false)
        );
        assert_eq!(single_expression("foobar;").token_literal(), "foobar");
        assert_eq!(single_expression("007").token_literal(), "7");
    }

    #[test]
    fn test_prefix_expressions() {
        let cases: &[(&str, PrefixOperator, Expression)] = &[
            ("!5;", PrefixOperator::Bang, Expression::IntegerLiteral(5)),
            ("-15", PrefixOperator::Minus, Expression::IntegerLiteral(15)),
            ("!true;", PrefixOperator::Bang, Expression::BooleanLiteral(true)),
            (
                "!false;",
                PrefixOperator::Bang,
                Expression::BooleanLiteral(false),
            ),
        ];

        for (source, operator, right) in cases {
            assert_eq!(
                single_expression(source),
                Expression::Prefix {
                    operator: *operator,
                    right: Box::new(right.clone()),
                }
            );
        }
    }

    #[test]
    fn test_infix_expressions() {
        let cases: &[(&str, InfixOperator)] = &[
            ("5 + 5;", InfixOperator::Plus),
            ("5 - 5;", InfixOperator::Minus),
            ("5 * 5;", InfixOperator::Asterisk),
            ("5 / 5;", InfixOperator::Slash),
            ("5 > 5;", InfixOperator::Gt),
            ("5 < 5;", InfixOperator::Lt),
            ("5 == 5;", InfixOperator::Eq),
            ("5 != 5;", InfixOperator::NotEq),
        ];

        for (source, operator) in cases {
            assert_eq!(
                single_expression(source),
                Expression::Infix {
                    left: Box::new(Expression::IntegerLiteral(5)),
                    operator: *operator,
                    right: Box::new(Expression::IntegerLiteral(5)),
                }
            );
        }

        assert_eq!(
            single_expression("true != false"),
            Expression::Infix {
                left: Box::new(Expression::BooleanLiteral(true)),
                operator: InfixOperator::NotEq,
                right: Box::new(Expression::BooleanLiteral(false)),
            }
        );
    }

    #[test]
    fn test_operator_precedence() {
        let cases: &[(&str, &str)] = &[
            ("1 + 2 + 3", "((1 + 2) + 3)"),
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("false", "false"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("3 < 5 == true", "((3 < 5) == true)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("(5 + (5+2)) * 2", "((5 + (5 + 2)) * 2)"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            (
                "add(a + b + c * d / f + g)",
                "add((((a + b) + ((c * d) / f)) + g))",
            ),
        ];

        for (source, expected) in cases {
            assert_eq!(&parse_ok(source).to_string(), expected, "input: {}", source);
        }
    }

    #[test]
    fn test_if_expression() {
        let expr = single_expression("if (x < y) { x }");

        let Expression::If {
            condition,
            consequence,
            alternative,
        } = &expr
        else {
            panic!("expected if expression, got {:?}", expr);
        };

        assert_eq!(condition.to_string(), "(x < y)");
        assert_eq!(
            consequence.statements,
            vec![Statement::Expression(ident("x"))]
        );
        assert!(alternative.is_none());
        assert_eq!(expr.to_string(), "if(x < y) x");
    }

    #[test]
    fn test_if_else_expression() {
        let expr = single_expression("if (x < y) { x } else { y }");

        match &expr {
            Expression::If {
                alternative: Some(alternative),
                ..
            } => {
                assert_eq!(alternative.statements, vec![Statement::Expression(ident("y"))]);
            }
            other => panic!("expected if/else, got {:?}", other),
        }

        assert_eq!(expr.to_string(), "if(x < y) x else y");
    }

    #[test]
    fn test_function_literal() {
        let expr = single_expression("fn(x, y) { x + y; }");

        match &expr {
            Expression::FunctionLiteral { parameters, body } => {
                assert_eq!(parameters, &vec![Identifier::new("x"), Identifier::new("y")]);
                assert_eq!(body.to_string(), "(x + y)");
            }
            other => panic!("expected function literal, got {:?}", other),
        }

        assert_eq!(expr.to_string(), "fn(x, y) (x + y)");
        assert_eq!(expr.token_literal(), "fn");
    }

    #[test]
    fn test_function_parameters() {
        let cases: &[(&str, &[&str])] = &[
            ("fn() {};", &[]),
            ("fn(x) {};", &["x"]),
            ("fn(x, y, z) {};", &["x", "y", "z"]),
        ];

        for (source, expected) in cases {
            match single_expression(source) {
                Expression::FunctionLiteral { parameters, .. } => {
                    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
                    assert_eq!(&names, expected);
                }
                other => panic!("expected function literal, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_call_expression() {
        let expr = single_expression("add(1, 2 * 3, 4 + 5)");

        match &expr {
            Expression::Call {
                function,
                arguments,
            } => {
                assert_eq!(**function, ident("add"));
                let rendered: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                assert_eq!(rendered, vec!["1", "(2 * 3)", "(4 + 5)"]);
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_peek_errors_are_collected() {
        let (program, errors) = monkey::parse("let x 5; let = 10; let 838383;");

        assert_eq!(
            errors,
            vec![
                "expected next token to be =, got INT instead",
                "expected next token to be IDENT, got = instead",
                "no prefix parser function from = found",
                "expected next token to be IDENT, got INT instead",
            ]
        );

        // Recovery keeps the trailing expressions that did parse.
        assert_eq!(program.to_string(), "510838383");
    }

    #[test]
    fn test_no_prefix_parser_error() {
        let mut parser = Parser::new(Lexer::new("@"));
        parser.parse_program();

        assert_eq!(
            parser.errors(),
            &[ParseError::NoPrefixParser(TokenType::ILLEGAL)]
        );
    }

    #[test]
    fn test_reserved_comparison_operators_are_not_infix() {
        let (_, errors) = monkey::parse("a <= b");

        assert_eq!(errors, vec!["no prefix parser function from <= found"]);
    }

    #[test]
    fn test_integer_overflow_is_reported() {
        let (program, errors) = monkey::parse("99999999999999999999");

        assert!(program.statements.is_empty());
        assert_eq!(
            errors,
            vec!["could not parse 99999999999999999999 as integer"]
        );
    }

    #[test]
    fn test_unclosed_group_reports_expected_paren() {
        let (_, errors) = monkey::parse("(1 + 2");

        assert_eq!(errors, vec!["expected next token to be ), got EOF instead"]);
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let source = "let add = fn(a, b) { return a + b; }; add(1, 2 * 3); let = ;";

        assert_eq!(monkey::parse(source), monkey::parse(source));
    }
}
