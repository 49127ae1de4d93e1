//! Build expression trees from lists of tokens

use crate::*;

/// Recursive descent parser over a list of tokens.
///
/// The cursor always points to the next unread token.
struct TokenParser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    max_depth: usize,
    variables: VariableSet,
}

/// Parse an expression string with the default [Limits].
///
/// Returns the expression tree and the set of variables it uses.
///
/// ```
/// use boolcalc::parse_expression;
/// # use boolcalc::CalcError;
/// # fn main() -> Result<(), CalcError> {
///
/// let (expr, variables) = parse_expression("mux(Y, not(X), sel)")?;
/// assert_eq!(variables.to_vec(), vec!["X", "Y", "sel"]);
/// assert_eq!(expr.output_count(), 1);
///
/// assert!(parse_expression("and(X)").is_err());
/// # Ok(())
/// # }
/// ```
pub fn parse_expression(text: &str) -> Result<(Expr, VariableSet), CalcError> {
    parse_expression_with(text, &Limits::default())
}

/// Parse an expression string, rejecting trees nested deeper than the limit.
pub fn parse_expression_with(text: &str, limits: &Limits) -> Result<(Expr, VariableSet), CalcError> {
    let tokens = tokenize(text)?;
    Ok(parse_tokens_with(&tokens, limits)?)
}

/// Build the expression tree for a list of tokens with the default [Limits].
pub fn parse_tokens(tokens: &[Token]) -> Result<(Expr, VariableSet), ParseError> {
    parse_tokens_with(tokens, &Limits::default())
}

/// Build the expression tree for a list of tokens.
///
/// The tokens must form exactly one root expression: a single literal or variable,
/// or a gate with all its arguments.
pub fn parse_tokens_with(tokens: &[Token], limits: &Limits) -> Result<(Expr, VariableSet), ParseError> {
    let first = tokens.first().ok_or(ParseError::Empty)?;
    if tokens.len() > 1 && !matches!(first.kind(), TokenKind::Gate(_)) {
        return Err(ParseError::MissingGate {
            found: first.literal().to_string(),
        });
    }

    let mut parser = TokenParser {
        tokens,
        pos: 0,
        depth: 0,
        max_depth: limits.max_depth,
        variables: VariableSet::default(),
    };
    let expr = parser.parse_node()?;
    if let Some(tok) = parser.peek() {
        return Err(ParseError::TrailingTokens {
            found: tok.literal().to_string(),
            offset: tok.offset(),
        });
    }
    log::trace!("parsed '{}' from {} tokens", &expr, tokens.len());
    Ok((expr, parser.variables))
}

impl<'a> TokenParser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next_token(&mut self, expected: &'static str) -> Result<&'a Token, ParseError> {
        let tok = self
            .tokens
            .get(self.pos)
            .ok_or(ParseError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok(tok)
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        let tok = self.next_token(expected)?;
        if tok.kind() != kind {
            return Err(unexpected(tok, expected));
        }
        Ok(())
    }

    /// Consume a full expression: a single token or a gate with its arguments
    fn parse_node(&mut self) -> Result<Expr, ParseError> {
        let tok = self.next_token("an expression")?;
        match tok.kind() {
            TokenKind::Value(b) => Ok(Expr::from(b)),
            TokenKind::Variable => {
                self.variables.insert(tok.literal());
                Ok(Expr::Variable(tok.literal().to_string()))
            }
            TokenKind::Gate(gate) => {
                if self.depth >= self.max_depth {
                    return Err(ParseError::TooDeep {
                        max: self.max_depth,
                    });
                }
                self.depth += 1;
                let children = self.parse_arguments(gate)?;
                self.depth -= 1;
                Ok(Expr::gate_node(gate, children))
            }
            TokenKind::LParen | TokenKind::RParen | TokenKind::Comma => {
                Err(unexpected(tok, "an expression"))
            }
        }
    }

    /// Consume the parenthesized arguments of a gate.
    ///
    /// Each child fills as many input slots as it has outputs: the list is complete when
    /// all slots of the gate are filled, and a child can not overflow the remaining slots.
    fn parse_arguments(&mut self, gate: Gate) -> Result<Vec<Expr>, ParseError> {
        let expected = gate.arity().inputs;
        self.expect(TokenKind::LParen, "'('")?;

        let mut children = Vec::with_capacity(expected);
        let mut slots = expected;
        loop {
            let child = self.parse_node()?;
            slots = slots
                .checked_sub(child.output_count())
                .ok_or(ParseError::TooManyInputs { gate, expected })?;
            children.push(child);
            if slots == 0 {
                break;
            }

            let tok = self.next_token("','")?;
            match tok.kind() {
                TokenKind::Comma => (),
                TokenKind::RParen => {
                    return Err(ParseError::TooFewInputs {
                        gate,
                        expected,
                        offset: tok.offset(),
                    })
                }
                _ => return Err(unexpected(tok, "','")),
            }
        }

        self.expect(TokenKind::RParen, "')'")?;
        Ok(children)
    }
}

fn unexpected(tok: &Token, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        expected,
        found: tok.literal().to_string(),
        offset: tok.offset(),
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn parse(text: &str) -> Result<Expr, CalcError> {
        parse_expression(text).map(|(e, _)| e)
    }

    fn parse_err(text: &str) -> ParseError {
        match parse_expression(text) {
            Err(CalcError::Parse(e)) => e,
            other => panic!("expected a parse error for '{}', got {:?}", text, other),
        }
    }

    fn var(name: &str) -> Expr {
        Expr::Variable(name.to_string())
    }

    #[test]
    fn leaves() -> Result<(), CalcError> {
        assert_eq!(parse("1")?, Expr::Literal(true));
        assert_eq!(parse(" 0 ")?, Expr::Literal(false));
        assert_eq!(parse("X")?, var("X"));

        let (_, variables) = parse_expression("foo")?;
        assert_eq!(variables.to_vec(), vec!["foo"]);
        Ok(())
    }

    #[test]
    fn gates() -> Result<(), CalcError> {
        let (expr, variables) = parse_expression("mux(Y,not(X), sel)")?;
        let expected = Expr::Mux(vec![var("Y"), Expr::Not(Box::new(var("X"))), var("sel")]);
        assert_eq!(expr, expected);
        assert_eq!(variables.to_vec(), vec!["X", "Y", "sel"]);

        assert_eq!(
            parse("nand(A, xor(B, 1))")?,
            Expr::Binary(
                BinaryOp::Nand,
                vec![var("A"), Expr::Binary(BinaryOp::Xor, vec![var("B"), Expr::Literal(true)])]
            )
        );

        // Repeated variables are collected once
        let (_, variables) = parse_expression("or(and(A, B), and(B, A))")?;
        assert_eq!(variables.len(), 2);
        Ok(())
    }

    #[test]
    fn multiple_output_slots() -> Result<(), CalcError> {
        let dmux = Expr::Dmux(vec![Expr::Literal(true), Expr::Literal(false)]);

        // A single dmux fills both inputs of a binary gate
        assert_eq!(
            parse("and(dmux(1,0))")?,
            Expr::Binary(BinaryOp::And, vec![dmux.clone()])
        );

        // A dmux can fill two of the three inputs of a mux, in any position
        assert_eq!(
            parse("mux(dmux(1,0), S)")?,
            Expr::Mux(vec![dmux.clone(), var("S")])
        );
        assert_eq!(
            parse("mux(S, dmux(1,0))")?,
            Expr::Mux(vec![var("S"), dmux.clone()])
        );

        // Nested dmux: the inner one fills both inputs of the outer one
        assert_eq!(
            parse("dmux(dmux(1,0))")?,
            Expr::Dmux(vec![dmux.clone()])
        );
        assert_eq!(
            parse("or(dmux(dmux(A, B)))")?.to_string(),
            "or(dmux(dmux(A, B)))"
        );
        Ok(())
    }

    #[test]
    fn slot_overflow() {
        let too_many_and = ParseError::TooManyInputs {
            gate: Gate::And,
            expected: 2,
        };
        assert_eq!(parse_err("and(1, dmux(1,0))"), too_many_and);
        assert_eq!(
            parse_err("not(dmux(1,0))"),
            ParseError::TooManyInputs {
                gate: Gate::Not,
                expected: 1
            }
        );
        assert_eq!(
            parse_err("mux(dmux(1,0), dmux(1,0))"),
            ParseError::TooManyInputs {
                gate: Gate::Mux,
                expected: 3
            }
        );

        // Once all slots are filled, the list must be closed
        assert_eq!(
            parse_err("and(dmux(1,0), 1)"),
            ParseError::UnexpectedToken {
                expected: "')'",
                found: ",".to_string(),
                offset: 13
            }
        );
        assert_eq!(
            parse_err("and(1,0,1)"),
            ParseError::UnexpectedToken {
                expected: "')'",
                found: ",".to_string(),
                offset: 7
            }
        );
    }

    #[test]
    fn slot_underflow() {
        assert_eq!(
            parse_err("and(1)"),
            ParseError::TooFewInputs {
                gate: Gate::And,
                expected: 2,
                offset: 5
            }
        );
        assert_eq!(
            parse_err("mux(dmux(1,0))"),
            ParseError::TooFewInputs {
                gate: Gate::Mux,
                expected: 3,
                offset: 13
            }
        );
        assert_eq!(
            parse_err("and(X"),
            ParseError::UnexpectedEnd { expected: "','" }
        );
        assert_eq!(
            parse_err("and(X,"),
            ParseError::UnexpectedEnd {
                expected: "an expression"
            }
        );
        assert_eq!(
            parse_err("not(X"),
            ParseError::UnexpectedEnd { expected: "')'" }
        );
        assert_eq!(
            parse_err("and"),
            ParseError::UnexpectedEnd { expected: "'('" }
        );
    }

    #[test]
    fn structure_errors() {
        assert_eq!(parse_err(""), ParseError::Empty);
        assert_eq!(parse_err("   "), ParseError::Empty);
        assert_eq!(
            parse_err("X Y"),
            ParseError::MissingGate {
                found: "X".to_string()
            }
        );
        assert_eq!(
            parse_err("1 and(1,0)"),
            ParseError::MissingGate {
                found: "1".to_string()
            }
        );
        assert_eq!(
            parse_err(")"),
            ParseError::UnexpectedToken {
                expected: "an expression",
                found: ")".to_string(),
                offset: 0
            }
        );
        assert_eq!(
            parse_err("and X"),
            ParseError::UnexpectedToken {
                expected: "'('",
                found: "X".to_string(),
                offset: 4
            }
        );
        assert_eq!(
            parse_err("and(,1)"),
            ParseError::UnexpectedToken {
                expected: "an expression",
                found: ",".to_string(),
                offset: 4
            }
        );
        assert_eq!(
            parse_err("and(1 0)"),
            ParseError::UnexpectedToken {
                expected: "','",
                found: "0".to_string(),
                offset: 6
            }
        );
    }

    #[test]
    fn trailing_tokens() {
        assert_eq!(
            parse_err("and(1,0) X"),
            ParseError::TrailingTokens {
                found: "X".to_string(),
                offset: 9
            }
        );
        assert_eq!(
            parse_err("not(1))"),
            ParseError::TrailingTokens {
                found: ")".to_string(),
                offset: 6
            }
        );
        assert_eq!(
            parse_err("or(A,B)or(A,B)"),
            ParseError::TrailingTokens {
                found: "or".to_string(),
                offset: 7
            }
        );
    }

    #[test]
    fn depth_limit() -> Result<(), CalcError> {
        let nested = |n: usize| format!("{}X{}", "not(".repeat(n), ")".repeat(n));
        let limits = Limits::new(20, 8);

        let (expr, _) = parse_expression_with(&nested(8), &limits)?;
        assert_eq!(expr.depth(), 8);
        assert_eq!(
            parse_expression_with(&nested(9), &limits),
            Err(CalcError::Parse(ParseError::TooDeep { max: 8 }))
        );
        Ok(())
    }

    #[test]
    fn lexical_errors() {
        assert_eq!(
            parse_expression("and(X, Y1_)"),
            Err(CalcError::Lex(LexError::InvalidCharacter {
                character: '_',
                offset: 9
            }))
        );
    }

    #[test]
    fn from_tokens() -> Result<(), CalcError> {
        let tokens = vec![
            Token::new(TokenKind::Gate(Gate::Not), "not", 0),
            Token::new(TokenKind::LParen, "(", 3),
            Token::new(TokenKind::Value(false), "0", 4),
            Token::new(TokenKind::RParen, ")", 5),
        ];
        let (expr, variables) = parse_tokens(&tokens)?;
        assert_eq!(expr, Expr::Not(Box::new(Expr::Literal(false))));
        assert!(variables.is_empty());
        assert_eq!(parse_tokens(&tokens[..3]), Err(ParseError::UnexpectedEnd { expected: "')'" }));
        Ok(())
    }
}
