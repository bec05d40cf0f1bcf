use crate::error::{Error, Result};
use crate::model::{BinOp, Definition, Expr, Operand};

peg::parser! { pub grammar wires() for str {

    rule _() = quiet!{[' ' | '\t']+}

    pub rule definition() -> Definition =
        expr:expr() _ "->" _ dest:name()
    {
        Definition { dest, expr }
    }

    rule expr() -> Expr =
        left:operand() _ op:binop() _ right:operand() { Expr::Binary(op, left, right) } /
        "NOT" _ x:operand() { Expr::Not(x) } /
        x:operand() {
            match x {
                Operand::Literal(value) => Expr::Literal(value),
                wire => Expr::Passthrough(wire),
            }
        }

    rule binop() -> BinOp = keyword:$(quiet!{['A'..='Z']+}) {?
        BinOp::from_keyword(keyword).ok_or("AND, OR, LSHIFT or RSHIFT")
    }

    rule operand() -> Operand =
        literal() /
        name:name() { Operand::Wire(name) }

    // A token is a number only if every character is a digit; "1a" is a wire.
    rule literal() -> Operand = digits:$(quiet!{['0'..='9']+}) !token_char() {?
        digits.parse().map(Operand::Literal).or(Err("literal in 0..=65535"))
    }

    rule name() -> String = quiet!{token:$(token_char()+) {?
        if token.bytes().all(|b| b.is_ascii_digit()) {
            Err("wire name")
        } else {
            Ok(token.into())
        }
    }} / expected!("wire name")

    rule token_char() = ['a'..='z' | 'A'..='Z' | '0'..='9' | '_']
}}

/// Parse a whole circuit, one definition per non-blank line.
pub fn definitions(source: &str) -> Result<Vec<Definition>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            wires::definition(line.trim()).map_err(|err| {
                Error::parse(
                    idx + 1,
                    format!("column {}: expected {}", err.location.column, err.expected),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn line(code: &str) -> Definition {
        wires::definition(code).unwrap()
    }

    #[test]
    fn gate_forms() {
        assert_eq!(
            line("123 -> x"),
            Definition {
                dest: "x".into(),
                expr: Expr::Literal(123)
            }
        );
        assert_eq!(line("lx -> a").expr, Expr::Passthrough(Operand::wire("lx")));
        assert_eq!(line("NOT y -> i").expr, Expr::Not(Operand::wire("y")));
        assert_eq!(line("NOT 7 -> i").expr, Expr::Not(Operand::Literal(7)));
        assert_eq!(
            line("x AND y -> d").expr,
            Expr::Binary(BinOp::And, Operand::wire("x"), Operand::wire("y"))
        );
        assert_eq!(
            line("1 OR cd -> ce").expr,
            Expr::Binary(BinOp::Or, Operand::Literal(1), Operand::wire("cd"))
        );
        assert_eq!(
            line("y RSHIFT 2 -> g").expr,
            Expr::Binary(BinOp::RShift, Operand::wire("y"), Operand::Literal(2))
        );
        assert_eq!(
            line("x LSHIFT 2 -> f").expr,
            Expr::Binary(BinOp::LShift, Operand::wire("x"), Operand::Literal(2))
        );
    }

    #[test]
    fn keyword_lookalike_names() {
        assert_eq!(line("NOTE -> a").expr, Expr::Passthrough(Operand::wire("NOTE")));
        assert_eq!(line("NOT X -> a").expr, Expr::Not(Operand::wire("X")));
        assert_eq!(line("1a -> b").expr, Expr::Passthrough(Operand::wire("1a")));
    }

    #[test]
    fn extra_spacing() {
        assert_eq!(
            line("x  AND\ty   ->  d").expr,
            Expr::Binary(BinOp::And, Operand::wire("x"), Operand::wire("y"))
        );
    }

    #[test]
    fn malformed_lines() {
        assert!(wires::definition("3 FOO 4 -> x").is_err());
        assert!(wires::definition("x AND -> y").is_err());
        assert!(wires::definition("x AND y").is_err());
        assert!(wires::definition("x AND y z -> w").is_err());
        assert!(wires::definition("x -> 12").is_err());
        assert!(wires::definition("65536 -> x").is_err());
        assert!(wires::definition("x -> y -> z").is_err());
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = definitions("1 -> a\n\nb OR a -> c\nb XOR a -> d\n").unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("AND, OR, LSHIFT or RSHIFT"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn blank_lines_are_skipped() {
        let defs = definitions("\n  123 -> x  \n\n456 -> y\n").unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[1].dest, "y");
    }
}
