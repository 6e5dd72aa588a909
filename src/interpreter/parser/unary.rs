use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenType,
        parser::{
            core::{ParseResult, TreeBuilder},
            utils::{Item, Subtree},
        },
    },
};

impl TreeBuilder<'_> {
    /// Builds an operand segment: one operand with its unary operators.
    ///
    /// The segment has the shape `prefix* operand postfix*`. Postfix
    /// operators bind first, innermost first; prefix operators are then
    /// applied from the inside out, so `-!a!` becomes `-[![![a]]]`.
    ///
    /// The chains are built with loops, so long runs of unary operators cost
    /// no stack.
    ///
    /// # Parameters
    /// - `items`: A stream containing no infix operators.
    ///
    /// # Returns
    /// The operand wrapped in its unary operators.
    ///
    /// # Errors
    /// - `MissingOperand` if unary operators have nothing to apply to.
    /// - `MalformedTree` if the segment holds two operands, or an operator on
    ///   the wrong side of its operand.
    /// - `NestingTooDeep` if the chain exceeds the grammar's depth limit.
    pub(in crate::interpreter::parser) fn build_operand(&self,
                                                        items: Vec<Item<'_>>)
                                                        -> ParseResult<Subtree> {
        let mut prefixes = Vec::new();
        let mut suffixes = Vec::new();
        let mut operand: Option<Subtree> = None;

        for item in items {
            match (item, operand.is_some()) {
                (Item::Operator(token), false) if token.kind == TokenType::PreUnaryOperator => {
                    prefixes.push(token);
                },
                (Item::Operator(token), true) if token.kind == TokenType::PostUnaryOperator => {
                    suffixes.push(token);
                },
                (Item::Operand(subtree), false) => operand = Some(subtree),
                (Item::Operand(subtree), true) => {
                    return Err(ParseError::MalformedTree { node: subtree.node.to_string() });
                },
                (Item::Operator(token), false) if token.kind == TokenType::PostUnaryOperator => {
                    return Err(ParseError::MissingOperand { operator: token.text.clone() });
                },
                (Item::Operator(token), _) => {
                    return Err(ParseError::MalformedTree { node: token.text.clone() });
                },
            }
        }

        let Some(mut node) = operand else {
            return Err(match prefixes.last() {
                           Some(token) => ParseError::MissingOperand { operator: token.text.clone() },
                           None => ParseError::EmptyExpression,
                       });
        };

        for token in suffixes {
            node = self.wrap(&token.text, TokenType::PostUnaryOperator, vec![node])?;
        }
        for token in prefixes.into_iter().rev() {
            node = self.wrap(&token.text, TokenType::PreUnaryOperator, vec![node])?;
        }

        Ok(node)
    }
}
