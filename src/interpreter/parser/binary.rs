use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TreeBuilder},
            utils::{Item, Subtree},
        },
    },
};

impl TreeBuilder<'_> {
    /// Builds one subtree from a stream of operands and operators.
    ///
    /// The loosest-binding infix operator is located, and the stream is split
    /// at every occurrence of it. The pieces are built recursively; each has
    /// only tighter-binding operators left, so the recursion depth is bounded
    /// by the number of precedence levels.
    ///
    /// A multary operator gathers all pieces as children of one node. Any
    /// other operator folds them pairwise, from the left unless the grammar
    /// declares it right-associative. Streams without infix operators are
    /// handed to [`build_operand`](TreeBuilder::build_operand).
    ///
    /// # Parameters
    /// - `items`: The resolved stream of one group or of the whole input.
    ///
    /// # Returns
    /// The subtree for the stream.
    ///
    /// # Errors
    /// - `EmptyExpression` for an empty stream.
    /// - `PrecedenceConflict` if an infix operator has no precedence.
    /// - `MissingOperand` if an infix operator has nothing on one side.
    /// - `NestingTooDeep` if the result exceeds the grammar's depth limit.
    pub(in crate::interpreter::parser) fn build_expression<'t>(&self,
                                                               items: Vec<Item<'t>>)
                                                               -> ParseResult<Subtree> {
        if items.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let Some(operator) = self.loosest_operator(&items)? else {
            return self.build_operand(items);
        };

        let mut operands = Vec::new();
        for segment in split_at(items, operator) {
            if segment.is_empty() {
                return Err(ParseError::MissingOperand { operator: operator.text.clone() });
            }
            operands.push(self.build_expression(segment)?);
        }

        let symbol = operator.text.as_str();
        if self.grammar.is_multary(symbol) {
            return self.wrap(symbol, operator.kind, operands);
        }

        log::trace!("folding {} operands of '{symbol}'", operands.len());
        if self.grammar.is_right_associative(symbol) {
            let mut operands = operands.into_iter().rev();
            let Some(mut right) = operands.next() else {
                return Err(ParseError::MissingOperand { operator: symbol.to_string() });
            };
            for left in operands {
                right = self.wrap(symbol, operator.kind, vec![left, right])?;
            }
            Ok(right)
        } else {
            let mut operands = operands.into_iter();
            let Some(mut left) = operands.next() else {
                return Err(ParseError::MissingOperand { operator: symbol.to_string() });
            };
            for right in operands {
                left = self.wrap(symbol, operator.kind, vec![left, right])?;
            }
            Ok(left)
        }
    }

    /// Finds the first infix operator with the lowest precedence.
    fn loosest_operator<'t>(&self, items: &[Item<'t>]) -> ParseResult<Option<&'t Token>> {
        let mut loosest: Option<(&'t Token, usize)> = None;

        for item in items {
            let Item::Operator(token) = item else {
                continue;
            };
            if !token.kind.is_infix() {
                continue;
            }

            let precedence = self.grammar.precedence(&token.text).ok_or_else(|| {
                                 ParseError::PrecedenceConflict {
                                     operator: token.text.clone(),
                                     details:  "it is missing from the order of operations".to_string(),
                                 }
                             })?;
            if loosest.is_none_or(|(_, lowest)| precedence < lowest) {
                loosest = Some((*token, precedence));
            }
        }

        Ok(loosest.map(|(token, _)| token))
    }
}

/// Splits a stream at every infix occurrence of `operator`'s symbol.
///
/// Prefix and postfix uses of the same symbol stay inside their segment.
fn split_at<'t>(items: Vec<Item<'t>>, operator: &Token) -> Vec<Vec<Item<'t>>> {
    let mut segments = vec![Vec::new()];
    for item in items {
        match item {
            Item::Operator(token) if token.kind.is_infix() && token.text == operator.text => {
                segments.push(Vec::new());
            },
            item => {
                if let Some(segment) = segments.last_mut() {
                    segment.push(item);
                }
            },
        }
    }
    segments
}
