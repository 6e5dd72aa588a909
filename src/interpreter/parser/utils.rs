use crate::{
    ast::TokenNode,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenType},
        parser::core::ParseResult,
    },
};

/// One element of a token stream once groups and calls are resolved.
#[derive(Debug)]
pub(in crate::interpreter::parser) enum Item<'a> {
    /// A finished subtree: a literal, a name, a group or a call.
    Operand(Subtree),
    /// An operator still waiting for its operands.
    Operator(&'a Token),
}

/// A token tree node together with its depth.
///
/// The depth is tracked while building so the limit can be enforced without
/// walking finished subtrees again.
#[derive(Debug)]
pub(in crate::interpreter::parser) struct Subtree {
    pub(in crate::interpreter::parser) node: TokenNode,
    depth:                                   usize,
}

impl Subtree {
    /// Creates a single-node subtree.
    pub(in crate::interpreter::parser) fn leaf(name: &str, kind: TokenType) -> Self {
        Self { node:  TokenNode::leaf(name, kind),
               depth: 1, }
    }

    /// Creates a parent node over `children`.
    ///
    /// # Parameters
    /// - `name`: Text of the parent token.
    /// - `kind`: Role of the parent token.
    /// - `children`: Operands or arguments, in order.
    /// - `limit`: Maximum depth the new subtree may have.
    ///
    /// # Returns
    /// The combined subtree.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` if the result would be deeper than `limit`.
    pub(in crate::interpreter::parser) fn wrap(name: &str,
                                               kind: TokenType,
                                               children: Vec<Self>,
                                               limit: usize)
                                               -> ParseResult<Self> {
        let depth = 1 + children.iter().map(|child| child.depth).max().unwrap_or(0);
        if depth > limit {
            return Err(ParseError::NestingTooDeep { limit });
        }

        let children = children.into_iter().map(|child| child.node).collect();
        Ok(Self { node: TokenNode::new(name, kind, children),
                  depth })
    }

    /// Splits the content of an argument list into its arguments.
    ///
    /// A top-level separator node contributes its operands; anything else is
    /// a single argument.
    pub(in crate::interpreter::parser) fn into_arguments(self, separator: &str) -> Vec<Self> {
        if self.node.kind.is_infix() && self.node.name == separator {
            let depth = self.depth - 1;
            self.node
                .children
                .into_iter()
                .map(|node| Self { node, depth })
                .collect()
        } else {
            vec![self]
        }
    }
}
