use crate::{
    ast::TokenNode,
    error::ParseError,
    grammar::Grammar,
    interpreter::{
        lexer::{Token, TokenType, tokenize},
        parser::utils::{Item, Subtree},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Tokenizes an input string and builds its token tree.
///
/// This is the composition of [`tokenize`] and [`build_tree`].
///
/// # Errors
/// Propagates every error of either stage.
///
/// # Example
/// ```
/// use gramex::{grammar::testing::test_grammar, interpreter::parser::core::tokenize_tree};
///
/// let tree = tokenize_tree("a+b*c", &test_grammar()).unwrap();
/// assert_eq!(tree.to_string(), "TOP[+[a, *[b, c]]]");
/// ```
pub fn tokenize_tree(input: &str, grammar: &Grammar) -> ParseResult<TokenNode> {
    let tokens = tokenize(input, grammar)?;
    build_tree(&tokens, grammar)
}

/// Builds a token tree from a flat token sequence.
///
/// Parenthetical groups and function calls are resolved into single subtrees
/// first. At each remaining level the stream is split at its loosest-binding
/// operator, recursing on the pieces; what is left are operands wrapped in
/// prefix and postfix operator chains.
///
/// The result is always rooted at the synthetic `TOP` node.
///
/// # Errors
/// - `EmptyExpression` if there are no tokens, or a group is empty.
/// - `PrecedenceConflict` if a binary operator has no precedence.
/// - `MissingOperand` if an operator lacks an operand.
/// - `UnmatchedClose`, `UnterminatedParenthetical` or `UnrecognizedToken`
///   for token sequences the tokenizer would never produce.
/// - `NestingTooDeep` if the tree would exceed the grammar's depth limit.
pub fn build_tree(tokens: &[Token], grammar: &Grammar) -> ParseResult<TokenNode> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut builder = TreeBuilder { grammar,
                                    tokens,
                                    position: 0 };
    let items = builder.read_items(None, 0)?;
    let expression = builder.build_expression(items)?;

    let tree = TokenNode::top(expression.node);
    log::debug!("built token tree {tree}");
    Ok(tree)
}

/// Walks the token sequence and assembles subtrees.
pub(in crate::interpreter::parser) struct TreeBuilder<'a> {
    pub(in crate::interpreter::parser) grammar: &'a Grammar,
    tokens:                                     &'a [Token],
    position:                                   usize,
}

impl<'a> TreeBuilder<'a> {
    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Reads tokens up to the end of the current group, resolving nested
    /// groups and calls into operands.
    ///
    /// # Parameters
    /// - `group`: The opening token of the enclosing group, or `None` at the
    ///   top level.
    /// - `depth`: Current group nesting depth.
    fn read_items(&mut self,
                  group: Option<&'a Token>,
                  depth: usize)
                  -> ParseResult<Vec<Item<'a>>> {
        let mut items = Vec::new();

        while let Some(token) = self.next() {
            match token.kind {
                TokenType::Number | TokenType::Identifier => {
                    items.push(Item::Operand(Subtree::leaf(&token.text, token.kind)));
                },
                TokenType::ParentheticalOpen => {
                    items.push(Item::Operand(self.read_group(token, depth + 1)?));
                },
                TokenType::Function => {
                    items.push(Item::Operand(self.read_call(token, depth + 1)?));
                },
                TokenType::ParentheticalClose => {
                    return match group {
                        Some(open) if self.closes(open, token) => Ok(items),
                        _ => Err(ParseError::UnmatchedClose { close:    token.text.clone(),
                                                              position: token.position, }),
                    };
                },
                TokenType::PreUnaryOperator
                | TokenType::PostUnaryOperator
                | TokenType::BinaryOperator
                | TokenType::MultaryOperator => items.push(Item::Operator(token)),
                TokenType::Top => {
                    return Err(ParseError::UnrecognizedToken { token:    token.text.clone(),
                                                               position: token.position, });
                },
            }
        }

        match group {
            Some(open) => Err(ParseError::UnterminatedParenthetical { open:     open.text.clone(),
                                                                      close:    self.closer_of(open),
                                                                      position: open.position, }),
            None => Ok(items),
        }
    }

    /// Resolves `open ... close` into a parenthetical node with one child.
    fn read_group(&mut self, open: &'a Token, depth: usize) -> ParseResult<Subtree> {
        self.check_depth(depth)?;

        let items = self.read_items(Some(open), depth)?;
        let inner = self.build_expression(items)?;
        self.wrap(&open.text, TokenType::ParentheticalOpen, vec![inner])
    }

    /// Resolves `name ( args )` into a function node whose children are the
    /// arguments.
    fn read_call(&mut self, function: &'a Token, depth: usize) -> ParseResult<Subtree> {
        self.check_depth(depth)?;

        let open = match self.next() {
            Some(token) if token.kind == TokenType::ParentheticalOpen
                           && token.text == self.grammar.argument_list_opener() =>
            {
                token
            },
            _ => {
                return Err(ParseError::UnrecognizedToken { token:    function.text.clone(),
                                                           position: function.position, });
            },
        };

        let items = self.read_items(Some(open), depth)?;
        let arguments = if items.is_empty() {
            Vec::new()
        } else {
            self.build_expression(items)?
                .into_arguments(self.grammar.argument_list_separator())
        };

        self.wrap(&function.text, TokenType::Function, arguments)
    }

    /// Creates a parent node, enforcing the grammar's depth limit.
    pub(in crate::interpreter::parser) fn wrap(&self,
                                               name: &str,
                                               kind: TokenType,
                                               children: Vec<Subtree>)
                                               -> ParseResult<Subtree> {
        Subtree::wrap(name, kind, children, self.grammar.max_depth())
    }

    fn check_depth(&self, depth: usize) -> ParseResult<()> {
        if depth > self.grammar.max_depth() {
            return Err(ParseError::NestingTooDeep { limit: self.grammar.max_depth() });
        }
        Ok(())
    }

    fn closes(&self, open: &Token, close: &Token) -> bool {
        self.grammar
            .parentheticals()
            .iter()
            .any(|pair| pair.open == open.text && pair.close == close.text)
    }

    fn closer_of(&self, open: &Token) -> String {
        self.grammar
            .parentheticals()
            .iter()
            .find(|pair| pair.open == open.text)
            .map(|pair| pair.close.clone())
            .unwrap_or_default()
    }
}
