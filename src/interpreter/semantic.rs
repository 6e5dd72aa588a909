use crate::{
    ast::{SemanticNode, TokenNode},
    error::ParseError,
    grammar::{Grammar, callable::Callable, core::OperatorRole},
    interpreter::{lexer::TokenType, parser::core::ParseResult, value::core::Value},
    util::num::parse_number,
};

/// Compiles a token tree into a semantic tree bound to the grammar's
/// callables.
///
/// Numbers become constants; identifiers become grammar constants or free
/// variables; operators and functions are bound to the callable registered
/// for their name and role. Parentheses vanish unless their opener is bound
/// as an enclosure, in which case the enclosure's callable is applied to the
/// contents.
///
/// Variadic callables produce [`SemanticNode::VarargMethod`], fixed-arity
/// ones [`SemanticNode::Method`].
///
/// # Parameters
/// - `node`: The root of a token tree, usually the `TOP` node returned by
///   [`build_tree`](crate::interpreter::parser::core::build_tree).
/// - `grammar`: The grammar the tree was built with.
///
/// # Returns
/// The root of the semantic tree.
///
/// # Errors
/// - `UnknownIdentifier` for names that are neither constants, variables nor
///   functions.
/// - `UnknownOperator` if an operator has no callable for its role.
/// - `ArityMismatch` if a fixed-arity callable gets the wrong number of
///   children.
/// - `MalformedTree` for nodes with an impossible shape.
/// - `NestingTooDeep` if the tree exceeds the grammar's depth limit.
///
/// # Example
/// ```
/// use gramex::{
///     grammar::testing::test_grammar,
///     interpreter::{parser::core::tokenize_tree, semantic::build_semantic_tree},
/// };
///
/// let grammar = test_grammar();
/// let tree = tokenize_tree("2 (a - b)", &grammar).unwrap();
/// let semantic = build_semantic_tree(&tree, &grammar).unwrap();
///
/// assert_eq!(semantic.to_string(), "*[2, -[a, b]]");
/// ```
pub fn build_semantic_tree(node: &TokenNode, grammar: &Grammar) -> ParseResult<SemanticNode> {
    // TOP adds one level on top of the parser's limit.
    if node.depth() > grammar.max_depth() + 1 {
        return Err(ParseError::NestingTooDeep { limit: grammar.max_depth() });
    }

    let tree = Binder { grammar }.bind(node)?;
    log::debug!("bound semantic tree {tree}");
    Ok(tree)
}

struct Binder<'a> {
    grammar: &'a Grammar,
}

impl Binder<'_> {
    fn bind(&self, node: &TokenNode) -> ParseResult<SemanticNode> {
        log::trace!("binding {:?} '{}'", node.kind, node.name);

        match node.kind {
            TokenType::Top => self.bind(single_child(node)?),
            TokenType::ParentheticalOpen => match self.grammar.enclosure(&node.name) {
                Some(callable) => {
                    let contents = single_child(node)?;
                    self.bind_call(&node.name, *callable, self.arguments(contents))
                },
                None => self.bind(single_child(node)?),
            },
            TokenType::Number => {
                leaf(node)?;
                let value = parse_number(&node.name).ok_or_else(|| malformed(node))?;
                Ok(SemanticNode::Constant { label: node.name.clone(),
                                            value: Value::Number(value), })
            },
            TokenType::Identifier => {
                leaf(node)?;
                self.bind_identifier(&node.name)
            },
            TokenType::PreUnaryOperator => self.bind_operator(node, OperatorRole::PreUnary),
            TokenType::PostUnaryOperator => self.bind_operator(node, OperatorRole::PostUnary),
            TokenType::BinaryOperator | TokenType::MultaryOperator => {
                self.bind_operator(node, OperatorRole::Nary)
            },
            TokenType::Function => {
                let callable = self.grammar
                                   .function(&node.name)
                                   .ok_or_else(|| ParseError::UnknownIdentifier { name: node.name.clone() })?;
                self.bind_call(&node.name, *callable, &node.children)
            },
            TokenType::ParentheticalClose => Err(malformed(node)),
        }
    }

    /// Resolves a name to a grammar constant or a free variable.
    fn bind_identifier(&self, name: &str) -> ParseResult<SemanticNode> {
        if let Some(value) = self.grammar.constant(name) {
            return Ok(SemanticNode::Constant { label: name.to_string(),
                                               value: value.clone(), });
        }

        match self.grammar.variable_kind(name) {
            Some(kind) => Ok(SemanticNode::Variable { name: name.to_string(),
                                                      kind }),
            None => Err(ParseError::UnknownIdentifier { name: name.to_string() }),
        }
    }

    fn bind_operator(&self, node: &TokenNode, role: OperatorRole) -> ParseResult<SemanticNode> {
        let callable = self.grammar
                           .operator(&node.name, role)
                           .ok_or_else(|| ParseError::UnknownOperator { symbol: node.name.clone() })?;
        self.bind_call(&node.name, *callable, &node.children)
    }

    /// Binds the children and creates the call node matching the callable's
    /// arity.
    fn bind_call(&self,
                 label: &str,
                 callable: Callable,
                 children: &[TokenNode])
                 -> ParseResult<SemanticNode> {
        let arity = callable.arity();
        if !arity.check(children.len()) {
            return Err(ParseError::ArityMismatch { name:     label.to_string(),
                                                   expected: arity.to_string(),
                                                   found:    children.len(), });
        }

        let children = children.iter()
                               .map(|child| self.bind(child))
                               .collect::<ParseResult<Vec<_>>>()?;

        let label = label.to_string();
        if callable.is_variadic() {
            Ok(SemanticNode::VarargMethod { label,
                                            callable,
                                            children })
        } else {
            Ok(SemanticNode::Method { label,
                                      callable,
                                      children })
        }
    }

    /// The arguments inside an enclosure: the operands of a top-level
    /// separator, or the contents as one argument.
    fn arguments<'n>(&self, contents: &'n TokenNode) -> &'n [TokenNode] {
        if contents.kind.is_infix() && contents.name == self.grammar.argument_list_separator() {
            &contents.children
        } else {
            std::slice::from_ref(contents)
        }
    }
}

fn single_child(node: &TokenNode) -> ParseResult<&TokenNode> {
    match node.children.as_slice() {
        [child] => Ok(child),
        [] => Err(ParseError::EmptyExpression),
        _ => Err(malformed(node)),
    }
}

fn leaf(node: &TokenNode) -> ParseResult<()> {
    if node.is_leaf() { Ok(()) } else { Err(malformed(node)) }
}

fn malformed(node: &TokenNode) -> ParseError {
    ParseError::MalformedTree { node: node.name.clone() }
}
