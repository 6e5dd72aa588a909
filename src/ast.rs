use std::collections::BTreeSet;

use crate::{
    grammar::callable::Callable,
    interpreter::{
        lexer::TokenType,
        value::core::{Value, ValueKind},
    },
};

/// Name of the synthetic root of every token tree.
pub const TOP: &str = "TOP";

/// A node of the token tree: the precedence-respecting structure of an input
/// before any operator is bound to an implementation.
///
/// The root is always the synthetic [`TOP`] node. A
/// [`TokenType::ParentheticalOpen`] node has exactly one child, the
/// parenthesized sub-expression; a [`TokenType::Function`] node's children are
/// its arguments.
///
/// `TokenNode` displays as `NAME[child1, child2, ...]`, with leaves rendered
/// as just their name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenNode {
    /// The token text: an operator symbol, delimiter, name or literal.
    pub name:     String,
    /// The role of the token.
    pub kind:     TokenType,
    /// Ordered operands, arguments or grouped sub-expression.
    pub children: Vec<Self>,
}

impl TokenNode {
    /// Creates a node with children.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TokenType, children: Vec<Self>) -> Self {
        Self { name: name.into(),
               kind,
               children }
    }

    /// Creates a childless node.
    #[must_use]
    pub fn leaf(name: impl Into<String>, kind: TokenType) -> Self {
        Self::new(name, kind, Vec::new())
    }

    /// Wraps an expression in the synthetic root.
    #[must_use]
    pub fn top(expression: Self) -> Self {
        Self::new(TOP, TokenType::Top, vec![expression])
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// Computed without recursion so it is safe on trees of any shape.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

impl std::fmt::Display for TokenNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_node(f, &self.name, &self.children)
    }
}

/// A node of the semantic tree: a token tree compiled against a grammar, with
/// every operator and function bound to its implementation.
///
/// Parentheses carry no node of their own. The tree is immutable after
/// construction and can be evaluated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticNode {
    /// A literal or grammar constant.
    Constant {
        /// The source text or constant name.
        label: String,
        /// The constant value.
        value: Value,
    },
    /// A free variable, resolved when the tree is evaluated.
    Variable {
        /// The canonical variable name.
        name: String,
        /// The kind of value the variable must be bound to.
        kind: ValueKind,
    },
    /// A call with a fixed number of positional arguments.
    Method {
        /// The operator symbol or function name.
        label:    String,
        /// The bound implementation.
        callable: Callable,
        /// One child per argument.
        children: Vec<Self>,
    },
    /// A call whose arguments are passed as one list.
    VarargMethod {
        /// The operator symbol or function name.
        label:    String,
        /// The bound implementation.
        callable: Callable,
        /// The argument list.
        children: Vec<Self>,
    },
}

impl SemanticNode {
    /// The name shown for this node in its display form.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Constant { label, .. }
            | Self::Method { label, .. }
            | Self::VarargMethod { label, .. } => label,
            Self::Variable { name, .. } => name,
        }
    }

    /// The node's children; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Constant { .. } | Self::Variable { .. } => &[],
            Self::Method { children, .. } | Self::VarargMethod { children, .. } => children,
        }
    }

    /// Collects the names of all free variables in the tree, sorted.
    ///
    /// # Example
    /// ```
    /// use gramex::{grammar::testing::test_grammar, parse};
    ///
    /// let tree = parse("b * a + b", &test_grammar()).unwrap();
    /// let names: Vec<&str> = tree.variables().into_iter().collect();
    /// assert_eq!(names, ["a", "b"]);
    /// ```
    #[must_use]
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Self::Variable { name, .. } = node {
                names.insert(name.as_str());
            }
            stack.extend(node.children());
        }
        names
    }
}

impl std::fmt::Display for SemanticNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_node(f, self.label(), self.children())
    }
}

/// Writes the canonical `NAME[child1, child2]` form shared by both trees.
fn write_node<T: std::fmt::Display>(f: &mut std::fmt::Formatter<'_>,
                                    name: &str,
                                    children: &[T])
                                    -> std::fmt::Result {
    write!(f, "{name}")?;
    if children.is_empty() {
        return Ok(());
    }

    write!(f, "[")?;
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, "]")
}
