use std::collections::HashMap;

use crate::{
    ast::SemanticNode,
    error::EvalError,
    grammar::callable::Native,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Values for the free variables of a semantic tree, keyed by canonical name.
///
/// For case-insensitive grammars the canonical name is the lowercase one.
pub type Bindings = HashMap<String, Value>;

/// Evaluates a semantic tree.
///
/// Constants yield their value and variables are looked up in `bindings`.
/// Call nodes evaluate every child first, depth-first and left to right, then
/// invoke their callable: positionally for [`SemanticNode::Method`], with one
/// argument list for [`SemanticNode::VarargMethod`]. Nothing short-circuits
/// unless a callable does so itself.
///
/// The tree is never modified, so it can be evaluated again, with other
/// bindings, after a failure.
///
/// # Parameters
/// - `node`: The root of a semantic tree.
/// - `bindings`: Values for the tree's free variables.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - `UnboundVariable` if a variable has no binding.
/// - `TypeMismatch` if a binding does not fit the variable's declared kind.
/// - Any error raised by a callable.
///
/// # Example
/// ```
/// use gramex::{
///     grammar::real::real_grammar,
///     interpreter::{
///         evaluator::core::{Bindings, evaluate},
///         value::core::Value,
///     },
///     parse,
/// };
///
/// let tree = parse("2x + 1", &real_grammar()).unwrap();
///
/// let mut bindings = Bindings::new();
/// bindings.insert("x".to_string(), Value::Number(3.0));
/// assert_eq!(evaluate(&tree, &bindings).unwrap(), Value::Number(7.0));
///
/// bindings.insert("x".to_string(), Value::Number(-1.0));
/// assert_eq!(evaluate(&tree, &bindings).unwrap(), Value::Number(-1.0));
/// ```
pub fn evaluate(node: &SemanticNode, bindings: &Bindings) -> EvalResult<Value> {
    match node {
        SemanticNode::Constant { value, .. } => Ok(value.clone()),
        SemanticNode::Variable { name, kind } => {
            let value = bindings.get(name)
                                .ok_or_else(|| EvalError::UnboundVariable { name: name.clone() })?;
            if !kind.admits(value) {
                return Err(EvalError::TypeMismatch { name:     name.clone(),
                                                     expected: *kind,
                                                     found:    value.kind(), });
            }
            Ok(value.clone())
        },
        SemanticNode::Method { callable,
                               children,
                               .. } => {
            let args = evaluate_children(children, bindings)?;
            callable.call(&args)
        },
        SemanticNode::VarargMethod { label,
                                     callable,
                                     children, } => {
            let args = evaluate_children(children, bindings)?;
            match callable.native() {
                Native::Variadic(f) => f(&args),
                _ => {
                    Err(EvalError::InvalidArgument { details: format!("'{label}' does not take an \
                                                                       argument list"), })
                },
            }
        },
    }
}

fn evaluate_children(children: &[SemanticNode], bindings: &Bindings) -> EvalResult<Vec<Value>> {
    children.iter().map(|child| evaluate(child, bindings)).collect()
}

impl SemanticNode {
    /// Evaluates the tree rooted at this node.
    ///
    /// Shorthand for [`evaluate`].
    ///
    /// # Errors
    /// See [`evaluate`].
    pub fn evaluate(&self, bindings: &Bindings) -> EvalResult<Value> {
        evaluate(self, bindings)
    }
}
