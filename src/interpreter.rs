/// The evaluator module computes the value of a semantic tree.
///
/// It walks a bound tree depth-first, looks free variables up in the caller's
/// bindings and invokes the native implementations of operators and
/// functions. It also holds the bundled implementations used by the example
/// grammars.
///
/// # Responsibilities
/// - Evaluates semantic trees against a set of variable bindings.
/// - Checks bound values against the kinds variables are declared with.
/// - Provides arithmetic, comparison, logic and builtin function callables.
pub mod evaluator;
/// The lexer module tokenizes input strings for further parsing.
///
/// The lexer reads the raw input and produces a flat list of tokens:
/// delimiters and operators configured by the grammar, plus numbers and names.
/// Operators are classified by position, and the grammar's implicit operator
/// is inserted between juxtaposed operands. This is the first stage of
/// parsing.
///
/// # Responsibilities
/// - Converts the input into tokens with a role and a byte offset.
/// - Disambiguates prefix, postfix and infix uses of the same symbol.
/// - Reports unrecognized input and unbalanced delimiters.
pub mod lexer;
/// The parser module builds the token tree from tokens.
///
/// The parser resolves parenthetical groups and function calls, then splits
/// each level at its loosest-binding operator, producing a tree that respects
/// the grammar's order of operations and associativity.
///
/// # Responsibilities
/// - Converts tokens into a `TOP`-rooted token tree.
/// - Flattens multary operators into single n-ary nodes.
/// - Enforces the grammar's depth limit.
pub mod parser;
/// The semantic module binds a token tree to a grammar's implementations.
///
/// Every operator, function and enclosure is resolved to its callable,
/// identifiers become constants or variables, and parentheses disappear. The
/// resulting tree can be evaluated any number of times.
pub mod semantic;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values produced by evaluation (numbers, booleans
/// and lists) and the kinds used to declare what a variable must hold.
pub mod value;
