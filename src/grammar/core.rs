use std::collections::{HashMap, HashSet};

use crate::{
    error::GrammarError,
    grammar::callable::Callable,
    interpreter::value::core::{Value, ValueKind},
};

/// Default limit on expression nesting and tree depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A pair of opening and closing delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parenthetical {
    /// The opening delimiter, such as `(` or `/**`.
    pub open:  String,
    /// The closing delimiter, such as `)` or `*/`.
    pub close: String,
}

/// The role an operator symbol plays at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorRole {
    /// Applied before its operand.
    PreUnary,
    /// Applied after its operand.
    PostUnary,
    /// Between two (or, for multary symbols, more) operands.
    Nary,
}

/// An immutable description of a parseable language.
///
/// A grammar names its constants, operators by role, the order of operations,
/// parenthetical pairs, callable functions and a few lexical switches. It is
/// built once with [`GrammarBuilder`] and can then be shared read-only by any
/// number of parses, including across threads.
///
/// # Example
/// ```
/// use gramex::{
///     grammar::{Grammar, callable::Callable},
///     interpreter::value::core::Value,
/// };
///
/// let grammar = Grammar::builder().parenthetical("(", ")")
///                                 .argument_list("(", ",")
///                                 .multary(",", Callable::variadic("list", |args| Ok(Value::List(args.to_vec()))))
///                                 .binary("-", Callable::binary("sub", |a, b| Ok(Value::Number(a.as_number()? - b.as_number()?))))
///                                 .order_of_operations([",", "-"])
///                                 .build()
///                                 .unwrap();
///
/// assert_eq!(grammar.precedence("-"), Some(1));
/// assert!(grammar.is_multary(","));
/// ```
#[derive(Debug, Clone)]
pub struct Grammar {
    case_sensitive:          bool,
    parentheticals:          Vec<Parenthetical>,
    argument_list_opener:    String,
    argument_list_separator: String,
    implicit_operator:       Option<String>,
    constants:               HashMap<String, Value>,
    pre_unary:               HashMap<String, Callable>,
    post_unary:              HashMap<String, Callable>,
    nary:                    HashMap<String, Callable>,
    multary:                 HashSet<String>,
    right_associative:       HashSet<String>,
    order_of_operations:     Vec<String>,
    precedence:              HashMap<String, usize>,
    functions:               HashMap<String, Callable>,
    enclosures:              HashMap<String, Callable>,
    variables:               HashMap<String, ValueKind>,
    default_variable_kind:   ValueKind,
    free_variables:          bool,
    max_depth:               usize,
    operator_symbols:        Vec<String>,
}

impl Grammar {
    /// Starts building a grammar.
    #[must_use]
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// Whether identifiers and word operators are matched case-sensitively.
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// The parenthetical pairs in declaration order.
    #[must_use]
    pub fn parentheticals(&self) -> &[Parenthetical] {
        &self.parentheticals
    }

    /// The delimiter that opens a function's argument list.
    #[must_use]
    pub fn argument_list_opener(&self) -> &str {
        &self.argument_list_opener
    }

    /// The operator separating function arguments.
    #[must_use]
    pub fn argument_list_separator(&self) -> &str {
        &self.argument_list_separator
    }

    /// The operator implied by juxtaposition, if any.
    #[must_use]
    pub fn implicit_operator(&self) -> Option<&str> {
        self.implicit_operator.as_deref()
    }

    /// Looks up a constant by its canonical name.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    /// Looks up the callable bound to an operator in the given role.
    #[must_use]
    pub fn operator(&self, symbol: &str, role: OperatorRole) -> Option<&Callable> {
        match role {
            OperatorRole::PreUnary => self.pre_unary.get(symbol),
            OperatorRole::PostUnary => self.post_unary.get(symbol),
            OperatorRole::Nary => self.nary.get(symbol),
        }
    }

    /// Returns `true` if the symbol can be used as a prefix operator.
    #[must_use]
    pub fn is_pre_unary(&self, symbol: &str) -> bool {
        self.pre_unary.contains_key(symbol)
    }

    /// Returns `true` if the symbol can be used as a postfix operator.
    #[must_use]
    pub fn is_post_unary(&self, symbol: &str) -> bool {
        self.post_unary.contains_key(symbol)
    }

    /// Returns `true` if the symbol can be used between operands.
    #[must_use]
    pub fn is_nary(&self, symbol: &str) -> bool {
        self.nary.contains_key(symbol)
    }

    /// Returns `true` if repeated uses of the symbol flatten into one node.
    #[must_use]
    pub fn is_multary(&self, symbol: &str) -> bool {
        self.multary.contains(symbol)
    }

    /// Returns `true` if the symbol groups from the right.
    #[must_use]
    pub fn is_right_associative(&self, symbol: &str) -> bool {
        self.right_associative.contains(symbol)
    }

    /// The operators from lowest to highest binding precedence.
    #[must_use]
    pub fn order_of_operations(&self) -> &[String] {
        &self.order_of_operations
    }

    /// The precedence of an operator; lower values bind more loosely.
    #[must_use]
    pub fn precedence(&self, symbol: &str) -> Option<usize> {
        self.precedence.get(symbol).copied()
    }

    /// Looks up a function by its canonical name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Callable> {
        self.functions.get(name)
    }

    /// Returns `true` if the name is a registered function.
    #[must_use]
    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Looks up the callable bound to a parenthetical opener, if any.
    #[must_use]
    pub fn enclosure(&self, open: &str) -> Option<&Callable> {
        self.enclosures.get(open)
    }

    /// The expected kind of a variable, or `None` if undeclared and free
    /// variables are disallowed.
    #[must_use]
    pub fn variable_kind(&self, name: &str) -> Option<ValueKind> {
        match self.variables.get(name) {
            Some(kind) => Some(*kind),
            None if self.free_variables => Some(self.default_variable_kind),
            None => None,
        }
    }

    /// The maximum nesting and tree depth accepted by the parser.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Every operator symbol, longest first, for longest-match scanning.
    #[must_use]
    pub fn operator_symbols(&self) -> &[String] {
        &self.operator_symbols
    }

    /// Folds a name to its canonical case.
    #[must_use]
    pub fn canonical(&self, name: &str) -> String {
        if self.case_sensitive {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    }

    /// Tests whether `text` begins with `symbol` under the grammar's case
    /// rules.
    ///
    /// Case-insensitive comparison is ASCII-only.
    #[must_use]
    pub fn starts_with_symbol(&self, text: &str, symbol: &str) -> bool {
        text.get(..symbol.len()).is_some_and(|head| {
                                    if self.case_sensitive {
                                        head == symbol
                                    } else {
                                        head.eq_ignore_ascii_case(symbol)
                                    }
                                })
    }
}

/// Fluent builder for [`Grammar`].
///
/// Later registrations of the same symbol replace earlier ones. Registering a
/// symbol as multary also registers it as n-ary; if a symbol is registered as
/// both binary and multary, multary wins in either order, and the symbol keeps
/// the callable of its multary registration.
#[derive(Debug, Clone)]
pub struct GrammarBuilder {
    case_sensitive:          bool,
    parentheticals:          Vec<Parenthetical>,
    argument_list_opener:    String,
    argument_list_separator: String,
    implicit_operator:       Option<String>,
    constants:               Vec<(String, Value)>,
    pre_unary:               Vec<(String, Callable)>,
    post_unary:              Vec<(String, Callable)>,
    nary:                    Vec<(String, Callable)>,
    multary:                 Vec<(String, Callable)>,
    right_associative:       Vec<String>,
    order_of_operations:     Vec<String>,
    functions:               Vec<(String, Callable)>,
    enclosures:              Vec<(String, Callable)>,
    variables:               Vec<(String, ValueKind)>,
    default_variable_kind:   ValueKind,
    free_variables:          bool,
    max_depth:               usize,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarBuilder {
    /// Creates a builder with `(`/`,` argument lists, case sensitivity,
    /// free variables of any kind and the default depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self { case_sensitive:          true,
               parentheticals:          Vec::new(),
               argument_list_opener:    "(".to_string(),
               argument_list_separator: ",".to_string(),
               implicit_operator:       None,
               constants:               Vec::new(),
               pre_unary:               Vec::new(),
               post_unary:              Vec::new(),
               nary:                    Vec::new(),
               multary:                 Vec::new(),
               right_associative:       Vec::new(),
               order_of_operations:     Vec::new(),
               functions:               Vec::new(),
               enclosures:              Vec::new(),
               variables:               Vec::new(),
               default_variable_kind:   ValueKind::Any,
               free_variables:          true,
               max_depth:               DEFAULT_MAX_DEPTH, }
    }

    /// Sets whether names are matched case-sensitively.
    #[must_use]
    pub const fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    /// Adds a pair of grouping delimiters.
    #[must_use]
    pub fn parenthetical(mut self, open: &str, close: &str) -> Self {
        self.parentheticals.push(Parenthetical { open:  open.to_string(),
                                                 close: close.to_string(), });
        self
    }

    /// Sets the argument-list opener and separator.
    #[must_use]
    pub fn argument_list(mut self, opener: &str, separator: &str) -> Self {
        self.argument_list_opener = opener.to_string();
        self.argument_list_separator = separator.to_string();
        self
    }

    /// Sets the operator implied by juxtaposition.
    #[must_use]
    pub fn implicit_operator(mut self, symbol: &str) -> Self {
        self.implicit_operator = Some(symbol.to_string());
        self
    }

    /// Adds a named constant.
    #[must_use]
    pub fn constant(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.constants.push((name.to_string(), value.into()));
        self
    }

    /// Adds a prefix operator.
    #[must_use]
    pub fn pre_unary(mut self, symbol: &str, callable: Callable) -> Self {
        self.pre_unary.push((symbol.to_string(), callable));
        self
    }

    /// Adds a postfix operator.
    #[must_use]
    pub fn post_unary(mut self, symbol: &str, callable: Callable) -> Self {
        self.post_unary.push((symbol.to_string(), callable));
        self
    }

    /// Adds an operator applied between two operands.
    #[must_use]
    pub fn binary(mut self, symbol: &str, callable: Callable) -> Self {
        self.nary.push((symbol.to_string(), callable));
        self
    }

    /// Adds an operator whose repeated uses flatten into one node.
    #[must_use]
    pub fn multary(mut self, symbol: &str, callable: Callable) -> Self {
        self.nary.push((symbol.to_string(), callable));
        self.multary.push((symbol.to_string(), callable));
        self
    }

    /// Declares a binary operator as grouping from the right.
    #[must_use]
    pub fn right_associative(mut self, symbol: &str) -> Self {
        self.right_associative.push(symbol.to_string());
        self
    }

    /// Sets the order of operations, from lowest to highest binding
    /// precedence.
    #[must_use]
    pub fn order_of_operations<I, S>(mut self, symbols: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.order_of_operations = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a named function.
    #[must_use]
    pub fn function(mut self, name: &str, callable: Callable) -> Self {
        self.functions.push((name.to_string(), callable));
        self
    }

    /// Binds a parenthetical opener to a callable applied to its contents.
    #[must_use]
    pub fn enclosure(mut self, open: &str, callable: Callable) -> Self {
        self.enclosures.push((open.to_string(), callable));
        self
    }

    /// Declares a variable and its expected kind.
    #[must_use]
    pub fn variable(mut self, name: &str, kind: ValueKind) -> Self {
        self.variables.push((name.to_string(), kind));
        self
    }

    /// Sets the kind expected of undeclared variables.
    #[must_use]
    pub const fn default_variable_kind(mut self, kind: ValueKind) -> Self {
        self.default_variable_kind = kind;
        self
    }

    /// Sets whether undeclared identifiers are accepted as variables.
    #[must_use]
    pub const fn free_variables(mut self, yes: bool) -> Self {
        self.free_variables = yes;
        self
    }

    /// Sets the maximum nesting and tree depth.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Validates the tables and produces an immutable grammar.
    ///
    /// For case-insensitive grammars every name and word operator is folded
    /// to lowercase here, once.
    ///
    /// # Errors
    /// Returns a [`GrammarError`] if an entry is empty, if the argument-list,
    /// implicit-operator or enclosure settings reference unregistered symbols,
    /// if the order of operations repeats a symbol, or if a multary symbol is
    /// declared right-associative.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        self.validate()?;
        Ok(self.assemble())
    }

    /// Checks the tables for consistency without building anything.
    fn validate(&self) -> Result<(), GrammarError> {
        if self.max_depth == 0 {
            return Err(GrammarError::ZeroDepth);
        }

        if self.parentheticals
               .iter()
               .any(|pair| pair.open.is_empty() || pair.close.is_empty())
        {
            return Err(GrammarError::EmptySymbol { what: "parentheticals" });
        }
        check_names(&self.pre_unary, "pre-unary operators")?;
        check_names(&self.post_unary, "post-unary operators")?;
        check_names(&self.nary, "n-ary operators")?;
        check_names(&self.functions, "functions")?;
        check_names(&self.enclosures, "enclosures")?;
        check_names(&self.constants, "constants")?;
        check_names(&self.variables, "variables")?;

        let multary: HashSet<String> = self.multary.iter().map(|(s, _)| self.fold(s)).collect();
        if let Some(symbol) = self.right_associative
                                  .iter()
                                  .map(|s| self.fold(s))
                                  .find(|s| multary.contains(s))
        {
            return Err(GrammarError::AssociativityConflict(symbol));
        }

        let mut seen = HashSet::with_capacity(self.order_of_operations.len());
        for symbol in &self.order_of_operations {
            let symbol = self.fold(symbol);
            if !seen.insert(symbol.clone()) {
                return Err(GrammarError::DuplicatePrecedence(symbol));
            }
        }

        let opens = |open: &str| self.parentheticals.iter().any(|p| self.fold(&p.open) == open);
        let is_nary = |symbol: &str| self.nary.iter().any(|(s, _)| self.fold(s) == symbol);

        let opener = self.fold(&self.argument_list_opener);
        if !opens(opener.as_str()) {
            return Err(GrammarError::UnknownArgumentOpener(opener));
        }

        let separator = self.fold(&self.argument_list_separator);
        if !is_nary(separator.as_str()) {
            return Err(GrammarError::UnknownArgumentSeparator(separator));
        }

        if let Some(symbol) = self.implicit_operator
                                  .as_deref()
                                  .map(|s| self.fold(s))
                                  .filter(|s| !is_nary(s.as_str()))
        {
            return Err(GrammarError::UnknownImplicitOperator(symbol));
        }

        if let Some(open) = self.enclosures
                                .iter()
                                .map(|(open, _)| self.fold(open))
                                .find(|open| !opens(open.as_str()))
        {
            return Err(GrammarError::UnknownEnclosure(open));
        }

        Ok(())
    }

    /// Produces the grammar without validating it.
    ///
    /// Only for configurations known to be consistent, such as the bundled
    /// grammars.
    pub(crate) fn assemble(self) -> Grammar {
        let parentheticals: Vec<Parenthetical> =
            self.parentheticals
                .iter()
                .map(|pair| Parenthetical { open:  self.fold(&pair.open),
                                            close: self.fold(&pair.close), })
                .collect();

        for (symbol, _) in &self.multary {
            if self.nary.iter().filter(|(s, _)| s == symbol).count() > 1 {
                log::warn!("'{symbol}' is registered as both binary and multary; multary wins");
            }
        }

        let pre_unary = self.fold_table(&self.pre_unary);
        let post_unary = self.fold_table(&self.post_unary);
        let mut nary = self.fold_table(&self.nary);
        nary.extend(self.fold_table(&self.multary));
        let functions = self.fold_table(&self.functions);
        let enclosures = self.fold_table(&self.enclosures);
        let constants = self.fold_table(&self.constants);
        let variables = self.fold_table(&self.variables);

        let multary = self.multary.iter().map(|(s, _)| self.fold(s)).collect();
        let right_associative = self.right_associative.iter().map(|s| self.fold(s)).collect();

        let order_of_operations: Vec<String> =
            self.order_of_operations.iter().map(|s| self.fold(s)).collect();
        let precedence = order_of_operations.iter()
                                            .enumerate()
                                            .map(|(level, symbol)| (symbol.clone(), level))
                                            .collect();

        let mut operator_symbols: Vec<String> = pre_unary.keys()
                                                         .chain(post_unary.keys())
                                                         .chain(nary.keys())
                                                         .cloned()
                                                         .collect::<HashSet<_>>()
                                                         .into_iter()
                                                         .collect();
        operator_symbols.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        log::debug!("built grammar with {} operators, {} functions, {} parentheticals",
                    operator_symbols.len(),
                    functions.len(),
                    parentheticals.len());

        Grammar { case_sensitive: self.case_sensitive,
                  parentheticals,
                  argument_list_opener: self.fold(&self.argument_list_opener),
                  argument_list_separator: self.fold(&self.argument_list_separator),
                  implicit_operator: self.implicit_operator.as_deref().map(|s| self.fold(s)),
                  constants,
                  pre_unary,
                  post_unary,
                  nary,
                  multary,
                  right_associative,
                  order_of_operations,
                  precedence,
                  functions,
                  enclosures,
                  variables,
                  default_variable_kind: self.default_variable_kind,
                  free_variables: self.free_variables,
                  max_depth: self.max_depth,
                  operator_symbols }
    }

    /// Folds a name to the grammar's canonical case.
    fn fold(&self, name: &str) -> String {
        if self.case_sensitive {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    }

    /// Folds the keys of a registration list into a lookup table.
    ///
    /// Later entries replace earlier ones with the same canonical key.
    fn fold_table<T: Clone>(&self, entries: &[(String, T)]) -> HashMap<String, T> {
        entries.iter()
               .map(|(name, value)| (self.fold(name), value.clone()))
               .collect()
    }
}

/// Rejects empty names in a registration list.
fn check_names<T>(entries: &[(String, T)], what: &'static str) -> Result<(), GrammarError> {
    if entries.iter().any(|(name, _)| name.is_empty()) {
        return Err(GrammarError::EmptySymbol { what });
    }
    Ok(())
}
