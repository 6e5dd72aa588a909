use logos::Logos;

use crate::{error::ParseError, grammar::Grammar, interpreter::parser::core::ParseResult};

/// The role of a token.
///
/// Operator roles are assigned positionally by the tokenizer: the same symbol
/// may be a prefix operator in one place and a binary operator in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// An opening delimiter such as `(`, `[` or `/**`.
    ParentheticalOpen,
    /// A closing delimiter such as `)`, `]` or `*/`.
    ParentheticalClose,
    /// A numeric literal such as `3`, `.5` or `1.033e-5`.
    Number,
    /// A constant or variable name.
    Identifier,
    /// An operator applied before its operand.
    PreUnaryOperator,
    /// An operator applied after its operand.
    PostUnaryOperator,
    /// An operator between two operands.
    BinaryOperator,
    /// An operator whose repeated uses flatten into one n-ary node.
    MultaryOperator,
    /// A function name immediately followed by its argument list.
    Function,
    /// The synthetic root of a token tree. Never produced by the tokenizer.
    Top,
}

impl TokenType {
    /// Returns `true` if an operand is expected after a token of this kind.
    ///
    /// This is the whole state of the tokenizer's positional disambiguation:
    /// at the start of input and after these kinds, a symbol takes its prefix
    /// role; after anything else it takes its binary or postfix role.
    #[must_use]
    pub const fn expects_operand_after(self) -> bool {
        matches!(self,
                 Self::ParentheticalOpen
                 | Self::PreUnaryOperator
                 | Self::BinaryOperator
                 | Self::MultaryOperator
                 | Self::Function
                 | Self::Top)
    }

    /// Returns `true` for binary and multary operators.
    #[must_use]
    pub const fn is_infix(self) -> bool {
        matches!(self, Self::BinaryOperator | Self::MultaryOperator)
    }
}

/// A lexical unit with its classified role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, folded to canonical case for case-insensitive grammars.
    pub text:     String,
    /// The role of the token.
    pub kind:     TokenType,
    /// Byte offset of the token in the input. Implicit operators take the
    /// offset of the token they precede.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: TokenType, position: usize) -> Self {
        Self { text: text.into(),
               kind,
               position }
    }
}

/// The grammar-independent part of the lexicon.
///
/// Delimiters and operators come from the grammar; numbers, names and
/// whitespace are the same for every grammar.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// Numeric literals, such as `3.14`, `.5`, `2`, or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?")]
    Number,
    /// Names of constants, variables and functions.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
}

/// A delimiter matched at the current position.
#[derive(Debug, Clone, Copy)]
enum Delimiter {
    Open(usize),
    Close(usize),
}

/// A parenthetical that has been opened but not yet closed.
struct OpenGroup {
    pair:     usize,
    position: usize,
}

/// Converts an input string into a flat sequence of classified tokens.
///
/// At each position the scanner tries, in order: a parenthetical delimiter,
/// the longest configured operator symbol, then a number, a name or
/// whitespace. Operators are classified by position, the grammar's implicit
/// operator is inserted between juxtaposed operands, and parenthetical nesting
/// is checked.
///
/// # Errors
/// - `UnterminatedParenthetical` if a group is still open at the end.
/// - `UnmatchedClose` for a closing delimiter without its opener.
/// - `UnrecognizedToken` for text no rule matches, or an operator with no
///   legal role at its position.
/// - `NestingTooDeep` if groups nest deeper than the grammar allows.
///
/// # Example
/// ```
/// use gramex::{
///     grammar::testing::test_grammar,
///     interpreter::lexer::{TokenType, tokenize},
/// };
///
/// let tokens = tokenize("-a b", &test_grammar()).unwrap();
/// let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenType::PreUnaryOperator,
///             TokenType::Identifier,
///             TokenType::MultaryOperator,
///             TokenType::Identifier]);
/// assert_eq!(tokens[2].text, "*");
/// ```
pub fn tokenize(input: &str, grammar: &Grammar) -> ParseResult<Vec<Token>> {
    let mut scanner = Scanner { source: input,
                                grammar,
                                tokens: Vec::new(),
                                open: Vec::new(),
                                position: 0 };
    scanner.scan()?;

    log::debug!("tokenized {} bytes into {} tokens", input.len(), scanner.tokens.len());
    Ok(scanner.tokens)
}

/// Left-to-right scanner state.
struct Scanner<'a> {
    source:   &'a str,
    grammar:  &'a Grammar,
    tokens:   Vec<Token>,
    open:     Vec<OpenGroup>,
    position: usize,
}

impl<'a> Scanner<'a> {
    fn scan(&mut self) -> ParseResult<()> {
        let source = self.source;
        while self.position < source.len() {
            let rest = &source[self.position..];

            if let Some((delimiter, len)) = self.match_delimiter(rest) {
                self.push_delimiter(delimiter, &rest[..len])?;
                self.position += len;
            } else if let Some(close) = self.match_stray_close(rest) {
                return Err(ParseError::UnmatchedClose { close:    close.to_string(),
                                                        position: self.position, });
            } else if let Some(symbol) = self.match_operator(rest) {
                self.push_operator(symbol, &rest[..symbol.len()])?;
                self.position += symbol.len();
            } else {
                self.position += self.push_lexeme(rest)?;
            }
        }

        match self.open.last() {
            Some(group) => {
                let pair = &self.grammar.parentheticals()[group.pair];
                Err(ParseError::UnterminatedParenthetical { open:     pair.open.clone(),
                                                            close:    pair.close.clone(),
                                                            position: group.position, })
            },
            None => Ok(()),
        }
    }

    /// Returns `true` if the next token must be an operand.
    fn expects_operand(&self) -> bool {
        self.tokens.last().is_none_or(|token| token.kind.expects_operand_after())
    }

    /// Finds the longest delimiter at the start of `rest`.
    ///
    /// Only the innermost open group can be closed. A pair whose opener and
    /// closer are the same string closes when an operator is expected and
    /// opens otherwise. On equal lengths a closer wins.
    fn match_delimiter(&self, rest: &str) -> Option<(Delimiter, usize)> {
        let innermost = self.open.last().map(|group| group.pair);
        let expects_operand = self.expects_operand();
        let mut best: Option<(Delimiter, usize)> = None;

        for (index, pair) in self.grammar.parentheticals().iter().enumerate() {
            if innermost == Some(index)
               && self.grammar.starts_with_symbol(rest, &pair.close)
               && !(expects_operand && pair.open == pair.close)
               && best.is_none_or(|(_, len)| pair.close.len() >= len)
            {
                best = Some((Delimiter::Close(index), pair.close.len()));
            }
            if self.grammar.starts_with_symbol(rest, &pair.open)
               && best.is_none_or(|(_, len)| pair.open.len() > len)
            {
                best = Some((Delimiter::Open(index), pair.open.len()));
            }
        }

        best
    }

    /// Finds a closing delimiter at the start of `rest` that cannot close the
    /// innermost group.
    ///
    /// Only called once [`match_delimiter`](Self::match_delimiter) has found
    /// nothing. An operator symbol at least as long as the closer wins, so
    /// `*/` is a stray closer but `*` alone stays an operator.
    fn match_stray_close(&self, rest: &str) -> Option<&'a str> {
        let grammar = self.grammar;
        let operator_len = self.match_operator(rest).map_or(0, str::len);
        grammar.parentheticals()
               .iter()
               .map(|pair| pair.close.as_str())
               .filter(|close| close.len() > operator_len && grammar.starts_with_symbol(rest, close))
               .max_by_key(|close| close.len())
    }

    /// Finds the longest operator symbol at the start of `rest`.
    ///
    /// Word-like symbols such as `and` only match on a word boundary, so
    /// `android` stays one identifier.
    fn match_operator(&self, rest: &str) -> Option<&'a str> {
        let grammar = self.grammar;
        grammar.operator_symbols()
               .iter()
               .find(|symbol| {
                   grammar.starts_with_symbol(rest, symbol) && !splits_word(rest, symbol)
               })
               .map(String::as_str)
    }

    fn push_delimiter(&mut self, delimiter: Delimiter, text: &str) -> ParseResult<()> {
        let grammar = self.grammar;
        let parentheticals = grammar.parentheticals();
        match delimiter {
            Delimiter::Open(index) => {
                if !self.expects_operand() {
                    self.push_implicit(text)?;
                }
                if self.open.len() >= grammar.max_depth() {
                    return Err(ParseError::NestingTooDeep { limit: grammar.max_depth() });
                }
                self.open.push(OpenGroup { pair:     index,
                                           position: self.position, });
                self.push(&parentheticals[index].open, TokenType::ParentheticalOpen);
            },
            Delimiter::Close(index) => {
                self.open.pop();
                self.push(&parentheticals[index].close, TokenType::ParentheticalClose);
            },
        }
        Ok(())
    }

    /// Classifies an operator by position and pushes it.
    ///
    /// Where an operand is expected only the prefix role is legal. Elsewhere
    /// the multary role wins over binary, binary over postfix; a prefix-only
    /// symbol after an operand starts a new operand joined by the implicit
    /// operator.
    fn push_operator(&mut self, symbol: &str, text: &str) -> ParseResult<()> {
        let grammar = self.grammar;

        let kind = if self.expects_operand() {
            if !grammar.is_pre_unary(symbol) {
                return Err(self.unrecognized(text));
            }
            TokenType::PreUnaryOperator
        } else if grammar.is_multary(symbol) {
            TokenType::MultaryOperator
        } else if grammar.is_nary(symbol) {
            TokenType::BinaryOperator
        } else if grammar.is_post_unary(symbol) {
            TokenType::PostUnaryOperator
        } else if grammar.is_pre_unary(symbol) {
            self.push_implicit(text)?;
            TokenType::PreUnaryOperator
        } else {
            return Err(self.unrecognized(text));
        };

        self.push(symbol, kind);
        Ok(())
    }

    /// Lexes one number, name or run of whitespace and returns its length.
    fn push_lexeme(&mut self, rest: &str) -> ParseResult<usize> {
        let mut lexer = Lexeme::lexer(rest);
        let Some(Ok(lexeme)) = lexer.next() else {
            let token = rest.chars().next().map(String::from).unwrap_or_default();
            return Err(self.unrecognized(&token));
        };
        let text = lexer.slice();

        match lexeme {
            Lexeme::Whitespace => {},
            Lexeme::Number => {
                if !self.expects_operand() {
                    self.push_implicit(text)?;
                }
                self.push(text, TokenType::Number);
            },
            Lexeme::Identifier => {
                let name = self.grammar.canonical(text);
                let kind = if self.grammar.is_function(&name)
                              && self.argument_list_follows(self.position + text.len())
                {
                    TokenType::Function
                } else {
                    TokenType::Identifier
                };

                if !self.expects_operand() {
                    self.push_implicit(text)?;
                }
                self.push(&name, kind);
            },
        }

        Ok(text.len())
    }

    /// Inserts the implicit operator before the operand `next`.
    fn push_implicit(&mut self, next: &str) -> ParseResult<()> {
        let grammar = self.grammar;
        let Some(symbol) = grammar.implicit_operator() else {
            return Err(self.unrecognized(next));
        };

        let kind = if grammar.is_multary(symbol) {
            TokenType::MultaryOperator
        } else {
            TokenType::BinaryOperator
        };
        log::trace!("implicit '{symbol}' before '{next}' at {}", self.position);
        self.push(symbol, kind);
        Ok(())
    }

    fn push(&mut self, text: &str, kind: TokenType) {
        log::trace!("token {kind:?} '{text}' at {}", self.position);
        self.tokens.push(Token::new(text, kind, self.position));
    }

    /// Returns `true` if the argument-list opener follows `offset`, allowing
    /// whitespace in between.
    fn argument_list_follows(&self, offset: usize) -> bool {
        self.source
            .get(offset..)
            .is_some_and(|rest| {
                self.grammar.starts_with_symbol(rest.trim_start(),
                                                self.grammar.argument_list_opener())
            })
    }

    fn unrecognized(&self, text: &str) -> ParseError {
        ParseError::UnrecognizedToken { token:    text.to_string(),
                                        position: self.position, }
    }
}

/// Returns `true` if a word-like `symbol` at the start of `rest` is only the
/// prefix of a longer name.
fn splits_word(rest: &str, symbol: &str) -> bool {
    let ends_in_word = symbol.chars().next_back().is_some_and(is_name_char);
    ends_in_word && rest[symbol.len()..].chars().next().is_some_and(is_name_char)
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
