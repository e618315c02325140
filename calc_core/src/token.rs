//! # Input Tokens
//!
//! What a key press contributes to the display: either literal text (a digit,
//! an operator, a parenthesis) or a named function, which is inserted with its
//! opening parenthesis so the following keys fill in the argument.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named functions available on the scientific keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    Sqrt,
    Log10,
}

impl Function {
    /// Every function, in keypad order
    pub const ALL: [Function; 10] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Log,
        Function::Ln,
        Function::Sqrt,
        Function::Log10,
    ];

    /// Identifier as it appears in an expression
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
            Function::Log10 => "log10",
        }
    }

    /// Look up a function by its identifier
    pub fn from_name(name: &str) -> Option<Self> {
        Function::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Text inserted into the display for this function
    pub fn insertion(self) -> String {
        format!("{}(", self.name())
    }

    /// Inverse counterpart for the trig functions, used by the shift key
    pub fn inverse(self) -> Option<Self> {
        match self {
            Function::Sin => Some(Function::Asin),
            Function::Cos => Some(Function::Acos),
            Function::Tan => Some(Function::Atan),
            Function::Asin => Some(Function::Sin),
            Function::Acos => Some(Function::Cos),
            Function::Atan => Some(Function::Tan),
            _ => None,
        }
    }

    /// sin, cos and tan
    pub fn is_direct_trig(self) -> bool {
        matches!(self, Function::Sin | Function::Cos | Function::Tan)
    }

    /// asin, acos and atan
    pub fn is_inverse_trig(self) -> bool {
        matches!(self, Function::Asin | Function::Acos | Function::Atan)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit of input for [`crate::calculator::Calculator::insert`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Token {
    /// Literal text: digits, decimal point, operators, parentheses, constants
    Literal(String),
    /// A named function, inserted as `name(`
    Function(Function),
}

impl Token {
    /// Literal token from anything string-like
    pub fn literal(text: impl Into<String>) -> Self {
        Token::Literal(text.into())
    }

    /// Text this token contributes to the display
    pub fn text(&self) -> String {
        match self {
            Token::Literal(text) => text.clone(),
            Token::Function(function) => function.insertion(),
        }
    }
}

impl From<char> for Token {
    fn from(c: char) -> Self {
        Token::Literal(c.to_string())
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::Literal(text.to_string())
    }
}

impl From<Function> for Token {
    fn from(function: Function) -> Self {
        Token::Function(function)
    }
}
