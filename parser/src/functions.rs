//! FILENAME: parser/src/functions.rs
//! PURPOSE: The table of built-in functions and their fixed argument counts.
//! CONTEXT: The converter accepts any identifier as a function name. This
//! table is only consulted when building calls (the random generator) or
//! when validating a finished tree with `Expression::validate`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    Sin,
    Cos,
    Exp,
    Ln,
    Pow,
    Iff,
}

impl BuiltinFunction {
    pub const ALL: [BuiltinFunction; 6] = [
        BuiltinFunction::Sin,
        BuiltinFunction::Cos,
        BuiltinFunction::Exp,
        BuiltinFunction::Ln,
        BuiltinFunction::Pow,
        BuiltinFunction::Iff,
    ];

    /// Upper-case name used when rendering a call.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinFunction::Sin => "SIN",
            BuiltinFunction::Cos => "COS",
            BuiltinFunction::Exp => "EXP",
            BuiltinFunction::Ln => "LN",
            BuiltinFunction::Pow => "POW",
            BuiltinFunction::Iff => "IFF",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            BuiltinFunction::Sin
            | BuiltinFunction::Cos
            | BuiltinFunction::Exp
            | BuiltinFunction::Ln => 1,
            BuiltinFunction::Pow => 2,
            BuiltinFunction::Iff => 3,
        }
    }

    /// Case-insensitive lookup: `pow`, `Pow` and `POW` all match.
    pub fn from_name(name: &str) -> Option<BuiltinFunction> {
        Self::ALL
            .into_iter()
            .find(|function| function.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
