use std::fmt;

/// A type of the core language.
///
/// Types are plain immutable values. Two types are the same type exactly
/// when they have the same shape, see [`types_equal`].
#[derive(Debug, Clone, Eq)]
pub enum Type {
    Int,
    /// The type of a one-argument function, `parameter -> result`.
    Arrow(Box<Type>, Box<Type>),
}

impl Type {
    pub fn arrow(parameter: Type, result: Type) -> Self {
        Type::Arrow(Box::new(parameter), Box::new(result))
    }

    /// Split an arrow into its parameter and result, or `None` for `Int`.
    pub fn as_arrow(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Arrow(parameter, result) => Some((parameter, result)),
            Type::Int => None,
        }
    }

    pub fn pretty(&self) -> String {
        match self {
            Type::Int => "Int".to_string(),
            Type::Arrow(parameter, result) => {
                let parameter_str = if matches!(**parameter, Type::Arrow(_, _)) {
                    format!("({})", parameter.pretty())
                } else {
                    parameter.pretty()
                };
                format!("{} -> {}", parameter_str, result.pretty())
            }
        }
    }
}

/// Structural equality over types.
///
/// `Int` equals `Int`; two arrows are equal when their parameters and their
/// results are pairwise equal. Separately built values of the same shape
/// always compare equal.
pub fn types_equal(a: &Type, b: &Type) -> bool {
    match (a, b) {
        (Type::Int, Type::Int) => true,
        (Type::Arrow(p1, r1), Type::Arrow(p2, r2)) => types_equal(p1, p2) && types_equal(r1, r2),
        (Type::Int, Type::Arrow(_, _)) | (Type::Arrow(_, _), Type::Int) => false,
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        types_equal(self, other)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
