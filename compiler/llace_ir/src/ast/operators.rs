//! Binary and unary operators.

/// Infix operators.
///
/// Each operator node holds two or more operands; repeated applications of
/// the same operator collapse into one node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Declarations and types
    Qualify,
    IntersectAssignValue,
    IntersectDefaultValue,
    IntersectLowPrecedence,
    Union,
    Intersect,
    Document,

    // Logical
    LogicOr,
    LogicAnd,

    // Comparison
    Compare,
    CompareReversed,
    Equality,
    GreaterThan,
    GreaterThanOrEquals,
    LessThan,
    LessThanOrEquals,

    // Membership and matching
    In,
    Is,
    Match,
    NotMatch,

    // Arithmetic
    Range,
    Add,
    Subtract,
    Multiply,
    Divide,

    // Access
    FunctionArrow,
    FieldReference,
}

impl BinaryOp {
    /// Text written between adjacent operands, spacing included.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Qualify => ": ",
            Self::IntersectAssignValue => " = ",
            Self::IntersectDefaultValue => " ?: ",
            Self::IntersectLowPrecedence => " && ",
            Self::Union => " | ",
            Self::Intersect => " & ",
            Self::Document => " ",
            Self::LogicOr => " or ",
            Self::LogicAnd => " and ",
            Self::Compare => " <=> ",
            Self::CompareReversed => " >=< ",
            Self::Equality => " == ",
            Self::GreaterThan => " > ",
            Self::GreaterThanOrEquals => " >= ",
            Self::LessThan => " < ",
            Self::LessThanOrEquals => " <= ",
            Self::In => " in ",
            Self::Is => " is ",
            Self::Match => " =~ ",
            Self::NotMatch => " !~ ",
            Self::Range => "..",
            Self::Add => " + ",
            Self::Subtract => " - ",
            Self::Multiply => " * ",
            Self::Divide => " / ",
            Self::FunctionArrow => " -> ",
            Self::FieldReference => ".",
        }
    }

    /// Short name used in S-expression dumps.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Qualify => ":",
            Self::IntersectAssignValue => "=",
            Self::IntersectDefaultValue => "?:",
            Self::IntersectLowPrecedence => "&&",
            Self::Union => "|",
            Self::Intersect => "&",
            Self::Document => "doc",
            Self::LogicOr => "or",
            Self::LogicAnd => "and",
            Self::Compare => "<=>",
            Self::CompareReversed => ">=<",
            Self::Equality => "==",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEquals => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEquals => "<=",
            Self::In => "in",
            Self::Is => "is",
            Self::Match => "=~",
            Self::NotMatch => "!~",
            Self::Range => "..",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::FunctionArrow => "->",
            Self::FieldReference => ".",
        }
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Negate,
    Not,
}

impl UnaryOp {
    /// Text written before the operand. Worded operators carry their space.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "not ",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "not",
        }
    }
}
