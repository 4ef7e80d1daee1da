//! Operator, function, and mode enums for the calculator keypad.

use std::fmt;

/// Binary operator awaiting (or applied to) a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
}

impl OperatorKind {
    /// Apply the operator to a left and right operand.
    ///
    /// Division by zero and similar ill-defined cases yield IEEE non-finite
    /// sentinels, never an error: the engine treats them as ordinary numbers.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
            Self::Power => left.powf(right),
            Self::Modulo => left % right,
        }
    }

    /// Display symbol used in the pending sub-display and the history tape.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
            Self::Modulo => "mod",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary scientific function applied to the current display value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Square,
    Reciprocal,
    Pi,
    E,
    Factorial,
    Abs,
}

impl ScientificFn {
    /// All functions in keypad order (the order the palette presents them).
    #[must_use]
    pub const fn all() -> &'static [ScientificFn] {
        &[
            Self::Sin,
            Self::Cos,
            Self::Tan,
            Self::Log,
            Self::Ln,
            Self::Sqrt,
            Self::Square,
            Self::Reciprocal,
            Self::Pi,
            Self::E,
            Self::Factorial,
            Self::Abs,
        ]
    }

    /// Short label shown on the keypad and in the function palette.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "√",
            Self::Square => "x²",
            Self::Reciprocal => "1/x",
            Self::Pi => "π",
            Self::E => "e",
            Self::Factorial => "n!",
            Self::Abs => "|x|",
        }
    }

    /// True for the constants, which consume no operand and record no
    /// history entry.
    #[must_use]
    pub const fn is_constant(self) -> bool {
        matches!(self, Self::Pi | Self::E)
    }

    /// True for the angle-aware trig functions.
    #[must_use]
    pub const fn is_trig(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }
}

/// Memory register operation (MC / MR / M+ / M- / MS).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
    Store,
}

impl MemoryOp {
    /// All operations in keypad order.
    #[must_use]
    pub const fn all() -> &'static [MemoryOp] {
        &[
            Self::Clear,
            Self::Recall,
            Self::Add,
            Self::Subtract,
            Self::Store,
        ]
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "MC",
            Self::Recall => "MR",
            Self::Add => "M+",
            Self::Subtract => "M-",
            Self::Store => "MS",
        }
    }
}

/// Angle unit for trig functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Radian,
    Degree,
}

impl AngleUnit {
    /// Convert a value in this unit to radians.
    #[must_use]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Radian => value,
            Self::Degree => value.to_radians(),
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Radian => Self::Degree,
            Self::Degree => Self::Radian,
        }
    }

    /// Suffix appended to trig operands in history entries.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Radian => " rad",
            Self::Degree => "°",
        }
    }

    /// Badge shown in the header while scientific mode is on.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Radian => "RAD",
            Self::Degree => "DEG",
        }
    }
}
