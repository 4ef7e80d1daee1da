//! The calculator state machine.
//!
//! A pure reducer: each input event mutates the state synchronously and the
//! caller reads the resulting display, pending operation, memory, and tape.
//! No operation errors. Ill-defined arithmetic (division by zero, factorial
//! of a negative, log of a non-positive) yields IEEE non-finite sentinels
//! that flow through later operations as ordinary numbers.
//!
//! Chained operator evaluation is strictly left-to-right with no operator
//! precedence: `2 + 3 × 4 =` is `20`, not `14`. This mirrors how a desk
//! calculator folds each new operator against the running value.

use tally_types::{AngleUnit, MemoryOp, OperatorKind, ScientificFn, Tape, format_number, parse_display};

/// Calculator state: display string, pending operation, memory register,
/// angle unit, and the history tape.
#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    pending: Option<(f64, OperatorKind)>,
    awaiting_new_operand: bool,
    memory: f64,
    angle_unit: AngleUnit,
    tape: Tape,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            awaiting_new_operand: false,
            memory: 0.0,
            angle_unit: AngleUnit::default(),
            tape: Tape::new(),
        }
    }
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The string currently shown. Never empty; `"0"` by default.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The stored left operand and operator awaiting a right operand, for
    /// the "previous value + operator" sub-display.
    #[must_use]
    pub fn pending(&self) -> Option<(f64, OperatorKind)> {
        self.pending
    }

    /// The memory register. Shown only when nonzero.
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    #[must_use]
    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    pub fn set_angle_unit(&mut self, unit: AngleUnit) {
        self.angle_unit = unit;
    }

    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Empty the history tape. The display and registers are untouched.
    pub fn clear_tape(&mut self) {
        self.tape.clear();
    }

    /// Enter a digit. Starts a fresh operand after an operator, function,
    /// or equals; otherwise appends, except a lone `"0"` is replaced.
    pub fn digit(&mut self, d: u8) {
        debug_assert!(d <= 9, "digit out of range: {d}");
        let ch = char::from(b'0' + d);
        if self.awaiting_new_operand {
            self.display.clear();
            self.display.push(ch);
            self.awaiting_new_operand = false;
        } else if self.display == "0" {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }

    /// Enter the decimal point. Idempotent: a display that already contains
    /// one is left alone.
    pub fn decimal(&mut self) {
        if self.awaiting_new_operand {
            self.display = "0.".to_string();
            self.awaiting_new_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Enter a binary operator.
    ///
    /// With no pending operation, stashes `(display value, op)`. With one,
    /// immediately folds it against the current display value and stashes
    /// `(result, op)` - left-to-right chaining. Pressing an operator twice
    /// folds using the unchanged display, matching the original widget.
    pub fn operator(&mut self, op: OperatorKind) {
        let input = parse_display(&self.display);
        match self.pending {
            None => self.pending = Some((input, op)),
            Some((left, prev)) => {
                let result = prev.apply(left, input);
                self.display = format_number(result);
                self.pending = Some((result, op));
            }
        }
        self.awaiting_new_operand = true;
    }

    /// Apply a unary scientific function to the display value.
    ///
    /// The constants `pi`/`e` load their value without consuming an operand
    /// and without a tape entry; every other function records
    /// `"<fn>(<value>)"` on the tape. Trig operands are converted from
    /// degrees first when the angle unit is [`AngleUnit::Degree`].
    pub fn scientific(&mut self, f: ScientificFn) {
        let value = parse_display(&self.display);
        let result = match f {
            ScientificFn::Sin => self.angle_unit.to_radians(value).sin(),
            ScientificFn::Cos => self.angle_unit.to_radians(value).cos(),
            ScientificFn::Tan => self.angle_unit.to_radians(value).tan(),
            ScientificFn::Log => value.log10(),
            ScientificFn::Ln => value.ln(),
            ScientificFn::Sqrt => value.sqrt(),
            ScientificFn::Square => value * value,
            ScientificFn::Reciprocal => 1.0 / value,
            ScientificFn::Pi => std::f64::consts::PI,
            ScientificFn::E => std::f64::consts::E,
            ScientificFn::Factorial => factorial(value),
            ScientificFn::Abs => value.abs(),
        };
        let formatted = format_number(result);
        if !f.is_constant() {
            self.tape
                .push(self.expression_text(f, value), formatted.clone());
        }
        self.display = formatted;
        self.awaiting_new_operand = true;
    }

    fn expression_text(&self, f: ScientificFn, value: f64) -> String {
        let value = format_number(value);
        if f.is_trig() {
            return format!("{}({value}{})", f.label(), self.angle_unit.suffix());
        }
        match f {
            ScientificFn::Log | ScientificFn::Ln => format!("{}({value})", f.label()),
            ScientificFn::Sqrt => format!("√({value})"),
            ScientificFn::Square => format!("{value}²"),
            ScientificFn::Reciprocal => format!("1/{value}"),
            ScientificFn::Factorial => format!("{value}!"),
            ScientificFn::Abs => format!("|{value}|"),
            // Constants never reach here; trig is handled above.
            _ => format!("{}({value})", f.label()),
        }
    }

    /// Apply a memory register operation.
    ///
    /// Only `MR` touches the display (and starts a new operand); the others
    /// mutate the register in place. The register survives [`Self::clear`].
    pub fn memory_op(&mut self, m: MemoryOp) {
        match m {
            MemoryOp::Clear => self.memory = 0.0,
            MemoryOp::Recall => {
                self.display = format_number(self.memory);
                self.awaiting_new_operand = true;
            }
            MemoryOp::Add => self.memory += parse_display(&self.display),
            MemoryOp::Subtract => self.memory -= parse_display(&self.display),
            MemoryOp::Store => self.memory = parse_display(&self.display),
        }
    }

    /// Fold the pending operation and record it on the tape. A no-op when
    /// nothing is pending.
    pub fn equals(&mut self) {
        let Some((left, op)) = self.pending else {
            return;
        };
        let right = parse_display(&self.display);
        let result = op.apply(left, right);
        let formatted = format_number(result);
        self.tape.push(
            format!("{} {} {}", format_number(left), op.symbol(), format_number(right)),
            formatted.clone(),
        );
        self.display = formatted;
        self.pending = None;
        self.awaiting_new_operand = true;
    }

    /// Reset the display and pending operation. Memory and the tape survive.
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending = None;
        self.awaiting_new_operand = false;
    }

    /// Drop the last display character, bottoming out at `"0"`.
    pub fn backspace(&mut self) {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = "0".to_string();
        }
    }
}

/// Integer factorial. NaN for negative, non-integer, or non-finite input;
/// `0! = 1! = 1`; computed iteratively for n >= 2.
fn factorial(n: f64) -> f64 {
    if n < 0.0 || n.fract() != 0.0 || !n.is_finite() {
        return f64::NAN;
    }
    let mut result = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n {
        result *= i;
        // Saturated: every further multiplication keeps +inf.
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    result
}
