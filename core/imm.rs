//! Immediate operand formatting.
//!
//! Values print as decimal unless their magnitude exceeds the architecture's
//! hex threshold, in which case they print as `0x`-prefixed lowercase hex. The
//! sign is printed separately in front of the magnitude, so `-5000` becomes
//! `-0x1388` and never a two's complement pattern.

use core::fmt;

use alloc::string::{String, ToString};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Imm {
    value: i64,
    threshold: u64,
}

impl Imm {
    pub const fn new(value: i64, threshold: u64) -> Self {
        Self { value, threshold }
    }

    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Absolute value, defined for `i64::MIN` too.
    pub const fn magnitude(&self) -> u64 {
        self.value.unsigned_abs()
    }

    pub const fn is_hex(&self) -> bool {
        self.magnitude() > self.threshold
    }
}

impl fmt::Display for Imm {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.value < 0 {
            fmt.write_str("-")?;
        }
        let magnitude = self.magnitude();
        if self.is_hex() {
            write!(fmt, "{magnitude:#x}")
        } else {
            write!(fmt, "{magnitude}")
        }
    }
}

pub fn format_imm(value: i64, threshold: u64) -> String {
    Imm::new(value, threshold).to_string()
}
