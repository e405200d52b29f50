use core::fmt;

use alloc::string::{String, ToString};

/// One named flag of a packed immediate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitField {
    pub mask: u64,
    pub token: &'static str,
}

impl BitField {
    pub const fn new(mask: u64, token: &'static str) -> Self {
        Self { mask, token }
    }

    pub const fn is_set(&self, value: u64) -> bool {
        value & self.mask != 0
    }
}

/// Prints the token of every set field in table order.
#[derive(Copy, Clone)]
pub struct BitFields {
    value: u64,
    fields: &'static [BitField],
}

impl BitFields {
    pub const fn new(value: u64, fields: &'static [BitField]) -> Self {
        Self { value, fields }
    }

    /// No field is set, the operand prints nothing.
    pub fn is_empty(&self) -> bool {
        !self.fields.iter().any(|i| i.is_set(self.value))
    }
}

impl fmt::Display for BitFields {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for field in self.fields.iter().filter(|i| i.is_set(self.value)) {
            fmt.write_str(field.token)?;
        }
        Ok(())
    }
}

pub fn format_bit_field(value: u64, fields: &'static [BitField]) -> String {
    BitFields::new(value, fields).to_string()
}
