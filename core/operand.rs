use core::fmt;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegClass(u16);

impl RegClass {
    pub const INT: Self = Self::new(0);
    pub const FLOAT: Self = Self::new(1);
    pub const VECTOR: Self = Self::new(2);

    pub const fn is_arch_specific(&self) -> bool {
        self.0 & (1 << 15) != 0
    }

    pub const fn new(class: u16) -> Self {
        Self(class)
    }

    pub const fn arch(class: u16) -> Self {
        Self(class | (1 << 15))
    }

    pub const fn raw(&self) -> u16 {
        self.0
    }

    const fn to_arch_index(self) -> u16 {
        self.0 & ((1 << 15) - 1)
    }
}

impl fmt::Display for RegClass {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::INT => fmt.write_str("int"),
            Self::FLOAT => fmt.write_str("float"),
            Self::VECTOR => fmt.write_str("vector"),
            _ if self.is_arch_specific() => write!(fmt, "arch({})", self.to_arch_index()),
            _ => write!(fmt, "invalid({})", self.0),
        }
    }
}

impl fmt::Debug for RegClass {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Reg {
    class: RegClass,
    index: u16,
}

impl Reg {
    pub const fn new(class: RegClass, index: u16) -> Self {
        Self { class, index }
    }

    pub const fn class(&self) -> RegClass {
        self.class
    }

    pub const fn index(&self) -> u16 {
        self.index
    }
}

impl fmt::Debug for Reg {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "<{}:{}>", self.class, self.index)
    }
}

/// Decoded instruction operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// reg
    Reg(Reg),
    /// sign-extended immediate
    Imm(i64),
    /// expression or symbol, has no textual form here
    Unprinted,
}

impl Operand {
    pub const fn is_printable(&self) -> bool {
        !matches!(self, Self::Unprinted)
    }
}

impl From<Reg> for Operand {
    fn from(value: Reg) -> Self {
        Operand::Reg(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Imm(value)
    }
}
