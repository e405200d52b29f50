use asmprint_core::bitfield::BitField;

/// Custom register classes
pub mod reg_class {
    use asmprint_core::operand::RegClass;

    pub const CSR: RegClass = RegClass::arch(0);
}

/// Control and status register numbers
pub mod csr {
    pub const FFLAGS: u16 = 0x001;
    pub const FRM: u16 = 0x002;
    pub const FCSR: u16 = 0x003;
    pub const CYCLE: u16 = 0xc00;
    pub const TIME: u16 = 0xc01;
    pub const INSTRET: u16 = 0xc02;
    pub const CYCLEH: u16 = 0xc80;
    pub const TIMEH: u16 = 0xc81;
    pub const INSTRETH: u16 = 0xc82;
}

/// Custom print hooks
pub mod hook {
    /// Floating-point rounding mode.
    pub const RM: u16 = 0;
}

// rm values for fops
pub const RM_RNE: u8 = 0;
pub const RM_RTZ: u8 = 1;
pub const RM_RDN: u8 = 2;
pub const RM_RUP: u8 = 3;
pub const RM_RMM: u8 = 4;
pub const RM_DYN: u8 = 7;

bitflags::bitflags! {
    /// Predecessor or successor set of a `fence`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Fence: u8 {
        const I = 1 << 3;
        const O = 1 << 2;
        const R = 1 << 1;
        const W = 1 << 0;
    }
}

/// Printed in this order, e.g. `iorw`.
pub const FENCE_FIELDS: &[BitField] = &[
    BitField::new(Fence::I.bits() as u64, "i"),
    BitField::new(Fence::O.bits() as u64, "o"),
    BitField::new(Fence::R.bits() as u64, "r"),
    BitField::new(Fence::W.bits() as u64, "w"),
];
