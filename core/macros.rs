/// Define opcode constants and the template table indexed by them.
///
/// ```ignore
/// define_opcodes! {
///     pub const TEMPLATES;
///     ADD = "add" [Slot::Operand, Slot::Operand, Slot::Operand],
///     NOP = "nop" [],
/// }
/// ```
#[macro_export]
macro_rules! define_opcodes {
    (
        $vis:vis const $table:ident;
        $($name:ident = $mnemonic:literal [$($slot:expr),* $(,)?]),* $(,)?
    ) => (
        #[repr(u32)]
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        enum Opcodes {
            _INVALID,
            $($name),*
        }

        $(pub const $name: $crate::insn::Opcode = $crate::insn::Opcode(Opcodes::$name as u32);)*

        $vis const $table: &[$crate::tables::Template] = &[
            $crate::tables::Template::INVALID,
            $($crate::tables::Template {
                mnemonic: $mnemonic,
                slots: &[$($slot),*],
            }),*
        ];
    );
}
pub use define_opcodes;

/// Define an alias rule list, highest priority first.
///
/// ```ignore
/// define_aliases! {
///     pub const ALIASES;
///     ADDI [Cond::Imm(2, 0)] => "mv" [Slot::Operand, Slot::Operand] (0, 1),
/// }
/// ```
#[macro_export]
macro_rules! define_aliases {
    (
        $vis:vis const $table:ident;
        $(
            $opcode:ident [$($cond:expr),* $(,)?]
                => $mnemonic:literal [$($slot:expr),* $(,)?] ($($index:expr),* $(,)?)
        ),* $(,)?
    ) => (
        $vis const $table: &[$crate::alias::AliasRule] = &[
            $($crate::alias::AliasRule {
                opcode: $opcode,
                conds: &[$($cond),*],
                template: $crate::tables::Template {
                    mnemonic: $mnemonic,
                    slots: &[$($slot),*],
                },
                remap: &[$($index),*],
            }),*
        ];
    );
}
pub use define_aliases;
