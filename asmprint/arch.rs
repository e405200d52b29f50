#[cfg(feature = "riscv")]
pub mod riscv {
    pub use asmprint_riscv::*;
}
