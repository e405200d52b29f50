use asmprint_core::{alias::Cond, define_aliases};

use crate::{
    consts::{csr::*, RM_DYN},
    csr,
    opcode::*,
    RA, ZERO,
};

const DYN: i64 = RM_DYN as i64;

define_aliases! {
    pub(crate) const ALIASES;

    ADDI [Cond::Reg(0, ZERO), Cond::Reg(1, ZERO), Cond::Imm(2, 0)] => "nop" [] (),
    ADDI [Cond::Reg(1, ZERO)] => "li" [OP, OP] (0, 2),
    ADDI [Cond::Imm(2, 0)] => "mv" [OP, OP] (0, 1),
    ADDIW [Cond::Imm(2, 0)] => "sext.w" [OP, OP] (0, 1),
    XORI [Cond::Imm(2, -1)] => "not" [OP, OP] (0, 1),
    SUB [Cond::Reg(1, ZERO)] => "neg" [OP, OP] (0, 2),
    SUBW [Cond::Reg(1, ZERO)] => "negw" [OP, OP] (0, 2),
    SLTIU [Cond::Imm(2, 1)] => "seqz" [OP, OP] (0, 1),
    SLTU [Cond::Reg(1, ZERO)] => "snez" [OP, OP] (0, 2),
    SLT [Cond::Reg(2, ZERO)] => "sltz" [OP, OP] (0, 1),
    SLT [Cond::Reg(1, ZERO)] => "sgtz" [OP, OP] (0, 2),

    BEQ [Cond::Reg(1, ZERO)] => "beqz" [OP, OP] (0, 2),
    BNE [Cond::Reg(1, ZERO)] => "bnez" [OP, OP] (0, 2),
    BGE [Cond::Reg(0, ZERO)] => "blez" [OP, OP] (1, 2),
    BGE [Cond::Reg(1, ZERO)] => "bgez" [OP, OP] (0, 2),
    BLT [Cond::Reg(1, ZERO)] => "bltz" [OP, OP] (0, 2),
    BLT [Cond::Reg(0, ZERO)] => "bgtz" [OP, OP] (1, 2),
    JAL [Cond::Reg(0, ZERO)] => "j" [OP] (1),
    JAL [Cond::Reg(0, RA)] => "jal" [OP] (1),
    JALR [Cond::Reg(0, ZERO), Cond::Reg(1, RA), Cond::Imm(2, 0)] => "ret" [] (),
    JALR [Cond::Reg(0, ZERO), Cond::Imm(2, 0)] => "jr" [OP] (1),
    JALR [Cond::Reg(0, RA), Cond::Imm(2, 0)] => "jalr" [OP] (1),

    FENCE [Cond::Imm(0, 0xf), Cond::Imm(1, 0xf)] => "fence" [] (),

    CSRRS [Cond::Reg(1, csr(INSTRET)), Cond::Reg(2, ZERO)] => "rdinstret" [OP] (0),
    CSRRS [Cond::Reg(1, csr(CYCLE)), Cond::Reg(2, ZERO)] => "rdcycle" [OP] (0),
    CSRRS [Cond::Reg(1, csr(TIME)), Cond::Reg(2, ZERO)] => "rdtime" [OP] (0),
    CSRRS [Cond::Reg(1, csr(FCSR)), Cond::Reg(2, ZERO)] => "frcsr" [OP] (0),
    CSRRS [Cond::Reg(1, csr(FRM)), Cond::Reg(2, ZERO)] => "frrm" [OP] (0),
    CSRRS [Cond::Reg(1, csr(FFLAGS)), Cond::Reg(2, ZERO)] => "frflags" [OP] (0),
    CSRRS [Cond::Reg(2, ZERO)] => "csrr" [OP, OP] (0, 1),
    CSRRW [Cond::Reg(0, ZERO), Cond::Reg(1, csr(FCSR))] => "fscsr" [OP] (2),
    CSRRW [Cond::Reg(0, ZERO), Cond::Reg(1, csr(FRM))] => "fsrm" [OP] (2),
    CSRRW [Cond::Reg(0, ZERO), Cond::Reg(1, csr(FFLAGS))] => "fsflags" [OP] (2),
    CSRRW [Cond::Reg(1, csr(FCSR))] => "fscsr" [OP, OP] (0, 2),
    CSRRW [Cond::Reg(1, csr(FRM))] => "fsrm" [OP, OP] (0, 2),
    CSRRW [Cond::Reg(1, csr(FFLAGS))] => "fsflags" [OP, OP] (0, 2),
    CSRRW [Cond::Reg(0, ZERO)] => "csrw" [OP, OP] (1, 2),
    CSRRS [Cond::Reg(0, ZERO)] => "csrs" [OP, OP] (1, 2),
    CSRRC [Cond::Reg(0, ZERO)] => "csrc" [OP, OP] (1, 2),
    CSRRWI [Cond::Reg(0, ZERO)] => "csrwi" [OP, OP] (1, 2),
    CSRRSI [Cond::Reg(0, ZERO)] => "csrsi" [OP, OP] (1, 2),
    CSRRCI [Cond::Reg(0, ZERO)] => "csrci" [OP, OP] (1, 2),

    FSGNJ_S [Cond::Same(1, 2)] => "fmv.s" [OP, OP] (0, 1),
    FSGNJX_S [Cond::Same(1, 2)] => "fabs.s" [OP, OP] (0, 1),
    FSGNJN_S [Cond::Same(1, 2)] => "fneg.s" [OP, OP] (0, 1),
    FSGNJ_D [Cond::Same(1, 2)] => "fmv.d" [OP, OP] (0, 1),
    FSGNJX_D [Cond::Same(1, 2)] => "fabs.d" [OP, OP] (0, 1),
    FSGNJN_D [Cond::Same(1, 2)] => "fneg.d" [OP, OP] (0, 1),

    // dynamic rounding mode is not printed
    FMADD_S [Cond::Imm(4, DYN)] => "fmadd.s" [OP, OP, OP, OP] (0, 1, 2, 3),
    FADD_S [Cond::Imm(3, DYN)] => "fadd.s" [OP, OP, OP] (0, 1, 2),
    FSUB_S [Cond::Imm(3, DYN)] => "fsub.s" [OP, OP, OP] (0, 1, 2),
    FMUL_S [Cond::Imm(3, DYN)] => "fmul.s" [OP, OP, OP] (0, 1, 2),
    FDIV_S [Cond::Imm(3, DYN)] => "fdiv.s" [OP, OP, OP] (0, 1, 2),
    FSQRT_S [Cond::Imm(2, DYN)] => "fsqrt.s" [OP, OP] (0, 1),
    FCVT_W_S [Cond::Imm(2, DYN)] => "fcvt.w.s" [OP, OP] (0, 1),
    FCVT_S_W [Cond::Imm(2, DYN)] => "fcvt.s.w" [OP, OP] (0, 1),
    FMADD_D [Cond::Imm(4, DYN)] => "fmadd.d" [OP, OP, OP, OP] (0, 1, 2, 3),
    FADD_D [Cond::Imm(3, DYN)] => "fadd.d" [OP, OP, OP] (0, 1, 2),
    FSUB_D [Cond::Imm(3, DYN)] => "fsub.d" [OP, OP, OP] (0, 1, 2),
    FMUL_D [Cond::Imm(3, DYN)] => "fmul.d" [OP, OP, OP] (0, 1, 2),
    FDIV_D [Cond::Imm(3, DYN)] => "fdiv.d" [OP, OP, OP] (0, 1, 2),
    FSQRT_D [Cond::Imm(2, DYN)] => "fsqrt.d" [OP, OP] (0, 1),
    FCVT_S_D [Cond::Imm(2, DYN)] => "fcvt.s.d" [OP, OP] (0, 1),
}
