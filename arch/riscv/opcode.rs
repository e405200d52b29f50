//! Opcodes and their canonical templates.
//!
//! Operands are listed in print order, e.g. loads are `rd, offset, rs1`.

use asmprint_core::{define_opcodes, tables::Slot};

use crate::consts::{hook, FENCE_FIELDS};

pub(crate) const OP: Slot = Slot::Operand;
pub(crate) const LP: Slot = Slot::Text("(");
pub(crate) const RP: Slot = Slot::Text(")");
const SET: Slot = Slot::BitField(FENCE_FIELDS);
pub(crate) const RM: Slot = Slot::Custom(hook::RM);

define_opcodes! {
    pub(crate) const TEMPLATES;

    // RV32I
    LUI = "lui" [OP, OP],
    AUIPC = "auipc" [OP, OP],
    JAL = "jal" [OP, OP],
    JALR = "jalr" [OP, OP, OP],
    BEQ = "beq" [OP, OP, OP],
    BNE = "bne" [OP, OP, OP],
    BLT = "blt" [OP, OP, OP],
    BGE = "bge" [OP, OP, OP],
    BLTU = "bltu" [OP, OP, OP],
    BGEU = "bgeu" [OP, OP, OP],
    LB = "lb" [OP, OP, LP, OP, RP],
    LH = "lh" [OP, OP, LP, OP, RP],
    LW = "lw" [OP, OP, LP, OP, RP],
    LBU = "lbu" [OP, OP, LP, OP, RP],
    LHU = "lhu" [OP, OP, LP, OP, RP],
    SB = "sb" [OP, OP, LP, OP, RP],
    SH = "sh" [OP, OP, LP, OP, RP],
    SW = "sw" [OP, OP, LP, OP, RP],
    ADDI = "addi" [OP, OP, OP],
    SLTI = "slti" [OP, OP, OP],
    SLTIU = "sltiu" [OP, OP, OP],
    XORI = "xori" [OP, OP, OP],
    ORI = "ori" [OP, OP, OP],
    ANDI = "andi" [OP, OP, OP],
    SLLI = "slli" [OP, OP, OP],
    SRLI = "srli" [OP, OP, OP],
    SRAI = "srai" [OP, OP, OP],
    ADD = "add" [OP, OP, OP],
    SUB = "sub" [OP, OP, OP],
    SLL = "sll" [OP, OP, OP],
    SLT = "slt" [OP, OP, OP],
    SLTU = "sltu" [OP, OP, OP],
    XOR = "xor" [OP, OP, OP],
    SRL = "srl" [OP, OP, OP],
    SRA = "sra" [OP, OP, OP],
    OR = "or" [OP, OP, OP],
    AND = "and" [OP, OP, OP],
    FENCE = "fence" [SET, SET],
    FENCE_I = "fence.i" [],
    ECALL = "ecall" [],
    EBREAK = "ebreak" [],

    // RV64I
    LWU = "lwu" [OP, OP, LP, OP, RP],
    LD = "ld" [OP, OP, LP, OP, RP],
    SD = "sd" [OP, OP, LP, OP, RP],
    ADDIW = "addiw" [OP, OP, OP],
    SLLIW = "slliw" [OP, OP, OP],
    SRLIW = "srliw" [OP, OP, OP],
    SRAIW = "sraiw" [OP, OP, OP],
    ADDW = "addw" [OP, OP, OP],
    SUBW = "subw" [OP, OP, OP],
    SLLW = "sllw" [OP, OP, OP],
    SRLW = "srlw" [OP, OP, OP],
    SRAW = "sraw" [OP, OP, OP],

    // M
    MUL = "mul" [OP, OP, OP],
    MULH = "mulh" [OP, OP, OP],
    MULHSU = "mulhsu" [OP, OP, OP],
    MULHU = "mulhu" [OP, OP, OP],
    DIV = "div" [OP, OP, OP],
    DIVU = "divu" [OP, OP, OP],
    REM = "rem" [OP, OP, OP],
    REMU = "remu" [OP, OP, OP],
    MULW = "mulw" [OP, OP, OP],
    DIVW = "divw" [OP, OP, OP],
    DIVUW = "divuw" [OP, OP, OP],
    REMW = "remw" [OP, OP, OP],
    REMUW = "remuw" [OP, OP, OP],

    // A
    LR_W = "lr.w" [OP, LP, OP, RP],
    SC_W = "sc.w" [OP, OP, LP, OP, RP],
    AMOSWAP_W = "amoswap.w" [OP, OP, LP, OP, RP],
    AMOADD_W = "amoadd.w" [OP, OP, LP, OP, RP],
    AMOXOR_W = "amoxor.w" [OP, OP, LP, OP, RP],
    AMOAND_W = "amoand.w" [OP, OP, LP, OP, RP],
    AMOOR_W = "amoor.w" [OP, OP, LP, OP, RP],
    LR_D = "lr.d" [OP, LP, OP, RP],
    SC_D = "sc.d" [OP, OP, LP, OP, RP],
    AMOSWAP_D = "amoswap.d" [OP, OP, LP, OP, RP],
    AMOADD_D = "amoadd.d" [OP, OP, LP, OP, RP],

    // F
    FLW = "flw" [OP, OP, LP, OP, RP],
    FSW = "fsw" [OP, OP, LP, OP, RP],
    FMADD_S = "fmadd.s" [OP, OP, OP, OP, RM],
    FADD_S = "fadd.s" [OP, OP, OP, RM],
    FSUB_S = "fsub.s" [OP, OP, OP, RM],
    FMUL_S = "fmul.s" [OP, OP, OP, RM],
    FDIV_S = "fdiv.s" [OP, OP, OP, RM],
    FSQRT_S = "fsqrt.s" [OP, OP, RM],
    FSGNJ_S = "fsgnj.s" [OP, OP, OP],
    FSGNJN_S = "fsgnjn.s" [OP, OP, OP],
    FSGNJX_S = "fsgnjx.s" [OP, OP, OP],
    FMIN_S = "fmin.s" [OP, OP, OP],
    FMAX_S = "fmax.s" [OP, OP, OP],
    FCVT_W_S = "fcvt.w.s" [OP, OP, RM],
    FCVT_S_W = "fcvt.s.w" [OP, OP, RM],
    FMV_X_W = "fmv.x.w" [OP, OP],
    FMV_W_X = "fmv.w.x" [OP, OP],
    FEQ_S = "feq.s" [OP, OP, OP],
    FLT_S = "flt.s" [OP, OP, OP],
    FLE_S = "fle.s" [OP, OP, OP],
    FCLASS_S = "fclass.s" [OP, OP],

    // D
    FLD = "fld" [OP, OP, LP, OP, RP],
    FSD = "fsd" [OP, OP, LP, OP, RP],
    FMADD_D = "fmadd.d" [OP, OP, OP, OP, RM],
    FADD_D = "fadd.d" [OP, OP, OP, RM],
    FSUB_D = "fsub.d" [OP, OP, OP, RM],
    FMUL_D = "fmul.d" [OP, OP, OP, RM],
    FDIV_D = "fdiv.d" [OP, OP, OP, RM],
    FSQRT_D = "fsqrt.d" [OP, OP, RM],
    FSGNJ_D = "fsgnj.d" [OP, OP, OP],
    FSGNJN_D = "fsgnjn.d" [OP, OP, OP],
    FSGNJX_D = "fsgnjx.d" [OP, OP, OP],
    FCVT_S_D = "fcvt.s.d" [OP, OP, RM],
    FCVT_D_S = "fcvt.d.s" [OP, OP],
    FMV_X_D = "fmv.x.d" [OP, OP],
    FMV_D_X = "fmv.d.x" [OP, OP],
    FEQ_D = "feq.d" [OP, OP, OP],
    FLT_D = "flt.d" [OP, OP, OP],
    FLE_D = "fle.d" [OP, OP, OP],

    // Zicsr
    CSRRW = "csrrw" [OP, OP, OP],
    CSRRS = "csrrs" [OP, OP, OP],
    CSRRC = "csrrc" [OP, OP, OP],
    CSRRWI = "csrrwi" [OP, OP, OP],
    CSRRSI = "csrrsi" [OP, OP, OP],
    CSRRCI = "csrrci" [OP, OP, OP],
}
