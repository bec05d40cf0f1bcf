#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operand {
    Literal(u16),
    Wire(String),
}

impl Operand {
    pub fn wire(name: impl Into<String>) -> Self {
        Self::Wire(name.into())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinOp {
    And,
    Or,
    LShift,
    RShift,
}

impl BinOp {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "AND" => Some(BinOp::And),
            "OR" => Some(BinOp::Or),
            "LSHIFT" => Some(BinOp::LShift),
            "RSHIFT" => Some(BinOp::RShift),
            _ => None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
    Literal(u16),
    Passthrough(Operand),
    Not(Operand),
    Binary(BinOp, Operand, Operand),
}

/// One parsed `<expr> -> <dest>` line.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Definition {
    pub dest: String,
    pub expr: Expr,
}

pub fn complement(value: u16) -> u16 {
    !value
}

/// Apply a binary gate. Shifts are computed wide and truncated to 16 bits;
/// a shift by 16 or more clears the value instead of wrapping the count.
pub fn calc(op: BinOp, left: u16, right: u16) -> u16 {
    match op {
        BinOp::And => left & right,
        BinOp::Or => left | right,
        BinOp::LShift => u32::from(left)
            .checked_shl(u32::from(right))
            .map_or(0, |v| (v & 0xFFFF) as u16),
        BinOp::RShift => left.checked_shr(u32::from(right)).unwrap_or(0),
    }
}
