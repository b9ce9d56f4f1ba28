//! Deterministic placement derived from caption text.
//!
//! Every derivation is a left fold over the caption's Unicode scalar values into an `i32`
//! accumulator seeded with zero, using wrapping arithmetic. The three derivations differ only in
//! the combining operator:
//!
//! - slot: bitwise OR, reduced modulo the slot count
//! - horizontal jitter: multiplication, reduced modulo the jitter modulus and re-centred on zero
//! - vertical jitter: addition, same reduction
//!
//! Because the seed is zero, the multiplicative fold is absorbed to zero for every input and the
//! horizontal jitter is always the lower bound. This is kept so output stays pixel-compatible
//! with previously generated strips.

/// Vertical slot a caption is anchored to inside its panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placement {
    /// Unresolved; must be derived before a baseline is computed.
    #[default]
    None,
    /// First band from the top.
    Top,
    /// Second band.
    TopMiddle,
    /// Centre band.
    Middle,
    /// Fourth band.
    BottomMiddle,
    /// Last band.
    Bottom,
}

impl Placement {
    /// The concrete slots in top-to-bottom order.
    pub const SLOTS: [Placement; 5] = [
        Placement::Top,
        Placement::TopMiddle,
        Placement::Middle,
        Placement::BottomMiddle,
        Placement::Bottom,
    ];

    /// 1-based band index, `0` for [`Placement::None`].
    pub fn index(self) -> u32 {
        match self {
            Placement::None => 0,
            Placement::Top => 1,
            Placement::TopMiddle => 2,
            Placement::Middle => 3,
            Placement::BottomMiddle => 4,
            Placement::Bottom => 5,
        }
    }

    /// Inverse of [`Placement::index`] for `1..=5`.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1..=5 => Some(Self::SLOTS[(index - 1) as usize]),
            _ => None,
        }
    }

    /// Parse a config keyword; anything but an exact keyword means "derive from text".
    pub fn from_keyword(s: &str) -> Self {
        match s {
            "top" => Placement::Top,
            "top-middle" => Placement::TopMiddle,
            "middle" => Placement::Middle,
            "bottom-middle" => Placement::BottomMiddle,
            "bottom" => Placement::Bottom,
            _ => Placement::None,
        }
    }

    /// Config keyword for this slot (`""` for [`Placement::None`]).
    pub fn keyword(self) -> &'static str {
        match self {
            Placement::None => "",
            Placement::Top => "top",
            Placement::TopMiddle => "top-middle",
            Placement::Middle => "middle",
            Placement::BottomMiddle => "bottom-middle",
            Placement::Bottom => "bottom",
        }
    }

    /// True for every value except [`Placement::None`].
    pub fn is_resolved(self) -> bool {
        self != Placement::None
    }
}

/// Combining rule for [`fold_chars`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldOp {
    /// Bitwise OR.
    Or,
    /// Wrapping multiplication.
    Mul,
    /// Wrapping addition.
    Add,
}

impl FoldOp {
    /// Combine accumulator and next value.
    pub fn apply(self, acc: i32, ch: i32) -> i32 {
        match self {
            FoldOp::Or => acc | ch,
            FoldOp::Mul => acc.wrapping_mul(ch),
            FoldOp::Add => acc.wrapping_add(ch),
        }
    }
}

/// Left fold of `text`'s characters with `op`, starting from zero.
pub fn fold_chars(text: &str, op: FoldOp) -> i32 {
    text.chars().fold(0i32, |acc, ch| op.apply(acc, ch as i32))
}

/// Slot derived from the caption's characters; never [`Placement::None`].
pub fn choose_placement(text: &str) -> Placement {
    let n = Placement::SLOTS.len() as i32;
    let idx = fold_chars(text, FoldOp::Or).rem_euclid(n);
    Placement::SLOTS[idx as usize]
}

/// Reduce a fold into `[-(modulus / 2), modulus - 1 - modulus / 2]`.
pub fn jitter(text: &str, op: FoldOp, modulus: i32) -> i32 {
    let modulus = modulus.max(1);
    fold_chars(text, op).rem_euclid(modulus) - modulus / 2
}

/// Horizontal and vertical jitter in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Jitter {
    /// Horizontal offset.
    pub dx: i32,
    /// Vertical offset.
    pub dy: i32,
}

impl Jitter {
    /// Jitter for `text` with offsets drawn from `modulus` buckets.
    pub fn for_text(text: &str, modulus: i32) -> Self {
        Self {
            dx: jitter(text, FoldOp::Mul, modulus),
            dy: jitter(text, FoldOp::Add, modulus),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
