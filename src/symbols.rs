use std::fmt;

pub const TRUE_SIGN: char = '1';
pub const FALSE_SIGN: char = '0';
pub const NOT_SIGN: char = '¬';
pub const AND_SIGN: char = '∧';
pub const NAND_SIGN: char = '⊼';
pub const OR_SIGN: char = '∨';
pub const NOR_SIGN: char = '⊽';
pub const XOR_SIGN: char = '⊻';
pub const IF_SIGN: char = '→';
pub const EQUAL_SIGN: char = '↔';
pub const UNEQUAL_SIGN: char = '⇹';
pub const OPENING_BRACKET: char = '(';
pub const CLOSING_BRACKET: char = ')';

/// The full canonical alphabet; anything else is a variable character.
pub const SPECIAL_CHARACTERS: [char; 13] = [
    TRUE_SIGN,
    FALSE_SIGN,
    NOT_SIGN,
    AND_SIGN,
    NAND_SIGN,
    OR_SIGN,
    NOR_SIGN,
    XOR_SIGN,
    IF_SIGN,
    EQUAL_SIGN,
    UNEQUAL_SIGN,
    OPENING_BRACKET,
    CLOSING_BRACKET,
];

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    And,
    Nand,
    Or,
    Nor,
    Xor,
    If,
    Equal,
    Unequal,
}

impl BinaryOperator {
    /// Split-point selection order: the earliest entry present at bracket
    /// depth zero becomes the root of the subtree, regardless of position.
    /// The negation sign precedes all of these conceptually but is unary and
    /// never splits.
    pub const HIERARCHY: [Self; 8] = [
        Self::And,
        Self::Nand,
        Self::Or,
        Self::Nor,
        Self::Xor,
        Self::If,
        Self::Equal,
        Self::Unequal,
    ];

    pub const fn sign(self) -> char {
        match self {
            Self::And => AND_SIGN,
            Self::Nand => NAND_SIGN,
            Self::Or => OR_SIGN,
            Self::Nor => NOR_SIGN,
            Self::Xor => XOR_SIGN,
            Self::If => IF_SIGN,
            Self::Equal => EQUAL_SIGN,
            Self::Unequal => UNEQUAL_SIGN,
        }
    }

    pub fn from_sign(c: char) -> Option<Self> {
        Self::HIERARCHY.into_iter().find(|op| op.sign() == c)
    }

    /// Combination semantics per the standard propositional truth tables.
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Nand => !(left && right),
            Self::Or => left || right,
            Self::Nor => !(left || right),
            Self::Xor | Self::Unequal => left != right,
            Self::If => !left || right,
            Self::Equal => left == right,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}
