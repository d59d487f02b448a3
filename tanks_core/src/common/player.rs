use std::fmt;

/// One of the two players, numbered as printed in prompts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PlayerNum {
    #[default]
    One = 1,
    Two = 2,
}

impl PlayerNum {
    /// The player whose turn comes next
    pub fn other(self) -> Self {
        match self {
            PlayerNum::One => PlayerNum::Two,
            PlayerNum::Two => PlayerNum::One,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for PlayerNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
