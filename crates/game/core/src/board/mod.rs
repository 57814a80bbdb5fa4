//! Board definition: an ordered, immutable track of squares.
//!
//! A [`Board`] can only be constructed through validation, so holders may rely
//! on its invariants: at least two squares, `squares[i].id == i`, and an
//! effect-free start square. The last square is the goal.

mod difficulty;
mod effect;
mod error;

pub use difficulty::Difficulty;
pub use effect::{EffectDescriptor, EffectKind, EffectTag, EffectValue};
pub use error::BoardError;

/// One fixed cell of the track, identified by its index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub id: u32,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<EffectDescriptor>,
}

impl Square {
    /// Creates a square without icon or effect.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: None,
            effect: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: EffectDescriptor) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }
}

/// Validated, ordered sequence of squares.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Square>", into = "Vec<Square>")
)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Validates `squares` and wraps them into a board.
    pub fn new(squares: Vec<Square>) -> Result<Self, BoardError> {
        if squares.len() < 2 {
            return Err(BoardError::TooShort { len: squares.len() });
        }

        for (index, square) in squares.iter().enumerate() {
            if square.id as usize != index {
                return Err(BoardError::NonContiguousId {
                    index,
                    id: square.id,
                });
            }

            let Some(effect) = &square.effect else {
                continue;
            };

            if index == 0 {
                return Err(BoardError::StartHasEffect {
                    kind: effect.kind.name().to_string(),
                });
            }

            if let Err(reason) = effect.validate() {
                // validate() only fails for known kinds
                let kind = effect.kind.known().map_or("unknown", |kind| kind.as_str());
                return Err(BoardError::InvalidEffectValue {
                    index,
                    kind,
                    reason,
                });
            }

            if let EffectTag::Unrecognized(name) = &effect.kind {
                tracing::warn!(
                    square = index,
                    kind = %name,
                    "board references an unrecognized effect kind; it will resolve as a no-op"
                );
            }
        }

        Ok(Self { squares })
    }

    /// Builds a board of `len` effect-free squares.
    pub fn plain(len: usize) -> Result<Self, BoardError> {
        let last = len.saturating_sub(1);
        let squares = (0..len)
            .map(|index| {
                let name = match index {
                    0 => "Start".to_string(),
                    i if i == last => "Goal".to_string(),
                    i => format!("Square {i}"),
                };
                Square::new(index as u32, name)
            })
            .collect();
        Self::new(squares)
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false; a valid board has at least two squares.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Index of the goal square.
    pub fn last_index(&self) -> u32 {
        (self.squares.len() - 1) as u32
    }

    pub fn square(&self, index: u32) -> Option<&Square> {
        self.squares.get(index as usize)
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn start(&self) -> &Square {
        &self.squares[0]
    }

    pub fn goal(&self) -> &Square {
        &self.squares[self.squares.len() - 1]
    }

    /// Clamps an unbounded position into `[0, last_index]`.
    pub fn clamp(&self, position: i64) -> u32 {
        position.clamp(0, i64::from(self.last_index())) as u32
    }

    /// Iterates over the indices of squares that carry any effect.
    pub fn effect_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.squares
            .iter()
            .filter(|square| square.has_effect())
            .map(|square| square.id)
    }
}

impl TryFrom<Vec<Square>> for Board {
    type Error = BoardError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        Self::new(squares)
    }
}

impl From<Board> for Vec<Square> {
    fn from(board: Board) -> Self {
        board.squares
    }
}
