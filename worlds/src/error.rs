//! Construction and move errors for the bundled worlds.

/// Typed failure for world construction and direct play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The grid text had no rows.
    EmptyGrid,
    /// A row's length differs from the first row's.
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A required marker character is absent.
    MissingMarker { marker: char },
    /// A marker that must be unique appears more than once.
    DuplicateMarker { marker: char },
    /// A board dimension outside the supported range.
    InvalidBoardSize { size: usize },
    /// Tiles are not a permutation of `0..width * width`.
    InvalidTileLayout { detail: String },
    /// Initial and goal boards have different widths.
    MismatchedBoards { initial: usize, goal: usize },
    /// A cell index outside the board.
    PositionOutOfRange { position: usize },
    /// The cell already holds a mark.
    CellOccupied { position: usize },
    /// The game already has a winner or a full board.
    GameOver,
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid is empty"),
            Self::RaggedGrid {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} columns, expected {expected}"),
            Self::MissingMarker { marker } => write!(f, "grid has no '{marker}' marker"),
            Self::DuplicateMarker { marker } => {
                write!(f, "grid has more than one '{marker}' marker")
            }
            Self::InvalidBoardSize { size } => write!(f, "unsupported board size {size}"),
            Self::InvalidTileLayout { detail } => write!(f, "invalid tile layout: {detail}"),
            Self::MismatchedBoards { initial, goal } => {
                write!(f, "initial board width {initial} does not match goal width {goal}")
            }
            Self::PositionOutOfRange { position } => {
                write!(f, "position {position} is off the board")
            }
            Self::CellOccupied { position } => write!(f, "position {position} is occupied"),
            Self::GameOver => write!(f, "the game is over"),
        }
    }
}

impl std::error::Error for WorldError {}
