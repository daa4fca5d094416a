/// Classification of a captured line, as encoded in the `.lines` stroke
/// format. Raw codes come in two generations; both map onto one variant set
/// here (e.g. codes 5 and 18 are both [`BrushType::Highlighter`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushType {
    Brush,
    Pencil,
    BallPoint,
    Marker,
    Fineliner,
    SharpPencil,
    Highlighter,
    Eraser,
    EraseArea,
}

impl BrushType {
    /// Decodes a raw brush code. Returns `None` for codes this build does
    /// not know about; callers decide on a fallback.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 | 12 => Some(Self::Brush),
            1 | 14 => Some(Self::Pencil),
            2 | 15 => Some(Self::BallPoint),
            3 | 16 => Some(Self::Marker),
            4 | 17 => Some(Self::Fineliner),
            7 | 13 => Some(Self::SharpPencil),
            5 | 18 => Some(Self::Highlighter),
            6 => Some(Self::Eraser),
            8 => Some(Self::EraseArea),
            _ => None,
        }
    }

    /// Erasers never leave a visible mark in exported documents.
    pub fn is_eraser(self) -> bool {
        matches!(self, Self::Eraser | Self::EraseArea)
    }

    pub fn is_highlighter(self) -> bool {
        self == Self::Highlighter
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrushColor {
    #[default]
    Black,
    Grey,
    White,
}

impl BrushColor {
    /// Decodes a raw color code; unknown codes fall back to black.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Grey,
            2 => Self::White,
            _ => Self::Black,
        }
    }
}
