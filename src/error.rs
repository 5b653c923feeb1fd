use std::fmt;

/// Happens while lexing `.obj` or `.mtl` text; aborts the whole file.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line {line}: failed to parse number `{token}`")]
    MalformedNumber { line: usize, token: String },
    #[error("Line {line}: `{directive}` expects {expected} values, found {found}")]
    MissingArguments {
        line: usize,
        directive: String,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: face vertex `{token}` has no position index")]
    MalformedFaceVertex { line: usize, token: String },
    #[error("Line {line}: `{directive}` found before any `newmtl`")]
    MissingCurrentMaterial { line: usize, directive: String },
}

/// Happens while building the vertex buffer of a part; aborts the whole part.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Part `{part}` references {attribute} {index}, but only {len} are defined")]
    IndexOutOfRange {
        part: String,
        attribute: Attribute,
        index: usize,
        len: usize,
    },
    #[error("Part `{0}` does not exist")]
    UnknownPart(String),
}

/// Vertex attribute pools a face can index into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Position,
    TexCoord,
    Normal,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Position => write!(f, "position"),
            Attribute::TexCoord => write!(f, "texture coordinate"),
            Attribute::Normal => write!(f, "normal"),
        }
    }
}
