use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SegfontError {
    #[error("IO Error: {0}")]
    IO(#[from] io::Error),

    #[error("Error parsing glyph table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No <{element}> element found in document")]
    MissingElement { element: String },

    #[error("<{element}> element has no {attribute:?} attribute")]
    MissingAttribute { element: String, attribute: String },

    #[error("Ill-formed coordinate {token:?} in segment path")]
    BadCoordinate { token: String },

    #[error("Advance width {value:?} is not an integer")]
    BadAdvanceWidth { value: String },

    #[error("Glyph {character:?} uses segment {segment:?}, which is not in the document")]
    MissingSegment { character: char, segment: char },

    #[error("Character {character:?} appears more than once in the glyph table")]
    DuplicateCharacter { character: char },
}

impl SegfontError {
    pub(crate) fn missing_attribute(element: &str, attribute: &str) -> Self {
        SegfontError::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }
}
