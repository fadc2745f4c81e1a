use serde::Deserialize;
use std::fmt;

/// One creature record as returned by the lookup service. Only the fields the
/// renderer consumes are modelled; everything else in the response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub forms: Vec<Form>,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Form {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub front_default: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: TypeName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeName {
    pub name: String,
}

/// The rendered form of one record. A snapshot: the record itself is not
/// retained after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub image_url: String,
    pub categories: Vec<String>,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  image: {}", self.image_url)?;
        write!(f, "  Type(s): {}", self.categories.join(", "))
    }
}

/// Observable session states: `Empty` means no seen identifiers and no cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Populated,
}
