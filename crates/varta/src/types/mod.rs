mod axis_key;
mod context;
mod gender;
mod leaf;
mod phrase;
mod table;
mod token;
mod value;

pub use axis_key::{AxisKey, EXACTLY_ONE, WILDCARD};
pub use context::ViewerContext;
pub use gender::{GENDER_BITMASK, Gender, PronounGender};
pub use leaf::{Leaf, TokenAliasMap};
pub use phrase::Phrase;
pub use table::{HashNode, Node, TableShapeError, VariationTable};
pub use token::{PronounUsage, ShowCount, Token, VariationAxis};
pub use value::{Person, Value};
