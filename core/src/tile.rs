/// Capability every tile value must have: cheap duplication and value equality.
///
/// Two tiles match iff they compare equal. Colour enums, strings and plain structs all qualify.
pub trait Tile: Clone + PartialEq {}

impl<T: Clone + PartialEq> Tile for T {}
