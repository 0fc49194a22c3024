use crate::*;
pub use random::*;
pub use sequence::*;

mod random;
mod sequence;

/// Produces one new tile per call, for initial population and for every refilled slot.
///
/// The engine draws exactly once per tile it creates, so a deterministic source makes every
/// engine operation reproducible.
pub trait TileSource<T> {
    fn next_tile(&mut self) -> T;
}

impl<T, F> TileSource<T> for F
where
    F: FnMut() -> T,
{
    fn next_tile(&mut self) -> T {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw<S: TileSource<char> + ?Sized>(source: &mut S) -> char {
        source.next_tile()
    }

    #[test]
    fn closures_are_tile_sources() {
        let mut letters = ['x', 'y'].into_iter().cycle();
        let mut source = move || letters.next().unwrap_or('?');

        assert_eq!(draw(&mut source), 'x');
        assert_eq!(draw(&mut source), 'y');
        assert_eq!(draw(&mut source), 'x');
    }

    #[test]
    fn trait_objects_are_tile_sources() {
        let mut scripted = SequenceTileSource::new(alloc::vec!['q']).unwrap();
        let source: &mut dyn TileSource<char> = &mut scripted;

        assert_eq!(draw(source), 'q');
    }
}
