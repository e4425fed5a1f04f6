/// Receives every accepted index change of a carousel.
///
/// The carousel calls this synchronously and does not guard against
/// panics: a renderer that panics is a host bug.
pub trait Renderer {
    fn render(&mut self, new_index: usize, previous_index: usize);
}

impl<F> Renderer for F
where
    F: FnMut(usize, usize),
{
    fn render(&mut self, new_index: usize, previous_index: usize) {
        self(new_index, previous_index)
    }
}
