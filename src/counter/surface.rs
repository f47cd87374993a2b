/// Text sink the widget writes the counter to.
///
/// The widget only ever writes; reading back is up to whoever owns the
/// concrete surface.
pub trait DisplaySurface {
    fn show(&mut self, text: &str);
}

impl<F> DisplaySurface for F
where
    F: FnMut(&str),
{
    fn show(&mut self, text: &str) {
        self(text)
    }
}

/// In-memory surface holding the last text written to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextSurface {
    text: String,
    writes: usize,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times the surface has been written to.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DisplaySurface for TextSurface {
    fn show(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_surface_keeps_last_write() {
        let mut surface = TextSurface::new();
        surface.show("1");
        surface.show("12");

        assert_eq!(surface.text(), "12");
        assert_eq!(surface.writes(), 2);
    }

    #[test]
    fn closures_are_surfaces() {
        let mut seen = Vec::new();
        {
            let mut sink = |text: &str| seen.push(text.to_owned());
            sink.show("7");
        }
        assert_eq!(seen, ["7"]);
    }
}
