use super::{message::Message, surface::DisplaySurface};

/// A counter that never goes below zero, painting itself onto `S`.
#[derive(Clone, Debug)]
pub struct CounterWidget<S> {
    value: u64,
    surface: S,
}

impl<S: DisplaySurface> CounterWidget<S> {
    /// Takes ownership of `surface` and paints the initial `0` onto it.
    pub fn new(surface: S) -> Self {
        let mut widget = Self { value: 0, surface };
        widget.paint();
        widget
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
        self.paint();
    }

    pub fn decrement(&mut self) {
        if self.value == 0 {
            log::trace!("decrement ignored at floor");
            return;
        }

        self.value -= 1;
        self.paint();
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Increment => self.increment(),
            Message::Decrement => self.decrement(),
        }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn is_at_floor(&self) -> bool {
        self.value == 0
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn paint(&mut self) {
        self.surface.show(&self.value.to_string());
    }
}
