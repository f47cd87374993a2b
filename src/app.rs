use iced::{
    Alignment, Element, Length,
    widget::{button, column, text, Container},
};

use counter_widget::counter::{CounterWidget, Message, TextSurface};

const VALUE_SIZE: f32 = 50.0;

/// Desktop front end: an increment button, the count, a decrement button.
pub struct CounterApp {
    counter: CounterWidget<TextSurface>,
}

impl Default for CounterApp {
    fn default() -> Self {
        Self {
            counter: CounterWidget::new(TextSurface::new()),
        }
    }
}

impl CounterApp {
    pub fn update(&mut self, message: Message) {
        let before = self.counter.value();
        self.counter.update(message);
        log::debug!("{:?}: {} -> {}", message, before, self.counter.value());
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            button("increment").on_press(Message::Increment),
            text(self.counter.surface().text()).size(VALUE_SIZE),
            button("decrement").on_press_maybe(self.decrement_message()),
        ]
        .spacing(10)
        .align_x(Alignment::Center);

        Container::new(content)
            .padding(5)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    // No message while at the floor, which renders the button disabled.
    fn decrement_message(&self) -> Option<Message> {
        (!self.counter.is_at_floor()).then_some(Message::Decrement)
    }
}
