/// Trigger events a front end feeds into [`CounterWidget::update`].
///
/// [`CounterWidget::update`]: super::CounterWidget::update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    Increment,
    Decrement,
}
