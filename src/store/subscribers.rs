// store/subscribers.rs

//! Subscription list for theme-change notifications.

use log::trace;

use crate::theme::Theme;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Theme)>;

/// Ordered list of change callbacks.
///
/// Callbacks run synchronously in subscription order, after the store has
/// finished updating its state and the style surface.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub fn subscribe(&mut self, callback: impl FnMut(&Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub fn notify(&mut self, theme: &Theme) {
        trace!(
            "Notifying {} subscriber(s) of theme {}",
            self.entries.len(),
            theme.id
        );
        for (_, callback) in self.entries.iter_mut() {
            callback(theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{registry, ThemeId};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn callbacks_run_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();
        for tag in ["first", "second"] {
            let sink = Rc::clone(&order);
            subscribers.subscribe(move |_| sink.borrow_mut().push(tag));
        }
        subscribers.notify(registry::lookup(ThemeId::Theme1));
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribed_callbacks_are_not_invoked() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let mut subscribers = Subscribers::default();
        let id = subscribers.subscribe(move |_| *sink.borrow_mut() += 1);
        subscribers.notify(registry::lookup(ThemeId::Theme1));
        subscribers.unsubscribe(id);
        subscribers.notify(registry::lookup(ThemeId::Theme2));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn unsubscribing_twice_is_harmless() {
        let mut subscribers = Subscribers::default();
        let id = subscribers.subscribe(|_| {});
        subscribers.unsubscribe(id);
        subscribers.unsubscribe(id);
        subscribers.notify(registry::lookup(ThemeId::Theme3));
    }
}
