use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use leptos::{set_interval_with_handle, set_timeout_with_handle, IntervalHandle, TimeoutHandle};

use geofield_core::{Timer, TimerGateway};

use crate::widget::{dispatch, WebWidget};

#[derive(Debug, Clone, Copy)]
pub enum TimerHandle {
    Timeout(TimeoutHandle),
    Interval(IntervalHandle),
}

/// Browser timers that report back to the widget they are bound to.
#[derive(Default)]
pub struct BrowserTimers {
    widget: RefCell<Weak<RefCell<WebWidget>>>,
}

impl BrowserTimers {
    pub fn bind(&self, widget: &Rc<RefCell<WebWidget>>) {
        *self.widget.borrow_mut() = Rc::downgrade(widget);
    }

    fn callback(&self, timer: Timer) -> impl Fn() + 'static {
        let widget = self.widget.borrow().clone();
        move || dispatch(&widget, |w| w.on_timer(timer))
    }
}

impl TimerGateway for BrowserTimers {
    // `None` if the browser refused to start the timer.
    type Handle = Option<TimerHandle>;

    fn start_timeout(&self, timer: Timer, delay: Duration) -> Self::Handle {
        set_timeout_with_handle(self.callback(timer), delay)
            .map(TimerHandle::Timeout)
            .map_err(|err| log::error!("Unable to start {timer:?}: {err:?}"))
            .ok()
    }

    fn start_interval(&self, timer: Timer, period: Duration) -> Self::Handle {
        set_interval_with_handle(self.callback(timer), period)
            .map(TimerHandle::Interval)
            .map_err(|err| log::error!("Unable to start {timer:?}: {err:?}"))
            .ok()
    }

    fn cancel(&self, handle: Self::Handle) {
        match handle {
            Some(TimerHandle::Timeout(h)) => h.clear(),
            Some(TimerHandle::Interval(h)) => h.clear(),
            None => {}
        }
    }
}
