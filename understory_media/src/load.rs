// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waiting for a media element to finish loading.

use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures::channel::oneshot;
use futures::future::{self, Either, Select};
use futures::{FutureExt, ready};

use crate::MediaError;

/// Terminal load events of a media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    /// The resource finished loading.
    Load,
    /// The resource failed to load.
    Error,
}

/// Handle returned by [`MediaEvents::add_listener`], used to remove the listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// A one-shot event callback.
pub type Listener = Box<dyn FnOnce()>;

/// Host capability for subscribing to an element's load events.
///
/// Listeners are one-shot: the host calls a listener at most once, and drops it
/// after calling it. Removing a listener that already fired is a no-op.
pub trait MediaEvents {
    /// Register `listener` for the next `event`.
    fn add_listener(&self, event: MediaEvent, listener: Listener) -> ListenerId;
    /// Unregister a listener added with [`MediaEvents::add_listener`].
    fn remove_listener(&self, event: MediaEvent, id: ListenerId);
}

/// Wait for the first [`MediaEvent::Load`] or [`MediaEvent::Error`] on `target`.
///
/// Both listeners are registered before this returns, so an event fired between
/// this call and the first poll is not missed. Each call registers its own pair,
/// so concurrent waits on the same element do not interfere.
///
/// There is no timeout: if neither event fires, the future stays pending. If the
/// host drops a listener without calling it, the wait ends with
/// [`MediaError::LoadAbandoned`].
pub fn await_loaded<T: MediaEvents + ?Sized>(target: &T) -> LoadWait<'_, T> {
    let (load_tx, load_rx) = oneshot::channel::<()>();
    let (error_tx, error_rx) = oneshot::channel::<()>();

    let load_id = target.add_listener(
        MediaEvent::Load,
        Box::new(move || {
            let _ = load_tx.send(());
        }),
    );
    let error_id = target.add_listener(
        MediaEvent::Error,
        Box::new(move || {
            let _ = error_tx.send(());
        }),
    );
    log::trace!("waiting for media load (listeners {load_id:?}, {error_id:?})");

    LoadWait {
        target,
        listeners: Some((load_id, error_id)),
        events: future::select(load_rx, error_rx),
    }
}

/// Future returned by [`await_loaded`].
///
/// Removes both of its listeners from the target once it completes, or when it
/// is dropped before completing.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct LoadWait<'a, T: MediaEvents + ?Sized> {
    target: &'a T,
    listeners: Option<(ListenerId, ListenerId)>,
    events: Select<oneshot::Receiver<()>, oneshot::Receiver<()>>,
}

impl<T: MediaEvents + ?Sized> LoadWait<'_, T> {
    fn remove_listeners(&mut self) {
        if let Some((load_id, error_id)) = self.listeners.take() {
            self.target.remove_listener(MediaEvent::Load, load_id);
            self.target.remove_listener(MediaEvent::Error, error_id);
        }
    }
}

impl<T: MediaEvents + ?Sized> Future for LoadWait<'_, T> {
    type Output = Result<(), MediaError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let outcome = match ready!(self.events.poll_unpin(cx)) {
            Either::Left((Ok(()), _)) => Ok(()),
            Either::Right((Ok(()), _)) => Err(MediaError::LoadFailed),
            Either::Left((Err(oneshot::Canceled), _))
            | Either::Right((Err(oneshot::Canceled), _)) => Err(MediaError::LoadAbandoned),
        };
        self.remove_listeners();
        log::trace!("media load settled: {outcome:?}");
        Poll::Ready(outcome)
    }
}

impl<T: MediaEvents + ?Sized> Drop for LoadWait<'_, T> {
    fn drop(&mut self) {
        if self.listeners.is_some() {
            log::trace!("media load wait dropped before settling");
        }
        self.remove_listeners();
    }
}

impl<T: MediaEvents + ?Sized> fmt::Debug for LoadWait<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadWait")
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct Element {
        next_id: Cell<u64>,
        listeners: RefCell<Vec<(MediaEvent, ListenerId, Listener)>>,
    }

    impl Element {
        fn fire(&self, event: MediaEvent) {
            let fired: Vec<_> = {
                let mut listeners = self.listeners.borrow_mut();
                let (fired, kept): (Vec<_>, Vec<_>) =
                    listeners.drain(..).partition(|(e, _, _)| *e == event);
                *listeners = kept;
                fired
            };
            for (_, _, listener) in fired {
                listener();
            }
        }

        fn drop_all(&self) {
            self.listeners.borrow_mut().clear();
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl MediaEvents for Element {
        fn add_listener(&self, event: MediaEvent, listener: Listener) -> ListenerId {
            let id = ListenerId(self.next_id.get());
            self.next_id.set(id.0 + 1);
            self.listeners.borrow_mut().push((event, id, listener));
            id
        }

        fn remove_listener(&self, event: MediaEvent, id: ListenerId) {
            self.listeners
                .borrow_mut()
                .retain(|(e, i, _)| !(*e == event && *i == id));
        }
    }

    #[test]
    fn resolves_on_load_and_cleans_up() {
        let element = Element::default();
        let mut wait = Box::pin(await_loaded(&element));
        assert_eq!(wait.as_mut().now_or_never(), None);
        assert_eq!(element.listener_count(), 2);

        element.fire(MediaEvent::Load);
        assert_eq!(wait.as_mut().now_or_never(), Some(Ok(())));
        assert_eq!(element.listener_count(), 0);
    }

    #[test]
    fn registers_listeners_before_first_poll() {
        let element = Element::default();
        let wait = await_loaded(&element);
        assert_eq!(element.listener_count(), 2);

        element.fire(MediaEvent::Load);
        assert_eq!(wait.now_or_never(), Some(Ok(())));
        assert_eq!(element.listener_count(), 0);
    }

    #[test]
    fn dropping_a_pending_wait_removes_its_listeners() {
        let element = Element::default();
        for _ in 0..3 {
            let mut wait = await_loaded(&element);
            assert_eq!((&mut wait).now_or_never(), None);
            assert_eq!(element.listener_count(), 2);
            drop(wait);
            assert_eq!(element.listener_count(), 0);
        }

        drop(await_loaded(&element));
        assert_eq!(element.listener_count(), 0);
    }

    #[test]
    fn rejects_on_error_and_cleans_up() {
        let element = Element::default();
        let mut wait = Box::pin(await_loaded(&element));
        assert_eq!(wait.as_mut().now_or_never(), None);

        element.fire(MediaEvent::Error);
        assert_eq!(
            wait.as_mut().now_or_never(),
            Some(Err(MediaError::LoadFailed))
        );
        assert_eq!(element.listener_count(), 0);
    }

    #[test]
    fn concurrent_waits_each_get_their_own_listeners() {
        let element = Element::default();
        let mut first = Box::pin(await_loaded(&element));
        let mut second = Box::pin(await_loaded(&element));
        assert_eq!(first.as_mut().now_or_never(), None);
        assert_eq!(second.as_mut().now_or_never(), None);
        assert_eq!(element.listener_count(), 4);

        element.fire(MediaEvent::Load);
        assert_eq!(first.as_mut().now_or_never(), Some(Ok(())));
        assert_eq!(second.as_mut().now_or_never(), Some(Ok(())));
        assert_eq!(element.listener_count(), 0);
    }

    #[test]
    fn dropped_listeners_abandon_the_wait() {
        let element = Element::default();
        let mut wait = Box::pin(await_loaded(&element));
        assert_eq!(wait.as_mut().now_or_never(), None);

        element.drop_all();
        assert_eq!(
            wait.as_mut().now_or_never(),
            Some(Err(MediaError::LoadAbandoned))
        );
    }

    #[test]
    fn block_on_completes_once_the_event_fires() {
        let element = Element::default();
        let (result, ()) = futures::executor::block_on(async {
            futures::join!(await_loaded(&element), async {
                element.fire(MediaEvent::Load);
            })
        });
        assert_eq!(result, Ok(()));
    }
}
