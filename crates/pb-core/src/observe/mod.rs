//! Live snapshots.
//!
//! A [`Snapshots`] subscription hands out the latest value immediately on the
//! first [`Snapshots::next`] and every later update after that. Dropping the
//! subscription (or calling [`Snapshots::unsubscribe`]) stops delivery; the
//! producing task notices the closed channel and exits.
//!
//! Derived streams ([`Snapshots::map`], [`combine_latest`]) run on a spawned
//! tokio task and must be created from inside a runtime.

use tokio::sync::watch;

/// Producing side of a [`Snapshots`] subscription.
pub struct SnapshotPublisher<T> {
    tx: watch::Sender<T>,
}

impl<T> SnapshotPublisher<T> {
    /// Publish a new snapshot. Returns `false` once every subscriber is gone.
    pub fn publish(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }

    /// Publish only if the value differs from the current one.
    pub fn publish_if_changed(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        if *self.tx.borrow() == value {
            return !self.tx.is_closed();
        }
        self.publish(value)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Resolves when every subscriber has been dropped.
    pub async fn closed(&self) {
        self.tx.closed().await
    }
}

/// Subscription to a stream of snapshots.
pub struct Snapshots<T> {
    rx: watch::Receiver<T>,
    initial_pending: bool,
}

impl<T> Snapshots<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// A publisher/subscription pair seeded with `initial`.
    pub fn channel(initial: T) -> (SnapshotPublisher<T>, Snapshots<T>) {
        let (tx, rx) = watch::channel(initial);
        (SnapshotPublisher { tx }, Snapshots::from_receiver(rx))
    }

    fn from_receiver(mut rx: watch::Receiver<T>) -> Self {
        rx.borrow_and_update();
        Self {
            rx,
            initial_pending: true,
        }
    }

    /// A subscription that only ever yields `value`.
    pub fn once(value: T) -> Self {
        let (_publisher, snapshots) = Self::channel(value);
        snapshots
    }

    /// Current snapshot without waiting.
    pub fn latest(&self) -> T {
        self.rx.borrow().clone()
    }

    /// The current snapshot on the first call, then the next update.
    /// `None` once the producer has stopped.
    pub async fn next(&mut self) -> Option<T> {
        if self.initial_pending {
            self.initial_pending = false;
            return Some(self.rx.borrow_and_update().clone());
        }
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Stop receiving updates.
    pub fn unsubscribe(self) {}

    /// Derived subscription recomputed on every upstream update.
    pub fn map<U, F>(self, f: F) -> Snapshots<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + 'static,
    {
        let mut upstream = self.rx;
        let initial = f(&upstream.borrow_and_update());
        let (publisher, downstream) = Snapshots::channel(initial);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    changed = upstream.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let value = f(&upstream.borrow_and_update());
                        if !publisher.publish(value) {
                            break;
                        }
                    }
                    _ = publisher.closed() => break,
                }
            }
        });

        downstream
    }
}

/// Derived subscription over two upstreams, recomputed whenever either one
/// updates. It ends when the subscriber goes away or both upstreams end.
pub fn combine_latest<A, B, C, F>(a: Snapshots<A>, b: Snapshots<B>, f: F) -> Snapshots<C>
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: Fn(&A, &B) -> C + Send + 'static,
{
    let mut ra = a.rx;
    let mut rb = b.rx;
    let initial = f(&ra.borrow_and_update(), &rb.borrow_and_update());
    let (publisher, downstream) = Snapshots::channel(initial);

    tokio::spawn(async move {
        let mut a_open = true;
        let mut b_open = true;
        while a_open || b_open {
            let updated = tokio::select! {
                changed = ra.changed(), if a_open => {
                    a_open = changed.is_ok();
                    a_open
                }
                changed = rb.changed(), if b_open => {
                    b_open = changed.is_ok();
                    b_open
                }
                _ = publisher.closed() => break,
            };
            if !updated {
                continue;
            }
            let value = f(&ra.borrow_and_update(), &rb.borrow_and_update());
            if !publisher.publish(value) {
                break;
            }
        }
    });

    downstream
}

/// Writable value that can be observed, e.g. the text of a search box.
pub struct Signal<T> {
    tx: watch::Sender<T>,
}

impl<T> Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    pub fn subscribe(&self) -> Snapshots<T> {
        Snapshots::from_receiver(self.tx.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_next_yields_current_snapshot() {
        let (publisher, mut snapshots) = Snapshots::channel(1);
        assert_eq!(snapshots.next().await, Some(1));
        publisher.publish(2);
        assert_eq!(snapshots.next().await, Some(2));
        drop(publisher);
        assert_eq!(snapshots.next().await, None);
    }

    #[tokio::test]
    async fn test_unsubscribe_closes_publisher() {
        let (publisher, snapshots) = Snapshots::channel("a".to_string());
        snapshots.unsubscribe();
        assert!(publisher.is_closed());
        assert!(!publisher.publish("b".to_string()));
    }

    #[tokio::test]
    async fn test_map_recomputes_on_update() {
        let (publisher, snapshots) = Snapshots::channel(2);
        let mut doubled = snapshots.map(|v| v * 2);
        assert_eq!(doubled.next().await, Some(4));
        publisher.publish(5);
        assert_eq!(doubled.next().await, Some(10));
    }

    #[tokio::test]
    async fn test_combine_latest_tracks_both_inputs() {
        let (numbers, numbers_rx) = Snapshots::channel(vec![1, 2, 3]);
        let threshold = Signal::new(0);
        let mut combined = combine_latest(numbers_rx, threshold.subscribe(), |nums: &Vec<i32>, min: &i32| {
            nums.iter().filter(|n| *n > min).count()
        });

        assert_eq!(combined.next().await, Some(3));
        threshold.set(2);
        assert_eq!(combined.next().await, Some(1));
        numbers.publish(vec![5, 6, 7, 8]);
        assert_eq!(combined.next().await, Some(4));
    }

    #[tokio::test]
    async fn test_combine_latest_ends_when_both_inputs_end() {
        let (a, a_rx) = Snapshots::channel(1);
        let (b, b_rx) = Snapshots::channel(1);
        let mut sum = combine_latest(a_rx, b_rx, |x: &i32, y: &i32| x + y);
        assert_eq!(sum.next().await, Some(2));
        drop(a);
        drop(b);
        assert_eq!(sum.next().await, None);
    }

    #[tokio::test]
    async fn test_signal_update_and_get() {
        let signal = Signal::new(String::from("mi"));
        let mut sub = signal.subscribe();
        assert_eq!(sub.next().await.as_deref(), Some("mi"));
        signal.update(|s| s.push('l'));
        assert_eq!(signal.get(), "mil");
        assert_eq!(sub.next().await.as_deref(), Some("mil"));
    }

    #[tokio::test]
    async fn test_publish_if_changed_skips_equal_values() {
        let (publisher, mut snapshots) = Snapshots::channel(1);
        assert_eq!(snapshots.next().await, Some(1));
        assert!(publisher.publish_if_changed(1));
        publisher.publish(3);
        assert_eq!(snapshots.next().await, Some(3));
    }
}
