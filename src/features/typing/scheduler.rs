//! Delayed callback scheduling
//!
//! Everything runs on the UI thread. Callbacks are registered with a delay and
//! fired later by whoever owns the clock: the app advances it from window
//! frames, tests advance it by hand.

/// Work to run once a delay elapses.
///
/// Receives the shared context and the time the callback was due.
pub type Callback<C> = Box<dyn FnOnce(&mut C, f64)>;

/// Accepts `(delay, callback)` registrations without blocking the caller
pub trait Scheduler<C> {
    /// Current clock time in seconds
    fn now(&self) -> f64;

    /// Run `callback` once `delay` seconds have passed
    fn schedule(&mut self, delay: f64, callback: Callback<C>);
}

struct Pending<C> {
    due: f64,
    seq: u64,
    callback: Callback<C>,
}

/// Deadline-ordered queue over an externally advanced clock
pub struct TimerQueue<C> {
    now: f64,
    next_seq: u64,
    pending: Vec<Pending<C>>,
}

impl<C> Default for TimerQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for TimerQueue<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("now", &self.now)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl<C> TimerQueue<C> {
    pub fn new() -> Self {
        Self::starting_at(0.0)
    }

    pub fn starting_at(now: f64) -> Self {
        Self {
            now,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Number of callbacks still waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Move the clock to `now` and fire every callback that became due.
    ///
    /// Callbacks fire in deadline order, ties in registration order. The
    /// clock never moves backwards. Returns the number of callbacks fired.
    pub fn advance_to(&mut self, now: f64, ctx: &mut C) -> usize {
        if now > self.now {
            self.now = now;
        }

        let mut fired = 0;
        while let Some(index) = self.next_due() {
            let Pending { due, callback, .. } = self.pending.remove(index);
            callback(ctx, due);
            fired += 1;
        }
        fired
    }

    fn next_due(&self) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= self.now)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
            .map(|(index, _)| index)
    }
}

impl<C> Scheduler<C> for TimerQueue<C> {
    fn now(&self) -> f64 {
        self.now
    }

    fn schedule(&mut self, delay: f64, callback: Callback<C>) {
        // NaN delays run on the next advance like negative ones
        let delay = if delay.is_nan() { 0.0 } else { delay };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due: self.now + delay,
            seq,
            callback,
        });
    }
}
