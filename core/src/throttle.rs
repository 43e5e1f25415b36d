/// Leading-edge throttle gate driven by an external millisecond clock.
///
/// The first call opens the gate and starts a cooldown of `window_ms`; calls
/// inside the cooldown are rejected, not queued.
#[derive(Clone, Debug)]
pub struct Throttle {
    window_ms: f64,
    reopens_at: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms: window_ms.max(0.0),
            reopens_at: None,
        }
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(reopens_at) = self.reopens_at {
            if now_ms < reopens_at {
                return false;
            }
        }
        self.reopens_at = Some(now_ms + self.window_ms);
        true
    }

    pub fn is_cooling_down(&self, now_ms: f64) -> bool {
        self.reopens_at.map(|at| now_ms < at).unwrap_or(false)
    }
}

/// A function behind a [`Throttle`]. Arguments of the admitted call are
/// forwarded; dropped calls return `None`.
pub struct Throttled<F> {
    gate: Throttle,
    func: F,
}

impl<F> Throttled<F> {
    pub fn new(func: F, window_ms: f64) -> Self {
        Self {
            gate: Throttle::new(window_ms),
            func,
        }
    }

    pub fn call<A, R>(&mut self, now_ms: f64, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if !self.gate.admit(now_ms) {
            return None;
        }
        Some((self.func)(args))
    }
}

pub fn throttle<F>(func: F, window_ms: f64) -> Throttled<F> {
    Throttled::new(func, window_ms)
}
