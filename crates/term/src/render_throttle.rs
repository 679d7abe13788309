use crate::core::GameSnapshot;

/// Skips redraws of frames that have not changed.
///
/// The board has no animation, so a frame only needs drawing when the
/// snapshot changes. An unchanged frame is still redrawn once per
/// `min_static_interval_ms` so the terminal recovers from stray output.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Make the next call render regardless of content.
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }

    /// Decide whether to render a frame with the given fingerprint.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = match self.last_fingerprint {
            None => true,
            Some(last) if last != fingerprint => true,
            Some(_) => now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms,
        };
        if due {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
        }
        due
    }

    pub fn should_render_snapshot(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        self.should_render(now_ms, snap.fingerprint())
    }
}
