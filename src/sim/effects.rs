//! Deadline-based effect scheduler.
//!
//! Timed effects are deadlines compared against the session's simulated
//! clock and drained synchronously at the top of each tick. No background
//! timers exist, so expiry can never race tick processing.

/// Pending speed-boost restoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpeedRestore {
    /// Interval to restore; capped at the base interval when applied.
    tick_ms: u64,
    deadline_ms: u64,
}

/// All scheduled deadlines for the session.
#[derive(Debug, Clone, Default)]
pub struct EffectTimers {
    power_up_despawn_ms: Option<u64>,
    speed_restore: Option<SpeedRestore>,
}

/// Expirations due at a given instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expired {
    /// The unclaimed power-up timed out.
    pub power_up: bool,
    /// A speed boost ran out; restore this interval.
    pub restore_tick_ms: Option<u64>,
}

impl EffectTimers {
    /// Arm the despawn deadline for a freshly spawned power-up.
    pub fn schedule_power_up_despawn(&mut self, now_ms: u64, lifetime_ms: u64) {
        self.power_up_despawn_ms = Some(now_ms + lifetime_ms);
    }

    /// Disarm the despawn deadline, e.g. when the power-up is collected.
    pub fn cancel_power_up_despawn(&mut self) {
        self.power_up_despawn_ms = None;
    }

    /// Remember the pre-boost interval and arm the restore deadline.
    ///
    /// A second boost while one is pending keeps the larger remembered
    /// interval, so stacked boosts cannot ratchet the restore target
    /// down below the true baseline.
    pub fn schedule_speed_restore(&mut self, now_ms: u64, duration_ms: u64, current_tick_ms: u64) {
        let tick_ms = match self.speed_restore {
            Some(pending) => pending.tick_ms.max(current_tick_ms),
            None => current_tick_ms,
        };
        self.speed_restore = Some(SpeedRestore {
            tick_ms,
            deadline_ms: now_ms + duration_ms,
        });
    }

    /// Pop everything due at `now_ms`.
    pub fn drain_expired(&mut self, now_ms: u64) -> Expired {
        let mut expired = Expired::default();
        if self.power_up_despawn_ms.is_some_and(|d| now_ms >= d) {
            self.power_up_despawn_ms = None;
            expired.power_up = true;
        }
        if let Some(pending) = self.speed_restore {
            if now_ms >= pending.deadline_ms {
                self.speed_restore = None;
                expired.restore_tick_ms = Some(pending.tick_ms);
            }
        }
        expired
    }

    /// Drop all deadlines, e.g. on game over or restart.
    pub fn clear(&mut self) {
        self.power_up_despawn_ms = None;
        self.speed_restore = None;
    }
}
