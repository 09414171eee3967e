//! Interval timer that emits burst groups

use std::time::Duration;

use crate::config::BurstConfig;

/// How long bursts keep spawning after the engine starts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnCutoff {
    /// Spawn until bursting is switched off or the timer is cancelled
    Never,
    /// Switch bursting off once this much time has elapsed
    After(Duration),
}

impl From<Option<Duration>> for SpawnCutoff {
    fn from(cutoff: Option<Duration>) -> Self {
        cutoff.map_or(SpawnCutoff::Never, SpawnCutoff::After)
    }
}

/// Fixed-interval burst timer gated by a `bursting` flag
///
/// The spawner only decides *when* a group is due; the engine creates it.
/// A tick due at elapsed time `t` spawns iff bursting is on, the timer has
/// not been cancelled, and `t` is before the cutoff.
#[derive(Clone, Debug)]
pub struct BurstSpawner {
    interval: Duration,
    cutoff: SpawnCutoff,
    bursting: bool,
    cancelled: bool,
    /// Time elapsed since the spawner was created
    clock: Duration,
    /// Elapsed time at which the next tick fires
    next_tick: Duration,
    ticks_fired: u64,
}

impl BurstSpawner {
    /// Create a spawner with bursting on
    pub fn new(interval: Duration, cutoff: SpawnCutoff) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            cutoff,
            bursting: true,
            cancelled: false,
            clock: Duration::ZERO,
            next_tick: interval,
            ticks_fired: 0,
        }
    }

    pub fn from_config(config: &BurstConfig) -> Self {
        Self::new(config.interval(), config.cutoff().into())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn cutoff(&self) -> SpawnCutoff {
        self.cutoff
    }

    /// Elapsed time seen by the timer
    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    pub fn ticks_fired(&self) -> u64 {
        self.ticks_fired
    }

    pub fn is_bursting(&self) -> bool {
        self.bursting && !self.cancelled
    }

    /// Switch bursting on or off
    ///
    /// Once the cutoff has passed, bursting cannot be switched back on.
    pub fn set_bursting(&mut self, bursting: bool) {
        if bursting && self.window_closed() {
            log::info!("Celebration window already closed, bursting stays off");
            return;
        }
        if self.bursting != bursting {
            log::debug!("Bursting {}", if bursting { "enabled" } else { "disabled" });
        }
        self.bursting = bursting;
    }

    /// Stop the timer for good
    pub fn cancel(&mut self) {
        if !self.cancelled {
            log::debug!("Burst timer cancelled after {} ticks", self.ticks_fired);
        }
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Fire the next scheduled tick now
    ///
    /// The clock jumps to that tick's due time, so a host driving the spawner
    /// from its own interval timer reaches the cutoff like one using
    /// [`advance`](Self::advance). Returns true if a burst group should be
    /// created for this tick.
    pub fn fire_next(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.clock = self.next_tick;
        self.next_tick += self.interval;
        self.ticks_fired += 1;
        self.apply_cutoff();
        self.bursting
    }

    /// Advance the clock by `dt`, firing every tick that falls due
    ///
    /// Returns the number of burst groups to create.
    pub fn advance(&mut self, dt: Duration) -> usize {
        if self.cancelled {
            self.clock += dt;
            return 0;
        }

        let target = self.clock + dt;
        let mut spawns = 0;
        while self.next_tick <= target {
            if self.fire_next() {
                spawns += 1;
            }
        }
        self.clock = target;
        self.apply_cutoff();
        spawns
    }

    fn window_closed(&self) -> bool {
        matches!(self.cutoff, SpawnCutoff::After(limit) if self.clock >= limit)
    }

    fn apply_cutoff(&mut self) {
        if self.bursting && self.window_closed() {
            log::info!("Celebration window closed after {:?}", self.clock);
            self.bursting = false;
        }
    }
}

impl Default for BurstSpawner {
    fn default() -> Self {
        Self::from_config(&BurstConfig::default())
    }
}
