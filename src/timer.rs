//! Simulated-Time Timers
//!
//! Periodic gameplay effects (collectible spawning, eviction, the on-screen
//! clock) run on simulated time accumulated from the frame delta, not on
//! wall-clock intervals. That keeps them gated to active gameplay for free:
//! when a screen's update does not tick a timer, the timer stands still.

/// Fires every `period` seconds of accumulated simulated time
pub struct IntervalTimer {
    period: f64,
    accumulated: f64,
}

impl IntervalTimer {
    pub fn new(period: f64) -> Self {
        IntervalTimer {
            period,
            accumulated: 0.0,
        }
    }

    /// Advance by `dt` seconds; returns how many times the timer fired.
    ///
    /// A large `dt` can fire more than once, matching how a stalled frame
    /// catches up the rest of the simulation.
    pub fn tick(&mut self, dt: f64) -> u32 {
        self.accumulated += dt;
        let mut fires = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            fires += 1;
        }
        fires
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

/// Elapsed-gameplay clock, displayed in the HUD as MM:SS
pub struct GameClock {
    timer: IntervalTimer,
    seconds: u32,
}

impl GameClock {
    pub fn new() -> Self {
        GameClock {
            timer: IntervalTimer::new(1.0),
            seconds: 0,
        }
    }

    pub fn tick(&mut self, dt: f64) {
        self.seconds += self.timer.tick(dt);
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        self.seconds = 0;
    }

    /// Two-digit minutes and seconds, e.g. "03:07"
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}
