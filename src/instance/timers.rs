/// Countdown timers owned by the instance. Each holds the milliseconds left
/// until it fires; zero means inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceTimer {
    LivingPoison,
    KelthuzadTriggerDespawn,
    Screams,
    Taunt,
    HorsemenAchievement,
    SapphironSpawn,
}

const TIMER_COUNT: usize = 6;

impl InstanceTimer {
    /// Processing order within one tick.
    pub const ALL: [InstanceTimer; TIMER_COUNT] = [
        InstanceTimer::LivingPoison,
        InstanceTimer::KelthuzadTriggerDespawn,
        InstanceTimer::Screams,
        InstanceTimer::Taunt,
        InstanceTimer::HorsemenAchievement,
        InstanceTimer::SapphironSpawn,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerTable {
    remaining: [u32; TIMER_COUNT],
}

impl TimerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (or re-arms) a timer. Arming with zero cancels it.
    pub fn arm(&mut self, timer: InstanceTimer, duration_ms: u32) {
        self.remaining[timer.slot()] = duration_ms;
    }

    pub fn remaining(&self, timer: InstanceTimer) -> u32 {
        self.remaining[timer.slot()]
    }

    pub fn is_active(&self, timer: InstanceTimer) -> bool {
        self.remaining(timer) > 0
    }

    /// Counts every active timer down by `diff` milliseconds and returns the
    /// ones that expired, in processing order. Expired timers are left
    /// inactive; repeating effects re-arm them. Timers rejected by
    /// `counting` are frozen for this tick.
    pub fn advance(
        &mut self,
        diff: u32,
        mut counting: impl FnMut(InstanceTimer) -> bool,
    ) -> Vec<InstanceTimer> {
        let mut fired = Vec::new();
        for timer in InstanceTimer::ALL {
            let remaining = &mut self.remaining[timer.slot()];
            if *remaining == 0 || !counting(timer) {
                continue;
            }
            if diff >= *remaining {
                *remaining = 0;
                fired.push(timer);
            } else {
                *remaining -= diff;
            }
        }
        fired
    }
}
