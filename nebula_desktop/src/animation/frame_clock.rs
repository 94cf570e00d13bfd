use iced::time::Instant;

/// Measures real time between consecutive frame ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    /// Records a tick at `now` and returns seconds since the previous one.
    ///
    /// The first tick yields zero so startup latency never reaches the simulation.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = self
            .last
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::time::Duration;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::default();
        let start = Instant::now();
        assert_eq!(clock.tick(start), 0.0);
        assert_eq!(clock.last, Some(start));
    }

    #[test]
    fn measures_gap_between_ticks() {
        let mut clock = FrameClock::default();
        let start = Instant::now();
        clock.tick(start);
        let dt = clock.tick(start + Duration::from_millis(250));
        assert!((dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn out_of_order_tick_is_zero() {
        let mut clock = FrameClock::default();
        let start = Instant::now();
        clock.tick(start + Duration::from_millis(100));
        assert_eq!(clock.tick(start), 0.0);
    }
}
