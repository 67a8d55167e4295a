//! Plays the default pattern against a virtual clock and checks the
//! recorded pin timeline.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::task::Poll;

use flash_check_blinky::{BlinkConfig, BlinkDriver, Led, LedState};

#[derive(Default)]
struct Timeline {
    now_ms: u64,
    level: Option<LedState>,
    /// `(state, at_ms)` for every level change.
    transitions: Vec<(LedState, u64)>,
    /// `(state, from_ms, hold_ms)` for every delay.
    holds: Vec<(LedState, u64, u32)>,
    /// Delays starting at or after this never finish.
    stop_at_ms: Option<u64>,
}

struct VirtualLed(Rc<RefCell<Timeline>>);

impl VirtualLed {
    fn write(&mut self, state: LedState) {
        let mut t = self.0.borrow_mut();
        if t.level != Some(state) {
            let now = t.now_ms;
            t.transitions.push((state, now));
            t.level = Some(state);
        }
    }
}

impl Led for VirtualLed {
    fn on(&mut self) {
        self.write(LedState::On);
    }

    fn off(&mut self) {
        self.write(LedState::Off);
    }

    fn toggle(&mut self) {
        let next = match self.0.borrow().level {
            Some(LedState::On) => LedState::Off,
            _ => LedState::On,
        };
        self.write(next);
    }
}

struct VirtualDelay(Rc<RefCell<Timeline>>);

const CLOCK_STOPPED: &str = "virtual clock stopped";

impl VirtualDelay {
    fn stopped(&self) -> bool {
        let t = self.0.borrow();
        t.stop_at_ms.is_some_and(|stop| t.now_ms >= stop)
    }

    fn advance(&mut self, ms: u32) {
        let mut t = self.0.borrow_mut();
        let state = t.level.expect("delay before the LED was initialized");
        let from = t.now_ms;
        t.holds.push((state, from, ms));
        t.now_ms += u64::from(ms);
    }
}

impl embedded_hal::delay::DelayNs for VirtualDelay {
    fn delay_ns(&mut self, ns: u32) {
        assert_eq!(ns % 1_000_000, 0, "sub-millisecond delay");
        self.advance(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        if self.stopped() {
            panic!("{}", CLOCK_STOPPED);
        }
        self.advance(ms);
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::delay::DelayNs for VirtualDelay {
    async fn delay_ns(&mut self, ns: u32) {
        assert_eq!(ns % 1_000_000, 0, "sub-millisecond delay");
        self.advance(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        if self.stopped() {
            core::future::pending::<()>().await;
        }
        self.advance(ms);
    }
}

fn virtual_driver() -> (
    BlinkDriver<VirtualLed, VirtualDelay>,
    Rc<RefCell<Timeline>>,
) {
    let timeline = Rc::new(RefCell::new(Timeline::default()));
    let driver = BlinkDriver::new(
        VirtualLed(timeline.clone()),
        VirtualDelay(timeline.clone()),
        BlinkConfig::DEFAULT,
    );
    (driver, timeline)
}

fn rising_edges(t: &Timeline) -> Vec<u64> {
    t.transitions
        .iter()
        .filter(|(s, _)| *s == LedState::On)
        .map(|&(_, at)| at)
        .collect()
}

fn falling_edges(t: &Timeline) -> Vec<u64> {
    t.transitions
        .iter()
        .skip(1) // initial Off at power-up
        .filter(|(s, _)| *s == LedState::Off)
        .map(|&(_, at)| at)
        .collect()
}

fn check_three_cycles(t: &Timeline) {
    // Stopped right at the start of the fourth burst, LED already lit.
    assert_eq!(t.now_ms, 3 * 1600);
    assert_eq!(t.level, Some(LedState::On));

    assert_eq!(
        rising_edges(t),
        [0, 200, 400, 1600, 1800, 2000, 3200, 3400, 3600, 4800]
    );
    assert_eq!(
        falling_edges(t),
        [100, 300, 500, 1700, 1900, 2100, 3300, 3500, 3700]
    );
    assert_eq!(t.holds.len(), 3 * 7);
}

fn check_two_cycles(t: &Timeline) {
    assert_eq!(t.now_ms, 3200);

    // Initial Off, then 6 transitions per cycle.
    assert_eq!(t.transitions[0], (LedState::Off, 0));
    assert_eq!(t.transitions.len(), 1 + 12);

    assert_eq!(rising_edges(t), [0, 200, 400, 1600, 1800, 2000]);
    assert_eq!(falling_edges(t), [100, 300, 500, 1700, 1900, 2100]);

    let pauses: Vec<_> = t.holds.iter().filter(|h| h.2 == 1000).collect();
    assert_eq!(
        pauses,
        [&(LedState::Off, 600, 1000), &(LedState::Off, 2200, 1000)]
    );

    let total: u64 = t.holds.iter().map(|h| u64::from(h.2)).sum();
    assert_eq!(total, 2 * BlinkConfig::DEFAULT.period().as_millis());
}

#[test]
fn test_two_cycles_blocking() {
    let (mut driver, timeline) = virtual_driver();
    driver.run_cycle_blocking();
    driver.run_cycle_blocking();

    check_two_cycles(&timeline.borrow());
}

#[cfg(feature = "async")]
#[test]
fn test_two_cycles_async() {
    let (mut driver, timeline) = virtual_driver();
    embassy_futures::block_on(async {
        driver.run_cycle().await;
        driver.run_cycle().await;
    });

    check_two_cycles(&timeline.borrow());
}

#[test]
fn test_pause_starts_dark() {
    let (mut driver, timeline) = virtual_driver();
    for _ in 0..3 {
        driver.run_cycle_blocking();
    }

    let t = timeline.borrow();
    let holds = &t.holds;
    assert_eq!(holds.len(), 3 * 7);
    for (i, cycle) in holds.chunks(7).enumerate() {
        let start = i as u64 * 1600;
        assert_eq!(cycle[5], (LedState::Off, start + 500, 100));
        assert_eq!(cycle[6], (LedState::Off, start + 600, 1000));
    }
}

#[test]
fn test_every_hold_is_exact() {
    let (mut driver, timeline) = virtual_driver();
    driver.run_cycle_blocking();

    let t = timeline.borrow();
    let pattern: Vec<(LedState, u32)> = t.holds.iter().map(|&(s, _, ms)| (s, ms)).collect();
    let expected: Vec<(LedState, u32)> = BlinkConfig::DEFAULT
        .phases()
        .map(|p| (p.state(), p.hold_ms()))
        .collect();
    assert_eq!(pattern, expected);
}

#[cfg(feature = "async")]
#[test]
fn test_run_repeats_until_clock_stops() {
    let (driver, timeline) = virtual_driver();
    timeline.borrow_mut().stop_at_ms = Some(3 * 1600);

    let poll = embassy_futures::poll_once(driver.run());
    assert!(matches!(poll, Poll::Pending));

    check_three_cycles(&timeline.borrow());
}

#[test]
fn test_run_blocking_repeats_until_clock_stops() {
    let (driver, timeline) = virtual_driver();
    timeline.borrow_mut().stop_at_ms = Some(3 * 1600);

    let stopped: std::thread::Result<()> =
        panic::catch_unwind(AssertUnwindSafe(|| driver.run_blocking()));
    let reason = stopped.expect_err("run_blocking returned");
    assert_eq!(reason.downcast_ref::<String>().map(String::as_str), Some(CLOCK_STOPPED));

    check_three_cycles(&timeline.borrow());
}
