//! Recording stand-ins for the hardware seams, shared by the unit tests.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::console::{Console, ConsoleError};
use crate::gate::CallGate;
use crate::latch::ButtonLatch;
use crate::sleep::DeepSleep;
use crate::status::{SleepError, SromStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Call(u32, Option<u32>),
    Pin(bool),
    Sleep { led_high: bool },
    ConsoleInit,
    ConsoleDeinit,
    Print(String),
    DelayNs(u32),
    DelayUs(u32),
    DelayMs(u32),
}

/// Everything the mocks did, in order.
#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Op>>>);

impl Trace {
    pub fn push(&self, op: Op) {
        self.0.borrow_mut().push(op);
    }

    pub fn ops(&self) -> Vec<Op> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn calls(&self) -> Vec<(u32, Option<u32>)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Call(d0, d1) => Some((*d0, *d1)),
                _ => None,
            })
            .collect()
    }

    pub fn sleeps(&self) -> Vec<bool> {
        self.0
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Sleep { led_high } => Some(*led_high),
                _ => None,
            })
            .collect()
    }

    /// Console output concatenated, regardless of how it was chunked.
    pub fn text(&self) -> String {
        self.0
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Print(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

pub struct MockGate {
    trace: Trace,
    replies: VecDeque<SromStatus>,
}

impl MockGate {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            replies: VecDeque::new(),
        }
    }

    /// Queues the status of the next call. Calls succeed once the queue runs dry.
    pub fn reply(mut self, status: SromStatus) -> Self {
        self.replies.push_back(status);
        self
    }

    fn next(&mut self) -> SromStatus {
        self.replies.pop_front().unwrap_or(SromStatus::SUCCEEDED)
    }
}

impl CallGate for MockGate {
    fn call(&mut self, data0: u32) -> SromStatus {
        self.trace.push(Op::Call(data0, None));
        self.next()
    }

    fn call_2(&mut self, data0: u32, data1: u32) -> SromStatus {
        self.trace.push(Op::Call(data0, Some(data1)));
        self.next()
    }
}

/// Output pin whose level is visible to the other mocks.
pub struct MockPin {
    trace: Trace,
    level: Rc<Cell<bool>>,
}

impl MockPin {
    pub fn new(trace: &Trace, level: &Rc<Cell<bool>>) -> Self {
        Self {
            trace: trace.clone(),
            level: level.clone(),
        }
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.level.set(false);
        self.trace.push(Op::Pin(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.level.set(true);
        self.trace.push(Op::Pin(true));
        Ok(())
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.level.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.level.get())
    }
}

pub struct MockSleep {
    trace: Trace,
    led: Rc<Cell<bool>>,
    results: VecDeque<Result<(), SleepError>>,
    wake_press: Option<Rc<ButtonLatch>>,
}

impl MockSleep {
    pub fn new(trace: &Trace, led: &Rc<Cell<bool>>) -> Self {
        Self {
            trace: trace.clone(),
            led: led.clone(),
            results: VecDeque::new(),
            wake_press: None,
        }
    }

    /// Latches a button 2 press whenever the core wakes up.
    pub fn wake_with(mut self, latch: &Rc<ButtonLatch>) -> Self {
        self.wake_press = Some(latch.clone());
        self
    }

    /// Makes the next `n` attempts fail with `err`.
    pub fn refuse(mut self, n: usize, err: SleepError) -> Self {
        self.results.extend(core::iter::repeat(Err(err)).take(n));
        self
    }
}

impl DeepSleep for MockSleep {
    fn enter_deep_sleep(&mut self) -> Result<(), SleepError> {
        self.trace.push(Op::Sleep {
            led_high: self.led.get(),
        });
        let result = self.results.pop_front().unwrap_or(Ok(()));
        if let (Ok(()), Some(latch)) = (result, &self.wake_press) {
            latch.button2().post();
        }
        result
    }
}

pub struct MockConsole {
    trace: Trace,
    up: bool,
    init_results: VecDeque<Result<(), ConsoleError>>,
}

impl MockConsole {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            up: true,
            init_results: VecDeque::new(),
        }
    }

    pub fn fail_init(mut self) -> Self {
        self.init_results.push_back(Err(ConsoleError));
        self
    }
}

impl core::fmt::Write for MockConsole {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        if self.up {
            self.trace.push(Op::Print(s.to_string()));
        }
        Ok(())
    }
}

impl Console for MockConsole {
    fn init(&mut self) -> Result<(), ConsoleError> {
        self.trace.push(Op::ConsoleInit);
        let result = self.init_results.pop_front().unwrap_or(Ok(()));
        self.up = result.is_ok();
        result
    }

    fn deinit(&mut self) {
        self.trace.push(Op::ConsoleDeinit);
        self.up = false;
    }
}

pub struct MockDelay {
    trace: Trace,
    ms_delays: u32,
    /// Posts button 1 to the latch when the n-th millisecond delay ends.
    press_after: Option<(Rc<ButtonLatch>, u32)>,
}

impl MockDelay {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            ms_delays: 0,
            press_after: None,
        }
    }

    pub fn press_after(mut self, latch: &Rc<ButtonLatch>, delays: u32) -> Self {
        self.press_after = Some((latch.clone(), delays));
        self
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.trace.push(Op::DelayNs(ns));
    }

    async fn delay_us(&mut self, us: u32) {
        self.trace.push(Op::DelayUs(us));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.trace.push(Op::DelayMs(ms));
        self.ms_delays += 1;
        if let Some((latch, n)) = &self.press_after {
            if self.ms_delays == *n {
                latch.button1().post();
            }
        }
    }
}
