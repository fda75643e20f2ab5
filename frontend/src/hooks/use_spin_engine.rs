use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::{Interval, Timeout};
use rand::rngs::SmallRng;
use yew::prelude::*;
use shared::shared_wheel_game::*;

/// Live timers of the current spin. Dropping a handle cancels it.
#[derive(Default)]
struct SpinTimers {
    settle: Option<Timeout>,
    highlight: Option<Interval>,
    animation: Option<AnimationFrame>,
}

impl SpinTimers {
    fn cancel_all(&mut self) {
        self.settle = None;
        self.highlight = None;
        self.animation = None;
    }
}

#[derive(Clone)]
struct SpinDriver {
    engine: Rc<RefCell<SpinEngine>>,
    rng: Rc<RefCell<RngSource<SmallRng>>>,
    timers: Rc<RefCell<SpinTimers>>,
    frame: UseStateHandle<SpinFrame>,
    displayed_rotation: UseStateHandle<f64>,
}

impl SpinDriver {
    fn publish(&self) {
        self.frame.set(self.engine.borrow().frame());
    }

    fn request(&self) {
        let now = js_sys::Date::now();
        let resting = self.engine.borrow().frame().rotation_degrees;

        let result = {
            let mut rng = self.rng.borrow_mut();
            let mut engine = self.engine.borrow_mut();
            engine.request_spin(&mut *rng, now)
        };

        match result {
            Ok(commands) => {
                self.run(commands);
                self.publish();

                let (target, duration) = {
                    let engine = self.engine.borrow();
                    (engine.frame().rotation_degrees, f64::from(engine.timing().spin_duration_ms))
                };
                // Start from where the wheel rests, the target is still absolute
                self.animate(resting.rem_euclid(360.0), target, now, duration);
            }
            Err(e) => log::warn!("Spin request rejected: {}", e),
        }
    }

    fn run(&self, commands: Vec<TimerCommand>) {
        for command in commands {
            match command {
                TimerCommand::CancelTimers => self.timers.borrow_mut().cancel_all(),
                TimerCommand::ScheduleSettle { generation, delay_ms } => {
                    let driver = self.clone();
                    let timeout = Timeout::new(delay_ms, move || {
                        let follow_up = driver
                            .engine
                            .borrow_mut()
                            .complete_spin(generation, js_sys::Date::now());
                        driver.publish();
                        driver.run(follow_up);
                    });
                    self.timers.borrow_mut().settle = Some(timeout);
                }
                TimerCommand::StartHighlight { generation, period_ms } => {
                    let driver = self.clone();
                    let interval = Interval::new(period_ms, move || {
                        if driver.engine.borrow_mut().toggle_highlight(generation) {
                            driver.publish();
                        }
                    });
                    self.timers.borrow_mut().highlight = Some(interval);
                }
            }
        }
    }

    fn animate(&self, from: f64, to: f64, started_at: f64, duration_ms: f64) {
        let driver = self.clone();
        let frame = request_animation_frame(move |_| {
            let elapsed = js_sys::Date::now() - started_at;
            driver.displayed_rotation.set(eased_rotation(from, to, elapsed, duration_ms));
            if elapsed < duration_ms {
                driver.animate(from, to, started_at, duration_ms);
            }
        });
        self.timers.borrow_mut().animation = Some(frame);
    }
}

pub struct SpinHandle {
    pub frame: SpinFrame,
    /// Angle currently drawn, trailing `frame.rotation_degrees` while the
    /// wheel is turning.
    pub displayed_rotation: f64,
    pub request_spin: Callback<()>,
}

/// Owns the spin engine of one session and runs its timers. Everything is
/// cancelled when the component using it unmounts.
#[hook]
pub fn use_spin_engine(input: SessionInput, timing: WheelTiming) -> SpinHandle {
    let engine = use_mut_ref(move || SpinEngine::new(input, timing));
    let rng = use_mut_ref(RngSource::from_entropy);
    let timers = use_mut_ref(SpinTimers::default);
    let frame = {
        let engine = engine.clone();
        use_state(move || engine.borrow().frame())
    };
    let displayed_rotation = use_state(|| 0.0);

    {
        let timers = timers.clone();
        use_effect_with((), move |_| {
            move || timers.borrow_mut().cancel_all()
        });
    }

    let driver = SpinDriver {
        engine,
        rng,
        timers,
        frame: frame.clone(),
        displayed_rotation: displayed_rotation.clone(),
    };

    SpinHandle {
        frame: *frame,
        displayed_rotation: *displayed_rotation,
        request_spin: Callback::from(move |_: ()| driver.request()),
    }
}
