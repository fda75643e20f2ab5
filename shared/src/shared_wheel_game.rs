use serde::{Serialize, Deserialize};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::WheelError;
use crate::validation::validate_name;

// Wheel geometry. Angles are in degrees, measured clockwise from the positive
// x axis in screen coordinates (y grows downward), the canvas convention.
pub const WHEEL_SEGMENTS: u8 = 8;
pub const SEGMENT_ANGLE: f64 = 360.0 / WHEEL_SEGMENTS as f64;
pub const POINTER_ANGLE: f64 = 270.0; // top edge of the wheel on screen
pub const FULL_SPINS: u32 = 5;

pub const EVEN_OUTCOMES: [u8; 4] = [2, 4, 6, 8];
pub const ODD_OUTCOMES: [u8; 4] = [1, 3, 5, 7];

// Default timings for the reveal sequence
pub const SPIN_DURATION_MS: u32 = 4000;
pub const HIGHLIGHT_PERIOD_MS: u32 = 500;

/// A validated name, ready to be handed to the spin screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInput {
    name: String,
}

impl SessionInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recovers the name carried to the spin screen.
    pub fn from_entry(name: Option<&str>) -> Result<Self, WheelError> {
        let name = name.ok_or(WheelError::MissingNameOnEntry)?;
        submit_name(name).map_err(|_| WheelError::MissingNameOnEntry)
    }
}

/// Commits the text of the name form. Blank text is rejected and nothing
/// is handed on.
pub fn submit_name(text: &str) -> Result<SessionInput, WheelError> {
    validate_name(text)?;
    Ok(SessionInput { name: text.to_string() })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of_len(len: usize) -> Self {
        if len % 2 == 0 { Parity::Even } else { Parity::Odd }
    }

    pub fn of_value(value: u8) -> Self {
        Self::of_len(value as usize)
    }

    pub fn outcomes(self) -> [u8; 4] {
        match self {
            Parity::Even => EVEN_OUTCOMES,
            Parity::Odd => ODD_OUTCOMES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

/// Length of a name as the browser counts it, in UTF-16 code units.
/// Characters outside the BMP count twice.
pub fn name_length(name: &str) -> usize {
    name.encode_utf16().count()
}

/// Segments eligible for a name, picked by the parity of its length.
pub fn outcome_set(name: &str) -> [u8; 4] {
    Parity::of_len(name_length(name)).outcomes()
}

/// Source of the single random draw made per spin.
pub trait RandomSource {
    /// Returns an index in `0..len`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<SmallRng> {
    pub fn from_entropy() -> Self {
        RngSource(SmallRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Draws the winning segment for `name`. The result always shares the
/// parity of the name's length.
pub fn select_outcome<R: RandomSource + ?Sized>(name: &str, rng: &mut R) -> Result<u8, WheelError> {
    if validate_name(name).is_err() {
        return Err(WheelError::MissingNameOnEntry);
    }
    let outcomes = outcome_set(name);
    let index = rng.pick(outcomes.len()) % outcomes.len();
    Ok(outcomes[index])
}

/// Start angle of a 1-based segment on the unrotated wheel.
pub fn segment_start_angle(segment: u8) -> f64 {
    (f64::from(segment) - 1.0) * SEGMENT_ANGLE
}

pub fn segment_center_angle(segment: u8) -> f64 {
    segment_start_angle(segment) + SEGMENT_ANGLE / 2.0
}

/// Total clockwise rotation, from the wheel's zero orientation, that brings
/// the centre of `chosen` under the pointer after `FULL_SPINS` extra turns.
pub fn compute_rotation(chosen: u8) -> f64 {
    let alignment = (POINTER_ANGLE - segment_center_angle(chosen) + 360.0).rem_euclid(360.0);
    f64::from(FULL_SPINS) * 360.0 + alignment
}

/// Segment resting under the pointer once the wheel is rotated by `rotation`.
pub fn segment_under_pointer(rotation: f64) -> u8 {
    let wheel_angle = (POINTER_ANGLE - rotation).rem_euclid(360.0);
    let index = (wheel_angle / SEGMENT_ANGLE).floor() as u8;
    index.min(WHEEL_SEGMENTS - 1) + 1
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Angle shown `elapsed_ms` into a spin animated from `from` to `to`.
/// Lands exactly on `to` once the duration is over.
pub fn eased_rotation(from: f64, to: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return to;
    }
    let progress = (elapsed_ms / duration_ms).max(0.0);
    from + (to - from) * ease_out_cubic(progress)
}

/// Durations of the reveal sequence, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelTiming {
    pub spin_duration_ms: u32,
    pub highlight_period_ms: u32,
}

impl Default for WheelTiming {
    fn default() -> Self {
        Self {
            spin_duration_ms: SPIN_DURATION_MS,
            highlight_period_ms: HIGHLIGHT_PERIOD_MS,
        }
    }
}

impl WheelTiming {
    /// Replaces zero durations with the defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            spin_duration_ms: if self.spin_duration_ms == 0 { defaults.spin_duration_ms } else { self.spin_duration_ms },
            highlight_period_ms: if self.highlight_period_ms == 0 { defaults.highlight_period_ms } else { self.highlight_period_ms },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Idle,
    Spinning,
    Settled,
}

/// Timer work the UI driver must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Drop every live timer from earlier spins.
    CancelTimers,
    /// Call [`SpinEngine::complete_spin`] with `generation` after `delay_ms`.
    ScheduleSettle { generation: u64, delay_ms: u32 },
    /// Call [`SpinEngine::toggle_highlight`] with `generation` every `period_ms`.
    StartHighlight { generation: u64, period_ms: u32 },
}

/// Everything the renderer needs to draw the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinFrame {
    pub rotation_degrees: f64,
    pub reveal_state: RevealState,
    pub highlight: bool,
    pub chosen: Option<u8>,
}

/// Drives one session on the spin screen: Idle -> Spinning -> Settled, and
/// Settled -> Spinning again on every new request. Each spin gets a fresh
/// generation; timer callbacks carrying an older generation are ignored.
#[derive(Debug, Clone)]
pub struct SpinEngine {
    input: SessionInput,
    timing: WheelTiming,
    state: RevealState,
    generation: u64,
    chosen: Option<u8>,
    rotation: f64,
    highlight: bool,
    started_at_ms: f64,
}

impl SpinEngine {
    /// Opens the spin screen for `name`. A missing or blank name means the
    /// caller must send the user back to the name form.
    pub fn enter(name: Option<&str>, timing: WheelTiming) -> Result<Self, WheelError> {
        Ok(Self::new(SessionInput::from_entry(name)?, timing))
    }

    pub fn new(input: SessionInput, timing: WheelTiming) -> Self {
        Self {
            input,
            timing: timing.sanitized(),
            state: RevealState::Idle,
            generation: 0,
            chosen: None,
            rotation: 0.0,
            highlight: false,
            started_at_ms: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        self.input.name()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn timing(&self) -> WheelTiming {
        self.timing
    }

    pub fn can_spin(&self) -> bool {
        self.state != RevealState::Spinning
    }

    pub fn request_spin<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        now_ms: f64,
    ) -> Result<Vec<TimerCommand>, WheelError> {
        if !self.can_spin() {
            log::warn!("Spin requested while generation {} is still spinning", self.generation);
            return Err(WheelError::SpinInProgress);
        }

        let chosen = select_outcome(self.name(), rng)?;
        self.generation += 1;
        self.chosen = Some(chosen);
        self.rotation = compute_rotation(chosen);
        self.state = RevealState::Spinning;
        self.highlight = false;
        self.started_at_ms = now_ms;

        log::debug!(
            "Spin {} started: segment {} at {} degrees",
            self.generation, chosen, self.rotation
        );

        Ok(vec![
            TimerCommand::CancelTimers,
            TimerCommand::ScheduleSettle {
                generation: self.generation,
                delay_ms: self.timing.spin_duration_ms,
            },
        ])
    }

    /// Handles the end-of-spin timer. Fires early are rescheduled for the
    /// remaining time so the wheel never settles before the full duration.
    pub fn complete_spin(&mut self, generation: u64, now_ms: f64) -> Vec<TimerCommand> {
        if self.state != RevealState::Spinning || generation != self.generation {
            log::debug!("Ignoring settle for spin {} (current {})", generation, self.generation);
            return Vec::new();
        }

        let duration = f64::from(self.timing.spin_duration_ms);
        let elapsed = now_ms - self.started_at_ms;
        if elapsed < duration {
            // a clock that stepped backwards never pushes past one full duration
            let remaining = (duration - elapsed).min(duration).ceil() as u32;
            return vec![TimerCommand::ScheduleSettle { generation, delay_ms: remaining.max(1) }];
        }

        self.state = RevealState::Settled;
        self.highlight = false;
        if let Some(chosen) = self.chosen {
            log::info!("Wheel settled on {} for {}", chosen, self.name());
        }

        vec![TimerCommand::StartHighlight {
            generation,
            period_ms: self.timing.highlight_period_ms,
        }]
    }

    /// Flips the highlight flag. Returns whether the tick was applied.
    pub fn toggle_highlight(&mut self, generation: u64) -> bool {
        if self.state != RevealState::Settled || generation != self.generation {
            log::debug!("Ignoring highlight tick for spin {}", generation);
            return false;
        }
        self.highlight = !self.highlight;
        true
    }

    pub fn frame(&self) -> SpinFrame {
        SpinFrame {
            rotation_degrees: self.rotation,
            reveal_state: self.state,
            highlight: self.highlight,
            chosen: self.chosen,
        }
    }
}

// === Navigation Types ===

/// Query string of the spin screen, `?name=...`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinWheelQuery {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<&SessionInput> for SpinWheelQuery {
    fn from(input: &SessionInput) -> Self {
        Self { name: Some(input.name().to_string()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    struct FixedPick(usize);

    impl RandomSource for FixedPick {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn engine(name: &str) -> SpinEngine {
        SpinEngine::enter(Some(name), WheelTiming::default()).unwrap()
    }

    #[test]
    fn test_submit_name() {
        assert_eq!(submit_name("Ann").unwrap().name(), "Ann");
        assert_eq!(submit_name(" Ann ").unwrap().name(), " Ann ");
        assert_eq!(submit_name("   "), Err(WheelError::EmptyName));
        assert_eq!(submit_name(""), Err(WheelError::EmptyName));
    }

    #[test]
    fn test_outcome_parity_matches_name_length() {
        let mut rng = RngSource(StdRng::seed_from_u64(42));
        let names = ["A", "Bo", "Ann", "Lena", "Maxine", "Zoë", "José Luis", "  x ", "名前"];
        for name in names {
            let expected = Parity::of_len(name_length(name));
            for _ in 0..200 {
                let chosen = select_outcome(name, &mut rng).unwrap();
                assert!((1..=WHEEL_SEGMENTS).contains(&chosen));
                assert_eq!(Parity::of_value(chosen), expected, "{} drew {}", name, chosen);
            }
        }
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert_eq!(name_length("Ann"), 3);
        assert_eq!(name_length("Zoë"), 3);
        assert_eq!(name_length("😀Al"), 4);
        assert_eq!(outcome_set("😀Al"), EVEN_OUTCOMES);
        assert_eq!(outcome_set("😀"), EVEN_OUTCOMES);
        assert_eq!(outcome_set("😀A"), ODD_OUTCOMES);

        for index in 0..EVEN_OUTCOMES.len() {
            assert_eq!(select_outcome("😀Al", &mut FixedPick(index)), Ok(EVEN_OUTCOMES[index]));
        }
    }

    #[test]
    fn test_even_name_never_draws_three() {
        let mut rng = RngSource(StdRng::seed_from_u64(7));
        let mut seen = [false; 9];
        for _ in 0..1000 {
            let chosen = select_outcome("Maxine", &mut rng).unwrap();
            assert_ne!(chosen, 3);
            seen[chosen as usize] = true;
        }
        // every even segment comes up eventually
        assert!(EVEN_OUTCOMES.iter().all(|&s| seen[s as usize]));
    }

    #[test]
    fn test_select_outcome_uses_random_index() {
        for (index, expected) in ODD_OUTCOMES.iter().enumerate() {
            assert_eq!(select_outcome("Ann", &mut FixedPick(index)), Ok(*expected));
        }
        assert_eq!(select_outcome("", &mut FixedPick(0)), Err(WheelError::MissingNameOnEntry));
        assert_eq!(select_outcome("  ", &mut FixedPick(0)), Err(WheelError::MissingNameOnEntry));
    }

    #[test]
    fn test_rotation_aligns_with_pointer() {
        for chosen in 1..=WHEEL_SEGMENTS {
            let rotation = compute_rotation(chosen);
            let center = (f64::from(chosen) - 1.0) * 45.0 + 22.5;
            let alignment = (270.0 - center + 360.0) % 360.0;

            assert_eq!(rotation % 360.0, alignment);
            assert!(rotation >= 1800.0);
            assert_eq!(rotation, compute_rotation(chosen));
            assert_eq!(segment_under_pointer(rotation), chosen);
        }
    }

    #[test]
    fn test_ann_landing_on_five() {
        let rotation = compute_rotation(5);
        assert_eq!(rotation % 360.0, 67.5);
        assert_eq!(rotation, 1867.5);

        let mut engine = engine("Ann");
        engine.request_spin(&mut FixedPick(2), 0.0).unwrap();
        let frame = engine.frame();
        assert_eq!(frame.chosen, Some(5));
        assert_eq!(frame.rotation_degrees, 1867.5);
    }

    #[test]
    fn test_enter_without_name() {
        assert_eq!(SpinEngine::enter(None, WheelTiming::default()).err(), Some(WheelError::MissingNameOnEntry));
        assert_eq!(SpinEngine::enter(Some(""), WheelTiming::default()).err(), Some(WheelError::MissingNameOnEntry));
        assert_eq!(SpinEngine::enter(Some(" \t"), WheelTiming::default()).err(), Some(WheelError::MissingNameOnEntry));
    }

    #[test]
    fn test_spin_settles_only_after_duration() {
        let mut engine = engine("Ann");
        assert_eq!(engine.state(), RevealState::Idle);
        assert_eq!(engine.frame().chosen, None);

        let commands = engine.request_spin(&mut FixedPick(0), 1000.0).unwrap();
        assert_eq!(engine.state(), RevealState::Spinning);
        assert_eq!(
            commands,
            vec![
                TimerCommand::CancelTimers,
                TimerCommand::ScheduleSettle { generation: 1, delay_ms: SPIN_DURATION_MS },
            ]
        );

        // early fire is pushed back for the remainder
        let commands = engine.complete_spin(1, 4500.0);
        assert_eq!(engine.state(), RevealState::Spinning);
        assert_eq!(commands, vec![TimerCommand::ScheduleSettle { generation: 1, delay_ms: 500 }]);

        let commands = engine.complete_spin(1, 5000.0);
        assert_eq!(engine.state(), RevealState::Settled);
        assert_eq!(
            commands,
            vec![TimerCommand::StartHighlight { generation: 1, period_ms: HIGHLIGHT_PERIOD_MS }]
        );
    }

    #[test]
    fn test_settle_delay_bounded_when_clock_goes_back() {
        let mut engine = engine("Ann");
        engine.request_spin(&mut FixedPick(0), 10_000.0).unwrap();

        let commands = engine.complete_spin(1, 2_000.0);
        assert_eq!(engine.state(), RevealState::Spinning);
        assert_eq!(commands, vec![TimerCommand::ScheduleSettle { generation: 1, delay_ms: SPIN_DURATION_MS }]);

        engine.complete_spin(1, 14_000.0);
        assert_eq!(engine.state(), RevealState::Settled);
    }

    #[test]
    fn test_no_spin_while_spinning() {
        let mut engine = engine("Bo");
        engine.request_spin(&mut FixedPick(1), 0.0).unwrap();
        let before = engine.frame();

        assert_eq!(engine.request_spin(&mut FixedPick(3), 10.0), Err(WheelError::SpinInProgress));
        assert_eq!(engine.frame(), before);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_highlight_toggles_after_settle() {
        let mut engine = engine("Bo");
        engine.request_spin(&mut FixedPick(1), 0.0).unwrap();
        assert!(!engine.toggle_highlight(1));

        engine.complete_spin(1, f64::from(SPIN_DURATION_MS));
        assert!(!engine.frame().highlight);
        assert!(engine.toggle_highlight(1));
        assert!(engine.frame().highlight);
        assert!(engine.toggle_highlight(1));
        assert!(!engine.frame().highlight);
    }

    #[test]
    fn test_restart_cancels_previous_cycle() {
        let mut engine = engine("Ann");
        engine.request_spin(&mut FixedPick(0), 0.0).unwrap();
        engine.complete_spin(1, 4000.0);
        engine.toggle_highlight(1);
        assert!(engine.frame().highlight);

        let commands = engine.request_spin(&mut FixedPick(3), 6000.0).unwrap();
        assert_eq!(commands[0], TimerCommand::CancelTimers);
        assert_eq!(commands[1], TimerCommand::ScheduleSettle { generation: 2, delay_ms: SPIN_DURATION_MS });
        assert_eq!(engine.state(), RevealState::Spinning);
        assert!(!engine.frame().highlight);
        assert_eq!(engine.frame().chosen, Some(7));

        // leftovers from the first cycle do nothing
        assert!(!engine.toggle_highlight(1));
        assert!(engine.complete_spin(1, 20_000.0).is_empty());
        assert_eq!(engine.state(), RevealState::Spinning);

        engine.complete_spin(2, 10_000.0);
        assert_eq!(engine.state(), RevealState::Settled);
        assert!(!engine.toggle_highlight(1));
        assert!(engine.toggle_highlight(2));
    }

    #[test]
    fn test_eased_rotation() {
        let to = compute_rotation(3);
        assert_eq!(eased_rotation(90.0, to, 0.0, 4000.0), 90.0);
        assert_eq!(eased_rotation(90.0, to, 4000.0, 4000.0), to);
        assert_eq!(eased_rotation(90.0, to, 9000.0, 4000.0), to);
        assert_eq!(eased_rotation(90.0, to, 10.0, 0.0), to);

        let quarter = eased_rotation(0.0, 1000.0, 1000.0, 4000.0);
        let half = eased_rotation(0.0, 1000.0, 2000.0, 4000.0);
        assert!(quarter > 250.0 && half > quarter && half < 1000.0);
    }

    #[test]
    fn test_timing_sanitized() {
        let timing = WheelTiming { spin_duration_ms: 0, highlight_period_ms: 250 }.sanitized();
        assert_eq!(timing.spin_duration_ms, SPIN_DURATION_MS);
        assert_eq!(timing.highlight_period_ms, 250);

        let engine = SpinEngine::enter(Some("Ann"), WheelTiming { spin_duration_ms: 1000, highlight_period_ms: 0 }).unwrap();
        assert_eq!(engine.timing().spin_duration_ms, 1000);
        assert_eq!(engine.timing().highlight_period_ms, HIGHLIGHT_PERIOD_MS);
    }

    #[test]
    fn test_query_carries_raw_name() {
        let input = submit_name("Ann Marie").unwrap();
        let query = SpinWheelQuery::from(&input);
        assert_eq!(query.name.as_deref(), Some("Ann Marie"));
        assert_eq!(SpinWheelQuery::default().name, None);
    }

    #[test]
    fn test_blank_query_name_is_missing() {
        let query = SpinWheelQuery { name: Some("   ".to_string()) };
        assert_eq!(SessionInput::from_entry(query.name.as_deref()), Err(WheelError::MissingNameOnEntry));

        let input = SessionInput::from_entry(Some("Bo")).unwrap();
        assert_eq!(input, submit_name("Bo").unwrap());
        assert_eq!(SpinEngine::new(input, WheelTiming::default()).name(), "Bo");
    }
}
