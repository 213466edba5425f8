//! The control loop
//!
//! Owns every piece of mutable core state. Each consumed tick runs, in
//! order: button sampling, change dispatch in line order, one motion step.

use heapless::Vec;
use turnout_hal::WordStore;

use super::dispatch::Action;
use super::tick::TickCounter;
use crate::calibration::CalibrationStore;
use crate::config::{ConfigError, TriggerEdge, TurnoutConfig};
use crate::ids::{ButtonLine, LINE_COUNT};
use crate::input::{ButtonState, ButtonTracker};
use crate::servo::{Adjustment, ServoController};
use crate::traits::{DigitalInputs, ServoOutputs};

/// Actions dispatched during one tick, at most one per line
pub type TickActions = Vec<Action, LINE_COUNT>;

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopState {
    /// Waiting for a tick
    Idle,
    /// Running the work for one tick
    Processing,
}

/// Tick-driven controller composing buttons, servos and calibration
pub struct ControlLoop<'t, S, I, O> {
    ticks: &'t TickCounter,
    buttons: ButtonTracker,
    servos: ServoController,
    calibration: CalibrationStore<S>,
    inputs: I,
    outputs: O,
    trigger: TriggerEdge,
    state: LoopState,
}

impl<'t, S, I, O> ControlLoop<'t, S, I, O>
where
    S: WordStore,
    I: DigitalInputs,
    O: ServoOutputs,
{
    /// Load calibration and build the loop
    ///
    /// This is the only time the calibration record is read as a whole.
    /// An inconsistent configuration is rejected before the store is
    /// touched.
    pub fn new(
        config: &TurnoutConfig,
        ticks: &'t TickCounter,
        store: S,
        inputs: I,
        outputs: O,
    ) -> Result<Self, ConfigError> {
        config.validate().inspect_err(|e| warn!("inconsistent config: {:?}", e))?;

        let mut calibration = CalibrationStore::new(store, config.servo);
        let record = calibration.load();
        let servos = ServoController::new(config.servo, &record);

        Ok(Self {
            ticks,
            buttons: ButtonTracker::new(config.buttons.polarity),
            servos,
            calibration,
            inputs,
            outputs,
            trigger: config.buttons.trigger,
            state: LoopState::Idle,
        })
    }

    /// Flash every indicator for one tick
    ///
    /// Blocks until a tick arrives, so interrupts must already be running.
    pub fn lamp_test(&mut self) {
        self.outputs.set_all_indicators(true);
        while !self.ticks.take() {
            core::hint::spin_loop();
        }
        self.outputs.set_all_indicators(false);
    }

    /// Process at most one pending tick
    ///
    /// Returns the dispatched actions, or `None` if no tick was pending.
    pub fn poll(&mut self) -> Option<TickActions> {
        if !self.ticks.take() {
            return None;
        }

        self.state = LoopState::Processing;
        let actions = self.process_tick();
        self.state = LoopState::Idle;
        Some(actions)
    }

    /// Run forever, busy-polling the tick counter
    pub fn run(&mut self) -> ! {
        info!("control loop running");
        loop {
            if self.poll().is_none() {
                core::hint::spin_loop();
            }
        }
    }

    /// Do the work of one tick, without consuming from the counter
    pub fn process_tick(&mut self) -> TickActions {
        self.buttons.sample_all(&mut self.inputs);

        let mut actions = TickActions::new();
        for line in ButtonLine::ALL {
            if !self.buttons.is_changed(line) {
                continue;
            }
            if !self.triggers(line) {
                continue;
            }

            let action = Action::for_line(line);
            let outcome = self.apply(action);
            debug!("{:?} -> {:?}: {:?}", line, action, outcome);

            // One slot per line, so this cannot overflow
            let _ = actions.push(action);
        }

        self.servos.advance_all(&mut self.outputs);
        actions
    }

    /// Run one action against the servos
    pub fn apply(&mut self, action: Action) -> Adjustment {
        match action {
            Action::Widen => self.servos.widen(&mut self.calibration),
            Action::Narrow => self.servos.narrow(&mut self.calibration),
            Action::Toggle(channel) => self.servos.toggle(channel, &mut self.calibration),
        }
    }

    fn triggers(&self, line: ButtonLine) -> bool {
        match self.trigger {
            TriggerEdge::Any => true,
            TriggerEdge::Press => self.buttons.state(line) == ButtonState::Pressed,
        }
    }

    /// Current loop state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Button tracker
    pub fn buttons(&self) -> &ButtonTracker {
        &self.buttons
    }

    /// Servo controller
    pub fn servos(&self) -> &ServoController {
        &self.servos
    }

    /// Calibration store
    pub fn calibration(&self) -> &CalibrationStore<S> {
        &self.calibration
    }

    /// Input source
    pub fn inputs_mut(&mut self) -> &mut I {
        &mut self.inputs
    }

    /// Output sinks
    pub fn outputs(&self) -> &O {
        &self.outputs
    }
}
