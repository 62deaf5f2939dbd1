// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Powers a panel once some other part of the world is ready.

use crate::geometry::Quaternion;
use crate::memory::{Field, MemoryError, PanelId, PanelMemory, PanelMemoryExt};
use crate::watchdog::Watchdog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_SLEEP: Duration = Duration::from_secs(1);

/// What the watchdog waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "panel", rename_all = "snake_case")]
pub enum Trigger {
    /// The panel reports itself solved.
    Solved(PanelId),
    /// The object has turned so its orientation has a positive z component.
    Facing(PanelId),
}

impl Trigger {
    fn fired(&self, memory: &dyn PanelMemory) -> Result<bool, MemoryError> {
        match *self {
            Trigger::Solved(panel) => Ok(memory.read::<i32>(panel, Field::Solved)? != 0),
            Trigger::Facing(panel) => {
                Ok(memory.read::<Quaternion>(panel, Field::Orientation)?.z > 0.0)
            }
        }
    }
}

pub struct PowerWatchdog {
    memory: Arc<dyn PanelMemory>,
    trigger: Trigger,
    target: PanelId,
    /// Keep the target powered off until the trigger fires.
    hold_off: bool,
    sleep_time: Duration,
    terminated: bool,
}

impl PowerWatchdog {
    pub fn new(memory: Arc<dyn PanelMemory>, trigger: Trigger, target: PanelId) -> Self {
        Self {
            memory,
            trigger,
            target,
            hold_off: false,
            sleep_time: DEFAULT_SLEEP,
            terminated: false,
        }
    }

    pub fn with_hold_off(mut self, hold_off: bool) -> Self {
        self.hold_off = hold_off;
        self
    }

    pub fn with_sleep_time(mut self, sleep_time: Duration) -> Self {
        self.sleep_time = sleep_time;
        self
    }

    /// The keep's big panel stays dark until the hedge maze is solved.
    pub fn keep(memory: Arc<dyn PanelMemory>) -> Self {
        Self::new(memory, Trigger::Solved(PanelId(0x01BE9)), PanelId(0x03317)).with_hold_off(true)
    }

    pub fn treehouse(memory: Arc<dyn PanelMemory>) -> Self {
        Self::new(memory, Trigger::Solved(PanelId(0x03613)), PanelId(0x17DAE))
    }

    /// The town door powers up once its turntable faces the right way.
    pub fn town_door(memory: Arc<dyn PanelMemory>) -> Self {
        Self::new(memory, Trigger::Facing(PanelId(0x03BB0)), PanelId(0x28A69))
    }

    fn power(&self, level: f32) -> Result<(), MemoryError> {
        self.memory
            .write::<f32>(self.target, Field::Power, &[level, level])?;
        self.memory.request_redraw(self.target)
    }
}

impl Watchdog for PowerWatchdog {
    fn action(&mut self) -> Result<(), MemoryError> {
        if self.trigger.fired(self.memory.as_ref())? {
            self.power(1.0)?;
            info!(target_panel = %self.target, "powered");
            self.terminated = true;
        } else if self.hold_off {
            self.power(0.0)?;
        }
        Ok(())
    }

    fn sleep_time(&self) -> Duration {
        self.sleep_time
    }

    fn is_terminated(&self) -> bool {
        self.terminated
    }
}
