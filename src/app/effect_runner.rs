//! Executes side effects returned by the reducer.

use std::sync::Arc;

use color_eyre::eyre::Result;

use crate::effect::Effect;
use crate::ports::{Host, Renderer};
use crate::state::AppState;

pub struct EffectRunner {
    host: Arc<dyn Host>,
}

impl EffectRunner {
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self { host }
    }

    pub fn run(
        &self,
        effects: Vec<Effect>,
        renderer: &mut dyn Renderer,
        state: &AppState,
    ) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::SignalReady => self.host.mark_ready(),
                Effect::Render => renderer.draw(state)?,
            }
        }
        Ok(())
    }
}
