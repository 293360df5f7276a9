//! Side effects returned by the reducer, executed by EffectRunner.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render,
    /// Fires the host's ready signal, which starts any installed ticker.
    SignalReady,
}
