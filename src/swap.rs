use crate::config::{ConfigError, InitParams, resolve_policy};
use crate::gate::CorsGate;
use crate::policy::CorsPolicy;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Reconfigurable handle to a [`CorsGate`].
///
/// Readers take a snapshot with [`SharedGate::load`] and keep evaluating
/// against it even if a new policy is published meanwhile. Publishing
/// replaces the whole gate in one pointer swap.
#[derive(Debug)]
pub struct SharedGate {
    current: ArcSwap<CorsGate>,
}

impl SharedGate {
    pub fn new(gate: CorsGate) -> Self {
        Self {
            current: ArcSwap::from_pointee(gate),
        }
    }

    pub fn from_policy(policy: CorsPolicy) -> Self {
        Self::new(CorsGate::new(policy))
    }

    pub fn load(&self) -> Arc<CorsGate> {
        self.current.load_full()
    }

    pub fn replace(&self, policy: CorsPolicy) {
        self.current.store(Arc::new(CorsGate::new(policy)));
        tracing::info!("cors policy replaced");
    }

    /// Re-resolves the policy from `params` against the current one and
    /// publishes the result. Returns the diagnostics recorded on the way.
    pub fn reinitialize(&self, params: &InitParams) -> Vec<ConfigError> {
        let current = self.load();
        let resolution = resolve_policy(current.policy(), params);
        self.replace(resolution.policy);
        resolution.diagnostics
    }
}

#[cfg(test)]
#[path = "swap_test.rs"]
mod swap_test;
