//! Fluent builder for constructing a [`Sim`].

use bdi_agent::Agent;
use bdi_core::SimConfig;
use bdi_scene::Scene;

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, tick duration, …
/// - [`Scene`]: the layout the agent was placed in
/// - [`Agent`]: from [`bdi_agent::AgentBuilder`]
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, scene, agent).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    scene:  Scene,
    agent:  Agent,
}

impl SimBuilder {
    pub fn new(config: SimConfig, scene: Scene, agent: Agent) -> Self {
        Self { config, scene, agent }
    }

    /// Validate the config and that the agent stands in `scene`, then return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let room = self.agent.motion().current_room();
        if self.scene.room(room).is_none() {
            return Err(SimError::Config(format!(
                "agent {:?} starts in {room}, which is not in the scene",
                self.agent.name()
            )));
        }

        Ok(Sim {
            clock:  self.config.make_clock(),
            config: self.config,
            scene:  self.scene,
            agent:  self.agent,
        })
    }
}
