//! Deploy result types

use std::fmt;

/// The three steps run after configuration, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    ContainerImages,
    ServerArtifact,
    Stack,
}

impl DeployStep {
    pub const ALL: [DeployStep; 3] = [
        DeployStep::ContainerImages,
        DeployStep::ServerArtifact,
        DeployStep::Stack,
    ];
}

impl fmt::Display for DeployStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployStep::ContainerImages => write!(f, "container images"),
            DeployStep::ServerArtifact => write!(f, "sync endpoint build"),
            DeployStep::Stack => write!(f, "stack deployment"),
        }
    }
}

/// Which steps succeeded. A failed step never stops the following ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    pub images_built: bool,
    pub server_built: bool,
    pub stack_deployed: bool,
}

impl DeployReport {
    pub fn succeeded(&self, step: DeployStep) -> bool {
        match step {
            DeployStep::ContainerImages => self.images_built,
            DeployStep::ServerArtifact => self.server_built,
            DeployStep::Stack => self.stack_deployed,
        }
    }

    pub fn failed_steps(&self) -> Vec<DeployStep> {
        DeployStep::ALL
            .into_iter()
            .filter(|step| !self.succeeded(*step))
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.failed_steps().is_empty()
    }
}
