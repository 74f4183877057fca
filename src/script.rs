use anyhow::Context;
use cubepeel_core::{CameraFrame, FaceHandle, HitRecord, SwipeVector2D};
use glam::Vec3;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
struct ScriptFile {
    #[serde(default)]
    camera: Option<ScriptedCamera>,
    interactions: Vec<ScriptedInteraction>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct ScriptedCamera {
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

#[derive(Debug, Clone, Deserialize)]
struct ScriptedInteraction {
    swipe: [f32; 2],
    target: u64,
    normal: Vec3,
    #[serde(default)]
    camera: Option<ScriptedCamera>,
}

/// One swipe over one hit, ready to hand to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    pub swipe: SwipeVector2D,
    pub hit: HitRecord,
    pub frame: CameraFrame,
}

/// Interactions loaded from a JSON script.
#[derive(Debug)]
pub struct InteractionScript {
    steps: Vec<ScriptStep>,
}

impl InteractionScript {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        let file: ScriptFile = serde_json::from_str(contents)?;
        if file.interactions.is_empty() {
            anyhow::bail!("interaction script contains no interactions");
        }

        let default_frame = match file.camera {
            Some(camera) => camera.into_frame()?,
            None => CameraFrame::IDENTITY,
        };

        let steps = file
            .interactions
            .into_iter()
            .enumerate()
            .map(|(index, step)| -> anyhow::Result<ScriptStep> {
                let frame = match step.camera {
                    Some(camera) => camera.into_frame()?,
                    None => default_frame,
                };
                let hit = HitRecord::try_new(FaceHandle(step.target), step.normal)
                    .with_context(|| format!("interaction {index} has an invalid hit"))?;
                Ok(ScriptStep {
                    swipe: SwipeVector2D::from(step.swipe),
                    hit,
                    frame,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }
}

impl ScriptedCamera {
    fn into_frame(self) -> anyhow::Result<CameraFrame> {
        Ok(CameraFrame::try_new(self.forward, self.right, self.up)?)
    }
}
