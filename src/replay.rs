use crate::config::InteractionConfig;
use crate::interaction_log::{InteractionRecord, InteractionSummary, JsonlSink};
use crate::script::InteractionScript;
use anyhow::{Context, Result};
use cubepeel_core::{registry_from_file, FaceLayerRegistry};
use cubepeel_gesture::SwipeGestureMapper;
use cubepeel_interaction::InteractionController;
use cubepeel_picking::FaceResolver;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub struct ReplayConfig {
    pub interaction: InteractionConfig,
    pub faces: Option<PathBuf>,
    pub script: PathBuf,
    pub out: Option<PathBuf>,
}

pub fn run(cfg: ReplayConfig) -> Result<InteractionSummary> {
    let registry = match &cfg.faces {
        Some(path) => registry_from_file(path)
            .with_context(|| format!("failed to load face layout from {}", path.display()))?,
        None => FaceLayerRegistry::standard_cube(),
    };
    info!(faces = registry.len(), "Face registry ready");

    let script = InteractionScript::from_path(&cfg.script)
        .with_context(|| format!("failed to load script from {}", cfg.script.display()))?;

    let controller = InteractionController::new(
        FaceResolver::new(Arc::new(registry)).with_threshold(cfg.interaction.normal_threshold),
        SwipeGestureMapper::with_epsilon(cfg.interaction.degenerate_epsilon),
    );

    let summary = match &cfg.out {
        Some(path) => {
            let mut sink = JsonlSink::create(path)
                .with_context(|| format!("failed to create log {}", path.display()))?;
            replay_into(&controller, &script, &mut sink)?
        }
        None => {
            let stdout = std::io::stdout();
            let mut sink = JsonlSink::from_writer(stdout.lock());
            replay_into(&controller, &script, &mut sink)?
        }
    };

    info!(
        total = summary.total(),
        peels = summary.peels,
        rotations = summary.rotations,
        ignored = summary.ignored,
        "Replay finished"
    );
    Ok(summary)
}

fn replay_into<W: Write>(
    controller: &InteractionController,
    script: &InteractionScript,
    sink: &mut JsonlSink<W>,
) -> Result<InteractionSummary> {
    let mut summary = InteractionSummary::default();
    for (step, input) in script.steps().iter().enumerate() {
        let outcome = controller.handle(input.swipe, &input.hit, &input.frame);
        summary.record(&outcome);
        sink.write(&InteractionRecord { step, outcome })?;
    }
    sink.flush()?;
    Ok(summary)
}
