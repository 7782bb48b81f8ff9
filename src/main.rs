//! Galleria - interactive 3D virtual-tour viewer
//!
//! Loads the tour manifest's resources through the async pipeline, attaches
//! the scene, then drives the navigation controller and camera transition
//! engine through the opening sequence and a scripted pass over every POI.
//! Rendering is left to an external engine; this binary exercises the tour
//! core headlessly and logs what the camera does.

mod manifest;
mod scene;
mod state;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use galleria_assets::{Asset, ResourceLoader};
use galleria_core::{Mat4, TickClock};
use galleria_tour::{CameraRig, NavigationController, TransitionEngine};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::manifest::TourManifest;
use crate::scene::SceneRoot;
use crate::state::AppState;

const DEFAULT_MANIFEST: &str = "assets/tour.toml";
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    info!("starting galleria");

    let manifest_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));

    let manifest = if manifest_path.exists() {
        TourManifest::load(&manifest_path)?
    } else {
        warn!(
            "no manifest at {}, using the built-in sample tour",
            manifest_path.display()
        );
        TourManifest::sample()
    };

    let base_path = manifest_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    run(manifest, base_path)
}

fn run(manifest: TourManifest, base_path: PathBuf) -> Result<()> {
    let state = Arc::new(Mutex::new(AppState::default()));

    // Loading domain: an owned runtime, one task per resource.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    let mut loader = ResourceLoader::new(base_path);
    let observer_state = Arc::clone(&state);
    loader.set_progress_observer(move |progress| {
        if let Ok(mut state) = observer_state.lock() {
            state.set_progress(progress.fraction);
        }
        info!(
            "progress {:.0}% ({}/{})",
            progress.fraction * 100.0,
            progress.loaded,
            progress.total
        );
    });

    if let Err(e) = runtime.block_on(loader.load_all(&manifest.resources)) {
        if let Ok(mut state) = state.lock() {
            state.mark_failed(e.to_string());
            error!("{}", state.describe());
        }
        return Err(e).context("resource loading failed; scene left unpopulated");
    }

    // Scene attachment: the model goes under the scene root, one anchor per
    // POI as a child positioned relative to it.
    let scene_name = &manifest.tour.scene_resource;
    let Some(model) = loader.get(scene_name).and_then(Asset::as_model) else {
        bail!("loaded table has no model named '{scene_name}'");
    };
    let mut scene = SceneRoot::new();
    scene.attach_model(scene_name, model, Mat4::IDENTITY);
    for poi in &manifest.pois {
        scene.attach_anchor(&poi.id, poi.anchor_position);
    }

    if let Ok(mut state) = state.lock() {
        state.mark_ready();
        info!("scene {}", state.describe());
    }

    let config = manifest.tour.config.clone();
    let mut nav = NavigationController::new(manifest.pois);
    let mut engine = TransitionEngine::new(config.establishing_pose);
    let mut rig = CameraRig::new(&config, 16.0 / 9.0);

    // Opening: instant establishing shot, then after the settling delay an
    // automatic fly-to the first POI through the same engine as user
    // activations. The scripted activations after it land mid-flight on
    // purpose, superseding the transition in progress.
    engine.place(config.establishing_pose);
    let mut schedule: Vec<(f32, String)> = Vec::new();
    let mut at = config.settle_delay;
    for poi in nav.pois() {
        schedule.push((at, poi.id.clone()));
        at += config.transition_duration * 0.66;
    }
    let end_time = at + config.transition_duration + 0.5;

    let mut clock = TickClock::default();
    let mut next = 0;
    while clock.now() < end_time {
        clock.update(FRAME_DT);
        let now = clock.now();

        while next < schedule.len() && schedule[next].0 <= now {
            let poi_id = schedule[next].1.clone();
            next += 1;
            if let Some(request) = nav.activate(&poi_id) {
                info!(
                    "activated '{}', flying to its pose over {:.1}s",
                    request.poi_id, config.transition_duration
                );
                engine.request_transition(request.pose, config.transition_duration, now);
            }
        }

        if engine.update(now) {
            rig.recompute_projection();
            info!("transition complete at t={now:.2}s, projection recomputed");
        }
        rig.apply_pose(engine.sample(now));

        if clock.frame_count() % 60 == 0 {
            let pose = rig.pose();
            info!(
                "t={now:5.2}s camera at ({:.2}, {:.2}, {:.2}) zoom {:.2} active={:?}",
                pose.position.x,
                pose.position.y,
                pose.position.z,
                pose.zoom,
                nav.active_poi()
            );
        }
    }

    let final_pose = rig.pose();
    info!(
        "tour script finished: active POI {:?}, camera zoom {:.2}, {} anchors attached",
        nav.active_poi(),
        final_pose.zoom,
        scene.anchors().len()
    );

    Ok(())
}
