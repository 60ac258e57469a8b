//! Handler for the `scan` command.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use super::command::ScanArgs;
use super::console::{ConsoleNavigator, ConsoleNotifier, Handoff};
use super::output;
use crate::adapter::outbound::store::FileStore;
use crate::domain::{FlowState, ImageCandidate};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::{Navigator, Notifier};

/// Execute the scan command.
pub async fn execute(args: &ScanArgs, config: &Config) -> Result<ExitCode> {
    let store = Arc::new(FileStore::new(config.store.resolved_path()));
    let console = Arc::new(ConsoleNotifier::new());
    let navigator = Arc::new(ConsoleNavigator::new());
    let sink: Box<dyn Notifier> = Box::new(Arc::clone(&console));
    let registry = bootstrap::build_notifier_registry(vec![sink]);

    output::header(env!("CARGO_PKG_VERSION"));
    let handoff: Arc<dyn Navigator> = navigator.clone();
    let diagnosis = bootstrap::build_diagnosis(config, store, handoff, Arc::new(registry));
    if diagnosis.identity().is_none() {
        console.flush();
        render_handoff(navigator.take());
        return Ok(ExitCode::FAILURE);
    }

    let candidate = read_candidate(&args.path)?;
    if diagnosis.select(candidate).is_err() {
        console.flush();
        return Ok(ExitCode::FAILURE);
    }

    let pb = output::spinner("Uploading image and running prediction");
    let state = diagnosis.submit().await?;
    output::spinner_clear(&pb);
    console.flush();
    render_handoff(navigator.take());

    Ok(match state {
        FlowState::Success(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

fn read_candidate(path: &Path) -> Result<ImageCandidate> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let mime_type = mime_from_path(path);
    debug!(file = %file_name, mime_type, bytes = bytes.len(), "Read image candidate");
    Ok(ImageCandidate::new(file_name, mime_type, bytes))
}

/// Content type from the file extension.
fn mime_from_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "tif" | "tiff" => "image/tiff",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

fn render_handoff(handoff: Option<Handoff>) {
    match handoff {
        Some(Handoff::Results(result)) => {
            if output::is_json() {
                output::json_output(json!({
                    "command": "scan",
                    "result": result.payload(),
                }));
                return;
            }
            output::section("Scan results");
            let pretty = serde_json::to_string_pretty(result.payload())
                .unwrap_or_else(|_| result.payload().to_string());
            output::lines(&pretty);
        }
        Some(Handoff::SignIn) => {
            output::hint("run `catascan login <USER_ID>` to sign in");
        }
        None => {}
    }
}
