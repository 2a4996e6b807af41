//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use assert_cmd::Command;
use tempfile::TempDir;

use qrcast::player::{PlaybackController, PlaybackSettings};
use qrcast::player::playback::SpeedSchedule;
use qrcast::transfer::split;

/// A `qrcast` command isolated from the user's config file.
///
/// The config path points into `dir`, where no file exists unless a test
/// writes one.
pub fn qrcast(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("qrcast").expect("qrcast binary should be built");
    cmd.env("QRCAST_CONFIG", config_path(dir))
        .env("NO_COLOR", "1")
        .env_remove("QRCAST_LOG");
    cmd
}

/// Config file location used by [`qrcast`].
pub fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config.toml")
}

/// Write a payload file into `dir`.
pub fn write_payload(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write payload");
    path
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Controller over `payload` with the given speed list.
pub fn controller(
    payload: &str,
    max_chunk_size: usize,
    speeds_ms: &[u64],
    speed_index: usize,
    now: Instant,
) -> PlaybackController {
    let settings = PlaybackSettings {
        speeds: SpeedSchedule::new(speeds_ms, speed_index).expect("valid speeds"),
        ..PlaybackSettings::default()
    };
    PlaybackController::new(
        split(payload, max_chunk_size).expect("valid payload"),
        settings,
        now,
    )
    .expect("valid settings")
}
