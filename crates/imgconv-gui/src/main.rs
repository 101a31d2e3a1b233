#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Hide console on Windows

use anyhow::{Context, Result};
use imgconv_common::Profile;
use imgconv_gui::ImageConverterApp;

const PROFILE: &str = "extended";

fn main() -> Result<()> {
    // Initialize logging with debug level for development
    tracing_subscriber::fmt()
        .with_env_filter("imgconv=debug")
        .with_target(false)
        .without_time()
        .init();

    let profile = Profile::builtin(PROFILE).context("Failed to load window profile")?;
    tracing::info!("Starting Image Converter with '{}' profile", profile.name);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Image Converter")
            .with_inner_size([profile.window.width, profile.window.height])
            .with_min_inner_size([profile.window.width, profile.window.height]),
        ..Default::default()
    };

    eframe::run_native(
        "Image Converter",
        options,
        Box::new(|cc| Ok(Box::new(ImageConverterApp::new(cc, profile)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run window: {e}"))
}
