mod audio;
mod colors;
mod config;
mod offline;
mod state;
mod ui;

use common::games::snake::DEFAULT_GRID_SIZE;
use common::logger::init_logger;
use common::{log, log_warn};
use std::time::Duration;
use tokio::sync::mpsc;

use config::get_config_manager;
use offline::local_game_task;
use state::{CommandSender, SharedState};
use ui::MenuApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(Some("client".to_string()));

    let config = get_config_manager().get_config_or_default();
    let board_px = (config.window.cell_size_px * DEFAULT_GRID_SIZE as u32) as f32;
    let shutdown_timeout = Duration::from_millis(config.shutdown_timeout_ms as u64);

    let shared_state = SharedState::new();
    let (menu_tx, menu_rx) = mpsc::unbounded_channel();
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let command_sender = CommandSender::new(menu_tx, input_tx);

    let shared_state_clone = shared_state.clone();
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(rt) => rt,
            Err(e) => {
                log_warn!("Failed to start game runtime: {}", e);
                shared_state_clone.set_finished();
                return;
            }
        };
        rt.block_on(local_game_task(shared_state_clone, menu_rx, input_rx, config));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_px, board_px])
            .with_resizable(false)
            .with_title("Snake Game Pro"),
        ..Default::default()
    };

    log!("Starting window {}x{}", board_px, board_px);
    eframe::run_native(
        "Snake Game Pro",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(MenuApp::new(
                shared_state,
                command_sender,
                shutdown_timeout,
            )))
        }),
    )?;

    Ok(())
}
