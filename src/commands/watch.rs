use std::sync::mpsc;

use anyhow::{Context, Result};

use assetgen::{AssetWatcher, GeneratorConfig, WatchEvent};

use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(config: GeneratorConfig, ui: &UiContext) -> Result<()> {
    let project_root = std::env::current_dir()?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(&config.roots, &config.output.display().to_string(), ui.style)
        );
    }

    let ui = *ui;
    let mut watcher = AssetWatcher::local(&project_root, config, move |event: WatchEvent| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, ui.style);
        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    });

    let (stop_tx, stop_rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })
    .context("failed to install Ctrl+C handler")?;

    watcher.start()?;
    let _ = stop_rx.recv();
    watcher.stop();

    Ok(())
}
