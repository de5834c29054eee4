//! Veriflow Shell
//!
//! Terminal harness for the embedded verification flow coordinator. Stands
//! in for a native host: navigation events, permission requests and file
//! choosers are typed in as commands, host modals become terminal prompts.

#![allow(clippy::print_stdout)]

mod hosting;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use dialoguer::{Confirm, Input, Select};
use tracing::info;

use veriflow_core::config;
use veriflow_core::coordinator::{FileSelectionHandle, HostHandles};
use veriflow_core::host::{
    ChooserPresenter, ContentSurface, ExternalLinkHandler, NotificationSurface, PermissionPrompter,
};
use veriflow_core::{flow, tracing_init, FlowCoordinator};

use hosting::{SimulatedPermissionRequest, TerminalHost};

/// Veriflow embedded-flow harness.
#[derive(Debug, Parser)]
#[command(name = "veriflow-shell", version, about)]
struct Cli {
    /// Path to a settings.json (defaults to the global config)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit structured JSON log lines
    #[arg(long)]
    log_json: bool,

    /// Run the scripted demo session instead of the interactive loop
    #[arg(long)]
    non_interactive: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_config(cli.config.as_deref())?;
    tracing_init::init_tracing(
        &format!("veriflow={}", cfg.log.level),
        cli.log_json || cfg.log.json,
    );

    info!(
        javascript = cfg.surface.javascript,
        dom_storage = cfg.surface.dom_storage,
        media_playback_requires_gesture = cfg.surface.media_playback_requires_gesture,
        debugging = cfg.surface.debugging,
        "Configuring embedded surface"
    );

    let host = Arc::new(TerminalHost::default());
    let handles = HostHandles {
        surface: Arc::clone(&host) as Arc<dyn ContentSurface>,
        links: Arc::clone(&host) as Arc<dyn ExternalLinkHandler>,
        permissions: Arc::clone(&host) as Arc<dyn PermissionPrompter>,
        chooser: Arc::clone(&host) as Arc<dyn ChooserPresenter>,
        notifications: Arc::clone(&host) as Arc<dyn NotificationSurface>,
    };
    let mut coordinator = FlowCoordinator::new(&cfg, handles)?;

    coordinator.start();

    if cli.non_interactive {
        run_demo_session(&host, &mut coordinator)
    } else {
        run_command_loop(&host, &mut coordinator)
    }
}

/// Interactive loop: each command is an event the embedded surface would
/// deliver; parked host modals are answered right after.
fn run_command_loop(host: &TerminalHost, coordinator: &mut FlowCoordinator) -> Result<()> {
    println!("Commands: nav <url> | perm [origin] | file | quit");
    loop {
        let line: String = Input::new().with_prompt("veriflow").interact_text()?;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("nav") => {
                let Some(target) = parts.next() else {
                    println!("usage: nav <url>");
                    continue;
                };
                let suppressed = coordinator.on_navigation_requested(target);
                println!("navigation {}", if suppressed { "suppressed" } else { "allowed" });
            }
            Some("perm") => {
                let origin = parts.next().unwrap_or(flow::TRUSTED_ORIGIN);
                coordinator.on_permission_requested(SimulatedPermissionRequest::new(origin));
                answer_permission_prompt(host, coordinator, false)?;
            }
            Some("file") => {
                let (handle, mut rx) = FileSelectionHandle::new();
                coordinator.on_file_chooser_requested(handle);
                answer_chooser(host, coordinator, false)?;
                match rx.try_recv() {
                    Ok(Some(files)) => println!("selected: {}", files.join(", ")),
                    Ok(None) => println!("no selection"),
                    Err(_) => println!("selection still pending"),
                }
            }
            Some("quit" | "exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
    }
    Ok(())
}

/// Scripted pass over all three bridges, auto-answering every modal.
fn run_demo_session(host: &TerminalHost, coordinator: &mut FlowCoordinator) -> Result<()> {
    coordinator.on_navigation_requested("https://help.withpersona.com/articles/camera");

    coordinator.on_permission_requested(SimulatedPermissionRequest::new(flow::TRUSTED_ORIGIN));
    answer_permission_prompt(host, coordinator, true)?;

    let (handle, mut rx) = FileSelectionHandle::new();
    coordinator.on_file_chooser_requested(handle);
    answer_chooser(host, coordinator, true)?;
    if let Ok(selection) = rx.try_recv() {
        info!(?selection, "Embedded surface received selection");
    }

    coordinator.on_navigation_requested("https://personacallback?inquiry-id=inq_demo");
    Ok(())
}

fn answer_permission_prompt(
    host: &TerminalHost,
    coordinator: &mut FlowCoordinator,
    auto: bool,
) -> Result<()> {
    let Some(capability) = host.take_permission_prompt() else {
        return Ok(());
    };
    let granted = if auto {
        true
    } else {
        Confirm::new()
            .with_prompt(format!("Grant {capability:?} access?"))
            .default(true)
            .interact()?
    };
    coordinator.on_host_permission_result(granted);
    Ok(())
}

fn answer_chooser(host: &TerminalHost, coordinator: &mut FlowCoordinator, auto: bool) -> Result<()> {
    let Some(chooser) = host.take_chooser() else {
        return Ok(());
    };

    if auto {
        // Prefer the capture path when one was prepared.
        let succeeded = true;
        let uri = chooser.capture.is_none().then(default_picked_uri);
        coordinator.on_host_selection_result(succeeded, uri);
        return Ok(());
    }

    let mut items = vec![format!("Pick existing ({})", chooser.picker.media_type)];
    if let Some(capture) = &chooser.capture {
        items.push(format!("Take photo ({})", capture.output.display()));
    }
    items.push("Cancel".to_string());

    let choice = Select::new()
        .with_prompt(chooser.title)
        .items(&items)
        .default(0)
        .interact()?;

    if choice == items.len() - 1 {
        coordinator.on_host_selection_result(false, None);
    } else if choice == 0 {
        let uri: String = Input::new()
            .with_prompt("Picked resource URI")
            .default(default_picked_uri())
            .interact_text()?;
        coordinator.on_host_selection_result(true, Some(uri));
    } else {
        // Capture apps return no URI; the prepared destination is the result.
        coordinator.on_host_selection_result(true, None);
    }
    Ok(())
}

fn default_picked_uri() -> String {
    "content://media/external/images/1".to_string()
}
