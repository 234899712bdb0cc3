// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! cec2mqtt - bridge daemon.
//!
//! Opens the CEC adapter, connects to the MQTT broker, and republishes the
//! derived TV state until a termination signal arrives or a fatal error
//! (including a publish failure) tears the process down for an external
//! supervisor to restart.

use std::process::ExitCode;

use clap::Parser;
use tokio::signal::unix::{SignalKind, signal};

use cec2mqtt::bus::CecBus;
use cec2mqtt::{Bridge, BridgeConfig, MqttPublisher, Result};

#[tokio::main]
async fn main() -> ExitCode {
    let config = BridgeConfig::parse();
    init_tracing(config.debug);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "bridge terminated");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: BridgeConfig) -> Result<()> {
    config.validate()?;

    let mut builder = MqttPublisher::builder()
        .host(&config.host)
        .port(config.port);
    if let (Some(username), Some(password)) = (config.username.as_deref(), config.password.as_deref())
    {
        builder = builder.credentials(username, password);
    }
    let publisher = builder.build().await?;

    let (bus, mut commands) = CecBus::open(config.adapter.as_deref(), &config.device_name)?;

    let mut bridge = Bridge::new(publisher, &config.topic);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        topic = %config.topic,
        "bridge running"
    );

    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        result = bridge.run(&mut commands) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupt received, shutting down");
        }
        _ = sigterm.recv() => {
            tracing::info!("termination signal received, shutting down");
        }
    }

    drop(bus);
    bridge.shutdown().await
}

fn init_tracing(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}
