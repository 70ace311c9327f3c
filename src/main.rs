use std::sync::Arc;

use newton_basins::{ChannelPort, Session, SessionConfig, SweepEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newton_basins=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SessionConfig::default();
    let (port, events) = ChannelPort::new();
    let mut session = Session::new(config, Arc::new(port))?;

    tracing::info!(
        n_ticks_re = config.n_ticks_re(),
        n_ticks_im = config.n_ticks_im(),
        max_iteration = config.params().max_iteration(),
        epsilon = config.params().epsilon(),
        "sweeping basins of z³ - 1"
    );
    for root in session.roots().roots() {
        tracing::info!(root = %root, "root");
    }

    for event in events.iter() {
        match event {
            SweepEvent::Progress {
                progress: Some(fraction),
                ..
            } => {
                tracing::info!("{:>3.0}%", fraction * 100.0);
            }
            SweepEvent::Progress { progress: None, .. } => {}
            SweepEvent::Finished {
                outcome, duration, ..
            } => {
                tracing::info!(?outcome, ?duration, "sweep finished");
                break;
            }
        }
    }

    let counts = session.grid().basin_counts();
    tracing::info!(
        first = counts.first,
        second = counts.second,
        third = counts.third,
        unknown = counts.unknown,
        "cells per basin"
    );

    session.shutdown();
    Ok(())
}
