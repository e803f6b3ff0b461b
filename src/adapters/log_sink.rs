//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC in production, stderr on host).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

fn on_off(v: bool) -> &'static str {
    if v { "ON" } else { "OFF" }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | outputs initialised");
            }
            AppEvent::Notified(notice) => {
                info!("NOTICE | {}", notice);
            }
            AppEvent::IgnitionChanged { on } => {
                info!("IGNITION | {}", on_off(*on));
            }
            AppEvent::EngineChanged { from, to } => {
                info!("ENGINE | {:?} -> {:?}", from, to);
            }
            AppEvent::HeadlightModeChanged { from, to } => {
                info!("HEADLIGHT | {:?} -> {:?}", from, to);
            }
            AppEvent::AutoUndecided(verdict) => {
                info!("AUTO | no decision ({:?})", verdict);
            }
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | iter={} | ignition={} engine={:?} | headlight={:?} | \
                     low={}/{} high={}/{} | welcome_sent={}",
                    t.iteration,
                    on_off(t.ignition_on),
                    t.engine,
                    t.headlight,
                    on_off(t.beams.left_low),
                    on_off(t.beams.right_low),
                    on_off(t.beams.left_high),
                    on_off(t.beams.right_high),
                    t.welcome_sent,
                );
            }
        }
    }
}
