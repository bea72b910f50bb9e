//! Scripted walkthrough of the SoF → laytime → export narrative.

pub mod flow;
pub mod screens;

pub use flow::{DemoCommand, DemoFlow, DemoStep, PROGRESS_STEPS, UPLOADED_DOCUMENT};

use crate::errors::AppResult;
use crate::models::Snapshot;
use crate::ui::messages::header;

/// Walk every screen once, Intro through Export, printing each.
pub fn run_walkthrough(snapshot: &Snapshot, dashboard_url: &str) -> AppResult<DemoFlow> {
    let mut flow = DemoFlow::new();

    loop {
        header(screens::title(flow.step()));
        println!("{}", screens::render(&flow, snapshot, dashboard_url));

        if flow.step() == DemoStep::Export {
            break;
        }
        flow.apply(DemoCommand::forward_from(flow.step()))?;
    }

    Ok(flow)
}
