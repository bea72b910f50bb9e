// src/demo/flow.rs

use crate::errors::{AppError, AppResult};
use std::fmt;

pub const UPLOADED_DOCUMENT: &str = "SOF_PACIFIC_GLORY_Jan2024.pdf";

/// Labels shown while the document is being processed.
pub const PROGRESS_STEPS: [&str; 5] = [
    "Extracting vessel data",
    "Identifying time events",
    "Parsing cargo operations",
    "Detecting delays & exceptions",
    "Applying laytime rules",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStep {
    Intro,
    Upload,
    Processing,
    Extraction,
    Calculation,
    Results,
    Dashboard,
    Export,
}

impl DemoStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoStep::Intro => "intro",
            DemoStep::Upload => "upload",
            DemoStep::Processing => "processing",
            DemoStep::Extraction => "extraction",
            DemoStep::Calculation => "calculation",
            DemoStep::Results => "results",
            DemoStep::Dashboard => "dashboard",
            DemoStep::Export => "export",
        }
    }
}

impl fmt::Display for DemoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoCommand {
    Start,
    UploadDocument,
    ProcessingFinished,
    ShowCalculation,
    ShowResults,
    OpenDashboard,
    OpenExport,
    Restart,
}

impl DemoCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoCommand::Start => "start",
            DemoCommand::UploadDocument => "upload-document",
            DemoCommand::ProcessingFinished => "processing-finished",
            DemoCommand::ShowCalculation => "show-calculation",
            DemoCommand::ShowResults => "show-results",
            DemoCommand::OpenDashboard => "open-dashboard",
            DemoCommand::OpenExport => "open-export",
            DemoCommand::Restart => "restart",
        }
    }

    /// The command that advances past `step` (Export wraps back to Intro).
    pub fn forward_from(step: DemoStep) -> Self {
        match step {
            DemoStep::Intro => DemoCommand::Start,
            DemoStep::Upload => DemoCommand::UploadDocument,
            DemoStep::Processing => DemoCommand::ProcessingFinished,
            DemoStep::Extraction => DemoCommand::ShowCalculation,
            DemoStep::Calculation => DemoCommand::ShowResults,
            DemoStep::Results => DemoCommand::OpenDashboard,
            DemoStep::Dashboard => DemoCommand::OpenExport,
            DemoStep::Export => DemoCommand::Restart,
        }
    }
}

/// Screen state of the walkthrough. Each state accepts exactly one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoFlow {
    step: DemoStep,
    uploaded_file: Option<String>,
}

impl Default for DemoFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoFlow {
    pub fn new() -> Self {
        Self {
            step: DemoStep::Intro,
            uploaded_file: None,
        }
    }

    pub fn step(&self) -> DemoStep {
        self.step
    }

    pub fn uploaded_file(&self) -> Option<&str> {
        self.uploaded_file.as_deref()
    }

    pub fn is_processing(&self) -> bool {
        self.step == DemoStep::Processing
    }

    pub fn apply(&mut self, cmd: DemoCommand) -> AppResult<DemoStep> {
        use DemoCommand as C;
        use DemoStep as S;

        let next = match (self.step, cmd) {
            (S::Intro, C::Start) => S::Upload,
            (S::Upload, C::UploadDocument) => {
                self.uploaded_file = Some(UPLOADED_DOCUMENT.to_string());
                S::Processing
            }
            (S::Processing, C::ProcessingFinished) => S::Extraction,
            (S::Extraction, C::ShowCalculation) => S::Calculation,
            (S::Calculation, C::ShowResults) => S::Results,
            (S::Results, C::OpenDashboard) => S::Dashboard,
            (S::Dashboard, C::OpenExport) => S::Export,
            (S::Export, C::Restart) => {
                self.uploaded_file = None;
                S::Intro
            }
            (step, cmd) => {
                return Err(AppError::InvalidTransition {
                    step: step.to_string(),
                    command: cmd.as_str().to_string(),
                });
            }
        };

        self.step = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_walkthrough_and_restart() {
        let mut flow = DemoFlow::new();
        let expected = [
            DemoStep::Upload,
            DemoStep::Processing,
            DemoStep::Extraction,
            DemoStep::Calculation,
            DemoStep::Results,
            DemoStep::Dashboard,
            DemoStep::Export,
            DemoStep::Intro,
        ];

        for want in expected {
            let cmd = DemoCommand::forward_from(flow.step());
            assert_eq!(flow.apply(cmd).unwrap(), want);
        }
        assert_eq!(flow, DemoFlow::new());
    }

    #[test]
    fn upload_records_document_name() {
        let mut flow = DemoFlow::new();
        flow.apply(DemoCommand::Start).unwrap();
        flow.apply(DemoCommand::UploadDocument).unwrap();

        assert!(flow.is_processing());
        assert_eq!(flow.uploaded_file(), Some(UPLOADED_DOCUMENT));
    }

    #[test]
    fn skipping_ahead_is_rejected() {
        let mut flow = DemoFlow::new();
        let err = flow.apply(DemoCommand::OpenExport).unwrap_err();

        assert!(matches!(err, AppError::InvalidTransition { .. }));
        assert_eq!(flow.step(), DemoStep::Intro);
    }

    #[test]
    fn restart_only_from_export() {
        let mut flow = DemoFlow::new();
        flow.apply(DemoCommand::Start).unwrap();
        assert!(flow.apply(DemoCommand::Restart).is_err());
        assert_eq!(flow.step(), DemoStep::Upload);
    }

    #[test]
    fn processing_needs_explicit_completion() {
        let mut flow = DemoFlow::new();
        flow.apply(DemoCommand::Start).unwrap();
        flow.apply(DemoCommand::UploadDocument).unwrap();
        assert!(flow.apply(DemoCommand::ShowCalculation).is_err());
        assert_eq!(flow.apply(DemoCommand::ProcessingFinished).unwrap(), DemoStep::Extraction);
    }
}
