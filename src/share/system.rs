// src/share/system.rs

use crate::share::clipboard::{
    ClipboardError, ClipboardHost, LegacyClipboard, NoticeKind, Notifier, SecureClipboard,
};
use crate::ui::messages::{info, success};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::env;
use std::fs;
use std::io::{IsTerminal, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

/// Platform clipboard program fed through stdin.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: PathBuf,
    args: Vec<&'static str>,
}

/// (program, args, env var that must be set for it to make sense)
const CANDIDATES: &[(&str, &[&str], Option<&str>)] = &[
    ("pbcopy", &[], None),
    ("wl-copy", &[], Some("WAYLAND_DISPLAY")),
    ("xclip", &["-selection", "clipboard"], Some("DISPLAY")),
    ("xsel", &["--clipboard", "--input"], Some("DISPLAY")),
    ("clip.exe", &[], None),
];

impl CommandClipboard {
    /// Pick the first clipboard program usable in this session.
    pub fn detect() -> Option<Self> {
        CANDIDATES.iter().find_map(|(name, args, needs_env)| {
            if let Some(var) = needs_env
                && env::var_os(var).is_none_or(|v| v.is_empty())
            {
                return None;
            }
            find_in_path(name).map(|program| CommandClipboard {
                program,
                args: args.to_vec(),
            })
        })
    }
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

impl SecureClipboard for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        // stdin is closed at the end of the match, before waiting
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // attende la fine anche se la scrittura è fallita: niente processi orfani
        let status = child.wait()?;
        written?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Write(format!(
                "{} exited with {status}",
                self.program.display()
            )))
        }
    }
}

/// Legacy copy through the terminal: the text is staged in a temp file,
/// read back in full, then sent as an OSC 52 clipboard sequence.
#[derive(Debug, Default)]
pub struct TerminalClipboard {
    staged: Option<NamedTempFile>,
    selection: Option<String>,
}

impl TerminalClipboard {
    /// Path of the staging file while one exists.
    pub fn staged_path(&self) -> Option<PathBuf> {
        self.staged.as_ref().map(|f| f.path().to_path_buf())
    }
}

impl LegacyClipboard for TerminalClipboard {
    fn stage(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut file = tempfile::Builder::new()
            .prefix("sofreport-share-")
            .suffix(".txt")
            .tempfile()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        self.staged = Some(file);
        Ok(())
    }

    fn select_all(&mut self) -> Result<(), ClipboardError> {
        let file = self
            .staged
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("nothing staged".into()))?;

        let mut content = String::new();
        file.as_file_mut().seek(SeekFrom::Start(0))?;
        file.as_file_mut().read_to_string(&mut content)?;
        self.selection = Some(content);
        Ok(())
    }

    fn exec_copy(&mut self) -> Result<(), ClipboardError> {
        let selection = self
            .selection
            .as_deref()
            .ok_or_else(|| ClipboardError::Unavailable("empty selection".into()))?;

        let mut out = std::io::stdout();
        if !out.is_terminal() {
            return Err(ClipboardError::Unavailable("stdout is not a terminal".into()));
        }

        write!(out, "{}", osc52_sequence(selection))?;
        out.flush()?;
        Ok(())
    }

    fn unstage(&mut self) {
        self.selection = None;
        if let Some(file) = self.staged.take() {
            let path = file.path().to_path_buf();
            // close() cancella il file; se fallisce ci riproviamo a mano
            if file.close().is_err() {
                fs::remove_file(path).ok();
            }
        }
    }
}

/// OSC 52 "set clipboard" escape sequence for `text`.
pub(crate) fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Real environment: clipboard program if present and allowed, terminal
/// fallback always.
#[derive(Debug, Default)]
pub struct SystemClipboardHost {
    secure: Option<CommandClipboard>,
    legacy: TerminalClipboard,
}

impl SystemClipboardHost {
    pub fn detect(allow_secure: bool) -> Self {
        let secure = if allow_secure {
            CommandClipboard::detect()
        } else {
            None
        };
        Self {
            secure,
            legacy: TerminalClipboard::default(),
        }
    }
}

impl ClipboardHost for SystemClipboardHost {
    fn secure(&mut self) -> Option<&mut dyn SecureClipboard> {
        self.secure
            .as_mut()
            .map(|c| c as &mut dyn SecureClipboard)
    }

    fn legacy(&mut self) -> &mut dyn LegacyClipboard {
        &mut self.legacy
    }
}

/// Notices printed on the terminal.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Copied => success(message),
            NoticeKind::Manual => info(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_encodes_base64_payload() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn staged_file_is_removed_on_unstage() {
        let mut legacy = TerminalClipboard::default();
        legacy.stage("https://x/dashboard/y").unwrap();

        let path = legacy.staged_path().unwrap();
        assert!(path.exists());

        legacy.select_all().unwrap();
        assert_eq!(legacy.selection.as_deref(), Some("https://x/dashboard/y"));

        legacy.unstage();
        assert!(!path.exists());
        assert!(legacy.staged_path().is_none());
        assert!(legacy.selection.is_none());
    }

    #[test]
    fn unstage_without_stage_is_harmless() {
        let mut legacy = TerminalClipboard::default();
        legacy.unstage();
        assert!(legacy.staged_path().is_none());
    }

    #[test]
    fn select_all_needs_staged_text() {
        let mut legacy = TerminalClipboard::default();
        assert!(legacy.select_all().is_err());
        assert!(legacy.exec_copy().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn program_exiting_early_is_reported_and_reaped() {
        // `false` never reads stdin, so a large payload hits a closed pipe
        let Some(program) = find_in_path("false") else {
            return;
        };
        let mut clip = CommandClipboard {
            program,
            args: Vec::new(),
        };

        let payload = "x".repeat(1 << 20);
        let err = clip.write_text(&payload).unwrap_err();
        assert!(matches!(
            err,
            ClipboardError::Staging(_) | ClipboardError::Write(_)
        ));

        // the same clipboard stays usable afterwards
        assert!(clip.write_text("short").is_err());
    }

    #[test]
    fn disabled_secure_capability_is_not_offered() {
        let mut host = SystemClipboardHost::detect(false);
        assert!(host.secure().is_none());
    }
}
