//! Hands a file to the desktop's default application.
//!
//! The path always travels as its own process argument; it is never spliced
//! into a shell string.

use std::path::Path;
use std::process::{Command, Stdio};

/// Fire-and-forget launcher. Nothing is reported back to the caller.
pub trait FileOpener {
    fn open(&self, path: &Path);
}

pub struct SystemOpener {
    program: String,
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new(default_program())
    }
}

impl SystemOpener {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) {
        // The child is not waited on; it outlives us if it needs to.
        match self.command(path).spawn() {
            Ok(child) => tracing::debug!("[Opener] Launched {} (pid {}) for {}", self.program, child.id(), path.display()),
            Err(e) => tracing::error!("[Opener] Failed to launch {} for {}: {}", self.program, path.display(), e),
        }
    }
}

fn default_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_with_shell_metacharacters_stays_one_argument() {
        let opener = SystemOpener::new("xdg-open");
        let path = Path::new("shots/a\"; rm -rf ~; echo \".png");
        let cmd = opener.command(path);

        assert_eq!(cmd.get_program(), "xdg-open");
        assert_eq!(cmd.get_args().collect::<Vec<_>>(), vec![path.as_os_str()]);
    }

    #[test]
    fn test_missing_program_does_not_panic() {
        SystemOpener::new("image-search-no-such-opener").open(Path::new("a.png"));
    }
}
