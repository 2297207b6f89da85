use super::Classifier;
use crate::config::ClassifierConfig;
use crate::runtime::resolve_program;
use anyhow::{Context, Result, bail};
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Classifier backed by an external CLI (the `gemini` tool by default).
///
/// The prompt goes in as one argv entry and the program is spawned directly,
/// never through a shell. Output is drained on reader threads so a chatty
/// child cannot block on a full pipe while we wait for it. The timeout bounds
/// the whole call, including helpers the CLI leaves holding its pipes.
#[derive(Clone, Debug)]
pub struct CommandClassifier {
    config: ClassifierConfig,
}

impl CommandClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    fn timed_out(&self) -> anyhow::Error {
        anyhow::anyhow!(
            "{} timed out after {:?}",
            self.config.program,
            self.config.timeout
        )
    }
}

impl Classifier for CommandClassifier {
    fn is_available(&self) -> bool {
        resolve_program(&self.config.program).is_some()
    }

    fn complete(&self, prompt: &str) -> Result<String> {
        let program = resolve_program(&self.config.program)
            .with_context(|| format!("{} is not installed", self.config.program))?;
        debug!(program = %program.display(), timeout_secs = self.config.timeout.as_secs(), "spawning classifier");

        let mut command = Command::new(&program);
        command
            .args(self.config.args(prompt))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // Anything the CLI forks joins this group and dies with it.
            command.process_group(0);
        }

        let deadline = Instant::now() + self.config.timeout;
        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to execute {}", program.display()))?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let Some(status) = wait_until(&mut child, deadline)? else {
            kill_group(&mut child);
            let _ = child.wait();
            return Err(self.timed_out());
        };

        // A background helper that inherited stdout keeps the pipe open after
        // the CLI itself has exited.
        let (Some(stdout), Some(stderr)) = (collect(stdout, deadline), collect(stderr, deadline))
        else {
            kill_group(&mut child);
            return Err(self.timed_out());
        };

        if !status.success() {
            let detail = stderr.trim();
            match status.code() {
                Some(code) => bail!("{} exited with status {code}: {detail}", self.config.program),
                None => bail!("{} terminated by signal: {detail}", self.config.program),
            }
        }
        Ok(stdout)
    }
}

fn drain<R>(pipe: Option<R>) -> Option<Receiver<String>>
where
    R: Read + Send + 'static,
{
    let mut pipe = pipe?;
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    Some(rx)
}

/// Wait for a reader to hit EOF, giving up at `deadline`. `None` means the
/// pipe was still open when time ran out.
fn collect(rx: Option<Receiver<String>>, deadline: Instant) -> Option<String> {
    let Some(rx) = rx else {
        return Some(String::new());
    };
    match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(text) => Some(text),
        Err(RecvTimeoutError::Timeout) => None,
        Err(RecvTimeoutError::Disconnected) => Some(String::new()),
    }
}

/// Poll the child until it exits or `deadline` passes. `None` means time ran
/// out and the child is still running.
fn wait_until(child: &mut Child, deadline: Instant) -> Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait().context("Failed to poll classifier")? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// SIGKILL the child's process group, then the child itself.
fn kill_group(child: &mut Child) {
    #[cfg(unix)]
    {
        let pgid = child.id() as libc::pid_t;
        let _ = unsafe { libc::killpg(pgid, libc::SIGKILL) };
    }
    let _ = child.kill();
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn script(dir: &Path, body: &str) -> String {
        let path = dir.join("fake-classifier");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn classifier(program: String, timeout: Duration) -> CommandClassifier {
        CommandClassifier::new(ClassifierConfig {
            program,
            timeout,
            ..ClassifierConfig::default()
        })
    }

    #[test]
    fn prompt_arrives_as_a_single_argument() {
        let temp = TempDir::new().unwrap();
        let program = script(temp.path(), r#"printf '%s|%s' "$#" "$4""#);
        let prompt = "two words; $(echo injected) `still literal`";
        let out = classifier(program, Duration::from_secs(10))
            .complete(prompt)
            .unwrap();
        assert_eq!(out, format!("6|{prompt}"));
    }

    #[test]
    fn non_zero_exit_reports_stderr() {
        let temp = TempDir::new().unwrap();
        let program = script(temp.path(), "echo 'quota exceeded' >&2\nexit 3");
        let err = classifier(program, Duration::from_secs(10))
            .complete("prompt")
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("status 3"), "{message}");
        assert!(message.contains("quota exceeded"), "{message}");
    }

    #[test]
    fn slow_classifier_times_out() {
        let temp = TempDir::new().unwrap();
        let program = script(temp.path(), "exec sleep 30");
        let started = Instant::now();
        let err = classifier(program, Duration::from_millis(300))
            .complete("prompt")
            .unwrap_err();
        assert!(err.to_string().contains("timed out"));
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn background_helper_holding_stdout_cannot_outlive_timeout() {
        let temp = TempDir::new().unwrap();
        let pid_file = temp.path().join("helper.pid");
        let program = script(
            temp.path(),
            &format!("sleep 30 &\necho $! > '{}'\necho '[]'", pid_file.display()),
        );
        let started = Instant::now();
        let err = classifier(program, Duration::from_millis(500))
            .complete("prompt")
            .unwrap_err();
        assert!(err.to_string().contains("timed out"), "{err:#}");
        assert!(started.elapsed() < Duration::from_secs(5));

        let pid = fs::read_to_string(&pid_file).unwrap();
        let stat = Path::new("/proc").join(pid.trim()).join("stat");
        if Path::new("/proc/self/stat").exists() {
            assert!(helper_exits(&stat), "background sleep survived the timeout");
        }
    }

    /// Gone, or a zombie waiting for init to reap it.
    fn helper_exits(stat: &Path) -> bool {
        let give_up = Instant::now() + Duration::from_secs(3);
        while Instant::now() < give_up {
            match fs::read_to_string(stat) {
                Err(_) => return true,
                Ok(text) => {
                    let state = text.rsplit(')').next().unwrap_or("").trim_start();
                    if state.starts_with('Z') || state.starts_with('X') {
                        return true;
                    }
                }
            }
            thread::sleep(Duration::from_millis(50));
        }
        false
    }

    #[test]
    fn missing_program_is_unavailable() {
        let classifier = classifier(
            "/nonexistent/classifier-binary".to_string(),
            Duration::from_secs(1),
        );
        assert!(!classifier.is_available());
        assert!(classifier.complete("prompt").is_err());
    }
}
