//! Browser session driver
//!
//! Spawns `node` with a small Playwright driver script that opens one
//! browser/context/page for the whole session, then speaks a
//! newline-delimited JSON protocol over stdin/stdout: each command
//! carries an id, each reply echoes it. Commands are handled strictly
//! in order by the driver; armed response watchers are the one
//! exception, registered immediately and joined later so a network
//! response can be awaited concurrently with the click that triggers
//! it.

use std::process::Stdio;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command as TokioCommand};
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::SuiteConfig;
use crate::error::{SuiteError, SuiteResult};

/// Upper bound for a single driver round trip. Individual waits inside
/// the browser (element visibility, network idle) have their own
/// Playwright timeouts below this.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(45);

/// Playwright's default wait timeout, mirrored for explicit waits.
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 30_000;

/// One command in the driver wire protocol.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    Goto { url: String },
    WaitIdle,
    Click { selector: String, timeout_ms: u64 },
    Fill { selector: String, value: String },
    SelectOption { selector: String, value: String },
    Check { selector: String },
    Press { selector: String, key: String },
    /// Probe: true if the selector becomes visible within the bound,
    /// false on timeout. Never an error on absence.
    IsVisible { selector: String, timeout_ms: u64 },
    IsChecked { selector: String },
    InnerText { selector: String },
    InputValue { selector: String },
    Count { selector: String },
    WaitSelector { selector: String, timeout_ms: u64, state: WaitState },
    /// Register a network-response watcher without awaiting it.
    ArmResponse { watch_id: u64, pattern: String, method: String },
    /// Join a previously armed watcher; yields `{ status, body }`.
    AwaitResponse { watch_id: u64 },
    CurrentUrl,
    Title,
    Close,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitState {
    #[default]
    Visible,
    Hidden,
}

#[derive(Serialize)]
struct Envelope<'a> {
    id: u64,
    #[serde(flatten)]
    command: &'a Command,
}

#[derive(Debug, Deserialize)]
struct Reply {
    id: u64,
    ok: bool,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    kind: Option<String>,
}

/// The node-side driver. Generated from Rust and written to a temp
/// directory at launch, in the same way test scripts are generated for
/// one-shot Playwright runs.
const DRIVER_JS: &str = r#"
const readline = require('readline');
const playwright = require('playwright');

(async () => {
  const browserName = process.env.ORDERSIGHT_E2E_BROWSER || 'chromium';
  const headless = process.env.ORDERSIGHT_E2E_HEADLESS !== '0';
  const browser = await playwright[browserName].launch({ headless });
  const context = await browser.newContext();
  const page = await context.newPage();
  const watchers = new Map();

  const reply = (obj) => process.stdout.write(JSON.stringify(obj) + '\n');
  reply({ id: 0, ok: true, value: 'ready' });

  const rl = readline.createInterface({ input: process.stdin });
  for await (const line of rl) {
    if (!line.trim()) continue;
    const msg = JSON.parse(line);
    try {
      let value = null;
      switch (msg.cmd) {
        case 'goto':
          await page.goto(msg.url);
          break;
        case 'wait_idle':
          await page.waitForLoadState('networkidle');
          break;
        case 'click':
          await page.click(msg.selector, { timeout: msg.timeout_ms });
          break;
        case 'fill':
          await page.fill(msg.selector, msg.value);
          break;
        case 'select_option':
          await page.selectOption(msg.selector, msg.value);
          break;
        case 'check':
          await page.check(msg.selector);
          break;
        case 'press':
          await page.press(msg.selector, msg.key);
          break;
        case 'is_visible':
          try {
            await page.waitForSelector(msg.selector, { state: 'visible', timeout: msg.timeout_ms });
            value = true;
          } catch (err) {
            if (err.name !== 'TimeoutError') throw err;
            value = false;
          }
          break;
        case 'is_checked':
          value = await page.locator(msg.selector).first().isChecked();
          break;
        case 'inner_text':
          value = await page.locator(msg.selector).first().innerText();
          break;
        case 'input_value':
          value = await page.locator(msg.selector).first().inputValue();
          break;
        case 'count':
          value = await page.locator(msg.selector).count();
          break;
        case 'wait_selector':
          await page.waitForSelector(msg.selector, { state: msg.state, timeout: msg.timeout_ms });
          break;
        case 'arm_response': {
          const re = new RegExp(msg.pattern);
          const promise = page
            .waitForResponse((r) => re.test(r.url()) && r.request().method() === msg.method)
            .then(async (r) => {
              let body = null;
              try { body = await r.json(); } catch (e) { /* non-JSON body */ }
              return { status: r.status(), body };
            });
          promise.catch(() => {});
          watchers.set(msg.watch_id, promise);
          break;
        }
        case 'await_response': {
          const promise = watchers.get(msg.watch_id);
          if (!promise) throw new Error('no armed watcher with id ' + msg.watch_id);
          watchers.delete(msg.watch_id);
          value = await promise;
          break;
        }
        case 'current_url':
          value = page.url();
          break;
        case 'title':
          value = await page.title();
          break;
        case 'close':
          reply({ id: msg.id, ok: true, value: null });
          await browser.close();
          process.exit(0);
        default:
          throw new Error('unknown command: ' + msg.cmd);
      }
      reply({ id: msg.id, ok: true, value });
    } catch (err) {
      reply({
        id: msg.id,
        ok: false,
        error: String((err && err.message) || err),
        kind: err && err.name === 'TimeoutError' ? 'timeout' : 'error',
      });
    }
  }
  await browser.close();
})().catch((err) => {
  process.stderr.write(String(err) + '\n');
  process.exit(1);
});
"#;

struct Inner {
    child: Child,
    stdin: ChildStdin,
    lines: Lines<BufReader<ChildStdout>>,
    next_id: u64,
    next_watch_id: u64,
}

/// Handle to the persistent browser session.
pub struct BrowserSession {
    inner: Mutex<Inner>,
    _workdir: tempfile::TempDir,
}

impl BrowserSession {
    /// Launch the driver and wait for its ready handshake.
    pub async fn launch(config: &SuiteConfig) -> SuiteResult<Self> {
        Self::check_playwright_installed()?;

        let workdir = tempfile::tempdir()?;
        let script_path = workdir.path().join("driver.js");
        std::fs::write(&script_path, DRIVER_JS)?;

        debug!("Launching Playwright driver: {}", script_path.display());

        let mut child = TokioCommand::new("node")
            .arg(&script_path)
            .env("ORDERSIGHT_E2E_BROWSER", config.browser.as_str())
            .env("ORDERSIGHT_E2E_HEADLESS", if config.headless { "1" } else { "0" })
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SuiteError::Driver(format!("failed to spawn node: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| SuiteError::Driver("driver stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| SuiteError::Driver("driver stdout unavailable".to_string()))?;
        let mut lines = BufReader::new(stdout).lines();

        // Ready handshake: the driver emits one reply with id 0 once
        // the browser and page are up.
        let ready = tokio::time::timeout(COMMAND_TIMEOUT, lines.next_line())
            .await
            .map_err(|_| SuiteError::Timeout("driver ready handshake".to_string()))?
            .map_err(SuiteError::Io)?
            .ok_or_else(|| SuiteError::Driver("driver exited before handshake".to_string()))?;
        let reply: Reply = serde_json::from_str(&ready)?;
        if !reply.ok || reply.id != 0 {
            return Err(SuiteError::Driver(format!(
                "driver failed to start: {}",
                reply.error.unwrap_or_default()
            )));
        }

        Ok(Self {
            inner: Mutex::new(Inner {
                child,
                stdin,
                lines,
                next_id: 1,
                next_watch_id: 1,
            }),
            _workdir: workdir,
        })
    }

    /// Check the Playwright npm package is reachable from node.
    fn check_playwright_installed() -> SuiteResult<()> {
        let status = std::process::Command::new("node")
            .args(["-e", "require('playwright')"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            _ => Err(SuiteError::DriverNotFound),
        }
    }

    /// Reserve a fresh watcher id for an armed response.
    pub async fn next_watch_id(&self) -> u64 {
        let mut inner = self.inner.lock().await;
        let id = inner.next_watch_id;
        inner.next_watch_id += 1;
        id
    }

    /// Send one command and wait for its reply.
    pub async fn send(&self, command: Command) -> SuiteResult<Value> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let mut line = serde_json::to_string(&Envelope { id, command: &command })?;
        line.push('\n');
        debug!(%id, "driver <- {}", line.trim_end());

        inner
            .stdin
            .write_all(line.as_bytes())
            .await
            .map_err(|e| SuiteError::Driver(format!("driver write failed: {e}")))?;

        // Replies come back strictly in command order.
        let raw = tokio::time::timeout(COMMAND_TIMEOUT, inner.lines.next_line())
            .await
            .map_err(|_| SuiteError::Timeout(format!("driver reply for {command:?}")))?
            .map_err(SuiteError::Io)?
            .ok_or_else(|| SuiteError::Driver("driver closed its stdout".to_string()))?;

        let reply: Reply = serde_json::from_str(&raw)?;
        debug!(id = reply.id, ok = reply.ok, "driver ->");
        if reply.id != id {
            return Err(SuiteError::Driver(format!(
                "driver reply id mismatch: sent {id}, got {}",
                reply.id
            )));
        }

        if reply.ok {
            return Ok(reply.value);
        }

        let message = reply.error.unwrap_or_else(|| "unknown driver error".to_string());
        Err(match (&command, reply.kind.as_deref()) {
            (Command::Goto { url }, _) => SuiteError::Navigation(format!("{url}: {message}")),
            (_, Some("timeout")) => SuiteError::Timeout(message),
            _ => SuiteError::Driver(message),
        })
    }

    /// Shut the browser down. Best effort: the child is also killed on
    /// drop.
    pub async fn close(&self) -> SuiteResult<()> {
        let _ = self.send(Command::Close).await;
        let mut inner = self.inner.lock().await;
        let _ = inner.child.wait().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_serialize_to_the_wire_format() {
        let cmd = Command::Click {
            selector: "role=button[name=\"Login\"i]".to_string(),
            timeout_ms: 5000,
        };
        let json = serde_json::to_value(Envelope { id: 7, command: &cmd }).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["cmd"], "click");
        assert_eq!(json["selector"], "role=button[name=\"Login\"i]");
        assert_eq!(json["timeout_ms"], 5000);
    }

    #[test]
    fn arm_and_await_share_the_watch_id_field() {
        let arm = serde_json::to_value(&Command::ArmResponse {
            watch_id: 3,
            pattern: "/api/order".to_string(),
            method: "POST".to_string(),
        })
        .unwrap();
        assert_eq!(arm["cmd"], "arm_response");
        assert_eq!(arm["watch_id"], 3);
        assert_eq!(arm["method"], "POST");

        let join = serde_json::to_value(&Command::AwaitResponse { watch_id: 3 }).unwrap();
        assert_eq!(join["cmd"], "await_response");
        assert_eq!(join["watch_id"], 3);
    }

    #[test]
    fn wait_state_serializes_lowercase() {
        let cmd = serde_json::to_value(&Command::WaitSelector {
            selector: "#cart".to_string(),
            timeout_ms: 1000,
            state: WaitState::Hidden,
        })
        .unwrap();
        assert_eq!(cmd["state"], "hidden");
    }

    #[test]
    fn replies_tolerate_missing_optional_fields() {
        let reply: Reply = serde_json::from_str(r#"{"id":1,"ok":true}"#).unwrap();
        assert!(reply.ok);
        assert!(reply.value.is_null());
        assert!(reply.error.is_none());

        let failed: Reply =
            serde_json::from_str(r#"{"id":2,"ok":false,"error":"boom","kind":"timeout"}"#).unwrap();
        assert_eq!(failed.kind.as_deref(), Some("timeout"));
    }

    #[test]
    fn driver_script_covers_every_command() {
        for cmd in [
            "goto", "wait_idle", "click", "fill", "select_option", "check", "press",
            "is_visible", "is_checked", "inner_text", "input_value", "count", "wait_selector",
            "arm_response", "await_response", "current_url", "title", "close",
        ] {
            assert!(DRIVER_JS.contains(&format!("case '{cmd}'")), "driver missing {cmd}");
        }
        assert!(DRIVER_JS.contains("waitForResponse"));
        assert!(DRIVER_JS.contains("networkidle"));
    }
}
