//! Privileged helper for the embedded PostgreSQL used by the integration tests.
//!
//! When the test process runs as root, `pg_embedded_setup_unpriv` drops
//! privileges by re-executing this binary as `pg_worker <operation> <payload>`.
//! The payload is the JSON form of [`WorkerPayload`].

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use color_eyre::eyre::{Context, Report, Result, bail, eyre};
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
use postgresql_embedded::PostgreSQL;
use tokio::runtime::Builder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operation {
    Setup,
    Start,
    Stop,
}

impl FromStr for Operation {
    type Err = Report;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "setup" => Ok(Self::Setup),
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            other => Err(eyre!(
                "unknown pg_worker operation '{other}'; expected setup, start or stop"
            )),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Setup => "setup",
            Self::Start => "start",
            Self::Stop => "stop",
        })
    }
}

#[derive(Debug)]
struct WorkerInvocation {
    operation: Operation,
    payload_path: PathBuf,
}

impl WorkerInvocation {
    fn from_args(args: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let mut args = args.into_iter().skip(1);
        let operation = args
            .next()
            .ok_or_else(|| eyre!("missing operation argument"))?
            .to_string_lossy()
            .parse()?;
        let payload_path = args
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| eyre!("missing payload path argument"))?;
        if let Some(extra) = args.next() {
            bail!(
                "unexpected extra argument: {}; expected only operation and payload path",
                extra.to_string_lossy()
            );
        }
        Ok(Self {
            operation,
            payload_path,
        })
    }

    fn load_payload(&self) -> Result<WorkerPayload> {
        let path = &self.payload_path;
        let raw = fs::read(path).with_context(|| format!("reading worker payload {path:?}"))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing worker payload {path:?}"))
    }
}

fn apply_environment(overrides: Vec<(String, Option<PlainSecret>)>) {
    for (key, value) in overrides {
        // SAFETY: runs before the tokio runtime spawns any thread.
        match value {
            Some(value) => unsafe { env::set_var(&key, value.expose()) },
            None => unsafe { env::remove_var(&key) },
        }
    }
}

fn run(invocation: &WorkerInvocation) -> Result<()> {
    let payload = invocation.load_payload()?;
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| Report::new(err).wrap_err("rebuilding postgres settings"))?;
    apply_environment(payload.environment);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("building pg_worker runtime")?;
    let operation = invocation.operation;
    let mut postgres = PostgreSQL::new(settings);
    runtime
        .block_on(async move {
            match operation {
                Operation::Setup => postgres.setup().await,
                Operation::Start => postgres.start().await,
                Operation::Stop => postgres.stop().await,
            }
        })
        .with_context(|| format!("postgres {operation} failed"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let invocation = WorkerInvocation::from_args(env::args_os())?;
    run(&invocation)
}
