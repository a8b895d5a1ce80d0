use tracing_subscriber::EnvFilter;

/// The name of the environment variable which selects the log format
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Where the lambda runs. Only decides how logs are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Deployed lambda, logs go to cloudwatch as json
    #[default]
    Production,
    /// Deployed dev stack, same log format as production
    Develop,
    /// cargo lambda watch on a developer machine
    Local,
}

impl Environment {
    /// Reads `ENVIRONMENT`. Unset or unknown values are treated as production so a deployed
    /// lambda never falls back to the human readable format.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(ENVIRONMENT_VAR).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("dev") => Environment::Develop,
            Some("local") => Environment::Local,
            _ => Environment::Production,
        }
    }
}

/// Routes panics through tracing and installs the global subscriber for `environment`.
/// `RUST_LOG` filters in every environment.
pub fn init_tracing(environment: Environment) {
    std::panic::set_hook(Box::new(tracing_panic::panic_hook));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true);

    match environment {
        Environment::Local => builder.with_ansi(true).pretty().init(),
        Environment::Production | Environment::Develop => builder
            // the lambda log stream already timestamps every line and does not render ansi
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .flatten_event(true)
            .init(),
    }
}

/// Collects formatted log lines in memory so tests can assert on what was logged.
#[cfg(test)]
pub(crate) mod capture {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        pub(crate) fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
            let logs = self.clone();
            tracing_subscriber::fmt()
                .with_ansi(false)
                .without_time()
                .with_max_level(tracing::Level::TRACE)
                .with_writer(move || logs.clone())
                .finish()
        }

        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }
}
