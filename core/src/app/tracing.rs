use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable read for the console filter when none is set explicitly.
pub const CONSOLE_LOG: &str = "CONSOLE_LOG";

#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  with_ansi: Option<bool>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn with_ansi(mut self, with_ansi: bool) -> Self {
    self.with_ansi = Some(with_ansi);
    self
  }

  /// Installs a global subscriber that writes to stderr. Does nothing if a global subscriber is
  /// already installed.
  pub fn build(self) -> AppTracing {
    let console_filter = self.console_filter.unwrap_or_else(|| EnvFilter::try_from_env(CONSOLE_LOG).unwrap_or_default());
    AppTracing::new(console_filter, self.with_ansi.unwrap_or(true))
  }
}

pub struct AppTracing {
  installed: bool,
}
impl AppTracing {
  fn new(console_filter: EnvFilter, with_ansi: bool) -> Self {
    let layered = tracing_subscriber::registry();
    let layered = layered.with(
      tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(with_ansi)
        .with_filter(console_filter)
    );
    let installed = layered.try_init().is_ok();
    Self { installed }
  }

  /// Whether [build](AppTracingBuilder::build) installed the global subscriber.
  #[inline]
  pub fn is_installed(&self) -> bool { self.installed }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn second_install_is_ignored() {
    let _first = AppTracingBuilder::default().with_console_filter(EnvFilter::new("off")).build();
    let second = AppTracingBuilder::default().with_ansi(false).build();
    assert!(!second.is_installed());
  }
}
