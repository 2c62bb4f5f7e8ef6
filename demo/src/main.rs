use std::error::Error;

use tracing::{debug, info};

use outcome_core::app::env;
use outcome_core::app::tracing::AppTracingBuilder;

use crate::scenario::Scenarios;

mod scenario;

fn main() -> Result<(), Box<dyn Error>> {
  env::load_dotenv_into_env();
  let _tracing = AppTracingBuilder::default().build();

  let seed = env::env_or_default("OUTCOME_DEMO_SEED", 5i64)?;
  debug!(seed, "running scenarios");

  let scenarios = Scenarios::new(seed);
  let reports = scenarios.run()?;
  for report in &reports {
    info!(scenario = report.name, "{}", report.summary);
  }
  info!("ran {} scenarios", reports.len());
  Ok(())
}
