use anyhow::Result;
use daybook::config::load_settings;
use daybook::CalendarRunner;
use env_logger::{Env, Target};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    let settings = load_settings()?;
    let runner = CalendarRunner::new(settings);
    let report = runner.run()?;

    if report.has_errors() {
        log::warn!(
            "Calendar at {} updated with errors: {}",
            runner.layout().root().display(),
            report
        );
    } else {
        log::info!(
            "Calendar at {} is up to date: {}",
            runner.layout().root().display(),
            report
        );
    }
    Ok(())
}
