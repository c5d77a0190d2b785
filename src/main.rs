use canopy::app::{AppResult, Dashboard};

fn main() -> AppResult {
    env_logger::init();

    let dashboard = Dashboard::new()?;
    log::info!("starting metric tree dashboard");
    dashboard.run("Mobile Publishing Metric Tree")?;
    Ok(())
}
