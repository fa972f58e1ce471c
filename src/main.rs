fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up logging; level comes from RUST_LOG
    env_logger::init();

    // Save dialogs run as tokio tasks
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    circle_points::run_app()?;
    Ok(())
}
