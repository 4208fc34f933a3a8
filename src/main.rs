fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    cactus_fractal::cactus_controller("output/cactus.ppm")?;

    Ok(())
}
