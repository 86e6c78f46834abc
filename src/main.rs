mod config;
mod logging;
mod playlist;
mod runtime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    runtime::run()
}
