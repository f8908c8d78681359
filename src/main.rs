use std::env;
use std::path::Path;

use ecg_trace::config::{load_config, TraceConfig, DEFAULT_CONFIG_FILE};
use ecg_trace::{TraceError, WaveformTracer};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), TraceError> {
    let config = match env::args().nth(1) {
        // An explicitly named config must load.
        Some(path) => load_config(Path::new(&path))?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                load_config(default)?
            } else {
                log::debug!("no {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                TraceConfig::default()
            }
        }
    };

    let tracer = WaveformTracer::new(config);
    let report = tracer.run()?;

    let values: Vec<String> = report
        .samples
        .iter()
        .map(|&v| (v as i64).to_string())
        .collect();
    println!("[{}]", values.join(", "));
    println!("ECG plot saved to: {}", report.plot_path.display());

    Ok(())
}
