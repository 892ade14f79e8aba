use anyhow::Context;

use bowlsaver::{init_logging, CliOptions, Config, BUILD_DATE, USAGE, VERSION};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let options = CliOptions::parse(std::env::args().skip(1))?;
    if options.show_help {
        print!("{USAGE}");
        return Ok(());
    }

    tracing::info!(version = VERSION, build_date = BUILD_DATE, "starting bowlsaver");

    let config = match &options.config_path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };

    let mut state = config.build_state();
    options.apply(&mut state);

    let report = serde_json::json!({
        "cut": state.cut(),
        "history": state.history().as_slice(),
        "readout": state.readout(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
