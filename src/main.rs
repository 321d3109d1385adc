use anyhow::Result;
use clap::{App as ClapApp, Arg};
use qingshi_tui::app::App;
use qingshi_tui::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Specify configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("model")
                .short("m")
                .long("model")
                .value_name("NAME")
                .help("Override the generation model")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("count")
                .short("n")
                .long("count")
                .value_name("N")
                .help("Override the number of recipes per request")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(model) = matches.value_of("model") {
        config.model = model.to_string();
    }
    if let Some(count) = matches.value_of("count") {
        config.recipe_count = count.parse()?;
    }
    App::start(config).await?;
    Ok(())
}
