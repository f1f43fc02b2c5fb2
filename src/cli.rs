use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Path to a scene session file to drive
    #[arg(short = 's', long = "scene")]
    pub scene_file: Option<String>,

    /// Override the default config file path
    #[arg(short = 'c', long = "config")]
    pub config_file: Option<String>,
}
