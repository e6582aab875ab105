//! ArticleStyle entrypoint: prints defaults or launches the native UI.

use articlestyle::constants::{
    DEFAULT_LOG_FILTER, ENV_ARTICLE_PATH, ENV_BACKGROUND_COLOR, ENV_CONTENT_WIDTH, ENV_FONT_COLOR,
    ENV_FONT_FAMILY, ENV_FONT_SIZE, ENV_PANEL_INPUT_TRACE, ENV_PANEL_WIDTH,
};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.contains(&"--help".to_string()) {
        print_help();
        return Ok(());
    }

    if args.contains(&"--print-defaults".to_string()) {
        println!("{}", articlestyle::defaults_json()?);
        return Ok(());
    }

    launch()
}

#[cfg(feature = "gui")]
fn launch() -> anyhow::Result<()> {
    articlestyle::run().map_err(|err| anyhow::anyhow!("native app error: {}", err))
}

#[cfg(not(feature = "gui"))]
fn launch() -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; only --help and --print-defaults are available")
}

fn print_help() {
    println!("ArticleStyle\n");
    println!("Usage: articlestyle [OPTIONS]\n");
    println!("Options:");
    println!("  --print-defaults  Print the default style selection as JSON");
    println!("  --help            Show this help message");
    println!("\nEnvironment variables:");
    println!("  {:<26}Text file shown as the article (default: built-in sample)", ENV_ARTICLE_PATH);
    println!("  {:<26}Settings panel width in px, 280-640 (default: 400)", ENV_PANEL_WIDTH);
    println!("  {:<26}Initial font family (default: open-sans)", ENV_FONT_FAMILY);
    println!("  {:<26}Initial font size: 18, 25, 38 (default: 18)", ENV_FONT_SIZE);
    println!("  {:<26}Initial font color (default: black)", ENV_FONT_COLOR);
    println!("  {:<26}Initial background color (default: white)", ENV_BACKGROUND_COLOR);
    println!("  {:<26}Initial content width: 600, 800, 1394 (default: 800)", ENV_CONTENT_WIDTH);
    println!("  {:<26}Log every dismissal input (Escape, outside press)", ENV_PANEL_INPUT_TRACE);
    println!("  {:<26}Log filter (default: {})", "RUST_LOG", DEFAULT_LOG_FILTER);
}
