use pody::{RenderError, XhtmlRenderer};
use std::env;

/// A simple CLI that prints the ODF markup of an XHTML file.
fn main() -> Result<(), RenderError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        let program = args.first().map_or("pody", String::as_str);
        eprintln!("Converts an XHTML fragment into OpenDocument text markup.");
        eprintln!();
        eprintln!("Usage: {} <path/to/fragment.xhtml> [path/to/config.json]", program);
        std::process::exit(1);
    }

    let renderer = match args.get(2) {
        Some(config_path) => XhtmlRenderer::from_config_file(config_path)?,
        None => XhtmlRenderer::default(),
    };
    let odt = renderer.render_file(&args[1])?;
    println!("{}", odt);
    Ok(())
}
