//! Render a flyer from a JSON config.
//!
//!     cargo run --example render_flyer -- [config.json] [tenant] [out.pdf]
//!
//! Asset lookup follows `UPLOAD_BASE` and `STATIC_DIR`; set
//! `RUST_LOG=debug` to see which blocks were skipped.

use flyer_engine::{EngineSettings, FlyerConfig, FlyerEngine, CONTENT_TYPE};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .unwrap_or_else(|| "demos/rust/sample_flyer.json".to_string());
    let tenant = args.next().unwrap_or_else(|| "demo".to_string());

    let json = std::fs::read_to_string(&config_path).unwrap();
    let config: FlyerConfig = serde_json::from_str(&json).unwrap();
    let out = args
        .next()
        .unwrap_or_else(|| format!("demos/output/{}", FlyerEngine::file_name(&config)));

    let engine = FlyerEngine::from_settings(&EngineSettings::from_env());
    let flyer = engine.render(&tenant, &config).unwrap();

    for block in &flyer.blocks {
        println!(
            "{:<14} {:>7.1} .. {:>7.1}  codes={} images={}",
            format!("{:?}", block.kind),
            block.top,
            block.bottom,
            block.codes.len(),
            block.images
        );
    }

    if let Some(dir) = std::path::Path::new(&out).parent() {
        std::fs::create_dir_all(dir).unwrap();
    }
    std::fs::write(&out, &flyer.bytes).unwrap();
    println!("Wrote {} ({}, {} bytes)", out, CONTENT_TYPE, flyer.bytes.len());
}
