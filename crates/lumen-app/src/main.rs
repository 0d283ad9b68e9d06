use anyhow::{Context, Result};
use clap::Parser;

use lumen_app::cli::{Args, BackendArg};
use lumen_app::{describe_scene, App, BootstrapMesh, Viewer, ViewerConfig};
use lumen_engine::device::{GpuInit, HeadlessGpu};
use lumen_engine::engine::NullEngine;
use lumen_engine::logging::{init_logging, LoggingConfig};
use lumen_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..Default::default()
    });

    let app = App::new().mesh(if args.sphere {
        BootstrapMesh::Sphere
    } else {
        BootstrapMesh::Box
    });

    match args.backend {
        BackendArg::Null => {
            let mut engine = NullEngine::new();
            let scene = pollster::block_on(app.create_scene(&mut engine))?;
            println!("{}", describe_scene(&scene));
        }

        BackendArg::Headless => {
            let gpu = pollster::block_on(HeadlessGpu::new(GpuInit::default()))
                .context("headless GPU initialization failed")?;
            let info = gpu.adapter_info();

            let mut engine = gpu.engine();
            let scene = pollster::block_on(app.create_scene(&mut engine))?;
            println!("{} on {} ({:?})", describe_scene(&scene), info.name, info.backend);
        }

        BackendArg::Window => {
            Runtime::run(
                RuntimeConfig::default(),
                GpuInit::default(),
                Viewer::new(app, ViewerConfig::default()),
            )?;
        }
    }

    Ok(())
}
