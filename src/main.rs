use getopts::Options;
use log::*;
use sphtrace::camera::{view_transform, Camera};
use sphtrace::example_scenes;
use sphtrace::renderer::{RenderConfig, Renderer};
use sphtrace::world::World;
use sphtrace::*;
use std::sync::Arc;

struct Args {
    width: usize,
    height: usize,
    fov_degree: f64,
    scene: String,
    output: String,
    config: RenderConfig,
}

fn parse_args() -> std::result::Result<Option<Args>, String> {
    let argv: Vec<String> = std::env::args().collect();
    let mut opts = Options::new();
    opts.optopt("", "width", "image width in pixels (default 320)", "PX");
    opts.optopt("", "height", "image height in pixels (default 180)", "PX");
    opts.optopt("", "fov", "field of view in degrees (default 60)", "DEG");
    opts.optopt("s", "scene", "default | spheres (default spheres)", "NAME");
    opts.optopt("t", "threads", "number of render threads", "N");
    opts.optopt("o", "output", "output PPM path (default output.ppm)", "FILE");
    opts.optflag("h", "help", "print this help");

    let matches = opts.parse(&argv[1..]).map_err(|e| e.to_string())?;
    if matches.opt_present("h") {
        let brief = format!("Usage: {} [options]", argv[0]);
        print!("{}", opts.usage(&brief));
        return Ok(None);
    }

    fn parse_or<T: std::str::FromStr>(
        m: &getopts::Matches,
        name: &str,
        default: T,
    ) -> std::result::Result<T, String> {
        match m.opt_str(name) {
            Some(s) => s
                .parse()
                .map_err(|_| format!("invalid value for --{}: {}", name, s)),
            None => Ok(default),
        }
    }

    let mut config = RenderConfig::default();
    config.nthread = parse_or(&matches, "threads", config.nthread)?;

    Ok(Some(Args {
        width: parse_or(&matches, "width", 320)?,
        height: parse_or(&matches, "height", 180)?,
        fov_degree: parse_or(&matches, "fov", 60.0)?,
        scene: matches.opt_str("scene").unwrap_or_else(|| "spheres".to_string()),
        output: matches
            .opt_str("output")
            .unwrap_or_else(|| "output.ppm".to_string()),
        config,
    }))
}

fn make_scene(args: &Args) -> Result<(Camera, World)> {
    let fov = args.fov_degree.to_radians();
    match args.scene.as_str() {
        "default" => {
            let camera = Camera::new(args.width, args.height, fov).with_transform(
                view_transform(
                    &point(0.0, 0.0, -5.0),
                    &point(0.0, 0.0, 0.0),
                    &vector(0.0, 1.0, 0.0),
                )?,
            )?;
            Ok((camera, example_scenes::default_world()?))
        }
        _ => example_scenes::three_spheres(args.width, args.height, fov),
    }
}

fn run(args: Args) -> Result<()> {
    info!(
        "scene {} at {}x{}, fov {} degrees, {} threads",
        args.scene, args.width, args.height, args.fov_degree, args.config.nthread
    );
    let (camera, world) = make_scene(&args)?;
    let renderer = Renderer::new(args.config);
    let image = renderer.render_with(Arc::new(world), &camera, |completed, total| {
        if completed * 10 / total != (completed - 1) * 10 / total {
            info!("{}/{} scanlines", completed, total);
        }
    })?;
    image.write_ppm(&args.output)?;
    info!("wrote {}", args.output);
    Ok(())
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(2);
        }
    };
    if args.scene != "default" && args.scene != "spheres" {
        warn!("unknown scene {}, rendering spheres", args.scene);
    }

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
