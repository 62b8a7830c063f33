use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use isocube::{
    render::svg::quads_to_svg, timed, CubeGrid, QuadBuffer, SceneConfig,
    Timeline, TouchEvent,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for drawing grids of pseudo-3D cubes, and replaying touches on them
#[derive(Debug, StructOpt)]
#[structopt(name = "isocube")]
struct Opt {
    /// Path to a config file that defines the grid to be drawn. Supported
    /// formats: JSON, TOML. If not given, the default config is used
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// If given, the drawn grid will be saved to this directory. The exact
    /// files that appear in the directory are defined by the output formats.
    /// See `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output the grid in. Supported formats:
    ///
    /// cfg - The full config object used for the grid, in TOML format
    ///
    /// json - JSON representation of the config and every cube's faces
    ///
    /// svg - 2D rendering of the canvas, one file per frame
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// Touch events to replay on the grid, in order. Each one looks like
    /// `action@x,y`, where action is primary/left or secondary/right, and
    /// x,y is a point on the canvas (y-up)
    #[structopt(short, long)]
    touch: Vec<TouchEvent>,

    /// Seconds to wait between consecutive touches
    #[structopt(long, default_value = "0")]
    touch_interval: f64,

    /// Number of SVG frames to render, spread evenly from the first touch
    /// until every animation has finished. Only relevant for SVG output
    #[structopt(long, default_value = "1")]
    frames: usize,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the grid's full config in a human-readable file
    Cfg,
    /// Export the config and cube geometry as JSON
    Json,
    /// Render the canvas as a 2D SVG, once per frame
    Svg,
    /* If you change this, make sure to update the help text for
     * `--output-formats`! */
}

impl OutputFormat {
    fn file_ext(self) -> &'static str {
        match self {
            Self::Cfg => "toml",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }
}

/// Everything produced by a run: the grid, the canvas it was drawn on, and
/// the timeline holding any animations from replayed touches
struct Scene {
    grid: CubeGrid,
    canvas: QuadBuffer,
    timeline: Timeline,
}

impl Scene {
    /// Get the times at which SVG frames should be sampled
    fn frame_times(&self, frames: usize) -> Vec<f64> {
        let end = self.timeline.end_time();
        match frames {
            0 => Vec::new(),
            1 => vec![end],
            _ => (0..frames)
                .map(|i| end * i as f64 / (frames - 1) as f64)
                .collect(),
        }
    }

    /// Render the canvas as it appears at a point in time
    fn render_frame(&self, time: f64) -> String {
        let mut canvas = self.canvas.clone();
        let mut timeline = self.timeline.clone();
        timeline.seek(time);
        timeline.apply(&mut canvas);
        quads_to_svg(&canvas).to_string()
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<SceneConfig> {
    // Load config
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Build the grid, draw it, and replay every touch against it
fn build_scene(
    config: SceneConfig,
    touches: &[TouchEvent],
    touch_interval: f64,
) -> anyhow::Result<Scene> {
    let mut grid = CubeGrid::new(config)?;
    let mut canvas = QuadBuffer::new();
    let mut timeline = Timeline::new();
    grid.draw(&mut canvas);

    for (i, touch) in touches.iter().enumerate() {
        if i > 0 {
            timeline.advance(touch_interval);
        }
        match grid.touched(*touch, &mut canvas, &mut timeline) {
            Some(position) => {
                info!("Touch {} hit cube {}", touch, position)
            }
            None => info!("Touch {} didn't hit anything", touch),
        }
    }

    Ok(Scene {
        grid,
        canvas,
        timeline,
    })
}

/// Generate an output form of the scene in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    scene: &Scene,
    frames: usize,
) -> anyhow::Result<()> {
    fn generate_files(
        output_format: OutputFormat,
        scene: &Scene,
        frames: usize,
    ) -> Vec<(String, Vec<u8>)> {
        match output_format {
            OutputFormat::Cfg => {
                // Serialize just the grid config via toml
                let bytes = toml::to_string_pretty(scene.grid.config())
                    // Panics only if config format isn't serializable (a bug)
                    .expect("error serializing config")
                    .into_bytes();
                vec![("grid".into(), bytes)]
            }
            OutputFormat::Json => {
                // Serialize the entire grid via JSON
                vec![("grid".into(), scene.grid.to_json().into())]
            }
            OutputFormat::Svg => scene
                .frame_times(frames)
                .into_iter()
                .enumerate()
                .map(|(i, time)| {
                    (format!("frame_{:03}", i), scene.render_frame(time).into())
                })
                .collect(),
        }
    }

    timed!(
        format!("Generating {} output in {:?}", output_format, output_dir),
        log::Level::Info,
        {
            for (name, bytes) in generate_files(output_format, scene, frames) {
                let output_file_path =
                    output_dir.join(name).with_extension(output_format.file_ext());
                let mut file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(&output_file_path)
                    .with_context(|| {
                        format!(
                            "error opening output file {:?}",
                            &output_file_path
                        )
                    })?;
                file.write_all(&bytes).with_context(|| {
                    format!("error writing to file {:?}", &output_file_path)
                })?;
            }
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    if !(opt.touch_interval.is_finite() && opt.touch_interval >= 0.0) {
        bail!(
            "touch interval must be a non-negative number of seconds, got {}",
            opt.touch_interval
        );
    }

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => {
            info!("No config given, using defaults");
            SceneConfig::default()
        }
    };
    let scene = build_scene(config, &opt.touch, opt.touch_interval)?;

    // If an output dir was specified, write out output format(s) there
    if let Some(output_dir) = opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        fs::create_dir_all(&output_dir)?;

        for output_format in opt.output_formats {
            gen_output(&output_dir, output_format, &scene, opt.frames)?;
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use isocube::{GridConfig, Seed};

    fn scene(touches: &[&str], touch_interval: f64) -> Scene {
        let config = SceneConfig {
            seed: Seed::Int(0),
            grid: GridConfig {
                depth: 1,
                width: 1,
                height: 1,
            },
            ..Default::default()
        };
        let touches: Vec<TouchEvent> =
            touches.iter().map(|touch| touch.parse().unwrap()).collect();
        build_scene(config, &touches, touch_interval).unwrap()
    }

    #[test]
    fn test_output_format() {
        assert!(matches!("svg".parse::<OutputFormat>(), Ok(OutputFormat::Svg)));
        assert!(matches!("cfg".parse::<OutputFormat>(), Ok(OutputFormat::Cfg)));
        assert!("stl".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_frame_times() {
        // No touches means nothing to animate
        let idle = scene(&[], 0.0);
        assert_eq!(idle.frame_times(3), vec![0.0, 0.0, 0.0]);
        assert!(idle.frame_times(0).is_empty());

        // Default cube sits at (160, 5) with size 40
        let touched = scene(&["primary@170,20", "primary@170,20"], 0.5);
        let end = touched.timeline.end_time();
        assert!(end > 0.8);
        assert_eq!(touched.frame_times(1), vec![end]);
        let times = touched.frame_times(5);
        assert_eq!(times.len(), 5);
        assert_eq!(times[0], 0.0);
        assert_eq!(times[4], end);
    }

    #[test]
    fn test_render_frame() {
        let touched = scene(&["primary@170,20"], 0.0);
        let rest = touched.render_frame(0.0);
        assert_eq!(rest, touched.render_frame(touched.timeline.end_time()));
        assert_ne!(rest, touched.render_frame(0.4));
    }
}
