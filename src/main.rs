use std::path::PathBuf;

use anyhow::Context;
use pbr::ProgressBar;
use structopt::StructOpt;

use sphere_caster::{
    output::output_batch, parsing::load_json, render_batch, RenderConfig, SamplingMode,
    ShadingModel,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "sphere_caster", about = "renders a single lit sphere to png")]
struct Opt {
    /// JSON render config. Without one the built-in scene is rendered.
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,

    #[structopt(long)]
    width: Option<usize>,

    #[structopt(long)]
    height: Option<usize>,

    /// output file stem, images are written to `<output_dir>/<stem>.png`
    #[structopt(short, long)]
    output: Option<String>,

    #[structopt(long, parse(from_os_str), default_value = "output")]
    output_dir: PathBuf,

    #[structopt(long)]
    threads: Option<usize>,

    /// ambient | lambertian
    #[structopt(long)]
    shading: Option<ShadingModel>,

    /// corner | center
    #[structopt(long)]
    sampling: Option<SamplingMode>,

    /// ignore hits behind the observer
    #[structopt(long)]
    cull: bool,
}

impl Opt {
    fn apply(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(threads) = self.threads {
            config.threads = Some(threads);
        }
        if let Some(shading) = self.shading {
            config.settings.shading = shading;
        }
        if let Some(sampling) = self.sampling {
            config.settings.sampling = sampling;
        }
        if self.cull {
            config.settings.cull_behind_observer = true;
        }
    }
}

fn run(opt: Opt) -> anyhow::Result<()> {
    let mut config = match &opt.config {
        Some(path) => load_json::<RenderConfig, _>(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    opt.apply(&mut config);
    config.validate().context("refusing to render")?;

    let threads = config.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to build thread pool")?;
    tracing::info!(
        threads,
        width = config.width,
        height = config.height,
        "rendering {:?}",
        config.settings
    );

    let scene = config.scene();
    let sources = config.light_sources();
    // every pass is rendered before anything touches the disk
    let films = render_batch(&scene, config.width, config.height, &config.settings, &sources)?;

    let mut pb = ProgressBar::new(films.len() as u64);
    output_batch(
        &opt.output_dir,
        &config.output,
        config.is_batch(),
        &films,
        |_| {
            pb.inc();
        },
    )?;
    pb.finish_print("done");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    let opt = Opt::from_args();
    if let Err(e) = run(opt) {
        tracing::error!("{:?}", e);
        std::process::exit(1);
    }
}
