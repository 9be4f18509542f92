use anyhow::Result;
use clap::{Parser, Subcommand};
use lucent_cascade::config::{AppConfig, Resolution};
use lucent_cascade::renderer::{FrameFormat, RenderEngine, VideoEncoder};
use lucent_cascade::scenes;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lucent-cascade")]
#[command(about = "Declarative Motion Scene Engine", long_about = None)]
struct Cli {
    /// Scene to render with default settings
    #[arg(value_name = "SCENE")]
    scene: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available scenes
    List,

    /// Print a scene description as JSON
    Describe {
        /// Scene name
        scene: String,
    },

    /// Render a scene to an image sequence
    Render {
        /// Scene name
        scene: String,

        /// Output directory for frames
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Frames per second
        #[arg(long)]
        fps: Option<u32>,

        /// Output resolution, e.g. 1920x1080
        #[arg(long)]
        resolution: Option<String>,

        /// Frame file format
        #[arg(long, value_enum)]
        format: Option<FrameFormat>,

        /// Assemble the frames into an mp4 with ffmpeg afterwards
        #[arg(long)]
        encode: bool,
    },

    /// Write a default lucent.toml config file
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) => {
            println!("📋 Available scenes:");
            for decl in scenes::registry() {
                println!("  {:<10} {}", decl.name, decl.summary);
            }
        }
        Some(Commands::Describe { scene }) => {
            let Some(decl) = scenes::find(&scene) else {
                anyhow::bail!("Unknown scene: {}", scene);
            };
            println!("{}", serde_json::to_string_pretty(&decl.info())?);
        }
        Some(Commands::Render {
            scene,
            output,
            fps,
            resolution,
            format,
            encode,
        }) => {
            render_scene(&scene, output, fps, resolution, format, encode)?;
        }
        Some(Commands::InitConfig) => {
            let path = Path::new("lucent.toml");
            AppConfig::write_default(path)?;
            println!("📝 Wrote default config to {}", path.display());
        }
        None => match cli.scene {
            Some(scene) => render_scene(&scene, None, None, None, None, false)?,
            None => {
                println!("🎬 Lucent Cascade - Declarative Motion Scene Engine\n");
                println!("ℹ️  No scene given.");
                println!("   List scenes:   lucent-cascade list");
                println!("   Render one:    lucent-cascade render bounce");
            }
        },
    }

    Ok(())
}

fn render_scene(
    name: &str,
    output: Option<PathBuf>,
    fps: Option<u32>,
    resolution: Option<String>,
    format: Option<FrameFormat>,
    encode: bool,
) -> Result<()> {
    let config = AppConfig::load()?;

    let Some(decl) = scenes::find(name) else {
        anyhow::bail!("Unknown scene: {}. See `lucent-cascade list`.", name);
    };

    let fps = fps.unwrap_or(config.video.default_fps);
    let resolution = Resolution(resolution.unwrap_or(config.video.default_resolution));
    let (width, height) = resolution.dimensions();
    let format = format.unwrap_or(match config.renderer.frame_format.as_str() {
        "ppm" => FrameFormat::Ppm,
        _ => FrameFormat::Png,
    });
    let output_dir = output.unwrap_or(config.renderer.output_dir);

    println!(
        "🎬 Rendering scene '{}' ({}x{} at {} fps)",
        name, width, height, fps
    );

    let engine = RenderEngine::new(decl, width, height, fps, format);
    let stats = engine.render(&output_dir)?;

    println!("📊 Render stats: {}", stats.summary());

    if encode {
        let video_path = output_dir.join(format!("{}.mp4", name));
        VideoEncoder::encode(
            &engine.frame_pattern(&output_dir),
            &video_path,
            fps,
            width,
            height,
        )?;
    }

    println!("✅ Frames written to {}", output_dir.display());
    Ok(())
}
