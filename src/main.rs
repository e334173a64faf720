use clap::Parser;
use depth_point_annotation::capture::{FolderSource, FrameSource};
use depth_point_annotation::depth::LumaDepthProvider;
use depth_point_annotation::io::{click_script_from_json, write_report};
use depth_point_annotation::session::Session;
use depth_point_annotation::visualization::*;
use glam::Vec2;
use std::time::Instant;

#[derive(Parser)]
#[command(version, about, author)]
struct DpanCli {
    /// glob pattern for frame images, e.g. "data/frames/*.png"
    path: String,

    /// simulated click in overlay coordinates, e.g. --click 100,100
    #[arg(short, long = "click", value_name = "X,Y")]
    clicks: Vec<String>,

    /// JSON click script: {"clicks": [[x, y], ...]}
    #[arg(long)]
    clicks_file: Option<String>,

    /// output path for the annotated overlay
    #[arg(short, long, default_value = "overlay.png")]
    output: String,

    /// output path for the annotation report
    #[arg(long, default_value = "annotation_report.json")]
    report: String,
}

fn parse_click(s: &str) -> Vec2 {
    let (x, y) = s.split_once(',').expect("click must be X,Y");
    Vec2::new(
        x.trim().parse().expect("invalid click x"),
        y.trim().parse().expect("invalid click y"),
    )
}

fn main() {
    env_logger::init();
    let cli = DpanCli::parse();
    let mut clicks: Vec<Vec2> = cli.clicks.iter().map(|s| parse_click(s)).collect();
    if let Some(f) = &cli.clicks_file {
        clicks.extend(click_script_from_json(f).positions());
    }

    let recording = rerun::RecordingStreamBuilder::new("depth_point_annotation")
        .save("output.rrd")
        .unwrap();

    let mut source = FolderSource::new(&cli.path).unwrap();
    let frame = source.still().unwrap();
    let mut session = Session::new(LumaDepthProvider::default(), frame.width(), frame.height());
    session.set_ready();

    let now = Instant::now();
    if let Err(e) = session.capture(&frame) {
        log::error!("depth inference failed: {}", e);
    }
    println!("inference took {:.6} sec", now.elapsed().as_secs_f64());

    for click in clicks {
        session.handle_click(click);
    }

    let topic = "/cam0";
    log_frame_as_compressed(&recording, topic, &frame, image::ImageFormat::Png);
    log_overlay(&recording, topic, session.overlay().glyphs());

    session.overlay().image().save(&cli.output).unwrap();
    write_report(
        &cli.report,
        session.depth().is_warm(),
        session.overlay().glyphs(),
    );
    for g in session.overlay().glyphs() {
        println!(
            "({:.1}, {:.1}) depth: {}",
            g.center.x,
            g.center.y,
            g.label.as_deref().unwrap_or("n/a")
        );
    }
}
