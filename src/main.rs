use anyhow::{Context, Result};
use clap::Parser;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

use hand_pointer::action::system::EnigoDispatcher;
use hand_pointer::camera::{OpenCvCamera, ReadFailures};
use hand_pointer::config::Config;
use hand_pointer::detector::HandDetector;
use hand_pointer::engine::{EngineSettings, GestureEngine};
use hand_pointer::fps::FpsCounter;
use hand_pointer::render::{active_tips, draw_overlays, MinifbRenderer};

/// ハンドジェスチャーでマウスとウィンドウを操作する
#[derive(Parser, Debug)]
#[command(name = "hand-pointer")]
#[command(version, about, long_about = None)]
struct Args {
    /// 設定ファイルのパス
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// ログを詳細にする (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(args: &Args) {
    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("hand_pointer={},ort=warn,warn", log_level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    info!("hand-pointer {}", env!("GIT_VERSION"));

    let config = Config::load_or_default(&args.config);

    // カメラ
    let mut camera = OpenCvCamera::open_with_resolution(
        config.camera.index,
        Some(config.camera.width),
        Some(config.camera.height),
    )
    .context("Failed to open camera")?;
    let (mut width, mut height) = camera.resolution();

    // 検出器
    info!("Loading hand model from {}", config.detector.model_path);
    let mut detector = HandDetector::new(&config.detector)?;

    // 入力操作
    let mut dispatcher = EnigoDispatcher::new()?;
    let screen = dispatcher.screen_size()?;
    info!("Screen: {}x{}", screen.width, screen.height);

    let mut engine = GestureEngine::new(width, height, screen, EngineSettings::default())?;
    let mut area = *engine.tracking_area();
    info!(
        "Tracking area: ({}, {}) - ({}, {})",
        area.left, area.top, area.right, area.bottom
    );

    let mut renderer = if config.debug.view {
        Some(MinifbRenderer::new("hand-pointer", width as usize, height as usize)?)
    } else {
        None
    };

    let mut failures = ReadFailures::new(config.camera.max_read_failures);
    let mut fps = FpsCounter::new();
    let mut last_report = Instant::now();
    let mut last_gesture = None;

    info!("Running. Press q in the debug view or Ctrl+C to quit");

    loop {
        if let Some(r) = &renderer {
            if !r.is_open() {
                break;
            }
        }

        let mut frame = match camera.read_frame() {
            Ok(f) => {
                failures.record_success();
                f
            }
            Err(e) => {
                warn!("Frame capture error: {}", e);
                if failures.record_failure() {
                    error!("{} consecutive capture failures", failures.consecutive());
                    anyhow::bail!("Camera stopped delivering frames");
                }
                continue;
            }
        };

        // 報告値と実フレームが違えばトラッキング領域だけを作り直す
        if camera.resolution() != (width, height) {
            (width, height) = camera.resolution();
            warn!("Frame size changed to {}x{}, rebuilding tracking area", width, height);
            engine.set_frame_size(width, height)?;
            area = *engine.tracking_area();
        }

        let snapshot = match detector.detect(&frame) {
            Ok(s) => s,
            Err(e) => {
                warn!("Detection error: {:#}", e);
                continue;
            }
        };

        let outcome = engine.process_frame(&snapshot, &mut dispatcher)?;
        if outcome.gesture.is_some() {
            last_gesture = outcome.gesture;
        }

        fps.tick(Instant::now());

        if let Some(r) = renderer.as_mut() {
            draw_overlays(&mut frame, &area, &fps.label(), &outcome)?;
            r.draw_frame(&frame)?;
            if snapshot.is_found() {
                r.draw_hand(&snapshot);
                if let Some(gesture) = outcome.gesture {
                    r.highlight(&snapshot, active_tips(gesture));
                }
            }
            r.update()?;
        }

        if last_report.elapsed() >= Duration::from_secs(1) {
            let window = engine.window_state();
            let window = if window.is_maximized() {
                "maximized"
            } else if window.is_minimized() {
                "minimized"
            } else {
                "-"
            };
            info!(
                "{}, gesture: {}, window: {}, tracking: {}",
                fps.label(),
                last_gesture.map(|g| g.name()).unwrap_or("-"),
                window,
                detector.is_tracking()
            );
            last_report = Instant::now();
        }
    }

    info!("Shutting down...");
    Ok(())
}
