//! This example runs box and lasso selections over a synthetic point cloud without a window,
//! comparing the CPU scan with the GPU mask pass.
//!
//! For example, to select among 5 million points in a 1920x1080 viewport, run:
//!
//! ```sh
//! cargo run --example headless --release -- --points 5000000 --viewport 1920,1080
//! ```
//!
//! To view more options, run with `--help`:
//!
//! ```sh
//! cargo run --example headless -- --help
//! ```

use clap::Parser;
use colored::Colorize;
use glam::*;

use wgpu_point_selection as ps;
use wgpu_point_selection::selection::{GpuSelectionEngine, GpuSelector, GpuSelectorConfig};

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "\
    Headless box and lasso selection over a synthetic point cloud.\n\
    \n\
    Drags a box and a star shaped lasso across the viewport, selecting with the CPU \
    and, if an adapter is available, with the GPU.\
    "
)]
struct Args {
    /// The number of points.
    #[arg(short, long, default_value_t = 1_000_000)]
    points: usize,

    /// The viewport size.
    #[arg(
        short,
        long,
        num_args = 2,
        value_delimiter = ',',
        default_value = "1280,720"
    )]
    viewport: Vec<u32>,

    /// The seed of the point cloud.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Skip the GPU selector.
    #[arg(long)]
    cpu_only: bool,
}

fn main() -> Result<(), ps::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let viewport = UVec2::from_slice(&args.viewport);

    log::info!("Generating {} points", args.points);
    let mut points = synthetic_cloud(args.points, args.seed);

    let camera = ps::CameraTransform::from_camera(
        &ps::Camera::new(
            vec3(0.0, 0.0, 3.0),
            Vec3::ZERO,
            0.1..1e4,
            60f32.to_radians(),
        ),
        viewport,
    );

    let center = viewport.as_vec2() / 2.0;
    let radius = viewport.min_element() as f32 * 0.4;
    let box_path = [center - radius, center, center + vec2(radius, radius * 0.5)];
    let lasso_path = star_path(center, radius, radius * 0.4, 7);

    let mut session = ps::SelectionSession::<GpuSelector>::new(
        ps::GestureController::new(ps::GestureMode::Box),
        ps::SelectionColors::default(),
    );

    print_header("CPU box");
    let result = drag(&mut session, &box_path, &mut points, &camera, viewport);
    print_result(result);

    session.gesture.mode = ps::GestureMode::Lasso;

    print_header("CPU lasso");
    let cpu = drag(&mut session, &lasso_path, &mut points, &camera, viewport);
    print_result(cpu);

    if args.cpu_only {
        return Ok(());
    }

    let Some((device, queue)) = pollster::block_on(request_device()) else {
        println!("{}", "No adapter available, skipping GPU selection".yellow());
        return Ok(());
    };

    session = session.with_gpu(GpuSelectionEngine::new(
        GpuSelector::new(&device, &queue, GpuSelectorConfig::default()),
        ps::SelectionColors::default(),
    ));
    session.init_points(&points)?;

    print_header("GPU lasso");
    let gpu = drag(&mut session, &lasso_path, &mut points, &camera, viewport);
    print_result(gpu);

    if let (Some(cpu), Some(gpu)) = (cpu, gpu) {
        let diff = cpu.selected_count.abs_diff(gpu.selected_count);
        let line = format!("CPU and GPU differ by {diff} points");
        if diff * 100 > cpu.total_count.max(1) {
            println!("{}", line.red());
        } else {
            println!("{}", line.green());
        }
    }

    session.release();

    Ok(())
}

/// Request a device without a surface.
async fn request_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            ..Default::default()
        })
        .await
        .inspect_err(|e| log::warn!("Failed to request adapter: {e}"))
        .ok()?;

    log::debug!("Requesting device");
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("Device"),
            required_limits: adapter.limits(),
            ..Default::default()
        })
        .await
        .inspect_err(|e| log::warn!("Failed to request device: {e}"))
        .ok()
}

/// Replay a pointer drag through the session.
fn drag(
    session: &mut ps::SelectionSession<GpuSelector>,
    path: &[Vec2],
    points: &mut ps::PointSet,
    camera: &ps::CameraTransform,
    viewport: UVec2,
) -> Option<ps::SelectionResult> {
    let (first, rest) = path.split_first()?;
    session.pointer_down(*first, ps::PointerButton::Primary, ps::Modifiers::SHIFT);
    for pos in rest {
        session.pointer_move(*pos);
    }
    session.pointer_up(points, camera, viewport)
}

fn star_path(center: Vec2, outer: f32, inner: f32, tips: usize) -> Vec<Vec2> {
    (0..tips * 2)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::PI / tips as f32;
            let radius = if i % 2 == 0 { outer } else { inner };
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}

fn synthetic_cloud(count: usize, seed: u64) -> ps::PointSet {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 40) as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
    };

    let positions = (0..count).map(|_| vec3(next(), next(), next())).collect();
    ps::PointSet::with_uniform_color(positions, ps::SelectionColors::default().base)
}

fn print_header(name: &str) {
    println!("{}", format!("== {name} ==").bold());
}

fn print_result(result: Option<ps::SelectionResult>) {
    match result {
        Some(result) => println!(
            "{} of {} points selected in {}",
            result.selected_count.to_string().green(),
            result.total_count,
            format!("{:.2} ms", result.elapsed_ms).cyan(),
        ),
        None => println!("{}", "Selection discarded".red()),
    }
}
