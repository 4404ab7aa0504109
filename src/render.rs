//! Image rendering: drives the tracer over every device pixel.

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::canvas::PixelSink;
use crate::color::Color;
use crate::interval::Interval;
use crate::scene::{Scene, TraceStats, DEFAULT_RECURSION_DEPTH};
use crate::vector::Vector;

/// Primary rays start at the projection plane (t = 1).
pub const PRIMARY_MIN_T: f64 = 1.0;

const PROGRESS_TEMPLATE: &str = "{bar:40} {pos}/{len} columns ETA: {eta}";

/// Scans the device pixels of a sink and traces one ray per pixel.
///
/// Pixels are visited column by column, x from `-W/2` to `W/2` and y from
/// `-H/2` to `H/2`, both inclusive. In parallel mode whole columns are traced
/// on the rayon pool and then written in the same order, so the sink sees an
/// identical sequence of writes either way.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Maximum number of mirror bounces per primary ray
    pub recursion_depth: u32,
    /// Trace columns on the rayon thread pool
    pub parallel: bool,
    /// Show a progress bar on stderr
    pub show_progress: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            recursion_depth: DEFAULT_RECURSION_DEPTH,
            parallel: false,
            show_progress: true,
        }
    }
}

impl Renderer {
    /// Sequential renderer with the default recursion depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recursion depth.
    pub fn with_recursion_depth(mut self, depth: u32) -> Self {
        self.recursion_depth = depth;
        self
    }

    /// Enable or disable column-parallel tracing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable or disable the progress bar.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Render `scene` into `sink`, returning the number of queries issued.
    pub fn render(&self, scene: &Scene, sink: &mut dyn PixelSink) -> TraceStats {
        let width = sink.width();
        let height = sink.height();
        let half_width = (width / 2) as i64;
        let half_height = (height / 2) as i64;

        info!(
            "Rendering {}x{} (depth {}, {})...",
            width,
            height,
            self.recursion_depth,
            if self.parallel {
                format!("{} threads", rayon::current_num_threads())
            } else {
                "sequential".to_string()
            }
        );
        let generation_start = std::time::Instant::now();
        let pb = self.progress_bar((2 * half_width + 1) as u64);

        let trace_column = |x: i64| -> (Vec<Color>, TraceStats) {
            let mut stats = TraceStats::default();
            let column = (-half_height..=half_height)
                .map(|y| self.trace_pixel(scene, x, y, width, height, &mut stats))
                .collect();
            pb.inc(1);
            (column, stats)
        };

        let mut total = TraceStats::default();
        if self.parallel {
            let columns: Vec<(Vec<Color>, TraceStats)> =
                (-half_width..=half_width).into_par_iter().map(trace_column).collect();
            for (x, (column, stats)) in (-half_width..=half_width).zip(columns) {
                write_column(sink, x, half_height, &column);
                total += stats;
            }
        } else {
            for x in -half_width..=half_width {
                let (column, stats) = trace_column(x);
                write_column(sink, x, half_height, &column);
                total += stats;
            }
        }

        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());
        debug!("Traced {} rays and {} shadow rays", total.rays, total.shadow_rays);

        total
    }

    fn trace_pixel(&self, scene: &Scene, x: i64, y: i64, width: u32, height: u32, stats: &mut TraceStats) -> Color {
        let ray = scene.primary_ray(Vector::xy(x as f64, y as f64), width, height);
        scene.trace_ray_counted(&ray, Interval::unbounded(PRIMARY_MIN_T), self.recursion_depth, stats)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len);
        match ProgressStyle::with_template(PROGRESS_TEMPLATE) {
            Ok(style) => pb.set_style(style),
            Err(e) => warn!("Invalid progress bar template: {}", e),
        }
        pb
    }
}

fn write_column(sink: &mut dyn PixelSink, x: i64, half_height: i64, column: &[Color]) {
    for (y, color) in (-half_height..=half_height).zip(column) {
        sink.put_pixel(x as f64, y as f64, *color);
    }
}
