use std::time::Duration;

/// Cumulative frame statistics, as collected by the application loop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats {
    /// Number of frames presented so far.
    pub frames: u64,

    /// Wall-clock time since the first frame.
    pub elapsed: Duration,
}

impl FrameStats {
    /// Average presentation rate over the whole run.
    ///
    /// Returns 0.0 before any time has elapsed.
    pub fn average_fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.frames as f64 / secs
    }
}

/// One-line description of the active surface configuration.
pub(crate) fn surface_summary(config: &wgpu::SurfaceConfiguration) -> String {
    format!(
        "{}x{} {:?}, {:?}, alpha {:?}",
        config.width, config.height, config.format, config.present_mode, config.alpha_mode
    )
}

/// One-line description of the run's frame statistics.
pub(crate) fn frame_summary(stats: &FrameStats) -> String {
    format!(
        "{} presented over {:.1}s ({:.1} fps avg)",
        stats.frames,
        stats.elapsed.as_secs_f64(),
        stats.average_fps()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_fps_divides_frames_by_elapsed() {
        let stats = FrameStats {
            frames: 120,
            elapsed: Duration::from_secs(2),
        };
        assert!((stats.average_fps() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn average_fps_is_zero_before_time_elapses() {
        let stats = FrameStats {
            frames: 10,
            elapsed: Duration::ZERO,
        };
        assert_eq!(stats.average_fps(), 0.0);
    }

    #[test]
    fn surface_summary_reports_extent_and_format() {
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: wgpu::TextureFormat::Bgra8UnormSrgb,
            width: 640,
            height: 480,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        let summary = surface_summary(&config);
        assert!(summary.contains("640x480"));
        assert!(summary.contains("Bgra8UnormSrgb"));
        assert!(summary.contains("Fifo"));
    }

    #[test]
    fn frame_summary_includes_count_and_rate() {
        let stats = FrameStats {
            frames: 300,
            elapsed: Duration::from_secs(5),
        };

        let summary = frame_summary(&stats);
        assert!(summary.contains("300 presented"));
        assert!(summary.contains("60.0 fps"));
    }
}
