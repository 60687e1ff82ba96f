//! Plotting observer for trajectories and attenuation curves.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use pendulum_core::Observer;
use pendulum_solvers::{attenuation, transient::semi_implicit_euler};

/// How traces are arranged in the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// All traces share one set of axes.
    #[default]
    Overlay,

    /// Each trace gets its own panel, stacked top to bottom.
    Stacked,
}

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Trajectory").x_label("t").stacked())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    legend: bool,
    layout: Layout,
}

impl ShowConfig {
    /// Creates a new `ShowConfig`: no title, no axis label, no legend, overlaid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Labels the x-axis of every panel.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Draws each trace in its own panel, labeled on the y-axis.
    #[must_use]
    pub fn stacked(mut self) -> Self {
        self.layout = Layout::Stacked;
        self
    }
}

/// Extracts plottable data from a solver event.
///
/// Implemented for the trajectory event (time against both angles and both
/// angular speeds) and the attenuation event (damping against attenuation
/// time), so a [`PlotObserver`] can be passed straight to either solver.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<4> for semi_implicit_euler::Event {
    fn x(&self) -> Option<f64> {
        Some(self.sample.time)
    }

    fn traces(&self) -> [Option<f64>; 4] {
        let state = &self.sample.state;
        [
            Some(state.phi[0]),
            Some(state.phi[1]),
            Some(state.angular_speed[0]),
            Some(state.angular_speed[1]),
        ]
    }
}

impl Plottable<1> for attenuation::Event {
    fn x(&self) -> Option<f64> {
        Some(self.point.damping)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.point.time)]
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names, then either pass
/// `&mut PlotObserver` as the solver observer for events that implement
/// [`Plottable<N>`][Plottable], or call [`record`][PlotObserver::record] from
/// a closure for anything else.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<4>::new(["φ1", "φ2", "ω1", "ω2"]);
/// semi_implicit_euler::solve_for_duration(&mut model, 20.0, &mut obs)?;
/// obs.show(ShowConfig::new().title("Trajectory").stacked())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Returns the points recorded for trace `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn points(&self, index: usize) -> &[[f64; 2]] {
        &self.data[index]
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let panels: Vec<&[(String, Vec<[f64; 2]>)]> = match self.config.layout {
            Layout::Overlay => vec![self.traces.as_slice()],
            Layout::Stacked => self.traces.chunks(1).collect(),
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            #[allow(clippy::cast_precision_loss)]
            let height = ui.available_height() / panels.len().max(1) as f32;

            for (id, traces) in panels.iter().enumerate() {
                let mut plot = Plot::new(("plot_observer", id)).height(height);
                if self.config.legend {
                    plot = plot.legend(Legend::default());
                }
                if let Some(label) = &self.config.x_label {
                    plot = plot.x_axis_label(label.clone());
                }
                if let [(name, _)] = traces {
                    plot = plot.y_axis_label(name.clone());
                }

                plot.show(ui, |plot_ui| {
                    for (name, points) in *traces {
                        let plot_points: PlotPoints = points.iter().copied().collect();
                        plot_ui.line(Line::new(plot_points).name(name));
                    }
                });
            }
        });
    }
}
